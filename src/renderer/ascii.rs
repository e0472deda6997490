//! Text renderer for terminals and logs
//!
//! Samples the world at the centre of each character cell. Stateless: every
//! frame is built from the snapshot alone.

use super::Renderer;
use crate::sim::{GamePhase, Snapshot};

const ACTOR: char = '@';
const OBSTACLE: char = '#';
const GROUND: char = '=';
const SKY: char = ' ';

#[derive(Debug, Clone)]
pub struct AsciiRenderer {
    cols: usize,
    rows: usize,
}

impl Default for AsciiRenderer {
    fn default() -> Self {
        Self { cols: 50, rows: 24 }
    }
}

impl AsciiRenderer {
    pub fn new(cols: usize, rows: usize) -> Self {
        Self {
            cols: cols.max(1),
            rows: rows.max(1),
        }
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Render a snapshot to a multi-line string: a status line, then the grid
    pub fn frame(&self, snap: &Snapshot) -> String {
        let total_height = snap.world_height + snap.ground_height;
        let cell_w = snap.world_width / self.cols as f32;
        let cell_h = total_height / self.rows as f32;

        let mut grid = vec![vec![SKY; self.cols]; self.rows];
        for (r, line) in grid.iter_mut().enumerate() {
            let y = (r as f32 + 0.5) * cell_h;
            for (c, cell) in line.iter_mut().enumerate() {
                let x = (c as f32 + 0.5) * cell_w;
                *cell = if y >= snap.world_height {
                    GROUND
                } else if snap.obstacles.iter().any(|o| {
                    let b = &o.bounds;
                    x >= b.left && x < b.right && y >= b.top && y < b.bottom
                }) {
                    OBSTACLE
                } else {
                    SKY
                };
            }
        }

        // Actor always shows, even when smaller than a cell
        let ac = (snap.actor.pos.x / cell_w).floor();
        let ar = (snap.actor.pos.y / cell_h).floor();
        if ac >= 0.0 && ar >= 0.0 && (ac as usize) < self.cols && (ar as usize) < self.rows {
            grid[ar as usize][ac as usize] = ACTOR;
        }

        if let Some(banner) = overlay(snap.phase) {
            let row = &mut grid[self.rows / 2];
            let start = self.cols.saturating_sub(banner.len()) / 2;
            for (cell, ch) in row.iter_mut().skip(start).zip(banner.chars()) {
                *cell = ch;
            }
        }

        let mut out = format!(
            "score {:>4}  tick {:>6}  {:?}\n",
            snap.score, snap.tick, snap.phase
        );
        for line in grid {
            out.extend(line);
            out.push('\n');
        }
        out
    }
}

fn overlay(phase: GamePhase) -> Option<&'static str> {
    match phase {
        GamePhase::Idle => Some(" PRESS START "),
        GamePhase::Paused => Some(" PAUSED "),
        GamePhase::Over => Some(" GAME OVER "),
        GamePhase::Running => None,
    }
}

impl Renderer for AsciiRenderer {
    type Frame = String;

    fn render(&mut self, snapshot: &Snapshot) -> String {
        self.frame(snapshot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{GameSession, TickInput, tick};
    use crate::tuning::Tuning;

    #[test]
    fn test_frame_dimensions() {
        let s = GameSession::new(Tuning::default(), 1);
        let r = AsciiRenderer::new(40, 12);
        let frame = r.frame(&s.snapshot());
        let lines: Vec<&str> = frame.lines().collect();
        assert_eq!(lines.len(), 13);
        assert!(lines[1..].iter().all(|l| l.chars().count() == 40));
        assert!(frame.contains("PRESS START"));
    }

    #[test]
    fn test_zero_size_clamps_to_one_cell() {
        let s = GameSession::new(Tuning::default(), 1);
        let r = AsciiRenderer::new(0, 0);
        assert_eq!((r.cols(), r.rows()), (1, 1));
        let frame = r.frame(&s.snapshot());
        assert_eq!(frame.lines().count(), 2);
    }

    #[test]
    fn test_draws_actor_ground_and_obstacles() {
        let mut s = GameSession::new(Tuning::default(), 1);
        s.start();
        for _ in 0..40 {
            let input = TickInput {
                jump: s.actor.vel > 2.0,
                ..Default::default()
            };
            tick(&mut s, &input);
        }
        let frame = AsciiRenderer::default().frame(&s.snapshot());
        assert!(frame.contains(ACTOR));
        assert!(frame.contains(OBSTACLE));
        assert!(frame.lines().last().unwrap().chars().all(|c| c == GROUND));
        assert!(!frame.contains("GAME OVER"));
    }
}
