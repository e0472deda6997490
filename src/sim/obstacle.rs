//! Gate obstacles and the pair generator

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::rect::Rect;
use crate::tuning::Tuning;

/// Which half of a gate an obstacle is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ObstacleRole {
    /// Hangs from the top of the world
    Upper,
    /// Rises from the ground
    Lower,
}

/// One half of a gate, scrolling leftward
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    pub id: u32,
    /// Shared by the upper and lower obstacle of one gate
    pub pair_id: u32,
    pub role: ObstacleRole,
    /// Left edge
    pub x: f32,
    pub width: f32,
    /// Vertical span, fixed at creation
    pub top: f32,
    pub bottom: f32,
    /// Set once the actor has cleared this obstacle; never reset
    pub scored: bool,
}

impl Obstacle {
    pub fn bounds(&self) -> Rect {
        Rect::new(self.x, self.x + self.width, self.top, self.bottom)
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }

    /// Right edge, the last part of the obstacle the actor passes
    #[inline]
    pub fn trailing_edge(&self) -> f32 {
        self.x + self.width
    }

    pub fn advance(&mut self, speed: f32) {
        self.x -= speed;
    }

    pub fn is_off_screen(&self) -> bool {
        self.trailing_edge() < 0.0
    }
}

/// Builds upper/lower obstacle pairs with a randomized gap
#[derive(Debug, Clone)]
pub struct PairGenerator {
    pub world_height: f32,
    pub width: f32,
    pub gap_size_base: f32,
    pub easy_gap_size: f32,
    pub easy_score_threshold: u64,
    pub min_height: f32,
}

impl PairGenerator {
    pub fn from_tuning(tuning: &Tuning) -> Self {
        Self {
            world_height: tuning.world_height,
            width: tuning.obstacle_width,
            gap_size_base: tuning.gap_size,
            easy_gap_size: tuning.easy_gap_size,
            easy_score_threshold: tuning.easy_score_threshold,
            min_height: tuning.min_obstacle_height,
        }
    }

    /// Gap for a run currently at `previous_score`.
    ///
    /// Early gates are wider until the player clears a few.
    pub fn gap_for_score(&self, previous_score: u64) -> f32 {
        if previous_score < self.easy_score_threshold {
            self.easy_gap_size
        } else {
            self.gap_size_base
        }
    }

    /// Produce one gate at horizontal position `x`.
    ///
    /// The base gap is `gap_size_base`, taken from [`Tuning::gap_size`];
    /// [`gap_for_score`](Self::gap_for_score) widens it early in a run.
    ///
    /// The upper height is drawn uniformly so both halves stay at least
    /// `min_height` tall. Upper height + lower height + gap == world height.
    pub fn generate_pair<R: Rng>(
        &self,
        rng: &mut R,
        previous_score: u64,
        x: f32,
        first_id: u32,
    ) -> [Obstacle; 2] {
        let gap = self.gap_for_score(previous_score);
        let max_top = self.world_height - gap - self.min_height;

        let upper_height = if max_top.is_finite() && max_top > self.min_height {
            rng.random_range(self.min_height..=max_top)
        } else {
            // World too short for the floor on both sides; center the gap
            log::debug!(
                "gap {} leaves no room for min height {} in world {}",
                gap,
                self.min_height,
                self.world_height
            );
            ((self.world_height - gap) / 2.0).max(0.0)
        };
        let upper_height = if upper_height.is_finite() {
            upper_height
        } else {
            log::warn!("non-finite gate geometry, spawning an empty upper half");
            0.0
        };
        let gap_bottom = (upper_height + gap).min(self.world_height);

        let upper = Obstacle {
            id: first_id,
            pair_id: first_id,
            role: ObstacleRole::Upper,
            x,
            width: self.width,
            top: 0.0,
            bottom: upper_height,
            scored: false,
        };
        let lower = Obstacle {
            id: first_id + 1,
            pair_id: first_id,
            role: ObstacleRole::Lower,
            x,
            width: self.width,
            top: gap_bottom,
            bottom: self.world_height,
            scored: false,
        };
        [upper, lower]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn generator(world_height: f32, gap: f32, min_height: f32) -> PairGenerator {
        PairGenerator {
            world_height,
            width: 60.0,
            gap_size_base: gap,
            easy_gap_size: gap + 50.0,
            easy_score_threshold: 3,
            min_height,
        }
    }

    #[test]
    fn test_pair_shape() {
        let pair_gen = generator(500.0, 200.0, 30.0);
        let mut rng = Pcg32::seed_from_u64(7);
        let [upper, lower] = pair_gen.generate_pair(&mut rng, 10, 400.0, 1);

        assert_eq!(upper.role, ObstacleRole::Upper);
        assert_eq!(lower.role, ObstacleRole::Lower);
        assert_eq!(upper.pair_id, lower.pair_id);
        assert_ne!(upper.id, lower.id);
        assert_eq!(upper.x, 400.0);
        assert_eq!(lower.x, 400.0);
        assert_eq!(upper.top, 0.0);
        assert_eq!(lower.bottom, 500.0);
        assert!(!upper.scored && !lower.scored);
    }

    #[test]
    fn test_easy_gap_below_threshold() {
        let pair_gen = generator(500.0, 200.0, 30.0);
        assert_eq!(pair_gen.gap_for_score(0), 250.0);
        assert_eq!(pair_gen.gap_for_score(2), 250.0);
        assert_eq!(pair_gen.gap_for_score(3), 200.0);

        let mut rng = Pcg32::seed_from_u64(1);
        let [upper, lower] = pair_gen.generate_pair(&mut rng, 0, 400.0, 1);
        assert!((lower.top - upper.bottom - 250.0).abs() < 1e-3);
    }

    #[test]
    fn test_same_seed_same_pair() {
        let pair_gen = generator(500.0, 200.0, 30.0);
        let mut a = Pcg32::seed_from_u64(42);
        let mut b = Pcg32::seed_from_u64(42);
        for id in 0..20 {
            assert_eq!(
                pair_gen.generate_pair(&mut a, 5, 400.0, id * 2),
                pair_gen.generate_pair(&mut b, 5, 400.0, id * 2)
            );
        }
    }

    #[test]
    fn test_short_world_centers_gap() {
        let pair_gen = generator(250.0, 200.0, 30.0);
        let mut rng = Pcg32::seed_from_u64(3);
        let [upper, lower] = pair_gen.generate_pair(&mut rng, 10, 400.0, 1);
        assert!((upper.height() - 25.0).abs() < 1e-4);
        assert!((lower.height() - 25.0).abs() < 1e-4);
    }

    #[test]
    fn test_off_screen() {
        let mut o = Obstacle {
            id: 1,
            pair_id: 1,
            role: ObstacleRole::Upper,
            x: 1.0,
            width: 60.0,
            top: 0.0,
            bottom: 100.0,
            scored: false,
        };
        o.advance(2.0);
        assert_eq!(o.x, -1.0);
        assert!(!o.is_off_screen());
        o.x = -60.0;
        assert!(!o.is_off_screen());
        o.advance(0.5);
        assert!(o.is_off_screen());
    }

    #[test]
    fn test_non_finite_world_does_not_panic() {
        let mut rng = Pcg32::seed_from_u64(9);
        let pair_gen = generator(f32::INFINITY, 200.0, 30.0);
        let [upper, lower] = pair_gen.generate_pair(&mut rng, 10, 400.0, 1);
        assert!(upper.bottom.is_finite());
        assert!(upper.bottom <= lower.top);

        let pair_gen = generator(f32::NAN, 200.0, 30.0);
        let [upper, _] = pair_gen.generate_pair(&mut rng, 10, 400.0, 1);
        assert!(upper.bottom.is_finite());
    }

    proptest! {
        #[test]
        fn prop_heights_fill_world(seed in any::<u64>(), score in 0u64..50) {
            let pair_gen = generator(500.0, 200.0, 30.0);
            let mut rng = Pcg32::seed_from_u64(seed);
            let gap = pair_gen.gap_for_score(score);
            let [upper, lower] = pair_gen.generate_pair(&mut rng, score, 400.0, 1);

            prop_assert!((upper.height() + lower.height() + gap - 500.0).abs() < 1e-3);
            prop_assert!(upper.height() >= 30.0);
            prop_assert!(lower.height() >= 30.0 - 1e-3);
            // Spans never overlap
            prop_assert!(upper.bottom <= lower.top);
        }

        #[test]
        fn prop_spans_disjoint_for_any_valid_world(
            seed in any::<u64>(),
            gap in 0.0f32..300.0,
            min_height in 0.0f32..60.0,
            slack in 1.0f32..400.0,
        ) {
            let world_height = 2.0 * min_height + gap + slack;
            let pair_gen = generator(world_height, gap, min_height);
            let mut rng = Pcg32::seed_from_u64(seed);
            let [upper, lower] = pair_gen.generate_pair(&mut rng, 100, 0.0, 1);
            prop_assert!(upper.bottom <= lower.top);
            prop_assert!(upper.height() >= min_height);
        }
    }
}
