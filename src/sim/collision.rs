//! Collision detection for the actor
//!
//! Deliberately forgiving: the world edges allow `margin` pixels of overshoot,
//! and every hitbox is shrunk by `margin` on all four sides before testing.
//! Nothing here mutates state.

use super::obstacle::Obstacle;
use super::rect::Rect;

/// Result of a collision check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collision {
    /// Actor left the playable area (ceiling or ground)
    OutOfBounds,
    /// Actor overlapped the obstacle with this id
    Obstacle(u32),
}

/// Actor escaped the world vertically, allowing `margin` pixels of slack
pub fn out_of_bounds(actor: &Rect, world_height: f32, margin: f32) -> bool {
    actor.top <= -margin || actor.bottom >= world_height + margin
}

/// Lenient AABB test: both boxes shrunk inward by `margin` first
pub fn overlaps_with_margin(actor: &Rect, obstacle: &Rect, margin: f32) -> bool {
    actor.shrink(margin).overlaps(&obstacle.shrink(margin))
}

/// First collision found, scanning bounds then obstacles in spawn order
pub fn find_collision(
    actor: &Rect,
    world_height: f32,
    obstacles: &[Obstacle],
    margin: f32,
) -> Option<Collision> {
    if out_of_bounds(actor, world_height, margin) {
        return Some(Collision::OutOfBounds);
    }
    obstacles
        .iter()
        .find(|o| overlaps_with_margin(actor, &o.bounds(), margin))
        .map(|o| Collision::Obstacle(o.id))
}

/// True if the actor hit the world edge or any live obstacle
pub fn collided(actor: &Rect, world_height: f32, obstacles: &[Obstacle], margin: f32) -> bool {
    find_collision(actor, world_height, obstacles, margin).is_some()
}
