//! Rendering boundary
//!
//! Renderers consume [`Snapshot`]s and never reach into the simulation.

pub mod ascii;

pub use ascii::AsciiRenderer;

use crate::sim::Snapshot;

/// Turns a snapshot into whatever the host displays
pub trait Renderer {
    type Frame;

    fn render(&mut self, snapshot: &Snapshot) -> Self::Frame;
}
