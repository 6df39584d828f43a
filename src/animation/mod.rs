//! Frame-driven animation for carousel scrolling.

pub mod transition;

pub use transition::PositionTransition;
