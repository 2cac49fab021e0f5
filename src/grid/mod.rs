//! Grid container orchestrator.
//!
//! The public container type and its change vocabulary are re-exported
//! from here; the implementation lives in the private `core` module.

mod core;

pub use core::{ChildId, DEFAULT_SPACING, GridChange, ItemProxy, SpacedGrid, SpacingStrategy};
