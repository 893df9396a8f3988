//! Side-scrolling arcade game core.
//!
//! The library holds the whole simulation: entity records, the per-frame
//! physics step, combat resolution, enemy behaviour, hand-authored levels, the
//! mode state machine and the camera. The terminal front-end in `main.rs` only
//! samples input and draws the resulting `GameSession`.

pub mod ai;
pub mod camera;
pub mod combat;
pub mod compute;
pub mod config;
pub mod entities;
pub mod error;
pub mod level;
pub mod physics;
