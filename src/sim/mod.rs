//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One tick per rendered frame, velocities in field units per frame
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod collision;
pub mod state;
pub mod tick;

pub use collision::{Side, collide_point, out_of_bounds, paddle_contact, rebound_velocity};
pub use state::{Ball, Field, GameState, Paddle};
pub use tick::{InputCommand, InputQueue, tick};
