//! Classic Pong - a two-paddle arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, game state)
//! - `renderer`: WebGPU rendering pipeline

pub mod renderer;
pub mod sim;

/// Game configuration constants
pub mod consts {
    /// Playfield dimensions (field-space units, y grows downward)
    pub const FIELD_WIDTH: f32 = 800.0;
    pub const FIELD_HEIGHT: f32 = 600.0;

    /// Paddle defaults - both paddles share the same geometry
    pub const PADDLE_WIDTH: f32 = 15.0;
    pub const PADDLE_HEIGHT: f32 = 100.0;
    /// Gap between a paddle and its field edge (player left, AI right)
    pub const PADDLE_MARGIN: f32 = 20.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 12.0;
    /// Rebound speed; every paddle hit renormalizes the velocity to this
    pub const BALL_SPEED: f32 = 6.0;

    /// AI paddle tracking speed (field units per frame)
    pub const AI_PADDLE_SPEED: f32 = 4.0;
    /// How far the ball may drift from the AI paddle's center before it reacts
    pub const AI_DEADZONE: f32 = 20.0;

    /// Steepest rebound angle off a paddle edge (45 degrees)
    pub const MAX_BOUNCE_ANGLE: f32 = std::f32::consts::FRAC_PI_4;
}
