//! Game state and core simulation types
//!
//! All state needed to replay a session deterministically lives here.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// The playfield, origin at the top-left corner with y growing downward
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Field {
    pub width: f32,
    pub height: f32,
}

impl Default for Field {
    fn default() -> Self {
        Self {
            width: FIELD_WIDTH,
            height: FIELD_HEIGHT,
        }
    }
}

impl Field {
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }
}

/// A paddle, positioned by its top-left corner
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paddle {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Paddle {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            x,
            y,
            width: PADDLE_WIDTH,
            height: PADDLE_HEIGHT,
        }
    }

    pub fn left_edge(&self) -> f32 {
        self.x
    }

    pub fn right_edge(&self) -> f32 {
        self.x + self.width
    }

    pub fn center_y(&self) -> f32 {
        self.y + self.height / 2.0
    }

    /// True when `y` falls strictly inside the paddle's vertical span
    pub fn spans(&self, y: f32) -> bool {
        y > self.y && y < self.y + self.height
    }

    /// Center the paddle on a field-space y, then clamp to the field
    pub fn center_on(&mut self, y: f32, field_height: f32) {
        self.y = y - self.height / 2.0;
        self.clamp_y(field_height);
    }

    /// Keep the paddle fully inside the field
    pub fn clamp_y(&mut self, field_height: f32) {
        self.y = self.y.clamp(0.0, field_height - self.height);
    }
}

/// The ball entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    /// Base speed; serves and paddle rebounds renormalize velocity to this
    pub speed: f32,
}

impl Ball {
    /// Create a ball already served from the field center
    pub fn new(field: &Field, rng: &mut Pcg32) -> Self {
        let mut ball = Self {
            pos: field.center(),
            vel: Vec2::ZERO,
            radius: BALL_RADIUS,
            speed: BALL_SPEED,
        };
        ball.reset(field, rng);
        ball
    }

    /// Recenter the ball and serve with each velocity axis sign drawn independently
    pub fn reset(&mut self, field: &Field, rng: &mut Pcg32) {
        self.pos = field.center();
        self.vel = Vec2::new(
            self.speed * random_sign(rng),
            self.speed * random_sign(rng),
        );
    }

    pub fn left_edge(&self) -> f32 {
        self.pos.x - self.radius
    }

    pub fn right_edge(&self) -> f32 {
        self.pos.x + self.radius
    }

    pub fn top_edge(&self) -> f32 {
        self.pos.y - self.radius
    }

    pub fn bottom_edge(&self) -> f32 {
        self.pos.y + self.radius
    }
}

fn random_sign(rng: &mut Pcg32) -> f32 {
    if rng.random_bool(0.5) { 1.0 } else { -1.0 }
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Session seed for reproducibility
    pub seed: u64,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Playfield bounds
    pub field: Field,
    /// Pointer-driven paddle on the left
    pub player: Paddle,
    /// Tracking paddle on the right
    pub ai: Paddle,
    pub ball: Ball,
    /// RNG for serve directions; owned by the state so replays match
    pub rng: Pcg32,
}

impl GameState {
    /// Create a new game state with the given seed
    pub fn new(seed: u64) -> Self {
        let field = Field::default();
        let mut rng = Pcg32::seed_from_u64(seed);
        let mid_y = (field.height - PADDLE_HEIGHT) / 2.0;
        let player = Paddle::new(PADDLE_MARGIN, mid_y);
        let ai = Paddle::new(field.width - PADDLE_MARGIN - PADDLE_WIDTH, mid_y);
        let ball = Ball::new(&field, &mut rng);

        Self {
            seed,
            time_ticks: 0,
            field,
            player,
            ai,
            ball,
            rng,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_state_places_paddles_at_mirrored_margins() {
        let state = GameState::new(1);
        assert_eq!(state.player.x, 20.0);
        assert_eq!(state.ai.x, 800.0 - 20.0 - 15.0);
        assert_eq!(state.player.y, 250.0);
        assert_eq!(state.ai.y, 250.0);
        assert_eq!(state.ball.pos, state.field.center());
    }

    #[test]
    fn center_on_clamps_to_field() {
        let field = Field::default();
        let mut paddle = Paddle::new(20.0, 250.0);

        paddle.center_on(-300.0, field.height);
        assert_eq!(paddle.y, 0.0);

        paddle.center_on(field.height + 300.0, field.height);
        assert_eq!(paddle.y, field.height - paddle.height);

        paddle.center_on(300.0, field.height);
        assert_eq!(paddle.y, 250.0);
    }

    #[test]
    fn reset_serves_at_base_speed_with_both_signs_over_time() {
        let field = Field::default();
        let mut rng = Pcg32::seed_from_u64(42);
        let mut ball = Ball::new(&field, &mut rng);

        let mut seen = [false; 4];
        for _ in 0..128 {
            ball.reset(&field, &mut rng);
            assert_eq!(ball.pos, field.center());
            assert_eq!(ball.vel.x.abs(), ball.speed);
            assert_eq!(ball.vel.y.abs(), ball.speed);
            let idx = (ball.vel.x > 0.0) as usize * 2 + (ball.vel.y > 0.0) as usize;
            seen[idx] = true;
        }
        assert!(seen.iter().all(|&s| s), "all four serve directions occur");
    }

    #[test]
    fn spans_is_strict_at_paddle_edges() {
        let paddle = Paddle::new(20.0, 250.0);
        assert!(!paddle.spans(250.0));
        assert!(!paddle.spans(350.0));
        assert!(paddle.spans(250.1));
        assert!(paddle.spans(349.9));
    }
}
