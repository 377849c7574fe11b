//! Collision detection and response for the playfield
//!
//! Axis-aligned checks only: the ball against the two paddles and the field
//! boundaries, plus the spin-angle rebound that makes paddle placement matter.

use glam::Vec2;

use super::state::{Ball, Field, Paddle};
use crate::consts::MAX_BOUNCE_ANGLE;

/// Which side of the field a paddle defends
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    /// Sign of the rebound's horizontal component, pointing back into play
    #[inline]
    fn rebound_sign(self) -> f32 {
        match self {
            Side::Left => 1.0,
            Side::Right => -1.0,
        }
    }
}

/// Check whether the ball has reached a paddle
///
/// Horizontally the ball's leading edge must have crossed the paddle's inner
/// face; vertically the ball's center must fall strictly inside the paddle's
/// span. The ball radius is ignored on the vertical axis, so grazing hits at
/// the very tips pass by.
pub fn paddle_contact(ball: &Ball, paddle: &Paddle, side: Side) -> bool {
    let reached = match side {
        Side::Left => ball.left_edge() < paddle.right_edge(),
        Side::Right => ball.right_edge() > paddle.left_edge(),
    };
    reached && paddle.spans(ball.pos.y)
}

/// Normalized contact offset from the paddle center
///
/// -1 at the paddle's top edge, 0 at its center, +1 at its bottom edge.
/// Not clamped; callers feed it straight into the rebound angle.
#[inline]
pub fn collide_point(ball_y: f32, paddle: &Paddle) -> f32 {
    (ball_y - paddle.center_y()) / (paddle.height / 2.0)
}

/// Compute the rebound velocity for a paddle hit
///
/// The contact offset scales the rebound angle up to [`MAX_BOUNCE_ANGLE`],
/// and the result is renormalized to `speed`, so a paddle hit never changes
/// how fast the ball travels, only where it goes.
pub fn rebound_velocity(ball_y: f32, paddle: &Paddle, speed: f32, side: Side) -> Vec2 {
    let angle = collide_point(ball_y, paddle) * MAX_BOUNCE_ANGLE;
    Vec2::new(
        side.rebound_sign() * speed * angle.cos(),
        speed * angle.sin(),
    )
}

/// Check whether the ball has escaped past the left or right field edge
#[inline]
pub fn out_of_bounds(ball: &Ball, field: &Field) -> bool {
    ball.left_edge() < 0.0 || ball.right_edge() > field.width
}
