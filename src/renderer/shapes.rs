//! Shape generation for 2D primitives

use glam::Vec2;
use std::f32::consts::PI;

use super::vertex::{Vertex, colors};
use crate::sim::{GameState, Paddle};

/// Net dash layout down the field's center line
const NET_WIDTH: f32 = 2.0;
const NET_DASH: f32 = 8.0;
const NET_GAP: f32 = 16.0;

/// Circle smoothness for the ball
const BALL_SEGMENTS: u32 = 32;

/// Generate vertices for a filled axis-aligned rectangle
///
/// `x`, `y` is the top-left corner in field space.
pub fn rect(x: f32, y: f32, width: f32, height: f32, color: [f32; 4]) -> Vec<Vertex> {
    vec![
        Vertex::new(x, y, color),
        Vertex::new(x + width, y, color),
        Vertex::new(x, y + height, color),
        Vertex::new(x + width, y, color),
        Vertex::new(x + width, y + height, color),
        Vertex::new(x, y + height, color),
    ]
}

/// Generate vertices for a filled circle
pub fn circle(center: Vec2, radius: f32, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 3) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * 2.0 * PI;
        let theta2 = ((i + 1) as f32 / segments as f32) * 2.0 * PI;

        // Triangle from center to edge
        vertices.push(Vertex::new(center.x, center.y, color));
        vertices.push(Vertex::new(
            center.x + radius * theta1.cos(),
            center.y + radius * theta1.sin(),
            color,
        ));
        vertices.push(Vertex::new(
            center.x + radius * theta2.cos(),
            center.y + radius * theta2.sin(),
            color,
        ));
    }

    vertices
}

/// Generate vertices for a paddle
pub fn paddle(paddle: &Paddle, color: [f32; 4]) -> Vec<Vertex> {
    rect(paddle.x, paddle.y, paddle.width, paddle.height, color)
}

/// Generate vertices for the dashed net down the middle of the field
pub fn net(field_width: f32, field_height: f32, color: [f32; 4]) -> Vec<Vertex> {
    let x = field_width / 2.0 - NET_WIDTH / 2.0;
    let mut vertices = Vec::new();

    let mut y = 0.0;
    while y < field_height {
        let dash = NET_DASH.min(field_height - y);
        vertices.extend(rect(x, y, NET_WIDTH, dash, color));
        y += NET_DASH + NET_GAP;
    }

    vertices
}

/// Tessellate one frame of the playfield: net, paddles, ball
pub fn scene(state: &GameState) -> Vec<Vertex> {
    let mut vertices = net(state.field.width, state.field.height, colors::NET);
    vertices.extend(paddle(&state.player, colors::PLAYER_PADDLE));
    vertices.extend(paddle(&state.ai, colors::AI_PADDLE));
    vertices.extend(circle(
        state.ball.pos,
        state.ball.radius,
        colors::BALL,
        BALL_SEGMENTS,
    ));
    vertices
}
