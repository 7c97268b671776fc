use glam::Vec2;
use hecs::World;

use crate::components::{Ball, Paddle, Side};
use crate::config::Config;
use crate::resources::Events;

/// Resolve ball collisions against paddles, the screen edges, and the walls.
///
/// The check order per ball is load-bearing: the out-of-bounds test is the
/// `else` branch of the right-paddle test, so a ball that qualifies for the
/// right-paddle bounce is never tested for exit in the same frame.
pub fn check_collisions(world: &mut World, config: &Config, events: &mut Events) {
    // Collect paddle positions, indexed by side
    let mut paddles: [Option<Vec2>; 2] = [None, None];
    for (_entity, paddle) in world.query::<&Paddle>().iter() {
        paddles[paddle.side.index()] = Some(paddle.pos);
    }

    let half_height = config.paddle_height / 2.0;

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        // Left paddle: y-difference small enough, x inside the band,
        // ball moving left
        let hit_left = match paddles[Side::Left.index()] {
            Some(pos) => {
                let (near, far) = config.collision_band(Side::Left);
                (pos.y - ball.pos.y).abs() <= half_height
                    && ball.pos.x >= near
                    && ball.pos.x <= far
                    && ball.vel.x < 0.0
            }
            None => false,
        };
        if hit_left {
            ball.vel.x = -ball.vel.x;
            events.ball_hit_paddle = true;
        }

        // Right paddle: mirrored band, ball moving right
        let hit_right = match paddles[Side::Right.index()] {
            Some(pos) => {
                let (near, far) = config.collision_band(Side::Right);
                (pos.y - ball.pos.y).abs() <= half_height
                    && ball.pos.x >= near
                    && ball.pos.x <= far
                    && ball.vel.x > 0.0
            }
            None => false,
        };
        if hit_right {
            ball.vel.x = -ball.vel.x;
            events.ball_hit_paddle = true;
        } else if ball.pos.x <= 0.0 || ball.pos.x >= config.screen_width {
            // Ball left the arena; the whole game ends
            events.ball_exited = true;
        }

        // Top wall
        if ball.pos.y <= config.wall_thickness && ball.vel.y < 0.0 {
            ball.vel.y = -ball.vel.y;
            events.ball_hit_wall = true;
        }
        // Bottom wall
        else if ball.pos.y >= config.screen_height - config.wall_thickness && ball.vel.y > 0.0 {
            ball.vel.y = -ball.vel.y;
            events.ball_hit_wall = true;
        }
    }
}
