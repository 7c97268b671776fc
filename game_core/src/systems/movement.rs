use hecs::World;

use crate::components::{Ball, Paddle, PaddleIntent};
use crate::config::Config;
use crate::resources::Time;

/// Apply paddle movement based on intents
pub fn move_paddles(world: &mut World, time: &Time, config: &Config) {
    for (_entity, (paddle, intent)) in world.query_mut::<(&mut Paddle, &PaddleIntent)>() {
        if intent.dir != 0 {
            paddle.pos.y += intent.dir as f32 * config.paddle_speed * time.dt;

            // Keep the paddle between the walls
            paddle.pos.y = config.clamp_paddle_y(paddle.pos.y);
        }
    }
}

/// Move balls based on velocity
pub fn move_balls(world: &mut World, time: &Time) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.pos += ball.vel * time.dt;
    }
}
