pub mod components;
pub mod config;
pub mod map;
pub mod params;
pub mod resources;
pub mod systems;

pub use components::*;
pub use config::*;
pub use map::*;
pub use params::*;
pub use resources::*;

use glam::Vec2;
use hecs::World;
use systems::*;

/// Whether the frame loop should keep going after a step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    Continue,
    GameOver,
}

/// Run the deterministic Pong game simulation for one frame
pub fn step(
    world: &mut World,
    time: &mut Time,
    config: &Config,
    events: &mut Events,
    inputs: &mut InputQueue,
) -> StepOutcome {
    // Clamp dt to prevent large jumps
    let step_time = Time {
        dt: time.dt.min(Params::MAX_DT),
        now: time.now,
    };

    // Clear events at start of frame
    events.clear();

    // 1. Ingest inputs (apply to paddle intents)
    ingest_inputs(world, inputs);

    // 2. Move paddles based on intents
    move_paddles(world, &step_time, config);

    // 3. Move balls
    move_balls(world, &step_time);

    // 4. Resolve collisions (paddles, screen edges, walls)
    check_collisions(world, config, events);

    // Update time
    time.now += step_time.dt;

    if events.ball_exited {
        StepOutcome::GameOver
    } else {
        StepOutcome::Continue
    }
}

/// Helper to create a paddle entity at its spawn position
pub fn create_paddle(world: &mut World, side: Side, config: &Config) -> hecs::Entity {
    world.spawn((
        Paddle::new(side, config.paddle_spawn(side)),
        PaddleIntent::new(),
    ))
}

/// Helper to create a ball entity
pub fn create_ball(world: &mut World, pos: Vec2, vel: Vec2) -> hecs::Entity {
    world.spawn((Ball::new(pos, vel),))
}
