//! Native Pong client: window setup, keyboard sampling, frame pacing, and
//! rectangle rendering around the `game_core` simulation.

mod clock;
mod input;

use ggez::event::{self, EventHandler, KeyCode};
use ggez::input::keyboard;
use ggez::{conf, graphics, timer, Context, ContextBuilder, GameResult};
use hecs::World;

use game_core::{
    create_ball, create_paddle, map, step, Ball, Config, Events, InputQueue, Paddle, Params, Side,
    StepOutcome, Time,
};

use clock::FrameClock;
use input::PaddleBindings;

const BACKGROUND: graphics::Color = graphics::Color {
    r: 0.0,
    g: 0.0,
    b: 1.0,
    a: 1.0,
};

struct MainState {
    world: World,
    // Paddle handles, indexed by side
    paddles: [hecs::Entity; 2],
    config: Config,
    time: Time,
    events: Events,
    inputs: InputQueue,
    bindings: [PaddleBindings; 2],
    clock: FrameClock,
}

impl MainState {
    fn new() -> MainState {
        let config = Config::new();
        let mut world = World::new();

        let paddles = Side::BOTH.map(|side| create_paddle(&mut world, side, &config));
        for (pos, vel) in config.ball_spawns() {
            create_ball(&mut world, pos, vel);
        }

        MainState {
            world,
            paddles,
            config,
            time: Time::default(),
            events: Events::new(),
            inputs: InputQueue::new(),
            bindings: input::default_bindings(),
            clock: FrameClock::new(),
        }
    }

    fn fill_rect(&self, ctx: &mut Context, rect: map::Aabb) -> GameResult {
        let mesh = graphics::Mesh::new_rectangle(
            ctx,
            graphics::DrawMode::fill(),
            graphics::Rect::new(rect.min.x, rect.min.y, rect.width(), rect.height()),
            graphics::WHITE,
        )?;
        graphics::draw(ctx, &mesh, graphics::DrawParam::default())
    }
}

impl EventHandler for MainState {
    fn update(&mut self, ctx: &mut Context) -> GameResult {
        if keyboard::is_key_pressed(ctx, KeyCode::Escape) {
            event::quit(ctx);
            return Ok(());
        }

        input::sample_paddle_dirs(ctx, &self.bindings, &mut self.inputs);

        // Block until the frame interval has elapsed, then advance by the
        // measured (bounded) delta
        self.time.dt = self.clock.tick();
        let outcome = step(
            &mut self.world,
            &mut self.time,
            &self.config,
            &mut self.events,
            &mut self.inputs,
        );

        if outcome == StepOutcome::GameOver {
            log::info!("ball left the arena after {:.1}s, game over", self.time.now);
            event::quit(ctx);
        }
        Ok(())
    }

    fn draw(&mut self, ctx: &mut Context) -> GameResult {
        graphics::clear(ctx, BACKGROUND);

        for wall in map::wall_rects(&self.config) {
            self.fill_rect(ctx, wall)?;
        }

        for entity in self.paddles {
            if let Ok(paddle) = self.world.get::<&Paddle>(entity) {
                self.fill_rect(ctx, map::paddle_rect(&self.config, paddle.pos))?;
            }
        }

        let balls: Vec<map::Aabb> = self
            .world
            .query::<&Ball>()
            .iter()
            .map(|(_entity, ball)| map::ball_rect(&self.config, ball.pos))
            .collect();
        for rect in balls {
            self.fill_rect(ctx, rect)?;
        }

        graphics::present(ctx)?;

        // Yield the timeslice; the frame clock does the real pacing
        timer::yield_now();
        Ok(())
    }
}

pub fn main() -> GameResult {
    env_logger::init();

    let cb = ContextBuilder::new("pong", "client_native")
        .window_setup(conf::WindowSetup::default().title("Pong"))
        .window_mode(
            conf::WindowMode::default().dimensions(Params::SCREEN_WIDTH, Params::SCREEN_HEIGHT),
        );

    // Acquiring the window/renderer is the only fallible stage; fail fast
    let (ctx, events_loop) = &mut match cb.build() {
        Ok(pair) => pair,
        Err(err) => {
            log::error!("failed to create window: {}", err);
            return Err(err);
        }
    };

    log::info!("window created, entering game loop");
    let state = &mut MainState::new();
    event::run(ctx, events_loop, state)
}
