//! Keyboard sampling and per-paddle key bindings.

use game_core::{InputQueue, Side};
use ggez::event::KeyCode;
use ggez::input::keyboard;
use ggez::Context;

/// The two keys controlling one paddle
#[derive(Debug, Clone, Copy)]
pub struct PaddleBindings {
    pub side: Side,
    pub up: KeyCode,
    pub down: KeyCode,
}

/// W/S for the left paddle, I/K for the right
pub fn default_bindings() -> [PaddleBindings; 2] {
    [
        PaddleBindings {
            side: Side::Left,
            up: KeyCode::W,
            down: KeyCode::S,
        },
        PaddleBindings {
            side: Side::Right,
            up: KeyCode::I,
            down: KeyCode::K,
        },
    ]
}

/// Combine the held state of a paddle's two keys into a direction.
/// Up and down are independent, so holding both cancels to zero.
pub fn dir_from_keys(up_held: bool, down_held: bool) -> i8 {
    let mut dir = 0;
    if up_held {
        dir -= 1;
    }
    if down_held {
        dir += 1;
    }
    dir
}

/// Sample the pressed-key snapshot into the simulation's input queue
pub fn sample_paddle_dirs(ctx: &Context, bindings: &[PaddleBindings; 2], queue: &mut InputQueue) {
    for binding in bindings {
        let dir = dir_from_keys(
            keyboard::is_key_pressed(ctx, binding.up),
            keyboard::is_key_pressed(ctx, binding.down),
        );
        queue.push_input(binding.side, dir);
    }
}
