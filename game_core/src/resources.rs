use crate::components::Side;

/// Time resource for tracking simulation time
#[derive(Debug, Clone, Copy)]
pub struct Time {
    pub dt: f32,  // Delta time for this step
    pub now: f32, // Total elapsed time
}

impl Time {
    pub fn new(dt: f32, now: f32) -> Self {
        Self { dt, now }
    }
}

impl Default for Time {
    fn default() -> Self {
        Self {
            dt: 0.016,
            now: 0.0,
        }
    }
}

/// Events that occurred during this frame
#[derive(Debug, Clone, Default)]
pub struct Events {
    pub ball_hit_paddle: bool,
    pub ball_hit_wall: bool,
    pub ball_exited: bool,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.ball_hit_paddle = false;
        self.ball_hit_wall = false;
        self.ball_exited = false;
    }
}

/// Sampled paddle directions waiting to be applied at the next step
#[derive(Debug, Clone, Default)]
pub struct InputQueue {
    pub inputs: Vec<(Side, i8)>, // (paddle side, direction)
}

impl InputQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.inputs.clear();
    }

    pub fn push_input(&mut self, side: Side, dir: i8) {
        self.inputs.push((side, dir));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_events_clear() {
        let mut events = Events::new();
        events.ball_hit_paddle = true;
        events.ball_hit_wall = true;
        events.ball_exited = true;

        events.clear();

        assert!(!events.ball_hit_paddle);
        assert!(!events.ball_hit_wall);
        assert!(!events.ball_exited);
    }

    #[test]
    fn test_input_queue_push_input() {
        let mut queue = InputQueue::new();
        queue.push_input(Side::Left, -1);
        queue.push_input(Side::Right, 1);

        assert_eq!(queue.inputs.len(), 2);
        assert_eq!(queue.inputs[0], (Side::Left, -1));
        assert_eq!(queue.inputs[1], (Side::Right, 1));
    }

    #[test]
    fn test_input_queue_clear() {
        let mut queue = InputQueue::new();
        queue.push_input(Side::Left, -1);
        queue.push_input(Side::Right, 1);

        queue.clear();
        assert_eq!(queue.inputs.len(), 0);
    }
}
