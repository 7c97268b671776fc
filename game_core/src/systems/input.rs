use hecs::World;

use crate::components::{Paddle, PaddleIntent};
use crate::resources::InputQueue;

/// Ingest sampled directions and overwrite each paddle's movement intent
pub fn ingest_inputs(world: &mut World, queue: &mut InputQueue) {
    for &(side, dir) in &queue.inputs {
        // Find the paddle entity for this side
        let mut paddle_entity = None;
        for (entity, paddle) in world.query::<&Paddle>().iter() {
            if paddle.side == side {
                paddle_entity = Some(entity);
                break;
            }
        }

        if let Some(entity) = paddle_entity {
            world.insert(entity, (PaddleIntent { dir },)).unwrap();
        }
    }

    // Clear processed inputs
    queue.inputs.clear();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::Side;
    use crate::config::Config;
    use crate::create_paddle;

    #[test]
    fn test_ingest_overwrites_intent() {
        let mut world = World::new();
        let config = Config::new();
        let mut queue = InputQueue::new();
        let entity = create_paddle(&mut world, Side::Left, &config);

        queue.push_input(Side::Left, -1);
        ingest_inputs(&mut world, &mut queue);
        assert_eq!(world.get::<&PaddleIntent>(entity).unwrap().dir, -1);

        queue.push_input(Side::Left, 0);
        ingest_inputs(&mut world, &mut queue);
        assert_eq!(world.get::<&PaddleIntent>(entity).unwrap().dir, 0);
    }

    #[test]
    fn test_ingest_routes_by_side() {
        let mut world = World::new();
        let config = Config::new();
        let mut queue = InputQueue::new();
        let left = create_paddle(&mut world, Side::Left, &config);
        let right = create_paddle(&mut world, Side::Right, &config);

        queue.push_input(Side::Left, 1);
        queue.push_input(Side::Right, -1);
        ingest_inputs(&mut world, &mut queue);

        assert_eq!(world.get::<&PaddleIntent>(left).unwrap().dir, 1);
        assert_eq!(world.get::<&PaddleIntent>(right).unwrap().dir, -1);
        assert!(queue.inputs.is_empty(), "Queue should be drained");
    }
}
