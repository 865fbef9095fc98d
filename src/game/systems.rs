// Per-tick gameplay systems
//
// Each system is a small explicitly-mutating function over `GameWorld`.
// `GameWorld::update` invokes them in a fixed pipeline order every tick
// while the mode allows it; none of them touches the mode itself. That
// keeps every transition decision in one place (world.rs) and makes each
// stage testable on its own.

use crate::cloud::Cloud;
use crate::collision::{self, Collidable};
use crate::pipe::Pipe;
use rand::Rng;

use super::world::GameWorld;

/// Spawns a new pipe pair once the wall-clock interval has elapsed.
///
/// Gated on elapsed milliseconds, not frame count, so the spawn rate is
/// independent of the actual frame rate.
pub fn spawn_pipes(world: &mut GameWorld, now_ms: u64, rng: &mut impl Rng) {
    if now_ms - world.last_pipe_spawn_ms >= world.config.pipe_interval_ms {
        let pair = Pipe::spawn_pair(&world.config, rng, &mut world.next_pipe_id);
        world.pipes.extend(pair);
        world.last_pipe_spawn_ms = now_ms;
    }
}

/// Spawns a decorative cloud on its own (slower) wall-clock interval.
pub fn spawn_clouds(world: &mut GameWorld, now_ms: u64, rng: &mut impl Rng) {
    if now_ms - world.last_cloud_spawn_ms >= world.config.cloud_interval_ms {
        world.clouds.push(Cloud::spawn(&world.config, rng));
        world.last_cloud_spawn_ms = now_ms;
    }
}

/// Drifts clouds left and drops the ones that left the screen.
pub fn move_clouds(world: &mut GameWorld) {
    let speed = world.config.cloud_speed;
    for cloud in &mut world.clouds {
        cloud.advance(speed);
    }
    world.clouds.retain(|cloud| !cloud.is_off_screen());
}

/// Applies one tick of gravity to the bird.
pub fn apply_physics(world: &mut GameWorld) {
    world.bird.apply_gravity(world.config.gravity);
}

/// Moves pipes left and culls segments whose right edge crossed the
/// left boundary. `retain` preserves spawn order, so the survivors stay
/// oldest-first.
pub fn move_pipes(world: &mut GameWorld) {
    let speed = world.config.pipe_speed;
    for pipe in &mut world.pipes {
        pipe.advance(speed);
    }
    world.pipes.retain(|pipe| !pipe.is_off_screen());
}

/// Credits 0.5 points for every segment whose center has passed the bird's
/// center and is not yet in the passed-set. Each segment counts once; a
/// visual pair yields a full point because both segments share x.
pub fn update_score(world: &mut GameWorld) {
    let bird_center = world.bird.center_x();
    for pipe in &world.pipes {
        if pipe.center_x() < bird_center && world.passed.insert(pipe.id) {
            world.score += 0.5;
        }
    }
}

/// True if the bird overlaps any pipe segment or touches a screen bound.
pub fn check_collision(world: &GameWorld) -> bool {
    collision::first_collision(&world.bird, &world.pipes).is_some()
        || collision::hits_screen_bounds(&world.bird.bounds(), world.config.screen_height)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use sdl2::rect::Rect;

    fn world() -> GameWorld {
        GameWorld::new(GameConfig::default())
    }

    fn rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(42)
    }

    fn pipe_at(id: u64, x: i32) -> Pipe {
        Pipe {
            id,
            rect: Rect::new(x, 0, 70, 200),
        }
    }

    #[test]
    fn pipes_spawn_only_after_interval() {
        let mut world = world();
        let mut rng = rng();

        spawn_pipes(&mut world, 1199, &mut rng);
        assert!(world.pipes.is_empty());

        spawn_pipes(&mut world, 1200, &mut rng);
        assert_eq!(world.pipes.len(), 2);

        // Spawning is re-gated from the spawn moment
        spawn_pipes(&mut world, 1300, &mut rng);
        assert_eq!(world.pipes.len(), 2);
        spawn_pipes(&mut world, 2400, &mut rng);
        assert_eq!(world.pipes.len(), 4);
    }

    #[test]
    fn cloud_spawner_runs_independently_of_pipes() {
        let mut world = world();
        let mut rng = rng();

        spawn_clouds(&mut world, 2999, &mut rng);
        assert!(world.clouds.is_empty());
        spawn_clouds(&mut world, 3000, &mut rng);
        assert_eq!(world.clouds.len(), 1);
        assert!(world.pipes.is_empty());
    }

    #[test]
    fn culled_pipes_never_return_and_order_is_kept() {
        let mut world = world();
        world.pipes = vec![pipe_at(0, -70), pipe_at(1, 50), pipe_at(2, 200)];

        move_pipes(&mut world);

        // Segment 0 had right edge <= 0 after moving and is gone for good
        let ids: Vec<u64> = world.pipes.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2]);
        assert_eq!(world.pipes[0].rect.x(), 47);
        assert_eq!(world.pipes[1].rect.x(), 197);
    }

    #[test]
    fn spawned_at_origin_leaves_screen_near_tick_157() {
        // Spawn interval 1200ms, speed 3/tick, screen 400, pipe 70 wide:
        // right edge starts at 470 and goes negative at tick 157.
        let mut world = world();
        let mut rng = rng();
        let interval_ms = world.config.pipe_interval_ms;
        spawn_pipes(&mut world, interval_ms, &mut rng);
        assert_eq!(world.pipes.len(), 2);

        let mut ticks = 0;
        while !world.pipes.is_empty() {
            move_pipes(&mut world);
            ticks += 1;
            assert!(ticks <= 200, "pipes never culled");
        }
        assert_eq!(ticks, 157);
    }

    #[test]
    fn no_overtaking_between_pairs_spawned_apart() {
        // Two segments 1200ms apart: the older one stays left of the newer
        // one at every tick until it is culled.
        let mut world = world();
        world.pipes = vec![pipe_at(0, 400), pipe_at(1, 400 + 72)];

        while world.pipes.len() == 2 {
            move_pipes(&mut world);
            assert!(world.pipes[0].rect.x() < world.pipes[1].rect.x());
        }
    }

    #[test]
    fn score_credits_each_segment_exactly_once() {
        let mut world = world();
        // Both segments of a pair just behind the bird's center (x=120)
        world.pipes = vec![pipe_at(0, 10), pipe_at(1, 10)];

        update_score(&mut world);
        assert_eq!(world.score, 1.0);

        // Re-running the tracker must not double-credit
        update_score(&mut world);
        assert_eq!(world.score, 1.0);
        assert_eq!(world.passed.len(), 2);
    }

    #[test]
    fn score_ignores_segments_still_ahead() {
        let mut world = world();
        world.pipes = vec![pipe_at(0, 300)];

        update_score(&mut world);
        assert_eq!(world.score, 0.0);
        assert!(world.passed.is_empty());
    }

    #[test]
    fn collision_detects_pipes_and_bounds() {
        let mut world = world();
        assert!(!check_collision(&world));

        // Pipe overlapping the bird at (100, 300)
        world.pipes = vec![Pipe {
            id: 0,
            rect: Rect::new(110, 290, 70, 200),
        }];
        assert!(check_collision(&world));

        world.pipes.clear();
        world.bird.y = 0;
        assert!(check_collision(&world));

        world.bird.y = 570; // bottom == screen_height
        assert!(check_collision(&world));
    }
}
