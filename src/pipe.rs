use crate::config::GameConfig;
use rand::Rng;
use sdl2::rect::Rect;

/// One obstacle segment (top or bottom half of a gap).
///
/// Segments are independent entities with a stable id so the score tracker
/// can credit each one exactly once. A visual "pair" is just two segments
/// spawned together at the same x.
pub struct Pipe {
    pub id: u64,
    pub rect: Rect,
}

impl Pipe {
    /// Spawns a top/bottom pair at the right screen edge.
    ///
    /// The top segment's height is drawn uniformly from the configured
    /// range; the bottom segment fills everything below the fixed gap.
    pub fn spawn_pair(config: &GameConfig, rng: &mut impl Rng, next_id: &mut u64) -> [Pipe; 2] {
        let top_height = rng.gen_range(config.pipe_min_top..=config.pipe_max_top);
        let bottom_y = (top_height + config.pipe_gap) as i32;
        let bottom_height = config.screen_height - top_height - config.pipe_gap;
        let x = config.screen_width as i32;

        let top = Pipe {
            id: *next_id,
            rect: Rect::new(x, 0, config.pipe_width, top_height),
        };
        let bottom = Pipe {
            id: *next_id + 1,
            rect: Rect::new(x, bottom_y, config.pipe_width, bottom_height),
        };
        *next_id += 2;
        [top, bottom]
    }

    /// Moves the segment left by the pipe speed.
    pub fn advance(&mut self, speed: i32) {
        self.rect.set_x(self.rect.x() - speed);
    }

    /// True once the trailing (right) edge has crossed the left boundary.
    pub fn is_off_screen(&self) -> bool {
        self.rect.right() <= 0
    }

    pub fn center_x(&self) -> i32 {
        self.rect.x() + self.rect.width() as i32 / 2
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn pair_shares_x_and_keeps_fixed_gap() {
        let config = GameConfig::default();
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let mut next_id = 0;

        for _ in 0..50 {
            let [top, bottom] = Pipe::spawn_pair(&config, &mut rng, &mut next_id);
            assert_eq!(top.rect.x(), bottom.rect.x());
            assert_eq!(top.rect.y(), 0);
            assert_eq!(
                bottom.rect.y() - top.rect.bottom(),
                config.pipe_gap as i32
            );
            assert_eq!(bottom.rect.bottom(), config.screen_height as i32);
        }
    }

    #[test]
    fn top_height_stays_in_configured_range() {
        let config = GameConfig::default();
        let mut rng = ChaCha8Rng::seed_from_u64(99);
        let mut next_id = 0;

        for _ in 0..200 {
            let [top, _] = Pipe::spawn_pair(&config, &mut rng, &mut next_id);
            let h = top.rect.height();
            assert!(h >= config.pipe_min_top && h <= config.pipe_max_top);
        }
    }

    #[test]
    fn ids_are_unique_across_pairs() {
        let config = GameConfig::default();
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let mut next_id = 0;

        let [a, b] = Pipe::spawn_pair(&config, &mut rng, &mut next_id);
        let [c, d] = Pipe::spawn_pair(&config, &mut rng, &mut next_id);
        let ids = [a.id, b.id, c.id, d.id];
        for (i, id) in ids.iter().enumerate() {
            for other in &ids[i + 1..] {
                assert_ne!(id, other);
            }
        }
    }

    #[test]
    fn off_screen_once_right_edge_passes_zero() {
        let mut pipe = Pipe {
            id: 0,
            rect: Rect::new(-69, 0, 70, 200),
        };
        assert!(!pipe.is_off_screen()); // right edge at 1
        pipe.advance(3);
        assert!(pipe.is_off_screen());
    }
}
