use crate::config::GameConfig;
use rand::Rng;
use sdl2::rect::Rect;

/// Lowest y at which a cloud may spawn. Config validation guarantees the
/// band down to half the screen height is non-empty.
pub const CLOUD_MIN_Y: i32 = 50;

/// Decorative background cloud. Drifts left slower than the pipes and never
/// participates in collision or scoring.
pub struct Cloud {
    pub rect: Rect,
}

impl Cloud {
    /// Spawns a cloud at the right edge, somewhere in the upper half.
    pub fn spawn(config: &GameConfig, rng: &mut impl Rng) -> Self {
        let y = rng.gen_range(CLOUD_MIN_Y..=(config.screen_height as i32 / 2));
        Cloud {
            rect: Rect::new(
                config.screen_width as i32,
                y,
                config.cloud_width,
                config.cloud_height,
            ),
        }
    }

    pub fn advance(&mut self, speed: i32) {
        self.rect.set_x(self.rect.x() - speed);
    }

    pub fn is_off_screen(&self) -> bool {
        self.rect.right() <= 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn spawns_in_upper_half() {
        let config = GameConfig::default();
        let mut rng = ChaCha8Rng::seed_from_u64(3);

        for _ in 0..100 {
            let cloud = Cloud::spawn(&config, &mut rng);
            assert_eq!(cloud.rect.x(), config.screen_width as i32);
            assert!(cloud.rect.y() >= CLOUD_MIN_Y);
            assert!(cloud.rect.y() <= config.screen_height as i32 / 2);
        }
    }

    #[test]
    fn spawns_on_the_smallest_legal_screen() {
        // A 100-pixel screen pins the band to the single row at CLOUD_MIN_Y
        let config = GameConfig {
            screen_height: 100,
            ..GameConfig::default()
        };
        let mut rng = ChaCha8Rng::seed_from_u64(9);

        for _ in 0..20 {
            let cloud = Cloud::spawn(&config, &mut rng);
            assert_eq!(cloud.rect.y(), CLOUD_MIN_Y);
        }
    }

    #[test]
    fn drifts_left_until_off_screen() {
        let config = GameConfig::default();
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let mut cloud = Cloud::spawn(&config, &mut rng);

        let mut ticks = 0;
        while !cloud.is_off_screen() {
            cloud.advance(config.cloud_speed);
            ticks += 1;
            assert!(ticks < 1000, "cloud never left the screen");
        }
        // 400 + 60 wide at 1 px/tick
        assert_eq!(ticks, 460);
    }
}
