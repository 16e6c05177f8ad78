//! Particle Entities for Orb Studio RS
//! Short-lived gravity-affected points used for visual bursts

use egui::{Color32, Painter, Pos2, Vec2};
use rand::Rng;

use crate::color::hue_color;
use crate::config::ParticleConfig;
use crate::rng::sample;

/// A transient point with fixed color and decaying lifetime.
#[derive(Clone, Copy, Debug)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: f32,
    pub color: Color32,
    /// Ticks remaining; the particle is removed once this reaches zero
    pub life: i32,
}

impl Particle {
    /// Spawn at `at` with a random sideways kick and upward launch.
    /// Without an explicit color, a random hue is drawn.
    pub fn spawn<R: Rng>(
        at: Vec2,
        color: Option<Color32>,
        config: &ParticleConfig,
        rng: &mut R,
    ) -> Self {
        let vel = Vec2::new(
            sample(rng, -2, 2) as f32,
            sample(rng, -5, -1) as f32,
        );
        let size = rng.gen_range(config.min_size..=config.max_size);
        let color = color.unwrap_or_else(|| hue_color(sample(rng, 0, 360) as f32));

        Self {
            pos: at,
            vel,
            size,
            color,
            life: config.life,
        }
    }

    /// Integrate position, apply gravity to the vertical velocity, age.
    pub fn update(&mut self, gravity: f32) {
        self.pos += self.vel;
        self.vel.y += gravity;
        self.life -= 1;
    }

    pub fn expired(&self) -> bool {
        self.life <= 0
    }

    pub fn draw(&self, painter: &Painter, origin: Pos2) {
        painter.circle_filled(origin + self.pos, self.size, self.color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_particle(vel: Vec2) -> Particle {
        Particle {
            pos: Vec2::new(10.0, 10.0),
            vel,
            size: 0.2,
            color: Color32::WHITE,
            life: 50,
        }
    }

    #[test]
    fn update_integrates_velocity_then_gravity() {
        let mut p = test_particle(Vec2::new(1.0, -3.0));
        p.update(0.1);
        // Position moves by the pre-gravity velocity.
        assert_eq!(p.pos, Vec2::new(11.0, 7.0));
        assert!((p.vel.y - -2.9).abs() < 1e-6);
    }

    #[test]
    fn horizontal_velocity_never_changes() {
        let mut p = test_particle(Vec2::new(2.0, -4.0));
        for _ in 0..30 {
            p.update(0.1);
            assert_eq!(p.vel.x, 2.0);
        }
    }

    #[test]
    fn life_strictly_decreases_until_expiry() {
        let mut p = test_particle(Vec2::ZERO);
        let mut last = p.life;
        while !p.expired() {
            p.update(0.1);
            assert_eq!(p.life, last - 1);
            last = p.life;
        }
        assert_eq!(p.life, 0);
    }

    #[test]
    fn spawn_velocities_stay_in_tuned_ranges() {
        let mut rng = rand::thread_rng();
        let config = ParticleConfig::default();
        for _ in 0..500 {
            let p = Particle::spawn(Vec2::ZERO, None, &config, &mut rng);
            assert!((-2.0..=2.0).contains(&p.vel.x), "vx: {}", p.vel.x);
            // Truncation lets the upward kick round up to zero.
            assert!((-5.0..=0.0).contains(&p.vel.y), "vy: {}", p.vel.y);
            assert!((config.min_size..=config.max_size).contains(&p.size));
            assert_eq!(p.life, config.life);
        }
    }

    #[test]
    fn spawn_keeps_supplied_color() {
        let mut rng = rand::thread_rng();
        let config = ParticleConfig::default();
        let accent = Color32::from_rgb(255, 165, 0);
        let p = Particle::spawn(Vec2::ZERO, Some(accent), &config, &mut rng);
        assert_eq!(p.color, accent);
    }
}
