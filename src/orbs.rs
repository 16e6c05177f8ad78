//! Orb Entities for Orb Studio RS
//! Points on fixed circular orbits, drawn as colored trail segments

use std::f32::consts::FRAC_PI_2;

use egui::{Painter, Pos2, Stroke, Vec2};
use rand::Rng;

use crate::color::hue_color;
use crate::config::OrbConfig;
use crate::rng::sample;

/// A point constrained to a circular orbit around a fixed center.
#[derive(Clone, Copy, Debug)]
pub struct Orb {
    pub pos: Vec2,
    pub last_pos: Vec2,
    pub center: Vec2,
    pub radius: f32,
    /// Running angle, advanced by `speed` every tick; never wraps
    pub phase: f32,
    pub speed: f32,
    pub stroke_width: f32,
    /// Derived each tick from the angle between position and center
    pub hue_angle: f32,
}

impl Orb {
    /// Create an orb at `at`, orbiting `center` at the spawn distance.
    ///
    /// The initial phase is rotated a quarter turn so the orb leaves the
    /// spawn point tangentially instead of radially. Speed scales with the
    /// orbit radius but never drops below the configured floor.
    pub fn spawn<R: Rng>(at: Vec2, center: Vec2, config: &OrbConfig, rng: &mut R) -> Self {
        let offset = center - at;
        let radius = offset.length();
        let phase = offset.y.atan2(offset.x) + FRAC_PI_2;
        let speed =
            sample(rng, 5, 10) as f32 / 1000.0 * (radius / config.speed_falloff) + config.speed_floor;
        let stroke_width = sample(rng, 1, 3) as f32 / 2.0;

        Self {
            pos: at,
            last_pos: at,
            center,
            radius,
            phase,
            speed,
            stroke_width,
            hue_angle: 0.0,
        }
    }

    /// Advance one tick: record the old position, refresh the hue from the
    /// current angular position, then move along the parametric circle.
    pub fn update(&mut self) {
        self.last_pos = self.pos;

        let dir = self.pos - self.center;
        let hue = dir.y.atan2(dir.x).to_degrees() + 180.0;
        self.hue_angle = if hue.is_finite() { hue } else { 0.0 };

        self.pos = self.center
            + Vec2::new((-self.phase).sin(), (-self.phase).cos()) * self.radius;
        self.phase += self.speed;
    }

    /// Stroke the segment from the previous position to the current one.
    pub fn draw(&self, painter: &Painter, origin: Pos2) {
        painter.line_segment(
            [origin + self.last_pos, origin + self.pos],
            Stroke::new(self.stroke_width, hue_color(self.hue_angle)),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spawn_at(x: f32, y: f32, center: Vec2) -> Orb {
        let mut rng = rand::thread_rng();
        Orb::spawn(Vec2::new(x, y), center, &OrbConfig::default(), &mut rng)
    }

    #[test]
    fn spawn_radius_is_distance_to_center() {
        let center = Vec2::new(400.0, 300.0);
        let orb = spawn_at(400.0, 500.0, center);
        assert!((orb.radius - 200.0).abs() < 1e-3);
    }

    #[test]
    fn spawn_speed_has_floor() {
        let center = Vec2::new(400.0, 300.0);
        // Zero radius: the random factor vanishes, only the floor remains.
        let orb = spawn_at(400.0, 300.0, center);
        assert!((orb.speed - 0.015).abs() < 1e-6);
    }

    #[test]
    fn update_preserves_orbit_invariant() {
        let center = Vec2::new(640.0, 360.0);
        let mut orb = spawn_at(100.0, 50.0, center);
        for _ in 0..200 {
            orb.update();
            let dist = (orb.pos - orb.center).length();
            let tolerance = 1e-3 * orb.radius.max(1.0);
            assert!(
                (dist - orb.radius).abs() < tolerance,
                "orbit invariant broken: dist={} radius={}",
                dist,
                orb.radius
            );
        }
    }

    #[test]
    fn update_records_last_position() {
        let center = Vec2::new(640.0, 360.0);
        let mut orb = spawn_at(200.0, 360.0, center);
        let before = orb.pos;
        orb.update();
        assert_eq!(orb.last_pos, before);
    }

    #[test]
    fn phase_advances_by_speed() {
        let center = Vec2::new(640.0, 360.0);
        let mut orb = spawn_at(200.0, 360.0, center);
        let phase = orb.phase;
        orb.update();
        assert!((orb.phase - phase - orb.speed).abs() < 1e-6);
    }

    #[test]
    fn hue_angle_spans_full_circle() {
        let center = Vec2::new(640.0, 360.0);
        let mut orb = spawn_at(200.0, 100.0, center);
        for _ in 0..50 {
            orb.update();
            assert!(
                (0.0..=360.0).contains(&orb.hue_angle),
                "hue out of range: {}",
                orb.hue_angle
            );
        }
    }

    #[test]
    fn zero_radius_orb_stays_at_center() {
        // A drag exactly at the canvas center is a valid, stable orbit.
        let center = Vec2::new(640.0, 360.0);
        let mut orb = spawn_at(640.0, 360.0, center);
        for _ in 0..10 {
            orb.update();
            assert_eq!(orb.pos, center);
            assert!(orb.hue_angle.is_finite());
        }
    }
}
