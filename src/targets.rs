//! Target Entities for Orb Studio RS
//! Static collision regions drawn as faces, respawned elsewhere when hit

use std::f32::consts::PI;

use egui::{Color32, Painter, Pos2, Shape, Stroke, Vec2};
use rand::Rng;

use crate::config::TargetConfig;
use crate::rng::sample;

/// A static circular region; hit by a drag point, it is replaced in place.
#[derive(Clone, Copy, Debug)]
pub struct Target {
    pub pos: Vec2,
}

impl Target {
    /// Uniformly random position, inset from every edge by the target radius.
    pub fn random<R: Rng>(width: f32, height: f32, config: &TargetConfig, rng: &mut R) -> Self {
        let r = config.radius;
        let max_x = (width - r).max(r);
        let max_y = (height - r).max(r);
        Self {
            pos: Vec2::new(
                sample(rng, r as i32, max_x as i32) as f32,
                sample(rng, r as i32, max_y as i32) as f32,
            ),
        }
    }

    /// Strictly-inside test against a query point.
    pub fn contains(&self, point: Vec2, radius: f32) -> bool {
        (point - self.pos).length() < radius
    }

    /// Draw the face: head, eyes, and a smile arc through the lower half.
    pub fn draw(&self, painter: &Painter, origin: Pos2, radius: f32) {
        let center = origin + self.pos;

        painter.circle_filled(center, radius, Color32::YELLOW);

        painter.circle_filled(center + Vec2::new(-5.0, -5.0), 2.0, Color32::BLACK);
        painter.circle_filled(center + Vec2::new(5.0, -5.0), 2.0, Color32::BLACK);

        let mouth = center + Vec2::new(0.0, 5.0);
        let steps = 16;
        let points: Vec<Pos2> = (0..=steps)
            .map(|i| {
                let a = PI * i as f32 / steps as f32;
                Pos2::new(mouth.x + a.cos() * 7.0, mouth.y + a.sin() * 7.0)
            })
            .collect();
        painter.add(Shape::line(points, Stroke::new(1.0, Color32::BLACK)));
    }
}
