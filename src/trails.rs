//! Trail System for Orb Studio RS
//! Retained fading marks emulating canvas persistence under immediate mode

use egui::{Color32, Painter, Pos2, Stroke, Vec2};

const MIN_BRIGHTNESS: f32 = 0.01;

/// A stroked segment kept from a previous frame.
#[derive(Clone, Copy)]
pub struct TrailSegment {
    pub from: Vec2,
    pub to: Vec2,
    pub width: f32,
    pub color: Color32,
    pub brightness: f32,
}

/// A filled dot kept from a previous frame.
#[derive(Clone, Copy)]
pub struct TrailDot {
    pub pos: Vec2,
    pub radius: f32,
    pub color: Color32,
    pub brightness: f32,
}

/// History of recently drawn marks. The whole screen is repainted every
/// frame, so "not clearing the canvas" is emulated by replaying old marks
/// at decaying brightness.
#[derive(Default)]
pub struct TrailSystem {
    segments: Vec<TrailSegment>,
    dots: Vec<TrailDot>,
}

impl TrailSystem {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.segments.clear();
        self.dots.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty() && self.dots.is_empty()
    }

    pub fn mark_count(&self) -> usize {
        self.segments.len() + self.dots.len()
    }

    pub fn push_segment(&mut self, from: Vec2, to: Vec2, width: f32, color: Color32) {
        self.segments.push(TrailSegment {
            from,
            to,
            width,
            color,
            brightness: 1.0,
        });
    }

    pub fn push_dot(&mut self, pos: Vec2, radius: f32, color: Color32) {
        self.dots.push(TrailDot {
            pos,
            radius,
            color,
            brightness: 1.0,
        });
    }

    /// Age all retained marks by one frame. With trails off the history is
    /// wiped, which is the full-repaint policy; with trails on the fade
    /// factor plays the role of the translucent wash.
    pub fn fade(&mut self, enabled: bool, fade: f32) {
        if !enabled {
            self.clear();
            return;
        }

        self.segments.retain_mut(|s| {
            s.brightness *= fade;
            s.brightness > MIN_BRIGHTNESS
        });
        self.dots.retain_mut(|d| {
            d.brightness *= fade;
            d.brightness > MIN_BRIGHTNESS
        });
    }

    pub fn render(&self, painter: &Painter, origin: Pos2) {
        for s in &self.segments {
            let alpha = (s.brightness * 255.0) as u8;
            if alpha < 2 {
                continue;
            }
            let color = Color32::from_rgba_premultiplied(
                s.color.r(),
                s.color.g(),
                s.color.b(),
                alpha,
            );
            painter.line_segment(
                [origin + s.from, origin + s.to],
                Stroke::new(s.width, color),
            );
        }

        for d in &self.dots {
            let alpha = (d.brightness * 255.0) as u8;
            if alpha < 2 {
                continue;
            }
            let color = Color32::from_rgba_premultiplied(
                d.color.r(),
                d.color.g(),
                d.color.b(),
                alpha,
            );
            painter.circle_filled(origin + d.pos, d.radius, color);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fade_with_trails_off_clears_history() {
        let mut trails = TrailSystem::new();
        trails.push_segment(Vec2::ZERO, Vec2::new(1.0, 1.0), 1.0, Color32::RED);
        trails.push_dot(Vec2::ZERO, 0.2, Color32::RED);
        trails.fade(false, 0.92);
        assert!(trails.is_empty());
    }

    #[test]
    fn fade_decays_and_eventually_drops_marks() {
        let mut trails = TrailSystem::new();
        trails.push_segment(Vec2::ZERO, Vec2::new(1.0, 1.0), 1.0, Color32::RED);
        trails.fade(true, 0.92);
        assert_eq!(trails.mark_count(), 1);

        // 0.92^n falls below the visibility threshold well within 100 frames.
        for _ in 0..100 {
            trails.fade(true, 0.92);
        }
        assert!(trails.is_empty());
    }

    #[test]
    fn fresh_marks_outlive_faded_ones() {
        let mut trails = TrailSystem::new();
        trails.push_dot(Vec2::ZERO, 0.2, Color32::RED);
        for _ in 0..40 {
            trails.fade(true, 0.92);
        }
        trails.push_dot(Vec2::new(5.0, 5.0), 0.2, Color32::GREEN);
        for _ in 0..20 {
            trails.fade(true, 0.92);
        }
        // The old dot is gone (0.92^60), the new one still visible.
        assert_eq!(trails.mark_count(), 1);
    }
}
