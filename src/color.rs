//! Hue mapping for Orb Studio RS
//! Angular position to color, full saturation at half lightness

use egui::ecolor::Hsva;
use egui::Color32;

/// Map a hue angle in degrees to a fully saturated color.
///
/// Non-finite angles (degenerate direction vectors) fall back to 0 degrees
/// so no NaN ever reaches color formatting.
pub fn hue_color(angle_deg: f32) -> Color32 {
    let angle = if angle_deg.is_finite() { angle_deg } else { 0.0 };
    let h = (angle / 360.0).rem_euclid(1.0);
    // HSL at 100% saturation / 50% lightness equals HSV at s=1, v=1
    Color32::from(Hsva::new(h, 1.0, 1.0, 1.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hue_zero_is_red() {
        let c = hue_color(0.0);
        assert_eq!(c.r(), 255);
        assert_eq!(c.g(), 0);
        assert_eq!(c.b(), 0);
    }

    #[test]
    fn hue_wraps_at_full_circle() {
        assert_eq!(hue_color(360.0), hue_color(0.0));
    }

    #[test]
    fn non_finite_hue_falls_back_to_zero() {
        assert_eq!(hue_color(f32::NAN), hue_color(0.0));
        assert_eq!(hue_color(f32::INFINITY), hue_color(0.0));
    }
}
