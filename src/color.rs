use eframe::egui::Color32;
use palette::{Hsl, IntoColor, LinSrgb, Mix, Srgb};

// ---------------------------------------------------------------------------
// Categorical palette generator
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours using evenly spaced hues.
/// Used for the bar-chart series.
pub fn generate_palette(n: usize) -> Vec<Color32> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n as f32) * 360.0;
            let hsl = Hsl::new(hue, 0.70, 0.50);
            let rgb: Srgb = hsl.into_color();
            Color32::from_rgb(
                (rgb.red * 255.0) as u8,
                (rgb.green * 255.0) as u8,
                (rgb.blue * 255.0) as u8,
            )
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Diverging colormap for the correlation heatmap
// ---------------------------------------------------------------------------

/// Map a correlation in [-1, 1] onto a blue-white-red scale; NaN cells
/// are grey. Endpoint colours approximate the familiar "coolwarm" map.
pub fn diverging_color(r: f64) -> Color32 {
    if !r.is_finite() {
        return Color32::GRAY;
    }
    let t = r.clamp(-1.0, 1.0) as f32;

    let cool = LinSrgb::new(0.230, 0.299, 0.754);
    let warm = LinSrgb::new(0.706, 0.016, 0.150);
    let mid = LinSrgb::new(0.865, 0.865, 0.865);

    let lin = if t < 0.0 {
        mid.mix(cool, -t)
    } else {
        mid.mix(warm, t)
    };
    let rgb: Srgb = Srgb::from_linear(lin);
    Color32::from_rgb(
        (rgb.red * 255.0) as u8,
        (rgb.green * 255.0) as u8,
        (rgb.blue * 255.0) as u8,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_has_requested_size_and_distinct_colors() {
        let palette = generate_palette(3);
        assert_eq!(palette.len(), 3);
        assert_ne!(palette[0], palette[1]);
        assert_ne!(palette[1], palette[2]);
    }

    #[test]
    fn diverging_endpoints_lean_the_right_way() {
        let negative = diverging_color(-1.0);
        let positive = diverging_color(1.0);
        assert!(negative.b() > negative.r());
        assert!(positive.r() > positive.b());
        assert_eq!(diverging_color(f64::NAN), Color32::GRAY);
    }
}
