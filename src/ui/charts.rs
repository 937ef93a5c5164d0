use eframe::egui::{pos2, vec2, Align2, Color32, FontId, Rect, Sense, Ui};
use eframe::egui::epaint::TextShape;
use egui_plot::{Bar, BarChart, Legend, Plot};

use crate::color::{diverging_color, generate_palette};
use crate::stats::Histogram;

// ---------------------------------------------------------------------------
// Histogram
// ---------------------------------------------------------------------------

/// 30-bin style histogram: one bar per bin, centred on the bin, with
/// the value axis labelled by the column name.
pub fn histogram_plot(ui: &mut Ui, id: &str, hist: &Histogram, x_label: &str) {
    let bars: Vec<Bar> = hist
        .counts
        .iter()
        .enumerate()
        .map(|(i, &count)| {
            let center = (hist.edges[i] + hist.edges[i + 1]) / 2.0;
            Bar::new(center, count as f64).width(hist.edges[i + 1] - hist.edges[i])
        })
        .collect();

    Plot::new(id)
        .height(260.0)
        .x_axis_label(x_label)
        .y_axis_label("Frequency")
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(false)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(
                BarChart::new(bars)
                    .color(Color32::LIGHT_BLUE)
                    .name(x_label),
            );
        });
}

// ---------------------------------------------------------------------------
// Grouped-mean bar chart
// ---------------------------------------------------------------------------

/// One coloured bar per column mean, named in the legend. Entries with
/// no mean (empty filter result) are skipped.
pub fn mean_bars_plot(ui: &mut Ui, id: &str, entries: &[(String, f64)], y_label: &str) {
    let palette = generate_palette(entries.len());

    Plot::new(id)
        .height(240.0)
        .y_axis_label(y_label)
        .legend(Legend::default())
        .show_axes([false, true])
        .allow_boxed_zoom(false)
        .allow_drag(false)
        .allow_scroll(false)
        .allow_zoom(false)
        .show(ui, |plot_ui| {
            for (i, ((name, mean), color)) in entries.iter().zip(palette).enumerate() {
                if !mean.is_finite() {
                    continue;
                }
                let bar = Bar::new(i as f64, *mean).width(0.6);
                plot_ui.bar_chart(BarChart::new(vec![bar]).color(color).name(name));
            }
        });
}

// ---------------------------------------------------------------------------
// Correlation heatmap
// ---------------------------------------------------------------------------

/// Colour-mapped correlation grid painted directly: row labels on the
/// left, rotated column labels below, and a colour-scale legend on the
/// right. Hovering a cell shows the pair and its coefficient.
pub fn correlation_heatmap(ui: &mut Ui, labels: &[String], matrix: &[Vec<f64>]) {
    let n = labels.len();
    if n == 0 || matrix.len() != n {
        return;
    }

    let cell = 26.0_f32;
    let font = FontId::proportional(11.0);
    let text_color = ui.visuals().text_color();

    let galleys: Vec<_> = labels
        .iter()
        .map(|l| ui.painter().layout_no_wrap(l.clone(), font.clone(), text_color))
        .collect();
    let label_len = galleys.iter().map(|g| g.size().x).fold(0.0, f32::max) + 8.0;

    let grid = cell * n as f32;
    let bar_w = 14.0;
    let size = vec2(label_len + grid + 18.0 + bar_w + 36.0, grid + label_len + 4.0);
    let (response, painter) = ui.allocate_painter(size, Sense::hover());
    let origin = response.rect.min + vec2(label_len, 0.0);

    // Cells. Row i is the y direction, column j the x direction.
    for (i, row) in matrix.iter().enumerate() {
        for (j, &value) in row.iter().enumerate() {
            let rect = Rect::from_min_size(
                pos2(origin.x + j as f32 * cell, origin.y + i as f32 * cell),
                vec2(cell, cell),
            );
            painter.rect_filled(rect.shrink(0.5), 0.0, diverging_color(value));
        }
    }

    // Row labels, right-aligned against the grid.
    for (i, label) in labels.iter().enumerate() {
        painter.text(
            pos2(origin.x - 4.0, origin.y + (i as f32 + 0.5) * cell),
            Align2::RIGHT_CENTER,
            label,
            font.clone(),
            text_color,
        );
    }

    // Column labels, rotated to read top-to-bottom below the grid.
    for (j, galley) in galleys.iter().enumerate() {
        let pos = pos2(
            origin.x + (j as f32 + 0.5) * cell + galley.size().y / 2.0,
            origin.y + grid + 4.0,
        );
        painter.add(
            TextShape::new(pos, galley.clone(), text_color)
                .with_angle(std::f32::consts::FRAC_PI_2),
        );
    }

    // Colour-scale legend, +1 at the top.
    let bar_x = origin.x + grid + 18.0;
    let steps = 64;
    let step_h = grid / steps as f32;
    for s in 0..steps {
        let t = 1.0 - 2.0 * (s as f64 + 0.5) / steps as f64;
        let rect = Rect::from_min_size(
            pos2(bar_x, origin.y + s as f32 * step_h),
            vec2(bar_w, step_h + 0.5),
        );
        painter.rect_filled(rect, 0.0, diverging_color(t));
    }
    for (frac, label) in [(0.0_f32, "1.0"), (0.5, "0.0"), (1.0, "-1.0")] {
        painter.text(
            pos2(bar_x + bar_w + 4.0, origin.y + frac * grid),
            Align2::LEFT_CENTER,
            label,
            font.clone(),
            text_color,
        );
    }

    // Per-cell hover read-out.
    if let Some(pos) = response.hover_pos() {
        let dx = pos.x - origin.x;
        let dy = pos.y - origin.y;
        if dx >= 0.0 && dy >= 0.0 && dx < grid && dy < grid {
            let j = (dx / cell) as usize;
            let i = (dy / cell) as usize;
            response.on_hover_text(format!(
                "{} / {}: r = {:.2}",
                labels[i], labels[j], matrix[i][j]
            ));
        }
    }
}
