//! SVG layout for the trend charts. Pure arithmetic, so it builds and tests
//! on every target.

use std::f64::consts::{FRAC_PI_2, TAU};

/// Plot area shared by the bar and line charts (viewBox units).
pub const CHART_WIDTH: f64 = 560.0;
pub const CHART_HEIGHT: f64 = 260.0;
pub const CHART_PADDING: f64 = 32.0;

#[derive(Debug, Clone, PartialEq)]
pub struct BarRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Upper bound of the y axis: the largest value, or 1 for empty/flat data.
pub fn axis_max(values: &[f64]) -> f64 {
    let max = values.iter().copied().fold(0.0_f64, f64::max);
    if max > 0.0 {
        max
    } else {
        1.0
    }
}

pub fn bar_rects(values: &[f64]) -> Vec<BarRect> {
    if values.is_empty() {
        return Vec::new();
    }

    let max = axis_max(values);
    let plot_width = CHART_WIDTH - CHART_PADDING * 2.0;
    let plot_height = CHART_HEIGHT - CHART_PADDING * 2.0;
    let slot = plot_width / values.len() as f64;
    let width = slot * 0.6;

    values
        .iter()
        .enumerate()
        .map(|(index, value)| {
            let height = (value.max(0.0) / max) * plot_height;
            BarRect {
                x: CHART_PADDING + slot * index as f64 + (slot - width) / 2.0,
                y: CHART_HEIGHT - CHART_PADDING - height,
                width,
                height,
            }
        })
        .collect()
}

/// Vertices of the line chart, evenly spaced along x.
pub fn line_points(values: &[f64]) -> Vec<(f64, f64)> {
    let max = axis_max(values);
    let plot_width = CHART_WIDTH - CHART_PADDING * 2.0;
    let plot_height = CHART_HEIGHT - CHART_PADDING * 2.0;
    let step = if values.len() > 1 {
        plot_width / (values.len() - 1) as f64
    } else {
        0.0
    };

    values
        .iter()
        .enumerate()
        .map(|(index, value)| {
            let x = CHART_PADDING + step * index as f64;
            let y = CHART_HEIGHT - CHART_PADDING - (value.max(0.0) / max) * plot_height;
            (x, y)
        })
        .collect()
}

/// `points` attribute of an SVG polyline.
pub fn polyline(points: &[(f64, f64)]) -> String {
    points
        .iter()
        .map(|(x, y)| format!("{x:.1},{y:.1}"))
        .collect::<Vec<_>>()
        .join(" ")
}

/// One `d` attribute per slice, clockwise from twelve o'clock, for a pie
/// centred on (`cx`, `cy`). `shares` are fractions of the whole.
pub fn pie_paths(shares: &[f64], cx: f64, cy: f64, radius: f64) -> Vec<String> {
    let mut start = -FRAC_PI_2;
    shares
        .iter()
        .map(|share| {
            let sweep = share.clamp(0.0, 1.0) * TAU;
            let end = start + sweep;
            let path = if sweep >= TAU - 1e-9 {
                // A single full slice cannot be drawn as one arc.
                format!(
                    "M {:.2} {:.2} A {r:.2} {r:.2} 0 1 1 {:.2} {:.2} A {r:.2} {r:.2} 0 1 1 {:.2} {:.2} Z",
                    cx,
                    cy - radius,
                    cx,
                    cy + radius,
                    cx,
                    cy - radius,
                    r = radius
                )
            } else {
                let (x1, y1) = (cx + radius * start.cos(), cy + radius * start.sin());
                let (x2, y2) = (cx + radius * end.cos(), cy + radius * end.sin());
                let large_arc = u8::from(sweep > std::f64::consts::PI);
                format!(
                    "M {cx:.2} {cy:.2} L {x1:.2} {y1:.2} A {radius:.2} {radius:.2} 0 {large_arc} 1 {x2:.2} {y2:.2} Z"
                )
            };
            start = end;
            path
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-6
    }

    #[test]
    fn tallest_bar_fills_plot_height() {
        let bars = bar_rects(&[50.0, 100.0, 25.0]);
        let plot_height = CHART_HEIGHT - CHART_PADDING * 2.0;

        assert_eq!(bars.len(), 3);
        assert!(close(bars[1].height, plot_height));
        assert!(close(bars[0].height, plot_height / 2.0));
        assert!(close(bars[1].y, CHART_PADDING));
        assert!(bars[0].x < bars[1].x && bars[1].x < bars[2].x);
    }

    #[test]
    fn empty_or_zero_series_do_not_divide_by_zero() {
        assert!(bar_rects(&[]).is_empty());
        let flat = bar_rects(&[0.0, 0.0]);
        assert!(flat.iter().all(|bar| bar.height == 0.0));
        assert_eq!(line_points(&[5.0]), vec![(CHART_PADDING, CHART_PADDING)]);
    }

    #[test]
    fn line_spans_plot_width() {
        let points = line_points(&[75.0, 82.0, 90.0]);
        assert!(close(points[0].0, CHART_PADDING));
        assert!(close(points[2].0, CHART_WIDTH - CHART_PADDING));
        assert!(close(points[2].1, CHART_PADDING));
        assert_eq!(polyline(&points[..1]), format!("{:.1},{:.1}", points[0].0, points[0].1));
    }

    #[test]
    fn pie_uses_large_arc_flag_for_majority_slice() {
        let paths = pie_paths(&[0.75, 0.25], 100.0, 100.0, 80.0);
        assert_eq!(paths.len(), 2);
        assert!(paths[0].contains(" 0 1 1 "));
        assert!(paths[1].contains(" 0 0 1 "));
        assert!(paths[0].starts_with("M 100.00 100.00 L 100.00 20.00"));
    }

    #[test]
    fn whole_pie_is_drawn_as_two_arcs() {
        let paths = pie_paths(&[1.0], 50.0, 50.0, 40.0);
        assert_eq!(paths[0].matches(" A ").count(), 2);
    }
}
