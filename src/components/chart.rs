//! Chart Components
//!
//! Bar and pie charts drawn on HTML5 Canvas.

use leptos::*;
use std::collections::BTreeMap;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::api::Summary;

const BAR_FILL: &str = "rgba(179, 0, 0, 0.4)";
const BAR_BORDER: &str = "#b30000";

/// Segment colors for the distribution pie, cycled when the backend reports
/// more equipment types than colors.
const SEGMENT_COLORS: [&str; 5] = [
    "rgba(179, 0, 0, 0.8)",   // base dark red
    "rgba(140, 0, 0, 0.8)",   // deep red
    "rgba(100, 0, 0, 0.8)",   // very dark red
    "rgba(220, 20, 60, 0.8)", // crimson
    "rgba(128, 0, 0, 0.8)",   // maroon
];

const BACKGROUND: &str = "#1f2937"; // gray-800
const GRID: &str = "#374151"; // gray-700
const LABEL: &str = "#9ca3af"; // gray-400

/// Bar chart of the three summary averages
#[component]
pub fn BarChart(summary: Summary) -> impl IntoView {
    let canvas_ref = create_node_ref::<html::Canvas>();

    let bars = [
        ("Avg Flowrate", summary.avg_flowrate.unwrap_or_default()),
        ("Avg Pressure", summary.avg_pressure.unwrap_or_default()),
        ("Avg Temp", summary.avg_temperature.unwrap_or_default()),
    ];

    // Redraw once the canvas element is attached.
    create_effect(move |_| {
        if let Some(canvas) = canvas_ref.get() {
            draw_bar_chart(&canvas, &bars);
        }
    });

    view! {
        <canvas
            node_ref=canvas_ref
            width="480"
            height="300"
            class="w-full rounded-lg"
        />
    }
}

/// Pie chart of the equipment type distribution
#[component]
pub fn PieChart(distribution: BTreeMap<String, u32>) -> impl IntoView {
    let canvas_ref = create_node_ref::<html::Canvas>();
    let segments = pie_segments(&distribution);

    let segments_for_draw = segments.clone();
    create_effect(move |_| {
        if let Some(canvas) = canvas_ref.get() {
            draw_pie_chart(&canvas, &segments_for_draw);
        }
    });

    view! {
        <div>
            <canvas
                node_ref=canvas_ref
                width="300"
                height="300"
                class="mx-auto rounded-lg"
            />

            // Legend
            <div class="flex justify-center flex-wrap gap-4 mt-4">
                {segments.into_iter().enumerate().map(|(idx, segment)| {
                    let color = SEGMENT_COLORS[idx % SEGMENT_COLORS.len()];
                    view! {
                        <div class="flex items-center space-x-2">
                            <div
                                class="w-3 h-3 rounded-full"
                                style=format!("background-color: {}", color)
                            />
                            <span class="text-sm text-gray-300">
                                {format!("{}: {}", segment.label, segment.value)}
                            </span>
                        </div>
                    }
                }).collect_view()}
            </div>
        </div>
    }
}

/// One slice of the distribution pie.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct PieSegment {
    pub label: String,
    pub value: u32,
    pub start: f64,
    pub sweep: f64,
}

/// Angular layout for the distribution: slices start at twelve o'clock and
/// proceed clockwise in map order. Empty or all-zero distributions yield no
/// segments.
pub(crate) fn pie_segments(distribution: &BTreeMap<String, u32>) -> Vec<PieSegment> {
    let total: u32 = distribution.values().sum();
    if total == 0 {
        return Vec::new();
    }

    let mut start = -std::f64::consts::FRAC_PI_2;
    distribution
        .iter()
        .map(|(label, &value)| {
            let sweep = f64::from(value) / f64::from(total) * std::f64::consts::TAU;
            let segment = PieSegment {
                label: label.clone(),
                value,
                start,
                sweep,
            };
            start += sweep;
            segment
        })
        .collect()
}

/// Heights of each bar as a fraction of the tallest, in input order.
/// Non-positive values render as zero-height bars.
pub(crate) fn bar_fractions(values: &[f64]) -> Vec<f64> {
    let max = values.iter().cloned().fold(0.0_f64, f64::max);
    if max <= 0.0 {
        return vec![0.0; values.len()];
    }
    values.iter().map(|v| (v / max).max(0.0)).collect()
}

fn context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
    use wasm_bindgen::JsCast;

    match canvas.get_context("2d") {
        Ok(Some(ctx)) => ctx.dyn_into::<CanvasRenderingContext2d>().ok(),
        _ => None,
    }
}

/// Draw the averages bar chart on canvas
fn draw_bar_chart(canvas: &HtmlCanvasElement, bars: &[(&'static str, f64)]) {
    let ctx = match context_2d(canvas) {
        Some(ctx) => ctx,
        None => return,
    };

    let width = canvas.width() as f64;
    let height = canvas.height() as f64;

    let margin_left = 60.0;
    let margin_right = 20.0;
    let margin_top = 24.0;
    let margin_bottom = 40.0;

    let chart_width = width - margin_left - margin_right;
    let chart_height = height - margin_top - margin_bottom;

    // Clear canvas
    ctx.set_fill_style_str(BACKGROUND);
    ctx.fill_rect(0.0, 0.0, width, height);

    let values: Vec<f64> = bars.iter().map(|(_, v)| *v).collect();
    let max = values.iter().cloned().fold(0.0_f64, f64::max).max(1.0);

    // Horizontal grid lines with y-axis labels
    ctx.set_line_width(1.0);
    ctx.set_font("12px sans-serif");
    for i in 0..=5 {
        let y = margin_top + (f64::from(i) / 5.0) * chart_height;

        ctx.set_stroke_style_str(GRID);
        ctx.begin_path();
        ctx.move_to(margin_left, y);
        ctx.line_to(width - margin_right, y);
        ctx.stroke();

        let value = max * (1.0 - f64::from(i) / 5.0);
        ctx.set_fill_style_str(LABEL);
        ctx.set_text_align("right");
        let _ = ctx.fill_text(&format!("{:.1}", value), margin_left - 8.0, y + 4.0);
    }

    // Bars with value labels above and category labels below
    let fractions = bar_fractions(&values);
    let slot = chart_width / bars.len() as f64;
    let bar_width = slot * 0.6;

    ctx.set_text_align("center");
    ctx.set_line_width(2.0);

    for (i, ((label, value), fraction)) in bars.iter().zip(fractions.iter()).enumerate() {
        let x = margin_left + slot * (i as f64 + 0.5) - bar_width / 2.0;
        let bar_height = fraction * chart_height;
        let y = margin_top + chart_height - bar_height;

        ctx.set_fill_style_str(BAR_FILL);
        ctx.fill_rect(x, y, bar_width, bar_height);
        ctx.set_stroke_style_str(BAR_BORDER);
        ctx.stroke_rect(x, y, bar_width, bar_height);

        let center = x + bar_width / 2.0;
        ctx.set_fill_style_str(LABEL);
        let _ = ctx.fill_text(&format!("{:.2}", value), center, y - 6.0);
        let _ = ctx.fill_text(label, center, height - 12.0);
    }
}

/// Draw the distribution pie on canvas
fn draw_pie_chart(canvas: &HtmlCanvasElement, segments: &[PieSegment]) {
    let ctx = match context_2d(canvas) {
        Some(ctx) => ctx,
        None => return,
    };

    let width = canvas.width() as f64;
    let height = canvas.height() as f64;

    ctx.set_fill_style_str(BACKGROUND);
    ctx.fill_rect(0.0, 0.0, width, height);

    let cx = width / 2.0;
    let cy = height / 2.0;
    let radius = (width.min(height) / 2.0) - 12.0;

    ctx.set_line_width(2.0);

    for (idx, segment) in segments.iter().enumerate() {
        ctx.begin_path();
        ctx.move_to(cx, cy);
        let _ = ctx.arc(cx, cy, radius, segment.start, segment.start + segment.sweep);
        ctx.close_path();

        ctx.set_fill_style_str(SEGMENT_COLORS[idx % SEGMENT_COLORS.len()]);
        ctx.fill();
        ctx.set_stroke_style_str(BACKGROUND);
        ctx.stroke();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn distribution(pairs: &[(&str, u32)]) -> BTreeMap<String, u32> {
        pairs
            .iter()
            .map(|(label, count)| (label.to_string(), *count))
            .collect()
    }

    #[test]
    fn pie_segments_split_proportionally() {
        let segments = pie_segments(&distribution(&[("Pump", 3), ("Valve", 4)]));

        assert_eq!(segments.len(), 2);
        assert_eq!(segments[0].label, "Pump");
        assert_eq!(segments[0].value, 3);
        assert_eq!(segments[1].label, "Valve");
        assert_eq!(segments[1].value, 4);

        let expected = 3.0 / 7.0 * std::f64::consts::TAU;
        assert!((segments[0].sweep - expected).abs() < 1e-9);

        let total: f64 = segments.iter().map(|s| s.sweep).sum();
        assert!((total - std::f64::consts::TAU).abs() < 1e-9);
    }

    #[test]
    fn pie_segments_are_contiguous() {
        let segments = pie_segments(&distribution(&[("Pump", 1), ("Reactor", 2), ("Valve", 1)]));
        for pair in segments.windows(2) {
            assert!((pair[1].start - (pair[0].start + pair[0].sweep)).abs() < 1e-9);
        }
    }

    #[test]
    fn empty_distribution_yields_no_segments() {
        assert!(pie_segments(&BTreeMap::new()).is_empty());
        assert!(pie_segments(&distribution(&[("Pump", 0)])).is_empty());
    }

    #[test]
    fn bar_fractions_scale_to_tallest() {
        let fractions = bar_fractions(&[12.345, 1.2, 99.0]);
        assert_eq!(fractions.len(), 3);
        assert!((fractions[2] - 1.0).abs() < 1e-9);
        assert!(fractions.iter().all(|f| (0.0..=1.0).contains(f)));
        assert!(fractions[0] > fractions[1]);
    }

    #[test]
    fn bar_fractions_handle_degenerate_input() {
        assert_eq!(bar_fractions(&[0.0, 0.0]), vec![0.0, 0.0]);
        assert_eq!(bar_fractions(&[-5.0, 0.0]), vec![0.0, 0.0]);
    }
}
