mod common;

use common::FixedMetrics;
use plotlayout::viz::{
    Layout, LayoutInputs, LegendPosition, PaintCommand, compute_layout, layout_legend, wrap_widths,
};
use plotlayout::{ChartConfig, LegendEntry, Rgb8};
use proptest::prelude::*;

const RED: Rgb8 = Rgb8::new(255, 0, 0);
const BLUE: Rgb8 = Rgb8::new(0, 0, 255);

fn inputs() -> LayoutInputs {
    LayoutInputs {
        spread: 100.0,
        maximum_value: 100.0,
        column_count: 3,
    }
}

/// Legend caps 10, swatch 8, legend margin 4.
fn small_legend_config() -> ChartConfig {
    ChartConfig {
        legend_font_size: 10.0,
        legend_box_size: 8.0,
        legend_margin: 4.0,
        ..ChartConfig::with_size(800, 600)
    }
}

fn metrics() -> FixedMetrics {
    FixedMetrics::new(10.0).caps(10.0, 10.0).caps(21.0, 15.0)
}

fn base_layout(cfg: &ChartConfig, m: &FixedMetrics) -> Layout {
    compute_layout(cfg, &inputs(), m).unwrap()
}

#[test]
fn short_entries_fit_on_one_line_and_leave_graph_alone() {
    let cfg = small_legend_config();
    let m = metrics();
    let layout = base_layout(&cfg, &m);
    let entries = [LegendEntry::new("North", RED), LegendEntry::new("South", BLUE)];
    let legend = layout_legend(&entries, &cfg, &layout, &m).unwrap();

    assert_eq!(legend.lines.len(), 1);
    assert_eq!(legend.rect, layout.rect);
    assert!(legend.placements.iter().all(|p| p.line == 0));
}

#[test]
fn three_lines_push_graph_down_twice() {
    let cfg = small_legend_config();
    let m = metrics()
        .width_of("A", 400.0)
        .width_of("B", 400.0)
        .width_of("C", 400.0);
    let layout = base_layout(&cfg, &m);
    let entries = [
        LegendEntry::new("A", RED),
        LegendEntry::new("B", BLUE),
        LegendEntry::new("C", RED),
    ];
    let legend = layout_legend(&entries, &cfg, &layout, &m).unwrap();

    assert_eq!(legend.lines.len(), 3);
    assert_eq!(legend.line_height, 14.0);
    assert_eq!(legend.rect.top, layout.rect.top + 28.0);
    assert_eq!(legend.rect.height, layout.rect.height - 28.0);
    assert_eq!(legend.rect.bottom, layout.rect.bottom);

    // No title: first line sits at top margin + title margin.
    let ys: Vec<f64> = legend.placements.iter().map(|p| p.y).collect();
    assert_eq!(ys, vec![40.0, 54.0, 68.0]);
}

#[test]
fn lines_are_centered() {
    let cfg = small_legend_config();
    let m = metrics().width_of("A", 400.0).width_of("B", 400.0);
    let layout = base_layout(&cfg, &m);
    let entries = [LegendEntry::new("A", RED), LegendEntry::new("B", BLUE)];
    let legend = layout_legend(&entries, &cfg, &layout, &m).unwrap();

    let line_width = 400.0 + 2.7 * 8.0;
    for p in &legend.placements {
        assert!((p.x - (800.0 - line_width) / 2.0).abs() < 1e-9);
    }
}

#[test]
fn entries_on_a_line_advance_by_measured_width() {
    let cfg = small_legend_config();
    let m = metrics();
    let layout = base_layout(&cfg, &m);
    // "ab" is 20px, "cdef" 40px.
    let entries = [LegendEntry::new("ab", RED), LegendEntry::new("cdef", BLUE)];
    let legend = layout_legend(&entries, &cfg, &layout, &m).unwrap();

    let pad = 2.7 * 8.0;
    let total = 20.0 + pad + 40.0 + pad;
    let x0 = (800.0 - total) / 2.0;
    assert!((legend.placements[0].x - x0).abs() < 1e-9);
    assert!((legend.placements[1].x - (x0 + 20.0 + pad)).abs() < 1e-9);
}

#[test]
fn oversized_entry_takes_its_own_line_without_error() {
    let cfg = small_legend_config();
    let m = metrics().width_of("Huge", 2000.0);
    let layout = base_layout(&cfg, &m);
    let entries = [
        LegendEntry::new("x", RED),
        LegendEntry::new("Huge", BLUE),
        LegendEntry::new("y", RED),
    ];
    let legend = layout_legend(&entries, &cfg, &layout, &m).unwrap();
    assert_eq!(legend.lines.len(), 3);
    assert_eq!(legend.lines[1].widths.len(), 1);
    // Centering an oversized line puts it off-canvas on the left.
    assert!(legend.placements[1].x < 0.0);
}

#[test]
fn paints_text_and_swatch_per_entry() {
    let cfg = small_legend_config();
    let m = metrics();
    let layout = base_layout(&cfg, &m);
    let entries = [LegendEntry::new("North", RED)];
    let legend = layout_legend(&entries, &cfg, &layout, &m).unwrap();
    let p = &legend.placements[0];

    assert_eq!(legend.commands.len(), 2);
    match &legend.commands[0] {
        PaintCommand::Text { text, x, y, .. } => {
            assert_eq!(text, "North");
            assert!((x - (p.x + 1.7 * 8.0)).abs() < 1e-9);
            assert_eq!(*y, p.y);
        }
        other => panic!("expected text, got {other:?}"),
    }
    match &legend.commands[1] {
        PaintCommand::FillRect {
            left,
            top,
            right,
            bottom,
            color,
        } => {
            assert_eq!(*left, p.x);
            assert_eq!(*right, p.x + 8.0);
            assert_eq!(*top, p.y - 4.0);
            assert_eq!(*bottom, p.y + 4.0);
            assert_eq!(*color, RED);
        }
        other => panic!("expected swatch, got {other:?}"),
    }
    assert_eq!(legend.next_palette_index, 0);
}

#[test]
fn baseline_follows_title_and_position() {
    let m = metrics().caps(36.0, 25.0);

    let titled = ChartConfig {
        title: Some("Title".into()),
        ..small_legend_config()
    };
    let layout = base_layout(&titled, &m);
    let legend = layout_legend(&[LegendEntry::new("a", RED)], &titled, &layout, &m).unwrap();
    assert_eq!(legend.placements[0].y, 20.0 + 20.0 + 25.0);

    let bottom = ChartConfig {
        legend_position: LegendPosition::Bottom,
        ..small_legend_config()
    };
    let layout = base_layout(&bottom, &m);
    let legend = layout_legend(&[LegendEntry::new("a", RED)], &bottom, &layout, &m).unwrap();
    assert_eq!(legend.placements[0].y, layout.rect.height + 20.0);
}

#[test]
fn empty_legend_is_a_no_op() {
    let cfg = small_legend_config();
    let m = metrics();
    let layout = base_layout(&cfg, &m);
    let legend = layout_legend(&[], &cfg, &layout, &m).unwrap();
    assert!(legend.lines.is_empty());
    assert!(legend.commands.is_empty());
    assert_eq!(legend.rect, layout.rect);
}

proptest! {
    #[test]
    fn wrapped_lines_respect_the_width_limit(
        ws in prop::collection::vec(0.0f64..900.0, 0..24),
        columns in 100.0f64..2000.0,
    ) {
        let limit = columns * 0.9;
        let lines = wrap_widths(&ws, limit);

        let flattened: Vec<f64> = lines.iter().flat_map(|l| l.widths.clone()).collect();
        prop_assert_eq!(flattened, ws);

        for line in &lines {
            prop_assert!(!line.widths.is_empty());
            if line.total() > limit {
                prop_assert_eq!(line.widths.len(), 1);
            }
        }
    }
}
