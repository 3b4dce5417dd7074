//! Printable document export.
//!
//! Renders the chart into a self-contained HTML page: an SVG floor plan
//! sized to the item bounding box, next to a numbered attendance sign-in
//! list. The page asks the browser to print itself on load; file delivery
//! and the print dialog belong to the embedding shell.

use crate::chart::Chart;
use crate::constants::{EXPORT_MIN_ATTENDANCE_LINES, EXPORT_PADDING};
use std::fmt::Write as _;

/// Render the chart as a printable HTML document. Returns None for an
/// empty chart - there is nothing to print.
pub fn render_print_document(chart: &Chart) -> Option<String> {
    if chart.items.is_empty() {
        return None;
    }

    let min_x = fold_items(chart, f32::INFINITY, f32::min, |i| i.position.0) - EXPORT_PADDING;
    let max_x = fold_items(chart, f32::NEG_INFINITY, f32::max, |i| {
        i.position.0 + i.size.0
    }) + EXPORT_PADDING;
    let min_y = fold_items(chart, f32::INFINITY, f32::min, |i| i.position.1) - EXPORT_PADDING;
    let max_y = fold_items(chart, f32::NEG_INFINITY, f32::max, |i| {
        i.position.1 + i.size.1
    }) + EXPORT_PADDING;
    let width = max_x - min_x;
    let height = max_y - min_y;

    let title = xml_escape(&chart.name);

    let mut svg = String::new();
    let _ = write!(
        svg,
        r#"<svg width="{width}" height="{height}" viewBox="{min_x} {min_y} {width} {height}" xmlns="http://www.w3.org/2000/svg">"#
    );
    svg.push_str(
        r#"
  <style>
    .item { stroke: #6b7280; stroke-width: 2; }
    .item-text { font-family: Arial, sans-serif; font-size: 10px; text-anchor: middle; fill: #374151; }
    .title { font-family: Arial, sans-serif; font-size: 16px; font-weight: bold; text-anchor: middle; fill: #1f2937; }
  </style>"#,
    );

    let center_x = min_x + width / 2.0;
    let _ = write!(
        svg,
        r#"
  <text x="{center_x}" y="{}" class="title">{title}</text>
  <text x="{center_x}" y="{}" class="item-text">Date: _____________ Meeting: _____________</text>"#,
        min_y + 20.0,
        min_y + 35.0,
    );

    for (index, item) in chart.items.iter().enumerate() {
        let (x, y) = item.position;
        let (w, h) = item.size;
        let label = xml_escape(&item.display_label(index));
        let _ = write!(
            svg,
            r#"
  <rect x="{x}" y="{y}" width="{w}" height="{h}" rx="3" class="item" fill="{}"/>
  <text x="{}" y="{}" class="item-text">{label}</text>"#,
            item.kind.fill_color(),
            x + w / 2.0,
            y + h / 2.0 + 3.0,
        );
    }
    svg.push_str("\n</svg>");

    // Sign-in list sized to the seat count, never shorter than the
    // printed default
    let lines = chart.seat_count().max(EXPORT_MIN_ATTENDANCE_LINES);
    let mut names = String::new();
    for i in 1..=lines {
        let _ = write!(names, "        <li>{i}. _________________________</li>\n");
    }

    Some(format!(
        r#"<!DOCTYPE html>
<html>
  <head>
    <title>{title}</title>
    <style>
      body {{ margin: 0; padding: 20px; font-family: Arial, sans-serif; background: white; }}
      .container {{ display: flex; gap: 20px; }}
      .chart-section {{ flex: 1; }}
      .names-section {{ width: 200px; border-left: 2px solid #ccc; padding-left: 20px; }}
      .names-list {{ list-style: none; padding: 0; margin: 0; }}
      .names-list li {{ border-bottom: 1px solid #ddd; padding: 8px 0; font-size: 14px; }}
      h3 {{ margin-top: 0; color: #1f2937; border-bottom: 2px solid #1f2937; padding-bottom: 5px; }}
      @media print {{ body {{ margin: 0; }} .container {{ page-break-inside: avoid; }} }}
    </style>
  </head>
  <body>
    <div class="container">
      <div class="chart-section">{svg}</div>
      <div class="names-section">
        <h3>Attendance</h3>
        <ul class="names-list">
{names}        </ul>
      </div>
    </div>
    <script>window.onload = function() {{ window.print(); }}</script>
  </body>
</html>
"#
    ))
}

fn fold_items(chart: &Chart, init: f32, fold: fn(f32, f32) -> f32, value: fn(&crate::types::Item) -> f32) -> f32 {
    chart.items.iter().map(value).fold(init, fold)
}

fn xml_escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}
