// ABOUTME: Writes a resolved placement as JSON, a text table, or an HTML page.
// ABOUTME: HTML boxes use percentage geometry so the page scales with the window.

use std::fmt::Write as _;

use anyhow::Result;
use plotgrid_core::OutputFormat;
use plotgrid_layout::Placement;

/// Hue step between axis colors in the HTML page
const HUE_STEP: usize = 47;

pub fn render(placement: &Placement, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => {
            let mut out = serde_json::to_string_pretty(placement)?;
            out.push('\n');
            Ok(out)
        }
        OutputFormat::Table => Ok(render_table(placement)),
        OutputFormat::Html => Ok(render_html(placement)),
    }
}

fn render_table(placement: &Placement) -> String {
    let id_width = placement
        .panels
        .iter()
        .map(|panel| panel.id.as_str().chars().count() + 2 * panel.depth)
        .max()
        .unwrap_or(0)
        .max("panel".len());

    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<id_width$}  {:>6}  {:>6}  {:>6}  {:>6}  {:>5}  {:>5}",
        "panel", "x", "y", "width", "height", "xaxis", "yaxis"
    );
    for panel in &placement.panels {
        let label = format!("{}{}", "  ".repeat(panel.depth), panel.id);
        let _ = writeln!(
            out,
            "{:<id_width$}  {:>6.3}  {:>6.3}  {:>6.3}  {:>6.3}  {:>5}  {:>5}",
            label,
            panel.rect.x,
            panel.rect.y,
            panel.rect.width,
            panel.rect.height,
            format!("x{}", panel.x_axis),
            format!("y{}", panel.y_axis),
        );
    }
    let _ = writeln!(
        out,
        "{} panels, {} x axes, {} y axes",
        placement.len(),
        placement.x_axes,
        placement.y_axes
    );
    out
}

fn render_html(placement: &Placement) -> String {
    let mut out = String::from(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>plotgrid</title>\n<style>\n\
         html, body { margin: 0; height: 100%; font-family: sans-serif; }\n\
         .figure { position: relative; width: 100vw; height: 100vh; }\n\
         .panel { position: absolute; box-sizing: border-box; border: 1px solid #444; \
         display: flex; flex-direction: column; align-items: center; justify-content: center; }\n\
         .axes { font-size: 0.75em; color: #333; }\n\
         </style>\n</head>\n<body>\n<div class=\"figure\">\n",
    );

    for panel in &placement.panels {
        let hue = (panel.x_axis * HUE_STEP) % 360;
        let _ = writeln!(
            out,
            "  <div class=\"panel\" id=\"{id}\" data-xaxis=\"x{x}\" data-yaxis=\"y{y}\" \
             style=\"left: {left:.3}%; top: {top:.3}%; width: {width:.3}%; height: {height:.3}%; \
             background: hsl({hue}, 60%, 92%);\"><strong>{id}</strong>\
             <span class=\"axes\">x{x} / y{y}</span></div>",
            id = escape_html(panel.id.as_str()),
            x = panel.x_axis,
            y = panel.y_axis,
            left = panel.rect.x * 100.0,
            top = panel.rect.y * 100.0,
            width = panel.rect.width * 100.0,
            height = panel.rect.height * 100.0,
        );
    }

    out.push_str("</div>\n</body>\n</html>\n");
    out
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use plotgrid_layout::{compose, ComposeOptions, Panel};

    fn sample() -> Placement {
        let inner = compose(
            vec![Panel::leaf("price"), Panel::leaf("volume")],
            &ComposeOptions::rows(2).share_x(true).margin(0.0),
        )
        .unwrap();
        compose(
            vec![Panel::leaf("overview"), inner.into_panel("detail")],
            &ComposeOptions::default().margin(0.0),
        )
        .unwrap()
        .resolve()
    }

    #[test]
    fn json_lists_every_leaf() {
        let out = render(&sample(), OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        let panels = value["panels"].as_array().unwrap();
        assert_eq!(panels.len(), 3);
        assert_eq!(panels[0]["id"], "overview");
        assert_eq!(value["x_axes"], 2);
    }

    #[test]
    fn table_indents_nested_panels() {
        let out = render(&sample(), OutputFormat::Table).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 5);
        assert!(lines[0].starts_with("panel"));
        assert!(lines[1].starts_with("overview"));
        assert!(lines[2].starts_with("  price"));
        assert!(lines[4].starts_with("3 panels, 2 x axes, 3 y axes"));
    }

    #[test]
    fn table_aligns_non_ascii_ids() {
        let placement = compose(
            vec![Panel::leaf("température"), Panel::leaf("débit")],
            &ComposeOptions::default().margin(0.0),
        )
        .unwrap()
        .resolve();
        let out = render(&placement, OutputFormat::Table).unwrap();
        let lines: Vec<&str> = out.lines().take(3).collect();

        // "température" is 11 chars but 12 bytes; columns line up in chars
        let header_width = lines[0].chars().count();
        for line in &lines[1..] {
            assert_eq!(line.chars().count(), header_width, "{line:?}");
        }
        assert!(lines[0].starts_with("panel        "));
        assert!(lines[1].starts_with("température  "));
    }

    #[test]
    fn html_positions_boxes_in_percent() {
        let out = render(&sample(), OutputFormat::Html).unwrap();
        assert!(out.starts_with("<!DOCTYPE html>"));
        assert_eq!(out.matches("class=\"panel\"").count(), 3);
        assert!(out.contains("id=\"volume\""));
        assert!(out.contains("left: 50.000%; top: 50.000%; width: 50.000%; height: 50.000%;"));
    }

    #[test]
    fn html_escapes_ids() {
        assert_eq!(escape_html("a<b> & \"c\""), "a&lt;b&gt; &amp; &quot;c&quot;");
    }
}
