//! SVG serialization for a laid-out chart.
//!
//! Pure string assembly: the descriptors computed by the layout
//! modules are written out with `fmt::Write`, one element per line.
//! Cells carry `data-month` / `data-year` / `data-temp` attributes so
//! rendered output can be verified by external tooling, and a
//! `<title>` child so static viewers show a native hover tooltip.

use std::fmt::Write;

use crate::axis::Tick;
use crate::chart::Chart;
use crate::interaction::tooltip_text;

const FONT: &str = "Arial, sans-serif";

/// Escape text content for embedding in SVG.
fn escape_text(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Serialize the chart into a standalone SVG document.
pub fn render_svg(chart: &Chart) -> String {
    let config = chart.config();
    let plot_w = config.plot_width();
    let plot_h = config.plot_height();

    let mut svg = String::new();
    let _ = writeln!(
        svg,
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{:.0}\" height=\"{:.0}\" viewBox=\"0 0 {:.0} {:.0}\" role=\"img\">",
        config.width, config.height, config.width, config.height
    );
    let _ = writeln!(
        svg,
        "  <rect width=\"{:.0}\" height=\"{:.0}\" fill=\"white\"/>",
        config.width, config.height
    );

    // Title and subtitle, centered in the top margin.
    let _ = writeln!(
        svg,
        "  <text id=\"title\" x=\"{:.0}\" y=\"26\" text-anchor=\"middle\" font-family=\"{}\" font-size=\"20\" font-weight=\"bold\">{}</text>",
        config.width / 2.0,
        FONT,
        escape_text(&config.title)
    );
    let _ = writeln!(
        svg,
        "  <text id=\"description\" x=\"{:.0}\" y=\"44\" text-anchor=\"middle\" font-family=\"{}\" font-size=\"14\">{}</text>",
        config.width / 2.0,
        FONT,
        escape_text(chart.subtitle())
    );

    // Plot group, translated inside the margins.
    let _ = writeln!(
        svg,
        "  <g transform=\"translate({:.0},{:.0})\">",
        config.margins.left, config.margins.top
    );

    write_cells(&mut svg, chart);
    write_x_axis(&mut svg, chart.x_ticks(), plot_w, plot_h);
    write_y_axis(&mut svg, chart.y_ticks(), plot_h, config.margins.left);
    write_legend(&mut svg, chart, plot_h);

    let _ = writeln!(svg, "  </g>");
    let _ = writeln!(svg, "</svg>");
    svg
}

fn write_cells(svg: &mut String, chart: &Chart) {
    for cell in chart.cells() {
        let _ = writeln!(
            svg,
            "    <rect class=\"cell\" x=\"{:.2}\" y=\"{:.2}\" width=\"{:.2}\" height=\"{:.2}\" fill=\"{}\" data-month=\"{}\" data-year=\"{}\" data-temp=\"{}\"><title>{}</title></rect>",
            cell.x,
            cell.y,
            cell.width,
            cell.height,
            cell.fill(),
            cell.month0(),
            cell.year,
            cell.temperature,
            escape_text(&tooltip_text(cell)).replace('\n', " | ")
        );
    }
}

fn write_x_axis(svg: &mut String, ticks: &[Tick], plot_w: f64, plot_h: f64) {
    let _ = writeln!(
        svg,
        "    <g id=\"x-axis\" transform=\"translate(0,{:.0})\">",
        plot_h
    );
    let _ = writeln!(
        svg,
        "      <line x1=\"0\" y1=\"0\" x2=\"{:.0}\" y2=\"0\" stroke=\"black\"/>",
        plot_w
    );
    for tick in ticks {
        let _ = writeln!(
            svg,
            "      <line x1=\"{x:.2}\" y1=\"0\" x2=\"{x:.2}\" y2=\"6\" stroke=\"black\"/>",
            x = tick.position
        );
        let _ = writeln!(
            svg,
            "      <text x=\"{:.2}\" y=\"20\" text-anchor=\"middle\" font-family=\"{}\" font-size=\"12\">{}</text>",
            tick.position,
            FONT,
            escape_text(&tick.label)
        );
    }
    // Axis caption.
    let _ = writeln!(
        svg,
        "      <text class=\"x-axis-label\" x=\"{:.0}\" y=\"60\" text-anchor=\"middle\" font-family=\"{}\" font-size=\"16\" font-weight=\"bold\">Year</text>",
        plot_w / 2.0 + 20.0,
        FONT
    );
    let _ = writeln!(svg, "    </g>");
}

fn write_y_axis(svg: &mut String, ticks: &[Tick], plot_h: f64, margin_left: f64) {
    let _ = writeln!(svg, "    <g id=\"y-axis\">");
    let _ = writeln!(
        svg,
        "      <line x1=\"0\" y1=\"0\" x2=\"0\" y2=\"{:.0}\" stroke=\"black\"/>",
        plot_h
    );
    for tick in ticks {
        let _ = writeln!(
            svg,
            "      <line x1=\"-6\" y1=\"{y:.2}\" x2=\"0\" y2=\"{y:.2}\" stroke=\"black\"/>",
            y = tick.position
        );
        let _ = writeln!(
            svg,
            "      <text x=\"-10\" y=\"{:.2}\" text-anchor=\"end\" dominant-baseline=\"middle\" font-family=\"{}\" font-size=\"12\">{}</text>",
            tick.position,
            FONT,
            escape_text(&tick.label)
        );
    }
    let _ = writeln!(
        svg,
        "      <text class=\"y-axis-label\" transform=\"rotate(-90)\" x=\"{:.0}\" y=\"{:.0}\" text-anchor=\"middle\" font-family=\"{}\" font-size=\"16\" font-weight=\"bold\">Month</text>",
        -plot_h / 2.0,
        -margin_left + 20.0,
        FONT
    );
    let _ = writeln!(svg, "    </g>");
}

fn write_legend(svg: &mut String, chart: &Chart, plot_h: f64) {
    let config = chart.config();
    let _ = writeln!(
        svg,
        "    <g id=\"legend\" transform=\"translate(0,{:.0})\">",
        plot_h + config.legend_offset
    );
    for swatch in chart.legend() {
        let _ = writeln!(
            svg,
            "      <rect x=\"{:.0}\" y=\"0\" width=\"{:.0}\" height=\"{:.0}\" fill=\"{}\"/>",
            swatch.x, swatch.width, swatch.height, swatch.color
        );
        let _ = writeln!(
            svg,
            "      <text x=\"{:.0}\" y=\"{:.0}\" text-anchor=\"middle\" font-family=\"{}\" font-size=\"12\">{}</text>",
            swatch.x + swatch.width / 2.0,
            swatch.height + 15.0,
            FONT,
            escape_text(swatch.label)
        );
    }
    let _ = writeln!(svg, "    </g>");
}
