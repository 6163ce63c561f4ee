//! SVG rendering of bar charts and word clouds with plotters.
//!
//! Only plotters primitives are used (rectangles, text, lines) so nothing here
//! needs to measure glyphs; label positions come from text anchors.

use anyhow::{anyhow, Result};
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};

use crate::models::SkillCount;
use crate::wordcloud::WordCloud;

const CHART_W: u32 = 800;
const BAR_H: u32 = 26;
const BAR_GAP: u32 = 8;
const LABEL_W: i32 = 190;
const TITLE_H: u32 = 48;
const AXIS_H: u32 = 44;
const RIGHT_PAD: i32 = 40;

const BAR_DARK: RGBColor = RGBColor(0x1f, 0x3b, 0x73);
const BAR_LIGHT: RGBColor = RGBColor(0x6b, 0xae, 0xd6);
const GRID: RGBColor = RGBColor(0xdd, 0xe1, 0xea);
const TEXT: RGBColor = RGBColor(0x12, 0x14, 0x24);
const TEXT_MUTED: RGBColor = RGBColor(0x5c, 0x66, 0x85);
const EMPTY_ON_DARK: RGBColor = RGBColor(0xd1, 0xe3, 0xff);

/// Horizontal bar chart of skill counts, highest at the top.
pub fn bar_chart_svg(title: &str, counts: &[SkillCount]) -> Result<String> {
    let rows = counts.len().max(1) as u32;
    let height = TITLE_H + rows * (BAR_H + BAR_GAP) + AXIS_H;
    let max = counts.iter().map(|c| c.count).max().unwrap_or(1).max(1);

    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, (CHART_W, height)).into_drawing_area();
        root.fill(&WHITE).map_err(plot_err)?;

        let title_style = ("sans-serif", 18).into_font().style(FontStyle::Bold).color(&TEXT);
        root.draw(&Text::new(title.to_string(), (CHART_W as i32 / 2, 14), title_style.pos(Pos::new(HPos::Center, VPos::Top))))
            .map_err(plot_err)?;

        let plot_x0 = LABEL_W;
        let plot_x1 = CHART_W as i32 - RIGHT_PAD;
        let plot_w = (plot_x1 - plot_x0) as f64;
        let plot_y0 = TITLE_H as i32;
        let plot_y1 = (TITLE_H + rows * (BAR_H + BAR_GAP)) as i32;

        // vertical grid at whole-number ticks
        for tick in axis_ticks(max) {
            let x = plot_x0 + (tick as f64 / max as f64 * plot_w).round() as i32;
            root.draw(&PathElement::new(vec![(x, plot_y0), (x, plot_y1)], GRID.stroke_width(1)))
                .map_err(plot_err)?;
            let tick_style = ("sans-serif", 11).into_font().color(&TEXT_MUTED);
            root.draw(&Text::new(tick.to_string(), (x, plot_y1 + 6), tick_style.pos(Pos::new(HPos::Center, VPos::Top))))
                .map_err(plot_err)?;
        }

        let axis_style = ("sans-serif", 12).into_font().color(&TEXT);
        root.draw(&Text::new(
            "Frequency".to_string(),
            ((plot_x0 + plot_x1) / 2, plot_y1 + 24),
            axis_style.pos(Pos::new(HPos::Center, VPos::Top)),
        ))
        .map_err(plot_err)?;

        let n = counts.len();
        for (i, entry) in counts.iter().enumerate() {
            let y = plot_y0 + (i as u32 * (BAR_H + BAR_GAP) + BAR_GAP / 2) as i32;
            let w = (entry.count as f64 / max as f64 * plot_w).round() as i32;
            let t = if n > 1 { i as f64 / (n - 1) as f64 } else { 0.0 };
            root.draw(&Rectangle::new(
                [(plot_x0, y), (plot_x0 + w.max(1), y + BAR_H as i32)],
                blend(BAR_DARK, BAR_LIGHT, t).filled(),
            ))
            .map_err(plot_err)?;

            let label_style = ("sans-serif", 12).into_font().color(&TEXT);
            root.draw(&Text::new(
                entry.skill.clone(),
                (plot_x0 - 8, y + BAR_H as i32 / 2),
                label_style.pos(Pos::new(HPos::Right, VPos::Center)),
            ))
            .map_err(plot_err)?;
        }

        root.present().map_err(plot_err)?;
    }
    Ok(svg)
}

/// Word cloud as laid out by [`crate::wordcloud::layout`].
pub fn word_cloud_svg(cloud: &WordCloud) -> Result<String> {
    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, (cloud.width, cloud.height)).into_drawing_area();
        let bg = cloud.background;
        root.fill(&RGBColor(bg.r, bg.g, bg.b)).map_err(plot_err)?;

        if cloud.words.is_empty() {
            let color = if bg.is_dark() { EMPTY_ON_DARK } else { TEXT_MUTED };
            let style = ("sans-serif", 16).into_font().color(&color);
            root.draw(&Text::new(
                "No words to show.".to_string(),
                (cloud.width as i32 / 2, cloud.height as i32 / 2),
                style.pos(Pos::new(HPos::Center, VPos::Center)),
            ))
            .map_err(plot_err)?;
        }

        for word in &cloud.words {
            let color = RGBColor(word.color.r, word.color.g, word.color.b);
            let style = ("sans-serif", word.font_size).into_font().color(&color);
            // boxes are padded; center the glyphs inside them
            let center = (
                (word.x + word.width / 2.0).round() as i32,
                (word.y + word.height / 2.0).round() as i32,
            );
            root.draw(&Text::new(
                word.text.clone(),
                center,
                style.pos(Pos::new(HPos::Center, VPos::Center)),
            ))
            .map_err(plot_err)?;
        }

        root.present().map_err(plot_err)?;
    }
    Ok(svg)
}

/// Up to ~8 evenly spaced whole-number ticks from 0 to `max`.
fn axis_ticks(max: usize) -> Vec<usize> {
    let step = (max + 7) / 8;
    let step = step.max(1);
    (0..=max).step_by(step).collect()
}

fn blend(a: RGBColor, b: RGBColor, t: f64) -> RGBColor {
    let mix = |x: u8, y: u8| (x as f64 + (y as f64 - x as f64) * t).round() as u8;
    RGBColor(mix(a.0, b.0), mix(a.1, b.1), mix(a.2, b.2))
}

fn plot_err<E: std::fmt::Debug>(err: E) -> anyhow::Error {
    anyhow!("chart rendering failed: {:?}", err)
}
