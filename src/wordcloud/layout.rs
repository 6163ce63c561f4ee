use log::debug;

use crate::wordcloud::{PlacedWord, WordCloud, WordCloudOptions};

pub const CANVAS_WIDTH: u32 = 800;
pub const CANVAS_HEIGHT: u32 = 400;

const MIN_FONT_SIZE: f64 = 10.0;
const RELATIVE_SCALING: f64 = 0.5;
/// Font size multiplier applied each time a word fails to fit.
const SHRINK: f64 = 0.85;
/// Average glyph advance as a fraction of the font size.
const CHAR_WIDTH: f64 = 0.6;
const LINE_HEIGHT: f64 = 1.1;
const PADDING: f64 = 2.0;
const SPIRAL_STEP: f64 = 0.1;
const SPIRAL_GROWTH: f64 = 1.5;

#[derive(Debug, Clone, Copy)]
struct Rect {
    x: f64,
    y: f64,
    w: f64,
    h: f64,
}

impl Rect {
    fn intersects(&self, other: &Rect) -> bool {
        self.x < other.x + other.w
            && other.x < self.x + self.w
            && self.y < other.y + other.h
            && other.y < self.y + self.h
    }

    fn inside(&self, width: f64, height: f64) -> bool {
        self.x >= 0.0 && self.y >= 0.0 && self.x + self.w <= width && self.y + self.h <= height
    }
}

/// Estimated box for `word` at `font_size`, padding included.
pub fn text_box(word: &str, font_size: f64) -> (f64, f64) {
    let chars = word.chars().count() as f64;
    (
        chars * font_size * CHAR_WIDTH + PADDING * 2.0,
        font_size * LINE_HEIGHT + PADDING * 2.0,
    )
}

/// Place words largest first along an archimedean spiral from the canvas center.
///
/// Frequencies must be sorted descending and normalized so the first is `1.0`.
/// Each word's size is derived from the previous word's size and the ratio of
/// their frequencies; a word that does not fit shrinks until it does. Layout
/// stops at the first word that cannot be placed at the minimum font size.
pub fn layout(frequencies: &[(String, f64)], options: &WordCloudOptions) -> WordCloud {
    let width = CANVAS_WIDTH as f64;
    let height = CANVAS_HEIGHT as f64;

    let mut placed: Vec<PlacedWord> = Vec::new();
    let mut boxes: Vec<Rect> = Vec::new();
    let mut last: Option<(f64, f64)> = None; // (frequency, font size)

    for (word, freq) in frequencies.iter().take(options.max_words) {
        let mut font_size = match last {
            None => initial_font_size(word, width, height),
            Some((last_freq, last_size)) => {
                let rel = if last_freq > 0.0 { freq / last_freq } else { 1.0 };
                (last_size * (RELATIVE_SCALING * rel + (1.0 - RELATIVE_SCALING))).round()
            }
        };

        let mut position = None;
        while font_size >= MIN_FONT_SIZE {
            let (w, h) = text_box(word, font_size);
            if let Some((x, y)) = find_position(w, h, &boxes, width, height) {
                position = Some(Rect { x, y, w, h });
                break;
            }
            font_size = (font_size * SHRINK).floor();
        }

        let Some(rect) = position else {
            debug!("wordcloud: no room left for {:?}, stopping at {} words", word, placed.len());
            break;
        };

        boxes.push(rect);
        placed.push(PlacedWord {
            text: word.clone(),
            weight: *freq,
            font_size,
            x: rect.x,
            y: rect.y,
            width: rect.w,
            height: rect.h,
            color: options.background,
        });
        last = Some((*freq, font_size));
    }

    let n = placed.len();
    for (rank, word) in placed.iter_mut().enumerate() {
        word.color = rank_color(options, rank, n);
    }

    WordCloud {
        width: CANVAS_WIDTH,
        height: CANVAS_HEIGHT,
        background: options.background,
        colormap: options.colormap,
        words: placed,
    }
}

fn initial_font_size(word: &str, width: f64, height: f64) -> f64 {
    let chars = word.chars().count().max(1) as f64;
    let fit_width = (width * 0.9 - PADDING * 2.0) / (chars * CHAR_WIDTH);
    (height * 0.45).min(fit_width).floor()
}

fn find_position(w: f64, h: f64, boxes: &[Rect], width: f64, height: f64) -> Option<(f64, f64)> {
    if w > width || h > height {
        return None;
    }
    let (cx, cy) = (width / 2.0, height / 2.0);
    let aspect = width / height;
    let max_radius = cy.max(cx / aspect) + w.max(h);

    let mut theta: f64 = 0.0;
    loop {
        let r = SPIRAL_GROWTH * theta;
        if r > max_radius {
            return None;
        }
        let rect = Rect {
            x: cx + r * theta.cos() * aspect - w / 2.0,
            y: cy + r * theta.sin() - h / 2.0,
            w,
            h,
        };
        if rect.inside(width, height) && !boxes.iter().any(|b| b.intersects(&rect)) {
            return Some((rect.x, rect.y));
        }
        theta += SPIRAL_STEP;
    }
}

fn rank_color(options: &WordCloudOptions, rank: usize, total: usize) -> crate::models::HexColor {
    let t = if total > 1 {
        rank as f64 / (total - 1) as f64
    } else {
        0.0
    };
    if options.colormap.is_sequential_light() {
        // darkest for the biggest words, never the near-white low end
        options.colormap.sample(1.0 - 0.7 * t)
    } else {
        options.colormap.sample(0.9 * t)
    }
}
