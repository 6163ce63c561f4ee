//! Word clouds: tokenizing free text, counting words, and placing them on a canvas.
//!
//! - [`word_frequencies`]: tokenize, drop stopwords and numbers, merge case
//!   variants and plurals, normalize by the top count.
//! - [`layout`]: deterministic spiral placement on an 800×400 canvas.
//! - [`colormap`]: the colormaps offered for coloring words.

pub mod colormap;
pub mod layout;
pub mod stopwords;

use std::collections::{HashMap, HashSet};
use std::sync::OnceLock;

use regex::Regex;
use serde::Serialize;

use crate::config::ViewOptions;
use crate::models::{Colormap, HexColor};

pub use layout::{CANVAS_HEIGHT, CANVAS_WIDTH};

#[derive(Debug, Clone, Serialize)]
pub struct WordCloud {
    pub width: u32,
    pub height: u32,
    pub background: HexColor,
    pub colormap: Colormap,
    /// Placed words, largest first.
    pub words: Vec<PlacedWord>,
}

/// A word and its box on the canvas. `x`/`y` is the top-left corner in pixels.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlacedWord {
    pub text: String,
    /// Frequency relative to the most common word.
    pub weight: f64,
    pub font_size: f64,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub color: HexColor,
}

#[derive(Debug, Clone)]
pub struct WordCloudOptions {
    pub max_words: usize,
    pub colormap: Colormap,
    pub background: HexColor,
    /// Lowercased words to leave out.
    pub stopwords: HashSet<String>,
}

impl WordCloudOptions {
    /// Built-in stopwords plus the user's additional ones.
    pub fn from_view(view: &ViewOptions) -> Self {
        let stopwords = stopwords::STOPWORDS
            .iter()
            .map(|s| s.to_string())
            .chain(view.stopwords.iter().cloned())
            .collect();

        WordCloudOptions {
            max_words: view.max_words,
            colormap: view.colormap,
            background: view.background,
            stopwords,
        }
    }
}

/// Parse a comma-separated stopword list: trimmed, lowercased, blanks dropped.
pub fn parse_stopwords(text: &str) -> Vec<String> {
    text.split(',')
        .map(|w| w.trim().to_lowercase())
        .filter(|w| !w.is_empty())
        .collect()
}

fn word_regex() -> &'static Regex {
    static WORD: OnceLock<Regex> = OnceLock::new();
    WORD.get_or_init(|| Regex::new(r"\w[\w']*").expect("static word pattern"))
}

/// Word weights for `text`, highest first, normalized so the top word is `1.0`.
///
/// Tokens are runs of word characters (apostrophes allowed after the first).
/// A trailing `'s` is dropped, purely numeric tokens and stopwords are skipped,
/// a plural is folded into its singular when both occur, and case variants are
/// merged under their most frequent spelling. Ties keep first-seen order.
pub fn word_frequencies(text: &str, stopwords: &HashSet<String>) -> Vec<(String, f64)> {
    // lowercase key -> spellings with counts, in first-seen order
    let mut order: Vec<String> = Vec::new();
    let mut spellings: HashMap<String, Vec<(String, usize)>> = HashMap::new();

    for m in word_regex().find_iter(text) {
        let mut word = m.as_str();
        if word.ends_with("'s") || word.ends_with("'S") {
            word = &word[..word.len() - 2];
        }
        if word.is_empty() || word.chars().all(char::is_numeric) {
            continue;
        }
        let key = word.to_lowercase();
        if stopwords.contains(&key) {
            continue;
        }

        let forms = spellings.entry(key.clone()).or_insert_with(|| {
            order.push(key.clone());
            Vec::new()
        });
        match forms.iter_mut().find(|(form, _)| form == word) {
            Some((_, count)) => *count += 1,
            None => forms.push((word.to_string(), 1)),
        }
    }

    merge_plurals(&order, &mut spellings);

    let mut counts: Vec<(String, usize)> = order
        .iter()
        .filter_map(|key| spellings.get(key))
        .map(|forms| {
            let total = forms.iter().map(|(_, n)| n).sum();
            let mut best = &forms[0];
            for form in forms {
                if form.1 > best.1 {
                    best = form;
                }
            }
            (best.0.clone(), total)
        })
        .collect();

    counts.sort_by(|a, b| b.1.cmp(&a.1));

    let max = counts.first().map(|(_, n)| *n).unwrap_or(1) as f64;
    counts
        .into_iter()
        .map(|(word, n)| (word, n as f64 / max))
        .collect()
}

/// Fold `xs` into `x` when both keys are present (but not `xss` into `xs`).
fn merge_plurals(order: &[String], spellings: &mut HashMap<String, Vec<(String, usize)>>) {
    for key in order {
        if !key.ends_with('s') || key.ends_with("ss") {
            continue;
        }
        let singular = &key[..key.len() - 1];
        if !spellings.contains_key(singular) {
            continue;
        }
        let Some(plural_forms) = spellings.remove(key) else {
            continue;
        };
        if let Some(singular_forms) = spellings.get_mut(singular) {
            for (form, count) in plural_forms {
                let mut chars = form.chars();
                chars.next_back();
                let stem = chars.as_str().to_string();
                match singular_forms.iter_mut().find(|(f, _)| *f == stem) {
                    Some((_, n)) => *n += count,
                    None => singular_forms.push((stem, count)),
                }
            }
        }
    }
}

/// Count words in `text` and lay out the top `max_words` of them.
pub fn generate(text: &str, options: &WordCloudOptions) -> WordCloud {
    let mut frequencies = word_frequencies(text, &options.stopwords);
    frequencies.truncate(options.max_words);
    layout::layout(&frequencies, options)
}
