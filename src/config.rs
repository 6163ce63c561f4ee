use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::models::{Colormap, HexColor};
use crate::skills::DEFAULT_REFERENCE_SKILLS;
use crate::wordcloud::parse_stopwords;

/// Smallest and largest word count the word cloud accepts.
pub const MAX_WORDS_RANGE: (usize, usize) = (50, 300);

/// Root configuration structure, deserialized from `.interview-dash/config.toml`.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Where the two spreadsheets live.
    pub data: DataConfig,
    /// Header names used to find each field.
    pub columns: ColumnMap,
    /// Skill vocabulary and chart filtering.
    pub skills: SkillsConfig,
    /// Word cloud defaults.
    pub wordcloud: WordCloudConfig,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    pub students: PathBuf,
    /// Worksheet name; the first worksheet is used when absent.
    pub students_sheet: Option<String>,
    pub questions: PathBuf,
    pub questions_sheet: Option<String>,
}

impl Default for DataConfig {
    fn default() -> Self {
        DataConfig {
            students: PathBuf::from("student.xlsx"),
            students_sheet: None,
            questions: PathBuf::from("skill_questions.xlsx"),
            questions_sheet: None,
        }
    }
}

/// Accepted headers per field.
///
/// A column matches when its trimmed header equals one of the entries
/// (ignoring case) or, failing that, starts with one of them. The prefix rule
/// lets the long survey question headers resolve without renaming.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ColumnMap {
    pub batch: Vec<String>,
    pub full_name: Vec<String>,
    pub email: Vec<String>,
    pub contact_number: Vec<String>,
    pub degree: Vec<String>,
    pub skills: Vec<String>,
    pub research: Vec<String>,
    pub achievements: Vec<String>,
    pub linkedin: Vec<String>,
    pub github: Vec<String>,
    pub question_skill: Vec<String>,
    pub question_text: Vec<String>,
}

fn headers(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}

impl Default for ColumnMap {
    fn default() -> Self {
        ColumnMap {
            batch: headers(&["Batch Year", "Batch"]),
            full_name: headers(&["Full Name", "Name"]),
            email: headers(&["Mail ID (University mail ID)", "Email"]),
            contact_number: headers(&["Contact Number"]),
            degree: headers(&["UG Degree"]),
            skills: headers(&["Skills you possess", "Skills"]),
            research: headers(&["Research area/domain", "Projects"]),
            achievements: headers(&["Achievements", "Your Achievements"]),
            linkedin: headers(&["Link/URL of your LinkedIn account", "LinkedIn"]),
            github: headers(&["Link/URL of your GitHub", "GitHub"]),
            question_skill: headers(&["Skill"]),
            question_text: headers(&["Interview Questions", "Interview Question", "Question"]),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct SkillsConfig {
    /// Canonical vocabulary, compared after lowercasing.
    pub reference: Vec<String>,
    /// Batch chart hides skills seen fewer times than this.
    pub min_count: usize,
}

impl Default for SkillsConfig {
    fn default() -> Self {
        SkillsConfig {
            reference: headers(DEFAULT_REFERENCE_SKILLS),
            min_count: 2,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct WordCloudConfig {
    pub colormap: Colormap,
    pub max_words: usize,
    pub background: HexColor,
    /// Extra stopwords, comma separated.
    pub stopwords: String,
}

impl Default for WordCloudConfig {
    fn default() -> Self {
        WordCloudConfig {
            colormap: Colormap::Viridis,
            max_words: 100,
            background: HexColor::WHITE,
            stopwords: String::new(),
        }
    }
}

/// Load the configuration, searching in order:
///
/// 1. `config_override`: path passed via `--config`
/// 2. `<base_dir>/.interview-dash/config.toml`
/// 3. `~/.config/interview-dash/config.toml`
/// 4. Built-in [`Config::default`]
pub fn load_config(base_dir: &Path, config_override: Option<&Path>) -> Result<Config> {
    if let Some(path) = config_override {
        return read_config(path);
    }

    let local_config = base_dir.join(".interview-dash").join("config.toml");
    if local_config.exists() {
        return read_config(&local_config);
    }

    if let Some(home) = dirs::home_dir() {
        let home_config = home
            .join(".config")
            .join("interview-dash")
            .join("config.toml");
        if home_config.exists() {
            return read_config(&home_config);
        }
    }

    debug!("no config file found, using defaults");
    Ok(Config::default())
}

fn read_config(path: &Path) -> Result<Config> {
    debug!("reading config from {}", path.display());
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    toml::from_str(&content).with_context(|| format!("Invalid config {}", path.display()))
}

/// The sidebar state of one dashboard interaction.
///
/// Built once from [`Config`] plus command-line overrides and passed by
/// reference into the analysis and rendering functions.
#[derive(Debug, Clone, Serialize)]
pub struct ViewOptions {
    pub colormap: Colormap,
    pub max_words: usize,
    pub background: HexColor,
    /// Additional stopwords, already trimmed and lowercased.
    pub stopwords: Vec<String>,
    pub min_count: usize,
    pub reference_skills: Vec<String>,
}

impl ViewOptions {
    pub fn from_config(config: &Config) -> Self {
        let reference_skills = config
            .skills
            .reference
            .iter()
            .map(|s| s.trim().to_lowercase())
            .filter(|s| !s.is_empty())
            .collect();

        ViewOptions {
            colormap: config.wordcloud.colormap,
            max_words: clamp_max_words(config.wordcloud.max_words),
            background: config.wordcloud.background,
            stopwords: parse_stopwords(&config.wordcloud.stopwords),
            min_count: config.skills.min_count,
            reference_skills,
        }
    }
}

impl Default for ViewOptions {
    fn default() -> Self {
        ViewOptions::from_config(&Config::default())
    }
}

/// Clamp a requested word count into [`MAX_WORDS_RANGE`].
pub fn clamp_max_words(requested: usize) -> usize {
    let (lo, hi) = MAX_WORDS_RANGE;
    let clamped = requested.clamp(lo, hi);
    if clamped != requested {
        warn!("max_words {} out of range, using {}", requested, clamped);
    }
    clamped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = ViewOptions::default();
        assert_eq!(options.max_words, 100);
        assert_eq!(options.min_count, 2);
        assert_eq!(options.colormap, Colormap::Viridis);
        assert_eq!(options.background, HexColor::WHITE);
        assert_eq!(options.reference_skills.len(), 12);
        assert!(options.stopwords.is_empty());
    }

    #[test]
    fn test_partial_config() {
        let cfg: Config = toml::from_str(
            r##"
[skills]
reference = ["Python", " Rust ", ""]

[wordcloud]
colormap = "Reds"
background = "#000000"
stopwords = "Data, , Science"
max_words = 1000
"##,
        )
        .unwrap();

        let options = ViewOptions::from_config(&cfg);
        assert_eq!(options.reference_skills, vec!["python", "rust"]);
        assert_eq!(options.colormap, Colormap::Reds);
        assert_eq!(options.background, HexColor::new(0, 0, 0));
        assert_eq!(options.stopwords, vec!["data", "science"]);
        assert_eq!(options.max_words, 300);
        // untouched sections keep defaults
        assert_eq!(cfg.skills.min_count, 2);
        assert_eq!(cfg.data.students, PathBuf::from("student.xlsx"));
    }

    #[test]
    fn test_invalid_background_rejected() {
        let result: std::result::Result<Config, _> = toml::from_str(
            r#"
[wordcloud]
background = "blue"
"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_load_config_override() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dash.toml");
        std::fs::write(&path, "[data]\nstudents = \"cohort.csv\"\n").unwrap();

        let cfg = load_config(dir.path(), Some(&path)).unwrap();
        assert_eq!(cfg.data.students, PathBuf::from("cohort.csv"));
        assert_eq!(cfg.data.questions, PathBuf::from("skill_questions.xlsx"));
    }

    #[test]
    fn test_load_config_local_dir() {
        let dir = tempfile::tempdir().unwrap();
        let cfg_dir = dir.path().join(".interview-dash");
        std::fs::create_dir(&cfg_dir).unwrap();
        std::fs::write(cfg_dir.join("config.toml"), "[skills]\nmin_count = 3\n").unwrap();

        let cfg = load_config(dir.path(), None).unwrap();
        assert_eq!(cfg.skills.min_count, 3);
    }
}
