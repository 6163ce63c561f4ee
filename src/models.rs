use serde::{Deserialize, Serialize};

use crate::error::DashError;
use crate::wordcloud::WordCloud;

/// One row of the student survey spreadsheet.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StudentRecord {
    pub batch: String,
    pub full_name: String,
    pub email: String,
    pub contact_number: String,
    pub degree: String,
    /// Raw comma-separated skills exactly as typed by the student.
    pub skills: String,
    pub research: String,
    pub achievements: String,
    pub linkedin: String,
    pub github: String,
}

/// One row of the skill-to-question spreadsheet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillQuestion {
    pub skill: String,
    pub question: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillCount {
    pub skill: String,
    pub count: usize,
}

impl SkillCount {
    pub fn new(skill: impl Into<String>, count: usize) -> Self {
        Self {
            skill: skill.into(),
            count,
        }
    }
}

/// Interview questions attached to one of a student's skills.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuestionGroup {
    pub skill: String,
    pub questions: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BatchSummary {
    pub batch: String,
    pub students: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StudentSummary {
    pub full_name: String,
    pub batch: String,
}

/// Everything shown for a selected batch.
#[derive(Debug, Clone, Serialize)]
pub struct BatchReport {
    pub batch: String,
    pub student_count: usize,
    /// Normalized skills, one per entry in the batch's skill cells.
    pub skills: Vec<String>,
    /// Frequency table after the display filter.
    pub skill_counts: Vec<SkillCount>,
    pub skills_cloud: WordCloud,
    pub projects_cloud: WordCloud,
}

/// Everything shown for a selected student.
#[derive(Debug, Clone, Serialize)]
pub struct StudentReport {
    pub profile: StudentRecord,
    pub skills: Vec<String>,
    pub skill_counts: Vec<SkillCount>,
    pub skills_cloud: WordCloud,
    pub questions: Vec<QuestionGroup>,
}

/// Word cloud colormaps offered by the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Colormap {
    #[default]
    Viridis,
    Plasma,
    Inferno,
    Magma,
    Cividis,
    #[serde(alias = "Blues")]
    Blues,
    #[serde(alias = "Reds")]
    Reds,
}

impl std::fmt::Display for Colormap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Colormap::Viridis => write!(f, "viridis"),
            Colormap::Plasma => write!(f, "plasma"),
            Colormap::Inferno => write!(f, "inferno"),
            Colormap::Magma => write!(f, "magma"),
            Colormap::Cividis => write!(f, "cividis"),
            Colormap::Blues => write!(f, "Blues"),
            Colormap::Reds => write!(f, "Reds"),
        }
    }
}

/// An sRGB color parsed from `#rrggbb` (or the short `#rgb`) notation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct HexColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl HexColor {
    pub const WHITE: HexColor = HexColor { r: 255, g: 255, b: 255 };

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Channels scaled to `0.0..=1.0`, as printpdf expects them.
    pub fn to_unit(self) -> (f32, f32, f32) {
        (
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
        )
    }

    /// Relative luminance, used to pick readable text over a background.
    pub fn is_dark(self) -> bool {
        let (r, g, b) = self.to_unit();
        0.2126 * r + 0.7152 * g + 0.0722 * b < 0.5
    }
}

impl Default for HexColor {
    fn default() -> Self {
        HexColor::WHITE
    }
}

impl std::str::FromStr for HexColor {
    type Err = DashError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || DashError::InvalidColor(s.to_string());
        let hex = s.trim().trim_start_matches('#');
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let expanded: String = match hex.len() {
            3 => hex.chars().flat_map(|c| [c, c]).collect(),
            6 => hex.to_string(),
            _ => return Err(invalid()),
        };
        let channel = |i: usize| u8::from_str_radix(&expanded[i..i + 2], 16).map_err(|_| invalid());
        Ok(HexColor {
            r: channel(0)?,
            g: channel(2)?,
            b: channel(4)?,
        })
    }
}

impl TryFrom<String> for HexColor {
    type Error = DashError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<HexColor> for String {
    fn from(color: HexColor) -> Self {
        color.to_string()
    }
}

impl std::fmt::Display for HexColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_color() {
        let color: HexColor = "#1f77b4".parse().unwrap();
        assert_eq!(color, HexColor::new(0x1f, 0x77, 0xb4));
        assert_eq!(color.to_string(), "#1f77b4");
    }

    #[test]
    fn test_parse_short_hex_color() {
        let color: HexColor = "#fff".parse().unwrap();
        assert_eq!(color, HexColor::WHITE);
    }

    #[test]
    fn test_reject_bad_color() {
        assert!("white".parse::<HexColor>().is_err());
        assert!("#12345".parse::<HexColor>().is_err());
    }

    #[test]
    fn test_dark_background() {
        assert!(HexColor::new(0, 0, 0).is_dark());
        assert!(!HexColor::WHITE.is_dark());
    }

    #[test]
    fn test_colormap_accepts_capitalized_names() {
        #[derive(Deserialize)]
        struct Wrapper {
            colormap: Colormap,
        }
        let parsed: Wrapper = toml::from_str(r#"colormap = "Blues""#).unwrap();
        assert_eq!(parsed.colormap, Colormap::Blues);
        let parsed: Wrapper = toml::from_str(r#"colormap = "magma""#).unwrap();
        assert_eq!(parsed.colormap, Colormap::Magma);
    }
}
