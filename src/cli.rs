use std::path::PathBuf;

use clap::{Parser, Subcommand};

use interview_dash::models::{Colormap, HexColor};

#[derive(Parser, Debug)]
#[command(
    name = "interview-dash",
    about = "Skill dashboards and interview questions from student survey spreadsheets",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Config file [default: ./.interview-dash/config.toml, fallback ~/.config/interview-dash/config.toml]
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Student survey spreadsheet (.xlsx, .xls, .ods or .csv)
    #[arg(long, global = true, value_name = "FILE")]
    pub data: Option<PathBuf>,

    /// Skill/question spreadsheet (.xlsx, .xls, .ods or .csv)
    #[arg(long, global = true, value_name = "FILE")]
    pub questions: Option<PathBuf>,

    /// Report format
    #[arg(long, global = true, default_value = "terminal", value_name = "FORMAT")]
    pub report: ReportFormat,

    /// Output path for html/pdf reports [default: dashboard.html / dashboard.pdf]
    #[arg(long, short, global = true, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Word cloud colormap
    #[arg(long, global = true, value_name = "NAME")]
    pub colormap: Option<ColormapArg>,

    /// Maximum words per word cloud
    #[arg(long, global = true, value_name = "N", value_parser = clap::value_parser!(u16).range(50..=300))]
    pub max_words: Option<u16>,

    /// Word cloud background color, e.g. #ffffff
    #[arg(long, global = true, value_name = "HEX")]
    pub background: Option<HexColor>,

    /// Additional stopwords, comma separated
    #[arg(long, global = true, value_name = "WORDS")]
    pub stopwords: Option<String>,

    /// Minimum occurrences for a skill to appear in the batch chart
    #[arg(long, global = true, value_name = "N")]
    pub min_count: Option<usize>,

    /// List every word cloud word, not just the top ones
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Only print a summary line
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List batches with student counts
    Batches,
    /// List students with their batch
    Students,
    /// Skill distribution and word clouds for one batch
    Batch {
        /// Batch identifier as it appears in the spreadsheet
        id: String,
    },
    /// Profile, skills and interview questions for one student
    Student {
        /// Full name as it appears in the spreadsheet
        name: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, clap::ValueEnum)]
pub enum ReportFormat {
    Terminal,
    Json,
    Html,
    Pdf,
}

impl ReportFormat {
    pub fn default_output(self) -> Option<PathBuf> {
        match self {
            ReportFormat::Html => Some(PathBuf::from("dashboard.html")),
            ReportFormat::Pdf => Some(PathBuf::from("dashboard.pdf")),
            ReportFormat::Terminal | ReportFormat::Json => None,
        }
    }
}

#[derive(Debug, Clone, clap::ValueEnum)]
pub enum ColormapArg {
    Viridis,
    Plasma,
    Inferno,
    Magma,
    Cividis,
    Blues,
    Reds,
}

impl From<&ColormapArg> for Colormap {
    fn from(arg: &ColormapArg) -> Self {
        match arg {
            ColormapArg::Viridis => Colormap::Viridis,
            ColormapArg::Plasma => Colormap::Plasma,
            ColormapArg::Inferno => Colormap::Inferno,
            ColormapArg::Magma => Colormap::Magma,
            ColormapArg::Cividis => Colormap::Cividis,
            ColormapArg::Blues => Colormap::Blues,
            ColormapArg::Reds => Colormap::Reds,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_batch_with_overrides() {
        let cli = Cli::try_parse_from([
            "interview-dash",
            "batch",
            "2023",
            "--colormap",
            "magma",
            "--max-words",
            "120",
            "--background",
            "#000000",
            "--report",
            "html",
        ])
        .unwrap();
        assert!(matches!(cli.command, Command::Batch { ref id } if id == "2023"));
        assert_eq!(Colormap::from(cli.colormap.as_ref().unwrap()), Colormap::Magma);
        assert_eq!(cli.max_words, Some(120));
        assert_eq!(cli.background, Some(HexColor::new(0, 0, 0)));
        assert_eq!(cli.report, ReportFormat::Html);
    }

    #[test]
    fn test_max_words_out_of_range_rejected() {
        let result = Cli::try_parse_from(["interview-dash", "batches", "--max-words", "10"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_default_outputs() {
        assert_eq!(ReportFormat::Pdf.default_output(), Some(PathBuf::from("dashboard.pdf")));
        assert_eq!(ReportFormat::Terminal.default_output(), None);
    }
}
