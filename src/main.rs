//! `interview-dash`: batch and student skill dashboards from survey spreadsheets.
//!
//! # Flow
//! 1. Parse CLI arguments ([`cli`]).
//! 2. Load config (`load_config`) and apply command-line overrides.
//! 3. Read the student and question spreadsheets (`Dataset::load`).
//! 4. Build the requested view (`analysis`).
//! 5. Render it as terminal output, JSON, HTML or PDF (`report`).

mod cli;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, warn};

use cli::{Cli, Command, ReportFormat};
use interview_dash::config::{clamp_max_words, load_config, Config, ViewOptions};
use interview_dash::loader::Dataset;
use interview_dash::wordcloud::parse_stopwords;
use interview_dash::{analysis, report};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter)).init();

    let cwd = std::env::current_dir().context("Failed to read the current directory")?;
    let mut config = load_config(&cwd, cli.config.as_deref())?;
    apply_data_overrides(&mut config, &cli);
    let options = view_options(&config, &cli);
    debug!("view options: {:?}", options);

    let dataset = load_dataset(&config, cli.quiet)?;

    let output = cli
        .output
        .clone()
        .or_else(|| cli.report.default_output())
        .unwrap_or_else(|| PathBuf::from("dashboard"));

    match &cli.command {
        Command::Batches => {
            let batches = analysis::batches(&dataset);
            match cli.report {
                ReportFormat::Json => println!("{}", serde_json::to_string_pretty(&batches)?),
                ReportFormat::Terminal => report::terminal::render_batches(&batches),
                other => {
                    warn!("{:?} output is not available for listings; printing to the terminal", other);
                    report::terminal::render_batches(&batches);
                }
            }
        }
        Command::Students => {
            let students = analysis::students(&dataset);
            match cli.report {
                ReportFormat::Json => println!("{}", serde_json::to_string_pretty(&students)?),
                ReportFormat::Terminal => report::terminal::render_students(&students),
                other => {
                    warn!("{:?} output is not available for listings; printing to the terminal", other);
                    report::terminal::render_students(&students);
                }
            }
        }
        Command::Batch { id } => {
            let batch = analysis::batch_analysis(&dataset, id, &options)?;
            match cli.report {
                ReportFormat::Terminal => report::terminal::render_batch(&batch, cli.verbose, cli.quiet),
                ReportFormat::Json => println!("{}", serde_json::to_string_pretty(&batch)?),
                ReportFormat::Html => report::html::render_batch(&batch, &options, &output)?,
                ReportFormat::Pdf => report::pdf::render_batch(&batch, &output)?,
            }
        }
        Command::Student { name } => {
            let student = analysis::student_analysis(&dataset, name, &options)?;
            match cli.report {
                ReportFormat::Terminal => report::terminal::render_student(&student, cli.verbose, cli.quiet),
                ReportFormat::Json => println!("{}", serde_json::to_string_pretty(&student)?),
                ReportFormat::Html => report::html::render_student(&student, &options, &output)?,
                ReportFormat::Pdf => report::pdf::render_student(&student, &output)?,
            }
        }
    }

    Ok(())
}

fn apply_data_overrides(config: &mut Config, cli: &Cli) {
    if let Some(path) = &cli.data {
        config.data.students = path.clone();
    }
    if let Some(path) = &cli.questions {
        config.data.questions = path.clone();
    }
}

/// Config values, with any sidebar-style flags taking precedence.
fn view_options(config: &Config, cli: &Cli) -> ViewOptions {
    let mut options = ViewOptions::from_config(config);
    if let Some(colormap) = &cli.colormap {
        options.colormap = colormap.into();
    }
    if let Some(max_words) = cli.max_words {
        options.max_words = clamp_max_words(max_words as usize);
    }
    if let Some(background) = cli.background {
        options.background = background;
    }
    if let Some(stopwords) = &cli.stopwords {
        options.stopwords = parse_stopwords(stopwords);
    }
    if let Some(min_count) = cli.min_count {
        options.min_count = min_count;
    }
    options
}

fn load_dataset(config: &Config, quiet: bool) -> Result<Dataset> {
    let spinner = if !quiet {
        let pb = ProgressBar::new_spinner();
        pb.set_style(ProgressStyle::default_spinner().template("{spinner:.green} {msg}")?);
        pb.set_message(format!("Reading {}", config.data.students.display()));
        pb.enable_steady_tick(std::time::Duration::from_millis(80));
        Some(pb)
    } else {
        None
    };

    let dataset = Dataset::load(config).with_context(|| {
        format!(
            "Failed to load {} and {}",
            config.data.students.display(),
            config.data.questions.display()
        )
    });

    if let Some(pb) = spinner {
        pb.finish_and_clear();
    }

    let dataset = dataset?;
    debug!(
        "{} students, {} questions",
        dataset.students.len(),
        dataset.questions.len()
    );
    Ok(dataset)
}
