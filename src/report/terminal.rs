use colored::*;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use crate::models::{BatchReport, BatchSummary, QuestionGroup, SkillCount, StudentReport, StudentSummary};
use crate::wordcloud::WordCloud;

const BAR_WIDTH: usize = 40;
/// How many cloud words to list in the terminal.
const CLOUD_PREVIEW: usize = 15;

/// Render the batch view: summary box, skill bars, and the top word-cloud words.
pub fn render_batch(report: &BatchReport, verbose: bool, quiet: bool) {
    if quiet {
        println!(
            "Batch {}  Students: {}  Skill entries: {}  Charted: {}",
            report.batch.bold(),
            report.student_count,
            report.skills.len(),
            report.skill_counts.len(),
        );
        return;
    }

    print_banner();
    println!(" {} Analysis for Batch {}\n", "##".cyan(), report.batch.bold());

    let distinct = distinct_count(&report.skills);
    println!(" ┌────────────────────────────────────────────────────┐");
    println!(" │  {:<48} │", "SUMMARY".bold());
    println!(" │  {:<48} │", format!("Students           : {}", report.student_count));
    println!(" │  {:<48} │", format!("Skill entries      : {}", report.skills.len()));
    println!(" │  {:<48} │", format!("Distinct skills    : {}", distinct));
    println!(" │  {:<48} │", format!("Shown in chart     : {}", report.skill_counts.len()));
    println!(" └────────────────────────────────────────────────────┘\n");

    println!(" {} Skills Distribution for the Batch\n", "[SKILLS]".blue().bold());
    if report.skill_counts.is_empty() {
        println!("   {}\n", "No skill appears often enough to chart.".dimmed());
    } else {
        render_bars(&report.skill_counts);
    }

    render_cloud(&format!("Word Cloud for Batch {} Skills", report.batch), &report.skills_cloud, verbose);
    render_cloud(
        &format!("Projects and Research Areas in Batch {}", report.batch),
        &report.projects_cloud,
        verbose,
    );
}

/// Render the student view: profile fields, skill bars, cloud words, questions.
pub fn render_student(report: &StudentReport, verbose: bool, quiet: bool) {
    let p = &report.profile;
    if quiet {
        println!(
            "{}  Batch: {}  Skills: {}  Questions: {}",
            p.full_name.bold(),
            p.batch,
            report.skills.len(),
            report.questions.iter().map(|g| g.questions.len()).sum::<usize>(),
        );
        return;
    }

    print_banner();
    println!(" {} Analysis for {}\n", "##".cyan(), p.full_name.bold());

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    for (label, value) in [
        ("Batch", &p.batch),
        ("Email", &p.email),
        ("Contact Number", &p.contact_number),
        ("UG Degree", &p.degree),
        ("Skills", &p.skills),
        ("Projects and Research", &p.research),
        ("Achievements", &p.achievements),
        ("LinkedIn", &p.linkedin),
        ("GitHub", &p.github),
    ] {
        let value = if value.is_empty() { "—" } else { value.as_str() };
        table.add_row(vec![
            Cell::new(label).add_attribute(Attribute::Bold),
            Cell::new(value),
        ]);
    }
    println!("{}\n", table);

    println!(" {} Skills Distribution\n", "[SKILLS]".blue().bold());
    if report.skill_counts.is_empty() {
        println!("   {}\n", "No skills listed.".dimmed());
    } else {
        render_bars(&report.skill_counts);
    }

    render_cloud("Skills Word Cloud", &report.skills_cloud, verbose);
    render_questions(&report.questions);
}

/// Batches with their student counts.
pub fn render_batches(batches: &[BatchSummary]) {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("Batch").add_attribute(Attribute::Bold),
            Cell::new("Students").add_attribute(Attribute::Bold),
        ]);
    for b in batches {
        table.add_row(vec![
            Cell::new(&b.batch),
            Cell::new(b.students).set_alignment(CellAlignment::Right),
        ]);
    }
    println!("{}", table);
}

pub fn render_students(students: &[StudentSummary]) {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("Full Name").add_attribute(Attribute::Bold),
            Cell::new("Batch").add_attribute(Attribute::Bold),
        ]);
    for s in students {
        table.add_row(vec![Cell::new(&s.full_name), Cell::new(&s.batch)]);
    }
    println!("{}", table);
}

fn print_banner() {
    println!(
        "\n {} v{}\n",
        "interview-dash".bold(),
        env!("CARGO_PKG_VERSION")
    );
}

fn render_bars(counts: &[SkillCount]) {
    let label_w = counts
        .iter()
        .map(|c| c.skill.chars().count())
        .max()
        .unwrap_or(0)
        .clamp(6, 28);
    let max = counts.iter().map(|c| c.count).max().unwrap_or(1);

    for c in counts {
        let label = if c.skill.is_empty() { "(blank)" } else { c.skill.as_str() };
        println!(
            "   {:>width$} │{} {}",
            truncate(label, label_w),
            bar(c.count, max).cyan(),
            c.count,
            width = label_w
        );
    }
    println!();
}

fn render_cloud(title: &str, cloud: &WordCloud, verbose: bool) {
    println!(" {} {}\n", "[CLOUD]".magenta().bold(), title);
    if cloud.words.is_empty() {
        println!("   {}\n", "No words to show.".dimmed());
        return;
    }

    let shown = if verbose { cloud.words.len() } else { CLOUD_PREVIEW.min(cloud.words.len()) };
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("Word").add_attribute(Attribute::Bold),
            Cell::new("Weight").add_attribute(Attribute::Bold),
            Cell::new("Size").add_attribute(Attribute::Bold),
        ]);
    for word in &cloud.words[..shown] {
        let c = word.color;
        table.add_row(vec![
            Cell::new(&word.text).fg(Color::Rgb { r: c.r, g: c.g, b: c.b }),
            Cell::new(format!("{:.2}", word.weight)).set_alignment(CellAlignment::Right),
            Cell::new(format!("{:.0}", word.font_size)).set_alignment(CellAlignment::Right),
        ]);
    }
    println!("{}", table);
    if shown < cloud.words.len() {
        println!("   {} more (use --verbose to list all)", cloud.words.len() - shown);
    }
    println!();
}

fn render_questions(groups: &[QuestionGroup]) {
    println!(" {} Relevant Interview Questions\n", "[QUESTIONS]".green().bold());
    for group in groups {
        if group.questions.is_empty() {
            println!("   {}", format!("No questions found for skill '{}'", group.skill).dimmed());
            continue;
        }
        println!("   {}:", format!("For skill '{}'", group.skill).bold());
        for q in &group.questions {
            println!("     - {}", q);
        }
    }
    println!();
}

fn bar(count: usize, max: usize) -> String {
    let filled = (count * BAR_WIDTH + max - 1) / max.max(1);
    "█".repeat(filled.max(1))
}

fn distinct_count(skills: &[String]) -> usize {
    let set: std::collections::HashSet<&str> = skills.iter().map(String::as_str).collect();
    set.len()
}

fn truncate(s: &str, max: usize) -> String {
    let chars: Vec<char> = s.chars().collect();
    if chars.len() > max {
        format!("{}…", chars[..max - 1].iter().collect::<String>())
    } else {
        s.to_string()
    }
}
