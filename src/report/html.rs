use std::fmt::Write as _;
use std::path::Path;

use anyhow::{Context, Result};

use crate::config::ViewOptions;
use crate::models::{BatchReport, QuestionGroup, StudentReport};
use crate::report::chart::{bar_chart_svg, word_cloud_svg};

const STYLE: &str = r#"
body { font-family: -apple-system, "Segoe UI", Helvetica, Arial, sans-serif; margin: 0; color: #121424; background: #f4f6fb; }
header { background: linear-gradient(90deg, #3375f2, #854cf2); color: #fff; padding: 28px 40px; }
header h1 { margin: 0 0 6px 0; font-size: 28px; }
header p { margin: 0; opacity: 0.85; }
main { display: flex; gap: 24px; padding: 24px 40px; }
aside { flex: 0 0 220px; background: #fff; border: 1px solid #d9dded; border-radius: 8px; padding: 16px; font-size: 13px; align-self: flex-start; }
aside dt { color: #949fb8; font-size: 11px; text-transform: uppercase; margin-top: 10px; }
aside dd { margin: 2px 0 0 0; }
section { flex: 1; min-width: 0; }
.panel { background: #fff; border: 1px solid #d9dded; border-radius: 8px; padding: 16px 20px; margin-bottom: 20px; }
.panel h2 { font-size: 18px; margin: 0 0 12px 0; }
.panel svg { max-width: 100%; height: auto; }
.fields { display: grid; grid-template-columns: 160px 1fr; gap: 6px 12px; font-size: 14px; }
.fields dt { font-weight: bold; }
.fields dd { margin: 0; white-space: pre-wrap; }
.muted { color: #5c6685; }
"#;

/// Write the batch view as a standalone HTML page.
pub fn render_batch(report: &BatchReport, options: &ViewOptions, output_path: &Path) -> Result<()> {
    write_page(&batch_page(report, options)?, output_path)
}

/// Write the student view as a standalone HTML page.
pub fn render_student(report: &StudentReport, options: &ViewOptions, output_path: &Path) -> Result<()> {
    write_page(&student_page(report, options)?, output_path)
}

fn write_page(html: &str, output_path: &Path) -> Result<()> {
    std::fs::write(output_path, html)
        .with_context(|| format!("Failed to write HTML to {}", output_path.display()))?;
    println!("HTML report written to: {}", output_path.display());
    Ok(())
}

pub fn batch_page(report: &BatchReport, options: &ViewOptions) -> Result<String> {
    let mut body = String::new();

    let chart = bar_chart_svg(
        &format!("Skill Popularity in Batch {}", report.batch),
        &report.skill_counts,
    )?;
    panel(&mut body, "Skills Distribution for the Batch", &chart);
    if report.skill_counts.is_empty() {
        body.push_str(r#"<p class="muted">No skill appears often enough to chart.</p>"#);
    }

    panel(
        &mut body,
        &format!("Word Cloud for Batch {} Skills", escape(&report.batch)),
        &word_cloud_svg(&report.skills_cloud)?,
    );
    panel(
        &mut body,
        &format!("Projects and Research Areas in Batch {}", escape(&report.batch)),
        &word_cloud_svg(&report.projects_cloud)?,
    );

    Ok(page(
        &format!("Analysis for Batch {}", report.batch),
        &format!("{} students", report.student_count),
        options,
        &body,
    ))
}

pub fn student_page(report: &StudentReport, options: &ViewOptions) -> Result<String> {
    let p = &report.profile;
    let mut fields = String::from(r#"<dl class="fields">"#);
    for (label, value) in [
        ("Email", &p.email),
        ("Contact Number", &p.contact_number),
        ("UG Degree", &p.degree),
        ("Skills", &p.skills),
        ("Projects and Research", &p.research),
        ("Achievements", &p.achievements),
        ("LinkedIn", &p.linkedin),
        ("GitHub", &p.github),
    ] {
        let _ = write!(fields, "<dt>{}</dt><dd>{}</dd>", label, field_html(value));
    }
    fields.push_str("</dl>");

    let mut body = String::new();
    panel(&mut body, "Profile", &fields);
    panel(
        &mut body,
        "Skills Distribution",
        &bar_chart_svg("Skill Popularity", &report.skill_counts)?,
    );
    panel(&mut body, "Skills Word Cloud", &word_cloud_svg(&report.skills_cloud)?);
    panel(&mut body, "Relevant Interview Questions", &questions_html(&report.questions));

    Ok(page(
        &format!("Analysis for {}", p.full_name),
        &format!("Batch {}", p.batch),
        options,
        &body,
    ))
}

fn questions_html(groups: &[QuestionGroup]) -> String {
    if groups.is_empty() {
        return r#"<p class="muted">No skills listed.</p>"#.to_string();
    }
    let mut out = String::new();
    for group in groups {
        if group.questions.is_empty() {
            let _ = write!(
                out,
                r#"<p class="muted">No questions found for skill '{}'</p>"#,
                escape(&group.skill)
            );
            continue;
        }
        let _ = write!(out, "<p><strong>For skill '{}'</strong>:</p><ul>", escape(&group.skill));
        for q in &group.questions {
            let _ = write!(out, "<li>{}</li>", escape(q));
        }
        out.push_str("</ul>");
    }
    out
}

/// Profile URLs become links; everything else is escaped text.
fn field_html(value: &str) -> String {
    if value.is_empty() {
        return r#"<span class="muted">—</span>"#.to_string();
    }
    if value.starts_with("http://") || value.starts_with("https://") {
        let v = escape(value);
        return format!(r#"<a href="{v}">{v}</a>"#);
    }
    escape(value)
}

fn panel(out: &mut String, title: &str, content: &str) {
    let _ = write!(
        out,
        r#"<div class="panel"><h2>{}</h2>{}</div>"#,
        title, content
    );
}

fn page(title: &str, subtitle: &str, options: &ViewOptions, body: &str) -> String {
    let stopwords = if options.stopwords.is_empty() {
        "none".to_string()
    } else {
        options.stopwords.join(", ")
    };
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{title}</title>
<style>{style}</style>
</head>
<body>
<header><h1>{title}</h1><p>{subtitle}</p></header>
<main>
<aside><strong>Customization Options</strong><dl>
<dt>Colormap</dt><dd>{colormap}</dd>
<dt>Max words</dt><dd>{max_words}</dd>
<dt>Background</dt><dd>{background}</dd>
<dt>Additional stopwords</dt><dd>{stopwords}</dd>
<dt>Chart minimum count</dt><dd>{min_count}</dd>
</dl></aside>
<section>{body}</section>
</main>
<footer class="muted" style="padding: 0 40px 24px">Generated by interview-dash v{version}</footer>
</body>
</html>
"#,
        title = escape(title),
        subtitle = escape(subtitle),
        style = STYLE,
        colormap = options.colormap,
        max_words = options.max_words,
        background = options.background,
        stopwords = escape(&stopwords),
        min_count = options.min_count,
        body = body,
        version = env!("CARGO_PKG_VERSION"),
    )
}

pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::{batch_analysis, student_analysis};
    use crate::loader::Dataset;
    use crate::models::{SkillQuestion, StudentRecord};

    fn dataset() -> Dataset {
        Dataset {
            students: vec![
                StudentRecord {
                    batch: "2023".to_string(),
                    full_name: "Asha <Rao>".to_string(),
                    skills: "Python, SQL".to_string(),
                    research: "Graph neural networks".to_string(),
                    github: "https://github.com/asha".to_string(),
                    ..Default::default()
                },
                StudentRecord {
                    batch: "2023".to_string(),
                    full_name: "Ravi".to_string(),
                    skills: "python, excel".to_string(),
                    ..Default::default()
                },
            ],
            questions: vec![SkillQuestion {
                skill: "Python".to_string(),
                question: "What does `yield` do?".to_string(),
            }],
        }
    }

    #[test]
    fn test_escape() {
        assert_eq!(escape(r#"<a href="x">&'"#), "&lt;a href=&quot;x&quot;&gt;&amp;&#39;");
    }

    #[test]
    fn test_batch_page_sections() {
        let options = ViewOptions::default();
        let report = batch_analysis(&dataset(), "2023", &options).unwrap();
        let html = batch_page(&report, &options).unwrap();
        assert!(html.contains("<title>Analysis for Batch 2023</title>"));
        assert!(html.contains("Skills Distribution for the Batch"));
        assert!(html.contains("Projects and Research Areas in Batch 2023"));
        assert_eq!(html.matches("<svg").count(), 3);
    }

    #[test]
    fn test_student_page_escapes_and_links() {
        let options = ViewOptions::default();
        let report = student_analysis(&dataset(), "Asha <Rao>", &options).unwrap();
        let html = student_page(&report, &options).unwrap();
        assert!(html.contains("Analysis for Asha &lt;Rao&gt;"));
        assert!(html.contains(r#"<a href="https://github.com/asha">"#));
        assert!(html.contains("For skill 'python'"));
        assert!(html.contains("No questions found for skill 'sql'"));
        assert!(html.contains("What does `yield` do?"));
    }

    #[test]
    fn test_render_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dash.html");
        let options = ViewOptions::default();
        let report = batch_analysis(&dataset(), "2023", &options).unwrap();
        render_batch(&report, &options, &path).unwrap();
        let html = std::fs::read_to_string(&path).unwrap();
        assert!(html.starts_with("<!DOCTYPE html>"));
    }
}
