use log::{debug, warn};

use crate::config::ColumnMap;
use crate::error::{DashError, Result};
use crate::loader::Table;
use crate::models::{SkillQuestion, StudentRecord};

/// Index of the first column whose header matches one of `candidates`.
///
/// Exact matches (trimmed, case-insensitive) win over prefix matches, and
/// earlier candidates win over later ones.
pub fn resolve_column(headers: &[String], candidates: &[String]) -> Option<usize> {
    let normalized: Vec<String> = headers.iter().map(|h| h.trim().to_lowercase()).collect();
    let wanted: Vec<String> = candidates
        .iter()
        .map(|c| c.trim().to_lowercase())
        .filter(|c| !c.is_empty())
        .collect();

    for candidate in &wanted {
        if let Some(idx) = normalized.iter().position(|h| h == candidate) {
            return Some(idx);
        }
    }
    for candidate in &wanted {
        if let Some(idx) = normalized.iter().position(|h| h.starts_with(candidate.as_str())) {
            return Some(idx);
        }
    }
    None
}

fn required(table: &Table, candidates: &[String]) -> Result<usize> {
    resolve_column(&table.headers, candidates).ok_or_else(|| {
        DashError::MissingColumn(candidates.first().cloned().unwrap_or_default())
    })
}

fn optional(table: &Table, candidates: &[String], field: &str) -> Option<usize> {
    let idx = resolve_column(&table.headers, candidates);
    if idx.is_none() {
        warn!("column for '{}' not found, leaving it empty", field);
    }
    idx
}

/// Map the survey table onto [`StudentRecord`]s.
///
/// Batch and full name are required columns; every other field is empty when
/// its column is missing. Rows with neither a batch nor a name are skipped.
pub fn load_students(table: &Table, columns: &ColumnMap) -> Result<Vec<StudentRecord>> {
    let batch = required(table, &columns.batch)?;
    let full_name = required(table, &columns.full_name)?;
    let email = optional(table, &columns.email, "email");
    let contact = optional(table, &columns.contact_number, "contact number");
    let degree = optional(table, &columns.degree, "degree");
    let skills = optional(table, &columns.skills, "skills");
    let research = optional(table, &columns.research, "research");
    let achievements = optional(table, &columns.achievements, "achievements");
    let linkedin = optional(table, &columns.linkedin, "linkedin");
    let github = optional(table, &columns.github, "github");

    debug!(
        "load_students: batch={} name={} skills={:?} research={:?}",
        batch, full_name, skills, research
    );

    let text = |row: usize, col: Option<usize>| -> String {
        col.map(|c| table.cell(row, c).trim().to_string())
            .unwrap_or_default()
    };

    let mut students = Vec::with_capacity(table.rows.len());
    for row in 0..table.rows.len() {
        let record = StudentRecord {
            batch: text(row, Some(batch)),
            full_name: text(row, Some(full_name)),
            email: text(row, email),
            contact_number: text(row, contact),
            degree: text(row, degree),
            skills: text(row, skills),
            research: text(row, research),
            achievements: text(row, achievements),
            linkedin: text(row, linkedin),
            github: text(row, github),
        };

        if record.batch.is_empty() && record.full_name.is_empty() {
            warn!("skipping row {}: no batch and no name", row + 2);
            continue;
        }
        students.push(record);
    }

    Ok(students)
}

/// Map the question table onto [`SkillQuestion`]s, skipping rows without a question.
pub fn load_questions(table: &Table, columns: &ColumnMap) -> Result<Vec<SkillQuestion>> {
    let skill = required(table, &columns.question_skill)?;
    let question = required(table, &columns.question_text)?;

    let questions = (0..table.rows.len())
        .filter_map(|row| {
            let q = table.cell(row, question).trim();
            if q.is_empty() {
                return None;
            }
            Some(SkillQuestion {
                skill: table.cell(row, skill).trim().to_string(),
                question: q.to_string(),
            })
        })
        .collect();

    Ok(questions)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn survey_table() -> Table {
        Table::new(
            strings(&[
                "Timestamp",
                "Batch Year",
                "Full Name",
                "Mail ID (University mail ID)",
                "Skills you possess (Ex: Python, Power BI, R, SQL)",
                "Research area/domain or  Projects that you have worked on or are currently working on (can be more than one project).",
                "Your Achievements (can include valid certifications, leadership roles, sports achievements, volunteer work in any intra or inter-collegiate events, etc.)",
            ]),
            vec![
                strings(&["t1", "2023", "Asha Rao", "asha@uni.edu", "Python, SQL", "NLP for legal text", "Hackathon winner"]),
                strings(&["t2", "", "", "", "", "", ""]),
                strings(&["t3", "2024", " Ravi K ", "ravi@uni.edu"]),
            ],
        )
    }

    #[test]
    fn test_resolve_exact_before_prefix() {
        let headers = strings(&["Skills you possess (Ex: Python)", "Skills"]);
        assert_eq!(resolve_column(&headers, &strings(&["skills"])), Some(1));
        assert_eq!(resolve_column(&headers, &strings(&["Skills you possess"])), Some(0));
        assert_eq!(resolve_column(&headers, &strings(&["GitHub"])), None);
    }

    #[test]
    fn test_load_students_with_long_headers() {
        let students = load_students(&survey_table(), &ColumnMap::default()).unwrap();
        assert_eq!(students.len(), 2);

        let asha = &students[0];
        assert_eq!(asha.batch, "2023");
        assert_eq!(asha.email, "asha@uni.edu");
        assert_eq!(asha.skills, "Python, SQL");
        assert_eq!(asha.research, "NLP for legal text");
        assert_eq!(asha.achievements, "Hackathon winner");
        assert_eq!(asha.github, "");

        assert_eq!(students[1].full_name, "Ravi K");
        assert_eq!(students[1].skills, "");
    }

    #[test]
    fn test_missing_required_column() {
        let table = Table::new(strings(&["Full Name"]), vec![]);
        let err = load_students(&table, &ColumnMap::default()).unwrap_err();
        assert!(matches!(err, DashError::MissingColumn(ref c) if c == "Batch Year"));
    }

    #[test]
    fn test_load_questions_skips_blank() {
        let table = Table::new(
            strings(&["Skill", "Interview Questions"]),
            vec![
                strings(&["Python", "Explain list comprehensions."]),
                strings(&["SQL", ""]),
                strings(&["SQL", "What is a join?"]),
            ],
        );
        let questions = load_questions(&table, &ColumnMap::default()).unwrap();
        assert_eq!(questions.len(), 2);
        assert_eq!(questions[1].skill, "SQL");
    }
}
