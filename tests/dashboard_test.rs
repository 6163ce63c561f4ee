use std::path::Path;

use interview_dash::analysis::{batch_analysis, batches, student_analysis, students};
use interview_dash::config::{load_config, ViewOptions};
use interview_dash::error::DashError;
use interview_dash::loader::Dataset;
use interview_dash::models::SkillCount;
use interview_dash::report;

const STUDENTS_CSV: &str = "\
Batch Year,Full Name,Mail ID (University mail ID),Skills (comma separated),Projects and Research,GitHub
2023,Asha Rao,asha@uni.edu,\"Phyton, SQL, Tableau\",Demand forecasting with gradient boosting,https://github.com/asha
2023,Ravi Kumar,ravi@uni.edu,\"python, sql, powerbi\",Forecasting churn,
2024,Meera Iyer,meera@uni.edu,\"Java, Excel\",Compiler design,
";

const QUESTIONS_CSV: &str = "\
Skill,Interview Questions
Python,What is a decorator?
Python,Explain the GIL.
SQL,What is a window function?
";

fn write_fixture(dir: &Path) -> Dataset {
    let students = dir.join("students.csv");
    let questions = dir.join("questions.csv");
    std::fs::write(&students, STUDENTS_CSV).unwrap();
    std::fs::write(&questions, QUESTIONS_CSV).unwrap();

    let config_path = dir.join("dash.toml");
    std::fs::write(
        &config_path,
        format!(
            "[data]\nstudents = {:?}\nquestions = {:?}\n",
            students.display().to_string(),
            questions.display().to_string()
        ),
    )
    .unwrap();

    let config = load_config(dir, Some(&config_path)).unwrap();
    Dataset::load(&config).unwrap()
}

#[test]
fn test_listings_from_csv() {
    let dir = tempfile::tempdir().unwrap();
    let dataset = write_fixture(dir.path());

    let batch_list = batches(&dataset);
    assert_eq!(batch_list.len(), 2);
    assert_eq!(batch_list[0].batch, "2023");
    assert_eq!(batch_list[0].students, 2);

    let names: Vec<String> = students(&dataset).into_iter().map(|s| s.full_name).collect();
    assert_eq!(names, vec!["Asha Rao", "Ravi Kumar", "Meera Iyer"]);
}

#[test]
fn test_batch_view_normalizes_misspellings() {
    let dir = tempfile::tempdir().unwrap();
    let dataset = write_fixture(dir.path());

    let report = batch_analysis(&dataset, "2023", &ViewOptions::default()).unwrap();
    assert_eq!(report.student_count, 2);
    assert_eq!(
        report.skill_counts,
        vec![SkillCount::new("python", 2), SkillCount::new("sql", 2)]
    );
    assert!(report.projects_cloud.words.iter().any(|w| w.text == "forecasting"));
}

#[test]
fn test_student_view_questions() {
    let dir = tempfile::tempdir().unwrap();
    let dataset = write_fixture(dir.path());

    let report = student_analysis(&dataset, "Ravi Kumar", &ViewOptions::default()).unwrap();
    assert_eq!(report.profile.email, "ravi@uni.edu");
    assert_eq!(report.questions[0].skill, "python");
    assert_eq!(report.questions[0].questions.len(), 2);
    assert_eq!(report.questions[1].questions, vec!["What is a window function?"]);
    assert!(report.questions[2].questions.is_empty());
}

#[test]
fn test_unknown_batch_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let dataset = write_fixture(dir.path());

    let err = batch_analysis(&dataset, "1999", &ViewOptions::default()).unwrap_err();
    assert!(matches!(err, DashError::UnknownBatch(_)));
}

#[test]
fn test_reports_written_to_disk() {
    let dir = tempfile::tempdir().unwrap();
    let dataset = write_fixture(dir.path());
    let options = ViewOptions::default();

    let batch = batch_analysis(&dataset, "2024", &options).unwrap();
    let html_path = dir.path().join("batch.html");
    report::html::render_batch(&batch, &options, &html_path).unwrap();
    assert!(std::fs::read_to_string(&html_path).unwrap().contains("Analysis for Batch 2024"));

    let student = student_analysis(&dataset, "Asha Rao", &options).unwrap();
    let pdf_path = dir.path().join("student.pdf");
    report::pdf::render_student(&student, &pdf_path).unwrap();
    assert!(std::fs::read(&pdf_path).unwrap().starts_with(b"%PDF"));
}
