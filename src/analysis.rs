//! Batch and student views over a loaded [`Dataset`].
//!
//! Every function here is pure: the same dataset and [`ViewOptions`] always
//! produce the same report.

use std::collections::HashSet;

use log::info;

use crate::config::ViewOptions;
use crate::error::{DashError, Result};
use crate::loader::Dataset;
use crate::models::{
    BatchReport, BatchSummary, QuestionGroup, SkillQuestion, StudentReport, StudentSummary,
};
use crate::skills::{count_frequencies, filter_min_count, normalize_skills, split_skills};
use crate::wordcloud::{self, WordCloudOptions};

/// Batches in first-seen order, with how many students each has.
pub fn batches(dataset: &Dataset) -> Vec<BatchSummary> {
    let mut summaries: Vec<BatchSummary> = Vec::new();
    for student in &dataset.students {
        match summaries.iter_mut().find(|s| s.batch == student.batch) {
            Some(summary) => summary.students += 1,
            None => summaries.push(BatchSummary {
                batch: student.batch.clone(),
                students: 1,
            }),
        }
    }
    summaries
}

/// Students in first-seen order; repeated names are listed once.
pub fn students(dataset: &Dataset) -> Vec<StudentSummary> {
    let mut seen = HashSet::new();
    dataset
        .students
        .iter()
        .filter(|s| seen.insert(s.full_name.as_str()))
        .map(|s| StudentSummary {
            full_name: s.full_name.clone(),
            batch: s.batch.clone(),
        })
        .collect()
}

/// Skill distribution and word clouds for every student in `batch`.
///
/// Skill cells of the batch are joined and split on commas, so one blank entry
/// between two commas still counts. Students with an empty skills cell
/// contribute nothing. The chart keeps skills seen at least
/// `options.min_count` times; the skills word cloud uses all of them.
pub fn batch_analysis(dataset: &Dataset, batch: &str, options: &ViewOptions) -> Result<BatchReport> {
    let members: Vec<_> = dataset
        .students
        .iter()
        .filter(|s| s.batch == batch)
        .collect();
    if members.is_empty() {
        return Err(DashError::UnknownBatch(batch.to_string()));
    }

    let joined_skills = members
        .iter()
        .map(|s| s.skills.as_str())
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(",");
    let skills = normalize_skills(&split_skills(&joined_skills), &options.reference_skills);
    let skill_counts = filter_min_count(count_frequencies(&skills), options.min_count);

    let cloud_options = WordCloudOptions::from_view(options);
    let skills_cloud = wordcloud::generate(&skills.join(" "), &cloud_options);

    let projects_text = members
        .iter()
        .map(|s| s.research.as_str())
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase();
    let projects_cloud = wordcloud::generate(&projects_text, &cloud_options);

    info!(
        "batch {}: {} students, {} skill entries, {} charted",
        batch,
        members.len(),
        skills.len(),
        skill_counts.len()
    );

    Ok(BatchReport {
        batch: batch.to_string(),
        student_count: members.len(),
        skills,
        skill_counts,
        skills_cloud,
        projects_cloud,
    })
}

/// Profile, skill distribution, word cloud and interview questions for one student.
///
/// The first row with a matching full name is used. Skills are split and
/// lowercased but not folded onto the reference vocabulary, and the chart is
/// not filtered.
pub fn student_analysis(dataset: &Dataset, name: &str, options: &ViewOptions) -> Result<StudentReport> {
    let profile = dataset
        .students
        .iter()
        .find(|s| s.full_name == name)
        .ok_or_else(|| DashError::UnknownStudent(name.to_string()))?
        .clone();

    let skills = if profile.skills.is_empty() {
        Vec::new()
    } else {
        split_skills(&profile.skills)
    };
    let skill_counts = count_frequencies(&skills);

    let cloud_options = WordCloudOptions::from_view(options);
    let skills_cloud = wordcloud::generate(&skills.join(" "), &cloud_options);

    let questions = lookup_questions(&dataset.questions, &skills);

    info!(
        "student {}: {} skills, {} with questions",
        profile.full_name,
        skills.len(),
        questions.iter().filter(|g| !g.questions.is_empty()).count()
    );

    Ok(StudentReport {
        profile,
        skills,
        skill_counts,
        skills_cloud,
        questions,
    })
}

/// Questions for each distinct skill, in the order the skills are given.
///
/// A question applies when its skill, trimmed and lowercased, equals the
/// (already lowercased) skill. Skills without questions get an empty group.
pub fn lookup_questions(questions: &[SkillQuestion], skills: &[String]) -> Vec<QuestionGroup> {
    let mut seen = HashSet::new();
    skills
        .iter()
        .filter(|skill| !skill.is_empty() && seen.insert(skill.as_str()))
        .map(|skill| QuestionGroup {
            skill: skill.clone(),
            questions: questions
                .iter()
                .filter(|q| q.skill.trim().to_lowercase() == *skill)
                .map(|q| q.question.clone())
                .collect(),
        })
        .collect()
}
