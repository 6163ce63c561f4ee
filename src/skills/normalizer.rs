use std::collections::HashMap;

use log::debug;

use crate::models::SkillCount;
use crate::skills::matcher::{CloseMatcher, SkillMatcher};

/// Fold each skill entry onto the closest reference skill using the default matcher.
///
/// The output has the same length and order as `skill_list`; entries with no
/// reference skill above the cutoff are passed through unchanged.
pub fn normalize_skills(skill_list: &[String], reference_skills: &[String]) -> Vec<String> {
    normalize_with(&CloseMatcher::default(), skill_list, reference_skills)
}

/// [`normalize_skills`] with an explicit matcher.
pub fn normalize_with<M: SkillMatcher + ?Sized>(
    matcher: &M,
    skill_list: &[String],
    reference_skills: &[String],
) -> Vec<String> {
    skill_list
        .iter()
        .map(|skill| match matcher.best_match(skill, reference_skills) {
            Some(reference) => {
                if reference != skill {
                    debug!("normalize: {:?} -> {:?}", skill, reference);
                }
                reference.to_string()
            }
            None => skill.clone(),
        })
        .collect()
}

/// Split a comma-separated skills cell into trimmed, lowercased entries.
///
/// Blank entries are kept: `"python, ,sql"` yields three entries.
pub fn split_skills(text: &str) -> Vec<String> {
    text.split(',').map(|s| s.trim().to_lowercase()).collect()
}

/// Occurrence count per skill, highest first; equal counts keep first-seen order.
pub fn count_frequencies(skills: &[String]) -> Vec<SkillCount> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut counts: Vec<SkillCount> = Vec::new();

    for skill in skills {
        match index.get(skill.as_str()) {
            Some(&i) => counts[i].count += 1,
            None => {
                index.insert(skill.as_str(), counts.len());
                counts.push(SkillCount::new(skill.as_str(), 1));
            }
        }
    }

    // sort_by is stable
    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts
}

/// Keep only skills seen at least `min_count` times.
pub fn filter_min_count(counts: Vec<SkillCount>, min_count: usize) -> Vec<SkillCount> {
    counts.into_iter().filter(|c| c.count >= min_count).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::skills::DEFAULT_REFERENCE_SKILLS;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_normalize_example() {
        let reference = strings(&["python", "sql", "power bi"]);
        let skills = strings(&["phyton", "sql", "excel"]);
        assert_eq!(
            normalize_skills(&skills, &reference),
            strings(&["python", "sql", "excel"])
        );
    }

    #[test]
    fn test_normalize_preserves_length() {
        let reference = strings(DEFAULT_REFERENCE_SKILLS);
        let skills = strings(&["", "python", "", "zzqxv123", "ms excel", "python"]);
        assert_eq!(normalize_skills(&skills, &reference).len(), skills.len());
        assert!(normalize_skills(&[], &reference).is_empty());
    }

    #[test]
    fn test_exact_reference_unchanged() {
        let reference = strings(DEFAULT_REFERENCE_SKILLS);
        for skill in &reference {
            assert_eq!(normalize_skills(std::slice::from_ref(skill), &reference), vec![skill.clone()]);
        }
    }

    #[test]
    fn test_unrelated_passes_through() {
        let reference = strings(DEFAULT_REFERENCE_SKILLS);
        let skills = strings(&["zzqxv123"]);
        assert_eq!(normalize_skills(&skills, &reference), skills);
    }

    #[test]
    fn test_empty_entry_passes_through() {
        let reference = strings(DEFAULT_REFERENCE_SKILLS);
        assert_eq!(normalize_skills(&strings(&[""]), &reference), strings(&[""]));
    }

    #[test]
    fn test_idempotent_on_normalized_output() {
        let reference = strings(DEFAULT_REFERENCE_SKILLS);
        let skills = strings(&["phyton", "machine learnig", "ms excel", "html", "golang"]);
        let once = normalize_skills(&skills, &reference);
        assert_eq!(
            once,
            strings(&["python", "machine learning", "excel", "html/css", "golang"])
        );
        assert_eq!(normalize_skills(&once, &reference), once);
    }

    #[test]
    fn test_normalize_with_strict_matcher() {
        let reference = strings(&["python"]);
        let skills = strings(&["phyton", "python"]);
        let strict = CloseMatcher::with_cutoff(1.0);
        assert_eq!(
            normalize_with(&strict, &skills, &reference),
            strings(&["phyton", "python"])
        );
    }

    #[test]
    fn test_split_skills() {
        assert_eq!(
            split_skills("Python, Power BI ,SQL"),
            strings(&["python", "power bi", "sql"])
        );
        assert_eq!(split_skills("python, ,sql").len(), 3);
        assert_eq!(split_skills(""), strings(&[""]));
    }

    #[test]
    fn test_count_frequencies() {
        let counts = count_frequencies(&strings(&["python", "python", "sql"]));
        assert_eq!(
            counts,
            vec![SkillCount::new("python", 2), SkillCount::new("sql", 1)]
        );
    }

    #[test]
    fn test_count_ties_keep_first_seen_order() {
        let counts = count_frequencies(&strings(&["sql", "r", "python", "r", "sql"]));
        let order: Vec<&str> = counts.iter().map(|c| c.skill.as_str()).collect();
        assert_eq!(order, vec!["sql", "r", "python"]);
    }

    #[test]
    fn test_filter_min_count() {
        let counts = count_frequencies(&strings(&["python", "python", "sql"]));
        assert_eq!(filter_min_count(counts, 2), vec![SkillCount::new("python", 2)]);
    }
}
