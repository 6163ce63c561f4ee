//! Skill normalization: folding free-text skill entries onto a fixed vocabulary.
//!
//! - [`matcher`]: similarity scoring and the [`SkillMatcher`] seam.
//! - [`normalizer`]: splitting skill cells, normalizing, and counting.

pub mod matcher;
pub mod normalizer;

pub use matcher::{CloseMatcher, SequenceMatcher, SkillMatcher, DEFAULT_CUTOFF};
pub use normalizer::{count_frequencies, filter_min_count, normalize_skills, normalize_with, split_skills};

/// Canonical skill names used when the config does not provide its own list.
pub const DEFAULT_REFERENCE_SKILLS: &[&str] = &[
    "python",
    "machine learning",
    "data analysis",
    "excel",
    "sql",
    "aws",
    "html/css",
    "power bi",
    "r",
    "tableau",
    "java",
    "c++",
];
