use std::collections::HashMap;

/// Similarity a reference skill must reach to be accepted as a match.
pub const DEFAULT_CUTOFF: f64 = 0.6;

/// Picks the reference skill a free-text entry should be folded into.
pub trait SkillMatcher {
    /// Best vocabulary entry for `candidate`, or `None` when nothing is close enough.
    fn best_match<'v>(&self, candidate: &str, vocabulary: &'v [String]) -> Option<&'v str>;
}

/// Closest-match lookup scored with [`SequenceMatcher::ratio`].
///
/// Candidates below the cutoff are rejected. When several vocabulary entries
/// share the best score, the first one in vocabulary order wins.
#[derive(Debug, Clone, Copy)]
pub struct CloseMatcher {
    cutoff: f64,
}

impl CloseMatcher {
    pub fn new() -> Self {
        Self {
            cutoff: DEFAULT_CUTOFF,
        }
    }

    /// `cutoff` is clamped to `0.0..=1.0`.
    pub fn with_cutoff(cutoff: f64) -> Self {
        Self {
            cutoff: cutoff.clamp(0.0, 1.0),
        }
    }
}

impl Default for CloseMatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl SkillMatcher for CloseMatcher {
    fn best_match<'v>(&self, candidate: &str, vocabulary: &'v [String]) -> Option<&'v str> {
        let mut best: Option<(&'v str, f64)> = None;

        for reference in vocabulary {
            // reference is `a`: longest-match ties resolve by position in the reference
            let matcher = SequenceMatcher::new(reference, candidate);
            // Cheap upper bounds first; both are >= ratio().
            if matcher.real_quick_ratio() < self.cutoff || matcher.quick_ratio() < self.cutoff {
                continue;
            }
            let score = matcher.ratio();
            if score < self.cutoff {
                continue;
            }
            if best.map_or(true, |(_, top)| score > top) {
                best = Some((reference.as_str(), score));
            }
        }

        best.map(|(reference, _)| reference)
    }
}

/// Longest-matching-block comparison of two strings.
///
/// The score is `2 * M / T`, where `T` is the combined length and `M` the
/// number of characters covered by matching blocks. Blocks are found by taking
/// the longest common run (earliest in `a`, then in `b`, on ties) and recursing
/// on the pieces to its left and right.
pub struct SequenceMatcher {
    a: Vec<char>,
    b: Vec<char>,
    b2j: HashMap<char, Vec<usize>>,
}

impl SequenceMatcher {
    pub fn new(a: &str, b: &str) -> Self {
        let a: Vec<char> = a.chars().collect();
        let b: Vec<char> = b.chars().collect();
        let mut b2j: HashMap<char, Vec<usize>> = HashMap::new();
        for (j, c) in b.iter().enumerate() {
            b2j.entry(*c).or_default().push(j);
        }
        Self { a, b, b2j }
    }

    /// Longest common block within `a[alo..ahi]` and `b[blo..bhi]` as `(i, j, size)`.
    pub fn find_longest_match(
        &self,
        alo: usize,
        ahi: usize,
        blo: usize,
        bhi: usize,
    ) -> (usize, usize, usize) {
        let (mut best_i, mut best_j, mut best_size) = (alo, blo, 0);
        // j2len[j] = length of the match ending at a[i - 1], b[j]
        let mut j2len: HashMap<usize, usize> = HashMap::new();

        for i in alo..ahi {
            let mut next: HashMap<usize, usize> = HashMap::new();
            if let Some(positions) = self.b2j.get(&self.a[i]) {
                for &j in positions {
                    if j < blo {
                        continue;
                    }
                    if j >= bhi {
                        break;
                    }
                    let k = j
                        .checked_sub(1)
                        .and_then(|prev| j2len.get(&prev))
                        .copied()
                        .unwrap_or(0)
                        + 1;
                    next.insert(j, k);
                    if k > best_size {
                        best_i = i + 1 - k;
                        best_j = j + 1 - k;
                        best_size = k;
                    }
                }
            }
            j2len = next;
        }

        (best_i, best_j, best_size)
    }

    /// Non-overlapping matching blocks in ascending order.
    pub fn matching_blocks(&self) -> Vec<(usize, usize, usize)> {
        let mut queue = vec![(0, self.a.len(), 0, self.b.len())];
        let mut blocks = Vec::new();

        while let Some((alo, ahi, blo, bhi)) = queue.pop() {
            let (i, j, k) = self.find_longest_match(alo, ahi, blo, bhi);
            if k == 0 {
                continue;
            }
            blocks.push((i, j, k));
            if alo < i && blo < j {
                queue.push((alo, i, blo, j));
            }
            if i + k < ahi && j + k < bhi {
                queue.push((i + k, ahi, j + k, bhi));
            }
        }

        blocks.sort_unstable();
        blocks
    }

    pub fn ratio(&self) -> f64 {
        let matches: usize = self.matching_blocks().iter().map(|&(_, _, k)| k).sum();
        self.score(matches)
    }

    /// Upper bound on [`ratio`](Self::ratio) from shared character counts.
    pub fn quick_ratio(&self) -> f64 {
        let mut available: HashMap<char, usize> = HashMap::new();
        for c in &self.b {
            *available.entry(*c).or_insert(0) += 1;
        }
        let mut matches = 0;
        for c in &self.a {
            if let Some(n) = available.get_mut(c) {
                if *n > 0 {
                    *n -= 1;
                    matches += 1;
                }
            }
        }
        self.score(matches)
    }

    /// Upper bound on [`ratio`](Self::ratio) from lengths alone.
    pub fn real_quick_ratio(&self) -> f64 {
        self.score(self.a.len().min(self.b.len()))
    }

    fn score(&self, matches: usize) -> f64 {
        let total = self.a.len() + self.b.len();
        if total == 0 {
            return 1.0;
        }
        2.0 * matches as f64 / total as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vocab(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_ratio_identical() {
        assert_eq!(SequenceMatcher::new("python", "python").ratio(), 1.0);
    }

    #[test]
    fn test_ratio_both_empty() {
        assert_eq!(SequenceMatcher::new("", "").ratio(), 1.0);
    }

    #[test]
    fn test_ratio_one_empty() {
        assert_eq!(SequenceMatcher::new("", "sql").ratio(), 0.0);
    }

    #[test]
    fn test_ratio_transposed_letters() {
        // blocks: "p", "yt", "on" -> 5 matches over 12 characters
        let ratio = SequenceMatcher::new("phyton", "python").ratio();
        assert!((ratio - 10.0 / 12.0).abs() < 1e-9);
    }

    #[test]
    fn test_longest_match_prefers_earliest() {
        let m = SequenceMatcher::new("phyton", "python");
        assert_eq!(m.find_longest_match(0, 6, 0, 6), (2, 1, 2));
    }

    #[test]
    fn test_matching_blocks_ordered() {
        let m = SequenceMatcher::new("abxcd", "abcd");
        assert_eq!(m.matching_blocks(), vec![(0, 0, 2), (3, 2, 2)]);
    }

    #[test]
    fn test_quick_ratios_bound_ratio() {
        let m = SequenceMatcher::new("machine learnig", "machine learning");
        assert!(m.real_quick_ratio() >= m.quick_ratio());
        assert!(m.quick_ratio() >= m.ratio());
    }

    #[test]
    fn test_best_match_above_cutoff() {
        let v = vocab(&["python", "sql", "power bi"]);
        assert_eq!(CloseMatcher::new().best_match("power-bi", &v), Some("power bi"));
    }

    #[test]
    fn test_best_match_rejects_unrelated() {
        let v = vocab(&["python", "sql", "power bi"]);
        assert_eq!(CloseMatcher::new().best_match("zzqxv123", &v), None);
    }

    #[test]
    fn test_tie_keeps_first_reference() {
        // "ab" scores 0.8 against both entries
        let v = vocab(&["abc", "abd"]);
        assert_eq!(CloseMatcher::new().best_match("ab", &v), Some("abc"));
        let v = vocab(&["abd", "abc"]);
        assert_eq!(CloseMatcher::new().best_match("ab", &v), Some("abd"));
    }

    #[test]
    fn test_ratio_depends_on_argument_order() {
        // reference first: "py", "t", "o" match; candidate first: only "py", "o"
        let forward = SequenceMatcher::new("python", "pyoto").ratio();
        let reversed = SequenceMatcher::new("pyoto", "python").ratio();
        assert!((forward - 8.0 / 11.0).abs() < 1e-9);
        assert!((reversed - 6.0 / 11.0).abs() < 1e-9);
    }

    #[test]
    fn test_default_vocabulary_typos() {
        let v: Vec<String> = crate::skills::DEFAULT_REFERENCE_SKILLS
            .iter()
            .map(|s| s.to_string())
            .collect();
        let matcher = CloseMatcher::new();
        assert_eq!(matcher.best_match("pyoto", &v), Some("python"));
        assert_eq!(matcher.best_match("elce", &v), Some("excel"));
        assert_eq!(matcher.best_match("jvoa", &v), None);
    }

    #[test]
    fn test_custom_cutoff() {
        let v = vocab(&["c++"]);
        // "c" vs "c++" scores 0.5
        assert_eq!(CloseMatcher::new().best_match("c", &v), None);
        assert_eq!(CloseMatcher::with_cutoff(0.5).best_match("c", &v), Some("c++"));
    }
}
