//! Staged selection of the search candidate that best names a park.

use std::collections::HashSet;

use parkmatch_core::{normalize_name, separator_folded, token_set, SearchCandidate, MATCH_STOPWORDS};

/// Minimum fuzzy score for the best-scoring candidate to be accepted.
pub const DEFAULT_MATCH_THRESHOLD: f64 = 0.45;

const JACCARD_WEIGHT: f64 = 0.65;
const LEVENSHTEIN_WEIGHT: f64 = 0.35;

/// Which stage of [`NameMatcher::best_match`] picked the candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchRule {
    /// Case-insensitive equality, ignoring separator differences.
    Exact,
    /// Normalized candidate name contains the normalized query.
    Containment,
    /// Candidate tokens are a superset of the query tokens.
    TokenSuperset,
    /// Best weighted fuzzy score, at or above the threshold.
    Fuzzy,
    /// Nothing scored high enough; first candidate in corpus order.
    Fallback,
}

/// Outcome of a match: the chosen candidate and how it was chosen.
#[derive(Debug, Clone, Copy)]
pub struct NameMatch<'a> {
    pub candidate: &'a SearchCandidate,
    pub rule: MatchRule,
    /// Fuzzy score, present only for the `Fuzzy` and `Fallback` stages.
    pub score: Option<f64>,
}

/// Resolves a free-text park name against search candidates.
///
/// Stages run in order and the first one that selects anything wins:
/// exact, containment, token superset (highest Jaccard), weighted fuzzy
/// score. Given a non-empty corpus a candidate is always returned.
#[derive(Debug, Clone, Copy)]
pub struct NameMatcher {
    threshold: f64,
}

impl Default for NameMatcher {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_MATCH_THRESHOLD,
        }
    }
}

impl NameMatcher {
    #[must_use]
    pub fn new(threshold: f64) -> Self {
        Self { threshold }
    }

    #[must_use]
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Selects the candidate that best matches `query`.
    ///
    /// Returns `None` only for an empty corpus. Ties keep corpus order.
    #[must_use]
    pub fn best_match<'a>(
        &self,
        query: &str,
        candidates: &'a [SearchCandidate],
    ) -> Option<NameMatch<'a>> {
        let first = candidates.first()?;

        let query_folded = separator_folded(query);
        if let Some(candidate) = candidates
            .iter()
            .find(|c| separator_folded(&c.name) == query_folded)
        {
            return Some(NameMatch {
                candidate,
                rule: MatchRule::Exact,
                score: None,
            });
        }

        let query_norm = normalize_name(query, MATCH_STOPWORDS);
        if let Some(candidate) = candidates
            .iter()
            .find(|c| normalize_name(&c.name, MATCH_STOPWORDS).contains(&query_norm))
        {
            return Some(NameMatch {
                candidate,
                rule: MatchRule::Containment,
                score: None,
            });
        }

        let query_tokens = token_set(query, MATCH_STOPWORDS);
        let mut superset: Option<(&SearchCandidate, f64)> = None;
        for candidate in candidates {
            let tokens = token_set(&candidate.name, MATCH_STOPWORDS);
            if !tokens.is_superset(&query_tokens) {
                continue;
            }
            let similarity = jaccard(&tokens, &query_tokens);
            if superset.is_none_or(|(_, best)| similarity > best) {
                superset = Some((candidate, similarity));
            }
        }
        if let Some((candidate, _)) = superset {
            return Some(NameMatch {
                candidate,
                rule: MatchRule::TokenSuperset,
                score: None,
            });
        }

        let mut top = (first, fuzzy_score(query, &first.name));
        for candidate in &candidates[1..] {
            let score = fuzzy_score(query, &candidate.name);
            if score > top.1 {
                top = (candidate, score);
            }
        }

        let (candidate, score) = top;
        if score >= self.threshold {
            Some(NameMatch {
                candidate,
                rule: MatchRule::Fuzzy,
                score: Some(score),
            })
        } else {
            tracing::debug!(query, best = %candidate.name, score, "no confident match; using first candidate");
            Some(NameMatch {
                candidate: first,
                rule: MatchRule::Fallback,
                score: Some(score),
            })
        }
    }
}

/// `|A ∩ B| / |A ∪ B|`; two empty sets are identical.
#[must_use]
pub fn jaccard(a: &HashSet<String>, b: &HashSet<String>) -> f64 {
    if a.is_empty() && b.is_empty() {
        return 1.0;
    }
    let intersection = a.intersection(b).count();
    let union = a.union(b).count();
    #[allow(clippy::cast_precision_loss)]
    {
        intersection as f64 / union as f64
    }
}

/// Edit distance over `char`s using two rolling rows.
#[must_use]
pub fn levenshtein(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    // Keep the row over the shorter string.
    let (long, short) = if a.len() >= b.len() { (a, b) } else { (b, a) };
    if short.is_empty() {
        return long.len();
    }

    let mut prev: Vec<usize> = (0..=short.len()).collect();
    let mut curr = vec![0; short.len() + 1];
    for (i, lc) in long.iter().enumerate() {
        curr[0] = i + 1;
        for (j, sc) in short.iter().enumerate() {
            let substitution = prev[j] + usize::from(lc != sc);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(substitution);
        }
        std::mem::swap(&mut prev, &mut curr);
    }
    prev[short.len()]
}

/// `1 - levenshtein / max_len` over normalized names; `1.0` when both are equal.
#[must_use]
pub fn levenshtein_ratio(a: &str, b: &str) -> f64 {
    let a = normalize_name(a, MATCH_STOPWORDS);
    let b = normalize_name(b, MATCH_STOPWORDS);
    if a == b {
        return 1.0;
    }
    let max_len = a.chars().count().max(b.chars().count());
    if max_len == 0 {
        return 1.0;
    }
    #[allow(clippy::cast_precision_loss)]
    {
        1.0 - levenshtein(&a, &b) as f64 / max_len as f64
    }
}

/// `0.65 · Jaccard(tokens) + 0.35 · levenshtein_ratio`.
#[must_use]
pub fn fuzzy_score(a: &str, b: &str) -> f64 {
    let j = jaccard(
        &token_set(a, MATCH_STOPWORDS),
        &token_set(b, MATCH_STOPWORDS),
    );
    JACCARD_WEIGHT * j + LEVENSHTEIN_WEIGHT * levenshtein_ratio(a, b)
}

#[cfg(test)]
#[path = "matcher_test.rs"]
mod tests;
