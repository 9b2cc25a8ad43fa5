//! Named scoring components for the pathway router. Each function maps
//! `(profile facts, rule)` to a single contribution so the additive score
//! stays reviewable piece by piece.

use crate::triage::catalog::PathwayRule;
use crate::triage::domain::CaseCategory;

pub(crate) const EXACT_KEYWORD_POINTS: i64 = 10;
pub(crate) const LENIENT_KEYWORD_POINTS: i64 = 3;
pub(crate) const AMOUNT_BAND_POINTS: i64 = 15;
pub(crate) const CATEGORY_POINTS: i64 = 5;
pub(crate) const PROVINCE_POINTS: i64 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum KeywordHit {
    Exact,
    Lenient,
}

impl KeywordHit {
    pub(crate) fn points(self) -> i64 {
        match self {
            KeywordHit::Exact => EXACT_KEYWORD_POINTS,
            KeywordHit::Lenient => LENIENT_KEYWORD_POINTS,
        }
    }
}

/// Match one rule keyword against the lower-cased story. Exact substring
/// presence wins; otherwise a lenient cross-containment check at word level
/// (keyword contains a story word or vice versa). The lenient check is a
/// deliberately loose heuristic the score thresholds are calibrated against;
/// tightening it would shift every confidence value downstream.
pub(crate) fn match_keyword(keyword: &str, story: &str, words: &[&str]) -> Option<KeywordHit> {
    let keyword = keyword.to_lowercase();
    if story.contains(keyword.as_str()) {
        return Some(KeywordHit::Exact);
    }

    if words
        .iter()
        .any(|word| word.contains(keyword.as_str()) || keyword.contains(word))
    {
        return Some(KeywordHit::Lenient);
    }

    None
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum BandCheck {
    /// Rule carries no band; no effect either way.
    NoBand,
    /// Monetary fact inside the closed interval; contributes the band bonus.
    Within,
    /// Band present but the fact is missing or outside; rule is ineligible.
    Outside,
}

pub(crate) fn check_amount_band(rule: &PathwayRule, amount: Option<f64>) -> BandCheck {
    match rule.amount_band() {
        None => BandCheck::NoBand,
        Some((min, max)) => match amount {
            Some(value) if value >= min && value <= max => BandCheck::Within,
            _ => BandCheck::Outside,
        },
    }
}

/// Eligibility: a categorized rule is skipped when the profile resolves to a
/// different, known category. An unknown profile category filters nothing.
pub(crate) fn category_allows(rule: &PathwayRule, category: CaseCategory) -> bool {
    match rule.category {
        Some(rule_category) if category != CaseCategory::Unknown => rule_category == category,
        _ => true,
    }
}

pub(crate) fn category_bonus(rule: &PathwayRule, category: CaseCategory) -> i64 {
    if category != CaseCategory::Unknown && rule.category == Some(category) {
        CATEGORY_POINTS
    } else {
        0
    }
}

pub(crate) fn province_bonus(rule: &PathwayRule, jurisdiction: &str) -> i64 {
    match &rule.province {
        Some(province) if province == jurisdiction => PROVINCE_POINTS,
        _ => 0,
    }
}

/// Monotonic in the primary score, bounded to [30, 95].
pub(crate) fn confidence_from_score(score: i64) -> u8 {
    (50 + 2 * score).clamp(30, 95) as u8
}

/// Alternatives decay by 3 points per point of score gap, floored at 20.
pub(crate) fn alternative_confidence(primary_confidence: u8, score_gap: i64) -> u8 {
    (primary_confidence as i64 - 3 * score_gap).max(20) as u8
}
