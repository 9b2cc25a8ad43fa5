//! Evidence strength component: count with diminishing returns, type
//! diversity, and coverage of the venue's expected evidence categories.
//! Every contribution is non-negative, so adding an item never lowers the
//! component.

use std::collections::BTreeSet;

use crate::triage::domain::{CaseCategory, EvidenceItem};

use super::elements::venue_category;
use super::MeritConfig;

const FULL_RATE_POINTS: u32 = 3;
const REDUCED_RATE_POINTS: u32 = 1;
const DIVERSITY_POINTS_PER_KIND: u32 = 2;
const MAX_DIVERSITY_POINTS: u32 = 6;
const MAX_COVERAGE_POINTS: u32 = 8;
const MAX_EVIDENCE_POINTS: u32 = 25;

/// Evidence categories each venue expects to see.
pub(crate) fn expected_tags(tribunal: &str) -> &'static [&'static str] {
    match venue_category(tribunal) {
        CaseCategory::Housing => &["repairs", "mold", "pests", "notice"],
        CaseCategory::HumanRights => &["harassment", "notice"],
        CaseCategory::Employment => &["notice"],
        CaseCategory::Family => &[],
        CaseCategory::SmallClaims | CaseCategory::Unknown => &["notice"],
    }
}

pub(crate) fn evidence_score(
    evidence: &[EvidenceItem],
    tribunal: &str,
    config: &MeritConfig,
) -> u8 {
    if evidence.is_empty() {
        return 0;
    }

    let count = evidence.len();
    let full_rate = count.min(config.sufficient_evidence) as u32;
    let reduced_rate = count.saturating_sub(config.sufficient_evidence) as u32;
    let count_points = full_rate * FULL_RATE_POINTS + reduced_rate * REDUCED_RATE_POINTS;

    let kinds: BTreeSet<_> = evidence.iter().map(|item| item.kind).collect();
    let diversity_points =
        (kinds.len() as u32 * DIVERSITY_POINTS_PER_KIND).min(MAX_DIVERSITY_POINTS);

    let expected = expected_tags(tribunal);
    let coverage_points = if expected.is_empty() {
        0
    } else {
        let covered = expected
            .iter()
            .filter(|tag| {
                evidence
                    .iter()
                    .any(|item| item.tags.iter().any(|item_tag| item_tag == *tag))
            })
            .count() as u32;
        (covered * MAX_COVERAGE_POINTS + expected.len() as u32 / 2) / expected.len() as u32
    };

    (count_points + diversity_points + coverage_points).min(MAX_EVIDENCE_POINTS) as u8
}

/// Expected categories with no supporting evidence yet; feeds the
/// next-best-actions list.
pub(crate) fn uncovered_tags(evidence: &[EvidenceItem], tribunal: &str) -> Vec<&'static str> {
    expected_tags(tribunal)
        .iter()
        .filter(|tag| {
            !evidence
                .iter()
                .any(|item| item.tags.iter().any(|item_tag| item_tag == *tag))
        })
        .copied()
        .collect()
}
