//! Per-venue legal element checklists and coverage scoring.

use crate::triage::domain::{CaseCategory, CaseProfile};

use super::ElementCoverage;

pub(crate) struct LegalElement {
    pub key: &'static str,
    pub name: &'static str,
    /// Intake follow-up question feeding this element.
    pub answer_key: &'static str,
    /// Evidence tags that corroborate the element. Empty means the element
    /// can only be supported through answers.
    pub required_tags: &'static [&'static str],
}

const HOUSING_ELEMENTS: &[LegalElement] = &[
    LegalElement {
        key: "duty_to_repair",
        name: "Landlord's duty to repair engaged",
        answer_key: "asked_landlord_to_fix",
        required_tags: &["repairs", "mold", "pests"],
    },
    LegalElement {
        key: "notice_to_landlord",
        name: "Notice given to the landlord",
        answer_key: "notice_given",
        required_tags: &["notice"],
    },
    LegalElement {
        key: "impact_on_household",
        name: "Impact on the household",
        answer_key: "health_impact",
        required_tags: &["mold", "pests"],
    },
    LegalElement {
        key: "documented_timeline",
        name: "Documented timeline of incidents",
        answer_key: "timeline_documented",
        required_tags: &["notice", "repairs"],
    },
];

const HUMAN_RIGHTS_ELEMENTS: &[LegalElement] = &[
    LegalElement {
        key: "protected_ground",
        name: "Protected ground engaged",
        answer_key: "discrimination_type",
        required_tags: &[],
    },
    LegalElement {
        key: "adverse_treatment",
        name: "Adverse treatment linked to the ground",
        answer_key: "adverse_treatment",
        required_tags: &["harassment"],
    },
    LegalElement {
        key: "accommodation_requested",
        name: "Accommodation requested and refused",
        answer_key: "accommodation_requested",
        required_tags: &["notice"],
    },
];

const SMALL_CLAIMS_ELEMENTS: &[LegalElement] = &[
    LegalElement {
        key: "amount_quantified",
        name: "Claim amount quantified",
        answer_key: "amount_claimed",
        required_tags: &[],
    },
    LegalElement {
        key: "obligation_established",
        name: "Agreement or obligation established",
        answer_key: "agreement_exists",
        required_tags: &["notice"],
    },
    LegalElement {
        key: "demand_made",
        name: "Demand for payment made",
        answer_key: "demand_made",
        required_tags: &["notice"],
    },
];

const EMPLOYMENT_ELEMENTS: &[LegalElement] = &[
    LegalElement {
        key: "dismissal_without_cause",
        name: "Dismissal without cause",
        answer_key: "terminated_without_cause",
        required_tags: &[],
    },
    LegalElement {
        key: "wages_outstanding",
        name: "Wages or entitlements outstanding",
        answer_key: "wages_unpaid",
        required_tags: &[],
    },
    LegalElement {
        key: "notice_or_severance",
        name: "Notice or severance shortfall",
        answer_key: "severance_shortfall",
        required_tags: &["notice"],
    },
];

const FAMILY_ELEMENTS: &[LegalElement] = &[
    LegalElement {
        key: "parenting_arrangements",
        name: "Proposed parenting arrangements",
        answer_key: "parenting_plan_proposed",
        required_tags: &[],
    },
    LegalElement {
        key: "financial_disclosure",
        name: "Financial disclosure prepared",
        answer_key: "financial_disclosure_ready",
        required_tags: &[],
    },
    LegalElement {
        key: "best_interests",
        name: "Child's best interests documented",
        answer_key: "best_interests_documented",
        required_tags: &[],
    },
];

/// Map a tribunal code to its broad category. Unrecognized venues (including
/// the consultation fallback) use the small-claims checklist, the most
/// generic of the five.
pub(crate) fn venue_category(tribunal: &str) -> CaseCategory {
    match tribunal.to_uppercase().as_str() {
        "LTB" | "RTB" | "RTDRS" | "TAL" => CaseCategory::Housing,
        "HRTO" | "BCHRT" | "AHRC" | "CDPDJ" => CaseCategory::HumanRights,
        "LABOUR" | "LRB" | "ALRB" => CaseCategory::Employment,
        "FAMILY" => CaseCategory::Family,
        _ => CaseCategory::SmallClaims,
    }
}

pub(crate) fn checklist_for(tribunal: &str) -> &'static [LegalElement] {
    match venue_category(tribunal) {
        CaseCategory::Housing => HOUSING_ELEMENTS,
        CaseCategory::HumanRights => HUMAN_RIGHTS_ELEMENTS,
        CaseCategory::Employment => EMPLOYMENT_ELEMENTS,
        CaseCategory::Family => FAMILY_ELEMENTS,
        CaseCategory::SmallClaims | CaseCategory::Unknown => SMALL_CLAIMS_ELEMENTS,
    }
}

/// Score each element 0-3: an affirmative answer is worth 2, any other
/// substantive answer 1, and corroborating evidence tags add 1. The raw sum
/// is rescaled to the 0-25 band.
pub(crate) fn score_elements(profile: &CaseProfile, tribunal: &str) -> (Vec<ElementCoverage>, u8) {
    let checklist = checklist_for(tribunal);
    let mut coverage = Vec::with_capacity(checklist.len());
    let mut raw: u32 = 0;

    for element in checklist {
        let base: u8 = match profile.user_answers.get(element.answer_key) {
            Some(answer) if answer.is_affirmative() => 2,
            Some(answer) if answer.is_substantive() => 1,
            _ => 0,
        };

        let evidence_matched = !element.required_tags.is_empty()
            && profile.evidence.iter().any(|item| {
                item.tags
                    .iter()
                    .any(|tag| element.required_tags.contains(&tag.as_str()))
            });

        let score = (base + u8::from(evidence_matched)).min(3);
        raw += u32::from(score);

        coverage.push(ElementCoverage {
            element_key: element.key.to_string(),
            element_name: element.name.to_string(),
            score,
            evidence_matched,
        });
    }

    let max = checklist.len() as u32 * 3;
    let normalized = if max == 0 {
        0
    } else {
        ((raw * 25 + max / 2) / max) as u8
    };

    (coverage, normalized)
}
