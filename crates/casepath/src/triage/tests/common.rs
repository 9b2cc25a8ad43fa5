use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::triage::catalog::{PathwayRule, RuleCatalog};
use crate::triage::domain::{AnswerValue, CaseProfile, KeyFacts};
use crate::triage::extractor::{FactExtractor, TriageIntake};
use crate::triage::router::RoutingResult;

/// A story whose words neither contain nor are contained by any builtin rule
/// keyword, so routing against the builtin catalog scores nothing.
pub(super) const NEUTRAL_STORY: &str = "the quiet afternoon felt strange and confusing";

pub(super) fn day(year: i32, month: u32, dayofmonth: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, dayofmonth).expect("valid date")
}

pub(super) fn intake(story: &str, province: &str) -> TriageIntake {
    TriageIntake {
        story_text: story.to_string(),
        province: province.to_string(),
        venue_hint: None,
        issue_tags: Vec::new(),
        key_facts: KeyFacts::default(),
        evidence_descriptions: Vec::new(),
        user_answers: BTreeMap::new(),
    }
}

pub(super) fn mold_intake() -> TriageIntake {
    let mut user_answers = BTreeMap::new();
    user_answers.insert(
        "asked_landlord_to_fix".to_string(),
        AnswerValue::Bool(true),
    );
    user_answers.insert(
        "notice_given".to_string(),
        AnswerValue::Text("I emailed them twice".to_string()),
    );

    TriageIntake {
        evidence_descriptions: vec![
            "Photos of mold in the bathroom".to_string(),
            "Letter to my landlord about repairs".to_string(),
        ],
        user_answers,
        ..intake(
            "There is mold everywhere and my landlord refuses to repair it",
            "Ontario",
        )
    }
}

pub(super) fn profile_from(intake: &TriageIntake) -> CaseProfile {
    FactExtractor::default()
        .extract(intake)
        .expect("intake normalizes")
}

/// A minimal rule with one match signal and no eligibility constraints.
/// Tests adjust fields on the returned value as needed.
pub(super) fn rule(rule_id: &str, tribunal: &str, keywords: &[&str]) -> PathwayRule {
    PathwayRule {
        rule_id: rule_id.to_string(),
        rule_name: format!("{rule_id} rule"),
        priority: 10,
        category: None,
        province: None,
        issue_keywords: keywords.iter().map(|keyword| keyword.to_string()).collect(),
        amount_min: None,
        amount_max: None,
        tribunal: tribunal.to_string(),
        pathway_id: format!("{rule_id}-pathway"),
        recommended_forms: vec!["Form X".to_string()],
        timeframe: "1-2 months".to_string(),
        filing_fee: "$50".to_string(),
        success_rate: 50,
        reasoning: format!("{rule_id} applies"),
    }
}

pub(super) fn catalog(rules: Vec<PathwayRule>) -> RuleCatalog {
    RuleCatalog::new("test-catalog", rules).expect("valid catalog")
}

pub(super) fn routing_with_confidence(confidence: u8) -> RoutingResult {
    RoutingResult {
        recommended_tribunal: "LTB".to_string(),
        recommended_pathway: "ltb-t6".to_string(),
        recommended_forms: vec!["T6".to_string()],
        confidence,
        reasoning: vec!["maintenance complaint".to_string()],
        timeframe: Some("3-6 months".to_string()),
        filing_fee: Some("$53".to_string()),
        success_rate: Some(61),
        alternatives: Vec::new(),
        matched_rules: Vec::new(),
    }
}
