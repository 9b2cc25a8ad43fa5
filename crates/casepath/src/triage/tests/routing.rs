use super::common::*;

use crate::triage::catalog::RuleCatalog;
use crate::triage::domain::CaseCategory;
use crate::triage::router::{route, FALLBACK_CONFIDENCE, FALLBACK_PATHWAY, FALLBACK_TRIBUNAL};

#[test]
fn ontario_mold_complaint_routes_to_the_ltb() {
    let profile = profile_from(&mold_intake());
    let result = route(&profile, &RuleCatalog::builtin());

    assert_eq!(result.recommended_tribunal, "LTB");
    assert_eq!(result.recommended_pathway, "ltb-t6");
    assert_eq!(result.recommended_forms, vec!["T6"]);
    assert!(!result.is_fallback());
    assert!(result.confidence >= 70);
    assert_eq!(result.timeframe.as_deref(), Some("3-6 months"));
    assert_eq!(result.reasoning.len(), 4);
    assert!(result.reasoning[0].contains("matched:"));
}

#[test]
fn unmatchable_story_returns_the_consultation_fallback() {
    let profile = profile_from(&intake(NEUTRAL_STORY, "Saskatchewan"));
    let result = route(&profile, &RuleCatalog::builtin());

    assert!(result.is_fallback());
    assert_eq!(result.recommended_tribunal, FALLBACK_TRIBUNAL);
    assert_eq!(result.recommended_pathway, FALLBACK_PATHWAY);
    assert_eq!(result.confidence, FALLBACK_CONFIDENCE);
    assert!(result.recommended_forms.is_empty());
    assert!(result.timeframe.is_none());
    assert!(result.filing_fee.is_none());
    assert!(result.success_rate.is_none());
    assert!(result.alternatives.is_empty());
    assert!(result.matched_rules.is_empty());
}

#[test]
fn routing_is_deterministic() {
    let profile = profile_from(&mold_intake());
    let builtin = RuleCatalog::builtin();

    let first = route(&profile, &builtin);
    let second = route(&profile, &builtin);

    assert_eq!(first, second);
}

#[test]
fn single_exact_keyword_yields_confidence_70() {
    let rules = catalog(vec![rule("flood", "LTB", &["flooding"])]);
    let profile = profile_from(&intake("flooding", "SK"));

    let result = route(&profile, &rules);

    assert_eq!(result.confidence, 70);
    assert_eq!(result.matched_rules.len(), 1);
    assert_eq!(result.matched_rules[0].score, 10);
    assert!(result.matched_rules[0].reasoning.contains("(matched: flooding)"));
}

#[test]
fn amount_inside_the_band_earns_the_band_bonus() {
    let mut banded = rule("sc", "SMALL_CLAIMS", &["invoice"]);
    banded.amount_min = Some(0.0);
    banded.amount_max = Some(35_000.0);
    let rules = catalog(vec![banded]);

    let mut payload = intake("they never paid my invoice", "SK");
    payload.key_facts.money.damages_sought = Some(12_000.0);

    let result = route(&profile_from(&payload), &rules);

    assert_eq!(result.recommended_tribunal, "SMALL_CLAIMS");
    // 10 exact keyword + 15 band bonus.
    assert_eq!(result.matched_rules[0].score, 25);
}

#[test]
fn amount_outside_the_band_disqualifies_the_rule() {
    let mut banded = rule("sc", "SMALL_CLAIMS", &["invoice"]);
    banded.amount_min = Some(0.0);
    banded.amount_max = Some(35_000.0);
    let rules = catalog(vec![banded]);

    let mut payload = intake("they never paid my invoice", "SK");
    payload.key_facts.money.damages_sought = Some(50_000.0);

    let result = route(&profile_from(&payload), &rules);

    assert!(result.is_fallback());
}

#[test]
fn missing_amount_disqualifies_banded_rules() {
    let mut banded = rule("sc", "SMALL_CLAIMS", &["invoice"]);
    banded.amount_min = Some(0.0);
    banded.amount_max = Some(35_000.0);
    let rules = catalog(vec![banded]);

    let result = route(&profile_from(&intake("they never paid my invoice", "SK")), &rules);

    assert!(result.is_fallback());
}

#[test]
fn score_ties_break_on_priority_then_insertion_order() {
    let mut low_priority = rule("second", "LTB", &["flooding"]);
    low_priority.priority = 50;
    let mut high_priority = rule("first", "HRTO", &["flooding"]);
    high_priority.priority = 5;
    let rules = catalog(vec![low_priority, high_priority]);

    let result = route(&profile_from(&intake("flooding", "SK")), &rules);

    assert_eq!(result.matched_rules[0].rule_id, "first");

    let mut tied_a = rule("tied-a", "LTB", &["flooding"]);
    tied_a.priority = 7;
    let mut tied_b = rule("tied-b", "HRTO", &["flooding"]);
    tied_b.priority = 7;
    let tied = catalog(vec![tied_a, tied_b]);

    let tied_result = route(&profile_from(&intake("flooding", "SK")), &tied);

    assert_eq!(tied_result.matched_rules[0].rule_id, "tied-a");
}

#[test]
fn more_matched_keywords_never_lower_confidence() {
    let rules = catalog(vec![rule("flood", "LTB", &["flooding", "leak"])]);

    let one_hit = route(&profile_from(&intake("flooding", "SK")), &rules);
    let two_hits = route(&profile_from(&intake("flooding leak", "SK")), &rules);

    assert!(two_hits.confidence > one_hit.confidence);
    assert_eq!(two_hits.confidence, 90);
}

#[test]
fn alternatives_are_distinct_tribunals_capped_at_three() {
    let rules = catalog(vec![
        rule("primary", "LTB", &["flooding", "leak"]),
        rule("alt-b1", "RTB", &["flooding"]),
        rule("alt-b2", "RTB", &["flooding"]),
        rule("alt-c", "HRTO", &["flooding"]),
        rule("alt-d", "SMALL_CLAIMS", &["flooding"]),
        rule("alt-e", "FAMILY", &["flooding"]),
    ]);

    let result = route(&profile_from(&intake("flooding leak", "SK")), &rules);

    assert_eq!(result.recommended_tribunal, "LTB");
    assert_eq!(result.alternatives.len(), 3);

    let tribunals: Vec<&str> = result
        .alternatives
        .iter()
        .map(|alternative| alternative.tribunal.as_str())
        .collect();
    assert_eq!(tribunals, vec!["RTB", "HRTO", "SMALL_CLAIMS"]);

    // Primary scores 20 (confidence 90); each alternative scores 10, so the
    // 10-point gap decays confidence by 30.
    for alternative in &result.alternatives {
        assert_eq!(alternative.confidence, 60);
    }
}

#[test]
fn audit_trail_is_capped_at_five_rules() {
    let rules = catalog(vec![
        rule("r1", "LTB", &["flooding"]),
        rule("r2", "RTB", &["flooding"]),
        rule("r3", "HRTO", &["flooding"]),
        rule("r4", "SMALL_CLAIMS", &["flooding"]),
        rule("r5", "FAMILY", &["flooding"]),
        rule("r6", "LABOUR", &["flooding"]),
        rule("r7", "SUPERIOR_COURT", &["flooding"]),
    ]);

    let result = route(&profile_from(&intake("flooding", "SK")), &rules);

    assert_eq!(result.matched_rules.len(), 5);
}

#[test]
fn categorized_rules_are_skipped_for_a_different_known_category() {
    let mut housing_only = rule("housing", "LTB", &["flooding"]);
    housing_only.category = Some(CaseCategory::Housing);
    let rules = catalog(vec![housing_only]);

    let mut payload = intake("flooding", "SK");
    payload.venue_hint = Some("labour board".to_string());

    let result = route(&profile_from(&payload), &rules);

    assert!(result.is_fallback());
}

#[test]
fn unknown_category_does_not_filter_categorized_rules() {
    let mut housing_only = rule("housing", "LTB", &["flooding"]);
    housing_only.category = Some(CaseCategory::Housing);
    let rules = catalog(vec![housing_only]);

    let result = route(&profile_from(&intake("flooding", "SK")), &rules);

    assert_eq!(result.recommended_tribunal, "LTB");
    // Exact keyword only; no category bonus without a resolved category.
    assert_eq!(result.matched_rules[0].score, 10);
}

#[test]
fn matching_province_earns_the_province_bonus() {
    let mut ontario_rule = rule("on", "LTB", &["flooding"]);
    ontario_rule.province = Some("ON".to_string());
    let rules = catalog(vec![ontario_rule]);

    let in_province = route(&profile_from(&intake("flooding", "Ontario")), &rules);
    let out_of_province = route(&profile_from(&intake("flooding", "Saskatchewan")), &rules);

    assert_eq!(in_province.matched_rules[0].score, 15);
    assert_eq!(out_of_province.matched_rules[0].score, 10);
}
