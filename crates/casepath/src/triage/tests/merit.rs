use super::common::*;

use std::collections::BTreeMap;

use crate::triage::domain::AnswerValue;
use crate::triage::merit::{
    Deadline, MeritBand, MeritInputs, MeritScorer, PathwayRequiredError, Precedent, RelevanceTier,
};

fn precedent(citation: &str, relevance: RelevanceTier) -> Precedent {
    Precedent {
        citation: citation.to_string(),
        relevance,
    }
}

fn deadline(label: &str, year: i32, month: u32, dayofmonth: u32) -> Deadline {
    Deadline {
        label: label.to_string(),
        due_date: day(year, month, dayofmonth),
    }
}

#[test]
fn scoring_requires_a_pathway() {
    let profile = profile_from(&mold_intake());
    let scorer = MeritScorer::default();

    let result = scorer.score(&MeritInputs {
        profile: &profile,
        pathway: None,
        precedents: &[],
        deadlines: &[],
        today: day(2025, 6, 15),
    });

    assert_eq!(result, Err(PathwayRequiredError));
}

#[test]
fn score_stays_within_bounds_and_band_matches() {
    let profile = profile_from(&mold_intake());
    let routing = routing_with_confidence(95);
    let scorer = MeritScorer::default();

    let result = scorer
        .score(&MeritInputs {
            profile: &profile,
            pathway: Some(&routing),
            precedents: &[
                precedent("2021 ONLTB 1234", RelevanceTier::High),
                precedent("2020 ONLTB 567", RelevanceTier::Medium),
            ],
            deadlines: &[],
            today: day(2025, 6, 15),
        })
        .expect("scores");

    assert!(result.score <= 100);
    assert_eq!(result.band, MeritBand::from_score(result.score));
}

#[test]
fn heavy_penalties_never_push_the_score_below_zero() {
    let profile = profile_from(&intake("my landlord ignores me", "ON"));
    let routing = routing_with_confidence(30);
    let scorer = MeritScorer::default();

    let overdue = vec![
        deadline("T6 filing deadline", 2025, 1, 1),
        deadline("Limitation period", 2025, 2, 1),
        deadline("Notice deadline", 2025, 3, 1),
    ];

    let result = scorer
        .score(&MeritInputs {
            profile: &profile,
            pathway: Some(&routing),
            precedents: &[],
            deadlines: &overdue,
            today: day(2025, 6, 15),
        })
        .expect("scores");

    assert_eq!(result.breakdown.penalty, -45);
    assert_eq!(result.band, MeritBand::Weak);
}

#[test]
fn path_fit_rescales_router_confidence() {
    let profile = profile_from(&mold_intake());
    let scorer = MeritScorer::default();

    for (confidence, expected) in [(95, 14), (70, 11), (20, 3)] {
        let routing = routing_with_confidence(confidence);
        let result = scorer
            .score(&MeritInputs {
                profile: &profile,
                pathway: Some(&routing),
                precedents: &[],
                deadlines: &[],
                today: day(2025, 6, 15),
            })
            .expect("scores");

        assert_eq!(result.breakdown.path_fit, expected, "confidence {confidence}");
    }
}

#[test]
fn housing_elements_reflect_answers_and_evidence() {
    let mut payload = intake(
        "There is mold everywhere and my landlord refuses to repair it",
        "Ontario",
    );
    payload.evidence_descriptions = vec!["Photos of mold".to_string()];
    let mut answers = BTreeMap::new();
    answers.insert("asked_landlord_to_fix".to_string(), AnswerValue::Bool(true));
    answers.insert(
        "notice_given".to_string(),
        AnswerValue::Text("I emailed them twice".to_string()),
    );
    payload.user_answers = answers;

    let profile = profile_from(&payload);
    let routing = routing_with_confidence(95);
    let result = MeritScorer::default()
        .score(&MeritInputs {
            profile: &profile,
            pathway: Some(&routing),
            precedents: &[],
            deadlines: &[],
            today: day(2025, 6, 15),
        })
        .expect("scores");

    let coverage = &result.element_coverage;
    assert_eq!(coverage.len(), 4);

    // Affirmative answer plus mold photos corroborating the repair duty.
    assert_eq!(coverage[0].element_key, "duty_to_repair");
    assert_eq!(coverage[0].score, 3);
    assert!(coverage[0].evidence_matched);

    // Substantive text answer, no notice-tagged evidence.
    assert_eq!(coverage[1].element_key, "notice_to_landlord");
    assert_eq!(coverage[1].score, 1);
    assert!(!coverage[1].evidence_matched);

    // No answer, but the mold photos speak to household impact.
    assert_eq!(coverage[2].element_key, "impact_on_household");
    assert_eq!(coverage[2].score, 1);

    // Nothing supports the timeline element.
    assert_eq!(coverage[3].element_key, "documented_timeline");
    assert_eq!(coverage[3].score, 0);

    // Raw 5 of 12 rescaled onto the 0-25 band.
    assert_eq!(result.breakdown.elements, 10);
}

#[test]
fn adding_evidence_never_lowers_the_evidence_component() {
    let scorer = MeritScorer::default();
    let routing = routing_with_confidence(80);
    let today = day(2025, 6, 15);

    let mut previous = 0;
    for count in 0..8 {
        let mut payload = intake("mold complaint", "ON");
        payload.evidence_descriptions = (0..count)
            .map(|index| format!("Photo {index} of mold damage"))
            .collect();
        let profile = profile_from(&payload);

        let result = scorer
            .score(&MeritInputs {
                profile: &profile,
                pathway: Some(&routing),
                precedents: &[],
                deadlines: &[],
                today,
            })
            .expect("scores");

        assert!(
            result.breakdown.evidence >= previous,
            "evidence dropped at {count} items"
        );
        assert!(result.breakdown.evidence <= 25);
        previous = result.breakdown.evidence;
    }
}

#[test]
fn no_evidence_scores_zero_for_the_evidence_component() {
    let profile = profile_from(&intake("my landlord ignores me", "ON"));
    let routing = routing_with_confidence(80);

    let result = MeritScorer::default()
        .score(&MeritInputs {
            profile: &profile,
            pathway: Some(&routing),
            precedents: &[],
            deadlines: &[],
            today: day(2025, 6, 15),
        })
        .expect("scores");

    assert_eq!(result.breakdown.evidence, 0);
}

#[test]
fn deadline_windows_grade_the_penalty() {
    let profile = profile_from(&mold_intake());
    let routing = routing_with_confidence(80);
    let scorer = MeritScorer::default();
    let today = day(2025, 6, 15);

    let cases = [
        (deadline("T6 filing deadline", 2025, 6, 1), -15, "passed 14 days ago"),
        (deadline("T6 filing deadline", 2025, 6, 18), -7, "Only 3 days"),
        (deadline("T6 filing deadline", 2025, 7, 1), -3, "in 16 days"),
    ];

    for (case, expected_penalty, fragment) in cases {
        let result = scorer
            .score(&MeritInputs {
                profile: &profile,
                pathway: Some(&routing),
                precedents: &[],
                deadlines: &[case],
                today,
            })
            .expect("scores");

        assert_eq!(result.breakdown.penalty, expected_penalty);
        assert_eq!(result.deadline_warnings.len(), 1);
        assert!(
            result.deadline_warnings[0].contains(fragment),
            "warning {:?} missing {fragment:?}",
            result.deadline_warnings[0]
        );
    }
}

#[test]
fn distant_deadlines_carry_no_penalty() {
    let profile = profile_from(&mold_intake());
    let routing = routing_with_confidence(80);

    let result = MeritScorer::default()
        .score(&MeritInputs {
            profile: &profile,
            pathway: Some(&routing),
            precedents: &[],
            deadlines: &[deadline("T6 filing deadline", 2025, 8, 15)],
            today: day(2025, 6, 15),
        })
        .expect("scores");

    assert_eq!(result.breakdown.penalty, 0);
    assert!(result.deadline_warnings.is_empty());
}

#[test]
fn stale_incidents_trigger_limitation_penalties() {
    let routing = routing_with_confidence(80);
    let scorer = MeritScorer::default();
    let today = day(2025, 6, 15);

    // Three years back is past the two-year bar; nineteen months back only
    // lands in the check-your-limitation-period window.
    let cases = [
        (day(2022, 6, 1), -15, "may exceed limitation period"),
        (day(2023, 11, 1), -7, "check limitation period"),
    ];

    for (incident, expected_penalty, fragment) in cases {
        let mut payload = mold_intake();
        payload.key_facts.dates.first_incident = Some(incident);
        let profile = profile_from(&payload);

        let result = scorer
            .score(&MeritInputs {
                profile: &profile,
                pathway: Some(&routing),
                precedents: &[],
                deadlines: &[],
                today,
            })
            .expect("scores");

        assert_eq!(result.breakdown.penalty, expected_penalty, "incident {incident}");
        assert_eq!(result.deadline_warnings.len(), 1);
        assert!(
            result.deadline_warnings[0].contains(fragment),
            "warning {:?} missing {fragment:?}",
            result.deadline_warnings[0]
        );
    }
}

#[test]
fn limitation_risk_widens_the_penalty_floor_without_stacking() {
    let mut payload = mold_intake();
    payload.key_facts.dates.first_incident = Some(day(2022, 6, 1));
    let profile = profile_from(&payload);
    let routing = routing_with_confidence(80);

    let result = MeritScorer::default()
        .score(&MeritInputs {
            profile: &profile,
            pathway: Some(&routing),
            precedents: &[],
            deadlines: &[deadline("T6 filing deadline", 2025, 6, 1)],
            today: day(2025, 6, 15),
        })
        .expect("scores");

    // Overdue deadline alone is already -15; the limitation flag keeps the
    // floor there instead of doubling it, but both warnings surface.
    assert_eq!(result.breakdown.penalty, -15);
    assert_eq!(result.deadline_warnings.len(), 2);
}

#[test]
fn recent_incidents_carry_no_limitation_penalty() {
    let mut payload = mold_intake();
    payload.key_facts.dates.first_incident = Some(day(2025, 1, 1));
    let profile = profile_from(&payload);
    let routing = routing_with_confidence(80);

    let result = MeritScorer::default()
        .score(&MeritInputs {
            profile: &profile,
            pathway: Some(&routing),
            precedents: &[],
            deadlines: &[],
            today: day(2025, 6, 15),
        })
        .expect("scores");

    assert_eq!(result.breakdown.penalty, 0);
    assert!(result.deadline_warnings.is_empty());
}

#[test]
fn last_incident_backstops_a_missing_first_incident() {
    let mut payload = mold_intake();
    payload.key_facts.dates.last_incident = Some(day(2022, 1, 1));
    let profile = profile_from(&payload);
    let routing = routing_with_confidence(80);

    let result = MeritScorer::default()
        .score(&MeritInputs {
            profile: &profile,
            pathway: Some(&routing),
            precedents: &[],
            deadlines: &[],
            today: day(2025, 6, 15),
        })
        .expect("scores");

    assert_eq!(result.breakdown.penalty, -15);
}

#[test]
fn case_law_points_sum_by_tier_and_cap_at_25() {
    let profile = profile_from(&mold_intake());
    let routing = routing_with_confidence(80);
    let scorer = MeritScorer::default();
    let today = day(2025, 6, 15);

    let mixed = vec![
        precedent("A", RelevanceTier::High),
        precedent("B", RelevanceTier::High),
        precedent("C", RelevanceTier::Medium),
        precedent("D", RelevanceTier::Low),
    ];
    let result = scorer
        .score(&MeritInputs {
            profile: &profile,
            pathway: Some(&routing),
            precedents: &mixed,
            deadlines: &[],
            today,
        })
        .expect("scores");
    assert_eq!(result.breakdown.case_law, 18);

    let many: Vec<Precedent> = (0..6)
        .map(|index| precedent(&format!("P{index}"), RelevanceTier::High))
        .collect();
    let capped = scorer
        .score(&MeritInputs {
            profile: &profile,
            pathway: Some(&routing),
            precedents: &many,
            deadlines: &[],
            today,
        })
        .expect("scores");
    assert_eq!(capped.breakdown.case_law, 25);
}

#[test]
fn sparse_input_degrades_gracefully() {
    let profile = profile_from(&intake("my landlord ignores me", "ON"));
    let routing = routing_with_confidence(30);

    let result = MeritScorer::default()
        .score(&MeritInputs {
            profile: &profile,
            pathway: Some(&routing),
            precedents: &[],
            deadlines: &[],
            today: day(2025, 6, 15),
        })
        .expect("scores");

    assert_eq!(result.band, MeritBand::Weak);
    assert!(!result.top_risks.is_empty());
    assert!(!result.next_best_actions.is_empty());
    assert!(result.next_best_actions.len() <= 5);
}

#[test]
fn deadline_pressure_appears_among_the_risks() {
    let profile = profile_from(&mold_intake());
    let routing = routing_with_confidence(80);

    let result = MeritScorer::default()
        .score(&MeritInputs {
            profile: &profile,
            pathway: Some(&routing),
            precedents: &[],
            deadlines: &[deadline("T6 filing deadline", 2025, 6, 1)],
            today: day(2025, 6, 15),
        })
        .expect("scores");

    assert!(result
        .top_risks
        .iter()
        .any(|risk| risk.contains("deadline")));
}

#[test]
fn next_best_actions_lead_with_unmet_elements() {
    let profile = profile_from(&intake("my landlord ignores me", "ON"));
    let routing = routing_with_confidence(80);

    let result = MeritScorer::default()
        .score(&MeritInputs {
            profile: &profile,
            pathway: Some(&routing),
            precedents: &[],
            deadlines: &[],
            today: day(2025, 6, 15),
        })
        .expect("scores");

    assert!(result.next_best_actions[0].starts_with("Strengthen the"));
}

#[test]
fn scoring_is_deterministic() {
    let profile = profile_from(&mold_intake());
    let routing = routing_with_confidence(80);
    let scorer = MeritScorer::default();
    let precedents = vec![precedent("2021 ONLTB 1234", RelevanceTier::High)];
    let deadlines = vec![deadline("T6 filing deadline", 2025, 7, 1)];
    let today = day(2025, 6, 15);

    let inputs = MeritInputs {
        profile: &profile,
        pathway: Some(&routing),
        precedents: &precedents,
        deadlines: &deadlines,
        today,
    };

    let first = scorer.score(&inputs).expect("scores");
    let second = scorer.score(&inputs).expect("scores");

    assert_eq!(first, second);
}
