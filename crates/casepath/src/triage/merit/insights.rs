//! Derived narrative lists: ranked strengths, risks, and next best actions.

use super::{ElementCoverage, MeritBreakdown};

const MAX_LIST_ITEMS: usize = 4;
const MAX_ACTIONS: usize = 5;

const STRENGTH_THRESHOLD: f32 = 0.7;
const RISK_THRESHOLD: f32 = 0.35;

struct ComponentView {
    ratio: f32,
    strength: &'static str,
    risk: &'static str,
}

fn component_views(breakdown: &MeritBreakdown) -> Vec<ComponentView> {
    vec![
        ComponentView {
            ratio: breakdown.path_fit as f32 / 15.0,
            strength: "The recommended venue is a strong fit for the facts described",
            risk: "Confidence in the venue match is low",
        },
        ComponentView {
            ratio: breakdown.elements as f32 / 25.0,
            strength: "Most legal elements of the claim are supported by answers or evidence",
            risk: "Key legal elements of the claim are unsupported",
        },
        ComponentView {
            ratio: breakdown.evidence as f32 / 25.0,
            strength: "The evidence base is broad and lines up with the issues raised",
            risk: "The evidence base is thin - few items or little variety",
        },
        ComponentView {
            ratio: breakdown.case_law as f32 / 25.0,
            strength: "Comparable decided cases support the claim",
            risk: "No comparable case law has been supplied",
        },
    ]
}

/// Components scoring in the top tier relative to their own maximum,
/// strongest first.
pub(crate) fn derive_strengths(breakdown: &MeritBreakdown) -> Vec<String> {
    let mut views: Vec<ComponentView> = component_views(breakdown)
        .into_iter()
        .filter(|view| view.ratio >= STRENGTH_THRESHOLD)
        .collect();
    views.sort_by(|a, b| b.ratio.total_cmp(&a.ratio));
    views
        .into_iter()
        .take(MAX_LIST_ITEMS)
        .map(|view| view.strength.to_string())
        .collect()
}

/// Components scoring in the bottom tier, weakest first. Deadline pressure
/// is appended after the component risks so controllable gaps lead the list.
pub(crate) fn derive_risks(breakdown: &MeritBreakdown) -> Vec<String> {
    let mut views: Vec<ComponentView> = component_views(breakdown)
        .into_iter()
        .filter(|view| view.ratio <= RISK_THRESHOLD)
        .collect();
    views.sort_by(|a, b| a.ratio.total_cmp(&b.ratio));

    let mut risks: Vec<String> = views
        .into_iter()
        .map(|view| view.risk.to_string())
        .collect();

    if breakdown.penalty < 0 {
        risks.push("Filing deadlines are reducing the overall strength of the case".to_string());
    }

    risks.truncate(MAX_LIST_ITEMS);
    risks
}

/// Ordered deliberately: unmet legal elements first, then thin evidence
/// categories, then time pressure - fix the controllable gaps before
/// worrying about the clock.
pub(crate) fn next_best_actions(
    coverage: &[ElementCoverage],
    uncovered_tags: &[&str],
    deadline_warnings: &[String],
) -> Vec<String> {
    let mut actions = Vec::new();

    for element in coverage.iter().filter(|element| element.score < 2) {
        actions.push(format!(
            "Strengthen the '{}' element with a fuller answer or supporting proof",
            element.element_name
        ));
    }

    for tag in uncovered_tags {
        actions.push(format!("Add evidence documenting {tag}"));
    }

    actions.extend(deadline_warnings.iter().cloned());
    actions.truncate(MAX_ACTIONS);
    actions
}
