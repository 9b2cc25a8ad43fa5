use std::collections::BTreeMap;
use std::sync::Arc;

use casepath::error::AppError;
use casepath::triage::{
    AnswerValue, Deadline, DecisionResult, KeyFacts, Precedent, RelevanceTier, RuleCatalog,
    TriageIntake, TriageService,
};
use chrono::{Local, NaiveDate};
use clap::Args;

#[derive(Args, Debug)]
pub(crate) struct DecideArgs {
    /// Free-text description of the situation
    #[arg(long)]
    pub(crate) story: String,
    /// Province code or full name (e.g. ON, Ontario)
    #[arg(long)]
    pub(crate) province: String,
    /// Optional venue hint (e.g. "landlord and tenant board")
    #[arg(long)]
    pub(crate) venue_hint: Option<String>,
    /// Evidence description; repeat the flag for each item
    #[arg(long = "evidence")]
    pub(crate) evidence: Vec<String>,
    /// Damages sought in dollars, if the matter is monetary
    #[arg(long)]
    pub(crate) amount: Option<f64>,
    /// Evaluation date for deadlines (YYYY-MM-DD, defaults to today)
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) today: Option<NaiveDate>,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Override the evaluation date (YYYY-MM-DD, defaults to today)
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) today: Option<NaiveDate>,
    /// Print the raw decision payload instead of the formatted summary
    #[arg(long)]
    pub(crate) json_only: bool,
}

pub(crate) fn run_decide(args: DecideArgs) -> Result<(), AppError> {
    let DecideArgs {
        story,
        province,
        venue_hint,
        evidence,
        amount,
        today,
    } = args;

    let mut key_facts = KeyFacts::default();
    key_facts.money.damages_sought = amount;

    let intake = TriageIntake {
        story_text: story,
        province,
        venue_hint,
        issue_tags: Vec::new(),
        key_facts,
        evidence_descriptions: evidence,
        user_answers: BTreeMap::new(),
    };

    let today = today.unwrap_or_else(|| Local::now().date_naive());
    let service = TriageService::new(Arc::new(RuleCatalog::builtin()));
    let decision = service.decide(&intake, &[], &[], today)?;

    render_decision(&decision);
    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs { today, json_only } = args;
    let today = today.unwrap_or_else(|| Local::now().date_naive());

    let mut user_answers = BTreeMap::new();
    user_answers.insert("asked_landlord_to_fix".to_string(), AnswerValue::Bool(true));
    user_answers.insert("notice_given".to_string(), AnswerValue::Bool(true));
    user_answers.insert(
        "health_impact".to_string(),
        AnswerValue::Text("My daughter's asthma has gotten worse".to_string()),
    );

    let intake = TriageIntake {
        story_text: "There is mold spreading through the bathroom and my landlord has \
                     refused to repair it for three months"
            .to_string(),
        province: "Ontario".to_string(),
        venue_hint: None,
        issue_tags: Vec::new(),
        key_facts: KeyFacts::default(),
        evidence_descriptions: vec![
            "Photos of the mold on the bathroom ceiling".to_string(),
            "Letter to the landlord asking for repairs".to_string(),
            "Email thread with the property manager".to_string(),
        ],
        user_answers,
    };

    let precedents = vec![Precedent {
        citation: "TST-12345-21 (ONLTB)".to_string(),
        relevance: RelevanceTier::High,
    }];
    let deadlines = vec![Deadline {
        label: "T6 filing deadline".to_string(),
        due_date: today + chrono::Duration::days(21),
    }];

    println!("Case triage demo (evaluated {today})");
    println!("Scenario: tenant with an unresolved mold complaint in Ontario\n");

    let service = TriageService::new(Arc::new(RuleCatalog::builtin()));
    let decision = service.decide(&intake, &precedents, &deadlines, today)?;

    if !json_only {
        render_decision(&decision);
        println!();
    }

    match serde_json::to_string_pretty(&decision) {
        Ok(json) => println!("Decision payload:\n{json}"),
        Err(err) => println!("Decision payload unavailable: {err}"),
    }

    Ok(())
}

pub(crate) fn render_decision(decision: &DecisionResult) {
    if let Some(routing) = &decision.routing {
        println!(
            "Recommended venue: {} ({}) at {}% confidence",
            routing.recommended_tribunal, routing.recommended_pathway, routing.confidence
        );
        if !routing.recommended_forms.is_empty() {
            println!("Forms: {}", routing.recommended_forms.join(", "));
        }
        for line in &routing.reasoning {
            println!("- {line}");
        }

        if !routing.alternatives.is_empty() {
            println!("\nAlternative venues");
            for alternative in &routing.alternatives {
                println!(
                    "- {} ({}) at {}% confidence",
                    alternative.tribunal, alternative.pathway, alternative.confidence
                );
            }
        }
    }

    let Some(merit) = &decision.merit else {
        return;
    };

    println!(
        "\nMerit score: {}/100 ({})",
        merit.score,
        merit.band.label()
    );
    println!(
        "Breakdown: path fit {}/15 | elements {}/25 | evidence {}/25 | case law {}/25 | penalty {}",
        merit.breakdown.path_fit,
        merit.breakdown.elements,
        merit.breakdown.evidence,
        merit.breakdown.case_law,
        merit.breakdown.penalty
    );

    if !merit.top_strengths.is_empty() {
        println!("\nStrengths");
        for strength in &merit.top_strengths {
            println!("- {strength}");
        }
    }

    if !merit.top_risks.is_empty() {
        println!("\nRisks");
        for risk in &merit.top_risks {
            println!("- {risk}");
        }
    }

    if !merit.next_best_actions.is_empty() {
        println!("\nNext best actions");
        for action in &merit.next_best_actions {
            println!("- {action}");
        }
    }

    if !merit.deadline_warnings.is_empty() {
        println!("\nDeadline warnings");
        for warning in &merit.deadline_warnings {
            println!("- {warning}");
        }
    }
}
