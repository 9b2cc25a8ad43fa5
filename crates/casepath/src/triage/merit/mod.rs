mod deadlines;
mod elements;
mod evidence;
mod insights;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::domain::CaseProfile;
use super::router::RoutingResult;

/// Relevance tier assigned by the external legal-search collaborator. The
/// scorer only aggregates; it never fetches precedents itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RelevanceTier {
    High,
    Medium,
    Low,
}

impl RelevanceTier {
    fn points(self) -> u32 {
        match self {
            RelevanceTier::High => 6,
            RelevanceTier::Medium => 4,
            RelevanceTier::Low => 2,
        }
    }
}

/// A decided case supplied by the legal-search collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Precedent {
    pub citation: String,
    pub relevance: RelevanceTier,
}

/// A known filing or limitation deadline from the deadline-tracking
/// collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deadline {
    pub label: String,
    pub due_date: NaiveDate,
}

/// Tunable windows and magnitudes for the deadline penalty plus the
/// evidence sufficiency threshold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeritConfig {
    pub urgent_window_days: i64,
    pub warning_window_days: i64,
    pub overdue_penalty: u32,
    pub urgent_penalty: u32,
    pub warning_penalty: u32,
    /// Evidence items beyond this count contribute at a reduced rate.
    pub sufficient_evidence: usize,
    /// Incidents older than this are flagged as likely limitation-barred.
    pub limitation_bar_days: i64,
    /// Incidents older than this draw a check-the-limitation-period warning.
    pub limitation_risk_days: i64,
}

impl Default for MeritConfig {
    fn default() -> Self {
        Self {
            urgent_window_days: 7,
            warning_window_days: 30,
            overdue_penalty: 15,
            urgent_penalty: 7,
            warning_penalty: 3,
            sufficient_evidence: 5,
            limitation_bar_days: 730,
            limitation_risk_days: 548,
        }
    }
}

/// Component-wise contribution to the merit score. Each component stays
/// inside its documented band; `penalty` is zero or negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeritBreakdown {
    pub path_fit: u8,
    pub elements: u8,
    pub evidence: u8,
    pub case_law: u8,
    pub penalty: i32,
}

/// Qualitative band derived from the score via fixed thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MeritBand {
    #[serde(rename = "Very Strong")]
    VeryStrong,
    Strong,
    Moderate,
    Fair,
    Weak,
}

impl MeritBand {
    pub fn from_score(score: u8) -> Self {
        match score {
            80..=u8::MAX => Self::VeryStrong,
            65..=79 => Self::Strong,
            50..=64 => Self::Moderate,
            35..=49 => Self::Fair,
            _ => Self::Weak,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::VeryStrong => "Very Strong",
            Self::Strong => "Strong",
            Self::Moderate => "Moderate",
            Self::Fair => "Fair",
            Self::Weak => "Weak",
        }
    }
}

/// Per-element coverage record for the element checklist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElementCoverage {
    pub element_key: String,
    pub element_name: String,
    /// 0 missing, 1 vague, 2 specific, 3 corroborated.
    pub score: u8,
    pub evidence_matched: bool,
}

/// The explainable 0-100 strength assessment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeritScoreResult {
    pub score: u8,
    pub band: MeritBand,
    pub breakdown: MeritBreakdown,
    pub top_strengths: Vec<String>,
    pub top_risks: Vec<String>,
    pub next_best_actions: Vec<String>,
    pub element_coverage: Vec<ElementCoverage>,
    pub deadline_warnings: Vec<String>,
}

/// Merit scoring cannot proceed without a resolved pathway: `path_fit` and
/// the venue checklist both derive from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("merit scoring requires a resolved pathway")]
pub struct PathwayRequiredError;

/// Everything the scorer consumes for one run. `today` is an explicit input
/// so the deadline penalty is deterministic under test.
#[derive(Debug, Clone, Copy)]
pub struct MeritInputs<'a> {
    pub profile: &'a CaseProfile,
    pub pathway: Option<&'a RoutingResult>,
    pub precedents: &'a [Precedent],
    pub deadlines: &'a [Deadline],
    pub today: NaiveDate,
}

/// Stateless scorer applying the merit rubric to a profile and its matched
/// pathway.
#[derive(Debug, Clone, Default)]
pub struct MeritScorer {
    config: MeritConfig,
}

impl MeritScorer {
    pub fn new(config: MeritConfig) -> Self {
        Self { config }
    }

    pub fn score(&self, inputs: &MeritInputs<'_>) -> Result<MeritScoreResult, PathwayRequiredError> {
        let pathway = inputs.pathway.ok_or(PathwayRequiredError)?;
        let tribunal = pathway.recommended_tribunal.as_str();

        let path_fit = path_fit_score(pathway.confidence);
        let (element_coverage, element_points) = elements::score_elements(inputs.profile, tribunal);
        let evidence_points =
            evidence::evidence_score(&inputs.profile.evidence, tribunal, &self.config);
        let case_law_points = case_law_score(inputs.precedents);
        let assessment = deadlines::assess(
            inputs.deadlines,
            &inputs.profile.key_facts.dates,
            inputs.today,
            &self.config,
        );

        let breakdown = MeritBreakdown {
            path_fit,
            elements: element_points,
            evidence: evidence_points,
            case_law: case_law_points,
            penalty: assessment.penalty,
        };

        let total = (i32::from(path_fit)
            + i32::from(element_points)
            + i32::from(evidence_points)
            + i32::from(case_law_points)
            + assessment.penalty)
            .clamp(0, 100) as u8;
        let band = MeritBand::from_score(total);

        let uncovered = evidence::uncovered_tags(&inputs.profile.evidence, tribunal);
        let top_strengths = insights::derive_strengths(&breakdown);
        let top_risks = insights::derive_risks(&breakdown);
        let next_best_actions =
            insights::next_best_actions(&element_coverage, &uncovered, &assessment.warnings);

        debug!(
            score = total,
            band = band.label(),
            %tribunal,
            "merit score computed"
        );

        Ok(MeritScoreResult {
            score: total,
            band,
            breakdown,
            top_strengths,
            top_risks,
            next_best_actions,
            element_coverage,
            deadline_warnings: assessment.warnings,
        })
    }
}

/// Linear rescale of the router confidence (0-100) onto the 0-15 band.
fn path_fit_score(confidence: u8) -> u8 {
    ((u32::from(confidence) * 15 + 50) / 100).min(15) as u8
}

fn case_law_score(precedents: &[Precedent]) -> u8 {
    precedents
        .iter()
        .map(|precedent| precedent.relevance.points())
        .sum::<u32>()
        .min(25) as u8
}
