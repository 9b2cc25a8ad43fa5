use std::collections::{BTreeMap, BTreeSet};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Venue hint supplied by the intake UI or the user. Advisory only: the
/// router re-derives the venue from the rule catalog.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VenueHint {
    Ltb,
    Hrto,
    Family,
    SmallClaims,
    Labour,
    #[default]
    Unknown,
}

/// Closed set of document/media kinds the extractor can classify.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EvidenceKind {
    Photo,
    Video,
    Email,
    Text,
    Notice,
    Letter,
    Receipt,
    Medical,
    Inspection,
    Other,
}

/// One piece of evidence as described during intake. Order of items follows
/// the order they were described, not their significance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvidenceItem {
    pub kind: EvidenceKind,
    pub tags: BTreeSet<String>,
    pub description: String,
}

/// Incident dates captured during intake.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct IncidentDates {
    #[serde(default)]
    pub first_incident: Option<NaiveDate>,
    #[serde(default)]
    pub last_incident: Option<NaiveDate>,
}

/// Monetary facts. `damages_sought` drives amount-band rule eligibility.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct MoneyFacts {
    #[serde(default)]
    pub damages_sought: Option<f64>,
}

/// Typed sub-record of structured facts attached to a case.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct KeyFacts {
    #[serde(default)]
    pub dates: IncidentDates,
    /// Party names keyed by role (e.g. "landlord", "employer"). Carried
    /// through for form pre-fill by API consumers; scoring never reads it.
    #[serde(default)]
    pub parties: BTreeMap<String, String>,
    #[serde(default)]
    pub money: MoneyFacts,
}

/// Answer to an intake follow-up question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnswerValue {
    Bool(bool),
    Number(f64),
    Text(String),
}

impl AnswerValue {
    /// An explicit "yes" to a follow-up question.
    pub fn is_affirmative(&self) -> bool {
        matches!(self, AnswerValue::Bool(true))
    }

    /// Any answer carrying information beyond a bare negative.
    pub fn is_substantive(&self) -> bool {
        match self {
            AnswerValue::Bool(value) => *value,
            AnswerValue::Number(_) => true,
            AnswerValue::Text(value) => !value.trim().is_empty(),
        }
    }
}

/// Normalized, immutable description of one triage run.
///
/// `issue_tags` and evidence tags are always lower-case and deduplicated;
/// rule keywords match against this controlled vocabulary verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaseProfile {
    pub jurisdiction: String,
    pub venue_hint: VenueHint,
    pub story_text: String,
    pub issue_tags: BTreeSet<String>,
    pub key_facts: KeyFacts,
    pub evidence: Vec<EvidenceItem>,
    pub user_answers: BTreeMap<String, AnswerValue>,
}

/// Broad legal category of a case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CaseCategory {
    Housing,
    HumanRights,
    SmallClaims,
    Employment,
    Family,
    Unknown,
}

const HUMAN_RIGHTS_TAGS: &[&str] = &["discrimination", "disability"];
const FAMILY_TAGS: &[&str] = &["custody", "child_support", "divorce", "separation"];
const EMPLOYMENT_TAGS: &[&str] = &["wrongful_dismissal", "wages"];
const HOUSING_TAGS: &[&str] = &[
    "housing",
    "maintenance",
    "pests",
    "mold",
    "vital_services",
    "eviction",
    "harassment",
];
const SMALL_CLAIMS_TAGS: &[&str] = &["money_owed"];

impl CaseCategory {
    /// Canonical category resolution used by both the router's eligibility
    /// filter and its category-match bonus.
    ///
    /// The venue hint wins when present; otherwise the issue tags decide, with
    /// the more specific categories (human rights, family, employment) checked
    /// before the broad housing bucket so a discrimination complaint inside a
    /// tenancy story is not swallowed by the housing tags.
    pub fn resolve(profile: &CaseProfile) -> Self {
        match profile.venue_hint {
            VenueHint::Ltb => return Self::Housing,
            VenueHint::Hrto => return Self::HumanRights,
            VenueHint::Family => return Self::Family,
            VenueHint::SmallClaims => return Self::SmallClaims,
            VenueHint::Labour => return Self::Employment,
            VenueHint::Unknown => {}
        }

        let has_any = |tags: &[&str]| {
            tags.iter()
                .any(|tag| profile.issue_tags.contains(*tag))
        };

        if has_any(HUMAN_RIGHTS_TAGS) {
            Self::HumanRights
        } else if has_any(FAMILY_TAGS) {
            Self::Family
        } else if has_any(EMPLOYMENT_TAGS) {
            Self::Employment
        } else if has_any(HOUSING_TAGS) {
            Self::Housing
        } else if has_any(SMALL_CLAIMS_TAGS) {
            Self::SmallClaims
        } else {
            Self::Unknown
        }
    }
}
