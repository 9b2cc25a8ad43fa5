mod phrases;
mod provinces;

pub use phrases::PhraseTables;

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use super::domain::{AnswerValue, CaseProfile, EvidenceItem, KeyFacts, VenueHint};

/// Raw triage payload as the intake flow hands it over: nothing normalized,
/// evidence still free-text descriptions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TriageIntake {
    pub story_text: String,
    pub province: String,
    #[serde(default)]
    pub venue_hint: Option<String>,
    #[serde(default)]
    pub issue_tags: Vec<String>,
    #[serde(default)]
    pub key_facts: KeyFacts,
    #[serde(default)]
    pub evidence_descriptions: Vec<String>,
    #[serde(default)]
    pub user_answers: BTreeMap<String, AnswerValue>,
}

/// Malformed or insufficient raw input. Surfaced to the caller immediately;
/// retrying with the same input yields the same failure.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("story text must not be empty")]
    EmptyStory,
    #[error("province could not be resolved from empty input")]
    UnresolvedJurisdiction,
}

// Ordered phrase sets for venue hint resolution; the first set with a hit
// decides the hint.
const VENUE_PHRASES: &[(&[&str], VenueHint)] = &[
    (&["ltb", "landlord", "tenant"], VenueHint::Ltb),
    (&["hrto", "human rights"], VenueHint::Hrto),
    (&["family"], VenueHint::Family),
    (&["small", "claims"], VenueHint::SmallClaims),
    (&["labour", "employment"], VenueHint::Labour),
];

/// Pure normalizer turning a [`TriageIntake`] into a [`CaseProfile`].
#[derive(Debug, Clone, Default)]
pub struct FactExtractor {
    tables: PhraseTables,
}

impl FactExtractor {
    pub fn new(tables: PhraseTables) -> Self {
        Self { tables }
    }

    pub fn tables(&self) -> &PhraseTables {
        &self.tables
    }

    /// Normalize an intake payload. Deterministic for a fixed phrase-table
    /// version; no I/O, no clock.
    pub fn extract(&self, intake: &TriageIntake) -> Result<CaseProfile, ValidationError> {
        let story_text = intake.story_text.trim();
        if story_text.is_empty() {
            return Err(ValidationError::EmptyStory);
        }

        let jurisdiction = provinces::normalize_jurisdiction(&intake.province)?;
        let venue_hint = resolve_venue_hint(intake.venue_hint.as_deref());

        let mut issue_tags: BTreeSet<String> = intake
            .issue_tags
            .iter()
            .map(|tag| tag.trim().to_lowercase())
            .filter(|tag| !tag.is_empty())
            .collect();
        issue_tags.extend(self.tables.infer_issue_tags(story_text));

        let evidence: Vec<EvidenceItem> = intake
            .evidence_descriptions
            .iter()
            .map(|description| EvidenceItem {
                kind: self.tables.classify_kind(description),
                tags: self.tables.infer_evidence_tags(description),
                description: description.clone(),
            })
            .collect();

        Ok(CaseProfile {
            jurisdiction,
            venue_hint,
            story_text: story_text.to_string(),
            issue_tags,
            key_facts: intake.key_facts.clone(),
            evidence,
            user_answers: intake.user_answers.clone(),
        })
    }
}

fn resolve_venue_hint(raw: Option<&str>) -> VenueHint {
    let candidate = match raw {
        Some(value) if !value.trim().is_empty() => value.to_lowercase(),
        _ => return VenueHint::Unknown,
    };

    VENUE_PHRASES
        .iter()
        .find(|(phrases, _)| phrases.iter().any(|phrase| candidate.contains(phrase)))
        .map(|(_, hint)| *hint)
        .unwrap_or(VenueHint::Unknown)
}
