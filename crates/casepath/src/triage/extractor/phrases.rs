use std::collections::BTreeSet;

use crate::triage::domain::EvidenceKind;

/// Versioned, immutable phrase tables backing tag inference and evidence
/// classification. The tables are plain data so a jurisdiction can swap in
/// its own vocabulary without touching the extractor.
#[derive(Debug, Clone)]
pub struct PhraseTables {
    version: String,
    issue_phrases: Vec<(String, String)>,
    kind_phrases: Vec<(String, EvidenceKind)>,
    evidence_tag_phrases: Vec<(String, String)>,
}

impl PhraseTables {
    pub fn new(
        version: impl Into<String>,
        issue_phrases: Vec<(String, String)>,
        kind_phrases: Vec<(String, EvidenceKind)>,
        evidence_tag_phrases: Vec<(String, String)>,
    ) -> Self {
        Self {
            version: version.into(),
            issue_phrases,
            kind_phrases,
            evidence_tag_phrases,
        }
    }

    /// The reference vocabulary calibrated against the Ontario-first rule
    /// catalog.
    pub fn reference() -> Self {
        let issue_phrases = [
            ("repair", "maintenance"),
            ("fix", "maintenance"),
            ("broken", "maintenance"),
            ("leak", "maintenance"),
            ("pest", "pests"),
            ("cockroach", "pests"),
            ("bedbug", "pests"),
            ("mice", "pests"),
            ("mold", "mold"),
            ("mould", "mold"),
            ("heat", "vital_services"),
            ("hot water", "vital_services"),
            ("harass", "harassment"),
            ("threat", "harassment"),
            ("intimidat", "harassment"),
            ("evict", "eviction"),
            ("n4", "eviction"),
            ("n12", "eviction"),
            ("landlord", "housing"),
            ("tenant", "housing"),
            ("rent", "housing"),
            ("discriminat", "discrimination"),
            ("human rights", "discrimination"),
            ("disability", "disability"),
            ("accommodation", "disability"),
            ("fired", "wrongful_dismissal"),
            ("terminated", "wrongful_dismissal"),
            ("wrongful", "wrongful_dismissal"),
            ("wages", "wages"),
            ("unpaid", "wages"),
            ("overtime", "wages"),
            ("owe", "money_owed"),
            ("debt", "money_owed"),
            ("refund", "money_owed"),
            ("custody", "custody"),
            ("child support", "child_support"),
            ("divorce", "divorce"),
            ("separat", "separation"),
        ];

        // First matching phrase decides the kind; order is significant.
        let kind_phrases = [
            ("photo", EvidenceKind::Photo),
            ("image", EvidenceKind::Photo),
            (".jpg", EvidenceKind::Photo),
            (".png", EvidenceKind::Photo),
            ("video", EvidenceKind::Video),
            (".mp4", EvidenceKind::Video),
            ("email", EvidenceKind::Email),
            ("gmail", EvidenceKind::Email),
            ("text", EvidenceKind::Text),
            ("message", EvidenceKind::Text),
            ("sms", EvidenceKind::Text),
            ("notice", EvidenceKind::Notice),
            ("n4", EvidenceKind::Notice),
            ("n12", EvidenceKind::Notice),
            ("letter", EvidenceKind::Letter),
            ("receipt", EvidenceKind::Receipt),
            ("invoice", EvidenceKind::Receipt),
            ("medical", EvidenceKind::Medical),
            ("doctor", EvidenceKind::Medical),
            ("inspection", EvidenceKind::Inspection),
        ];

        let evidence_tag_phrases = [
            ("repair", "repairs"),
            ("maintenance", "repairs"),
            ("pest", "pests"),
            ("cockroach", "pests"),
            ("bedbug", "pests"),
            ("mice", "pests"),
            ("mold", "mold"),
            ("mould", "mold"),
            ("notice", "notice"),
            ("threat", "harassment"),
            ("harass", "harassment"),
            ("evict", "eviction"),
        ];

        Self::new(
            "reference-2025.1",
            issue_phrases
                .iter()
                .map(|(phrase, tag)| (phrase.to_string(), tag.to_string()))
                .collect(),
            kind_phrases
                .iter()
                .map(|(phrase, kind)| (phrase.to_string(), *kind))
                .collect(),
            evidence_tag_phrases
                .iter()
                .map(|(phrase, tag)| (phrase.to_string(), tag.to_string()))
                .collect(),
        )
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    /// Every phrase found anywhere in the lower-cased story adds its tag.
    /// Later entries never override earlier ones; tags only accumulate.
    pub fn infer_issue_tags(&self, story: &str) -> BTreeSet<String> {
        let lowered = story.to_lowercase();
        self.issue_phrases
            .iter()
            .filter(|(phrase, _)| lowered.contains(phrase.as_str()))
            .map(|(_, tag)| tag.clone())
            .collect()
    }

    /// First matching phrase wins; unmatched descriptions fall back to
    /// [`EvidenceKind::Other`].
    pub fn classify_kind(&self, description: &str) -> EvidenceKind {
        let lowered = description.to_lowercase();
        self.kind_phrases
            .iter()
            .find(|(phrase, _)| lowered.contains(phrase.as_str()))
            .map(|(_, kind)| *kind)
            .unwrap_or(EvidenceKind::Other)
    }

    /// Zero or more descriptive tags per evidence item.
    pub fn infer_evidence_tags(&self, description: &str) -> BTreeSet<String> {
        let lowered = description.to_lowercase();
        self.evidence_tag_phrases
            .iter()
            .filter(|(phrase, _)| lowered.contains(phrase.as_str()))
            .map(|(_, tag)| tag.clone())
            .collect()
    }
}

impl Default for PhraseTables {
    fn default() -> Self {
        Self::reference()
    }
}
