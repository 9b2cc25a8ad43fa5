//! Case triage: fact extraction, pathway routing, merit scoring, and the
//! HTTP surface that exposes them.
//!
//! The pipeline is deterministic end to end. Identical input against the
//! same catalog and phrase-table versions produces identical output, so
//! every recommendation can be replayed and audited.

pub mod assembler;
pub mod catalog;
pub mod domain;
pub mod extractor;
pub mod http;
pub mod merit;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use assembler::{assemble, DecisionResult};
pub use catalog::{CatalogError, PathwayRule, RuleCatalog};
pub use domain::{
    AnswerValue, CaseCategory, CaseProfile, EvidenceItem, EvidenceKind, IncidentDates, KeyFacts,
    MoneyFacts, VenueHint,
};
pub use extractor::{FactExtractor, PhraseTables, TriageIntake, ValidationError};
pub use http::{triage_router, DecisionRequest};
pub use merit::{
    Deadline, ElementCoverage, MeritBand, MeritBreakdown, MeritConfig, MeritInputs, MeritScoreResult,
    MeritScorer, PathwayRequiredError, Precedent, RelevanceTier,
};
pub use router::{route, AlternativePathway, RoutingResult, RuleMatchSummary};
pub use service::{TriageError, TriageService};
