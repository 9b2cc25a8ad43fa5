use std::sync::Arc;

use chrono::NaiveDate;
use tracing::info;

use super::assembler::{assemble, DecisionResult};
use super::catalog::{CatalogError, RuleCatalog};
use super::extractor::{FactExtractor, TriageIntake, ValidationError};
use super::merit::{Deadline, MeritInputs, MeritScorer, PathwayRequiredError, Precedent};
use super::router::{route, RoutingResult};

/// Unified error surface for the full triage pipeline. Each variant is
/// raised to the immediate caller; the engine never retries or falls back to
/// a cached result, because identical input produces identical failure.
#[derive(Debug, thiserror::Error)]
pub enum TriageError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    #[error(transparent)]
    PathwayRequired(#[from] PathwayRequiredError),
}

/// Service composing the fact extractor, rule catalog, pathway router, and
/// merit scorer. The catalog is shared read-only; a refresh swaps the `Arc`
/// rather than mutating rules in place.
pub struct TriageService {
    extractor: FactExtractor,
    catalog: Arc<RuleCatalog>,
    scorer: MeritScorer,
}

impl TriageService {
    pub fn new(catalog: Arc<RuleCatalog>) -> Self {
        Self {
            extractor: FactExtractor::default(),
            catalog,
            scorer: MeritScorer::default(),
        }
    }

    pub fn with_parts(
        extractor: FactExtractor,
        catalog: Arc<RuleCatalog>,
        scorer: MeritScorer,
    ) -> Self {
        Self {
            extractor,
            catalog,
            scorer,
        }
    }

    pub fn catalog(&self) -> &RuleCatalog {
        &self.catalog
    }

    /// Normalize and route, without merit scoring.
    pub fn route(&self, intake: &TriageIntake) -> Result<RoutingResult, TriageError> {
        let profile = self.extractor.extract(intake)?;
        Ok(route(&profile, &self.catalog))
    }

    /// Run the full pipeline: extract, route, score, assemble.
    pub fn decide(
        &self,
        intake: &TriageIntake,
        precedents: &[Precedent],
        deadlines: &[Deadline],
        today: NaiveDate,
    ) -> Result<DecisionResult, TriageError> {
        let profile = self.extractor.extract(intake)?;
        let routing = route(&profile, &self.catalog);

        let merit = self.scorer.score(&MeritInputs {
            profile: &profile,
            pathway: Some(&routing),
            precedents,
            deadlines,
            today,
        })?;

        info!(
            tribunal = %routing.recommended_tribunal,
            confidence = routing.confidence,
            merit_score = merit.score,
            band = merit.band.label(),
            "triage decision computed"
        );

        Ok(assemble(Some(routing), Some(merit)))
    }
}
