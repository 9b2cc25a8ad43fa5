use serde::{Deserialize, Serialize};

use super::merit::MeritScoreResult;
use super::router::RoutingResult;

/// Combined routing and merit output for persistence and display.
///
/// Sections are omitted (not zeroed) when a stage has not run, so consumers
/// can tell "not yet computed" apart from "computed as zero".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionResult {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub routing: Option<RoutingResult>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub merit: Option<MeritScoreResult>,
}

/// Pure merge of the two engine outputs. No defaulting beyond null-safety.
pub fn assemble(
    routing: Option<RoutingResult>,
    merit: Option<MeritScoreResult>,
) -> DecisionResult {
    DecisionResult { routing, merit }
}
