//! Case triage and merit scoring engine.
//!
//! The engine turns a raw intake payload (free-text story, province, evidence
//! descriptions) into a normalized [`triage::CaseProfile`], routes the profile
//! against a versioned catalog of pathway rules, and computes an explainable
//! 0-100 merit score with a component breakdown. Persistence, authentication,
//! payments, and document generation are the calling application's concern;
//! everything in this crate is a pure computation over its inputs.

pub mod config;
pub mod error;
pub mod telemetry;
pub mod triage;
