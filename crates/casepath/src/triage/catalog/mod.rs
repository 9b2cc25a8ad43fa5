mod builtin;

use std::io::Read;

use serde::{Deserialize, Serialize};

use super::domain::CaseCategory;

/// One routing rule: keyword/attribute triggers on the left, a recommended
/// venue and procedural track on the right. Static reference data; never
/// mutated at runtime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathwayRule {
    pub rule_id: String,
    pub rule_name: String,
    /// Lower values win score ties. Not a filter.
    pub priority: u32,
    #[serde(default)]
    pub category: Option<CaseCategory>,
    /// `None` applies to every jurisdiction.
    #[serde(default)]
    pub province: Option<String>,
    pub issue_keywords: Vec<String>,
    #[serde(default)]
    pub amount_min: Option<f64>,
    #[serde(default)]
    pub amount_max: Option<f64>,
    pub tribunal: String,
    pub pathway_id: String,
    #[serde(default)]
    pub recommended_forms: Vec<String>,
    pub timeframe: String,
    pub filing_fee: String,
    /// Historical success rate in percent. Informational only.
    pub success_rate: u8,
    /// Base rationale shown to the user when the rule matches.
    pub reasoning: String,
}

impl PathwayRule {
    /// A monetary band is in effect only when both ends are present.
    pub fn amount_band(&self) -> Option<(f64, f64)> {
        match (self.amount_min, self.amount_max) {
            (Some(min), Some(max)) => Some((min, max)),
            _ => None,
        }
    }
}

/// Structurally invalid catalog data. Fatal for the load: a corrupt catalog
/// must never be partially applied.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("catalog contains no rules")]
    Empty,
    #[error("duplicate rule id '{0}'")]
    DuplicateRuleId(String),
    #[error("rule '{rule_id}': field '{field}' must not be blank")]
    BlankField {
        rule_id: String,
        field: &'static str,
    },
    #[error("rule '{rule_id}': amount band is inverted (min {min}, max {max})")]
    InvalidAmountBand {
        rule_id: String,
        min: f64,
        max: f64,
    },
    #[error("rule '{rule_id}': success rate {value} exceeds 100")]
    InvalidSuccessRate { rule_id: String, value: u8 },
    #[error("rule '{rule_id}' has no keywords, category, or amount band to match on")]
    NoMatchSignal { rule_id: String },
    #[error("failed to parse catalog: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Deserialize)]
struct CatalogFile {
    version: String,
    rules: Vec<PathwayRule>,
}

/// Versioned, read-only collection of pathway rules. Loaded once at startup;
/// a refresh builds a new catalog and swaps the `Arc` rather than mutating
/// entries in place.
#[derive(Debug, Clone)]
pub struct RuleCatalog {
    version: String,
    rules: Vec<PathwayRule>,
}

impl RuleCatalog {
    /// Build a catalog from already-assembled rules, failing fast on
    /// structural problems.
    pub fn new(version: impl Into<String>, rules: Vec<PathwayRule>) -> Result<Self, CatalogError> {
        let catalog = Self {
            version: version.into(),
            rules,
        };
        catalog.validate()?;
        Ok(catalog)
    }

    /// The fixed reference rule set shipped with the engine.
    pub fn builtin() -> Self {
        Self {
            version: builtin::VERSION.to_string(),
            rules: builtin::rules(),
        }
    }

    /// Load an operator-supplied catalog from JSON.
    pub fn from_json_reader<R: Read>(reader: R) -> Result<Self, CatalogError> {
        let file: CatalogFile = serde_json::from_reader(reader)?;
        Self::new(file.version, file.rules)
    }

    pub fn validate(&self) -> Result<(), CatalogError> {
        if self.rules.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut seen = std::collections::BTreeSet::new();
        for rule in &self.rules {
            if !seen.insert(rule.rule_id.as_str()) {
                return Err(CatalogError::DuplicateRuleId(rule.rule_id.clone()));
            }
            for (field, value) in [
                ("rule_id", rule.rule_id.as_str()),
                ("rule_name", rule.rule_name.as_str()),
                ("tribunal", rule.tribunal.as_str()),
                ("pathway_id", rule.pathway_id.as_str()),
            ] {
                if value.trim().is_empty() {
                    return Err(CatalogError::BlankField {
                        rule_id: rule.rule_id.clone(),
                        field,
                    });
                }
            }
            if let Some((min, max)) = rule.amount_band() {
                if min > max {
                    return Err(CatalogError::InvalidAmountBand {
                        rule_id: rule.rule_id.clone(),
                        min,
                        max,
                    });
                }
            }
            if rule.success_rate > 100 {
                return Err(CatalogError::InvalidSuccessRate {
                    rule_id: rule.rule_id.clone(),
                    value: rule.success_rate,
                });
            }
            if rule.issue_keywords.is_empty()
                && rule.category.is_none()
                && rule.amount_band().is_none()
            {
                return Err(CatalogError::NoMatchSignal {
                    rule_id: rule.rule_id.clone(),
                });
            }
        }

        Ok(())
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &PathwayRule> {
        self.rules.iter()
    }

    /// Distinct tribunals in catalog order, for catalog introspection.
    pub fn tribunals(&self) -> Vec<String> {
        let mut seen = std::collections::BTreeSet::new();
        self.rules
            .iter()
            .filter(|rule| seen.insert(rule.tribunal.as_str()))
            .map(|rule| rule.tribunal.clone())
            .collect()
    }
}
