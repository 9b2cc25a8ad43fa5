mod scoring;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::catalog::RuleCatalog;
use super::domain::{CaseCategory, CaseProfile};
use scoring::{BandCheck, KeywordHit};

pub const FALLBACK_TRIBUNAL: &str = "CONSULTATION";
pub const FALLBACK_PATHWAY: &str = "find-my-path";
pub const FALLBACK_CONFIDENCE: u8 = 20;

const MAX_ALTERNATIVES: usize = 3;
const MAX_AUDIT_RULES: usize = 5;

/// A catalog rule that survived eligibility and scored above zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchedRule {
    pub rule_id: String,
    pub rule_name: String,
    pub score: i64,
    pub priority: u32,
    pub tribunal: String,
    pub pathway_id: String,
    pub recommended_forms: Vec<String>,
    pub timeframe: String,
    pub filing_fee: String,
    pub success_rate: u8,
    pub reasoning: String,
    pub matched_keywords: Vec<String>,
}

/// Compact audit view of a matched rule, kept on every routing result so the
/// recommendation can be explained after the fact.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleMatchSummary {
    pub rule_id: String,
    pub rule_name: String,
    pub score: i64,
    pub reasoning: String,
}

/// A non-primary venue worth mentioning to the user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlternativePathway {
    pub tribunal: String,
    pub pathway: String,
    pub confidence: u8,
    pub reasoning: String,
    pub forms: Vec<String>,
    pub timeframe: String,
    pub filing_fee: String,
}

/// The router's recommendation. When no rule matches, the fixed consultation
/// fallback is returned with `timeframe`/`filing_fee`/`success_rate` absent —
/// a designed terminal outcome, not an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoutingResult {
    pub recommended_tribunal: String,
    pub recommended_pathway: String,
    pub recommended_forms: Vec<String>,
    pub confidence: u8,
    pub reasoning: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeframe: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filing_fee: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub success_rate: Option<u8>,
    pub alternatives: Vec<AlternativePathway>,
    pub matched_rules: Vec<RuleMatchSummary>,
}

impl RoutingResult {
    pub fn is_fallback(&self) -> bool {
        self.recommended_tribunal == FALLBACK_TRIBUNAL
    }
}

/// Match a profile against the catalog and rank the eligible rules.
///
/// Pure with respect to the catalog; never fails for a well-formed profile.
/// Catalog corruption is rejected at load time, not here.
pub fn route(profile: &CaseProfile, catalog: &RuleCatalog) -> RoutingResult {
    let story = profile.story_text.to_lowercase();
    let words: Vec<&str> = story.split_whitespace().collect();
    let category = CaseCategory::resolve(profile);
    let amount = profile.key_facts.money.damages_sought;

    let mut matches: Vec<MatchedRule> = Vec::new();
    for rule in catalog.iter() {
        if !scoring::category_allows(rule, category) {
            continue;
        }

        let band = scoring::check_amount_band(rule, amount);
        if band == BandCheck::Outside {
            continue;
        }

        let mut score: i64 = 0;
        let mut matched_keywords: Vec<String> = Vec::new();
        for keyword in &rule.issue_keywords {
            if let Some(hit) = scoring::match_keyword(keyword, &story, &words) {
                score += hit.points();
                matched_keywords.push(keyword.clone());
                if hit == KeywordHit::Exact {
                    debug!(rule = %rule.rule_id, %keyword, "exact keyword hit");
                }
            }
        }

        if band == BandCheck::Within {
            score += scoring::AMOUNT_BAND_POINTS;
        }
        score += scoring::category_bonus(rule, category);
        score += scoring::province_bonus(rule, &profile.jurisdiction);

        if score <= 0 {
            continue;
        }

        let reasoning = if matched_keywords.is_empty() {
            rule.reasoning.clone()
        } else {
            format!("{} (matched: {})", rule.reasoning, matched_keywords.join(", "))
        };

        matches.push(MatchedRule {
            rule_id: rule.rule_id.clone(),
            rule_name: rule.rule_name.clone(),
            score,
            priority: rule.priority,
            tribunal: rule.tribunal.clone(),
            pathway_id: rule.pathway_id.clone(),
            recommended_forms: rule.recommended_forms.clone(),
            timeframe: rule.timeframe.clone(),
            filing_fee: rule.filing_fee.clone(),
            success_rate: rule.success_rate,
            reasoning,
            matched_keywords,
        });
    }

    // Stable sort: score descending, then catalog priority ascending, with
    // insertion order as the final tiebreak.
    matches.sort_by(|a, b| b.score.cmp(&a.score).then(a.priority.cmp(&b.priority)));

    let Some(primary) = matches.first().cloned() else {
        debug!(jurisdiction = %profile.jurisdiction, "no rule matched; consultation fallback");
        return fallback_result();
    };

    let confidence = scoring::confidence_from_score(primary.score);
    debug!(
        rule = %primary.rule_id,
        tribunal = %primary.tribunal,
        score = primary.score,
        confidence,
        "routing primary selected"
    );

    let mut seen_tribunals = vec![primary.tribunal.clone()];
    let mut alternatives = Vec::new();
    for candidate in matches.iter().skip(1) {
        if alternatives.len() == MAX_ALTERNATIVES {
            break;
        }
        if seen_tribunals.iter().any(|seen| *seen == candidate.tribunal) {
            continue;
        }
        seen_tribunals.push(candidate.tribunal.clone());
        alternatives.push(AlternativePathway {
            tribunal: candidate.tribunal.clone(),
            pathway: candidate.pathway_id.clone(),
            confidence: scoring::alternative_confidence(confidence, primary.score - candidate.score),
            reasoning: candidate.reasoning.clone(),
            forms: candidate.recommended_forms.clone(),
            timeframe: candidate.timeframe.clone(),
            filing_fee: candidate.filing_fee.clone(),
        });
    }

    let reasoning = vec![
        primary.reasoning.clone(),
        format!("Typical timeline: {}", primary.timeframe),
        format!("Filing fee: {}", primary.filing_fee),
        format!("Historical success rate: {}%", primary.success_rate),
    ];

    let matched_rules = matches
        .iter()
        .take(MAX_AUDIT_RULES)
        .map(|matched| RuleMatchSummary {
            rule_id: matched.rule_id.clone(),
            rule_name: matched.rule_name.clone(),
            score: matched.score,
            reasoning: matched.reasoning.clone(),
        })
        .collect();

    RoutingResult {
        recommended_tribunal: primary.tribunal,
        recommended_pathway: primary.pathway_id,
        recommended_forms: primary.recommended_forms,
        confidence,
        reasoning,
        timeframe: Some(primary.timeframe),
        filing_fee: Some(primary.filing_fee),
        success_rate: Some(primary.success_rate),
        alternatives,
        matched_rules,
    }
}

fn fallback_result() -> RoutingResult {
    RoutingResult {
        recommended_tribunal: FALLBACK_TRIBUNAL.to_string(),
        recommended_pathway: FALLBACK_PATHWAY.to_string(),
        recommended_forms: Vec::new(),
        confidence: FALLBACK_CONFIDENCE,
        reasoning: vec![
            "Unable to determine a specific pathway from the description".to_string(),
            "Consider providing more detail about the situation".to_string(),
        ],
        timeframe: None,
        filing_fee: None,
        success_rate: None,
        alternatives: Vec::new(),
        matched_rules: Vec::new(),
    }
}
