//! The fixed reference rule set. Ontario-first with British Columbia
//! variants for the tenancy and human-rights venues; a unit test in the
//! triage suite asserts the set passes catalog validation.

use super::PathwayRule;
use crate::triage::domain::CaseCategory;

pub(super) const VERSION: &str = "builtin-2025.1";

struct RuleSpec {
    rule_id: &'static str,
    rule_name: &'static str,
    priority: u32,
    category: Option<CaseCategory>,
    province: Option<&'static str>,
    issue_keywords: &'static [&'static str],
    amount_band: Option<(f64, f64)>,
    tribunal: &'static str,
    pathway_id: &'static str,
    recommended_forms: &'static [&'static str],
    timeframe: &'static str,
    filing_fee: &'static str,
    success_rate: u8,
    reasoning: &'static str,
}

const SPECS: &[RuleSpec] = &[
    RuleSpec {
        rule_id: "ltb-t6-maintenance",
        rule_name: "LTB maintenance application",
        priority: 10,
        category: Some(CaseCategory::Housing),
        province: Some("ON"),
        issue_keywords: &[
            "repair",
            "maintenance",
            "mold",
            "pests",
            "cockroach",
            "bedbug",
            "mice",
            "heat",
            "hot water",
            "plumbing",
            "broken",
            "leak",
            "unsafe",
        ],
        amount_band: None,
        tribunal: "LTB",
        pathway_id: "ltb-t6",
        recommended_forms: &["T6"],
        timeframe: "3-6 months",
        filing_fee: "$53",
        success_rate: 61,
        reasoning: "Maintenance and disrepair complaints against a landlord belong at the Landlord and Tenant Board",
    },
    RuleSpec {
        rule_id: "ltb-t2-tenant-rights",
        rule_name: "LTB tenant rights application",
        priority: 20,
        category: Some(CaseCategory::Housing),
        province: Some("ON"),
        issue_keywords: &[
            "harassment",
            "illegal entry",
            "locked out",
            "changed locks",
            "threats",
            "intimidation",
            "cut utilities",
            "reprisal",
            "interference",
        ],
        amount_band: None,
        tribunal: "LTB",
        pathway_id: "ltb-t2",
        recommended_forms: &["T2"],
        timeframe: "3-6 months",
        filing_fee: "$53",
        success_rate: 58,
        reasoning: "Interference with a tenant's reasonable enjoyment is a tenant-rights application at the Landlord and Tenant Board",
    },
    RuleSpec {
        rule_id: "rtb-bc-dispute",
        rule_name: "BC Residential Tenancy Branch dispute",
        priority: 15,
        category: Some(CaseCategory::Housing),
        province: Some("BC"),
        issue_keywords: &[
            "repair",
            "maintenance",
            "mold",
            "pests",
            "heat",
            "broken",
            "leak",
            "harassment",
            "locked out",
        ],
        amount_band: None,
        tribunal: "RTB",
        pathway_id: "rtb-dispute-resolution",
        recommended_forms: &["RTB-12"],
        timeframe: "1-3 months",
        filing_fee: "$100",
        success_rate: 59,
        reasoning: "Tenancy disputes in British Columbia are resolved by the Residential Tenancy Branch",
    },
    RuleSpec {
        rule_id: "hrto-application",
        rule_name: "HRTO human rights application",
        priority: 30,
        category: None,
        province: Some("ON"),
        issue_keywords: &[
            "discrimination",
            "disability",
            "accommodation",
            "race",
            "religion",
            "gender",
            "family status",
            "human rights",
            "creed",
            "ancestry",
        ],
        amount_band: None,
        tribunal: "HRTO",
        pathway_id: "hrto-form-1",
        recommended_forms: &["Form 1"],
        timeframe: "12-18 months",
        filing_fee: "Free",
        success_rate: 44,
        reasoning: "Discrimination on a protected ground is heard by the Human Rights Tribunal of Ontario",
    },
    RuleSpec {
        rule_id: "bchrt-complaint",
        rule_name: "BC Human Rights Tribunal complaint",
        priority: 35,
        category: None,
        province: Some("BC"),
        issue_keywords: &[
            "discrimination",
            "disability",
            "accommodation",
            "race",
            "religion",
            "gender",
            "human rights",
        ],
        amount_band: None,
        tribunal: "BCHRT",
        pathway_id: "bchrt-complaint",
        recommended_forms: &["Complaint Form"],
        timeframe: "12-24 months",
        filing_fee: "Free",
        success_rate: 41,
        reasoning: "Discrimination complaints in British Columbia are heard by the BC Human Rights Tribunal",
    },
    RuleSpec {
        rule_id: "small-claims-plaintiff",
        rule_name: "Small Claims Court plaintiff's claim",
        priority: 40,
        category: None,
        province: None,
        issue_keywords: &[
            "money owed",
            "debt",
            "unpaid",
            "refund",
            "deposit",
            "contract",
            "damages",
            "invoice",
        ],
        amount_band: Some((0.0, 35_000.0)),
        tribunal: "SMALL_CLAIMS",
        pathway_id: "small-claims-plaintiff",
        recommended_forms: &["Form 7A"],
        timeframe: "6-12 months",
        filing_fee: "$102-$500",
        success_rate: 55,
        reasoning: "Monetary claims up to the small-claims limit are fastest in Small Claims Court",
    },
    RuleSpec {
        rule_id: "superior-court-civil",
        rule_name: "Superior Court civil claim",
        priority: 50,
        category: None,
        province: None,
        issue_keywords: &["money owed", "debt", "contract", "damages", "negligence"],
        amount_band: Some((35_000.01, 10_000_000.0)),
        tribunal: "SUPERIOR_COURT",
        pathway_id: "superior-court-civil",
        recommended_forms: &["Form 14A"],
        timeframe: "1-3 years",
        filing_fee: "$229+",
        success_rate: 50,
        reasoning: "Claims above the small-claims limit must be brought in the Superior Court of Justice",
    },
    RuleSpec {
        rule_id: "family-court-application",
        rule_name: "Family Court general application",
        priority: 60,
        category: Some(CaseCategory::Family),
        province: None,
        issue_keywords: &[
            "custody",
            "child support",
            "spousal support",
            "divorce",
            "separation",
            "parenting",
            "access",
        ],
        amount_band: None,
        tribunal: "FAMILY",
        pathway_id: "family-general",
        recommended_forms: &["Form 8"],
        timeframe: "6-24 months",
        filing_fee: "Varies",
        success_rate: 52,
        reasoning: "Parenting, support, and separation matters proceed in Family Court",
    },
    RuleSpec {
        rule_id: "esa-claim",
        rule_name: "Employment standards claim",
        priority: 70,
        category: Some(CaseCategory::Employment),
        province: None,
        issue_keywords: &[
            "fired",
            "terminated",
            "wages",
            "unpaid wages",
            "overtime",
            "severance",
            "dismissal",
        ],
        amount_band: None,
        tribunal: "LABOUR",
        pathway_id: "esa-claim",
        recommended_forms: &["ESA Claim"],
        timeframe: "3-9 months",
        filing_fee: "Free",
        success_rate: 57,
        reasoning: "Unpaid wages and termination entitlements start with an employment standards claim",
    },
];

pub(super) fn rules() -> Vec<PathwayRule> {
    SPECS
        .iter()
        .map(|spec| PathwayRule {
            rule_id: spec.rule_id.to_string(),
            rule_name: spec.rule_name.to_string(),
            priority: spec.priority,
            category: spec.category,
            province: spec.province.map(str::to_string),
            issue_keywords: spec
                .issue_keywords
                .iter()
                .map(|keyword| keyword.to_string())
                .collect(),
            amount_min: spec.amount_band.map(|(min, _)| min),
            amount_max: spec.amount_band.map(|(_, max)| max),
            tribunal: spec.tribunal.to_string(),
            pathway_id: spec.pathway_id.to_string(),
            recommended_forms: spec
                .recommended_forms
                .iter()
                .map(|form| form.to_string())
                .collect(),
            timeframe: spec.timeframe.to_string(),
            filing_fee: spec.filing_fee.to_string(),
            success_rate: spec.success_rate,
            reasoning: spec.reasoning.to_string(),
        })
        .collect()
}
