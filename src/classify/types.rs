use std::collections::HashMap;
use std::fmt;
use serde::{Serialize, Deserialize};

/// CSV header for the company name column
pub const COMPANY_NAME_FIELD: &str = "Company Name";
/// CSV header for the ideal customer profile column
pub const ICP_FIELD: &str = "ICP";
/// CSV header for the value proposition column
pub const VALUE_PROPOSITION_FIELD: &str = "Value_Proposition";
/// CSV header for the personas column
pub const PERSONAS_FIELD: &str = "Personas";

/// A prospect company row as read from the funding-round sheet
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyRecord {
    /// Display name of the company
    #[serde(rename = "Company Name", default)]
    pub company_name: String,

    /// Free-text ideal customer profile (stage, segment, industry)
    #[serde(rename = "ICP", default)]
    pub icp: String,

    /// Free-text value proposition
    #[serde(rename = "Value_Proposition", default)]
    pub value_proposition: String,

    /// Free-text list of buyer personas
    #[serde(rename = "Personas", default)]
    pub personas: String,
}

impl CompanyRecord {
    /// Create a record from its four text fields
    pub fn new(
        company_name: impl Into<String>,
        icp: impl Into<String>,
        value_proposition: impl Into<String>,
        personas: impl Into<String>,
    ) -> Self {
        Self {
            company_name: company_name.into(),
            icp: icp.into(),
            value_proposition: value_proposition.into(),
            personas: personas.into(),
        }
    }

    /// Build a record from a header -> value map. Missing keys become empty strings.
    pub fn from_map(fields: &HashMap<String, String>) -> Self {
        let get = |key: &str| fields.get(key).cloned().unwrap_or_default();
        Self {
            company_name: get(COMPANY_NAME_FIELD),
            icp: get(ICP_FIELD),
            value_proposition: get(VALUE_PROPOSITION_FIELD),
            personas: get(PERSONAS_FIELD),
        }
    }
}

/// Broad family a playbook belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlaybookCategory {
    /// Funding stage or company milestone
    Milestone,
    /// Buyer role
    Practitioner,
    /// Industry vertical
    Sector,
}

impl PlaybookCategory {
    /// Lowercase name, matching the serialized form
    pub fn as_str(self) -> &'static str {
        match self {
            PlaybookCategory::Milestone => "milestone",
            PlaybookCategory::Practitioner => "practitioner",
            PlaybookCategory::Sector => "sector",
        }
    }
}

impl fmt::Display for PlaybookCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The fixed set of outbound playbooks a company can be mapped to
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum PlaybookType {
    LateStageScaling,
    SeriesBcScaling,
    SeriesAGrowth,
    HeadOfGrowth,
    VpRevenueOps,
    VpCustomerSuccess,
    VpProduct,
    HealthTech,
    FinTech,
    Web3Crypto,
    DevOpsInfrastructure,
    GeneralB2bSaas,
}

impl PlaybookType {
    /// Every playbook, in selection priority order
    pub const ALL: [PlaybookType; 12] = [
        PlaybookType::LateStageScaling,
        PlaybookType::SeriesBcScaling,
        PlaybookType::SeriesAGrowth,
        PlaybookType::HeadOfGrowth,
        PlaybookType::VpRevenueOps,
        PlaybookType::VpCustomerSuccess,
        PlaybookType::VpProduct,
        PlaybookType::HealthTech,
        PlaybookType::FinTech,
        PlaybookType::Web3Crypto,
        PlaybookType::DevOpsInfrastructure,
        PlaybookType::GeneralB2bSaas,
    ];

    /// Human readable playbook label, as written to the output sheet
    pub fn label(self) -> &'static str {
        match self {
            PlaybookType::LateStageScaling => "Milestone - Late-Stage Scaling",
            PlaybookType::SeriesBcScaling => "Milestone - Series B/C Scaling",
            PlaybookType::SeriesAGrowth => "Milestone - Series A Growth",
            PlaybookType::HeadOfGrowth => "Practitioner - Head of Growth",
            PlaybookType::VpRevenueOps => "Practitioner - VP Revenue Ops",
            PlaybookType::VpCustomerSuccess => "Practitioner - VP Customer Success",
            PlaybookType::VpProduct => "Practitioner - VP Product",
            PlaybookType::HealthTech => "Sector - HealthTech",
            PlaybookType::FinTech => "Sector - FinTech",
            PlaybookType::Web3Crypto => "Sector - Web3/Crypto",
            PlaybookType::DevOpsInfrastructure => "Sector - DevOps/Infrastructure",
            PlaybookType::GeneralB2bSaas => "Practitioner - General B2B SaaS",
        }
    }

    /// One-line description of the playbook angle
    pub fn description(self) -> &'static str {
        match self {
            PlaybookType::LateStageScaling => "Large enterprise scaling operations",
            PlaybookType::SeriesBcScaling => "Mid-stage scaling through RevOps chaos",
            PlaybookType::SeriesAGrowth => "Early-stage building GTM infrastructure",
            PlaybookType::HeadOfGrowth => "Growth marketing and experimentation",
            PlaybookType::VpRevenueOps => "Revenue operations and attribution",
            PlaybookType::VpCustomerSuccess => "CS scaling and retention automation",
            PlaybookType::VpProduct => "Product analytics and instrumentation",
            PlaybookType::HealthTech => "Healthcare-specific compliance and workflows",
            PlaybookType::FinTech => "Financial services compliance and security",
            PlaybookType::Web3Crypto => "Decentralized infrastructure and DeFi",
            PlaybookType::DevOpsInfrastructure => "Engineering operations and cloud",
            PlaybookType::GeneralB2bSaas => "B2B SaaS growth and operations",
        }
    }

    pub fn category(self) -> PlaybookCategory {
        match self {
            PlaybookType::LateStageScaling
            | PlaybookType::SeriesBcScaling
            | PlaybookType::SeriesAGrowth => PlaybookCategory::Milestone,
            PlaybookType::HealthTech
            | PlaybookType::FinTech
            | PlaybookType::Web3Crypto
            | PlaybookType::DevOpsInfrastructure => PlaybookCategory::Sector,
            _ => PlaybookCategory::Practitioner,
        }
    }

    /// Look up a playbook by its exact label
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|playbook| playbook.label() == label)
    }
}

impl fmt::Display for PlaybookType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Everything generated for a single company
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationResult {
    /// Company the result belongs to
    pub company_name: String,

    /// Label of the selected playbook
    pub playbook_type: String,

    /// Description of the selected playbook
    pub playbook_description: String,

    /// Exactly three named value propositions
    pub value_props: [String; 3],

    /// Exactly three target persona titles
    pub personas: [String; 3],

    /// Subject line for the first outbound email
    pub email_subject: String,

    /// How many personas came from keywords rather than the default roles
    #[serde(default)]
    pub recognized_personas: usize,
}

impl ClassificationResult {
    /// Typed playbook for this result, if the label is one of the known ones
    pub fn playbook(&self) -> Option<PlaybookType> {
        PlaybookType::from_label(&self.playbook_type)
    }
}
