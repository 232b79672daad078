use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// All monetary values. Wraps Decimal to prevent accidental f64 usage.
pub type Money = Decimal;

/// Rates expressed as decimals (0.05 = 5%). Never as percentages.
pub type Rate = Decimal;

/// French legal forms handled by the engine.
///
/// The wire spelling matches the wizard's vocabulary ("EURL", "SASU", ...).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CompanyType {
    #[serde(rename = "EURL")]
    Eurl,
    #[serde(rename = "SASU")]
    Sasu,
    #[serde(rename = "SARL")]
    Sarl,
    #[serde(rename = "SAS")]
    Sas,
    #[serde(rename = "SNC")]
    Snc,
    #[serde(rename = "SA")]
    Sa,
    #[serde(rename = "EI")]
    Ei,
    #[serde(rename = "EIRL")]
    Eirl,
    Other(String),
}

impl CompanyType {
    /// SAS-family forms and the SA. Locked into IS, officers assimilés-salariés.
    pub fn is_capital_company(&self) -> bool {
        matches!(self, CompanyType::Sas | CompanyType::Sasu | CompanyType::Sa)
    }

    /// Sole proprietorships, exempt from the apprenticeship/training levies.
    pub fn is_sole_proprietorship(&self) -> bool {
        matches!(self, CompanyType::Ei | CompanyType::Eirl)
    }
}

impl std::fmt::Display for CompanyType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CompanyType::Eurl => write!(f, "EURL"),
            CompanyType::Sasu => write!(f, "SASU"),
            CompanyType::Sarl => write!(f, "SARL"),
            CompanyType::Sas => write!(f, "SAS"),
            CompanyType::Snc => write!(f, "SNC"),
            CompanyType::Sa => write!(f, "SA"),
            CompanyType::Ei => write!(f, "EI"),
            CompanyType::Eirl => write!(f, "EIRL"),
            CompanyType::Other(name) => write!(f, "{}", name),
        }
    }
}

/// Broad activity family, derived from the free-text activity label.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActivityCategory {
    #[default]
    #[serde(rename = "SERVICE")]
    Service,
    #[serde(rename = "COMMERCE")]
    Commerce,
    #[serde(rename = "ARTISANAT")]
    Artisanat,
    #[serde(rename = "LIBERAL")]
    Liberal,
}

/// How the project is financed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FundingSource {
    #[default]
    Personal,
    Bank,
    Investors,
}

/// Hiring intentions declared in the wizard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmployeeHiring {
    Immediate,
    Future,
    #[default]
    None,
}

/// Desired personal-asset protection level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PatrimoineProtection {
    High,
    #[default]
    Medium,
    Low,
}

/// Domiciliation options the wizard can recommend or record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeadquartersType {
    /// Remote/virtual office through the Koulier domiciliation service.
    Koulier,
    /// Dedicated commercial premises (shop, workshop, office lease).
    Commercial,
    /// The founder's personal address.
    Personal,
}

/// Founder situation at registration time, drives aid eligibility (ACRE).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CurrentSituation {
    #[default]
    Employed,
    Unemployed,
    Student,
    Retired,
    Other(String),
}

/// Corporate (IS) vs. personal (IR) income tax.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaxRegime {
    #[serde(rename = "IR")]
    Ir,
    #[serde(rename = "IS")]
    Is,
}

impl std::fmt::Display for TaxRegime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TaxRegime::Ir => write!(f, "IR"),
            TaxRegime::Is => write!(f, "IS"),
        }
    }
}

/// VAT regimes, from full exemption to monthly filings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VatRegime {
    #[serde(rename = "franchise")]
    Franchise,
    #[serde(rename = "realSimplified")]
    RealSimplified,
    #[serde(rename = "realNormal")]
    RealNormal,
}

impl std::fmt::Display for VatRegime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VatRegime::Franchise => write!(f, "franchise en base"),
            VatRegime::RealSimplified => write!(f, "réel simplifié"),
            VatRegime::RealNormal => write!(f, "réel normal"),
        }
    }
}

/// VAT declaration periodicity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VatPeriodicity {
    Monthly,
    Quarterly,
}

/// Social security status of the company officer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SocialRegime {
    #[serde(rename = "TNS")]
    Tns,
    #[serde(rename = "assimile")]
    Assimile,
}

impl std::fmt::Display for SocialRegime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SocialRegime::Tns => write!(f, "TNS"),
            SocialRegime::Assimile => write!(f, "assimilé salarié"),
        }
    }
}

/// Everything the engine knows about the company being created.
///
/// Assembled by the wizard UI from multi-step form state; the engine only
/// relies on these semantic fields, never on per-step field names. Missing
/// fields deserialize to the neutral defaults below so a half-completed
/// wizard session can still be evaluated.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CompanyProfile {
    pub company_type: CompanyType,
    pub activity_category: ActivityCategory,
    pub partners_count: u32,
    /// Annual, pre-tax.
    pub estimated_turnover: Money,
    pub projected_expenses: Money,
    pub projected_salary: Money,
    pub funding_source: FundingSource,
    pub employee_hiring: EmployeeHiring,
    pub patrimoine_protection: PatrimoineProtection,
    pub headquarters_type: Option<HeadquartersType>,
    pub current_situation: CurrentSituation,
    pub has_majority_shareholder: bool,
    pub employees_count: Decimal,
    /// Balance-sheet total, for accounting thresholds.
    pub total_bilan: Money,
    /// Regimes already chosen earlier in the wizard, if any. Used only to
    /// filter regime-specific regulatory thresholds.
    pub tax_regime: Option<TaxRegime>,
    pub vat_regime: Option<VatRegime>,
    pub social_regime: Option<SocialRegime>,
}

impl Default for CompanyProfile {
    fn default() -> Self {
        CompanyProfile {
            company_type: CompanyType::Sarl,
            activity_category: ActivityCategory::Service,
            partners_count: 1,
            estimated_turnover: Decimal::ZERO,
            projected_expenses: Decimal::ZERO,
            projected_salary: Decimal::ZERO,
            funding_source: FundingSource::Personal,
            employee_hiring: EmployeeHiring::None,
            patrimoine_protection: PatrimoineProtection::Medium,
            headquarters_type: None,
            current_situation: CurrentSituation::Employed,
            has_majority_shareholder: false,
            employees_count: Decimal::ZERO,
            total_bilan: Decimal::ZERO,
            tax_regime: None,
            vat_regime: None,
            social_regime: None,
        }
    }
}

impl CompanyProfile {
    pub fn is_alone_founder(&self) -> bool {
        self.partners_count == 1
    }

    pub fn has_multiple_partners(&self) -> bool {
        self.partners_count > 1
    }

    /// Hiring planned at all, now or later.
    pub fn plans_hiring(&self) -> bool {
        matches!(
            self.employee_hiring,
            EmployeeHiring::Immediate | EmployeeHiring::Future
        )
    }
}

/// Standard computation output envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputationOutput<T: Serialize> {
    pub result: T,
    pub methodology: String,
    pub assumptions: serde_json::Value,
    pub warnings: Vec<String>,
    pub metadata: ComputationMetadata,
}

/// Metadata for every computation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputationMetadata {
    pub version: String,
    pub computation_time_us: u64,
    pub precision: String,
}

/// Helper to wrap computation results with metadata
pub fn with_metadata<T: Serialize>(
    methodology: &str,
    assumptions: &impl Serialize,
    warnings: Vec<String>,
    elapsed_us: u64,
    result: T,
) -> ComputationOutput<T> {
    ComputationOutput {
        result,
        methodology: methodology.to_string(),
        assumptions: serde_json::to_value(assumptions).unwrap_or_default(),
        warnings,
        metadata: ComputationMetadata {
            version: env!("CARGO_PKG_VERSION").to_string(),
            computation_time_us: elapsed_us,
            precision: "rust_decimal_128bit".to_string(),
        },
    }
}
