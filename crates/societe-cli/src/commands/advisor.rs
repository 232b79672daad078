use clap::Args;
use rust_decimal::Decimal;
use serde_json::Value;

use societe_core::advisor::{
    build_recommendation, classify_activity, recommend_legal_form, recommend_social_regime,
    recommend_tax_regime, recommend_vat_regime,
};
use societe_core::types::{ActivityCategory, CompanyProfile, CompanyType, PatrimoineProtection};

use crate::input;

#[derive(Args)]
pub struct RecommendArgs {
    /// Path to a company-profile file (JSON or YAML)
    #[arg(long)]
    pub input: Option<String>,
}

#[derive(Args)]
pub struct LegalFormArgs {
    /// Single founder
    #[arg(long)]
    pub alone: bool,

    /// Desired asset protection: high, medium or low
    #[arg(long, default_value = "medium")]
    pub protection: String,

    /// Projected annual turnover in euros
    #[arg(long, default_value = "0")]
    pub turnover: Decimal,

    /// Hiring is planned
    #[arg(long)]
    pub employees: bool,
}

#[derive(Args)]
pub struct TaxRegimeArgs {
    /// Legal form (EURL, SASU, SARL, SAS, SNC, SA, ...)
    #[arg(long)]
    pub company_type: String,

    /// More than one partner
    #[arg(long)]
    pub multiple_partners: bool,

    /// A partner holds the majority of shares
    #[arg(long)]
    pub majority_shareholder: bool,

    /// Projected annual turnover in euros
    #[arg(long, default_value = "0")]
    pub turnover: Decimal,
}

#[derive(Args)]
pub struct VatRegimeArgs {
    /// Activity category (SERVICE, COMMERCE, ARTISANAT, LIBERAL) or a
    /// free-text activity label to classify
    #[arg(long)]
    pub activity: String,

    /// Projected annual turnover in euros
    #[arg(long, default_value = "0")]
    pub turnover: Decimal,
}

#[derive(Args)]
pub struct SocialRegimeArgs {
    /// Legal form (EURL, SASU, SARL, SAS, SNC, SA, ...)
    #[arg(long)]
    pub company_type: String,

    /// A partner holds the majority of shares
    #[arg(long)]
    pub majority_shareholder: bool,
}

pub fn run_recommend(args: RecommendArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let profile: CompanyProfile = if let Some(ref path) = args.input {
        input::file::read_input(path)?
    } else if let Some(data) = input::stdin::read_stdin()? {
        serde_json::from_value(data)?
    } else {
        return Err("--input <profile.json> or stdin required".into());
    };
    let outcome = build_recommendation(&profile);
    Ok(serde_json::to_value(outcome)?)
}

pub fn run_legal_form(args: LegalFormArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let protection = parse_protection(&args.protection)?;
    let result = recommend_legal_form(args.alone, protection, args.turnover, args.employees);
    Ok(serde_json::to_value(result)?)
}

pub fn run_tax_regime(args: TaxRegimeArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let company_type = parse_company_type(&args.company_type);
    let result = recommend_tax_regime(
        &company_type,
        args.multiple_partners,
        args.majority_shareholder,
        args.turnover,
    );
    Ok(serde_json::to_value(result)?)
}

pub fn run_vat_regime(args: VatRegimeArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let activity = parse_activity(&args.activity);
    let result = recommend_vat_regime(activity, args.turnover);
    Ok(serde_json::to_value(result)?)
}

pub fn run_social_regime(args: SocialRegimeArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let company_type = parse_company_type(&args.company_type);
    let result = recommend_social_regime(&company_type, args.majority_shareholder);
    Ok(serde_json::to_value(result)?)
}

// ---------------------------------------------------------------------------
// Flag parsing
// ---------------------------------------------------------------------------

pub(crate) fn parse_company_type(raw: &str) -> CompanyType {
    match raw.to_uppercase().as_str() {
        "EURL" => CompanyType::Eurl,
        "SASU" => CompanyType::Sasu,
        "SARL" => CompanyType::Sarl,
        "SAS" => CompanyType::Sas,
        "SNC" => CompanyType::Snc,
        "SA" => CompanyType::Sa,
        "EI" => CompanyType::Ei,
        "EIRL" => CompanyType::Eirl,
        _ => CompanyType::Other(raw.to_string()),
    }
}

fn parse_protection(raw: &str) -> Result<PatrimoineProtection, Box<dyn std::error::Error>> {
    match raw.to_lowercase().as_str() {
        "high" | "haute" => Ok(PatrimoineProtection::High),
        "medium" | "moyenne" => Ok(PatrimoineProtection::Medium),
        "low" | "basse" => Ok(PatrimoineProtection::Low),
        other => Err(format!("Unknown protection level '{}': use high, medium or low", other).into()),
    }
}

/// Accept an explicit category name, or classify a free-text label.
fn parse_activity(raw: &str) -> ActivityCategory {
    match raw.to_uppercase().as_str() {
        "SERVICE" => ActivityCategory::Service,
        "COMMERCE" => ActivityCategory::Commerce,
        "ARTISANAT" => ActivityCategory::Artisanat,
        "LIBERAL" => ActivityCategory::Liberal,
        _ => classify_activity(raw),
    }
}
