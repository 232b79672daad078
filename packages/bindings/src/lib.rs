use napi::Result as NapiResult;
use napi_derive::napi;

/// Convert any Display error into a napi::Error.
fn to_napi_error(e: impl std::fmt::Display) -> napi::Error {
    napi::Error::from_reason(e.to_string())
}

// ---------------------------------------------------------------------------
// Advisor
// ---------------------------------------------------------------------------

#[napi]
pub fn build_recommendation(profile_json: String) -> NapiResult<String> {
    let profile: societe_core::types::CompanyProfile =
        serde_json::from_str(&profile_json).map_err(to_napi_error)?;
    let outcome = societe_core::advisor::build_recommendation(&profile);
    serde_json::to_string(&outcome).map_err(to_napi_error)
}

#[napi]
pub fn recommend_legal_form(input_json: String) -> NapiResult<String> {
    #[derive(serde::Deserialize)]
    struct LegalFormQuery {
        is_alone: bool,
        patrimoine_protection: societe_core::types::PatrimoineProtection,
        projected_turnover: rust_decimal::Decimal,
        has_employees: bool,
    }
    let query: LegalFormQuery = serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = societe_core::advisor::recommend_legal_form(
        query.is_alone,
        query.patrimoine_protection,
        query.projected_turnover,
        query.has_employees,
    );
    serde_json::to_string(&output).map_err(to_napi_error)
}

#[napi]
pub fn recommend_tax_regime(input_json: String) -> NapiResult<String> {
    #[derive(serde::Deserialize)]
    struct TaxRegimeQuery {
        company_type: societe_core::types::CompanyType,
        has_multiple_partners: bool,
        has_majority_shareholder: bool,
        turnover: rust_decimal::Decimal,
    }
    let query: TaxRegimeQuery = serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = societe_core::advisor::recommend_tax_regime(
        &query.company_type,
        query.has_multiple_partners,
        query.has_majority_shareholder,
        query.turnover,
    );
    serde_json::to_string(&output).map_err(to_napi_error)
}

#[napi]
pub fn recommend_vat_regime(input_json: String) -> NapiResult<String> {
    #[derive(serde::Deserialize)]
    struct VatRegimeQuery {
        activity_category: societe_core::types::ActivityCategory,
        turnover: rust_decimal::Decimal,
    }
    let query: VatRegimeQuery = serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output =
        societe_core::advisor::recommend_vat_regime(query.activity_category, query.turnover);
    serde_json::to_string(&output).map_err(to_napi_error)
}

#[napi]
pub fn recommend_social_regime(input_json: String) -> NapiResult<String> {
    #[derive(serde::Deserialize)]
    struct SocialRegimeQuery {
        company_type: societe_core::types::CompanyType,
        has_majority_shareholder: bool,
    }
    let query: SocialRegimeQuery = serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = societe_core::advisor::recommend_social_regime(
        &query.company_type,
        query.has_majority_shareholder,
    );
    serde_json::to_string(&output).map_err(to_napi_error)
}

#[napi]
pub fn classify_activity(label: String) -> NapiResult<String> {
    let category = societe_core::advisor::classify_activity(&label);
    serde_json::to_string(&category).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Thresholds
// ---------------------------------------------------------------------------

#[napi]
pub fn evaluate_thresholds(
    profile_json: String,
    catalog_json: Option<String>,
) -> NapiResult<String> {
    let profile: societe_core::types::CompanyProfile =
        serde_json::from_str(&profile_json).map_err(to_napi_error)?;

    let mut alerts = match catalog_json {
        Some(raw) => {
            let catalog: societe_core::thresholds::ThresholdCatalog =
                serde_json::from_str(&raw).map_err(to_napi_error)?;
            catalog.validate().map_err(to_napi_error)?;
            societe_core::thresholds::evaluate_thresholds(&profile, &catalog)
        }
        None => societe_core::thresholds::evaluate_thresholds(
            &profile,
            societe_core::thresholds::ThresholdCatalog::builtin(),
        ),
    };
    societe_core::thresholds::sort_alerts(&mut alerts);
    serde_json::to_string(&alerts).map_err(to_napi_error)
}

#[napi]
pub fn threshold_catalog() -> NapiResult<String> {
    serde_json::to_string(societe_core::thresholds::ThresholdCatalog::builtin())
        .map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Simulation
// ---------------------------------------------------------------------------

#[napi]
pub fn simulate_taxes(input_json: String) -> NapiResult<String> {
    let input: societe_core::simulation::TaxSimulationInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = societe_core::simulation::simulate_taxes(&input).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

#[napi]
pub fn simulate_social_charges(input_json: String) -> NapiResult<String> {
    let input: societe_core::simulation::SocialChargesInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output =
        societe_core::simulation::simulate_social_charges(&input).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}
