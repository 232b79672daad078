use rust_decimal_macros::dec;

use societe_core::simulation::{
    simulate_social_charges, simulate_taxes, SocialChargesInput, TaxSimulationInput,
};
use societe_core::types::{CompanyType, SocialRegime, TaxRegime, VatRegime};
use societe_core::SocieteError;

// ===========================================================================
// Tax simulation
// ===========================================================================

fn sas_at_100k() -> TaxSimulationInput {
    TaxSimulationInput {
        turnover: dec!(100_000),
        expenses: dec!(0),
        salary: dec!(0),
        company_type: CompanyType::Sas,
        tax_regime: TaxRegime::Is,
        vat_regime: VatRegime::Franchise,
    }
}

#[test]
fn test_reference_is_simulation() {
    let output = simulate_taxes(&sas_at_100k()).unwrap();
    let sim = &output.result;

    // is = 42 500 * 0.15 + 57 500 * 0.25 = 6 375 + 14 375 = 20 750
    assert_eq!(sim.details.is, dec!(20_750));
    // cfe = clamp(100 000 * 0.005, 200, 1000) = 500
    assert_eq!(sim.details.cfe, dec!(500));
    // below the 500 000 CVAE floor
    assert_eq!(sim.details.cvae, dec!(0));
    assert_eq!(sim.details.ir, dec!(0));
    assert_eq!(sim.total_taxes, dec!(21_250));
}

#[test]
fn test_envelope_carries_assumptions_and_metadata() {
    let output = simulate_taxes(&sas_at_100k()).unwrap();
    assert!(!output.methodology.is_empty());
    assert_eq!(output.assumptions["turnover"], "100000");
    assert_eq!(output.assumptions["tax_regime"], "IS");
    assert_eq!(output.metadata.precision, "rust_decimal_128bit");
}

#[test]
fn test_full_picture_with_salary_and_expenses() {
    let input = TaxSimulationInput {
        turnover: dec!(250_000),
        expenses: dec!(60_000),
        salary: dec!(50_000),
        company_type: CompanyType::Sasu,
        tax_regime: TaxRegime::Is,
        vat_regime: VatRegime::RealNormal,
    };
    let output = simulate_taxes(&input).unwrap();
    let sim = &output.result;

    // gross = 250 000 - 60 000 - 50 000 = 140 000
    assert_eq!(sim.gross_profit, dec!(140_000));
    // is = 42 500 * 0.15 + 97 500 * 0.25 = 6 375 + 24 375 = 30 750
    assert_eq!(sim.details.is, dec!(30_750));
    // cfe capped at 1 000 (250 000 * 0.005 = 1 250)
    assert_eq!(sim.details.cfe, dec!(1_000));
    // levies: 50 000 * 0.0068 = 340 ; 50 000 * 0.01 = 500
    assert_eq!(sim.details.taxe_apprentissage, dec!(340));
    assert_eq!(sim.details.formation_professionnelle, dec!(500));
    assert_eq!(sim.total_taxes, dec!(32_590));
}

#[test]
fn test_invalid_numeric_input_is_rejected() {
    let mut input = sas_at_100k();
    input.expenses = dec!(-5);
    let err = simulate_taxes(&input).unwrap_err();
    match err {
        SocieteError::InvalidInput { field, .. } => assert_eq!(field, "expenses"),
        other => panic!("unexpected error: {other}"),
    }
}

// ===========================================================================
// Social charges
// ===========================================================================

#[test]
fn test_tns_versus_assimile_cost_gap() {
    let salary = dec!(45_000);
    let tns = simulate_social_charges(&SocialChargesInput {
        salary,
        company_type: CompanyType::Eurl,
        social_regime: Some(SocialRegime::Tns),
        tax_regime: TaxRegime::Ir,
    })
    .unwrap();
    let assimile = simulate_social_charges(&SocialChargesInput {
        salary,
        company_type: CompanyType::Sasu,
        social_regime: Some(SocialRegime::Assimile),
        tax_regime: TaxRegime::Is,
    })
    .unwrap();

    // TNS: (6 + 17 + 3 + 9.5 + 4)% = 39.5% of 45 000 = 17 775, plus
    // formation 45 000 * 0.001 = 45
    assert_eq!(tns.result.total_charges, dec!(17_820));
    // Assimilé: (13 + 20 + 3.5 + 9.5 + 1.5 + 14)% = 61.5% of 45 000
    assert_eq!(assimile.result.total_charges, dec!(27_675));
    assert!(assimile.result.total_charges > tns.result.total_charges);
}

#[test]
fn test_charges_total_matches_details() {
    let output = simulate_social_charges(&SocialChargesInput {
        salary: dec!(38_411),
        company_type: CompanyType::Sarl,
        social_regime: Some(SocialRegime::Tns),
        tax_regime: TaxRegime::Is,
    })
    .unwrap();
    let d = &output.result.details;
    let sum = d.maladie
        + d.retraite
        + d.allocations_familiales
        + d.csg_crds
        + d.formation_professionnelle
        + d.autres;
    assert_eq!(output.result.total_charges, sum);
}

#[test]
fn test_undeclared_regime_falls_back_with_warning() {
    let output = simulate_social_charges(&SocialChargesInput {
        salary: dec!(30_000),
        company_type: CompanyType::Sarl,
        social_regime: None,
        tax_regime: TaxRegime::Is,
    })
    .unwrap();
    // default table: (10 + 15 + 3 + 9.5 + 1 + 6.5)% = 45%
    assert_eq!(output.result.total_charges, dec!(13_500));
    assert!(!output.warnings.is_empty());
}
