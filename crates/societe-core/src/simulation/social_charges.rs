//! Simplified social-contribution simulation.
//!
//! Applies a fixed rate table to the gross officer salary. Three branches:
//! TNS, assimilé-salarié, and a fallback table when no social regime has been
//! chosen yet in the wizard. The rates are deliberately coarse approximations
//! of the real URSSAF schedules and are kept stable for display parity.

use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::error::SocieteError;
use crate::types::{with_metadata, CompanyType, ComputationOutput, Money, SocialRegime, TaxRegime};
use crate::SocieteResult;

// ---------------------------------------------------------------------------
// Input / Output
// ---------------------------------------------------------------------------

/// Input for the social-charges simulation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SocialChargesInput {
    /// Gross annual officer salary, the contribution base.
    pub salary: Money,
    pub company_type: CompanyType,
    /// None while the wizard has not settled the status; the fallback rate
    /// table applies in that case.
    #[serde(default)]
    pub social_regime: Option<SocialRegime>,
    pub tax_regime: TaxRegime,
}

/// Per-contribution breakdown, each value rounded to the nearest euro.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SocialChargesDetails {
    pub maladie: Money,
    pub retraite: Money,
    pub allocations_familiales: Money,
    pub csg_crds: Money,
    pub formation_professionnelle: Money,
    pub autres: Money,
}

/// Output of the social-charges simulation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SocialCharges {
    /// Sum of the rounded detail values.
    pub total_charges: Money,
    pub details: SocialChargesDetails,
}

/// One branch of the rate table.
struct RateTable {
    maladie: Decimal,
    retraite: Decimal,
    allocations_familiales: Decimal,
    csg_crds: Decimal,
    formation: Decimal,
    /// Absolute cap on the formation contribution, if any.
    formation_cap: Option<Decimal>,
    autres: Decimal,
    label: &'static str,
}

const TNS_TABLE: RateTable = RateTable {
    maladie: dec!(0.06),
    retraite: dec!(0.17),
    allocations_familiales: dec!(0.03),
    csg_crds: dec!(0.095),
    formation: dec!(0.001),
    formation_cap: Some(dec!(400)),
    autres: dec!(0.04),
    label: "TNS",
};

const ASSIMILE_TABLE: RateTable = RateTable {
    maladie: dec!(0.13),
    retraite: dec!(0.20),
    allocations_familiales: dec!(0.035),
    csg_crds: dec!(0.095),
    formation: dec!(0.015),
    formation_cap: None,
    autres: dec!(0.14),
    label: "assimilé salarié",
};

const DEFAULT_TABLE: RateTable = RateTable {
    maladie: dec!(0.10),
    retraite: dec!(0.15),
    allocations_familiales: dec!(0.03),
    csg_crds: dec!(0.095),
    formation: dec!(0.01),
    formation_cap: None,
    autres: dec!(0.065),
    label: "indéterminé",
};

// ---------------------------------------------------------------------------
// Core function
// ---------------------------------------------------------------------------

/// Simulate the annual social contributions on the officer salary.
pub fn simulate_social_charges(
    input: &SocialChargesInput,
) -> SocieteResult<ComputationOutput<SocialCharges>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    if input.salary < Decimal::ZERO {
        return Err(SocieteError::InvalidInput {
            field: "salary".into(),
            reason: "Salary cannot be negative".into(),
        });
    }
    if input.salary == Decimal::ZERO {
        warnings.push(
            "Aucune rémunération déclarée : les cotisations simulées sont nulles.".to_string(),
        );
    }

    let table = match input.social_regime {
        Some(SocialRegime::Tns) => &TNS_TABLE,
        Some(SocialRegime::Assimile) => &ASSIMILE_TABLE,
        None => {
            warnings.push(
                "Statut social non déterminé : barème forfaitaire intermédiaire appliqué."
                    .to_string(),
            );
            &DEFAULT_TABLE
        }
    };

    let formation = {
        let raw = input.salary * table.formation;
        match table.formation_cap {
            Some(cap) => raw.min(cap),
            None => raw,
        }
    };

    let details = SocialChargesDetails {
        maladie: round_euro(input.salary * table.maladie),
        retraite: round_euro(input.salary * table.retraite),
        allocations_familiales: round_euro(input.salary * table.allocations_familiales),
        csg_crds: round_euro(input.salary * table.csg_crds),
        formation_professionnelle: round_euro(formation),
        autres: round_euro(input.salary * table.autres),
    };

    let total_charges = details.maladie
        + details.retraite
        + details.allocations_familiales
        + details.csg_crds
        + details.formation_professionnelle
        + details.autres;

    let output = SocialCharges {
        total_charges,
        details,
    };

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Simplified social-contribution simulation: fixed rate table per social \
         status applied to the gross officer salary",
        &serde_json::json!({
            "salary": input.salary.to_string(),
            "company_type": input.company_type.to_string(),
            "social_regime": table.label,
            "tax_regime": input.tax_regime.to_string(),
        }),
        warnings,
        elapsed,
        output,
    ))
}

/// Nearest euro, halves away from zero.
fn round_euro(value: Money) -> Money {
    value.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(salary: Decimal, regime: Option<SocialRegime>) -> SocialChargesInput {
        SocialChargesInput {
            salary,
            company_type: CompanyType::Sarl,
            social_regime: regime,
            tax_regime: TaxRegime::Is,
        }
    }

    #[test]
    fn test_tns_table_at_50k() {
        let result =
            simulate_social_charges(&input(dec!(50_000), Some(SocialRegime::Tns))).unwrap();
        let d = &result.result.details;
        assert_eq!(d.maladie, dec!(3_000)); // 6%
        assert_eq!(d.retraite, dec!(8_500)); // 17%
        assert_eq!(d.allocations_familiales, dec!(1_500)); // 3%
        assert_eq!(d.csg_crds, dec!(4_750)); // 9.5%
        assert_eq!(d.formation_professionnelle, dec!(50)); // 0.1%, under the cap
        assert_eq!(d.autres, dec!(2_000)); // 4%
        assert_eq!(result.result.total_charges, dec!(19_800));
    }

    #[test]
    fn test_tns_formation_capped_at_400() {
        // 500 000 * 0.001 = 500, capped at 400
        let result =
            simulate_social_charges(&input(dec!(500_000), Some(SocialRegime::Tns))).unwrap();
        assert_eq!(result.result.details.formation_professionnelle, dec!(400));
    }

    #[test]
    fn test_assimile_table_at_50k() {
        let result =
            simulate_social_charges(&input(dec!(50_000), Some(SocialRegime::Assimile))).unwrap();
        let d = &result.result.details;
        assert_eq!(d.maladie, dec!(6_500)); // 13%
        assert_eq!(d.retraite, dec!(10_000)); // 20%
        assert_eq!(d.allocations_familiales, dec!(1_750)); // 3.5%
        assert_eq!(d.csg_crds, dec!(4_750)); // 9.5%
        assert_eq!(d.formation_professionnelle, dec!(750)); // 1.5%, no cap
        assert_eq!(d.autres, dec!(7_000)); // 14%
        assert_eq!(result.result.total_charges, dec!(30_750));
    }

    #[test]
    fn test_fallback_table_when_regime_unset() {
        let result = simulate_social_charges(&input(dec!(40_000), None)).unwrap();
        let d = &result.result.details;
        assert_eq!(d.maladie, dec!(4_000)); // 10%
        assert_eq!(d.retraite, dec!(6_000)); // 15%
        assert_eq!(d.autres, dec!(2_600)); // 6.5%
        assert!(result
            .warnings
            .iter()
            .any(|w| w.contains("non déterminé")));
    }

    #[test]
    fn test_zero_salary_yields_zero_charges() {
        let result = simulate_social_charges(&input(dec!(0), Some(SocialRegime::Tns))).unwrap();
        assert_eq!(result.result.total_charges, dec!(0));
        assert!(!result.warnings.is_empty());
    }

    #[test]
    fn test_total_is_sum_of_rounded_details() {
        let result =
            simulate_social_charges(&input(dec!(37_137), Some(SocialRegime::Assimile))).unwrap();
        let d = &result.result.details;
        let expected = d.maladie
            + d.retraite
            + d.allocations_familiales
            + d.csg_crds
            + d.formation_professionnelle
            + d.autres;
        assert_eq!(result.result.total_charges, expected);
    }

    #[test]
    fn test_negative_salary_rejected() {
        let err = simulate_social_charges(&input(dec!(-10), None)).unwrap_err();
        assert!(matches!(err, SocieteError::InvalidInput { .. }));
    }

    #[test]
    fn test_idempotent() {
        let a = simulate_social_charges(&input(dec!(60_000), Some(SocialRegime::Tns))).unwrap();
        let b = simulate_social_charges(&input(dec!(60_000), Some(SocialRegime::Tns))).unwrap();
        assert_eq!(
            serde_json::to_value(&a.result).unwrap(),
            serde_json::to_value(&b.result).unwrap()
        );
    }
}
