//! Simplified company tax simulation.
//!
//! Estimates the first-year tax load from projected figures:
//! 1. **IS** -- two-bracket schedule, 15% up to 42 500 € then 25%.
//! 2. **IR** -- flat 20% proxy of the gross profit (not the real progressive
//!    schedule; the wizard presents it as an order of magnitude).
//! 3. **CFE** -- 0.5% of turnover, floored at 200 € and capped at 1 000 €.
//! 4. **CVAE** -- 0.5% of turnover once turnover exceeds 500 000 €.
//! 5. **Taxe d'apprentissage / formation** -- 0.68% and 1% of gross salaries,
//!    sole proprietorships exempt.
//!
//! All arithmetic uses `rust_decimal::Decimal`. No `f64`.

use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::error::SocieteError;
use crate::types::{with_metadata, CompanyType, ComputationOutput, Money, TaxRegime, VatRegime};
use crate::SocieteResult;

// ---------------------------------------------------------------------------
// Input / Output
// ---------------------------------------------------------------------------

/// Input for the tax simulation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaxSimulationInput {
    /// Annual pre-tax turnover.
    pub turnover: Money,
    /// Annual deductible expenses, excluding officer salary.
    pub expenses: Money,
    /// Gross annual officer salary.
    pub salary: Money,
    pub company_type: CompanyType,
    pub tax_regime: TaxRegime,
    /// Recorded in the assumptions; VAT itself is neutral and not simulated.
    pub vat_regime: VatRegime,
}

/// Per-tax breakdown, each value rounded to the nearest euro.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaxDetails {
    /// Corporate tax. Zero under IR.
    pub is: Money,
    /// Personal income tax proxy. Zero under IS.
    pub ir: Money,
    /// Cotisation foncière des entreprises.
    pub cfe: Money,
    /// Cotisation sur la valeur ajoutée des entreprises.
    pub cvae: Money,
    pub taxe_apprentissage: Money,
    pub formation_professionnelle: Money,
}

/// Output of the tax simulation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaxSimulation {
    /// turnover - expenses - (salary when IS deducts it).
    pub gross_profit: Money,
    /// Sum of the rounded detail values.
    pub total_taxes: Money,
    pub details: TaxDetails,
}

// ---------------------------------------------------------------------------
// Core function
// ---------------------------------------------------------------------------

/// Simulate the annual tax load of the company.
pub fn simulate_taxes(
    input: &TaxSimulationInput,
) -> SocieteResult<ComputationOutput<TaxSimulation>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    validate_tax_input(input)?;

    // Officer salary is deductible from the taxable result only under IS;
    // under IR the whole profit is taxed in the founder's hands.
    let deductible_salary = if input.tax_regime == TaxRegime::Is {
        input.salary
    } else {
        Decimal::ZERO
    };
    let gross_profit = input.turnover - input.expenses - deductible_salary;
    if gross_profit < Decimal::ZERO {
        warnings.push(
            "Résultat projeté négatif : aucun impôt sur le résultat n'est simulé.".to_string(),
        );
    }

    let is = if input.tax_regime == TaxRegime::Is {
        corporate_tax(gross_profit)
    } else {
        Decimal::ZERO
    };

    let ir = if input.tax_regime == TaxRegime::Ir {
        warnings.push(
            "L'IR est approximé à 20 % du résultat, hors barème progressif réel.".to_string(),
        );
        gross_profit.max(Decimal::ZERO) * dec!(0.20)
    } else {
        Decimal::ZERO
    };

    let cfe = (input.turnover * dec!(0.005)).clamp(dec!(200), dec!(1000));

    let cvae = if input.turnover > dec!(500_000) {
        (input.turnover * dec!(0.005)).max(Decimal::ZERO)
    } else {
        Decimal::ZERO
    };

    let (taxe_apprentissage, formation_professionnelle) =
        if input.company_type.is_sole_proprietorship() {
            (Decimal::ZERO, Decimal::ZERO)
        } else {
            (input.salary * dec!(0.0068), input.salary * dec!(0.01))
        };

    let details = TaxDetails {
        is: round_euro(is),
        ir: round_euro(ir),
        cfe: round_euro(cfe),
        cvae: round_euro(cvae),
        taxe_apprentissage: round_euro(taxe_apprentissage),
        formation_professionnelle: round_euro(formation_professionnelle),
    };

    let total_taxes = details.is
        + details.ir
        + details.cfe
        + details.cvae
        + details.taxe_apprentissage
        + details.formation_professionnelle;

    let output = TaxSimulation {
        gross_profit,
        total_taxes,
        details,
    };

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Simplified French company tax simulation: two-bracket IS or flat IR proxy, \
         CFE floor/cap, CVAE above 500 000 € of turnover, payroll levies",
        &serde_json::json!({
            "turnover": input.turnover.to_string(),
            "expenses": input.expenses.to_string(),
            "salary": input.salary.to_string(),
            "company_type": input.company_type.to_string(),
            "tax_regime": input.tax_regime.to_string(),
            "vat_regime": input.vat_regime.to_string(),
        }),
        warnings,
        elapsed,
        output,
    ))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// IS schedule: 15% on the first 42 500 € of profit, 25% beyond.
fn corporate_tax(profit: Money) -> Money {
    if profit <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    let reduced_bracket = dec!(42_500);
    let reduced = profit.min(reduced_bracket) * dec!(0.15);
    let excess = (profit - reduced_bracket).max(Decimal::ZERO) * dec!(0.25);
    reduced + excess
}

/// Nearest euro, halves away from zero as the wizard displays them.
fn round_euro(value: Money) -> Money {
    value.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}

fn validate_tax_input(input: &TaxSimulationInput) -> SocieteResult<()> {
    if input.turnover < Decimal::ZERO {
        return Err(SocieteError::InvalidInput {
            field: "turnover".into(),
            reason: "Turnover cannot be negative".into(),
        });
    }
    if input.expenses < Decimal::ZERO {
        return Err(SocieteError::InvalidInput {
            field: "expenses".into(),
            reason: "Expenses cannot be negative".into(),
        });
    }
    if input.salary < Decimal::ZERO {
        return Err(SocieteError::InvalidInput {
            field: "salary".into(),
            reason: "Salary cannot be negative".into(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn is_input(turnover: Decimal) -> TaxSimulationInput {
        TaxSimulationInput {
            turnover,
            expenses: Decimal::ZERO,
            salary: Decimal::ZERO,
            company_type: CompanyType::Sas,
            tax_regime: TaxRegime::Is,
            vat_regime: VatRegime::Franchise,
        }
    }

    #[test]
    fn test_is_two_bracket_schedule_at_100k() {
        // is = 42 500 * 0.15 + 57 500 * 0.25 = 6 375 + 14 375 = 20 750
        let result = simulate_taxes(&is_input(dec!(100_000))).unwrap();
        let sim = &result.result;
        assert_eq!(sim.details.is, dec!(20_750));
        // cfe = clamp(500, 200, 1000) = 500
        assert_eq!(sim.details.cfe, dec!(500));
        // cvae = 0 below 500 000 of turnover
        assert_eq!(sim.details.cvae, dec!(0));
        assert_eq!(sim.total_taxes, dec!(21_250));
    }

    #[test]
    fn test_is_stays_in_reduced_bracket() {
        // 30 000 * 0.15 = 4 500
        let result = simulate_taxes(&is_input(dec!(30_000))).unwrap();
        assert_eq!(result.result.details.is, dec!(4_500));
    }

    #[test]
    fn test_cfe_floor_and_cap() {
        // 10 000 * 0.005 = 50, floored at 200
        let low = simulate_taxes(&is_input(dec!(10_000))).unwrap();
        assert_eq!(low.result.details.cfe, dec!(200));

        // 600 000 * 0.005 = 3 000, capped at 1 000
        let high = simulate_taxes(&is_input(dec!(600_000))).unwrap();
        assert_eq!(high.result.details.cfe, dec!(1000));
    }

    #[test]
    fn test_cvae_only_above_half_million() {
        let below = simulate_taxes(&is_input(dec!(500_000))).unwrap();
        assert_eq!(below.result.details.cvae, dec!(0));

        // 600 000 * 0.005 = 3 000
        let above = simulate_taxes(&is_input(dec!(600_000))).unwrap();
        assert_eq!(above.result.details.cvae, dec!(3_000));
    }

    #[test]
    fn test_ir_flat_proxy_and_warning() {
        let input = TaxSimulationInput {
            tax_regime: TaxRegime::Ir,
            company_type: CompanyType::Eurl,
            ..is_input(dec!(50_000))
        };
        let result = simulate_taxes(&input).unwrap();
        // 50 000 * 0.20 = 10 000, no IS
        assert_eq!(result.result.details.ir, dec!(10_000));
        assert_eq!(result.result.details.is, dec!(0));
        assert!(result.warnings.iter().any(|w| w.contains("20 %")));
    }

    #[test]
    fn test_salary_deductible_under_is_only() {
        let mut input = is_input(dec!(100_000));
        input.salary = dec!(40_000);
        let under_is = simulate_taxes(&input).unwrap();
        assert_eq!(under_is.result.gross_profit, dec!(60_000));

        input.tax_regime = TaxRegime::Ir;
        input.company_type = CompanyType::Eurl;
        let under_ir = simulate_taxes(&input).unwrap();
        assert_eq!(under_ir.result.gross_profit, dec!(100_000));
    }

    #[test]
    fn test_payroll_levies_and_ei_exemption() {
        let mut input = is_input(dec!(80_000));
        input.salary = dec!(30_000);
        let result = simulate_taxes(&input).unwrap();
        // 30 000 * 0.0068 = 204 ; 30 000 * 0.01 = 300
        assert_eq!(result.result.details.taxe_apprentissage, dec!(204));
        assert_eq!(result.result.details.formation_professionnelle, dec!(300));

        input.company_type = CompanyType::Ei;
        input.tax_regime = TaxRegime::Ir;
        let exempt = simulate_taxes(&input).unwrap();
        assert_eq!(exempt.result.details.taxe_apprentissage, dec!(0));
        assert_eq!(exempt.result.details.formation_professionnelle, dec!(0));
    }

    #[test]
    fn test_loss_yields_no_profit_tax() {
        let mut input = is_input(dec!(20_000));
        input.expenses = dec!(35_000);
        let result = simulate_taxes(&input).unwrap();
        assert_eq!(result.result.gross_profit, dec!(-15_000));
        assert_eq!(result.result.details.is, dec!(0));
        assert!(result.warnings.iter().any(|w| w.contains("négatif")));
    }

    #[test]
    fn test_total_is_sum_of_rounded_details() {
        let mut input = is_input(dec!(123_456));
        input.salary = dec!(17_891);
        input.expenses = dec!(23_171);
        let result = simulate_taxes(&input).unwrap();
        let d = &result.result.details;
        let expected = d.is + d.ir + d.cfe + d.cvae + d.taxe_apprentissage
            + d.formation_professionnelle;
        assert_eq!(result.result.total_taxes, expected);
        // Every detail is a whole number of euros
        for value in [d.is, d.ir, d.cfe, d.cvae, d.taxe_apprentissage] {
            assert_eq!(value, value.trunc(), "detail {} not rounded", value);
        }
    }

    #[test]
    fn test_negative_turnover_rejected() {
        let err = simulate_taxes(&is_input(dec!(-1))).unwrap_err();
        assert!(matches!(err, SocieteError::InvalidInput { .. }));
    }
}
