//! Tax, VAT and social regime recommendation.
//!
//! Each recommendation distinguishes a legal obligation (`is_forced = true`)
//! from a mere suggestion, and carries the sentence the wizard displays.
//! The functions are total: unknown company types fall through to the
//! non-forced default branches.

use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::types::{
    ActivityCategory, CompanyType, Money, SocialRegime, TaxRegime, VatPeriodicity, VatRegime,
};

/// Turnover above which IS is suggested even without a structural reason.
const IS_SUGGESTION_TURNOVER: Money = dec!(80_000);

/// Ceiling of the réel simplifié VAT regime.
const REAL_SIMPLIFIED_CEILING: Money = dec!(247_000);

/// Franchise en base ceiling for commercial activities.
const FRANCHISE_CEILING_COMMERCE: Money = dec!(85_800);

/// Franchise en base ceiling for services and everything else.
const FRANCHISE_CEILING_SERVICES: Money = dec!(34_400);

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// A recommended regime, flagged as forced when the law leaves no choice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegimeAdvice<T> {
    pub value: T,
    pub is_forced: bool,
    pub explanation: String,
}

/// VAT advice also fixes the declaration periodicity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VatAdvice {
    pub regime: VatRegime,
    pub periodicity: VatPeriodicity,
    pub is_forced: bool,
    pub explanation: String,
}

// ---------------------------------------------------------------------------
// Recommenders
// ---------------------------------------------------------------------------

/// Recommend IS or IR.
///
/// SAS, SASU and SA have no choice: IS, forced. Otherwise IS is suggested
/// above 80 000 € of turnover, with multiple partners or with a majority
/// shareholder; the remaining simple solo projects are better off at the IR.
pub fn recommend_tax_regime(
    company_type: &CompanyType,
    has_multiple_partners: bool,
    has_majority_shareholder: bool,
    turnover: Money,
) -> RegimeAdvice<TaxRegime> {
    if company_type.is_capital_company() {
        return RegimeAdvice {
            value: TaxRegime::Is,
            is_forced: true,
            explanation: "Les SAS, SASU et SA relèvent obligatoirement de l'impôt sur les \
                          sociétés."
                .to_string(),
        };
    }

    if turnover > IS_SUGGESTION_TURNOVER || has_multiple_partners || has_majority_shareholder {
        return RegimeAdvice {
            value: TaxRegime::Is,
            is_forced: false,
            explanation: "L'IS permet de lisser l'imposition d'un résultat conséquent et de \
                          distinguer la rémunération des dividendes."
                .to_string(),
        };
    }

    RegimeAdvice {
        value: TaxRegime::Ir,
        is_forced: false,
        explanation: "Pour un projet individuel de taille modérée, l'IR évite la double \
                      déclaration et reste le régime le plus simple."
            .to_string(),
    }
}

/// Recommend a VAT regime and its periodicity.
///
/// The franchise ceiling depends on the activity: 85 800 € for commercial
/// activities, 34 400 € for everything else. Above 247 000 € the réel normal
/// is a legal obligation.
pub fn recommend_vat_regime(activity: ActivityCategory, turnover: Money) -> VatAdvice {
    let franchise_ceiling = if activity == ActivityCategory::Commerce {
        FRANCHISE_CEILING_COMMERCE
    } else {
        FRANCHISE_CEILING_SERVICES
    };

    if turnover <= franchise_ceiling {
        return VatAdvice {
            regime: VatRegime::Franchise,
            periodicity: VatPeriodicity::Monthly,
            is_forced: false,
            explanation: "Sous le plafond de la franchise en base : pas de TVA à facturer \
                          ni à déclarer."
                .to_string(),
        };
    }

    if turnover <= REAL_SIMPLIFIED_CEILING {
        return VatAdvice {
            regime: VatRegime::RealSimplified,
            periodicity: VatPeriodicity::Quarterly,
            is_forced: false,
            explanation: "Le réel simplifié limite les obligations à des acomptes et une \
                          déclaration annuelle de régularisation."
                .to_string(),
        };
    }

    VatAdvice {
        regime: VatRegime::RealNormal,
        periodicity: VatPeriodicity::Monthly,
        is_forced: true,
        explanation: "Au-delà de 247 000 € de chiffre d'affaires, le régime réel normal est \
                      une obligation légale : déclarations de TVA mensuelles."
            .to_string(),
    }
}

/// Recommend TNS or assimilé-salarié.
///
/// Forced to assimilé for a capital company whose president holds the
/// majority; every other combination, including unknown forms, defaults to
/// TNS, non-forced.
pub fn recommend_social_regime(
    company_type: &CompanyType,
    has_majority_shareholder: bool,
) -> RegimeAdvice<SocialRegime> {
    if company_type.is_capital_company() && has_majority_shareholder {
        return RegimeAdvice {
            value: SocialRegime::Assimile,
            is_forced: true,
            explanation: "Le dirigeant majoritaire d'une SAS, SASU ou SA est assimilé \
                          salarié et relève du régime général."
                .to_string(),
        };
    }

    RegimeAdvice {
        value: SocialRegime::Tns,
        is_forced: false,
        explanation: "Le statut de travailleur non salarié réduit le coût des cotisations \
                      en contrepartie d'une protection sociale plus légère."
            .to_string(),
    }
}
