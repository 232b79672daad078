//! Aggregate recommendation builder.
//!
//! Composes the legal-form, regime and domiciliation recommenders into the
//! single object the wizard renders after pre-qualification. Never fails:
//! when the profile cannot be analysed, a documented default recommendation
//! is returned with the fallback reason instead of an error, so a broken
//! recommendation can never crash the wizard.

use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::advisor::activity::{domiciliation_for, DomiciliationAdvice};
use crate::advisor::legal_form::{recommend_legal_form, LegalFormRecommendation};
use crate::advisor::regimes::{
    recommend_social_regime, recommend_tax_regime, recommend_vat_regime, RegimeAdvice, VatAdvice,
};
use crate::error::SocieteError;
use crate::types::{
    ActivityCategory, CompanyProfile, CompanyType, CurrentSituation, EmployeeHiring,
    FundingSource, HeadquartersType, PatrimoineProtection, SocialRegime, TaxRegime,
    VatPeriodicity, VatRegime,
};
use crate::SocieteResult;

/// Fallback explanation, surfaced verbatim by the wizard so the user knows
/// the recommendation is not personalized.
pub const DEFAULT_REGIME_NOTICE: &str =
    "Régime par défaut — une erreur est survenue pendant l'analyse";

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Tax and VAT advice bundled for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FiscalAdvice {
    pub regime: RegimeAdvice<TaxRegime>,
    pub tva: VatAdvice,
}

/// Complementary services the wizard can upsell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdditionalService {
    Acre,
    Comptabilite,
    CompteBancaire,
    Paie,
    ProtectionJuridique,
}

/// A suggested service with its trigger, in display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceSuggestion {
    pub service: AdditionalService,
    pub reason: String,
}

/// The complete recommendation, an immutable snapshot recomputed on every
/// profile change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    pub company_form: LegalFormRecommendation,
    pub partners: u32,
    pub activity: ActivityCategory,
    pub domiciliation: DomiciliationAdvice,
    pub fiscal: FiscalAdvice,
    pub social: RegimeAdvice<SocialRegime>,
    pub patrimoine_protection_label: String,
    pub key_benefits: Vec<String>,
    pub additional_services: Vec<ServiceSuggestion>,
}

/// Outcome of the builder. The fallback path is part of the type, not an
/// exception: callers always get a renderable recommendation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum RecommendationOutcome {
    Personalized { recommendation: Recommendation },
    Fallback { recommendation: Recommendation, reason: String },
}

impl RecommendationOutcome {
    pub fn recommendation(&self) -> &Recommendation {
        match self {
            RecommendationOutcome::Personalized { recommendation }
            | RecommendationOutcome::Fallback { recommendation, .. } => recommendation,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, RecommendationOutcome::Fallback { .. })
    }
}

// ---------------------------------------------------------------------------
// Builder
// ---------------------------------------------------------------------------

/// Build the aggregate recommendation for a profile.
pub fn build_recommendation(profile: &CompanyProfile) -> RecommendationOutcome {
    match try_build(profile) {
        Ok(recommendation) => RecommendationOutcome::Personalized { recommendation },
        Err(e) => RecommendationOutcome::Fallback {
            recommendation: default_recommendation(profile),
            reason: format!("{} ({})", DEFAULT_REGIME_NOTICE, e),
        },
    }
}

fn try_build(profile: &CompanyProfile) -> SocieteResult<Recommendation> {
    if profile.partners_count == 0 {
        return Err(SocieteError::InvalidInput {
            field: "partners_count".into(),
            reason: "A company needs at least one partner".into(),
        });
    }

    let is_alone = profile.is_alone_founder();
    let has_employees = profile.plans_hiring();

    let company_form = recommend_legal_form(
        is_alone,
        profile.patrimoine_protection,
        profile.estimated_turnover,
        has_employees,
    );

    // Regimes follow the recommended form, not any form the founder may have
    // pre-selected: the wizard presents them as one coherent package.
    let tax = recommend_tax_regime(
        &company_form.form,
        profile.has_multiple_partners(),
        profile.has_majority_shareholder,
        profile.estimated_turnover,
    );
    let tva = recommend_vat_regime(profile.activity_category, profile.estimated_turnover);
    let social = recommend_social_regime(&company_form.form, profile.has_majority_shareholder);

    let domiciliation = domiciliation_for(profile.activity_category);
    let fiscal = FiscalAdvice { regime: tax, tva };

    let key_benefits = key_benefits(&company_form.form, &fiscal, &social, profile);
    let additional_services = additional_services(profile);

    Ok(Recommendation {
        company_form,
        partners: profile.partners_count,
        activity: profile.activity_category,
        domiciliation,
        fiscal,
        social,
        patrimoine_protection_label: protection_label(profile.patrimoine_protection),
        key_benefits,
        additional_services,
    })
}

/// The documented safe default: SARL-family form, IR, franchise de TVA, TNS.
fn default_recommendation(profile: &CompanyProfile) -> Recommendation {
    let form = if profile.partners_count <= 1 {
        CompanyType::Eurl
    } else {
        CompanyType::Sarl
    };
    Recommendation {
        company_form: LegalFormRecommendation {
            form,
            rationale: DEFAULT_REGIME_NOTICE.to_string(),
        },
        partners: profile.partners_count.max(1),
        activity: profile.activity_category,
        domiciliation: DomiciliationAdvice {
            recommended: HeadquartersType::Koulier,
            reasons: vec![
                "Domiciliation recommandée par défaut, à affiner avec un conseiller.".to_string(),
            ],
        },
        fiscal: FiscalAdvice {
            regime: RegimeAdvice {
                value: TaxRegime::Ir,
                is_forced: false,
                explanation: DEFAULT_REGIME_NOTICE.to_string(),
            },
            tva: VatAdvice {
                regime: VatRegime::Franchise,
                periodicity: VatPeriodicity::Monthly,
                is_forced: false,
                explanation: DEFAULT_REGIME_NOTICE.to_string(),
            },
        },
        social: RegimeAdvice {
            value: SocialRegime::Tns,
            is_forced: false,
            explanation: DEFAULT_REGIME_NOTICE.to_string(),
        },
        patrimoine_protection_label: protection_label(profile.patrimoine_protection),
        key_benefits: Vec::new(),
        additional_services: Vec::new(),
    }
}

// ---------------------------------------------------------------------------
// Benefit and service assembly
// ---------------------------------------------------------------------------

/// Ordered benefit list. The check order is fixed: legal form, then tax,
/// then social, then funding source, then hiring.
fn key_benefits(
    form: &CompanyType,
    fiscal: &FiscalAdvice,
    social: &RegimeAdvice<SocialRegime>,
    profile: &CompanyProfile,
) -> Vec<String> {
    let mut benefits = Vec::new();

    // Legal form
    match form {
        CompanyType::Sas | CompanyType::Sasu => {
            benefits.push(
                "Responsabilité limitée aux apports : votre patrimoine personnel est protégé."
                    .to_string(),
            );
            benefits.push(
                "Statuts librement rédigés : gouvernance et clauses d'entrée sur mesure."
                    .to_string(),
            );
        }
        CompanyType::Sarl | CompanyType::Eurl => {
            benefits.push(
                "Cadre juridique encadré par la loi, simple et rassurant au quotidien."
                    .to_string(),
            );
        }
        _ => {}
    }

    // Tax
    if fiscal.regime.value == TaxRegime::Is && profile.estimated_turnover > dec!(85_000) {
        benefits.push(
            "L'IS plafonne l'imposition d'un chiffre d'affaires élevé et facilite le \
             réinvestissement des bénéfices."
                .to_string(),
        );
    }
    if fiscal.regime.value == TaxRegime::Ir {
        benefits.push(
            "Imposition directe entre vos mains : pas de double déclaration fiscale."
                .to_string(),
        );
    }
    if fiscal.tva.regime == VatRegime::Franchise {
        benefits.push(
            "Franchise en base de TVA : facturation hors taxe et comptabilité allégée."
                .to_string(),
        );
    }

    // Social
    if social.value == SocialRegime::Assimile {
        benefits.push(
            "Statut assimilé salarié : protection sociale alignée sur le régime général."
                .to_string(),
        );
    } else {
        benefits.push(
            "Statut TNS : cotisations sociales réduites sur la rémunération du dirigeant."
                .to_string(),
        );
    }

    // Funding source
    match profile.funding_source {
        FundingSource::Investors => benefits.push(
            "Capital en actions : l'entrée d'investisseurs et les BSPCE sont facilités."
                .to_string(),
        ),
        FundingSource::Bank => benefits.push(
            "Structure et statuts reconnus par les banques pour un financement à la création."
                .to_string(),
        ),
        FundingSource::Personal => {}
    }

    // Hiring
    if profile.employee_hiring != EmployeeHiring::None {
        benefits.push(
            "Forme sociale adaptée à l'embauche et à la délégation de la gestion courante."
                .to_string(),
        );
    }

    benefits
}

/// Ordered service suggestions. Conditions are independent; the list
/// accumulates in this fixed order.
fn additional_services(profile: &CompanyProfile) -> Vec<ServiceSuggestion> {
    let mut services = Vec::new();

    if profile.current_situation == CurrentSituation::Unemployed {
        services.push(ServiceSuggestion {
            service: AdditionalService::Acre,
            reason: "Demandeur d'emploi : l'ACRE exonère partiellement vos cotisations la \
                     première année."
                .to_string(),
        });
    }
    if profile.estimated_turnover > dec!(35_000) {
        services.push(ServiceSuggestion {
            service: AdditionalService::Comptabilite,
            reason: "Au-delà de 35 000 € de chiffre d'affaires, un expert-comptable devient \
                     vite rentable."
                .to_string(),
        });
    }
    if profile.funding_source == FundingSource::Bank {
        services.push(ServiceSuggestion {
            service: AdditionalService::CompteBancaire,
            reason: "Un compte professionnel est indispensable au dépôt du capital et au \
                     financement bancaire."
                .to_string(),
        });
    }
    if profile.employee_hiring == EmployeeHiring::Immediate {
        services.push(ServiceSuggestion {
            service: AdditionalService::Paie,
            reason: "Embauche immédiate : externalisez bulletins de paie et déclarations \
                     sociales."
                .to_string(),
        });
    }
    if profile.patrimoine_protection == PatrimoineProtection::High {
        services.push(ServiceSuggestion {
            service: AdditionalService::ProtectionJuridique,
            reason: "Une assurance protection juridique complète la séparation des \
                     patrimoines."
                .to_string(),
        });
    }

    services
}

fn protection_label(protection: PatrimoineProtection) -> String {
    match protection {
        PatrimoineProtection::High => {
            "Protection maximale du patrimoine personnel".to_string()
        }
        PatrimoineProtection::Medium => {
            "Protection standard du patrimoine personnel".to_string()
        }
        PatrimoineProtection::Low => "Protection de base du patrimoine personnel".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn solo_consultant() -> CompanyProfile {
        CompanyProfile {
            partners_count: 1,
            activity_category: ActivityCategory::Service,
            estimated_turnover: dec!(90_000),
            patrimoine_protection: PatrimoineProtection::High,
            funding_source: FundingSource::Bank,
            employee_hiring: EmployeeHiring::Immediate,
            current_situation: CurrentSituation::Unemployed,
            has_majority_shareholder: true,
            ..CompanyProfile::default()
        }
    }

    #[test]
    fn test_personalized_solo_high_protection() {
        let outcome = build_recommendation(&solo_consultant());
        assert!(!outcome.is_fallback());

        let rec = outcome.recommendation();
        assert_eq!(rec.company_form.form, CompanyType::Sasu);
        // SASU forces IS and, with a majority president, assimilé
        assert_eq!(rec.fiscal.regime.value, TaxRegime::Is);
        assert!(rec.fiscal.regime.is_forced);
        assert_eq!(rec.social.value, SocialRegime::Assimile);
        assert!(rec.social.is_forced);
        // 90 000 of services is past franchise, below 247 000
        assert_eq!(rec.fiscal.tva.regime, VatRegime::RealSimplified);
        assert_eq!(rec.domiciliation.recommended, HeadquartersType::Koulier);
    }

    #[test]
    fn test_fallback_on_zero_partners() {
        let profile = CompanyProfile {
            partners_count: 0,
            ..CompanyProfile::default()
        };
        let outcome = build_recommendation(&profile);
        assert!(outcome.is_fallback());

        match &outcome {
            RecommendationOutcome::Fallback { recommendation, reason } => {
                assert!(reason.starts_with(DEFAULT_REGIME_NOTICE));
                assert_eq!(recommendation.fiscal.regime.value, TaxRegime::Ir);
                assert_eq!(recommendation.fiscal.tva.regime, VatRegime::Franchise);
                assert_eq!(recommendation.social.value, SocialRegime::Tns);
                assert!(recommendation.key_benefits.is_empty());
            }
            RecommendationOutcome::Personalized { .. } => unreachable!(),
        }
    }

    #[test]
    fn test_additional_services_order_and_triggers() {
        let outcome = build_recommendation(&solo_consultant());
        let services: Vec<AdditionalService> = outcome
            .recommendation()
            .additional_services
            .iter()
            .map(|s| s.service)
            .collect();
        // All five conditions fire for this profile, in the fixed order
        assert_eq!(
            services,
            vec![
                AdditionalService::Acre,
                AdditionalService::Comptabilite,
                AdditionalService::CompteBancaire,
                AdditionalService::Paie,
                AdditionalService::ProtectionJuridique,
            ]
        );
    }

    #[test]
    fn test_no_services_for_quiet_profile() {
        let profile = CompanyProfile {
            estimated_turnover: dec!(20_000),
            ..CompanyProfile::default()
        };
        let outcome = build_recommendation(&profile);
        assert!(outcome.recommendation().additional_services.is_empty());
    }

    #[test]
    fn test_benefit_order_starts_with_legal_form() {
        let outcome = build_recommendation(&solo_consultant());
        let benefits = &outcome.recommendation().key_benefits;
        assert!(benefits[0].contains("Responsabilité limitée"));
        // High-revenue IS benefit appears after the legal-form entries
        assert!(benefits.iter().any(|b| b.contains("IS")));
        // TNS benefit must not appear for an assimilé recommendation
        assert!(!benefits.iter().any(|b| b.contains("Statut TNS")));
    }

    #[test]
    fn test_sarl_profile_gets_tns_and_franchise_benefits() {
        let profile = CompanyProfile {
            partners_count: 3,
            estimated_turnover: dec!(30_000),
            activity_category: ActivityCategory::Commerce,
            ..CompanyProfile::default()
        };
        let outcome = build_recommendation(&profile);
        let rec = outcome.recommendation();
        assert_eq!(rec.company_form.form, CompanyType::Sarl);
        assert_eq!(rec.fiscal.tva.regime, VatRegime::Franchise);
        assert_eq!(rec.domiciliation.recommended, HeadquartersType::Commercial);
        assert!(rec.key_benefits.iter().any(|b| b.contains("Franchise en base")));
        assert!(rec.key_benefits.iter().any(|b| b.contains("Statut TNS")));
    }

    #[test]
    fn test_idempotent() {
        let profile = solo_consultant();
        assert_eq!(
            build_recommendation(&profile),
            build_recommendation(&profile)
        );
    }
}
