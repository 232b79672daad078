//! Static catalog of French regulatory thresholds.
//!
//! Covers:
//! 1. **TVA** -- franchise en base and réel simplifié ceilings.
//! 2. **MICRO** -- micro-BNC / micro-BIC turnover ceilings.
//! 3. **SOCIAL** -- plafond annuel de la sécurité sociale.
//! 4. **COMPTABLE** -- simplified accounts and commissaire-aux-comptes triggers.
//! 5. **EMPLOI** -- headcount triggers (CSE, obligation d'emploi, règlement intérieur).
//!
//! Values are the 2024 campaign figures. The catalog is loaded once and never
//! mutated; callers may also deserialize their own catalog from JSON and pass
//! it to the evaluator instead.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

use crate::error::SocieteError;
use crate::types::{ActivityCategory, CompanyType, Rate, SocialRegime, TaxRegime, VatRegime};
use crate::SocieteResult;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Regulatory threshold families. The family decides which profile value is
/// compared against the threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ThresholdCategory {
    #[serde(rename = "TVA")]
    Tva,
    #[serde(rename = "MICRO")]
    Micro,
    #[serde(rename = "SOCIAL")]
    Social,
    #[serde(rename = "COMPTABLE")]
    Comptable,
    #[serde(rename = "EMPLOI")]
    Emploi,
}

/// One regulatory threshold with its applicability filters.
///
/// An absent filter always matches; a present filter requires an exact match
/// against the profile. Text fields are passed through to alerts untouched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThresholdDefinition {
    pub id: String,
    pub category: ThresholdCategory,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_types: Option<Vec<CompanyType>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub activities: Option<Vec<ActivityCategory>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tax_regime: Option<TaxRegime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vat_regime: Option<VatRegime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub social_regime: Option<SocialRegime>,
    /// Currency amount or headcount, depending on the category.
    pub threshold: Decimal,
    /// Fraction of `threshold` above which a warning fires. In (0, 1].
    pub warning_ratio: Rate,
    /// Fraction of `threshold` above which the alert turns critical.
    /// Invariant: `warning_ratio <= critical_ratio <= 1`.
    pub critical_ratio: Rate,
    pub title: String,
    pub message: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

/// The full threshold table, one ordered list per category.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ThresholdCatalog {
    #[serde(rename = "TVA")]
    pub tva: Vec<ThresholdDefinition>,
    #[serde(rename = "MICRO")]
    pub micro: Vec<ThresholdDefinition>,
    #[serde(rename = "SOCIAL")]
    pub social: Vec<ThresholdDefinition>,
    #[serde(rename = "COMPTABLE")]
    pub comptable: Vec<ThresholdDefinition>,
    #[serde(rename = "EMPLOI")]
    pub emploi: Vec<ThresholdDefinition>,
}

impl ThresholdCatalog {
    /// The built-in 2024 table. Initialized on first use, immutable afterwards.
    pub fn builtin() -> &'static ThresholdCatalog {
        static CATALOG: OnceLock<ThresholdCatalog> = OnceLock::new();
        CATALOG.get_or_init(build_builtin)
    }

    /// All entries, in category order then declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &ThresholdDefinition> {
        self.tva
            .iter()
            .chain(self.micro.iter())
            .chain(self.social.iter())
            .chain(self.comptable.iter())
            .chain(self.emploi.iter())
    }

    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }

    /// Authoring check for externally loaded catalogs. The evaluator itself
    /// silently skips malformed entries; this surfaces them instead.
    pub fn validate(&self) -> SocieteResult<()> {
        for def in self.iter() {
            if def.threshold <= Decimal::ZERO {
                return Err(SocieteError::MalformedCatalogEntry {
                    id: def.id.clone(),
                    reason: format!("threshold must be positive, got {}", def.threshold),
                });
            }
            if def.warning_ratio <= Decimal::ZERO || def.warning_ratio > Decimal::ONE {
                return Err(SocieteError::MalformedCatalogEntry {
                    id: def.id.clone(),
                    reason: format!("warning_ratio must be in (0, 1], got {}", def.warning_ratio),
                });
            }
            if def.critical_ratio < def.warning_ratio || def.critical_ratio > Decimal::ONE {
                return Err(SocieteError::MalformedCatalogEntry {
                    id: def.id.clone(),
                    reason: format!(
                        "critical_ratio must be in [warning_ratio, 1], got {}",
                        def.critical_ratio
                    ),
                });
            }
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Built-in table
// ---------------------------------------------------------------------------

/// Unfiltered entry; filters are added by struct update at the call site.
fn entry(
    id: &str,
    category: ThresholdCategory,
    threshold: Decimal,
    warning_ratio: Rate,
    critical_ratio: Rate,
    title: &str,
    message: &str,
    description: &str,
    link: &str,
) -> ThresholdDefinition {
    ThresholdDefinition {
        id: id.to_string(),
        category,
        company_types: None,
        activities: None,
        tax_regime: None,
        vat_regime: None,
        social_regime: None,
        threshold,
        warning_ratio,
        critical_ratio,
        title: title.to_string(),
        message: message.to_string(),
        description: description.to_string(),
        link: Some(link.to_string()),
    }
}

/// Bare entry with placeholder text, shared by unit tests across the module.
#[cfg(test)]
pub(crate) fn entry_for_tests(
    id: &str,
    category: ThresholdCategory,
    threshold: Decimal,
    warning_ratio: Rate,
    critical_ratio: Rate,
) -> ThresholdDefinition {
    entry(
        id,
        category,
        threshold,
        warning_ratio,
        critical_ratio,
        "Titre",
        "Message d'alerte.",
        "Description détaillée.",
        "https://entreprendre.service-public.fr/vosdroits",
    )
}

fn build_builtin() -> ThresholdCatalog {
    use ActivityCategory::*;
    use ThresholdCategory::*;

    ThresholdCatalog {
        tva: vec![
            ThresholdDefinition {
                activities: Some(vec![Service, Liberal, Artisanat]),
                vat_regime: Some(VatRegime::Franchise),
                ..entry(
                    "tva-franchise-services",
                    Tva,
                    dec!(34_400),
                    dec!(0.85),
                    dec!(1),
                    "Franchise en base de TVA (services)",
                    "Votre chiffre d'affaires approche du plafond de la franchise en base de TVA.",
                    "Au-delà de 34 400 € de chiffre d'affaires annuel, un prestataire de services \
                     perd le bénéfice de la franchise en base et doit facturer la TVA dès le \
                     premier jour du mois de dépassement.",
                    "https://entreprendre.service-public.fr/vosdroits/F21746",
                )
            },
            ThresholdDefinition {
                activities: Some(vec![Commerce]),
                vat_regime: Some(VatRegime::Franchise),
                ..entry(
                    "tva-franchise-commerce",
                    Tva,
                    dec!(85_800),
                    dec!(0.85),
                    dec!(1),
                    "Franchise en base de TVA (commerce)",
                    "Votre chiffre d'affaires approche du plafond de la franchise en base de TVA.",
                    "Au-delà de 85 800 € de chiffre d'affaires annuel, une activité d'achat-revente \
                     perd le bénéfice de la franchise en base de TVA.",
                    "https://entreprendre.service-public.fr/vosdroits/F21746",
                )
            },
            ThresholdDefinition {
                activities: Some(vec![Service, Liberal, Artisanat]),
                vat_regime: Some(VatRegime::RealSimplified),
                ..entry(
                    "tva-reel-simplifie-services",
                    Tva,
                    dec!(247_000),
                    dec!(0.9),
                    dec!(1),
                    "Plafond du régime réel simplifié (services)",
                    "Votre chiffre d'affaires approche du plafond du régime réel simplifié de TVA.",
                    "Au-delà de 247 000 € de chiffre d'affaires, le régime réel normal devient \
                     obligatoire : déclarations de TVA mensuelles au lieu d'acomptes semestriels.",
                    "https://entreprendre.service-public.fr/vosdroits/F23566",
                )
            },
            ThresholdDefinition {
                activities: Some(vec![Commerce]),
                vat_regime: Some(VatRegime::RealSimplified),
                ..entry(
                    "tva-reel-simplifie-commerce",
                    Tva,
                    dec!(818_000),
                    dec!(0.9),
                    dec!(1),
                    "Plafond du régime réel simplifié (commerce)",
                    "Votre chiffre d'affaires approche du plafond du régime réel simplifié de TVA.",
                    "Au-delà de 818 000 € de chiffre d'affaires, une activité d'achat-revente \
                     bascule obligatoirement au régime réel normal de TVA.",
                    "https://entreprendre.service-public.fr/vosdroits/F23566",
                )
            },
        ],
        micro: vec![
            ThresholdDefinition {
                activities: Some(vec![Service, Liberal]),
                tax_regime: Some(TaxRegime::Ir),
                ..entry(
                    "micro-bnc",
                    Micro,
                    dec!(77_700),
                    dec!(0.9),
                    dec!(1),
                    "Plafond du régime micro-BNC",
                    "Votre chiffre d'affaires approche du plafond du régime micro.",
                    "Au-delà de 77 700 € de recettes annuelles, le régime micro-BNC n'est plus \
                     accessible : passage à la déclaration contrôlée.",
                    "https://entreprendre.service-public.fr/vosdroits/F32353",
                )
            },
            ThresholdDefinition {
                activities: Some(vec![Commerce, Artisanat]),
                tax_regime: Some(TaxRegime::Ir),
                ..entry(
                    "micro-bic",
                    Micro,
                    dec!(188_700),
                    dec!(0.9),
                    dec!(1),
                    "Plafond du régime micro-BIC",
                    "Votre chiffre d'affaires approche du plafond du régime micro.",
                    "Au-delà de 188 700 € de chiffre d'affaires annuel, le régime micro-BIC n'est \
                     plus accessible : passage au régime réel d'imposition.",
                    "https://entreprendre.service-public.fr/vosdroits/F32353",
                )
            },
        ],
        social: vec![ThresholdDefinition {
            social_regime: Some(SocialRegime::Tns),
            ..entry(
                "plafond-securite-sociale",
                Social,
                dec!(46_368),
                dec!(0.9),
                dec!(1),
                "Plafond annuel de la sécurité sociale",
                "Vos revenus approchent du plafond annuel de la sécurité sociale.",
                "Au-delà du PASS (46 368 € en 2024), certaines cotisations TNS changent \
                 d'assiette et les régularisations de cotisations provisionnelles augmentent.",
                "https://www.urssaf.fr/portail/home/taux-et-baremes.html",
            )
        }],
        comptable: vec![
            entry(
                "presentation-simplifiee",
                Comptable,
                dec!(350_000),
                dec!(0.8),
                dec!(1),
                "Présentation simplifiée des comptes annuels",
                "Votre total de bilan approche du seuil de la présentation simplifiée.",
                "Au-delà de 350 000 € de total de bilan, la société perd le droit de \
                 présenter des comptes annuels simplifiés.",
                "https://entreprendre.service-public.fr/vosdroits/F36442",
            ),
            entry(
                "commissaire-aux-comptes",
                Comptable,
                dec!(4_000_000),
                dec!(0.75),
                dec!(1),
                "Désignation d'un commissaire aux comptes",
                "Votre total de bilan approche du seuil de désignation obligatoire d'un \
                 commissaire aux comptes.",
                "Une société qui dépasse 4 000 000 € de total de bilan (parmi d'autres \
                 critères) doit désigner un commissaire aux comptes pour certifier ses \
                 comptes annuels.",
                "https://entreprendre.service-public.fr/vosdroits/F31214",
            ),
        ],
        emploi: vec![
            entry(
                "cse",
                Emploi,
                dec!(11),
                dec!(0.91),
                dec!(1),
                "Mise en place du CSE",
                "Votre effectif approche du seuil de mise en place du comité social et \
                 économique.",
                "À partir de 11 salariés pendant 12 mois consécutifs, la mise en place d'un \
                 comité social et économique (CSE) est obligatoire.",
                "https://entreprendre.service-public.fr/vosdroits/F34474",
            ),
            entry(
                "obligation-emploi-th",
                Emploi,
                dec!(20),
                dec!(0.9),
                dec!(1),
                "Obligation d'emploi de travailleurs handicapés",
                "Votre effectif approche du seuil de l'obligation d'emploi de travailleurs \
                 handicapés.",
                "À partir de 20 salariés, l'entreprise doit employer des travailleurs \
                 handicapés à hauteur de 6 % de son effectif ou verser une contribution \
                 à l'Agefiph.",
                "https://entreprendre.service-public.fr/vosdroits/F22523",
            ),
            entry(
                "reglement-interieur",
                Emploi,
                dec!(50),
                dec!(0.9),
                dec!(1),
                "Règlement intérieur obligatoire",
                "Votre effectif approche du seuil du règlement intérieur obligatoire.",
                "À partir de 50 salariés, l'établissement doit se doter d'un règlement \
                 intérieur écrit fixant les règles de discipline, d'hygiène et de sécurité.",
                "https://entreprendre.service-public.fr/vosdroits/F1905",
            ),
        ],
    }
}
