//! Legal-form recommendation.
//!
//! A fixed decision table over four profile facts: solo vs. multiple
//! founders, desired asset protection, projected turnover, hiring plans.
//! High protection or high turnover/employee exposure steers toward the SAS
//! family; otherwise the simpler EURL/SARL family is chosen. This mirrors
//! common incorporation practice, not legal advice.

use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::types::{CompanyType, Money, PatrimoineProtection};

/// Turnover above which the exposure of the project favors the SAS family.
const EXPOSURE_TURNOVER: Money = dec!(85_000);

/// A recommended legal form with the sentence the wizard displays.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegalFormRecommendation {
    pub form: CompanyType,
    pub rationale: String,
}

/// Recommend a legal form.
///
/// The table is evaluated in priority order; the first matching row wins:
///
/// | alone | protection high | turnover > 85 000 or hiring | form |
/// |-------|-----------------|-----------------------------|------|
/// | yes   | yes             | any                         | SASU |
/// | yes   | no              | yes                         | SASU |
/// | yes   | no              | no                          | EURL |
/// | no    | yes             | any                         | SAS  |
/// | no    | no              | yes                         | SAS  |
/// | no    | no              | no                          | SARL |
pub fn recommend_legal_form(
    is_alone: bool,
    patrimoine_protection: PatrimoineProtection,
    projected_turnover: Money,
    has_employees: bool,
) -> LegalFormRecommendation {
    let wants_high_protection = patrimoine_protection == PatrimoineProtection::High;
    let exposed = projected_turnover > EXPOSURE_TURNOVER || has_employees;

    let (form, rationale) = match (is_alone, wants_high_protection, exposed) {
        (true, true, _) => (
            CompanyType::Sasu,
            "La SASU sépare totalement votre patrimoine personnel de celui de la société \
             et vous donne le statut d'assimilé salarié.",
        ),
        (true, false, true) => (
            CompanyType::Sasu,
            "Avec un chiffre d'affaires élevé ou des embauches prévues, la SASU offre la \
             souplesse statutaire et la couverture sociale adaptées à la croissance.",
        ),
        (true, false, false) => (
            CompanyType::Eurl,
            "Pour un projet individuel de taille modérée, l'EURL reste la forme la plus \
             simple et la moins coûteuse à faire vivre.",
        ),
        (false, true, _) => (
            CompanyType::Sas,
            "La SAS protège le patrimoine de chaque associé à hauteur de son apport et \
             permet d'organiser librement la gouvernance.",
        ),
        (false, false, true) => (
            CompanyType::Sas,
            "À plusieurs associés avec un volume d'activité important, la SAS facilite \
             l'entrée de nouveaux associés et l'embauche.",
        ),
        (false, false, false) => (
            CompanyType::Sarl,
            "À plusieurs associés sur un projet de taille modérée, la SARL offre un cadre \
             légal éprouvé et rassurant.",
        ),
    };

    LegalFormRecommendation {
        form,
        rationale: rationale.to_string(),
    }
}
