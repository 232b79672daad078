//! Activity classification and domiciliation advice.
//!
//! The wizard lets the founder type their activity freely; a keyword lookup
//! maps the label onto the four broad categories the engine reasons about.
//! Matching is case-insensitive and diacritic-insensitive, so "Développeur"
//! and "developpeur" classify the same way.

use serde::{Deserialize, Serialize};

use crate::types::{ActivityCategory, HeadquartersType};

// Keyword tables, diacritics already folded. Scanned in priority order:
// libéral, artisanat, commerce, service. Unknown labels default to service.

const LIBERAL_KEYWORDS: &[&str] = &[
    "medecin",
    "infirmier",
    "kinesitherapeute",
    "osteopathe",
    "psychologue",
    "sage-femme",
    "avocat",
    "notaire",
    "huissier",
    "expert-comptable",
    "architecte",
    "geometre",
    "veterinaire",
    "profession liberale",
];

const ARTISANAT_KEYWORDS: &[&str] = &[
    "artisan",
    "batiment",
    "maconnerie",
    "plomberie",
    "plombier",
    "electricien",
    "electricite",
    "menuiserie",
    "menuisier",
    "peinture en batiment",
    "couverture",
    "serrurerie",
    "coiffure",
    "coiffeur",
    "esthetique",
    "boulangerie",
    "patisserie",
    "boucherie",
    "reparation",
];

const COMMERCE_KEYWORDS: &[&str] = &[
    "commerce",
    "vente",
    "revente",
    "negoce",
    "boutique",
    "magasin",
    "e-commerce",
    "ecommerce",
    "import",
    "export",
    "distribution",
    "restauration",
    "restaurant",
    "food truck",
    "epicerie",
];

const SERVICE_KEYWORDS: &[&str] = &[
    "conseil",
    "consultant",
    "consulting",
    "developpement",
    "developpeur",
    "informatique",
    "logiciel",
    "web",
    "design",
    "graphisme",
    "marketing",
    "communication",
    "formation",
    "coaching",
    "redaction",
    "traduction",
    "photographie",
    "agence",
    "gestion",
];

/// Where to domicile the company and why.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomiciliationAdvice {
    pub recommended: HeadquartersType,
    pub reasons: Vec<String>,
}

/// Classify a free-text activity label.
pub fn classify_activity(label: &str) -> ActivityCategory {
    let folded = fold(label);

    let tables: [(&[&str], ActivityCategory); 4] = [
        (LIBERAL_KEYWORDS, ActivityCategory::Liberal),
        (ARTISANAT_KEYWORDS, ActivityCategory::Artisanat),
        (COMMERCE_KEYWORDS, ActivityCategory::Commerce),
        (SERVICE_KEYWORDS, ActivityCategory::Service),
    ];
    for (keywords, category) in tables {
        if keywords.iter().any(|k| folded.contains(k)) {
            return category;
        }
    }
    ActivityCategory::Service
}

/// Domiciliation recommendation per activity family, with the reason list the
/// wizard displays next to the choice.
pub fn domiciliation_for(activity: ActivityCategory) -> DomiciliationAdvice {
    match activity {
        ActivityCategory::Service => DomiciliationAdvice {
            recommended: HeadquartersType::Koulier,
            reasons: vec![
                "Activité exerçable à distance, sans accueil de clientèle.".to_string(),
                "Adresse professionnelle sans bail commercial ni dépôt de garantie.".to_string(),
                "Courrier numérisé et réexpédié où que vous soyez.".to_string(),
            ],
        },
        ActivityCategory::Liberal => DomiciliationAdvice {
            recommended: HeadquartersType::Koulier,
            reasons: vec![
                "L'adresse administrative peut être distincte du lieu d'exercice.".to_string(),
                "Préserve la confidentialité de votre adresse personnelle.".to_string(),
            ],
        },
        ActivityCategory::Commerce => DomiciliationAdvice {
            recommended: HeadquartersType::Commercial,
            reasons: vec![
                "L'accueil de clientèle et le stockage imposent un local dédié.".to_string(),
                "L'adresse du point de vente participe à la visibilité de l'enseigne."
                    .to_string(),
            ],
        },
        ActivityCategory::Artisanat => DomiciliationAdvice {
            recommended: HeadquartersType::Commercial,
            reasons: vec![
                "Un atelier ou un dépôt de matériel est nécessaire à l'exploitation.".to_string(),
                "Certaines assurances professionnelles exigent un local identifié.".to_string(),
            ],
        },
    }
}

/// Lowercase and fold the common French diacritics to ASCII.
fn fold(label: &str) -> String {
    label
        .to_lowercase()
        .chars()
        .map(|c| match c {
            'à' | 'â' | 'ä' => 'a',
            'é' | 'è' | 'ê' | 'ë' => 'e',
            'î' | 'ï' => 'i',
            'ô' | 'ö' => 'o',
            'ù' | 'û' | 'ü' => 'u',
            'ç' => 'c',
            _ => c,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classification_with_diacritics_and_case() {
        assert_eq!(
            classify_activity("Développeur web freelance"),
            ActivityCategory::Service
        );
        assert_eq!(
            classify_activity("Électricien du bâtiment"),
            ActivityCategory::Artisanat
        );
        assert_eq!(
            classify_activity("Médecin généraliste"),
            ActivityCategory::Liberal
        );
        assert_eq!(
            classify_activity("Vente de vêtements en ligne"),
            ActivityCategory::Commerce
        );
    }

    #[test]
    fn test_unknown_label_defaults_to_service() {
        assert_eq!(classify_activity("apiculture"), ActivityCategory::Service);
        assert_eq!(classify_activity(""), ActivityCategory::Service);
    }

    #[test]
    fn test_liberal_wins_over_service_keywords() {
        // "conseil" appears too, but the libéral table is scanned first
        assert_eq!(
            classify_activity("avocat en conseil juridique"),
            ActivityCategory::Liberal
        );
    }

    #[test]
    fn test_service_activity_goes_remote() {
        let advice = domiciliation_for(ActivityCategory::Service);
        assert_eq!(advice.recommended, HeadquartersType::Koulier);
        assert!(!advice.reasons.is_empty());
    }

    #[test]
    fn test_commerce_and_artisanat_need_premises() {
        for activity in [ActivityCategory::Commerce, ActivityCategory::Artisanat] {
            let advice = domiciliation_for(activity);
            assert_eq!(advice.recommended, HeadquartersType::Commercial);
        }
    }

    #[test]
    fn test_reason_lists_differ_per_branch() {
        let service = domiciliation_for(ActivityCategory::Service);
        let liberal = domiciliation_for(ActivityCategory::Liberal);
        assert_ne!(service.reasons, liberal.reasons);
    }
}
