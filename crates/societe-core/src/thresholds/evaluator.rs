//! Regulatory threshold evaluation.
//!
//! Filters the catalog down to the entries applicable to a company profile,
//! compares the relevant observed value against each threshold and emits
//! warning/critical alerts. Pure and total: malformed catalog entries are
//! skipped, never raised.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::thresholds::catalog::{ThresholdCatalog, ThresholdCategory, ThresholdDefinition};
use crate::types::{CompanyProfile, Rate};

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Alert severity. Ordering is meaningful: `Warning < Critical`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertSeverity {
    Warning,
    Critical,
}

/// One fired threshold, ready for display by the wizard.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThresholdAlert {
    pub id: String,
    pub title: String,
    pub message: String,
    pub description: String,
    pub severity: AlertSeverity,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    /// observed / threshold. Always >= warning_ratio when an alert exists.
    pub ratio: Rate,
    pub observed: Decimal,
    pub threshold: Decimal,
}

// ---------------------------------------------------------------------------
// Evaluation
// ---------------------------------------------------------------------------

/// Evaluate every applicable catalog entry against the profile.
///
/// Emits no alert when the observed value sits below the warning boundary,
/// a `Warning` alert from the warning boundary up, and a `Critical` alert
/// once `observed / threshold` reaches the critical ratio. Entries with a
/// non-positive threshold are authoring errors and are skipped. Output order
/// follows catalog order; see [`sort_alerts`] for the display ordering.
pub fn evaluate_thresholds(
    profile: &CompanyProfile,
    catalog: &ThresholdCatalog,
) -> Vec<ThresholdAlert> {
    let mut alerts = Vec::new();

    for def in catalog.iter() {
        if !applies_to(def, profile) {
            continue;
        }
        // Guard against divide-by-zero from malformed entries
        if def.threshold <= Decimal::ZERO {
            continue;
        }

        let observed = observed_value(def.category, profile);
        let ratio = observed / def.threshold;

        let severity = if ratio >= def.critical_ratio {
            AlertSeverity::Critical
        } else if ratio >= def.warning_ratio {
            AlertSeverity::Warning
        } else {
            continue;
        };

        alerts.push(ThresholdAlert {
            id: def.id.clone(),
            title: def.title.clone(),
            message: def.message.clone(),
            description: def.description.clone(),
            severity,
            link: def.link.clone(),
            ratio,
            observed,
            threshold: def.threshold,
        });
    }

    alerts
}

/// Display ordering for the wizard: critical alerts first, ties broken by
/// ascending threshold so the most imminent obligation leads.
pub fn sort_alerts(alerts: &mut [ThresholdAlert]) {
    alerts.sort_by(|a, b| {
        b.severity
            .cmp(&a.severity)
            .then(a.threshold.cmp(&b.threshold))
    });
}

/// An absent filter matches everything; a present filter requires the profile
/// to carry the exact value.
fn applies_to(def: &ThresholdDefinition, profile: &CompanyProfile) -> bool {
    if let Some(types) = &def.company_types {
        if !types.contains(&profile.company_type) {
            return false;
        }
    }
    if let Some(activities) = &def.activities {
        if !activities.contains(&profile.activity_category) {
            return false;
        }
    }
    if let Some(tax) = def.tax_regime {
        if profile.tax_regime != Some(tax) {
            return false;
        }
    }
    if let Some(vat) = def.vat_regime {
        if profile.vat_regime != Some(vat) {
            return false;
        }
    }
    if let Some(social) = def.social_regime {
        if profile.social_regime != Some(social) {
            return false;
        }
    }
    true
}

/// Which profile value the category is measured against.
fn observed_value(category: ThresholdCategory, profile: &CompanyProfile) -> Decimal {
    match category {
        ThresholdCategory::Emploi => profile.employees_count,
        ThresholdCategory::Comptable => profile.total_bilan,
        ThresholdCategory::Tva | ThresholdCategory::Micro | ThresholdCategory::Social => {
            profile.estimated_turnover
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::thresholds::catalog::entry_for_tests as entry;
    use crate::types::{ActivityCategory, CompanyType, VatRegime};
    use rust_decimal_macros::dec;

    fn profile() -> CompanyProfile {
        CompanyProfile {
            company_type: CompanyType::Sarl,
            activity_category: ActivityCategory::Service,
            ..CompanyProfile::default()
        }
    }

    fn cse_entry() -> ThresholdDefinition {
        entry(
            "cse",
            ThresholdCategory::Emploi,
            dec!(11),
            dec!(0.91),
            dec!(1),
        )
    }

    fn catalog_of(defs: Vec<ThresholdDefinition>) -> ThresholdCatalog {
        let mut catalog = ThresholdCatalog::default();
        for def in defs {
            match def.category {
                ThresholdCategory::Tva => catalog.tva.push(def),
                ThresholdCategory::Micro => catalog.micro.push(def),
                ThresholdCategory::Social => catalog.social.push(def),
                ThresholdCategory::Comptable => catalog.comptable.push(def),
                ThresholdCategory::Emploi => catalog.emploi.push(def),
            }
        }
        catalog
    }

    #[test]
    fn test_cse_just_below_warning_boundary() {
        // 10 / 11 = 0.9090... < 0.91 so nothing fires
        let mut p = profile();
        p.employees_count = dec!(10);
        let alerts = evaluate_thresholds(&p, &catalog_of(vec![cse_entry()]));
        assert!(alerts.is_empty());
    }

    #[test]
    fn test_cse_at_threshold_is_critical() {
        // 11 / 11 = 1.0 >= critical_ratio
        let mut p = profile();
        p.employees_count = dec!(11);
        let alerts = evaluate_thresholds(&p, &catalog_of(vec![cse_entry()]));
        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0].severity, AlertSeverity::Critical);
        assert_eq!(alerts[0].ratio, Decimal::ONE);
    }

    #[test]
    fn test_severity_monotonic_in_observed_value() {
        let catalog = catalog_of(vec![cse_entry()]);
        let mut last_rank = 0u8;
        for headcount in 0..=30u32 {
            let mut p = profile();
            p.employees_count = Decimal::from(headcount);
            let alerts = evaluate_thresholds(&p, &catalog);
            let rank = match alerts.first().map(|a| a.severity) {
                None => 0,
                Some(AlertSeverity::Warning) => 1,
                Some(AlertSeverity::Critical) => 2,
            };
            assert!(
                rank >= last_rank,
                "severity regressed at {} employees",
                headcount
            );
            last_rank = rank;
        }
    }

    #[test]
    fn test_zero_threshold_entry_is_skipped() {
        let mut def = cse_entry();
        def.threshold = Decimal::ZERO;
        let mut p = profile();
        p.employees_count = dec!(100);
        let alerts = evaluate_thresholds(&p, &catalog_of(vec![def]));
        assert!(alerts.is_empty());
    }

    #[test]
    fn test_regime_filter_requires_declared_regime() {
        let mut def = entry(
            "tva-franchise",
            ThresholdCategory::Tva,
            dec!(34_400),
            dec!(0.85),
            dec!(1),
        );
        def.vat_regime = Some(VatRegime::Franchise);

        let mut p = profile();
        p.estimated_turnover = dec!(34_000);

        // Profile has not declared a VAT regime yet: entry does not apply
        let alerts = evaluate_thresholds(&p, &catalog_of(vec![def.clone()]));
        assert!(alerts.is_empty());

        p.vat_regime = Some(VatRegime::Franchise);
        let alerts = evaluate_thresholds(&p, &catalog_of(vec![def]));
        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0].severity, AlertSeverity::Warning);
    }

    #[test]
    fn test_company_type_filter() {
        let mut def = cse_entry();
        def.company_types = Some(vec![CompanyType::Sas, CompanyType::Sasu]);
        let mut p = profile();
        p.employees_count = dec!(12);

        assert!(evaluate_thresholds(&p, &catalog_of(vec![def.clone()])).is_empty());

        p.company_type = CompanyType::Sasu;
        assert_eq!(evaluate_thresholds(&p, &catalog_of(vec![def])).len(), 1);
    }

    #[test]
    fn test_sort_critical_first_then_ascending_threshold() {
        let mut p = profile();
        p.employees_count = dec!(60);

        let mut catalog = catalog_of(vec![
            cse_entry(),
            entry(
                "reglement-interieur",
                ThresholdCategory::Emploi,
                dec!(50),
                dec!(0.9),
                dec!(1),
            ),
            entry(
                "obligation-emploi-th",
                ThresholdCategory::Emploi,
                dec!(20),
                dec!(0.9),
                dec!(1),
            ),
        ]);
        // Warning-only entry, far from its ceiling
        catalog.comptable.push({
            let mut def = entry(
                "commissaire-aux-comptes",
                ThresholdCategory::Comptable,
                dec!(4_000_000),
                dec!(0.75),
                dec!(1),
            );
            def.warning_ratio = dec!(0.75);
            def
        });
        p.total_bilan = dec!(3_100_000);

        let mut alerts = evaluate_thresholds(&p, &catalog);
        sort_alerts(&mut alerts);

        let ids: Vec<&str> = alerts.iter().map(|a| a.id.as_str()).collect();
        // All three EMPLOI entries are critical at 60 employees, ordered by
        // ascending threshold; the warning-level accounting alert comes last.
        assert_eq!(
            ids,
            vec![
                "cse",
                "obligation-emploi-th",
                "reglement-interieur",
                "commissaire-aux-comptes"
            ]
        );
        assert_eq!(alerts[3].severity, AlertSeverity::Warning);
    }

    #[test]
    fn test_zero_observed_value_yields_no_alert() {
        let p = profile();
        let alerts = evaluate_thresholds(&p, &catalog_of(vec![cse_entry()]));
        assert!(alerts.is_empty());
    }
}
