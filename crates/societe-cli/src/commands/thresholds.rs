use clap::Args;
use serde_json::Value;

use societe_core::thresholds::{evaluate_thresholds, sort_alerts, ThresholdCatalog};
use societe_core::types::CompanyProfile;

use crate::input;

#[derive(Args)]
pub struct ThresholdsArgs {
    /// Path to a company-profile file (JSON or YAML)
    #[arg(long)]
    pub input: Option<String>,

    /// Path to a threshold catalog replacing the built-in table
    #[arg(long)]
    pub catalog: Option<String>,
}

#[derive(Args)]
pub struct CatalogArgs {}

pub fn run_thresholds(args: ThresholdsArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let profile: CompanyProfile = if let Some(ref path) = args.input {
        input::file::read_input(path)?
    } else if let Some(data) = input::stdin::read_stdin()? {
        serde_json::from_value(data)?
    } else {
        return Err("--input <profile.json> or stdin required".into());
    };

    let mut alerts = match args.catalog {
        Some(ref path) => {
            let catalog: ThresholdCatalog = input::file::read_input(path)?;
            catalog.validate()?;
            evaluate_thresholds(&profile, &catalog)
        }
        None => evaluate_thresholds(&profile, ThresholdCatalog::builtin()),
    };
    sort_alerts(&mut alerts);

    Ok(serde_json::to_value(alerts)?)
}

pub fn run_catalog(_args: CatalogArgs) -> Result<Value, Box<dyn std::error::Error>> {
    Ok(serde_json::to_value(ThresholdCatalog::builtin())?)
}
