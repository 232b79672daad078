use clap::Args;
use rust_decimal::Decimal;
use serde_json::Value;

use societe_core::simulation::{
    simulate_social_charges, simulate_taxes, SocialChargesInput, TaxSimulationInput,
};
use societe_core::types::{SocialRegime, TaxRegime, VatRegime};

use crate::commands::advisor::parse_company_type;
use crate::input;

#[derive(Args)]
pub struct SimulateTaxesArgs {
    /// Annual pre-tax turnover in euros
    #[arg(long)]
    pub turnover: Option<Decimal>,

    /// Annual deductible expenses in euros
    #[arg(long, default_value = "0")]
    pub expenses: Decimal,

    /// Gross annual officer salary in euros
    #[arg(long, default_value = "0")]
    pub salary: Decimal,

    /// Legal form (EURL, SASU, SARL, SAS, EI, ...)
    #[arg(long, default_value = "SARL")]
    pub company_type: String,

    /// Tax regime: IS or IR
    #[arg(long, default_value = "IS")]
    pub tax_regime: String,

    /// VAT regime: franchise, realSimplified or realNormal
    #[arg(long, default_value = "franchise")]
    pub vat_regime: String,

    /// Path to a JSON input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,
}

#[derive(Args)]
pub struct SimulateChargesArgs {
    /// Gross annual officer salary in euros
    #[arg(long)]
    pub salary: Option<Decimal>,

    /// Legal form (EURL, SASU, SARL, SAS, EI, ...)
    #[arg(long, default_value = "SARL")]
    pub company_type: String,

    /// Social regime: TNS or assimile (omit when undecided)
    #[arg(long)]
    pub social_regime: Option<String>,

    /// Tax regime: IS or IR
    #[arg(long, default_value = "IS")]
    pub tax_regime: String,

    /// Path to a JSON input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,
}

pub fn run_simulate_taxes(args: SimulateTaxesArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let sim_input: TaxSimulationInput = if let Some(ref path) = args.input {
        input::file::read_input(path)?
    } else if let Some(data) = input::stdin::read_stdin()? {
        serde_json::from_value(data)?
    } else {
        TaxSimulationInput {
            turnover: args
                .turnover
                .ok_or("--turnover is required (or provide --input)")?,
            expenses: args.expenses,
            salary: args.salary,
            company_type: parse_company_type(&args.company_type),
            tax_regime: parse_tax_regime(&args.tax_regime)?,
            vat_regime: parse_vat_regime(&args.vat_regime)?,
        }
    };

    let result = simulate_taxes(&sim_input)?;
    Ok(serde_json::to_value(result)?)
}

pub fn run_simulate_charges(
    args: SimulateChargesArgs,
) -> Result<Value, Box<dyn std::error::Error>> {
    let sim_input: SocialChargesInput = if let Some(ref path) = args.input {
        input::file::read_input(path)?
    } else if let Some(data) = input::stdin::read_stdin()? {
        serde_json::from_value(data)?
    } else {
        SocialChargesInput {
            salary: args
                .salary
                .ok_or("--salary is required (or provide --input)")?,
            company_type: parse_company_type(&args.company_type),
            social_regime: match args.social_regime {
                Some(ref raw) => Some(parse_social_regime(raw)?),
                None => None,
            },
            tax_regime: parse_tax_regime(&args.tax_regime)?,
        }
    };

    let result = simulate_social_charges(&sim_input)?;
    Ok(serde_json::to_value(result)?)
}

// ---------------------------------------------------------------------------
// Flag parsing
// ---------------------------------------------------------------------------

fn parse_tax_regime(raw: &str) -> Result<TaxRegime, Box<dyn std::error::Error>> {
    match raw.to_uppercase().as_str() {
        "IS" => Ok(TaxRegime::Is),
        "IR" => Ok(TaxRegime::Ir),
        other => Err(format!("Unknown tax regime '{}': use IS or IR", other).into()),
    }
}

fn parse_vat_regime(raw: &str) -> Result<VatRegime, Box<dyn std::error::Error>> {
    match raw.to_lowercase().as_str() {
        "franchise" => Ok(VatRegime::Franchise),
        "realsimplified" | "reel-simplifie" => Ok(VatRegime::RealSimplified),
        "realnormal" | "reel-normal" => Ok(VatRegime::RealNormal),
        other => Err(format!(
            "Unknown VAT regime '{}': use franchise, realSimplified or realNormal",
            other
        )
        .into()),
    }
}

fn parse_social_regime(raw: &str) -> Result<SocialRegime, Box<dyn std::error::Error>> {
    match raw.to_lowercase().as_str() {
        "tns" => Ok(SocialRegime::Tns),
        "assimile" | "assimile-salarie" => Ok(SocialRegime::Assimile),
        other => Err(format!("Unknown social regime '{}': use TNS or assimile", other).into()),
    }
}
