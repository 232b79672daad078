mod commands;
mod input;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::process;

use commands::advisor::{
    LegalFormArgs, RecommendArgs, SocialRegimeArgs, TaxRegimeArgs, VatRegimeArgs,
};
use commands::simulation::{SimulateChargesArgs, SimulateTaxesArgs};
use commands::thresholds::{CatalogArgs, ThresholdsArgs};

/// Decision engine for French company creation
#[derive(Parser)]
#[command(
    name = "sca",
    version,
    about = "Decision engine for French company creation",
    long_about = "A CLI for the société-creation decision engine. Recommends a legal \
                  form and the tax, VAT and social regimes for a company profile, \
                  monitors regulatory thresholds, and simulates taxes and social \
                  charges with decimal precision."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, default_value = "json", global = true)]
    output: OutputFormat,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the full recommendation from a company profile
    Recommend(RecommendArgs),
    /// Recommend a legal form (SASU, EURL, SAS or SARL)
    LegalForm(LegalFormArgs),
    /// Recommend IS or IR
    TaxRegime(TaxRegimeArgs),
    /// Recommend a VAT regime and its periodicity
    VatRegime(VatRegimeArgs),
    /// Recommend TNS or assimilé-salarié status
    SocialRegime(SocialRegimeArgs),
    /// Evaluate regulatory thresholds against a company profile
    Thresholds(ThresholdsArgs),
    /// Print the built-in regulatory threshold catalog
    Catalog(CatalogArgs),
    /// Simulate the annual tax load
    SimulateTaxes(SimulateTaxesArgs),
    /// Simulate the annual social charges
    SimulateCharges(SimulateChargesArgs),
    /// Print version information
    Version,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Csv,
    Minimal,
}

fn main() {
    let cli = Cli::parse();

    let result: Result<serde_json::Value, Box<dyn std::error::Error>> = match cli.command {
        Commands::Recommend(args) => commands::advisor::run_recommend(args),
        Commands::LegalForm(args) => commands::advisor::run_legal_form(args),
        Commands::TaxRegime(args) => commands::advisor::run_tax_regime(args),
        Commands::VatRegime(args) => commands::advisor::run_vat_regime(args),
        Commands::SocialRegime(args) => commands::advisor::run_social_regime(args),
        Commands::Thresholds(args) => commands::thresholds::run_thresholds(args),
        Commands::Catalog(args) => commands::thresholds::run_catalog(args),
        Commands::SimulateTaxes(args) => commands::simulation::run_simulate_taxes(args),
        Commands::SimulateCharges(args) => commands::simulation::run_simulate_charges(args),
        Commands::Version => {
            println!("sca {}", env!("CARGO_PKG_VERSION"));
            return;
        }
    };

    match result {
        Ok(value) => {
            output::format_output(&cli.output, &value);
            process::exit(0);
        }
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            process::exit(1);
        }
    }
}
