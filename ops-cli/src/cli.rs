use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use error_common::Language;
use rust_decimal::Decimal;
use uuid::Uuid;

/// ClaimsDesk operations CLI
#[derive(Parser, Debug)]
#[command(name = "claimsdesk")]
#[command(about = "Tariff price quotes and insurance coverage checks", version)]
pub struct Cli {
    /// Configuration file path (YAML or TOML)
    #[arg(short, long, global = true, env = "CLAIMSDESK_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Language of status texts and error messages (en, he)
    #[arg(long, global = true)]
    pub lang: Option<Language>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Price a procedure under the provider's contract
    Price(PriceArgs),
    /// Validate a request against an insurance policy
    Coverage(CoverageArgs),
}

#[derive(Args, Debug)]
pub struct PriceArgs {
    /// Dataset file with contracts, tariffs and doctor contracts
    #[arg(long)]
    pub dataset: PathBuf,

    #[arg(long)]
    pub provider: Uuid,

    /// Internal procedure code
    #[arg(long)]
    pub code: String,

    #[arg(long)]
    pub doctor: Option<Uuid>,

    #[arg(long, default_value_t = 1)]
    pub quantity: u32,

    /// The procedure requires implantables
    #[arg(long)]
    pub implantable: bool,
}

#[derive(Args, Debug)]
pub struct CoverageArgs {
    /// Dataset file with insurance policies
    #[arg(long)]
    pub dataset: PathBuf,

    /// Policy number
    #[arg(long)]
    pub policy: String,

    /// Requested procedure code, repeatable
    #[arg(long = "procedure")]
    pub procedures: Vec<String>,

    /// Diagnosis code, repeatable
    #[arg(long = "diagnosis")]
    pub diagnoses: Vec<String>,

    #[arg(long)]
    pub implantables: bool,

    #[arg(long)]
    pub private_doctor: bool,

    /// Requested hospitalization days
    #[arg(long)]
    pub days: Option<u32>,

    /// Estimated cost of the request
    #[arg(long)]
    pub cost: Option<Decimal>,

    /// hospital, surgery or outpatient
    #[arg(long)]
    pub service_type: Option<String>,
}
