//! Command Line Interface for the LP hedge calculator.
mod render;
mod session;

use anyhow::Result;
use clap::{Args, Parser, Subcommand, ValueEnum};
use dotenv::dotenv;
use hedge_calc_form::{
    BoundPolicy, FailurePolicy, FormField, FormInputs, HedgeForm, ValidationConfig,
};
use render::OutputFormat;
use std::io::{self, Write};
use std::process::ExitCode;
use tracing::Level;

#[derive(Parser)]
#[command(name = "hedge-calc")]
#[command(about = "Position and hedge sizing for fixed-range AMM pools", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Sign rule for the upper and lower bound percentages
    #[arg(
        long,
        global = true,
        value_enum,
        env = "HEDGE_CALC_BOUND_POLICY",
        default_value_t = BoundPolicyArg::NonNegative
    )]
    bound_policy: BoundPolicyArg,

    /// Stop at the first invalid field instead of reporting all of them
    #[arg(long, global = true, env = "HEDGE_CALC_FAIL_FAST")]
    fail_fast: bool,

    /// Output format
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum BoundPolicyArg {
    NonNegative,
    Unchecked,
}

impl From<BoundPolicyArg> for BoundPolicy {
    fn from(arg: BoundPolicyArg) -> Self {
        match arg {
            BoundPolicyArg::NonNegative => BoundPolicy::NonNegative,
            BoundPolicyArg::Unchecked => BoundPolicy::Unchecked,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Calculate a position once and print the result
    Calculate(FieldArgs),
    /// Edit fields and recalculate in an interactive session
    Interactive(FieldArgs),
    /// List the form fields with their defaults
    Fields,
}

/// Field overrides; anything left out keeps its default.
#[derive(Args, Debug, Default)]
struct FieldArgs {
    /// Token 1 price in USD (default 0.7110)
    #[arg(long, allow_hyphen_values = true)]
    token1_price: Option<String>,

    /// Token 2 price in USD (default 2500)
    #[arg(long, allow_hyphen_values = true)]
    token2_price: Option<String>,

    /// Total USD value to deposit (default 10000)
    #[arg(long, allow_hyphen_values = true)]
    total_liquidity: Option<String>,

    /// Upper range edge, percent above the pair price (default 4.44)
    #[arg(long, allow_hyphen_values = true)]
    upper_bound: Option<String>,

    /// Lower range edge, percent below the pair price (default 4.44)
    #[arg(long, allow_hyphen_values = true)]
    lower_bound: Option<String>,

    /// Token 1 symbol (default S)
    #[arg(long)]
    token1_symbol: Option<String>,

    /// Token 2 symbol (default WETH)
    #[arg(long)]
    token2_symbol: Option<String>,
}

impl FieldArgs {
    fn into_inputs(self) -> FormInputs {
        let overrides = [
            (FormField::Token1Price, self.token1_price),
            (FormField::Token2Price, self.token2_price),
            (FormField::TotalLiquidity, self.total_liquidity),
            (FormField::UpperBound, self.upper_bound),
            (FormField::LowerBound, self.lower_bound),
            (FormField::Token1Symbol, self.token1_symbol),
            (FormField::Token2Symbol, self.token2_symbol),
        ];

        overrides
            .into_iter()
            .fold(FormInputs::default(), |inputs, (field, value)| match value {
                Some(value) => inputs.with(field, value),
                None => inputs,
            })
    }
}

impl Cli {
    fn validation_config(&self) -> ValidationConfig {
        ValidationConfig {
            bound_policy: self.bound_policy.into(),
            failure_policy: if self.fail_fast {
                FailurePolicy::FailFast
            } else {
                FailurePolicy::CollectAll
            },
        }
    }

    fn log_level(&self) -> Level {
        match self.verbose {
            0 => Level::ERROR,
            1 => Level::INFO,
            _ => Level::DEBUG,
        }
    }
}

fn main() -> Result<ExitCode> {
    dotenv().ok();
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(cli.log_level())
        .with_writer(io::stderr)
        .init();

    let config = cli.validation_config();
    let format = cli.format;

    match cli.command {
        Commands::Calculate(fields) => {
            let mut form = HedgeForm::new(config).with_inputs(fields.into_inputs());
            match form.calculate() {
                Ok(result) => {
                    println!("{}", render::result_panel(result, format));
                }
                Err(e) => {
                    println!("{}", render::error_panel(&e.to_string(), format));
                    return Ok(ExitCode::FAILURE);
                }
            }
        }
        Commands::Interactive(fields) => {
            let mut form = HedgeForm::new(config).with_inputs(fields.into_inputs());
            let stdin = io::stdin();
            let mut stdout = io::stdout();
            session::run(&mut form, stdin.lock(), &mut stdout, format)?;
            stdout.flush()?;
        }
        Commands::Fields => {
            println!("{}", render::fields_table());
        }
    }

    Ok(ExitCode::SUCCESS)
}
