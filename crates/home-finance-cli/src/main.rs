mod commands;
mod input;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::process;

use commands::amortization::{PaymentArgs, ScheduleArgs};
use commands::savings::SavingsArgs;
use commands::scenarios::{HomeVsRentArgs, MortgageInvestArgs};

/// Household finance analysis with decimal precision
#[derive(Parser)]
#[command(
    name = "pfa",
    version,
    about = "Household finance analysis with decimal precision",
    long_about = "A CLI for long-horizon personal finance analysis: loan \
                  amortization under fixed or variable rates, compound savings \
                  accumulation, and the mortgage-vs-invest and home-vs-rent \
                  scenario comparisons."
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
    /// Split a single month's loan payment into principal and interest
    Payment(PaymentArgs),
    /// Build a full monthly amortization schedule
    Schedule(ScheduleArgs),
    /// Compound a monthly contribution series into savings over time
    Savings(SavingsArgs),
    /// Compare short vs long repayment terms with leftover salary invested
    MortgageInvest(MortgageInvestArgs),
    /// Compare net worth from owning a home vs renting and investing
    HomeVsRent(HomeVsRentArgs),
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
        Commands::Payment(args) => commands::amortization::run_payment(args),
        Commands::Schedule(args) => commands::amortization::run_schedule(args),
        Commands::Savings(args) => commands::savings::run_savings(args),
        Commands::MortgageInvest(args) => commands::scenarios::run_mortgage_invest(args),
        Commands::HomeVsRent(args) => commands::scenarios::run_home_vs_rent(args),
        Commands::Version => {
            println!("pfa {}", env!("CARGO_PKG_VERSION"));
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
