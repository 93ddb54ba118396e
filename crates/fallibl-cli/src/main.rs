#![forbid(unsafe_code)]

//! Fallibl demo
//!
//! Runs the propagation forms inside a real process, so their effect on
//! exit status and stderr can be observed from outside.

use anyhow::Result;
use clap::{Parser, Subcommand};
use fallibl::{Empty, Outcome, make_error, must, propagate};

/// Fallibl demo - exercise outcome propagation in a subprocess
#[derive(Parser, Debug)]
#[command(name = "fallibl-demo")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Unwrap an outcome with `must!`, aborting on failure
    Must(Scenario),
    /// Forward a failure through two functions with `propagate!`
    Propagate(Scenario),
    /// Print whether the outcome is a success, without unwrapping
    Value(Scenario),
}

#[derive(clap::Args, Debug)]
struct Scenario {
    /// Make the innermost step fail
    #[arg(long)]
    fail: bool,

    /// Message carried by the failure
    #[arg(long, env = "FALLIBL_MESSAGE", default_value = "demo failure")]
    message: String,

    /// Success payload produced when the step does not fail
    #[arg(long, default_value_t = 42)]
    payload: u32,
}

fn step(scenario: &Scenario) -> Outcome<u32> {
    if scenario.fail {
        return make_error(scenario.message.as_str());
    }
    Outcome::Success(scenario.payload)
}

fn doubled(scenario: &Scenario) -> Outcome<u64> {
    let value = propagate!(step(scenario));
    tracing::debug!(value, "step succeeded");
    Outcome::Success(u64::from(value) * 2)
}

fn rendered(scenario: &Scenario) -> Outcome<String> {
    let value = propagate!(doubled(scenario));
    Outcome::Success(format!("value={value}"))
}

fn checked(scenario: &Scenario) -> Outcome<Empty> {
    propagate!(step(scenario));
    Outcome::Success(Empty)
}

fn main() -> Result<()> {
    let args = Args::parse();

    let default_filter = if args.verbose {
        "debug"
    } else {
        "warn,fallibl=info"
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .init();

    match args.command {
        Command::Must(scenario) => {
            let value = must!(step(&scenario));
            println!("value={value}");
        }
        Command::Propagate(scenario) => {
            let line = rendered(&scenario).into_result()?;
            println!("{line}");
        }
        Command::Value(scenario) => {
            let outcome = checked(&scenario);
            tracing::info!(success = outcome.is_success(), "checked outcome");
            println!("success={}", outcome.as_bool());
        }
    }

    Ok(())
}
