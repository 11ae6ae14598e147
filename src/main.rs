use anyhow::Context;
use clap::Parser;
use station_dashboard::cli::{args::Args, commands};
use std::process;

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    if args.command.is_none() {
        show_help_and_commands();
        process::exit(0);
    }

    let result = commands::run(args).context("station-dashboard failed");

    match result {
        Ok(report) if report.clean => process::exit(0),
        Ok(_) => process::exit(2),
        Err(error) => {
            // Error occurred - print the chain to stderr and exit with error code
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("Station Dashboard - Weather Station Log Summaries");
    println!("=================================================");
    println!();
    println!("Reads headerless weather-station logs and derives the latest readings,");
    println!("trailing deltas, statistics, normalized series and GPS trajectory.");
    println!();
    println!("USAGE:");
    println!("    station-dashboard <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    summary     Print the dashboard metrics for a log file");
    println!("    validate    Check a log file for malformed rows and timestamps");
    println!("    export      Write the parsed dataset and derived snapshot as JSON");
    println!();
    println!("LOG FORMAT:");
    println!("    date,time,temperature,humidity,pressure,light,latitude,longitude,altitude");
    println!("    251021,10:41:09,23.5,55.4,992.0,801,50.604988,3.150694,50.0");
    println!();
    println!("For more information on a command, run:");
    println!("    station-dashboard <COMMAND> --help");
}
