pub mod commands;

use clap::{Parser, Subcommand};
use std::process::ExitCode;

#[derive(Debug, Parser)]
#[command(
    name = "stowquote",
    about = "Stowquote operator CLI",
    long_about = "Operate Stowquote readiness, config inspection, quotation smoke checks, and \
                  deterministic chat routing.",
    after_help = "Examples:\n  stowquote doctor --json\n  stowquote quote --storage-type AC --volume 10 --days 40 --wms\n  stowquote ask \"show all storage rates\""
)]
pub struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    #[command(about = "Compute a fee breakdown for a storage request and print it as JSON")]
    Quote {
        #[arg(long, help = "Storage type label, e.g. \"AC\" or \"KIZAD Open Yard\"")]
        storage_type: String,
        #[arg(long, help = "Volume in CBM (indoor) or SQM (open yard)")]
        volume: String,
        #[arg(long, help = "Storage duration in days")]
        days: String,
        #[arg(long, help = "Include the monthly WMS fee")]
        wms: bool,
        #[arg(long, help = "Customer email, used to derive the download file name")]
        email: Option<String>,
    },
    #[command(about = "Route a chat message through the deterministic intent table")]
    Ask {
        #[arg(help = "Free-text question, quoted")]
        message: String,
    },
    #[command(
        about = "Inspect effective configuration values with secrets redacted"
    )]
    Config,
    #[command(about = "Validate config, template assets, and narrative readiness")]
    Doctor {
        #[arg(long, help = "Emit machine-readable JSON output")]
        json: bool,
    },
    #[command(about = "Run the quotation pipeline end-to-end against every template asset")]
    Smoke,
}

pub fn run() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Command::Quote { storage_type, volume, days, wms, email } => {
            commands::quote::run(&storage_type, &volume, &days, wms, email.as_deref())
        }
        Command::Ask { message } => commands::ask::run(&message),
        Command::Config => commands::CommandResult::report(commands::config::run()),
        Command::Doctor { json } => commands::CommandResult::report(commands::doctor::run(json)),
        Command::Smoke => commands::smoke::run(),
    };

    println!("{}", result.output);
    ExitCode::from(result.exit_code)
}
