//! hdhr-details: decode ATSC 3.0 PLP and L1 signaling details from
//! HDHomeRun tuners.
//!
//! Device I/O lives elsewhere: this tool consumes the text blobs
//! (`plpinfo`, `streaminfo`) and the Base64 `l1detail` variable already
//! captured from a tuner, and renders the same report the interactive
//! details screen shows.

use clap::Parser;
use log::error;

mod commands;
mod context;

use commands::ReportArgs;
use context::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    let result = match cli.command {
        Commands::Report {
            plpinfo,
            streaminfo,
            l1detail,
            format,
            output,
            auto_name,
            channel,
        } => commands::run_report(ReportArgs {
            plpinfo,
            streaminfo,
            l1detail,
            format,
            output,
            auto_name,
            channel,
        }),
        Commands::L1dump { input, raw, format } => commands::run_l1dump(&input, raw, format),
        Commands::Modcod {
            modulation,
            code_rate,
        } => commands::run_modcod(&modulation, &code_rate),
    };

    if let Err(e) = result {
        error!("{}", e);
        std::process::exit(1);
    }
}
