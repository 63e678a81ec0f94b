use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[clap(name = "hdhr-details")]
#[clap(about = "Decode ATSC 3.0 PLP and L1 signaling details captured from HDHomeRun tuners. ", long_about = None)]
#[clap(version)]
pub(crate) struct Cli {
    /// Enable debug-level logging.
    #[clap(short, long, global = true)]
    pub verbose: bool,

    #[clap(subcommand)]
    pub command: Commands,
}

/// Output format for decoded reports.
#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
pub(crate) enum OutputFormat {
    /// Plain text, one report line per row
    #[default]
    Text,
    /// JSON array of structured report lines
    Json,
}

#[derive(Debug, Subcommand)]
pub(crate) enum Commands {
    /// Build the full PLP / SNR / L1 details report.{n}
    /// Reads the tuner's plpinfo and streaminfo blobs and, when given,
    /// the Base64 l1detail variable, and prints the combined report the
    /// details screen shows.
    Report {
        /// File holding the tuner's plpinfo output.
        #[clap(short, long, value_name = "FILE", required = true)]
        plpinfo: PathBuf,

        /// File holding the tuner's streaminfo output.
        #[clap(short, long, value_name = "FILE")]
        streaminfo: Option<PathBuf>,

        /// File holding the Base64 l1detail variable.
        #[clap(short, long, value_name = "FILE")]
        l1detail: Option<PathBuf>,

        /// Output format.
        #[clap(value_enum, long, short = 'f', default_value = "text")]
        format: OutputFormat,

        /// Write the report to this file instead of stdout.
        #[clap(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Derive the output filename from the tune string and BSID{n}
        /// (rf<CH>-bsid<ID>-details-<TIMESTAMP>.txt).
        #[clap(long, conflicts_with = "output")]
        auto_name: bool,

        /// Tune string the capture was taken on (e.g. "atsc3:33:0+1");{n}
        /// used only for the auto-generated filename.
        #[clap(short, long)]
        channel: Option<String>,
    },

    /// Decode an l1detail blob on its own.
    L1dump {
        /// File holding the blob; Base64 text unless --raw is given.
        #[clap(value_name = "FILE", required = true)]
        input: PathBuf,

        /// Treat the input file as raw binary rather than Base64 text.
        #[clap(long)]
        raw: bool,

        /// Output format.
        #[clap(value_enum, long, short = 'f', default_value = "text")]
        format: OutputFormat,
    },

    /// Look up the required SNR range for a modulation / code rate pair.
    Modcod {
        /// Modulation as the device reports it (e.g. "qam256" or "256QAM").
        #[clap(short, long, required = true)]
        modulation: String,

        /// Code rate (e.g. "7/15").
        #[clap(short, long, required = true)]
        code_rate: String,
    },
}
