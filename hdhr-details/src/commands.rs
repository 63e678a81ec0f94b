//! Command handlers: report assembly, standalone L1 dumps, SNR lookups.

use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};

use chrono::Local;
use colored::Colorize;
use log::{info, warn};

use hdhr_signaling::channels;
use hdhr_signaling::report::{render_report, ReportLine};
use hdhr_signaling::{base64, collect_details, l1, modcod, status};

use crate::context::OutputFormat;

pub(crate) struct ReportArgs {
    pub plpinfo: PathBuf,
    pub streaminfo: Option<PathBuf>,
    pub l1detail: Option<PathBuf>,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
    pub auto_name: bool,
    pub channel: Option<String>,
}

pub(crate) fn run_report(args: ReportArgs) -> Result<(), Box<dyn Error>> {
    let plpinfo = read_blob(&args.plpinfo)?;
    let streaminfo = match &args.streaminfo {
        Some(path) => read_blob(path)?,
        None => String::new(),
    };
    let l1detail = match &args.l1detail {
        Some(path) => Some(read_blob(path)?),
        None => None,
    };

    // File captures usually end in a newline the device string never has.
    let lines = collect_details(&plpinfo, &streaminfo, l1detail.as_deref().map(str::trim));

    let output = if args.auto_name {
        Some(PathBuf::from(auto_filename(
            args.channel.as_deref(),
            &plpinfo,
            &streaminfo,
        )))
    } else {
        args.output
    };

    emit(&lines, args.format, output.as_deref())
}

pub(crate) fn run_l1dump(
    input: &Path,
    raw: bool,
    format: OutputFormat,
) -> Result<(), Box<dyn Error>> {
    let data = if raw {
        fs::read(input)?
    } else {
        base64::decode(read_blob(input)?.trim())?
    };
    info!("decoding {} bytes of L1 signaling", data.len());

    let lines = l1::decode(&data);
    emit(&lines, format, None)
}

pub(crate) fn run_modcod(modulation: &str, code_rate: &str) -> Result<(), Box<dyn Error>> {
    let canonical = modcod::normalize_modulation(modulation);
    match modcod::lookup(&canonical, code_rate) {
        Some(entry) => {
            println!(
                "{} {}: Min {:.2} dB, Max {:.2} dB",
                entry.modulation, entry.code_rate, entry.min_snr, entry.max_snr
            );
        }
        None => {
            warn!("no SNR table entry for {} {}", canonical, code_rate);
            println!("{} {}: not in table", canonical, code_rate);
        }
    }
    Ok(())
}

fn read_blob(path: &Path) -> Result<String, Box<dyn Error>> {
    fs::read_to_string(path).map_err(|e| format!("{}: {}", path.display(), e).into())
}

/// The interactive tool's save filename: RF channel from the tune string,
/// BSID (falling back to TSID, then 0), and a local timestamp.
fn auto_filename(channel: Option<&str>, plpinfo: &str, streaminfo: &str) -> String {
    let rf = channel
        .and_then(channels::rf_channel_number)
        .unwrap_or(0);
    let id = status::parse_numeric(plpinfo, "bsid=")
        .or_else(|| status::parse_numeric(streaminfo, "tsid="))
        .unwrap_or(0);
    let stamp = Local::now().format("%Y%m%d-%H%M%S");
    format!("rf{}-bsid{}-details-{}.txt", rf, id, stamp)
}

fn emit(
    lines: &[ReportLine],
    format: OutputFormat,
    output: Option<&Path>,
) -> Result<(), Box<dyn Error>> {
    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(lines)?;
            match output {
                Some(path) => {
                    fs::write(path, json + "\n")?;
                    info!("saved details to {}", path.display());
                }
                None => println!("{}", json),
            }
        }
        OutputFormat::Text => match output {
            Some(path) => {
                fs::write(path, render_report(lines))?;
                info!("saved details to {}", path.display());
            }
            None => print_colored(lines),
        },
    }
    Ok(())
}

/// Terminal rendering with the interactive tool's color rules: locked PLPs
/// green, unlocked red, truncation marker highlighted.
fn print_colored(lines: &[ReportLine]) {
    for line in lines {
        let rendered = line.to_string();
        match line {
            ReportLine::Text { text } if text.contains("lock=1") => {
                println!("{}", rendered.green())
            }
            ReportLine::Text { text } if text.contains("lock=0") => {
                println!("{}", rendered.red())
            }
            ReportLine::Section { .. } => println!("{}", rendered.bold()),
            ReportLine::Truncated => println!("{}", rendered.red().bold()),
            _ => println!("{}", rendered),
        }
    }
}
