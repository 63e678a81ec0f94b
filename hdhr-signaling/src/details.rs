//! PLP / SNR / L1 detail report assembly.
//!
//! Builds the full details screen from the three blobs a tuner query
//! returns: the `plpinfo` text, the `streaminfo` text, and (on firmware
//! that exposes it) the Base64 `l1detail` variable. The L1 section is
//! strictly additive: if its blob is missing or malformed the PLP and SNR
//! portion still renders in full.

use crate::report::ReportLine;
use crate::{base64, l1, modcod, status};

/// Assemble the details report.
///
/// The Base64 blob is decoded here, exactly once; callers hand over the raw
/// device string.
pub fn collect_details(
    plpinfo: &str,
    streaminfo: &str,
    l1detail_b64: Option<&str>,
) -> Vec<ReportLine> {
    let mut lines = vec![ReportLine::Blank];

    push_id_field(&mut lines, "L1D BSID", status::parse_numeric(plpinfo, "bsid="));
    push_id_field(&mut lines, "SLT TSID", status::parse_numeric(streaminfo, "tsid="));
    lines.push(ReportLine::Blank);

    for line in plpinfo.lines() {
        if line.is_empty() || line.starts_with("bsid=") {
            continue;
        }
        lines.push(ReportLine::text(line));
        if let Some(annotation) = snr_annotation(line) {
            lines.push(annotation);
        }
        lines.push(ReportLine::Blank);
    }

    if let Some(b64) = l1detail_b64 {
        match base64::decode(b64) {
            Ok(data) => {
                lines.push(ReportLine::Blank);
                lines.push(ReportLine::Rule);
                lines.push(ReportLine::Blank);
                lines.extend(l1::decode(&data));
            }
            Err(e) => log::warn!("discarding unreadable l1detail blob: {}", e),
        }
    }

    lines
}

fn push_id_field(lines: &mut Vec<ReportLine>, label: &str, value: Option<i64>) {
    let rendered = match value {
        Some(v) => format!("{} (0x{:X})", v, v),
        None => "Not set".to_string(),
    };
    lines.push(ReportLine::field(0, label, rendered));
}

/// Required-SNR annotation for a PLP line carrying `mod=` and `cod=`
/// tokens; `None` when either token is missing or the pair is not in the
/// table.
fn snr_annotation(line: &str) -> Option<ReportLine> {
    let raw_mod = status::value_token(line, "mod=")?;
    let code_rate = status::value_token(line, "cod=")?;
    let entry = modcod::lookup(&modcod::normalize_modulation(raw_mod), code_rate)?;
    Some(ReportLine::field(
        1,
        "-> Required SNR",
        format!("Min {:.2} dB, Max {:.2} dB", entry.min_snr, entry.max_snr),
    ))
}
