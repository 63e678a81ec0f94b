//! Mini-parsers for the tuner's `key=value` diagnostic text blobs.
//!
//! These are substring scanners, not tokenizers: a key matches anywhere in
//! the blob, including inside a longer key (`"se="` matches within
//! `"base="`). That mirrors how the device strings have always been read;
//! callers pass unambiguous keys like `"bps="` and `"bsid="`.

/// Find `key` in `blob` and parse the integer that follows it.
///
/// Number format is auto-detected: a `0x`/`0X` prefix selects hex, anything
/// else is decimal; a leading sign is honored. Returns `None` when the key
/// is absent or not followed by any digits. That means "field not reported",
/// never an error.
pub fn parse_numeric(blob: &str, key: &str) -> Option<i64> {
    let idx = blob.find(key)?;
    parse_int(&blob[idx + key.len()..], true)
}

/// Find `key` in `blob`, then the next `(`, and parse the decimal integer
/// immediately inside it.
///
/// Used for readings like `ss=100(-35dBm)` where the percentage carries a
/// parenthesized dB value.
pub fn parse_db(blob: &str, key: &str) -> Option<i64> {
    let idx = blob.find(key)?;
    let rest = &blob[idx..];
    let paren = rest.find('(')?;
    parse_int(&rest[paren + 1..], false)
}

/// The value token following `key`, up to the next space (or end of line).
///
/// Extracts e.g. `"qam256"` from `"... mod=qam256 cod=7/15"`.
pub fn value_token<'a>(line: &'a str, key: &str) -> Option<&'a str> {
    let idx = line.find(key)?;
    let rest = &line[idx + key.len()..];
    Some(match rest.find(' ') {
        Some(end) => &rest[..end],
        None => rest,
    })
}

fn parse_int(s: &str, auto_base: bool) -> Option<i64> {
    let s = s.trim_start();
    let (negative, s) = match s.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, s.strip_prefix('+').unwrap_or(s)),
    };
    let (radix, digits) = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(hex) if auto_base => (16, hex),
        _ => (10, s),
    };
    let end = digits
        .find(|c: char| !c.is_digit(radix))
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }
    i64::from_str_radix(&digits[..end], radix)
        .ok()
        .map(|v| if negative { -v } else { v })
}

/// Signal readings extracted from one tuner status blob.
///
/// `None` fields were not reported by the device.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatusSummary {
    /// Bits per second on the network target.
    pub bps: Option<i64>,
    /// Packets per second on the network target.
    pub pps: Option<i64>,
    /// Signal strength in dBm, from `ss=NN(-XXdBm)`.
    pub rssi_dbm: Option<i64>,
    /// Signal-to-noise quality in dB, from `snq=NN(XXdB)`.
    pub snq_db: Option<i64>,
}

impl StatusSummary {
    /// Extract the standard readings from a raw status blob.
    pub fn from_blob(blob: &str) -> Self {
        Self {
            bps: parse_numeric(blob, "bps="),
            pps: parse_numeric(blob, "pps="),
            rssi_dbm: parse_db(blob, "ss="),
            snq_db: parse_db(blob, "snq="),
        }
    }

    /// Network rate in Mbps; zero until packets are actually flowing.
    pub fn network_rate_mbps(&self) -> f64 {
        match (self.bps, self.pps) {
            (Some(bps), Some(pps)) if pps > 0 => bps as f64 / 1_000_000.0,
            _ => 0.0,
        }
    }
}
