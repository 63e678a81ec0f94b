//! Parsers for the device's channel and PLP selection strings.
//!
//! ATSC 3.0 tuners are tuned with strings like `atsc3:575000000:0+1+4`
//! (frequency or RF channel number, then a `+`-separated PLP list). The
//! status pane splits the same string back apart for display, and the PLP
//! selection prompt accepts comma-separated user input.

use nom::bytes::complete::tag;
use nom::character::complete::{char, digit1};
use nom::combinator::{all_consuming, map_res, opt};
use nom::multi::separated_list1;
use nom::sequence::{pair, preceded, terminated};
use nom::IResult;

/// A parsed `atsc3:` tune string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Atsc3Channel {
    /// RF channel number or center frequency in Hz, as given.
    pub frequency: u32,
    /// Selected PLP ids; empty means "device default".
    pub plps: Vec<u8>,
}

fn plp_list(input: &str) -> IResult<&str, Vec<u8>> {
    separated_list1(char('+'), map_res(digit1, str::parse::<u8>))(input)
}

fn tune_string(input: &str) -> IResult<&str, (u32, Option<Vec<u8>>)> {
    pair(
        preceded(tag("atsc3:"), map_res(digit1, str::parse::<u32>)),
        opt(preceded(char(':'), plp_list)),
    )(input)
}

impl Atsc3Channel {
    /// Parse a full tune string; `None` for anything that is not a
    /// well-formed `atsc3:` selector.
    pub fn parse(input: &str) -> Option<Self> {
        let (_, (frequency, plps)) = all_consuming(tune_string)(input.trim()).ok()?;
        Some(Self {
            frequency,
            plps: plps.unwrap_or_default(),
        })
    }

    /// The channel portion without the PLP list, as the status pane shows
    /// it in the Channel column.
    pub fn channel_display(&self) -> String {
        format!("atsc3:{}", self.frequency)
    }

    /// The PLP suffix the status pane moves into the Lock column, when a
    /// PLP list was given.
    pub fn lock_display(&self) -> Option<String> {
        if self.plps.is_empty() {
            None
        } else {
            Some(format!("atsc3:{}", self.plp_selection()))
        }
    }

    /// PLP list in device syntax, e.g. `0+1+4`.
    pub fn plp_selection(&self) -> String {
        self.plps
            .iter()
            .map(u8::to_string)
            .collect::<Vec<_>>()
            .join("+")
    }

    /// Rebuild the full tune string.
    pub fn tune_string(&self) -> String {
        if self.plps.is_empty() {
            self.channel_display()
        } else {
            format!("atsc3:{}:{}", self.frequency, self.plp_selection())
        }
    }
}

/// Convert user PLP input (`"0,1"`) to device syntax (`"0+1"`).
///
/// Digits pass through, commas become `+`, everything else is dropped.
pub fn plp_selection_from_input(input: &str) -> String {
    input
        .chars()
        .filter_map(|c| match c {
            ',' => Some('+'),
            c if c.is_ascii_digit() => Some(c),
            _ => None,
        })
        .collect()
}

/// Build a selection covering every PLP a plpinfo blob reports.
///
/// Each PLP line opens with its id and a colon (`"0: lock=1 ..."`); lines
/// without that prefix (like `bsid=...`) are skipped.
pub fn plp_selection_from_plpinfo(plpinfo: &str) -> String {
    let mut ids = Vec::new();
    for line in plpinfo.lines() {
        if let Some(id) = leading_plp_id(line) {
            ids.push(id.to_string());
        }
    }
    ids.join("+")
}

fn leading_plp_id(line: &str) -> Option<u32> {
    let (_, digits) = terminated(digit1::<_, nom::error::Error<&str>>, char(':'))(line).ok()?;
    digits.parse().ok()
}

/// RF channel / frequency digits from a tune string: the digits after the
/// first `:` (`"atsc3:33:0+1"` gives 33), or leading digits when there is
/// no prefix.
pub fn rf_channel_number(channel: &str) -> Option<u32> {
    let rest = match channel.find(':') {
        Some(i) => &channel[i + 1..],
        None => channel,
    };
    let end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    rest[..end].parse().ok()
}

/// Channel numbers from a tuner channel map listing.
///
/// The leading map-name token is skipped and the result is sorted.
pub fn parse_channelmap(map: &str) -> Vec<u32> {
    let mut channels: Vec<u32> = map
        .split_whitespace()
        .skip(1)
        .filter_map(|token| token.parse().ok())
        .collect();
    channels.sort_unstable();
    channels
}

/// Available channel map names from the device's features blob
/// (`channelmap: us-bcast us-cable ...`).
pub fn channelmap_names(features: &str) -> Vec<String> {
    let start = match features.find("channelmap:") {
        Some(i) => i + "channelmap:".len(),
        None => return Vec::new(),
    };
    let rest = &features[start..];
    let line = match rest.find('\n') {
        Some(end) => &rest[..end],
        None => rest,
    };
    line.split_whitespace().map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_tune_string_with_plps() {
        let ch = Atsc3Channel::parse("atsc3:575000000:0+1+4").unwrap();
        assert_eq!(ch.frequency, 575000000);
        assert_eq!(ch.plps, vec![0, 1, 4]);
        assert_eq!(ch.channel_display(), "atsc3:575000000");
        assert_eq!(ch.lock_display().unwrap(), "atsc3:0+1+4");
        assert_eq!(ch.tune_string(), "atsc3:575000000:0+1+4");
    }

    #[test]
    fn test_parse_tune_string_without_plps() {
        let ch = Atsc3Channel::parse("atsc3:33").unwrap();
        assert_eq!(ch.frequency, 33);
        assert!(ch.plps.is_empty());
        assert_eq!(ch.lock_display(), None);
        assert_eq!(ch.tune_string(), "atsc3:33");
    }

    #[test]
    fn test_parse_rejects_malformed_strings() {
        assert_eq!(Atsc3Channel::parse("auto:33"), None);
        assert_eq!(Atsc3Channel::parse("atsc3:"), None);
        assert_eq!(Atsc3Channel::parse("atsc3:33:"), None);
        assert_eq!(Atsc3Channel::parse("atsc3:33:0+"), None);
        assert_eq!(Atsc3Channel::parse("atsc3:33:0,1"), None);
    }

    #[test]
    fn test_plp_selection_from_input() {
        assert_eq!(plp_selection_from_input("0,1"), "0+1");
        assert_eq!(plp_selection_from_input("0, 1, 16"), "0+1+16");
        assert_eq!(plp_selection_from_input("abc"), "");
    }

    #[test]
    fn test_plp_selection_from_plpinfo() {
        let blob = "bsid=17408\n0: lock=1 mod=qam256 cod=7/15\n16: lock=0 mod=qpsk cod=2/15\n";
        assert_eq!(plp_selection_from_plpinfo(blob), "0+16");
        assert_eq!(plp_selection_from_plpinfo("bsid=17408\n"), "");
    }

    #[test]
    fn test_rf_channel_number() {
        assert_eq!(rf_channel_number("atsc3:33:0+1"), Some(33));
        assert_eq!(rf_channel_number("auto:575000000"), Some(575000000));
        assert_eq!(rf_channel_number("33"), Some(33));
        assert_eq!(rf_channel_number("none"), None);
    }

    #[test]
    fn test_parse_channelmap() {
        assert_eq!(parse_channelmap("us-bcast 14 7 36 2"), vec![2, 7, 14, 36]);
        assert_eq!(parse_channelmap("us-bcast"), Vec::<u32>::new());
    }

    #[test]
    fn test_channelmap_names() {
        let features = "model: HDHR5-4K\nchannelmap: us-bcast us-cable\ntuners: 4\n";
        assert_eq!(channelmap_names(features), vec!["us-bcast", "us-cable"]);
        assert_eq!(channelmap_names("model: X"), Vec::<String>::new());
    }
}
