//! ATSC 3.0 ModCod to required-SNR lookup.
//!
//! Fixed physical-layer constants: for each (modulation, code rate) pair the
//! table holds the minimum and maximum SNR in dB required for reception.
//! The values are standard-derived and must not be edited.

/// One row of the required-SNR table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModCodSnr {
    /// Canonical modulation name, digits first (e.g. `256QAM`).
    pub modulation: &'static str,
    /// Code rate as `n/15`.
    pub code_rate: &'static str,
    /// Minimum required SNR in dB.
    pub min_snr: f32,
    /// Maximum required SNR in dB.
    pub max_snr: f32,
}

const fn row(modulation: &'static str, code_rate: &'static str, min_snr: f32, max_snr: f32) -> ModCodSnr {
    ModCodSnr {
        modulation,
        code_rate,
        min_snr,
        max_snr,
    }
}

/// Required-SNR table, 6 modulations x 12 code rates.
pub static SNR_TABLE: [ModCodSnr; 72] = [
    row("QPSK", "2/15", -6.23, -5.06),
    row("QPSK", "3/15", -4.32, -2.97),
    row("QPSK", "4/15", -2.89, -1.36),
    row("QPSK", "5/15", -1.7, -0.08),
    row("QPSK", "6/15", -0.54, 1.15),
    row("QPSK", "7/15", 0.3, 2.3),
    row("QPSK", "8/15", 1.16, 3.44),
    row("QPSK", "9/15", 1.97, 4.7),
    row("QPSK", "10/15", 2.77, 5.97),
    row("QPSK", "11/15", 3.6, 7.46),
    row("QPSK", "12/15", 4.49, 9.15),
    row("QPSK", "13/15", 5.53, 11.56),
    row("16QAM", "2/15", -2.73, -1.14),
    row("16QAM", "3/15", -0.25, 1.45),
    row("16QAM", "4/15", 1.46, 3.41),
    row("16QAM", "5/15", 2.82, 4.78),
    row("16QAM", "6/15", 4.21, 6.27),
    row("16QAM", "7/15", 5.21, 7.58),
    row("16QAM", "8/15", 6.3, 8.96),
    row("16QAM", "9/15", 7.32, 10.28),
    row("16QAM", "10/15", 8.36, 11.73),
    row("16QAM", "11/15", 9.5, 13.22),
    row("16QAM", "12/15", 10.57, 14.97),
    row("16QAM", "13/15", 11.83, 17.44),
    row("64QAM", "2/15", -0.26, 1.6),
    row("64QAM", "3/15", 2.27, 4.3),
    row("64QAM", "4/15", 4.07, 6.22),
    row("64QAM", "5/15", 5.5, 7.74),
    row("64QAM", "6/15", 6.96, 9.31),
    row("64QAM", "7/15", 8.01, 10.65),
    row("64QAM", "8/15", 9.11, 12.03),
    row("64QAM", "9/15", 10.15, 13.34),
    row("64QAM", "10/15", 11.21, 14.77),
    row("64QAM", "11/15", 12.38, 16.23),
    row("64QAM", "12/15", 13.48, 17.95),
    row("64QAM", "13/15", 14.75, 20.37),
    row("256QAM", "2/15", 2.37, 4.21),
    row("256QAM", "3/15", 5.0, 7.0),
    row("256QAM", "4/15", 6.88, 8.99),
    row("256QAM", "5/15", 8.35, 10.55),
    row("256QAM", "6/15", 9.85, 12.15),
    row("256QAM", "7/15", 10.93, 13.51),
    row("256QAM", "8/15", 12.05, 14.9),
    row("256QAM", "9/15", 13.1, 16.2),
    row("256QAM", "10/15", 14.18, 17.61),
    row("256QAM", "11/15", 15.35, 19.05),
    row("256QAM", "12/15", 16.45, 20.73),
    row("256QAM", "13/15", 17.72, 23.1),
    row("1024QAM", "2/15", 4.97, 6.81),
    row("1024QAM", "3/15", 7.69, 9.7),
    row("1024QAM", "4/15", 9.61, 11.75),
    row("1024QAM", "5/15", 11.12, 13.34),
    row("1024QAM", "6/15", 12.65, 14.97),
    row("1024QAM", "7/15", 13.75, 16.35),
    row("1024QAM", "8/15", 14.89, 17.75),
    row("1024QAM", "9/15", 15.95, 19.06),
    row("1024QAM", "10/15", 17.03, 20.46),
    row("1024QAM", "11/15", 18.2, 21.9),
    row("1024QAM", "12/15", 19.31, 23.55),
    row("1024QAM", "13/15", 20.58, 25.88),
    row("4096QAM", "2/15", 7.58, 9.41),
    row("4096QAM", "3/15", 10.38, 12.4),
    row("4096QAM", "4/15", 12.34, 14.45),
    row("4096QAM", "5/15", 13.88, 16.07),
    row("4096QAM", "6/15", 15.44, 17.72),
    row("4096QAM", "7/15", 16.56, 19.11),
    row("4096QAM", "8/15", 17.72, 20.52),
    row("4096QAM", "9/15", 18.79, 21.84),
    row("4096QAM", "10/15", 19.88, 23.25),
    row("4096QAM", "11/15", 21.05, 24.69),
    row("4096QAM", "12/15", 22.16, 26.34),
    row("4096QAM", "13/15", 23.43, 28.62),
];

/// Canonicalize a device-reported modulation string into the table key.
///
/// Separates the digit run from the letter run (letters upper-cased) and
/// reassembles digits first: `"qam256"` becomes `"256QAM"`, `"qpsk"` becomes
/// `"QPSK"`. Character order in the input does not matter.
pub fn normalize_modulation(raw: &str) -> String {
    let mut digits = String::new();
    let mut letters = String::new();
    for c in raw.chars() {
        if c.is_ascii_digit() {
            digits.push(c);
        } else {
            letters.extend(c.to_uppercase());
        }
    }
    digits + &letters
}

/// Find the required-SNR row for an exact (modulation, code rate) match.
///
/// A miss is not an error; callers simply omit the SNR annotation.
pub fn lookup(modulation: &str, code_rate: &str) -> Option<&'static ModCodSnr> {
    SNR_TABLE
        .iter()
        .find(|entry| entry.modulation == modulation && entry.code_rate == code_rate)
}
