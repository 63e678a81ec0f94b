//! Name tables for L1 signaling enumerations.
//!
//! Values outside a table render as `Reserved`; no enumeration is ever
//! indexed unchecked.

pub(crate) fn time_info_name(value: u32) -> &'static str {
    match value {
        0 => "Not included",
        1 => "ms precision",
        2 => "us precision",
        _ => "ns precision",
    }
}

pub(crate) fn papr_reduction_name(value: u32) -> &'static str {
    match value {
        0 => "None",
        1 => "Tone reservation only",
        2 => "ACE only",
        _ => "Both TR and ACE",
    }
}

pub(crate) fn fft_size_name(value: u32) -> &'static str {
    match value {
        0 => "8K",
        1 => "16K",
        2 => "32K",
        _ => "Reserved",
    }
}

/// Guard interval sample counts for GI_1 through GI_12.
const GUARD_INTERVAL_SAMPLES: [u32; 12] = [
    192, 384, 512, 768, 1024, 1536, 2048, 2432, 3072, 3648, 4096, 4864,
];

pub(crate) fn guard_interval_name(value: u32) -> String {
    match value {
        1..=12 => format!("GI_{}_{}", value, GUARD_INTERVAL_SAMPLES[(value - 1) as usize]),
        _ => format!("Reserved ({})", value),
    }
}

const PLP_FEC_TYPES: [&str; 6] = [
    "BCH + 16K LDPC",
    "BCH + 64K LDPC",
    "CRC + 16K LDPC",
    "CRC + 64K LDPC",
    "16K LDPC only",
    "64K LDPC only",
];

pub(crate) fn plp_fec_type_name(value: u32) -> &'static str {
    PLP_FEC_TYPES.get(value as usize).copied().unwrap_or("Reserved")
}

const PLP_MODULATIONS: [&str; 6] = ["QPSK", "16QAM", "64QAM", "256QAM", "1024QAM", "4096QAM"];

pub(crate) fn plp_mod_name(value: u32) -> &'static str {
    PLP_MODULATIONS.get(value as usize).copied().unwrap_or("Reserved")
}

const PLP_CODE_RATES: [&str; 12] = [
    "2/15", "3/15", "4/15", "5/15", "6/15", "7/15", "8/15", "9/15", "10/15", "11/15", "12/15",
    "13/15",
];

pub(crate) fn plp_cod_name(value: u32) -> &'static str {
    PLP_CODE_RATES.get(value as usize).copied().unwrap_or("Reserved")
}

pub(crate) fn plp_layer_name(value: u32) -> &'static str {
    match value {
        0 => "Core",
        1 => "Enhanced",
        _ => "Reserved",
    }
}

pub(crate) fn scrambler_type_name(value: u32) -> &'static str {
    match value {
        0 => "PRBS",
        _ => "Reserved",
    }
}

pub(crate) fn ti_mode_name(value: u32) -> &'static str {
    match value {
        0 => "No TI",
        1 => "CTI",
        2 => "HTI",
        _ => "Reserved",
    }
}
