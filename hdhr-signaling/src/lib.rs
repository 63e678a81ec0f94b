//! ATSC 3.0 Layer-1 signaling and HDHomeRun tuner status parsing.
//!
//! This library decodes the bit-packed L1-Basic / L1-Detail signaling blob
//! that ATSC 3.0 capable HDHomeRun tuners expose as a Base64 `l1detail`
//! variable, and enriches per-PLP tuner status with required-SNR lookups
//! from the fixed ModCod table.
//!
//! The device I/O itself (discovery, tuning, status queries) is a separate
//! concern; everything here operates on the opaque strings and byte buffers
//! such a query returns.

pub mod base64;
pub mod bits;
pub mod channels;
pub mod details;
pub mod error;
pub mod l1;
pub mod modcod;
pub mod report;
pub mod status;

// Re-export commonly used types
pub use bits::BitReader;
pub use details::collect_details;
pub use error::{Base64Error, BitsExhausted};
pub use report::{render_report, ReportLine};
