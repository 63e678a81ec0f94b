//! ATSC 3.0 Layer-1 signaling decoder (A/322).
//!
//! Decodes the L1-Basic and L1-Detail blocks from a raw byte buffer into an
//! ordered field report. The grammar is a single linear pass with internal
//! branch points: fields decoded early (subframe count, MIMO flags, PLP
//! layer, time-interleaving mode) govern the presence and repetition of
//! fields decoded later. All of that gating state lives in locals scoped to
//! one decode call.
//!
//! Truncated input never panics: the decode stops at the first exhausted
//! read and the report ends with a [`ReportLine::Truncated`] marker.

mod tables;

use crate::bits::BitReader;
use crate::error::BitsExhausted;
use crate::report::ReportLine;

use tables::*;

/// L1-Basic fields that gate the L1-Detail parse.
#[derive(Debug, Clone, Copy)]
struct BasicFields {
    version: u32,
    time_info_flag: u32,
    num_subframes: u32,
    detail_size_bytes: u32,
    first_sub_mimo: bool,
    first_sub_sbs_first: bool,
    first_sub_sbs_last: bool,
    first_sub_mimo_mixed: bool,
}

/// Decode an L1-Basic + L1-Detail buffer into report lines.
///
/// Always returns the fields decoded so far; a buffer shorter than the
/// grammar demands yields a partial report ending in
/// [`ReportLine::Truncated`].
pub fn decode(data: &[u8]) -> Vec<ReportLine> {
    let mut decoder = L1Decoder {
        reader: BitReader::new(data),
        out: Vec::new(),
    };
    if let Err(e) = decoder.parse() {
        log::warn!("L1 signaling truncated: {}", e);
        decoder.out.push(ReportLine::Truncated);
    }
    decoder.out
}

struct L1Decoder<'a> {
    reader: BitReader<'a>,
    out: Vec<ReportLine>,
}

impl L1Decoder<'_> {
    fn field(&mut self, depth: u8, label: &str, value: impl Into<String>) {
        self.out.push(ReportLine::field(depth, label, value));
    }

    fn parse(&mut self) -> Result<(), BitsExhausted> {
        let basic = self.parse_basic()?;
        self.parse_detail(&basic)?;
        self.emit_trailer();
        Ok(())
    }

    /// L1-Basic: a fixed 200-bit block.
    fn parse_basic(&mut self) -> Result<BasicFields, BitsExhausted> {
        self.out.push(ReportLine::section("L1-Basic Signaling"));

        let version = self.reader.read(3)?;
        self.field(0, "L1B_version", version.to_string());

        let value = self.reader.read(1)?;
        self.field(
            0,
            "L1B_mimo_scattered_pilot_encoding",
            if value == 0 { "Walsh-Hadamard" } else { "Null pilots" },
        );

        let value = self.reader.read(1)?;
        self.field(0, "L1B_lls_flag", if value == 0 { "No LLS" } else { "LLS present" });

        let time_info_flag = self.reader.read(2)?;
        self.field(0, "L1B_time_info_flag", time_info_name(time_info_flag));

        let value = self.reader.read(1)?;
        self.field(0, "L1B_return_channel_flag", value.to_string());

        let value = self.reader.read(2)?;
        self.field(0, "L1B_papr_reduction", papr_reduction_name(value));

        let value = self.reader.read(1)?;
        if value == 0 {
            self.field(0, "L1B_frame_length_mode", "Time-aligned");
            let value = self.reader.read(10)?;
            self.field(1, "L1B_frame_length", value.to_string());
            let value = self.reader.read(13)?;
            self.field(1, "L1B_excess_samples_per_symbol", value.to_string());
        } else {
            self.field(0, "L1B_frame_length_mode", "Symbol-aligned");
            let value = self.reader.read(16)?;
            self.field(1, "L1B_time_offset", value.to_string());
            let value = self.reader.read(7)?;
            self.field(1, "L1B_additional_samples", value.to_string());
        }

        let num_subframes = self.reader.read(8)?;
        self.field(0, "L1B_num_subframes", (num_subframes + 1).to_string());

        let value = self.reader.read(3)?;
        self.field(0, "L1B_preamble_num_symbols", (value + 1).to_string());
        let value = self.reader.read(3)?;
        self.field(0, "L1B_preamble_reduced_carriers", value.to_string());
        let value = self.reader.read(2)?;
        self.field(0, "L1B_L1_Detail_content_tag", value.to_string());

        let detail_size_bytes = self.reader.read(13)?;
        self.field(0, "L1B_L1_Detail_size_bytes", detail_size_bytes.to_string());

        let value = self.reader.read(3)?;
        self.field(0, "L1B_L1_Detail_fec_type", format!("Mode {}", value + 1));
        let value = self.reader.read(2)?;
        self.field(0, "L1B_L1_additional_parity_mode", format!("K={}", value));
        let value = self.reader.read(19)?;
        self.field(0, "L1B_L1_Detail_total_cells", value.to_string());

        let first_sub_mimo = self.reader.read(1)?;
        self.field(
            0,
            "L1B_first_sub_mimo",
            if first_sub_mimo == 0 { "No MIMO" } else { "MIMO" },
        );
        let value = self.reader.read(2)?;
        self.field(0, "L1B_first_sub_miso", value.to_string());
        let value = self.reader.read(2)?;
        self.field(0, "L1B_first_sub_fft_size", fft_size_name(value));
        let value = self.reader.read(3)?;
        self.field(0, "L1B_first_sub_reduced_carriers", value.to_string());
        let value = self.reader.read(4)?;
        self.field(0, "L1B_first_sub_guard_interval", guard_interval_name(value));
        let value = self.reader.read(11)?;
        self.field(0, "L1B_first_sub_num_ofdm_symbols", (value + 1).to_string());
        let value = self.reader.read(5)?;
        self.field(0, "L1B_first_sub_scattered_pilot_pattern", value.to_string());
        let value = self.reader.read(3)?;
        self.field(0, "L1B_first_sub_scattered_pilot_boost", value.to_string());

        let first_sub_sbs_first = self.reader.read(1)?;
        self.field(0, "L1B_first_sub_sbs_first", first_sub_sbs_first.to_string());
        let first_sub_sbs_last = self.reader.read(1)?;
        self.field(0, "L1B_first_sub_sbs_last", first_sub_sbs_last.to_string());

        // Reserved tail; version 1 carves one mimo_mixed bit out of it.
        let mut first_sub_mimo_mixed = 0;
        if version >= 1 {
            first_sub_mimo_mixed = self.reader.read(1)?;
            self.field(0, "L1B_first_sub_mimo_mixed", first_sub_mimo_mixed.to_string());
            self.reader.skip(47)?;
        } else {
            self.reader.skip(48)?;
        }

        let crc = self.reader.read(32)?;
        self.field(0, "L1B_crc", format!("0x{:08x}", crc));

        Ok(BasicFields {
            version,
            time_info_flag,
            num_subframes,
            detail_size_bytes,
            first_sub_mimo: first_sub_mimo == 1,
            first_sub_sbs_first: first_sub_sbs_first == 1,
            first_sub_sbs_last: first_sub_sbs_last == 1,
            first_sub_mimo_mixed: first_sub_mimo_mixed == 1,
        })
    }

    fn parse_detail(&mut self, basic: &BasicFields) -> Result<(), BitsExhausted> {
        self.out.push(ReportLine::Blank);
        self.out.push(ReportLine::section("L1-Detail Signaling"));

        let detail_start = self.reader.position();

        let version = self.reader.read(4)?;
        self.field(0, "L1D_version", version.to_string());
        let num_rf = self.reader.read(3)?;
        self.field(0, "L1D_num_rf", num_rf.to_string());
        for _ in 0..num_rf {
            let value = self.reader.read(16)?;
            self.field(1, "L1D_bonded_bsid", format!("0x{:04x}", value));
            self.reader.skip(3)?;
        }

        if basic.time_info_flag != 0 {
            let value = self.reader.read(32)?;
            self.field(0, "L1D_time_sec", value.to_string());
            let value = self.reader.read(10)?;
            self.field(0, "L1D_time_msec", value.to_string());
            if basic.time_info_flag > 1 {
                let value = self.reader.read(10)?;
                self.field(0, "L1D_time_usec", value.to_string());
                if basic.time_info_flag > 2 {
                    let value = self.reader.read(10)?;
                    self.field(0, "L1D_time_nsec", value.to_string());
                }
            }
        }

        // PLP count per subframe, needed again by the version 2 MIMO pass.
        let mut plp_counts: Vec<u32> = Vec::with_capacity(basic.num_subframes as usize + 1);

        for i in 0..=basic.num_subframes {
            self.out.push(ReportLine::Blank);
            self.out.push(ReportLine::group(0, format!("Subframe #{}", i)));

            // Subframe 0 reuses the first-subframe parameters from L1-Basic;
            // later subframes carry the block inline.
            let mut mimo = false;
            let mut sbs_first = false;
            let mut sbs_last = false;
            if i > 0 {
                let value = self.reader.read(1)?;
                mimo = value == 1;
                self.field(1, "L1D_mimo", if value == 0 { "No MIMO" } else { "MIMO" });
                let value = self.reader.read(2)?;
                self.field(1, "L1D_miso", value.to_string());
                let value = self.reader.read(2)?;
                self.field(1, "L1D_fft_size", fft_size_name(value));
                let value = self.reader.read(3)?;
                self.field(1, "L1D_reduced_carriers", value.to_string());
                let value = self.reader.read(4)?;
                self.field(1, "L1D_guard_interval", guard_interval_name(value));
                let value = self.reader.read(11)?;
                self.field(1, "L1D_num_ofdm_symbols", (value + 1).to_string());
                let value = self.reader.read(5)?;
                self.field(1, "L1D_scattered_pilot_pattern", value.to_string());
                let value = self.reader.read(3)?;
                self.field(1, "L1D_scattered_pilot_boost", value.to_string());
                let value = self.reader.read(1)?;
                sbs_first = value == 1;
                self.field(1, "L1D_sbs_first", value.to_string());
                let value = self.reader.read(1)?;
                sbs_last = value == 1;
                self.field(1, "L1D_sbs_last", value.to_string());
            }

            if basic.num_subframes > 0 {
                let value = self.reader.read(1)?;
                self.field(1, "L1D_subframe_multiplex", value.to_string());
            }

            let value = self.reader.read(1)?;
            self.field(
                1,
                "L1D_frequency_interleaver",
                if value == 0 { "Preamble Only" } else { "All Symbols" },
            );

            let sbs_gate = if i == 0 {
                basic.first_sub_sbs_first || basic.first_sub_sbs_last
            } else {
                sbs_first || sbs_last
            };
            if sbs_gate {
                let value = self.reader.read(13)?;
                self.field(1, "L1D_sbs_null_cells", value.to_string());
            }

            let num_plp = self.reader.read(6)?;
            self.field(1, "L1D_num_plp", (num_plp + 1).to_string());
            plp_counts.push(num_plp);

            let subframe_mimo = if i == 0 { basic.first_sub_mimo } else { mimo };
            for j in 0..=num_plp {
                self.parse_plp(j, num_rf, subframe_mimo)?;
            }
        }

        if version >= 1 {
            let value = self.reader.read(16)?;
            self.field(0, "L1D_bsid", format!("0x{:04x}", value));
        }

        if version >= 2 {
            self.parse_mimo_mixed(basic, &plp_counts)?;
        }

        // The detail block is padded out to its signaled byte size; consume
        // the padding so the CRC lands on the final 32 bits.
        let consumed = (self.reader.position() - detail_start) as i64;
        let padding = i64::from(basic.detail_size_bytes) * 8 - 32 - consumed;
        if padding > 0 {
            self.reader.skip(padding as usize)?;
        }
        let crc = self.reader.read(32)?;
        self.field(0, "L1D_crc", format!("0x{:08x}", crc));

        Ok(())
    }

    fn parse_plp(&mut self, index: u32, num_rf: u32, subframe_mimo: bool) -> Result<(), BitsExhausted> {
        self.out.push(ReportLine::group(2, format!("PLP #{}", index)));

        let value = self.reader.read(6)?;
        self.field(3, "L1D_plp_id", value.to_string());
        let value = self.reader.read(1)?;
        self.field(3, "L1D_plp_lls_flag", value.to_string());
        let layer = self.reader.read(2)?;
        self.field(3, "L1D_plp_layer", plp_layer_name(layer));
        let value = self.reader.read(24)?;
        self.field(3, "L1D_plp_start", value.to_string());
        let value = self.reader.read(24)?;
        self.field(3, "L1D_plp_size", value.to_string());
        let value = self.reader.read(2)?;
        self.field(3, "L1D_plp_scrambler_type", scrambler_type_name(value));

        let fec_type = self.reader.read(4)?;
        self.field(3, "L1D_plp_fec_type", plp_fec_type_name(fec_type));

        // Mod/cod are only signaled for the six defined FEC combinations.
        let mut plp_mod = 0;
        if fec_type <= 5 {
            plp_mod = self.reader.read(4)?;
            self.field(3, "L1D_plp_mod", plp_mod_name(plp_mod));
            let value = self.reader.read(4)?;
            self.field(3, "L1D_plp_cod", plp_cod_name(value));
        }

        let ti_mode = self.reader.read(2)?;
        self.field(3, "L1D_plp_TI_mode", ti_mode_name(ti_mode));
        if ti_mode == 0 {
            let value = self.reader.read(15)?;
            self.field(3, "L1D_plp_fec_block_start", value.to_string());
        } else if ti_mode == 1 {
            let value = self.reader.read(22)?;
            self.field(3, "L1D_plp_CTI_fec_block_start", value.to_string());
        }

        if num_rf > 0 {
            let bonded = self.reader.read(3)?;
            self.field(3, "L1D_plp_num_channel_bonded", bonded.to_string());
            if bonded > 0 {
                let value = self.reader.read(2)?;
                self.field(3, "L1D_plp_channel_bonding_format", value.to_string());
                for _ in 0..bonded {
                    let value = self.reader.read(3)?;
                    self.field(4, "L1D_plp_bonded_rf_id", value.to_string());
                }
            }
        }

        if subframe_mimo {
            let value = self.reader.read(1)?;
            self.field(3, "L1D_plp_mimo_stream_combining", value.to_string());
            let value = self.reader.read(1)?;
            self.field(3, "L1D_plp_mimo_IQ_interleaving", value.to_string());
            let value = self.reader.read(1)?;
            self.field(3, "L1D_plp_mimo_PH", value.to_string());
        }

        if layer == 0 {
            let value = self.reader.read(1)?;
            if value == 0 {
                self.field(3, "L1D_plp_type", "non-dispersed");
            } else {
                self.field(3, "L1D_plp_type", "dispersed");
                let value = self.reader.read(14)?;
                self.field(3, "L1D_plp_num_subslices", (value + 1).to_string());
                let value = self.reader.read(24)?;
                self.field(3, "L1D_plp_subslice_interval", value.to_string());
            }

            if (ti_mode == 1 || ti_mode == 2) && plp_mod == 0 {
                let value = self.reader.read(1)?;
                self.field(3, "L1D_plp_TI_extended_interleaving", value.to_string());
            }

            if ti_mode == 1 {
                let value = self.reader.read(3)?;
                self.field(3, "L1D_plp_CTI_depth", value.to_string());
                let value = self.reader.read(11)?;
                self.field(3, "L1D_plp_CTI_start_row", value.to_string());
            } else if ti_mode == 2 {
                let inter_subframe = self.reader.read(1)?;
                self.field(3, "L1D_plp_HTI_inter_subframe", inter_subframe.to_string());
                let num_ti_blocks = self.reader.read(4)?;
                self.field(3, "L1D_plp_HTI_num_ti_blocks", (num_ti_blocks + 1).to_string());
                let value = self.reader.read(12)?;
                self.field(3, "L1D_plp_HTI_num_fec_blocks_max", (value + 1).to_string());
                if inter_subframe == 0 {
                    let value = self.reader.read(12)?;
                    self.field(3, "L1D_plp_HTI_num_fec_blocks", (value + 1).to_string());
                } else {
                    for _ in 0..=num_ti_blocks {
                        let value = self.reader.read(12)?;
                        self.field(4, "L1D_plp_HTI_num_fec_blocks", (value + 1).to_string());
                    }
                }
                let value = self.reader.read(1)?;
                self.field(3, "L1D_plp_HTI_cell_interleaver", value.to_string());
            }
        } else {
            let value = self.reader.read(5)?;
            self.field(3, "L1D_plp_ldm_injection_level", value.to_string());
        }

        Ok(())
    }

    /// Detail version 2: a second pass over the subframes flagging
    /// mixed-MIMO PLPs.
    fn parse_mimo_mixed(
        &mut self,
        basic: &BasicFields,
        plp_counts: &[u32],
    ) -> Result<(), BitsExhausted> {
        for i in 0..=basic.num_subframes {
            let mut mimo_mixed = false;
            if i > 0 {
                let value = self.reader.read(1)?;
                mimo_mixed = value == 1;
                self.field(
                    1,
                    &format!("Subframe #{} L1D_mimo_mixed", i),
                    value.to_string(),
                );
            }
            let gate = if i == 0 { basic.first_sub_mimo_mixed } else { mimo_mixed };
            if !gate {
                continue;
            }
            let num_plp = plp_counts.get(i as usize).copied().unwrap_or(0);
            for j in 0..=num_plp {
                let value = self.reader.read(1)?;
                self.field(2, &format!("PLP #{} L1D_plp_mimo", j), value.to_string());
                if value == 1 {
                    let value = self.reader.read(1)?;
                    self.field(3, "L1D_plp_mimo_stream_combining", value.to_string());
                    let value = self.reader.read(1)?;
                    self.field(3, "L1D_plp_mimo_IQ_interleaving", value.to_string());
                    let value = self.reader.read(1)?;
                    self.field(3, "L1D_plp_mimo_PH", value.to_string());
                }
            }
        }
        Ok(())
    }

    /// Bits left over after the CRC come from a buffer longer than the
    /// signaled detail size; dump them in hex for diagnosis.
    fn emit_trailer(&mut self) {
        if self.reader.remaining() == 0 {
            return;
        }
        self.out.push(ReportLine::Blank);
        self.out.push(ReportLine::section("Undecoded Trailing Bits"));
        while self.reader.remaining() >= 32 {
            match self.reader.read(32) {
                Ok(value) => self.field(0, "L1_raw_bits", format!("0x{:08x}", value)),
                Err(_) => return,
            }
        }
        let rem = self.reader.remaining();
        if rem > 0 {
            if let Ok(value) = self.reader.read(rem as u32) {
                self.field(0, "L1_raw_bits", format!("0x{:x} ({} bits)", value, rem));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bits::BitWriter;
    use crate::report::render_report;

    /// L1-Basic block for a single-subframe, no-MIMO frame. Returns the
    /// writer so the caller can append the detail block.
    fn write_basic(detail_size_bytes: u32) -> BitWriter {
        let mut w = BitWriter::new();
        w.push(0, 3); // L1B_version
        w.push(0, 1); // mimo_scattered_pilot_encoding
        w.push(0, 1); // lls_flag
        w.push(0, 2); // time_info_flag: not included
        w.push(0, 1); // return_channel_flag
        w.push(0, 2); // papr_reduction
        w.push(0, 1); // frame_length_mode: time-aligned
        w.push(100, 10); // frame_length
        w.push(0, 13); // excess_samples_per_symbol
        w.push(0, 8); // num_subframes (displays 1)
        w.push(1, 3); // preamble_num_symbols (displays 2)
        w.push(0, 3); // preamble_reduced_carriers
        w.push(0, 2); // content_tag
        w.push(u64::from(detail_size_bytes), 13);
        w.push(0, 3); // detail_fec_type: Mode 1
        w.push(0, 2); // additional_parity_mode
        w.push(0, 19); // total_cells
        w.push(0, 1); // first_sub_mimo
        w.push(0, 2); // first_sub_miso
        w.push(1, 2); // first_sub_fft_size: 16K
        w.push(0, 3); // first_sub_reduced_carriers
        w.push(5, 4); // first_sub_guard_interval: GI_5_1024
        w.push(71, 11); // first_sub_num_ofdm_symbols (displays 72)
        w.push(3, 5); // first_sub_scattered_pilot_pattern
        w.push(0, 3); // first_sub_scattered_pilot_boost
        w.push(0, 1); // first_sub_sbs_first
        w.push(0, 1); // first_sub_sbs_last
        w.push(0, 48); // reserved
        w.push(0xDEAD_BEEF, 32); // L1B_crc
        assert_eq!(w.bit_len(), 200);
        w
    }

    /// Detail block with one subframe and one core-layer 256QAM 7/15 PLP,
    /// no RF bonding, no MIMO. Consumes 103 bits before padding; with
    /// detail_size_bytes = 17 one padding bit precedes the CRC and the
    /// whole buffer is exactly 42 bytes.
    fn write_detail(w: &mut BitWriter) {
        w.push(0, 4); // L1D_version
        w.push(0, 3); // num_rf
        w.push(0, 1); // subframe 0: frequency_interleaver
        w.push(0, 6); // num_plp (displays 1)
        w.push(0, 6); // plp_id
        w.push(0, 1); // plp_lls_flag
        w.push(0, 2); // plp_layer: Core
        w.push(0, 24); // plp_start
        w.push(1000, 24); // plp_size
        w.push(0, 2); // plp_scrambler_type
        w.push(0, 4); // plp_fec_type: BCH + 16K LDPC
        w.push(3, 4); // plp_mod: 256QAM
        w.push(5, 4); // plp_cod: 7/15
        w.push(0, 2); // plp_TI_mode: No TI
        w.push(0, 15); // plp_fec_block_start
        w.push(0, 1); // plp_type: non-dispersed
        w.push(0, 1); // padding to detail_size_bytes
        w.push(0xCAFE_F00D, 32); // L1D_crc
    }

    fn single_plp_fixture() -> Vec<u8> {
        let mut w = write_basic(17);
        write_detail(&mut w);
        assert_eq!(w.bit_len(), 336);
        w.into_bytes()
    }

    fn rendered(lines: &[ReportLine]) -> String {
        render_report(lines)
    }

    #[test]
    fn test_single_plp_end_to_end() {
        let data = single_plp_fixture();
        let lines = decode(&data);
        let text = rendered(&lines);

        // Field order and display biases.
        let expected_in_order = [
            "--- L1-Basic Signaling ---",
            "L1B_version: 0",
            "L1B_mimo_scattered_pilot_encoding: Walsh-Hadamard",
            "L1B_lls_flag: No LLS",
            "L1B_time_info_flag: Not included",
            "L1B_frame_length_mode: Time-aligned",
            "  L1B_frame_length: 100",
            "L1B_num_subframes: 1",
            "L1B_preamble_num_symbols: 2",
            "L1B_L1_Detail_size_bytes: 17",
            "L1B_L1_Detail_fec_type: Mode 1",
            "L1B_first_sub_mimo: No MIMO",
            "L1B_first_sub_fft_size: 16K",
            "L1B_first_sub_guard_interval: GI_5_1024",
            "L1B_first_sub_num_ofdm_symbols: 72",
            "L1B_crc: 0xdeadbeef",
            "--- L1-Detail Signaling ---",
            "L1D_version: 0",
            "L1D_num_rf: 0",
            "Subframe #0:",
            "  L1D_frequency_interleaver: Preamble Only",
            "  L1D_num_plp: 1",
            "    PLP #0:",
            "      L1D_plp_id: 0",
            "      L1D_plp_layer: Core",
            "      L1D_plp_size: 1000",
            "      L1D_plp_fec_type: BCH + 16K LDPC",
            "      L1D_plp_mod: 256QAM",
            "      L1D_plp_cod: 7/15",
            "      L1D_plp_TI_mode: No TI",
            "      L1D_plp_fec_block_start: 0",
            "      L1D_plp_type: non-dispersed",
            "L1D_crc: 0xcafef00d",
        ];
        let mut cursor = 0;
        for needle in expected_in_order {
            let pos = text[cursor..]
                .find(needle)
                .unwrap_or_else(|| panic!("missing or out of order: {:?}", needle));
            cursor += pos + needle.len();
        }

        // The CRC is the last 32 bits of the buffer.
        let n = data.len();
        let crc = u32::from_be_bytes([data[n - 4], data[n - 3], data[n - 2], data[n - 1]]);
        assert_eq!(crc, 0xCAFE_F00D);
        assert!(lines
            .iter()
            .any(|l| *l == ReportLine::field(0, "L1D_crc", "0xcafef00d")));

        // Fully consumed: no trailer, no truncation.
        assert!(!text.contains("Truncated"));
        assert!(!text.contains("L1_raw_bits"));
    }

    #[test]
    fn test_symbol_aligned_frame_length_branch() {
        let mut w = BitWriter::new();
        w.push(0, 3);
        w.push(0, 1);
        w.push(0, 1);
        w.push(0, 2);
        w.push(0, 1);
        w.push(0, 2);
        w.push(1, 1); // frame_length_mode: symbol-aligned
        w.push(4096, 16); // time_offset
        w.push(42, 7); // additional_samples
        let data = w.into_bytes();

        let text = rendered(&decode(&data));
        assert!(text.contains("L1B_frame_length_mode: Symbol-aligned"));
        assert!(text.contains("  L1B_time_offset: 4096"));
        assert!(text.contains("  L1B_additional_samples: 42"));
        // The buffer stops mid-block.
        assert!(text.contains("--- Truncated ---"));
    }

    #[test]
    fn test_truncated_input_is_safe_and_marked() {
        let data = single_plp_fixture();
        for len in 0..data.len() - 1 {
            let lines = decode(&data[..len]);
            assert_eq!(
                lines.last(),
                Some(&ReportLine::Truncated),
                "len={}",
                len
            );
        }
        // The empty buffer still yields the marker after the section banner.
        let lines = decode(&[]);
        assert_eq!(lines.last(), Some(&ReportLine::Truncated));
    }

    #[test]
    fn test_trailing_bytes_are_dumped_as_raw_bits() {
        let mut data = single_plp_fixture();
        data.extend_from_slice(&[0x11, 0x22, 0x33, 0x44, 0xAB]);

        let text = rendered(&decode(&data));
        assert!(text.contains("--- Undecoded Trailing Bits ---"));
        assert!(text.contains("L1_raw_bits: 0x11223344"));
        assert!(text.contains("L1_raw_bits: 0xab (8 bits)"));
        assert!(!text.contains("Truncated"));
    }

    #[test]
    fn test_time_fields_follow_precision_tiers() {
        // time_info_flag = 2 adds sec/msec/usec but no nsec.
        let mut w = BitWriter::new();
        w.push(0, 3);
        w.push(0, 1);
        w.push(0, 1);
        w.push(2, 2); // time_info_flag: us precision
        w.push(0, 1);
        w.push(0, 2);
        w.push(0, 1);
        w.push(0, 10);
        w.push(0, 13);
        w.push(0, 8);
        w.push(0, 3);
        w.push(0, 3);
        w.push(0, 2);
        w.push(0, 13); // detail_size_bytes = 0: no padding skip
        w.push(0, 3);
        w.push(0, 2);
        w.push(0, 19);
        w.push(0, 1);
        w.push(0, 2);
        w.push(0, 2);
        w.push(0, 3);
        w.push(0, 4);
        w.push(0, 11);
        w.push(0, 5);
        w.push(0, 3);
        w.push(0, 1);
        w.push(0, 1);
        w.push(0, 48);
        w.push(0, 32);
        // Detail header with the three time fields.
        w.push(0, 4);
        w.push(0, 3);
        w.push(1_700_000_000, 32); // time_sec
        w.push(123, 10); // time_msec
        w.push(456, 10); // time_usec
        let data = w.into_bytes();

        let text = rendered(&decode(&data));
        assert!(text.contains("L1B_time_info_flag: us precision"));
        assert!(text.contains("L1D_time_sec: 1700000000"));
        assert!(text.contains("L1D_time_msec: 123"));
        assert!(text.contains("L1D_time_usec: 456"));
        assert!(!text.contains("L1D_time_nsec"));
        assert!(text.contains("--- Truncated ---"));
    }

    #[test]
    fn test_two_subframes_with_bonding_mimo_and_hti() {
        let mut w = BitWriter::new();
        // L1-Basic, version 1, two subframes, one bonded RF channel.
        w.push(1, 3); // L1B_version = 1
        w.push(0, 1);
        w.push(0, 1);
        w.push(0, 2); // time_info_flag: none
        w.push(0, 1);
        w.push(0, 2);
        w.push(0, 1);
        w.push(0, 10);
        w.push(0, 13);
        w.push(1, 8); // num_subframes (displays 2)
        w.push(0, 3);
        w.push(0, 3);
        w.push(0, 2);
        w.push(0, 13); // detail_size_bytes = 0: padding skip is a no-op
        w.push(0, 3);
        w.push(0, 2);
        w.push(0, 19);
        w.push(0, 1); // first_sub_mimo: none
        w.push(0, 2);
        w.push(0, 2);
        w.push(0, 3);
        w.push(1, 4);
        w.push(0, 11);
        w.push(0, 5);
        w.push(0, 3);
        w.push(0, 1); // sbs_first
        w.push(1, 1); // sbs_last: gates sbs_null_cells in subframe 0
        w.push(0, 1); // first_sub_mimo_mixed (version 1 layout)
        w.push(0, 47);
        w.push(0x1111_2222, 32);

        // L1-Detail: version 1, one bonded RF id.
        w.push(1, 4); // L1D_version = 1
        w.push(1, 3); // num_rf = 1
        w.push(0x4401, 16); // bonded_bsid
        w.push(0, 3); // reserved

        // Subframe 0: one enhanced-layer PLP.
        w.push(1, 1); // subframe_multiplex (num_subframes > 0)
        w.push(1, 1); // frequency_interleaver: all symbols
        w.push(96, 13); // sbs_null_cells (sbs_last was set)
        w.push(0, 6); // num_plp (displays 1)
        w.push(1, 6); // plp_id
        w.push(0, 1);
        w.push(1, 2); // plp_layer: Enhanced
        w.push(0, 24);
        w.push(500, 24);
        w.push(0, 2);
        w.push(1, 4); // fec_type: BCH + 64K LDPC
        w.push(0, 4); // plp_mod: QPSK
        w.push(2, 4); // plp_cod: 4/15
        w.push(2, 2); // TI_mode: HTI (no start field for mode 2)
        w.push(0, 3); // num_channel_bonded = 0 (num_rf > 0)
        w.push(7, 5); // ldm_injection_level (enhanced layer)

        // Subframe 1: MIMO, one core-layer HTI PLP with two TI blocks.
        w.push(1, 1); // L1D_mimo: MIMO
        w.push(0, 2); // miso
        w.push(2, 2); // fft_size: 32K
        w.push(0, 3);
        w.push(3, 4); // guard_interval: GI_3_512
        w.push(17, 11); // num_ofdm_symbols (displays 18)
        w.push(0, 5);
        w.push(0, 3);
        w.push(0, 1); // sbs_first
        w.push(0, 1); // sbs_last
        w.push(0, 1); // subframe_multiplex
        w.push(0, 1); // frequency_interleaver
        w.push(0, 6); // num_plp (displays 1)
        w.push(2, 6); // plp_id
        w.push(0, 1);
        w.push(0, 2); // plp_layer: Core
        w.push(0, 24);
        w.push(250, 24);
        w.push(0, 2);
        w.push(5, 4); // fec_type: 64K LDPC only
        w.push(5, 4); // plp_mod: 4096QAM
        w.push(11, 4); // plp_cod: 13/15
        w.push(2, 2); // TI_mode: HTI
        w.push(2, 3); // num_channel_bonded = 2
        w.push(0, 2); // channel_bonding_format
        w.push(0, 3); // bonded_rf_id
        w.push(1, 3); // bonded_rf_id
        w.push(1, 1); // mimo_stream_combining
        w.push(0, 1); // mimo_IQ_interleaving
        w.push(1, 1); // mimo_PH
        w.push(1, 1); // plp_type: dispersed
        w.push(3, 14); // num_subslices (displays 4)
        w.push(1024, 24); // subslice_interval
        w.push(1, 1); // HTI_inter_subframe
        w.push(1, 4); // HTI_num_ti_blocks (displays 2)
        w.push(99, 12); // HTI_num_fec_blocks_max (displays 100)
        w.push(9, 12); // HTI_num_fec_blocks (displays 10)
        w.push(19, 12); // HTI_num_fec_blocks (displays 20)
        w.push(1, 1); // HTI_cell_interleaver

        w.push(0x4400, 16); // L1D_bsid (version >= 1)
        w.push(0x3333_4444, 32); // L1D_crc
        let data = w.into_bytes();

        let text = rendered(&decode(&data));
        assert!(text.contains("L1B_num_subframes: 2"));
        assert!(text.contains("  L1D_bonded_bsid: 0x4401"));
        assert!(text.contains("  L1D_subframe_multiplex: 1"));
        assert!(text.contains("  L1D_sbs_null_cells: 96"));
        assert!(text.contains("      L1D_plp_layer: Enhanced"));
        assert!(text.contains("      L1D_plp_ldm_injection_level: 7"));
        assert!(text.contains("  L1D_mimo: MIMO"));
        assert!(text.contains("  L1D_fft_size: 32K"));
        assert!(text.contains("  L1D_guard_interval: GI_3_512"));
        assert!(text.contains("  L1D_num_ofdm_symbols: 18"));
        assert!(text.contains("      L1D_plp_mod: 4096QAM"));
        assert!(text.contains("      L1D_plp_cod: 13/15"));
        assert!(text.contains("      L1D_plp_num_channel_bonded: 2"));
        assert!(text.contains("        L1D_plp_bonded_rf_id: 1"));
        assert!(text.contains("      L1D_plp_mimo_stream_combining: 1"));
        assert!(text.contains("      L1D_plp_type: dispersed"));
        assert!(text.contains("      L1D_plp_num_subslices: 4"));
        assert!(text.contains("      L1D_plp_HTI_num_ti_blocks: 2"));
        assert!(text.contains("        L1D_plp_HTI_num_fec_blocks: 10"));
        assert!(text.contains("        L1D_plp_HTI_num_fec_blocks: 20"));
        assert!(text.contains("L1D_bsid: 0x4400"));
        assert!(text.contains("L1D_crc: 0x33334444"));
        assert!(!text.contains("Truncated"));
    }
}
