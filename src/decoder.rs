//! Single-instruction decoder: prefix parsing plus table walk.
//!
//! Ground truth: `rda64.c::rda_disassemble64`/`match_and_measure`.

use crate::ctx;
use crate::modrm::{modrm_length, ModRm};
use crate::prefix::{self, PrefixInfo};
use crate::record::{Category, EncodingRecord};
use crate::tables::{GENERAL_TABLE, SIMD_TABLE};

/// Architectural maximum instruction length.
pub const MAX_INSTRUCTION_LENGTH: usize = 15;

/// Result of decoding a single instruction.
#[derive(Debug, Clone, Copy)]
pub struct DecodedInstruction {
    /// The matched encoding record. Unspecified (zeroed `Invalid`) when `valid` is false.
    pub record: EncodingRecord,
    /// Total byte length, including prefixes, opcode, ModR/M, SIB, displacement and immediate.
    pub length: usize,
    /// Number of prefix bytes consumed, including REX if present.
    pub prefix_count: usize,
    /// REX byte (0x40-0x4F), or 0 if none.
    pub rex_byte: u8,
    /// 0 legacy, 1 VEX, 2 EVEX; mirrors the matched record.
    pub vex_encoding: u8,
    /// True iff a table entry matched.
    pub valid: bool,
}

const INVALID_RECORD: EncodingRecord = EncodingRecord::general("(invalid)", 0, [0; 5], 0, 0, false, false, -1, Category::Invalid);

impl DecodedInstruction {
    fn unrecognized(length: usize, prefix_count: usize, rex_byte: u8) -> Self {
        Self { record: INVALID_RECORD, length, prefix_count, rex_byte, vex_encoding: 0, valid: false }
    }
}

/// Decode one instruction from the start of `bytes`, bounded by `bytes.len()`.
///
/// Never fails catastrophically: unrecognized input yields `valid=false`. Consults the SIMD
/// table before the general table when the process-wide context has `use_simd` set (§4.3).
pub fn decode_single(bytes: &[u8]) -> DecodedInstruction {
    if bytes.is_empty() {
        trace!("decode_single: empty input");
        return DecodedInstruction::unrecognized(0, 0, 0);
    }

    let prefixes = prefix::parse_prefixes(bytes);
    trace!("decode_single: prefix_count={} rex_byte={:#04x}", prefixes.count, prefixes.rex_byte);
    if prefixes.count == bytes.len() {
        // Matches rda_decode_single64's literal early return here: prefix_length/rex are never
        // written into the (calloc-zeroed) result in this case, so it comes back all-zero.
        debug!("decode_single: input is prefixes only, no opcode bytes remain");
        return DecodedInstruction::unrecognized(0, 0, 0);
    }

    if ctx::get_context().use_simd {
        // SIMD mandatory prefixes (0x66/0xF2/0xF3) are baked into the SIMD table's opcode bytes
        // rather than stripped as legacy prefixes first, so addpd's 0x66 isn't consumed before
        // the table walk gets a chance to distinguish it from addps (§9).
        let simd_prefixes = prefix::parse_prefixes_for_simd(bytes);
        for record in SIMD_TABLE {
            if let Some(length) = match_and_measure(bytes, record, &simd_prefixes) {
                trace!("decode_single: matched simd record \"{}\"", record.mnemonic);
                return DecodedInstruction {
                    record: *record,
                    length,
                    prefix_count: simd_prefixes.count,
                    rex_byte: simd_prefixes.rex_byte,
                    vex_encoding: record.vex_encoding,
                    valid: true,
                };
            }
        }
    }

    for record in GENERAL_TABLE {
        if let Some(length) = match_and_measure(bytes, record, &prefixes) {
            trace!("decode_single: matched general record \"{}\"", record.mnemonic);
            return DecodedInstruction {
                record: *record,
                length,
                prefix_count: prefixes.count,
                rex_byte: prefixes.rex_byte,
                vex_encoding: record.vex_encoding,
                valid: true,
            };
        }
    }

    debug!("decode_single: no table entry matched, falling back to unrecognized");
    DecodedInstruction::unrecognized(1, prefixes.count, prefixes.rex_byte)
}

/// Try to match `record` against `bytes` starting after the already-parsed prefixes. Returns the
/// total instruction length on success.
fn match_and_measure(bytes: &[u8], record: &EncodingRecord, prefixes: &PrefixInfo) -> Option<usize> {
    let prefix_len = prefixes.count;
    let p = &bytes[prefix_len..];
    let opcode_length = record.opcode_length as usize;
    if p.len() < opcode_length {
        return None;
    }

    if record.plus_reg {
        if prefix_len == 1 && record.opcode_size == 64 {
            // Mirrors the original matcher verbatim, including its quirk: `record.bytes[1]` is
            // the zero-padded byte past a 1-byte opcode, so this branch only matches when the
            // opcode byte itself is 0x00 -- in practice REX.W + 0xB8..0xBF falls through to the
            // 32-bit "+rd" entry below instead.
            if bytes[0] != 0x48 || p[0] != record.bytes[1] {
                return None;
            }
        } else if opcode_length == 1 {
            if (p[0] & 0xf8) != (record.bytes[0] & 0xf8) {
                return None;
            }
        } else {
            if p[..opcode_length - 1] != record.bytes[..opcode_length - 1] {
                return None;
            }
            if (p[opcode_length - 1] & 0xf8) != (record.bytes[opcode_length - 1] & 0xf8) {
                return None;
            }
        }
    } else if p[..opcode_length] != record.bytes[..opcode_length] {
        return None;
    }

    let mut length = prefix_len + opcode_length;

    if record.modrm {
        if length >= bytes.len() {
            return None;
        }
        let modrm_byte = bytes[length];
        if record.modrm_reg != -1 {
            let reg = ModRm::from_byte(modrm_byte).reg;
            if i8::try_from(reg).unwrap_or(-1) != record.modrm_reg {
                return None;
            }
        }
        length += modrm_length(modrm_byte);
        if length > bytes.len() {
            return None;
        }
    }

    if record.instruction_length > 0 {
        length += record.instruction_length as usize;
    } else if record.instruction_length == -1 {
        length += if record.opcode_size == 16 { 2 } else { 4 };
    }

    (length <= bytes.len()).then_some(length)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ctx::{begin, Context};

    fn with_simd(f: impl FnOnce()) {
        begin(Context { verbose: false, use_simd: true });
        f();
    }

    #[test]
    fn mov_rbp_rsp() {
        let d = decode_single(&[0x48, 0x89, 0xe5]);
        assert!(d.valid);
        assert_eq!(d.length, 3);
        assert_eq!(d.prefix_count, 1);
        assert_eq!(d.rex_byte, 0x48);
        assert_eq!(d.record.ty, Category::Data);
        assert_eq!(d.record.mnemonic, "mov r/m16-64, r16-64");
    }

    #[test]
    fn mov_eax_imm32() {
        let d = decode_single(&[0xb8, 0x2a, 0x00, 0x00, 0x00]);
        assert!(d.valid);
        assert_eq!(d.length, 5);
        assert_eq!(d.rex_byte, 0);
        assert_eq!(d.record.ty, Category::Data);
        assert!(d.record.plus_reg);
    }

    #[test]
    fn je_rel32() {
        let d = decode_single(&[0x0f, 0x84, 0x10, 0x00, 0x00, 0x00]);
        assert!(d.valid);
        assert_eq!(d.length, 6);
        assert_eq!(d.record.ty, Category::Control);
        assert_eq!(d.record.opcode_length, 2);
    }

    #[test]
    fn endbr64_not_confused_with_rep_prefix() {
        let d = decode_single(&[0xf3, 0x0f, 0x1e, 0xfa]);
        assert!(d.valid);
        assert_eq!(d.length, 4);
        assert_eq!(d.record.mnemonic, "endbr64");
        assert_eq!(d.record.ty, Category::Misc);
        assert_eq!(d.prefix_count, 0);
    }

    #[test]
    fn addpd_requires_simd_context() {
        with_simd(|| {
            let d = decode_single(&[0x66, 0x0f, 0x58, 0xc1]);
            assert!(d.valid);
            assert_eq!(d.length, 4);
            assert_eq!(d.record.ty, Category::Sse2);
            assert_eq!(d.record.has_simd_prefix, 0x66);
        });
    }

    #[test]
    fn call_rax_binds_group_2_not_group_4() {
        let d = decode_single(&[0xff, 0xd0]);
        assert!(d.valid);
        assert_eq!(d.length, 2);
        assert_eq!(d.record.ty, Category::Control);
        assert_eq!(d.record.modrm_reg, 2);
    }

    #[test]
    fn nop() {
        let d = decode_single(&[0x90]);
        assert!(d.valid);
        assert_eq!(d.length, 1);
    }

    #[test]
    fn unrecognized_byte_falls_back_to_length_one() {
        let d = decode_single(&[0x0f, 0xff]);
        assert!(!d.valid);
        assert_eq!(d.length, 1);
    }

    #[test]
    fn empty_input_is_invalid_zero_length() {
        let d = decode_single(&[]);
        assert!(!d.valid);
        assert_eq!(d.length, 0);
    }

    #[test]
    fn prefixes_only_reports_all_zero_not_consumed_length() {
        // Five LOCK prefixes exactly fill the window: rda_decode_single64 returns its untouched,
        // zeroed result in this case rather than reporting the prefix bytes as consumed.
        let d = decode_single(&[0xf0, 0xf0, 0xf0, 0xf0, 0xf0]);
        assert!(!d.valid);
        assert_eq!(d.length, 0);
        assert_eq!(d.prefix_count, 0);
        assert_eq!(d.rex_byte, 0);
    }
}

#[cfg(test)]
mod proptests {
    use proptest::prelude::*;

    use super::*;
    use crate::ctx::{begin, Context};

    /// Build a byte sequence an `EncodingRecord` should match: its opcode bytes, a register-direct
    /// ModR/M byte carrying the record's group `reg` if it restricts one (avoids SIB/displacement
    /// so the synthesized instruction stays fully determined), and zeroed immediate bytes.
    fn synthesize(record: &EncodingRecord) -> alloc::vec::Vec<u8> {
        let mut bytes = alloc::vec::Vec::new();
        bytes.extend_from_slice(&record.bytes[..record.opcode_length as usize]);

        if record.plus_reg {
            // Register 0 is the canonical table form, but for some opcodes (0x90: both `nop`
            // and `xchg eax, eax`) it aliases an earlier, differently-categorized record.
            // Register 1 disambiguates without losing masked-compare coverage.
            let last = bytes.len() - 1;
            bytes[last] |= 1;
        }

        if record.modrm {
            let reg = if record.modrm_reg >= 0 { record.modrm_reg as u8 } else { 0 };
            bytes.push((0b11 << 6) | (reg << 3));
        }

        let immediate_len = if record.instruction_length > 0 {
            record.instruction_length as usize
        } else if record.instruction_length == -1 {
            if record.opcode_size == 16 { 2 } else { 4 }
        } else {
            0
        };
        bytes.extend(core::iter::repeat_n(0u8, immediate_len));

        bytes
    }

    proptest! {
        /// §8: every record in either table, fed its own synthesized bytes, decodes as valid
        /// with a length at least as long as its opcode and a matching category.
        #[test]
        fn every_table_record_round_trips(index in 0usize..(GENERAL_TABLE.len() + SIMD_TABLE.len())) {
            begin(Context { verbose: false, use_simd: true });

            let record = if index < GENERAL_TABLE.len() {
                &GENERAL_TABLE[index]
            } else {
                &SIMD_TABLE[index - GENERAL_TABLE.len()]
            };
            let bytes = synthesize(record);

            let decoded = decode_single(&bytes);
            prop_assert!(decoded.valid);
            prop_assert!(decoded.length >= record.opcode_length as usize);
            prop_assert_eq!(decoded.record.ty, record.ty);
        }

        /// §8: `decode_single` never reports a length longer than the bytes it was given.
        #[test]
        fn length_never_exceeds_input(bytes in prop::collection::vec(any::<u8>(), 0..=MAX_INSTRUCTION_LENGTH)) {
            let decoded = decode_single(&bytes);
            prop_assert!(decoded.length <= bytes.len());
        }

        /// §8: for any decoded instruction, `prefix_count + opcode_length <= length <= 15`.
        #[test]
        fn length_bounds_respect_prefix_and_opcode(
            bytes in prop::collection::vec(any::<u8>(), 1..=MAX_INSTRUCTION_LENGTH)
        ) {
            let decoded = decode_single(&bytes);
            if decoded.valid {
                prop_assert!(decoded.prefix_count + decoded.record.opcode_length as usize <= decoded.length);
                prop_assert!(decoded.length <= MAX_INSTRUCTION_LENGTH);
            }
        }
    }
}
