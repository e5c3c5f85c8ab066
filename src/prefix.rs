//! Legacy/REX prefix classification.
//!
//! Ground truth: `rda64.c::parse_prefixes` / `is_f3_prefix_context`, restated here with the
//! struct-and-`from_byte` idiom `instruction_emulator.rs` uses for its own `RexPrefix`.

/// Maximum number of prefix bytes a single instruction may carry (including REX).
pub const MAX_PREFIXES: usize = 5;

/// Classification tag for a single byte, per the 256-entry lookup in §4.1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PrefixTag {
    NotAPrefix,
    Legacy,
    Rex,
}

const fn classify(byte: u8) -> PrefixTag {
    match byte {
        0x26 | 0x2e | 0x36 | 0x3e | 0x64 | 0x65 | 0x66 | 0x67 | 0xf0 | 0xf2 | 0xf3 => {
            PrefixTag::Legacy
        }
        0x40..=0x4f => PrefixTag::Rex,
        _ => PrefixTag::NotAPrefix,
    }
}

/// Result of parsing the prefix bytes at the start of an instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PrefixInfo {
    /// Number of prefix bytes consumed, including REX if present.
    pub count: usize,
    /// REX byte (0x40-0x4F), or 0 if none was seen.
    pub rex_byte: u8,
}

/// Returns `true` if `bytes` begins with an ENDBR32/ENDBR64 encoding (`F3 0F 1E FA/FB`), in
/// which case a leading `0xF3` is part of the opcode rather than a REP/REPE prefix.
///
/// Matches `is_f3_prefix_context`'s convention of assuming "is a prefix" when fewer than four
/// bytes are available to disambiguate.
fn is_endbr_f3(bytes: &[u8]) -> bool {
    bytes.len() >= 4
        && bytes[0] == 0xf3
        && bytes[1] == 0x0f
        && bytes[2] == 0x1e
        && (bytes[3] == 0xfa || bytes[3] == 0xfb)
}

/// Parse the prefix bytes at the start of `bytes`, applying the F3-vs-ENDBR disambiguation.
///
/// Walks up to [`MAX_PREFIXES`] bytes. A REX byte, if present, must be the last prefix: parsing
/// stops immediately after it.
pub fn parse_prefixes(bytes: &[u8]) -> PrefixInfo {
    if bytes.is_empty() {
        return PrefixInfo::default();
    }
    if bytes[0] == 0xf3 && is_endbr_f3(bytes) {
        return PrefixInfo::default();
    }

    let mut count = 0;
    let mut rex_byte = 0u8;
    while count < bytes.len() && count < MAX_PREFIXES {
        let byte = bytes[count];
        match classify(byte) {
            PrefixTag::NotAPrefix => break,
            PrefixTag::Rex => {
                rex_byte = byte;
                count += 1;
                break; // REX must be the last prefix.
            }
            PrefixTag::Legacy => count += 1,
        }
    }
    PrefixInfo { count, rex_byte }
}

/// Is a 0x66/0xF2/0xF3 byte, the three bytes the SIMD table bakes into its opcode patterns as
/// mandatory prefixes rather than treating as legacy prefixes (§9 design notes).
const fn is_simd_mandatory_prefix(byte: u8) -> bool {
    matches!(byte, 0x66 | 0xf2 | 0xf3)
}

/// Like [`parse_prefixes`], but stops before consuming a mandatory SIMD prefix byte (0x66, 0xF2,
/// 0xF3) so that SIMD-table matching sees it as part of the opcode rather than a legacy prefix
/// already stripped away. Other legacy prefixes and a following REX byte are still consumed
/// normally.
pub fn parse_prefixes_for_simd(bytes: &[u8]) -> PrefixInfo {
    if bytes.is_empty() {
        return PrefixInfo::default();
    }
    if bytes[0] == 0xf3 && is_endbr_f3(bytes) {
        return PrefixInfo::default();
    }

    let mut count = 0;
    let mut rex_byte = 0u8;
    while count < bytes.len() && count < MAX_PREFIXES {
        let byte = bytes[count];
        if is_simd_mandatory_prefix(byte) {
            break;
        }
        match classify(byte) {
            PrefixTag::NotAPrefix => break,
            PrefixTag::Rex => {
                rex_byte = byte;
                count += 1;
                break;
            }
            PrefixTag::Legacy => count += 1,
        }
    }
    PrefixInfo { count, rex_byte }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_prefixes() {
        let info = parse_prefixes(&[0x90]);
        assert_eq!(info, PrefixInfo { count: 0, rex_byte: 0 });
    }

    #[test]
    fn rex_only() {
        let info = parse_prefixes(&[0x48, 0x89, 0xe5]);
        assert_eq!(info, PrefixInfo { count: 1, rex_byte: 0x48 });
    }

    #[test]
    fn legacy_then_rex() {
        let info = parse_prefixes(&[0x66, 0x48, 0x01, 0xd8]);
        assert_eq!(info, PrefixInfo { count: 2, rex_byte: 0x48 });
    }

    #[test]
    fn rex_terminates_prefix_scan() {
        // REX followed by another legacy-looking byte: the legacy byte is NOT consumed as a
        // prefix because REX must be last.
        let info = parse_prefixes(&[0x48, 0x66, 0x01, 0xd8]);
        assert_eq!(info, PrefixInfo { count: 1, rex_byte: 0x48 });
    }

    #[test]
    fn caps_at_max_prefixes() {
        let info = parse_prefixes(&[0x66, 0x67, 0xf0, 0xf2, 0x66, 0x01, 0xd8]);
        assert_eq!(info.count, MAX_PREFIXES);
        assert_eq!(info.rex_byte, 0);
    }

    #[test]
    fn endbr64_f3_is_not_a_prefix() {
        let info = parse_prefixes(&[0xf3, 0x0f, 0x1e, 0xfa]);
        assert_eq!(info, PrefixInfo { count: 0, rex_byte: 0 });
    }

    #[test]
    fn endbr32_f3_is_not_a_prefix() {
        let info = parse_prefixes(&[0xf3, 0x0f, 0x1e, 0xfb]);
        assert_eq!(info, PrefixInfo { count: 0, rex_byte: 0 });
    }

    #[test]
    fn short_f3_is_treated_as_prefix() {
        // Fewer than 4 bytes available: assume REP prefix, per is_f3_prefix_context's default.
        let info = parse_prefixes(&[0xf3, 0x0f, 0x1e]);
        assert_eq!(info, PrefixInfo { count: 1, rex_byte: 0 });
    }

    #[test]
    fn f3_followed_by_non_endbr_is_a_prefix() {
        let info = parse_prefixes(&[0xf3, 0x0f, 0xb8, 0xc0]); // popcnt, not endbr
        assert_eq!(info, PrefixInfo { count: 1, rex_byte: 0 });
    }

    #[test]
    fn simd_variant_leaves_mandatory_prefix_unconsumed() {
        let info = parse_prefixes_for_simd(&[0x66, 0x0f, 0x58, 0xc1]);
        assert_eq!(info, PrefixInfo { count: 0, rex_byte: 0 });
    }

    #[test]
    fn simd_variant_still_consumes_non_mandatory_legacy_prefixes() {
        let info = parse_prefixes_for_simd(&[0x67, 0x0f, 0x28, 0xc1]);
        assert_eq!(info, PrefixInfo { count: 1, rex_byte: 0 });
    }
}
