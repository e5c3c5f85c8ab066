//! Encoding record schema shared by the general and SIMD encoding tables.

/// Coarse semantic category of a decoded instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Category {
    Invalid = 0x0,
    Data = 0x1,
    Arith = 0x2,
    Logic = 0x3,
    Control = 0x4,
    System = 0x5,
    Flag = 0x6,
    Misc = 0x7,
    Sse = 0x8,
    Sse2 = 0x9,
    Sse3 = 0xa,
    Ssse3 = 0xb,
    Sse4_1 = 0xc,
    Sse4_2 = 0xd,
    Avx = 0xe,
    Avx2 = 0xf,
    Avx512 = 0x10,
}

/// One recognized instruction form. Fields and matching semantics follow the original
/// `rda_int_t` layout; see `match_and_measure` in [`crate::decoder`] for how a record is
/// tested against a byte slice.
#[derive(Debug, Clone, Copy)]
pub struct EncodingRecord {
    /// Diagnostic-only assembly form; never used for matching.
    pub mnemonic: &'static str,
    /// Fixed opcode byte pattern; only the first `opcode_length` bytes are significant.
    pub bytes: [u8; 5],
    /// Number of significant bytes in `bytes` (1-4 general, 2-5 SIMD).
    pub opcode_length: u8,
    /// Immediate size: 0 none, >0 exact byte count, -1 operand-size-dependent.
    pub instruction_length: i8,
    /// Effective operand width tag: 0/8/16/32/64/128/256/512.
    pub opcode_size: u16,
    /// Whether a ModR/M byte follows the opcode.
    pub modrm: bool,
    /// Whether the low three bits of the final opcode byte are a register field ("+rd").
    pub plus_reg: bool,
    /// Group extension: -1 means any `reg`; 0..7 restricts to that ModR/M `reg` value.
    pub modrm_reg: i8,
    /// Coarse semantic category.
    pub ty: Category,
    /// Mandatory SIMD prefix byte (0, 0x66, 0xF2, 0xF3), 0 for non-SIMD records.
    pub has_simd_prefix: u8,
    /// 0 legacy, 1 VEX, 2 EVEX.
    pub vex_encoding: u8,
    /// SIMD operand width in bits, 0 for non-SIMD records.
    pub simd_size: u16,
    /// 0 packed single, 1 packed double, 2 scalar single, 3 scalar double, 4 integer.
    pub simd_type: u8,
}

/// Right-pads a short opcode byte pattern into the fixed 5-byte storage form.
pub(crate) const fn pad5(bytes: &[u8]) -> [u8; 5] {
    let mut out = [0u8; 5];
    let mut i = 0;
    while i < bytes.len() {
        out[i] = bytes[i];
        i += 1;
    }
    out
}

impl EncodingRecord {
    /// Build a general-table record; SIMD-specific fields default to their non-SIMD values.
    #[allow(clippy::too_many_arguments)]
    pub(crate) const fn general(
        mnemonic: &'static str,
        bytes_len: usize,
        bytes: [u8; 5],
        instruction_length: i8,
        opcode_size: u16,
        modrm: bool,
        plus_reg: bool,
        modrm_reg: i8,
        ty: Category,
    ) -> Self {
        Self {
            mnemonic,
            bytes,
            opcode_length: bytes_len as u8,
            instruction_length,
            opcode_size,
            modrm,
            plus_reg,
            modrm_reg,
            ty,
            has_simd_prefix: 0,
            vex_encoding: 0,
            simd_size: 0,
            simd_type: 0,
        }
    }

    /// Build a SIMD-table record.
    #[allow(clippy::too_many_arguments)]
    pub(crate) const fn simd(
        mnemonic: &'static str,
        bytes_len: usize,
        bytes: [u8; 5],
        instruction_length: i8,
        opcode_size: u16,
        modrm_reg: i8,
        ty: Category,
        has_simd_prefix: u8,
        vex_encoding: u8,
        simd_size: u16,
        simd_type: u8,
    ) -> Self {
        Self {
            mnemonic,
            bytes,
            opcode_length: bytes_len as u8,
            instruction_length,
            opcode_size,
            modrm: true,
            plus_reg: false,
            modrm_reg,
            ty,
            has_simd_prefix,
            vex_encoding,
            simd_size,
            simd_type,
        }
    }
}
