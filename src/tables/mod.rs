//! The two static encoding tables: general-purpose instructions and SIMD instructions.
//!
//! Transcribed verbatim from `examples/original_source/include/asmx64.h` (`internal_table`) and
//! `include/simdx64.h` (`internal_simd_table`); see `DESIGN.md` for the grounding note.

mod general;
mod simd;

pub use general::GENERAL_TABLE;
pub use simd::SIMD_TABLE;

macro_rules! op {
    ($mn:literal, [$($b:literal),+ $(,)?], $ilen:literal, $osize:literal, $modrm:literal, $plus:literal, $mreg:literal, $ty:expr) => {
        crate::record::EncodingRecord::general(
            $mn,
            [$($b),+].len(),
            crate::record::pad5(&[$($b),+]),
            $ilen,
            $osize,
            $modrm != 0,
            $plus != 0,
            $mreg,
            $ty,
        )
    };
}

macro_rules! simd_op {
    ($mn:literal, [$($b:literal),+ $(,)?], $ilen:literal, $osize:literal, $mreg:literal, $ty:expr, $simd_prefix:literal, $vex:literal, $simd_size:literal, $simd_type:literal) => {
        crate::record::EncodingRecord::simd(
            $mn,
            [$($b),+].len(),
            crate::record::pad5(&[$($b),+]),
            $ilen,
            $osize,
            $mreg,
            $ty,
            $simd_prefix,
            $vex,
            $simd_size,
            $simd_type,
        )
    };
}

pub(crate) use op;
pub(crate) use simd_op;
