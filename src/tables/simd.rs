use crate::record::Category::*;
use crate::tables::simd_op;

use crate::record::EncodingRecord;

/// SIMD instruction encodings (SSE through AVX512), in match-priority order.
pub static SIMD_TABLE: &[EncodingRecord] = &[
    // sse data movement.
    simd_op!("movaps xmm1, xmm2/m128", [0x0f, 0x28], 0, 128, -1, Sse, 0, 0, 128, 0),
    simd_op!("movaps xmm1/m128, xmm2", [0x0f, 0x29], 0, 128, -1, Sse, 0, 0, 128, 0),
    simd_op!("movups xmm1, xmm2/m128", [0x0f, 0x10], 0, 128, -1, Sse, 0, 0, 128, 0),
    simd_op!("movups xmm1/m128, xmm2", [0x0f, 0x11], 0, 128, -1, Sse, 0, 0, 128, 0),
    simd_op!("movss xmm1, xmm2/m32", [0xf3, 0x0f, 0x10], 0, 32, -1, Sse, 0xf3, 0, 32, 2),
    simd_op!("movss xmm1/m32, xmm2", [0xf3, 0x0f, 0x11], 0, 32, -1, Sse, 0xf3, 0, 32, 2),
    // sse arithmetic.
    simd_op!("addps xmm1, xmm2/m128", [0x0f, 0x58], 0, 128, -1, Sse, 0, 0, 128, 0),
    simd_op!("addss xmm1, xmm2/m32", [0xf3, 0x0f, 0x58], 0, 32, -1, Sse, 0xf3, 0, 32, 2),
    simd_op!("subps xmm1, xmm2/m128", [0x0f, 0x5c], 0, 128, -1, Sse, 0, 0, 128, 0),
    simd_op!("subss xmm1, xmm2/m32", [0xf3, 0x0f, 0x5c], 0, 32, -1, Sse, 0xf3, 0, 32, 2),
    simd_op!("mulps xmm1, xmm2/m128", [0x0f, 0x59], 0, 128, -1, Sse, 0, 0, 128, 0),
    simd_op!("mulss xmm1, xmm2/m32", [0xf3, 0x0f, 0x59], 0, 32, -1, Sse, 0xf3, 0, 32, 2),
    simd_op!("divps xmm1, xmm2/m128", [0x0f, 0x5e], 0, 128, -1, Sse, 0, 0, 128, 0),
    simd_op!("divss xmm1, xmm2/m32", [0xf3, 0x0f, 0x5e], 0, 32, -1, Sse, 0xf3, 0, 32, 2),
    // sse comparison.
    simd_op!("cmpps xmm1, xmm2/m128, imm8", [0x0f, 0xc2], 1, 128, -1, Sse, 0, 0, 128, 0),
    simd_op!("cmpss xmm1, xmm2/m32, imm8", [0xf3, 0x0f, 0xc2], 1, 32, -1, Sse, 0xf3, 0, 32, 2),
    // sse logical.
    simd_op!("andps xmm1, xmm2/m128", [0x0f, 0x54], 0, 128, -1, Sse, 0, 0, 128, 0),
    simd_op!("orps xmm1, xmm2/m128", [0x0f, 0x56], 0, 128, -1, Sse, 0, 0, 128, 0),
    simd_op!("xorps xmm1, xmm2/m128", [0x0f, 0x57], 0, 128, -1, Sse, 0, 0, 128, 0),
    simd_op!("andnps xmm1, xmm2/m128", [0x0f, 0x55], 0, 128, -1, Sse, 0, 0, 128, 0),
    // sse shuffle/unpack.
    simd_op!("shufps xmm1, xmm2/m128, imm8", [0x0f, 0xc6], 1, 128, -1, Sse, 0, 0, 128, 0),
    simd_op!("unpckhps xmm1, xmm2/m128", [0x0f, 0x15], 0, 128, -1, Sse, 0, 0, 128, 0),
    simd_op!("unpcklps xmm1, xmm2/m128", [0x0f, 0x14], 0, 128, -1, Sse, 0, 0, 128, 0),
    // sse conversion.
    simd_op!("cvtpi2ps xmm, mm/m64", [0x0f, 0x2a], 0, 128, -1, Sse, 0, 0, 128, 0),
    simd_op!("cvtps2pi mm, xmm/m64", [0x0f, 0x2d], 0, 64, -1, Sse, 0, 0, 64, 0),
    simd_op!("cvtsi2ss xmm, r/m32", [0xf3, 0x0f, 0x2a], 0, 32, -1, Sse, 0xf3, 0, 32, 2),
    simd_op!("cvtss2si r32, xmm/m32", [0xf3, 0x0f, 0x2d], 0, 32, -1, Sse, 0xf3, 0, 32, 2),
    // sse2 data movement, double-precision.
    simd_op!("movapd xmm1, xmm2/m128", [0x66, 0x0f, 0x28], 0, 128, -1, Sse2, 0x66, 0, 128, 1),
    simd_op!("movapd xmm1/m128, xmm2", [0x66, 0x0f, 0x29], 0, 128, -1, Sse2, 0x66, 0, 128, 1),
    simd_op!("movupd xmm1, xmm2/m128", [0x66, 0x0f, 0x10], 0, 128, -1, Sse2, 0x66, 0, 128, 1),
    simd_op!("movupd xmm1/m128, xmm2", [0x66, 0x0f, 0x11], 0, 128, -1, Sse2, 0x66, 0, 128, 1),
    simd_op!("movsd xmm1, xmm2/m64", [0xf2, 0x0f, 0x10], 0, 64, -1, Sse2, 0xf2, 0, 64, 3),
    simd_op!("movsd xmm1/m64, xmm2", [0xf2, 0x0f, 0x11], 0, 64, -1, Sse2, 0xf2, 0, 64, 3),
    // sse2 arithmetic, double-precision.
    simd_op!("addpd xmm1, xmm2/m128", [0x66, 0x0f, 0x58], 0, 128, -1, Sse2, 0x66, 0, 128, 1),
    simd_op!("addsd xmm1, xmm2/m64", [0xf2, 0x0f, 0x58], 0, 64, -1, Sse2, 0xf2, 0, 64, 3),
    simd_op!("subpd xmm1, xmm2/m128", [0x66, 0x0f, 0x5c], 0, 128, -1, Sse2, 0x66, 0, 128, 1),
    simd_op!("subsd xmm1, xmm2/m64", [0xf2, 0x0f, 0x5c], 0, 64, -1, Sse2, 0xf2, 0, 64, 3),
    simd_op!("mulpd xmm1, xmm2/m128", [0x66, 0x0f, 0x59], 0, 128, -1, Sse2, 0x66, 0, 128, 1),
    simd_op!("mulsd xmm1, xmm2/m64", [0xf2, 0x0f, 0x59], 0, 64, -1, Sse2, 0xf2, 0, 64, 3),
    simd_op!("divpd xmm1, xmm2/m128", [0x66, 0x0f, 0x5e], 0, 128, -1, Sse2, 0x66, 0, 128, 1),
    simd_op!("divsd xmm1, xmm2/m64", [0xf2, 0x0f, 0x5e], 0, 64, -1, Sse2, 0xf2, 0, 64, 3),
    // sse2 integer simd.
    simd_op!("movdqa xmm1, xmm2/m128", [0x66, 0x0f, 0x6f], 0, 128, -1, Sse2, 0x66, 0, 128, 4),
    simd_op!("movdqa xmm1/m128, xmm2", [0x66, 0x0f, 0x7f], 0, 128, -1, Sse2, 0x66, 0, 128, 4),
    simd_op!("movdqu xmm1, xmm2/m128", [0xf3, 0x0f, 0x6f], 0, 128, -1, Sse2, 0xf3, 0, 128, 4),
    simd_op!("movdqu xmm1/m128, xmm2", [0xf3, 0x0f, 0x7f], 0, 128, -1, Sse2, 0xf3, 0, 128, 4),
    // sse2 packed integer arithmetic.
    simd_op!("paddb xmm1, xmm2/m128", [0x66, 0x0f, 0xfc], 0, 128, -1, Sse2, 0x66, 0, 128, 4),
    simd_op!("paddw xmm1, xmm2/m128", [0x66, 0x0f, 0xfd], 0, 128, -1, Sse2, 0x66, 0, 128, 4),
    simd_op!("paddd xmm1, xmm2/m128", [0x66, 0x0f, 0xfe], 0, 128, -1, Sse2, 0x66, 0, 128, 4),
    simd_op!("paddq xmm1, xmm2/m128", [0x66, 0x0f, 0xd4], 0, 128, -1, Sse2, 0x66, 0, 128, 4),
    simd_op!("psubb xmm1, xmm2/m128", [0x66, 0x0f, 0xf8], 0, 128, -1, Sse2, 0x66, 0, 128, 4),
    simd_op!("psubw xmm1, xmm2/m128", [0x66, 0x0f, 0xf9], 0, 128, -1, Sse2, 0x66, 0, 128, 4),
    simd_op!("psubd xmm1, xmm2/m128", [0x66, 0x0f, 0xfa], 0, 128, -1, Sse2, 0x66, 0, 128, 4),
    simd_op!("psubq xmm1, xmm2/m128", [0x66, 0x0f, 0xfb], 0, 128, -1, Sse2, 0x66, 0, 128, 4),
    // sse2 comparison.
    simd_op!("cmppd xmm1, xmm2/m128, imm8", [0x66, 0x0f, 0xc2], 1, 128, -1, Sse2, 0x66, 0, 128, 1),
    simd_op!("cmpsd xmm1, xmm2/m64, imm8", [0xf2, 0x0f, 0xc2], 1, 64, -1, Sse2, 0xf2, 0, 64, 3),
    // sse2 logical.
    simd_op!("pand xmm1, xmm2/m128", [0x66, 0x0f, 0xdb], 0, 128, -1, Sse2, 0x66, 0, 128, 4),
    simd_op!("por xmm1, xmm2/m128", [0x66, 0x0f, 0xeb], 0, 128, -1, Sse2, 0x66, 0, 128, 4),
    simd_op!("pxor xmm1, xmm2/m128", [0x66, 0x0f, 0xef], 0, 128, -1, Sse2, 0x66, 0, 128, 4),
    simd_op!("pandn xmm1, xmm2/m128", [0x66, 0x0f, 0xdf], 0, 128, -1, Sse2, 0x66, 0, 128, 4),
    // sse2 shuffle/unpack.
    simd_op!("shufpd xmm1, xmm2/m128, imm8", [0x66, 0x0f, 0xc6], 1, 128, -1, Sse2, 0x66, 0, 128, 1),
    simd_op!("unpckhpd xmm1, xmm2/m128", [0x66, 0x0f, 0x15], 0, 128, -1, Sse2, 0x66, 0, 128, 1),
    simd_op!("unpcklpd xmm1, xmm2/m128", [0x66, 0x0f, 0x14], 0, 128, -1, Sse2, 0x66, 0, 128, 1),
    // sse2 conversion.
    simd_op!("cvtsi2sd xmm, r/m32", [0xf2, 0x0f, 0x2a], 0, 64, -1, Sse2, 0xf2, 0, 64, 3),
    simd_op!("cvtsd2si r32, xmm/m64", [0xf2, 0x0f, 0x2d], 0, 64, -1, Sse2, 0xf2, 0, 64, 3),
    simd_op!("cvtps2pd xmm, xmm/m64", [0x0f, 0x5a], 0, 128, -1, Sse2, 0, 0, 128, 1),
    simd_op!("cvtpd2ps xmm, xmm/m128", [0x66, 0x0f, 0x5a], 0, 128, -1, Sse2, 0x66, 0, 128, 0),
    // sse3 instructions.
    simd_op!("addsubps xmm1, xmm2/m128", [0xf2, 0x0f, 0xd0], 0, 128, -1, Sse3, 0xf2, 0, 128, 0),
    simd_op!("addsubpd xmm1, xmm2/m128", [0x66, 0x0f, 0xd0], 0, 128, -1, Sse3, 0x66, 0, 128, 1),
    simd_op!("haddps xmm1, xmm2/m128", [0xf2, 0x0f, 0x7c], 0, 128, -1, Sse3, 0xf2, 0, 128, 0),
    simd_op!("haddpd xmm1, xmm2/m128", [0x66, 0x0f, 0x7c], 0, 128, -1, Sse3, 0x66, 0, 128, 1),
    simd_op!("hsubps xmm1, xmm2/m128", [0xf2, 0x0f, 0x7d], 0, 128, -1, Sse3, 0xf2, 0, 128, 0),
    simd_op!("hsubpd xmm1, xmm2/m128", [0x66, 0x0f, 0x7d], 0, 128, -1, Sse3, 0x66, 0, 128, 1),
    simd_op!("movshdup xmm1, xmm2/m128", [0xf3, 0x0f, 0x16], 0, 128, -1, Sse3, 0xf3, 0, 128, 0),
    simd_op!("movsldup xmm1, xmm2/m128", [0xf3, 0x0f, 0x12], 0, 128, -1, Sse3, 0xf3, 0, 128, 0),
    simd_op!("movddup xmm1, xmm2/m64", [0xf2, 0x0f, 0x12], 0, 128, -1, Sse3, 0xf2, 0, 128, 1),
    simd_op!("lddqu xmm1, m128", [0xf2, 0x0f, 0xf0], 0, 128, -1, Sse3, 0xf2, 0, 128, 4),
    // ssse3 instructions.
    simd_op!("pshufb xmm1, xmm2/m128", [0x66, 0x0f, 0x38, 0x00], 0, 128, -1, Ssse3, 0x66, 0, 128, 4),
    simd_op!("phaddw xmm1, xmm2/m128", [0x66, 0x0f, 0x38, 0x01], 0, 128, -1, Ssse3, 0x66, 0, 128, 4),
    simd_op!("phaddd xmm1, xmm2/m128", [0x66, 0x0f, 0x38, 0x02], 0, 128, -1, Ssse3, 0x66, 0, 128, 4),
    simd_op!("phaddsw xmm1, xmm2/m128", [0x66, 0x0f, 0x38, 0x03], 0, 128, -1, Ssse3, 0x66, 0, 128, 4),
    simd_op!("pmaddubsw xmm1, xmm2/m128", [0x66, 0x0f, 0x38, 0x04], 0, 128, -1, Ssse3, 0x66, 0, 128, 4),
    simd_op!("pabsb xmm1, xmm2/m128", [0x66, 0x0f, 0x38, 0x1c], 0, 128, -1, Ssse3, 0x66, 0, 128, 4),
    simd_op!("pabsw xmm1, xmm2/m128", [0x66, 0x0f, 0x38, 0x1d], 0, 128, -1, Ssse3, 0x66, 0, 128, 4),
    simd_op!("pabsd xmm1, xmm2/m128", [0x66, 0x0f, 0x38, 0x1e], 0, 128, -1, Ssse3, 0x66, 0, 128, 4),
    simd_op!("palignr xmm1, xmm2/m128, imm8", [0x66, 0x0f, 0x3a, 0x0f], 1, 128, -1, Ssse3, 0x66, 0, 128, 4),
    // sse4.1 instructions.
    simd_op!("dpps xmm1, xmm2/m128, imm8", [0x66, 0x0f, 0x3a, 0x40], 1, 128, -1, Sse4_1, 0x66, 0, 128, 0),
    simd_op!("dppd xmm1, xmm2/m128, imm8", [0x66, 0x0f, 0x3a, 0x41], 1, 128, -1, Sse4_1, 0x66, 0, 128, 1),
    simd_op!("blendps xmm1, xmm2/m128, imm8", [0x66, 0x0f, 0x3a, 0x0c], 1, 128, -1, Sse4_1, 0x66, 0, 128, 0),
    simd_op!("blendpd xmm1, xmm2/m128, imm8", [0x66, 0x0f, 0x3a, 0x0d], 1, 128, -1, Sse4_1, 0x66, 0, 128, 1),
    simd_op!("pmulld xmm1, xmm2/m128", [0x66, 0x0f, 0x38, 0x40], 0, 128, -1, Sse4_1, 0x66, 0, 128, 4),
    simd_op!("pminsd xmm1, xmm2/m128", [0x66, 0x0f, 0x38, 0x39], 0, 128, -1, Sse4_1, 0x66, 0, 128, 4),
    simd_op!("pmaxsd xmm1, xmm2/m128", [0x66, 0x0f, 0x38, 0x3d], 0, 128, -1, Sse4_1, 0x66, 0, 128, 4),
    simd_op!("roundps xmm1, xmm2/m128, imm8", [0x66, 0x0f, 0x3a, 0x08], 1, 128, -1, Sse4_1, 0x66, 0, 128, 0),
    simd_op!("roundpd xmm1, xmm2/m128, imm8", [0x66, 0x0f, 0x3a, 0x09], 1, 128, -1, Sse4_1, 0x66, 0, 128, 1),
    simd_op!("ptest xmm1, xmm2/m128", [0x66, 0x0f, 0x38, 0x17], 0, 128, -1, Sse4_1, 0x66, 0, 128, 4),
    // sse4.2 instructions.
    simd_op!("pcmpgtq xmm1, xmm2/m128", [0x66, 0x0f, 0x38, 0x37], 0, 128, -1, Sse4_2, 0x66, 0, 128, 4),
    simd_op!("pcmpestri xmm1, xmm2/m128, imm8", [0x66, 0x0f, 0x3a, 0x61], 1, 128, -1, Sse4_2, 0x66, 0, 128, 4),
    simd_op!("pcmpestrm xmm1, xmm2/m128, imm8", [0x66, 0x0f, 0x3a, 0x60], 1, 128, -1, Sse4_2, 0x66, 0, 128, 4),
    simd_op!("crc32 r32, r/m8", [0xf2, 0x0f, 0x38, 0xf0], 0, 32, -1, Sse4_2, 0xf2, 0, 32, 4),
    simd_op!("crc32 r32, r/m32", [0xf2, 0x0f, 0x38, 0xf1], 0, 32, -1, Sse4_2, 0xf2, 0, 32, 4),
    simd_op!("crc32 r64, r/m64", [0xf2, 0x48, 0x0f, 0x38, 0xf1], 0, 64, -1, Sse4_2, 0xf2, 0, 64, 4),
    simd_op!("popcnt r16-64, r/m16-64", [0xf3, 0x0f, 0xb8], 0, 0, -1, Sse4_2, 0xf3, 0, 0, 4),
    // avx2 instructions (vex-encoded 256-bit integer).
    simd_op!("vpaddb ymm1, ymm2, ymm3/m256", [0xc5, 0xfd, 0xfc], 0, 256, -1, Avx2, 0x66, 1, 256, 4),
    simd_op!("vpaddw ymm1, ymm2, ymm3/m256", [0xc5, 0xfd, 0xfd], 0, 256, -1, Avx2, 0x66, 1, 256, 4),
    simd_op!("vpaddd ymm1, ymm2, ymm3/m256", [0xc5, 0xfd, 0xfe], 0, 256, -1, Avx2, 0x66, 1, 256, 4),
    simd_op!("vpaddq ymm1, ymm2, ymm3/m256", [0xc5, 0xfd, 0xd4], 0, 256, -1, Avx2, 0x66, 1, 256, 4),
    simd_op!("vpsubb ymm1, ymm2, ymm3/m256", [0xc5, 0xfd, 0xf8], 0, 256, -1, Avx2, 0x66, 1, 256, 4),
    simd_op!("vpsubw ymm1, ymm2, ymm3/m256", [0xc5, 0xfd, 0xf9], 0, 256, -1, Avx2, 0x66, 1, 256, 4),
    simd_op!("vpsubd ymm1, ymm2, ymm3/m256", [0xc5, 0xfd, 0xfa], 0, 256, -1, Avx2, 0x66, 1, 256, 4),
    simd_op!("vpsubq ymm1, ymm2, ymm3/m256", [0xc5, 0xfd, 0xfb], 0, 256, -1, Avx2, 0x66, 1, 256, 4),
    simd_op!("vpmulld ymm1, ymm2, ymm3/m256", [0xc5, 0xfd, 0x40], 0, 256, -1, Avx2, 0x66, 1, 256, 4),
    simd_op!("vpshufb ymm1, ymm2, ymm3/m256", [0xc5, 0xfd, 0x00], 0, 256, -1, Avx2, 0x66, 1, 256, 4),
    simd_op!("vbroadcastss ymm1, m32", [0xc4, 0xe3, 0x79, 0x18], 0, 256, -1, Avx2, 0, 1, 256, 0),
    simd_op!("vbroadcastsd ymm1, m64", [0xc4, 0xe3, 0x79, 0x19], 0, 256, -1, Avx2, 0x66, 1, 256, 1),
    simd_op!("vperm2i128 ymm1, ymm2, ymm3/m256, imm8", [0xc4, 0xe3, 0x79, 0x46], 1, 256, -1, Avx2, 0x66, 1, 256, 4),
    simd_op!("vgatherdps ymm1, [vm32y], ymm2", [0xc4, 0xe2, 0x79, 0x92], 0, 256, -1, Avx2, 0x66, 1, 256, 0),
    // avx512 data movement, evex encoded.
    simd_op!("vmovaps zmm1, zmm2/m512", [0x62, 0x81, 0x7c, 0x28], 0, 512, -1, Avx512, 0, 2, 512, 0),
    simd_op!("vmovaps zmm1/m512, zmm2", [0x62, 0x81, 0x7c, 0x29], 0, 512, -1, Avx512, 0, 2, 512, 0),
    simd_op!("vmovups zmm1, zmm2/m512", [0x62, 0x81, 0x7c, 0x10], 0, 512, -1, Avx512, 0, 2, 512, 0),
    simd_op!("vmovups zmm1/m512, zmm2", [0x62, 0x81, 0x7c, 0x11], 0, 512, -1, Avx512, 0, 2, 512, 0),
    simd_op!("vmovapd zmm1, zmm2/m512", [0x62, 0x81, 0x7d, 0x28], 0, 512, -1, Avx512, 0x66, 2, 512, 1),
    simd_op!("vmovapd zmm1/m512, zmm2", [0x62, 0x81, 0x7d, 0x29], 0, 512, -1, Avx512, 0x66, 2, 512, 1),
    simd_op!("vmovdqa32 zmm1, zmm2/m512", [0x62, 0x81, 0x7d, 0x6f], 0, 512, -1, Avx512, 0x66, 2, 512, 4),
    simd_op!("vmovdqa32 zmm1/m512, zmm2", [0x62, 0x81, 0x7d, 0x7f], 0, 512, -1, Avx512, 0x66, 2, 512, 4),
    simd_op!("vmovdqu32 zmm1, zmm2/m512", [0x62, 0x81, 0x7e, 0x6f], 0, 512, -1, Avx512, 0xf3, 2, 512, 4),
    simd_op!("vmovdqu32 zmm1/m512, zmm2", [0x62, 0x81, 0x7e, 0x7f], 0, 512, -1, Avx512, 0xf3, 2, 512, 4),
    // avx512 arithmetic, evex encoded.
    simd_op!("vaddps zmm1, zmm2, zmm3/m512", [0x62, 0x81, 0x7c, 0x58], 0, 512, -1, Avx512, 0, 2, 512, 0),
    simd_op!("vaddpd zmm1, zmm2, zmm3/m512", [0x62, 0x81, 0x7d, 0x58], 0, 512, -1, Avx512, 0x66, 2, 512, 1),
    simd_op!("vsubps zmm1, zmm2, zmm3/m512", [0x62, 0x81, 0x7c, 0x5c], 0, 512, -1, Avx512, 0, 2, 512, 0),
    simd_op!("vsubpd zmm1, zmm2, zmm3/m512", [0x62, 0x81, 0x7d, 0x5c], 0, 512, -1, Avx512, 0x66, 2, 512, 1),
    simd_op!("vmulps zmm1, zmm2, zmm3/m512", [0x62, 0x81, 0x7c, 0x59], 0, 512, -1, Avx512, 0, 2, 512, 0),
    simd_op!("vmulpd zmm1, zmm2, zmm3/m512", [0x62, 0x81, 0x7d, 0x59], 0, 512, -1, Avx512, 0x66, 2, 512, 1),
    simd_op!("vdivps zmm1, zmm2, zmm3/m512", [0x62, 0x81, 0x7c, 0x5e], 0, 512, -1, Avx512, 0, 2, 512, 0),
    simd_op!("vdivpd zmm1, zmm2, zmm3/m512", [0x62, 0x81, 0x7d, 0x5e], 0, 512, -1, Avx512, 0x66, 2, 512, 1),
    // avx512 integer arithmetic, evex encoded.
    simd_op!("vpaddd zmm1, zmm2, zmm3/m512", [0x62, 0x81, 0x7d, 0xfe], 0, 512, -1, Avx512, 0x66, 2, 512, 4),
    simd_op!("vpaddq zmm1, zmm2, zmm3/m512", [0x62, 0x81, 0xfd, 0xd4], 0, 512, -1, Avx512, 0x66, 2, 512, 4),
    simd_op!("vpsubd zmm1, zmm2, zmm3/m512", [0x62, 0x81, 0x7d, 0xfa], 0, 512, -1, Avx512, 0x66, 2, 512, 4),
    simd_op!("vpsubq zmm1, zmm2, zmm3/m512", [0x62, 0x81, 0xfd, 0xfb], 0, 512, -1, Avx512, 0x66, 2, 512, 4),
    simd_op!("vpmulld zmm1, zmm2, zmm3/m512", [0x62, 0x82, 0x7d, 0x40], 0, 512, -1, Avx512, 0x66, 2, 512, 4), // 0f 38 map
    // avx512 comparison, evex encoded.
    simd_op!("vcmpps k1, zmm2, zmm3/m512, imm8", [0x62, 0x81, 0x7c, 0xc2], 1, 512, -1, Avx512, 0, 2, 512, 0),
    simd_op!("vcmppd k1, zmm2, zmm3/m512, imm8", [0x62, 0x81, 0x7d, 0xc2], 1, 512, -1, Avx512, 0x66, 2, 512, 1),
    // avx512 logical, evex encoded.
    simd_op!("vpandd zmm1, zmm2, zmm3/m512", [0x62, 0x81, 0x7d, 0xdb], 0, 512, -1, Avx512, 0x66, 2, 512, 4),
    simd_op!("vpandq zmm1, zmm2, zmm3/m512", [0x62, 0x81, 0xfd, 0xdb], 0, 512, -1, Avx512, 0x66, 2, 512, 4),
    simd_op!("vpord zmm1, zmm2, zmm3/m512", [0x62, 0x81, 0x7d, 0xeb], 0, 512, -1, Avx512, 0x66, 2, 512, 4),
    simd_op!("vporq zmm1, zmm2, zmm3/m512", [0x62, 0x81, 0xfd, 0xeb], 0, 512, -1, Avx512, 0x66, 2, 512, 4),
    simd_op!("vpxord zmm1, zmm2, zmm3/m512", [0x62, 0x81, 0x7d, 0xef], 0, 512, -1, Avx512, 0x66, 2, 512, 4),
    simd_op!("vpxorq zmm1, zmm2, zmm3/m512", [0x62, 0x81, 0xfd, 0xef], 0, 512, -1, Avx512, 0x66, 2, 512, 4),
    // avx512 mask operations, vex-encoded.
    simd_op!("kmovb k1, k2/m8", [0xc5, 0xf9, 0x90], 0, 8, -1, Avx512, 0x66, 1, 8, 4),
    simd_op!("kmovw k1, k2/m16", [0xc5, 0xf9, 0x90], 0, 16, -1, Avx512, 0x66, 1, 16, 4),
    simd_op!("kmovd k1, k2/m32", [0xc5, 0x79, 0x90], 0, 32, -1, Avx512, 0x66, 1, 32, 4), // L=1
    simd_op!("kmovq k1, k2/m64", [0xc5, 0x39, 0x90], 0, 64, -1, Avx512, 0x66, 1, 64, 4), // L=2
    simd_op!("kandb k1, k2, k3", [0xc5, 0xfd, 0x41], 0, 8, -1, Avx512, 0x66, 1, 8, 4),
    simd_op!("kandd k1, k2, k3", [0xc5, 0x7d, 0x41], 0, 32, -1, Avx512, 0x66, 1, 32, 4),
    // avx512 shuffle/unpack, evex encoded.
    simd_op!("vshufps zmm1, zmm2, zmm3/m512, imm8", [0x62, 0x81, 0x7c, 0xc6], 1, 512, -1, Avx512, 0, 2, 512, 0),
    simd_op!("vshufpd zmm1, zmm2, zmm3/m512, imm8", [0x62, 0x81, 0x7d, 0xc6], 1, 512, -1, Avx512, 0x66, 2, 512, 1),
    simd_op!("vunpckhps zmm1, zmm2, zmm3/m512", [0x62, 0x81, 0x7c, 0x15], 0, 512, -1, Avx512, 0, 2, 512, 0),
    simd_op!("vunpcklps zmm1, zmm2, zmm3/m512", [0x62, 0x81, 0x7c, 0x14], 0, 512, -1, Avx512, 0, 2, 512, 0),
    // avx512 conversion, evex encoded.
    simd_op!("vcvtps2pd zmm1, ymm2/m256", [0x62, 0x81, 0x7c, 0x5a], 0, 512, -1, Avx512, 0, 2, 512, 1),
    simd_op!("vcvtpd2ps ymm1, zmm2/m512", [0x62, 0x81, 0x7d, 0x5a], 0, 256, -1, Avx512, 0x66, 2, 256, 0),
    simd_op!("vcvtsi2ss xmm1, xmm2, r/m32", [0x62, 0x81, 0x7e, 0x2a], 0, 32, -1, Avx512, 0xf3, 2, 32, 2),
    simd_op!("vcvtsi2sd xmm1, xmm2, r/m32", [0x62, 0x81, 0x7f, 0x2a], 0, 64, -1, Avx512, 0xf2, 2, 64, 3),
    simd_op!("vcvtss2si r32, xmm1/m32", [0x62, 0x81, 0x7e, 0x2d], 0, 32, -1, Avx512, 0xf3, 2, 32, 2),
    simd_op!("vcvtsd2si r32, xmm1/m64", [0x62, 0x81, 0x7f, 0x2d], 0, 64, -1, Avx512, 0xf2, 2, 64, 3),
    // avx vex-encoded 128-bit data movement.
    simd_op!("vmovaps xmm1, xmm2/m128", [0xc5, 0xf8, 0x28], 0, 128, -1, Avx, 0, 1, 128, 0),
    simd_op!("vmovaps xmm1/m128, xmm2", [0xc5, 0xf9, 0x29], 0, 128, -1, Avx, 0, 1, 128, 0),
    simd_op!("vmovups xmm1, xmm2/m128", [0xc5, 0xf8, 0x10], 0, 128, -1, Avx, 0, 1, 128, 0),
    simd_op!("vmovups xmm1/m128, xmm2", [0xc5, 0xf9, 0x11], 0, 128, -1, Avx, 0, 1, 128, 0),
    // avx vex-encoded 256-bit data movement.
    simd_op!("vmovaps ymm1, ymm2/m256", [0xc5, 0xfc, 0x28], 0, 256, -1, Avx, 0, 1, 256, 0),
    simd_op!("vmovaps ymm1/m256, ymm2", [0xc5, 0xfd, 0x29], 0, 256, -1, Avx, 0, 1, 256, 0),
    // avx vex-encoded arithmetic.
    simd_op!("vaddps xmm1, xmm2, xmm3/m128", [0xc5, 0xf0, 0x58], 0, 128, -1, Avx, 0, 1, 128, 0),
    simd_op!("vaddps ymm1, ymm2, ymm3/m256", [0xc5, 0xf4, 0x58], 0, 256, -1, Avx, 0, 1, 256, 0),
    simd_op!("vaddpd xmm1, xmm2, xmm3/m128", [0xc5, 0xf1, 0x58], 0, 128, -1, Avx, 0x66, 1, 128, 1),
    simd_op!("vaddpd ymm1, ymm2, ymm3/m256", [0xc5, 0xf5, 0x58], 0, 256, -1, Avx, 0x66, 1, 256, 1),
    // avx vex-encoded integer simd.
    simd_op!("vmovdqu xmm1, xmm2/m128", [0xc5, 0xf9, 0x6f], 0, 128, -1, Avx, 0xf3, 1, 128, 4),
    simd_op!("vmovdqu xmm1/m128, xmm2", [0xc5, 0xf9, 0x7f], 0, 128, -1, Avx, 0xf3, 1, 128, 4),
    simd_op!("vmovdqa xmm1, xmm2/m128", [0xc5, 0xf9, 0x6f], 0, 128, -1, Avx, 0x66, 1, 128, 4),
    simd_op!("vmovdqa xmm1/m128, xmm2", [0xc5, 0xf9, 0x7f], 0, 128, -1, Avx, 0x66, 1, 128, 4),
    simd_op!("vpaddd xmm1, xmm2, xmm3/m128", [0xc5, 0xf9, 0xfe], 0, 128, -1, Avx, 0x66, 1, 128, 4),
    simd_op!("vpsubd xmm1, xmm2, xmm3/m128", [0xc5, 0xf9, 0xfa], 0, 128, -1, Avx, 0x66, 1, 128, 4),
    simd_op!("vpmulld xmm1, xmm2, xmm3/m128", [0xc5, 0xf9, 0x40], 0, 128, -1, Avx, 0x66, 1, 128, 4),
    // additional vex-encoded instructions that compilers commonly generate.
    simd_op!("vmovups xmm1, xmm2/m128", [0xc5, 0xf8, 0x10], 0, 128, -1, Avx, 0, 1, 128, 0),
    simd_op!("vmovups xmm1/m128, xmm2", [0xc5, 0xf8, 0x11], 0, 128, -1, Avx, 0, 1, 128, 0),
    // avx vex-encoded scalar operations.
    simd_op!("vmovss xmm1, xmm2/m32", [0xc5, 0xfa, 0x10], 0, 32, -1, Avx, 0, 1, 32, 2),
    simd_op!("vmovss xmm1/m32, xmm2", [0xc5, 0xfa, 0x11], 0, 32, -1, Avx, 0, 1, 32, 2),
    simd_op!("vmovsd xmm1, xmm2/m64", [0xc5, 0xfb, 0x10], 0, 64, -1, Avx, 0, 1, 64, 3),
    simd_op!("vmovsd xmm1/m64, xmm2", [0xc5, 0xfb, 0x11], 0, 64, -1, Avx, 0, 1, 64, 3),
    simd_op!("vmulss xmm1, xmm2, xmm3/m32", [0xc5, 0xea, 0x59], 0, 32, -1, Avx, 0, 1, 32, 2),
    simd_op!("vmulsd xmm1, xmm2, xmm3/m64", [0xc5, 0xeb, 0x59], 0, 64, -1, Avx, 0, 1, 64, 3),
    simd_op!("vaddss xmm1, xmm2, xmm3/m32", [0xc5, 0xea, 0x58], 0, 32, -1, Avx, 0, 1, 32, 2),
    simd_op!("vaddsd xmm1, xmm2, xmm3/m64", [0xc5, 0xeb, 0x58], 0, 64, -1, Avx, 0, 1, 64, 3),
    simd_op!("vdivsd xmm1, xmm2, xmm3/m64", [0xc5, 0xeb, 0x5e], 0, 64, -1, Avx, 0, 1, 64, 3),
    simd_op!("vcvtss2sd xmm1, xmm2, xmm3/m32", [0xc5, 0xea, 0x5a], 0, 32, -1, Avx, 0, 1, 32, 2),
];
