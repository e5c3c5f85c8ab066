//! Exercises the SIMD-disabled half of SPEC_FULL.md §8 scenario 5 in its own process: the
//! crate's context is a write-once `spin::Once`, so a unit test asserting the default
//! `use_simd=false` behavior would race every other unit test that calls `begin` with
//! `use_simd=true` in the same shared test binary. A separate integration test binary gets its
//! own process and its own statics, so the default context is observed here deterministically
//! without ever calling `begin`.

#[test]
fn addpd_is_unrecognized_without_simd_context() {
    let decoded = rda64::decode_single(&[0x66, 0x0f, 0x58, 0xc1]);
    assert!(!decoded.valid);
}
