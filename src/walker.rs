//! Function walker: repeated single-instruction decoding until a `ret`-family instruction or a
//! decode failure is observed.
//!
//! Ground truth: `rda64.c::rda_disassemble64`/`rda_get_instruction_at`.

use alloc::vec::Vec;

use crate::decoder::{decode_single, DecodedInstruction, MAX_INSTRUCTION_LENGTH};
use crate::error::DisasmError;
use crate::record::Category;

/// A disassembled run of instructions starting at a fixed address.
#[derive(Debug, Clone)]
pub struct DecodedFunction {
    /// Starting address, as an integer (not dereferenced directly by this crate).
    pub address: usize,
    /// Total byte length consumed across all instructions.
    pub length: usize,
    /// The bytes actually consumed.
    pub bytes: Vec<u8>,
    /// Decoded instructions in execution order.
    pub instructions: Vec<DecodedInstruction>,
}

fn is_ret_family(instruction: &DecodedInstruction) -> bool {
    instruction.record.ty == Category::Control && instruction.record.mnemonic.starts_with("ret")
}

/// Walk a function starting at a raw address, stopping when a `ret`-family instruction is
/// decoded or the decoder reports an invalid instruction.
///
/// Every decode step reads up to [`MAX_INSTRUCTION_LENGTH`] (15) bytes, the architectural maximum
/// instruction length. The caller is responsible for ensuring that many bytes are readable past
/// every candidate instruction start (§4.5's read-safety contract) — this function dereferences
/// `address` as a raw pointer and is therefore `unsafe`.
///
/// # Safety
///
/// `address` must point to at least 15 readable bytes past the start of every instruction the
/// walk visits, up to and including the terminating `ret`-family instruction or invalid byte.
pub unsafe fn disassemble(address: usize) -> DecodedFunction {
    let mut offset = 0usize;
    let mut consumed = Vec::new();
    let mut instructions = Vec::new();

    loop {
        let window = unsafe {
            core::slice::from_raw_parts((address + offset) as *const u8, MAX_INSTRUCTION_LENGTH)
        };
        if step(window, &mut offset, &mut consumed, &mut instructions) {
            break;
        }
    }

    DecodedFunction { address, length: offset, bytes: consumed, instructions }
}

/// Walk a function over an in-memory buffer, bounding every decode step by the buffer's
/// remaining length rather than always assuming 15 readable bytes (§6).
pub fn disassemble_slice(bytes: &[u8]) -> Result<DecodedFunction, DisasmError> {
    if bytes.is_empty() {
        return Err(DisasmError::EmptyInput);
    }

    let mut offset = 0usize;
    let mut consumed = Vec::new();
    let mut instructions = Vec::new();

    loop {
        if step(&bytes[offset..], &mut offset, &mut consumed, &mut instructions) {
            break;
        }
    }

    Ok(DecodedFunction { address: 0, length: offset, bytes: consumed, instructions })
}

/// Decode one instruction from `window`, append it and its bytes, and advance `offset`. Returns
/// `true` when the walk should terminate.
fn step(
    window: &[u8],
    offset: &mut usize,
    consumed: &mut Vec<u8>,
    instructions: &mut Vec<DecodedInstruction>,
) -> bool {
    let decoded = decode_single(window);
    consumed.extend_from_slice(&window[..decoded.length.min(window.len())]);
    let terminate_invalid = !decoded.valid;
    let terminate_ret = is_ret_family(&decoded);
    *offset += decoded.length;
    instructions.push(decoded);

    if terminate_invalid {
        debug!("walker: terminating at offset {offset}, invalid instruction");
        return true;
    }
    if terminate_ret {
        debug!("walker: terminating at offset {offset}, ret-family instruction");
        return true;
    }
    false
}

/// Indexed read into a decoded function's instruction sequence.
pub fn get_instruction_at(function: &DecodedFunction, index: usize) -> Option<&DecodedInstruction> {
    function.instructions.get(index)
}

/// Category accessor.
pub fn get_type(instruction: &DecodedInstruction) -> Category {
    if instruction.valid {
        instruction.record.ty
    } else {
        Category::Invalid
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ret_terminates_after_one_instruction() {
        let function = disassemble_slice(&[0xc3]).unwrap();
        assert_eq!(function.instructions.len(), 1);
        assert_eq!(function.length, 1);
        assert!(function.instructions[0].valid);
    }

    #[test]
    fn nop_then_ret() {
        let function = disassemble_slice(&[0x90, 0xc3]).unwrap();
        assert_eq!(function.instructions.len(), 2);
        assert_eq!(function.instructions[0].length, 1);
        assert_eq!(function.instructions[1].length, 1);
        assert_eq!(function.length, 2);
    }

    #[test]
    fn length_sum_matches_function_length() {
        let function = disassemble_slice(&[0x48, 0x89, 0xe5, 0x90, 0xc3]).unwrap();
        let sum: usize = function.instructions.iter().map(|i| i.length).sum();
        assert_eq!(sum, function.length);
    }

    #[test]
    fn empty_slice_is_an_error() {
        assert!(matches!(disassemble_slice(&[]), Err(DisasmError::EmptyInput)));
    }

    #[test]
    fn get_instruction_at_out_of_bounds_is_none() {
        let function = disassemble_slice(&[0xc3]).unwrap();
        assert!(get_instruction_at(&function, 5).is_none());
    }

    #[test]
    fn unrecognized_byte_terminates_walk() {
        let function = disassemble_slice(&[0x90, 0x0f, 0xff]).unwrap();
        assert_eq!(function.instructions.len(), 2);
        assert!(!function.instructions[1].valid);
        assert_eq!(get_type(&function.instructions[1]), Category::Invalid);
    }
}

#[cfg(test)]
mod proptests {
    use proptest::prelude::*;

    use super::*;

    proptest! {
        /// §8: walker round-trip — the sum of every instruction's length equals the function's
        /// total length, for arbitrary input bytes.
        #[test]
        fn instruction_lengths_sum_to_function_length(
            bytes in prop::collection::vec(any::<u8>(), 1..256)
        ) {
            let function = disassemble_slice(&bytes).unwrap();
            let sum: usize = function.instructions.iter().map(|i| i.length).sum();
            prop_assert_eq!(sum, function.length);
            prop_assert!(function.length <= bytes.len());
        }
    }
}
