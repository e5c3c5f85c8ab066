#![no_std]
#![cfg(target_arch = "x86_64")]

//! A length-and-category disassembler for AMD64 (x86_64). Given a byte slice believed to hold
//! machine code, determines per-instruction mnemonic family, byte length, and coarse semantic
//! category (data movement, arithmetic, logic, control flow, system, flags, misc, or an SSE/AVX
//! family). Operand extraction is out of scope: this crate answers "how long, and what kind of
//! instruction", not "what are its operands".

#[macro_use]
extern crate log;

extern crate alloc;

mod ctx;
mod decoder;
mod error;
mod modrm;
mod prefix;
mod record;
mod tables;
mod walker;

pub use ctx::{begin, get_context, try_begin, Context};
pub use decoder::{decode_single, DecodedInstruction, MAX_INSTRUCTION_LENGTH};
pub use error::DisasmError;
pub use record::{Category, EncodingRecord};
pub use walker::{disassemble, disassemble_slice, get_instruction_at, get_type, DecodedFunction};
