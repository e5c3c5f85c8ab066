//! Error type for the crate's few fallible boundary functions.
//!
//! The decoder and walker themselves are infallible (see module-level docs on
//! [`crate::decoder`] and [`crate::walker`]); `DisasmError` only surfaces at the edges where a
//! caller can genuinely misuse the API.

use thiserror::Error;

/// Errors reported by the boundary operations `try_begin` and `disassemble_slice`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DisasmError {
    /// `disassemble_slice` was called with a zero-length buffer.
    #[error("cannot disassemble an empty byte slice")]
    EmptyInput,

    /// `try_begin` was called after the context had already been installed.
    #[error("context already initialized")]
    ContextAlreadyInitialized,
}
