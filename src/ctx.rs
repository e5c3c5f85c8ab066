//! Process-wide, write-once disassembler context.
//!
//! Mirrors the original C library's `rda_context_t` / `rda_begin` / `rda_get_context`: a tiny
//! pair of flags installed once before any disassembly takes place and read concurrently
//! thereafter without locking.

use spin::Once;

use crate::error::DisasmError;

/// `verbose` gates diagnostic `log` output; `use_simd` gates whether the SIMD encoding table is
/// consulted during decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Context {
    pub verbose: bool,
    pub use_simd: bool,
}

static CONTEXT: Once<Context> = Once::new();

/// Install the process-wide context. A second call is a caller error: the first-installed
/// context wins and this call is silently ignored, matching the write-once resource model.
/// Use [`try_begin`] to detect the race.
pub fn begin(context: Context) {
    CONTEXT.call_once(|| context);
}

/// Like [`begin`], but reports whether the context was already installed.
pub fn try_begin(context: Context) -> Result<(), DisasmError> {
    let mut already_set = true;
    CONTEXT.call_once(|| {
        already_set = false;
        context
    });
    if already_set {
        Err(DisasmError::ContextAlreadyInitialized)
    } else {
        Ok(())
    }
}

/// Read the current context, or the default `{false, false}` if [`begin`] was never called.
pub fn get_context() -> Context {
    CONTEXT.get().copied().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_context_is_all_false() {
        assert_eq!(Context::default(), Context { verbose: false, use_simd: false });
    }
}
