//! The process-wide breakpoint token table.
//!
//! Builders consult this table when rendering classes unless they are given a
//! table explicitly. It starts out as [`BreakpointTokens::bootstrap`].

use std::path::Path;
use std::sync::{Arc, PoisonError, RwLock};

use once_cell::sync::Lazy;

use super::BreakpointTokens;
use crate::error::Result;

static TOKENS: Lazy<RwLock<Arc<BreakpointTokens>>> =
    Lazy::new(|| RwLock::new(Arc::new(BreakpointTokens::default())));

/// Returns the current process-wide token table.
pub fn breakpoint_tokens() -> Arc<BreakpointTokens> {
    let guard = TOKENS.read().unwrap_or_else(PoisonError::into_inner);
    Arc::clone(&*guard)
}

/// Installs a new process-wide token table.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidToken`](crate::ConfigError::InvalidToken) if
/// the table fails validation; the current table is left unchanged.
///
/// # Example
///
/// ```rust
/// use classcraft_render::{breakpoint_tokens, set_breakpoint_tokens, reset_breakpoint_tokens};
/// use classcraft_render::{Breakpoint, BreakpointTokens};
///
/// set_breakpoint_tokens(BreakpointTokens::default().with(Breakpoint::Phone, "xs")).unwrap();
/// assert_eq!(breakpoint_tokens().token(Breakpoint::Phone), "xs");
/// reset_breakpoint_tokens();
/// ```
pub fn set_breakpoint_tokens(tokens: BreakpointTokens) -> Result<()> {
    tokens.validate()?;
    log::debug!("installing breakpoint tokens: {:?}", tokens);
    let mut guard = TOKENS.write().unwrap_or_else(PoisonError::into_inner);
    *guard = Arc::new(tokens);
    Ok(())
}

/// Restores the default (Bootstrap) token table.
pub fn reset_breakpoint_tokens() {
    log::debug!("resetting breakpoint tokens to defaults");
    let mut guard = TOKENS.write().unwrap_or_else(PoisonError::into_inner);
    *guard = Arc::new(BreakpointTokens::default());
}

/// Loads a token table from a file and installs it process-wide.
///
/// # Errors
///
/// See [`BreakpointTokens::from_file`].
pub fn load_breakpoint_tokens<P: AsRef<Path>>(path: P) -> Result<()> {
    let path = path.as_ref();
    let tokens = BreakpointTokens::from_file(path)?;
    log::debug!("loaded breakpoint tokens from {}", path.display());
    set_breakpoint_tokens(tokens)
}
