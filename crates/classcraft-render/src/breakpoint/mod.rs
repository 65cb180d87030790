//! Responsive breakpoints and their class-name tokens.
//!
//! A [`Breakpoint`] is one of a small closed set of width qualifiers. When a
//! rule carries a breakpoint, the class renderer splices the breakpoint's
//! token into the rule's class name (`d-flex` on a laptop becomes `d-md-flex`).
//!
//! ## Token Tables
//!
//! The mapping from breakpoint to token lives in a [`BreakpointTokens`] table.
//! The default table uses the Bootstrap 5 infixes:
//!
//! | Breakpoint   | Token |
//! |--------------|-------|
//! | `Phone`      | (none) |
//! | `Tablet`     | `sm`  |
//! | `Laptop`     | `md`  |
//! | `Desktop`    | `lg`  |
//! | `Widescreen` | `xl`  |
//! | `Ultrawide`  | `xxl` |
//!
//! An empty token means "no infix": a phone rule renders the same class as an
//! unqualified rule.
//!
//! ## Configuration
//!
//! Tables can be loaded from YAML or JSON. Missing keys keep their default:
//!
//! ```rust
//! use classcraft_render::{Breakpoint, BreakpointTokens};
//!
//! let tokens = BreakpointTokens::from_yaml("tablet: tab\nlaptop: lap\n").unwrap();
//! assert_eq!(tokens.token(Breakpoint::Tablet), "tab");
//! assert_eq!(tokens.token(Breakpoint::Desktop), "lg");
//! ```
//!
//! ## Process-Wide Table
//!
//! Builders render with the current process-wide table. Replace it once at
//! startup with [`set_breakpoint_tokens`] or [`load_breakpoint_tokens`]:
//!
//! ```rust,ignore
//! classcraft_render::load_breakpoint_tokens("config/breakpoints.yaml")?;
//! ```

#[allow(clippy::module_inception)]
mod breakpoint;
mod global;
mod tokens;

pub use breakpoint::Breakpoint;
pub use global::{
    breakpoint_tokens, load_breakpoint_tokens, reset_breakpoint_tokens, set_breakpoint_tokens,
};
pub use tokens::{BreakpointTokens, CONFIG_EXTENSIONS};
