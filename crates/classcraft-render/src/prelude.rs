//! Convenient imports for writing adapters.
//!
//! ```rust
//! use classcraft_render::prelude::*;
//!
//! let rules: RuleList<String> = RuleList::seeded("3".to_string());
//! assert_eq!(rules.len(), 1);
//! ```

pub use crate::adapter::{Declaration, PropertyAdapter};
pub use crate::breakpoint::{breakpoint_tokens, Breakpoint, BreakpointTokens};
pub use crate::render::{render, render_class, render_mode, render_style, RenderMode};
pub use crate::rule::{Narrowing, Rule, RuleList, Transition};
pub use crate::table::{PairEntry, PairTable, TokenEntry, TokenTable};
