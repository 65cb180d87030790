//! # Classcraft Render - Utility Rule Accumulation and Rendering
//!
//! `classcraft-render` is the engine behind fluent CSS utility builders. A
//! builder accumulates an ordered list of rules (a payload plus an optional
//! responsive breakpoint) and renders that list in one of two forms:
//!
//! - a space-separated **class string** (`"text-primary d-md-flex"`)
//! - a `; `-separated **inline style string** (`"color: #ff0000; display: grid"`)
//!
//! This crate is the foundation for the `classcraft` builder catalog, but can
//! be used on its own to drive custom utilities.
//!
//! ## Core Concepts
//!
//! - [`Breakpoint`]: Closed set of responsive widths (phone to ultrawide)
//! - [`BreakpointTokens`]: The breakpoint → class infix table, loadable from YAML/JSON
//! - [`splice`]: Inserts a breakpoint token after a class prefix
//! - [`RuleList`]: Ordered rules changed only through named [`Transition`]s
//! - [`PropertyAdapter`]: Maps one styling domain's payloads to classes and declarations
//! - [`TokenTable`] / [`PairTable`]: Data tables implementing the adapter lookups
//! - [`render_class`] / [`render_style`] / [`render`]: The two-mode renderer
//!
//! ## Quick Start
//!
//! ```rust
//! use classcraft_render::{render_class, render_style, Breakpoint, BreakpointTokens};
//! use classcraft_render::{Declaration, PropertyAdapter, RuleList, TokenEntry, TokenTable};
//!
//! struct Display(TokenTable);
//!
//! impl PropertyAdapter for Display {
//!     type Payload = String;
//!
//!     fn legal_tokens(&self) -> Vec<&'static str> {
//!         self.0.legal_tokens()
//!     }
//!     fn class_of(&self, payload: &String) -> Option<String> {
//!         self.0.class_of(payload)
//!     }
//!     fn style_of(&self, payload: &String) -> Option<Vec<Declaration>> {
//!         self.0.style_of(payload)
//!     }
//!     fn default_payload(&self) -> String {
//!         self.0.default_token().to_string()
//!     }
//! }
//!
//! let display = Display(TokenTable::new("display", "block", &[
//!     TokenEntry::class_only("flex", "d-flex"),
//!     TokenEntry::class_only("none", "d-none"),
//! ]));
//!
//! let mut rules = RuleList::new();
//! rules.append("none".to_string());
//! rules.append("flex".to_string());
//! rules.set_breakpoint(Breakpoint::Laptop, || display.default_payload());
//! rules.append("grid".to_string());
//!
//! let tokens = BreakpointTokens::default();
//! assert_eq!(render_class(&display, &rules, &tokens), "d-none d-md-flex");
//! assert_eq!(render_style(&display, &rules), "display: grid");
//! ```
//!
//! ## Silent Skips
//!
//! Class and style output are complementary. A raw CSS value has no class, and
//! a theme token may have no inline equivalent; such a rule contributes
//! nothing in that mode. Rendering never fails. Enable `trace` logging for the
//! `classcraft_render` target to see which rules were skipped.
//!
//! ## Breakpoint Tokens
//!
//! The class infix for each breakpoint comes from a process-wide table that
//! defaults to the Bootstrap 5 infixes. It can be replaced at startup:
//!
//! ```rust
//! use classcraft_render::{breakpoint_tokens, reset_breakpoint_tokens, set_breakpoint_tokens};
//! use classcraft_render::{Breakpoint, BreakpointTokens};
//!
//! let tokens = BreakpointTokens::from_yaml("phone: xs\n").unwrap();
//! set_breakpoint_tokens(tokens).unwrap();
//! assert_eq!(breakpoint_tokens().token(Breakpoint::Phone), "xs");
//! reset_breakpoint_tokens();
//! ```
//!
//! Configuration errors ([`ConfigError`]) are the only errors this crate
//! produces.

mod adapter;
pub mod breakpoint;
mod error;
pub mod prelude;
mod render;
mod rule;
mod splice;
mod table;

pub use adapter::{Declaration, PropertyAdapter};
pub use breakpoint::{
    breakpoint_tokens, load_breakpoint_tokens, reset_breakpoint_tokens, set_breakpoint_tokens,
    Breakpoint, BreakpointTokens, CONFIG_EXTENSIONS,
};
pub use error::{ConfigError, Result};
pub use render::{
    render, render_class, render_mode, render_style, RenderMode, CLASS_SEPARATOR, STYLE_SEPARATOR,
};
pub use rule::{Narrowing, Rule, RuleList, Transition};
pub use splice::splice;
pub use table::{PairEntry, PairTable, TokenEntry, TokenTable, GLOBAL_KEYWORDS};
