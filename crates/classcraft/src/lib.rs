//! # Classcraft - Fluent Responsive CSS Utilities
//!
//! Classcraft builds Bootstrap-style utility classes and inline styles from
//! fluent calls. Each utility is a builder that accumulates rules and renders
//! them as either a `class` attribute or a `style` attribute:
//!
//! ```rust
//! use classcraft::{Color, Display, Margin};
//!
//! let color = Color::new().primary().on_tablet().secondary().on_desktop();
//! assert_eq!(color.to_class(), "text-sm-primary text-lg-secondary");
//!
//! let display = Display::new().none().flex().on_laptop();
//! assert_eq!(display.to_class(), "d-none d-md-flex");
//!
//! let margin = Margin::new().s3().from_top().from_left();
//! assert_eq!(margin.to_class(), "mt-3 ms-3");
//! ```
//!
//! ## Core Concepts
//!
//! - [`UtilityBuilder`]: The generic builder every utility is an alias of
//! - [`CssBuilder`]: Object-safe rendering trait for mixing utilities
//! - [`Breakpoint`]: Responsive widths, from `on_phone()` to `on_ultrawide()`
//! - Value calls (`.primary()`, `.s3()`) add a rule; qualifier calls
//!   (`.on_tablet()`, `.from_top()`, `.x()`) refine the rule just added
//!
//! ## Classes or Styles
//!
//! Theme tokens render as classes; raw CSS values render as inline style.
//! Each mode silently skips what it cannot express:
//!
//! ```rust
//! use classcraft::Color;
//!
//! let color = Color::new().css("#ff0000");
//! assert_eq!(color.to_class(), "");
//! assert_eq!(color.to_style(), "color: #ff0000");
//!
//! // Display picks classes when there are any, styles otherwise.
//! assert_eq!(color.to_string(), "color: #ff0000");
//! ```
//!
//! ## Breakpoint Tokens
//!
//! Breakpoints render with the Bootstrap 5 infixes by default. Install a
//! different table once at startup with [`set_breakpoint_tokens`] or
//! [`load_breakpoint_tokens`], or pass one explicitly to
//! [`UtilityBuilder::to_class_with`].
//!
//! ## Utilities
//!
//! | Area | Builders |
//! |------|----------|
//! | Color | [`Color`], [`BackgroundColor`] |
//! | Layout | [`Display`], [`Position`], [`PositionOffset`], [`Overflow`], [`Float`], [`Width`], [`Height`], [`Gap`], [`ZIndex`], [`Flex`] |
//! | Spacing | [`Margin`], [`Padding`], [`Border`] |
//! | Typography | [`FontWeight`], [`FontStyle`], [`TextAlignment`], [`TextTransform`], [`TextDecoration`], [`TextWrap`], [`VerticalAlign`], [`LineHeight`] |
//! | Effects | [`BoxShadow`], [`Visibility`] |
//! | Interaction | [`UserSelect`], [`PointerEvents`], [`Interaction`] |
//! | Helpers | [`Clearfix`], [`Truncate`], [`StretchedLink`], [`ScreenReader`] |

mod builder;
pub mod utilities;

pub use builder::{join_classes, join_styles, CssBuilder, UtilityBuilder};
pub use utilities::*;

// Re-export the rendering core
pub use classcraft_render::{
    breakpoint_tokens, load_breakpoint_tokens, render, render_class, render_mode, render_style,
    reset_breakpoint_tokens, set_breakpoint_tokens, splice, Breakpoint, BreakpointTokens,
    ConfigError, Declaration, Narrowing, PropertyAdapter, RenderMode, Rule, RuleList, Transition,
};
