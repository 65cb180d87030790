//! Overflow, optionally restricted to one axis.
//!
//! The axis is a qualifier like a breakpoint: `.hidden().x()` narrows the
//! rule just described instead of adding a new one.
//!
//! ```rust
//! use classcraft::Overflow;
//!
//! let overflow = Overflow::new().hidden().x();
//! assert_eq!(overflow.to_class(), "overflow-x-hidden");
//! assert_eq!(overflow.to_style(), "overflow-x: hidden");
//! ```

use std::borrow::Cow;

use classcraft_render::{Declaration, Narrowing, PropertyAdapter};
use serde::Serialize;

use crate::builder::UtilityBuilder;

const TOKENS: [&str; 4] = ["auto", "hidden", "visible", "scroll"];

/// Which overflow axis a rule applies to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    #[default]
    Both,
    X,
    Y,
}

impl Axis {
    fn suffix(self) -> &'static str {
        match self {
            Axis::Both => "",
            Axis::X => "-x",
            Axis::Y => "-y",
        }
    }
}

/// Payload of an overflow rule.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct OverflowRule {
    pub value: Cow<'static, str>,
    pub axis: Axis,
}

impl OverflowRule {
    pub fn new(value: impl Into<Cow<'static, str>>, axis: Axis) -> Self {
        Self {
            value: value.into(),
            axis,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OverflowAdapter;

impl PropertyAdapter for OverflowAdapter {
    type Payload = OverflowRule;

    fn legal_tokens(&self) -> Vec<&'static str> {
        TOKENS.to_vec()
    }

    fn class_of(&self, rule: &OverflowRule) -> Option<String> {
        TOKENS
            .contains(&&*rule.value)
            .then(|| format!("overflow{}-{}", rule.axis.suffix(), rule.value))
    }

    fn style_of(&self, rule: &OverflowRule) -> Option<Vec<Declaration>> {
        if rule.value.trim().is_empty() {
            return None;
        }
        Some(vec![Declaration::new(
            format!("overflow{}", rule.axis.suffix()),
            rule.value.clone(),
        )])
    }

    fn default_payload(&self) -> OverflowRule {
        OverflowRule::new("auto", Axis::Both)
    }
}

/// Overflow (`overflow[-x|-y]-*` / `overflow[-x|-y]`).
pub type Overflow = UtilityBuilder<OverflowAdapter>;

impl UtilityBuilder<OverflowAdapter> {
    pub fn auto(self) -> Self {
        self.push(OverflowRule::new("auto", Axis::Both))
    }

    pub fn hidden(self) -> Self {
        self.push(OverflowRule::new("hidden", Axis::Both))
    }

    pub fn visible(self) -> Self {
        self.push(OverflowRule::new("visible", Axis::Both))
    }

    pub fn scroll(self) -> Self {
        self.push(OverflowRule::new("scroll", Axis::Both))
    }

    /// Appends a raw value, rendered only as inline style.
    pub fn css(self, value: impl Into<String>) -> Self {
        self.push(OverflowRule::new(value.into(), Axis::Both))
    }

    /// Restricts the most recent rule to the horizontal axis.
    pub fn x(self) -> Self {
        self.axis(Axis::X)
    }

    /// Restricts the most recent rule to the vertical axis.
    pub fn y(self) -> Self {
        self.axis(Axis::Y)
    }

    /// Sets the axis of the most recent rule. A later axis call overwrites
    /// an earlier one.
    pub fn axis(self, axis: Axis) -> Self {
        self.qualify(|last| Narrowing::InPlace(OverflowRule::new(last.value.clone(), axis)))
    }
}
