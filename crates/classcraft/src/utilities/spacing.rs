//! Margin, padding and border width.
//!
//! Spacing rules carry a size and a [`Side`]. Side calls qualify the rule just
//! described: the first side call narrows an all-sides rule in place, and
//! each further side call adds a sibling rule with the same size and
//! breakpoint.
//!
//! ```rust
//! use classcraft::Margin;
//!
//! let margin = Margin::new().s3().from_top().from_left();
//! assert_eq!(margin.len(), 2);
//! assert_eq!(margin.to_class(), "mt-3 ms-3");
//! assert_eq!(margin.to_style(), "margin-top: 1rem; margin-left: 1rem");
//! ```

use std::borrow::Cow;
use std::marker::PhantomData;

use classcraft_render::{Declaration, Narrowing, PropertyAdapter};
use serde::Serialize;

use crate::builder::UtilityBuilder;

/// Which edges a spacing rule applies to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Side {
    #[default]
    All,
    Top,
    Right,
    Bottom,
    Left,
    Horizontal,
    Vertical,
    InlineStart,
    InlineEnd,
}

impl Side {
    /// Class infix: `t`, `e`, `b`, `s`, `x`, `y`, or nothing for all sides.
    pub fn code(self) -> &'static str {
        match self {
            Side::All => "",
            Side::Top => "t",
            Side::Right | Side::InlineEnd => "e",
            Side::Bottom => "b",
            Side::Left | Side::InlineStart => "s",
            Side::Horizontal => "x",
            Side::Vertical => "y",
        }
    }

    /// Physical or logical edge names this side expands to in CSS.
    fn edges(self) -> &'static [&'static str] {
        match self {
            Side::All => &[""],
            Side::Top => &["top"],
            Side::Right => &["right"],
            Side::Bottom => &["bottom"],
            Side::Left => &["left"],
            Side::Horizontal => &["left", "right"],
            Side::Vertical => &["top", "bottom"],
            Side::InlineStart => &["inline-start"],
            Side::InlineEnd => &["inline-end"],
        }
    }
}

/// Payload of a spacing rule.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Spacing {
    pub size: Cow<'static, str>,
    pub side: Side,
}

impl Spacing {
    pub fn new(size: impl Into<Cow<'static, str>>, side: Side) -> Self {
        Self {
            size: size.into(),
            side,
        }
    }
}

/// The size scale and naming of one spacing utility.
pub trait SpacingScale {
    /// Class prefix (`m`, `p`, `b`).
    const PREFIX: &'static str;
    /// CSS property before the edge name (`margin`, `border`).
    const PROPERTY: &'static str;
    /// CSS property after the edge name (`-width` for borders).
    const SUFFIX: &'static str;
    /// `(token, css value)` pairs, in declaration order.
    const SIZES: &'static [(&'static str, &'static str)];
    /// Size used when a qualifier is applied to an empty builder.
    const DEFAULT_SIZE: &'static str = "0";
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MarginScale;

impl SpacingScale for MarginScale {
    const PREFIX: &'static str = "m";
    const PROPERTY: &'static str = "margin";
    const SUFFIX: &'static str = "";
    const SIZES: &'static [(&'static str, &'static str)] = &[
        ("0", "0"),
        ("1", "0.25rem"),
        ("2", "0.5rem"),
        ("3", "1rem"),
        ("4", "1.5rem"),
        ("5", "3rem"),
        ("auto", "auto"),
    ];
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PaddingScale;

impl SpacingScale for PaddingScale {
    const PREFIX: &'static str = "p";
    const PROPERTY: &'static str = "padding";
    const SUFFIX: &'static str = "";
    const SIZES: &'static [(&'static str, &'static str)] = &[
        ("0", "0"),
        ("1", "0.25rem"),
        ("2", "0.5rem"),
        ("3", "1rem"),
        ("4", "1.5rem"),
        ("5", "3rem"),
    ];
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BorderScale;

impl SpacingScale for BorderScale {
    const PREFIX: &'static str = "b";
    const PROPERTY: &'static str = "border";
    const SUFFIX: &'static str = "-width";
    const SIZES: &'static [(&'static str, &'static str)] = &[
        ("0", "0"),
        ("1", "1px"),
        ("2", "2px"),
        ("3", "3px"),
        ("4", "4px"),
        ("5", "5px"),
    ];
}

/// Adapter for a [`SpacingScale`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SpacingAdapter<S>(PhantomData<S>);

impl<S: SpacingScale> SpacingAdapter<S> {
    fn value_of(size: &str) -> Option<&'static str> {
        S::SIZES
            .iter()
            .find(|(token, _)| *token == size)
            .map(|(_, value)| *value)
    }

    fn property(edge: &str) -> String {
        if edge.is_empty() {
            format!("{}{}", S::PROPERTY, S::SUFFIX)
        } else {
            format!("{}-{}{}", S::PROPERTY, edge, S::SUFFIX)
        }
    }
}

impl<S: SpacingScale> PropertyAdapter for SpacingAdapter<S> {
    type Payload = Spacing;

    fn legal_tokens(&self) -> Vec<&'static str> {
        S::SIZES.iter().map(|(token, _)| *token).collect()
    }

    fn class_of(&self, spacing: &Spacing) -> Option<String> {
        Self::value_of(&spacing.size)?;
        Some(format!("{}{}-{}", S::PREFIX, spacing.side.code(), spacing.size))
    }

    fn style_of(&self, spacing: &Spacing) -> Option<Vec<Declaration>> {
        let value: Cow<'static, str> = match Self::value_of(&spacing.size) {
            Some(value) => Cow::Borrowed(value),
            None if spacing.size.trim().is_empty() => return None,
            None => spacing.size.clone(),
        };

        Some(
            spacing
                .side
                .edges()
                .iter()
                .map(|edge| Declaration::new(Self::property(edge), value.clone()))
                .collect(),
        )
    }

    fn default_payload(&self) -> Spacing {
        Spacing::new(S::DEFAULT_SIZE, Side::All)
    }
}

/// Outer spacing (`m-*`, `mt-*`, ... / `margin[-edge]`).
pub type Margin = UtilityBuilder<SpacingAdapter<MarginScale>>;
/// Inner spacing (`p-*`, `pt-*`, ... / `padding[-edge]`).
pub type Padding = UtilityBuilder<SpacingAdapter<PaddingScale>>;
/// Border width (`b-*`, `bt-*`, ... / `border[-edge]-width`).
pub type Border = UtilityBuilder<SpacingAdapter<BorderScale>>;

impl<S: SpacingScale> UtilityBuilder<SpacingAdapter<S>> {
    fn size(self, size: &'static str) -> Self {
        self.push(Spacing::new(size, Side::All))
    }

    pub fn s0(self) -> Self {
        self.size("0")
    }

    pub fn s1(self) -> Self {
        self.size("1")
    }

    pub fn s2(self) -> Self {
        self.size("2")
    }

    pub fn s3(self) -> Self {
        self.size("3")
    }

    pub fn s4(self) -> Self {
        self.size("4")
    }

    pub fn s5(self) -> Self {
        self.size("5")
    }

    /// Appends a raw CSS length, rendered only as inline style.
    pub fn css(self, value: impl Into<String>) -> Self {
        self.push(Spacing::new(value.into(), Side::All))
    }

    /// Applies the most recent size to one side.
    ///
    /// An all-sides rule is narrowed in place; a rule that already has a side
    /// gets a sibling with the same size and breakpoint.
    pub fn side(self, side: Side) -> Self {
        self.qualify(|last| {
            let narrowed = Spacing::new(last.size.clone(), side);
            if last.side == Side::All {
                Narrowing::InPlace(narrowed)
            } else {
                Narrowing::Append(narrowed)
            }
        })
    }

    pub fn from_top(self) -> Self {
        self.side(Side::Top)
    }

    pub fn from_right(self) -> Self {
        self.side(Side::Right)
    }

    pub fn from_bottom(self) -> Self {
        self.side(Side::Bottom)
    }

    pub fn from_left(self) -> Self {
        self.side(Side::Left)
    }

    pub fn from_start(self) -> Self {
        self.side(Side::InlineStart)
    }

    pub fn from_end(self) -> Self {
        self.side(Side::InlineEnd)
    }

    pub fn on_x(self) -> Self {
        self.side(Side::Horizontal)
    }

    pub fn on_y(self) -> Self {
        self.side(Side::Vertical)
    }

    pub fn on_all(self) -> Self {
        self.side(Side::All)
    }
}

impl UtilityBuilder<SpacingAdapter<MarginScale>> {
    pub fn auto(self) -> Self {
        self.size("auto")
    }
}
