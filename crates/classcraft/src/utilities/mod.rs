//! The catalog of concrete utilities.
//!
//! Most utilities are one CSS property with a fixed token list; they are
//! declared with `token_utility!`, which produces the adapter, the builder
//! alias and one chaining method per token. Utilities whose payload carries
//! more than a token (overflow axis, spacing side, property pairs) implement
//! [`PropertyAdapter`](classcraft_render::PropertyAdapter) by hand.

/// Declares a table-backed utility over one CSS property.
///
/// Generates a `static` [`TokenTable`](classcraft_render::TokenTable), a unit
/// adapter, a `UtilityBuilder` alias, one method per token, the CSS-wide
/// keyword methods and a `css(raw)` escape hatch.
macro_rules! token_utility {
    (
        $(#[$meta:meta])*
        $name:ident / $adapter:ident / $table:ident {
            property: $property:literal,
            default: $default:literal,
            tokens: [ $( $method:ident => $entry:expr ),* $(,)? ] $(,)?
        }
    ) => {
        static $table: once_cell::sync::Lazy<classcraft_render::TokenTable> =
            once_cell::sync::Lazy::new(|| {
                classcraft_render::TokenTable::new($property, $default, &[ $( $entry ),* ])
            });

        #[doc = concat!("Adapter for the `", $property, "` property.")]
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
        pub struct $adapter;

        impl classcraft_render::PropertyAdapter for $adapter {
            type Payload = std::borrow::Cow<'static, str>;

            fn legal_tokens(&self) -> Vec<&'static str> {
                $table.legal_tokens()
            }

            fn class_of(&self, payload: &Self::Payload) -> Option<String> {
                $table.class_of(payload)
            }

            fn style_of(&self, payload: &Self::Payload) -> Option<Vec<classcraft_render::Declaration>> {
                $table.style_of(payload)
            }

            fn default_payload(&self) -> Self::Payload {
                std::borrow::Cow::Borrowed($table.default_token())
            }
        }

        $(#[$meta])*
        pub type $name = $crate::builder::UtilityBuilder<$adapter>;

        impl $crate::builder::UtilityBuilder<$adapter> {
            $(
                pub fn $method(self) -> Self {
                    let entry: classcraft_render::TokenEntry = $entry;
                    self.push(std::borrow::Cow::Borrowed(entry.token))
                }
            )*

            pub fn inherit(self) -> Self {
                self.push(std::borrow::Cow::Borrowed("inherit"))
            }

            pub fn initial(self) -> Self {
                self.push(std::borrow::Cow::Borrowed("initial"))
            }

            pub fn revert(self) -> Self {
                self.push(std::borrow::Cow::Borrowed("revert"))
            }

            pub fn revert_layer(self) -> Self {
                self.push(std::borrow::Cow::Borrowed("revert-layer"))
            }

            pub fn unset(self) -> Self {
                self.push(std::borrow::Cow::Borrowed("unset"))
            }

            /// Appends a raw CSS value. Raw values only render as inline style.
            pub fn css(self, value: impl Into<String>) -> Self {
                self.push(std::borrow::Cow::Owned(value.into()))
            }
        }
    };
}

/// Declares a utility whose payload is a `(property, value)` pair.
macro_rules! pair_utility {
    (
        $(#[$meta:meta])*
        $name:ident / $adapter:ident / $table:ident {
            default: ($dprop:literal, $dvalue:literal),
            pairs: [ $( $method:ident => ($prop:literal, $value:literal, $class:literal) ),* $(,)? ] $(,)?
        }
    ) => {
        static $table: once_cell::sync::Lazy<classcraft_render::PairTable> =
            once_cell::sync::Lazy::new(|| {
                classcraft_render::PairTable::new(
                    ($dprop, $dvalue),
                    &[ $( classcraft_render::PairEntry::new($prop, $value, $class) ),* ],
                )
            });

        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
        pub struct $adapter;

        impl classcraft_render::PropertyAdapter for $adapter {
            type Payload = $crate::utilities::Pair;

            fn legal_tokens(&self) -> Vec<&'static str> {
                $table.legal_tokens()
            }

            fn class_of(&self, (property, value): &Self::Payload) -> Option<String> {
                $table.class_of(property, value)
            }

            fn style_of(&self, (property, value): &Self::Payload) -> Option<Vec<classcraft_render::Declaration>> {
                $table.style_of(property, value)
            }

            fn default_payload(&self) -> Self::Payload {
                let (property, value) = $table.default_pair();
                (std::borrow::Cow::Borrowed(property), std::borrow::Cow::Borrowed(value))
            }
        }

        $(#[$meta])*
        pub type $name = $crate::builder::UtilityBuilder<$adapter>;

        impl $crate::builder::UtilityBuilder<$adapter> {
            $(
                pub fn $method(self) -> Self {
                    self.push((std::borrow::Cow::Borrowed($prop), std::borrow::Cow::Borrowed($value)))
                }
            )*

            /// Appends an arbitrary declaration. Pairs outside the table only
            /// render as inline style.
            pub fn css(self, property: &'static str, value: impl Into<String>) -> Self {
                self.push((std::borrow::Cow::Borrowed(property), std::borrow::Cow::Owned(value.into())))
            }
        }
    };
}

mod color;
mod display;
mod flex;
mod helpers;
mod interaction;
mod layout;
mod overflow;
mod position;
mod spacing;
mod typography;
mod visibility;

/// Payload of pair utilities: a CSS property and its value.
pub type Pair = (std::borrow::Cow<'static, str>, std::borrow::Cow<'static, str>);

pub use color::{BackgroundColor, BackgroundColorAdapter, Color, ColorAdapter};
pub use display::{Display, DisplayAdapter};
pub use flex::{Flex, FlexAdapter};
pub use helpers::{
    Clearfix, ClearfixMarker, Marker, MarkerAdapter, ScreenReader, ScreenReaderAdapter,
    StretchedLink, StretchedLinkMarker, Truncate, TruncateMarker,
};
pub use interaction::{
    Interaction, InteractionAdapter, PointerEvents, PointerEventsAdapter, UserSelect,
    UserSelectAdapter,
};
pub use layout::{
    BoxShadow, BoxShadowAdapter, Float, FloatAdapter, Gap, GapAdapter, Height, HeightAdapter,
    Width, WidthAdapter, ZIndex, ZIndexAdapter,
};
pub use overflow::{Axis, Overflow, OverflowAdapter, OverflowRule};
pub use position::{Position, PositionAdapter, PositionOffset, PositionOffsetAdapter};
pub use spacing::{
    Border, BorderScale, Margin, MarginScale, Padding, PaddingScale, Side, Spacing,
    SpacingAdapter, SpacingScale,
};
pub use typography::{
    FontStyle, FontStyleAdapter, FontWeight, FontWeightAdapter, LineHeight, LineHeightAdapter,
    TextAlignment, TextAlignmentAdapter, TextDecoration, TextDecorationAdapter, TextTransform,
    TextTransformAdapter, TextWrap, TextWrapAdapter, VerticalAlign, VerticalAlignAdapter,
};
pub use visibility::{Visibility, VisibilityAdapter};
