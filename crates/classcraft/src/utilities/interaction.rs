//! Selection and pointer behavior.

use std::borrow::Cow;

use classcraft_render::{Declaration, PropertyAdapter, TokenEntry};

use crate::builder::UtilityBuilder;

token_utility! {
    /// Text selection (`user-select-*` / `user-select`).
    UserSelect / UserSelectAdapter / USER_SELECT {
        property: "user-select",
        default: "auto",
        tokens: [
            all => TokenEntry::both("all", "user-select-all", "all"),
            auto => TokenEntry::both("auto", "user-select-auto", "auto"),
            none => TokenEntry::both("none", "user-select-none", "none"),
            text => TokenEntry::style_only("text", "text"),
        ],
    }
}

token_utility! {
    /// Pointer events (`pe-*` / `pointer-events`).
    PointerEvents / PointerEventsAdapter / POINTER_EVENTS {
        property: "pointer-events",
        default: "auto",
        tokens: [
            none => TokenEntry::both("none", "pe-none", "none"),
            auto => TokenEntry::both("auto", "pe-auto", "auto"),
        ],
    }
}

/// Adapter combining text selection and pointer events in one rule.
///
/// Each rule renders up to two classes and two declarations, using the
/// [`UserSelect`] and [`PointerEvents`] tables.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InteractionAdapter;

impl PropertyAdapter for InteractionAdapter {
    /// `(user-select, pointer-events)`.
    type Payload = (Cow<'static, str>, Cow<'static, str>);

    fn legal_tokens(&self) -> Vec<&'static str> {
        vec!["none", "all", "no-select", "no-pointer", "text", "all-text"]
    }

    fn class_of(&self, payload: &Self::Payload) -> Option<String> {
        self.classes_of(payload).into_iter().next()
    }

    fn classes_of(&self, (select, pointer): &Self::Payload) -> Vec<String> {
        USER_SELECT
            .class_of(select)
            .into_iter()
            .chain(POINTER_EVENTS.class_of(pointer))
            .collect()
    }

    fn style_of(&self, (select, pointer): &Self::Payload) -> Option<Vec<Declaration>> {
        let declarations: Vec<Declaration> = USER_SELECT
            .style_of(select)
            .into_iter()
            .chain(POINTER_EVENTS.style_of(pointer))
            .flatten()
            .collect();
        (!declarations.is_empty()).then_some(declarations)
    }

    fn default_payload(&self) -> Self::Payload {
        (Cow::Borrowed("auto"), Cow::Borrowed("auto"))
    }
}

/// Combined selection and pointer behavior.
///
/// ```rust
/// use classcraft::Interaction;
///
/// let interaction = Interaction::new().none().on_tablet();
/// assert_eq!(interaction.to_class(), "user-sm-select-none pe-sm-none");
/// assert_eq!(interaction.to_style(), "user-select: none; pointer-events: none");
/// ```
pub type Interaction = UtilityBuilder<InteractionAdapter>;

impl UtilityBuilder<InteractionAdapter> {
    fn pair(self, select: &'static str, pointer: &'static str) -> Self {
        self.push((Cow::Borrowed(select), Cow::Borrowed(pointer)))
    }

    /// No selection, no pointer events.
    pub fn none(self) -> Self {
        self.pair("none", "none")
    }

    /// Default selection and pointer events.
    pub fn all(self) -> Self {
        self.pair("auto", "auto")
    }

    pub fn no_select(self) -> Self {
        self.pair("none", "auto")
    }

    pub fn no_pointer(self) -> Self {
        self.pair("auto", "none")
    }

    pub fn text(self) -> Self {
        self.pair("text", "auto")
    }

    /// Selects the whole element on click.
    pub fn all_text(self) -> Self {
        self.pair("all", "auto")
    }
}
