//! Single-class helpers: clearfix, truncation, stretched links, and
//! screen-reader visibility.

use std::borrow::Cow;
use std::marker::PhantomData;

use classcraft_render::{Declaration, PropertyAdapter};

use crate::builder::UtilityBuilder;

/// A helper that is either applied or not, with one class.
pub trait Marker {
    const CLASS: &'static str;
    /// Inline equivalent; empty when the helper relies on pseudo-elements.
    const DECLARATIONS: &'static [(&'static str, &'static str)];
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClearfixMarker;

impl Marker for ClearfixMarker {
    const CLASS: &'static str = "clearfix";
    const DECLARATIONS: &'static [(&'static str, &'static str)] = &[];
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TruncateMarker;

impl Marker for TruncateMarker {
    const CLASS: &'static str = "text-truncate";
    const DECLARATIONS: &'static [(&'static str, &'static str)] = &[
        ("overflow", "hidden"),
        ("text-overflow", "ellipsis"),
        ("white-space", "nowrap"),
    ];
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StretchedLinkMarker;

impl Marker for StretchedLinkMarker {
    const CLASS: &'static str = "stretched-link";
    const DECLARATIONS: &'static [(&'static str, &'static str)] = &[
        ("position", "absolute"),
        ("top", "0"),
        ("right", "0"),
        ("bottom", "0"),
        ("left", "0"),
        ("z-index", "1"),
        ("pointer-events", "auto"),
    ];
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MarkerAdapter<M>(PhantomData<M>);

impl<M: Marker> PropertyAdapter for MarkerAdapter<M> {
    type Payload = ();

    fn legal_tokens(&self) -> Vec<&'static str> {
        vec![M::CLASS]
    }

    fn class_of(&self, _: &()) -> Option<String> {
        Some(M::CLASS.to_string())
    }

    fn style_of(&self, _: &()) -> Option<Vec<Declaration>> {
        let declarations: Vec<Declaration> = M::DECLARATIONS
            .iter()
            .map(|&(property, value)| Declaration::new(property, value))
            .collect();
        (!declarations.is_empty()).then_some(declarations)
    }

    fn default_payload(&self) {}
}

/// Clears floated children (`clearfix`). Class only.
///
/// ```rust
/// use classcraft::Clearfix;
///
/// assert_eq!(Clearfix::enabled().to_class(), "clearfix");
/// assert_eq!(Clearfix::new().on_laptop().to_class(), "md-clearfix");
/// assert_eq!(Clearfix::enabled().to_style(), "");
/// ```
pub type Clearfix = UtilityBuilder<MarkerAdapter<ClearfixMarker>>;
/// Single-line text with an ellipsis (`text-truncate`).
pub type Truncate = UtilityBuilder<MarkerAdapter<TruncateMarker>>;
/// Makes the containing block clickable (`stretched-link`).
pub type StretchedLink = UtilityBuilder<MarkerAdapter<StretchedLinkMarker>>;

impl<M: Marker + Default> UtilityBuilder<MarkerAdapter<M>> {
    /// A builder with the helper applied at every width.
    pub fn enabled() -> Self {
        Self::seeded(())
    }
}

impl<M: Marker> UtilityBuilder<MarkerAdapter<M>> {
    /// Applies the helper again, typically followed by a breakpoint.
    pub fn apply(self) -> Self {
        self.push(())
    }
}

const VISUALLY_HIDDEN: &[(&str, &str)] = &[
    ("position", "absolute"),
    ("width", "1px"),
    ("height", "1px"),
    ("padding", "0"),
    ("margin", "-1px"),
    ("overflow", "hidden"),
    ("clip", "rect(0, 0, 0, 0)"),
    ("white-space", "nowrap"),
    ("border", "0"),
];

/// Screen-reader-only content (`visually-hidden`, `visually-hidden-focusable`).
///
/// The focusable variant's reveal-on-focus behavior needs a `:focus`
/// selector, so inline style can only express the hidden state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScreenReaderAdapter;

impl PropertyAdapter for ScreenReaderAdapter {
    type Payload = Cow<'static, str>;

    fn legal_tokens(&self) -> Vec<&'static str> {
        vec!["only", "only-focusable"]
    }

    fn class_of(&self, payload: &Cow<'static, str>) -> Option<String> {
        match &**payload {
            "only" => Some("visually-hidden".to_string()),
            "only-focusable" => Some("visually-hidden-focusable".to_string()),
            _ => None,
        }
    }

    fn style_of(&self, payload: &Cow<'static, str>) -> Option<Vec<Declaration>> {
        self.class_of(payload)?;
        Some(
            VISUALLY_HIDDEN
                .iter()
                .map(|&(property, value)| Declaration::new(property, value))
                .collect(),
        )
    }

    fn default_payload(&self) -> Cow<'static, str> {
        Cow::Borrowed("only")
    }
}

pub type ScreenReader = UtilityBuilder<ScreenReaderAdapter>;

impl UtilityBuilder<ScreenReaderAdapter> {
    pub fn only(self) -> Self {
        self.push(Cow::Borrowed("only"))
    }

    pub fn only_focusable(self) -> Self {
        self.push(Cow::Borrowed("only-focusable"))
    }
}
