//! The property adapter contract.
//!
//! An adapter describes one styling domain (color, margin, display, ...): the
//! tokens it recognizes, how a payload becomes a class name, and how it
//! becomes inline CSS. The renderer knows nothing else about the domain.

use std::borrow::Cow;
use std::fmt;

use serde::Serialize;

/// One `property: value` inline-style declaration.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Declaration {
    pub property: Cow<'static, str>,
    pub value: Cow<'static, str>,
}

impl Declaration {
    pub fn new(property: impl Into<Cow<'static, str>>, value: impl Into<Cow<'static, str>>) -> Self {
        Self {
            property: property.into(),
            value: value.into(),
        }
    }
}

impl fmt::Display for Declaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.property, self.value)
    }
}

/// Maps one styling domain's payloads to classes and declarations.
///
/// Both lookups are total: a payload with no representation in a mode returns
/// `None` and the renderer skips it. An adapter decides per payload whether
/// the two modes overlap; raw values are expected to be style-only.
///
/// # Example
///
/// ```rust
/// use std::borrow::Cow;
/// use classcraft_render::{render_class, render_style, BreakpointTokens, Declaration};
/// use classcraft_render::{Breakpoint, PropertyAdapter, Rule, RuleList};
///
/// struct Opacity;
///
/// impl PropertyAdapter for Opacity {
///     type Payload = &'static str;
///
///     fn legal_tokens(&self) -> Vec<&'static str> {
///         vec!["0", "50", "100"]
///     }
///
///     fn class_of(&self, payload: &&'static str) -> Option<String> {
///         self.legal_tokens()
///             .contains(payload)
///             .then(|| format!("opacity-{payload}"))
///     }
///
///     fn style_of(&self, payload: &&'static str) -> Option<Vec<Declaration>> {
///         (!self.legal_tokens().contains(payload))
///             .then(|| vec![Declaration::new("opacity", *payload)])
///     }
///
///     fn default_payload(&self) -> &'static str {
///         "100"
///     }
/// }
///
/// let rules = RuleList::from_rules(vec![Rule::at("50", Breakpoint::Laptop), Rule::new(".3")]);
/// assert_eq!(render_class(&Opacity, &rules, &BreakpointTokens::default()), "opacity-md-50");
/// assert_eq!(render_style(&Opacity, &rules), "opacity: .3");
/// ```
pub trait PropertyAdapter {
    /// What one rule carries for this domain.
    type Payload: Clone + fmt::Debug + PartialEq;

    /// The closed set of recognized tokens, in declaration order.
    fn legal_tokens(&self) -> Vec<&'static str>;

    /// Base class name for a payload, before breakpoint splicing.
    fn class_of(&self, payload: &Self::Payload) -> Option<String>;

    /// All base class names for a payload.
    ///
    /// Defaults to [`class_of`](Self::class_of). Adapters whose payload spans
    /// several properties override this to emit one class per property.
    fn classes_of(&self, payload: &Self::Payload) -> Vec<String> {
        self.class_of(payload).into_iter().collect()
    }

    /// Inline declarations for a payload. `Some(vec![])` and `None` both
    /// contribute nothing.
    fn style_of(&self, payload: &Self::Payload) -> Option<Vec<Declaration>>;

    /// Payload synthesized when a qualifier is applied to an empty builder.
    fn default_payload(&self) -> Self::Payload;
}

impl<A: PropertyAdapter + ?Sized> PropertyAdapter for &A {
    type Payload = A::Payload;

    fn legal_tokens(&self) -> Vec<&'static str> {
        (**self).legal_tokens()
    }

    fn class_of(&self, payload: &Self::Payload) -> Option<String> {
        (**self).class_of(payload)
    }

    fn classes_of(&self, payload: &Self::Payload) -> Vec<String> {
        (**self).classes_of(payload)
    }

    fn style_of(&self, payload: &Self::Payload) -> Option<Vec<Declaration>> {
        (**self).style_of(payload)
    }

    fn default_payload(&self) -> Self::Payload {
        (**self).default_payload()
    }
}
