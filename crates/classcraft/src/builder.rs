//! The generic fluent builder shared by every utility.
//!
//! A [`UtilityBuilder`] pairs a [`PropertyAdapter`] with the [`RuleList`] it
//! owns. Chaining methods consume and return the builder; rendering methods
//! borrow it and never change the rules.

use std::fmt;

use classcraft_render::{
    breakpoint_tokens, render, render_class, render_mode, render_style, Breakpoint,
    BreakpointTokens, Narrowing, PropertyAdapter, RenderMode, Rule, RuleList,
};

/// Anything that renders to a class attribute and a style attribute.
///
/// Object safe, so heterogeneous builders can be held together:
///
/// ```rust
/// use classcraft::{CssBuilder, Color, Display, Margin};
///
/// let parts: Vec<Box<dyn CssBuilder>> = vec![
///     Box::new(Color::new().primary()),
///     Box::new(Display::new().flex().on_laptop()),
///     Box::new(Margin::new().s3().from_top()),
/// ];
/// let classes: Vec<String> = parts.iter().map(|b| b.to_class()).collect();
/// assert_eq!(classes.join(" "), "text-primary d-md-flex mt-3");
/// ```
pub trait CssBuilder {
    /// Space-separated utility classes.
    fn to_class(&self) -> String;

    /// `; `-separated inline declarations.
    fn to_style(&self) -> String;

    /// Classes if there are any, otherwise inline styles.
    fn to_css(&self) -> String {
        let classes = self.to_class();
        if classes.is_empty() {
            self.to_style()
        } else {
            classes
        }
    }
}

/// Joins the classes of several builders, skipping empty ones.
pub fn join_classes(builders: &[&dyn CssBuilder]) -> String {
    join(builders.iter().map(|b| b.to_class()), " ")
}

/// Joins the inline styles of several builders, skipping empty ones.
pub fn join_styles(builders: &[&dyn CssBuilder]) -> String {
    join(builders.iter().map(|b| b.to_style()), "; ")
}

fn join(parts: impl Iterator<Item = String>, separator: &str) -> String {
    parts
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(separator)
}

/// Fluent rule accumulator for one styling domain.
///
/// Value methods (generated per utility) append a rule. Breakpoint methods
/// qualify the most recent rule, seeding one from the adapter's default
/// payload when there is none yet.
#[derive(Debug, Clone, PartialEq)]
pub struct UtilityBuilder<A: PropertyAdapter> {
    adapter: A,
    rules: RuleList<A::Payload>,
}

impl<A: PropertyAdapter + Default> Default for UtilityBuilder<A> {
    fn default() -> Self {
        Self::with_adapter(A::default())
    }
}

impl<A: PropertyAdapter + Default> UtilityBuilder<A> {
    /// Creates a builder with no rules.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a builder holding one unqualified rule.
    pub fn seeded(payload: A::Payload) -> Self {
        Self {
            adapter: A::default(),
            rules: RuleList::seeded(payload),
        }
    }

    /// Creates a builder from existing rules, kept in order.
    pub fn from_rules<I>(rules: I) -> Self
    where
        I: IntoIterator<Item = Rule<A::Payload>>,
    {
        Self {
            adapter: A::default(),
            rules: RuleList::from_rules(rules),
        }
    }
}

impl<A: PropertyAdapter> UtilityBuilder<A> {
    /// Creates an empty builder around an explicit adapter instance.
    pub fn with_adapter(adapter: A) -> Self {
        Self {
            adapter,
            rules: RuleList::new(),
        }
    }

    /// Appends a rule with the given payload.
    pub fn push(mut self, payload: A::Payload) -> Self {
        self.rules.append(payload);
        self
    }

    /// Qualifies the most recent rule with a breakpoint.
    pub fn on(mut self, breakpoint: Breakpoint) -> Self {
        if self.rules.is_empty() {
            log::trace!("seeding default rule for breakpoint {:?}", breakpoint);
        }
        let adapter = &self.adapter;
        self.rules
            .set_breakpoint(breakpoint, || adapter.default_payload());
        self
    }

    pub fn on_phone(self) -> Self {
        self.on(Breakpoint::Phone)
    }

    pub fn on_tablet(self) -> Self {
        self.on(Breakpoint::Tablet)
    }

    pub fn on_laptop(self) -> Self {
        self.on(Breakpoint::Laptop)
    }

    pub fn on_desktop(self) -> Self {
        self.on(Breakpoint::Desktop)
    }

    pub fn on_widescreen(self) -> Self {
        self.on(Breakpoint::Widescreen)
    }

    pub fn on_ultrawide(self) -> Self {
        self.on(Breakpoint::Ultrawide)
    }

    /// Narrows the most recent rule (side or axis selection).
    ///
    /// See [`RuleList::qualify`].
    pub fn qualify<F>(mut self, narrow: F) -> Self
    where
        F: FnOnce(&A::Payload) -> Narrowing<A::Payload>,
    {
        let adapter = &self.adapter;
        self.rules.qualify(|| adapter.default_payload(), narrow);
        self
    }

    pub fn adapter(&self) -> &A {
        &self.adapter
    }

    pub fn rules(&self) -> &RuleList<A::Payload> {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Renders classes using the process-wide breakpoint tokens.
    pub fn to_class(&self) -> String {
        self.to_class_with(&breakpoint_tokens())
    }

    /// Renders classes using an explicit token table.
    pub fn to_class_with(&self, tokens: &BreakpointTokens) -> String {
        render_class(&self.adapter, &self.rules, tokens)
    }

    /// Renders inline declarations.
    pub fn to_style(&self) -> String {
        render_style(&self.adapter, &self.rules)
    }

    /// Renders for an explicit mode.
    pub fn render(&self, mode: RenderMode) -> String {
        render_mode(&self.adapter, &self.rules, &breakpoint_tokens(), mode)
    }

    /// Consumes the builder, returning its rules.
    pub fn into_rules(self) -> RuleList<A::Payload> {
        self.rules
    }
}

impl<A: PropertyAdapter> CssBuilder for UtilityBuilder<A> {
    fn to_class(&self) -> String {
        UtilityBuilder::to_class(self)
    }

    fn to_style(&self) -> String {
        UtilityBuilder::to_style(self)
    }
}

impl<A: PropertyAdapter> fmt::Display for UtilityBuilder<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render(&self.adapter, &self.rules, &breakpoint_tokens()))
    }
}
