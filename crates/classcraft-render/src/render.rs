//! Folding a rule list into class or style text.
//!
//! Both modes walk the rules once, in order. A rule with nothing to say in
//! the requested mode is skipped silently (traced at `log::trace!` level).

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::adapter::PropertyAdapter;
use crate::breakpoint::BreakpointTokens;
use crate::rule::RuleList;
use crate::splice::splice;

/// Separator between class names.
pub const CLASS_SEPARATOR: &str = " ";
/// Separator between inline declarations.
pub const STYLE_SEPARATOR: &str = "; ";

/// Which attribute a rule list is rendered for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RenderMode {
    /// Space-separated utility classes (the `class` attribute).
    #[default]
    Class,
    /// `; `-separated declarations (the `style` attribute).
    Style,
}

impl fmt::Display for RenderMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderMode::Class => f.write_str("class"),
            RenderMode::Style => f.write_str("style"),
        }
    }
}

/// Renders rules as a class attribute value.
///
/// Each class produced by the adapter gets the rule's breakpoint token spliced
/// in. Rules without a class are skipped.
pub fn render_class<A: PropertyAdapter>(
    adapter: &A,
    rules: &RuleList<A::Payload>,
    tokens: &BreakpointTokens,
) -> String {
    let mut classes: Vec<String> = Vec::with_capacity(rules.len());

    for rule in rules {
        let bases = adapter.classes_of(&rule.payload);
        if bases.is_empty() {
            log::trace!("no class for {:?}, skipping in class mode", rule.payload);
            continue;
        }

        let token = rule.breakpoint.map(|bp| tokens.token(bp)).unwrap_or("");
        classes.extend(
            bases
                .iter()
                .filter(|base| !base.is_empty())
                .map(|base| splice(base, token)),
        );
    }

    classes.join(CLASS_SEPARATOR)
}

/// Renders rules as a style attribute value.
///
/// Breakpoints do not apply to inline styles and are ignored.
pub fn render_style<A: PropertyAdapter>(adapter: &A, rules: &RuleList<A::Payload>) -> String {
    let mut declarations: Vec<String> = Vec::with_capacity(rules.len());

    for rule in rules {
        match adapter.style_of(&rule.payload) {
            Some(decls) if !decls.is_empty() => {
                declarations.extend(decls.iter().map(ToString::to_string));
            }
            _ => log::trace!("no style for {:?}, skipping in style mode", rule.payload),
        }
    }

    declarations.join(STYLE_SEPARATOR)
}

/// Renders classes if there are any, otherwise inline styles.
pub fn render<A: PropertyAdapter>(
    adapter: &A,
    rules: &RuleList<A::Payload>,
    tokens: &BreakpointTokens,
) -> String {
    let classes = render_class(adapter, rules, tokens);
    if classes.is_empty() {
        render_style(adapter, rules)
    } else {
        classes
    }
}

/// Renders rules for an explicit mode.
pub fn render_mode<A: PropertyAdapter>(
    adapter: &A,
    rules: &RuleList<A::Payload>,
    tokens: &BreakpointTokens,
    mode: RenderMode,
) -> String {
    match mode {
        RenderMode::Class => render_class(adapter, rules, tokens),
        RenderMode::Style => render_style(adapter, rules),
    }
}
