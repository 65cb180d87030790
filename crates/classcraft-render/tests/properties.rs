//! Property-based tests for splicing, the rule list and the renderer.

use classcraft_render::{
    render_class, render_style, splice, Breakpoint, BreakpointTokens, Narrowing, PropertyAdapter,
    RuleList, TokenEntry, TokenTable,
};
use once_cell::sync::Lazy;
use proptest::prelude::*;

// ============================================================================
// Test helpers
// ============================================================================

static TABLE: Lazy<TokenTable> = Lazy::new(|| {
    TokenTable::new(
        "color",
        "inherit",
        &[
            TokenEntry::class_only("primary", "text-primary"),
            TokenEntry::class_only("secondary", "text-secondary"),
            TokenEntry::class_only("danger", "text-danger"),
        ],
    )
});

struct Color;

impl PropertyAdapter for Color {
    type Payload = String;

    fn legal_tokens(&self) -> Vec<&'static str> {
        TABLE.legal_tokens()
    }

    fn class_of(&self, payload: &String) -> Option<String> {
        TABLE.class_of(payload)
    }

    fn style_of(&self, payload: &String) -> Option<Vec<classcraft_render::Declaration>> {
        TABLE.style_of(payload)
    }

    fn default_payload(&self) -> String {
        TABLE.default_token().to_string()
    }
}

#[derive(Debug, Clone)]
enum Call {
    Value(&'static str),
    Raw(String),
    On(Breakpoint),
    Narrow(bool),
}

fn breakpoint_strategy() -> impl Strategy<Value = Breakpoint> {
    prop::sample::select(Breakpoint::ALL.to_vec())
}

fn call_strategy() -> impl Strategy<Value = Call> {
    prop_oneof![
        prop::sample::select(vec!["primary", "secondary", "danger"]).prop_map(Call::Value),
        "#[0-9a-f]{6}".prop_map(Call::Raw),
        breakpoint_strategy().prop_map(Call::On),
        any::<bool>().prop_map(Call::Narrow),
    ]
}

fn apply(rules: &mut RuleList<String>, call: &Call) {
    match call {
        Call::Value(token) => {
            rules.append(token.to_string());
        }
        Call::Raw(raw) => {
            rules.append(raw.clone());
        }
        Call::On(bp) => {
            rules.set_breakpoint(*bp, || Color.default_payload());
        }
        Call::Narrow(in_place) => {
            let in_place = *in_place;
            rules.qualify(
                || Color.default_payload(),
                |last| {
                    if in_place {
                        Narrowing::InPlace(last.clone())
                    } else {
                        Narrowing::Append(last.clone())
                    }
                },
            );
        }
    }
}

// ============================================================================
// Splice
// ============================================================================

proptest! {
    /// Splicing with an empty token changes nothing.
    #[test]
    fn splice_empty_token_is_identity(class in "[a-z-]{0,20}") {
        prop_assert_eq!(splice(&class, ""), class);
    }

    /// The token lands right after the first hyphen; the rest is verbatim.
    #[test]
    fn splice_inserts_after_prefix(
        prefix in "[a-z]{1,8}",
        rest in "[a-z0-9-]{0,12}",
        token in "[a-z]{1,4}",
    ) {
        let class = format!("{prefix}-{rest}");
        let spliced = splice(&class, &token);
        prop_assert_eq!(spliced, format!("{prefix}-{token}-{rest}"));
    }

    /// Classes without a prefix get the token prepended.
    #[test]
    fn splice_prepends_without_hyphen(class in "[a-z0-9]{0,12}", token in "[a-z]{1,4}") {
        prop_assert_eq!(splice(&class, &token), format!("{token}-{class}"));
    }

    /// Splicing only ever adds the token and one hyphen.
    #[test]
    fn splice_adds_token_and_hyphen(class in "[a-z-]{0,20}", token in "[a-z]{1,4}") {
        prop_assert_eq!(splice(&class, &token).len(), class.len() + token.len() + 1);
    }
}

// ============================================================================
// Rule list
// ============================================================================

proptest! {
    /// Every call grows the list by at most one rule.
    #[test]
    fn list_grows_by_at_most_one(calls in prop::collection::vec(call_strategy(), 0..40)) {
        let mut rules = RuleList::new();
        for call in &calls {
            let before = rules.len();
            apply(&mut rules, call);
            prop_assert!(rules.len() <= before + 1);
            prop_assert!(rules.len() >= before);
        }
    }

    /// Breakpoint calls only add a rule to an empty list.
    #[test]
    fn breakpoint_appends_only_when_empty(
        calls in prop::collection::vec(call_strategy(), 0..20),
        bp in breakpoint_strategy(),
    ) {
        let mut rules = RuleList::new();
        for call in &calls {
            apply(&mut rules, call);
        }
        let before = rules.len();
        rules.set_breakpoint(bp, || Color.default_payload());
        prop_assert_eq!(rules.len(), before.max(1));
        prop_assert_eq!(rules.last().and_then(|r| r.breakpoint), Some(bp));
    }
}

// ============================================================================
// Renderer
// ============================================================================

proptest! {
    /// Rendering twice yields the same output and leaves the rules untouched.
    #[test]
    fn rendering_is_idempotent(calls in prop::collection::vec(call_strategy(), 0..30)) {
        let mut rules = RuleList::new();
        for call in &calls {
            apply(&mut rules, call);
        }
        let snapshot = rules.clone();
        let tokens = BreakpointTokens::default();

        prop_assert_eq!(
            render_class(&Color, &rules, &tokens),
            render_class(&Color, &rules, &tokens)
        );
        prop_assert_eq!(render_style(&Color, &rules), render_style(&Color, &rules));
        prop_assert_eq!(rules, snapshot);
    }

    /// Value calls show up in call order.
    #[test]
    fn value_calls_render_in_order(
        values in prop::collection::vec(prop::sample::select(vec!["primary", "secondary", "danger"]), 0..20),
    ) {
        let mut rules = RuleList::new();
        for value in &values {
            rules.append(value.to_string());
        }
        let expected: Vec<String> = values.iter().map(|v| format!("text-{v}")).collect();
        prop_assert_eq!(
            render_class(&Color, &rules, &BreakpointTokens::default()),
            expected.join(" ")
        );
    }

    /// Known tokens and raw values never share a mode.
    #[test]
    fn modes_are_exclusive(raw in "#[0-9a-f]{6}", token in prop::sample::select(vec!["primary", "secondary", "danger"])) {
        let token = token.to_string();
        prop_assert!(Color.class_of(&token).is_some());
        prop_assert!(Color.style_of(&token).is_none());
        prop_assert!(Color.class_of(&raw).is_none());
        prop_assert!(Color.style_of(&raw).is_some());
    }

    /// Raw values render in style mode in call order.
    #[test]
    fn raw_values_render_in_order(raws in prop::collection::vec("#[0-9a-f]{6}", 1..10)) {
        let rules: RuleList<String> = RuleList::from_rules(
            raws.iter().cloned().map(classcraft_render::Rule::new),
        );
        let expected: Vec<String> = raws.iter().map(|r| format!("color: {r}")).collect();
        prop_assert_eq!(render_style(&Color, &rules), expected.join("; "));
        prop_assert_eq!(render_class(&Color, &rules, &BreakpointTokens::default()), "");
    }
}
