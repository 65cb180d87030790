//! Rules and the chaining state machine that accumulates them.
//!
//! A [`RuleList`] only changes through named transitions, each of which moves
//! the list length by at most one:
//!
//! | Transition                        | Empty list          | Non-empty list                        |
//! |-----------------------------------|---------------------|---------------------------------------|
//! | [`append`](RuleList::append)      | push                | push                                  |
//! | [`replace_last`](RuleList::replace_last) | no-op        | rewrite last rule                     |
//! | [`set_breakpoint`](RuleList::set_breakpoint) | push seed | rewrite last rule's breakpoint       |
//! | [`qualify`](RuleList::qualify)    | push narrowed seed  | narrow last in place, or push a copy  |
//!
//! Value calls (`.primary()`, `.s3()`) append. Breakpoint calls
//! (`.on_tablet()`) and dimension calls (`.from_top()`, `.x()`) modify the
//! rule that was just described.

use serde::Serialize;

use crate::breakpoint::Breakpoint;

/// One accumulated payload plus its optional breakpoint.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Rule<P> {
    /// Property-specific payload (a token, a `(property, value)` pair, ...).
    pub payload: P,
    /// Responsive qualifier; `None` applies at every width.
    pub breakpoint: Option<Breakpoint>,
}

impl<P> Rule<P> {
    /// Creates a rule that applies at every width.
    pub fn new(payload: P) -> Self {
        Self {
            payload,
            breakpoint: None,
        }
    }

    /// Creates a rule qualified by a breakpoint.
    pub fn at(payload: P, breakpoint: Breakpoint) -> Self {
        Self {
            payload,
            breakpoint: Some(breakpoint),
        }
    }

    /// Returns a copy of this rule with a different breakpoint.
    pub fn with_breakpoint(self, breakpoint: Option<Breakpoint>) -> Self {
        Self { breakpoint, ..self }
    }

    /// Returns a copy of this rule with a different payload.
    pub fn with_payload(self, payload: P) -> Self {
        Self { payload, ..self }
    }
}

/// What a chaining call did to the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// A new rule was pushed.
    Appended,
    /// The last rule was rewritten in place.
    ReplacedLast,
    /// The list was empty and a default rule was synthesized.
    Seeded,
}

/// Result of narrowing the last rule's payload (side or axis selection).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Narrowing<P> {
    /// Overwrite the last rule's payload, keeping its breakpoint.
    InPlace(P),
    /// Push a new rule that inherits the last rule's breakpoint.
    Append(P),
}

/// Ordered rules owned by a single builder.
///
/// Insertion order is significant: the renderer emits rules in order and
/// never deduplicates them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RuleList<P> {
    rules: Vec<Rule<P>>,
}

impl<P> Default for RuleList<P> {
    fn default() -> Self {
        Self {
            rules: Vec::with_capacity(4),
        }
    }
}

impl<P> RuleList<P> {
    /// Creates an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a list holding one unqualified rule.
    pub fn seeded(payload: P) -> Self {
        let mut list = Self::new();
        list.append(payload);
        list
    }

    /// Creates a list by copying caller-supplied rules.
    pub fn from_rules<I>(rules: I) -> Self
    where
        I: IntoIterator<Item = Rule<P>>,
    {
        Self {
            rules: rules.into_iter().collect(),
        }
    }

    /// Pushes a new unqualified rule.
    pub fn append(&mut self, payload: P) -> Transition {
        self.rules.push(Rule::new(payload));
        Transition::Appended
    }

    /// Rewrites the last rule. Returns `None` (and does nothing) when empty.
    pub fn replace_last<F>(&mut self, f: F) -> Option<Transition>
    where
        F: FnOnce(Rule<P>) -> Rule<P>,
    {
        let last = self.rules.pop()?;
        self.rules.push(f(last));
        Some(Transition::ReplacedLast)
    }

    /// Qualifies the last rule with a breakpoint.
    ///
    /// On an empty list, `seed` supplies the payload of a synthesized rule
    /// carrying the breakpoint.
    pub fn set_breakpoint<F>(&mut self, breakpoint: Breakpoint, seed: F) -> Transition
    where
        F: FnOnce() -> P,
    {
        match self.replace_last(|rule| rule.with_breakpoint(Some(breakpoint))) {
            Some(transition) => transition,
            None => {
                self.rules.push(Rule::at(seed(), breakpoint));
                Transition::Seeded
            }
        }
    }

    /// Narrows the last rule along a dimension (side, axis).
    ///
    /// `narrow` inspects the last payload and decides whether to overwrite it
    /// or to push a sibling rule. On an empty list the seed payload is
    /// narrowed and pushed without a breakpoint.
    pub fn qualify<S, F>(&mut self, seed: S, narrow: F) -> Transition
    where
        S: FnOnce() -> P,
        F: FnOnce(&P) -> Narrowing<P>,
    {
        let Some(last) = self.rules.last_mut() else {
            let payload = match narrow(&seed()) {
                Narrowing::InPlace(p) | Narrowing::Append(p) => p,
            };
            self.rules.push(Rule::new(payload));
            return Transition::Seeded;
        };

        match narrow(&last.payload) {
            Narrowing::InPlace(payload) => {
                last.payload = payload;
                Transition::ReplacedLast
            }
            Narrowing::Append(payload) => {
                let breakpoint = last.breakpoint;
                self.rules.push(Rule {
                    payload,
                    breakpoint,
                });
                Transition::Appended
            }
        }
    }

    /// Returns the last rule, if any.
    pub fn last(&self) -> Option<&Rule<P>> {
        self.rules.last()
    }

    /// Returns the rules in insertion order.
    pub fn as_slice(&self) -> &[Rule<P>] {
        &self.rules
    }

    /// Iterates the rules in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Rule<P>> {
        self.rules.iter()
    }

    /// Number of rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns `true` if no rule has been accumulated.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Consumes the list, returning the rules.
    pub fn into_vec(self) -> Vec<Rule<P>> {
        self.rules
    }
}

impl<'a, P> IntoIterator for &'a RuleList<P> {
    type Item = &'a Rule<P>;
    type IntoIter = std::slice::Iter<'a, Rule<P>>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.iter()
    }
}

impl<P> FromIterator<Rule<P>> for RuleList<P> {
    fn from_iter<I: IntoIterator<Item = Rule<P>>>(iter: I) -> Self {
        Self::from_rules(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Side {
        All,
        Top,
        Left,
    }

    fn narrow_to(side: Side) -> impl FnOnce(&(u8, Side)) -> Narrowing<(u8, Side)> {
        move |&(size, current)| {
            if current == Side::All {
                Narrowing::InPlace((size, side))
            } else {
                Narrowing::Append((size, side))
            }
        }
    }

    #[test]
    fn append_always_pushes_unqualified() {
        let mut list = RuleList::seeded("a");
        list.set_breakpoint(Breakpoint::Laptop, || "seed");
        assert_eq!(list.append("b"), Transition::Appended);
        assert_eq!(
            list.as_slice(),
            &[Rule::at("a", Breakpoint::Laptop), Rule::new("b")]
        );
    }

    #[test]
    fn set_breakpoint_replaces_last() {
        let mut list = RuleList::seeded("a");
        list.append("b");
        assert_eq!(
            list.set_breakpoint(Breakpoint::Tablet, || "seed"),
            Transition::ReplacedLast
        );
        assert_eq!(list.len(), 2);
        assert_eq!(list.last(), Some(&Rule::at("b", Breakpoint::Tablet)));
        assert_eq!(list.as_slice()[0].breakpoint, None);
    }

    #[test]
    fn set_breakpoint_twice_keeps_latest() {
        let mut list = RuleList::seeded("a");
        list.set_breakpoint(Breakpoint::Tablet, || "seed");
        list.set_breakpoint(Breakpoint::Desktop, || "seed");
        assert_eq!(list.as_slice(), &[Rule::at("a", Breakpoint::Desktop)]);
    }

    #[test]
    fn set_breakpoint_on_empty_seeds() {
        let mut list: RuleList<&str> = RuleList::new();
        assert_eq!(
            list.set_breakpoint(Breakpoint::Phone, || "seed"),
            Transition::Seeded
        );
        assert_eq!(list.as_slice(), &[Rule::at("seed", Breakpoint::Phone)]);
    }

    #[test]
    fn replace_last_on_empty_is_noop() {
        let mut list: RuleList<&str> = RuleList::new();
        assert_eq!(list.replace_last(|r| r.with_payload("x")), None);
        assert!(list.is_empty());
    }

    #[test]
    fn qualify_narrows_open_rule_in_place() {
        let mut list = RuleList::seeded((3, Side::All));
        assert_eq!(
            list.qualify(|| (0, Side::All), narrow_to(Side::Top)),
            Transition::ReplacedLast
        );
        assert_eq!(list.as_slice(), &[Rule::new((3, Side::Top))]);
    }

    #[test]
    fn qualify_appends_after_specific_side() {
        let mut list = RuleList::seeded((3, Side::All));
        list.set_breakpoint(Breakpoint::Laptop, || (0, Side::All));
        list.qualify(|| (0, Side::All), narrow_to(Side::Top));
        assert_eq!(
            list.qualify(|| (0, Side::All), narrow_to(Side::Left)),
            Transition::Appended
        );
        assert_eq!(
            list.as_slice(),
            &[
                Rule::at((3, Side::Top), Breakpoint::Laptop),
                Rule::at((3, Side::Left), Breakpoint::Laptop),
            ]
        );
    }

    #[test]
    fn qualify_on_empty_seeds_narrowed() {
        let mut list = RuleList::new();
        assert_eq!(
            list.qualify(|| (0, Side::All), narrow_to(Side::Top)),
            Transition::Seeded
        );
        list.qualify(|| (0, Side::All), narrow_to(Side::Left));
        assert_eq!(
            list.as_slice(),
            &[Rule::new((0, Side::Top)), Rule::new((0, Side::Left))]
        );
    }

    #[test]
    fn from_rules_copies_in_order() {
        let list: RuleList<&str> =
            RuleList::from_rules(vec![Rule::new("a"), Rule::at("b", Breakpoint::Tablet)]);
        let payloads: Vec<&str> = list.iter().map(|r| r.payload).collect();
        assert_eq!(payloads, vec!["a", "b"]);
    }

    #[test]
    fn serializes_as_plain_array() {
        let list = RuleList::from_rules(vec![Rule::at("a", Breakpoint::Tablet)]);
        let json = serde_json::to_string(&list).unwrap();
        assert_eq!(json, r#"[{"payload":"a","breakpoint":"tablet"}]"#);
    }
}
