//! Lookup tables backing the token-based adapters.
//!
//! Most utilities are a fixed list of tokens, each with an optional class and
//! an optional CSS value. A [`TokenTable`] turns such a list into the adapter
//! lookups:
//!
//! | payload                          | class       | style              |
//! |----------------------------------|-------------|--------------------|
//! | known token with class and value | the class   | `property: value`  |
//! | known token, class only          | the class   | none               |
//! | known token, value only          | none        | `property: value`  |
//! | anything else (raw CSS)          | none        | `property: raw`    |
//!
//! The CSS-wide keywords in [`GLOBAL_KEYWORDS`] are added to every table as
//! value-only tokens.
//!
//! [`PairTable`] does the same for payloads that name their own property,
//! such as `justify-content: center`.

use std::borrow::Cow;
use std::collections::HashMap;

use crate::adapter::Declaration;

/// CSS-wide keywords accepted by every property.
pub const GLOBAL_KEYWORDS: [&str; 5] = ["inherit", "initial", "revert", "revert-layer", "unset"];

/// One row of a [`TokenTable`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenEntry {
    pub token: &'static str,
    pub class: Option<&'static str>,
    pub value: Option<&'static str>,
}

impl TokenEntry {
    /// A token rendered as a class and as an inline declaration.
    pub const fn both(token: &'static str, class: &'static str, value: &'static str) -> Self {
        Self {
            token,
            class: Some(class),
            value: Some(value),
        }
    }

    /// A token that only exists as a class (theme colors, clearfix).
    pub const fn class_only(token: &'static str, class: &'static str) -> Self {
        Self {
            token,
            class: Some(class),
            value: None,
        }
    }

    /// A token that only exists as an inline value.
    pub const fn style_only(token: &'static str, value: &'static str) -> Self {
        Self {
            token,
            class: None,
            value: Some(value),
        }
    }
}

/// Token lookup for a single CSS property.
///
/// # Example
///
/// ```rust
/// use classcraft_render::{TokenEntry, TokenTable};
///
/// let table = TokenTable::new("display", "block", &[
///     TokenEntry::both("flex", "d-flex", "flex"),
///     TokenEntry::both("block", "d-block", "block"),
/// ]);
///
/// assert_eq!(table.class_of("flex").as_deref(), Some("d-flex"));
/// assert_eq!(table.class_of("contents"), None);
/// assert_eq!(table.style_of("contents").unwrap()[0].to_string(), "display: contents");
/// ```
#[derive(Debug, Clone)]
pub struct TokenTable {
    property: &'static str,
    default: &'static str,
    entries: Vec<TokenEntry>,
    index: HashMap<&'static str, usize>,
}

impl TokenTable {
    /// Builds a table. Later rows win over earlier rows with the same token.
    pub fn new(property: &'static str, default: &'static str, entries: &[TokenEntry]) -> Self {
        let mut table = Self {
            property,
            default,
            entries: Vec::with_capacity(entries.len() + GLOBAL_KEYWORDS.len()),
            index: HashMap::with_capacity(entries.len() + GLOBAL_KEYWORDS.len()),
        };

        for entry in entries {
            table.insert(*entry);
        }
        for keyword in GLOBAL_KEYWORDS {
            if !table.index.contains_key(keyword) {
                table.insert(TokenEntry::style_only(keyword, keyword));
            }
        }
        table
    }

    fn insert(&mut self, entry: TokenEntry) {
        match self.index.get(entry.token) {
            Some(&slot) => self.entries[slot] = entry,
            None => {
                self.index.insert(entry.token, self.entries.len());
                self.entries.push(entry);
            }
        }
    }

    /// The CSS property this table renders.
    pub fn property(&self) -> &'static str {
        self.property
    }

    /// Token used when a breakpoint is set on an empty builder.
    pub fn default_token(&self) -> &'static str {
        self.default
    }

    /// Recognized tokens in declaration order, global keywords last.
    pub fn legal_tokens(&self) -> Vec<&'static str> {
        self.entries.iter().map(|e| e.token).collect()
    }

    pub fn get(&self, token: &str) -> Option<&TokenEntry> {
        self.index.get(token).map(|&slot| &self.entries[slot])
    }

    pub fn is_known(&self, token: &str) -> bool {
        self.index.contains_key(token)
    }

    /// Class for a token; `None` for raw values and value-only tokens.
    pub fn class_of(&self, token: &str) -> Option<String> {
        self.get(token)
            .and_then(|entry| entry.class)
            .map(str::to_string)
    }

    /// Declarations for a token.
    ///
    /// Unknown tokens are treated as raw CSS values. Class-only tokens and the
    /// empty string have no declaration.
    pub fn style_of(&self, token: &str) -> Option<Vec<Declaration>> {
        let value: Cow<'static, str> = match self.get(token) {
            Some(entry) => Cow::Borrowed(entry.value?),
            None if token.trim().is_empty() => return None,
            None => Cow::Owned(token.to_string()),
        };
        Some(vec![Declaration::new(self.property, value)])
    }
}

/// One row of a [`PairTable`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PairEntry {
    pub property: &'static str,
    pub value: &'static str,
    pub class: &'static str,
}

impl PairEntry {
    pub const fn new(property: &'static str, value: &'static str, class: &'static str) -> Self {
        Self {
            property,
            value,
            class,
        }
    }
}

/// Lookup for `(property, value)` payloads spanning a family of properties.
///
/// Every pair renders as an inline declaration; pairs listed in the table
/// also have a class.
#[derive(Debug, Clone)]
pub struct PairTable {
    default: (&'static str, &'static str),
    entries: Vec<PairEntry>,
}

impl PairTable {
    pub fn new(default: (&'static str, &'static str), entries: &[PairEntry]) -> Self {
        Self {
            default,
            entries: entries.to_vec(),
        }
    }

    pub fn default_pair(&self) -> (&'static str, &'static str) {
        self.default
    }

    /// Classes of all listed pairs, in declaration order.
    pub fn legal_tokens(&self) -> Vec<&'static str> {
        self.entries.iter().map(|e| e.class).collect()
    }

    /// Properties covered by the table, first occurrence order.
    pub fn properties(&self) -> Vec<&'static str> {
        let mut seen: Vec<&'static str> = Vec::new();
        for entry in &self.entries {
            if !seen.contains(&entry.property) {
                seen.push(entry.property);
            }
        }
        seen
    }

    pub fn class_of(&self, property: &str, value: &str) -> Option<String> {
        self.entries
            .iter()
            .find(|e| e.property == property && e.value == value)
            .map(|e| e.class.to_string())
    }

    pub fn style_of(&self, property: &str, value: &str) -> Option<Vec<Declaration>> {
        if property.is_empty() || value.trim().is_empty() {
            return None;
        }
        Some(vec![Declaration::new(
            property.to_string(),
            value.to_string(),
        )])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn color() -> TokenTable {
        TokenTable::new(
            "color",
            "inherit",
            &[
                TokenEntry::class_only("primary", "text-primary"),
                TokenEntry::class_only("muted", "text-muted"),
            ],
        )
    }

    #[test]
    fn class_only_token_has_no_style() {
        let table = color();
        assert_eq!(table.class_of("primary").as_deref(), Some("text-primary"));
        assert_eq!(table.style_of("primary"), None);
    }

    #[test]
    fn raw_value_is_style_only() {
        let table = color();
        assert_eq!(table.class_of("#ff0000"), None);
        assert_eq!(
            table.style_of("#ff0000"),
            Some(vec![Declaration::new("color", "#ff0000")])
        );
    }

    #[test]
    fn global_keywords_are_appended() {
        let table = color();
        assert_eq!(
            table.legal_tokens(),
            vec!["primary", "muted", "inherit", "initial", "revert", "revert-layer", "unset"]
        );
        assert_eq!(table.class_of("unset"), None);
        assert_eq!(table.style_of("unset").unwrap()[0].to_string(), "color: unset");
    }

    #[test]
    fn declared_keyword_is_not_duplicated() {
        let table = TokenTable::new(
            "visibility",
            "visible",
            &[TokenEntry::both("inherit", "vis-inherit", "inherit")],
        );
        assert_eq!(table.legal_tokens().len(), GLOBAL_KEYWORDS.len());
        assert_eq!(table.class_of("inherit").as_deref(), Some("vis-inherit"));
    }

    #[test]
    fn later_row_wins() {
        let table = TokenTable::new(
            "display",
            "block",
            &[
                TokenEntry::both("flex", "d-flex", "flex"),
                TokenEntry::style_only("flex", "flex"),
            ],
        );
        assert_eq!(table.class_of("flex"), None);
        assert_eq!(table.legal_tokens()[0], "flex");
    }

    #[test]
    fn empty_raw_value_renders_nothing() {
        assert_eq!(color().style_of(""), None);
        assert_eq!(color().style_of("  "), None);
    }

    #[test]
    fn pair_table_lookup() {
        let table = PairTable::new(
            ("flex-direction", "row"),
            &[
                PairEntry::new("flex-direction", "row", "flex-row"),
                PairEntry::new("justify-content", "center", "justify-content-center"),
            ],
        );
        assert_eq!(
            table.class_of("justify-content", "center").as_deref(),
            Some("justify-content-center")
        );
        assert_eq!(table.class_of("justify-content", "stretch"), None);
        assert_eq!(
            table.style_of("justify-content", "stretch").unwrap()[0].to_string(),
            "justify-content: stretch"
        );
        assert_eq!(table.properties(), vec!["flex-direction", "justify-content"]);
    }
}
