use classcraft_render::TokenEntry;

token_utility! {
    /// Display type (`d-*` / `display`).
    ///
    /// ```rust
    /// use classcraft::Display;
    ///
    /// let display = Display::new().none().flex().on_laptop();
    /// assert_eq!(display.to_class(), "d-none d-md-flex");
    /// assert_eq!(display.to_style(), "display: none; display: flex");
    /// ```
    Display / DisplayAdapter / DISPLAY {
        property: "display",
        default: "block",
        tokens: [
            none => TokenEntry::both("none", "d-none", "none"),
            inline => TokenEntry::both("inline", "d-inline", "inline"),
            inline_block => TokenEntry::both("inline-block", "d-inline-block", "inline-block"),
            block => TokenEntry::both("block", "d-block", "block"),
            flex => TokenEntry::both("flex", "d-flex", "flex"),
            inline_flex => TokenEntry::both("inline-flex", "d-inline-flex", "inline-flex"),
            grid => TokenEntry::both("grid", "d-grid", "grid"),
            inline_grid => TokenEntry::both("inline-grid", "d-inline-grid", "inline-grid"),
            table => TokenEntry::both("table", "d-table", "table"),
            table_cell => TokenEntry::both("table-cell", "d-table-cell", "table-cell"),
            table_row => TokenEntry::both("table-row", "d-table-row", "table-row"),
        ],
    }
}
