use classcraft_render::TokenEntry;

token_utility! {
    /// Visibility (`visible`, `invisible` / `visibility`).
    ///
    /// The classes have no prefix, so a breakpoint token is prepended:
    /// `invisible` on a laptop renders `md-invisible`.
    Visibility / VisibilityAdapter / VISIBILITY {
        property: "visibility",
        default: "visible",
        tokens: [
            visible => TokenEntry::both("visible", "visible", "visible"),
            invisible => TokenEntry::both("invisible", "invisible", "hidden"),
            collapse => TokenEntry::style_only("collapse", "collapse"),
        ],
    }
}
