//! Text and background colors.
//!
//! Theme colors exist only as classes: `Color::new().primary()` renders
//! `text-primary` and has no inline equivalent. Raw colors go through
//! [`css`](Color::css) and render only as inline style.

use classcraft_render::TokenEntry;

token_utility! {
    /// Text color (`text-*` / `color`).
    ///
    /// ```rust
    /// use classcraft::Color;
    ///
    /// assert_eq!(Color::new().primary().on_tablet().to_class(), "text-sm-primary");
    /// assert_eq!(Color::new().css("#ff0000").to_style(), "color: #ff0000");
    /// assert_eq!(Color::new().css("#ff0000").to_class(), "");
    /// ```
    Color / ColorAdapter / COLOR {
        property: "color",
        default: "inherit",
        tokens: [
            primary => TokenEntry::class_only("primary", "text-primary"),
            secondary => TokenEntry::class_only("secondary", "text-secondary"),
            success => TokenEntry::class_only("success", "text-success"),
            danger => TokenEntry::class_only("danger", "text-danger"),
            warning => TokenEntry::class_only("warning", "text-warning"),
            info => TokenEntry::class_only("info", "text-info"),
            light => TokenEntry::class_only("light", "text-light"),
            dark => TokenEntry::class_only("dark", "text-dark"),
            body => TokenEntry::class_only("body", "text-body"),
            muted => TokenEntry::class_only("muted", "text-muted"),
            white => TokenEntry::class_only("white", "text-white"),
            black => TokenEntry::class_only("black", "text-black"),
        ],
    }
}

token_utility! {
    /// Background color (`bg-*` / `background-color`).
    BackgroundColor / BackgroundColorAdapter / BACKGROUND_COLOR {
        property: "background-color",
        default: "inherit",
        tokens: [
            primary => TokenEntry::class_only("primary", "bg-primary"),
            secondary => TokenEntry::class_only("secondary", "bg-secondary"),
            success => TokenEntry::class_only("success", "bg-success"),
            danger => TokenEntry::class_only("danger", "bg-danger"),
            warning => TokenEntry::class_only("warning", "bg-warning"),
            info => TokenEntry::class_only("info", "bg-info"),
            light => TokenEntry::class_only("light", "bg-light"),
            dark => TokenEntry::class_only("dark", "bg-dark"),
            body => TokenEntry::class_only("body", "bg-body"),
            white => TokenEntry::class_only("white", "bg-white"),
            black => TokenEntry::class_only("black", "bg-black"),
            transparent => TokenEntry::class_only("transparent", "bg-transparent"),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use classcraft_render::PropertyAdapter;
    use std::borrow::Cow;

    #[test]
    fn theme_tokens_are_class_only() {
        for token in ColorAdapter.legal_tokens() {
            let payload = Cow::Borrowed(token);
            let has_class = ColorAdapter.class_of(&payload).is_some();
            let has_style = ColorAdapter.style_of(&payload).is_some();
            assert!(has_class != has_style, "{token} must render in exactly one mode");
        }
    }

    #[test]
    fn chained_colors_with_breakpoints() {
        let color = Color::new().primary().on_tablet().secondary().on_desktop();
        assert_eq!(color.len(), 2);
        assert_eq!(color.to_class(), "text-sm-primary text-lg-secondary");
        assert_eq!(color.to_style(), "");
    }

    #[test]
    fn keywords_render_as_style() {
        let color = Color::new().inherit().revert_layer();
        assert_eq!(color.to_class(), "");
        assert_eq!(color.to_style(), "color: inherit; color: revert-layer");
    }

    #[test]
    fn phone_has_no_infix() {
        assert_eq!(Color::new().danger().on_phone().to_class(), "text-danger");
    }

    #[test]
    fn background_mixes_modes() {
        let bg = BackgroundColor::new().dark().css("rgb(1, 2, 3)").on_laptop();
        assert_eq!(bg.to_class(), "bg-dark");
        assert_eq!(bg.to_style(), "background-color: rgb(1, 2, 3)");
        assert_eq!(bg.to_string(), "bg-dark");
    }
}
