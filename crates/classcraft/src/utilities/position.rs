//! Positioning scheme and edge offsets.

use classcraft_render::TokenEntry;

token_utility! {
    /// Positioning scheme (`position-*` / `position`).
    Position / PositionAdapter / POSITION {
        property: "position",
        default: "static",
        tokens: [
            r#static => TokenEntry::both("static", "position-static", "static"),
            relative => TokenEntry::both("relative", "position-relative", "relative"),
            absolute => TokenEntry::both("absolute", "position-absolute", "absolute"),
            fixed => TokenEntry::both("fixed", "position-fixed", "fixed"),
            sticky => TokenEntry::both("sticky", "position-sticky", "sticky"),
        ],
    }
}

pair_utility! {
    /// Edge offsets (`top-0`, `start-50`, ...). `start` and `end` map to
    /// `left` and `right`.
    ///
    /// ```rust
    /// use classcraft::PositionOffset;
    ///
    /// let offset = PositionOffset::new().top_0().start_50().on_laptop();
    /// assert_eq!(offset.to_class(), "top-0 start-md-50");
    /// assert_eq!(offset.to_style(), "top: 0; left: 50%");
    /// ```
    PositionOffset / PositionOffsetAdapter / POSITION_OFFSET {
        default: ("top", "0"),
        pairs: [
            top_0 => ("top", "0", "top-0"),
            top_50 => ("top", "50%", "top-50"),
            top_100 => ("top", "100%", "top-100"),
            bottom_0 => ("bottom", "0", "bottom-0"),
            bottom_50 => ("bottom", "50%", "bottom-50"),
            bottom_100 => ("bottom", "100%", "bottom-100"),
            start_0 => ("left", "0", "start-0"),
            start_50 => ("left", "50%", "start-50"),
            start_100 => ("left", "100%", "start-100"),
            end_0 => ("right", "0", "end-0"),
            end_50 => ("right", "50%", "end-50"),
            end_100 => ("right", "100%", "end-100"),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn position_renders_both_modes() {
        let position = Position::new().r#static().sticky().on_desktop();
        assert_eq!(position.to_class(), "position-static position-lg-sticky");
        assert_eq!(position.to_style(), "position: static; position: sticky");
    }

    #[test]
    fn unlisted_offset_is_style_only() {
        let offset = PositionOffset::new().css("top", "12px");
        assert_eq!(offset.to_class(), "");
        assert_eq!(offset.to_style(), "top: 12px");
    }

    #[test]
    fn offset_default_on_empty() {
        assert_eq!(PositionOffset::new().on_tablet().to_class(), "top-sm-0");
    }
}
