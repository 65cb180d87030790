//! Font and text utilities.

use classcraft_render::TokenEntry;

token_utility! {
    /// Font weight (`fw-*` / `font-weight`).
    FontWeight / FontWeightAdapter / FONT_WEIGHT {
        property: "font-weight",
        default: "normal",
        tokens: [
            bold => TokenEntry::both("bold", "fw-bold", "700"),
            bolder => TokenEntry::both("bolder", "fw-bolder", "bolder"),
            semibold => TokenEntry::both("semibold", "fw-semibold", "600"),
            medium => TokenEntry::both("medium", "fw-medium", "500"),
            normal => TokenEntry::both("normal", "fw-normal", "400"),
            light => TokenEntry::both("light", "fw-light", "300"),
            lighter => TokenEntry::both("lighter", "fw-lighter", "lighter"),
        ],
    }
}

token_utility! {
    /// Font style (`fst-*` / `font-style`).
    FontStyle / FontStyleAdapter / FONT_STYLE {
        property: "font-style",
        default: "normal",
        tokens: [
            italic => TokenEntry::both("italic", "fst-italic", "italic"),
            normal => TokenEntry::both("normal", "fst-normal", "normal"),
        ],
    }
}

token_utility! {
    /// Text alignment (`text-start` / `text-align`).
    TextAlignment / TextAlignmentAdapter / TEXT_ALIGNMENT {
        property: "text-align",
        default: "start",
        tokens: [
            start => TokenEntry::both("start", "text-start", "start"),
            center => TokenEntry::both("center", "text-center", "center"),
            end => TokenEntry::both("end", "text-end", "end"),
            justify => TokenEntry::style_only("justify", "justify"),
        ],
    }
}

token_utility! {
    /// Text transform (`text-uppercase` / `text-transform`).
    TextTransform / TextTransformAdapter / TEXT_TRANSFORM {
        property: "text-transform",
        default: "lowercase",
        tokens: [
            lowercase => TokenEntry::both("lowercase", "text-lowercase", "lowercase"),
            uppercase => TokenEntry::both("uppercase", "text-uppercase", "uppercase"),
            capitalize => TokenEntry::both("capitalize", "text-capitalize", "capitalize"),
            none => TokenEntry::style_only("none", "none"),
        ],
    }
}

token_utility! {
    /// Text decoration (`text-decoration-*` / `text-decoration-line`).
    TextDecoration / TextDecorationAdapter / TEXT_DECORATION {
        property: "text-decoration-line",
        default: "none",
        tokens: [
            none => TokenEntry::both("none", "text-decoration-none", "none"),
            underline => TokenEntry::both("underline", "text-decoration-underline", "underline"),
            line_through => TokenEntry::both("line-through", "text-decoration-line-through", "line-through"),
            overline => TokenEntry::style_only("overline", "overline"),
        ],
    }
}

token_utility! {
    /// Text wrapping (`text-wrap`, `text-nowrap` / `white-space`).
    TextWrap / TextWrapAdapter / TEXT_WRAP {
        property: "white-space",
        default: "wrap",
        tokens: [
            wrap => TokenEntry::both("wrap", "text-wrap", "normal"),
            nowrap => TokenEntry::both("nowrap", "text-nowrap", "nowrap"),
        ],
    }
}

token_utility! {
    /// Vertical alignment (`align-*` / `vertical-align`).
    VerticalAlign / VerticalAlignAdapter / VERTICAL_ALIGN {
        property: "vertical-align",
        default: "baseline",
        tokens: [
            baseline => TokenEntry::both("baseline", "align-baseline", "baseline"),
            top => TokenEntry::both("top", "align-top", "top"),
            middle => TokenEntry::both("middle", "align-middle", "middle"),
            bottom => TokenEntry::both("bottom", "align-bottom", "bottom"),
            text_top => TokenEntry::both("text-top", "align-text-top", "text-top"),
            text_bottom => TokenEntry::both("text-bottom", "align-text-bottom", "text-bottom"),
        ],
    }
}

token_utility! {
    /// Line height (`lh-*` / `line-height`).
    LineHeight / LineHeightAdapter / LINE_HEIGHT {
        property: "line-height",
        default: "base",
        tokens: [
            one => TokenEntry::both("1", "lh-1", "1"),
            sm => TokenEntry::both("sm", "lh-sm", "1.25"),
            base => TokenEntry::both("base", "lh-base", "1.5"),
            lg => TokenEntry::both("lg", "lh-lg", "2"),
        ],
    }
}
