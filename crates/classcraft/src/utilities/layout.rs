//! Sizing, stacking and box utilities.

use classcraft_render::TokenEntry;

token_utility! {
    /// Float (`float-*` / `float`).
    Float / FloatAdapter / FLOAT {
        property: "float",
        default: "none",
        tokens: [
            start => TokenEntry::both("start", "float-start", "left"),
            end => TokenEntry::both("end", "float-end", "right"),
            none => TokenEntry::both("none", "float-none", "none"),
            inline_start => TokenEntry::style_only("inline-start", "inline-start"),
            inline_end => TokenEntry::style_only("inline-end", "inline-end"),
        ],
    }
}

token_utility! {
    /// Width relative to the parent (`w-*` / `width`).
    Width / WidthAdapter / WIDTH {
        property: "width",
        default: "auto",
        tokens: [
            quarter => TokenEntry::both("25", "w-25", "25%"),
            half => TokenEntry::both("50", "w-50", "50%"),
            three_quarters => TokenEntry::both("75", "w-75", "75%"),
            full => TokenEntry::both("100", "w-100", "100%"),
            auto => TokenEntry::both("auto", "w-auto", "auto"),
        ],
    }
}

token_utility! {
    /// Height relative to the parent (`h-*` / `height`).
    Height / HeightAdapter / HEIGHT {
        property: "height",
        default: "auto",
        tokens: [
            quarter => TokenEntry::both("25", "h-25", "25%"),
            half => TokenEntry::both("50", "h-50", "50%"),
            three_quarters => TokenEntry::both("75", "h-75", "75%"),
            full => TokenEntry::both("100", "h-100", "100%"),
            auto => TokenEntry::both("auto", "h-auto", "auto"),
        ],
    }
}

token_utility! {
    /// Gap between grid and flex children (`gap-*` / `gap`).
    Gap / GapAdapter / GAP {
        property: "gap",
        default: "0",
        tokens: [
            s0 => TokenEntry::both("0", "gap-0", "0"),
            s1 => TokenEntry::both("1", "gap-1", "0.25rem"),
            s2 => TokenEntry::both("2", "gap-2", "0.5rem"),
            s3 => TokenEntry::both("3", "gap-3", "1rem"),
            s4 => TokenEntry::both("4", "gap-4", "1.5rem"),
            s5 => TokenEntry::both("5", "gap-5", "3rem"),
        ],
    }
}

token_utility! {
    /// Stacking order (`z-*` / `z-index`).
    ZIndex / ZIndexAdapter / Z_INDEX {
        property: "z-index",
        default: "0",
        tokens: [
            n1 => TokenEntry::both("n1", "z-n1", "-1"),
            z0 => TokenEntry::both("0", "z-0", "0"),
            z1 => TokenEntry::both("1", "z-1", "1"),
            z2 => TokenEntry::both("2", "z-2", "2"),
            z3 => TokenEntry::both("3", "z-3", "3"),
        ],
    }
}

token_utility! {
    /// Box shadow (`shadow-*` / `box-shadow`).
    BoxShadow / BoxShadowAdapter / BOX_SHADOW {
        property: "box-shadow",
        default: "base",
        tokens: [
            none => TokenEntry::both("none", "shadow-none", "none"),
            sm => TokenEntry::both("sm", "shadow-sm", "0 .125rem .25rem rgba(0, 0, 0, .075)"),
            base => TokenEntry::both("base", "shadow", "0 .5rem 1rem rgba(0, 0, 0, .15)"),
            lg => TokenEntry::both("lg", "shadow-lg", "0 1rem 3rem rgba(0, 0, 0, .175)"),
        ],
    }
}
