pair_utility! {
    /// Flexbox properties (`flex-row`, `justify-content-between`, ...).
    ///
    /// Every pair renders as an inline declaration as well; classes exist
    /// only for the pairs listed here.
    ///
    /// ```rust
    /// use classcraft::Flex;
    ///
    /// let flex = Flex::new().column().on_phone().row().on_laptop().justify_between();
    /// assert_eq!(flex.to_class(), "flex-column flex-md-row justify-content-between");
    /// ```
    Flex / FlexAdapter / FLEX {
        default: ("flex-direction", "row"),
        pairs: [
            row => ("flex-direction", "row", "flex-row"),
            row_reverse => ("flex-direction", "row-reverse", "flex-row-reverse"),
            column => ("flex-direction", "column", "flex-column"),
            column_reverse => ("flex-direction", "column-reverse", "flex-column-reverse"),
            wrap => ("flex-wrap", "wrap", "flex-wrap"),
            nowrap => ("flex-wrap", "nowrap", "flex-nowrap"),
            wrap_reverse => ("flex-wrap", "wrap-reverse", "flex-wrap-reverse"),
            fill => ("flex", "1 1 auto", "flex-fill"),
            grow_0 => ("flex-grow", "0", "flex-grow-0"),
            grow_1 => ("flex-grow", "1", "flex-grow-1"),
            shrink_0 => ("flex-shrink", "0", "flex-shrink-0"),
            shrink_1 => ("flex-shrink", "1", "flex-shrink-1"),
            justify_start => ("justify-content", "flex-start", "justify-content-start"),
            justify_end => ("justify-content", "flex-end", "justify-content-end"),
            justify_center => ("justify-content", "center", "justify-content-center"),
            justify_between => ("justify-content", "space-between", "justify-content-between"),
            justify_around => ("justify-content", "space-around", "justify-content-around"),
            justify_evenly => ("justify-content", "space-evenly", "justify-content-evenly"),
            align_items_start => ("align-items", "flex-start", "align-items-start"),
            align_items_end => ("align-items", "flex-end", "align-items-end"),
            align_items_center => ("align-items", "center", "align-items-center"),
            align_items_baseline => ("align-items", "baseline", "align-items-baseline"),
            align_items_stretch => ("align-items", "stretch", "align-items-stretch"),
            align_self_start => ("align-self", "flex-start", "align-self-start"),
            align_self_end => ("align-self", "flex-end", "align-self-end"),
            align_self_center => ("align-self", "center", "align-self-center"),
            align_self_baseline => ("align-self", "baseline", "align-self-baseline"),
            align_self_stretch => ("align-self", "stretch", "align-self-stretch"),
            align_content_start => ("align-content", "flex-start", "align-content-start"),
            align_content_end => ("align-content", "flex-end", "align-content-end"),
            align_content_center => ("align-content", "center", "align-content-center"),
            align_content_between => ("align-content", "space-between", "align-content-between"),
            align_content_around => ("align-content", "space-around", "align-content-around"),
            align_content_stretch => ("align-content", "stretch", "align-content-stretch"),
        ],
    }
}

impl FlexAdapter {
    /// Properties this utility knows classes for.
    pub fn properties(&self) -> Vec<&'static str> {
        FLEX.properties()
    }
}
