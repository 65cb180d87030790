//! End-to-end rendering of chained utilities.

use classcraft::{
    join_classes, join_styles, Border, Breakpoint, BreakpointTokens, Color, CssBuilder, Display,
    Flex, Interaction, Margin, Overflow, Padding, Rule, Side, Spacing, Visibility,
};
use insta::assert_snapshot;

#[test]
fn test_color_on_tablet() {
    let class = Color::new().primary().on_tablet().to_class();
    assert!(class.contains("sm-primary"));
    assert_snapshot!(class, @"text-sm-primary");
}

#[test]
fn test_raw_color() {
    let color = Color::new().css("#ff0000");
    assert_eq!(color.to_style(), "color: #ff0000");
    assert_eq!(color.to_class(), "");
}

#[test]
fn test_overflow_hidden_x() {
    let overflow = Overflow::new().hidden().x();
    assert_eq!(overflow.to_class(), "overflow-x-hidden");
    assert_eq!(overflow.to_style(), "overflow-x: hidden");
}

#[test]
fn test_margin_side_coalescing() {
    let margin = Margin::new().s3().from_top().from_left();
    let payloads: Vec<Spacing> = margin.rules().iter().map(|r| r.payload.clone()).collect();
    assert_eq!(
        payloads,
        vec![Spacing::new("3", Side::Top), Spacing::new("3", Side::Left)]
    );

    let unsized_margin = Margin::new().from_top().from_left();
    assert_eq!(unsized_margin.len(), 2);
    assert!(unsized_margin
        .rules()
        .iter()
        .all(|r| r.payload.size == "0"));
}

#[test]
fn test_independent_rules_per_value() {
    let color = Color::new().primary().on_tablet().secondary().on_desktop();
    assert_eq!(color.len(), 2);
    assert_snapshot!(color.to_class(), @"text-sm-primary text-lg-secondary");
}

#[test]
fn test_empty_builders_render_empty() {
    let builders: Vec<Box<dyn CssBuilder>> = vec![
        Box::new(Color::new()),
        Box::new(Margin::new()),
        Box::new(Overflow::new()),
        Box::new(Interaction::new()),
        Box::new(Flex::new()),
    ];
    for builder in &builders {
        assert_eq!(builder.to_class(), "");
        assert_eq!(builder.to_style(), "");
    }
}

#[test]
fn test_card_layout() {
    let display = Display::new().none().flex().on_laptop();
    let flex = Flex::new().column().row().on_laptop().justify_between();
    let padding = Padding::new().s2().s4().on_desktop();
    let border = Border::new().s1().from_bottom();

    assert_snapshot!(
        join_classes(&[&display, &flex, &padding, &border]),
        @"d-none d-md-flex flex-column flex-md-row justify-content-between p-2 p-lg-4 bb-1"
    );
}

#[test]
fn test_inline_style_mix() {
    let color = Color::new().css("rebeccapurple");
    let margin = Margin::new().css("7px").on_y();
    let visibility = Visibility::new().invisible();

    assert_snapshot!(
        join_styles(&[&color, &margin, &visibility]),
        @"color: rebeccapurple; margin-top: 7px; margin-bottom: 7px; visibility: hidden"
    );
}

#[test]
fn test_from_rules_copies_caller_list() {
    let rules = vec![
        Rule::at(Spacing::new("2", Side::Horizontal), Breakpoint::Tablet),
        Rule::new(Spacing::new("auto", Side::Top)),
    ];
    let margin = Margin::from_rules(rules.clone());
    assert_eq!(margin.to_class(), "mx-sm-2 mt-auto");
    assert_eq!(margin.into_rules().into_vec(), rules);
}

#[test]
fn test_explicit_token_table() {
    let tokens = BreakpointTokens::default()
        .with(Breakpoint::Phone, "xs")
        .with(Breakpoint::Ultrawide, "2xl");
    let margin = Margin::new().s1().on_phone().s2().on_ultrawide();
    assert_eq!(margin.to_class_with(&tokens), "m-xs-1 m-2xl-2");
}

#[test]
fn test_rules_serialize() {
    let margin = Margin::new().s3().on_laptop().from_top();
    let json = serde_json::to_string(margin.rules()).unwrap();
    assert_snapshot!(json, @r#"[{"payload":{"size":"3","side":"top"},"breakpoint":"laptop"}]"#);
}
