use breeze_core::{
    to_prop_value, to_prop_value_json, to_theme_value_if_needed, Breakpoint, Responsive,
    ResponsiveMap, StyleResolver, Theme,
};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

const THEME_JSON: &str = r##"{
    "space": ["0px", "8px", "16px", "32px", "64px"],
    "colors": {
        "primary": "#3f51b5",
        "text": "#000000",
        "border": "#cccccc"
    },
    "fontSizes": ["12px", "14px", "16px", "20px", "24px"],
    "letterSpacings": ["0.06em", "0.07em", "0.08em"],
    "lineHeights": ["0.17px", "0.19px", "0.22px"]
}"##;

fn theme() -> Theme {
    Theme::from_json(THEME_JSON).expect("Failed to load theme")
}

#[test]
fn test_end_to_end_component_styles() {
    let theme = theme();

    let margin: Responsive<u32> = ResponsiveMap::new()
        .with(Breakpoint::Base, 1u32)
        .with(Breakpoint::Md, 2u32)
        .into();
    let color: Responsive<String> = "primary".into();
    let font_size: Responsive<String> = ResponsiveMap::new()
        .with(Breakpoint::Base, "1")
        .with(Breakpoint::Lg, "18px")
        .into();

    let css: Vec<String> = [
        to_prop_value("margin", Some(&margin), Some(&theme)),
        to_prop_value("color", Some(&color), Some(&theme)),
        to_prop_value("font-size", Some(&font_size), Some(&theme)),
        to_prop_value::<String>("line-height", None, Some(&theme)),
    ]
    .into_iter()
    .flatten()
    .collect();

    assert_eq!(
        css,
        vec![
            "margin: 8px;\n@media screen and (min-width: 768px) {margin: 16px;}".to_string(),
            "color: #3f51b5;".to_string(),
            "font-size: 14px;\n@media screen and (min-width: 1024px) {font-size: 18px;}"
                .to_string(),
        ]
    );
}

#[test]
fn test_every_category_resolves() {
    let theme = theme();
    assert_eq!(to_theme_value_if_needed("padding-left", &4, Some(&theme)), "64px");
    assert_eq!(to_theme_value_if_needed("background-color", &"border", Some(&theme)), "#cccccc");
    assert_eq!(to_theme_value_if_needed("font-size", &0, Some(&theme)), "12px");
    assert_eq!(to_theme_value_if_needed("letter-spacing", &2, Some(&theme)), "0.08em");
    assert_eq!(to_theme_value_if_needed("line-height", &1, Some(&theme)), "0.19px");
    assert_eq!(to_theme_value_if_needed("width", &1, Some(&theme)), "1");
}

#[test]
fn test_json_props_match_typed_props() {
    let theme = theme();
    let typed: Responsive<String> = ResponsiveMap::new()
        .with(Breakpoint::Base, "text")
        .with(Breakpoint::Sm, "primary")
        .into();

    assert_eq!(
        to_prop_value_json(
            "color",
            &serde_json::json!({ "sm": "primary", "base": "text" }),
            Some(&theme)
        ),
        to_prop_value("color", Some(&typed), Some(&theme))
    );
}

#[test]
fn test_resolver_from_config() {
    let config = format!(
        r#"{{ "theme": {}, "breakpoints": {{ "lg": "1200px" }}, "properties": {{ "gap": "space" }} }}"#,
        THEME_JSON
    );
    let resolver = StyleResolver::from_json(&config).expect("Failed to load config");

    let gap: Responsive<u32> = ResponsiveMap::new()
        .with(Breakpoint::Lg, 3u32)
        .with(Breakpoint::Base, 1u32)
        .into();

    assert_eq!(
        resolver.resolve("gap", Some(&gap)).unwrap(),
        "gap: 8px;\n@media screen and (min-width: 1200px) {gap: 32px;}"
    );
}

fn literal() -> impl Strategy<Value = String> {
    "[a-z0-9#.%-]{1,12}"
}

fn breakpoint_subset() -> impl Strategy<Value = Vec<(Breakpoint, String)>> {
    proptest::collection::vec(
        (proptest::sample::select(Breakpoint::ALL.to_vec()), literal()),
        1..8,
    )
}

proptest! {
    #[test]
    fn prop_scalar_without_theme(property in "[a-z-]{1,16}", value in literal()) {
        let prop: Responsive<String> = value.clone().into();
        prop_assert_eq!(
            to_prop_value(&property, Some(&prop), None),
            Some(format!("{}: {};", property, value))
        );
    }

    #[test]
    fn prop_base_only_equals_scalar(property in "[a-z-]{1,16}", value in literal()) {
        let scalar: Responsive<String> = value.clone().into();
        let base_only: Responsive<String> = ResponsiveMap::new().with(Breakpoint::Base, value).into();
        prop_assert_eq!(
            to_prop_value(&property, Some(&base_only), None),
            to_prop_value(&property, Some(&scalar), None)
        );
    }

    #[test]
    fn prop_absent_is_none(property in "[a-z-]{1,16}") {
        let theme = theme();
        prop_assert_eq!(to_prop_value::<String>(&property, None, Some(&theme)), None);
    }

    #[test]
    fn prop_fragments_in_ascending_order(entries in breakpoint_subset()) {
        let mut map = ResponsiveMap::new();
        for (bp, value) in &entries {
            map.set(*bp, value.clone());
        }
        let prop: Responsive<String> = map.into();
        let css = to_prop_value("margin", Some(&prop), None).unwrap();

        let thresholds: Vec<u32> = css
            .lines()
            .map(|line| match line.split_once("min-width: ") {
                Some((_, rest)) => rest
                    .chars()
                    .take_while(|c| c.is_ascii_digit())
                    .collect::<String>()
                    .parse()
                    .unwrap(),
                None => 0,
            })
            .collect();

        let mut sorted = thresholds.clone();
        sorted.sort();
        sorted.dedup();
        prop_assert_eq!(thresholds, sorted);
    }

    #[test]
    fn prop_literal_resolution_is_idempotent(value in "#[0-9a-f]{6}") {
        let theme = theme();
        let once = to_theme_value_if_needed("color", &value, Some(&theme));
        let twice = to_theme_value_if_needed("color", &once, Some(&theme));
        prop_assert_eq!(&once, &value);
        prop_assert_eq!(once, twice);
    }
}
