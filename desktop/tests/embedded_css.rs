#![cfg(test)]
//! The desktop shell inlines the shared theme and the navbar stylesheet.
//! Both read colours and radii from custom properties declared once in the
//! theme's `:root` block; an undeclared `var(--x)` silently falls back to
//! the browser default, so every one used must be declared.

const THEME_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

const NAVBAR_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/styling/navbar.css"
));

/// Names referenced through `var(--name` in `css`.
fn used_properties(css: &str) -> Vec<&str> {
    css.match_indices("var(--")
        .map(|(at, _)| {
            let name = &css[at + 4..];
            let end = name
                .find(|c: char| !(c.is_ascii_alphanumeric() || c == '-'))
                .unwrap_or(name.len());
            &name[..end]
        })
        .collect()
}

fn declares(css: &str, name: &str) -> bool {
    css.contains(&format!("{name}:"))
}

#[test]
fn property_scan_reads_names() {
    let css = ".a { color: var(--color-main); border: 1px solid var(--color-border, #ccc); }";
    assert_eq!(used_properties(css), ["--color-main", "--color-border"]);
}

#[test]
fn every_used_custom_property_is_declared() {
    let mut undeclared: Vec<&str> = used_properties(THEME_CSS)
        .into_iter()
        .chain(used_properties(NAVBAR_CSS))
        .filter(|name| !declares(THEME_CSS, name))
        .collect();
    undeclared.sort_unstable();
    undeclared.dedup();
    assert!(
        undeclared.is_empty(),
        "custom properties used but never declared in the theme: {}",
        undeclared.join(", ")
    );
}

#[test]
fn brand_colour_drives_primary_buttons() {
    assert!(declares(THEME_CSS, "--color-main"));
    assert!(declares(THEME_CSS, "--color-on-main"));
    let primary = THEME_CSS
        .split(".button--primary")
        .nth(1)
        .and_then(|rest| rest.split('}').next())
        .unwrap_or_default();
    assert!(
        primary.contains("var(--color-main)"),
        "primary buttons no longer use the brand colour"
    );
}
