//! # Style Resolution
//!
//! Conversions between CSS declaration text and [`StyleMap`]s, and the
//! breakpoint cascade used to compute the effective styles of an element.
//!
//! None of these functions fail: input that cannot be understood is dropped
//! and the rest is kept.

use crate::styles::{Breakpoint, ResponsiveStyles, StyleMap, StyleValue};

/// Parse `"color: red; font-size: 16px"` into `{ color: red, fontSize: 16px }`.
///
/// Rules without a `:` and rules with an empty property or value are
/// skipped. Values are kept verbatim, so `url(http://x)` survives.
pub fn parse_css_string(css: &str) -> StyleMap {
    let mut styles = StyleMap::new();

    for rule in css.split(';') {
        let Some((property, value)) = rule.split_once(':') else {
            continue;
        };
        let (property, value) = (property.trim(), value.trim());
        if property.is_empty() || value.is_empty() {
            continue;
        }
        styles.insert(kebab_to_camel(property), StyleValue::from(value));
    }

    styles
}

/// Inverse of [`parse_css_string`]: `"color: red; font-size: 16px;"`
pub fn style_map_to_css_string(styles: &StyleMap) -> String {
    styles
        .iter()
        .map(|(property, value)| format!("{}: {};", camel_to_kebab(property), value))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Compact form for an HTML `style` attribute: `color:red;font-size:16px`.
/// Empty values are left out.
pub fn to_inline_style(styles: &StyleMap) -> String {
    styles
        .iter()
        .filter(|(_, value)| !value.is_empty())
        .map(|(property, value)| format!("{}:{}", camel_to_kebab(property), value))
        .collect::<Vec<_>>()
        .join(";")
}

/// Effective styles at `breakpoint`.
///
/// Desktop is the base. Tablet and mobile layer the tablet overrides on
/// top, and mobile then layers its own overrides. Each layer replaces
/// individual properties only.
pub fn computed_styles(styles: &ResponsiveStyles, breakpoint: Breakpoint) -> StyleMap {
    let mut computed = styles.desktop.clone();

    if matches!(breakpoint, Breakpoint::Tablet | Breakpoint::Mobile) {
        if let Some(tablet) = &styles.tablet {
            computed.merge(tablet);
        }
    }
    if breakpoint == Breakpoint::Mobile {
        if let Some(mobile) = &styles.mobile {
            computed.merge(mobile);
        }
    }

    computed
}

/// `font-size` → `fontSize`, `-webkit-transition` → `WebkitTransition`
pub fn kebab_to_camel(property: &str) -> String {
    let mut out = String::with_capacity(property.len());
    let mut chars = property.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '-' {
            if let Some(next) = chars.peek().copied().filter(|n| n.is_ascii_lowercase()) {
                out.push(next.to_ascii_uppercase());
                chars.next();
                continue;
            }
        }
        out.push(c);
    }

    out
}

/// `fontSize` → `font-size`, `WebkitTransition` → `-webkit-transition`
pub fn camel_to_kebab(property: &str) -> String {
    let mut out = String::with_capacity(property.len() + 4);
    for c in property.chars() {
        if c.is_ascii_uppercase() {
            out.push('-');
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}
