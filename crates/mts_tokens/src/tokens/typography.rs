//! Typography tokens for theming

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::overlay::Overlay;

/// Ordered font stack, most preferred family first
///
/// Serializes as the CSS `font-family` string used by the token source files
/// (`"Inter, system-ui, sans-serif"`). Deserializing also accepts a list of
/// family names. Overrides replace the whole stack.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "FontStackRepr", into = "String")]
pub struct FontStack(Vec<String>);

#[derive(Deserialize)]
#[serde(untagged)]
enum FontStackRepr {
    Css(String),
    List(Vec<String>),
}

impl From<FontStackRepr> for FontStack {
    fn from(repr: FontStackRepr) -> Self {
        match repr {
            FontStackRepr::Css(css) => Self::from_css(&css),
            FontStackRepr::List(families) => Self::new(families),
        }
    }
}

impl From<FontStack> for String {
    fn from(stack: FontStack) -> Self {
        stack.to_css()
    }
}

impl FontStack {
    pub fn new<I, S>(families: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(families.into_iter().map(Into::into).collect())
    }

    /// Split a CSS `font-family` value on commas
    pub fn from_css(css: &str) -> Self {
        Self::new(
            css.split(',')
                .map(|family| family.trim().trim_matches(|c| c == '"' || c == '\''))
                .filter(|family| !family.is_empty()),
        )
    }

    pub fn families(&self) -> &[String] {
        &self.0
    }

    /// The stack joined the way CSS `font-family` expects it
    pub fn to_css(&self) -> String {
        self.0.join(", ")
    }
}

impl fmt::Display for FontStack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_css())
    }
}

impl Overlay for FontStack {
    type Patch = FontStack;

    fn overlay(&mut self, patch: &FontStack) {
        self.clone_from(patch);
    }
}

overlay_struct! {
    /// Font stacks
    pub struct FontFamily / PartialFontFamily {
        pub sans: FontStack,
    }
}

overlay_struct! {
    /// Font sizes in px
    pub struct FontSize / PartialFontSize {
        #[serde(rename = "xs")]
        pub text_xs: f32,
        #[serde(rename = "sm")]
        pub text_sm: f32,
        #[serde(rename = "base")]
        pub text_base: f32,
        #[serde(rename = "lg")]
        pub text_lg: f32,
        #[serde(rename = "xl")]
        pub text_xl: f32,
        #[serde(rename = "2xl")]
        pub text_2xl: f32,
        #[serde(rename = "3xl")]
        pub text_3xl: f32,
        #[serde(rename = "4xl")]
        pub text_4xl: f32,
    }
}

overlay_struct! {
    /// Font weights as CSS numeric strings ("400", "700", ...)
    pub struct FontWeight / PartialFontWeight {
        pub normal: String,
        pub medium: String,
        pub semibold: String,
        pub bold: String,
    }
}

overlay_struct! {
    /// Complete set of typography tokens
    pub struct Typography / PartialTypography {
        #[serde(rename = "fontFamily")]
        pub font_family: FontFamily,
        #[serde(rename = "fontSize")]
        pub font_size: FontSize,
        #[serde(rename = "fontWeight")]
        pub font_weight: FontWeight,
    }
}

impl Default for Typography {
    fn default() -> Self {
        Self {
            font_family: FontFamily {
                sans: FontStack::from_css(
                    "Inter, system-ui, -apple-system, BlinkMacSystemFont, Segoe UI, Roboto, sans-serif",
                ),
            },
            font_size: FontSize {
                text_xs: 12.0,
                text_sm: 14.0,
                text_base: 16.0,
                text_lg: 18.0,
                text_xl: 20.0,
                text_2xl: 24.0,
                text_3xl: 30.0,
                text_4xl: 36.0,
            },
            font_weight: FontWeight {
                normal: "400".into(),
                medium: "500".into(),
                semibold: "600".into(),
                bold: "700".into(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_font_stack_accepts_css_string_and_list() {
        let css: FontStack = serde_json::from_str(r#""Inter, 'Segoe UI', sans-serif""#).unwrap();
        let list: FontStack = serde_json::from_str(r#"["Inter", "Segoe UI", "sans-serif"]"#).unwrap();
        assert_eq!(css, list);
        assert_eq!(css.families().len(), 3);
        assert_eq!(css.families()[1], "Segoe UI");
    }

    #[test]
    fn test_font_stack_serializes_as_css() {
        let stack = FontStack::new(["Inter", "sans-serif"]);
        assert_eq!(serde_json::to_string(&stack).unwrap(), r#""Inter, sans-serif""#);
        assert_eq!(stack.to_string(), "Inter, sans-serif");
    }

    #[test]
    fn test_default_stack_matches_token_source() {
        let typography = Typography::default();
        assert_eq!(
            typography.font_family.sans.to_css(),
            "Inter, system-ui, -apple-system, BlinkMacSystemFont, Segoe UI, Roboto, sans-serif"
        );
        assert_eq!(typography.font_family.sans.families()[0], "Inter");
    }
}
