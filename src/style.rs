//! Presentation variables derived from `layout_config`.
//!
//! Every value read from the document ends up in the page's `<style>` block.
//! Values are HTML-escaped there, except for the properties listed in
//! [`UNESCAPED_CSS_PROPERTIES`], whose CSS functional syntax must reach the
//! browser verbatim.

use crate::resolver::Resolver;
use crate::utils::escape_html;
use crate::value::Value;
use log::debug;
use std::fmt::Write;

pub const DEFAULT_FONT_FAMILY: &str = "sans-serif";
pub const DEFAULT_FONT_SIZE: &str = "16px";
pub const DEFAULT_BACKGROUND: &str = "#FFFFFF";
pub const DEFAULT_TEXT_COLOR: &str = "#111827";
pub const DEFAULT_ACCENT_COLOR: &str = "#000000";
pub const DEFAULT_BUTTON_COLOR: &str = "#F3F4F6";
pub const DEFAULT_BUTTON_TEXT_COLOR: &str = "#111827";
pub const DEFAULT_BORDER_RADIUS: &str = "8px";
pub const DEFAULT_BORDER_WIDTH: &str = "2px";
pub const DEFAULT_SHADOW: &str = "none";
pub const DEFAULT_HOVER_TRANSFORM: &str = "scale(1.02)";

/// CSS properties whose values are emitted without escaping.
///
/// Anything added here lets document content into the stylesheet unmodified.
pub const UNESCAPED_CSS_PROPERTIES: [&str; 3] =
    ["background", "--button-shadow", "--button-hover-transform"];

/// Formats `property: value;`, escaping the value unless the property is
/// whitelisted.
pub fn css_declaration(property: &str, value: &str) -> String {
    if UNESCAPED_CSS_PROPERTIES.contains(&property) {
        format!("{property}: {value};")
    } else {
        format!("{property}: {};", escape_html(value))
    }
}

/// How `colors.background` is painted.
#[derive(Debug, Clone, PartialEq)]
pub enum Background {
    /// A gradient or image expression, emitted as the `background` shorthand.
    Shorthand(String),
    /// A plain color token, emitted as `background-color`.
    Color(String),
}

impl Background {
    pub fn classify(raw: &str) -> Background {
        if raw.contains("gradient") || raw.contains("url(") {
            Background::Shorthand(raw.to_string())
        } else {
            Background::Color(raw.to_string())
        }
    }

    pub fn declaration(&self) -> String {
        match self {
            Background::Shorthand(raw) => css_declaration("background", raw),
            Background::Color(color) => css_declaration("background-color", color),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonStyle {
    #[default]
    Filled,
    Outline,
}

impl ButtonStyle {
    /// Only the exact value `outline` selects the outline branch.
    pub fn from_config(raw: &str) -> ButtonStyle {
        match raw {
            "outline" => ButtonStyle::Outline,
            _ => ButtonStyle::Filled,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ButtonStyle::Filled => "filled",
            ButtonStyle::Outline => "outline",
        }
    }

    /// The `.link-button` rules for this branch. The hover rule is shared.
    pub fn css(self) -> String {
        let base = match self {
            ButtonStyle::Outline => {
                "        .link-button {\n            background-color: transparent;\n            color: var(--button-text-color);\n            border: var(--button-border-width) solid var(--button-bg-color);\n        }\n"
            }
            ButtonStyle::Filled => {
                "        .link-button {\n            background-color: var(--button-bg-color);\n            color: var(--button-text-color);\n            border: none;\n        }\n"
            }
        };
        format!("{base}{HOVER_CSS}")
    }
}

const HOVER_CSS: &str = "        .link-button:hover {\n            background-color: var(--button-hover-bg);\n            transform: var(--button-hover-transform);\n        }\n";

/// Every presentation value the page template consumes, unescaped.
#[derive(Debug, Clone, PartialEq)]
pub struct StyleVars {
    pub font_family: String,
    pub font_url: Option<String>,
    pub font_size: String,
    pub background: Background,
    pub text_color: String,
    pub accent_color: String,
    pub button_color: String,
    pub button_text_color: String,
    pub button_style: ButtonStyle,
    pub border_radius: String,
    pub border_width: String,
    pub shadow: String,
    pub hover_transform: String,
    pub hover_background: String,
}

impl StyleVars {
    /// Reads every leaf under `layout_config`. Absent, `null` and empty
    /// values all take the default, so a blank editor field never reaches the
    /// stylesheet as an empty declaration.
    pub fn derive(document: &Value) -> StyleVars {
        let layout = Resolver::new(document).scope("layout_config");
        let leaf = |path: &str, default: &str| {
            layout.opt_str(path).unwrap_or_else(|| default.to_string())
        };

        let button_color = leaf("colors.button", DEFAULT_BUTTON_COLOR);
        let button_style = ButtonStyle::from_config(&leaf("button.style", "filled"));
        let background = Background::classify(&leaf("colors.background", DEFAULT_BACKGROUND));
        debug!("derived {} buttons, background {background:?}", button_style.as_str());

        StyleVars {
            font_family: leaf("font.family_name", DEFAULT_FONT_FAMILY),
            font_url: layout.opt_str("font.google_font_url"),
            font_size: leaf("font.size", DEFAULT_FONT_SIZE),
            background,
            text_color: leaf("colors.text", DEFAULT_TEXT_COLOR),
            accent_color: leaf("colors.accent", DEFAULT_ACCENT_COLOR),
            button_text_color: leaf("colors.button_text", DEFAULT_BUTTON_TEXT_COLOR),
            button_style,
            border_radius: leaf("button.border_radius", DEFAULT_BORDER_RADIUS),
            border_width: leaf("button.border_width", DEFAULT_BORDER_WIDTH),
            shadow: leaf("button.shadow", DEFAULT_SHADOW),
            hover_transform: leaf("hover_effects.button_transform", DEFAULT_HOVER_TRANSFORM),
            hover_background: leaf("hover_effects.button_background", &button_color),
            button_color,
        }
    }

    /// The `:root` custom property block.
    pub fn root_css(&self) -> String {
        let vars = [
            ("--font-size", self.font_size.clone()),
            ("--text-color", self.text_color.clone()),
            ("--accent-color", self.accent_color.clone()),
            ("--button-bg-color", self.button_color.clone()),
            ("--button-text-color", self.button_text_color.clone()),
            ("--button-border-radius", self.border_radius.clone()),
            ("--button-shadow", self.shadow.clone()),
            ("--button-hover-bg", self.hover_background.clone()),
            ("--button-hover-transform", self.hover_transform.clone()),
            ("--button-border-width", self.border_width.clone()),
        ];
        let mut out = String::from("        :root {\n");
        let _ = writeln!(
            out,
            "            --font-family: '{}', sans-serif;",
            escape_html(&self.font_family)
        );
        for (property, value) in &vars {
            let _ = writeln!(out, "            {}", css_declaration(property, value));
        }
        out.push_str("        }\n");
        out
    }

    pub fn body_background(&self) -> String {
        self.background.declaration()
    }

    pub fn button_css(&self) -> String {
        self.button_style.css()
    }
}
