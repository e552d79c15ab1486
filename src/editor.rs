//! The profile editor form.
//!
//! The form posts every document field back under the names
//! [`crate::form::Submission::to_document`] expects, so a load/save cycle
//! keeps every field the page renders.

use crate::icons::Platform;
use crate::resolver::Resolver;
use crate::utils::{capitalize, escape_html};
use crate::value::Value;
use std::fmt::Write;

pub const INVALID_EDIT_TARGET: &str = "Error: Invalid file specified for editing.";
pub const INVALID_SAVE_TARGET: &str = "Error: Invalid file specified for saving.";
pub const WRITE_FAILED: &str = "Error: Could not write to file. Check file permissions.";

const COLOR_FIELDS: [(&str, &str); 5] = [
    ("background", "Background"),
    ("text", "Text Color"),
    ("accent", "Accent Color"),
    ("button", "Button Color"),
    ("button_text", "Button Text Color"),
];

/// The inline message shown above the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Banner {
    Saved { file: String },
    Error(String),
}

impl Banner {
    pub fn is_error(&self) -> bool {
        matches!(self, Banner::Error(_))
    }

    pub fn to_html(&self) -> String {
        match self {
            Banner::Saved { file } => format!(
                "<div class=\"message success\">Successfully saved changes to <strong>{}</strong>!</div>",
                escape_html(file)
            ),
            Banner::Error(message) => format!(
                "<div class=\"message error\">{}</div>",
                escape_html(message)
            ),
        }
    }
}

/// Everything the editor shows for one request.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct EditorPage {
    /// Documents offered in the file selector.
    pub files: Vec<String>,
    /// The document being edited, if one was selected and loaded.
    pub selected: Option<String>,
    pub document: Option<Value>,
    pub banner: Option<Banner>,
}

impl EditorPage {
    pub fn to_html(&self) -> String {
        let banner = self.banner.as_ref().map(Banner::to_html).unwrap_or_default();
        let form = match (&self.selected, &self.document) {
            (Some(file), Some(document)) => editor_form(file, document),
            _ => String::new(),
        };
        let (main_count, social_count) = match &self.document {
            Some(document) => {
                let doc = Resolver::new(document);
                (doc.seq("main_links").len(), doc.seq("social_media_links").len())
            }
            None => (0, 0),
        };
        let platform_options: String = Platform::ALL
            .iter()
            .map(|p| format!("<option value=\"{}\">{}</option>", p.id(), capitalize(p.id())))
            .collect();

        format!(
            r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Profile Page Editor</title>
    <style>{EDITOR_CSS}</style>
</head>
<body>
    <div class="container">
        <h1>Profile Page Editor</h1>
        {banner}
{selector}{form}    </div>
<script>
    let mainLinkIndex = {main_count};
    let socialLinkIndex = {social_count};
    const platformOptions = `{platform_options}`;

    function addMainLink() {{
        const i = mainLinkIndex++;
        document.getElementById('main-links-container').insertAdjacentHTML('beforeend', `
            <div class="link-item">
                <div class="form-group full-width"><label>Label</label><input type="text" name="main_links[${{i}}][label]" placeholder="My New Link"></div>
                <div class="form-group"><label>URL</label><input type="url" name="main_links[${{i}}][url]" placeholder="https://example.com"></div>
                <div class="form-group"><label>Icon</label><input type="text" name="main_links[${{i}}][icon]"></div>
                <button type="button" class="btn-danger" onclick="this.parentElement.remove()">Remove</button>
            </div>`);
    }}

    function addSocialLink() {{
        const i = socialLinkIndex++;
        document.getElementById('social-links-container').insertAdjacentHTML('beforeend', `
            <div class="social-item">
                <div class="form-group"><label>Platform</label><select name="social_media_links[${{i}}][name]">${{platformOptions}}</select></div>
                <div class="form-group"><label>URL</label><input type="url" name="social_media_links[${{i}}][url]" placeholder="https://example.com/username"></div>
                <button type="button" class="btn-danger" onclick="this.parentElement.remove()">Remove</button>
            </div>`);
    }}
</script>
</body>
</html>
"#,
            selector = self.file_selector(),
        )
    }

    fn file_selector(&self) -> String {
        let mut options = String::new();
        if self.files.is_empty() {
            options.push_str("<option disabled>No documents found</option>");
        }
        for file in &self.files {
            let selected = if self.selected.as_deref() == Some(file.as_str()) {
                " selected"
            } else {
                ""
            };
            let file = escape_html(file);
            let _ = write!(options, "<option value=\"{file}\"{selected}>{file}</option>");
        }
        format!(
            r#"        <div class="file-selector">
            <form method="GET" class="file-selector-box">
                <label for="file"><strong>Editing File:</strong></label>
                <select id="file" name="file" style="flex-grow: 1;">{options}</select>
                <button type="submit" class="btn-primary">Load</button>
            </form>
        </div>
"#
        )
    }
}

fn text_input(label: &str, name: &str, value: &str, kind: &str) -> String {
    format!(
        "<div class=\"form-group\"><label>{label}</label><input type=\"{kind}\" name=\"{name}\" value=\"{}\"></div>",
        escape_html(value)
    )
}

fn editor_form(file: &str, document: &Value) -> String {
    let doc = Resolver::new(document);
    let mut out = String::new();

    let _ = write!(
        out,
        "        <form class=\"editor-form\" method=\"POST\">\n            <input type=\"hidden\" name=\"file_to_save\" value=\"{}\">\n",
        escape_html(file)
    );

    out.push_str("            <fieldset><legend>Profile Info</legend>\n");
    for (key, label, kind) in [
        ("title", "Title", "text"),
        ("subtitle", "Subtitle", "text"),
        ("profile_image", "Profile Image URL", "url"),
    ] {
        let value = doc.str(&format!("profile_info.{key}"), "");
        let _ = writeln!(out, "                {}", text_input(label, &format!("profile_info[{key}]"), &value, kind));
    }
    out.push_str("            </fieldset>\n");

    out.push_str("            <fieldset><legend>Font</legend>\n");
    for (key, label) in [
        ("family_name", "Font Family"),
        ("google_font_url", "Font Stylesheet URL"),
        ("size", "Font Size"),
    ] {
        let value = doc.str(&format!("layout_config.font.{key}"), "");
        let _ = writeln!(out, "                {}", text_input(label, &format!("font[{key}]"), &value, "text"));
    }
    out.push_str("            </fieldset>\n");

    out.push_str("            <fieldset><legend>Layout &amp; Styling</legend>\n                <div class=\"color-grid\">\n");
    for (key, label) in COLOR_FIELDS {
        let default = if key == "background" { "#ffffff" } else { "#000000" };
        let value = doc.str(&format!("layout_config.colors.{key}"), default);
        let complex = value.contains("gradient");
        let swatch = if complex { "#ffffff".to_string() } else { escape_html(&value) };
        let _ = writeln!(
            out,
            "                    <div class=\"form-group\"><label>{label}</label><div class=\"color-input-group\"><input type=\"color\" value=\"{swatch}\" oninput=\"this.nextElementSibling.value = this.value\"{disabled}><input type=\"text\" name=\"colors[{key}]\" value=\"{}\" onchange=\"this.previousElementSibling.value = this.value; this.previousElementSibling.disabled = this.value.includes('gradient')\"></div></div>",
            escape_html(&value),
            disabled = if complex { " disabled" } else { "" },
        );
    }
    out.push_str("                </div>\n");

    let style = doc.str("layout_config.button.style", "");
    let _ = writeln!(
        out,
        "                <div class=\"form-group\"><label>Button Style</label><select name=\"button[style]\"><option value=\"filled\"{}>Filled</option><option value=\"outline\"{}>Outline</option></select></div>",
        if style == "filled" { " selected" } else { "" },
        if style == "outline" { " selected" } else { "" },
    );
    for (path, name, label) in [
        ("button.border_radius", "button[border_radius]", "Button Border Radius"),
        ("button.border_width", "button[border_width]", "Button Border Width"),
        ("button.shadow", "button[shadow]", "Button Shadow"),
        ("hover_effects.button_transform", "hover_effects[button_transform]", "Hover Transform"),
        ("hover_effects.button_background", "hover_effects[button_background]", "Hover Background"),
    ] {
        let value = doc.str(&format!("layout_config.{path}"), "");
        let _ = writeln!(out, "                {}", text_input(label, name, &value, "text"));
    }
    out.push_str("            </fieldset>\n");

    out.push_str("            <fieldset><legend>Main Links</legend>\n                <div id=\"main-links-container\">\n");
    for (i, item) in doc.seq("main_links").iter().enumerate() {
        let link = Resolver::new(item);
        let _ = writeln!(
            out,
            "                    <div class=\"link-item\">{}{}{}<button type=\"button\" class=\"btn-danger\" onclick=\"this.parentElement.remove()\">Remove</button></div>",
            text_input("Label", &format!("main_links[{i}][label]"), &link.str("label", ""), "text"),
            text_input("URL", &format!("main_links[{i}][url]"), &link.str("url", ""), "url"),
            text_input("Icon", &format!("main_links[{i}][icon]"), &link.str("icon", ""), "text"),
        );
    }
    out.push_str("                </div>\n                <button type=\"button\" class=\"btn-secondary\" onclick=\"addMainLink()\">+ Add Link</button>\n            </fieldset>\n");

    out.push_str("            <fieldset><legend>Social Media Links</legend>\n                <div id=\"social-links-container\">\n");
    for (i, item) in doc.seq("social_media_links").iter().enumerate() {
        let social = Resolver::new(item);
        let name = social.str("name", "");
        let _ = writeln!(
            out,
            "                    <div class=\"social-item\"><div class=\"form-group\"><label>Platform</label><select name=\"social_media_links[{i}][name]\">{}</select></div>{}<button type=\"button\" class=\"btn-danger\" onclick=\"this.parentElement.remove()\">Remove</button></div>",
            platform_options(&name),
            text_input("URL", &format!("social_media_links[{i}][url]"), &social.str("url", ""), "url"),
        );
    }
    out.push_str("                </div>\n                <button type=\"button\" class=\"btn-secondary\" onclick=\"addSocialLink()\">+ Add Social Link</button>\n            </fieldset>\n");

    out.push_str("            <button type=\"submit\" class=\"btn-primary save\">Save Changes</button>\n        </form>\n");
    out
}

/// Platform `<option>`s with `current` selected. A stored name outside the
/// platform set is kept as an extra selected option so saving does not
/// replace it.
fn platform_options(current: &str) -> String {
    let selected = Platform::from_name(current);
    let mut out = String::new();
    if selected.is_none() && !current.is_empty() {
        let current = escape_html(current);
        let _ = write!(out, "<option value=\"{current}\" selected>{current}</option>");
    }
    for platform in Platform::ALL {
        let mark = if selected == Some(platform) { " selected" } else { "" };
        let _ = write!(
            out,
            "<option value=\"{}\"{mark}>{}</option>",
            platform.id(),
            capitalize(platform.id())
        );
    }
    out
}

const EDITOR_CSS: &str = r#"
        body { font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif; background-color: #f9fafb; color: #1f2937; margin: 0; padding: 2rem; }
        .container { max-width: 800px; margin: 0 auto; }
        h1 { text-align: center; margin-bottom: 1rem; }
        .file-selector, .editor-form { background-color: #ffffff; padding: 1.5rem; border-radius: 12px; box-shadow: 0 4px 6px -1px rgba(0,0,0,0.1); margin-bottom: 1.5rem; }
        .file-selector-box { display: flex; gap: 1rem; align-items: center; }
        fieldset { border: 1px solid #e5e7eb; border-radius: 8px; padding: 1rem 1.5rem 1.5rem; margin-bottom: 1.5rem; }
        legend { font-size: 1.2rem; font-weight: 600; padding: 0 0.5rem; color: #4f46e5; }
        .form-group { margin-bottom: 0.75rem; }
        .form-group label { display: block; font-weight: 500; margin-bottom: 0.4rem; color: #374151; }
        .form-group input[type="text"], .form-group input[type="url"], .form-group select { width: 100%; padding: 0.6rem 0.75rem; border: 1px solid #e5e7eb; border-radius: 6px; box-sizing: border-box; }
        .color-grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(250px, 1fr)); gap: 1rem; }
        .color-input-group { display: flex; align-items: center; gap: 0.75rem; }
        .color-input-group input[type="color"] { min-width: 36px; height: 36px; padding: 0; border: none; border-radius: 6px; cursor: pointer; }
        .link-item, .social-item { background-color: #f9fafb; border: 1px solid #e5e7eb; padding: 1rem; margin-bottom: 1rem; border-radius: 8px; display: grid; gap: 0.75rem 1rem; align-items: flex-end; }
        .link-item { grid-template-columns: 1fr 1fr 120px; }
        .social-item { grid-template-columns: 1fr 2fr auto; }
        button { padding: 0.6rem 1.2rem; border: none; border-radius: 6px; font-weight: 600; cursor: pointer; white-space: nowrap; }
        .btn-primary { background-color: #4f46e5; color: white; }
        .btn-primary.save { width: 100%; padding: 1rem; font-size: 1.2rem; }
        .btn-secondary { background-color: #e5e7eb; color: #374151; }
        .btn-danger { background-color: #fee2e2; color: #ef4444; }
        .message { padding: 1rem; border-radius: 8px; margin-bottom: 1.5rem; font-weight: 500; }
        .message.success { background-color: #d1fae5; color: #065f46; }
        .message.error { background-color: #fee2e2; color: #991b1b; }
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn page_for(doc: serde_json::Value) -> String {
        EditorPage {
            files: vec!["data.json".into()],
            selected: Some("data.json".into()),
            document: Some(Value::from(doc)),
            banner: None,
        }
        .to_html()
    }

    #[test]
    fn test_no_form_without_document() {
        let html = EditorPage {
            files: vec!["data.json".into()],
            ..EditorPage::default()
        }
        .to_html();
        assert!(!html.contains("<form class=\"editor-form\""));
        assert!(html.contains(r#"<option value="data.json">data.json</option>"#));
    }

    #[test]
    fn test_form_is_prefilled() {
        let html = page_for(json!({
            "profile_info": { "title": "Jane \"JD\"" },
            "main_links": [{ "label": "Site", "url": "https://x.test" }],
        }));
        assert!(html.contains(r#"name="profile_info[title]" value="Jane &quot;JD&quot;""#));
        assert!(html.contains(r#"name="main_links[0][label]" value="Site""#));
        assert!(html.contains(r#"name="main_links[0][url]" value="https://x.test""#));
        assert!(html.contains(r#"<input type="hidden" name="file_to_save" value="data.json">"#));
        assert!(html.contains("let mainLinkIndex = 1;"));
    }

    #[test]
    fn test_gradient_color_disables_swatch() {
        let html = page_for(json!({
            "layout_config": { "colors": { "background": "linear-gradient(red, blue)" } }
        }));
        assert!(html.contains(
            r##"<input type="color" value="#ffffff" oninput="this.nextElementSibling.value = this.value" disabled>"##
        ));
    }

    #[test]
    fn test_platform_select_matches_case_insensitively() {
        assert!(platform_options("GitHub").contains(r#"<option value="github" selected>Github</option>"#));
    }

    #[test]
    fn test_unknown_platform_is_preserved() {
        let options = platform_options("mastodon");
        assert!(options.starts_with(r#"<option value="mastodon" selected>mastodon</option>"#));
    }

    #[test]
    fn test_banner_escapes_file_name() {
        let banner = Banner::Saved { file: "<x>.json".into() };
        assert!(banner.to_html().contains("<strong>&lt;x&gt;.json</strong>"));
        assert!(Banner::Error(INVALID_SAVE_TARGET.into()).is_error());
    }
}
