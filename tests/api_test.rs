use biolink_core::api::{editor_get, editor_post, editor_response, render_endpoint};
use biolink_core::editor::Banner;
use biolink_core::render::{render_page, PageRequest};
use biolink_core::{SiteConfig, Value};
use std::fs;
use std::path::Path;
use tempfile::tempdir;

fn fixture(name: &str) -> String {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures").join(name);
    fs::read_to_string(path).unwrap()
}

fn stored_json(dir: &Path, id: &str) -> serde_json::Value {
    serde_json::from_str(&fs::read_to_string(dir.join(id)).unwrap()).unwrap()
}

#[test]
fn test_minimal_document_renders_title_and_single_link() {
    let document: Value = serde_json::from_str(&fixture("minimal.json")).unwrap();
    let html = render_page(&document, &PageRequest::default());

    assert!(html.contains("<title>Jane</title>"));
    assert!(!html.contains("Jane |"));
    assert_eq!(html.matches("class=\"link-button\"").count(), 1);
    assert!(html.contains(
        r#"<a href="https://x.test" class="link-button" target="_blank" rel="noopener noreferrer"><span>Site</span></a>"#
    ));
    assert!(html.contains(
        r#"<meta name="description" content="A collection of important links for Jane.">"#
    ));
}

#[test]
fn test_full_document_renders_every_section() {
    let document: Value = serde_json::from_str(&fixture("full.json")).unwrap();
    let html = render_page(&document, &PageRequest::new(true, "jane.example.com", "/"));

    assert!(html.contains("<title>Jane Doe | Designer &amp; Maker</title>"));
    assert!(html.contains(r#"<link rel="canonical" href="https://jane.example.com/" />"#));
    assert!(html.contains(r#"<meta property="og:description" content="Designer &amp; Maker">"#));
    assert!(html.contains("background: linear-gradient(135deg, #667eea 0%, #764ba2 100%);"));
    assert!(html.contains("border: var(--button-border-width) solid var(--button-bg-color);"));
    assert!(html.contains("--button-shadow: 0 4px 6px rgba(0, 0, 0, 0.1);"));
    assert!(html.contains("--button-hover-bg: rgba(255, 255, 255, 0.2);"));
    assert!(html.contains("--button-border-width: 3px;"));
    assert!(html.contains("<span class=\"icon\">🎨</span><span>Portfolio</span>"));
    assert!(html.contains(r#"aria-label="Instagram"><svg"#));
    assert!(html.contains(r#"aria-label="github"><svg"#));

    let portfolio = html.find("Portfolio</span>").unwrap();
    let shop = html.find("Shop</span>").unwrap();
    assert!(portfolio < shop);
}

#[test]
fn test_sparse_document_falls_back_everywhere() {
    let document: Value = serde_json::from_str(&fixture("sparse.json")).unwrap();
    let html = render_page(&document, &PageRequest::default());

    assert!(html.contains("<title>My Profile</title>"));
    assert!(html.contains("background: url(https://images.example.com/bg.jpg) center/cover;"));
    assert!(html.contains("border: none;"));
    assert!(!html.contains("class=\"link-button\""));
    assert!(html.contains(r#"aria-label="myspace"></a>"#));
}

#[test]
fn test_render_endpoint_reads_configured_profile() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("jane.json"), fixture("minimal.json")).unwrap();
    let config = SiteConfig::from_yaml_str(&format!(
        "data_dir: {}\nprofile: jane.json\n",
        dir.path().display()
    ))
    .unwrap();

    let response = render_endpoint(&config, &PageRequest::default());
    assert_eq!(response.status, 200);
    assert!(response.body.contains("<title>Jane</title>"));
}

#[test]
fn test_removed_link_collapses_to_index_zero() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("data.json"), fixture("full.json")).unwrap();
    let store = biolink_core::DocumentStore::new(dir.path());

    let body = "file_to_save=data.json\
        &profile_info%5Btitle%5D=Jane\
        &main_links%5B1%5D%5Blabel%5D=Shop\
        &main_links%5B1%5D%5Burl%5D=https%3A%2F%2Fshop.example.com\
        &main_links%5B1%5D%5Bicon%5D=";
    let page = editor_post(&store, body);

    assert_eq!(page.banner, Some(Banner::Saved { file: "data.json".into() }));
    let saved = stored_json(dir.path(), "data.json");
    assert_eq!(
        saved["main_links"],
        serde_json::json!([{ "label": "Shop", "url": "https://shop.example.com", "icon": "" }])
    );
}

#[test]
fn test_saved_document_is_redisplayed_and_renders() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("data.json"), "{}").unwrap();
    let store = biolink_core::DocumentStore::new(dir.path());

    let body = "file_to_save=data.json\
        &profile_info[title]=Jane&profile_info[subtitle]=Maker\
        &colors[background]=%23fafafa&button[style]=outline\
        &main_links[0][label]=Site&main_links[0][url]=https%3A%2F%2Fx.test\
        &main_links[4][label]=Blog&main_links[4][url]=https%3A%2F%2Fblog.test\
        &social_media_links[2][name]=github&social_media_links[2][url]=https%3A%2F%2Fgithub.com%2Fjane";
    let page = editor_post(&store, body);

    assert_eq!(page.selected.as_deref(), Some("data.json"));
    let html = editor_response(&page).body;
    assert!(html.contains("Successfully saved changes to <strong>data.json</strong>!"));
    assert!(html.contains(r#"name="main_links[1][label]" value="Blog""#));
    assert!(html.contains(r#"<option value="outline" selected>Outline</option>"#));

    let saved = stored_json(dir.path(), "data.json");
    assert_eq!(saved["main_links"].as_array().unwrap().len(), 2);
    assert_eq!(saved["social_media_links"][0]["name"], "github");
    assert_eq!(saved["layout_config"]["hover_effects"], serde_json::json!({}));

    let raw = fs::read_to_string(dir.path().join("data.json")).unwrap();
    assert!(raw.contains("\"url\": \"https://x.test\""));
    assert!(raw.starts_with("{\n    \"profile_info\": {"));

    let reloaded = editor_get(&store, Some("data.json"));
    let html = render_page(reloaded.document.as_ref().unwrap(), &PageRequest::default());
    assert!(html.contains("<title>Jane | Maker</title>"));
    assert!(html.contains("background-color: #fafafa;"));
    assert!(html.find("Site</span>").unwrap() < html.find("Blog</span>").unwrap());
}

#[test]
fn test_editor_load_save_cycle_keeps_fields() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("data.json"), fixture("full.json")).unwrap();
    let store = biolink_core::DocumentStore::new(dir.path());
    let mut original = stored_json(dir.path(), "data.json");
    // the platform select stores the canonical lower-case identifier
    original["social_media_links"][1]["name"] = "instagram".into();

    let page = editor_get(&store, Some("data.json"));
    let html = page.to_html();
    let pairs = form_fields(&html);
    let body: String = url::form_urlencoded::Serializer::new(String::new())
        .extend_pairs(pairs.iter().map(|(k, v)| (k.as_str(), v.as_str())))
        .finish();

    editor_post(&store, &body);
    assert_eq!(stored_json(dir.path(), "data.json"), original);
}

#[test]
fn test_editor_cycle_of_sparse_document_keeps_style_defaults() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("data.json"), r#"{"profile_info":{"title":"Jane"}}"#).unwrap();
    let store = biolink_core::DocumentStore::new(dir.path());

    let pairs = form_fields(&editor_get(&store, Some("data.json")).to_html());
    let body: String = url::form_urlencoded::Serializer::new(String::new())
        .extend_pairs(pairs.iter().map(|(k, v)| (k.as_str(), v.as_str())))
        .finish();
    let page = editor_post(&store, &body);
    assert_eq!(page.banner, Some(Banner::Saved { file: "data.json".into() }));

    let saved = stored_json(dir.path(), "data.json");
    assert_eq!(saved["layout_config"]["font"]["size"], "");

    let html = render_page(page.document.as_ref().unwrap(), &PageRequest::default());
    assert!(html.contains("--font-family: 'sans-serif', sans-serif;"));
    assert!(html.contains("--font-size: 16px;"), "font size lost");
    assert!(html.contains("--button-border-radius: 8px;"));
    assert!(html.contains("--button-border-width: 2px;"));
    assert!(html.contains("--button-shadow: none;"));
    assert!(html.contains("--button-hover-transform: scale(1.02);"));
    assert!(html.contains("--button-hover-bg: #000000;"));
    assert!(!html.contains(": ;"));
    assert!(!html.contains("rel=\"stylesheet\""));
}

/// Pulls the submitted `(name, value)` pairs out of the rendered editor form.
fn form_fields(html: &str) -> Vec<(String, String)> {
    let unescape = |s: &str| {
        s.replace("&quot;", "\"")
            .replace("&#039;", "'")
            .replace("&lt;", "<")
            .replace("&gt;", ">")
            .replace("&amp;", "&")
    };
    let attr = |tag: &str, name: &str| -> Option<String> {
        let needle = format!("{name}=\"");
        let start = tag.find(&needle)? + needle.len();
        let end = tag[start..].find('"')? + start;
        Some(unescape(&tag[start..end]))
    };

    let form = &html[html.find("<form class=\"editor-form\"").unwrap()..];
    let form = &form[..form.find("</form>").unwrap()];
    let mut fields = Vec::new();
    let mut rest = form;
    while let Some(start) = rest.find('<') {
        rest = &rest[start..];
        let end = rest.find('>').unwrap();
        let tag = &rest[..=end];
        if tag.starts_with("<input") && !tag.contains("type=\"color\"") {
            if let Some(name) = attr(tag, "name") {
                fields.push((name, attr(tag, "value").unwrap_or_default()));
            }
        } else if tag.starts_with("<select") {
            let name = attr(tag, "name").unwrap();
            let close = rest.find("</select>").unwrap();
            let select = &rest[..close];
            let selected = select
                .split("<option")
                .find(|o| o.contains(" selected>"))
                .and_then(|o| attr(o, "value"))
                .unwrap_or_default();
            fields.push((name, selected));
            rest = &rest[close..];
            continue;
        }
        rest = &rest[end + 1..];
    }
    fields
}
