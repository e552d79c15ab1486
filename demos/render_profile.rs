use biolink_core::render::{render_page, PageRequest};
use biolink_core::Value;

fn main() {
    let profile = r#"{
        "profile_info": { "title": "Jane Doe", "subtitle": "Designer" },
        "main_links": [
            { "label": "Portfolio", "url": "https://jane.example.com", "icon": "🎨" }
        ],
        "social_media_links": [
            { "name": "github", "url": "https://github.com/jane" }
        ]
    }"#;

    match serde_json::from_str::<Value>(profile) {
        Ok(document) => {
            let html = render_page(&document, &PageRequest::new(true, "jane.example.com", "/"));
            println!("{html}");
        }
        Err(e) => {
            eprintln!("Failed to parse profile: {e:?}");
        }
    }
}
