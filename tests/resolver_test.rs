use biolink_core::resolver::{resolve, Resolver};
use biolink_core::Value;
use serde_json::json;

fn doc() -> Value {
    Value::from(json!({
        "profile_info": { "title": "Jane", "subtitle": null },
        "layout_config": {
            "colors": { "background": "#fff" },
            "button": { "style": "outline", "border_width": 3 },
        },
        "main_links": [
            { "label": "Site", "url": "https://x.test" },
            "not an object",
        ],
        "flags": [true, false],
    }))
}

#[test]
fn test_missing_segments_return_default() {
    let doc = doc();
    let default = Value::from("default");
    let paths = [
        "missing",
        "profile_info.missing",
        "profile_info.title.deeper",
        "profile_info.subtitle",
        "layout_config.colors.background.0",
        "main_links.2",
        "main_links.-1",
        "main_links.first",
        "main_links.1.label",
        "main_links..label",
        "flags.0.value",
        ".",
    ];
    for path in paths {
        assert_eq!(
            resolve(&doc, path, Some(&default)),
            Some(&default),
            "path {path:?} should fall back"
        );
        assert_eq!(resolve(&doc, path, None), None, "path {path:?} should be absent");
    }
}

#[test]
fn test_present_segments_resolve() {
    let doc = doc();
    assert_eq!(
        resolve(&doc, "layout_config.button.style", None),
        Some(&Value::from("outline"))
    );
    assert_eq!(
        resolve(&doc, "main_links.0.url", None),
        Some(&Value::from("https://x.test"))
    );
    assert_eq!(resolve(&doc, "flags.1", None), Some(&Value::Boolean(false)));
    assert_eq!(resolve(&doc, "", None), Some(&doc));
}

#[test]
fn test_resolving_scalar_roots() {
    for root in [Value::Null, Value::from("text"), Value::Boolean(true)] {
        assert_eq!(resolve(&root, "a.b", None), None);
        assert_eq!(Resolver::new(&root).str("a", "fallback"), "fallback");
    }
}

#[test]
fn test_typed_accessors() {
    let doc = doc();
    let r = Resolver::new(&doc);
    assert_eq!(r.str("layout_config.button.border_width", "2px"), "3");
    assert_eq!(r.str("flags.0", ""), "true");
    assert_eq!(r.str("profile_info.subtitle", "none"), "none");
    assert_eq!(r.opt_str("profile_info.subtitle"), None);
    assert_eq!(r.seq("main_links").len(), 2);
    assert!(r.seq("profile_info.title").is_empty());

    let button = r.scope("layout_config.button");
    assert_eq!(button.str("style", "filled"), "outline");
    let missing = r.scope("layout_config.nothing");
    assert_eq!(missing.root(), &Value::Null);
    assert_eq!(missing.str("style", "filled"), "filled");
}

#[test]
fn test_resolve_does_not_mutate() {
    let doc = doc();
    let before = doc.clone();
    let _ = resolve(&doc, "main_links.9.label", None);
    let _ = Resolver::new(&doc).seq("layout_config");
    assert_eq!(doc, before);
}
