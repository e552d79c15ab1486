use crate::value::Value;
use log::debug;

/// Resolves a dot-separated `path` against `root`.
///
/// Each segment is looked up by key on object nodes and by index on array
/// nodes. The first segment that cannot be followed ends the walk and yields
/// `default`. An empty path resolves to `root` itself.
pub fn resolve<'a>(root: &'a Value, path: &str, default: Option<&'a Value>) -> Option<&'a Value> {
    if path.is_empty() {
        return Some(root);
    }
    let mut current = root;
    for segment in path.split('.') {
        match current.get(segment) {
            Some(next) => current = next,
            None => {
                debug!("path '{path}' stops at segment '{segment}' ({})", current.kind_name());
                return default;
            }
        }
    }
    Some(current)
}

/// Typed read access to a profile document.
///
/// Every accessor is total: missing segments, `null`s, and nodes of the wrong
/// shape all fall back to the caller's default.
#[derive(Debug, Clone, Copy)]
pub struct Resolver<'a> {
    root: &'a Value,
}

impl<'a> Resolver<'a> {
    pub fn new(root: &'a Value) -> Self {
        Resolver { root }
    }

    pub fn root(&self) -> &'a Value {
        self.root
    }

    pub fn value(&self, path: &str) -> Option<&'a Value> {
        resolve(self.root, path, None)
    }

    /// Scalar at `path` as text, or `default` for absent and non-scalar nodes.
    pub fn str(&self, path: &str, default: &str) -> String {
        self.value(path)
            .and_then(Value::to_text)
            .unwrap_or_else(|| default.to_string())
    }

    /// Scalar at `path` as text; absent, non-scalar and empty values are `None`.
    pub fn opt_str(&self, path: &str) -> Option<String> {
        self.value(path)
            .and_then(Value::to_text)
            .filter(|s| !s.is_empty())
    }

    /// Array at `path`. Anything other than an array reads as empty.
    pub fn seq(&self, path: &str) -> &'a [Value] {
        self.value(path).and_then(Value::as_array).unwrap_or(&[])
    }

    /// A resolver rooted at `path`, or at `null` when the path is absent.
    pub fn scope(&self, path: &str) -> Resolver<'a> {
        const NULL: &Value = &Value::Null;
        Resolver::new(self.value(path).unwrap_or(NULL))
    }
}
