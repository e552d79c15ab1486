use crate::error::StoreError;
use crate::utils::get_offset;
use crate::value::Value;
use log::{debug, info, warn};
use miette::NamedSource;
use serde::Serialize;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

pub const DEFAULT_EXTENSION: &str = "json";

/// The set of profile documents the editor may read and overwrite.
///
/// Identifiers are bare file names of `*.{extension}` files directly inside
/// `dir`. Anything not returned by [`DocumentStore::list`] is rejected, which
/// keeps reads and writes inside that fixed set of files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentStore {
    dir: PathBuf,
    extension: String,
}

impl DocumentStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        DocumentStore {
            dir: dir.into(),
            extension: DEFAULT_EXTENSION.to_string(),
        }
    }

    #[must_use]
    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn extension(&self) -> &str {
        &self.extension
    }

    /// Sorted identifiers of every document in the store.
    ///
    /// # Errors
    /// Returns `StoreError::Read` if the directory cannot be listed.
    pub fn list(&self) -> Result<Vec<String>, StoreError> {
        let read_err = |source| StoreError::Read {
            id: self.dir.display().to_string(),
            source,
        };
        let mut ids = Vec::new();
        for entry in fs::read_dir(&self.dir).map_err(read_err)? {
            let path = entry.map_err(read_err)?.path();
            if !path.is_file() {
                continue;
            }
            if path.extension().and_then(|e| e.to_str()) != Some(self.extension.as_str()) {
                continue;
            }
            if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
                ids.push(name.to_string());
            }
        }
        ids.sort();
        Ok(ids)
    }

    /// Whether `id` is one of the listed documents.
    ///
    /// # Errors
    /// Returns `StoreError::Read` if the directory cannot be listed.
    pub fn contains(&self, id: &str) -> Result<bool, StoreError> {
        Ok(self.list()?.iter().any(|listed| listed == id))
    }

    /// Reads and parses the document `id`.
    ///
    /// # Errors
    /// `NotFound` if `id` is not listed, `Read` on I/O failure, and
    /// `InvalidJson` if the content does not parse.
    pub fn load(&self, id: &str) -> Result<Value, StoreError> {
        if !self.contains(id)? {
            return Err(StoreError::NotFound {
                id: id.to_string(),
                dir: self.dir.display().to_string(),
                extension: self.extension.clone(),
            });
        }
        let path = self.dir.join(id);
        let source = fs::read_to_string(&path).map_err(|source| StoreError::Read {
            id: id.to_string(),
            source,
        })?;

        let document = serde_json::from_str::<Value>(&source).map_err(|err| {
            let offset = get_offset(&source, err.line(), err.column());
            let len = usize::from(offset < source.len());
            StoreError::InvalidJson {
                id: id.to_string(),
                reason: err.to_string(),
                span: (offset, len).into(),
                src: NamedSource::new(path.display().to_string(), source.clone()),
            }
        })?;
        info!("loaded document '{id}' from {}", path.display());
        Ok(document)
    }

    /// Overwrites the document `id` with `document`.
    ///
    /// The new content is written to a temporary file in the store directory
    /// and renamed over the old one, so readers never see a partial file.
    /// Concurrent saves to the same `id` are not coordinated: the last rename
    /// wins.
    ///
    /// # Errors
    /// `Forbidden` if `id` is not listed (nothing is written), `WriteError` on
    /// I/O failure, `Read` if the directory cannot be listed.
    pub fn save(&self, id: &str, document: &Value) -> Result<(), StoreError> {
        if !self.contains(id)? {
            warn!("refusing to save unlisted document '{id}'");
            return Err(StoreError::Forbidden { id: id.to_string() });
        }
        let write_err = |source| StoreError::WriteError {
            id: id.to_string(),
            source,
        };

        let bytes = to_pretty_json(document).map_err(|e| write_err(std::io::Error::other(e)))?;
        let target = self.dir.join(id);

        let mut tmp = NamedTempFile::new_in(&self.dir).map_err(write_err)?;
        tmp.write_all(&bytes).map_err(write_err)?;
        if let Ok(metadata) = fs::metadata(&target) {
            tmp.as_file()
                .set_permissions(metadata.permissions())
                .map_err(write_err)?;
        }
        tmp.persist(&target).map_err(|e| write_err(e.error))?;

        info!("saved document '{id}' ({} bytes)", bytes.len());
        debug!("document '{id}' written to {}", target.display());
        Ok(())
    }
}

/// Serializes a document the way it is stored: pretty-printed with four-space
/// indentation, forward slashes and non-ASCII characters left as they are.
///
/// # Errors
/// Returns a `serde_json::Error` if serialization fails.
pub fn to_pretty_json(document: &Value) -> Result<Vec<u8>, serde_json::Error> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    document.serialize(&mut serializer)?;
    Ok(buf)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::tempdir;

    #[test]
    fn test_pretty_json_format() {
        let doc = Value::from(json!({ "profile_info": { "profile_image": "https://x.test/a.png" } }));
        let text = String::from_utf8(to_pretty_json(&doc).unwrap()).unwrap();
        assert_eq!(
            text,
            "{\n    \"profile_info\": {\n        \"profile_image\": \"https://x.test/a.png\"\n    }\n}"
        );
    }

    #[test]
    fn test_non_ascii_is_not_escaped() {
        let doc = Value::from(json!({ "icon": "✨" }));
        let text = String::from_utf8(to_pretty_json(&doc).unwrap()).unwrap();
        assert!(text.contains("\"✨\""));
    }

    #[test]
    fn test_list_filters_by_extension() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("b.json"), "{}").unwrap();
        fs::write(dir.path().join("a.json"), "{}").unwrap();
        fs::write(dir.path().join("notes.txt"), "").unwrap();
        fs::create_dir(dir.path().join("nested.json")).unwrap();

        let store = DocumentStore::new(dir.path());
        assert_eq!(store.list().unwrap(), vec!["a.json", "b.json"]);
    }

    #[test]
    fn test_list_missing_dir_is_read_error() {
        let dir = tempdir().unwrap();
        let store = DocumentStore::new(dir.path().join("missing"));
        assert!(matches!(store.list(), Err(StoreError::Read { .. })));
    }

    #[test]
    fn test_invalid_json_span_points_at_error() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("bad.json"), "{\n  \"a\": x\n}").unwrap();
        let store = DocumentStore::new(dir.path());
        match store.load("bad.json") {
            Err(StoreError::InvalidJson { span, .. }) => assert_eq!(span.offset(), 9),
            other => panic!("expected InvalidJson, got {other:?}"),
        }
    }

    #[test]
    fn test_invalid_json_span_after_non_ascii() {
        let dir = tempdir().unwrap();
        let source = "{\"t\": \"ééééé\" x}";
        fs::write(dir.path().join("bad.json"), source).unwrap();
        let store = DocumentStore::new(dir.path());
        match store.load("bad.json") {
            Err(StoreError::InvalidJson { span, .. }) => {
                assert_eq!(&source[span.offset()..span.offset() + span.len()], "x");
            }
            other => panic!("expected InvalidJson, got {other:?}"),
        }
    }
}
