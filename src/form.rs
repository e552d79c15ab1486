//! Editor form submissions and their conversion back into a profile document.

use crate::error::SubmissionError;
use crate::lexer::{parse_field_name, KeySegment};
use crate::value::{Map, Value};
use indexmap::IndexMap;
use log::{debug, warn};

/// Submission groups copied into `layout_config`, in document order.
pub const LAYOUT_GROUPS: [&str; 4] = ["font", "colors", "button", "hover_effects"];

/// Repeating submission groups that become dense arrays.
pub const LIST_GROUPS: [&str; 2] = ["main_links", "social_media_links"];

/// A decoded form field: a single value or a bracket-keyed group of fields.
#[derive(Debug, Clone, PartialEq)]
pub enum FormValue {
    Text(String),
    Group(FormGroup),
}

impl FormValue {
    fn kind_name(&self) -> &'static str {
        match self {
            FormValue::Text(_) => "a single value",
            FormValue::Group(_) => "a group",
        }
    }

    pub fn to_value(&self) -> Value {
        match self {
            FormValue::Text(text) => Value::String(text.clone()),
            FormValue::Group(group) => group.to_value(),
        }
    }

    /// Stores `value` below this field. A single value already here becomes
    /// an empty group first, since the later field wins.
    fn insert_nested(&mut self, path: &[KeySegment], value: String) {
        if !matches!(self, FormValue::Group(_)) {
            *self = FormValue::Group(FormGroup::default());
        }
        if let FormValue::Group(group) = self {
            group.insert(path, value);
        }
    }
}

/// Fields sharing a bracket prefix, in the order they were submitted.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FormGroup {
    entries: IndexMap<String, FormValue>,
}

impl FormGroup {
    pub fn get(&self, key: &str) -> Option<&FormValue> {
        self.entries.get(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FormValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// One past the largest numeric key, or 0.
    fn next_index(&self) -> usize {
        self.entries
            .keys()
            .filter_map(|k| k.parse::<usize>().ok())
            .max()
            .map_or(0, |max| max + 1)
    }

    fn insert(&mut self, path: &[KeySegment], value: String) {
        let Some((first, rest)) = path.split_first() else {
            return;
        };
        let key = match first {
            KeySegment::Key(key) => key.clone(),
            KeySegment::Append => self.next_index().to_string(),
        };
        if rest.is_empty() {
            self.entries.insert(key, FormValue::Text(value));
        } else {
            self.entries
                .entry(key)
                .or_insert_with(|| FormValue::Group(FormGroup::default()))
                .insert_nested(rest, value);
        }
    }

    pub fn to_value(&self) -> Value {
        Value::Object(self.iter().map(|(k, v)| (k.to_string(), v.to_value())).collect())
    }

    /// Entries ordered by their original index: numeric keys ascending, then
    /// any other keys in submission order.
    pub fn sorted_by_index(&self) -> Vec<(&str, &FormValue)> {
        let mut entries: Vec<(usize, &str, &FormValue)> = self
            .iter()
            .enumerate()
            .map(|(position, (k, v))| (position, k, v))
            .collect();
        entries.sort_by_key(|(position, k, _)| match k.parse::<usize>() {
            Ok(index) => (0, index),
            Err(_) => (1, *position),
        });
        entries.into_iter().map(|(_, k, v)| (k, v)).collect()
    }
}

/// A decoded `application/x-www-form-urlencoded` body or query string.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Submission {
    root: FormGroup,
}

impl Submission {
    /// Decodes `body`, expanding bracketed names into nested groups.
    pub fn parse(body: &str) -> Submission {
        let mut root = FormGroup::default();
        for (name, value) in url::form_urlencoded::parse(body.as_bytes()) {
            let path = parse_field_name(&name);
            root.insert(&path, value.into_owned());
        }
        debug!("decoded submission with {} top-level fields", root.len());
        Submission { root }
    }

    /// Builds a submission from already-decoded `(name, value)` pairs.
    pub fn from_pairs<'a, I>(pairs: I) -> Submission
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut root = FormGroup::default();
        for (name, value) in pairs {
            root.insert(&parse_field_name(name), value.to_string());
        }
        Submission { root }
    }

    pub fn get(&self, name: &str) -> Option<&FormValue> {
        self.root.get(name)
    }

    /// A single-valued field. Groups are not text.
    pub fn text(&self, name: &str) -> Option<&str> {
        match self.get(name)? {
            FormValue::Text(text) => Some(text),
            FormValue::Group(_) => None,
        }
    }

    /// The group at `name`, `None` when absent.
    ///
    /// # Errors
    /// Returns `SubmissionError::MalformedSubmission` when the field was sent as
    /// a single value instead of a group.
    pub fn group(&self, name: &str) -> Result<Option<&FormGroup>, SubmissionError> {
        match self.get(name) {
            None => Ok(None),
            Some(FormValue::Group(group)) => Ok(Some(group)),
            Some(other) => Err(SubmissionError::MalformedSubmission {
                field: name.to_string(),
                found: other.kind_name(),
            }),
        }
    }

    fn group_or_empty(&self, name: &str) -> Option<&FormGroup> {
        self.group(name).unwrap_or_else(|err| {
            warn!("{err}");
            None
        })
    }

    fn object(&self, name: &str) -> Value {
        self.group_or_empty(name)
            .map_or_else(|| Value::Object(Map::new()), FormGroup::to_value)
    }

    /// The group at `name` as a dense array, ordered by original index.
    fn list(&self, name: &str) -> Value {
        let Some(group) = self.group_or_empty(name) else {
            return Value::Array(Vec::new());
        };
        let items = group
            .sorted_by_index()
            .into_iter()
            .filter_map(|(index, item)| match item {
                FormValue::Group(fields) => Some(fields.to_value()),
                FormValue::Text(_) => {
                    warn!("{}", SubmissionError::MalformedSubmission {
                        field: format!("{name}[{index}]"),
                        found: item.kind_name(),
                    });
                    None
                }
            })
            .collect();
        Value::Array(items)
    }

    /// Rebuilds the complete profile document from this submission.
    ///
    /// Missing groups become empty objects or arrays; list items are
    /// renumbered from 0 so removed items leave no gaps.
    pub fn to_document(&self) -> Value {
        let mut layout = Map::new();
        for name in LAYOUT_GROUPS {
            layout.insert(name.to_string(), self.object(name));
        }

        let mut document = Map::new();
        document.insert("profile_info".to_string(), self.object("profile_info"));
        document.insert("layout_config".to_string(), Value::Object(layout));
        for name in LIST_GROUPS {
            document.insert(name.to_string(), self.list(name));
        }
        Value::Object(document)
    }
}

/// Decodes a form body and rebuilds the document it describes.
pub fn document_from_form(body: &str) -> Value {
    Submission::parse(body).to_document()
}
