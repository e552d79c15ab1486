use miette::{Diagnostic, NamedSource, SourceSpan};
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum BioError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Submission(#[from] SubmissionError),
}

#[derive(Error, Debug, Diagnostic)]
pub enum StoreError {
    #[error("Document '{id}' not found")]
    #[diagnostic(
        code(store::not_found),
        help("Only *.{extension} files directly inside {dir} can be loaded.")
    )]
    NotFound {
        id: String,
        dir: String,
        extension: String,
    },

    #[error("Invalid JSON in '{id}'")]
    #[diagnostic(
        code(store::invalid_json),
        help("The document must be a single well-formed JSON value.")
    )]
    InvalidJson {
        id: String,
        #[source_code]
        src: NamedSource<String>,
        #[label("{reason}")]
        span: SourceSpan,
        reason: String,
    },

    #[error("Writing to '{id}' is not allowed")]
    #[diagnostic(
        code(store::forbidden),
        help("Documents can only be saved over an existing file in the store.")
    )]
    Forbidden { id: String },

    #[error("Could not write to '{id}'")]
    #[diagnostic(code(store::write_error), help("Check file permissions."))]
    WriteError {
        id: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Could not read '{id}'")]
    #[diagnostic(code(store::read_error))]
    Read {
        id: String,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Error, Debug, Diagnostic)]
pub enum ConfigError {
    #[error("Could not read site config {path:?}")]
    #[diagnostic(code(config::read_error))]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid site config {path:?}")]
    #[diagnostic(
        code(config::parse_error),
        help("Expected a YAML mapping with optional `data_dir`, `profile` and `extension` keys.")
    )]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}

#[derive(Error, Debug, Diagnostic)]
pub enum SubmissionError {
    #[error("Malformed submission: '{field}' should be a group but is {found}")]
    #[diagnostic(
        code(submission::malformed),
        help("The field is ignored and treated as empty.")
    )]
    MalformedSubmission { field: String, found: &'static str },
}
