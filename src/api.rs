use crate::config::SiteConfig;
use crate::editor::{Banner, EditorPage, INVALID_EDIT_TARGET, INVALID_SAVE_TARGET, WRITE_FAILED};
use crate::error::{BioError, StoreError};
use crate::form::Submission;
use crate::render::{render_page, PageRequest};
use crate::store::DocumentStore;
use crate::utils::escape_html;
use log::{error, info, warn};
use miette::{GraphicalReportHandler, GraphicalTheme};

/// A finished HTTP response body with its status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub status: u16,
    pub body: String,
}

impl Response {
    pub fn ok(body: String) -> Self {
        Response { status: 200, body }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Loads the configured profile document and renders the public page.
///
/// The document is read fresh on every call.
///
/// # Errors
/// Returns a `BioError` if the document is missing, unreadable, or not valid
/// JSON. There is no partial page in that case.
pub fn render_profile(config: &SiteConfig, request: &PageRequest) -> Result<String, BioError> {
    let document = config.store().load(&config.profile)?;
    Ok(render_page(&document, request))
}

/// The public page endpoint.
///
/// A failure to load the profile is fatal for the request: the response is a
/// 500 error page describing the problem.
pub fn render_endpoint(config: &SiteConfig, request: &PageRequest) -> Response {
    match render_profile(config, request) {
        Ok(body) => Response::ok(body),
        Err(err) => {
            error!("cannot render profile '{}': {err}", config.profile);
            Response {
                status: 500,
                body: error_page(&err),
            }
        }
    }
}

fn error_page(err: &BioError) -> String {
    let mut report = String::new();
    let handler = GraphicalReportHandler::new_themed(GraphicalTheme::unicode_nocolor());
    if handler.render_report(&mut report, err).is_err() {
        report = err.to_string();
    }
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head><meta charset=\"UTF-8\"><title>Error</title></head>\n<body>\n<h1>Error</h1>\n<pre>{}</pre>\n</body>\n</html>\n",
        escape_html(&report)
    )
}

/// Lists the store, turning a listing failure into an error banner.
fn list_files(store: &DocumentStore) -> (Vec<String>, Option<Banner>) {
    match store.list() {
        Ok(files) => (files, None),
        Err(err) => {
            error!("cannot list documents: {err}");
            (Vec::new(), Some(Banner::Error(format!("Error: {err}"))))
        }
    }
}

/// Loads `file` into `page`, or records why it could not be loaded.
fn load_into(page: &mut EditorPage, store: &DocumentStore, file: &str) {
    match store.load(file) {
        Ok(document) => {
            page.selected = Some(file.to_string());
            page.document = Some(document);
        }
        Err(err) => {
            warn!("cannot load '{file}' for editing: {err}");
            page.banner = Some(Banner::Error(format!("Error: {err}")));
        }
    }
}

/// The editor's GET endpoint. `file` selects the document to load.
///
/// Identifiers outside the store listing produce an inline error and no form.
pub fn editor_get(store: &DocumentStore, file: Option<&str>) -> EditorPage {
    let (files, banner) = list_files(store);
    let mut page = EditorPage {
        files,
        banner,
        ..EditorPage::default()
    };
    let Some(file) = file else {
        return page;
    };
    if page.files.iter().any(|f| f == file) {
        load_into(&mut page, store, file);
    } else {
        warn!("rejected edit target '{file}'");
        page.banner = Some(Banner::Error(INVALID_EDIT_TARGET.to_string()));
    }
    page
}

/// [`editor_get`] with the `file` parameter taken from a raw query string.
pub fn editor_get_query(store: &DocumentStore, query: &str) -> EditorPage {
    let params = Submission::parse(query);
    editor_get(store, params.text("file"))
}

/// The editor's POST endpoint.
///
/// Rebuilds the whole document from the form `body` and overwrites the file
/// named by its `file_to_save` field, then reloads that file so the form shows
/// exactly what was stored.
pub fn editor_post(store: &DocumentStore, body: &str) -> EditorPage {
    let submission = Submission::parse(body);
    let (files, banner) = list_files(store);
    let mut page = EditorPage {
        files,
        banner,
        ..EditorPage::default()
    };

    let target = submission
        .text("file_to_save")
        .filter(|file| page.files.iter().any(|f| f == file));
    let Some(file) = target else {
        warn!("rejected save target {:?}", submission.text("file_to_save"));
        page.banner = Some(Banner::Error(INVALID_SAVE_TARGET.to_string()));
        return page;
    };

    let document = submission.to_document();
    page.banner = Some(match store.save(file, &document) {
        Ok(()) => {
            info!("editor saved '{file}'");
            Banner::Saved {
                file: file.to_string(),
            }
        }
        Err(StoreError::Forbidden { .. }) => Banner::Error(INVALID_SAVE_TARGET.to_string()),
        Err(err) => {
            error!("editor failed to save '{file}': {err}");
            Banner::Error(WRITE_FAILED.to_string())
        }
    });

    let banner = page.banner.take();
    load_into(&mut page, store, file);
    if page.banner.is_none() {
        page.banner = banner;
    }
    page
}

/// The editor endpoint as a response. The editor always answers 200; failures
/// are reported in the page itself.
pub fn editor_response(page: &EditorPage) -> Response {
    Response::ok(page.to_html())
}
