pub mod api;
pub mod config;
pub mod editor;
pub mod error;
pub mod form;
pub mod icons;
pub mod lexer;
pub mod render;
pub mod resolver;
pub mod store;
pub mod style;
pub mod utils;
pub mod value;

pub use api::{editor_get, editor_post, render_endpoint, render_profile, Response};
pub use config::SiteConfig;
pub use form::{document_from_form, Submission};
pub use render::{render_page, PageRequest, ProfilePage};
pub use resolver::{resolve, Resolver};
pub use store::DocumentStore;
pub use value::Value;
