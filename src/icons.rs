/// One of the social platforms a profile can link to.
///
/// The set is closed: names outside it are still rendered as links, just
/// without an icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    Email,
    Facebook,
    Github,
    Instagram,
    Linkedin,
    Pinterest,
    Threads,
    Tiktok,
    X,
    Youtube,
}

impl Platform {
    /// Every platform, in alphabetical order of its identifier.
    pub const ALL: [Platform; 10] = [
        Platform::Email,
        Platform::Facebook,
        Platform::Github,
        Platform::Instagram,
        Platform::Linkedin,
        Platform::Pinterest,
        Platform::Threads,
        Platform::Tiktok,
        Platform::X,
        Platform::Youtube,
    ];

    /// Case-insensitive lookup by identifier, e.g. `"GitHub"` or `"x"`.
    pub fn from_name(name: &str) -> Option<Platform> {
        let name = name.to_ascii_lowercase();
        Platform::ALL.into_iter().find(|p| p.id() == name)
    }

    /// The lower-case identifier stored in documents.
    pub fn id(self) -> &'static str {
        match self {
            Platform::Email => "email",
            Platform::Facebook => "facebook",
            Platform::Github => "github",
            Platform::Instagram => "instagram",
            Platform::Linkedin => "linkedin",
            Platform::Pinterest => "pinterest",
            Platform::Threads => "threads",
            Platform::Tiktok => "tiktok",
            Platform::X => "x",
            Platform::Youtube => "youtube",
        }
    }

    /// Inline SVG markup. Colors come from `currentColor`.
    pub fn icon(self) -> &'static str {
        match self {
            Platform::Email => EMAIL_SVG,
            Platform::Facebook => FACEBOOK_SVG,
            Platform::Github => GITHUB_SVG,
            Platform::Instagram => INSTAGRAM_SVG,
            Platform::Linkedin => LINKEDIN_SVG,
            Platform::Pinterest => PINTEREST_SVG,
            Platform::Threads => THREADS_SVG,
            Platform::Tiktok => TIKTOK_SVG,
            Platform::X => X_SVG,
            Platform::Youtube => YOUTUBE_SVG,
        }
    }
}

/// Icon markup for a platform name, or `""` when the name is not recognised.
pub fn social_icon(name: &str) -> &'static str {
    Platform::from_name(name).map_or("", Platform::icon)
}

const EMAIL_SVG: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="24" height="24" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"><path d="M4 4h16c1.1 0 2 .9 2 2v12c0 1.1-.9 2-2 2H4c-1.1 0-2-.9-2-2V6c0-1.1.9-2 2-2z"></path><polyline points="22,6 12,13 2,6"></polyline></svg>"#;
const FACEBOOK_SVG: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="24" height="24" viewBox="0 0 24 24" fill="currentColor"><path d="M18 2h-3a5 5 0 0 0-5 5v3H7v4h3v8h4v-8h3l1-4h-4V7a1 1 0 0 1 1-1h3z"></path></svg>"#;
const GITHUB_SVG: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="24" height="24" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"><path d="M9 19c-5 1.5-5-2.5-7-3m14 6v-3.87a3.37 3.37 0 0 0-.94-2.61c3.14-.35 6.44-1.54 6.44-7A5.44 5.44 0 0 0 20 4.77 5.07 5.07 0 0 0 19.91 1S18.73.65 16 2.48a13.38 13.38 0 0 0-7 0C6.27.65 5.09 1 5.09 1A5.07 5.07 0 0 0 5 4.77a5.44 5.44 0 0 0-1.5 3.78c0 5.42 3.3 6.61 6.44 7A3.37 3.37 0 0 0 9 18.13V22"></path></svg>"#;
const INSTAGRAM_SVG: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="24" height="24" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"><rect x="2" y="2" width="20" height="20" rx="5" ry="5"></rect><path d="M16 11.37A4 4 0 1 1 12.63 8 4 4 0 0 1 16 11.37z"></path><line x1="17.5" y1="6.5" x2="17.51" y2="6.5"></line></svg>"#;
const LINKEDIN_SVG: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="24" height="24" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"><path d="M16 8a6 6 0 0 1 6 6v7h-4v-7a2 2 0 0 0-2-2 2 2 0 0 0-2 2v7h-4v-7a6 6 0 0 1 6-6z"></path><rect x="2" y="9" width="4" height="12"></rect><circle cx="4" cy="4" r="2"></circle></svg>"#;
const PINTEREST_SVG: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="24" height="24" viewBox="0 0 24 24" fill="currentColor"><path d="M12.33.15c-6.23 0-9.4 4.32-9.4 8.73 0 3.82 2.22 7.2 5.53 8.35.1.07.24.03.28-.1l.36-1.53c.06-.27.02-.57-.12-.79a8.3 8.3 0 0 1-.9-3.2c0-2.3 1.67-4.7 4.1-4.7 2.2 0 3.5 1.6 3.5 3.82 0 2.6-1.2 5.3-2.9 5.3-.9 0-1.8-1-1.5-2.2l.6-2.5c.3-.9.9-1.9 2.2-1.9.9 0 2.2.8 2.2 2.8 0 3-2.3 5.4-5.3 5.4A6.3 6.3 0 0 1 6.6 13c0-1.2.5-2.2.8-2.7l1.9-8.2C9.5 1 10.4.15 12.33.15Z"/></svg>"#;
const THREADS_SVG: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="24" height="24" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="1.8" stroke-linecap="round" stroke-linejoin="round"><path d="M12 9.22A3.5 3.5 0 1 0 8.5 5.72a3.5 3.5 0 0 0 3.5 3.5Z"/><path d="M12 14.78a3.5 3.5 0 1 0 3.5 3.5 3.5 3.5 0 0 0-3.5-3.5Z"/><path d="M15.5 5.72c0-1.83-2-3.22-4.5-3.22s-4.5 1.39-4.5 3.22c0 .94.57 1.83 1.5 2.5M8.5 18.28c0 1.83 2 3.22 4.5 3.22s4.5-1.39 4.5-3.22c0-.94-.57-1.83-1.5-2.5"/></svg>"#;
const TIKTOK_SVG: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="24" height="24" viewBox="0 0 24 24" fill="currentColor"><path d="M20 9.2a6.3 6.3 0 0 1-3.4-1.1V15a5 5 0 1 1-5-5h2a3 3 0 1 0 3-3V5.4A6.3 6.3 0 0 1 12.5 4 6.5 6.5 0 1 1 20 9.2Z"/></svg>"#;
const X_SVG: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="24" height="24" viewBox="0 0 24 24" fill="currentColor"><path d="M18.901 1.153h3.68l-8.04 9.19L24 22.846h-7.406l-5.8-7.584-6.638 7.584H.474l8.6-9.83L0 1.154h7.594l5.243 6.932ZM17.61 20.644h2.039L6.486 3.24H4.298Z"/></svg>"#;
const YOUTUBE_SVG: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="24" height="24" viewBox="0 0 24 24" fill="currentColor"><path d="M21.58 7.19c-.23-.86-.9-1.52-1.76-1.75C18.26 5 12 5 12 5s-6.26 0-7.82.44C3.32 5.67 2.66 6.33 2.43 7.19 2 8.74 2 12 2 12s0 3.26.43 4.81c.23.86.9 1.52 1.76 1.75C5.74 19 12 19 12 19s6.26 0 7.82-.44c.86-.23 1.52-.9 1.76-1.75C22 15.26 22 12 22 12s0-3.26-.42-4.81zM9.54 15.57V8.43L15.65 12l-6.11 3.57z"/></svg>"#;
