use crate::icons::Platform;
use crate::resolver::Resolver;
use crate::style::StyleVars;
use crate::utils::escape_html;
use crate::value::Value;
use log::debug;
use std::fmt::Write;

pub const DEFAULT_TITLE: &str = "My Profile";
pub const DEFAULT_LINK_LABEL: &str = "Link";
pub const DEFAULT_LINK_URL: &str = "#";

/// The parts of the incoming request the page needs for its canonical URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    pub https: bool,
    pub host: String,
    pub request_uri: String,
}

impl PageRequest {
    pub fn new(https: bool, host: impl Into<String>, request_uri: impl Into<String>) -> Self {
        PageRequest {
            https,
            host: host.into(),
            request_uri: request_uri.into(),
        }
    }

    pub fn canonical_url(&self) -> String {
        let scheme = if self.https { "https" } else { "http" };
        format!("{scheme}://{}{}", self.host, self.request_uri)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        PageRequest::new(false, "localhost", "/")
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LinkButton {
    pub label: String,
    pub url: String,
    pub icon: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SocialLink {
    /// The name exactly as stored; used as the accessible label.
    pub name: String,
    pub url: String,
    pub platform: Option<Platform>,
}

impl SocialLink {
    pub fn icon(&self) -> &'static str {
        self.platform.map_or("", Platform::icon)
    }
}

/// Everything the profile page shows, resolved from one document.
///
/// Fields hold raw document text; escaping happens in [`ProfilePage::to_html`].
#[derive(Debug, Clone, PartialEq)]
pub struct ProfilePage {
    pub title: String,
    pub subtitle: String,
    pub page_title: String,
    pub meta_description: String,
    pub canonical_url: String,
    pub profile_image: Option<String>,
    pub links: Vec<LinkButton>,
    pub socials: Vec<SocialLink>,
    pub style: StyleVars,
}

impl ProfilePage {
    pub fn from_document(document: &Value, request: &PageRequest) -> ProfilePage {
        let doc = Resolver::new(document);

        let title = doc.str("profile_info.title", DEFAULT_TITLE);
        let subtitle = doc.str("profile_info.subtitle", "");
        let page_title = if subtitle.is_empty() {
            title.clone()
        } else {
            format!("{title} | {subtitle}")
        };
        let meta_description = if subtitle.is_empty() {
            format!("A collection of important links for {title}.")
        } else {
            subtitle.clone()
        };

        let links: Vec<LinkButton> = doc
            .seq("main_links")
            .iter()
            .map(|item| {
                let link = Resolver::new(item);
                LinkButton {
                    label: link.str("label", DEFAULT_LINK_LABEL),
                    url: link.str("url", DEFAULT_LINK_URL),
                    icon: link.opt_str("icon"),
                }
            })
            .collect();

        let socials: Vec<SocialLink> = doc
            .seq("social_media_links")
            .iter()
            .map(|item| {
                let social = Resolver::new(item);
                let name = social.str("name", "");
                SocialLink {
                    platform: Platform::from_name(&name),
                    url: social.str("url", DEFAULT_LINK_URL),
                    name,
                }
            })
            .collect();

        debug!(
            "resolved page '{page_title}' with {} links and {} socials",
            links.len(),
            socials.len()
        );

        ProfilePage {
            profile_image: doc.opt_str("profile_info.profile_image"),
            canonical_url: request.canonical_url(),
            style: StyleVars::derive(document),
            title,
            subtitle,
            page_title,
            meta_description,
            links,
            socials,
        }
    }

    /// Renders the complete HTML document.
    pub fn to_html(&self) -> String {
        let page_title = escape_html(&self.page_title);
        let description = escape_html(&self.meta_description);
        let canonical = escape_html(&self.canonical_url);
        let title = escape_html(&self.title);

        let mut image_meta = String::new();
        let mut image_tag = String::new();
        if let Some(url) = &self.profile_image {
            let url = escape_html(url);
            let _ = write!(
                image_meta,
                "\n    <meta property=\"og:image\" content=\"{url}\">\n    <meta name=\"twitter:image\" content=\"{url}\">"
            );
            image_tag = format!(
                "\n            <img src=\"{url}\" alt=\"Profile Picture for {title}\" class=\"profile-image\">"
            );
        }

        let font_links = match &self.style.font_url {
            Some(url) => format!(
                "\n    <link rel=\"preconnect\" href=\"https://fonts.gstatic.com\" crossorigin>\n    <link href=\"{}\" rel=\"stylesheet\">",
                escape_html(url)
            ),
            None => String::new(),
        };

        let subtitle_tag = if self.subtitle.is_empty() {
            String::new()
        } else {
            format!(
                "\n            <p class=\"profile-subtitle\">{}</p>",
                escape_html(&self.subtitle)
            )
        };

        format!(
            r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{page_title}</title>
    <meta name="description" content="{description}">
    <link rel="canonical" href="{canonical}" />
    <meta property="og:type" content="website">
    <meta property="og:url" content="{canonical}">
    <meta property="og:title" content="{page_title}">
    <meta property="og:description" content="{description}">
    <meta name="twitter:card" content="summary_large_image">
    <meta property="twitter:url" content="{canonical}">
    <meta name="twitter:title" content="{page_title}">
    <meta name="twitter:description" content="{description}">{image_meta}{font_links}
    <style>
{root_css}
        body {{
            font-family: var(--font-family);
            font-size: var(--font-size);
            color: var(--text-color);
            {background}
        }}
{base_css}
{button_css}
    </style>
</head>
<body>
    <main class="container">
        <header class="profile">{image_tag}
            <h1 class="profile-title">{title}</h1>{subtitle_tag}
        </header>
        <section class="links">
{links}        </section>
        <footer class="socials">
{socials}        </footer>
    </main>
</body>
</html>
"#,
            root_css = self.style.root_css(),
            background = self.style.body_background(),
            base_css = PAGE_CSS,
            button_css = self.style.button_css(),
            links = self.links_html(),
            socials = self.socials_html(),
        )
    }

    fn links_html(&self) -> String {
        let mut out = String::new();
        for link in &self.links {
            let icon = link
                .icon
                .as_deref()
                .map(|icon| format!("<span class=\"icon\">{}</span>", escape_html(icon)))
                .unwrap_or_default();
            let _ = writeln!(
                out,
                "            <a href=\"{}\" class=\"link-button\" target=\"_blank\" rel=\"noopener noreferrer\">{icon}<span>{}</span></a>",
                escape_html(&link.url),
                escape_html(&link.label),
            );
        }
        out
    }

    fn socials_html(&self) -> String {
        let mut out = String::new();
        for social in &self.socials {
            let _ = writeln!(
                out,
                "            <a href=\"{}\" class=\"social-icon\" target=\"_blank\" rel=\"noopener noreferrer\" aria-label=\"{}\">{}</a>",
                escape_html(&social.url),
                escape_html(&social.name),
                social.icon(),
            );
        }
        out
    }
}

/// Renders the public page for `document`.
pub fn render_page(document: &Value, request: &PageRequest) -> String {
    ProfilePage::from_document(document, request).to_html()
}

const PAGE_CSS: &str = r#"        * { margin: 0; padding: 0; box-sizing: border-box; }
        body {
            display: flex;
            justify-content: center;
            align-items: flex-start;
            min-height: 100vh;
            padding: 40px 20px;
        }
        .container {
            max-width: 680px;
            width: 100%;
            display: flex;
            flex-direction: column;
            align-items: center;
            gap: 20px;
        }
        .profile { text-align: center; margin-bottom: 20px; }
        .profile-image {
            width: 120px;
            height: 120px;
            border-radius: 50%;
            object-fit: cover;
            margin-bottom: 16px;
            box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.1), 0 4px 6px -4px rgba(0, 0, 0, 0.1);
        }
        .profile-title { font-size: 2.25em; font-weight: 700; }
        .profile-subtitle { font-size: 1.1em; color: var(--text-color); opacity: 0.8; margin-top: 4px; }
        .links { width: 100%; display: flex; flex-direction: column; gap: 16px; }
        .link-button {
            display: flex;
            align-items: center;
            justify-content: center;
            padding: 16px 20px;
            text-decoration: none;
            font-weight: 700;
            font-size: 1em;
            width: 100%;
            border-radius: var(--button-border-radius);
            box-shadow: var(--button-shadow);
            transition: transform 0.2s ease, background-color 0.2s ease;
            position: relative;
        }
        .link-button .icon { margin-right: 12px; font-size: 1.2em; }
        .socials { display: flex; gap: 24px; margin-top: 20px; }
        .social-icon {
            color: var(--text-color);
            opacity: 0.7;
            transition: opacity 0.2s ease, transform 0.2s ease;
        }
        .social-icon:hover { opacity: 1; color: var(--accent-color); transform: scale(1.1); }"#;
