//! Server endpoints the page talks to.
//!
//! The contact form posts cross-origin to the leads API; which origin is a
//! deployment choice baked in at build time through `EVOLUTE_API_URL`.
//! Admin-panel delete links post same-origin to one of two historical
//! route prefixes, so the route is a template rather than a constant.

/// Hosted API origin.
pub const PRODUCTION_API_URL: &str = "https://evolute2.onrender.com";
/// API origin of a local `cargo run` of the server.
pub const LOCAL_API_URL: &str = "http://127.0.0.1:5000";

const ID_PLACEHOLDER: &str = "{id}";

/// API origin selected at build time.
#[must_use]
pub fn api_url() -> &'static str {
    option_env!("EVOLUTE_API_URL").unwrap_or(PRODUCTION_API_URL)
}

/// `{api_url}/api/leads`, tolerating a trailing slash on the origin.
#[must_use]
pub fn leads_endpoint(api_url: &str) -> String {
    format!("{}/api/leads", api_url.trim_end_matches('/'))
}

/// Deletion route with an `{id}` placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteEndpoint {
    template: String,
}

impl DeleteEndpoint {
    pub const DASHBOARD: &'static str = "/dashboard/deletar_lead/{id}";
    pub const PAINEL: &'static str = "/painel/deletar_lead/{id}";

    /// A template without `{id}` gets the id appended as a final segment.
    #[must_use]
    pub fn new(template: impl Into<String>) -> Self {
        let mut template = template.into();
        if !template.contains(ID_PLACEHOLDER) {
            if !template.ends_with('/') {
                template.push('/');
            }
            template.push_str(ID_PLACEHOLDER);
        }
        Self { template }
    }

    #[must_use]
    pub fn dashboard() -> Self {
        Self::new(Self::DASHBOARD)
    }

    #[must_use]
    pub fn painel() -> Self {
        Self::new(Self::PAINEL)
    }

    /// Pick the variant serving the admin page at `path`.
    #[must_use]
    pub fn for_page_path(path: &str) -> Self {
        if path.starts_with("/painel") { Self::painel() } else { Self::dashboard() }
    }

    #[must_use]
    pub fn template(&self) -> &str {
        &self.template
    }

    /// Route for one lead. Path-hostile characters in `id` are escaped.
    #[must_use]
    pub fn url_for(&self, id: &str) -> String {
        self.template.replace(ID_PLACEHOLDER, &urlencoding::encode(id))
    }
}

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;
