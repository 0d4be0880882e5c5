use crate::form::{find_form, Form};
use reqwest::redirect::Policy;
use reqwest::Url;
use stanbicmm_core::{StanbicError, StanbicResult};
use std::time::Duration;
use tracing::debug;

const USER_AGENT: &str = concat!("stanbicmm/", env!("CARGO_PKG_VERSION"));

/// A fetched page: the URL the request finally landed on after following
/// the redirect chain, plus the raw body text.
///
/// The portal signals outcomes by where it sends you rather than by status
/// code, so the landing URL is the piece callers classify on.
#[derive(Debug, Clone)]
pub struct Page {
    /// Landing URL after redirects.
    pub url: Url,
    /// Raw response body.
    pub body: String,
}

impl Page {
    /// Locate a form by its `name` attribute in this page's body.
    pub fn form(&self, name: &str) -> Option<Form> {
        find_form(&self.body, name)
    }
}

/// A form-capable HTTP session engine.
///
/// Keeps cookies across requests and follows redirects, reporting the final
/// landing URL of every request. One `Browser` is one portal session; it is
/// not safe to share across clients unless the caller injects the same
/// underlying client into each on purpose.
pub struct Browser {
    http: reqwest::Client,
}

impl Browser {
    /// Create an engine with a fresh cookie jar.
    pub fn new() -> Self {
        let http = reqwest::Client::builder()
            .cookie_store(true)
            .timeout(Duration::from_secs(30))
            .redirect(Policy::limited(10))
            .user_agent(USER_AGENT)
            .build()
            .expect("Failed to create HTTP client");
        Self { http }
    }

    /// Wrap an externally owned client.
    ///
    /// Callers that cache a `reqwest::Client` (to reuse one portal session
    /// across client instances, saving a login round trip) inject it here.
    /// The client should have a cookie store enabled, or the session will
    /// not stick.
    pub fn with_client(http: reqwest::Client) -> Self {
        Self { http }
    }

    /// GET a URL, following redirects.
    pub async fn get(&self, url: &str) -> StanbicResult<Page> {
        debug!(url = %url, "GET");
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| StanbicError::Http(e.to_string()))?;
        read_page(response).await
    }

    /// POST form-encoded fields to a URL, following redirects.
    pub async fn post(&self, url: &str, fields: &[(String, String)]) -> StanbicResult<Page> {
        debug!(url = %url, fields = fields.len(), "POST");
        let response = self
            .http
            .post(url)
            .form(fields)
            .send()
            .await
            .map_err(|e| StanbicError::Http(e.to_string()))?;
        read_page(response).await
    }

    /// Submit a form's click payload to `url` with a POST, regardless of
    /// the method the form itself declares.
    pub async fn submit(&self, url: &str, form: &Form) -> StanbicResult<Page> {
        self.post(url, &form.payload()).await
    }
}

impl Default for Browser {
    fn default() -> Self {
        Self::new()
    }
}

async fn read_page(response: reqwest::Response) -> StanbicResult<Page> {
    let status = response.status();
    let url = response.url().clone();

    if !status.is_success() {
        return Err(StanbicError::Http(format!("status {status} from {url}")));
    }

    let body = response
        .text()
        .await
        .map_err(|e| StanbicError::Http(e.to_string()))?;
    debug!(landed = %url, bytes = body.len(), "response");

    Ok(Page { url, body })
}
