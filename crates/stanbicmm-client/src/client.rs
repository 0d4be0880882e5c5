use crate::config::PortalConfig;
use crate::parser::parse_transactions;
use rust_decimal::Decimal;
use stanbicmm_browser::{find_form, Browser, Form, Page};
use stanbicmm_core::filter::portal_date;
use stanbicmm_core::{StanbicError, StanbicResult, TransactionFilter, TransactionRecord};
use tracing::{debug, info};

/// Name of the history form on the transactions page.
const HISTORY_FORM: &str = "accountHistoryForm";

// History form fields the filters map onto.
const FIELD_PERIOD_BEGIN: &str = "query(period).begin";
const FIELD_PERIOD_END: &str = "query(period).end";
const FIELD_TXN_NUMBER: &str = "query(transactionNumber)";

// Login form fields.
const FIELD_PRINCIPAL: &str = "principal";
const FIELD_PASSWORD: &str = "password";

/// A client for one Stanbic Mobile Money account.
///
/// Owns the credentials, the cookie session, and the cached export form
/// template. The portal reports outcomes by where it redirects you, so
/// every operation classifies its landing URL: the login page means the
/// session is stale ([`StanbicError::AuthRequired`]), the error page means
/// the request was rejected ([`StanbicError::Request`]). Operations that
/// hit a stale session re-authenticate and retry once, then give up.
///
/// There is no authenticated/unauthenticated flag; staleness is inferred
/// from each response, never tracked ahead of time.
pub struct StanbicClient {
    account: String,
    pin: String,
    browser: Browser,
    config: PortalConfig,
    export_form: Option<Form>,
}

impl StanbicClient {
    /// A client for the production portal.
    pub fn new(account: impl Into<String>, pin: impl Into<String>) -> Self {
        Self::with_config(account, pin, PortalConfig::default())
    }

    /// A client for a portal at specific endpoints.
    pub fn with_config(
        account: impl Into<String>,
        pin: impl Into<String>,
        config: PortalConfig,
    ) -> Self {
        Self {
            account: account.into(),
            pin: pin.into(),
            browser: Browser::new(),
            config,
            export_form: None,
        }
    }

    /// Replace the session engine, e.g. with one wrapping an externally
    /// cached client so an existing portal session is reused.
    pub fn with_browser(mut self, browser: Browser) -> Self {
        self.browser = browser;
        self
    }

    /// Log in with the account and PIN.
    ///
    /// A successful login redirects into the member area; a rejected one
    /// lands on the error page and fails with [`StanbicError::AuthDenied`].
    /// Not retried; fix the credentials and call again.
    pub async fn authenticate(&mut self) -> StanbicResult<()> {
        info!(account = %self.account, "authenticating");
        let fields = vec![
            (FIELD_PRINCIPAL.to_string(), self.account.clone()),
            (FIELD_PASSWORD.to_string(), self.pin.clone()),
        ];
        let page = self.browser.post(&self.config.login_url, &fields).await?;

        if page.url.as_str().starts_with(&self.config.error_url) {
            return Err(StanbicError::AuthDenied);
        }
        Ok(())
    }

    /// GET a URL within the portal and return the raw body.
    ///
    /// Landing on the login page fails with [`StanbicError::AuthRequired`];
    /// landing on the error page fails with [`StanbicError::Request`].
    pub async fn fetch_url(&mut self, url: &str) -> StanbicResult<String> {
        let page = self.browser.get(url).await?;
        self.classify(page)
    }

    /// POST a form's click payload to a URL and return the raw body,
    /// regardless of the method the form declares. Same landing
    /// classification as [`fetch_url`](Self::fetch_url).
    pub async fn submit_form(&mut self, url: &str, form: &Form) -> StanbicResult<String> {
        let page = self.browser.submit(url, form).await?;
        self.classify(page)
    }

    /// Fetch the account history as normalized records.
    ///
    /// The export form is discovered from the history page on first use and
    /// cached for the client's lifetime; each call fills a fresh copy with
    /// the supplied filters and submits it to the CSV export endpoint. A
    /// stale session is re-authenticated and the submission retried once; a
    /// second [`StanbicError::AuthRequired`] propagates.
    pub async fn get_transactions(
        &mut self,
        filter: &TransactionFilter,
    ) -> StanbicResult<Vec<TransactionRecord>> {
        let mut form = self.export_template().await?;

        if let Some(from_date) = filter.from_date {
            form.set(FIELD_PERIOD_BEGIN, portal_date(from_date));
        }
        if let Some(to_date) = filter.to_date {
            form.set(FIELD_PERIOD_END, portal_date(to_date));
        }
        if let Some(txn_ref) = &filter.txn_ref {
            form.set(FIELD_TXN_NUMBER, txn_ref.clone());
        }

        let export_url = self.config.export_url.clone();
        let body = match self.submit_form(&export_url, &form).await {
            Err(StanbicError::AuthRequired) => {
                self.authenticate().await?;
                self.submit_form(&export_url, &form).await?
            }
            other => other?,
        };

        let transactions = parse_transactions(&body)?;
        info!(count = transactions.len(), "fetched transactions");
        Ok(transactions)
    }

    /// Send money to another account. Not implemented yet; always fails
    /// with [`StanbicError::Unimplemented`].
    pub async fn make_payment(
        &mut self,
        _recipient: &str,
        _amount: Decimal,
        _description: Option<&str>,
    ) -> StanbicResult<()> {
        Err(StanbicError::Unimplemented("make_payment"))
    }

    /// A copy of the export form template, discovering and caching it from
    /// the history page on first use. The cached value is never mutated
    /// after creation; callers get a clone to fill in.
    async fn export_template(&mut self) -> StanbicResult<Form> {
        if let Some(template) = &self.export_form {
            return Ok(template.clone());
        }

        let history_url = self.config.history_url.clone();
        let body = match self.fetch_url(&history_url).await {
            Err(StanbicError::AuthRequired) => {
                self.authenticate().await?;
                self.fetch_url(&history_url).await?
            }
            other => other?,
        };

        let mut form = find_form(&body, HISTORY_FORM).ok_or_else(|| {
            StanbicError::Request(format!("history page has no `{HISTORY_FORM}` form"))
        })?;

        // the page serves the form for display; exports go to the CSV
        // endpoint as a POST
        form.method = "POST".to_string();
        form.action = self.config.export_url.clone();
        debug!(fields = form.fields().len(), "cached export form template");

        self.export_form = Some(form.clone());
        Ok(form)
    }

    /// Classify a response by its landing URL.
    fn classify(&self, page: Page) -> StanbicResult<String> {
        let landed = page.url.as_str();
        if landed.starts_with(&self.config.login_url) {
            debug!(landed = %landed, "landed on the login page");
            Err(StanbicError::AuthRequired)
        } else if landed.starts_with(&self.config.error_url) {
            debug!(landed = %landed, "landed on the error page");
            Err(StanbicError::Request(format!(
                "the portal redirected to its error page ({landed})"
            )))
        } else {
            Ok(page.body)
        }
    }
}
