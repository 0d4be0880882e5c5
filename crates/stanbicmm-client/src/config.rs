use serde::{Deserialize, Serialize};

const PRODUCTION_BASE: &str = "https://mobilemoney.stanbic.com";

/// Locations of the portal endpoints the client talks to.
///
/// Defaults point at the production portal. A test (or a staging
/// deployment) derives a config from another base with
/// [`PortalConfig::for_base_url`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortalConfig {
    /// Login form submission endpoint. Doubles as the login-page prefix
    /// when classifying where a request landed.
    #[serde(default = "default_login_url")]
    pub login_url: String,

    /// The transaction-history display page that serves the history form.
    #[serde(default = "default_history_url")]
    pub history_url: String,

    /// The CSV export endpoint history queries are submitted to.
    #[serde(default = "default_export_url")]
    pub export_url: String,

    /// Prefix of the portal's generic error page.
    #[serde(default = "default_error_url")]
    pub error_url: String,
}

fn default_login_url() -> String {
    format!("{PRODUCTION_BASE}/do/login")
}

fn default_history_url() -> String {
    format!("{PRODUCTION_BASE}/do/member/accountHistory?advanced=true&memberId=0&typeId=5")
}

fn default_export_url() -> String {
    format!("{PRODUCTION_BASE}/do/exportAccountHistoryToCsv")
}

fn default_error_url() -> String {
    format!("{PRODUCTION_BASE}/do/error")
}

impl Default for PortalConfig {
    fn default() -> Self {
        Self {
            login_url: default_login_url(),
            history_url: default_history_url(),
            export_url: default_export_url(),
            error_url: default_error_url(),
        }
    }
}

impl PortalConfig {
    /// Derive every endpoint from a base URL. Trailing slashes on the base
    /// are tolerated.
    pub fn for_base_url(base: &str) -> Self {
        let base = base.trim_end_matches('/');
        Self {
            login_url: format!("{base}/do/login"),
            history_url: format!("{base}/do/member/accountHistory?advanced=true&memberId=0&typeId=5"),
            export_url: format!("{base}/do/exportAccountHistoryToCsv"),
            error_url: format!("{base}/do/error"),
        }
    }
}
