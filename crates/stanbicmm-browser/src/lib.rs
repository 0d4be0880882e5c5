//! Form-capable HTTP session engine for the Stanbic Mobile Money client.
//!
//! The portal is a classic server-rendered web application: state lives in
//! cookies, navigation happens through redirects, and the interesting
//! operations are form submissions. This crate provides the small engine the
//! client needs for that: a cookie-persisting HTTP session that reports the
//! final landing URL of every request, and HTML form discovery with
//! submittable payloads.
//!
//! # Main types
//!
//! - [`Browser`] — Cookie session with redirect-following GET/POST.
//! - [`Page`] — A fetched page: landing URL plus raw body.
//! - [`Form`] — A named HTML form lifted out of a page, ready to fill in
//!   and submit.

/// The cookie session engine.
pub mod browser;
/// HTML form discovery and submission payloads.
pub mod form;

pub use browser::{Browser, Page};
pub use form::{find_form, Form, FormField};
