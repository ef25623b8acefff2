//! Request throttling and interception hooks.
//!
//! The template doesn't touch the network, so both are passthroughs: they
//! record that the host registered them and otherwise leave traffic alone.
//! They exist so that extensions copied from the template have the hooks in
//! place.

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

/// An outgoing HTTP request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Request {
    pub url: String,
    pub method: String,
    pub headers: BTreeMap<String, String>,
    pub body: Option<Vec<u8>>,
}
impl Request {
    pub fn get(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            method: "GET".to_string(),
            ..Self::default()
        }
    }
}

/// The head of an HTTP response; the body is passed separately.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Response {
    pub status: u16,
    pub headers: BTreeMap<String, String>,
}

/// Tracks whether a hook has been registered with the host.
#[derive(Debug, Default)]
struct Registration(AtomicBool);
impl Registration {
    /// Returns `true` if this call performed the registration.
    fn register(&self) -> bool {
        !self.0.swap(true, Ordering::AcqRel)
    }

    fn is_registered(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }
}

/// Rewrites requests before they are sent and response bodies after they
/// arrive.
#[async_trait]
pub trait Interceptor: Send + Sync {
    fn id(&self) -> &str;

    async fn intercept_request(&self, request: Request) -> Request;

    async fn intercept_response(&self, request: &Request, response: &Response, data: Vec<u8>) -> Vec<u8>;

    /// Asks the host to route this extension's traffic through the interceptor.
    fn register_interceptor(&self);

    fn is_registered(&self) -> bool;
}

/// Interceptor that hands everything back untouched.
#[derive(Debug)]
pub struct MainInterceptor {
    id: String,
    registration: Registration,
}
impl MainInterceptor {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            registration: Registration::default(),
        }
    }
}

#[async_trait]
impl Interceptor for MainInterceptor {
    fn id(&self) -> &str {
        &self.id
    }

    async fn intercept_request(&self, request: Request) -> Request {
        tracing::trace!(interceptor = %self.id, url = %request.url, "Passing request through unchanged");
        request
    }

    async fn intercept_response(&self, request: &Request, response: &Response, data: Vec<u8>) -> Vec<u8> {
        tracing::trace!(
            interceptor = %self.id,
            url = %request.url,
            status = response.status,
            bytes = data.len(),
            "Passing response through unchanged"
        );
        data
    }

    fn register_interceptor(&self) {
        if self.registration.register() {
            tracing::info!(interceptor = %self.id, "Interceptor registered");
        }
    }

    fn is_registered(&self) -> bool {
        self.registration.is_registered()
    }
}

/// Throttling parameters for a [`BasicRateLimiter`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimitOptions {
    /// Requests allowed per buffer interval
    pub number_of_requests: u32,
    /// Length of the window the request budget applies to
    pub buffer_interval: Duration,
    /// Whether image downloads bypass the limiter
    pub ignore_images: bool,
}
impl Default for RateLimitOptions {
    fn default() -> Self {
        Self {
            number_of_requests: 15,
            buffer_interval: Duration::from_secs(10),
            ignore_images: true,
        }
    }
}

/// Request budget the host enforces on the extension's traffic.
///
/// The host does the throttling; this type only carries the options and
/// registers them.
#[derive(Debug)]
pub struct BasicRateLimiter {
    id: String,
    options: RateLimitOptions,
    registration: Registration,
}
impl BasicRateLimiter {
    pub fn new(id: impl Into<String>, options: RateLimitOptions) -> Self {
        Self {
            id: id.into(),
            options,
            registration: Registration::default(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn options(&self) -> &RateLimitOptions {
        &self.options
    }

    pub fn register_interceptor(&self) {
        if self.registration.register() {
            tracing::info!(
                limiter = %self.id,
                requests = self.options.number_of_requests,
                interval_secs = self.options.buffer_interval.as_secs(),
                ignore_images = self.options.ignore_images,
                "Rate limiter registered"
            );
        }
    }

    pub fn is_registered(&self) -> bool {
        self.registration.is_registered()
    }
}
