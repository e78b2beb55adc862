//! Inline-credential authentication for `https` stores.

use crate::auth::{Authenticator, Credentials, ParameterSet, SignedRequest};
use crate::clients::HttpMethod;
use crate::config::QueryAuthMode;

/// Sends the consumer key and secret as plain credentials.
///
/// Only used over TLS. In [`QueryAuthMode::QueryString`] mode the credentials
/// become the `consumer_key` and `consumer_secret` query parameters; in
/// [`QueryAuthMode::Header`] mode the query string carries only the caller's
/// parameters and the credentials go into an HTTP Basic auth header.
#[derive(Clone, Copy, Debug)]
pub struct QueryStringAuthenticator<'a> {
    credentials: &'a Credentials,
    mode: QueryAuthMode,
}

impl<'a> QueryStringAuthenticator<'a> {
    /// Creates an authenticator borrowing `credentials`.
    #[must_use]
    pub const fn new(credentials: &'a Credentials, mode: QueryAuthMode) -> Self {
        Self { credentials, mode }
    }
}

impl Authenticator for QueryStringAuthenticator<'_> {
    fn name(&self) -> &'static str {
        self.mode.as_str()
    }

    fn authenticate(
        &self,
        method: HttpMethod,
        url: &str,
        mut params: ParameterSet,
    ) -> SignedRequest {
        match self.mode {
            QueryAuthMode::QueryString => {
                params.set("consumer_key", self.credentials.consumer_key().as_ref());
                params.set(
                    "consumer_secret",
                    self.credentials.consumer_secret().as_ref(),
                );
                SignedRequest::new(method, url, params.encode(), None)
            }
            QueryAuthMode::Header => SignedRequest::new(
                method,
                url,
                params.encode(),
                Some(self.credentials.clone()),
            ),
        }
    }
}
