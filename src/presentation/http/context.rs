//! Request Context
//!
//! The slice of the request/response exchange the services are allowed to
//! touch: the cookie jar. Handlers extract it from the request and return it
//! as a response part so any cookies written by a service reach the client.

use std::convert::Infallible;

use axum::{
    extract::FromRequestParts,
    http::request::Parts,
    response::{IntoResponseParts, ResponseParts},
};
use axum_extra::extract::cookie::{Cookie, CookieJar};

/// Cookie-carrying request/response context
#[derive(Debug, Clone)]
pub struct HttpContext {
    cookies: CookieJar,
}

impl HttpContext {
    /// Context with no incoming cookies
    pub fn new() -> Self {
        Self::from_cookies(CookieJar::new())
    }

    pub fn from_cookies(cookies: CookieJar) -> Self {
        Self { cookies }
    }

    pub fn cookies(&self) -> &CookieJar {
        &self.cookies
    }

    /// Value of a cookie, whether it came with the request or was set since.
    pub fn cookie_value(&self, name: &str) -> Option<String> {
        self.cookies.get(name).map(|c| c.value().to_string())
    }

    /// Queue a cookie for the response
    pub fn append_cookie(&mut self, cookie: Cookie<'static>) {
        self.cookies = self.cookies.clone().add(cookie);
    }
}

impl Default for HttpContext {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> FromRequestParts<S> for HttpContext
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Self::from_cookies(CookieJar::from_headers(&parts.headers)))
    }
}

impl IntoResponseParts for HttpContext {
    type Error = Infallible;

    fn into_response_parts(self, res: ResponseParts) -> Result<ResponseParts, Self::Error> {
        self.cookies.into_response_parts(res)
    }
}
