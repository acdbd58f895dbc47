// Copyright (c) 2025 Ronan LE MEILLAT, SCTG Development
// This file is part of the ttfn project and is licensed under the
// SCTG Development Non-Commercial License v1.0 (see LICENSE.md for details).

use std::convert::Infallible;
use std::fmt::Debug;
use std::ops::Deref;

use rocket::request::{FromRequest, Outcome};
use rocket::Request;

/// Request guard giving the raw, undecoded query string of a request
///
/// Routes that accept arbitrary parameters use it to record what they
/// received without declaring each parameter.
///
/// # Usage in Routes
///
/// ```
/// use rocket::get;
/// use ttfn::web::RawQueryString;
///
/// #[get("/echo")]
/// fn echo(query: RawQueryString) -> String {
///     query.as_deref().unwrap_or("").to_string()
/// }
/// ```
pub struct RawQueryString(pub Option<String>);

impl Deref for RawQueryString {
    type Target = Option<String>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

#[rocket::async_trait]
impl<'r> FromRequest<'r> for RawQueryString {
    type Error = Infallible;

    /// Always succeeds, `None` when the request has no query
    async fn from_request(req: &'r Request<'_>) -> Outcome<Self, Self::Error> {
        Outcome::Success(RawQueryString(
            req.uri().query().map(|query| query.as_str().to_string()),
        ))
    }
}

impl Debug for RawQueryString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("RawQueryString").field(&self.0).finish()
    }
}
