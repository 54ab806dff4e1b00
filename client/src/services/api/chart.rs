//! Chart aggregate endpoints.

use reqwest::{Method, StatusCode};
use shared::{CreatorQuoteCount, TopVotedQuote};

use crate::core::error::Result;

use super::client::{send_json, ApiClient};

/// `GET /chart/quotes-by-creator`, a bare JSON array.
pub async fn quotes_by_creator(api: &ApiClient, token: &str) -> Result<Vec<CreatorQuoteCount>> {
    let request = api.request(Method::GET, "/chart/quotes-by-creator", Some(token));
    send_json(request, StatusCode::OK).await
}

/// `GET /chart/top-voted-quotes`, a bare JSON array.
pub async fn top_voted_quotes(api: &ApiClient, token: &str) -> Result<Vec<TopVotedQuote>> {
    let request = api.request(Method::GET, "/chart/top-voted-quotes", Some(token));
    send_json(request, StatusCode::OK).await
}
