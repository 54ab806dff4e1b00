//! Quote endpoints: list/search, create, update, vote.

use reqwest::{Method, StatusCode};
use shared::{Quote, QuoteBody, QuoteListResponse, SortBy};

use crate::core::error::Result;

use super::client::{send_expect, send_json, ApiClient};

/// `GET /quote?content=&sortBy=`. Both parameters are always sent; an empty
/// `content` means no filter.
pub async fn list(
    api: &ApiClient,
    token: &str,
    content: &str,
    sort_by: SortBy,
) -> Result<Vec<Quote>> {
    let request = api
        .request(Method::GET, "/quote", Some(token))
        .query(&[("content", content), ("sortBy", sort_by.as_str())]);
    let response: QuoteListResponse = send_json(request, StatusCode::OK).await?;
    tracing::debug!(count = response.data.len(), "fetched quotes");
    Ok(response.data)
}

/// `POST /quote`, 201 on success.
pub async fn create(api: &ApiClient, token: &str, body: &QuoteBody) -> Result<()> {
    tracing::info!("creating quote");
    let request = api.request(Method::POST, "/quote", Some(token)).json(body);
    send_expect(request, StatusCode::CREATED).await
}

/// `PATCH /quote/:id`, 200 on success.
pub async fn update(api: &ApiClient, token: &str, id: &str, body: &QuoteBody) -> Result<()> {
    tracing::info!(quote_id = %id, "updating quote");
    let request = api
        .request(Method::PATCH, &format!("/quote/{}", id), Some(token))
        .json(body);
    send_expect(request, StatusCode::OK).await
}

/// `PATCH /quote/vote/:id`, 200, no request body. The backend toggles the
/// current user's vote.
pub async fn vote(api: &ApiClient, token: &str, id: &str) -> Result<()> {
    tracing::info!(quote_id = %id, "toggling vote");
    let request = api.request(Method::PATCH, &format!("/quote/vote/{}", id), Some(token));
    send_expect(request, StatusCode::OK).await
}
