use std::rc::Rc;

use lims_proto::prelude::{PageResponse, SortDirection, Sorter};
use reqwest::StatusCode;

use crate::utils::error::{AppError, Result};

mod auth;
mod reports;

pub use auth::{LocalStorageToken, StaticToken, TokenProvider};

/// API client for the LIMS backend, authenticated with a bearer token.
#[derive(Clone)]
pub struct ApiClient {
    tokens: Rc<dyn TokenProvider>,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiClient {
    /// Client reading the token from local storage, or using the token
    /// baked in at build time through `LIMS_API_TOKEN`.
    pub fn new() -> Self {
        match option_env!("LIMS_API_TOKEN") {
            Some(token) => Self::with_tokens(Rc::new(StaticToken(token.to_string()))),
            None => Self::with_tokens(Rc::new(LocalStorageToken::default())),
        }
    }

    pub fn with_tokens(tokens: Rc<dyn TokenProvider>) -> Self {
        Self { tokens }
    }

    /// Origin of the current page.
    fn get_origin() -> Result<String> {
        web_sys::window()
            .ok_or_else(|| AppError::Api("No window object".to_string()))?
            .location()
            .origin()
            .map_err(|_| AppError::Api("Failed to get origin".to_string()))
    }

    fn build_url(path: &str) -> Result<String> {
        Ok(format!("{}{}", Self::get_origin()?, path))
    }

    async fn get_request(&self, path: &str, query: &[(&str, String)]) -> Result<String> {
        let url = Self::build_url(path)?;
        let mut request = reqwest::Client::new().get(&url).query(query);
        match self.tokens.token() {
            Some(token) => request = request.bearer_auth(token),
            None => log::debug!("no token for GET {path}"),
        }

        let response = request.send().await?;
        let status = response.status();
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Err(AppError::Auth(format!("HTTP {status} for {path}")));
        }
        if !status.is_success() {
            return Err(AppError::Api(format!("HTTP error: {status}")));
        }

        response.text().await.map_err(|e| AppError::Api(e.to_string()))
    }

    fn parse_json<T: serde::de::DeserializeOwned>(response: &str) -> Result<T> {
        serde_json::from_str(response)
            .map_err(|e| AppError::Json(format!("JSON parse error: {}", e)))
    }

    /// One page of a paginated endpoint.
    pub async fn get_page<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        page: usize,
        size: usize,
    ) -> Result<PageResponse<T>> {
        self.get_page_sorted(path, page, size, None).await
    }

    /// One page, ordered by `sorter` on the server.
    pub async fn get_page_sorted<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        page: usize,
        size: usize,
        sorter: Option<&Sorter>,
    ) -> Result<PageResponse<T>> {
        let response = self.get_request(path, &page_query(page, size, sorter)).await?;
        Self::parse_json(&response)
    }

    /// An unpaginated list endpoint.
    pub async fn get_list<T: serde::de::DeserializeOwned>(&self, path: &str) -> Result<Vec<T>> {
        let response = self.get_request(path, &[]).await?;
        Self::parse_json(&response)
    }
}

/// Query string of a page request: `page`, `size` and, when sorted,
/// `sort` and `direction`.
pub fn page_query(page: usize, size: usize, sorter: Option<&Sorter>) -> Vec<(&'static str, String)> {
    let mut query = vec![("page", page.to_string()), ("size", size.to_string())];
    if let Some(sorter) = sorter {
        query.push(("sort", sorter.column.clone()));
        query.push((
            "direction",
            match sorter.direction {
                SortDirection::Asc => "asc",
                SortDirection::Desc => "desc",
            }
            .to_string(),
        ));
    }
    query
}
