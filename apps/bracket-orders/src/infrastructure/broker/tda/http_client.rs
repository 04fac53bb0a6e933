//! HTTP client wrapper. One request per call, no retry.

use std::path::PathBuf;

use reqwest::header::LOCATION;
use reqwest::{Client, Response, StatusCode, Url};

use super::api_types::{TdaOrderRequest, TdaQuoteResponse};
use super::config::TdaConfig;
use super::error::TdaError;
use super::token::read_access_token;

/// Outcome of an accepted order POST.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacedOrder {
    /// Order id from the `Location` header.
    pub order_id: Option<String>,
    /// HTTP status (200 or 201).
    pub status: u16,
}

/// HTTP client for the TDA REST API.
#[derive(Debug, Clone)]
pub struct TdaHttpClient {
    client: Client,
    base_url: Url,
    api_key: String,
    token_path: PathBuf,
}

impl TdaHttpClient {
    /// Create a new HTTP client from config.
    pub fn new(config: &TdaConfig) -> Result<Self, TdaError> {
        let base_url = Url::parse(&config.base_url)
            .map_err(|e| TdaError::InvalidConfig(format!("base_url '{}': {e}", config.base_url)))?;
        if base_url.cannot_be_a_base() {
            return Err(TdaError::InvalidConfig(format!(
                "base_url '{}' cannot be a base",
                config.base_url
            )));
        }

        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| TdaError::Network(e.to_string()))?;

        Ok(Self {
            client,
            base_url,
            api_key: config.api_key.clone(),
            token_path: config.token_path.clone(),
        })
    }

    /// `GET /v1/marketdata/{symbol}/quotes`.
    ///
    /// Only 200 counts as a quote.
    pub async fn get_quotes(&self, symbol: &str) -> Result<TdaQuoteResponse, TdaError> {
        let url = self.endpoint(&["v1", "marketdata", symbol, "quotes"]);
        let token = read_access_token(&self.token_path)?;

        let response = self
            .client
            .get(url)
            .bearer_auth(token)
            .query(&[("apikey", self.api_key.as_str())])
            .send()
            .await
            .map_err(|e| TdaError::Network(e.to_string()))?;

        let status = response.status();
        if status != StatusCode::OK {
            let payload = error_payload(response).await;
            return Err(match status {
                StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                    TdaError::AuthenticationFailed {
                        status: status.as_u16(),
                        payload,
                    }
                }
                _ => TdaError::QuoteRequestFailed {
                    status: status.as_u16(),
                    payload,
                },
            });
        }

        let text = response
            .text()
            .await
            .map_err(|e| TdaError::Network(e.to_string()))?;
        serde_json::from_str(&text).map_err(|e| TdaError::JsonParse(e.to_string()))
    }

    /// `POST /v1/accounts/{account_id}/orders`.
    ///
    /// Only 200 and 201 count as accepted.
    pub async fn place_order(
        &self,
        account_id: &str,
        order: &TdaOrderRequest,
    ) -> Result<PlacedOrder, TdaError> {
        let url = self.endpoint(&["v1", "accounts", account_id, "orders"]);
        let token = read_access_token(&self.token_path)?;

        let response = self
            .client
            .post(url)
            .bearer_auth(token)
            .json(order)
            .send()
            .await
            .map_err(|e| TdaError::Network(e.to_string()))?;

        let status = response.status();
        match status {
            StatusCode::OK | StatusCode::CREATED => {
                let order_id = response
                    .headers()
                    .get(LOCATION)
                    .and_then(|v| v.to_str().ok())
                    .and_then(order_id_from_location);
                Ok(PlacedOrder {
                    order_id,
                    status: status.as_u16(),
                })
            }
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                Err(TdaError::AuthenticationFailed {
                    status: status.as_u16(),
                    payload: error_payload(response).await,
                })
            }
            _ => Err(TdaError::OrderRejected {
                status: status.as_u16(),
                payload: error_payload(response).await,
            }),
        }
    }

    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }
}

async fn error_payload(response: Response) -> String {
    response.text().await.unwrap_or_default()
}

/// Last path segment of a `Location` header, e.g.
/// `.../accounts/123/orders/456` -> `456`.
fn order_id_from_location(location: &str) -> Option<String> {
    location
        .trim_end_matches('/')
        .rsplit('/')
        .next()
        .filter(|id| !id.is_empty())
        .map(str::to_string)
}
