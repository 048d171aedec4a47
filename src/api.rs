//! Shop API Bindings
//!
//! HTTP bindings to the shop backend, one async function per endpoint.

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use thiserror::Error;

use crate::models::{MutationOutcome, Shop, UpdateMenuItemBody};

/// Characters escaped inside a single path segment. `/` and `%` included so
/// item names containing them stay one segment on the wire.
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'<')
    .add(b'>')
    .add(b'`')
    .add(b'#')
    .add(b'?')
    .add(b'{')
    .add(b'}')
    .add(b'/')
    .add(b'%');

fn encode_segment(segment: &str) -> String {
    utf8_percent_encode(segment, PATH_SEGMENT).to_string()
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Network(String),
    #[error("unexpected status {0}")]
    Status(u16),
    #[error("backend reported failure")]
    Rejected,
    #[error("malformed response body: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else {
            ApiError::Network(err.to_string())
        }
    }
}

/// `GET /shops/{id}`
pub async fn fetch_shop(base_url: &str, shop_id: &str) -> Result<Shop, ApiError> {
    let url = format!("{}/shops/{}", base_url, encode_segment(shop_id));
    let response = reqwest::get(&url).await?;
    if !response.status().is_success() {
        return Err(ApiError::Status(response.status().as_u16()));
    }
    Ok(response.json::<Shop>().await?)
}

/// `PUT /shops/update-menu-item/{id}/{name}`; a 2xx body with
/// `success: false` is reported as `ApiError::Rejected`
pub async fn update_menu_item(
    base_url: &str,
    shop_id: &str,
    name: &str,
    body: &UpdateMenuItemBody,
) -> Result<(), ApiError> {
    let url = format!(
        "{}/shops/update-menu-item/{}/{}",
        base_url,
        encode_segment(shop_id),
        encode_segment(name)
    );
    let response = reqwest::Client::new().put(&url).json(body).send().await?;
    if !response.status().is_success() {
        return Err(ApiError::Status(response.status().as_u16()));
    }
    let outcome = response.json::<MutationOutcome>().await?;
    if outcome.success {
        Ok(())
    } else {
        Err(ApiError::Rejected)
    }
}

/// `DELETE /shops/delete-menu-item/{id}/{name}`; same `success` handling as
/// the update call
pub async fn delete_menu_item(base_url: &str, shop_id: &str, name: &str) -> Result<(), ApiError> {
    let url = format!(
        "{}/shops/delete-menu-item/{}/{}",
        base_url,
        encode_segment(shop_id),
        encode_segment(name)
    );
    let response = reqwest::Client::new().delete(&url).send().await?;
    if !response.status().is_success() {
        return Err(ApiError::Status(response.status().as_u16()));
    }
    let outcome = response.json::<MutationOutcome>().await?;
    if outcome.success {
        Ok(())
    } else {
        Err(ApiError::Rejected)
    }
}
