//! Blocking HTTP client for the two recipe downloads.

use std::time::Duration;

use crate::error::{FetchError, Result};

const USER_AGENT: &str = concat!("blaspack/", env!("CARGO_PKG_VERSION"));

/// Build the blocking client with the recipe's timeouts.
///
/// The overall timeout is generous: the source archive is tens of
/// megabytes and may come off a slow mirror.
pub fn client() -> Result<reqwest::blocking::Client> {
    let client = reqwest::blocking::Client::builder()
        .user_agent(USER_AGENT)
        .connect_timeout(Duration::from_secs(60))
        .timeout(Duration::from_secs(600))
        .build()?;
    Ok(client)
}

/// GET a URL and return the whole response body.
///
/// A non-success status is an error; redirects are followed by the client.
pub fn get_bytes(client: &reqwest::blocking::Client, url: &str) -> Result<Vec<u8>> {
    let response = client.get(url).send()?;
    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::HttpStatus {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }
    Ok(response.bytes()?.to_vec())
}
