mod basic;
mod client;

pub use basic::BasicClient;
pub use client::HttpClient;

use tracing::debug;

use crate::error::{ImportError, Result};

/// Downloads `url` and returns the body as text.
///
/// # Errors
///
/// [`ImportError::Fetch`] for a non-success status, [`ImportError::Http`]
/// for transport failures.
pub async fn fetch_text<C: HttpClient>(client: &C, url: &str) -> Result<String> {
    let url = reqwest::Url::parse(url).map_err(|e| ImportError::Url(e.to_string()))?;
    let req = reqwest::Request::new(reqwest::Method::GET, url);

    let resp = client.execute(req).await?;
    let status = resp.status();
    if !status.is_success() {
        return Err(ImportError::Fetch {
            status: status.as_u16(),
        });
    }

    let text = resp.text().await?;
    debug!(bytes = text.len(), "Export downloaded");
    Ok(text)
}
