use reqwest::header::{HeaderMap, HeaderName, HeaderValue};

use kitbag_core::config::HttpConfig;
use kitbag_core::http::HttpClient;

use super::cli::GetArgs;
use crate::error::CliError;

/// Parse repeated `KEY=VALUE` flags into a header map.
pub fn parse_headers(raw: &[String]) -> Result<HeaderMap, CliError> {
    let mut headers = HeaderMap::new();
    for item in raw {
        let (k, v) = item
            .split_once('=')
            .ok_or_else(|| CliError::Command(format!("header must be KEY=VALUE: {item}")))?;
        let name = HeaderName::from_bytes(k.trim().as_bytes())
            .map_err(|e| CliError::Command(format!("invalid header name {k:?}: {e}")))?;
        let value = HeaderValue::from_str(v.trim())
            .map_err(|e| CliError::Command(format!("invalid header value for {k:?}: {e}")))?;
        headers.append(name, value);
    }
    Ok(headers)
}

pub async fn get(cfg: &HttpConfig, args: &GetArgs) -> Result<Vec<u8>, CliError> {
    let headers = parse_headers(&args.headers)?;
    let client = HttpClient::new(cfg)?;
    let req = client.get_request(&args.url, Some(&headers));
    let (body, status) = client.execute(req).await?;
    if !status.is_success() {
        tracing::warn!(
            target: "kitbag.cli",
            stage = "get.status",
            url = %args.url,
            status = %status
        );
    }
    Ok(body.to_vec())
}
