//! Server-side body helpers, independent of any web framework.

use reqwest::header::{HeaderMap, CONTENT_TYPE};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde_json::error::Category;

use crate::error::{HttpError, MalformedRequest};

pub const CT_APP_JSON: &str = "application/json";
pub const CT_OCTET_STREAM: &str = "application/octet-stream";
pub const CT_FORM: &str = "application/x-www-form-urlencoded";

fn is_token_char(c: char) -> bool {
    c.is_ascii_graphic() && !"()<>@,;:\\\"/[]?=".contains(c)
}

/// Media type of one `Content-Type` entry without parameters, lowercased.
fn parse_media_type(v: &str) -> Option<String> {
    let essence = v.split(';').next().unwrap_or_default().trim();
    let valid = match essence.split_once('/') {
        Some((ty, sub)) => {
            !ty.is_empty()
                && !sub.is_empty()
                && ty.chars().all(is_token_char)
                && sub.chars().all(is_token_char)
        }
        None => !essence.is_empty() && essence.chars().all(is_token_char),
    };
    valid.then(|| essence.to_ascii_lowercase())
}

/// Whether the `Content-Type` header lists `mimetype`.
///
/// An empty `mimetype` means `application/octet-stream`, which is also what a
/// request without the header is assumed to carry. Scanning stops at the
/// first unparsable entry.
pub fn has_content_type(headers: &HeaderMap, mimetype: &str) -> bool {
    let mimetype = if mimetype.is_empty() {
        CT_OCTET_STREAM
    } else {
        mimetype
    };

    let content_type = match headers.get(CONTENT_TYPE).map(|v| v.to_str()) {
        None => "",
        Some(Ok(v)) => v,
        Some(Err(_)) => return false,
    };
    if content_type.is_empty() {
        return mimetype == CT_OCTET_STREAM;
    }

    for v in content_type.split(',') {
        let Some(t) = parse_media_type(v) else {
            break;
        };
        if t == mimetype {
            return true;
        }
    }
    false
}

/// Decode a JSON request body, classifying failures by the status a server
/// should answer with.
///
/// In strict mode the request must declare `application/json` (else 415)
/// and the body may not exceed `max_bytes` (else 413). Malformed JSON, a
/// missing body, wrongly typed values and trailing data are all 400.
pub fn decode_request_body<T: DeserializeOwned>(
    headers: &HeaderMap,
    body: &[u8],
    strict: bool,
    max_bytes: usize,
) -> Result<T, MalformedRequest> {
    if strict && !has_content_type(headers, CT_APP_JSON) {
        return Err(MalformedRequest::new(
            StatusCode::UNSUPPORTED_MEDIA_TYPE,
            "Content-Type header is not application/json",
        ));
    }
    if strict && body.len() > max_bytes {
        return Err(MalformedRequest::new(
            StatusCode::PAYLOAD_TOO_LARGE,
            format!("Request body must not be larger than {max_bytes} bytes"),
        ));
    }

    let mut de = serde_json::Deserializer::from_slice(body);
    let value = T::deserialize(&mut de).map_err(|e| classify(body, e))?;
    if de.end().is_err() {
        return Err(MalformedRequest::new(
            StatusCode::BAD_REQUEST,
            "Request body must only contain a single JSON object",
        ));
    }
    Ok(value)
}

fn classify(body: &[u8], err: serde_json::Error) -> MalformedRequest {
    let at = format!("at line {}, column {}", err.line(), err.column());
    let msg = match err.classify() {
        Category::Eof if body.iter().all(u8::is_ascii_whitespace) => {
            "Request body must not be empty".to_string()
        }
        Category::Eof => "Request body contains badly-formed JSON".to_string(),
        Category::Syntax => format!("Request body contains badly-formed JSON ({at})"),
        Category::Data => {
            let text = err.to_string();
            match unknown_field(&text) {
                Some(field) => format!("Request body contains unknown field {field}"),
                None => format!("Request body contains an invalid value ({at})"),
            }
        }
        Category::Io => err.to_string(),
    };
    tracing::debug!(
        target: "kitbag.http",
        stage = "http.decode.reject",
        error = %err,
        reason = %msg
    );
    MalformedRequest::new(StatusCode::BAD_REQUEST, msg)
}

fn unknown_field(text: &str) -> Option<&str> {
    let rest = text.strip_prefix("unknown field `")?;
    rest.split_once('`').map(|(field, _)| field)
}

/// Decode a JSON response body; error statuses and empty bodies fail before
/// parsing is attempted.
pub fn unmarshal_body<T: DeserializeOwned>(status: u16, body: &[u8]) -> Result<T, HttpError> {
    if status >= 400 {
        return Err(HttpError::Status(status));
    }
    if body.is_empty() {
        return Err(HttpError::EmptyBody);
    }
    Ok(serde_json::from_slice(body)?)
}
