use bytes::Bytes;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE};
use reqwest::{RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use std::time::Duration;

use super::body::{unmarshal_body, CT_APP_JSON, CT_FORM};
use super::method::HttpMethod;
use crate::config::HttpConfig;
use crate::error::HttpError;
use crate::map::Map;

#[derive(Clone, Debug)]
pub struct HttpClient {
    http: reqwest::Client,
}

impl HttpClient {
    pub fn new(cfg: &HttpConfig) -> Result<Self, HttpError> {
        let mut defaults = HeaderMap::new();
        for (k, v) in &cfg.default_headers {
            let name = HeaderName::from_bytes(k.as_bytes())
                .map_err(|_| HttpError::InvalidHeader(k.clone()))?;
            let value =
                HeaderValue::from_str(v).map_err(|_| HttpError::InvalidHeader(k.clone()))?;
            defaults.insert(name, value);
        }
        let http = reqwest::Client::builder()
            .timeout(Duration::from_millis(cfg.timeout_ms))
            .user_agent(cfg.user_agent.clone())
            .default_headers(defaults)
            .build()?;
        Ok(Self { http })
    }

    /// Build a request. The body is dropped for GET. A non-empty
    /// `content_type` replaces any `Content-Type` in `headers`; an empty one
    /// leaves the header as given.
    pub fn request(
        &self,
        method: HttpMethod,
        url: &str,
        content_type: &str,
        data: Option<&[u8]>,
        headers: Option<&HeaderMap>,
    ) -> RequestBuilder {
        let mut req = self.http.request(method.into(), url);
        let mut map = headers.cloned().unwrap_or_default();
        if !content_type.is_empty() {
            match HeaderValue::from_str(content_type) {
                Ok(v) => {
                    map.insert(CONTENT_TYPE, v);
                }
                // Surfaces as a builder error when the request is sent.
                Err(_) => req = req.header(CONTENT_TYPE, content_type),
            }
        }
        req = req.headers(map);
        match data {
            Some(body) if method != HttpMethod::Get => req.body(body.to_vec()),
            _ => req,
        }
    }

    pub fn get_request(&self, url: &str, headers: Option<&HeaderMap>) -> RequestBuilder {
        self.request(HttpMethod::Get, url, "", None, headers)
    }

    pub fn ajax_request(
        &self,
        method: HttpMethod,
        url: &str,
        data: Option<&[u8]>,
        headers: Option<&HeaderMap>,
    ) -> RequestBuilder {
        self.request(method, url, CT_APP_JSON, data, headers)
    }

    /// Form-encoded request; GET carries no body so it is refused.
    pub fn form_request(
        &self,
        method: HttpMethod,
        url: &str,
        data: &[(&str, &str)],
        headers: Option<&HeaderMap>,
    ) -> Result<RequestBuilder, HttpError> {
        if method == HttpMethod::Get {
            return Err(HttpError::UnsupportedMethod(method.to_string()));
        }
        let req = self.request(method, url, CT_FORM, None, headers);
        Ok(req.form(data))
    }

    /// Send a prepared request and collect the whole body.
    pub async fn execute(&self, req: RequestBuilder) -> Result<(Bytes, StatusCode), HttpError> {
        let resp = req.send().await?;
        let status = resp.status();
        let body = resp.bytes().await?;
        Ok((body, status))
    }

    pub async fn call(
        &self,
        method: HttpMethod,
        url: &str,
        content_type: &str,
        data: Option<&[u8]>,
        headers: Option<&HeaderMap>,
    ) -> Result<(Bytes, StatusCode), HttpError> {
        tracing::debug!(
            target: "kitbag.http",
            stage = "http.call.in",
            method = %method,
            url = %url,
            content_type = %content_type,
            body_len = data.map(<[u8]>::len).unwrap_or(0)
        );
        let req = self.request(method, url, content_type, data, headers);
        let (body, status) = self.execute(req).await?;
        tracing::debug!(
            target: "kitbag.http",
            stage = "http.call.out",
            status = %status,
            body_len = body.len()
        );
        Ok((body, status))
    }

    /// Like `call` but only the body is returned, whatever the status.
    pub async fn http(
        &self,
        method: HttpMethod,
        url: &str,
        content_type: &str,
        data: Option<&[u8]>,
        headers: Option<&HeaderMap>,
    ) -> Result<Bytes, HttpError> {
        let (body, _) = self.call(method, url, content_type, data, headers).await?;
        Ok(body)
    }

    pub async fn send(
        &self,
        method: HttpMethod,
        url: &str,
        data: Option<&[u8]>,
        headers: Option<&HeaderMap>,
    ) -> Result<Bytes, HttpError> {
        self.http(method, url, "", data, headers).await
    }

    pub async fn get(&self, url: &str) -> Result<Bytes, HttpError> {
        self.send(HttpMethod::Get, url, None, None).await
    }

    pub async fn ajax(
        &self,
        method: HttpMethod,
        url: &str,
        data: Option<&[u8]>,
        headers: Option<&HeaderMap>,
    ) -> Result<(Bytes, StatusCode), HttpError> {
        self.call(method, url, CT_APP_JSON, data, headers).await
    }

    pub async fn ajax_get(
        &self,
        url: &str,
        headers: Option<&HeaderMap>,
    ) -> Result<(Bytes, StatusCode), HttpError> {
        self.ajax(HttpMethod::Get, url, None, headers).await
    }

    pub async fn ajax_post(
        &self,
        url: &str,
        data: &[u8],
        headers: Option<&HeaderMap>,
    ) -> Result<(Bytes, StatusCode), HttpError> {
        self.ajax(HttpMethod::Post, url, Some(data), headers).await
    }

    pub async fn ajax_put(
        &self,
        url: &str,
        data: &[u8],
        headers: Option<&HeaderMap>,
    ) -> Result<(Bytes, StatusCode), HttpError> {
        self.ajax(HttpMethod::Put, url, Some(data), headers).await
    }

    pub async fn ajax_unmarshal<T: DeserializeOwned>(
        &self,
        method: HttpMethod,
        url: &str,
        data: Option<&[u8]>,
        headers: Option<&HeaderMap>,
    ) -> Result<T, HttpError> {
        let (body, status) = self.ajax(method, url, data, headers).await?;
        unmarshal_body(status.as_u16(), &body)
    }

    pub async fn ajax_get_unmarshal<T: DeserializeOwned>(
        &self,
        url: &str,
        headers: Option<&HeaderMap>,
    ) -> Result<T, HttpError> {
        self.ajax_unmarshal(HttpMethod::Get, url, None, headers).await
    }

    pub async fn ajax_post_unmarshal<T: DeserializeOwned>(
        &self,
        url: &str,
        data: &[u8],
        headers: Option<&HeaderMap>,
    ) -> Result<T, HttpError> {
        self.ajax_unmarshal(HttpMethod::Post, url, Some(data), headers)
            .await
    }

    pub async fn ajax_put_unmarshal<T: DeserializeOwned>(
        &self,
        url: &str,
        data: &[u8],
        headers: Option<&HeaderMap>,
    ) -> Result<T, HttpError> {
        self.ajax_unmarshal(HttpMethod::Put, url, Some(data), headers)
            .await
    }

    /// JSON request whose body is `data` serialised; ignored for GET.
    pub fn simple_ajax_request(
        &self,
        method: HttpMethod,
        url: &str,
        data: Option<&Map>,
        headers: Option<&HeaderMap>,
    ) -> Result<RequestBuilder, HttpError> {
        let body = match data {
            Some(m) if method != HttpMethod::Get => Some(serde_json::to_vec(m)?),
            _ => None,
        };
        Ok(self.ajax_request(method, url, body.as_deref(), headers))
    }

    pub async fn simple_ajax_unmarshal<T: DeserializeOwned>(
        &self,
        method: HttpMethod,
        url: &str,
        data: Option<&Map>,
        headers: Option<&HeaderMap>,
    ) -> Result<T, HttpError> {
        tracing::debug!(
            target: "kitbag.http",
            stage = "http.simple.in",
            method = %method,
            url = %url,
            fields = data.map(Map::len).unwrap_or(0)
        );
        let req = self.simple_ajax_request(method, url, data, headers)?;
        let (body, status) = self.execute(req).await?;
        tracing::debug!(
            target: "kitbag.http",
            stage = "http.simple.out",
            status = %status,
            body_len = body.len()
        );
        unmarshal_body(status.as_u16(), &body)
    }

    pub async fn simple_ajax(
        &self,
        method: HttpMethod,
        url: &str,
        data: Option<&Map>,
        headers: Option<&HeaderMap>,
    ) -> Result<Map, HttpError> {
        self.simple_ajax_unmarshal(method, url, data, headers).await
    }

    pub async fn simple_ajax_get(
        &self,
        url: &str,
        headers: Option<&HeaderMap>,
    ) -> Result<Map, HttpError> {
        self.simple_ajax(HttpMethod::Get, url, None, headers).await
    }

    pub async fn simple_ajax_post(
        &self,
        url: &str,
        data: &Map,
        headers: Option<&HeaderMap>,
    ) -> Result<Map, HttpError> {
        self.simple_ajax(HttpMethod::Post, url, Some(data), headers)
            .await
    }

    pub async fn simple_ajax_put(
        &self,
        url: &str,
        data: &Map,
        headers: Option<&HeaderMap>,
    ) -> Result<Map, HttpError> {
        self.simple_ajax(HttpMethod::Put, url, Some(data), headers)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn client() -> HttpClient {
        HttpClient::new(&HttpConfig::default()).unwrap()
    }

    #[test]
    fn test_invalid_default_header_is_rejected() {
        let mut cfg = HttpConfig::default();
        cfg.default_headers = BTreeMap::from([("bad header".to_string(), "x".to_string())]);
        assert!(matches!(
            HttpClient::new(&cfg),
            Err(HttpError::InvalidHeader(h)) if h == "bad header"
        ));
    }

    #[test]
    fn test_get_request_drops_body() {
        let req = client()
            .request(
                HttpMethod::Get,
                "http://localhost/x",
                CT_APP_JSON,
                Some(b"{}"),
                None,
            )
            .build()
            .unwrap();
        assert!(req.body().is_none());
        assert_eq!(req.headers().get(CONTENT_TYPE).unwrap(), CT_APP_JSON);
    }

    #[test]
    fn test_content_type_replaces_caller_header() {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("text/plain"));
        headers.insert("x-trace", HeaderValue::from_static("t1"));

        let req = client()
            .ajax_request(HttpMethod::Post, "http://localhost/x", Some(b"{}"), Some(&headers))
            .build()
            .unwrap();
        let all: Vec<_> = req.headers().get_all(CONTENT_TYPE).iter().collect();
        assert_eq!(all, vec![CT_APP_JSON]);
        assert_eq!(req.headers().get("x-trace").unwrap(), "t1");

        // Without a content type the caller's header is kept.
        let req = client()
            .request(HttpMethod::Post, "http://localhost/x", "", None, Some(&headers))
            .build()
            .unwrap();
        let all: Vec<_> = req.headers().get_all(CONTENT_TYPE).iter().collect();
        assert_eq!(all, vec!["text/plain"]);
    }

    #[test]
    fn test_post_request_keeps_body() {
        let req = client()
            .ajax_request(HttpMethod::Post, "http://localhost/x", Some(b"{\"a\":1}"), None)
            .build()
            .unwrap();
        assert_eq!(req.method(), reqwest::Method::POST);
        assert_eq!(req.body().and_then(|b| b.as_bytes()), Some(&b"{\"a\":1}"[..]));
    }

    #[test]
    fn test_form_request() {
        let c = client();
        assert!(matches!(
            c.form_request(HttpMethod::Get, "http://localhost/x", &[], None),
            Err(HttpError::UnsupportedMethod(m)) if m == "GET"
        ));

        let req = c
            .form_request(HttpMethod::Post, "http://localhost/x", &[("a", "1"), ("b", "x y")], None)
            .unwrap()
            .build()
            .unwrap();
        assert_eq!(req.headers().get(CONTENT_TYPE).unwrap(), CT_FORM);
        assert_eq!(req.body().and_then(|b| b.as_bytes()), Some(&b"a=1&b=x+y"[..]));
    }

    #[test]
    fn test_simple_ajax_request_skips_body_for_get() {
        let c = client();
        let mut m = Map::new();
        m.insert("k".into(), "v".into());

        let get = c
            .simple_ajax_request(HttpMethod::Get, "http://localhost/x", Some(&m), None)
            .unwrap()
            .build()
            .unwrap();
        assert!(get.body().is_none());

        let put = c
            .simple_ajax_request(HttpMethod::Put, "http://localhost/x", Some(&m), None)
            .unwrap()
            .build()
            .unwrap();
        assert_eq!(put.body().and_then(|b| b.as_bytes()), Some(&br#"{"k":"v"}"#[..]));
    }
}
