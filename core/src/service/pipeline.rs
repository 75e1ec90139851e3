use crate::error::CoreResult;
use crate::util::security::generate_uuid;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sha2::{Digest, Sha256};
use std::collections::BTreeMap;
use url::Url;

#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Method {
    GET,
    POST,
    PUT,
    PATCH,
    DELETE,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub url: Url,
    pub headers: BTreeMap<String, String>,
    pub body: Option<Value>,
    pub timeout_ms: u64,
    pub request_id: String,
    pub issued_at: String, // RFC3339 UTC
}

impl ApiRequest {
    pub fn new(method: Method, url: Url, timeout_ms: u64) -> Self {
        Self {
            method,
            url,
            headers: BTreeMap::new(),
            body: None,
            timeout_ms,
            request_id: generate_uuid(),
            issued_at: now_rfc3339_utc(),
        }
    }

    /// sha256 hex of method and URL; stable across retries of the same call.
    pub fn fingerprint(&self) -> String {
        let mut h = Sha256::new();
        h.update(format!("{:?}", self.method).as_bytes());
        h.update(b" ");
        h.update(self.url.as_str().as_bytes());
        hex::encode(h.finalize())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    pub headers: BTreeMap<String, String>,
    pub body: Value,
    pub request_id: String,
}

impl ApiResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

pub type RequestInterceptor = Box<dyn Fn(ApiRequest) -> CoreResult<ApiRequest> + Send + Sync>;
pub type ResponseInterceptor = Box<dyn Fn(ApiResponse) -> CoreResult<ApiResponse> + Send + Sync>;

/// Named interceptors, run in registration order. The first error stops the chain.
#[derive(Default)]
pub struct Pipeline {
    request: Vec<(String, RequestInterceptor)>,
    response: Vec<(String, ResponseInterceptor)>,
}

impl Pipeline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register_request(&mut self, name: impl Into<String>, interceptor: RequestInterceptor) {
        self.request.push((name.into(), interceptor));
    }

    pub fn register_response(&mut self, name: impl Into<String>, interceptor: ResponseInterceptor) {
        self.response.push((name.into(), interceptor));
    }

    pub fn request_names(&self) -> Vec<&str> {
        self.request.iter().map(|(n, _)| n.as_str()).collect()
    }

    pub fn response_names(&self) -> Vec<&str> {
        self.response.iter().map(|(n, _)| n.as_str()).collect()
    }

    pub fn apply_request(&self, mut req: ApiRequest) -> CoreResult<ApiRequest> {
        for (_, f) in &self.request {
            req = f(req)?;
        }
        Ok(req)
    }

    pub fn apply_response(&self, mut resp: ApiResponse) -> CoreResult<ApiResponse> {
        for (_, f) in &self.response {
            resp = f(resp)?;
        }
        Ok(resp)
    }
}

fn now_rfc3339_utc() -> String {
    time::OffsetDateTime::now_utc()
        .format(&time::format_description::well_known::Rfc3339)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoreError;

    fn request() -> ApiRequest {
        ApiRequest::new(
            Method::GET,
            Url::parse("https://api.example.test/v1/bio").unwrap(),
            2000,
        )
    }

    #[test]
    fn request_interceptors_run_in_registration_order() {
        let mut p = Pipeline::new();
        p.register_request(
            "first",
            Box::new(|mut r: ApiRequest| -> CoreResult<ApiRequest> {
                r.headers.insert("X-Trace".to_string(), "a".to_string());
                Ok(r)
            }),
        );
        p.register_request(
            "second",
            Box::new(|mut r: ApiRequest| -> CoreResult<ApiRequest> {
                let prev = r.headers.get("X-Trace").cloned().unwrap_or_default();
                r.headers.insert("X-Trace".to_string(), format!("{}b", prev));
                Ok(r)
            }),
        );
        assert_eq!(p.request_names(), vec!["first", "second"]);
        let out = p.apply_request(request()).unwrap();
        assert_eq!(out.headers.get("X-Trace").map(String::as_str), Some("ab"));
    }

    #[test]
    fn failing_interceptor_stops_the_chain() {
        let mut p = Pipeline::new();
        p.register_request(
            "reject",
            Box::new(|_r: ApiRequest| -> CoreResult<ApiRequest> {
                Err(CoreError::InvalidInput("nope".to_string()))
            }),
        );
        p.register_request(
            "never",
            Box::new(|_r: ApiRequest| -> CoreResult<ApiRequest> { panic!("must not run") }),
        );
        assert!(p.apply_request(request()).is_err());
    }

    #[test]
    fn fingerprint_ignores_request_id() {
        let a = request();
        let b = request();
        assert_ne!(a.request_id, b.request_id);
        assert_eq!(a.fingerprint(), b.fingerprint());
        assert_eq!(a.fingerprint().len(), 64);
    }
}
