use crate::error::{CoreError, CoreResult};
use crate::service::pipeline::{ApiRequest, ApiResponse, RequestInterceptor, ResponseInterceptor};

pub const HEADER_AUTHORIZATION: &str = "Authorization";
pub const HEADER_REQUEST_ID: &str = "X-Request-Id";

/// Adds `Authorization: Bearer <token>` when `token_source` yields a token.
pub fn authorization<F>(token_source: F) -> RequestInterceptor
where
    F: Fn() -> Option<String> + Send + Sync + 'static,
{
    Box::new(move |mut req: ApiRequest| -> CoreResult<ApiRequest> {
        if let Some(token) = token_source().filter(|t| !t.is_empty()) {
            req.headers
                .insert(HEADER_AUTHORIZATION.to_string(), format!("Bearer {}", token));
        }
        Ok(req)
    })
}

pub fn request_id_header() -> RequestInterceptor {
    Box::new(|mut req: ApiRequest| -> CoreResult<ApiRequest> {
        req.headers
            .insert(HEADER_REQUEST_ID.to_string(), req.request_id.clone());
        Ok(req)
    })
}

pub fn log_response() -> ResponseInterceptor {
    Box::new(|resp: ApiResponse| -> CoreResult<ApiResponse> {
        if resp.is_success() {
            log::debug!("api response {} status={}", resp.request_id, resp.status);
        } else {
            log::warn!("api response {} status={}", resp.request_id, resp.status);
        }
        Ok(resp)
    })
}

/// A status of 0 means no response was received.
pub fn require_status() -> ResponseInterceptor {
    Box::new(|resp: ApiResponse| -> CoreResult<ApiResponse> {
        if resp.status == 0 {
            return Err(CoreError::Transport(format!(
                "request {} returned no status",
                resp.request_id
            )));
        }
        Ok(resp)
    })
}
