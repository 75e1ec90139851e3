use crate::config::ApiServerConfig;
use crate::error::{CoreError, CoreResult};
use crate::service::pipeline::{ApiRequest, ApiResponse, Method, Pipeline};
use url::Url;

/// Sends a fully prepared request. Implementations own the wire; the core
/// crate ships none.
pub trait Transport {
    fn send(&self, request: &ApiRequest) -> CoreResult<ApiResponse>;
}

pub struct ApiClient<T: Transport> {
    config: ApiServerConfig,
    pipeline: Pipeline,
    transport: T,
}

impl<T: Transport> ApiClient<T> {
    pub fn new(config: ApiServerConfig, transport: T) -> CoreResult<Self> {
        if !config.base_url.is_empty() {
            Url::parse(&config.base_url)?;
        }
        Ok(Self {
            config,
            pipeline: Pipeline::new(),
            transport,
        })
    }

    pub fn config(&self) -> &ApiServerConfig {
        &self.config
    }

    pub fn pipeline(&self) -> &Pipeline {
        &self.pipeline
    }

    pub fn pipeline_mut(&mut self) -> &mut Pipeline {
        &mut self.pipeline
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Joins `path` onto the base URL the way axios combines `baseURL` and
    /// `url`. Absolute URLs pass through untouched.
    pub fn resolve(&self, path: &str) -> CoreResult<Url> {
        if let Ok(abs) = Url::parse(path) {
            return Ok(abs);
        }
        if self.config.base_url.is_empty() {
            return Err(CoreError::InvalidInput(format!(
                "relative path {} needs a base_url",
                path
            )));
        }
        let joined = format!(
            "{}/{}",
            self.config.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        );
        Ok(Url::parse(&joined)?)
    }

    pub fn request(&self, method: Method, path: &str) -> CoreResult<ApiResponse> {
        let req = ApiRequest::new(method, self.resolve(path)?, self.config.effective_timeout_ms());
        let req = self.pipeline.apply_request(req)?;
        log::debug!(
            "api request {} {:?} {} fingerprint={}",
            req.request_id,
            req.method,
            req.url,
            req.fingerprint()
        );
        let resp = self.transport.send(&req)?;
        self.pipeline.apply_response(resp)
    }

    pub fn get(&self, path: &str) -> CoreResult<ApiResponse> {
        self.request(Method::GET, path)
    }
}
