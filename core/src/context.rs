use crate::config::AppConfig;
use crate::error::CoreResult;
use crate::service::client::{ApiClient, Transport};
use crate::service::example::ExampleService;
use crate::service::interceptors;
use crate::service::pipeline::Pipeline;
use crate::service::result::ApiResult;
use crate::store::example::{ExampleAction, SLICE_NAME as EXAMPLE_SLICE};
use crate::store::root::{configure_store, RootAction, RootState, RootStore};
use crate::store::thunk::{
    get_thunk_name, parse_error_message_from_unwrap_exception, DEFAULT_ERROR_MESSAGE,
};
use serde_json::Value;
use std::sync::{Arc, RwLock, RwLockReadGuard};

pub type StoreHandle = Arc<RwLock<RootStore>>;

/// Everything a caller needs, built once at startup and passed around
/// explicitly.
pub struct AppContext<T: Transport> {
    pub config: AppConfig,
    store: StoreHandle,
    api: ApiClient<T>,
}

impl<T: Transport> AppContext<T> {
    pub fn initialize(config: AppConfig, transport: T) -> CoreResult<Self> {
        let store: StoreHandle = Arc::new(RwLock::new(configure_store(config.is_dev())));
        let mut api = ApiClient::new(config.api.clone(), transport)?;
        inject_store(&store, api.pipeline_mut());
        log::debug!(
            "context initialized env={:?} request_interceptors={:?} response_interceptors={:?}",
            config.environment,
            api.pipeline().request_names(),
            api.pipeline().response_names()
        );
        Ok(Self { config, store, api })
    }

    pub fn store(&self) -> &StoreHandle {
        &self.store
    }

    pub fn api(&self) -> &ApiClient<T> {
        &self.api
    }

    pub fn state(&self) -> RootState {
        read_store(&self.store).state().clone()
    }

    pub fn dispatch(&self, action: impl Into<RootAction>) {
        let mut guard = self.store.write().unwrap_or_else(|e| e.into_inner());
        guard.dispatch(action.into());
    }

    pub fn example_service(&self) -> ExampleService<'_, T> {
        ExampleService::new(&self.api)
    }

    /// Loads example details into the store. Error envelopes are returned as
    /// `Ok` after recording the failure; transport errors are recorded and
    /// returned as `Err`.
    pub fn fetch_example_details(&self) -> CoreResult<ApiResult<Value>> {
        let thunk = get_thunk_name(EXAMPLE_SLICE, "getExampleDetails");
        self.dispatch(ExampleAction::FetchStarted);

        let result = match self.example_service().get_example_details() {
            Ok(r) => r,
            Err(e) => {
                log::warn!("{} failed: {}", thunk, e);
                self.dispatch(ExampleAction::FetchFailed(e.to_string()));
                return Err(e);
            }
        };

        match (&result.error, &result.data) {
            (None, Some(data)) => {
                self.dispatch(ExampleAction::FetchSucceeded(data.clone()));
            }
            _ => {
                let rejected = serde_json::json!({ "message": serde_json::to_value(&result)? });
                let message =
                    parse_error_message_from_unwrap_exception(&rejected, DEFAULT_ERROR_MESSAGE);
                log::warn!(
                    "{} rejected status={:?}: {}",
                    thunk,
                    result.http_status_code,
                    message
                );
                self.dispatch(ExampleAction::FetchFailed(message));
            }
        }
        Ok(result)
    }
}

/// Registers interceptors in order: common response interceptors, then the
/// server's request interceptors, then the server's response interceptors.
pub fn inject_store(store: &StoreHandle, pipeline: &mut Pipeline) {
    pipeline.register_response("log_response", interceptors::log_response());

    pipeline.register_request("request_id", interceptors::request_id_header());
    let token_store = Arc::clone(store);
    pipeline.register_request(
        "authorization",
        interceptors::authorization(move || read_store(&token_store).state().session.token.clone()),
    );

    pipeline.register_response("require_status", interceptors::require_status());
}

fn read_store(store: &StoreHandle) -> RwLockReadGuard<'_, RootStore> {
    store.read().unwrap_or_else(|e| e.into_inner())
}
