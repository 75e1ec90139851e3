use crate::error::CoreResult;
use crate::service::client::{ApiClient, Transport};
use crate::service::endpoints;
use crate::service::result::{build_result, ApiResult};
use serde_json::Value;

pub struct ExampleService<'a, T: Transport> {
    client: &'a ApiClient<T>,
}

impl<'a, T: Transport> ExampleService<'a, T> {
    pub fn new(client: &'a ApiClient<T>) -> Self {
        Self { client }
    }

    /// Non-2xx responses come back as an error envelope; only transport
    /// failures are `Err`.
    pub fn get_example_details(&self) -> CoreResult<ApiResult<Value>> {
        let resp = self.client.get(endpoints::bio::get_bio())?;
        if resp.is_success() {
            Ok(build_result(None, resp.status, None, Some(resp.body)))
        } else {
            Ok(build_result(
                Some(resp.body.clone()),
                resp.status,
                Some(resp.body),
                None,
            ))
        }
    }
}
