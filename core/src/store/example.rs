use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const SLICE_NAME: &str = "example";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoadStatus {
    #[default]
    Idle,
    Loading,
    Succeeded,
    Failed,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExampleState {
    pub status: LoadStatus,
    pub details: Option<Value>,
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ExampleAction {
    FetchStarted,
    FetchSucceeded(Value),
    FetchFailed(String),
    Reset,
}

pub fn reduce(state: &ExampleState, action: &ExampleAction) -> ExampleState {
    match action {
        ExampleAction::FetchStarted => ExampleState {
            status: LoadStatus::Loading,
            error: None,
            ..state.clone()
        },
        // Details from a previous success stay visible until replaced.
        ExampleAction::FetchSucceeded(details) => ExampleState {
            status: LoadStatus::Succeeded,
            details: Some(details.clone()),
            error: None,
        },
        ExampleAction::FetchFailed(message) => ExampleState {
            status: LoadStatus::Failed,
            error: Some(message.clone()),
            ..state.clone()
        },
        ExampleAction::Reset => ExampleState::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn failure_keeps_previous_details() {
        let s = reduce(&ExampleState::default(), &ExampleAction::FetchSucceeded(json!({"a": 1})));
        let s = reduce(&s, &ExampleAction::FetchStarted);
        assert_eq!(s.status, LoadStatus::Loading);
        let s = reduce(&s, &ExampleAction::FetchFailed("boom".to_string()));
        assert_eq!(s.status, LoadStatus::Failed);
        assert_eq!(s.details, Some(json!({"a": 1})));
        assert_eq!(s.error.as_deref(), Some("boom"));
    }
}
