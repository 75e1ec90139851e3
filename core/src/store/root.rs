use crate::store::example::{self, ExampleAction, ExampleState};
use crate::store::session::{self, SessionAction, SessionState};
use crate::store::Store;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RootState {
    pub example: ExampleState,
    pub session: SessionState,
}

#[derive(Debug, Clone, PartialEq)]
pub enum RootAction {
    Example(ExampleAction),
    Session(SessionAction),
}

impl From<ExampleAction> for RootAction {
    fn from(a: ExampleAction) -> Self {
        RootAction::Example(a)
    }
}

impl From<SessionAction> for RootAction {
    fn from(a: SessionAction) -> Self {
        RootAction::Session(a)
    }
}

/// Each slice only sees its own actions; untouched slices are carried over.
pub fn root_reducer(state: &RootState, action: &RootAction) -> RootState {
    match action {
        RootAction::Example(a) => RootState {
            example: example::reduce(&state.example, a),
            session: state.session.clone(),
        },
        RootAction::Session(a) => RootState {
            example: state.example.clone(),
            session: session::reduce(&state.session, a),
        },
    }
}

pub type RootStore = Store<RootState, RootAction>;

pub fn configure_store(logger: bool) -> RootStore {
    Store::new(RootState::default(), root_reducer as fn(&RootState, &RootAction) -> RootState)
        .with_logger(logger)
}
