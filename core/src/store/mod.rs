pub mod example;
pub mod root;
pub mod session;
pub mod thunk;

use std::fmt::Debug;
use std::time::Instant;

pub type Reducer<S, A> = fn(&S, &A) -> S;

/// Single owner of application state. State only changes through `dispatch`.
pub struct Store<S, A> {
    state: S,
    reducer: Reducer<S, A>,
    logger: bool,
}

impl<S, A: Debug> Store<S, A> {
    pub fn new(initial: S, reducer: Reducer<S, A>) -> Self {
        Self {
            state: initial,
            reducer,
            logger: false,
        }
    }

    /// Logs every dispatched action with its reduce time.
    pub fn with_logger(mut self, enabled: bool) -> Self {
        self.logger = enabled;
        self
    }

    pub fn state(&self) -> &S {
        &self.state
    }

    pub fn dispatch(&mut self, action: A) {
        let started = Instant::now();
        self.state = (self.reducer)(&self.state, &action);
        if self.logger {
            log::debug!("action {:?} ({:?})", action, started.elapsed());
        }
    }
}
