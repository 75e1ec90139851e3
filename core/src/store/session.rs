use serde::{Deserialize, Serialize};

pub const SLICE_NAME: &str = "session";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionState {
    pub token: Option<String>,
}

#[derive(Clone, PartialEq, Eq)]
pub enum SessionAction {
    SignedIn(String),
    SignedOut,
}

// Tokens never reach the dispatch log.
impl std::fmt::Debug for SessionAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SessionAction::SignedIn(_) => f.write_str("SignedIn(<redacted>)"),
            SessionAction::SignedOut => f.write_str("SignedOut"),
        }
    }
}

pub fn reduce(_state: &SessionState, action: &SessionAction) -> SessionState {
    match action {
        SessionAction::SignedIn(token) => SessionState {
            token: Some(token.clone()),
        },
        SessionAction::SignedOut => SessionState::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_output_hides_token() {
        let a = SessionAction::SignedIn("secret".to_string());
        assert!(!format!("{:?}", a).contains("secret"));
        assert_eq!(reduce(&SessionState::default(), &a).token.as_deref(), Some("secret"));
    }
}
