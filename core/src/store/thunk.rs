use crate::normalized::record::js_string;
use crate::service::result::is_truthy;
use serde_json::Value;

pub const DEFAULT_ERROR_MESSAGE: &str = "Something went wrong!";

/// `"<reducer>/<action>"`, e.g. `authState/authenticate`.
pub fn get_thunk_name(reducer_name: &str, action_type: &str) -> String {
    format!("{}/{}", reducer_name, action_type)
}

pub fn curry_get_thunk_name(reducer_name: &str) -> impl Fn(&str) -> String {
    let reducer_name = reducer_name.to_string();
    move |action_type| get_thunk_name(&reducer_name, action_type)
}

/// Reads `error.message.error.message` from a rejected thunk payload, falling
/// back to `default_message` when the shape does not match or the message is
/// falsy.
pub fn parse_error_message_from_unwrap_exception(error: &Value, default_message: &str) -> String {
    let message = match error.as_object().and_then(|o| o.get("message")) {
        Some(m) => m,
        None => return default_message.to_string(),
    };
    let inner = match message.as_object().and_then(|o| o.get("error")) {
        Some(e) => e,
        None => return default_message.to_string(),
    };
    match inner.get("message") {
        Some(m) if is_truthy(m) => js_string(m),
        _ => default_message.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn thunk_names_join_with_slash() {
        assert_eq!(get_thunk_name("authState", "authenticate"), "authState/authenticate");
        let named = curry_get_thunk_name("example");
        assert_eq!(named("getExampleDetails"), "example/getExampleDetails");
    }

    #[test]
    fn extracts_nested_message() {
        let err = json!({"message": {"error": {"message": "token expired"}}});
        assert_eq!(
            parse_error_message_from_unwrap_exception(&err, DEFAULT_ERROR_MESSAGE),
            "token expired"
        );
    }

    #[test]
    fn falls_back_for_unexpected_shapes() {
        for err in [
            json!(null),
            json!("plain"),
            json!({"message": "flat"}),
            json!({"message": {"error": null}}),
            json!({"message": {"error": {"message": ""}}}),
        ] {
            assert_eq!(
                parse_error_message_from_unwrap_exception(&err, DEFAULT_ERROR_MESSAGE),
                DEFAULT_ERROR_MESSAGE
            );
        }
    }
}
