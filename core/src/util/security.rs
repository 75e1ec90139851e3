use uuid::Uuid;

/// Random (v4) UUID in hyphenated lowercase form.
pub fn generate_uuid() -> String {
    Uuid::new_v4().to_string()
}
