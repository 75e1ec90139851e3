// Paths are relative to `ApiServerConfig::base_url`; never include the host here.
//
// https://dev.api.example.test/api/v1/login splits into
//   base_url = "https://dev.api.example.test/api/v1"
//   path     = "/login"

pub mod bio {
    /// GET: bio details of the current user.
    pub fn get_bio() -> &'static str {
        "/9e0b4f75-2e4b-48be-b23f-aa2ec63c7cce"
    }
}
