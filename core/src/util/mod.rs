pub mod security;
pub mod strings;
