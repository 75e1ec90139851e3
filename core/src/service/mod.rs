pub mod client;
pub mod endpoints;
pub mod example;
pub mod interceptors;
pub mod pipeline;
pub mod result;
