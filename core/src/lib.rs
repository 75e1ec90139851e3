pub mod config;
pub mod context;
pub mod normalized;
pub mod service;
pub mod store;
pub mod util;

pub mod error;
