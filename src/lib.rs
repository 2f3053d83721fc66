pub mod api;
pub mod config;
pub mod engine;
pub mod entities;
pub mod error;
pub mod external;
pub mod fallback;
pub mod filter;
pub mod prompt;
pub mod server;
pub mod session;
