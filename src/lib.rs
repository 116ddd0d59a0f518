pub mod cli;
pub mod config;
pub mod constants;
pub mod context;
pub mod discovery;
pub mod error;
pub mod exit;
pub mod graph;
pub mod lang;
pub mod llm;
pub mod map;
pub mod prompt;
pub mod signatures;
pub mod source;
pub mod tokens;
