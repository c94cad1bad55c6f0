pub mod apigateway;
pub mod cli;
pub mod cloudformation;
pub mod commands;
pub mod context;
pub mod error;
pub mod hook;
pub mod jsonnet_evaluator;
#[cfg(test)]
mod log_capture;
pub mod resolver;
pub mod tagger;
pub mod types;
