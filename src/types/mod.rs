mod config;
mod deployment_context;
mod stack_resource;
mod tag_request;

pub use config::*;
pub use deployment_context::*;
pub use stack_resource::*;
pub use tag_request::*;
