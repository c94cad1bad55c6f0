/// Failures that end a hook invocation before the stage is tagged.
///
/// None of these escape the hook as a process error; they are reported as a single
/// error log line by [`crate::hook::report`].
#[derive(Debug, thiserror::Error)]
pub enum HookError {
    /// Listing the resources of a stack failed (network, permissions, unknown stack).
    #[error("Could not describe resources of stack {stack_name}: {cause:#}")]
    ResourceDescriptionFailure {
        stack_name: String,
        cause: anyhow::Error,
    },

    /// The split-stacks nested stack holding the API resources could not be located.
    #[error("Could not resolve nested API stack of {stack_name}: {reason}")]
    NestedStackUnresolved { stack_name: String, reason: String },

    /// TagResource was rejected or could not be sent.
    #[error("Could not tag API Gateway resource {resource_arn}: {cause:#}")]
    TaggingFailure {
        resource_arn: String,
        cause: anyhow::Error,
    },
}
