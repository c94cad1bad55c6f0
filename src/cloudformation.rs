use anyhow::{Context as _, Result};
use aws_sdk_cloudformation as cloudformation;

#[allow(unused_imports)]
use mockall::automock;

use crate::error::HookError;
use crate::types::StackResource;

pub struct CloudFormationImpl {
    inner: cloudformation::Client,
}

#[cfg(test)]
pub use MockCloudFormationImpl as CloudFormation;
#[cfg(not(test))]
pub use CloudFormationImpl as CloudFormation;

#[cfg_attr(test, automock)]
impl CloudFormationImpl {
    #[allow(dead_code)]
    pub fn new(inner: cloudformation::Client) -> Self {
        Self { inner }
    }

    #[allow(dead_code)]
    pub async fn describe_stack_resources(&self, stack_name: &str) -> Result<Vec<StackResource>> {
        let output = self
            .inner
            .describe_stack_resources()
            .stack_name(stack_name)
            .send()
            .await
            .with_context(|| format!("DescribeStackResources failed for stack {}", stack_name))?;

        Ok(output
            .stack_resources()
            .iter()
            .map(StackResource::from)
            .collect())
    }
}

pub async fn describe_stack_resources(
    client: &CloudFormation,
    stack_name: &str,
) -> Result<Vec<StackResource>, HookError> {
    client
        .describe_stack_resources(stack_name)
        .await
        .map_err(|cause| HookError::ResourceDescriptionFailure {
            stack_name: stack_name.to_string(),
            cause,
        })
}
