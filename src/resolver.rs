use tracing::debug;

use crate::cloudformation::{self, CloudFormation};
use crate::error::HookError;
use crate::types::{DeploymentContext, StackDescriptor};

/// Logical id the split-stacks plugin gives the nested stack holding API resources.
pub const API_NESTED_STACK_LOGICAL_ID: &str = "APINestedStack";

/// Name of a nested stack from its physical id, e.g. the `name` in
/// `arn:aws:cloudformation:<region>:<account>:stack/name/<uuid>`.
pub fn nested_stack_name(physical_id: &str) -> Option<&str> {
    physical_id.split('/').nth(1).filter(|name| !name.is_empty())
}

pub async fn resolve_stack(
    client: &CloudFormation,
    deployment: &DeploymentContext,
) -> Result<StackDescriptor, HookError> {
    if !deployment.split_stacks_per_type {
        return Ok(StackDescriptor::new(&deployment.stack_name));
    }

    let resources = cloudformation::describe_stack_resources(client, &deployment.stack_name).await?;

    let unresolved = |reason: &str| HookError::NestedStackUnresolved {
        stack_name: deployment.stack_name.clone(),
        reason: reason.to_string(),
    };

    let api_stack = resources
        .iter()
        .find(|resource| resource.logical_id == API_NESTED_STACK_LOGICAL_ID)
        .ok_or_else(|| unresolved("no APINestedStack resource"))?;

    let physical_id = api_stack
        .physical_id
        .as_deref()
        .ok_or_else(|| unresolved("APINestedStack has no physical id"))?;

    let stack_name = nested_stack_name(physical_id).ok_or_else(|| {
        unresolved(&format!(
            "cannot read a stack name from physical id {}",
            physical_id
        ))
    })?;

    debug!("resolved nested API stack {}", stack_name);
    Ok(StackDescriptor::new(stack_name))
}

#[cfg(test)]
mod test {
    use super::*;

    use anyhow::anyhow;
    use mockall::predicate::eq;

    use crate::cloudformation::MockCloudFormationImpl;
    use crate::types::StackResource;

    fn deployment(split_stacks_per_type: bool) -> DeploymentContext {
        DeploymentContext {
            region: "us-east-1".to_string(),
            stage: "dev".to_string(),
            stack_name: "my-service-dev".to_string(),
            tags: None,
            split_stacks_per_type,
        }
    }

    #[test]
    fn test_nested_stack_name() {
        assert_eq!(
            nested_stack_name("us-east-1:123/my-api-resources"),
            Some("my-api-resources")
        );
        assert_eq!(
            nested_stack_name(
                "arn:aws:cloudformation:us-east-1:123456789012:stack/my-service-dev-APINestedStack-1ABC/5b7e6f40-0000-11ee-0000-0a1b2c3d4e5f"
            ),
            Some("my-service-dev-APINestedStack-1ABC")
        );
        assert_eq!(nested_stack_name("no-separator"), None);
        assert_eq!(nested_stack_name("trailing/"), None);
    }

    #[tokio::test]
    async fn test_split_stacks_inactive_uses_top_level_stack() {
        let mut mock = MockCloudFormationImpl::default();
        mock.expect_describe_stack_resources().never();

        let stack = resolve_stack(&mock, &deployment(false)).await.unwrap();
        assert_eq!(stack, StackDescriptor::new("my-service-dev"));
    }

    #[tokio::test]
    async fn test_split_stacks_active_uses_nested_stack() {
        let mut mock = MockCloudFormationImpl::default();
        mock.expect_describe_stack_resources()
            .with(eq("my-service-dev"))
            .times(1)
            .return_once(|_| {
                Ok(vec![
                    StackResource::new(
                        "AWS::CloudFormation::Stack",
                        "PermissionsNestedStack",
                        Some("us-east-1:123/my-permissions"),
                    ),
                    StackResource::new(
                        "AWS::CloudFormation::Stack",
                        "APINestedStack",
                        Some("us-east-1:123/my-api-resources"),
                    ),
                ])
            });

        let stack = resolve_stack(&mock, &deployment(true)).await.unwrap();
        assert_eq!(stack, StackDescriptor::new("my-api-resources"));
    }

    #[tokio::test]
    async fn test_split_stacks_without_nested_api_stack() {
        let mut mock = MockCloudFormationImpl::default();
        mock.expect_describe_stack_resources().return_once(|_| {
            Ok(vec![StackResource::new(
                "AWS::Lambda::Function",
                "HelloLambdaFunction",
                Some("my-service-dev-hello"),
            )])
        });

        let err = resolve_stack(&mock, &deployment(true)).await.unwrap_err();
        assert!(matches!(err, HookError::NestedStackUnresolved { .. }));
    }

    #[tokio::test]
    async fn test_split_stacks_with_unreadable_physical_id() {
        let mut mock = MockCloudFormationImpl::default();
        mock.expect_describe_stack_resources().return_once(|_| {
            Ok(vec![StackResource::new(
                "AWS::CloudFormation::Stack",
                "APINestedStack",
                Some("my-api-resources"),
            )])
        });

        let err = resolve_stack(&mock, &deployment(true)).await.unwrap_err();
        assert!(matches!(err, HookError::NestedStackUnresolved { .. }));
    }

    #[tokio::test]
    async fn test_split_stacks_describe_failure() {
        let mut mock = MockCloudFormationImpl::default();
        mock.expect_describe_stack_resources()
            .return_once(|_| Err(anyhow!("Stack with id my-service-dev does not exist")));

        let err = resolve_stack(&mock, &deployment(true)).await.unwrap_err();
        assert!(matches!(
            err,
            HookError::ResourceDescriptionFailure { .. }
        ));
    }
}
