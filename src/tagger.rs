use crate::cloudformation::{self, CloudFormation};
use crate::error::HookError;
use crate::types::{DeploymentContext, StackDescriptor, StackResource, TagRequest};

/// What tagging a stage would amount to, before anything is sent.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum TagPlan {
    /// The stack holds no REST API, which is normal for non-HTTP services.
    RestApiNotFound { stack_name: String },
    /// A REST API exists but there is nothing to tag it with.
    MissingTagConfiguration { rest_api_id: String },
    Ready {
        rest_api_id: String,
        request: TagRequest,
    },
}

/// Id of the first REST API among `resources`.
pub fn find_rest_api(resources: &[StackResource]) -> Option<&str> {
    resources
        .iter()
        .filter(|resource| resource.is_rest_api())
        .find_map(|resource| resource.physical_id.as_deref())
}

pub fn plan_for_resources(
    deployment: &DeploymentContext,
    stack: &StackDescriptor,
    resources: &[StackResource],
) -> TagPlan {
    let Some(rest_api_id) = find_rest_api(resources) else {
        return TagPlan::RestApiNotFound {
            stack_name: stack.stack_name.clone(),
        };
    };

    let Some(tags) = deployment.stage_tags() else {
        return TagPlan::MissingTagConfiguration {
            rest_api_id: rest_api_id.to_string(),
        };
    };

    TagPlan::Ready {
        rest_api_id: rest_api_id.to_string(),
        request: TagRequest::for_stage(
            &deployment.region,
            rest_api_id,
            &deployment.stage,
            tags.clone(),
        ),
    }
}

pub async fn plan_stage_tags(
    client: &CloudFormation,
    deployment: &DeploymentContext,
    stack: &StackDescriptor,
) -> Result<TagPlan, HookError> {
    let resources = cloudformation::describe_stack_resources(client, &stack.stack_name).await?;

    Ok(plan_for_resources(deployment, stack, &resources))
}
