//! The after-deploy hook: resolve stack, describe its resources, tag the API stage.
//!
//! Every step waits for the previous one and the first failure ends the invocation.
//! Nothing is retried; the outcome is only ever visible through [`report`].

use tracing::{error, info, warn};

use crate::apigateway;
use crate::context::Context;
use crate::error::HookError;
use crate::resolver;
use crate::tagger::{self, TagPlan};
use crate::types::DeploymentContext;

#[derive(Debug, PartialEq, Eq, Clone)]
pub enum HookOutcome {
    Tagged { rest_api_id: String, stage: String },
    RestApiNotFound { stack_name: String },
    MissingTagConfiguration { rest_api_id: String },
}

pub async fn after_deploy(
    context: &Context,
    deployment: &DeploymentContext,
) -> Result<HookOutcome, HookError> {
    let stack = resolver::resolve_stack(&context.cfn_client, deployment).await?;

    match tagger::plan_stage_tags(&context.cfn_client, deployment, &stack).await? {
        TagPlan::RestApiNotFound { stack_name } => Ok(HookOutcome::RestApiNotFound { stack_name }),
        TagPlan::MissingTagConfiguration { rest_api_id } => {
            Ok(HookOutcome::MissingTagConfiguration { rest_api_id })
        }
        TagPlan::Ready {
            rest_api_id,
            request,
        } => {
            apigateway::tag_resource(&context.apigw_client, &request).await?;

            Ok(HookOutcome::Tagged {
                rest_api_id,
                stage: deployment.stage.clone(),
            })
        }
    }
}

/// Writes the one log line describing how the hook ended.
pub fn report(result: &Result<HookOutcome, HookError>) {
    match result {
        Ok(HookOutcome::Tagged { rest_api_id, stage }) => {
            info!("Tagged API gateway stage {}/{}", rest_api_id, stage);
        }
        Ok(HookOutcome::RestApiNotFound { stack_name }) => {
            info!(
                "Unable to resolve ApiGateway::RestApi in stack {}. No API Gateway stages tagged.",
                stack_name
            );
        }
        Ok(HookOutcome::MissingTagConfiguration { rest_api_id }) => {
            warn!(
                "No apiStageTags found to apply to API gateway {}.",
                rest_api_id
            );
        }
        Err(err @ HookError::TaggingFailure { cause, .. }) => {
            error!("{}\n{:?}", err, cause);
        }
        Err(err) => {
            error!("{}", err);
        }
    }
}
