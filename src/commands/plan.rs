use anyhow::Result;

use crate::context::Context;
use crate::resolver;
use crate::tagger::{self, TagPlan};
use crate::types::DeploymentContext;

pub struct PlanCommand;

fn format_plan(plan: &TagPlan) -> Result<String> {
    let text = match plan {
        TagPlan::RestApiNotFound { stack_name } => {
            format!("no ApiGateway::RestApi in stack {}, nothing to tag", stack_name)
        }
        TagPlan::MissingTagConfiguration { rest_api_id } => {
            format!(
                "no apiStageTags configured for API gateway {}, nothing to tag",
                rest_api_id
            )
        }
        TagPlan::Ready { request, .. } => serde_json::to_string_pretty(request)?,
    };

    Ok(text)
}

impl PlanCommand {
    /// Shows the TagResource request the hook would send, without sending it.
    pub async fn run(context: &Context, deployment: &DeploymentContext) -> Result<()> {
        let stack = resolver::resolve_stack(&context.cfn_client, deployment).await?;
        let plan = tagger::plan_stage_tags(&context.cfn_client, deployment, &stack).await?;

        println!("{}", format_plan(&plan)?);

        Ok(())
    }
}
