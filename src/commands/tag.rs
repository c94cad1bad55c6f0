use tracing::info;

use crate::context::Context;
use crate::hook;
use crate::types::DeploymentContext;

pub struct TagCommand;

impl TagCommand {
    /// Runs the after-deploy hook. Failures are logged, never returned.
    pub async fn run(context: &Context, deployment: &DeploymentContext) {
        info!(
            "Tagging API gateway stage {} of stack {} in {}",
            deployment.stage, deployment.stack_name, context.aws_region
        );

        let result = hook::after_deploy(context, deployment).await;
        hook::report(&result);
    }
}
