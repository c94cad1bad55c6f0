use clap::Parser;
use tracing_subscriber::EnvFilter;

use apigw_stage_tagger::cli::{Cli, Commands, DeployArgs};
use apigw_stage_tagger::commands::plan::PlanCommand;
use apigw_stage_tagger::commands::tag::TagCommand;
use apigw_stage_tagger::context::Context;
use apigw_stage_tagger::types::{DeploymentContext, ServiceConfig};

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .init();
}

async fn prepare(deploy: &DeployArgs) -> anyhow::Result<(Context, DeploymentContext)> {
    let service = ServiceConfig::load_from_path(&deploy.config, &deploy.ext_str)?;
    let deployment = service.deployment_context(deploy.stage.as_deref(), deploy.region.as_deref());
    let context = Context::async_default(&deployment.region).await;

    Ok((context, deployment))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let cli = Cli::parse();
    match &cli.command {
        Commands::Tag { deploy } => {
            let (context, deployment) = prepare(deploy).await?;
            TagCommand::run(&context, &deployment).await;
        }
        Commands::Plan { deploy } => {
            let (context, deployment) = prepare(deploy).await?;
            PlanCommand::run(&context, &deployment).await?;
        }
    }

    Ok(())
}
