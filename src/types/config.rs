use serde::{Deserialize, Serialize};

use crate::{cli::StrKeyVal, jsonnet_evaluator};

use super::{DeploymentContext, TagMap};

pub const SPLIT_STACKS_PLUGIN: &str = "serverless-plugin-split-stacks";
pub const DEFAULT_STAGE: &str = "dev";
pub const DEFAULT_REGION: &str = "us-east-1";

#[derive(Deserialize, Serialize, PartialEq, Eq, Debug, Default, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ProviderConfig {
    pub stage: Option<String>,
    pub region: Option<String>,
    pub stack_name: Option<String>,
}

#[derive(Deserialize, Serialize, PartialEq, Eq, Debug, Default, Clone)]
#[serde(rename_all = "camelCase")]
pub struct SplitStacksConfig {
    #[serde(default)]
    pub per_type: bool,
}

#[derive(Deserialize, Serialize, PartialEq, Eq, Debug, Default, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CustomConfig {
    pub api_stage_tags: Option<TagMap>,
    pub split_stacks: Option<SplitStacksConfig>,
}

/// The service definition the deployment was made from.
#[derive(Deserialize, Serialize, PartialEq, Eq, Debug, Default, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ServiceConfig {
    pub service: String,
    #[serde(default)]
    pub provider: ProviderConfig,
    #[serde(default)]
    pub plugins: Vec<String>,
    #[serde(default)]
    pub custom: CustomConfig,
}

impl ServiceConfig {
    pub fn load_from_path(config: &str, ext_str: &[StrKeyVal]) -> anyhow::Result<ServiceConfig> {
        let config_value = jsonnet_evaluator::eval(config, ext_str)?;

        serde_json::from_value(config_value)
            .map_err(|e| anyhow::anyhow!("failed to parse config file {}: {}", config, e))
    }

    /// Command line options win over the provider section, which wins over the defaults.
    pub fn stage(&self, stage_option: Option<&str>) -> String {
        stage_option
            .or(self.provider.stage.as_deref())
            .unwrap_or(DEFAULT_STAGE)
            .to_string()
    }

    pub fn region(&self, region_option: Option<&str>) -> String {
        region_option
            .or(self.provider.region.as_deref())
            .unwrap_or(DEFAULT_REGION)
            .to_string()
    }

    pub fn stack_name(&self, stage: &str) -> String {
        match &self.provider.stack_name {
            Some(stack_name) => stack_name.clone(),
            None => format!("{}-{}", self.service, stage),
        }
    }

    pub fn split_stacks_per_type(&self) -> bool {
        self.plugins.iter().any(|plugin| plugin == SPLIT_STACKS_PLUGIN)
            && self
                .custom
                .split_stacks
                .as_ref()
                .is_some_and(|split_stacks| split_stacks.per_type)
    }

    pub fn deployment_context(
        &self,
        stage_option: Option<&str>,
        region_option: Option<&str>,
    ) -> DeploymentContext {
        let stage = self.stage(stage_option);

        DeploymentContext {
            region: self.region(region_option),
            stack_name: self.stack_name(&stage),
            stage,
            tags: self.custom.api_stage_tags.clone(),
            split_stacks_per_type: self.split_stacks_per_type(),
        }
    }
}
