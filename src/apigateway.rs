use anyhow::{Context as _, Result};
use aws_sdk_apigateway as apigateway;

#[allow(unused_imports)]
use mockall::automock;

use crate::error::HookError;
use crate::types::TagRequest;

pub struct ApiGatewayImpl {
    inner: apigateway::Client,
}

#[cfg(test)]
pub use MockApiGatewayImpl as ApiGateway;
#[cfg(not(test))]
pub use ApiGatewayImpl as ApiGateway;

#[cfg_attr(test, automock)]
impl ApiGatewayImpl {
    #[allow(dead_code)]
    pub fn new(inner: apigateway::Client) -> Self {
        Self { inner }
    }

    #[allow(dead_code)]
    pub async fn tag_resource(&self, request: &TagRequest) -> Result<()> {
        self.inner
            .tag_resource()
            .resource_arn(&request.resource_arn)
            .set_tags(Some(request.tags.clone().into_iter().collect()))
            .send()
            .await
            .with_context(|| format!("TagResource failed for {}", request.resource_arn))?;

        Ok(())
    }
}

pub async fn tag_resource(client: &ApiGateway, request: &TagRequest) -> Result<(), HookError> {
    client
        .tag_resource(request)
        .await
        .map_err(|cause| HookError::TaggingFailure {
            resource_arn: request.resource_arn.clone(),
            cause,
        })
}
