use crate::apigateway::ApiGateway;
use crate::cloudformation::CloudFormation;

pub struct Context {
    pub cfn_client: CloudFormation,
    pub apigw_client: ApiGateway,
    pub aws_region: String,
}

impl Context {
    #[cfg(not(test))]
    pub async fn async_default(region: &str) -> Self {
        use aws_config::{BehaviorVersion, Region};

        let aws_config = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(region.to_string()))
            .load()
            .await;

        let cfn_client = CloudFormation::new(aws_sdk_cloudformation::Client::new(&aws_config));
        let apigw_client = ApiGateway::new(aws_sdk_apigateway::Client::new(&aws_config));

        Self {
            cfn_client,
            apigw_client,
            aws_region: region.to_string(),
        }
    }

    #[cfg(test)]
    pub async fn async_default(region: &str) -> Self {
        use crate::apigateway::MockApiGatewayImpl;
        use crate::cloudformation::MockCloudFormationImpl;

        Self {
            cfn_client: MockCloudFormationImpl::default(),
            apigw_client: MockApiGatewayImpl::default(),
            aws_region: region.to_string(),
        }
    }
}
