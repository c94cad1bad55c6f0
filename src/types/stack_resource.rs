pub const REST_API_RESOURCE_TYPE: &str = "AWS::ApiGateway::RestApi";

/// Which stack to inspect for the REST API.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct StackDescriptor {
    pub stack_name: String,
}

impl StackDescriptor {
    pub fn new(stack_name: impl Into<String>) -> Self {
        Self {
            stack_name: stack_name.into(),
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone)]
pub struct StackResource {
    pub resource_type: String,
    pub logical_id: String,
    pub physical_id: Option<String>,
}

impl StackResource {
    pub fn new(resource_type: &str, logical_id: &str, physical_id: Option<&str>) -> Self {
        Self {
            resource_type: resource_type.to_string(),
            logical_id: logical_id.to_string(),
            physical_id: physical_id.map(|id| id.to_string()),
        }
    }

    pub fn is_rest_api(&self) -> bool {
        self.resource_type == REST_API_RESOURCE_TYPE
    }
}

impl From<&aws_sdk_cloudformation::types::StackResource> for StackResource {
    fn from(value: &aws_sdk_cloudformation::types::StackResource) -> Self {
        StackResource {
            resource_type: value.resource_type.clone().unwrap_or_default(),
            logical_id: value.logical_resource_id.clone().unwrap_or_default(),
            physical_id: value.physical_resource_id.clone(),
        }
    }
}
