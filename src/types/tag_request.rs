use std::collections::BTreeMap;

use serde::Serialize;

/// User-declared tags, passed through to TagResource untouched.
pub type TagMap = BTreeMap<String, String>;

#[derive(Serialize, Debug, PartialEq, Eq, Clone)]
#[serde(rename_all = "camelCase")]
pub struct TagRequest {
    pub resource_arn: String,
    pub tags: TagMap,
}

impl TagRequest {
    pub fn for_stage(region: &str, rest_api_id: &str, stage: &str, tags: TagMap) -> Self {
        Self {
            resource_arn: stage_arn(region, rest_api_id, stage),
            tags,
        }
    }
}

pub fn stage_arn(region: &str, rest_api_id: &str, stage: &str) -> String {
    format!(
        "arn:aws:apigateway:{}::/restapis/{}/stages/{}",
        region, rest_api_id, stage
    )
}
