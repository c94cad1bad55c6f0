use super::TagMap;

/// Everything one hook invocation needs to know about the deployment it follows.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct DeploymentContext {
    pub region: String,
    pub stage: String,
    /// Top-level application stack.
    pub stack_name: String,
    pub tags: Option<TagMap>,
    /// Whether the split-stacks plugin moved API resources into their own nested stack.
    pub split_stacks_per_type: bool,
}

impl DeploymentContext {
    /// The configured tag map, if there is anything in it.
    pub fn stage_tags(&self) -> Option<&TagMap> {
        self.tags.as_ref().filter(|tags| !tags.is_empty())
    }
}
