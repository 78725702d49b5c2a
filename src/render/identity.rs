/// Where this agent instance runs, as reported by the deployment tooling.
#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) struct DeploymentContext {
    /// Deployment job name (e.g. `gremlind`).
    pub(crate) job_name: String,
    /// Instance identifier within the job.
    pub(crate) instance_id: String,
}

impl DeploymentContext {
    pub(crate) fn new<S: Into<String>, T: Into<String>>(job_name: S, instance_id: T) -> Self {
        Self {
            job_name: job_name.into(),
            instance_id: instance_id.into(),
        }
    }

    /// Identifier used when the manifest does not provide one.
    pub(crate) fn default_identifier(&self) -> String {
        format!("{}-{}", self.job_name, self.instance_id)
    }
}

/// Pick the configured identifier, falling back to the deployment one.
///
/// Only an empty identifier triggers the fallback, whitespace is kept as is.
pub(crate) fn resolve_identifier(configured: &str, context: &DeploymentContext) -> String {
    if configured.is_empty() {
        context.default_identifier()
    } else {
        configured.to_string()
    }
}
