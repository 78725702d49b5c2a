//! Agent configuration rendering.
//!
//! This module turns merged manifest properties into the YAML document
//! consumed by the agent. Every known key is always emitted; values
//! missing from the manifest are filled with their defaults.

mod identity;

pub(crate) use identity::DeploymentContext;

use crate::config::GremlinInput;
use failure::{Fallible, ResultExt};
use serde_yaml::Mapping;
use std::path::Path;

/// Rendered agent configuration.
///
/// Field order is the key order of the emitted document.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub(crate) struct RenderedConfig {
    pub(crate) service_url: String,
    pub(crate) team_id: String,
    pub(crate) tags: Mapping,
    pub(crate) identifier: String,
    pub(crate) team_secret: String,
    /// Inline PEM or `file://` URI, never interpreted.
    pub(crate) team_certificate: String,
    pub(crate) team_private_key: String,
    pub(crate) ssl_cert_file: String,
    pub(crate) push_metrics: bool,
    pub(crate) collect_processes: bool,
    pub(crate) collect_dns: bool,
    pub(crate) iam_role: String,
}

/// Render agent configuration from manifest properties.
pub(crate) fn render(properties: &GremlinInput, context: &DeploymentContext) -> RenderedConfig {
    let identifier = identity::resolve_identifier(&properties.identifier, context);

    RenderedConfig {
        service_url: properties.service_url.clone(),
        team_id: properties.team_id.clone(),
        tags: properties.tags.clone(),
        identifier,
        team_secret: properties.team_secret.clone(),
        team_certificate: properties.team_certificate.clone(),
        team_private_key: properties.team_private_key.clone(),
        ssl_cert_file: properties.ssl_cert_file.clone(),
        push_metrics: properties.push_metrics,
        collect_processes: properties.collect_processes,
        collect_dns: properties.collect_dns,
        iam_role: properties.iam_role.clone(),
    }
}

impl RenderedConfig {
    /// Serialize to a YAML document.
    ///
    /// The document is written in JSON flow style, so every string is
    /// double-quoted and YAML 1.1 readers cannot mistake `yes`/`no`/`on`
    /// or octal-looking values for booleans and numbers.
    pub(crate) fn to_yaml(&self) -> Fallible<String> {
        let mut doc =
            serde_json::to_string_pretty(self).context("failed to serialize configuration")?;
        doc.push('\n');
        Ok(doc)
    }

    /// Write the YAML document to `path`.
    pub(crate) fn write_to(&self, path: &Path) -> Fallible<()> {
        let doc = self.to_yaml()?;
        trace!("writing rendered configuration to {:?}", path);
        std::fs::write(path, doc).context(format!("failed to write file '{}'", path.display()))?;
        Ok(())
    }
}
