use crate::config::coerce;
use serde_yaml::Mapping;

/// Top-level manifest stanza.
///
/// Properties belonging to other jobs may live alongside `gremlin`,
/// they are ignored here.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct ManifestSnippet {
    /// Agent properties.
    pub(crate) gremlin: Option<GremlinSnippet>,
}

/// Manifest snippet for the `gremlin` property section.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct GremlinSnippet {
    /// Gremlin API endpoint.
    #[serde(default, deserialize_with = "coerce::opt_string")]
    pub(crate) service_url: Option<String>,
    #[serde(default, deserialize_with = "coerce::opt_string")]
    pub(crate) team_id: Option<String>,
    /// Free-form tags attached to this agent.
    #[serde(default, deserialize_with = "coerce::opt_tags")]
    pub(crate) tags: Option<Mapping>,
    /// Agent identifier (default: `<job-name>-<instance-id>`)
    #[serde(default, deserialize_with = "coerce::opt_string")]
    pub(crate) identifier: Option<String>,
    #[serde(default, deserialize_with = "coerce::opt_string")]
    pub(crate) team_secret: Option<String>,
    /// Inline PEM certificate, or a `file://` URI.
    #[serde(default, deserialize_with = "coerce::opt_string")]
    pub(crate) team_certificate: Option<String>,
    /// Inline PEM private key, or a `file://` URI.
    #[serde(default, deserialize_with = "coerce::opt_string")]
    pub(crate) team_private_key: Option<String>,
    /// Extra CA bundle, inline or as a `file://` URI.
    #[serde(default, deserialize_with = "coerce::opt_string")]
    pub(crate) ssl_cert_file: Option<String>,
    #[serde(default, deserialize_with = "coerce::opt_bool")]
    pub(crate) push_metrics: Option<bool>,
    #[serde(default, deserialize_with = "coerce::opt_bool")]
    pub(crate) collect_processes: Option<bool>,
    #[serde(default, deserialize_with = "coerce::opt_bool")]
    pub(crate) collect_dns: Option<bool>,
    /// AWS IAM role to assume.
    #[serde(default, deserialize_with = "coerce::opt_string")]
    pub(crate) iam_role: Option<String>,
}
