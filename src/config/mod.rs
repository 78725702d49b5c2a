/// Manifest property sourcing.
///
/// This module contains three logical entities:
///  * Coercions: lenient decoding of hand-written property values.
///  * Snippets: single manifest files, holding a subset of properties.
///  * Inputs: snippets merged, with defaults applied.

mod coerce;
mod inputs;
mod snippets;

pub(crate) use crate::config::inputs::{ConfigInput, GremlinInput};

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_file(dir: &std::path::Path, name: &str, content: &str) -> std::path::PathBuf {
        let path = dir.join(name);
        let mut fp = std::fs::File::create(&path).unwrap();
        fp.write_all(content.as_bytes()).unwrap();
        path
    }

    #[test]
    fn read_config_merges_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let base = write_file(
            dir.path(),
            "00-base.yml",
            "gremlin:\n  team_id: team-123\n  tags: {env: prod}\n",
        );
        let site = write_file(
            dir.path(),
            "10-site.toml",
            concat!(
                "[gremlin]\n",
                "tag_ignored = 1\n",
                "push_metrics = \"true\"\n",
                "\n",
                "[gremlin.tags]\n",
                "env = \"staging\"\n",
            ),
        );

        let cfg = ConfigInput::read_config(&[base, site]).unwrap();
        assert_eq!(cfg.gremlin.team_id, "team-123");
        assert!(cfg.gremlin.push_metrics);
        assert_eq!(
            cfg.gremlin.tags.get("env"),
            Some(&serde_yaml::Value::from("staging"))
        );
    }

    #[test]
    fn read_config_without_files() {
        let paths: Vec<std::path::PathBuf> = vec![];
        let cfg = ConfigInput::read_config(&paths).unwrap();
        assert_eq!(cfg.gremlin, GremlinInput::default());
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = ConfigInput::read_config(&[dir.path().join("absent.yml")]).unwrap_err();
        assert!(err.to_string().contains("failed to open file"));
    }

    #[test]
    fn malformed_tags_are_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let bad = write_file(dir.path(), "bad.yml", "gremlin:\n  tags: prod\n");
        let err = ConfigInput::read_config(&[bad]).unwrap_err();
        assert!(err.to_string().contains("invalid manifest snippet"));

        let causes: Vec<String> = err.iter_chain().map(|c| c.to_string()).collect();
        assert!(causes.iter().any(|c| c.contains("expected a mapping for tags")));
    }
}
