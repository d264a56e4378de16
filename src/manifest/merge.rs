//! Merging resolved versions into a manifest

use serde_yaml::Value;
use tracing::debug;

use crate::manifest::Manifest;
use crate::version::types::VersionMap;

/// Replace `.` and `-` with `_`; the manifest consumer rejects both in keys.
pub fn sanitize_key(label: &str) -> String {
    label.replace(['.', '-'], "_")
}

impl Manifest {
    /// Insert or overwrite one key per resolved label.
    ///
    /// One trailing newline is trimmed from each version. Returns the number
    /// of keys written.
    pub fn merge(&mut self, versions: &VersionMap) -> usize {
        for (label, version) in versions {
            let key = sanitize_key(label);
            let value = version.strip_suffix('\n').unwrap_or(version);
            debug!("{} = {}", key, value);
            self.root
                .insert(Value::String(key), Value::String(value.to_string()));
        }
        versions.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::version::types::ResolvedVersion;
    use rstest::rstest;

    const MANIFEST: &str = "\
image_name: cimg/base
retries: 3
node_lts: 18.0.0
nested:
  keep: [1, 2]
";

    fn versions(pairs: &[(&str, &str)]) -> VersionMap {
        pairs
            .iter()
            .map(|(label, version)| ResolvedVersion::new(*label, *version))
            .collect()
    }

    #[rstest]
    #[case("node.lts", "node_lts")]
    #[case("docker-ce", "docker_ce")]
    #[case("google-cloud-sdk", "google_cloud_sdk")]
    #[case("python3.11", "python3_11")]
    #[case("go", "go")]
    fn sanitize_key_replaces_dots_and_hyphens(#[case] label: &str, #[case] expected: &str) {
        assert_eq!(sanitize_key(label), expected);
    }

    #[test]
    fn merge_empty_map_leaves_document_unchanged() {
        let original = Manifest::from_yaml(MANIFEST).unwrap();
        let mut manifest = original.clone();

        assert_eq!(manifest.merge(&VersionMap::new()), 0);

        let reloaded = Manifest::from_yaml(&manifest.to_yaml().unwrap()).unwrap();
        assert_eq!(reloaded, original);
    }

    #[test]
    fn merge_writes_sanitized_keys_and_keeps_unrelated_ones() {
        let mut manifest = Manifest::from_yaml(MANIFEST).unwrap();

        manifest.merge(&versions(&[("node.lts", "20.11.0"), ("docker-ce", "5:24.0.7")]));

        assert_eq!(
            manifest.get("node_lts"),
            Some(&Value::String("20.11.0".to_string()))
        );
        assert_eq!(
            manifest.get("docker_ce"),
            Some(&Value::String("5:24.0.7".to_string()))
        );
        assert_eq!(manifest.get("node.lts"), None);
        assert_eq!(manifest.get("retries"), Some(&Value::from(3)));
        assert_eq!(
            manifest.get("image_name"),
            Some(&Value::String("cimg/base".to_string()))
        );
        assert_eq!(manifest.len(), 5);
    }

    #[test]
    fn merge_trims_one_trailing_newline() {
        let mut manifest = Manifest::default();

        manifest.merge(&versions(&[("python3", "3.12.1\n"), ("raw", "1.0.0\n\n")]));

        assert_eq!(
            manifest.get("python3"),
            Some(&Value::String("3.12.1".to_string()))
        );
        assert_eq!(
            manifest.get("raw"),
            Some(&Value::String("1.0.0\n".to_string()))
        );
    }
}
