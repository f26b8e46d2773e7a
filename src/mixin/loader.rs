//! Mixin loading from disk.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde_yaml::{Mapping, Value};
use thiserror::Error;

use crate::yaml::parse_mapping;

/// Error type for mixin loading.
#[derive(Debug, Error)]
pub enum MixinError {
    #[error("mixin file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("failed to read mixin file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid mixin document {}: {reason}", path.display())]
    Parse { path: PathBuf, reason: String },
}

/// A parsed mixin document: top-level keys merged into every subscription.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mixin {
    data: Mapping,
}

impl Mixin {
    /// Read and parse the mixin file at `path`.
    pub fn load(path: &Path) -> Result<Self, MixinError> {
        let content = fs::read_to_string(path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => MixinError::NotFound(path.to_path_buf()),
            _ => MixinError::Io {
                path: path.to_path_buf(),
                source: e,
            },
        })?;

        Self::from_yaml(&content).map_err(|reason| MixinError::Parse {
            path: path.to_path_buf(),
            reason,
        })
    }

    /// Parse a mixin from YAML text. The document must be a mapping.
    ///
    /// Repeated keys keep the last value and `<<` merge keys are resolved.
    pub fn from_yaml(content: &str) -> Result<Self, String> {
        parse_mapping(content).map(|data| Self { data })
    }

    /// Top-level entries in document order.
    pub fn entries(&self) -> impl Iterator<Item = (&Value, &Value)> {
        self.data.iter()
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_temp(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_keeps_document_order() {
        let file = write_temp("port: 7890\ndns:\n  enable: true\nrules-extra: [a, b]\n");

        let mixin = Mixin::load(file.path()).unwrap();
        let keys: Vec<_> = mixin.entries().filter_map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, ["port", "dns", "rules-extra"]);
        assert_eq!(mixin.len(), 3);
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = Mixin::load(&dir.path().join("mixin.yaml")).unwrap_err();
        assert!(matches!(err, MixinError::NotFound(_)));
    }

    #[test]
    fn test_malformed_yaml() {
        let file = write_temp("dns: [unclosed\n");
        let err = Mixin::load(file.path()).unwrap_err();
        assert!(matches!(err, MixinError::Parse { .. }));
    }

    #[test]
    fn test_non_mapping_documents_rejected() {
        for content in ["- a\n- b\n", "just a string\n", ""] {
            let file = write_temp(content);
            let err = Mixin::load(file.path()).unwrap_err();
            assert!(matches!(err, MixinError::Parse { .. }), "accepted {content:?}");
        }
    }

    #[test]
    fn test_merge_keys_in_mixin_resolved() {
        let mixin = Mixin::from_yaml(
            "defaults: &dns\n  enable: true\ndns:\n  <<: *dns\n  ipv6: false\n",
        )
        .unwrap();
        let dns = mixin.entries().find(|(k, _)| k.as_str() == Some("dns")).unwrap().1;
        assert_eq!(dns["enable"], Value::Bool(true));
        assert!(dns.get("<<").is_none());
    }

    #[test]
    fn test_unicode_keys_survive() {
        let mixin = Mixin::from_yaml("代理: 节点\n").unwrap();
        let (key, value) = mixin.entries().next().unwrap();
        assert_eq!(key.as_str(), Some("代理"));
        assert_eq!(value.as_str(), Some("节点"));
    }
}
