//! Path to URL mappings and the data formats they are loaded from.
//!
//! YAML and JSON both describe a list of records:
//!
//! ```yaml
//! - path: /some-path
//!   url: https://www.some-url.com/demo
//! ```
//!
//! Both decode to the same `Vec<PathUrl>`, so a mapping built from either is
//! indistinguishable once constructed.

use crate::error::Result;
use serde::Deserialize;
use std::collections::HashMap;

/// One redirect rule.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PathUrl {
    pub path: String,
    pub url: String,
}

impl PathUrl {
    pub fn new(path: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            url: url.into(),
        }
    }
}

/// Serialization format of a mapping file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MappingFormat {
    Yaml,
    Json,
}

impl MappingFormat {
    /// Infer the format from the text after the last `.` of `path`.
    ///
    /// Only the exact suffixes `yaml` and `json` are recognised.
    pub fn from_path(path: impl AsRef<str>) -> Option<Self> {
        let (_, suffix) = path.as_ref().rsplit_once('.')?;
        match suffix {
            "yaml" => Some(MappingFormat::Yaml),
            "json" => Some(MappingFormat::Json),
            _ => None,
        }
    }

    /// Decode a list of rules in this format.
    pub fn parse(self, data: &[u8]) -> Result<Vec<PathUrl>> {
        match self {
            MappingFormat::Yaml => parse_yaml(data),
            MappingFormat::Json => parse_json(data),
        }
    }
}

pub fn parse_yaml(data: &[u8]) -> Result<Vec<PathUrl>> {
    Ok(serde_yaml::from_slice(data)?)
}

pub fn parse_json(data: &[u8]) -> Result<Vec<PathUrl>> {
    Ok(serde_json::from_slice(data)?)
}

/// Collapse rules into a lookup table. A later rule for the same path wins.
pub fn build_map(path_urls: Vec<PathUrl>) -> HashMap<String, String> {
    path_urls
        .into_iter()
        .map(|rule| (rule.path, rule.url))
        .collect()
}
