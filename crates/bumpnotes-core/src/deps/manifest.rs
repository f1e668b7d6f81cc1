//! Dependency manifest parsing

use serde_json::Value;
use tracing::debug;

use crate::types::DependencyMap;

/// Why a manifest could not be turned into a dependency map
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ManifestProblem {
    /// Not valid JSON
    Malformed(String),
    /// The dependency field is absent or not an object
    MissingField(String),
    /// A dependency version is not a string
    NonStringVersion(String),
    /// The dependency object has no entries
    Empty(String),
}

impl std::fmt::Display for ManifestProblem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Malformed(e) => write!(f, "malformed manifest: {}", e),
            Self::MissingField(field) => write!(f, "no '{}' object", field),
            Self::NonStringVersion(name) => write!(f, "version of '{}' is not a string", name),
            Self::Empty(field) => write!(f, "'{}' is empty", field),
        }
    }
}

/// Extract the dependency map stored under `field` in a JSON manifest.
///
/// An empty map is rejected: a release without dependencies has nothing to diff.
pub fn parse_dependencies(content: &str, field: &str) -> Result<DependencyMap, ManifestProblem> {
    let manifest: Value =
        serde_json::from_str(content).map_err(|e| ManifestProblem::Malformed(e.to_string()))?;

    let deps = manifest
        .get(field)
        .and_then(Value::as_object)
        .ok_or_else(|| ManifestProblem::MissingField(field.to_string()))?;

    let mut map = DependencyMap::new();
    for (name, version) in deps {
        let version = version
            .as_str()
            .ok_or_else(|| ManifestProblem::NonStringVersion(name.clone()))?;
        map.insert(name.clone(), version.to_string());
    }

    if map.is_empty() {
        return Err(ManifestProblem::Empty(field.to_string()));
    }

    debug!(field, count = map.len(), "parsed dependencies");
    Ok(map)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_dependencies() {
        let content = r#"{
            "name": "app",
            "version": "3.1.0",
            "dependencies": { "module_b": "1.0.5", "module_a": "1.0.2" },
            "devDependencies": { "mocha": "2.0.0" }
        }"#;

        let deps = parse_dependencies(content, "dependencies").unwrap();
        assert_eq!(deps.len(), 2);
        assert_eq!(deps["module_a"], "1.0.2");
        assert_eq!(deps["module_b"], "1.0.5");
    }

    #[test]
    fn test_parse_other_field() {
        let content = r#"{ "devDependencies": { "mocha": "2.0.0" } }"#;
        let deps = parse_dependencies(content, "devDependencies").unwrap();
        assert_eq!(deps["mocha"], "2.0.0");
    }

    #[test]
    fn test_malformed_json() {
        let result = parse_dependencies("{ not json", "dependencies");
        assert!(matches!(result, Err(ManifestProblem::Malformed(_))));
    }

    #[test]
    fn test_missing_field() {
        let result = parse_dependencies(r#"{ "name": "app" }"#, "dependencies");
        assert_eq!(
            result,
            Err(ManifestProblem::MissingField("dependencies".to_string()))
        );

        let result = parse_dependencies(r#"{ "dependencies": "1.0.0" }"#, "dependencies");
        assert!(matches!(result, Err(ManifestProblem::MissingField(_))));
    }

    #[test]
    fn test_non_string_version() {
        let result = parse_dependencies(r#"{ "dependencies": { "a": 1 } }"#, "dependencies");
        assert_eq!(result, Err(ManifestProblem::NonStringVersion("a".to_string())));
    }

    #[test]
    fn test_empty_dependencies() {
        let result = parse_dependencies(r#"{ "dependencies": {} }"#, "dependencies");
        assert!(matches!(result, Err(ManifestProblem::Empty(_))));
    }
}
