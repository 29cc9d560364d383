//! Named sets of module values used to drive a preview.
//!
//! A [`Scenario`] stands in for the live shell: it says what each module
//! would display right now (`directory = "~/work/api"`, `nodejs = "v18.16.0"`).
//! A module with no value, or an empty one, is not triggered and renders
//! nothing.
//!
//! The builtin [`mock_scenarios`] cover the common preview states, from a
//! clean repository to a failed command.

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Mock or live values for one preview.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scenario {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// The last command failed; the prompt character shows its error form.
    #[serde(default)]
    pub error: bool,
    #[serde(default)]
    pub values: BTreeMap<String, String>,
}

impl Scenario {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_error(mut self, error: bool) -> Self {
        self.error = error;
        self
    }

    pub fn with_value(mut self, module: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(module.into(), value.into());
        self
    }

    /// Builds an anonymous scenario from `(module, value)` pairs.
    pub fn from_values<I, K, V>(values: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            values: values
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
            ..Self::default()
        }
    }

    /// Parses a scenario from JSON.
    pub fn from_json(text: &str) -> serde_json::Result<Self> {
        serde_json::from_str(text)
    }

    /// Whether the prompt shows its error form: the `error` flag, or a
    /// name mentioning "error" for scenarios loaded without the flag.
    pub fn is_error(&self) -> bool {
        self.error || self.name.to_lowercase().contains("error")
    }

    /// The value of `module`, if it is triggered (present and non-empty).
    pub fn value(&self, module: &str) -> Option<&str> {
        self.values
            .get(module)
            .map(String::as_str)
            .filter(|v| !v.is_empty())
    }
}

static MOCK_SCENARIOS: Lazy<Vec<Scenario>> = Lazy::new(|| {
    vec![
        Scenario::new("clean", "Clean State")
            .with_description("Clean git repository on main branch")
            .with_value("username", "jules")
            .with_value("hostname", "macbook-pro")
            .with_value("directory", "~/projects/starship-theme-creator")
            .with_value("git_branch", "main")
            .with_value("package", "v1.0.0")
            .with_value("cmd_duration", "2s")
            .with_value("character", "❯"),
        Scenario::new("dev", "Development State")
            .with_description("Active development with modified files")
            .with_value("username", "jules")
            .with_value("hostname", "dev-server")
            .with_value("directory", "~/work/api-service")
            .with_value("git_branch", "feature/auth-flow")
            .with_value("git_status", "[3~](yellow) [+1](green)")
            .with_value("git_metrics", "+120 -45")
            .with_value("nodejs", "v18.16.0")
            .with_value("docker_context", "dev-context")
            .with_value("package", "v0.5.2")
            .with_value("cmd_duration", "500ms")
            .with_value("character", "❯"),
        Scenario::new("multilang", "Multi-Language")
            .with_description("Project using multiple languages")
            .with_value("username", "jules")
            .with_value("hostname", "polyglot")
            .with_value("directory", "~/code/fullstack-app")
            .with_value("git_branch", "develop")
            .with_value("git_status", "⇡2 ⇣1")
            .with_value("nodejs", "v20.2.0")
            .with_value("rust", "v1.70.0")
            .with_value("python", "v3.11.4")
            .with_value("package", "v2.0.0-beta")
            .with_value("cmd_duration", "12s")
            .with_value("character", "❯"),
        Scenario::new("devops", "DevOps Context")
            .with_description("Cloud and container context")
            .with_value("username", "ops")
            .with_value("hostname", "bastion")
            .with_value("directory", "~/infra/k8s-prod")
            .with_value("git_branch", "production")
            .with_value("docker_context", "registry.example.com")
            .with_value("kubernetes", "prod-cluster-us-east")
            .with_value("aws", "us-west-2")
            .with_value("gcloud", "my-project")
            .with_value("azure", "subscription-1")
            .with_value("character", "#"),
        Scenario::new("error", "Error State")
            .with_description("Failed command and git conflicts")
            .with_error(true)
            .with_value("username", "jules")
            .with_value("hostname", "macbook-pro")
            .with_value("directory", "~/projects/broken-build")
            .with_value("git_branch", "fix/urgent-bug")
            .with_value("git_state", "MERGING")
            .with_value("git_status", "x5 !2")
            .with_value("nodejs", "v14.0.0")
            .with_value("package", "v0.0.1")
            .with_value("cmd_duration", "1m 30s")
            .with_value("character", "✖"),
    ]
});

/// The builtin preview scenarios, `clean` first.
pub fn mock_scenarios() -> &'static [Scenario] {
    &MOCK_SCENARIOS
}

/// Looks up a builtin scenario by id.
pub fn find_scenario(id: &str) -> Option<&'static Scenario> {
    MOCK_SCENARIOS.iter().find(|s| s.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_treats_empty_as_absent() {
        let scenario = Scenario::from_values([("a", "x"), ("b", "")]);
        assert_eq!(scenario.value("a"), Some("x"));
        assert_eq!(scenario.value("b"), None);
        assert_eq!(scenario.value("c"), None);
    }

    #[test]
    fn test_builtin_ids() {
        let ids: Vec<_> = mock_scenarios().iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, ["clean", "dev", "multilang", "devops", "error"]);
    }

    #[test]
    fn test_only_error_scenario_is_flagged() {
        for scenario in mock_scenarios() {
            assert_eq!(scenario.error, scenario.id == "error", "{}", scenario.id);
        }
        assert_eq!(find_scenario("error").unwrap().value("character"), Some("✖"));
    }

    #[test]
    fn test_is_error_falls_back_to_name() {
        assert!(Scenario::default().with_error(true).is_error());
        assert!(Scenario::new("x", "Build ERROR").is_error());
        assert!(!Scenario::new("x", "Clean State").is_error());
        let loaded = Scenario::from_json(r#"{"name": "Error State", "values": {}}"#).unwrap();
        assert!(loaded.is_error());
    }

    #[test]
    fn test_from_json_defaults() {
        let scenario =
            Scenario::from_json(r#"{"values": {"directory": "~/x"}}"#).unwrap();
        assert!(!scenario.error);
        assert!(scenario.id.is_empty());
        assert_eq!(scenario.value("directory"), Some("~/x"));
    }
}
