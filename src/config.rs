//! Environment supplied by the workflow runner.

use std::collections::HashMap;

/// Snapshot of the environment variables this tool reads
#[derive(Debug, Clone, Default)]
pub struct EnvConfig {
    vars: HashMap<String, String>,
}

impl EnvConfig {
    /// Capture the current process environment
    pub fn from_env() -> Self {
        Self {
            vars: std::env::vars().collect(),
        }
    }

    /// Build from explicit pairs
    pub fn from_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            vars: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Non-empty value of a variable
    pub fn get(&self, key: &str) -> Option<String> {
        self.vars.get(key).filter(|v| !v.is_empty()).cloned()
    }

    /// API token: `GH_TOKEN` first, then `GITHUB_TOKEN`
    pub fn github_token(&self) -> Option<String> {
        self.get("GH_TOKEN").or_else(|| self.get("GITHUB_TOKEN"))
    }
}
