use serde::{Deserialize, Serialize};

use crate::error::{ScriptError, ScriptResult};

pub const DEFAULT_RUNTIME_VERSION: &str = "1.0";

/// Settings shared by every generator on a page.
///
/// Both table and chart scripts read the runtime version from here, so a page
/// never loads two different versions of the visualization runtime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScriptConfig {
    #[serde(default = "default_runtime_version")]
    pub runtime_version: String,
    #[serde(default)]
    pub language: Option<String>,
}

impl Default for ScriptConfig {
    fn default() -> Self {
        Self {
            runtime_version: default_runtime_version(),
            language: None,
        }
    }
}

impl ScriptConfig {
    #[must_use]
    pub fn with_runtime_version(mut self, version: impl Into<String>) -> Self {
        self.runtime_version = version.into();
        self
    }

    #[must_use]
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    pub fn validate(&self) -> ScriptResult<()> {
        if self.runtime_version.trim().is_empty() {
            return Err(ScriptError::InvalidConfig(
                "runtime version must not be empty".to_owned(),
            ));
        }
        if matches!(&self.language, Some(language) if language.trim().is_empty()) {
            return Err(ScriptError::InvalidConfig(
                "language must not be blank when set".to_owned(),
            ));
        }
        Ok(())
    }

    pub fn from_json_str(input: &str) -> ScriptResult<Self> {
        let config: Self = serde_json::from_str(input).map_err(|e| {
            ScriptError::InvalidConfig(format!("failed to parse script config json: {e}"))
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json_pretty(&self) -> ScriptResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            ScriptError::InvalidConfig(format!("failed to serialize script config: {e}"))
        })
    }
}

fn default_runtime_version() -> String {
    DEFAULT_RUNTIME_VERSION.to_owned()
}
