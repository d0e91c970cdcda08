use std::path::Path;

use shards_rewards::RewardResult;

use crate::types::*;

/// On-disk encoding of a scenario, picked from the file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScenarioFormat {
    Toml,
    Json,
}

impl ScenarioFormat {
    /// `.toml` files are TOML; everything else is treated as JSON.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Self {
        match path.as_ref().extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("toml") => ScenarioFormat::Toml,
            _ => ScenarioFormat::Json,
        }
    }
}

impl Scenario {
    /// Load a scenario from a TOML or JSON file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        let scenario = Self::parse(&contents, ScenarioFormat::from_path(path))?;
        tracing::info!(
            path = %path.display(),
            total_tokens = scenario.total_tokens,
            "loaded scenario"
        );
        Ok(scenario)
    }

    /// Save the scenario, encoding it according to the file extension.
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let contents = self.encode(ScenarioFormat::from_path(path))?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    pub fn parse(contents: &str, format: ScenarioFormat) -> Result<Self> {
        let scenario: Scenario = match format {
            ScenarioFormat::Toml => toml::from_str(contents)?,
            ScenarioFormat::Json => serde_json::from_str(contents)?,
        };
        Ok(scenario)
    }

    pub fn encode(&self, format: ScenarioFormat) -> Result<String> {
        let contents = match format {
            ScenarioFormat::Toml => toml::to_string_pretty(self)?,
            ScenarioFormat::Json => serde_json::to_string_pretty(self)?,
        };
        Ok(contents)
    }

    /// Run the calculator on this scenario's inputs.
    pub fn compute(&self) -> shards_rewards::Result<RewardResult> {
        shards_rewards::compute(&self.lock_sizes, self.total_tokens)
    }
}
