use serde::Deserialize;

use crate::models::SamplingRate;

/// Plugin configuration, read from `plugins.orientation` in `tauri.conf.json`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Config {
    pub sampling_rate: SamplingRate,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sampling_rate_from_config() {
        let config: Config = serde_json::from_str(r#"{"samplingRate":"game"}"#).unwrap();
        assert_eq!(config.sampling_rate, SamplingRate::Game);

        let config: Config = serde_json::from_str("{}").unwrap();
        assert_eq!(config.sampling_rate, SamplingRate::Normal);
    }
}
