use anyhow::Result;

use crate::config::LoadedConfig;
use crate::errors::EstimatorError;

/// The effective configuration as TOML, preceded by a comment naming its
/// source.
pub fn render_config(loaded: &LoadedConfig) -> Result<String> {
    let source = match loaded.source {
        Some(ref path) => path.display().to_string(),
        None => "built-in defaults".to_string(),
    };
    let body = toml::to_string_pretty(&loaded.config.resolved()).map_err(EstimatorError::from)?;

    Ok(format!("# Source: {}\n\n{}", source, body))
}

pub fn show_config(loaded: &LoadedConfig) -> Result<()> {
    print!("{}", render_config(loaded)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{parse_config, EstimatorConfig, ModelParameters};
    use std::path::PathBuf;

    #[test]
    fn test_defaults_source_comment() {
        let rendered = render_config(&LoadedConfig::default()).unwrap();
        assert!(rendered.starts_with("# Source: built-in defaults\n"));
        assert!(rendered.contains("reference_monthly_cost = 6500.0"));
    }

    #[test]
    fn test_rendered_config_reflects_overrides() {
        let loaded = LoadedConfig {
            config: EstimatorConfig {
                model: Some(ModelParameters {
                    reference_monthly_cost: 9000.0,
                    ..Default::default()
                }),
                ..Default::default()
            },
            source: Some(PathBuf::from("/srv/.autoops.toml")),
        };

        let rendered = render_config(&loaded).unwrap();

        assert!(rendered.starts_with("# Source: /srv/.autoops.toml"));
        let parsed = parse_config(&rendered).unwrap();
        assert_eq!(parsed.model().reference_monthly_cost, 9000.0);
        assert_eq!(parsed.display().currency_symbol, "R");
    }
}
