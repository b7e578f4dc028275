pub mod toml_config;

#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use toml_config::BinderConfig;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "tcg-binder")]
#[command(about = "Lay out a trading card set as binder pages and spreads")]
pub struct CliConfig {
    /// Path to TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Set to lay out (e.g. sv03); overrides source.set_id
    #[arg(short, long)]
    pub set: Option<String>,

    /// Card language (e.g. fr, en); overrides source.language
    #[arg(short, long)]
    pub language: Option<String>,

    /// Card API base URL; overrides source.endpoint
    #[arg(long)]
    pub endpoint: Option<String>,

    /// Output directory; overrides output.path
    #[arg(short, long)]
    pub output: Option<String>,

    /// Output formats (json, csv, txt); overrides output.formats
    #[arg(short, long, value_delimiter = ',')]
    pub format: Vec<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Log as JSON lines
    #[arg(long)]
    pub log_json: bool,

    /// Show the resolved configuration without fetching anything
    #[arg(long)]
    pub dry_run: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// 載入設定檔（若有）並套用命令列覆蓋
    pub fn resolve(&self) -> Result<BinderConfig> {
        let mut config = match (&self.config, &self.set) {
            (Some(path), _) => BinderConfig::from_file(path)?,
            (None, Some(set)) => BinderConfig::for_set(set.clone()),
            (None, None) => {
                return Err(crate::utils::error::BinderError::MissingConfigError {
                    field: "source.set_id (use --set or --config)".to_string(),
                })
            }
        };

        self.apply_overrides(&mut config);
        Ok(config)
    }

    pub fn apply_overrides(&self, config: &mut BinderConfig) {
        if let Some(set) = &self.set {
            config.source.set_id = set.clone();
            tracing::info!("🔧 Set overridden to: {}", set);
        }
        if let Some(language) = &self.language {
            config.source.language = language.clone();
        }
        if let Some(endpoint) = &self.endpoint {
            config.source.endpoint = endpoint.clone();
        }
        if let Some(output) = &self.output {
            config.output.path = output.clone();
        }
        if !self.format.is_empty() {
            config.output.formats = self.format.clone();
        }
    }
}

#[cfg(all(test, feature = "cli"))]
mod tests {
    use super::*;
    use crate::core::ConfigProvider;

    #[test]
    fn test_set_flag_without_config_file() {
        let cli = CliConfig::parse_from(["tcg-binder", "--set", "sv03", "-f", "csv,txt"]);

        let config = cli.resolve().unwrap();

        assert_eq!(config.set_id(), "sv03");
        assert_eq!(config.output_formats(), &["csv".to_string(), "txt".to_string()]);
        assert_eq!(config.page_capacity(), 12);
    }

    #[test]
    fn test_no_set_and_no_config_is_an_error() {
        let cli = CliConfig::parse_from(["tcg-binder"]);
        assert!(cli.resolve().is_err());
    }

    #[test]
    fn test_overrides_replace_file_values() {
        let mut config = BinderConfig::for_set("sv01");
        let cli = CliConfig::parse_from([
            "tcg-binder",
            "--set",
            "sv02",
            "--language",
            "en",
            "--output",
            "/tmp/binders",
        ]);

        cli.apply_overrides(&mut config);

        assert_eq!(config.set_id(), "sv02");
        assert_eq!(config.language(), "en");
        assert_eq!(config.output_path(), "/tmp/binders");
    }
}
