use crate::adapters::images::{IMAGE_FORMATS, IMAGE_QUALITIES};
use crate::core::layout::LayoutOptions;
use crate::core::ordering::DEFAULT_DOUBLED_RARITIES;
use crate::core::pages::PAGE_CAPACITY;
use crate::core::ConfigProvider;
use crate::utils::error::{BinderError, Result};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const OUTPUT_FORMATS: [&str; 3] = ["json", "csv", "txt"];
pub const MAX_PAGE_CAPACITY: usize = 64;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BinderConfig {
    pub source: SourceConfig,
    #[serde(default)]
    pub layout: LayoutConfig,
    #[serde(default)]
    pub images: ImageConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    #[serde(default = "default_language")]
    pub language: String,
    pub set_id: String,
    pub concurrent_requests: Option<usize>,
    pub timeout_seconds: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    pub page_capacity: usize,
    pub doubled_rarities: Vec<String>,
    pub doubled_first: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageConfig {
    pub quality: String,
    pub format: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub path: String,
    pub formats: Vec<String>,
    pub file_stem: Option<String>,
}

fn default_endpoint() -> String {
    crate::adapters::tcgdex::DEFAULT_ENDPOINT.to_string()
}

fn default_language() -> String {
    "fr".to_string()
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            page_capacity: PAGE_CAPACITY,
            doubled_rarities: DEFAULT_DOUBLED_RARITIES
                .iter()
                .map(|r| r.to_string())
                .collect(),
            doubled_first: true,
        }
    }
}

impl Default for ImageConfig {
    fn default() -> Self {
        Self {
            quality: "low".to_string(),
            format: "webp".to_string(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: "./output".to_string(),
            formats: vec!["json".to_string(), "txt".to_string()],
            file_stem: None,
        }
    }
}

impl BinderConfig {
    /// 以預設值建立指定卡包的配置
    pub fn for_set(set_id: impl Into<String>) -> Self {
        Self {
            source: SourceConfig {
                endpoint: default_endpoint(),
                language: default_language(),
                set_id: set_id.into(),
                concurrent_requests: None,
                timeout_seconds: None,
            },
            layout: LayoutConfig::default(),
            images: ImageConfig::default(),
            output: OutputConfig::default(),
        }
    }

    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(BinderError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| BinderError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${TCGDEX_ENDPOINT})，未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = regex::Regex::new(r"\$\{([^}]+)\}").map_err(|e| BinderError::ProcessingError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn layout_options(&self) -> LayoutOptions {
        LayoutOptions::from_config(self)
    }

    pub fn endpoint(&self) -> &str {
        &self.source.endpoint
    }

    pub fn language(&self) -> &str {
        &self.source.language
    }

    pub fn timeout_seconds(&self) -> Option<u64> {
        self.source.timeout_seconds
    }
}

impl Validate for BinderConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_url("source.endpoint", &self.source.endpoint)?;
        validation::validate_non_empty_string("source.language", &self.source.language)?;
        validation::validate_non_empty_string("source.set_id", &self.source.set_id)?;

        if let Some(concurrent) = self.source.concurrent_requests {
            validation::validate_positive_number("source.concurrent_requests", concurrent, 1)?;
        }

        validation::validate_range(
            "layout.page_capacity",
            self.layout.page_capacity,
            1,
            MAX_PAGE_CAPACITY,
        )?;

        validation::validate_one_of("images.quality", &self.images.quality, &IMAGE_QUALITIES)?;
        validation::validate_one_of("images.format", &self.images.format, &IMAGE_FORMATS)?;

        validation::validate_path("output.path", &self.output.path)?;
        if self.output.formats.is_empty() {
            return Err(BinderError::MissingConfigError {
                field: "output.formats".to_string(),
            });
        }
        for format in &self.output.formats {
            validation::validate_one_of("output.formats", format, &OUTPUT_FORMATS)?;
        }

        Ok(())
    }
}

impl ConfigProvider for BinderConfig {
    fn set_id(&self) -> &str {
        &self.source.set_id
    }

    fn concurrent_requests(&self) -> usize {
        self.source.concurrent_requests.unwrap_or(8)
    }

    fn page_capacity(&self) -> usize {
        self.layout.page_capacity
    }

    fn doubled_rarities(&self) -> &[String] {
        &self.layout.doubled_rarities
    }

    fn doubled_first(&self) -> bool {
        self.layout.doubled_first
    }

    fn image_quality(&self) -> &str {
        &self.images.quality
    }

    fn image_format(&self) -> &str {
        &self.images.format
    }

    fn output_path(&self) -> &str {
        &self.output.path
    }

    fn output_formats(&self) -> &[String] {
        &self.output.formats
    }

    fn file_stem(&self) -> String {
        self.output
            .file_stem
            .clone()
            .unwrap_or_else(|| format!("{}-binder", self.source.set_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_minimal_config_uses_defaults() {
        let toml_content = r#"
[source]
set_id = "sv03"
"#;

        let config = BinderConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.endpoint(), "https://api.tcgdex.net/v2");
        assert_eq!(config.language(), "fr");
        assert_eq!(config.page_capacity(), 12);
        assert_eq!(
            config.doubled_rarities(),
            &["commune".to_string(), "peu commune".to_string(), "rare".to_string()]
        );
        assert!(config.doubled_first());
        assert_eq!(config.concurrent_requests(), 8);
        assert_eq!(config.file_stem(), "sv03-binder");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_full_config() {
        let toml_content = r#"
[source]
endpoint = "https://api.example.com/v2"
language = "en"
set_id = "base1"
concurrent_requests = 2
timeout_seconds = 10

[layout]
page_capacity = 9
doubled_rarities = ["Common", "Uncommon"]
doubled_first = false

[images]
quality = "high"
format = "png"

[output]
path = "./binders"
formats = ["csv"]
file_stem = "base-set"
"#;

        let config = BinderConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.set_id(), "base1");
        assert_eq!(config.concurrent_requests(), 2);
        assert_eq!(config.timeout_seconds(), Some(10));
        assert_eq!(config.file_stem(), "base-set");

        let options = config.layout_options();
        assert_eq!(options.page_capacity, 9);
        assert!(options.policy.is_doubled(Some("COMMON")));
        assert!(!options.policy.is_doubled(Some("Rare")));
        assert!(!options.policy.doubled_first());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("TCG_BINDER_TEST_SET", "sv04");

        let toml_content = r#"
[source]
set_id = "${TCG_BINDER_TEST_SET}"
"#;

        let config = BinderConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.set_id(), "sv04");

        std::env::remove_var("TCG_BINDER_TEST_SET");
    }

    #[test]
    fn test_config_validation() {
        let mut config = BinderConfig::for_set("sv03");
        config.source.endpoint = "invalid-url".to_string();
        assert!(config.validate().is_err());

        let mut config = BinderConfig::for_set("sv03");
        config.layout.page_capacity = 0;
        assert!(config.validate().is_err());

        let mut config = BinderConfig::for_set("sv03");
        config.output.formats = vec!["pdf".to_string()];
        assert!(config.validate().is_err());

        let mut config = BinderConfig::for_set("sv03");
        config.output.formats.clear();
        assert!(matches!(
            config.validate(),
            Err(BinderError::MissingConfigError { .. })
        ));

        let mut config = BinderConfig::for_set("sv03");
        config.images.format = "gif".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_missing_set_id_is_parse_error() {
        let result = BinderConfig::from_toml_str("[source]\nlanguage = \"fr\"\n");
        assert!(matches!(
            result,
            Err(BinderError::ConfigValidationError { .. })
        ));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();

        let toml_content = r#"
[source]
set_id = "sv03"

[output]
path = "./out"
formats = ["json", "csv", "txt"]
"#;

        temp_file.write_all(toml_content.as_bytes()).unwrap();

        let config = BinderConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.output_path(), "./out");
        assert_eq!(config.output_formats().len(), 3);
    }
}
