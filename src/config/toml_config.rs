use crate::core::{InvalidDatePolicy, ReportSettings};
use crate::utils::error::{NumerologyError, Result};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::LazyLock;

pub const OUTPUT_FORMATS: [&str; 2] = ["csv", "json"];

const DEFAULT_NAME_FIELD: &str = "name";
const DEFAULT_BIRTH_DATE_FIELD: &str = "birth_date";
const DEFAULT_CSV_FILENAME: &str = "report.csv";
const DEFAULT_JSON_FILENAME: &str = "report.json";

static ENV_VAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{([^}]+)\}").expect("valid regex"));

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    pub report: ReportInfo,
    pub source: SourceConfig,
    pub load: LoadConfig,
    pub error_handling: Option<ErrorHandlingConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportInfo {
    pub name: String,
    pub description: Option<String>,
    pub version: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    pub path: String,
    pub delimiter: Option<String>,
    pub name_field: Option<String>,
    pub birth_date_field: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoadConfig {
    pub output_path: String,
    pub output_formats: Vec<String>,
    pub filenames: Option<FilenameConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilenameConfig {
    pub csv: Option<String>,
    pub json: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorHandlingConfig {
    pub on_invalid_date: Option<InvalidDatePolicy>,
}

impl ReportConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(NumerologyError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| NumerologyError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${INPUT_DIR})，未設定的保持原樣
    fn substitute_env_vars(content: &str) -> String {
        ENV_VAR
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    pub fn validate_config(&self) -> Result<()> {
        validation::validate_non_empty_string("report.name", &self.report.name)?;
        validation::validate_path("source.path", &self.source.path)?;
        validation::validate_path("load.output_path", &self.load.output_path)?;
        validation::validate_output_formats(
            "load.output_formats",
            &self.load.output_formats,
            &OUTPUT_FORMATS,
        )?;

        if let Some(delimiter) = &self.source.delimiter {
            validation::validate_delimiter("source.delimiter", delimiter)?;
        }
        if let Some(field) = &self.source.name_field {
            validation::validate_non_empty_string("source.name_field", field)?;
        }
        if let Some(field) = &self.source.birth_date_field {
            validation::validate_non_empty_string("source.birth_date_field", field)?;
        }
        if let Some(filenames) = &self.load.filenames {
            if let Some(csv) = &filenames.csv {
                validation::validate_path("load.filenames.csv", csv)?;
            }
            if let Some(json) = &filenames.json {
                validation::validate_path("load.filenames.json", json)?;
            }
        }

        Ok(())
    }
}

impl ReportSettings for ReportConfig {
    fn input_path(&self) -> &str {
        &self.source.path
    }

    fn output_path(&self) -> &str {
        &self.load.output_path
    }

    fn output_formats(&self) -> &[String] {
        &self.load.output_formats
    }

    fn delimiter(&self) -> u8 {
        self.source
            .delimiter
            .as_deref()
            .and_then(|d| d.bytes().next())
            .unwrap_or(b',')
    }

    fn name_field(&self) -> &str {
        self.source
            .name_field
            .as_deref()
            .unwrap_or(DEFAULT_NAME_FIELD)
    }

    fn birth_date_field(&self) -> &str {
        self.source
            .birth_date_field
            .as_deref()
            .unwrap_or(DEFAULT_BIRTH_DATE_FIELD)
    }

    fn invalid_date_policy(&self) -> InvalidDatePolicy {
        self.error_handling
            .as_ref()
            .and_then(|e| e.on_invalid_date)
            .unwrap_or_default()
    }

    fn csv_filename(&self) -> &str {
        self.load
            .filenames
            .as_ref()
            .and_then(|f| f.csv.as_deref())
            .unwrap_or(DEFAULT_CSV_FILENAME)
    }

    fn json_filename(&self) -> &str {
        self.load
            .filenames
            .as_ref()
            .and_then(|f| f.json.as_deref())
            .unwrap_or(DEFAULT_JSON_FILENAME)
    }
}

impl Validate for ReportConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
