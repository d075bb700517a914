use crate::domain::model::{WidgetArgs, WidgetInstance};
use crate::utils::error::{Result, WidgetError};
use crate::utils::validation::{validate_no_null_bytes, validate_positive_number, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::LazyLock;

static ENV_VAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{([^}]+)\}").expect("Invalid regex"));

/// 以 TOML 描述的單一 widget 實例，供本機預覽使用
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WidgetFile {
    #[serde(default)]
    pub widget: WidgetSection,
    #[serde(default)]
    pub instance: WidgetInstance,
    #[serde(default)]
    pub args: WidgetArgs,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WidgetSection {
    #[serde(default = "default_number")]
    pub number: u32,
}

impl Default for WidgetSection {
    fn default() -> Self {
        Self {
            number: default_number(),
        }
    }
}

fn default_number() -> u32 {
    1
}

impl WidgetFile {
    /// 從 TOML 檔案載入
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| WidgetError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${PET_WIDGET_ZIP})，未設定的保持原樣
    fn substitute_env_vars(content: &str) -> String {
        ENV_VAR
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }
}

impl Validate for WidgetFile {
    fn validate(&self) -> Result<()> {
        validate_positive_number("widget.number", self.widget.number, 1)?;

        validate_no_null_bytes("args.before_widget", &self.args.before_widget)?;
        validate_no_null_bytes("args.after_widget", &self.args.after_widget)?;
        validate_no_null_bytes("args.before_title", &self.args.before_title)?;
        validate_no_null_bytes("args.after_title", &self.args.after_title)?;

        Ok(())
    }
}
