use crate::config::toml_config::WidgetFile;
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, validate_positive_number, Validate};
use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    /// Front-end widget markup
    Html,
    /// Admin form markup
    Form,
    /// Sanitized settings as JSON
    Settings,
}

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "pet-widget")]
#[command(about = "Preview the Adopt-a-Pet pet of the day widget")]
pub struct CliConfig {
    /// TOML file with [widget], [instance] and [args] sections
    #[arg(short, long)]
    pub config: Option<String>,

    /// Widget title (overrides the file)
    #[arg(long)]
    pub title: Option<String>,

    /// US ZIP or Canadian postal code (overrides the file)
    #[arg(long)]
    pub postal_code: Option<String>,

    /// Widget instance number used for form field names
    #[arg(long)]
    pub number: Option<u32>,

    #[arg(long, value_enum, default_value = "html")]
    pub output: OutputMode,

    #[arg(long, help = "Emit logs as JSON")]
    pub json_logs: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// 載入設定檔（若有），再套用命令列覆蓋
    pub fn load_widget_file(&self) -> Result<WidgetFile> {
        let mut file = match &self.config {
            Some(path) => WidgetFile::from_file(path)?,
            None => WidgetFile::default(),
        };

        if let Some(title) = &self.title {
            file.instance.title = Some(title.clone());
        }
        if let Some(postal_code) = &self.postal_code {
            file.instance.postal_code = Some(postal_code.clone());
        }
        if let Some(number) = self.number {
            file.widget.number = number;
        }

        file.validate()?;
        Ok(file)
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(path) = &self.config {
            validate_path("config", path)?;
        }
        if let Some(number) = self.number {
            validate_positive_number("number", number, 1)?;
        }
        Ok(())
    }
}
