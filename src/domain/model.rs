use serde::{Deserialize, Serialize};
use std::fmt;

/// 已清理、可持久化的 widget 設定
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WidgetSettings {
    pub title: String,
    pub postal_code: String,
}

impl WidgetSettings {
    /// Both fields must be set for the widget to render anything.
    pub fn is_complete(&self) -> bool {
        !self.title.is_empty() && !self.postal_code.is_empty()
    }
}

/// 宿主儲存時送來的原始表單值，欄位可能不存在
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WidgetInstance {
    pub title: Option<String>,
    pub postal_code: Option<String>,
}

/// Wrapper markup supplied by the host's page region.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WidgetArgs {
    pub before_widget: String,
    pub after_widget: String,
    pub before_title: String,
    pub after_title: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CountryCode {
    #[serde(rename = "US")]
    Us,
    #[serde(rename = "CA")]
    Ca,
}

impl CountryCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            CountryCode::Us => "US",
            CountryCode::Ca => "CA",
        }
    }
}

impl fmt::Display for CountryCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 宿主註冊 widget 時需要的識別資訊
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetDescriptor {
    pub id_base: &'static str,
    pub name: &'static str,
    pub description: &'static str,
}

/// One text input on the admin form. Values are raw; escaping happens when
/// the form is rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    pub key: &'static str,
    pub label: &'static str,
    pub id: String,
    pub name: String,
    pub value: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_completeness() {
        assert!(!WidgetSettings::default().is_complete());

        let settings = WidgetSettings {
            title: "Pets".to_string(),
            postal_code: String::new(),
        };
        assert!(!settings.is_complete());

        let settings = WidgetSettings {
            title: "Pets".to_string(),
            postal_code: "90210".to_string(),
        };
        assert!(settings.is_complete());
    }

    #[test]
    fn test_instance_deserializes_missing_fields() {
        let instance: WidgetInstance = serde_json::from_str(r#"{"title":"Pets"}"#).unwrap();
        assert_eq!(instance.title.as_deref(), Some("Pets"));
        assert_eq!(instance.postal_code, None);
    }

    #[test]
    fn test_country_code_serializes_as_iso() {
        assert_eq!(serde_json::to_string(&CountryCode::Ca).unwrap(), r#""CA""#);
        assert_eq!(CountryCode::Us.to_string(), "US");
    }
}
