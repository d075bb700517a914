pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::{CliConfig, OutputMode};

pub use crate::config::toml_config::WidgetFile;
pub use crate::core::form::{render_form, WidgetFieldNaming, DEFAULT_TITLE};
pub use crate::core::registry::{register_default_widgets, WidgetRegistry};
pub use crate::core::render::render;
pub use crate::core::sanitize::{sanitize, sanitize_instance};
pub use crate::core::widget::{PetOfTheDayWidget, ID_BASE};
pub use crate::domain::model::{
    CountryCode, FormField, WidgetArgs, WidgetDescriptor, WidgetInstance, WidgetSettings,
};
pub use crate::domain::ports::{FieldNaming, TitleFilter, TitleFilters, Widget};
pub use crate::utils::error::{Result, WidgetError};
