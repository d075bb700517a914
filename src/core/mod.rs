pub mod embed;
pub mod form;
pub mod postal;
pub mod registry;
pub mod render;
pub mod sanitize;
pub mod widget;

pub use crate::domain::model::{
    CountryCode, FormField, WidgetArgs, WidgetDescriptor, WidgetInstance, WidgetSettings,
};
pub use crate::domain::ports::{FieldNaming, TitleFilter, TitleFilters, Widget};
pub use crate::utils::error::Result;
