use crate::domain::model::{FormField, WidgetSettings};
use crate::domain::ports::FieldNaming;
use crate::utils::escape::esc_attr;

pub const DEFAULT_TITLE: &str = "A Local Adoptable Pet";

/// Default host naming: `widget-{id_base}-{number}-{field}` for ids and
/// `widget-{id_base}[{number}][{field}]` for input names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetFieldNaming {
    pub id_base: String,
    pub number: u32,
}

impl WidgetFieldNaming {
    pub fn new(id_base: impl Into<String>, number: u32) -> Self {
        Self {
            id_base: id_base.into(),
            number,
        }
    }
}

impl FieldNaming for WidgetFieldNaming {
    fn field_id(&self, field: &str) -> String {
        format!("widget-{}-{}-{}", self.id_base, self.number, field)
    }

    fn field_name(&self, field: &str) -> String {
        format!("widget-{}[{}][{}]", self.id_base, self.number, field)
    }
}

/// Title and postal code inputs, pre-filled from the saved settings. Before
/// the first save the title falls back to [`DEFAULT_TITLE`].
pub fn form_fields(instance: Option<&WidgetSettings>, naming: &dyn FieldNaming) -> Vec<FormField> {
    let title = instance
        .map(|s| s.title.clone())
        .unwrap_or_else(|| DEFAULT_TITLE.to_string());
    let postal_code = instance
        .map(|s| s.postal_code.clone())
        .unwrap_or_default();

    vec![
        field("title", "Title:", title, naming),
        field("postal_code", "Postal Code:", postal_code, naming),
    ]
}

fn field(key: &'static str, label: &'static str, value: String, naming: &dyn FieldNaming) -> FormField {
    FormField {
        key,
        label,
        id: naming.field_id(key),
        name: naming.field_name(key),
        value,
    }
}

pub fn render_form(fields: &[FormField]) -> String {
    fields
        .iter()
        .map(|f| {
            format!(
                "<p>\n\t<label for=\"{id}\">{label}</label>\n\t<input class=\"widefat\" id=\"{id}\" name=\"{name}\" type=\"text\" value=\"{value}\">\n</p>",
                id = esc_attr(&f.id),
                label = esc_attr(f.label),
                name = esc_attr(&f.name),
                value = esc_attr(&f.value),
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
