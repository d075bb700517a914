use crate::core::form::form_fields;
use crate::core::render::render;
use crate::core::sanitize::sanitize_instance;
use crate::domain::model::{FormField, WidgetArgs, WidgetDescriptor, WidgetInstance, WidgetSettings};
use crate::domain::ports::{FieldNaming, TitleFilters, Widget};

pub const ID_BASE: &str = "pet_of_the_day_widget";

/// Adopt-a-Pet "pet of the day" embed for a US ZIP or Canadian postal code.
#[derive(Debug, Clone, Copy, Default)]
pub struct PetOfTheDayWidget;

impl PetOfTheDayWidget {
    pub fn new() -> Self {
        Self
    }
}

impl Widget for PetOfTheDayWidget {
    fn descriptor(&self) -> WidgetDescriptor {
        WidgetDescriptor {
            id_base: ID_BASE,
            name: "Pet of the Day Widget",
            description: "A widget to display a pet of the day from Adopt-a-Pet.com.",
        }
    }

    fn update(&self, new: &WidgetInstance, old: Option<&WidgetSettings>) -> WidgetSettings {
        sanitize_instance(new, old)
    }

    fn widget(
        &self,
        args: &WidgetArgs,
        instance: &WidgetSettings,
        filters: &TitleFilters,
    ) -> String {
        render(instance, args, filters)
    }

    fn form(&self, instance: Option<&WidgetSettings>, naming: &dyn FieldNaming) -> Vec<FormField> {
        form_fields(instance, naming)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::form::WidgetFieldNaming;

    #[test]
    fn test_update_then_widget() {
        let widget = PetOfTheDayWidget::new();
        let settings = widget.update(
            &WidgetInstance {
                title: Some("<i>Adopt</i> me".to_string()),
                postal_code: Some("90210".to_string()),
            },
            None,
        );
        assert_eq!(settings.title, "Adopt me");

        let html = widget.widget(&WidgetArgs::default(), &settings, &TitleFilters::new());
        assert!(html.starts_with("Adopt me<div"));
        assert!(html.contains("postal_code=90210&country_code=US"));
    }

    #[test]
    fn test_form_uses_descriptor_id() {
        let widget = PetOfTheDayWidget::new();
        let naming = WidgetFieldNaming::new(widget.descriptor().id_base, 1);
        let fields = widget.form(None, &naming);
        assert_eq!(fields[0].id, "widget-pet_of_the_day_widget-1-title");
    }
}
