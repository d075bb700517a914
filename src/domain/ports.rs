use crate::domain::model::{FormField, WidgetArgs, WidgetDescriptor, WidgetInstance, WidgetSettings};

/// A configurable content block the host can save, display and edit.
pub trait Widget: Send + Sync {
    fn descriptor(&self) -> WidgetDescriptor;

    /// Sanitize values submitted from the admin form. `old` is the previously
    /// saved settings, if any.
    fn update(&self, new: &WidgetInstance, old: Option<&WidgetSettings>) -> WidgetSettings;

    /// Render the front-end markup. An empty string means "render nothing".
    fn widget(&self, args: &WidgetArgs, instance: &WidgetSettings, filters: &TitleFilters)
        -> String;

    /// Admin form fields. `instance` is `None` before the first save.
    fn form(&self, instance: Option<&WidgetSettings>, naming: &dyn FieldNaming) -> Vec<FormField>;
}

/// Host hook applied to widget titles before output.
pub trait TitleFilter: Send + Sync {
    fn filter(&self, title: &str) -> String;
}

impl<F> TitleFilter for F
where
    F: Fn(&str) -> String + Send + Sync,
{
    fn filter(&self, title: &str) -> String {
        self(title)
    }
}

/// How the host names form inputs for a given widget instance.
pub trait FieldNaming {
    fn field_id(&self, field: &str) -> String;
    fn field_name(&self, field: &str) -> String;
}

/// 依註冊順序套用的標題過濾器
#[derive(Default)]
pub struct TitleFilters {
    filters: Vec<Box<dyn TitleFilter>>,
}

impl TitleFilters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add<F: TitleFilter + 'static>(&mut self, filter: F) -> &mut Self {
        self.filters.push(Box::new(filter));
        self
    }

    pub fn apply(&self, title: &str) -> String {
        self.filters
            .iter()
            .fold(title.to_string(), |acc, f| f.filter(&acc))
    }

    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }
}

impl std::fmt::Debug for TitleFilters {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TitleFilters")
            .field("len", &self.filters.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filters_apply_in_order() {
        let mut filters = TitleFilters::new();
        filters
            .add(|t: &str| format!("{}!", t))
            .add(|t: &str| t.to_uppercase());

        assert_eq!(filters.len(), 2);
        assert_eq!(filters.apply("pets"), "PETS!");
    }

    #[test]
    fn test_no_filters_is_pass_through() {
        let filters = TitleFilters::new();
        assert!(filters.is_empty());
        assert_eq!(filters.apply("A Local Adoptable Pet"), "A Local Adoptable Pet");
    }
}
