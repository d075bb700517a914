use crate::core::widget::PetOfTheDayWidget;
use crate::domain::ports::Widget;
use crate::utils::error::{Result, WidgetError};
use std::collections::HashMap;

type WidgetFactory = Box<dyn Fn() -> Box<dyn Widget> + Send + Sync>;

/// Widget factories keyed by `id_base`. Owned by the host; there is no
/// process-wide registry.
#[derive(Default)]
pub struct WidgetRegistry {
    factories: HashMap<&'static str, WidgetFactory>,
}

impl WidgetRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register<F, W>(&mut self, factory: F) -> Result<()>
    where
        F: Fn() -> W + Send + Sync + 'static,
        W: Widget + 'static,
    {
        let id_base = factory().descriptor().id_base;
        if self.factories.contains_key(id_base) {
            return Err(WidgetError::DuplicateWidget {
                id_base: id_base.to_string(),
            });
        }

        tracing::debug!("Registered widget '{}'", id_base);
        self.factories
            .insert(id_base, Box::new(move || Box::new(factory()) as Box<dyn Widget>));
        Ok(())
    }

    pub fn create(&self, id_base: &str) -> Result<Box<dyn Widget>> {
        self.factories
            .get(id_base)
            .map(|factory| factory())
            .ok_or_else(|| WidgetError::UnknownWidget {
                id_base: id_base.to_string(),
            })
    }

    pub fn contains(&self, id_base: &str) -> bool {
        self.factories.contains_key(id_base)
    }

    /// Registered ids, sorted.
    pub fn ids(&self) -> Vec<&'static str> {
        let mut ids: Vec<_> = self.factories.keys().copied().collect();
        ids.sort_unstable();
        ids
    }
}

/// 宿主啟動時呼叫一次
pub fn register_default_widgets(registry: &mut WidgetRegistry) -> Result<()> {
    registry.register(PetOfTheDayWidget::new)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::widget::ID_BASE;

    #[test]
    fn test_register_and_create() {
        let mut registry = WidgetRegistry::new();
        register_default_widgets(&mut registry).unwrap();

        assert!(registry.contains(ID_BASE));
        assert_eq!(registry.ids(), vec![ID_BASE]);

        let widget = registry.create(ID_BASE).unwrap();
        assert_eq!(widget.descriptor().name, "Pet of the Day Widget");
    }

    #[test]
    fn test_duplicate_registration_rejected() {
        let mut registry = WidgetRegistry::new();
        register_default_widgets(&mut registry).unwrap();

        let err = register_default_widgets(&mut registry).unwrap_err();
        assert!(matches!(err, WidgetError::DuplicateWidget { ref id_base } if id_base == ID_BASE));
        assert_eq!(registry.ids().len(), 1);
    }

    #[test]
    fn test_unknown_widget() {
        let registry = WidgetRegistry::new();
        assert!(matches!(
            registry.create("calendar"),
            Err(WidgetError::UnknownWidget { .. })
        ));
    }
}
