use std::rc::Rc;

use shared::{interpolate, I18nOptions, LocaleCatalog};
use yew::prelude::*;

const BUNDLED_LOCALES: &str = include_str!("../locales.json");

/// Shared handle to the message catalog, provided at the app root.
#[derive(Debug, Clone, PartialEq)]
pub struct I18n {
    catalog: Rc<LocaleCatalog>,
}

impl I18n {
    /// Loads the bundled messages with `en` as both active and fallback locale.
    pub fn bundled() -> shared::Result<Self> {
        Self::load(BUNDLED_LOCALES, I18nOptions::default())
    }

    pub fn load(json: &str, options: I18nOptions) -> shared::Result<Self> {
        Ok(Self {
            catalog: Rc::new(LocaleCatalog::from_json(json, options)?),
        })
    }

    pub fn locale(&self) -> &str {
        self.catalog.active_locale()
    }

    /// Returns a copy of this handle with another active locale.
    pub fn with_locale(&self, locale: &str) -> Self {
        let mut catalog = (*self.catalog).clone();
        catalog.set_locale(locale);
        Self {
            catalog: Rc::new(catalog),
        }
    }

    pub fn t(&self, key: &str) -> String {
        self.catalog.translate(key)
    }

    pub fn t_with(&self, key: &str, args: &[(&str, &str)]) -> String {
        interpolate(&self.catalog.translate(key), args)
    }
}

#[hook]
pub fn use_i18n() -> I18n {
    use_context::<I18n>().expect("I18n context not found")
}
