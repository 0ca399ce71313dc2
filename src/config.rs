use crate::errors::MenuError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// The texts diners see on pages that are not custom html.
///
/// The defaults are the Spanish texts of the public menu pages.
/// Any field left out when deserializing keeps its default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ViewerText {
    /// Shown for a menu without categories.
    pub no_categories: String,
    /// Shown for a category without visible dishes.
    pub coming_soon: String,
    /// Precedes the list of allergens of a dish.
    pub allergens_prefix: String,
    /// The back control of a built-in menu page.
    pub back_to_menus: String,
    /// The back control over a custom menu.
    pub back: String,
    pub no_menus_title: String,
    pub no_menus_detail: String,
    pub category_singular: String,
    pub category_plural: String,
    pub dish_singular: String,
    pub dish_plural: String,
    /// Summary of a menu without categories in the menu selector.
    pub empty_menu: String,
}

impl Default for ViewerText {
    fn default() -> Self {
        ViewerText {
            no_categories: "Todavía no hay categorías publicadas en este menú."
                .into(),
            coming_soon: "Próximamente añadiremos platos en esta sección."
                .into(),
            allergens_prefix: "Alérgenos:".into(),
            back_to_menus: "Volver a menús".into(),
            back: "Volver".into(),
            no_menus_title: "Aún no hay menús publicados".into(),
            no_menus_detail: "El equipo está preparando la carta. \
                              Vuelve a consultar este enlace en unos minutos."
                .into(),
            category_singular: "categoría".into(),
            category_plural: "categorías".into(),
            dish_singular: "plato".into(),
            dish_plural: "platos".into(),
            empty_menu: "Menú vacío".into(),
        }
    }
}

impl ViewerText {
    pub fn from_json(json: &str) -> Result<Self, MenuError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read texts from a json file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, MenuError> {
        Self::from_json(&fs::read_to_string(path)?)
    }

    /// "1 categoría", "3 categorías".
    pub fn categories(&self, n: usize) -> String {
        counted(n, &self.category_singular, &self.category_plural)
    }

    /// "1 plato", "3 platos".
    pub fn dishes(&self, n: usize) -> String {
        counted(n, &self.dish_singular, &self.dish_plural)
    }
}

fn counted(n: usize, singular: &str, plural: &str) -> String {
    format!("{n} {}", if n == 1 { singular } else { plural })
}
