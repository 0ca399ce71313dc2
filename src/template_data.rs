//! The template-facing projection of a menu.
use crate::model::{Dish, MenuDetailCategory, RestaurantMenuDetail};

/// Everything a menu template can refer to.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TemplateData {
    pub restaurant_name: String,
    pub menu_name: Option<String>,
    /// Only categories with at least one visible dish, in menu order.
    pub categories: Vec<TemplateCategory>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TemplateCategory {
    pub category_name: String,
    pub category_description: Option<String>,
    pub items: Vec<TemplateItem>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TemplateItem {
    pub item_name: String,
    pub item_description: String,
    /// The price with exactly two decimals, e.g. `"12.50"`.
    pub item_price: String,
    pub item_currency: String,
    pub item_labels: Option<Vec<String>>,
    pub item_allergens: Option<Vec<String>>,
}

impl TemplateData {
    /// Data for a page that has no menu: only the restaurant name.
    pub fn restaurant_only(restaurant_name: &str) -> Self {
        TemplateData {
            restaurant_name: restaurant_name.to_owned(),
            ..TemplateData::default()
        }
    }
}

/// Project `menu` into [`TemplateData`].
///
/// Hidden dishes are left out, and so is any category left without
/// items.
/// Values are copied as is, escaping happens when they are rendered.
pub fn transform_menu_data(
    restaurant_name: &str,
    menu: &RestaurantMenuDetail,
) -> TemplateData {
    TemplateData {
        restaurant_name: restaurant_name.to_owned(),
        menu_name: Some(menu.name.clone()),
        categories: menu
            .categories
            .iter()
            .map(transform_category)
            .filter(|category| !category.items.is_empty())
            .collect(),
    }
}

fn transform_category(category: &MenuDetailCategory) -> TemplateCategory {
    TemplateCategory {
        category_name: category.name.clone(),
        category_description: Some(category.description.clone()),
        items: category
            .dishes
            .iter()
            .filter(|dish| dish.is_visible)
            .map(transform_dish)
            .collect(),
    }
}

fn transform_dish(dish: &Dish) -> TemplateItem {
    TemplateItem {
        item_name: dish.name.clone(),
        item_description: dish.description.clone(),
        item_price: to_fixed_2(dish.price),
        item_currency: dish.currency.clone(),
        item_labels: Some(dish.labels.clone()),
        item_allergens: Some(dish.allergens.clone()),
    }
}

/// Format `value` with exactly two decimals, independent of locale.
///
/// Rounding follows the web platform's `toFixed`: a value exactly
/// halfway between two cents rounds away from zero, where rust's
/// formatting would round to even.
/// From 1e21 up, `toFixed` gives the exponent form, like `1e+21`, and so
/// does this.
pub fn to_fixed_2(value: f64) -> String {
    if value.is_nan() {
        return "NaN".into();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.into();
    }
    if value == 0.0 {
        // Also turns -0.0 into 0.00.
        return "0.00".into();
    }
    if value.abs() >= 1e21 {
        // The exponent is always positive here.
        return format!("{value:e}").replacen('e', "e+", 1);
    }
    // Only multiples of 1/8 can lie exactly between two cents, and for
    // those the scaling below is exact.
    let scaled = value * 100.0;
    if (value * 8.0).fract() == 0.0 && scaled.fract().abs() == 0.5 {
        format!("{:.2}", scaled.round() / 100.0)
    } else {
        format!("{value:.2}")
    }
}
