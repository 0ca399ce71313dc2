//! The menu as supplied by the surrounding application.
//!
//! These values are read-only input: nothing in this crate mutates or
//! stores them.
use crate::errors::MenuError;
use serde::{Deserialize, Serialize};

/// A dish on a menu.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dish {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Price in major currency units, e.g. `12.5`.
    pub price: f64,
    pub currency: String,
    #[serde(default)]
    pub thumbnail: String,
    pub is_visible: bool,
    #[serde(default)]
    pub labels: Vec<String>,
    #[serde(default)]
    pub allergens: Vec<String>,
}

/// A category, with its dishes in position order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuDetailCategory {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub dishes: Vec<Dish>,
}

/// A fully resolved menu of a restaurant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RestaurantMenuDetail {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub categories: Vec<MenuDetailCategory>,
    #[serde(default)]
    pub is_default: bool,
    /// Creation timestamp as sent upstream (RFC 3339).
    #[serde(default)]
    pub created_at: String,
    /// Raw custom html template for this menu, if any.
    #[serde(default)]
    pub html_content: Option<String>,
}

impl RestaurantMenuDetail {
    /// Parse a menu from its upstream json representation.
    pub fn from_json(json: &str) -> Result<Self, MenuError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parse a list of menus from json.
    pub fn list_from_json(json: &str) -> Result<Vec<Self>, MenuError> {
        Ok(serde_json::from_str(json)?)
    }

    /// The custom html template, if there is one that isn't blank.
    pub fn custom_html(&self) -> Option<&str> {
        self.html_content
            .as_deref()
            .filter(|html| !html.trim().is_empty())
    }

    /// Dishes on this menu that diners can see.
    pub fn visible_dish_count(&self) -> usize {
        self.categories
            .iter()
            .map(|c| c.dishes.iter().filter(|d| d.is_visible).count())
            .sum()
    }
}

#[cfg(test)]
mod test {
    use super::RestaurantMenuDetail;

    const MENU: &str = r#"{
        "id": "m1",
        "name": "Carta",
        "isDefault": true,
        "createdAt": "2024-05-01T10:00:00Z",
        "htmlContent": null,
        "categories": [{
            "id": "c1",
            "name": "Entrantes",
            "description": "",
            "dishes": [
                {"id": "d1", "name": "Sopa", "description": "", "price": 5,
                 "currency": "EUR", "thumbnail": "", "isVisible": true,
                 "labels": ["Vegano"], "allergens": []},
                {"id": "d2", "name": "Pan", "price": 1.5,
                 "currency": "EUR", "isVisible": false}
            ]
        }]
    }"#;

    #[test]
    fn parse_upstream_json() {
        let menu = RestaurantMenuDetail::from_json(MENU).unwrap();
        assert_eq!(menu.id, "m1");
        assert!(menu.is_default);
        assert_eq!(menu.html_content, None);
        let dishes = &menu.categories[0].dishes;
        assert_eq!(dishes[0].labels, vec!["Vegano".to_string()]);
        assert_eq!(dishes[1].price, 1.5);
        assert!(dishes[1].allergens.is_empty());
        assert_eq!(menu.visible_dish_count(), 1);
    }

    #[test]
    fn bad_json_is_an_error() {
        let err = RestaurantMenuDetail::from_json("{\"id\": 1}").unwrap_err();
        assert!(err.to_string().starts_with("Invalid menu json"), "{err}");
    }

    #[test]
    fn blank_custom_html_is_ignored() {
        let mut menu = RestaurantMenuDetail::from_json(MENU).unwrap();
        assert_eq!(menu.custom_html(), None);
        menu.html_content = Some("  \n\t".into());
        assert_eq!(menu.custom_html(), None);
        menu.html_content = Some("<p>{{menuName}}</p>".into());
        assert_eq!(menu.custom_html(), Some("<p>{{menuName}}</p>"));
    }
}
