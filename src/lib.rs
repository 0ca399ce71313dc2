//! Rendering of restaurant menus for public menu pages.
//!
//! A menu is shown either with the built-in layout, or with a custom
//! html template written by the restaurant.
//! Custom templates use a small mustache-like placeholder syntax,
//! described in [the template syntax chapter](Template_syntax).
//!
//! ```
//! use menu_templates::{
//!     replace_html_placeholders, Dish, MenuDetailCategory,
//!     RestaurantMenuDetail,
//! };
//!
//! let menu = RestaurantMenuDetail {
//!     id: "m1".into(),
//!     name: "Carta".into(),
//!     categories: vec![MenuDetailCategory {
//!         id: "c1".into(),
//!         name: "Starters".into(),
//!         description: String::new(),
//!         dishes: vec![Dish {
//!             id: "d1".into(),
//!             name: "Soup".into(),
//!             description: String::new(),
//!             price: 5.0,
//!             currency: "€".into(),
//!             thumbnail: String::new(),
//!             is_visible: true,
//!             labels: vec![],
//!             allergens: vec![],
//!         }],
//!     }],
//!     is_default: true,
//!     created_at: String::new(),
//!     html_content: None,
//! };
//! assert_eq!(
//!     replace_html_placeholders(
//!         "<h1>{{restaurantName}}</h1>{{#categories}}<h2>{{categoryName}}</h2>\
//!          {{#items}}<p>{{itemName}} - {{itemPrice}}{{itemCurrency}}</p>{{/items}}\
//!          {{/categories}}",
//!         "Café <Luna>",
//!         Some(&menu),
//!     ),
//!     "<h1>Café &lt;Luna&gt;</h1><h2>Starters</h2><p>Soup - 5.00€</p>",
//! );
//! ```
//!
//! A custom template may be a complete html document.
//! Its body is then shown in the page, and the styles and links of its
//! head are injected in the page head by a [`HeadInjector`] for as long
//! as the menu is shown.
//!
//! Nothing here installs a `tracing` subscriber; decisions are logged
//! at debug and trace level for the application to collect.

pub mod Template_syntax;

mod builtin;
mod config;
mod document;
mod errors;
mod expression;
mod head;
pub mod html;
mod injector;
mod model;
mod parseresult;
mod scope;
mod spacelike;
mod template;
mod template_data;
mod templateexpression;
mod viewer;

pub use crate::builtin::format_price;
pub use crate::config::ViewerText;
pub use crate::document::{
    extract_head_content, is_full_html_document, HtmlParts,
};
pub use crate::errors::MenuError;
pub use crate::head::{parse_head_elements, HeadElement, HeadTag};
pub use crate::injector::{
    checksum_slug, inject, DocumentHead, HeadInjector, Injection,
    MemoryHead, NodeId, MENU_MARKER,
};
pub use crate::model::{Dish, MenuDetailCategory, RestaurantMenuDetail};
pub use crate::template::{Node, Rendering, Template};
pub use crate::template_data::{
    to_fixed_2, transform_menu_data, TemplateCategory, TemplateData,
    TemplateItem,
};
pub use crate::viewer::{CustomMenu, MenuPage, MenuViewer, SelectorEntry};

use std::io::{self, Write};

/// Render `template` with `data` to a string.
pub fn render(template: &str, data: &TemplateData) -> String {
    Template::parse(template).render(data)
}

/// Render `template` with `data` to `out`.
///
/// Only writing can fail; any template renders.
pub fn render_to(
    template: &str,
    data: &TemplateData,
    out: &mut dyn Write,
) -> io::Result<()> {
    Template::parse(template).render_to(data, out)
}

/// Fill in the placeholders of a custom menu template.
///
/// With a `menu`, the full placeholder syntax is available.
/// Without one, only `{{restaurantName}}` is replaced and everything
/// else is left as written.
pub fn replace_html_placeholders(
    html: &str,
    restaurant_name: &str,
    menu: Option<&RestaurantMenuDetail>,
) -> String {
    match menu {
        Some(menu) => {
            render(html, &transform_menu_data(restaurant_name, menu))
        }
        None => Template::parse_bare(html)
            .render(&TemplateData::restaurant_only(restaurant_name)),
    }
}
