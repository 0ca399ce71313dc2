//! Deciding what a diner sees on a restaurant's public menu page.
use crate::builtin;
use crate::config::ViewerText;
use crate::document::{extract_head_content, is_full_html_document};
use crate::model::RestaurantMenuDetail;
use crate::replace_html_placeholders;
use std::io::{self, Write};
use tracing::{debug, warn};

/// The published menus of one restaurant.
#[derive(Debug, Clone)]
pub struct MenuViewer {
    restaurant_name: String,
    menus: Vec<RestaurantMenuDetail>,
    text: ViewerText,
}

/// A page to show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuPage {
    /// The restaurant has no menus; the html explains that.
    Empty(String),
    /// Several menus and none chosen.
    Selector {
        entries: Vec<SelectorEntry>,
        html: String,
    },
    /// A menu without custom html, rendered by the built-in layout.
    Builtin(String),
    /// A menu with its own html.
    Custom(CustomMenu),
}

/// A menu as listed in the menu selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectorEntry {
    pub menu_id: String,
    pub name: String,
    pub category_count: usize,
    /// Visible dishes only.
    pub dish_count: usize,
    /// Like "2 categorías · 5 platos".
    pub summary: String,
}

/// A custom html menu, ready for a host page.
///
/// The host mounts `body_content` and gives `head_content` to a
/// [`HeadInjector`](crate::HeadInjector) keyed on `menu_id`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomMenu {
    pub menu_id: String,
    pub head_content: String,
    pub body_content: String,
    /// True if the menu html was a complete document.
    pub full_document: bool,
    /// True if there are other menus to go back to.
    pub show_back: bool,
    /// The label of the back control.
    pub back_label: String,
}

impl MenuViewer {
    pub fn new(
        restaurant_name: impl Into<String>,
        menus: Vec<RestaurantMenuDetail>,
    ) -> Self {
        MenuViewer {
            restaurant_name: restaurant_name.into(),
            menus,
            text: ViewerText::default(),
        }
    }

    /// Use other texts than the default Spanish ones.
    pub fn with_text(mut self, text: ViewerText) -> Self {
        self.text = text;
        self
    }

    pub fn menus(&self) -> &[RestaurantMenuDetail] {
        &self.menus
    }

    /// The menu to show without asking the diner.
    ///
    /// That is the menu called `default_menu_id` if there is one, or
    /// the only menu of the restaurant.
    /// With several menus and no valid default, the diner gets to
    /// choose, and this returns `None`.
    pub fn default_menu(
        &self,
        default_menu_id: Option<&str>,
    ) -> Option<&RestaurantMenuDetail> {
        default_menu_id
            .and_then(|id| self.menus.iter().find(|m| m.id == id))
            .or(match self.menus.as_slice() {
                [only] => Some(only),
                _ => None,
            })
    }

    /// The page to show when `selected` is the chosen menu id.
    ///
    /// An unknown id is treated as no choice.
    pub fn page(&self, selected: Option<&str>) -> MenuPage {
        if self.menus.is_empty() {
            debug!(restaurant = %self.restaurant_name, "No menus to show");
            return MenuPage::Empty(buffered(|out| {
                builtin::empty_page(out, &self.restaurant_name, &self.text)
            }));
        }
        let show_back = self.menus.len() >= 2;
        match self.default_menu(selected) {
            None => {
                let entries = self.selector_entries();
                let html = buffered(|out| {
                    builtin::selector_page(out, &self.restaurant_name, &entries)
                });
                MenuPage::Selector { entries, html }
            }
            Some(menu) => match menu.custom_html() {
                Some(template) => {
                    debug!(menu_id = %menu.id, "Showing custom html menu");
                    MenuPage::Custom(self.custom_menu(menu, template, show_back))
                }
                None => {
                    debug!(menu_id = %menu.id, "Showing built-in menu");
                    MenuPage::Builtin(buffered(|out| {
                        builtin::menu_page(
                            out,
                            &self.restaurant_name,
                            menu,
                            show_back,
                            &self.text,
                        )
                    }))
                }
            },
        }
    }

    fn custom_menu(
        &self,
        menu: &RestaurantMenuDetail,
        template: &str,
        show_back: bool,
    ) -> CustomMenu {
        let html =
            replace_html_placeholders(template, &self.restaurant_name, Some(menu));
        let parts = extract_head_content(&html);
        let body_content = if parts.body_content.is_empty() {
            html.clone()
        } else {
            parts.body_content.to_owned()
        };
        CustomMenu {
            menu_id: menu.id.clone(),
            head_content: parts.head_content.to_owned(),
            body_content,
            full_document: is_full_html_document(&html),
            show_back,
            back_label: self.text.back.clone(),
        }
    }

    /// One entry per menu, in order.
    pub fn selector_entries(&self) -> Vec<SelectorEntry> {
        self.menus
            .iter()
            .map(|menu| {
                let category_count = menu.categories.len();
                let dish_count = menu.visible_dish_count();
                let summary = if category_count == 0 {
                    self.text.empty_menu.clone()
                } else if dish_count == 0 {
                    self.text.categories(category_count)
                } else {
                    format!(
                        "{} · {}",
                        self.text.categories(category_count),
                        self.text.dishes(dish_count),
                    )
                };
                SelectorEntry {
                    menu_id: menu.id.clone(),
                    name: menu.name.clone(),
                    category_count,
                    dish_count,
                    summary,
                }
            })
            .collect()
    }
}

/// Run `render` into memory, where writing can't fail.
fn buffered(render: impl FnOnce(&mut dyn Write) -> io::Result<()>) -> String {
    let mut buf = Vec::new();
    if let Err(err) = render(&mut buf) {
        warn!(%err, "Rendering a page to memory failed");
    }
    String::from_utf8_lossy(&buf).into_owned()
}
