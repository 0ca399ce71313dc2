//! Which names a template may use where, and what they resolve to.
use crate::template_data::{TemplateCategory, TemplateData, TemplateItem};

/// The section a part of a template is in.
///
/// The scope decides which `{{#name}}` tags open a section there.
/// Any other opening or closing tag is plain text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    /// A template rendered without a menu: no sections at all.
    Bare,
    /// The top level of a template.
    Root,
    /// Inside `{{#categories}}`.
    Category,
    /// Inside `{{#items}}`.
    Item,
    /// Inside `{{#itemLabels}}`.
    Label,
    /// Inside `{{#itemAllergens}}`.
    Allergen,
}

impl Scope {
    /// The scope of a section called `name` opened in this scope, if
    /// that is a section here.
    pub fn section(self, name: &str) -> Option<Scope> {
        match (self, name) {
            (Scope::Root, "categories") => Some(Scope::Category),
            (Scope::Category, "items") => Some(Scope::Item),
            (Scope::Item | Scope::Allergen, "itemLabels") => Some(Scope::Label),
            (Scope::Item | Scope::Label, "itemAllergens") => {
                Some(Scope::Allergen)
            }
            _ => None,
        }
    }
}

/// One level of data while rendering.
#[derive(Debug, Clone, Copy)]
pub enum Frame<'d> {
    Root(&'d TemplateData),
    Category(&'d TemplateCategory),
    Item(&'d TemplateItem),
    Label(&'d str),
    Allergen(&'d str),
}

impl<'d> Frame<'d> {
    /// The value of `name` in this frame.
    ///
    /// `None` both for names that don't belong here and for optional
    /// values that are empty; the tag is then left in the output.
    fn lookup(&self, name: &str) -> Option<&'d str> {
        match (*self, name) {
            (Frame::Root(data), "restaurantName") => Some(&data.restaurant_name),
            (Frame::Root(data), "menuName") => non_empty(&data.menu_name),
            (Frame::Category(c), "categoryName") => Some(&c.category_name),
            (Frame::Category(c), "categoryDescription") => {
                non_empty(&c.category_description)
            }
            (Frame::Item(i), "itemName") => Some(&i.item_name),
            (Frame::Item(i), "itemDescription") => Some(&i.item_description),
            (Frame::Item(i), "itemPrice") => Some(&i.item_price),
            (Frame::Item(i), "itemCurrency") => Some(&i.item_currency),
            (Frame::Label(label), "label") => Some(label),
            (Frame::Allergen(allergen), "allergen") => Some(allergen),
            _ => None,
        }
    }

    /// The frames to render a section called `name` with, one per
    /// repetition.
    pub fn children(&self, name: &str) -> Vec<Frame<'d>> {
        match (*self, name) {
            (Frame::Root(data), "categories") => {
                data.categories.iter().map(Frame::Category).collect()
            }
            (Frame::Category(c), "items") => {
                c.items.iter().map(Frame::Item).collect()
            }
            (Frame::Item(i), "itemLabels") => strings(&i.item_labels)
                .map(Frame::Label)
                .collect(),
            (Frame::Item(i), "itemAllergens") => strings(&i.item_allergens)
                .map(Frame::Allergen)
                .collect(),
            _ => Vec::new(),
        }
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

fn strings(list: &Option<Vec<String>>) -> impl Iterator<Item = &str> {
    list.iter().flatten().map(String::as_str)
}

/// The chain of frames from the innermost section out to the root.
pub struct Context<'c, 'd> {
    frame: Frame<'d>,
    parent: Option<&'c Context<'c, 'd>>,
}

impl<'c, 'd> Context<'c, 'd> {
    pub fn root(frame: Frame<'d>) -> Self {
        Context { frame, parent: None }
    }

    pub fn nested(&'c self, frame: Frame<'d>) -> Context<'c, 'd> {
        Context {
            frame,
            parent: Some(self),
        }
    }

    /// Resolve `name` in the innermost frame that knows it.
    pub fn lookup(&self, name: &str) -> Option<&'d str> {
        let mut ctx = Some(self);
        while let Some(c) = ctx {
            if let Some(value) = c.frame.lookup(name) {
                return Some(value);
            }
            ctx = c.parent;
        }
        None
    }

    /// The repetitions of section `name`.
    ///
    /// The data for a section is found in the nearest frame that has
    /// it, so an allergen block inside a label block still iterates the
    /// item's allergens.
    pub fn children(&self, name: &str) -> Vec<Frame<'d>> {
        let mut ctx = Some(self);
        while let Some(c) = ctx {
            let children = c.frame.children(name);
            if !children.is_empty() || c.frame.owns_section(name) {
                return children;
            }
            ctx = c.parent;
        }
        Vec::new()
    }
}

impl<'d> Frame<'d> {
    fn owns_section(&self, name: &str) -> bool {
        matches!(
            (*self, name),
            (Frame::Root(_), "categories")
                | (Frame::Category(_), "items")
                | (Frame::Item(_), "itemLabels" | "itemAllergens")
        )
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn item() -> TemplateItem {
        TemplateItem {
            item_name: "Soup".into(),
            item_description: String::new(),
            item_price: "5.00".into(),
            item_currency: "€".into(),
            item_labels: Some(vec!["Vegan".into(), "Hot".into()]),
            item_allergens: None,
        }
    }

    #[test]
    fn sections_per_scope() {
        assert_eq!(Scope::Root.section("categories"), Some(Scope::Category));
        assert_eq!(Scope::Root.section("items"), None);
        assert_eq!(Scope::Category.section("items"), Some(Scope::Item));
        assert_eq!(Scope::Category.section("categories"), None);
        assert_eq!(Scope::Item.section("itemLabels"), Some(Scope::Label));
        assert_eq!(Scope::Label.section("itemLabels"), None);
        assert_eq!(Scope::Label.section("itemAllergens"), Some(Scope::Allergen));
        assert_eq!(Scope::Bare.section("categories"), None);
    }

    #[test]
    fn lookup_walks_outwards() {
        let data = TemplateData {
            restaurant_name: "Luna".into(),
            menu_name: Some(String::new()),
            categories: vec![],
        };
        let item = item();
        let root = Context::root(Frame::Root(&data));
        let inner = root.nested(Frame::Item(&item));
        assert_eq!(inner.lookup("itemName"), Some("Soup"));
        assert_eq!(inner.lookup("restaurantName"), Some("Luna"));
        assert_eq!(inner.lookup("menuName"), None);
        assert_eq!(root.lookup("itemName"), None);
    }

    #[test]
    fn children_from_nearest_owner() {
        let data = TemplateData::restaurant_only("Luna");
        let item = item();
        let root = Context::root(Frame::Root(&data));
        let in_item = root.nested(Frame::Item(&item));
        let in_label = in_item.nested(Frame::Label("Vegan"));
        assert_eq!(in_item.children("itemLabels").len(), 2);
        assert!(in_label.children("itemAllergens").is_empty());
        assert!(root.children("categories").is_empty());
    }
}
