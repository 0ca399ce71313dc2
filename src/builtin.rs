//! Structural html for menus without a custom template.
use crate::config::ViewerText;
use crate::html::{JoinToHtml, ToHtml};
use crate::model::{Dish, MenuDetailCategory, RestaurantMenuDetail};
use crate::template_data::to_fixed_2;
use crate::viewer::SelectorEntry;
use itertools::Itertools;
use std::io::{self, Write};

/// Currencies that Spanish formatting shows without forced decimals.
const ZERO_DECIMAL: [&str; 5] = ["CLP", "ISK", "JPY", "KRW", "VND"];

/// Format `amount` of `currency` the way a Spanish diner reads it.
///
/// A blank currency means euros.
/// Codes that are not three ascii letters can't be formatted, and give
/// the plain amount followed by the code instead.
///
/// ```
/// use menu_templates::format_price;
/// assert_eq!(format_price(12.5, "EUR"), "12,50\u{a0}€");
/// assert_eq!(format_price(12345.0, ""), "12.345,00\u{a0}€");
/// assert_eq!(format_price(9.99, "usd"), "9,99\u{a0}US$");
/// assert_eq!(format_price(3.0, "euros"), "3.00 euros");
/// ```
pub fn format_price(amount: f64, currency: &str) -> String {
    let code = if currency.trim().is_empty() {
        "EUR"
    } else {
        currency
    };
    if !(code.len() == 3 && code.bytes().all(|b| b.is_ascii_alphabetic())) {
        return format!("{} {code}", to_fixed_2(amount)).trim().to_owned();
    }
    let code = code.to_ascii_uppercase();
    let symbol = match code.as_str() {
        "EUR" => "€",
        "USD" => "US$",
        other => other,
    };
    let number = if amount.is_nan() {
        "NaN".to_owned()
    } else if amount.is_infinite() {
        "∞".to_owned()
    } else {
        // Grouped digits even where `toFixed` switches to an exponent.
        let fixed = if amount.abs() < 1e21 {
            to_fixed_2(amount.abs())
        } else {
            format!("{:.2}", amount.abs())
        };
        let (int, frac) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
        let frac = if ZERO_DECIMAL.contains(&code.as_str()) {
            frac.trim_end_matches('0')
        } else {
            frac
        };
        if frac.is_empty() {
            group_thousands(int)
        } else {
            format!("{},{frac}", group_thousands(int))
        }
    };
    let sign = if amount.is_sign_negative() && !amount.is_nan() {
        "-"
    } else {
        ""
    };
    format!("{sign}{number}\u{a0}{symbol}")
}

/// Spanish grouping: a `.` every three digits, but only for numbers
/// of at least five digits.
fn group_thousands(digits: &str) -> String {
    if digits.len() < 5 {
        return digits.to_owned();
    }
    let lead = digits.len() % 3;
    std::iter::once(&digits[..lead])
        .filter(|group| !group.is_empty())
        .chain((lead..digits.len()).step_by(3).map(|i| &digits[i..i + 3]))
        .format(".")
        .to_string()
}

/// A whole built-in menu page: optional back control, the restaurant
/// name and the menu.
pub fn menu_page(
    out: &mut dyn Write,
    restaurant_name: &str,
    menu: &RestaurantMenuDetail,
    show_back: bool,
    text: &ViewerText,
) -> io::Result<()> {
    out.write_all(b"<div class=\"menu-page\">\n")?;
    if show_back {
        out.write_all(
            b"<button type=\"button\" class=\"menu-back\" data-menu-back>",
        )?;
        text.back_to_menus.to_html(out)?;
        out.write_all(b"</button>\n")?;
    }
    restaurant_heading(out, restaurant_name)?;
    menu_section(out, menu, text)?;
    out.write_all(b"</div>\n")
}

/// The categories and dishes of `menu`.
pub fn menu_section(
    out: &mut dyn Write,
    menu: &RestaurantMenuDetail,
    text: &ViewerText,
) -> io::Result<()> {
    out.write_all(b"<div class=\"menu-section\">\n")?;
    if menu.categories.is_empty() {
        out.write_all(b"<p class=\"menu-empty\">")?;
        text.no_categories.to_html(out)?;
        out.write_all(b"</p>\n")?;
    }
    for category in &menu.categories {
        category_block(out, category, text)?;
    }
    out.write_all(b"</div>\n")
}

fn category_block(
    out: &mut dyn Write,
    category: &MenuDetailCategory,
    text: &ViewerText,
) -> io::Result<()> {
    out.write_all(b"<div class=\"menu-category\">\n<h2>")?;
    category.name.to_html(out)?;
    out.write_all(b"</h2>\n")?;
    let visible = category.dishes.iter().filter(|d| d.is_visible).collect_vec();
    if visible.is_empty() {
        out.write_all(b"<p class=\"menu-coming-soon\">")?;
        text.coming_soon.to_html(out)?;
        out.write_all(b"</p>\n")?;
    } else {
        out.write_all(b"<div class=\"menu-dishes\">\n")?;
        for dish in visible {
            dish_block(out, dish, text)?;
        }
        out.write_all(b"</div>\n")?;
    }
    out.write_all(b"</div>\n")
}

fn dish_block(
    out: &mut dyn Write,
    dish: &Dish,
    text: &ViewerText,
) -> io::Result<()> {
    out.write_all(b"<article class=\"menu-dish\">\n<div class=\"menu-dish-header\"><h3>")?;
    dish.name.to_html(out)?;
    out.write_all(b"</h3><p class=\"menu-dish-price\">")?;
    format_price(dish.price, &dish.currency).to_html(out)?;
    out.write_all(b"</p></div>\n")?;
    if !dish.description.is_empty() {
        out.write_all(b"<p class=\"menu-dish-description\">")?;
        dish.description.to_html(out)?;
        out.write_all(b"</p>\n")?;
    }
    if !dish.labels.is_empty() {
        out.write_all(b"<div class=\"menu-dish-labels\">")?;
        for label in &dish.labels {
            out.write_all(b"<span class=\"menu-label\">")?;
            label.to_html(out)?;
            out.write_all(b"</span>")?;
        }
        out.write_all(b"</div>\n")?;
    }
    if !dish.allergens.is_empty() {
        out.write_all(b"<p class=\"menu-dish-allergens\">")?;
        text.allergens_prefix.to_html(out)?;
        out.write_all(b" ")?;
        dish.allergens.iter().join_to_html(", ").to_html(out)?;
        out.write_all(b"</p>\n")?;
    }
    out.write_all(b"</article>\n")
}

/// The page shown when a restaurant has no published menus.
pub fn empty_page(
    out: &mut dyn Write,
    restaurant_name: &str,
    text: &ViewerText,
) -> io::Result<()> {
    out.write_all(b"<div class=\"menu-page\">\n")?;
    restaurant_heading(out, restaurant_name)?;
    out.write_all(b"<div class=\"menu-none\">\n<p class=\"menu-none-title\">")?;
    text.no_menus_title.to_html(out)?;
    out.write_all(b"</p>\n<p class=\"menu-none-detail\">")?;
    text.no_menus_detail.to_html(out)?;
    out.write_all(b"</p>\n</div>\n</div>\n")
}

/// The list of menus to choose from.
pub fn selector_page(
    out: &mut dyn Write,
    restaurant_name: &str,
    entries: &[SelectorEntry],
) -> io::Result<()> {
    out.write_all(b"<div class=\"menu-page\">\n")?;
    restaurant_heading(out, restaurant_name)?;
    out.write_all(b"<div class=\"menu-selector\">\n")?;
    for (i, entry) in entries.iter().enumerate() {
        if i > 0 {
            out.write_all(b"<div class=\"menu-divider\"></div>\n")?;
        }
        out.write_all(b"<button type=\"button\" class=\"menu-entry\" data-menu-id=\"")?;
        entry.menu_id.to_html(out)?;
        out.write_all(b"\"><h2>")?;
        entry.name.to_html(out)?;
        out.write_all(b"</h2><p class=\"menu-entry-summary\">")?;
        entry.summary.to_html(out)?;
        out.write_all(b"</p></button>\n")?;
    }
    out.write_all(b"</div>\n</div>\n")
}

fn restaurant_heading(
    out: &mut dyn Write,
    restaurant_name: &str,
) -> io::Result<()> {
    out.write_all(b"<h1 class=\"menu-restaurant\">")?;
    restaurant_name.to_html(out)?;
    out.write_all(b"</h1>\n")
}

#[cfg(test)]
mod test {
    use super::{format_price, group_thousands, menu_section};
    use crate::config::ViewerText;
    use crate::model::{Dish, MenuDetailCategory, RestaurantMenuDetail};
    use pretty_assertions::assert_eq;

    #[test]
    fn euro_prices() {
        assert_eq!(format_price(12.5, "EUR"), "12,50\u{a0}€");
        assert_eq!(format_price(5.0, ""), "5,00\u{a0}€");
        assert_eq!(format_price(5.0, "  "), "5,00\u{a0}€");
        assert_eq!(format_price(0.005, "eur"), "0,01\u{a0}€");
        assert_eq!(format_price(-3.5, "EUR"), "-3,50\u{a0}€");
    }

    #[test]
    fn grouping() {
        assert_eq!(format_price(1234.5, "EUR"), "1234,50\u{a0}€");
        assert_eq!(format_price(12345.0, "EUR"), "12.345,00\u{a0}€");
        assert_eq!(format_price(1234567.891, "EUR"), "1.234.567,89\u{a0}€");
        assert_eq!(
            format_price(1e21, "EUR"),
            "1.000.000.000.000.000.000.000,00\u{a0}€"
        );
        assert_eq!(group_thousands("100000"), "100.000");
        assert_eq!(group_thousands("0"), "0");
    }

    #[test]
    fn other_currencies() {
        assert_eq!(format_price(9.99, "USD"), "9,99\u{a0}US$");
        assert_eq!(format_price(7.0, "GBP"), "7,00\u{a0}GBP");
        assert_eq!(format_price(1500.0, "JPY"), "1500\u{a0}JPY");
        assert_eq!(format_price(1500.5, "JPY"), "1500,5\u{a0}JPY");
    }

    #[test]
    fn unformattable_currency() {
        assert_eq!(format_price(3.0, "euros"), "3.00 euros");
        assert_eq!(format_price(3.456, "€"), "3.46 €");
    }

    fn dish(name: &str, visible: bool) -> Dish {
        Dish {
            id: name.into(),
            name: name.into(),
            description: String::new(),
            price: 4.0,
            currency: "EUR".into(),
            thumbnail: String::new(),
            is_visible: visible,
            labels: vec![],
            allergens: vec![],
        }
    }

    fn menu(categories: Vec<MenuDetailCategory>) -> RestaurantMenuDetail {
        RestaurantMenuDetail {
            id: "m1".into(),
            name: "Carta".into(),
            categories,
            is_default: true,
            created_at: String::new(),
            html_content: None,
        }
    }

    fn section(menu: &RestaurantMenuDetail) -> String {
        let mut buf = Vec::new();
        menu_section(&mut buf, menu, &ViewerText::default()).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn no_categories() {
        assert_eq!(
            section(&menu(vec![])),
            "<div class=\"menu-section\">\n\
             <p class=\"menu-empty\">Todavía no hay categorías publicadas en este menú.</p>\n\
             </div>\n"
        );
    }

    #[test]
    fn hidden_dishes_mean_coming_soon() {
        let m = menu(vec![MenuDetailCategory {
            id: "c1".into(),
            name: "Postres".into(),
            description: String::new(),
            dishes: vec![dish("Flan", false)],
        }]);
        let html = section(&m);
        assert!(html.contains("<h2>Postres</h2>"));
        assert!(html.contains("Próximamente añadiremos platos en esta sección."));
        assert!(!html.contains("Flan"));
    }

    #[test]
    fn full_dish() {
        let mut d = dish("Fish & Chips", true);
        d.description = "With \"sauce\"".into();
        d.labels = vec!["Picante".into()];
        d.allergens = vec!["gluten".into(), "pescado".into()];
        let m = menu(vec![MenuDetailCategory {
            id: "c1".into(),
            name: "Mains".into(),
            description: String::new(),
            dishes: vec![d, dish("Hidden", false)],
        }]);
        assert_eq!(
            section(&m),
            "<div class=\"menu-section\">\n\
             <div class=\"menu-category\">\n<h2>Mains</h2>\n\
             <div class=\"menu-dishes\">\n\
             <article class=\"menu-dish\">\n\
             <div class=\"menu-dish-header\"><h3>Fish &amp; Chips</h3>\
             <p class=\"menu-dish-price\">4,00\u{a0}€</p></div>\n\
             <p class=\"menu-dish-description\">With &quot;sauce&quot;</p>\n\
             <div class=\"menu-dish-labels\"><span class=\"menu-label\">Picante</span></div>\n\
             <p class=\"menu-dish-allergens\">Alérgenos: gluten, pescado</p>\n\
             </article>\n\
             </div>\n</div>\n</div>\n"
        );
    }
}
