// This module is only a chapter of the documentation.
//! This module describes the placeholder syntax of custom menu
//! templates.
//!
//! The syntax is a small subset of
//! [mustache](https://mustache.github.io/), with a fixed set of names.
//!
//! A template is html, where placeholders in double curly brackets are
//! replaced by data from the menu.
//! There are plain placeholders, `{{name}}`, and sections,
//! `{{#name}}...{{/name}}`, that are repeated once for each element of
//! a list.
//!
//! ```text
//! <h1>{{restaurantName}}</h1>
//! {{#categories}}
//!   <h2>{{categoryName}}</h2>
//!   {{#items}}<p>{{itemName}}: {{itemPrice}} {{itemCurrency}}</p>{{/items}}
//! {{/categories}}
//! ```
//!
//! Names are case sensitive, and no whitespace is allowed inside the
//! brackets.
//! Anything in brackets that is not a known name in its place is left
//! in the output exactly as written, as is a section that is never
//! closed.
//! A template never fails to render.
#![allow(non_snake_case)]

pub mod a_Values {
    //! Every value is html-escaped when inserted.
    //!
    //! # Values
    //!
    //! The names available at the top level of a template are:
    //!
    //! | Name | Value |
    //! |------|-------|
    //! | `restaurantName` | The name of the restaurant. |
    //! | `menuName` | The name of the menu. |
    //!
    //! The characters `&`, `<`, `>`, `"` and `'` in a value are written
    //! as `&amp;`, `&lt;`, `&gt;`, `&quot;` and `&#039;`.
    //! The template itself is never escaped, so it can contain any
    //! markup.
    //!
    //! ```text
    //! <title>{{restaurantName}} - {{menuName}}</title>
    //! ```
    //!
    //! A value is never read as a placeholder itself, so a restaurant
    //! called `{{menuName}}` gets exactly that name on the page.
    //! The same holds for every value inside sections: a dish named
    //! `{{itemPrice}}` shows `{{itemPrice}}`, not its price.
    //! Placeholders are only found in the template as written, never
    //! in text that was substituted into it.
    //!
    //! An empty `menuName` (or `categoryDescription`, see below) is not
    //! replaced at all; the placeholder is left in the output.
}

pub mod b_Sections {
    //! Sections repeat their content for each category, item, label
    //! or allergen.
    //!
    //! # Sections
    //!
    //! `{{#categories}}` repeats for each category of the menu that has
    //! at least one visible dish, in menu order.
    //! Inside it are the names `categoryName` and
    //! `categoryDescription`, and the section `{{#items}}`.
    //!
    //! `{{#items}}` repeats for each visible dish of the category.
    //! Inside it are the names `itemName`, `itemDescription`,
    //! `itemPrice` (always with two decimals, like `12.50`) and
    //! `itemCurrency`, and the sections `{{#itemLabels}}` and
    //! `{{#itemAllergens}}`.
    //!
    //! ```text
    //! {{#items}}
    //!   <h3>{{itemName}}</h3>
    //!   <ul>{{#itemLabels}}<li>{{label}}</li>{{/itemLabels}}</ul>
    //!   <p>{{#itemAllergens}}{{allergen}} {{/itemAllergens}}</p>
    //! {{/items}}
    //! ```
    //!
    //! A section with nothing to repeat is removed with all its
    //! content, so a dish without labels gets an empty `<ul></ul>`
    //! above.
    //!
    //! Names from outside a section are available inside it, so
    //! `{{restaurantName}}` can be used anywhere.
    //! Names from inside a section are not available outside it.
    //!
    //! A section ends at the first closing tag with its name.
    //! A section can't contain itself; `{{#categories}}` inside a
    //! category is left as text.
    //! A section name used where that section is not available, like
    //! `{{#items}}` at the top level, is also left as text.
}

pub mod c_Pages_without_menu {
    //! Pages rendered without a menu know only the restaurant name.
    //!
    //! # Pages without a menu
    //!
    //! When a template is rendered without menu data, only
    //! `{{restaurantName}}` is replaced.
    //! Everything else, including `{{menuName}}` and any section, is
    //! left exactly as written.
}

pub mod d_Complete_documents {
    //! A template may be a complete html document.
    //!
    //! # Complete documents
    //!
    //! A template that starts with `<!DOCTYPE`, `<!doctype`, `<html` or
    //! `<HTML` (after any whitespace) is a complete document.
    //! The content of its `<body>` is shown in the page, and the
    //! `<style>` and `<link>` elements of its `<head>` are added to the
    //! head of the page while the menu is shown.
    //!
    //! ```text
    //! <!DOCTYPE html>
    //! <html>
    //!   <head>
    //!     <link rel="stylesheet" href="https://fonts.googleapis.com/css2?family=Lora">
    //!     <style>h1 { font-family: Lora; }</style>
    //!   </head>
    //!   <body>
    //!     <h1>{{restaurantName}}</h1>
    //!   </body>
    //! </html>
    //! ```
    //!
    //! Other head elements, like `<title>`, `<meta>` or `<script>`, are
    //! not used.
}
