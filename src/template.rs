use crate::html::{Html, ToHtml};
use crate::parseresult::line_of;
use crate::scope::{Context, Frame, Scope};
use crate::template_data::TemplateData;
use crate::templateexpression::{tokenize, TagKind, Token};
use std::io::{self, Write};
use tracing::{trace, warn};

/// A parsed menu template.
///
/// Parsing never fails.
/// Tags that don't fit where they are written (unknown names,
/// sections that are never closed, closing tags without an opening
/// tag) stay in the template as text.
#[derive(Debug, PartialEq, Eq)]
pub struct Template<'t> {
    body: Vec<Node<'t>>,
}

#[derive(Debug, PartialEq, Eq)]
pub enum Node<'t> {
    Text(&'t str),
    Var { name: &'t str, raw: &'t str },
    Section { name: &'t str, body: Vec<Node<'t>> },
}

impl<'t> Template<'t> {
    /// Parse a template with the full placeholder grammar.
    pub fn parse(source: &'t str) -> Self {
        Self::parse_in(source, Scope::Root)
    }

    /// Parse a template where no sections are recognized, for pages
    /// rendered without a menu.
    pub fn parse_bare(source: &'t str) -> Self {
        Self::parse_in(source, Scope::Bare)
    }

    fn parse_in(source: &'t str, scope: Scope) -> Self {
        let tokens = tokenize(source);
        Template {
            body: parse_nodes(source, &tokens, scope),
        }
    }

    pub fn nodes(&self) -> &[Node<'t>] {
        &self.body
    }

    /// Bind this template to `data`, giving something that can be
    /// written as html.
    pub fn with<'a>(&'a self, data: &'a TemplateData) -> Rendering<'a, 't> {
        Rendering {
            template: self,
            data,
        }
    }

    /// Render this template with `data` to `out`.
    pub fn render_to(
        &self,
        data: &TemplateData,
        out: &mut dyn Write,
    ) -> io::Result<()> {
        let ctx = Context::root(Frame::Root(data));
        render_nodes(&self.body, &ctx, out)
    }

    /// Render this template with `data` to a string.
    pub fn render(&self, data: &TemplateData) -> String {
        match self.with(data).to_buffer() {
            Ok(buf) => buf.into_string(),
            Err(err) => {
                warn!(%err, "Rendering a template to memory failed");
                String::new()
            }
        }
    }
}

/// A template together with its data.
pub struct Rendering<'a, 't> {
    template: &'a Template<'t>,
    data: &'a TemplateData,
}

impl<'a, 't> ToHtml for Rendering<'a, 't> {
    fn to_html(&self, out: &mut dyn Write) -> io::Result<()> {
        self.template.render_to(self.data, out)
    }
}

fn parse_nodes<'t>(
    source: &'t str,
    tokens: &[Token<'t>],
    scope: Scope,
) -> Vec<Node<'t>> {
    let mut nodes = Vec::new();
    let mut i = 0;
    while i < tokens.len() {
        let token = tokens[i];
        match token {
            Token::Text(text) => nodes.push(Node::Text(text)),
            Token::Tag {
                kind: TagKind::Var(name),
                raw,
                ..
            } => nodes.push(Node::Var { name, raw }),
            Token::Tag {
                kind: TagKind::Open(name),
                pos,
                ..
            } => match scope.section(name) {
                Some(inner) => match find_close(&tokens[i + 1..], name) {
                    Some(len) => {
                        let body = &tokens[i + 1..i + 1 + len];
                        nodes.push(Node::Section {
                            name,
                            body: parse_nodes(source, body, inner),
                        });
                        // Skip the body and the closing tag.
                        i += len + 1;
                    }
                    None => {
                        trace!(
                            line = line_of(source, pos),
                            "Section {name:?} is never closed"
                        );
                        nodes.push(Node::Text(token.raw()));
                    }
                },
                None => nodes.push(Node::Text(token.raw())),
            },
            Token::Tag {
                kind: TagKind::Close(_),
                pos,
                ..
            } => {
                trace!(
                    line = line_of(source, pos),
                    "Stray closing tag {}",
                    token.raw()
                );
                nodes.push(Node::Text(token.raw()));
            }
        }
        i += 1;
    }
    nodes
}

/// The number of tokens before the first closing tag for `name`.
///
/// Opening tags on the way are not counted: a section ends at the
/// first matching close, so sections can't nest in themselves.
fn find_close(tokens: &[Token<'_>], name: &str) -> Option<usize> {
    tokens.iter().position(|t| {
        matches!(t, Token::Tag { kind: TagKind::Close(n), .. } if *n == name)
    })
}

fn render_nodes(
    nodes: &[Node<'_>],
    ctx: &Context<'_, '_>,
    out: &mut dyn Write,
) -> io::Result<()> {
    for node in nodes {
        match node {
            Node::Text(text) => Html(text).to_html(out)?,
            Node::Var { name, raw } => match ctx.lookup(name) {
                Some(value) => value.to_html(out)?,
                None => Html(raw).to_html(out)?,
            },
            Node::Section { name, body } => {
                for frame in ctx.children(name) {
                    render_nodes(body, &ctx.nested(frame), out)?;
                }
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod test {
    use super::{Node, Template};
    use crate::template_data::{TemplateCategory, TemplateData, TemplateItem};
    use pretty_assertions::assert_eq;

    fn item(name: &str, labels: &[&str], allergens: &[&str]) -> TemplateItem {
        TemplateItem {
            item_name: name.into(),
            item_description: String::new(),
            item_price: "5.00".into(),
            item_currency: "€".into(),
            item_labels: Some(labels.iter().map(|s| s.to_string()).collect()),
            item_allergens: Some(
                allergens.iter().map(|s| s.to_string()).collect(),
            ),
        }
    }

    fn data(categories: Vec<TemplateCategory>) -> TemplateData {
        TemplateData {
            restaurant_name: "Luna".into(),
            menu_name: Some("Carta".into()),
            categories,
        }
    }

    fn category(name: &str, items: Vec<TemplateItem>) -> TemplateCategory {
        TemplateCategory {
            category_name: name.into(),
            category_description: Some(String::new()),
            items,
        }
    }

    fn render(template: &str, data: &TemplateData) -> String {
        Template::parse(template).render(data)
    }

    #[test]
    fn parse_sections() {
        let t = Template::parse("a{{#categories}}{{categoryName}}{{/categories}}b");
        assert_eq!(
            t.nodes(),
            [
                Node::Text("a"),
                Node::Section {
                    name: "categories",
                    body: vec![Node::Var {
                        name: "categoryName",
                        raw: "{{categoryName}}"
                    }],
                },
                Node::Text("b"),
            ]
        );
    }

    #[test]
    fn unclosed_section_is_text() {
        let t = Template::parse("{{#categories}}x");
        assert_eq!(t.nodes(), [Node::Text("{{#categories}}"), Node::Text("x")]);
    }

    #[test]
    fn stray_close_is_text() {
        let t = Template::parse("x{{/categories}}");
        assert_eq!(
            t.nodes(),
            [Node::Text("x"), Node::Text("{{/categories}}")]
        );
    }

    #[test]
    fn sections_only_where_they_belong() {
        let t = Template::parse("{{#items}}x{{/items}}");
        assert_eq!(
            t.nodes(),
            [
                Node::Text("{{#items}}"),
                Node::Text("x"),
                Node::Text("{{/items}}")
            ]
        );
    }

    #[test]
    fn loops_repeat_in_order() {
        let d = data(vec![
            category("A", vec![item("a1", &[], &[]), item("a2", &[], &[])]),
            category("B", vec![item("b1", &[], &[])]),
        ]);
        assert_eq!(
            render(
                "{{#categories}}[{{categoryName}}:{{#items}}{{itemName}},{{/items}}]{{/categories}}",
                &d
            ),
            "[A:a1,a2,][B:b1,]"
        );
    }

    #[test]
    fn outer_names_visible_inside() {
        let d = data(vec![category("A", vec![item("a1", &["v"], &[])])]);
        assert_eq!(
            render(
                "{{#categories}}{{#items}}{{#itemLabels}}{{restaurantName}}/{{menuName}}/{{categoryName}}/{{itemName}}/{{label}}{{/itemLabels}}{{/items}}{{/categories}}",
                &d
            ),
            "Luna/Carta/A/a1/v"
        );
    }

    #[test]
    fn inner_names_stay_outside() {
        let d = data(vec![category("A", vec![item("a1", &[], &[])])]);
        assert_eq!(
            render("{{categoryName}}{{itemName}}{{label}}", &d),
            "{{categoryName}}{{itemName}}{{label}}"
        );
        assert_eq!(
            render("{{#categories}}{{itemName}}{{/categories}}", &d),
            "{{itemName}}"
        );
    }

    #[test]
    fn empty_optional_blocks_removed() {
        let d = data(vec![category("A", vec![item("x", &[], &[])])]);
        assert_eq!(
            render(
                "{{#categories}}{{#items}}<i>{{#itemLabels}}<span>{{label}}</span>{{/itemLabels}}{{#itemAllergens}}<b>{{allergen}}</b>{{/itemAllergens}}</i>{{/items}}{{/categories}}",
                &d
            ),
            "<i></i>"
        );
    }

    #[test]
    fn labels_and_allergens_repeat() {
        let d = data(vec![category(
            "A",
            vec![item("x", &["Vegan", "Spicy"], &["gluten"])],
        )]);
        assert_eq!(
            render(
                "{{#categories}}{{#items}}{{#itemLabels}}<span>{{label}}</span>{{/itemLabels}}|{{#itemAllergens}}<b>{{allergen}}</b>{{/itemAllergens}}{{/items}}{{/categories}}",
                &d
            ),
            "<span>Vegan</span><span>Spicy</span>|<b>gluten</b>"
        );
    }

    #[test]
    fn allergens_nested_in_labels() {
        let d = data(vec![category("A", vec![item("x", &["L1", "L2"], &["a"])])]);
        assert_eq!(
            render(
                "{{#categories}}{{#items}}{{#itemLabels}}{{label}}({{#itemAllergens}}{{allergen}}{{/itemAllergens}}){{/itemLabels}}{{/items}}{{/categories}}",
                &d
            ),
            "L1(a)L2(a)"
        );
    }

    #[test]
    fn first_close_wins() {
        let d = data(vec![category("A", vec![]), category("B", vec![])]);
        // The inner opening tag is not a section inside a category, and
        // the section ends at the first closing tag.
        assert_eq!(
            render(
                "{{#categories}}<{{#categories}}{{categoryName}}>{{/categories}}{{/categories}}",
                &d
            ),
            "<{{#categories}}A><{{#categories}}B>{{/categories}}"
        );
    }

    #[test]
    fn falsy_optionals_keep_their_tag() {
        let mut d = data(vec![category("A", vec![item("x", &[], &[])])]);
        d.menu_name = None;
        assert_eq!(
            render(
                "{{menuName}}{{#categories}}{{categoryDescription}}{{/categories}}",
                &d
            ),
            "{{menuName}}{{categoryDescription}}"
        );
        d.menu_name = Some(String::new());
        d.categories[0].category_description = Some("Hot & cold".into());
        assert_eq!(
            render(
                "{{menuName}}{{#categories}}{{categoryDescription}}{{/categories}}",
                &d
            ),
            "{{menuName}}Hot &amp; cold"
        );
    }

    #[test]
    fn values_are_not_template_syntax() {
        let mut d = data(vec![category("A", vec![item("x", &[], &[])])]);
        d.restaurant_name = "{{#categories}}{{categoryName}}{{/categories}}".into();
        assert_eq!(
            render("{{restaurantName}}", &d),
            "{{#categories}}{{categoryName}}{{/categories}}"
        );
    }

    #[test]
    fn dish_named_like_a_placeholder() {
        let d = data(vec![category("A", vec![item("{{itemPrice}}", &[], &[])])]);
        assert_eq!(
            render(
                "{{#categories}}{{#items}}{{itemName}} {{itemPrice}}{{/items}}{{/categories}}",
                &d
            ),
            "{{itemPrice}} 5.00"
        );
    }

    #[test]
    fn bare_template_has_no_sections() {
        let d = TemplateData::restaurant_only("Tom & Jerry's");
        let t = Template::parse_bare(
            "{{restaurantName}}{{#categories}}{{menuName}}{{/categories}}",
        );
        assert_eq!(
            t.render(&d),
            "Tom &amp; Jerry&#039;s{{#categories}}{{menuName}}{{/categories}}"
        );
    }

    #[test]
    fn any_garbage_passes() {
        let d = data(vec![]);
        for input in &[
            "",
            "{{",
            "}}",
            "{{/categories}}",
            "{{#categories}}{{#categories}}",
            "{{{restaurantName}}}",
            "{{#items}}{{/categories}}{{/items}}",
        ] {
            let _ = render(input, &d);
        }
        assert_eq!(render("{{{restaurantName}}}", &d), "{Luna}");
    }
}
