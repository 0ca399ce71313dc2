//! Finding the `<style>` and `<link>` elements of a custom menu's head.
use crate::html::{Html, ToHtml};
use crate::parseresult::PResult;
use crate::spacelike::spacelike;
use nom::branch::alt;
use nom::bytes::complete::{tag_no_case, take_while, take_while1};
use nom::character::complete::{char, multispace0, one_of};
use nom::combinator::{opt, peek};
use nom::sequence::{delimited, preceded};
use nom::Parser;
use std::io::{self, Write};

/// The elements a head section may contribute to a live page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeadTag {
    Style,
    Link,
}

impl HeadTag {
    pub fn name(self) -> &'static str {
        match self {
            HeadTag::Style => "style",
            HeadTag::Link => "link",
        }
    }
}

/// A detached `<style>` or `<link>` element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadElement {
    pub tag: HeadTag,
    /// Attributes in source order, names lowercased, values decoded.
    pub attributes: Vec<(String, String)>,
    /// The css of a style element; always empty for links.
    pub text: String,
}

impl HeadElement {
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Set `name` to `value`, replacing any earlier value.
    pub fn set_attribute(&mut self, name: &str, value: &str) {
        match self.attributes.iter_mut().find(|(n, _)| n == name) {
            Some((_, v)) => *v = value.to_owned(),
            None => self.attributes.push((name.to_owned(), value.to_owned())),
        }
    }
}

impl ToHtml for HeadElement {
    fn to_html(&self, out: &mut dyn Write) -> io::Result<()> {
        write!(out, "<{}", self.tag.name())?;
        for (name, value) in &self.attributes {
            write!(out, " {name}=\"")?;
            value.to_html(out)?;
            out.write_all(b"\"")?;
        }
        out.write_all(b">")?;
        if self.tag == HeadTag::Style {
            // Style content is raw text, it must not be escaped.
            Html(&self.text).to_html(out)?;
            out.write_all(b"</style>")?;
        }
        Ok(())
    }
}

/// Find the style and link elements of `head`, the way a browser does
/// when the content is put in a detached container.
///
/// All style elements come first, then all link elements, each in
/// document order.
/// Comments are skipped, as is the content of `<script>`, `<noscript>`,
/// `<title>` and `<textarea>`, which is text rather than markup there.
/// Other markup is ignored.
pub fn parse_head_elements(head: &str) -> Vec<HeadElement> {
    let mut styles = Vec::new();
    let mut links = Vec::new();
    let mut input = head;
    while !input.is_empty() {
        if let Ok((rest, ())) = spacelike(input) {
            input = rest;
        }
        match head_piece(input) {
            Ok((rest, piece)) => {
                match piece {
                    Some(e) if e.tag == HeadTag::Style => styles.push(e),
                    Some(e) => links.push(e),
                    None => (),
                }
                input = rest;
            }
            Err(_) => {
                // Skip to the next possible tag.
                let skip = input
                    .char_indices()
                    .skip(1)
                    .find(|&(_, c)| c == '<')
                    .map_or(input.len(), |(i, _)| i);
                input = &input[skip..];
            }
        }
    }
    styles.extend(links);
    styles
}

fn head_piece(input: &str) -> PResult<'_, Option<HeadElement>> {
    alt((
        style_element.map(Some),
        link_element.map(Some),
        text_element.map(|_| None::<HeadElement>),
    ))
    .parse(input)
}

fn style_element(input: &str) -> PResult<'_, HeadElement> {
    let (input, attributes) = start_tag("style").parse(input)?;
    let (input, text) = raw_text("style").parse(input)?;
    Ok((
        input,
        HeadElement {
            tag: HeadTag::Style,
            attributes,
            text: text.to_owned(),
        },
    ))
}

fn link_element(input: &str) -> PResult<'_, HeadElement> {
    let (input, attributes) = start_tag("link").parse(input)?;
    Ok((
        input,
        HeadElement {
            tag: HeadTag::Link,
            attributes,
            text: String::new(),
        },
    ))
}

/// An element whose content is never read as markup.
fn text_element(input: &str) -> PResult<'_, &str> {
    alt((
        skip_element("script"),
        skip_element("noscript"),
        skip_element("title"),
        skip_element("textarea"),
    ))
    .parse(input)
}

fn skip_element<'a>(
    name: &'static str,
) -> impl Parser<&'a str, Output = &'a str, Error = ErrorOf<'a>> {
    preceded(start_tag(name), raw_text(name))
}

/// An opening tag called `name` (in any case), giving its attributes.
fn start_tag<'a>(
    name: &'static str,
) -> impl Parser<&'a str, Output = Vec<(String, String)>, Error = ErrorOf<'a>> {
    delimited(
        (char('<'), tag_no_case(name), peek(one_of(" \t\r\n\x0c/>"))),
        attributes,
        char('>'),
    )
}

type ErrorOf<'a> = nom_language::error::VerboseError<&'a str>;

fn attributes(mut input: &str) -> PResult<'_, Vec<(String, String)>> {
    let mut attrs: Vec<(String, String)> = Vec::new();
    loop {
        let (rest, _) = attribute_gap(input)?;
        match attribute(rest) {
            Ok((rest, (name, value))) => {
                // The first of repeated attributes wins.
                if !attrs.iter().any(|(n, _)| *n == name) {
                    attrs.push((name, value));
                }
                input = rest;
            }
            Err(_) => return Ok((rest, attrs)),
        }
    }
}

fn attribute_gap(input: &str) -> PResult<'_, &str> {
    take_while(|c: char| c.is_whitespace() || c == '/').parse(input)
}

fn attribute_name(input: &str) -> PResult<'_, &str> {
    take_while1(|c: char| !c.is_whitespace() && !"/>=".contains(c))
        .parse(input)
}

fn attribute(input: &str) -> PResult<'_, (String, String)> {
    let (input, name) = attribute_name(input)?;
    let (input, value) =
        opt(preceded((multispace0, char('='), multispace0), attribute_value))
            .parse(input)?;
    Ok((
        input,
        (name.to_ascii_lowercase(), decode_entities(value.unwrap_or(""))),
    ))
}

fn attribute_value(input: &str) -> PResult<'_, &str> {
    alt((
        delimited(char('"'), take_while(|c: char| c != '"'), char('"')),
        delimited(char('\''), take_while(|c: char| c != '\''), char('\'')),
        take_while1(|c: char| !c.is_whitespace() && c != '>'),
    ))
    .parse(input)
}

/// The text up to the end tag `</name`, consuming the end tag.
///
/// Without an end tag, the text runs to the end of the input.
fn raw_text<'a>(
    name: &'static str,
) -> impl Parser<&'a str, Output = &'a str, Error = ErrorOf<'a>> {
    move |input: &'a str| -> PResult<'a, &'a str> {
        let end = format!("</{name}");
        let found = input
            .as_bytes()
            .windows(end.len())
            .position(|w| w.eq_ignore_ascii_case(end.as_bytes()));
        match found {
            Some(at) => {
                let after = &input[at + end.len()..];
                let rest = after.find('>').map_or("", |gt| &after[gt + 1..]);
                Ok((rest, &input[..at]))
            }
            None => Ok(("", input)),
        }
    }
}

/// Decode the character references that commonly appear in attribute
/// values, like `&amp;` in a font url.
fn decode_entities(value: &str) -> String {
    if !value.contains('&') {
        return value.to_owned();
    }
    const ENTITIES: [(&str, char); 8] = [
        ("&amp;", '&'),
        ("&lt;", '<'),
        ("&gt;", '>'),
        ("&quot;", '"'),
        ("&apos;", '\''),
        ("&#039;", '\''),
        ("&#39;", '\''),
        ("&#x27;", '\''),
    ];
    let mut out = String::with_capacity(value.len());
    let mut rest = value;
    while let Some(at) = rest.find('&') {
        out.push_str(&rest[..at]);
        rest = &rest[at..];
        match ENTITIES.iter().find(|(e, _)| rest.starts_with(e)) {
            Some((entity, c)) => {
                out.push(*c);
                rest = &rest[entity.len()..];
            }
            None => {
                out.push('&');
                rest = &rest[1..];
            }
        }
    }
    out.push_str(rest);
    out
}
