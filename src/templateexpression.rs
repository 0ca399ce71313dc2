use crate::expression::placeholder_name;
use crate::parseresult::{consumed, PResult};
use nom::bytes::complete::tag;
use nom::character::complete::one_of;
use nom::combinator::opt;
use nom::sequence::delimited;
use nom::Parser;

/// A lexical piece of a menu template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'t> {
    /// Markup between tags, copied to the output unchanged.
    Text(&'t str),
    /// A `{{...}}` tag; `raw` is its exact source text.
    Tag { kind: TagKind<'t>, raw: &'t str, pos: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagKind<'t> {
    /// `{{name}}`
    Var(&'t str),
    /// `{{#name}}`
    Open(&'t str),
    /// `{{/name}}`
    Close(&'t str),
}

impl<'t> Token<'t> {
    /// The source text of this token.
    pub fn raw(&self) -> &'t str {
        match *self {
            Token::Text(text) => text,
            Token::Tag { raw, .. } => raw,
        }
    }
}

/// A single `{{name}}`, `{{#name}}` or `{{/name}}` tag.
///
/// No whitespace is allowed inside the braces.
pub fn template_tag(input: &str) -> PResult<'_, TagKind<'_>> {
    delimited(tag("{{"), (opt(one_of("#/")), placeholder_name), tag("}}"))
        .map(|(sigil, name)| match sigil {
            Some('#') => TagKind::Open(name),
            Some(_) => TagKind::Close(name),
            None => TagKind::Var(name),
        })
        .parse(input)
}

/// Split `template` into text and tags.
///
/// This never fails: a `{{` that does not start a well-formed tag is
/// just text.
pub fn tokenize(template: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let mut text_start = 0;
    let mut pos = 0;
    while let Some(found) = template[pos..].find("{{") {
        let at = pos + found;
        match template_tag(&template[at..]) {
            Ok((rest, kind)) => {
                if text_start < at {
                    tokens.push(Token::Text(&template[text_start..at]));
                }
                let raw = consumed(&template[at..], rest);
                tokens.push(Token::Tag { kind, raw, pos: at });
                pos = at + raw.len();
                text_start = pos;
            }
            // Retry from the next brace, "{{{name}}" still holds a tag.
            Err(_) => pos = at + 1,
        }
    }
    if text_start < template.len() {
        tokens.push(Token::Text(&template[text_start..]));
    }
    tokens
}
