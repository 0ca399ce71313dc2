use crate::parseresult::PResult;
use nom::bytes::complete::take_while1;
use nom::Parser;

/// A placeholder or section name, like `restaurantName` or
/// `itemLabels`.
///
/// Names are matched exactly and case-sensitively by the renderer, so
/// this only decides what *looks like* a name; unknown names are
/// passed through as text later.
pub fn placeholder_name(input: &str) -> PResult<'_, &str> {
    take_while1(is_name_char).parse(input)
}

fn is_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}
