use crate::parseresult::PResult;
use nom::branch::alt;
use nom::bytes::complete::{tag, take_until};
use nom::character::complete::multispace1;
use nom::combinator::{rest, value};
use nom::multi::many0;
use nom::sequence::{preceded, terminated};
use nom::Parser;

/// Whitespace and html comments, in any number.
pub fn spacelike(input: &str) -> PResult<'_, ()> {
    value((), many0(alt((comment, value((), multispace1))))).parse(input)
}

/// An html comment.
///
/// A comment that is never closed runs to the end of the input, as in
/// a browser.
pub fn comment(input: &str) -> PResult<'_, ()> {
    value(
        (),
        preceded(
            tag("<!--"),
            alt((terminated(take_until("-->"), tag("-->")), rest)),
        ),
    )
    .parse(input)
}

#[cfg(test)]
mod test {
    use super::{comment, spacelike};

    #[test]
    fn comment1() {
        assert_eq!(comment("<!-- a simple comment -->"), Ok(("", ())));
    }
    #[test]
    fn comment2() {
        assert!(comment(" <!-- comment -->").is_err());
    }
    #[test]
    fn comment3() {
        assert_eq!(comment("<!-- comment --> & stuff"), Ok((" & stuff", ())));
    }
    #[test]
    fn comment4() {
        assert_eq!(
            comment("<!-- comment --> and <!-- another -->"),
            Ok((" and <!-- another -->", ()))
        );
    }
    #[test]
    fn comment5() {
        assert_eq!(
            comment("<!-- <style>p{}</style> -- > -->x"),
            Ok(("x", ()))
        );
    }
    #[test]
    fn comment6() {
        assert_eq!(comment("<!-- never closed <link>"), Ok(("", ())));
    }
    #[test]
    fn spacelike_mixed() {
        assert_eq!(
            spacelike("  <!-- a -->\n\t<!--b--> <style>"),
            Ok(("<style>", ()))
        );
        assert_eq!(spacelike("<style>"), Ok(("<style>", ())));
    }
}
