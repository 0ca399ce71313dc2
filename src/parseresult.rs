use nom::IResult;
use nom_language::error::VerboseError;

/// Parser result, with verbose error.
pub type PResult<'a, O> = IResult<&'a str, O, VerboseError<&'a str>>;

/// The 1-based line of byte offset `pos` in `buf`.
///
/// Used to point at the spot in a template or head section that a
/// diagnostic message is about.
pub fn line_of(buf: &str, pos: usize) -> usize {
    let pos = pos.min(buf.len());
    bytecount::count(&buf.as_bytes()[..pos], b'\n') + 1
}

/// The part of `buf` that `rest` has not consumed.
pub fn consumed<'a>(buf: &'a str, rest: &str) -> &'a str {
    &buf[..buf.len() - rest.len()]
}

#[cfg(test)]
mod test {
    use super::{consumed, line_of};

    #[test]
    fn lines() {
        let buf = "one\ntwo\nthree";
        assert_eq!(line_of(buf, 0), 1);
        assert_eq!(line_of(buf, 3), 1);
        assert_eq!(line_of(buf, 4), 2);
        assert_eq!(line_of(buf, 9), 3);
        assert_eq!(line_of(buf, 1000), 3);
    }

    #[test]
    fn consumed_prefix() {
        let buf = "{{name}} rest";
        assert_eq!(consumed(buf, &buf[8..]), "{{name}}");
    }
}
