use std::fmt::Display;
use std::io::{self, Write};

/// This trait should be implemented for any value that can be
/// inserted into a rendered menu page.
///
/// This trait decides how to format the given object as html.
/// There exists a default implementation for any `T: Display` that
/// formats the value using Display and then html-encodes the result.
pub trait ToHtml {
    /// Write self to `out`, which is in html representation.
    fn to_html(&self, out: &mut dyn Write) -> io::Result<()>;

    /// Write the HTML represention of this value to a buffer.
    ///
    /// This can be used for testing, and for short-cutting situations
    /// with complex ownership, since the resulting buffer gets owned
    /// by the caller.
    ///
    /// # Examples
    /// ```
    /// # fn main() -> std::io::Result<()> {
    /// use menu_templates::html::ToHtml;
    /// assert_eq!(17.to_buffer()?, "17");
    /// assert_eq!("Fish & <Chips>".to_buffer()?, "Fish &amp; &lt;Chips&gt;");
    /// # Ok(())
    /// # }
    /// ```
    fn to_buffer(&self) -> io::Result<HtmlBuffer> {
        let mut buf = Vec::new();
        self.to_html(&mut buf)?;
        Ok(HtmlBuffer { buf })
    }
}

/// Return type for [`ToHtml::to_buffer`].
///
/// An opaque heap-allocated buffer containing a rendered HTML snippet.
pub struct HtmlBuffer {
    #[doc(hidden)]
    buf: Vec<u8>,
}

impl HtmlBuffer {
    /// Take the rendered snippet as a string.
    ///
    /// Everything written through [`ToHtml`] comes from `str` data and
    /// ascii entities, so the conversion is lossless in practice.
    pub fn into_string(self) -> String {
        match String::from_utf8(self.buf) {
            Ok(s) => s,
            Err(e) => String::from_utf8_lossy(e.as_bytes()).into_owned(),
        }
    }
}

impl std::fmt::Debug for HtmlBuffer {
    fn fmt(&self, out: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(out, "HtmlBuffer({:?})", String::from_utf8_lossy(&self.buf))
    }
}

impl ToHtml for HtmlBuffer {
    fn to_html(&self, out: &mut dyn Write) -> io::Result<()> {
        out.write_all(&self.buf)
    }
}

impl AsRef<[u8]> for HtmlBuffer {
    fn as_ref(&self) -> &[u8] {
        &self.buf
    }
}

impl PartialEq<&[u8]> for HtmlBuffer {
    fn eq(&self, other: &&[u8]) -> bool {
        &self.buf == other
    }
}
impl PartialEq<&str> for HtmlBuffer {
    fn eq(&self, other: &&str) -> bool {
        let other: &[u8] = other.as_ref();
        self.buf == other
    }
}

/// Wrapper object for data that should be outputted as raw html
/// (objects that may contain markup, like the static parts of a
/// menu template).
pub struct Html<T>(pub T);

impl<T: Display> ToHtml for Html<T> {
    #[inline]
    fn to_html(&self, out: &mut dyn Write) -> io::Result<()> {
        write!(out, "{}", self.0)
    }
}

impl<T: Display> ToHtml for T {
    #[inline]
    fn to_html(&self, out: &mut dyn Write) -> io::Result<()> {
        write!(ToHtmlEscapingWriter(out), "{self}")
    }
}

/// Escape `text` for inclusion in html.
///
/// Exactly the five characters `&`, `<`, `>`, `"` and `'` are
/// replaced, everything else is copied as is.
///
/// ```
/// use menu_templates::html::escape_html;
/// assert_eq!(escape_html("Tom's \"<b>\""), "Tom&#039;s &quot;&lt;b&gt;&quot;");
/// ```
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match escape_char(c) {
            Some(entity) => out.push_str(entity),
            None => out.push(c),
        }
    }
    out
}

#[inline]
fn escape_char(c: char) -> Option<&'static str> {
    match c {
        '&' => Some("&amp;"),
        '<' => Some("&lt;"),
        '>' => Some("&gt;"),
        '"' => Some("&quot;"),
        '\'' => Some("&#039;"),
        _ => None,
    }
}

struct ToHtmlEscapingWriter<'a>(&'a mut dyn Write);

impl<'a> Write for ToHtmlEscapingWriter<'a> {
    #[inline]
    // This takes advantage of the fact that `write` doesn't have to write everything,
    // and the call will be retried with the rest of the data
    // (it is a part of `write_all`'s loop or similar.)
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        // quickly skip over data that doesn't need escaping
        let n = data
            .iter()
            .take_while(|&&c| escape_char(char::from(c)).is_none())
            .count();
        if n > 0 {
            self.0.write(&data[0..n])
        } else {
            Self::write_one_byte_escaped(&mut self.0, data)
        }
    }

    #[inline]
    fn flush(&mut self) -> io::Result<()> {
        self.0.flush()
    }
}

impl<'a> ToHtmlEscapingWriter<'a> {
    #[inline(never)]
    fn write_one_byte_escaped(
        out: &mut impl Write,
        data: &[u8],
    ) -> io::Result<usize> {
        match data.first().and_then(|c| escape_char(char::from(*c))) {
            Some(entity) => out.write_all(entity.as_bytes())?,
            None => return Ok(0),
        }
        Ok(1)
    }
}

/// Adapter interface providing `join_to_html` method.
pub trait JoinToHtml<Item: ToHtml, I: Iterator<Item = Item>> {
    /// Format the items of the given iterator, separated by `sep`.
    ///
    /// # Example
    ///
    /// ```
    /// use menu_templates::html::{JoinToHtml, ToHtml};
    /// # fn main() -> std::io::Result<()> {
    /// assert_eq!(
    ///     ["gluten", "m<ilk", "egg"]
    ///         .iter()
    ///         .join_to_html(", ")
    ///         .to_buffer()?,
    ///     "gluten, m&lt;ilk, egg"
    /// );
    /// # Ok(())
    /// # }
    /// ```
    fn join_to_html<Sep: 'static + ToHtml>(self, sep: Sep) -> HtmlJoiner<I, Sep>;
}

impl<Item: ToHtml, Iter: Iterator<Item = Item> + Clone> JoinToHtml<Item, Iter>
    for Iter
{
    fn join_to_html<Sep: 'static + ToHtml>(self, sep: Sep) -> HtmlJoiner<Iter, Sep> {
        HtmlJoiner { items: self, sep }
    }
}

/// Return type for [`JoinToHtml::join_to_html`].
pub struct HtmlJoiner<Items, Sep> {
    items: Items,
    sep: Sep,
}

impl<Items, Sep> ToHtml for HtmlJoiner<Items, Sep>
where
    Items: Iterator + Clone,
    Items::Item: ToHtml,
    Sep: ToHtml,
{
    fn to_html(&self, out: &mut dyn Write) -> io::Result<()> {
        for (i, item) in self.items.clone().enumerate() {
            if i > 0 {
                self.sep.to_html(out)?;
            }
            item.to_html(out)?;
        }
        Ok(())
    }
}
