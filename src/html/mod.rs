//! Html output helpers shared by the template renderer and the
//! built-in menu renderer.
//!
//! Every user-controlled value (restaurant, menu, category and dish
//! names, descriptions, prices, labels and allergens) goes through
//! [`ToHtml`], which escapes it.
//! Static markup goes through [`Html`], which doesn't.

mod utils;
pub use self::utils::*;

#[test]
fn encoded() {
    let mut buf = Vec::new();
    "a < b\0\n".to_html(&mut buf).unwrap();
    assert_eq!(b"a &lt; b\0\n", &buf[..]);

    let mut buf = Vec::new();
    "'b".to_html(&mut buf).unwrap();
    assert_eq!(b"&#039;b", &buf[..]);

    let mut buf = Vec::new();
    "xxxxx>&".to_html(&mut buf).unwrap();
    assert_eq!(b"xxxxx&gt;&amp;", &buf[..]);
}

#[test]
fn encoded_empty() {
    let mut buf = Vec::new();
    "".to_html(&mut buf).unwrap();
    "".to_html(&mut buf).unwrap();
    assert_eq!(b"", &buf[..]);
}

#[test]
fn double_encoded() {
    let mut buf = Vec::new();
    "&amp;".to_html(&mut buf).unwrap();
    "&lt;".to_html(&mut buf).unwrap();
    assert_eq!(b"&amp;amp;&amp;lt;", &buf[..]);
}

#[test]
fn encoded_only() {
    assert_eq!(escape_html("&&&&"), "&amp;&amp;&amp;&amp;");
    assert_eq!(escape_html("''''"), "&#039;&#039;&#039;&#039;");
    assert_eq!(escape_html("\"\""), "&quot;&quot;");
}

#[test]
fn non_ascii_untouched() {
    assert_eq!(escape_html("Café  ñ €"), "Café  ñ €");
    assert_eq!("Café <Luna>".to_buffer().unwrap(), "Café &lt;Luna&gt;");
}

#[test]
fn writer_and_function_agree() {
    let text = "Crème brûlée & \"tarte\" <aux> l'orange";
    assert_eq!(text.to_buffer().unwrap().into_string(), escape_html(text));
}

#[test]
fn raw_html() {
    let mut buf = Vec::new();
    Html("a<b>c</b>").to_html(&mut buf).unwrap();
    assert_eq!(b"a<b>c</b>", &buf[..]);
}

#[test]
fn test_join_to_html_empty() {
    use std::iter::empty;
    assert_eq!(empty::<&str>().join_to_html(", ").to_buffer().unwrap(), "")
}
