//! Article body extraction.
use quick_xml::escape::unescape;
use quick_xml::events::Event;
use quick_xml::Reader;

use crate::error::Error;

/// Character content of the first well-formed `<text>…</text>` element,
/// entities decoded.
///
/// The markup is scanned with a streaming pull parser; siblings before
/// the body are skipped and nothing after it is read. Structurally
/// broken markup yields [Error::Xml]; markup with no `<text>` element at
/// all yields the distinct [Error::NoArticleBody].
pub fn extract_body(raw: &str) -> Result<String, Error> {
    let mut reader = Reader::from_str(raw);
    loop {
        match reader.read_event()? {
            Event::Start(e) if e.name().as_ref() == b"text" => {
                let span = reader.read_to_end(e.name())?;
                let body = unescape(&raw[span]).map_err(quick_xml::Error::EscapeError)?;
                return Ok(body.into_owned());
            }
            Event::Empty(e) if e.name().as_ref() == b"text" => return Ok(String::new()),
            Event::Eof => return Err(Error::NoArticleBody),
            _ => (),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::extract_body;
    use crate::error::Error;

    #[test]
    fn first_text_element_wins() {
        let raw = "<page><title>X</title><text>the body</text><text>second</text></page>";
        assert_eq!(extract_body(raw).unwrap(), "the body");
    }

    #[test]
    fn attributes_are_ignored() {
        let raw = r#"<page><text bytes="5" xml:space="preserve">abcde</text></page>"#;
        assert_eq!(extract_body(raw).unwrap(), "abcde");
    }

    #[test]
    fn empty_body_is_empty_string() {
        assert_eq!(extract_body("<page><text></text></page>").unwrap(), "");
        assert_eq!(extract_body("<page><text/></page>").unwrap(), "");
    }

    #[test]
    fn entities_are_decoded_once() {
        let raw = "<page><text>&lt;ref&gt;cite&lt;/ref&gt; a&amp;b</text></page>";
        assert_eq!(extract_body(raw).unwrap(), "<ref>cite</ref> a&b");
    }

    #[test]
    fn missing_body_is_distinct() {
        let raw = "<page><title>X</title></page>";
        assert!(matches!(extract_body(raw), Err(Error::NoArticleBody)));
    }

    #[test]
    fn broken_markup_is_a_parse_error() {
        assert!(matches!(
            extract_body("<page><text>unclosed"),
            Err(Error::Xml(_))
        ));
    }
}
