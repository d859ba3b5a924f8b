//! Thin event-writing wrapper over quick-xml.

use crate::error::Result;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use std::borrow::Cow;

/// Streaming XML writer for one package part.
pub struct XmlSink {
    writer: Writer<Vec<u8>>,
}

impl XmlSink {
    /// Creates a writer and emits the XML declaration.
    pub fn new() -> Result<Self> {
        let mut writer = Writer::new(Vec::new());
        writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), Some("yes"))))?;
        Ok(Self { writer })
    }

    /// Writes a start tag.
    pub fn open(&mut self, name: &str, attrs: &[(&str, &str)]) -> Result<()> {
        self.writer.write_event(Event::Start(start_tag(name, attrs)))?;
        Ok(())
    }

    /// Writes a self-closing tag.
    pub fn empty(&mut self, name: &str, attrs: &[(&str, &str)]) -> Result<()> {
        self.writer.write_event(Event::Empty(start_tag(name, attrs)))?;
        Ok(())
    }

    /// Writes escaped character data.
    pub fn text(&mut self, text: &str) -> Result<()> {
        let text = xml_safe(text);
        self.writer.write_event(Event::Text(BytesText::new(&text)))?;
        Ok(())
    }

    /// Writes an end tag.
    pub fn close(&mut self, name: &str) -> Result<()> {
        self.writer.write_event(Event::End(BytesEnd::new(name)))?;
        Ok(())
    }

    /// Writes `<name attrs>text</name>`.
    pub fn text_element(&mut self, name: &str, attrs: &[(&str, &str)], text: &str) -> Result<()> {
        self.open(name, attrs)?;
        self.text(text)?;
        self.close(name)
    }

    /// Returns the serialized bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.writer.into_inner()
    }
}

fn start_tag<'a>(name: &'a str, attrs: &[(&str, &str)]) -> BytesStart<'a> {
    let mut tag = BytesStart::new(name);
    for &(key, value) in attrs {
        tag.push_attribute((key, value));
    }
    tag
}

/// Removes characters XML 1.0 cannot carry (C0 controls other than tab,
/// newline and carriage return).
pub fn xml_safe(text: &str) -> Cow<'_, str> {
    let forbidden = |c: char| c < '\u{20}' && !matches!(c, '\t' | '\n' | '\r');
    if text.chars().any(forbidden) {
        Cow::Owned(text.chars().filter(|&c| !forbidden(c)).collect())
    } else {
        Cow::Borrowed(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escapes_text_and_attributes() {
        let mut sink = XmlSink::new().unwrap();
        sink.open("w:t", &[("w:val", "a\"b")]).unwrap();
        sink.text("x < y & z").unwrap();
        sink.close("w:t").unwrap();
        let xml = String::from_utf8(sink.into_bytes()).unwrap();
        assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>"));
        assert!(xml.contains("w:val=\"a&quot;b\""));
        assert!(xml.contains("x &lt; y &amp; z"));
    }

    #[test]
    fn test_xml_safe_strips_controls() {
        assert_eq!(xml_safe("a\u{0}b\u{1b}c\td"), "abc\td");
        assert!(matches!(xml_safe("plain"), Cow::Borrowed(_)));
    }
}
