//! Fragment encoding and parsing.
//!
//! One fragment per key, always written by this module:
//!   `<Metadata xmlns="…"><Node><KEY>VALUE</KEY></Node></Metadata>`
//! Parsing tolerates fragments with several keys under one container (other
//! writers may coalesce), so extraction walks every child element rather than
//! assuming the shape above.

use quick_xml::escape::escape;
use quick_xml::events::Event;
use quick_xml::Reader;

use crate::error::StoreError;

/// Namespace owning every fragment this store reads or writes.
pub const STORE_NAMESPACE: &str = "http://schemas.custom.xml";

/// Keys become XML element names, so they are held to a conservative subset
/// of the XML name rules: ASCII letter or underscore first, then letters,
/// digits, `-`, `_`, `.`; names starting with "xml" are reserved.
pub fn is_valid_key(key: &str) -> bool {
    let mut chars = key.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    if !chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.')) {
        return false;
    }
    // All-ASCII by now, so the prefix slice is safe.
    !(key.len() >= 3 && key[..3].eq_ignore_ascii_case("xml"))
}

/// Encode one entry as a store fragment. The key must already be validated;
/// the value is XML-escaped.
pub fn encode_fragment(key: &str, value: &str) -> String {
    let value = escape(value);
    format!(
        "<Metadata xmlns=\"{STORE_NAMESPACE}\"><Node><{key}>{value}</{key}></Node></Metadata>"
    )
}

/// Text content of the first element named `key` in the fragment, unescaped.
/// `None` when the fragment holds no such element.
pub fn fragment_value(xml: &str, key: &str) -> Result<Option<String>, StoreError> {
    let mut reader = Reader::from_str(xml);
    loop {
        match reader.read_event()? {
            Event::Start(e) if e.local_name().as_ref() == key.as_bytes() => {
                let mut value = String::new();
                loop {
                    match reader.read_event()? {
                        Event::Text(t) => value.push_str(&t.unescape()?),
                        Event::CData(c) => {
                            value.push_str(&String::from_utf8_lossy(&c.into_inner()))
                        }
                        Event::End(end) if end.local_name().as_ref() == key.as_bytes() => break,
                        Event::Eof => break,
                        _ => {}
                    }
                }
                return Ok(Some(value));
            }
            Event::Empty(e) if e.local_name().as_ref() == key.as_bytes() => {
                return Ok(Some(String::new()));
            }
            Event::Eof => return Ok(None),
            _ => {}
        }
    }
}

/// Every child element name under every top-level container in the fragment,
/// in document order.
pub fn fragment_keys(xml: &str) -> Result<Vec<String>, StoreError> {
    let mut reader = Reader::from_str(xml);
    let mut keys = Vec::new();
    let mut depth = 0usize;
    loop {
        match reader.read_event()? {
            Event::Start(e) => {
                if depth == 2 {
                    keys.push(String::from_utf8_lossy(e.local_name().as_ref()).into_owned());
                }
                depth += 1;
            }
            Event::Empty(e) => {
                if depth == 2 {
                    keys.push(String::from_utf8_lossy(e.local_name().as_ref()).into_owned());
                }
            }
            Event::End(_) => depth = depth.saturating_sub(1),
            Event::Eof => break,
            _ => {}
        }
    }
    Ok(keys)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_validation() {
        assert!(is_valid_key("Key001"));
        assert!(is_valid_key("_draft"));
        assert!(is_valid_key("section-2.1"));
        assert!(!is_valid_key(""));
        assert!(!is_valid_key("1key"));
        assert!(!is_valid_key("has space"));
        assert!(!is_valid_key("a<b"));
        assert!(!is_valid_key("xmlKey"));
        assert!(!is_valid_key("XML"));
        assert!(!is_valid_key("-lead"));
    }

    #[test]
    fn multibyte_keys_are_rejected_not_a_panic() {
        // Byte 3 of "a€" sits inside the euro sign; rejection must not slice
        // at a non-char boundary.
        assert!(!is_valid_key("a\u{20AC}"));
        assert!(!is_valid_key("\u{E9}cl\u{E9}"));
        assert!(!is_valid_key("日本語"));
        assert!(!is_valid_key("ab\u{20AC}cd"));
    }

    #[test]
    fn encode_then_extract() {
        let xml = encode_fragment("Key001", "U2FsdGVkX1+abc/def==");
        let value = fragment_value(&xml, "Key001").unwrap();
        assert_eq!(value.as_deref(), Some("U2FsdGVkX1+abc/def=="));
        assert_eq!(fragment_value(&xml, "KeyMissing").unwrap(), None);
    }

    #[test]
    fn values_are_escaped() {
        let xml = encode_fragment("k", "a<b&c>\"d\"");
        assert!(!xml.contains("a<b"));
        let value = fragment_value(&xml, "k").unwrap();
        assert_eq!(value.as_deref(), Some("a<b&c>\"d\""));
    }

    #[test]
    fn empty_value_is_present_not_absent() {
        let xml = encode_fragment("k", "");
        assert_eq!(fragment_value(&xml, "k").unwrap().as_deref(), Some(""));
    }

    #[test]
    fn keys_walk_every_container_child() {
        let xml = format!(
            "<Metadata xmlns=\"{STORE_NAMESPACE}\"><Node><A>1</A><B>2</B></Node>\
             <Node><C/></Node></Metadata>"
        );
        assert_eq!(fragment_keys(&xml).unwrap(), vec!["A", "B", "C"]);
    }

    #[test]
    fn cdata_values_are_readable() {
        let xml = format!(
            "<Metadata xmlns=\"{STORE_NAMESPACE}\"><Node><k><![CDATA[a<b&c]]></k></Node></Metadata>"
        );
        assert_eq!(fragment_value(&xml, "k").unwrap().as_deref(), Some("a<b&c"));
    }
}
