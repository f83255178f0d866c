//! D-Bus error specification parser.
//!
//! This module parses specification documents that declare errors in the
//! Telepathy extension namespace:
//!
//! ```xml
//! <node xmlns:tp="http://telepathy.freedesktop.org/wiki/DbusSpec#extensions-v0">
//!   <tp:errors namespace="org.freedesktop.Telepathy.Error">
//!     <tp:error name="Not Available">
//!       <tp:docstring>The requested thing is not available.</tp:docstring>
//!     </tp:error>
//!   </tp:errors>
//! </node>
//! ```
//!
//! Elements are matched by namespace URI, so any prefix bound to the
//! extension namespace is accepted.

use crate::error::ParseError;
use crate::types::{ErrorEntry, ErrorSpec, NamespaceGroup};
use quick_xml::NsReader;
use quick_xml::escape::unescape;
use quick_xml::events::{BytesStart, Event};
use quick_xml::name::{Namespace, ResolveResult};
use tracing::{debug, trace};

/// Telepathy D-Bus specification extension namespace.
pub const NS_TP: &str = "http://telepathy.freedesktop.org/wiki/DbusSpec#extensions-v0";

const ERRORS_ELEMENT: &str = "tp:errors";
const ERROR_ELEMENT: &str = "tp:error";

/// Extension elements the parser cares about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SpecElement {
    Errors,
    Error,
    Docstring,
}

/// Parses an error specification using the Telepathy extension namespace.
///
/// # Arguments
/// * `xml` - Specification document content
///
/// # Returns
/// Parsed specification or parse error.
///
/// # Errors
/// Returns `ParseError` if the XML is malformed, contains no `errors`
/// group, or an error entry lacks its required attributes.
pub fn parse_spec(xml: &str) -> Result<ErrorSpec, ParseError> {
    parse_spec_with_namespace(xml, NS_TP)
}

/// Parses an error specification whose extension elements live in
/// `namespace_uri`.
///
/// # Errors
/// Same as [`parse_spec`].
pub fn parse_spec_with_namespace(xml: &str, namespace_uri: &str) -> Result<ErrorSpec, ParseError> {
    let mut reader = NsReader::from_str(xml);
    let mut spec = ErrorSpec::new();
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) => match classify(&reader, e, namespace_uri) {
                Some(SpecElement::Errors) => {
                    let group = parse_group(&mut reader, e, namespace_uri)?;
                    spec.groups.push(group);
                }
                Some(SpecElement::Error) => return Err(orphan_error()),
                _ => {}
            },
            Ok(Event::Empty(ref e)) => match classify(&reader, e, namespace_uri) {
                Some(SpecElement::Errors) => {
                    let group = parse_group_attributes(e)?;
                    debug!(namespace = %group.namespace, "parsed empty error group");
                    spec.groups.push(group);
                }
                Some(SpecElement::Error) => return Err(orphan_error()),
                _ => {}
            },
            Ok(Event::Eof) => break,
            Err(e) => return Err(ParseError::Xml(e)),
            _ => {}
        }
        buf.clear();
    }

    if spec.groups.is_empty() {
        return Err(ParseError::structure(format!(
            "no '{}' element in namespace '{}'",
            ERRORS_ELEMENT, namespace_uri
        )));
    }

    Ok(spec)
}

/// Resolves an element against the extension namespace.
fn classify(
    reader: &NsReader<&[u8]>,
    e: &BytesStart<'_>,
    namespace_uri: &str,
) -> Option<SpecElement> {
    let (ns, local) = reader.resolve_element(e.name());
    match ns {
        ResolveResult::Bound(Namespace(uri)) if uri == namespace_uri.as_bytes() => {}
        _ => return None,
    }
    match local.as_ref() {
        b"errors" => Some(SpecElement::Errors),
        b"error" => Some(SpecElement::Error),
        b"docstring" => Some(SpecElement::Docstring),
        _ => None,
    }
}

fn orphan_error() -> ParseError {
    ParseError::structure(format!(
        "'{}' element must be a direct child of '{}'",
        ERROR_ELEMENT, ERRORS_ELEMENT
    ))
}

/// Parses the attributes of an errors group.
fn parse_group_attributes(e: &BytesStart<'_>) -> Result<NamespaceGroup, ParseError> {
    let namespace = required_attribute(e, ERRORS_ELEMENT, "namespace")?;
    Ok(NamespaceGroup::new(namespace))
}

/// Parses an errors group, consuming its end tag.
fn parse_group(
    reader: &mut NsReader<&[u8]>,
    e: &BytesStart<'_>,
    namespace_uri: &str,
) -> Result<NamespaceGroup, ParseError> {
    let mut group = parse_group_attributes(e)?;
    let mut buf = Vec::new();
    let mut depth = 1;

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) => match classify(reader, e, namespace_uri) {
                Some(SpecElement::Error) if depth == 1 => {
                    let entry = parse_error(reader, e, namespace_uri)?;
                    group.errors.push(entry);
                }
                Some(SpecElement::Error) => return Err(orphan_error()),
                _ => depth += 1,
            },
            Ok(Event::Empty(ref e)) => match classify(reader, e, namespace_uri) {
                Some(SpecElement::Error) if depth == 1 => {
                    let name = required_attribute(e, ERROR_ELEMENT, "name")?;
                    trace!(name = %name, "parsed undocumented error");
                    group.errors.push(ErrorEntry::new(name));
                }
                Some(SpecElement::Error) => return Err(orphan_error()),
                _ => {}
            },
            Ok(Event::End(_)) => {
                depth -= 1;
                if depth == 0 {
                    break;
                }
            }
            Ok(Event::Eof) => {
                return Err(ParseError::structure(format!(
                    "unterminated '{}' element",
                    ERRORS_ELEMENT
                )));
            }
            Err(e) => return Err(ParseError::Xml(e)),
            _ => {}
        }
        buf.clear();
    }

    debug!(
        namespace = %group.namespace,
        errors = group.errors.len(),
        "parsed error group"
    );

    Ok(group)
}

/// Parses a single error entry, consuming its end tag.
fn parse_error(
    reader: &mut NsReader<&[u8]>,
    e: &BytesStart<'_>,
    namespace_uri: &str,
) -> Result<ErrorEntry, ParseError> {
    let mut entry = ErrorEntry::new(required_attribute(e, ERROR_ELEMENT, "name")?);
    let mut buf = Vec::new();
    let mut depth = 1;

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) => {
                if depth == 1
                    && classify(reader, e, namespace_uri) == Some(SpecElement::Docstring)
                {
                    // The last docstring wins.
                    entry.description = Some(read_docstring(reader)?);
                } else {
                    depth += 1;
                }
            }
            Ok(Event::Empty(ref e)) => {
                if depth == 1
                    && classify(reader, e, namespace_uri) == Some(SpecElement::Docstring)
                {
                    entry.description = Some(String::new());
                }
            }
            Ok(Event::End(_)) => {
                depth -= 1;
                if depth == 0 {
                    break;
                }
            }
            Ok(Event::Eof) => {
                return Err(ParseError::structure(format!(
                    "unterminated '{}' element '{}'",
                    ERROR_ELEMENT, entry.name
                )));
            }
            Err(e) => return Err(ParseError::Xml(e)),
            _ => {}
        }
        buf.clear();
    }

    trace!(name = %entry.name, "parsed error");
    Ok(entry)
}

/// Reads the content of a docstring, consuming its end tag.
///
/// Text is entity-resolved, nested markup is kept as markup, newlines are
/// folded into spaces and the result is trimmed.
fn read_docstring(reader: &mut NsReader<&[u8]>) -> Result<String, ParseError> {
    let mut text = String::new();
    let mut buf = Vec::new();
    let mut depth = 1;

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) => {
                depth += 1;
                text.push('<');
                text.push_str(std::str::from_utf8(e)?);
                text.push('>');
            }
            Ok(Event::Empty(ref e)) => {
                text.push('<');
                text.push_str(std::str::from_utf8(e)?);
                text.push_str("/>");
            }
            Ok(Event::End(ref e)) => {
                depth -= 1;
                if depth == 0 {
                    break;
                }
                text.push_str("</");
                text.push_str(std::str::from_utf8(e.name().as_ref())?);
                text.push('>');
            }
            Ok(Event::Text(ref t)) => {
                let raw = std::str::from_utf8(t)?;
                text.push_str(&unescape(raw)?);
            }
            Ok(Event::CData(ref c)) => {
                text.push_str(std::str::from_utf8(c)?);
            }
            Ok(Event::GeneralRef(ref r)) => {
                let name = std::str::from_utf8(r)?;
                text.push_str(&unescape(&format!("&{};", name))?);
            }
            Ok(Event::Eof) => {
                return Err(ParseError::structure("unterminated docstring"));
            }
            Err(e) => return Err(ParseError::Xml(e)),
            _ => {}
        }
        buf.clear();
    }

    Ok(fold_line_breaks(&text).trim().to_string())
}

/// Replaces every line break (`\r\n`, `\r` or `\n`) with a single space.
fn fold_line_breaks(text: &str) -> String {
    text.replace("\r\n", " ").replace(['\r', '\n'], " ")
}

/// Returns the unescaped value of a required, non-blank attribute.
///
/// Literal tabs and line breaks are normalized to spaces before entity
/// references are resolved.
fn required_attribute(
    e: &BytesStart<'_>,
    element: &str,
    attribute: &str,
) -> Result<String, ParseError> {
    for attr in e.attributes().flatten() {
        if attr.key.as_ref() != attribute.as_bytes() {
            continue;
        }
        let raw = std::str::from_utf8(&attr.value)?;
        let normalized = fold_line_breaks(raw).replace('\t', " ");
        let value = unescape(&normalized)?;
        if value.trim().is_empty() {
            return Err(ParseError::invalid_attr(element, attribute, raw));
        }
        return Ok(value.into_owned());
    }

    Err(ParseError::missing_attr(element, attribute))
}
