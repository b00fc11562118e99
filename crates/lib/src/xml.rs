//! Fail-soft XML to [`Value`] conversion.
//!
//! [`from_str`] parses an XML string and converts the document root into a
//! nested [`Value`]; [`collect`] gathers matching elements anywhere in the
//! document instead. Malformed input never propagates an error: both
//! functions log the failure and return an empty result, so callers can
//! feed untrusted markup straight through.
//!
//! # Conversion rules
//!
//! - Text and CDATA content becomes trimmed strings.
//! - Element children are grouped into lists keyed by their local tag name
//!   (namespace prefix stripped); a non-empty text child becomes the
//!   element's own scalar output, the last one winning.
//! - Attributes land under `"@attributes"`; when the element's output is a
//!   scalar, it is first wrapped as `{"@content": scalar}`.
//! - Single-element lists (a tag appearing once) are unwrapped to the bare
//!   value.
//!
//! ```
//! use dotnest::xml;
//!
//! let value = xml::from_str("<order><item>Desk</item><item>Chair</item></order>");
//! assert_eq!(value.at("item.0").unwrap(), "Desk");
//! assert_eq!(value.at("item.1").unwrap(), "Chair");
//! ```

use quick_xml::Reader;
use quick_xml::events::Event;

use crate::value::{Map, Value};

/// An element in the parsed document tree.
struct Element {
    name: String,
    attributes: Vec<(String, String)>,
    children: Vec<Node>,
}

enum Node {
    Element(Element),
    Text(String),
}

/// Converts an XML string into a nested [`Value`].
///
/// Returns the converted document root: a map when the root has element
/// children or attributes, a bare string when it holds only text. Malformed
/// input yields an empty map.
pub fn from_str(xml: &str) -> Value {
    match parse(xml) {
        Some(root) => convert_element(&root),
        None => {
            tracing::warn!("discarding malformed xml input");
            Value::Map(Map::new())
        }
    }
}

/// Collects every element named `tag` below the document root, in document
/// order, converting each independently.
///
/// `max` caps the number of collected elements; `None` collects all.
/// Malformed input yields an empty list.
pub fn collect(xml: &str, tag: &str, max: Option<usize>) -> Vec<Value> {
    let Some(root) = parse(xml) else {
        tracing::warn!(tag, "discarding malformed xml input");
        return Vec::new();
    };

    let limit = max.unwrap_or(usize::MAX);
    let mut result = Vec::new();
    collect_into(&root, tag, limit, &mut result);
    result
}

fn collect_into(el: &Element, tag: &str, limit: usize, result: &mut Vec<Value>) {
    for child in &el.children {
        if result.len() >= limit {
            return;
        }
        if let Node::Element(child_el) = child {
            if child_el.name == tag {
                result.push(convert_element(child_el));
                if result.len() >= limit {
                    return;
                }
            }
            collect_into(child_el, tag, limit, result);
        }
    }
}

/// Parses XML into an element tree; `None` on any well-formedness failure.
fn parse(xml: &str) -> Option<Element> {
    let mut reader = Reader::from_str(xml);
    let mut stack: Vec<Element> = Vec::new();
    let mut root: Option<Element> = None;

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => {
                stack.push(Element {
                    name: String::from_utf8_lossy(e.name().as_ref()).into_owned(),
                    attributes: read_attributes(&e)?,
                    children: Vec::new(),
                });
            }
            Ok(Event::Empty(e)) => {
                let element = Element {
                    name: String::from_utf8_lossy(e.name().as_ref()).into_owned(),
                    attributes: read_attributes(&e)?,
                    children: Vec::new(),
                };
                attach(&mut stack, &mut root, element)?;
            }
            Ok(Event::End(_)) => {
                let element = stack.pop()?;
                attach(&mut stack, &mut root, element)?;
            }
            Ok(Event::Text(e)) => {
                if let Some(parent) = stack.last_mut() {
                    parent
                        .children
                        .push(Node::Text(e.unescape().ok()?.into_owned()));
                }
            }
            Ok(Event::CData(e)) => {
                if let Some(parent) = stack.last_mut() {
                    parent
                        .children
                        .push(Node::Text(String::from_utf8_lossy(&e.into_inner()).into_owned()));
                }
            }
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(_) => return None,
        }
    }

    if !stack.is_empty() {
        return None;
    }
    root
}

fn read_attributes(e: &quick_xml::events::BytesStart<'_>) -> Option<Vec<(String, String)>> {
    let mut attributes = Vec::new();
    for attr in e.attributes() {
        let attr = attr.ok()?;
        attributes.push((
            String::from_utf8_lossy(attr.key.as_ref()).into_owned(),
            attr.unescape_value().ok()?.into_owned(),
        ));
    }
    Some(attributes)
}

/// Attaches a closed element to its parent, or installs it as the root.
/// A second top-level element makes the document malformed.
fn attach(stack: &mut Vec<Element>, root: &mut Option<Element>, element: Element) -> Option<()> {
    if let Some(parent) = stack.last_mut() {
        parent.children.push(Node::Element(element));
    } else if root.is_none() {
        *root = Some(element);
    } else {
        return None;
    }
    Some(())
}

/// Recursively converts an element per the module-level rules.
fn convert_element(el: &Element) -> Value {
    let mut output = Value::Map(Map::new());

    for child in &el.children {
        match child {
            Node::Element(child_el) => {
                // Strip the namespace prefix: "ns:tag" groups under "tag"
                let local = child_el
                    .name
                    .rsplit(':')
                    .next()
                    .unwrap_or(&child_el.name)
                    .to_string();
                let converted = convert_element(child_el);

                let map = match &mut output {
                    Value::Map(map) => map,
                    other => {
                        *other = Value::Map(Map::new());
                        match other {
                            Value::Map(map) => map,
                            _ => unreachable!(),
                        }
                    }
                };
                match map.get_key_mut(&local) {
                    Some(Value::List(items)) => items.push(converted),
                    _ => {
                        map.insert(local, Value::List(vec![converted]));
                    }
                }
            }
            Node::Text(text) => {
                let trimmed = text.trim();
                // Non-empty text (including the literal "0") becomes the
                // element's scalar output, last one winning
                if !trimmed.is_empty() {
                    output = Value::Text(trimmed.to_string());
                }
            }
        }
    }

    if !el.attributes.is_empty() && !matches!(output, Value::Map(_)) {
        let mut wrapped = Map::new();
        wrapped.insert("@content", output);
        output = Value::Map(wrapped);
    }

    if let Value::Map(map) = &mut output {
        if !el.attributes.is_empty() {
            let attrs: Map = el
                .attributes
                .iter()
                .map(|(name, value)| (name.clone(), Value::Text(value.clone())))
                .collect();
            map.insert("@attributes", attrs);
        }

        // Unwrap tags that appeared exactly once
        let keys: Vec<String> = map.keys().cloned().collect();
        for key in keys {
            if key == "@attributes" {
                continue;
            }
            if let Some(Value::List(items)) = map.get_key(&key) {
                if items.len() == 1 {
                    let single = items[0].clone();
                    map.insert(key, single);
                }
            }
        }
    }

    output
}
