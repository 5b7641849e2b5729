//! XML event source
//!
//! [`XmlDriver`] pulls events from quick-xml's namespace-aware reader and
//! pushes them into a [`ContentHandler`]. Empty elements are delivered as a
//! start immediately followed by an end, entities are unescaped and every
//! `xmlns` declaration is collected into a [`NamespaceMap`].
//!
//! Any parser error, bad attribute, unknown prefix or undecodable text is
//! fatal.

use std::collections::BTreeMap;
use std::fmt;
use std::io::BufRead;

use quick_xml::events::{BytesStart, Event};
use quick_xml::name::{PrefixDeclaration, ResolveResult};
use quick_xml::NsReader;

use crate::error::{ReadError, ReadResult};

/// Well-known SpreadsheetML namespace URIs
pub mod ns {
    /// `ss:` - the spreadsheet vocabulary
    pub const SPREADSHEET: &str = "urn:schemas-microsoft-com:office:spreadsheet";
    /// `o:` - document properties
    pub const OFFICE: &str = "urn:schemas-microsoft-com:office:office";
    /// `x:` - Excel-specific options
    pub const EXCEL: &str = "urn:schemas-microsoft-com:office:excel";
    /// `html:` - rich text inside `Data`
    pub const HTML: &str = "http://www.w3.org/TR/REC-html40";
}

/// Receiver of a document's markup events
pub trait ContentHandler {
    /// Called once before the first element
    fn start_document(&mut self) -> ReadResult<()>;

    /// Called for every opening (or empty) element
    fn start_element(&mut self, name: &ElementName, attrs: &Attributes) -> ReadResult<()>;

    /// Called for text and CDATA inside the root element
    fn characters(&mut self, text: &str) -> ReadResult<()>;

    /// Called for every closing element, including the implicit close of an
    /// empty element
    fn end_element(&mut self, name: &ElementName) -> ReadResult<()>;

    /// Called once after the root element closed
    fn end_document(&mut self, namespaces: &NamespaceMap) -> ReadResult<()>;
}

/// A resolved element name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementName {
    local: String,
    namespace: Option<String>,
}

impl ElementName {
    /// Create a name from its local part and namespace URI
    pub fn new<S: Into<String>>(local: S, namespace: Option<String>) -> Self {
        Self {
            local: local.into(),
            namespace,
        }
    }

    /// Local part of the name (without prefix)
    pub fn local(&self) -> &str {
        &self.local
    }

    /// Namespace URI, if the element is bound to one
    pub fn namespace(&self) -> Option<&str> {
        self.namespace.as_deref()
    }

    /// Check the local part of the name
    pub fn is(&self, local: &str) -> bool {
        self.local == local
    }
}

impl fmt::Display for ElementName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.namespace {
            Some(ns) => write!(f, "{{{ns}}}{}", self.local),
            None => f.write_str(&self.local),
        }
    }
}

/// A single resolved attribute
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    local: String,
    namespace: Option<String>,
    value: String,
}

impl Attribute {
    /// Local part of the attribute name
    pub fn local(&self) -> &str {
        &self.local
    }

    /// Namespace URI of the attribute, if prefixed
    pub fn namespace(&self) -> Option<&str> {
        self.namespace.as_deref()
    }

    /// Unescaped value
    pub fn value(&self) -> &str {
        &self.value
    }
}

/// The attributes of one element, namespace declarations excluded
///
/// Lookups go by local name only, so `ss:Index` and a stray unprefixed
/// `Index` are treated the same.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes {
    items: Vec<Attribute>,
}

impl Attributes {
    /// Value of the first attribute with the given local name
    pub fn get(&self, local: &str) -> Option<&str> {
        self.items
            .iter()
            .find(|a| a.local == local)
            .map(|a| a.value.as_str())
    }

    /// Value of an attribute in a specific namespace
    pub fn get_ns(&self, namespace: &str, local: &str) -> Option<&str> {
        self.items
            .iter()
            .find(|a| a.local == local && a.namespace.as_deref() == Some(namespace))
            .map(|a| a.value.as_str())
    }

    /// Attribute parsed as an unsigned integer; malformed values read as absent
    pub fn get_u32(&self, local: &str) -> Option<u32> {
        self.get(local).and_then(|v| v.trim().parse().ok())
    }

    /// Attribute parsed as a float; malformed values read as absent
    pub fn get_f64(&self, local: &str) -> Option<f64> {
        self.get(local).and_then(|v| v.trim().parse().ok())
    }

    /// Attribute parsed as a `1`/`0` flag
    pub fn get_flag(&self, local: &str) -> Option<bool> {
        self.get(local).and_then(parse_flag)
    }

    /// Owned copy of an attribute value
    pub fn get_string(&self, local: &str) -> Option<String> {
        self.get(local).map(str::to_string)
    }

    /// Iterate over the attributes in document order
    pub fn iter(&self) -> impl Iterator<Item = &Attribute> {
        self.items.iter()
    }

    /// Number of attributes
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if there are no attributes
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub(crate) fn push(&mut self, local: String, namespace: Option<String>, value: String) {
        self.items.push(Attribute {
            local,
            namespace,
            value,
        });
    }
}

/// Parse a SpreadsheetML boolean (`1`/`0`, also `true`/`false`)
pub(crate) fn parse_flag(value: &str) -> Option<bool> {
    match value.trim() {
        "1" => Some(true),
        "0" => Some(false),
        v if v.eq_ignore_ascii_case("true") => Some(true),
        v if v.eq_ignore_ascii_case("false") => Some(false),
        _ => None,
    }
}

/// Prefix to URI bindings declared in a document
///
/// The default namespace is stored under the empty prefix. When a prefix is
/// declared more than once the first declaration wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NamespaceMap {
    bindings: BTreeMap<String, String>,
}

impl NamespaceMap {
    /// URI bound to a prefix (`""` for the default namespace)
    pub fn get(&self, prefix: &str) -> Option<&str> {
        self.bindings.get(prefix).map(String::as_str)
    }

    /// First prefix bound to a URI
    pub fn prefix_of(&self, uri: &str) -> Option<&str> {
        self.bindings
            .iter()
            .find(|(_, u)| u.as_str() == uri)
            .map(|(p, _)| p.as_str())
    }

    /// Check if any prefix is bound to a URI
    pub fn contains_uri(&self, uri: &str) -> bool {
        self.prefix_of(uri).is_some()
    }

    /// Iterate over `(prefix, uri)` pairs, sorted by prefix
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.bindings.iter().map(|(p, u)| (p.as_str(), u.as_str()))
    }

    /// Number of bindings
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Check if nothing was declared
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    pub(crate) fn declare(&mut self, prefix: String, uri: String) {
        self.bindings.entry(prefix).or_insert(uri);
    }
}

/// Feeds quick-xml events into a [`ContentHandler`]
pub struct XmlDriver<R> {
    reader: NsReader<R>,
    namespaces: NamespaceMap,
}

impl<R: BufRead> XmlDriver<R> {
    /// Create a driver over a buffered source
    pub fn new(input: R, trim_text: bool) -> Self {
        let mut reader = NsReader::from_reader(input);
        reader.trim_text(trim_text);
        Self {
            reader,
            namespaces: NamespaceMap::default(),
        }
    }

    /// Namespaces collected so far
    pub fn namespaces(&self) -> &NamespaceMap {
        &self.namespaces
    }

    /// Consume the driver, keeping the collected namespaces
    pub fn into_namespaces(self) -> NamespaceMap {
        self.namespaces
    }

    /// Run the whole document through `handler` in a single pass
    pub fn drive<H: ContentHandler + ?Sized>(&mut self, handler: &mut H) -> ReadResult<()> {
        let mut buf = Vec::new();
        let mut depth = 0usize;
        let mut seen_root = false;

        handler.start_document()?;

        loop {
            let (resolved, event) = self.reader.read_resolved_event_into(&mut buf)?;
            let namespace = namespace_uri(resolved)?;

            match event {
                Event::Start(e) => {
                    let (name, attrs) = self.element(&e, namespace)?;
                    handler.start_element(&name, &attrs)?;
                    depth += 1;
                    seen_root = true;
                }
                Event::Empty(e) => {
                    let (name, attrs) = self.element(&e, namespace)?;
                    handler.start_element(&name, &attrs)?;
                    handler.end_element(&name)?;
                    seen_root = true;
                }
                Event::End(e) => {
                    let name = ElementName::new(utf8(e.local_name().as_ref())?, namespace);
                    handler.end_element(&name)?;
                    depth = depth.saturating_sub(1);
                }
                Event::Text(e) if depth > 0 => {
                    let text = e.unescape()?;
                    handler.characters(&text)?;
                }
                Event::CData(e) if depth > 0 => {
                    let bytes = e.into_inner();
                    handler.characters(utf8(&bytes)?)?;
                }
                Event::Eof => break,
                _ => {}
            }
            buf.clear();
        }

        if depth > 0 {
            return Err(ReadError::Markup(format!(
                "document ended with {depth} unclosed element(s)"
            )));
        }
        if !seen_root {
            return Err(ReadError::Markup("document has no root element".into()));
        }

        handler.end_document(&self.namespaces)
    }

    fn element(
        &mut self,
        start: &BytesStart<'_>,
        namespace: Option<String>,
    ) -> ReadResult<(ElementName, Attributes)> {
        let name = ElementName::new(utf8(start.local_name().as_ref())?, namespace);
        let mut attrs = Attributes::default();

        for attr in start.attributes() {
            let attr = attr.map_err(quick_xml::Error::InvalidAttr)?;
            let value = attr.unescape_value()?.into_owned();

            if let Some(binding) = attr.key.as_namespace_binding() {
                let prefix = match binding {
                    PrefixDeclaration::Default => String::new(),
                    PrefixDeclaration::Named(prefix) => utf8(prefix)?.to_string(),
                };
                self.namespaces.declare(prefix, value);
                continue;
            }

            let (resolved, local) = self.reader.resolve_attribute(attr.key);
            let attr_namespace = namespace_uri(resolved)?;
            attrs.push(utf8(local.as_ref())?.to_string(), attr_namespace, value);
        }

        Ok((name, attrs))
    }
}

fn namespace_uri(resolved: ResolveResult<'_>) -> ReadResult<Option<String>> {
    match resolved {
        ResolveResult::Bound(ns) => Ok(Some(utf8(ns.as_ref())?.to_string())),
        ResolveResult::Unbound => Ok(None),
        ResolveResult::Unknown(prefix) => Err(ReadError::Markup(format!(
            "unknown namespace prefix '{}'",
            String::from_utf8_lossy(&prefix)
        ))),
    }
}

fn utf8(bytes: &[u8]) -> ReadResult<&str> {
    std::str::from_utf8(bytes).map_err(|e| ReadError::Markup(format!("undecodable text: {e}")))
}
