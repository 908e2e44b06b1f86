use crate::element::{Element, Node};
use crate::errors::{Result, StyledError};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/// Valid custom element identifiers
static ELEMENT_IDENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z][A-Za-z0-9-]*$").expect("element identifier regex is valid"));

macro_rules! tags {
    ($($variant:ident => $name:literal),+ $(,)?) => {
        /// The fixed set of tags that have a dedicated styled constructor.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum Tag {
            $($variant),+
        }

        impl Tag {
            /// Every tag, in declaration order
            pub const ALL: &'static [Tag] = &[$(Tag::$variant),+];

            /// The element name as written in markup
            pub fn as_str(self) -> &'static str {
                match self {
                    $(Tag::$variant => $name),+
                }
            }
        }

        impl FromStr for Tag {
            type Err = StyledError;

            fn from_str(s: &str) -> Result<Self> {
                match s {
                    $($name => Ok(Tag::$variant),)+
                    other => Err(StyledError::InvalidTarget(other.to_string())),
                }
            }
        }
    };
}

tags! {
    Div => "div",
    Span => "span",
    Button => "button",
    A => "a",
    P => "p",
    H1 => "h1",
    H2 => "h2",
    H3 => "h3",
    H4 => "h4",
    H5 => "h5",
    H6 => "h6",
    Ul => "ul",
    Ol => "ol",
    Li => "li",
    Input => "input",
    Textarea => "textarea",
    Select => "select",
    Label => "label",
    Form => "form",
    Header => "header",
    Footer => "footer",
    Nav => "nav",
    Section => "section",
    Article => "article",
    Aside => "aside",
    Main => "main",
    Figure => "figure",
    Figcaption => "figcaption",
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Tag {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// An externally defined component that can receive a composed element.
///
/// The UI framework owns rendering; a component only turns the element it is
/// handed (target already resolved to itself, class string composed) into a node.
pub trait Component: Send + Sync {
    /// Name used in diagnostics and serialized output
    fn name(&self) -> &str;

    /// Render the element addressed to this component
    fn render(&self, element: Element) -> Node;
}

/// Shared handle to a [`Component`]
#[derive(Clone)]
pub struct ComponentRef(Arc<dyn Component>);

impl ComponentRef {
    pub fn new(component: impl Component + 'static) -> Self {
        Self(Arc::new(component))
    }

    pub fn name(&self) -> &str {
        self.0.name()
    }

    pub fn render(&self, element: Element) -> Node {
        self.0.render(element)
    }
}

impl From<Arc<dyn Component>> for ComponentRef {
    fn from(component: Arc<dyn Component>) -> Self {
        Self(component)
    }
}

impl fmt::Debug for ComponentRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ComponentRef").field(&self.name()).finish()
    }
}

/// Component handles compare by identity.
impl PartialEq for ComponentRef {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

/// What a styled component instantiates: a known tag, any other element
/// identifier, or an external component.
#[derive(Debug, Clone, PartialEq)]
pub enum Target {
    Tag(Tag),
    Element(String),
    Component(ComponentRef),
}

impl Target {
    /// Parse an element identifier, preferring the fixed tag set
    pub fn parse(name: &str) -> Result<Self> {
        if let Ok(tag) = name.parse::<Tag>() {
            return Ok(Target::Tag(tag));
        }
        if ELEMENT_IDENT.is_match(name) {
            Ok(Target::Element(name.to_string()))
        } else {
            Err(StyledError::InvalidTarget(name.to_string()))
        }
    }

    /// Element name or component name
    pub fn name(&self) -> &str {
        match self {
            Target::Tag(tag) => tag.as_str(),
            Target::Element(name) => name,
            Target::Component(component) => component.name(),
        }
    }

    pub fn is_component(&self) -> bool {
        matches!(self, Target::Component(_))
    }
}

impl Default for Target {
    fn default() -> Self {
        Target::Tag(Tag::Div)
    }
}

impl From<Tag> for Target {
    fn from(tag: Tag) -> Self {
        Target::Tag(tag)
    }
}

impl From<ComponentRef> for Target {
    fn from(component: ComponentRef) -> Self {
        Target::Component(component)
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Target::Component(component) => write!(f, "<{}>", component.name()),
            other => f.write_str(other.name()),
        }
    }
}

/// Host elements serialize as their name, components as `{"component": name}`.
impl Serialize for Target {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;

        match self {
            Target::Component(component) => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry("component", component.name())?;
                map.end()
            }
            other => serializer.serialize_str(other.name()),
        }
    }
}
