use crate::props::Props;
use crate::target::Target;
use serde::Serialize;

/// Opaque handle forwarded to the rendered element untouched
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct NodeRef(String);

impl NodeRef {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn id(&self) -> &str {
        &self.0
    }
}

/// A child of an element
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Node {
    Text(String),
    Element(Element),
}

impl Node {
    pub fn text(text: impl Into<String>) -> Self {
        Node::Text(text.into())
    }

    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(element) => Some(element),
            Node::Text(_) => None,
        }
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}

/// Everything the UI framework needs to instantiate a styled element.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Element {
    pub target: Target,

    #[serde(rename = "className")]
    pub class_name: String,

    pub props: Props,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Node>,

    #[serde(rename = "ref", skip_serializing_if = "Option::is_none")]
    pub node_ref: Option<NodeRef>,
}

/// The framework's instantiation primitive
pub trait Renderer {
    type Output;

    fn instantiate(&self, element: Element) -> Self::Output;
}

/// Renderer that resolves component targets until only host elements remain.
///
/// A component may render into another component; expansion continues until
/// every node in the tree targets a tag or element identifier.
#[derive(Debug, Clone, Copy, Default)]
pub struct ElementTree;

impl ElementTree {
    fn expand(&self, node: Node) -> Node {
        match node {
            Node::Text(_) => node,
            Node::Element(element) => self.instantiate(element),
        }
    }
}

impl Renderer for ElementTree {
    type Output = Node;

    fn instantiate(&self, element: Element) -> Node {
        if let Target::Component(component) = &element.target {
            let component = component.clone();
            return self.expand(component.render(element));
        }

        let Element { target, class_name, props, children, node_ref } = element;
        let children = children.into_iter().map(|child| self.expand(child)).collect();
        Node::Element(Element { target, class_name, props, children, node_ref })
    }
}
