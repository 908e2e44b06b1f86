use crate::element::{Node, NodeRef};
use crate::errors::{Result, StyledError};
use crate::props::Props;
use crate::target::Target;
use serde_json::Value;

/// Prop names consumed by styling and never passed through
pub const RESERVED_PROPS: [&str; 4] = ["className", "children", "variant", "as"];

/// Per-render input of a styled component.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RenderRequest {
    /// Explicit classes, appended after every other fragment
    pub class_name: Option<String>,
    pub children: Vec<Node>,
    pub variant: Option<String>,
    /// Per-render target override
    pub as_: Option<Target>,
    pub node_ref: Option<NodeRef>,
    /// Non-reserved props
    pub props: Props,
}

impl RenderRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Split a flat prop map into reserved fields and pass-through props.
    ///
    /// `className`, `variant` and `as` must be strings (or null); `children`
    /// may be a string, an array of strings, or null.
    pub fn from_props(props: Props) -> Result<Self> {
        let mut request = Self::new();
        for (name, value) in props {
            request.set_prop(name, value)?;
        }
        Ok(request)
    }

    pub fn class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    pub fn variant(mut self, variant: impl Into<String>) -> Self {
        self.variant = Some(variant.into());
        self
    }

    pub fn with_as(mut self, target: impl Into<Target>) -> Self {
        self.as_ = Some(target.into());
        self
    }

    pub fn child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn text(self, text: impl Into<String>) -> Self {
        self.child(Node::Text(text.into()))
    }

    pub fn node_ref(mut self, node_ref: NodeRef) -> Self {
        self.node_ref = Some(node_ref);
        self
    }

    /// Add a prop. Reserved names are routed to their dedicated fields; a
    /// reserved prop with the wrong type is dropped with a warning.
    pub fn prop(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        let name = name.into();
        if let Err(e) = self.set_prop(name.clone(), value.into()) {
            tracing::warn!(prop = %name, error = %e, "ignoring reserved prop");
        }
        self
    }

    /// Like [`RenderRequest::prop`], but a mistyped reserved prop is an error
    pub fn try_prop(mut self, name: impl Into<String>, value: impl Into<Value>) -> Result<Self> {
        self.set_prop(name.into(), value.into())?;
        Ok(self)
    }

    pub fn props(mut self, props: Props) -> Self {
        self.props = props;
        self
    }

    fn set_prop(&mut self, name: String, value: Value) -> Result<()> {
        match name.as_str() {
            "className" => self.class_name = string_prop("className", value)?,
            "variant" => self.variant = string_prop("variant", value)?,
            "as" => {
                self.as_ = string_prop("as", value)?
                    .map(|target| Target::parse(&target))
                    .transpose()?
            }
            "children" => self.children = children_prop(value)?,
            _ => {
                self.props.insert(name, value);
            }
        }
        Ok(())
    }
}

fn string_prop(name: &str, value: Value) -> Result<Option<String>> {
    match value {
        Value::Null => Ok(None),
        Value::String(s) => Ok(Some(s)),
        _ => Err(invalid(name, "a string")),
    }
}

fn children_prop(value: Value) -> Result<Vec<Node>> {
    match value {
        Value::Null => Ok(Vec::new()),
        Value::String(text) => Ok(vec![Node::Text(text)]),
        Value::Array(items) => items
            .into_iter()
            .map(|item| match item {
                Value::String(text) => Ok(Node::Text(text)),
                _ => Err(invalid("children", "a string or an array of strings")),
            })
            .collect(),
        _ => Err(invalid("children", "a string or an array of strings")),
    }
}

fn invalid(name: &str, expected: &'static str) -> StyledError {
    StyledError::InvalidProp { name: name.to_string(), expected }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::target::Tag;
    use serde_json::json;

    #[test]
    fn test_from_props_lifts_reserved_keys() {
        let props = Props::new()
            .with("className", "m-2")
            .with("variant", "primary")
            .with("as", "nav")
            .with("children", json!(["a", "b"]))
            .with("isActive", true);

        let request = RenderRequest::from_props(props).unwrap();
        assert_eq!(request.class_name.as_deref(), Some("m-2"));
        assert_eq!(request.variant.as_deref(), Some("primary"));
        assert_eq!(request.as_, Some(Target::Tag(Tag::Nav)));
        assert_eq!(request.children, vec![Node::text("a"), Node::text("b")]);
        assert_eq!(request.props, Props::new().with("isActive", true));
    }

    #[test]
    fn test_from_props_null_means_absent() {
        let props = Props::new().with("variant", Value::Null).with("children", Value::Null);
        let request = RenderRequest::from_props(props).unwrap();
        assert!(request.variant.is_none());
        assert!(request.children.is_empty());
        assert!(request.props.is_empty());
    }

    #[test]
    fn test_from_props_rejects_wrong_types() {
        let err = RenderRequest::from_props(Props::new().with("className", 3)).unwrap_err();
        assert!(err.to_string().contains("className"));

        let err = RenderRequest::from_props(Props::new().with("children", json!([1]))).unwrap_err();
        assert!(matches!(err, StyledError::InvalidProp { .. }));

        let err = RenderRequest::from_props(Props::new().with("as", "not a tag")).unwrap_err();
        assert!(matches!(err, StyledError::InvalidTarget(_)));
    }

    #[test]
    fn test_prop_routes_reserved_names() {
        let request = RenderRequest::new()
            .prop("className", "m-2")
            .prop("variant", "primary")
            .prop("as", "aside")
            .prop("children", "text")
            .prop("id", "x");

        assert_eq!(request.class_name.as_deref(), Some("m-2"));
        assert_eq!(request.variant.as_deref(), Some("primary"));
        assert_eq!(request.as_, Some(Target::Tag(Tag::Aside)));
        assert_eq!(request.children, vec![Node::text("text")]);
        assert_eq!(request.props, Props::new().with("id", "x"));
    }

    #[test]
    fn test_prop_drops_mistyped_reserved_prop() {
        let request = RenderRequest::new().prop("className", 3).prop("variant", json!({}));
        assert!(request.class_name.is_none());
        assert!(request.variant.is_none());
        assert!(request.props.is_empty());
    }

    #[test]
    fn test_try_prop_reports_mistyped_reserved_prop() {
        let err = RenderRequest::new().try_prop("as", true).unwrap_err();
        assert!(matches!(err, StyledError::InvalidProp { ref name, .. } if name == "as"));

        let request = RenderRequest::new().try_prop("className", "p-2").unwrap();
        assert_eq!(request.class_name.as_deref(), Some("p-2"));
    }
}
