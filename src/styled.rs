use crate::class_names::{ClassMerge, JoinClasses};
use crate::composer::{compose_class, resolve_target};
use crate::element::{Element, Node, Renderer};
use crate::request::RenderRequest;
use crate::style::{BaseClass, StyleConfig, StyleOptions};
use crate::target::{Component, ComponentRef, Tag, Target};
use std::fmt;
use std::sync::Arc;

/// A render function bound to a style configuration.
///
/// Rendering is pure: the same request always yields the same element. The
/// component is cheap to clone and can be shared across threads.
#[derive(Clone)]
pub struct StyledComponent {
    config: StyleConfig,
    fallback: Target,
    merger: Arc<dyn ClassMerge>,
    name: String,
}

/// Create a styled component that renders a `div` unless told otherwise.
pub fn create(base: impl Into<BaseClass>, options: StyleOptions) -> StyledComponent {
    StyledComponent::new(StyleConfig::new(base, options), Target::default())
}

impl StyledComponent {
    fn new(config: StyleConfig, fallback: Target) -> Self {
        let name = match &config.options.display_name {
            Some(name) => name.clone(),
            None => {
                let target = config.options.as_.as_ref().unwrap_or(&fallback);
                format!("Styled({})", target.name())
            }
        };

        Self {
            config,
            fallback,
            merger: Arc::new(JoinClasses),
            name,
        }
    }

    /// Bind to a tag. The tag replaces any `as` in `options`; only a
    /// per-request `as` can still redirect the render.
    pub fn for_tag(tag: Tag, base: impl Into<BaseClass>, options: StyleOptions) -> Self {
        Self::new(StyleConfig::new(base, options.with_as(tag)), Target::Tag(tag))
    }

    /// Replace the class merging strategy
    pub fn with_merger(mut self, merger: impl ClassMerge + 'static) -> Self {
        self.merger = Arc::new(merger);
        self
    }

    pub fn config(&self) -> &StyleConfig {
        &self.config
    }

    /// Composed class string for a request
    pub fn class_name(&self, request: &RenderRequest) -> String {
        compose_class(&self.config, request, self.merger.as_ref())
    }

    /// Target a request renders to
    pub fn target(&self, request: &RenderRequest) -> Target {
        resolve_target(&self.config, request, &self.fallback)
    }

    /// Resolve a request into the element handed to the UI framework
    pub fn render(&self, request: RenderRequest) -> Element {
        let class_name = self.class_name(&request);
        let target = self.target(&request);
        tracing::trace!(component = %self.name, %target, class_name = %class_name, "rendered");

        let RenderRequest { children, node_ref, props, .. } = request;
        Element { target, class_name, props, children, node_ref }
    }

    /// Render and hand the element to a framework renderer
    pub fn render_with<R: Renderer>(&self, renderer: &R, request: RenderRequest) -> R::Output {
        renderer.instantiate(self.render(request))
    }

    /// Share this component so it can be used as another component's target
    pub fn into_component(self) -> ComponentRef {
        ComponentRef::new(self)
    }
}

/// Rendering into a styled component forwards the outer element: its composed
/// class string becomes the inner `class_name`, so it lands after the inner
/// component's own fragments.
impl Component for StyledComponent {
    fn name(&self) -> &str {
        &self.name
    }

    fn render(&self, element: Element) -> Node {
        let Element { class_name, props, children, node_ref, .. } = element;
        let request = RenderRequest {
            class_name: Some(class_name).filter(|c| !c.is_empty()),
            children,
            variant: None,
            as_: None,
            node_ref,
            props,
        };
        Node::Element(StyledComponent::render(self, request))
    }
}

impl fmt::Debug for StyledComponent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StyledComponent")
            .field("name", &self.name)
            .field("config", &self.config)
            .field("fallback", &self.fallback)
            .finish_non_exhaustive()
    }
}
