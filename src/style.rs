use crate::props::Props;
use crate::target::Target;
use indexmap::IndexMap;
use std::fmt;
use std::sync::Arc;

/// A class fragment computed from props
pub type ClassFn = Arc<dyn Fn(&Props) -> String + Send + Sync>;

/// Source of the always-applied class fragment
#[derive(Clone)]
pub enum BaseClass {
    Static(String),
    Dynamic(ClassFn),
}

impl BaseClass {
    /// Base class derived from props on every render
    pub fn dynamic<F>(f: F) -> Self
    where
        F: Fn(&Props) -> String + Send + Sync + 'static,
    {
        BaseClass::Dynamic(Arc::new(f))
    }

    pub fn resolve(&self, props: &Props) -> String {
        match self {
            BaseClass::Static(class) => class.clone(),
            BaseClass::Dynamic(f) => f(props),
        }
    }
}

impl Default for BaseClass {
    fn default() -> Self {
        BaseClass::Static(String::new())
    }
}

impl From<&str> for BaseClass {
    fn from(class: &str) -> Self {
        BaseClass::Static(class.to_string())
    }
}

impl From<String> for BaseClass {
    fn from(class: String) -> Self {
        BaseClass::Static(class)
    }
}

impl From<ClassFn> for BaseClass {
    fn from(f: ClassFn) -> Self {
        BaseClass::Dynamic(f)
    }
}

impl fmt::Debug for BaseClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BaseClass::Static(class) => f.debug_tuple("Static").field(class).finish(),
            BaseClass::Dynamic(_) => f.write_str("Dynamic(..)"),
        }
    }
}

/// Optional settings passed alongside the base class when creating a styled component.
#[derive(Clone, Default)]
pub struct StyleOptions {
    /// Target baked in at creation time
    pub as_: Option<Target>,

    /// Variant name to class fragment
    pub variants: IndexMap<String, String>,

    /// Class fragment derived from props on every render
    pub dynamic_class: Option<ClassFn>,

    /// Name reported when the component is used as another component's target
    pub display_name: Option<String>,
}

impl StyleOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_as(mut self, target: impl Into<Target>) -> Self {
        self.as_ = Some(target.into());
        self
    }

    pub fn variant(mut self, name: impl Into<String>, class: impl Into<String>) -> Self {
        self.variants.insert(name.into(), class.into());
        self
    }

    pub fn variants<I, K, V>(mut self, variants: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.variants
            .extend(variants.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    pub fn dynamic_class<F>(mut self, f: F) -> Self
    where
        F: Fn(&Props) -> String + Send + Sync + 'static,
    {
        self.dynamic_class = Some(Arc::new(f));
        self
    }

    pub fn display_name(mut self, name: impl Into<String>) -> Self {
        self.display_name = Some(name.into());
        self
    }
}

impl fmt::Debug for StyleOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StyleOptions")
            .field("as_", &self.as_)
            .field("variants", &self.variants)
            .field("dynamic_class", &self.dynamic_class.as_ref().map(|_| ".."))
            .field("display_name", &self.display_name)
            .finish()
    }
}

/// Full styling configuration of one component
#[derive(Debug, Clone, Default)]
pub struct StyleConfig {
    pub base: BaseClass,
    pub options: StyleOptions,
}

impl StyleConfig {
    pub fn new(base: impl Into<BaseClass>, options: StyleOptions) -> Self {
        Self { base: base.into(), options }
    }

    /// Class mapped to a variant name, if registered
    pub fn variant_class(&self, name: &str) -> Option<&str> {
        self.options.variants.get(name).map(String::as_str)
    }
}
