//! Styled components for Tailwind-style utility classes.
//!
//! A styled component wraps a tag or an external component and composes its
//! class attribute from a base class, an optional props-derived class, a
//! named variant and the caller's own classes, in that order.
//!
//! ```
//! use tailwind_styled::{create, tags, RenderRequest, StyleOptions, Tag, Target};
//!
//! let button = tags::button(
//!     "px-4 py-2",
//!     StyleOptions::new().variant("primary", "bg-blue-500"),
//! );
//! let element = button.render(RenderRequest::new().variant("primary").class_name("m-2"));
//! assert_eq!(element.class_name, "px-4 py-2 bg-blue-500 m-2");
//! assert_eq!(element.target, Target::Tag(Tag::Button));
//!
//! let panel = create("p-4", StyleOptions::new());
//! assert_eq!(panel.class_name(&RenderRequest::new()), "p-4");
//! ```

pub mod args;
pub mod class_names;
#[cfg(feature = "cli")]
pub mod cli;
pub mod composer;
pub mod element;
pub mod errors;
pub mod manifest;
pub mod props;
pub mod request;
pub mod style;
pub mod styled;
pub mod stylesheet;
pub mod tags;
pub mod target;

pub use args::{Cli, Commands, ComposeArgs, ManifestArgs, PipeArgs};
pub use class_names::{join_classes, ClassMerge, DedupClasses, JoinClasses};
pub use composer::{compose_class, resolve_target};
pub use element::{Element, ElementTree, Node, NodeRef, Renderer};
pub use errors::{Result, StyledError};
pub use manifest::{Manifest, ManifestBuilder};
pub use props::Props;
pub use request::{RenderRequest, RESERVED_PROPS};
pub use style::{BaseClass, ClassFn, StyleConfig, StyleOptions};
pub use styled::{create, StyledComponent};
pub use stylesheet::{ComponentStyle, StyleSheet};
pub use tags::TagFactory;
pub use target::{Component, ComponentRef, Tag, Target};
