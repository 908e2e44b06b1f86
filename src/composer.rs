//! Class string composition and target resolution.
//!
//! Fragments are applied in a fixed order so that later sources win under
//! last-one-wins utility merging:
//!
//! 1. base class (literal, or computed from the pass-through props)
//! 2. dynamic class (computed from the same props)
//! 3. variant class, when the requested variant is registered
//! 4. the caller's explicit `class_name`

use crate::class_names::ClassMerge;
use crate::request::RenderRequest;
use crate::style::StyleConfig;
use crate::target::Target;

/// Compose the final class string for one render
pub fn compose_class(config: &StyleConfig, request: &RenderRequest, merger: &dyn ClassMerge) -> String {
    let base = config.base.resolve(&request.props);
    let dynamic = config
        .options
        .dynamic_class
        .as_ref()
        .map(|f| f(&request.props))
        .unwrap_or_default();
    let variant = request
        .variant
        .as_deref()
        .and_then(|name| {
            let class = config.variant_class(name);
            if class.is_none() {
                tracing::trace!(variant = name, "variant not registered, ignoring");
            }
            class
        })
        .unwrap_or_default();
    let explicit = request.class_name.as_deref().unwrap_or_default();

    merger.merge(&[base.as_str(), dynamic.as_str(), variant, explicit])
}

/// Pick the render target: per-request `as`, then configured `as`, then the fallback.
pub fn resolve_target(config: &StyleConfig, request: &RenderRequest, fallback: &Target) -> Target {
    request
        .as_
        .as_ref()
        .or(config.options.as_.as_ref())
        .unwrap_or(fallback)
        .clone()
}
