use crate::errors::{Result, StyledError};
use crate::style::StyleOptions;
use crate::styled::{create, StyledComponent};
use crate::target::Target;
use indexmap::IndexMap;
use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// Declarative style sheet: named components and their classes
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StyleSheet {
    pub components: IndexMap<String, ComponentStyle>,
}

/// Style of one component as written in a style sheet
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ComponentStyle {
    /// Always-applied classes
    #[serde(deserialize_with = "class_string")]
    pub base: String,

    /// Element identifier to render
    #[serde(rename = "as", skip_serializing_if = "Option::is_none")]
    pub as_: Option<String>,

    /// Variant name to classes
    #[serde(skip_serializing_if = "IndexMap::is_empty", deserialize_with = "class_map")]
    pub variants: IndexMap<String, String>,

    /// Prop name to classes added while that prop is truthy
    #[serde(skip_serializing_if = "IndexMap::is_empty", deserialize_with = "class_map")]
    pub toggles: IndexMap<String, String>,
}

impl ComponentStyle {
    /// Build a styled component, validating the target identifier
    pub fn build(&self, name: &str) -> Result<StyledComponent> {
        let mut options = StyleOptions::new()
            .variants(self.variants.clone())
            .display_name(name);

        if let Some(as_) = &self.as_ {
            options = options.with_as(Target::parse(as_)?);
        }

        if !self.toggles.is_empty() {
            let toggles = self.toggles.clone();
            options = options.dynamic_class(move |props| {
                crate::class_names::join_classes(
                    toggles
                        .iter()
                        .filter(|(prop, _)| props.is_truthy(prop))
                        .map(|(_, class)| class.as_str()),
                )
            });
        }

        Ok(create(self.base.as_str(), options))
    }

    /// Every class fragment this component can emit, in declaration order
    pub fn fragments(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.base.as_str())
            .chain(self.variants.values().map(String::as_str))
            .chain(self.toggles.values().map(String::as_str))
    }
}

impl StyleSheet {
    /// Load a style sheet from a YAML file
    pub fn from_yaml_file(path: &Path) -> Result<Self> {
        let content = read(path)?;
        let sheet: Self = serde_yaml::from_str(&content).map_err(|e| StyledError::ConfigError {
            message: format!("Failed to parse YAML style sheet {}: {}", path.display(), e),
        })?;
        sheet.validated(path)
    }

    /// Load a style sheet from a JSON file
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let content = read(path)?;
        let sheet: Self = serde_json::from_str(&content).map_err(|e| StyledError::ConfigError {
            message: format!("Failed to parse JSON style sheet {}: {}", path.display(), e),
        })?;
        sheet.validated(path)
    }

    /// Load a style sheet from a file (auto-detect format)
    pub fn from_file(path: &Path) -> Result<Self> {
        match path.extension().and_then(|s| s.to_str()) {
            Some("yaml") | Some("yml") => Self::from_yaml_file(path),
            Some("json") => Self::from_json_file(path),
            _ => Err(StyledError::ConfigError {
                message: format!(
                    "Unsupported style sheet format: {}. Use .yaml, .yml, or .json",
                    path.display()
                ),
            }),
        }
    }

    /// Merge with another sheet; components defined in both take `other`'s style
    pub fn merge(mut self, other: Self) -> Self {
        self.components.extend(other.components);
        self
    }

    /// Build the named component
    pub fn component(&self, name: &str) -> Result<StyledComponent> {
        let style = self
            .components
            .get(name)
            .ok_or_else(|| StyledError::UnknownComponent(name.to_string()))?;
        tracing::debug!(component = name, "building styled component");
        style.build(name)
    }

    /// Build every component of the sheet
    pub fn components(&self) -> Result<IndexMap<String, StyledComponent>> {
        self.components
            .iter()
            .map(|(name, style)| Ok((name.clone(), style.build(name)?)))
            .collect()
    }

    fn validated(self, path: &Path) -> Result<Self> {
        for (name, style) in &self.components {
            if let Some(as_) = &style.as_ {
                Target::parse(as_).map_err(|e| StyledError::ConfigError {
                    message: format!("{}: component '{}': {}", path.display(), name, e),
                })?;
            }
        }
        tracing::debug!(
            path = %path.display(),
            components = self.components.len(),
            "loaded style sheet"
        );
        Ok(self)
    }
}

/// A class list that must be written as a string. YAML would otherwise
/// coerce plain scalars such as `5`, `true` or `~` into class names.
struct ClassString(String);

impl<'de> Deserialize<'de> for ClassString {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        struct ClassStringVisitor;

        impl<'de> Visitor<'de> for ClassStringVisitor {
            type Value = ClassString;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a string of class names")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> std::result::Result<ClassString, E> {
                Ok(ClassString(v.to_string()))
            }

            fn visit_string<E: de::Error>(self, v: String) -> std::result::Result<ClassString, E> {
                Ok(ClassString(v))
            }
        }

        deserializer.deserialize_any(ClassStringVisitor)
    }
}

fn class_string<'de, D: Deserializer<'de>>(deserializer: D) -> std::result::Result<String, D::Error> {
    ClassString::deserialize(deserializer).map(|class| class.0)
}

fn class_map<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> std::result::Result<IndexMap<String, String>, D::Error> {
    let classes = IndexMap::<String, ClassString>::deserialize(deserializer)?;
    Ok(classes.into_iter().map(|(name, class)| (name, class.0)).collect())
}

fn read(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|e| StyledError::ConfigError {
        message: format!("Failed to read style sheet {}: {}", path.display(), e),
    })
}
