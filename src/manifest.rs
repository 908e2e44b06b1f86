use crate::stylesheet::StyleSheet;
use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Metadata for the generated manifest
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManifestMetadata {
    /// Version of the manifest format
    pub version: String,

    /// Timestamp when the manifest was generated
    pub generated_at: DateTime<Utc>,

    /// Number of style sheets read
    pub sheets_processed: usize,

    /// Number of components described
    pub components: usize,

    /// Number of unique class tokens
    pub classes_collected: usize,

    /// Crate version
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generator_version: Option<String>,
}

/// Usage of one class token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManifestClassInfo {
    /// Number of fragments containing the token
    pub count: usize,

    /// Components that can emit the token
    pub components: Vec<String>,
}

/// Every class a set of styled components can emit.
///
/// Meant to be handed to a CSS generator as a safelist, since composed
/// classes never appear literally in markup sources.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Manifest {
    pub metadata: ManifestMetadata,

    pub classes: IndexMap<String, ManifestClassInfo>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub statistics: Option<ManifestStatistics>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManifestStatistics {
    /// Fragments scanned across all components
    pub fragments_scanned: usize,

    /// Processing time in milliseconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub processing_time_ms: Option<u64>,

    /// Most shared classes
    pub top_classes: Vec<TopClass>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopClass {
    pub name: String,
    pub count: usize,
    pub component_count: usize,
}

impl Manifest {
    pub fn new() -> Self {
        Self {
            metadata: ManifestMetadata {
                version: "1.0.0".to_string(),
                generated_at: Utc::now(),
                sheets_processed: 0,
                components: 0,
                classes_collected: 0,
                generator_version: Some(env!("CARGO_PKG_VERSION").to_string()),
            },
            classes: IndexMap::new(),
            statistics: None,
        }
    }

    /// Record one occurrence of a class token for a component
    pub fn add_class(&mut self, class_name: &str, component: &str) {
        let entry = self
            .classes
            .entry(class_name.to_string())
            .or_insert_with(|| ManifestClassInfo { count: 0, components: Vec::new() });

        entry.count += 1;
        if !entry.components.iter().any(|c| c == component) {
            entry.components.push(component.to_string());
        }
        self.metadata.classes_collected = self.classes.len();
    }

    /// Calculate and set statistics
    pub fn calculate_statistics(&mut self, fragments_scanned: usize, processing_time_ms: Option<u64>) {
        let mut class_list: Vec<_> = self
            .classes
            .iter()
            .map(|(name, info)| TopClass {
                name: name.clone(),
                count: info.count,
                component_count: info.components.len(),
            })
            .collect();

        // stable sort keeps first-seen order among equal counts
        class_list.sort_by(|a, b| b.count.cmp(&a.count));
        class_list.truncate(10);

        self.statistics = Some(ManifestStatistics {
            fragments_scanned,
            processing_time_ms,
            top_classes: class_list,
        });
    }

    /// Convert manifest to JSON value
    pub fn to_json(&self) -> Value {
        serde_json::to_value(self).unwrap_or_else(|_| serde_json::json!({}))
    }

    pub fn to_pretty_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    pub fn to_compact_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

impl Default for Manifest {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder collecting classes from style sheets
pub struct ManifestBuilder {
    manifest: Manifest,
    fragments: usize,
    start_time: Option<std::time::Instant>,
}

impl ManifestBuilder {
    pub fn new() -> Self {
        Self {
            manifest: Manifest::new(),
            fragments: 0,
            start_time: Some(std::time::Instant::now()),
        }
    }

    /// Add every class every component of the sheet can emit
    pub fn with_sheet(mut self, sheet: &StyleSheet) -> Self {
        for (name, style) in &sheet.components {
            for fragment in style.fragments() {
                self.fragments += 1;
                for class in fragment.split_whitespace() {
                    self.manifest.add_class(class, name);
                }
            }
            self.manifest.metadata.components += 1;
        }
        self.manifest.metadata.sheets_processed += 1;
        self
    }

    /// Build the final manifest with statistics
    pub fn build(mut self) -> Manifest {
        let processing_time = self.start_time.map(|t| t.elapsed().as_millis() as u64);
        self.manifest.calculate_statistics(self.fragments, processing_time);
        self.manifest
    }
}

impl Default for ManifestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
