//! Command handlers behind `tailwind-styled-cli`.

use crate::args::{ComposeArgs, ManifestArgs, PipeArgs};
use crate::class_names::DedupClasses;
use crate::element::ElementTree;
use crate::errors::{Result, StyledError};
use crate::manifest::{Manifest, ManifestBuilder};
use crate::props::Props;
use crate::request::RenderRequest;
use crate::styled::StyledComponent;
use crate::stylesheet::StyleSheet;
use crate::tags::TagFactory;
use crate::target::Target;
use indexmap::IndexMap;
use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};
use tracing_subscriber::EnvFilter;

/// Install the stderr log subscriber. `RUST_LOG` wins over `verbose`.
pub fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    // a subscriber may already be installed when embedded
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Run the compose command, returning what should be printed
pub fn compose(args: &ComposeArgs) -> Result<String> {
    let sheet = StyleSheet::from_file(&args.config)?;
    let component = with_merger(sheet.component(&args.component)?, args.dedup);

    let props = match &args.props {
        Some(json) => parse_props(json)?,
        None => Props::new(),
    };
    let mut request = RenderRequest::from_props(props)?;
    if let Some(variant) = &args.variant {
        request.variant = Some(variant.clone());
    }
    if let Some(class_name) = &args.class_name {
        request.class_name = Some(class_name.clone());
    }
    if let Some(as_) = &args.as_ {
        request.as_ = Some(Target::parse(as_)?);
    }

    if args.json {
        let node = component.render_with(&ElementTree, request);
        Ok(serde_json::to_string_pretty(&node)?)
    } else {
        Ok(component.class_name(&request))
    }
}

/// One line of pipe input
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct PipeRequest {
    component: String,
    #[serde(default)]
    props: serde_json::Map<String, serde_json::Value>,
}

/// Compose a class string for each newline-delimited JSON request
pub async fn handle_pipe_command<R, W>(args: &PipeArgs, mut reader: R, mut writer: W) -> Result<()>
where
    R: AsyncRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let sheet = StyleSheet::from_file(&args.config)?;
    let components: IndexMap<String, StyledComponent> = sheet
        .components()?
        .into_iter()
        .map(|(name, component)| (name, with_merger(component, args.dedup)))
        .collect();

    let mut input = String::new();
    reader
        .read_to_string(&mut input)
        .await
        .map_err(|e| StyledError::InputError(format!("Failed to read from stdin: {}", e)))?;

    let output = compose_lines(&components, &input)?;

    writer
        .write_all(output.as_bytes())
        .await
        .map_err(|e| StyledError::OutputError {
            path: "stdout".to_string(),
            message: e.to_string(),
        })?;
    writer.flush().await.map_err(|e| StyledError::OutputError {
        path: "stdout".to_string(),
        message: e.to_string(),
    })?;

    Ok(())
}

fn compose_lines(components: &IndexMap<String, StyledComponent>, input: &str) -> Result<String> {
    let mut output = String::new();
    for (index, line) in input.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let request: PipeRequest = serde_json::from_str(line)
            .map_err(|e| StyledError::InputError(format!("line {}: {}", index + 1, e)))?;
        let component = components
            .get(&request.component)
            .ok_or_else(|| StyledError::UnknownComponent(request.component.clone()))?;
        let render = RenderRequest::from_props(Props::from(request.props))?;

        output.push_str(&component.class_name(&render));
        output.push('\n');
    }
    Ok(output)
}

/// Build the class manifest from every matching style sheet
pub fn build_manifest(args: &ManifestArgs) -> Result<Manifest> {
    args.validate().map_err(StyledError::InputError)?;

    let files = collect_files(&args.input, &args.exclude)?;
    if files.is_empty() {
        return Err(StyledError::NoFilesFound);
    }

    let mut builder = ManifestBuilder::new();
    for path in &files {
        builder = builder.with_sheet(&StyleSheet::from_file(path)?);
    }
    let manifest = builder.build();
    tracing::debug!(
        sheets = files.len(),
        classes = manifest.classes.len(),
        "built class manifest"
    );
    Ok(manifest)
}

/// Run the manifest command; returns the JSON when no output path is given
pub fn manifest(args: &ManifestArgs) -> Result<Option<String>> {
    let manifest = build_manifest(args)?;
    let content = if args.minify {
        manifest.to_compact_json()?
    } else {
        manifest.to_pretty_json()?
    };

    match &args.output {
        Some(path) => {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            write_atomic(path, &content).map_err(|e| StyledError::OutputError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;
            Ok(None)
        }
        None => Ok(Some(content)),
    }
}

/// One line per tag of the constructor table
pub fn list_tags() -> String {
    TagFactory::global()
        .tags()
        .map(|tag| format!("{}\n", tag))
        .collect()
}

fn with_merger(component: StyledComponent, dedup: bool) -> StyledComponent {
    if dedup {
        component.with_merger(DedupClasses)
    } else {
        component
    }
}

fn parse_props(json: &str) -> Result<Props> {
    match serde_json::from_str::<serde_json::Value>(json)? {
        serde_json::Value::Object(map) => Ok(Props::from(map)),
        _ => Err(StyledError::InputError("--props must be a JSON object".to_string())),
    }
}

fn collect_files(patterns: &[String], exclude_patterns: &[String]) -> Result<Vec<PathBuf>> {
    let exclude = exclude_patterns
        .iter()
        .map(|p| glob::Pattern::new(p))
        .collect::<std::result::Result<Vec<_>, _>>()?;

    let mut files = Vec::new();
    let mut seen = HashSet::new();
    for pattern in patterns {
        for entry in glob::glob(pattern)? {
            let path = entry?;
            if path.is_dir() || exclude.iter().any(|p| p.matches_path(&path)) {
                continue;
            }
            if seen.insert(path.clone()) {
                files.push(path);
            }
        }
    }
    Ok(files)
}

/// Write file atomically by writing to temp file then renaming
fn write_atomic(path: &Path, content: &str) -> std::io::Result<()> {
    use std::io::Write;

    let temp_path = path.with_extension("tmp");
    let mut file = fs::File::create(&temp_path)?;
    file.write_all(content.as_bytes())?;
    file.sync_all()?;
    fs::rename(&temp_path, path)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tags;
    use crate::style::StyleOptions;

    fn components() -> IndexMap<String, StyledComponent> {
        let mut components = IndexMap::new();
        components.insert(
            "Button".to_string(),
            tags::button("px-4", StyleOptions::new().variant("primary", "bg-blue-500")),
        );
        components
    }

    #[test]
    fn test_compose_lines_skips_blank_lines() {
        let input = "{\"component\":\"Button\"}\n\n{\"component\":\"Button\",\"props\":{\"variant\":\"primary\",\"className\":\"m-2\"}}\n";
        let output = compose_lines(&components(), input).unwrap();
        assert_eq!(output, "px-4\npx-4 bg-blue-500 m-2\n");
    }

    #[test]
    fn test_compose_lines_reports_line_number() {
        let err = compose_lines(&components(), "{\"component\":\"Button\"}\nnot json\n").unwrap_err();
        assert!(err.to_string().contains("line 2"), "{err}");
    }

    #[test]
    fn test_compose_lines_unknown_component() {
        let err = compose_lines(&components(), "{\"component\":\"Nope\"}").unwrap_err();
        assert!(matches!(err, StyledError::UnknownComponent(_)));
    }

    #[test]
    fn test_parse_props_requires_object() {
        assert!(parse_props("[1]").is_err());
        assert_eq!(parse_props("{\"a\": 1}").unwrap(), Props::new().with("a", 1));
    }

    #[test]
    fn test_list_tags() {
        let listing = list_tags();
        assert!(listing.starts_with("div\nspan\n"));
        assert!(listing.ends_with("figcaption\n"));
    }
}
