use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Styled component class composition CLI - composes Tailwind class strings from style sheets
#[derive(Parser, Debug)]
#[command(name = "tailwind-styled-cli")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Verbose output
    #[arg(
        short = 'v',
        long = "verbose",
        global = true,
        default_value_t = false,
        help = "Enable debug logging on stderr"
    )]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compose the class string of one component render
    Compose(ComposeArgs),
    /// Compose one class string per JSON request read from stdin
    Pipe(PipeArgs),
    /// Collect every class the components of some style sheets can emit
    Manifest(ManifestArgs),
    /// List the tags that have a dedicated constructor
    Tags,
}

/// Arguments for the compose command
#[derive(Args, Debug, Clone)]
pub struct ComposeArgs {
    #[arg(
        short = 'c',
        long = "config",
        value_name = "PATH",
        required = true,
        help = "Style sheet (YAML or JSON)"
    )]
    pub config: PathBuf,

    #[arg(
        short = 'n',
        long = "component",
        value_name = "NAME",
        required = true,
        help = "Component to render"
    )]
    pub component: String,

    #[arg(long = "variant", value_name = "NAME", help = "Variant to apply")]
    pub variant: Option<String>,

    #[arg(long = "class-name", value_name = "CLASSES", help = "Explicit classes appended last")]
    pub class_name: Option<String>,

    #[arg(long = "as", value_name = "TAG", help = "Render target override")]
    pub as_: Option<String>,

    #[arg(
        short = 'p',
        long = "props",
        value_name = "JSON",
        help = "Props as a JSON object, reserved keys included"
    )]
    pub props: Option<String>,

    #[arg(
        long = "json",
        default_value_t = false,
        help = "Print the resolved element as JSON instead of the class string"
    )]
    pub json: bool,

    #[arg(
        long = "dedup",
        default_value_t = false,
        help = "Keep only the last occurrence of duplicated classes"
    )]
    pub dedup: bool,
}

/// Arguments for the pipe command
#[derive(Args, Debug, Clone)]
pub struct PipeArgs {
    #[arg(
        short = 'c',
        long = "config",
        value_name = "PATH",
        required = true,
        help = "Style sheet (YAML or JSON)"
    )]
    pub config: PathBuf,

    #[arg(
        long = "dedup",
        default_value_t = false,
        help = "Keep only the last occurrence of duplicated classes"
    )]
    pub dedup: bool,
}

/// Arguments for the manifest command
#[derive(Args, Debug, Clone)]
pub struct ManifestArgs {
    #[arg(
        short = 'i',
        long = "input",
        value_name = "PATTERN",
        required = true,
        num_args = 1..,
        help = "Style sheet patterns (glob patterns supported)"
    )]
    pub input: Vec<String>,

    #[arg(
        short = 'e',
        long = "exclude",
        value_name = "PATTERN",
        num_args = 0..,
        help = "Patterns to exclude"
    )]
    pub exclude: Vec<String>,

    #[arg(
        short = 'o',
        long = "output",
        value_name = "PATH",
        help = "Where to write the manifest (stdout when omitted)"
    )]
    pub output: Option<PathBuf>,

    #[arg(long = "minify", default_value_t = false, help = "Write compact JSON")]
    pub minify: bool,
}

impl ManifestArgs {
    /// Validate that the arguments are consistent
    pub fn validate(&self) -> Result<(), String> {
        if self.input.is_empty() {
            return Err("At least one input pattern must be provided".to_string());
        }

        if let Some(output) = &self.output {
            if output.is_dir() {
                return Err(format!("Output path {} is a directory", output.display()));
            }
        }

        Ok(())
    }
}
