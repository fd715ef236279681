use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};

use crate::naming::builder::NameBuilder;
use crate::naming::format::{CasingStyle, NameOptions};
use crate::naming::source::NameSource;

// ============================================================================
// CLI Argument Parsing (clap derive)
// ============================================================================

#[derive(Parser, Debug)]
#[command(
    name = "element-namer",
    version,
    about = "Derives stable element names and locator catalogs from page snapshots"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Casing style for generated names: pascal or camel
    #[arg(long, global = true)]
    pub casing: Option<String>,

    /// Keep existing uppercase runs ("URL") as single words
    #[arg(long, global = true, action = clap::ArgAction::Set)]
    pub preserve_uppercase: Option<bool>,

    /// Source priority list, e.g. "id,text,class"
    #[arg(long, global = true)]
    pub sources: Option<String>,

    /// Path to config file (default: element-namer.yaml in current dir)
    #[arg(long, global = true)]
    pub config: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Name a single element of a snapshot
    Name {
        /// Path to a snapshot JSON file
        #[arg(long)]
        snapshot: String,

        /// Dotted child-index path to the element, e.g. "0.2.1" (empty = root)
        #[arg(long, default_value = "")]
        path: String,
    },

    /// Name every discovered element and emit the locator catalog
    Generate {
        /// Path to a snapshot JSON file
        #[arg(long, conflicts_with = "url")]
        snapshot: Option<String>,

        /// Live page URL, extracted through the page server
        #[arg(long)]
        url: Option<String>,

        /// Extraction server script (used with --url)
        #[arg(long)]
        server_script: Option<String>,

        /// Output format: json or yaml
        #[arg(long, default_value = "json")]
        format: String,

        /// Output file path (default: stdout)
        #[arg(short, long)]
        output: Option<String>,

        /// Write per-element naming decisions to a JSONL trace file
        #[arg(long)]
        trace: Option<String>,
    },
}

// ============================================================================
// Config File Model (optional YAML)
// ============================================================================

/// Optional YAML config file: `element-namer.yaml`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub naming: NamingConfig,
    #[serde(default)]
    pub bridge: BridgeConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            naming: NamingConfig::default(),
            bridge: BridgeConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NamingConfig {
    #[serde(default = "default_pascal")]
    pub casing: String,

    #[serde(default = "default_true")]
    pub preserve_uppercase: bool,

    #[serde(default = "default_sources")]
    pub sources: String,
}

impl Default for NamingConfig {
    fn default() -> Self {
        Self {
            casing: "pascal".to_string(),
            preserve_uppercase: true,
            sources: "id,text,class".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct BridgeConfig {
    pub server_script: Option<String>,
}

// Serde default helpers
fn default_pascal() -> String { "pascal".to_string() }
fn default_true() -> bool { true }
fn default_sources() -> String { "id,text,class".to_string() }

// ============================================================================
// Config File Loading
// ============================================================================

/// Load config from a YAML file. Returns defaults if file is missing or malformed.
pub fn load_config(path: Option<&str>) -> AppConfig {
    let config_path = path.unwrap_or("element-namer.yaml");
    match std::fs::read_to_string(config_path) {
        Ok(content) => serde_yaml::from_str(&content).unwrap_or_default(),
        Err(_) => AppConfig::default(),
    }
}

// ============================================================================
// Builder resolution (merge CLI args with config file)
// ============================================================================

/// Resolve naming settings (CLI > config > defaults) into a NameBuilder.
pub fn build_name_builder(cli: &Cli, config: &AppConfig) -> NameBuilder {
    let casing = cli.casing.as_deref().unwrap_or(&config.naming.casing);
    let casing_style = match casing {
        "camel" => CasingStyle::Camel,
        _ => CasingStyle::Pascal,
    };

    let preserve = cli
        .preserve_uppercase
        .unwrap_or(config.naming.preserve_uppercase);

    let sources = cli.sources.as_deref().unwrap_or(&config.naming.sources);

    let options = NameOptions {
        casing_style,
        preserve_consecutive_uppercase: preserve,
    };

    NameBuilder::with_options(options).with_sources(NameSource::parse_list(sources))
}
