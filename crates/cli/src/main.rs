//! Actions CLI - build host commands from the command line.
//!
//! Each subcommand builds one command and prints its wire JSON, ready to be
//! handed to the transport. `check` reads wire JSON back and validates it.

use actions::brush::BrushTip;
use actions::document::GuideOrientation;
use actions::layer::{Alignment, Orientation};
use actions::{brush, document, layer, tool, Keyword};
use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use descriptor::version::{self, PluginVersion};
use descriptor::{Command, Reference, References};
use std::io::Read;
use tracing_subscriber::EnvFilter;

/// Actions CLI - build action descriptors for the host editor
#[derive(Parser)]
#[command(name = "actions")]
#[command(about = "Build and check action descriptors for the host image editor")]
struct Cli {
    /// Print single-line JSON
    #[arg(long, global = true)]
    compact: bool,

    /// Log builder decisions to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build a layer command
    Layer {
        #[command(flatten)]
        target: TargetArgs,

        #[command(subcommand)]
        action: LayerAction,
    },

    /// Build a brush command
    Brush {
        #[command(subcommand)]
        action: BrushAction,
    },

    /// Build a tool command
    Tool {
        #[command(subcommand)]
        action: ToolAction,
    },

    /// Build a document command
    Document {
        #[command(flatten)]
        target: TargetArgs,

        #[command(subcommand)]
        action: DocumentAction,
    },

    /// Validate a wire command and print it back
    Check {
        /// JSON command (read from stdin when omitted)
        json: Option<String>,
    },

    /// Check a host plugin version against the supported minimum
    Compat {
        /// Plugin version, e.g. 1.2.0
        version: String,
    },
}

/// Which object to act on. Defaults to the target object.
#[derive(Args)]
#[group(multiple = false)]
struct TargetArgs {
    /// Select by id
    #[arg(long)]
    id: Option<u32>,

    /// Select by 1-based index
    #[arg(long)]
    index: Option<u32>,

    /// Select by name
    #[arg(long)]
    name: Option<String>,
}

impl TargetArgs {
    fn reference(&self, by: &References) -> Reference {
        if let Some(id) = self.id {
            by.id(id)
        } else if let Some(index) = self.index {
            by.index(index)
        } else if let Some(name) = &self.name {
            by.name(name.as_str())
        } else {
            by.target()
        }
    }
}

#[derive(Subcommand)]
enum LayerAction {
    Hide,
    Show,
    Delete,
    /// Rotate by degrees
    Rotate {
        #[arg(allow_negative_numbers = true)]
        angle: f64,
    },
    /// Set opacity in percent
    Opacity { percent: f64 },
    Rename { name: String },
    /// Align on an edge or center (left, right, center, middle, top, bottom)
    Align { alignment: String },
    /// Flip horizontally or vertically
    Flip { orientation: String },
}

#[derive(Subcommand)]
enum BrushAction {
    /// Set the current brush tip
    Tip {
        /// Diameter in pixels
        #[arg(long)]
        diameter: f64,
        /// Hardness in percent (default 100)
        #[arg(long)]
        hardness: Option<f64>,
        /// Angle in degrees (default 0)
        #[arg(long, allow_negative_numbers = true)]
        angle: Option<f64>,
        /// Roundness in percent (default 100)
        #[arg(long)]
        roundness: Option<f64>,
        /// Spacing in percent (default 1)
        #[arg(long)]
        spacing: Option<f64>,
    },
}

#[derive(Subcommand)]
enum ToolAction {
    /// Make a tool active, e.g. moveTool
    Select { tool: String },
}

#[derive(Subcommand)]
enum DocumentAction {
    Select,
    /// Add a guide
    Guide {
        /// horizontal or vertical
        #[arg(long)]
        orientation: String,
        /// Position in pixels
        #[arg(long)]
        position: f64,
        /// Place the guide on the selected artboard
        #[arg(long)]
        artboard: bool,
    },
    /// Remove the guide at a 1-based index
    RemoveGuide { index: u32 },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let command = match cli.command {
        Commands::Layer { target, action } => build_layer(&target, action)?,
        Commands::Brush { action } => build_brush(action)?,
        Commands::Tool { action } => build_tool(action)?,
        Commands::Document { target, action } => build_document(&target, action)?,
        Commands::Check { json } => check(json)?,
        Commands::Compat { version } => return compat(&version),
    };
    print_command(&command, cli.compact)
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn build_layer(target: &TargetArgs, action: LayerAction) -> Result<Command> {
    let reference = target.reference(&layer::REFERENCE_BY);
    let command = match action {
        LayerAction::Hide => layer::hide(reference),
        LayerAction::Show => layer::show(reference),
        LayerAction::Delete => layer::delete(reference),
        LayerAction::Rotate { angle } => layer::rotate(reference, angle),
        LayerAction::Opacity { percent } => layer::set_opacity(reference, percent),
        LayerAction::Rename { name } => layer::rename(reference, &name),
        LayerAction::Align { alignment } => {
            layer::align(reference, Alignment::parse_keyword(&alignment)?)
        }
        LayerAction::Flip { orientation } => {
            layer::flip(reference, Orientation::parse_keyword(&orientation)?)
        }
    };
    command.context("Failed to build layer command")
}

fn build_brush(action: BrushAction) -> Result<Command> {
    match action {
        BrushAction::Tip {
            diameter,
            hardness,
            angle,
            roundness,
            spacing,
        } => {
            let tip = BrushTip {
                diameter,
                hardness,
                angle,
                roundness,
                spacing,
            };
            brush::set_brush_tip(tip).context("Failed to build brush tip command")
        }
    }
}

fn build_tool(action: ToolAction) -> Result<Command> {
    match action {
        ToolAction::Select { tool } => {
            tool::set_tool(&tool).context("Failed to build tool command")
        }
    }
}

fn build_document(target: &TargetArgs, action: DocumentAction) -> Result<Command> {
    let reference = target.reference(&document::REFERENCE_BY);
    let command = match action {
        DocumentAction::Select => document::select(reference),
        DocumentAction::Guide {
            orientation,
            position,
            artboard,
        } => document::insert_guide(
            reference,
            GuideOrientation::parse_keyword(&orientation)?,
            position,
            artboard,
        ),
        DocumentAction::RemoveGuide { index } => document::remove_guide(reference, index),
    };
    command.context("Failed to build document command")
}

/// Parse a wire command, from the argument or stdin.
fn check(json: Option<String>) -> Result<Command> {
    let text = match json {
        Some(text) => text,
        None => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read command from stdin")?;
            text
        }
    };
    let value: serde_json::Value =
        serde_json::from_str(&text).with_context(|| "Invalid command JSON")?;
    Command::from_wire(&value).context("Not a well-formed command")
}

fn compat(found: &str) -> Result<()> {
    let found: PluginVersion = found.parse()?;
    version::check_compatible(&found)?;
    println!(
        "Plugin {found} is compatible (minimum {}).",
        version::MINIMUM_PLUGIN_VERSION
    );
    Ok(())
}

fn print_command(command: &Command, compact: bool) -> Result<()> {
    let json = if compact {
        serde_json::to_string(command)?
    } else {
        serde_json::to_string_pretty(command)?
    };
    println!("{json}");
    Ok(())
}
