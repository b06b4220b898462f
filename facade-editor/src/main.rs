//! facade CLI - create, edit, randomize and lay out facade designs.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use facade_config::design::{from_share_code, load_design, save_design, share_code};
use facade_config::{DesignFileV1, FacadeConfig, Seed, StylePreset};
use facade_editor::{EditIntent, Editor};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "facade")]
#[command(about = "Parametric building facade configurator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the style presets
    Presets,
    /// List the material catalog
    Materials,
    /// Create a new design file
    New {
        /// Output design file
        out: PathBuf,
        /// Style preset to start from
        #[arg(short, long, default_value = "modern")]
        preset: String,
        /// Design name (default: derived from filename)
        #[arg(short, long)]
        name: Option<String>,
    },
    /// Apply a JSON list of edits to a design
    Edit {
        /// Design file to edit
        design: PathBuf,
        /// JSON array of edits, e.g. [{"op": "set_count", "kind": "windows", "count": 8}]
        edits: PathBuf,
        /// Where to write the result (default: overwrite the input)
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
    /// Lay out a design and print or write the scene as JSON
    Layout {
        /// Design file
        design: PathBuf,
        /// Scene output file (default: stdout)
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
    /// Generate a random design
    Randomize {
        /// Output design file
        out: PathBuf,
        #[arg(short, long)]
        seed: u64,
        /// Design to randomize from (default: the modern preset)
        #[arg(long)]
        from: Option<PathBuf>,
    },
    /// Print the share code of a design
    Share {
        design: PathBuf,
    },
    /// Turn a share code back into a design file
    OpenShare {
        code: String,
        /// Output design file
        out: PathBuf,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Presets => list_presets(),
        Commands::Materials => list_materials(),
        Commands::New { out, preset, name } => new_design(&out, &preset, name)?,
        Commands::Edit { design, edits, out } => {
            edit_design(&design, &edits, out.as_deref().unwrap_or(&design))?
        }
        Commands::Layout { design, out } => layout_design(&design, out.as_deref())?,
        Commands::Randomize { out, seed, from } => randomize_design(&out, seed, from.as_deref())?,
        Commands::Share { design } => {
            let design = load_design(&design)?;
            println!("{}", share_code(&design.config)?);
        }
        Commands::OpenShare { code, out } => {
            let config = from_share_code(&code)?;
            save_design(&out, &DesignFileV1::new(name_from_path(&out), config))?;
            println!("Saved shared design to {}", out.display());
        }
    }

    Ok(())
}

fn name_from_path(path: &Path) -> String {
    path.file_name()
        .and_then(|n| n.to_str())
        .map(|n| n.split('.').next().unwrap_or(n).to_string())
        .unwrap_or_else(|| "Untitled".to_string())
}

fn list_presets() {
    for preset in StylePreset::ALL {
        println!("{:<12} {}", preset.as_str(), preset.description());
    }
}

fn list_materials() {
    for def in facade_core::CATALOG.iter() {
        println!(
            "{:<11} {}  roughness {:.2}  metalness {:.2}{}",
            def.id.as_str(),
            def.base_color,
            def.roughness,
            def.metalness,
            if def.is_transparent { "  transparent" } else { "" }
        );
    }
}

fn new_design(out: &Path, preset: &str, name: Option<String>) -> Result<()> {
    let config = FacadeConfig::default().apply_style_preset(preset)?;
    let design = DesignFileV1::new(name.unwrap_or_else(|| name_from_path(out)), config);
    save_design(out, &design)?;
    println!("Created {} ({})", out.display(), design.design_id);
    Ok(())
}

fn edit_design(path: &Path, edits_path: &Path, out: &Path) -> Result<()> {
    let mut design = load_design(path)?;
    let edits: Vec<EditIntent> = serde_json::from_str(
        &fs::read_to_string(edits_path)
            .with_context(|| format!("read edits file: {}", edits_path.display()))?,
    )
    .context("parse edits json")?;

    let mut editor = Editor::new(design.config.clone())?;
    let applied = editor.apply_all(&edits)?;

    if let Some(EditIntent::Randomize { seed }) = edits
        .iter()
        .rev()
        .find(|e| matches!(e, EditIntent::Randomize { .. }))
    {
        design.seed = Some(Seed(*seed));
    }
    design.config = editor.into_config();
    save_design(out, &design)?;
    println!("Applied {} of {} edits to {}", applied, edits.len(), out.display());
    Ok(())
}

fn layout_design(path: &Path, out: Option<&Path>) -> Result<()> {
    let design = load_design(path)?;
    let editor = Editor::new(design.config)?;
    let scene = editor.scene();
    let json = serde_json::to_string_pretty(scene).context("serialize scene")?;

    match out {
        Some(out) => {
            fs::write(out, json).with_context(|| format!("write scene: {}", out.display()))?;
            info!(
                "Wrote {} nodes ({} visible) to {}",
                scene.nodes.len(),
                scene.visible_count(),
                out.display()
            );
        }
        None => println!("{}", json),
    }
    Ok(())
}

fn randomize_design(out: &Path, seed: u64, from: Option<&Path>) -> Result<()> {
    let base = match from {
        Some(path) => load_design(path)?.config,
        None => FacadeConfig::default(),
    };
    let mut design = DesignFileV1::new(name_from_path(out), base.randomize(Seed(seed)));
    design.seed = Some(Seed(seed));
    save_design(out, &design)?;
    println!(
        "Generated {} design with seed {} at {}",
        design.config.style,
        seed,
        out.display()
    );
    Ok(())
}
