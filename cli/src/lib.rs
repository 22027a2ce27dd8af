//! Command-line front end for MapEdit.
//!
//! Every command that edits a level loads it through an [`EditorSession`],
//! applies the change and writes the exported JSON back to the same path.

mod script;

pub use script::{ScriptStep, parse_script};

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use mapedit_catalog::ToolKind;
use mapedit_session::{DirectorySink, EditorConfig, EditorSession, ExportSink};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

#[derive(Parser, Debug)]
#[command(name = "mapedit")]
#[command(about = "Tile-map level editor")]
pub struct Cli {
    /// Path to a mapedit.toml config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the tool palette
    Tools {
        /// Print the catalog as JSON
        #[arg(long)]
        json: bool,
    },
    /// Write an empty level
    New {
        out: PathBuf,
        #[arg(long)]
        cols: Option<usize>,
        #[arg(long)]
        rows: Option<usize>,
        #[arg(long)]
        tile_size: Option<u32>,
    },
    /// Show a level's dimensions and layer counts
    Info { level: PathBuf },
    /// Paint one cell with a tool
    Paint {
        level: PathBuf,
        #[arg(long)]
        row: usize,
        #[arg(long)]
        col: usize,
        #[arg(long)]
        tool: String,
    },
    /// Clear both layers of one cell
    Erase {
        level: PathBuf,
        #[arg(long)]
        row: usize,
        #[arg(long)]
        col: usize,
    },
    /// Change a level's size, keeping the overlapping cells
    Resize {
        level: PathBuf,
        #[arg(long)]
        cols: usize,
        #[arg(long)]
        rows: usize,
    },
    /// Empty every cell
    Clear { level: PathBuf },
    /// Replay a gesture script against a level
    Replay { level: PathBuf, script: PathBuf },
}

/// Runs one command, writing user-facing output to `out`.
pub fn run(cli: &Cli, out: &mut impl Write) -> Result<()> {
    let config = load_config(cli.config.as_deref())?;

    match &cli.command {
        Commands::Tools { json } => list_tools(&config, *json, out),
        Commands::New {
            out: path,
            cols,
            rows,
            tile_size,
        } => {
            let mut config = config;
            if let Some(cols) = cols {
                config.grid.cols = *cols;
            }
            if let Some(rows) = rows {
                config.grid.rows = *rows;
            }
            if let Some(tile_size) = tile_size {
                config.grid.tile_size = *tile_size;
            }
            let session = EditorSession::new(config).context("Failed to create level")?;
            save_level(&session, path)?;
            writeln!(
                out,
                "Created {}x{} level at {}",
                session.grid().cols(),
                session.grid().rows(),
                path.display()
            )?;
            Ok(())
        }
        Commands::Info { level } => {
            let session = open_level(config, level)?;
            print_info(&session, out)
        }
        Commands::Paint {
            level,
            row,
            col,
            tool,
        } => {
            let mut session = open_level(config, level)?;
            session
                .select_tool(tool)
                .with_context(|| format!("Cannot paint with `{tool}`"))?;
            ensure_in_bounds(&session, *row, *col)?;
            let changed = if session.active_tool().is_eraser() {
                session.erase(*row, *col)
            } else {
                session.paint(*row, *col, tool)
            };
            save_level(&session, level)?;
            report_cell(out, "Painted", *row, *col, changed)
        }
        Commands::Erase { level, row, col } => {
            let mut session = open_level(config, level)?;
            ensure_in_bounds(&session, *row, *col)?;
            let changed = session.erase(*row, *col);
            save_level(&session, level)?;
            report_cell(out, "Erased", *row, *col, changed)
        }
        Commands::Resize { level, cols, rows } => {
            let mut session = open_level(config, level)?;
            session
                .resize(*cols, *rows)
                .with_context(|| format!("Cannot resize to {cols}x{rows}"))?;
            save_level(&session, level)?;
            writeln!(out, "Resized {} to {}x{}", level.display(), cols, rows)?;
            Ok(())
        }
        Commands::Clear { level } => {
            let mut session = open_level(config, level)?;
            session.reset();
            save_level(&session, level)?;
            writeln!(out, "Cleared {}", level.display())?;
            Ok(())
        }
        Commands::Replay { level, script } => {
            let text = fs::read_to_string(script)
                .with_context(|| format!("Failed to read script {:?}", script))?;
            let steps = parse_script(&text)
                .with_context(|| format!("Invalid script {:?}", script))?;
            let mut session = open_level(config, level)?;
            let changes = replay(&mut session, &steps)?;
            save_level(&session, level)?;
            writeln!(
                out,
                "Replayed {} steps, {} grid changes",
                steps.len(),
                changes
            )?;
            Ok(())
        }
    }
}

/// Feeds script steps through a session. Returns how many steps changed
/// the grid.
pub fn replay(session: &mut EditorSession, steps: &[ScriptStep]) -> Result<usize> {
    let mut changes = 0;
    for step in steps {
        match step {
            ScriptStep::SelectTool(id) => session
                .select_tool(id)
                .with_context(|| format!("Cannot select tool `{id}`"))?,
            ScriptStep::Pointer(event) => {
                if session.handle_pointer(event) {
                    changes += 1;
                }
            }
        }
    }
    debug!("Replay finished in state {:?}", session.gesture_state());
    Ok(changes)
}

/// An explicit config path must exist and parse; the default
/// `mapedit.toml` falls back to built-in settings.
fn load_config(path: Option<&Path>) -> Result<EditorConfig> {
    match path {
        Some(path) => {
            let contents = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file {:?}", path))?;
            let config = EditorConfig::from_toml_str(&contents)
                .with_context(|| format!("Invalid config file {:?}", path))?;
            info!("Loaded editor config from {:?}", path);
            Ok(config)
        }
        None => Ok(EditorConfig::load()),
    }
}

fn open_level(config: EditorConfig, path: &Path) -> Result<EditorSession> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("Failed to read level {:?}", path))?;
    let mut session = EditorSession::new(config).context("Failed to start editor session")?;
    let report = session
        .import_json(&json)
        .with_context(|| format!("Failed to import level {:?}", path))?;
    if !report.is_clean() {
        warn!(
            "Dropped {} tiles and {} objects while loading {:?}",
            report.dropped_tiles, report.dropped_objects, path
        );
    }
    Ok(session)
}

fn save_level(session: &EditorSession, path: &Path) -> Result<()> {
    let file_name = path
        .file_name()
        .and_then(|name| name.to_str())
        .with_context(|| format!("Invalid level path {:?}", path))?;
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };

    let json = session.export_json()?;
    let mut sink = DirectorySink::new(dir);
    sink.write_document(file_name, &json)
        .with_context(|| format!("Failed to write level {:?}", path))?;
    info!("Saved {:?}", path);
    Ok(())
}

fn ensure_in_bounds(session: &EditorSession, row: usize, col: usize) -> Result<()> {
    let grid = session.grid();
    if !grid.contains(row, col) {
        bail!(
            "Cell ({row}, {col}) is outside the {}x{} level",
            grid.cols(),
            grid.rows()
        );
    }
    Ok(())
}

fn report_cell(out: &mut impl Write, verb: &str, row: usize, col: usize, changed: bool) -> Result<()> {
    if changed {
        writeln!(out, "{verb} ({row}, {col})")?;
    } else {
        writeln!(out, "{verb} ({row}, {col}): no change")?;
    }
    Ok(())
}

fn list_tools(config: &EditorConfig, json: bool, out: &mut impl Write) -> Result<()> {
    let session = EditorSession::new(config.clone()).context("Failed to start editor session")?;
    let catalog = session.catalog();

    if json {
        let tools: Vec<_> = catalog.iter().collect();
        writeln!(out, "{}", serde_json::to_string_pretty(&tools)?)?;
        return Ok(());
    }

    for tool in catalog.iter() {
        let (category, code) = match &tool.kind {
            ToolKind::Terrain { code } => ("terrain", code.as_str()),
            ToolKind::Entity { entity_type } => ("entity", entity_type.as_str()),
            ToolKind::Eraser => ("eraser", "-"),
        };
        let marker = if tool.id == *session.active_tool() { "*" } else { " " };
        writeln!(
            out,
            "{marker} {:<12} {:<8} {:<10} {}",
            tool.id.as_str(),
            category,
            code,
            tool.name
        )?;
    }
    Ok(())
}

fn print_info(session: &EditorSession, out: &mut impl Write) -> Result<()> {
    let grid = session.grid();
    let stats = grid.stats();
    writeln!(
        out,
        "Size:     {} cols x {} rows ({}px tiles)",
        grid.cols(),
        grid.rows(),
        grid.tile_size()
    )?;
    writeln!(out, "Terrain:  {}", stats.terrain_cells)?;
    writeln!(out, "Entities: {}", stats.entity_cells)?;
    writeln!(out, "Stacked:  {}", stats.stacked_cells)?;
    writeln!(out, "Empty:    {}", stats.empty_cells())?;
    Ok(())
}
