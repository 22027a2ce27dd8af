//! The live editing session.

use crate::config::EditorConfig;
use crate::error::{SessionError, SessionResult};
use crate::sink::ExportSink;
use mapedit_catalog::{Catalog, ToolId};
use mapedit_format::{ExportedDocument, ImportReport, RawDocument};
use mapedit_grid::Grid;
use mapedit_paint::{GestureState, PaintController, PointerEvent};
use tracing::{debug, info};

/// One user's editing state: the grid, the palette selection and the
/// in-progress gesture.
///
/// Every mutation computes a new grid and replaces the old one; nothing
/// outside the session holds a mutable reference to it.
#[derive(Debug, Clone)]
pub struct EditorSession {
    config: EditorConfig,
    catalog: Catalog,
    grid: Grid,
    active_tool: ToolId,
    controller: PaintController,
}

impl EditorSession {
    /// Starts a session with the built-in catalog.
    pub fn new(config: EditorConfig) -> SessionResult<Self> {
        Self::with_catalog(config, Catalog::builtin())
    }

    /// Starts a session with a custom catalog.
    pub fn with_catalog(config: EditorConfig, catalog: Catalog) -> SessionResult<Self> {
        let grid = Grid::new(config.grid.rows, config.grid.cols, config.grid.tile_size)?;
        let active_tool = catalog
            .lookup_by_id(&config.tools.default_tool)
            .map(|tool| tool.id.clone())
            .ok_or_else(|| SessionError::UnknownTool(config.tools.default_tool.clone()))?;

        Ok(Self {
            config,
            catalog,
            grid,
            active_tool,
            controller: PaintController::new(),
        })
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The current grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn active_tool(&self) -> &ToolId {
        &self.active_tool
    }

    pub fn gesture_state(&self) -> GestureState {
        self.controller.state()
    }

    /// Replaces the grid, returning whether anything changed.
    fn commit(&mut self, next: Grid) -> bool {
        let changed = next != self.grid;
        self.grid = next;
        changed
    }

    // ── Palette ──────────────────────────────────────────────────

    /// Selects the tool used by subsequent primary-button gestures.
    pub fn select_tool(&mut self, id: &str) -> SessionResult<()> {
        let tool = self
            .catalog
            .lookup_by_id(id)
            .ok_or_else(|| SessionError::UnknownTool(id.to_string()))?;
        debug!("Selected tool {}", tool.id);
        self.active_tool = tool.id.clone();
        Ok(())
    }

    // ── Pointer input ────────────────────────────────────────────

    /// Feeds one pointer event. Returns true if the grid changed.
    pub fn handle_pointer(&mut self, event: &PointerEvent) -> bool {
        match self.controller.handle(event, &self.active_tool) {
            Some(command) => {
                let next = command.apply(&self.grid, &self.catalog);
                self.commit(next)
            }
            None => false,
        }
    }

    // ── Direct mutations ─────────────────────────────────────────

    /// Paints a tool into one cell. Returns true if the grid changed.
    pub fn paint(&mut self, row: usize, col: usize, tool_id: &str) -> bool {
        let next = self.grid.paint(&self.catalog, row, col, tool_id);
        self.commit(next)
    }

    /// Clears one cell. Returns true if the grid changed.
    pub fn erase(&mut self, row: usize, col: usize) -> bool {
        let next = self.grid.erase(row, col);
        self.commit(next)
    }

    /// Resizes the grid, dropping anything outside the new bounds.
    pub fn resize(&mut self, cols: usize, rows: usize) -> SessionResult<()> {
        let next = self.grid.resize(cols, rows)?;
        info!(
            "Resized level {}x{} -> {}x{}",
            self.grid.cols(),
            self.grid.rows(),
            cols,
            rows
        );
        self.commit(next);
        Ok(())
    }

    /// Clears the map, keeping its dimensions.
    pub fn reset(&mut self) {
        info!("Cleared {}x{} level", self.grid.cols(), self.grid.rows());
        let next = self.grid.cleared();
        self.commit(next);
    }

    /// Replaces the map with an empty one of the given size.
    pub fn reset_to(&mut self, rows: usize, cols: usize) -> SessionResult<()> {
        let next = self.grid.reset(rows, cols)?;
        self.commit(next);
        Ok(())
    }

    // ── Export / import ──────────────────────────────────────────

    /// Exports the grid using the configured policy.
    pub fn export_document(&self) -> ExportedDocument {
        mapedit_format::export(&self.grid, &self.catalog, &self.config.export.options())
    }

    /// Exports the grid as pretty-printed JSON.
    pub fn export_json(&self) -> SessionResult<String> {
        Ok(mapedit_format::to_json_string(&self.export_document())?)
    }

    /// Exports into `sink` under the configured file name.
    pub fn export_to(&self, sink: &mut dyn ExportSink) -> SessionResult<()> {
        let json = self.export_json()?;
        sink.write_document(&self.config.export.file_name, &json)
    }

    /// Replaces the grid with one parsed from JSON text.
    ///
    /// On error the session is left exactly as it was.
    pub fn import_json(&mut self, json: &str) -> SessionResult<ImportReport> {
        let doc = mapedit_format::parse_document(json)?;
        self.import_document(&doc)
    }

    /// Replaces the grid with one rebuilt from a document.
    ///
    /// On error the session is left exactly as it was.
    pub fn import_document(&mut self, doc: &RawDocument) -> SessionResult<ImportReport> {
        let (grid, report) = mapedit_format::import_with_report(doc, &self.catalog)?;
        self.controller.cancel();
        self.grid = grid;
        Ok(report)
    }
}
