//! Editing session for MapEdit.
//!
//! [`EditorSession`] is what a presentation layer talks to. It owns the
//! single live [`Grid`](mapedit_grid::Grid), the selected tool and the paint
//! controller, and swaps in a new grid after every mutation.
//!
//! - [`EditorConfig`]: defaults loaded from `mapedit.toml`
//! - [`ExportSink`]: where exported JSON goes (a directory, a download)

mod config;
mod error;
mod session;
mod sink;

pub use config::{CONFIG_FILE_NAME, EditorConfig, ExportConfig, GridConfig, ToolsConfig};
pub use error::{SessionError, SessionResult};
pub use session::EditorSession;
pub use sink::{DirectorySink, ExportSink};
