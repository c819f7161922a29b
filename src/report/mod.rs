//! Reporting: roll diagram geometry and material-usage summaries.

mod diagram;
mod summary;

pub use diagram::{build_diagram, DiagramRect, MarginRect, RollDiagram, SeparatorLine};
pub use summary::{layout_stats, shelf_summaries, LayoutStats, ShelfSummary};
