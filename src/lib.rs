//! Spaced-grid layout overlay.
//!
//! A grid container that injects uniform gutters between rows and columns
//! without requiring the consumer to declare spacer tracks. Two strategies
//! are implemented: synthesizing gutter tracks directly into the
//! definition lists (with a doubled-index remap of child placements), and
//! the preferred margin strategy, which wraps each child in a proxy
//! carrying half-spacing margins on interior sides and leaves the user's
//! definitions untouched.
//!
//! The host toolkit is an external collaborator: it delivers structural
//! notifications ([`GridChange`]) and queries the container's track,
//! placement, and margin model back out. All recomputation is synchronous
//! and single-threaded.

pub mod error;
pub mod geometry;
pub mod grid;
pub mod layout;
pub mod logging;
pub mod metrics;

pub use error::{GridError, Result};
pub use geometry::Thickness;
pub use grid::{ChildId, DEFAULT_SPACING, GridChange, ItemProxy, SpacedGrid, SpacingStrategy};
pub use layout::{Placement, Track, TrackRole, TrackSize, cell_margin, refresh_spacing, synthesize};
pub use logging::{
    FileSink, LogEvent, LogFields, LogLevel, LogSink, Logger, LoggingError, LoggingResult,
    MemorySink,
};
pub use metrics::{LayoutMetrics, MetricSnapshot};
