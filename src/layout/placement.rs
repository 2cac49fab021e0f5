use serde::{Deserialize, Serialize};

/// Grid cell assignment for a child: the (row, column) origin plus the
/// number of tracks spanned on each axis. Spans are always at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Placement {
    pub row: u16,
    pub column: u16,
    pub row_span: u16,
    pub column_span: u16,
}

impl Default for Placement {
    fn default() -> Self {
        Self {
            row: 0,
            column: 0,
            row_span: 1,
            column_span: 1,
        }
    }
}

impl Placement {
    /// Single-cell placement at the given coordinates.
    pub const fn cell(row: u16, column: u16) -> Self {
        Self {
            row,
            column,
            row_span: 1,
            column_span: 1,
        }
    }

    /// Placement spanning multiple tracks. Zero spans are normalized to 1.
    pub fn spanning(row: u16, column: u16, row_span: u16, column_span: u16) -> Self {
        Self {
            row,
            column,
            row_span: row_span.max(1),
            column_span: column_span.max(1),
        }
    }

    /// Remap authored coordinates into an axis interleaved with gutter
    /// tracks: cell `k` becomes cell `2k`, and a span covering `m` user
    /// tracks grows to `2m - 1` so it also covers the gutters in between.
    pub fn doubled(&self) -> Self {
        Self {
            row: self.row.saturating_mul(2),
            column: self.column.saturating_mul(2),
            row_span: self.row_span.saturating_mul(2).saturating_sub(1),
            column_span: self.column_span.saturating_mul(2).saturating_sub(1),
        }
    }
}
