use serde::{Deserialize, Serialize};

/// Defines how a row or column should be sized by the host grid primitive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum TrackSize {
    /// Fixed size in device-independent pixels.
    Fixed(f64),

    /// Proportional share of the remaining space (like CSS `fr`).
    /// Star(2.0) takes 2x the space of Star(1.0). Must be positive.
    Star(f64),

    /// Sized to the content occupying the track.
    Auto,
}

impl TrackSize {
    /// Create a Star variant.
    ///
    /// # Panics
    /// Panics if the weight is not a positive, finite number.
    pub fn star(weight: f64) -> Self {
        assert!(
            weight.is_finite() && weight > 0.0,
            "Star weight must be positive"
        );
        Self::Star(weight)
    }
}

/// Role of a track within its axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackRole {
    /// Declared by the consumer; holds user content.
    User,
    /// Synthesized to occupy gutter space; never holds content.
    Spacing,
}

/// A row or column definition: a size plus the tag separating user tracks
/// from synthesized gutter tracks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Track {
    size: TrackSize,
    role: TrackRole,
}

impl Track {
    /// A consumer-declared track.
    pub const fn user(size: TrackSize) -> Self {
        Self {
            size,
            role: TrackRole::User,
        }
    }

    /// A gutter track sized to the current spacing magnitude.
    pub const fn spacing(gap: f64) -> Self {
        Self {
            size: TrackSize::Fixed(gap),
            role: TrackRole::Spacing,
        }
    }

    pub fn size(&self) -> TrackSize {
        self.size
    }

    pub fn role(&self) -> TrackRole {
        self.role
    }

    pub fn is_spacing(&self) -> bool {
        self.role == TrackRole::Spacing
    }

    /// Current gutter magnitude, if this is a spacing track.
    pub fn gap(&self) -> Option<f64> {
        match (self.role, self.size) {
            (TrackRole::Spacing, TrackSize::Fixed(gap)) => Some(gap),
            _ => None,
        }
    }

    /// Rewrite the gutter magnitude in place. User tracks are left alone.
    pub fn set_gap(&mut self, gap: f64) {
        if self.role == TrackRole::Spacing {
            self.size = TrackSize::Fixed(gap);
        }
    }
}
