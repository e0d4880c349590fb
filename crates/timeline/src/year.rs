//! Year values and the inclusive range the slider covers

use crate::error::{Result, TimelineError};

/// Timeline position. Plain integer so it crosses the JS boundary as a number.
pub type Year = i32;

/// First year on the timeline
pub const FIRST_YEAR: Year = 1785;
/// Last year on the timeline
pub const LAST_YEAR: Year = 1867;

/// Inclusive `min..=max` year range
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct YearRange {
    min: Year,
    max: Year,
}

impl YearRange {
    pub fn new(min: Year, max: Year) -> Result<Self> {
        if min > max {
            return Err(TimelineError::InvalidRange { min, max });
        }
        Ok(Self { min, max })
    }

    pub const fn min(&self) -> Year {
        self.min
    }

    pub const fn max(&self) -> Year {
        self.max
    }

    pub const fn contains(&self, year: Year) -> bool {
        year >= self.min && year <= self.max
    }

    /// Pull `year` into the range
    pub fn clamp(&self, year: Year) -> Year {
        year.clamp(self.min, self.max)
    }

    /// `year + delta`, saturating and clamped
    pub fn offset(&self, year: Year, delta: Year) -> Year {
        self.clamp(year.saturating_add(delta))
    }

    pub const fn is_max(&self, year: Year) -> bool {
        year == self.max
    }

    /// Round `year` to the nearest `min + k * step`, clamped into range.
    /// Halfway years round up, as browsers do for range inputs.
    pub fn snap(&self, year: Year, step: Year) -> Year {
        let clamped = self.clamp(year);
        if step <= 1 {
            return clamped;
        }
        let offset = clamped - self.min;
        let snapped = self.min.saturating_add((offset + step / 2) / step * step);
        self.clamp(snapped)
    }

    /// Whether `step` lands exactly on `max` when counted from `min`
    pub const fn aligned(&self, step: Year) -> bool {
        step >= 1 && (self.max - self.min) % step == 0
    }
}

impl Default for YearRange {
    fn default() -> Self {
        Self {
            min: FIRST_YEAR,
            max: LAST_YEAR,
        }
    }
}
