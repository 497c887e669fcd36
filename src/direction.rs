//! Eight-point direction classification
//!
//! Each direction owns the arc halfway to its neighbours on either side. The
//! windows are computed once, at compile time, into [`COMPASS_ROSE`] and are
//! read-only afterwards.
//!
//! # Example
//! ```
//! use compass_rose::direction::{classify, Direction};
//!
//! assert_eq!(classify(359.9), Some(Direction::North));
//! assert_eq!(classify(22.6), Some(Direction::NorthEast));
//! assert_eq!(classify(90.0).map(Direction::label), Some("E"));
//! ```

use core::fmt;

use crate::math::FULL_TURN;

/// Number of compass points in the table
pub const POINTS: usize = 8;

/// Label reported when no window matches, which only happens for NaN input
pub const UNKNOWN_LABEL: &str = "N/A";

/// Cardinal and intercardinal compass directions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
pub enum Direction {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

impl Direction {
    /// All directions in bearing order
    pub const ALL: [Direction; POINTS] = [
        Direction::North,
        Direction::NorthEast,
        Direction::East,
        Direction::SouthEast,
        Direction::South,
        Direction::SouthWest,
        Direction::West,
        Direction::NorthWest,
    ];

    /// Short label shown to the user
    pub const fn label(self) -> &'static str {
        match self {
            Direction::North => "N",
            Direction::NorthEast => "NE",
            Direction::East => "E",
            Direction::SouthEast => "SE",
            Direction::South => "S",
            Direction::SouthWest => "SW",
            Direction::West => "W",
            Direction::NorthWest => "NW",
        }
    }

    /// Long form name
    pub const fn name(self) -> &'static str {
        match self {
            Direction::North => "North",
            Direction::NorthEast => "North-East",
            Direction::East => "East",
            Direction::SouthEast => "South-East",
            Direction::South => "South",
            Direction::SouthWest => "South-West",
            Direction::West => "West",
            Direction::NorthWest => "North-West",
        }
    }

    /// Nominal bearing in degrees
    pub const fn bearing(self) -> f32 {
        match self {
            Direction::North => 0.0,
            Direction::NorthEast => 45.0,
            Direction::East => 90.0,
            Direction::SouthEast => 135.0,
            Direction::South => 180.0,
            Direction::SouthWest => 225.0,
            Direction::West => 270.0,
            Direction::NorthWest => 315.0,
        }
    }

    /// True for N, E, S and W
    pub const fn is_cardinal(self) -> bool {
        matches!(
            self,
            Direction::North | Direction::East | Direction::South | Direction::West
        )
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Angular window assigned to one direction
///
/// A window whose `lower` bound is greater than its `upper` bound straddles the
/// 0°/360° seam and covers `[lower, 360) ∪ [0, upper]`.
///
/// Every boundary is shared by one cardinal and one intercardinal window.
/// Cardinal windows include both bounds and intercardinal windows exclude
/// them, so a value sitting exactly on a boundary belongs to the cardinal
/// point and no value belongs to two windows.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
pub struct Window {
    pub direction: Direction,
    pub lower: f32,
    pub upper: f32,
}

impl Window {
    /// Whether the window crosses the seam
    #[inline]
    pub fn wraps(&self) -> bool {
        self.lower > self.upper
    }

    /// Whether `degrees` falls in this window
    #[inline]
    pub fn contains(&self, degrees: f32) -> bool {
        let closed = self.direction.is_cardinal();
        let after_lower = if closed {
            degrees >= self.lower
        } else {
            degrees > self.lower
        };
        let before_upper = if closed {
            degrees <= self.upper
        } else {
            degrees < self.upper
        };

        if self.wraps() {
            after_lower || before_upper
        } else {
            after_lower && before_upper
        }
    }

    /// Angular width in degrees
    pub fn width(&self) -> f32 {
        if self.wraps() {
            FULL_TURN - self.lower + self.upper
        } else {
            self.upper - self.lower
        }
    }
}

/// Window table covering the whole circle, in bearing order
#[derive(Debug, Clone, PartialEq)]
pub struct DirectionTable {
    windows: [Window; POINTS],
}

impl DirectionTable {
    /// Build the table from the nominal bearings of [`Direction::ALL`]
    ///
    /// The first entry's predecessor is the last bearing one turn earlier
    /// (315° - 360°) and the last entry's successor is the first bearing one
    /// turn later (0° + 360°). Bounds that land outside `[0, 360)` are shifted
    /// by a full turn, which leaves North as the only wrapping window.
    pub const fn new() -> Self {
        let mut windows = [Window {
            direction: Direction::North,
            lower: 0.0,
            upper: 0.0,
        }; POINTS];

        let mut i = 0;
        while i < POINTS {
            let direction = Direction::ALL[i];
            let bearing = direction.bearing();
            let previous = if i == 0 {
                Direction::ALL[POINTS - 1].bearing() - FULL_TURN
            } else {
                Direction::ALL[i - 1].bearing()
            };
            let next = if i == POINTS - 1 {
                Direction::ALL[0].bearing() + FULL_TURN
            } else {
                Direction::ALL[i + 1].bearing()
            };

            let mut lower = (previous + bearing) / 2.0;
            let mut upper = (bearing + next) / 2.0;
            if lower < 0.0 {
                lower += FULL_TURN;
            }
            if upper >= FULL_TURN {
                upper -= FULL_TURN;
            }

            windows[i] = Window {
                direction,
                lower,
                upper,
            };
            i += 1;
        }

        Self { windows }
    }

    /// Windows in bearing order
    pub fn windows(&self) -> &[Window; POINTS] {
        &self.windows
    }

    /// Window belonging to `direction`
    pub fn window(&self, direction: Direction) -> &Window {
        // Direction::ALL and the table share bearing order
        &self.windows[direction as usize]
    }

    /// Direction whose window contains `degrees`
    ///
    /// Scans the windows in bearing order and returns the first match. Every
    /// value in `[0, 360)` matches exactly one window; `None` is only possible
    /// for NaN.
    pub fn classify(&self, degrees: f32) -> Option<Direction> {
        self.windows
            .iter()
            .find(|window| window.contains(degrees))
            .map(|window| window.direction)
    }
}

impl Default for DirectionTable {
    fn default() -> Self {
        Self::new()
    }
}

/// The shared eight-point table
pub static COMPASS_ROSE: DirectionTable = DirectionTable::new();

/// Classify a degree value in `[0, 360)` against [`COMPASS_ROSE`]
#[inline]
pub fn classify(degrees: f32) -> Option<Direction> {
    COMPASS_ROSE.classify(degrees)
}

/// Label for a degree value, or [`UNKNOWN_LABEL`] when nothing matches
pub fn label(degrees: f32) -> &'static str {
    classify(degrees).map_or(UNKNOWN_LABEL, Direction::label)
}
