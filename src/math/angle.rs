// Copyright 2025 Ludic Engine contributors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Provides an [`Angle`] type that remembers the unit it was created in.

use super::{degrees_to_radians, radians_to_degrees};
use std::cell::Cell;
use std::fmt;

/// The unit an [`Angle`] was constructed with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AngleUnit {
    Degrees,
    Radians,
}

/// An angle tagged with the unit it was constructed in.
///
/// Exactly one unit is authoritative: the value passed at construction.
/// The other unit is computed on first request and cached, so repeated
/// queries never re-run the conversion. The cache is the only mutable
/// state and it moves from unset to set exactly once.
///
/// NaN and infinity inputs propagate through conversions silently, as with
/// any other `f32` arithmetic.
#[derive(Debug, Clone)]
pub struct Angle {
    value: f32,
    unit: AngleUnit,
    converted: Cell<Option<f32>>,
}

impl Angle {
    /// Creates an angle from a value in radians.
    #[inline]
    pub fn from_radians(radians: f32) -> Self {
        Self {
            value: radians,
            unit: AngleUnit::Radians,
            converted: Cell::new(None),
        }
    }

    /// Creates an angle from a value in degrees.
    #[inline]
    pub fn from_degrees(degrees: f32) -> Self {
        Self {
            value: degrees,
            unit: AngleUnit::Degrees,
            converted: Cell::new(None),
        }
    }

    /// Returns the angle in radians, converting and caching on first call
    /// if the angle was constructed in degrees.
    pub fn radians(&self) -> f32 {
        match self.unit {
            AngleUnit::Radians => self.value,
            AngleUnit::Degrees => match self.converted.get() {
                Some(radians) => radians,
                None => {
                    let radians = degrees_to_radians(self.value);
                    self.converted.set(Some(radians));
                    radians
                }
            },
        }
    }

    /// Returns the angle in degrees, converting and caching on first call
    /// if the angle was constructed in radians.
    pub fn degrees(&self) -> f32 {
        match self.unit {
            AngleUnit::Degrees => self.value,
            AngleUnit::Radians => match self.converted.get() {
                Some(degrees) => degrees,
                None => {
                    let degrees = radians_to_degrees(self.value);
                    self.converted.set(Some(degrees));
                    degrees
                }
            },
        }
    }
}

impl fmt::Display for Angle {
    /// Formats the angle in its authoritative unit (`°` or `rad`).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.unit {
            AngleUnit::Degrees => write!(f, "{}°", self.value),
            AngleUnit::Radians => write!(f, "{} rad", self.value),
        }
    }
}

// --- Tests ---

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::{approx_eq, approx_eq_eps, PI};

    #[test]
    fn test_authoritative_unit_is_exact() {
        let a = Angle::from_degrees(90.0);
        assert_eq!(a.degrees(), 90.0);

        let b = Angle::from_radians(PI);
        assert_eq!(b.radians(), PI);
    }

    #[test]
    fn test_conversion_degrees_to_radians() {
        let a = Angle::from_degrees(180.0);
        assert!(approx_eq(a.radians(), PI));
    }

    #[test]
    fn test_conversion_radians_to_degrees() {
        let a = Angle::from_radians(PI / 2.0);
        assert!(approx_eq_eps(a.degrees(), 90.0, 1e-3));
    }

    #[test]
    fn test_conversion_is_cached() {
        let a = Angle::from_degrees(45.0);
        assert!(a.converted.get().is_none());
        let first = a.radians();
        assert_eq!(a.converted.get(), Some(first));
        // A second query returns the cached value bit-for-bit.
        assert_eq!(a.radians(), first);
    }

    #[test]
    fn test_round_trip() {
        for theta in [-3.5f32, -1.0, 0.0, 0.25, 1.0, PI, 6.0] {
            let degrees = Angle::from_radians(theta).degrees();
            let back = Angle::from_degrees(degrees).radians();
            assert!(approx_eq_eps(back, theta, 1e-4), "{theta} -> {back}");
        }
    }

    #[test]
    fn test_nan_propagates() {
        let a = Angle::from_degrees(f32::NAN);
        assert!(a.radians().is_nan());
    }

    #[test]
    fn test_display() {
        assert_eq!(Angle::from_degrees(90.0).to_string(), "90°");
        assert_eq!(Angle::from_radians(1.5).to_string(), "1.5 rad");
    }
}
