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

//! Provides the frame clock used to maintain timings within the game loop.

use std::time::{Duration, Instant};

/// A monotonic frame clock.
///
/// A host loop calls [`reset`](GameTime::reset) at the top of each frame
/// and samples [`elapsed`](GameTime::elapsed) when it needs the frame's
/// duration. The first `elapsed` query after a reset reads the monotonic
/// clock and caches the result, so every consumer within a frame sees the
/// same value; `reset` clears the cache for the next frame.
#[derive(Debug, Clone)]
pub struct GameTime {
    start: Instant,
    elapsed: Option<Duration>,
}

impl GameTime {
    /// Creates a clock whose frame starts now.
    #[inline]
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
            elapsed: None,
        }
    }

    /// The current instant of the monotonic clock.
    #[inline]
    pub fn now() -> Instant {
        Instant::now()
    }

    /// Restarts the frame and discards the cached elapsed sample.
    pub fn reset(&mut self) {
        log::trace!("frame clock reset");
        self.start = Instant::now();
        self.elapsed = None;
    }

    /// Returns the duration since the last [`reset`](GameTime::reset)
    /// (nanosecond resolution), sampling the clock on the first call of the
    /// frame and returning the cached sample on subsequent calls.
    pub fn elapsed(&mut self) -> Duration {
        let start = self.start;
        *self.elapsed.get_or_insert_with(|| start.elapsed())
    }

    /// Convenience form of [`elapsed`](GameTime::elapsed) in whole
    /// nanoseconds.
    #[inline]
    pub fn elapsed_nanos(&mut self) -> u128 {
        self.elapsed().as_nanos()
    }
}

impl Default for GameTime {
    /// Returns a clock whose frame starts now.
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

// --- Tests ---
