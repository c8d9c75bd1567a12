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

//! Provides the game lifecycle contract and frame timing.
//!
//! The math core does not depend on anything in this module; it exists for
//! host code that wires the library into a game loop.

pub mod time;

pub use time::GameTime;

/// The lifecycle contract a game implements to be driven by a host loop.
///
/// A typical driver calls [`load`](Game::load) once, alternates
/// [`update`](Game::update) and [`draw`](Game::draw) every frame with the
/// frame's [`GameTime`], and calls [`unload`](Game::unload) on shutdown.
pub trait Game {
    /// The rendering context handed to [`draw`](Game::draw) by the host.
    type Graphics;

    /// Called once before the first frame to acquire resources.
    fn load(&mut self);

    /// Advances the simulation by one frame.
    fn update(&mut self, time: &mut GameTime);

    /// Renders the current state.
    fn draw(&mut self, graphics: &mut Self::Graphics);

    /// Called once after the last frame to release resources.
    fn unload(&mut self);
}

// --- Tests ---

#[cfg(test)]
mod tests {
    use super::*;

    /// A minimal game that records the order of lifecycle calls.
    struct ProbeGame {
        calls: Vec<&'static str>,
    }

    impl Game for ProbeGame {
        type Graphics = Vec<&'static str>;

        fn load(&mut self) {
            self.calls.push("load");
        }

        fn update(&mut self, _time: &mut GameTime) {
            self.calls.push("update");
        }

        fn draw(&mut self, graphics: &mut Self::Graphics) {
            graphics.push("draw");
            self.calls.push("draw");
        }

        fn unload(&mut self) {
            self.calls.push("unload");
        }
    }

    #[test]
    fn test_lifecycle_drives_in_order() {
        let mut game = ProbeGame { calls: Vec::new() };
        let mut graphics = Vec::new();
        let mut time = GameTime::new();

        game.load();
        for _ in 0..2 {
            time.reset();
            game.update(&mut time);
            game.draw(&mut graphics);
        }
        game.unload();

        assert_eq!(
            game.calls,
            ["load", "update", "draw", "update", "draw", "unload"]
        );
        assert_eq!(graphics, ["draw", "draw"]);
    }
}
