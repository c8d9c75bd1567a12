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

//! # Ludic Core
//!
//! Foundational crate for the Ludic game engine: linear algebra and
//! geometry primitives (vectors, matrices, quaternions, points and
//! rectangles) plus the frame-timing helper and the `Game` lifecycle
//! contract that host loops implement.

#![warn(missing_docs)]

pub mod game;
pub mod math;

pub use game::{Game, GameTime};
