// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod allocator;
mod config;
mod error;
mod registry;
mod request;

#[cfg(test)]
mod tests;

// Re-export public types and functions
pub use allocator::{Allocator, plan};
pub use config::{MAX_HOURS_PER_DAY, PlannerConfig};
pub use error::CoreError;
pub use registry::CourseRegistry;
pub use request::PlanningRequest;
