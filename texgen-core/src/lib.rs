//! Procedural background texture generation.
//!
//! A run seeds a grid with intensity cells, lets them spread for a fixed
//! number of steps, maps the result to colors, then pushes the colors through
//! an ordered chain of filters.
//!
//! Main components:
//! - [`rng`] — the deterministic linear congruential draw stream.
//! - [`grid`] — the intensity grid and its bounded cell writes.
//! - [`growth`] — spawning and synchronous 4-neighbor spreading.
//! - [`colorize`] — intensity-to-color mapping.
//! - [`filters`] — the four in-place color filters.
//! - [`preset`] — named growth + filter recipes and their registry.
//! - [`generator`] — the generation context tying everything together.
//! - [`buffer`] — the color buffer and its handoff conversion.
//! - [`config`] — seed and spawn settings.
//! - [`error`] — errors for preset lookup and degenerate sizes.
//! - [`types`] — shared type aliases.

pub mod buffer;
pub mod colorize;
pub mod config;
pub mod error;
pub mod filters;
pub mod generator;
pub mod grid;
pub mod growth;
pub mod preset;
pub mod rng;
pub mod types;

pub use buffer::{ChannelPolicy, ColorBuffer};
pub use config::{Config, Seed};
pub use error::GenerateError;
pub use filters::Filter;
pub use generator::{Generator, Stage, generate};
pub use preset::{GrowthParams, Preset, PresetId, PresetRegistry};
