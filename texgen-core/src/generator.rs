//! The generation context.
//!
//! [`Generator`] bundles everything a run needs (configuration, the preset
//! registry and an optional timing hook) so that nothing lives in globals.
//! Each call to [`Generator::generate`] starts a fresh draw stream from the
//! configured seed; runs never share state.

use crate::{
    buffer::ColorBuffer,
    colorize::colorize,
    config::Config,
    error::GenerateError,
    filters::Filter,
    grid::IntensityGrid,
    growth,
    preset::{Preset, PresetId, PresetRegistry},
};
use std::{
    fmt,
    time::{Duration, Instant},
};

/// A timed section of a generation run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stage {
    /// Spawn, growth rounds and color mapping.
    Growth,
    /// The filter at `index` in the preset's chain.
    Filter { index: usize, kind: &'static str },
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Growth => write!(f, "growth"),
            Stage::Filter { index, kind } => write!(f, "filter #{index} ({kind})"),
        }
    }
}

/// Receives the wall-clock duration of each stage.
pub type TimingHook = Box<dyn FnMut(Stage, Duration)>;

pub struct Generator {
    cfg: Config,
    registry: PresetRegistry,
    timing: Option<TimingHook>,
}

impl Default for Generator {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

impl Generator {
    /// Creates a generator over the built-in presets.
    pub fn new(cfg: Config) -> Self {
        Self::with_registry(cfg, PresetRegistry::builtin())
    }

    pub fn with_registry(cfg: Config, registry: PresetRegistry) -> Self {
        Self {
            cfg,
            registry,
            timing: None,
        }
    }

    /// Installs a hook that is told how long every stage took.
    ///
    /// Timing never influences the output; without a hook no clock is read.
    pub fn on_timing(mut self, hook: impl FnMut(Stage, Duration) + 'static) -> Self {
        self.timing = Some(Box::new(hook));
        self
    }

    pub fn config(&self) -> &Config {
        &self.cfg
    }

    pub fn config_mut(&mut self) -> &mut Config {
        &mut self.cfg
    }

    pub fn registry(&self) -> &PresetRegistry {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut PresetRegistry {
        &mut self.registry
    }

    /// Builds a `width * height` texture from a registered preset.
    ///
    /// ### Errors
    /// - [`GenerateError::UnknownPreset`] / [`GenerateError::PresetIndexOutOfRange`]
    ///   if `id` does not resolve.
    /// - [`GenerateError::TooSmall`] if either side is below 2.
    pub fn generate<'a>(
        &mut self,
        width: usize,
        height: usize,
        id: impl Into<PresetId<'a>>,
    ) -> Result<ColorBuffer, GenerateError> {
        let preset = self.registry.get(id)?;
        run(&self.cfg, &mut self.timing, width, height, preset)
    }

    /// Builds a texture from a preset that need not be registered.
    pub fn render(
        &mut self,
        width: usize,
        height: usize,
        preset: &Preset,
    ) -> Result<ColorBuffer, GenerateError> {
        run(&self.cfg, &mut self.timing, width, height, preset)
    }
}

/// Builds a texture with the default configuration and built-in presets.
///
/// ```
/// let texture = texgen_core::generate(64, 48, "Marble").unwrap();
/// assert_eq!(texture.pixels().len(), 64 * 48);
/// ```
pub fn generate<'a>(
    width: usize,
    height: usize,
    id: impl Into<PresetId<'a>>,
) -> Result<ColorBuffer, GenerateError> {
    Generator::default().generate(width, height, id)
}

fn run(
    cfg: &Config,
    timing: &mut Option<TimingHook>,
    width: usize,
    height: usize,
    preset: &Preset,
) -> Result<ColorBuffer, GenerateError> {
    if width < 2 || height < 2 {
        return Err(GenerateError::TooSmall { width, height });
    }

    let mut rng = cfg.seed.rng();
    let mut buffer = ColorBuffer::new(width, height);

    timed(timing, Stage::Growth, || {
        let g = &preset.growth;
        let mut grid = IntensityGrid::new(width, height);
        growth::simulate(&mut grid, g.spawn, g.repeat, cfg.spawn_value, &mut rng);
        colorize(&grid, g.weights, g.base, &mut buffer);
    });

    for (index, filter) in preset.filters.iter().enumerate() {
        let stage = Stage::Filter {
            index,
            kind: filter.kind(),
        };
        timed(timing, stage, || Filter::apply(filter, &mut buffer));
    }

    Ok(buffer)
}

fn timed(timing: &mut Option<TimingHook>, stage: Stage, f: impl FnOnce()) {
    match timing {
        Some(hook) => {
            let start = Instant::now();
            f();
            hook(stage, start.elapsed());
        }
        None => f(),
    }
}
