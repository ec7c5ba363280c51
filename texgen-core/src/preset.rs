use crate::{error::GenerateError, filters::Filter, types::Rgb};

/// Parameters of the growth + colorize pass.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GrowthParams {
    /// Spawn attempts.
    pub spawn: usize,
    /// Growth rounds.
    pub repeat: usize,
    /// Per-channel axis weights, see [`crate::colorize::cell_color`].
    pub weights: Rgb,
    pub base: Rgb,
}

/// A named recipe: one growth pass followed by an ordered filter chain.
#[derive(Clone, Debug, PartialEq)]
pub struct Preset {
    pub name: String,
    pub growth: GrowthParams,
    pub filters: Vec<Filter>,
}

impl Preset {
    pub fn new(name: impl Into<String>, growth: GrowthParams, filters: Vec<Filter>) -> Self {
        Self {
            name: name.into(),
            growth,
            filters,
        }
    }
}

/// Selects a preset by position or by name.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PresetId<'a> {
    Index(usize),
    /// Compared ASCII case-insensitively.
    Name(&'a str),
}

impl From<usize> for PresetId<'_> {
    fn from(index: usize) -> Self {
        PresetId::Index(index)
    }
}

impl<'a> From<&'a str> for PresetId<'a> {
    fn from(name: &'a str) -> Self {
        PresetId::Name(name)
    }
}

/// Ordered collection of presets with unique names.
#[derive(Clone, Debug, Default)]
pub struct PresetRegistry {
    presets: Vec<Preset>,
}

impl PresetRegistry {
    pub fn empty() -> Self {
        Self::default()
    }

    /// The shipped presets, in their historical order.
    pub fn builtin() -> Self {
        Self {
            presets: builtin_presets(),
        }
    }

    /// Appends a preset.
    ///
    /// ### Errors
    /// [`GenerateError::DuplicatePreset`] if a preset with the same name
    /// (ignoring ASCII case) is already registered.
    pub fn register(&mut self, preset: Preset) -> Result<usize, GenerateError> {
        if self.position(&preset.name).is_some() {
            return Err(GenerateError::DuplicatePreset(preset.name));
        }
        self.presets.push(preset);
        Ok(self.presets.len() - 1)
    }

    pub fn get<'a>(&self, id: impl Into<PresetId<'a>>) -> Result<&Preset, GenerateError> {
        match id.into() {
            PresetId::Index(index) => {
                self.presets
                    .get(index)
                    .ok_or(GenerateError::PresetIndexOutOfRange {
                        index,
                        len: self.presets.len(),
                    })
            }
            PresetId::Name(name) => self
                .position(name)
                .map(|i| &self.presets[i])
                .ok_or_else(|| GenerateError::UnknownPreset(name.to_owned())),
        }
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.presets
            .iter()
            .position(|p| p.name.eq_ignore_ascii_case(name))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.presets.iter().map(|p| p.name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Preset> {
        self.presets.iter()
    }

    pub fn len(&self) -> usize {
        self.presets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.presets.is_empty()
    }
}

const fn rgb(r: i32, g: i32, b: i32) -> Rgb {
    Rgb::new(r, g, b)
}

const fn growth(spawn: usize, repeat: usize, weights: Rgb, base: Rgb) -> GrowthParams {
    GrowthParams {
        spawn,
        repeat,
        weights,
        base,
    }
}

fn gradient(target: Rgb, multiplier: f32, flip: bool) -> Filter {
    Filter::Gradient {
        target,
        multiplier,
        flip,
    }
}

fn full(target: Rgb, multiplier: f32) -> Filter {
    Filter::Full { target, multiplier }
}

const WHITE: Rgb = rgb(255, 255, 255);
const BLACK: Rgb = rgb(0, 0, 0);
const BLUE: Rgb = rgb(0, 0, 255);
const ORANGE: Rgb = rgb(255, 125, 0);

/// Builds the shipped presets. Indices 0..=7 keep their historical order.
///
/// Every preset carries a chain of 2 to 5 filters except "Plain" (index 8),
/// the bare growth pass with no filters at all.
pub fn builtin_presets() -> Vec<Preset> {
    let lava = growth(300, 800, rgb(-5, -3, 0), rgb(255, 255, 0));
    let lightning = |spawn| growth(spawn, 1000, rgb(0, 0, -3), BLUE);

    vec![
        Preset::new(
            "Marble",
            growth(200, 1000, rgb(-9, -9, -9), WHITE),
            vec![gradient(BLACK, 0.7, false), gradient(ORANGE, 0.3, true)],
        ),
        Preset::new(
            "Lightning",
            lightning(100),
            vec![
                gradient(ORANGE, 0.1, false),
                gradient(rgb(0, 50, 125), 0.3, true),
            ],
        ),
        Preset::new(
            "Shatter",
            growth(1200, 300, rgb(2, 2, 2), BLACK),
            vec![
                gradient(BLACK, 0.5, false),
                gradient(rgb(0, 200, 255), 0.02, false),
                gradient(rgb(125, 0, 0), 0.15, true),
            ],
        ),
        Preset::new(
            "Storm",
            growth(1000, 400, rgb(0, 0, -3), BLUE),
            vec![
                gradient(rgb(255, 255, 0), 0.05, false),
                gradient(rgb(255, 255, 0), 0.05, true),
            ],
        ),
        Preset::new(
            "Lava",
            lava,
            vec![
                gradient(ORANGE, 1.0, false),
                gradient(rgb(255, 0, 0), 1.0, true),
                gradient(WHITE, 0.3, false),
                gradient(BLACK, 0.6, true),
            ],
        ),
        Preset::new(
            "Lava2",
            lava,
            vec![
                gradient(ORANGE, 1.0, false),
                gradient(rgb(255, 0, 0), 1.0, true),
                gradient(WHITE, 0.7, false),
                gradient(BLACK, 0.6, true),
                full(BLACK, 0.80),
            ],
        ),
        Preset::new(
            "Scales",
            growth(200, 400, rgb(0, 12, 0), rgb(20, 0, 0)),
            vec![
                gradient(BLACK, 0.2, false),
                gradient(rgb(100, 255, 0), 0.1, true),
                full(BLACK, 0.65),
            ],
        ),
        Preset::new(
            "Lightning2",
            lightning(200),
            vec![
                gradient(ORANGE, 0.1, false),
                gradient(rgb(0, 50, 125), 0.3, true),
                full(BLACK, 0.80),
            ],
        ),
        Preset::new("Plain", growth(200, 1000, rgb(3, 3, 3), WHITE), Vec::new()),
    ]
}
