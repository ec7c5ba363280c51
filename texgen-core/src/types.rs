use glam::IVec3;

/// One color as signed `(r, g, b)` channels.
///
/// Channels are never clamped while a texture is being built; filters may
/// push them below 0 or above 255. See [`crate::buffer::ChannelPolicy`] for
/// how they are folded into bytes at handoff.
pub type Rgb = IVec3;

/// Growth intensity of a single grid cell. `0` means empty.
pub type CellValue = i32;
