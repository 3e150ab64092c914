pub mod action;
pub mod player;
pub mod status;
pub mod strategy;

#[cfg(feature = "serde")]
pub mod wire;

/// The server's discrete time step. All state changes are attributed to one.
pub type Tick = u64;

/// Arena configuration returned once at registration. Display/context only;
/// the session loop does not depend on any of these values.
#[derive(Clone, Copy, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
pub struct GameSettings {
    pub grid_width: u32,
    pub grid_height: u32,
    pub tick_speed_ms: u32,
    pub max_round_seconds: u32,
    pub bullet_range: u32,
}
