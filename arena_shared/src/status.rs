use crate::{player::PlayerId, Tick};

/// World state as of one tick. Immutable once received; a newer snapshot
/// supersedes the previous one entirely, there is no incremental merge.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
pub struct Status {
    pub success: bool,
    #[cfg_attr(feature = "serde", serde(default))]
    pub game_active: bool,
    #[cfg_attr(feature = "serde", serde(default))]
    pub tick: Tick,
    #[cfg_attr(feature = "serde", serde(default))]
    pub ticks_remaining: u64,
    #[cfg_attr(feature = "serde", serde(default))]
    pub you: Option<Player>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub players: Vec<PublicPlayer>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub grid: Vec<Vec<u32>>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub visible_players: Vec<VisiblePlayer>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub error: Option<String>,
}

impl Status {
    pub fn round_active(&self) -> bool {
        self.success && self.game_active
    }

    pub fn you_alive(&self) -> bool {
        self.you.as_ref().is_some_and(|you| you.alive)
    }
}

/// The acting player's own full state.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
pub struct Player {
    #[cfg_attr(feature = "serde", serde(rename = "player_id"))]
    pub id: PlayerId,
    pub name: String,
    pub x: u32,
    pub y: u32,
    pub alive: bool,
    pub tile_count: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub supporting: Option<PlayerId>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub allied_with: Vec<PlayerId>,
}

/// Another player's public state. Positions are not included here; sighted
/// opponents show up in `visible_players` instead.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
pub struct PublicPlayer {
    #[cfg_attr(feature = "serde", serde(rename = "player_id"))]
    pub id: PlayerId,
    pub name: String,
    pub tile_count: u32,
    pub alive: bool,
    #[cfg_attr(feature = "serde", serde(default))]
    pub supporting: Option<PlayerId>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub allied_with: Vec<PlayerId>,
}

#[derive(Clone, Copy, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
pub struct VisiblePlayer {
    #[cfg_attr(feature = "serde", serde(rename = "player_id"))]
    pub id: PlayerId,
    pub x: u32,
    pub y: u32,
}
