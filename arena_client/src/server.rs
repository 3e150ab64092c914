use std::fmt::Display;

use arena_shared::{
    action::Action,
    player::SecretId,
    status::Status,
    wire::{RegisterResponse, TurnResponse},
    Tick,
};
use async_trait::async_trait;

/// The remote arena the session loop plays against.
///
/// `Err(_)` is a transport failure (unreachable server, undecodable body)
/// and is always a temporary condition; an `Ok` reply with `success == false`
/// is an application failure carrying a reason string. The session loop
/// treats the two distinctly.
#[async_trait]
pub trait ArenaServer {
    type Error: Display + Send;

    async fn register(&self, name: &str, entry_key: &str)
        -> Result<RegisterResponse, Self::Error>;

    /// With `after_tick` the server holds the request open until a tick newer
    /// than it exists or the server-side wait lapses; without it the current
    /// snapshot is returned immediately.
    async fn status(
        &self,
        secret: &SecretId,
        after_tick: Option<Tick>,
    ) -> Result<Status, Self::Error>;

    async fn submit_turn(
        &self,
        secret: &SecretId,
        action: &Action,
    ) -> Result<TurnResponse, Self::Error>;
}
