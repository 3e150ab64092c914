use std::time::Duration;

use arena_shared::{
    player::{PlayerId, SecretId},
    strategy::Strategy,
    wire::RegisterResponse,
    GameSettings, Tick,
};
use tokio::{sync::oneshot, time::sleep};
use tracing::{debug, info, warn};

use crate::server::ArenaServer;

const DEFAULT_ENTRY_KEY: &str = "arena";

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Phase {
    Registering,
    WaitingForRound,
    Playing,
    RoundEnding,
}

#[derive(Clone, Debug)]
pub struct SessionConfig {
    pub name: String,
    pub entry_key: String,
    /// Delay between registration attempts.
    pub register_retry: Duration,
    /// Cadence of the round-start polls.
    pub lobby_poll: Duration,
    /// Cadence of the round-end polls.
    pub round_end_poll: Duration,
    /// Settling time after the round is confirmed over, before re-registering.
    pub round_end_settle: Duration,
}

impl SessionConfig {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            entry_key: DEFAULT_ENTRY_KEY.to_owned(),
            register_retry: Duration::from_secs(3),
            lobby_poll: Duration::from_secs(1),
            round_end_poll: Duration::from_secs(2),
            round_end_settle: Duration::from_secs(2),
        }
    }

    #[must_use]
    pub fn with_entry_key(mut self, entry_key: impl Into<String>) -> Self {
        self.entry_key = entry_key.into();
        self
    }
}

/// Credentials captured from one successful registration. A fresh bundle is
/// produced every time registration succeeds; the secret is never carried
/// over into the next round.
#[derive(Debug)]
pub struct Registration {
    pub player_id: PlayerId,
    pub secret: SecretId,
    pub color: Option<String>,
    pub settings: Option<GameSettings>,
}

impl Registration {
    fn from_reply(reply: RegisterResponse) -> Result<Self, String> {
        if !reply.success {
            return Err(reply
                .error
                .unwrap_or_else(|| "unspecified error".to_owned()));
        }

        let (Some(player_id), Some(secret)) = (reply.player_id, reply.secret_id) else {
            return Err("success reply missing credentials".to_owned());
        };

        Ok(Self {
            player_id,
            secret,
            color: reply.color,
            settings: reply.game_settings,
        })
    }
}

/// The client-side session loop: register, wait for the round to start,
/// play it tick by tick, wait for it to end, start over.
///
/// Strictly sequential; each phase issues one call at a time and the session
/// record is the only state, so nothing here needs locking.
pub struct Session<C: ArenaServer, S: Strategy> {
    server: C,
    strategy: S,
    config: SessionConfig,
    phase: Phase,
}

impl<C: ArenaServer, S: Strategy> Session<C, S> {
    pub fn new(server: C, strategy: S, config: SessionConfig) -> Self {
        Self {
            server,
            strategy,
            config,
            phase: Phase::Registering,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Runs rounds until `stop` fires. An in-flight request is dropped
    /// rather than waited out when the stop signal arrives, so a held-open
    /// long poll does not delay shutdown.
    pub async fn run(mut self, mut stop: oneshot::Receiver<()>) {
        loop {
            tokio::select! {
                _ = &mut stop => {
                    info!("stop requested, shutting down");
                    return;
                }
                _ = self.round() => {}
            }
        }
    }

    async fn round(&mut self) {
        let registration = self.register().await;
        let baseline = self.wait_for_round(&registration.secret).await;
        self.play(&registration, baseline).await;
        self.wait_for_round_end(&registration.secret).await;
        sleep(self.config.round_end_settle).await;
    }

    fn enter(&mut self, phase: Phase) {
        debug!(?phase, "entering phase");
        self.phase = phase;
    }

    /// Registration failure is never fatal, only delayed: every failure mode
    /// waits out the retry interval and tries again.
    async fn register(&mut self) -> Registration {
        self.enter(Phase::Registering);
        loop {
            match self
                .server
                .register(&self.config.name, &self.config.entry_key)
                .await
            {
                Ok(reply) => match Registration::from_reply(reply) {
                    Ok(registration) => {
                        info!(
                            name = %self.config.name,
                            player = %registration.player_id,
                            "registered"
                        );
                        if let Some(settings) = &registration.settings {
                            info!(?settings, "arena settings");
                        }

                        return registration;
                    }
                    Err(reason) => warn!(%reason, "registration rejected"),
                },
                Err(error) => warn!(%error, "registration request failed"),
            }

            sleep(self.config.register_retry).await;
        }
    }

    /// Short unconditional polls until the active flag flips on. Failures of
    /// either kind just mean the round is not ready yet.
    async fn wait_for_round(&mut self, secret: &SecretId) -> Tick {
        self.enter(Phase::WaitingForRound);
        loop {
            match self.server.status(secret, None).await {
                Ok(status) if status.round_active() => {
                    info!(tick = status.tick, "round started");
                    return status.tick;
                }
                Ok(_) => {}
                Err(error) => debug!(%error, "lobby poll failed"),
            }

            sleep(self.config.lobby_poll).await;
        }
    }

    /// The per-tick cycle: one tick-bounded long poll, one strategy call,
    /// one turn submission. Returns when the round is over for this player,
    /// which includes dying in a still-active round.
    async fn play(&mut self, registration: &Registration, baseline: Tick) {
        self.enter(Phase::Playing);
        let mut last_known_tick = baseline;
        loop {
            let status = match self
                .server
                .status(&registration.secret, Some(last_known_tick))
                .await
            {
                Ok(status) => status,
                Err(error) => {
                    info!(%error, "status poll failed, treating round as over");
                    return;
                }
            };

            if !status.round_active() {
                info!(tick = status.tick, "round over");
                return;
            }

            if !status.you_alive() {
                info!(tick = status.tick, "eliminated, sitting out the rest of the round");
                return;
            }

            if status.tick <= last_known_tick {
                // The server's long-poll wait lapsed without a new tick;
                // at most one turn per observed tick is submitted.
                continue;
            }

            last_known_tick = status.tick;
            let action = self.strategy.choose_action(&status);
            match self
                .server
                .submit_turn(&registration.secret, &action)
                .await
            {
                Ok(reply) if reply.success => {}
                Ok(reply) => warn!(
                    tick = last_known_tick,
                    reason = reply.error.as_deref().unwrap_or("unspecified"),
                    "turn rejected"
                ),
                Err(error) => warn!(tick = last_known_tick, %error, "turn submission failed"),
            }
        }
    }

    /// Short unconditional polls until the round is confirmed over. A dead
    /// player ends up here while the round is still running, so this can
    /// poll for a while.
    async fn wait_for_round_end(&mut self, secret: &SecretId) {
        self.enter(Phase::RoundEnding);
        loop {
            sleep(self.config.round_end_poll).await;
            match self.server.status(secret, None).await {
                Ok(status) if status.round_active() => {}
                Ok(_) => {
                    info!("round ended");
                    return;
                }
                Err(error) => debug!(%error, "round-end poll failed"),
            }
        }
    }
}
