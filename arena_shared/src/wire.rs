use serde::{ser::SerializeMap, Deserialize, Serialize, Serializer};

use crate::{
    action::Action,
    player::{PlayerId, SecretId},
    GameSettings,
};

#[derive(Serialize)]
pub struct RegisterRequest<'a> {
    pub name: &'a str,
    pub entry_key: &'a str,
}

#[derive(Clone, Debug, Deserialize)]
pub struct RegisterResponse {
    pub success: bool,
    #[serde(default)]
    pub player_id: Option<PlayerId>,
    #[serde(default)]
    pub secret_id: Option<SecretId>,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub game_settings: Option<GameSettings>,
    #[serde(default)]
    pub error: Option<String>,
}

pub struct TurnRequest<'a> {
    pub secret_id: &'a SecretId,
    pub action: &'a Action,
}

// Flattened to {secret_id, action, direction?, support?}; the optional
// fields are omitted entirely when not applicable.
impl Serialize for TurnRequest<'_> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("secret_id", self.secret_id.as_str())?;
        map.serialize_entry("action", self.action.kind.verb())?;
        if let Some(direction) = self.action.kind.direction() {
            map.serialize_entry("direction", direction.as_str())?;
        }

        if let Some(support) = self.action.support {
            map.serialize_entry("support", &support)?;
        }

        map.end()
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct TurnResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}
