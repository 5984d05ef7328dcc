// --- File: crates/twilio_jwt/src/grants.rs ---
//! Grants carried inside an access token.
//!
//! Every grant contributes one entry to the token's `grants` object under a fixed key
//! and serializes only the fields that were set.

use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

/// TaskRouter worker grant (`task_router`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TaskRouterGrant {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workspace_sid: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub worker_sid: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

/// Programmable Chat / Conversations grant (`chat`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChatGrant {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_sid: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endpoint_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deployment_role_sid: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub push_credential_sid: Option<String>,
}

/// Programmable Video grant (`video`). Without a room the token may join any room.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VideoGrant {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub room: Option<String>,
}

impl VideoGrant {
    pub fn for_room(room: impl Into<String>) -> Self {
        Self {
            room: Some(room.into()),
        }
    }
}

/// Sync grant (`data_sync`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SyncGrant {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_sid: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endpoint_id: Option<String>,
}

/// Programmable Voice grant (`voice`).
///
/// The payload nests `incoming` and `outgoing` objects, so it is built by hand
/// instead of derived.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VoiceGrant {
    pub incoming_allow: Option<bool>,
    pub outgoing_application_sid: Option<String>,
    pub outgoing_application_params: Option<Value>,
    pub push_credential_sid: Option<String>,
    pub endpoint_id: Option<String>,
}

impl VoiceGrant {
    fn to_payload(&self) -> Value {
        let mut payload = Map::new();
        if self.incoming_allow == Some(true) {
            payload.insert("incoming".to_string(), json!({ "allow": true }));
        }
        if let Some(application_sid) = &self.outgoing_application_sid {
            let mut outgoing = Map::new();
            outgoing.insert("application_sid".to_string(), json!(application_sid));
            if let Some(params) = &self.outgoing_application_params {
                outgoing.insert("params".to_string(), params.clone());
            }
            payload.insert("outgoing".to_string(), Value::Object(outgoing));
        }
        if let Some(sid) = &self.push_credential_sid {
            payload.insert("push_credential_sid".to_string(), json!(sid));
        }
        if let Some(endpoint_id) = &self.endpoint_id {
            payload.insert("endpoint_id".to_string(), json!(endpoint_id));
        }
        Value::Object(payload)
    }
}

/// Video playback grant (`player`). The grant object is issued by the Player Streamer API
/// and passed through untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlaybackGrant {
    pub grant: Option<Map<String, Value>>,
}

/// Closed set of grants an [`AccessToken`](crate::AccessToken) can carry.
#[derive(Debug, Clone, PartialEq)]
pub enum Grant {
    TaskRouter(TaskRouterGrant),
    Chat(ChatGrant),
    Video(VideoGrant),
    Sync(SyncGrant),
    Voice(VoiceGrant),
    Playback(PlaybackGrant),
}

impl Grant {
    /// Key under which this grant appears in the token's `grants` object.
    pub fn key(&self) -> &'static str {
        match self {
            Grant::TaskRouter(_) => "task_router",
            Grant::Chat(_) => "chat",
            Grant::Video(_) => "video",
            Grant::Sync(_) => "data_sync",
            Grant::Voice(_) => "voice",
            Grant::Playback(_) => "player",
        }
    }

    /// JSON payload holding only the fields that are set.
    pub fn to_payload(&self) -> Result<Value, serde_json::Error> {
        match self {
            Grant::TaskRouter(grant) => serde_json::to_value(grant),
            Grant::Chat(grant) => serde_json::to_value(grant),
            Grant::Video(grant) => serde_json::to_value(grant),
            Grant::Sync(grant) => serde_json::to_value(grant),
            Grant::Voice(grant) => Ok(grant.to_payload()),
            Grant::Playback(grant) => Ok(Value::Object(grant.grant.clone().unwrap_or_default())),
        }
    }
}

macro_rules! impl_from_grant {
    ($($ty:ident => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for Grant {
                fn from(grant: $ty) -> Self {
                    Grant::$variant(grant)
                }
            }
        )*
    };
}

impl_from_grant!(
    TaskRouterGrant => TaskRouter,
    ChatGrant => Chat,
    VideoGrant => Video,
    SyncGrant => Sync,
    VoiceGrant => Voice,
    PlaybackGrant => Playback,
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grant_keys() {
        assert_eq!(Grant::from(TaskRouterGrant::default()).key(), "task_router");
        assert_eq!(Grant::from(ChatGrant::default()).key(), "chat");
        assert_eq!(Grant::from(VideoGrant::default()).key(), "video");
        assert_eq!(Grant::from(SyncGrant::default()).key(), "data_sync");
        assert_eq!(Grant::from(VoiceGrant::default()).key(), "voice");
        assert_eq!(Grant::from(PlaybackGrant::default()).key(), "player");
    }

    #[test]
    fn test_empty_grants_serialize_to_empty_objects() {
        for grant in [
            Grant::from(TaskRouterGrant::default()),
            Grant::from(ChatGrant::default()),
            Grant::from(VideoGrant::default()),
            Grant::from(SyncGrant::default()),
            Grant::from(VoiceGrant::default()),
            Grant::from(PlaybackGrant::default()),
        ] {
            assert_eq!(grant.to_payload().unwrap(), json!({}), "{}", grant.key());
        }
    }

    #[test]
    fn test_chat_grant_only_set_fields() {
        let grant = Grant::from(ChatGrant {
            service_sid: Some("IS123".to_string()),
            push_credential_sid: Some("CR123".to_string()),
            ..Default::default()
        });
        assert_eq!(
            grant.to_payload().unwrap(),
            json!({ "service_sid": "IS123", "push_credential_sid": "CR123" })
        );
    }

    #[test]
    fn test_task_router_grant_payload() {
        let grant = Grant::from(TaskRouterGrant {
            workspace_sid: Some("WS123".to_string()),
            worker_sid: Some("WK123".to_string()),
            role: Some("worker".to_string()),
        });
        assert_eq!(
            grant.to_payload().unwrap(),
            json!({ "workspace_sid": "WS123", "worker_sid": "WK123", "role": "worker" })
        );
    }

    #[test]
    fn test_voice_grant_nests_incoming_and_outgoing() {
        let grant = VoiceGrant {
            incoming_allow: Some(true),
            outgoing_application_sid: Some("AP123".to_string()),
            outgoing_application_params: Some(json!({ "foo": "bar" })),
            push_credential_sid: Some("CR123".to_string()),
            endpoint_id: Some("blah".to_string()),
        };
        assert_eq!(
            Grant::from(grant).to_payload().unwrap(),
            json!({
                "incoming": { "allow": true },
                "outgoing": { "application_sid": "AP123", "params": { "foo": "bar" } },
                "push_credential_sid": "CR123",
                "endpoint_id": "blah"
            })
        );
    }

    #[test]
    fn test_voice_grant_ignores_incoming_false_and_orphan_params() {
        let grant = VoiceGrant {
            incoming_allow: Some(false),
            outgoing_application_params: Some(json!({ "foo": "bar" })),
            ..Default::default()
        };
        assert_eq!(Grant::from(grant).to_payload().unwrap(), json!({}));
    }

    #[test]
    fn test_playback_grant_passes_object_through() {
        let mut inner = Map::new();
        inner.insert("requestCredentials".to_string(), Value::Null);
        inner.insert("playbackUrl".to_string(), json!("https://example.com/playback"));
        inner.insert("playerStreamerSid".to_string(), json!("VJ123"));

        let grant = Grant::from(PlaybackGrant {
            grant: Some(inner.clone()),
        });
        assert_eq!(grant.to_payload().unwrap(), Value::Object(inner));
    }
}
