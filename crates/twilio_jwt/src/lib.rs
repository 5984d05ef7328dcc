// --- File: crates/twilio_jwt/src/lib.rs ---
//! Access tokens for Twilio client SDKs (Video, Voice, Conversations, Sync, TaskRouter).
//!
//! An [`AccessToken`] collects [`Grant`]s and signs them into a JWT with an API key
//! secret. The resulting token is handed to a browser or mobile client.

/// Token builder and verification helper.
pub mod access_token;
pub mod error;
/// Grant types and their payload mapping.
pub mod grants;

pub use access_token::{
    decode_token, AccessToken, AccessTokenOptions, Algorithm, Claims, Identity, CONTENT_TYPE,
    DEFAULT_TTL,
};
pub use error::JwtError;
pub use grants::{
    ChatGrant, Grant, PlaybackGrant, SyncGrant, TaskRouterGrant, VideoGrant, VoiceGrant,
};
