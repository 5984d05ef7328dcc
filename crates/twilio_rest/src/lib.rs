// --- File: crates/twilio_rest/src/lib.rs ---
//! Typed client for a subset of the Twilio REST API.
//!
//! Every resource comes as a `*Context` (one record: fetch / update / remove), a
//! `*List` (the collection: create plus the [`ListResource`] paging operations), an
//! `*Instance` (the deserialized record) and parameter structs.
//!
//! ```no_run
//! use twilio_rest::prelude::*;
//! use twilio_rest::api::message::CreateMessageParams;
//!
//! # async fn run() -> Result<(), RestError> {
//! let client = TwilioClient::new("ACxxxxxxxx", "auth_token")?;
//! let sent = client
//!     .messages()
//!     .create(&CreateMessageParams::new("+15558675310").from("+15017122661").body("Hi"))
//!     .await?;
//! let recent = client
//!     .messages()
//!     .list(&Default::default(), ReadOptions::new().limit(20))
//!     .await?;
//! # Ok(()) }
//! ```

pub mod client;
pub mod error;
pub mod page;
pub mod pagination;
pub mod serialize;
/// Webhook signature validation.
pub mod webhook;

pub mod api;
pub mod chat;
pub mod conversations;
pub mod events;
pub mod insights;
pub mod supersim;
pub mod sync;
pub mod verify;
pub mod voice;
pub mod wireless;

pub use client::{Domain, TwilioClient, TwilioClientBuilder};
pub use error::RestError;
pub use page::{Page, PageMeta};
pub use pagination::{ListResource, PageParams, ReadOptions, MAX_PAGE_SIZE};

/// Everything needed to build a client and walk collections.
pub mod prelude {
    pub use crate::client::{Domain, TwilioClient, TwilioClientBuilder};
    pub use crate::error::RestError;
    pub use crate::page::Page;
    pub use crate::pagination::{ListResource, PageParams, ReadOptions};
    pub use futures::{StreamExt, TryStreamExt};
    pub use std::ops::ControlFlow;
}

impl TwilioClient {
    /// 2010-04-01 API scoped to the client's account.
    pub fn api(&self) -> api::V2010 {
        api::V2010::new(self.clone())
    }

    /// Shortcut for `api().messages()`.
    pub fn messages(&self) -> api::message::MessageList {
        self.api().messages()
    }

    pub fn chat(&self) -> chat::ChatV2 {
        chat::ChatV2::new(self.clone())
    }

    pub fn conversations(&self) -> conversations::ConversationsV1 {
        conversations::ConversationsV1::new(self.clone())
    }

    pub fn events(&self) -> events::EventsV1 {
        events::EventsV1::new(self.clone())
    }

    pub fn insights(&self) -> insights::InsightsV1 {
        insights::InsightsV1::new(self.clone())
    }

    pub fn supersim(&self) -> supersim::SupersimV1 {
        supersim::SupersimV1::new(self.clone())
    }

    pub fn sync(&self) -> sync::SyncV1 {
        sync::SyncV1::new(self.clone())
    }

    pub fn verify(&self) -> verify::VerifyV2 {
        verify::VerifyV2::new(self.clone())
    }

    pub fn voice(&self) -> voice::VoiceV1 {
        voice::VoiceV1::new(self.clone())
    }

    pub fn wireless(&self) -> wireless::WirelessV1 {
        wireless::WirelessV1::new(self.clone())
    }
}
