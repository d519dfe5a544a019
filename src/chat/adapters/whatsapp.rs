//! WhatsApp Cloud API channel adapter and webhook payload types.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::chat::ports::{ChannelError, ChatChannel};
use crate::task::domain::PhoneNumber;

/// Graph API base URL, version pinned.
pub const GRAPH_API_BASE: &str = "https://graph.facebook.com/v21.0";

/// Payload `object` value identifying a business-account notification.
pub const BUSINESS_ACCOUNT_OBJECT: &str = "whatsapp_business_account";

/// Configuration for the WhatsApp Cloud API adapter.
#[derive(Debug, Clone)]
pub struct WhatsAppConfig {
    access_token: String,
    phone_number_id: String,
    api_base: String,
}

impl WhatsAppConfig {
    /// Creates a configuration against the pinned Graph API version.
    #[must_use]
    pub fn new(access_token: impl Into<String>, phone_number_id: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
            phone_number_id: phone_number_id.into(),
            api_base: GRAPH_API_BASE.to_owned(),
        }
    }

    /// Overrides the API base URL.
    #[must_use]
    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into();
        self
    }

    /// Builds a configuration from `WHATSAPP_ACCESS_TOKEN` and
    /// `WHATSAPP_PHONE_NUMBER_ID`. Missing variables yield empty values; the
    /// channel reports [`ChannelError::NotConfigured`] on first use.
    #[must_use]
    pub fn from_env() -> Self {
        Self::new(
            std::env::var("WHATSAPP_ACCESS_TOKEN").unwrap_or_default(),
            std::env::var("WHATSAPP_PHONE_NUMBER_ID").unwrap_or_default(),
        )
    }
}

#[derive(Serialize)]
struct TextPayload<'a> {
    messaging_product: &'static str,
    recipient_type: &'static str,
    to: &'a str,
    #[serde(rename = "type")]
    kind: &'static str,
    text: TextBodyPayload<'a>,
}

#[derive(Serialize)]
struct TextBodyPayload<'a> {
    preview_url: bool,
    body: &'a str,
}

#[derive(Serialize)]
struct ReactionPayload<'a> {
    messaging_product: &'static str,
    recipient_type: &'static str,
    to: &'a str,
    #[serde(rename = "type")]
    kind: &'static str,
    reaction: ReactionBody<'a>,
}

#[derive(Serialize)]
struct ReactionBody<'a> {
    message_id: &'a str,
    emoji: &'a str,
}

#[derive(Serialize)]
struct ReadReceiptPayload<'a> {
    messaging_product: &'static str,
    status: &'static str,
    message_id: &'a str,
}

/// Messaging channel backed by the WhatsApp Cloud API.
#[derive(Debug, Clone)]
pub struct WhatsAppChannel {
    client: Client,
    config: WhatsAppConfig,
}

impl WhatsAppChannel {
    /// Creates a channel for the given configuration.
    #[must_use]
    pub fn new(config: WhatsAppConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    fn messages_url(&self) -> Result<String, ChannelError> {
        if self.config.access_token.is_empty() || self.config.phone_number_id.is_empty() {
            return Err(ChannelError::NotConfigured(
                "WhatsApp access token or phone number id missing".into(),
            ));
        }
        Ok(format!(
            "{}/{}/messages",
            self.config.api_base, self.config.phone_number_id
        ))
    }

    async fn post<T: Serialize + Sync>(&self, payload: &T) -> Result<(), ChannelError> {
        let url = self.messages_url()?;
        let response = self
            .client
            .post(url)
            .bearer_auth(&self.config.access_token)
            .json(payload)
            .send()
            .await
            .map_err(|err| ChannelError::Transport(err.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(ChannelError::Rejected(format!("{status}: {body}")));
        }
        Ok(())
    }
}

#[async_trait]
impl ChatChannel for WhatsAppChannel {
    async fn send_text(&self, to: &PhoneNumber, body: &str) -> Result<(), ChannelError> {
        self.post(&TextPayload {
            messaging_product: "whatsapp",
            recipient_type: "individual",
            to: to.as_ref(),
            kind: "text",
            text: TextBodyPayload {
                preview_url: false,
                body,
            },
        })
        .await
    }

    async fn send_reaction(
        &self,
        to: &PhoneNumber,
        message_id: &str,
        emoji: &str,
    ) -> Result<(), ChannelError> {
        self.post(&ReactionPayload {
            messaging_product: "whatsapp",
            recipient_type: "individual",
            to: to.as_ref(),
            kind: "reaction",
            reaction: ReactionBody { message_id, emoji },
        })
        .await
    }

    async fn mark_read(&self, message_id: &str) -> Result<(), ChannelError> {
        self.post(&ReadReceiptPayload {
            messaging_product: "whatsapp",
            status: "read",
            message_id,
        })
        .await
    }
}

/// Answers a webhook subscription challenge.
///
/// Returns the challenge to echo when the mode is `subscribe` and the token
/// matches; `None` means the verification must be refused.
#[must_use]
pub fn verify_subscription<'a>(
    mode: &str,
    token: &str,
    challenge: &'a str,
    verify_token: &str,
) -> Option<&'a str> {
    (mode == "subscribe" && !verify_token.is_empty() && token == verify_token).then_some(challenge)
}

/// Top-level webhook notification payload.
#[derive(Debug, Clone, Deserialize)]
pub struct WebhookPayload {
    /// Notification object type; anything other than
    /// [`BUSINESS_ACCOUNT_OBJECT`] is ignored.
    pub object: String,
    /// Notification entries.
    #[serde(default)]
    pub entry: Vec<WebhookEntry>,
}

/// One entry in a webhook notification.
#[derive(Debug, Clone, Deserialize)]
pub struct WebhookEntry {
    /// Business account identifier.
    pub id: String,
    /// Changes carried by this entry.
    #[serde(default)]
    pub changes: Vec<WebhookChange>,
}

/// One change inside a webhook entry.
#[derive(Debug, Clone, Deserialize)]
pub struct WebhookChange {
    /// The changed value.
    pub value: ChangeValue,
    /// Field the change applies to.
    pub field: String,
}

/// Value of a webhook change.
#[derive(Debug, Clone, Deserialize)]
pub struct ChangeValue {
    /// Always `whatsapp` for this channel.
    pub messaging_product: String,
    /// Receiving phone number metadata.
    pub metadata: ChangeMetadata,
    /// Sender contact details, when present.
    #[serde(default)]
    pub contacts: Option<Vec<WebhookContact>>,
    /// Inbound messages, when present.
    #[serde(default)]
    pub messages: Option<Vec<InboundMessage>>,
}

/// Receiving phone number metadata.
#[derive(Debug, Clone, Deserialize)]
pub struct ChangeMetadata {
    /// Display form of the receiving number.
    pub display_phone_number: String,
    /// Cloud API identifier of the receiving number.
    pub phone_number_id: String,
}

/// Sender contact details.
#[derive(Debug, Clone, Deserialize)]
pub struct WebhookContact {
    /// Sender profile.
    pub profile: ContactProfile,
    /// Sender WhatsApp identifier.
    pub wa_id: String,
}

/// Sender profile details.
#[derive(Debug, Clone, Deserialize)]
pub struct ContactProfile {
    /// Sender display name.
    pub name: String,
}

/// One inbound message.
#[derive(Debug, Clone, Deserialize)]
pub struct InboundMessage {
    /// Sender phone number.
    pub from: String,
    /// Channel-assigned message identifier.
    pub id: String,
    /// Channel timestamp.
    pub timestamp: String,
    /// Text body, present only for text messages.
    #[serde(default)]
    pub text: Option<InboundText>,
    /// Message type; only `text` is processed.
    #[serde(rename = "type")]
    pub kind: String,
}

impl InboundMessage {
    /// Returns the text body when this is a processable text message.
    #[must_use]
    pub fn text_body(&self) -> Option<&str> {
        if self.kind != "text" {
            return None;
        }
        self.text
            .as_ref()
            .map(|text| text.body.as_str())
            .filter(|body| !body.is_empty())
    }
}

/// Body of an inbound text message.
#[derive(Debug, Clone, Deserialize)]
pub struct InboundText {
    /// Message text.
    pub body: String,
}
