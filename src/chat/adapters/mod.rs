//! Messaging-side adapter implementations.

pub mod memory;
pub mod openai;
pub mod webhook;
pub mod whatsapp;

pub use memory::{
    InMemoryChatChannel, NoopRecategorizeQueue, RecordingRecategorizeQueue, ScriptedExtractor,
    SentText,
};
pub use openai::{OpenAiCategorizer, OpenAiConfig, OpenAiConfigError, OpenAiExtractor};
pub use webhook::{CAPTURE_ACK, CaptureWebhook, DispatchWebhook, RECATEGORIZE_CONFIDENCE, WebhookReceipt};
pub use whatsapp::{
    GRAPH_API_BASE, InboundMessage, InboundText, WebhookPayload, WhatsAppChannel, WhatsAppConfig,
    verify_subscription,
};
