//! End-to-end conversation flows through the public crate surface.
//!
//! These tests drive the webhook processors and the dispatcher the way a
//! deployment would: raw webhook payloads in, channel traffic out, with the
//! in-memory adapters standing in for `PostgreSQL` and the oracles.

#![expect(
    clippy::expect_used,
    reason = "Test code uses expect for assertion clarity"
)]
#![expect(
    clippy::indexing_slicing,
    reason = "Test code uses indexing after length checks"
)]

use std::sync::Arc;

use dovecote::chat::adapters::{
    DispatchWebhook, InMemoryChatChannel, ScriptedExtractor, WebhookPayload, WebhookReceipt,
};
use dovecote::chat::domain::ParsedTask;
use dovecote::chat::services::{LenientExtractor, MessageDispatcher};
use dovecote::task::adapters::memory::{InMemoryOwnerRepository, InMemoryTaskStore};
use dovecote::task::domain::Priority;
use dovecote::task::services::OwnerDirectory;
use mockable::DefaultClock;
use serde_json::json;

type Harness = DispatchWebhook<
    InMemoryTaskStore,
    ScriptedExtractor,
    InMemoryOwnerRepository,
    DefaultClock,
    InMemoryChatChannel,
>;

fn harness(extractor: ScriptedExtractor) -> (Harness, Arc<InMemoryChatChannel>) {
    let store = Arc::new(InMemoryTaskStore::new());
    let channel = Arc::new(InMemoryChatChannel::new());
    let clock = Arc::new(DefaultClock);
    let dispatcher = MessageDispatcher::new(
        store,
        LenientExtractor::new(Arc::new(extractor)),
        Arc::clone(&clock),
    );
    let directory = OwnerDirectory::new(Arc::new(InMemoryOwnerRepository::new()), clock);
    (
        DispatchWebhook::new(dispatcher, directory, Arc::clone(&channel)),
        channel,
    )
}

fn message_payload(from: &str, message_id: &str, text: &str) -> WebhookPayload {
    serde_json::from_value(json!({
        "object": "whatsapp_business_account",
        "entry": [{
            "id": "entry-1",
            "changes": [{
                "field": "messages",
                "value": {
                    "messaging_product": "whatsapp",
                    "metadata": {
                        "display_phone_number": "15550100",
                        "phone_number_id": "1234567890"
                    },
                    "messages": [{
                        "from": from,
                        "id": message_id,
                        "timestamp": "1764576000",
                        "type": "text",
                        "text": {"body": text}
                    }]
                }
            }]
        }]
    }))
    .expect("valid payload")
}

fn confident(content: &str) -> ParsedTask {
    ParsedTask {
        title: None,
        content: content.to_owned(),
        summary: None,
        due_date: None,
        priority: Priority::Medium,
        category: None,
        confidence: 0.9,
    }
}

fn replies(channel: &InMemoryChatChannel) -> Vec<String> {
    channel
        .sent_texts()
        .into_iter()
        .map(|text| text.body)
        .collect()
}

#[tokio::test(flavor = "multi_thread")]
async fn capture_list_complete_conversation() {
    let (webhook, channel) = harness(ScriptedExtractor::with_script([
        Ok(confident("Buy groceries")),
        Ok(confident("Call mom")),
    ]));
    let from = "+44 7700 900123";

    // Two captures, a listing, then completing the first position.
    for (message_id, text) in [
        ("wamid.1", "buy groceries tomorrow"),
        ("wamid.2", "call mom"),
        ("wamid.3", "list"),
        ("wamid.4", "done 1"),
        ("wamid.5", "tasks"),
    ] {
        let receipt = webhook.process(&message_payload(from, message_id, text)).await;
        assert_eq!(receipt, WebhookReceipt::Processed(1));
    }

    let replies = replies(&channel);
    assert_eq!(replies.len(), 5);

    assert_eq!(replies[0], "✅ Task added: \"Buy groceries\"");
    assert_eq!(replies[1], "✅ Task added: \"Call mom\"");

    assert!(replies[2].starts_with("📋 Your Tasks (2):"));
    assert!(replies[2].contains("1. 🟡 Buy groceries"));
    assert!(replies[2].contains("2. 🟡 Call mom"));

    assert_eq!(replies[3], "✅ Marked as done: \"Buy groceries\"");

    // The remaining task moves up to position one.
    assert!(replies[4].starts_with("📋 Your Tasks (1):"));
    assert!(replies[4].contains("1. 🟡 Call mom"));
}

#[tokio::test(flavor = "multi_thread")]
async fn owners_are_isolated_by_phone_number() {
    let (webhook, channel) = harness(ScriptedExtractor::with_script([
        Ok(confident("Buy groceries")),
    ]));

    webhook
        .process(&message_payload("15550111", "wamid.1", "buy groceries"))
        .await;
    webhook
        .process(&message_payload("15550222", "wamid.2", "list"))
        .await;

    let replies = replies(&channel);
    assert_eq!(replies.len(), 2);
    assert!(replies[0].starts_with("✅ Task added:"));
    assert!(replies[1].starts_with("📋 You have no pending tasks!"));
}

#[tokio::test(flavor = "multi_thread")]
async fn cancelled_tasks_leave_the_listing() {
    let (webhook, channel) = harness(ScriptedExtractor::with_script([
        Ok(confident("Buy groceries")),
    ]));
    let from = "15550123";

    webhook
        .process(&message_payload(from, "wamid.1", "buy groceries"))
        .await;
    webhook
        .process(&message_payload(from, "wamid.2", "cancel 1"))
        .await;
    webhook
        .process(&message_payload(from, "wamid.3", "list"))
        .await;

    let replies = replies(&channel);
    assert_eq!(replies[1], "🗑️ Cancelled: \"Buy groceries\"");
    assert!(replies[2].starts_with("📋 You have no pending tasks!"));
}

#[tokio::test(flavor = "multi_thread")]
async fn unintelligible_messages_receive_guidance_and_store_nothing() {
    let (webhook, channel) = harness(ScriptedExtractor::default());
    let from = "15550123";

    webhook.process(&message_payload(from, "wamid.1", "???")).await;
    webhook.process(&message_payload(from, "wamid.2", "list")).await;

    let replies = replies(&channel);
    assert!(replies[0].starts_with("👋 I couldn't quite understand that as a task."));
    assert!(replies[1].starts_with("📋 You have no pending tasks!"));
}
