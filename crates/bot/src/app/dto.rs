use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use serde::{Deserialize, Serialize};

use crate::reply::Reply;

// -------------------------
// Request DTOs
// -------------------------

/// One chat message forwarded by the gateway.
#[derive(Debug, Deserialize)]
pub struct InboundMessage {
    /// Opaque conversation id, echoed back so the gateway knows where to deliver.
    #[serde(default)]
    pub chat_id: Option<i64>,
    pub text: String,
}

// -------------------------
// Response DTOs
// -------------------------

#[derive(Debug, Serialize)]
pub struct OutboundReplies {
    pub chat_id: Option<i64>,
    pub replies: Vec<OutboundReply>,
    pub shutdown: bool,
}

#[derive(Debug, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum OutboundReply {
    Document {
        file_name: String,
        content_type: String,
        content_base64: String,
    },
    Text {
        text: String,
    },
}

/// Replies in delivery order: the document (if any) first, then the text.
pub fn reply_to_outbound(chat_id: Option<i64>, reply: Reply) -> OutboundReplies {
    let mut replies = Vec::with_capacity(2);
    if let Some(document) = reply.attachment {
        replies.push(OutboundReply::Document {
            file_name: document.file_name,
            content_type: document.content_type.to_string(),
            content_base64: STANDARD.encode(&document.bytes),
        });
    }
    replies.push(OutboundReply::Text { text: reply.text });

    OutboundReplies {
        chat_id,
        replies,
        shutdown: reply.shutdown,
    }
}
