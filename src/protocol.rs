//! Text framing of the echo protocol.
//!
//! ```text
//! server → client   greeting                 (once, right after upgrade)
//! client → server   M                        (text or binary)
//! server → client   reply_prefix + M         (always text)
//! ```

use std::borrow::Cow;

use crate::config::MessageConfig;

/// First message a client receives.
pub fn greeting(messages: &MessageConfig) -> &str {
    &messages.greeting
}

/// Reply sent for a received payload: the prefix followed by the payload verbatim.
pub fn echo_reply(prefix: &str, payload: &str) -> String {
    let mut reply = String::with_capacity(prefix.len() + payload.len());
    reply.push_str(prefix);
    reply.push_str(payload);
    reply
}

/// Text form of a binary payload. Invalid UTF-8 becomes U+FFFD.
pub fn binary_payload_text(payload: &[u8]) -> Cow<'_, str> {
    String::from_utf8_lossy(payload)
}
