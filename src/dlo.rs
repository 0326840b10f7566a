//! The dead-letter office: a first-class actor that captures undeliverable
//! messages. Its own `dlo` reference is always `None`, which is what
//! prevents a DLO-routing loop.

// Layer 1: Standard library imports
// (none)

// Layer 2: Third-party crate imports
use async_trait::async_trait;
use chrono::{DateTime, Utc};

// Layer 3: Internal module imports
use crate::actor::Behavior;
use crate::context::Context;
use crate::logger::Logger;
use crate::message::Message;
use crate::util::{ActorId, MessageId};
use std::sync::Arc;

/// What the DLO actually receives: metadata about an undeliverable
/// message, not the message itself — the DLO's message type must be fixed
/// regardless of which `M` produced the dead letter, so only the
/// describable parts travel with it.
#[derive(Debug, Clone)]
pub struct DeadLetter {
    pub origin: ActorId,
    pub message_type: &'static str,
    pub envelope_id: MessageId,
    pub created_at: DateTime<Utc>,
    pub reason: &'static str,
}

impl Message for DeadLetter {
    const MESSAGE_TYPE: &'static str = "dead_letter";
}

/// Default DLO behavior: logs every dead letter it receives. Swappable —
/// `ActorSystem::new` accepts any `Behavior<DeadLetter, ()>`.
pub struct LoggingDeadLetterOffice {
    logger: Arc<dyn Logger>,
}

impl LoggingDeadLetterOffice {
    pub fn new(logger: Arc<dyn Logger>) -> Self {
        Self { logger }
    }
}

#[derive(Debug, thiserror::Error)]
#[error("message undeliverable: {0:?}")]
pub struct Undeliverable(pub &'static str);

#[async_trait]
impl Behavior<DeadLetter, ()> for LoggingDeadLetterOffice {
    type Error = Undeliverable;

    async fn receive(&mut self, _ctx: &Context, message: DeadLetter) -> Result<(), Self::Error> {
        self.logger.warn(
            message.origin.as_str(),
            "message undeliverable",
            None,
            &[
                ("message_type", &message.message_type),
                ("envelope_id", &message.envelope_id),
                ("reason", &message.reason),
            ],
        );
        Err(Undeliverable(message.reason))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::logger::NoopLogger;

    #[tokio::test]
    async fn dlo_behavior_logs_and_returns_error() {
        let mut dlo = LoggingDeadLetterOffice::new(Arc::new(NoopLogger::new()));
        let letter = DeadLetter {
            origin: ActorId::new("worker-1"),
            message_type: "ping",
            envelope_id: MessageId::new(),
            created_at: Utc::now(),
            reason: "actor terminated",
        };
        let result = dlo.receive(&Context::background(), letter).await;
        assert!(result.is_err());
    }
}
