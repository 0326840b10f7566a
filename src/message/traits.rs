// Layer 1: Standard library imports
// (none for this module)

// Layer 2: Third-party crate imports
// (none for this module)

// Layer 3: Internal module imports
// (none)

/// A user-defined value carried between actors.
///
/// Messages carry no runtime identity of their own — `MessageId` (see
/// [`crate::util::MessageId`]) is attached by the envelope purely for log
/// correlation. The only thing a message contributes is its stable
/// `MESSAGE_TYPE` tag, resolved at compile time rather than through runtime
/// reflection.
///
/// # Example
/// ```
/// use tessera_rt::message::{Message, BaseMessage};
///
/// #[derive(Debug, Clone)]
/// struct Deposit {
///     cents: u64,
/// }
///
/// impl Message for Deposit {
///     const MESSAGE_TYPE: &'static str = "deposit";
/// }
///
/// assert_eq!(Deposit::MESSAGE_TYPE, "deposit");
/// let _ = BaseMessage;
/// ```
pub trait Message: Send + 'static {
    /// Stable textual tag for this message type, used for logging and
    /// routing decisions. Not unique per instance.
    const MESSAGE_TYPE: &'static str;

    /// Runtime accessor over [`Self::MESSAGE_TYPE`], for call sites that
    /// only have `&dyn` access or a generic bound without the const.
    fn message_type(&self) -> &'static str {
        Self::MESSAGE_TYPE
    }
}

/// Empty mixin a message type may embed when it has nothing else to
/// contribute beyond its type tag — mirrors the reusable "base" marker the
/// runtime's external interface names.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BaseMessage;

impl Message for BaseMessage {
    const MESSAGE_TYPE: &'static str = "base";
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[derive(Debug, Clone)]
    struct Ping;

    impl Message for Ping {
        const MESSAGE_TYPE: &'static str = "ping";
    }

    #[test]
    fn message_type_const_and_accessor_agree() {
        assert_eq!(Ping::MESSAGE_TYPE, "ping");
        assert_eq!(Ping.message_type(), "ping");
    }

    #[test]
    fn base_message_tag() {
        assert_eq!(BaseMessage::MESSAGE_TYPE, "base");
        assert_eq!(BaseMessage.message_type(), "base");
    }

    #[test]
    fn message_trait_object_safety_not_required() {
        fn assert_message<M: Message>() {}
        assert_message::<Ping>();
        assert_message::<BaseMessage>();
    }
}
