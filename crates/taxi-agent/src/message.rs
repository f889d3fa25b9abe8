//! Inter-agent messages.
//!
//! Messages are addressed by arena index and carry both identities so the
//! recipient can reply and log without looking anything up.  Delivery is the
//! driver's job: an agent's tick returns its outbox and the driver appends
//! each message to the recipient's inbox before the next agent runs.

use std::fmt;
use std::str::FromStr;

use taxi_core::{AgentId, AgentKey, PlaceId, TaxiError, TaxiResult};
use taxi_grid::Occupant;

#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MessageKind {
    /// Content lists places where clients were seen.
    ClientLocation,
    /// Ask a teammate to help obstruct an opponent.  No content.
    AssistInBlocking,
    Confirm,
    Deny,
}

impl MessageKind {
    pub const ALL: [MessageKind; 4] = [
        MessageKind::ClientLocation,
        MessageKind::AssistInBlocking,
        MessageKind::Confirm,
        MessageKind::Deny,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            MessageKind::ClientLocation   => "CLIENT_LOCATION",
            MessageKind::AssistInBlocking => "ASSIST_IN_BLOCKING",
            MessageKind::Confirm          => "CONFIRM",
            MessageKind::Deny             => "DENY",
        }
    }

    /// `true` for the two reply kinds, which are never answered.
    #[inline]
    pub fn is_reply(self) -> bool {
        matches!(self, MessageKind::Confirm | MessageKind::Deny)
    }
}

impl fmt::Display for MessageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MessageKind {
    type Err = TaxiError;

    fn from_str(s: &str) -> TaxiResult<Self> {
        MessageKind::ALL
            .into_iter()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| TaxiError::unknown("message kind", s))
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Message {
    pub sender:    Occupant,
    pub recipient: Occupant,
    pub kind:      MessageKind,
    pub content:   Vec<PlaceId>,
}

impl Message {
    pub fn new(sender: Occupant, recipient: Occupant, kind: MessageKind, content: Vec<PlaceId>) -> Self {
        Self { sender, recipient, kind, content }
    }

    /// A content-free reply travelling back to the sender of `self`.
    pub fn reply(&self, kind: MessageKind) -> Message {
        Message::new(self.recipient, self.sender, kind, Vec::new())
    }

    #[inline]
    pub fn recipient_id(&self) -> AgentId {
        self.recipient.id
    }

    #[inline]
    pub fn sender_key(&self) -> AgentKey {
        self.sender.key
    }
}
