//! Sequence diagrams: participants exchanging ordered messages.

use crate::identifier::Id;

/// A lifeline in a sequence diagram.
#[derive(Debug, Clone, PartialEq)]
pub struct Participant {
    id: Id,
    label: Option<String>,
}

impl Participant {
    pub fn id(&self) -> Id {
        self.id
    }

    /// Display name when it differs from the id.
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }
}

/// Whether a message is a call or the answer to one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    /// Solid arrow.
    Sync,
    /// Dashed arrow.
    Reply,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Message {
    from: Id,
    to: Id,
    text: String,
    kind: MessageKind,
}

impl Message {
    pub fn from(&self) -> Id {
        self.from
    }

    pub fn to(&self) -> Id {
        self.to
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn kind(&self) -> MessageKind {
        self.kind
    }
}

/// An ordered exchange of messages between participants.
///
/// # Examples
///
/// ```
/// use livevue_diagrams_core::semantic::{MessageKind, SequenceDiagram};
///
/// let diagram = SequenceDiagram::new()
///     .participant_as("SSR", "SSR Module")
///     .participant("Browser")
///     .message("SSR", "Browser", "Complete HTML")
///     .reply("Browser", "SSR", "ack");
///
/// assert_eq!(diagram.participants().len(), 2);
/// assert_eq!(diagram.messages()[1].kind(), MessageKind::Reply);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SequenceDiagram {
    participants: Vec<Participant>,
    messages: Vec<Message>,
}

impl SequenceDiagram {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares a participant shown under its id.
    pub fn participant(mut self, id: &str) -> Self {
        self.participants.push(Participant {
            id: Id::new(id),
            label: None,
        });
        self
    }

    /// Declares a participant with a display name distinct from its id.
    pub fn participant_as(mut self, id: &str, label: &str) -> Self {
        self.participants.push(Participant {
            id: Id::new(id),
            label: Some(label.to_string()),
        });
        self
    }

    /// Appends a call from `from` to `to`.
    pub fn message(self, from: &str, to: &str, text: &str) -> Self {
        self.push(from, to, text, MessageKind::Sync)
    }

    /// Appends a reply from `from` to `to`.
    pub fn reply(self, from: &str, to: &str, text: &str) -> Self {
        self.push(from, to, text, MessageKind::Reply)
    }

    fn push(mut self, from: &str, to: &str, text: &str, kind: MessageKind) -> Self {
        self.messages.push(Message {
            from: Id::new(from),
            to: Id::new(to),
            text: text.to_string(),
            kind,
        });
        self
    }

    pub fn participants(&self) -> &[Participant] {
        &self.participants
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }
}
