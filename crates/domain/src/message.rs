//! Message taxonomy shared by commands, events, and queries.

/// Discriminates the three message families flowing through the system.
///
/// Commands and queries are requests; events are immutable facts that
/// already occurred. Only events are ever persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageKind {
    Command,
    Event,
    Query,
}

impl MessageKind {
    /// Returns the kind name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            MessageKind::Command => "command",
            MessageKind::Event => "event",
            MessageKind::Query => "query",
        }
    }
}

impl std::fmt::Display for MessageKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Common classification implemented by every command, event, and query
/// type in the domain.
pub trait Message {
    /// Returns which message family this type belongs to.
    fn kind(&self) -> MessageKind;
}
