//! Conversation-related types.

use askbox_model::Message;

/// Whether a message was appended to the transcript.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PushOutcome {
    /// The message was appended.
    Fits,
    /// Appending would exceed the maximum, the message was not appended.
    Overflowed,
}

/// The ordered record of messages exchanged in the current conversation.
///
/// Insertion order is display order. The length never exceeds
/// [`Transcript::max_len`]. The transcript never decides to reset itself,
/// it only refuses an overflowing message and lets its owner call
/// [`Transcript::clear`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Transcript {
    messages: Vec<Message>,
    max_len: usize,
}

impl Transcript {
    /// Creates an empty transcript holding at most `max_len` messages.
    #[inline]
    pub fn with_max_len(max_len: usize) -> Self {
        Self {
            messages: Vec::new(),
            max_len,
        }
    }

    /// Returns the messages, oldest first.
    #[inline]
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Returns the number of messages.
    #[inline]
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Returns `true` if there are no messages.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Returns the configured maximum length.
    #[inline]
    pub fn max_len(&self) -> usize {
        self.max_len
    }

    pub(crate) fn push(&mut self, msg: Message) -> PushOutcome {
        if self.messages.len() >= self.max_len {
            return PushOutcome::Overflowed;
        }
        self.messages.push(msg);
        PushOutcome::Fits
    }

    /// Drops every message.
    pub(crate) fn clear(&mut self) {
        self.messages.clear();
    }
}
