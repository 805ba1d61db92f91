use serde::{Deserialize, Serialize};

use crate::Message;

/// A question to be sent to the answering service.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AskRequest {
    /// The latest user input.
    pub question: String,
    /// The conversation so far, oldest first.
    pub history: Vec<Message>,
}
