use serde::{Deserialize, Serialize};

/// A reply from the answering service.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AskResponse {
    /// The answer text.
    pub answer: String,
}
