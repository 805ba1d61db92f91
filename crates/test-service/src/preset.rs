use serde::{Deserialize, Serialize};

/// How the service replies to one request.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum PresetReply {
    /// Reply with the given answer.
    #[serde(rename = "answer")]
    Answer(String),
    /// Fail the request, as if the connection had dropped.
    #[serde(rename = "failure")]
    Failure,
}

impl PresetReply {
    /// Creates an answer reply.
    #[inline]
    pub fn answer<S: Into<String>>(answer: S) -> Self {
        Self::Answer(answer.into())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_script_from_json() {
        let script: Vec<PresetReply> = serde_json::from_value(json!([
            { "type": "answer", "data": "Hi" },
            { "type": "failure" },
        ]))
        .unwrap();

        assert_eq!(
            script,
            vec![PresetReply::answer("Hi"), PresetReply::Failure]
        );
    }
}
