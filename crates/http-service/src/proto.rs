use askbox_model::{AskRequest, Message, Role};
use serde::{Deserialize, Serialize};

// ------------------------------
// Types received from the server
// ------------------------------

#[derive(Clone, Debug, PartialEq, Eq, Hash, Deserialize)]
pub struct AnswerBody {
    pub answer: String,
}

// ------------------------
// Types sent to the server
// ------------------------

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct HistoryItem<'a> {
    role: Role,
    content: &'a str,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct AskBody<'a> {
    question: &'a str,
    history: Vec<HistoryItem<'a>>,
}

// -----------
// Conversions
// -----------

#[inline]
pub fn create_body(req: &AskRequest) -> AskBody<'_> {
    AskBody {
        question: &req.question,
        history: req.history.iter().map(create_history_item).collect(),
    }
}

#[inline]
fn create_history_item(msg: &Message) -> HistoryItem<'_> {
    HistoryItem {
        role: msg.role(),
        content: msg.content(),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_create_body() {
        let req = AskRequest {
            question: "And in France?".to_owned(),
            history: vec![
                Message::system("new conversation started"),
                Message::user("What is a senate?"),
                Message::assistant("An upper house."),
                Message::user("And in France?"),
            ],
        };
        let body = serde_json::to_value(create_body(&req)).unwrap();
        assert_eq!(
            body,
            json!({
                "question": "And in France?",
                "history": [
                    { "role": "system", "content": "new conversation started" },
                    { "role": "user", "content": "What is a senate?" },
                    { "role": "assistant", "content": "An upper house." },
                    { "role": "user", "content": "And in France?" },
                ]
            })
        );
    }

    #[test]
    fn test_parse_answer() {
        let body: AnswerBody =
            serde_json::from_str(r#"{"answer": "Hi", "sources": []}"#)
                .unwrap();
        assert_eq!(body.answer, "Hi");

        assert!(serde_json::from_str::<AnswerBody>(r#"{"detail": "x"}"#).is_err());
        assert!(serde_json::from_str::<AnswerBody>(r#"{"answer": null}"#).is_err());
    }
}
