use serde_json::{Map, Value};

use crate::model::FileId;

/// Body of a `POST <ai_assist_endpoint>` call.
#[derive(Clone, Debug, PartialEq)]
pub struct AiAssistRequest {
    /// Caller-supplied fields merged into the body.
    pub options: Map<String, Value>,
    pub input_text: String,
    pub file_id: FileId,
    /// Caret offset (in characters) where generated text would be inserted.
    pub insertion_cursor: usize,
}

impl AiAssistRequest {
    /// Options first; `inputText`, `fileId` and `insertionCursor` win over any
    /// option with the same key.
    pub fn to_body(&self) -> Value {
        let mut body = self.options.clone();
        body.insert("inputText".to_string(), Value::String(self.input_text.clone()));
        body.insert("fileId".to_string(), Value::String(self.file_id.0.clone()));
        body.insert(
            "insertionCursor".to_string(),
            Value::from(self.insertion_cursor as u64),
        );
        Value::Object(body)
    }
}
