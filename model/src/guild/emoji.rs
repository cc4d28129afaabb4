use serde::{Deserialize, Serialize};

/// The subset of a guild emoji object needed to address its reactions.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct EmojiRef {
    pub id: String,
    pub name: String,
}

impl EmojiRef {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> EmojiRef {
        EmojiRef {
            id: id.into(),
            name: name.into(),
        }
    }

    /// Path segment used by the reactions endpoints, `name:id`.
    ///
    /// The name is not percent-encoded.
    pub fn token(&self) -> String {
        format!("{}:{}", self.name, self.id)
    }
}
