use serde::{Deserialize, Serialize};

/// A user returned by the message reactions endpoint. Only the id is kept.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Reactor {
    pub id: String,
}

impl From<Reactor> for String {
    fn from(reactor: Reactor) -> String {
        reactor.id
    }
}
