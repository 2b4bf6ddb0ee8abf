use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

pub type BookId = i64;

/// A book as stored and as sent over the wire.
///
/// Missing fields decode to their zero value, so an update always carries a full record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct Book {
    pub id: BookId,
    pub title: String,
    pub description: String,
    pub author: String,
    pub publication_year: i64,
}
