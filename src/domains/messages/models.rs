use juniper::{GraphQLInputObject, GraphQLObject, ID};
use thiserror::Error;

/// A stored message.
#[derive(Debug, Clone, GraphQLObject)]
pub struct Message {
    pub id: ID,
    pub content: Option<String>,
    pub author: Option<String>,
}

impl Message {
    /// Assembles a message from its id and the record held by the store.
    pub fn from_record(id: impl Into<String>, record: MessageInput) -> Self {
        Self {
            id: ID::from(id.into()),
            content: record.content,
            author: record.author,
        }
    }
}

/// Fields supplied when creating or updating a message.
///
/// This is also the record shape the store keeps: an update replaces the
/// whole record, so fields omitted from the input come back as null.
#[derive(Debug, Clone, Default, PartialEq, Eq, GraphQLInputObject)]
pub struct MessageInput {
    pub content: Option<String>,
    pub author: Option<String>,
}

/// Lookup failure for an id the store does not hold.
#[derive(Debug, Error)]
#[error("no message exists with id {0}")]
pub struct MessageNotFound(pub String);
