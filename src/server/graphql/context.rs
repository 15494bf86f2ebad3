use std::net::IpAddr;

use crate::domains::messages::MessageStore;

/// GraphQL request context
///
/// Carries the shared message store and the address the request came from.
/// Built once per request by the server; tests construct it directly.
#[derive(Clone)]
pub struct GraphQLContext {
    pub store: MessageStore,
    pub client_ip: Option<IpAddr>,
}

impl juniper::Context for GraphQLContext {}

impl GraphQLContext {
    pub fn new(store: MessageStore, client_ip: Option<IpAddr>) -> Self {
        Self { store, client_ip }
    }
}
