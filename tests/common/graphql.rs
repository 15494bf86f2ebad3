//! GraphQL client for integration testing.
//!
//! Executes operations directly against the schema without HTTP overhead.

#![allow(dead_code)]

use std::net::IpAddr;

use api_core::domains::messages::MessageStore;
use api_core::server::graphql::{create_schema, GraphQLContext, Schema};
use juniper::Variables;
use serde_json::Value;

/// Executes queries and mutations against a schema instance in tests.
pub struct GraphQLClient {
    schema: Schema,
    context: GraphQLContext,
}

/// Outcome of one execution: the data tree plus any error messages.
#[derive(Debug)]
pub struct GraphQLResult {
    pub data: Option<Value>,
    pub errors: Vec<String>,
}

impl GraphQLResult {
    /// True when the execution produced no errors.
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }

    /// The data tree; panics if the execution carried errors.
    pub fn unwrap(self) -> Value {
        if !self.errors.is_empty() {
            panic!("GraphQL errors: {:?}", self.errors);
        }
        self.data.expect("No data returned")
    }
}

impl GraphQLClient {
    /// Creates a client backed by a fresh, empty store.
    pub fn new() -> Self {
        Self::with_store(MessageStore::new())
    }

    /// Creates a client over an existing store.
    pub fn with_store(store: MessageStore) -> Self {
        Self {
            schema: create_schema(),
            context: GraphQLContext::new(store, None),
        }
    }

    /// Creates a client whose requests appear to come from `ip`.
    pub fn with_client_ip(ip: IpAddr) -> Self {
        Self {
            schema: create_schema(),
            context: GraphQLContext::new(MessageStore::new(), Some(ip)),
        }
    }

    /// Execute a GraphQL query/mutation.
    pub async fn execute(&self, query: &str) -> GraphQLResult {
        self.execute_with_vars(query, Variables::new()).await
    }

    /// Execute a GraphQL query/mutation with variables.
    ///
    /// Validation failures (unknown fields, missing required arguments)
    /// land in the errors list just like resolver errors do over HTTP.
    pub async fn execute_with_vars(&self, query: &str, variables: Variables) -> GraphQLResult {
        match juniper::execute(query, None, &self.schema, &variables, &self.context).await {
            Ok((result, errors)) => {
                let data = Some(
                    serde_json::to_value(&result).expect("Failed to serialize GraphQL result"),
                );
                let error_messages = errors
                    .iter()
                    .map(|e| e.error().message().to_string())
                    .collect();

                GraphQLResult {
                    data,
                    errors: error_messages,
                }
            }
            Err(e) => GraphQLResult {
                data: None,
                errors: vec![e.to_string()],
            },
        }
    }

    /// Execute a query and expect success, returning the data.
    pub async fn query(&self, query: &str) -> Value {
        self.execute(query).await.unwrap()
    }

    /// Execute a query with variables and expect success.
    pub async fn query_with_vars(&self, query: &str, variables: Variables) -> Value {
        self.execute_with_vars(query, variables).await.unwrap()
    }
}
