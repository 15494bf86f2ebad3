//! GraphQL schema definition.

use juniper::{EmptySubscription, FieldError, FieldResult, RootNode, ID};
use rand::Rng;

use super::context::GraphQLContext;
use crate::domains::dice::RandomDie;
use crate::domains::messages::{generate_message_id, Message, MessageInput, MessageNotFound};

/// Convert a domain error to a juniper FieldError for thin resolvers
fn to_field_error(e: impl std::fmt::Display) -> FieldError {
    FieldError::new(e.to_string(), juniper::Value::null())
}

pub struct Query;

#[juniper::graphql_object(context = GraphQLContext)]
impl Query {
    /// A fixed greeting.
    fn hello() -> String {
        "Hello world!".to_string()
    }

    /// A fresh uniform random value in [0, 1).
    fn kuy() -> f64 {
        rand::thread_rng().gen::<f64>()
    }

    /// Roll `numDice` dice of `numSides` sides each (default 6).
    fn roll_dice(num_dice: i32, num_sides: Option<i32>) -> Vec<i32> {
        RandomDie::new(num_sides).sample_many(num_dice)
    }

    /// A die with `numSides` sides (default 6).
    fn get_die(num_sides: Option<i32>) -> RandomDie {
        RandomDie::new(num_sides)
    }

    /// Look up a message by id.
    async fn get_message(ctx: &GraphQLContext, id: ID) -> FieldResult<Option<Message>> {
        let id = id.to_string();
        let record = ctx
            .store
            .get(&id)
            .await
            .ok_or_else(|| to_field_error(MessageNotFound(id.clone())))?;

        Ok(Some(Message::from_record(id, record)))
    }

    /// The address the current request came from.
    fn ip(ctx: &GraphQLContext) -> Option<String> {
        ctx.client_ip.map(|ip| ip.to_string())
    }
}

pub struct Mutation;

#[juniper::graphql_object(context = GraphQLContext)]
impl Mutation {
    /// Store a new message under a freshly generated id.
    ///
    /// The id is random and not checked against existing keys; see the
    /// store module for the collision trade-off.
    async fn create_message(ctx: &GraphQLContext, input: Option<MessageInput>) -> Message {
        let record = input.unwrap_or_default();
        let id = generate_message_id();

        ctx.store.set(id.clone(), record.clone()).await;

        Message::from_record(id, record)
    }

    /// Replace the message stored under `id`.
    ///
    /// The whole record is replaced: fields omitted from `input` are
    /// dropped, not retained.
    async fn update_message(
        ctx: &GraphQLContext,
        id: ID,
        input: Option<MessageInput>,
    ) -> FieldResult<Option<Message>> {
        let id = id.to_string();
        if ctx.store.get(&id).await.is_none() {
            return Err(to_field_error(MessageNotFound(id)));
        }

        let record = input.unwrap_or_default();
        ctx.store.set(id.clone(), record.clone()).await;

        Ok(Some(Message::from_record(id, record)))
    }
}

pub type Schema = RootNode<'static, Query, Mutation, EmptySubscription<GraphQLContext>>;

pub fn create_schema() -> Schema {
    Schema::new(Query, Mutation, EmptySubscription::new())
}
