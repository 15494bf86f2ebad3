//! Die rolling.

use juniper::graphql_object;
use rand::Rng;

use crate::server::graphql::GraphQLContext;

/// Number of sides a die has when the caller does not pick one.
pub const DEFAULT_SIDES: i32 = 6;

/// A die with a fixed number of sides.
///
/// Constructed fresh for each `getDie` call and never persisted.
#[derive(Debug, Clone, Copy)]
pub struct RandomDie {
    num_sides: i32,
}

impl RandomDie {
    /// Creates a die with the given number of sides.
    ///
    /// An absent or non-positive value falls back to [`DEFAULT_SIDES`] so
    /// the die can always roll.
    pub fn new(num_sides: Option<i32>) -> Self {
        Self {
            num_sides: num_sides.filter(|&n| n > 0).unwrap_or(DEFAULT_SIDES),
        }
    }

    pub fn sides(&self) -> i32 {
        self.num_sides
    }

    /// One uniform draw from [1, sides].
    pub fn sample(&self) -> i32 {
        rand::thread_rng().gen_range(1..=self.num_sides)
    }

    /// `count` independent draws, in draw order.
    pub fn sample_many(&self, count: i32) -> Vec<i32> {
        (0..count).map(|_| self.sample()).collect()
    }
}

#[graphql_object(context = GraphQLContext)]
impl RandomDie {
    /// How many sides this die has.
    fn num_sides(&self) -> i32 {
        self.sides()
    }

    /// Roll the die once.
    fn roll_once(&self) -> i32 {
        self.sample()
    }

    /// Roll the die numRolls times, returning results in roll order.
    fn roll(&self, num_rolls: i32) -> Vec<i32> {
        self.sample_many(num_rolls)
    }
}
