//! Database layer - restaurant stores and query building

pub mod memory;
pub mod query_builder;
pub mod store;
pub mod traits;

pub use memory::InMemoryRestaurantStore;
pub use query_builder::{BindValue, QueryBuilder};
pub use store::PostgresRestaurantStore;
pub use traits::RestaurantStore;
