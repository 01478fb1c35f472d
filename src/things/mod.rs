pub mod adapter;
pub mod client;
pub mod schema;
pub mod types;

pub use adapter::ThingsAdapter;
pub use client::{CallbackUrl, THINGS_JSON_URL};
pub use schema::{schema_for, Coercion};
pub use types::*;
