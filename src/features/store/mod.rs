pub mod client;
pub mod dto;
pub mod query;

pub use client::StoreClient;
pub use dto::RowId;
pub use query::TableQuery;
