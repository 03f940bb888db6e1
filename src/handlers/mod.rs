pub mod health;
pub mod index;
pub mod create;
pub mod get;
pub mod delete;
pub mod docs;

pub use health::health_handler;
pub use index::index_handler;
pub use create::create_handler;
pub use get::get_handler;
pub use delete::delete_handler;
pub use docs::openapi_handler;
