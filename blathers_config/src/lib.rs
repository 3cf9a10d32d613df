mod credentials;
mod schema;

pub use credentials::Credentials;
pub use schema::Config;
