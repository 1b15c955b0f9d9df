pub mod connection;
pub mod properties;

pub use connection::{init_db, Database};
pub use properties::{find_property_by_slug, list_properties, save_property};
