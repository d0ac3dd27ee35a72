pub mod embed;
pub mod extract;
pub mod query;
pub mod transform;
