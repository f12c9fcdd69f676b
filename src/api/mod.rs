pub mod handler;
pub mod helpers;
pub mod validation;

pub use handler::handler;
