pub mod render;
pub mod routing;
