pub mod builder;
pub mod identity;
pub mod quiz;
pub mod results;
