//! Plain data types stored by the product actor and carried across the directory API.

pub mod product;

pub use product::*;
