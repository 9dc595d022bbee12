//! Engine of `structarg`: the schema builder and the token interpreter.
//! See [documentation root](https://docs.rs/structarg/latest/structarg/index.html) for full details.
#![deny(missing_docs)]
mod api;
mod constant;
mod matcher;
mod model;
mod parser;
#[allow(missing_docs)]
pub mod prelude;
mod schema;

pub use api::*;
pub use model::*;
pub use parser::*;
pub use schema::*;

#[cfg(test)]
#[macro_use]
extern crate assert_matches;
