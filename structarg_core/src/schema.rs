mod builder;
mod command;
mod spec;
mod tag;

pub use builder::*;
pub use command::{CommandNode, Schema};
pub use spec::OptionSpec;

pub(crate) use command::ROOT;
