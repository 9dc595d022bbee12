mod base;
mod environment;
mod middleware;
mod session;

pub use base::ParseError;
pub use environment::{Environment, EnvironmentError, ProcessEnvironment};
pub use middleware::*;
pub use session::ParseSession;
