use thiserror::Error;

use crate::api::{CoerceError, Record, Value};
use crate::model::FieldPath;
use crate::parser::environment::EnvironmentError;

/// The outcome of an unsuccessful parse.
///
/// Parsing stops at the first error.
/// The help and version requests are not failures, but travel the same channel so that the caller may render them.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The user asked for help (`-h` or `--help`).
    #[error("help requested by user")]
    Help,
    /// The user asked for the version (`--version`).
    #[error("version requested by user")]
    Version,
    /// A token in subcommand position names none of the subcommands.
    #[error("invalid subcommand: {0}")]
    InvalidSubcommand(String),
    /// A flag names none of the options in scope.
    #[error("unknown argument {0}")]
    UnknownArgument(String),
    /// A flag requiring a value is followed by nothing, or by another flag.
    #[error("missing value for {0}")]
    MissingValue(String),
    /// A value cannot be coerced into its destination.
    #[error("error processing {argument}: {source}")]
    InvalidValue {
        /// The flag or positional receiving the value.
        argument: String,
        /// The coercion failure.
        source: CoerceError,
    },
    /// An environment variable cannot be coerced into its destination.
    #[error("error processing environment variable {variable}: {source}")]
    InvalidEnvironment {
        /// The environment variable.
        variable: String,
        /// The coercion failure.
        source: CoerceError,
    },
    /// An environment variable is set, but cannot be read.
    #[error("error reading environment variable {variable}: {source}")]
    UnreadableEnvironment {
        /// The environment variable.
        variable: String,
        /// The read failure.
        source: EnvironmentError,
    },
    /// An environment variable backing a multi value option isn't a valid Csv record.
    #[error("error reading a CSV string from environment variable {variable} with multiple values: {source}")]
    EnvironmentCsv {
        /// The environment variable.
        variable: String,
        /// The Csv failure.
        source: csv::Error,
    },
    /// More positional values than positional options.
    #[error("too many positional arguments at '{0}'")]
    TooManyPositionals(String),
    /// A required option is absent (from both the Cli and the environment).
    #[error("{0} is required")]
    MissingRequired(String),
    /// The destination records don't line up with the schema.
    #[error("expected {expected} destination(s), received {received}")]
    Destinations {
        /// The number of destinations the schema was built from.
        expected: usize,
        /// The number of destinations supplied.
        received: usize,
    },
}

/// Walk `path` through the destination records down to its field.
///
/// Paths are derived from the same shapes as the records, so a failure here is a bug rather than a user error.
pub(crate) fn resolve<'r>(roots: &'r mut [&mut dyn Record], path: &FieldPath) -> &'r mut dyn Value {
    let (last, parents) = match path.fields().split_last() {
        Some(split) => split,
        None => unreachable!("internal error - path {path} does not name a field"),
    };
    let mut record: &'r mut dyn Record = match roots.get_mut(path.root_index()) {
        Some(root) => &mut **root,
        None => unreachable!("internal error - path {path} names a missing destination"),
    };

    for field in parents {
        record = match record.field_mut(field).and_then(|value| value.record()) {
            Some(inner) => inner,
            None => unreachable!("internal error - path {path} cannot pass through '{field}'"),
        };
    }

    match record.field_mut(last) {
        Some(value) => value,
        None => unreachable!("internal error - path {path} cannot reach '{last}'"),
    }
}
