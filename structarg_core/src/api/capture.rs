use std::str::FromStr;
use thiserror::Error;

/// The failure to coerce a token into a destination type.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoerceError {
    /// The token does not parse as the destination type.
    #[error("cannot convert '{token}' to {type_name}")]
    InvalidConversion {
        /// The offending token.
        token: String,
        /// The destination type.
        type_name: &'static str,
    },
    /// The destination type rejected the token with its own coercion.
    #[error("cannot convert '{token}' to {type_name}: {message}")]
    Custom {
        /// The offending token.
        token: String,
        /// The destination type.
        type_name: &'static str,
        /// The message reported by the destination type.
        message: String,
    },
    /// The destination type does not support the requested write.
    #[error("{type_name} cannot be written from the command line")]
    Unsupported {
        /// The destination type.
        type_name: &'static str,
    },
}

/// Coerce `token` with the built-in scalar coercion of `T`.
pub(crate) fn coerce<T: FromStr>(token: &str) -> Result<T, CoerceError> {
    T::from_str(token).map_err(|_| CoerceError::InvalidConversion {
        token: token.to_string(),
        type_name: std::any::type_name::<T>(),
    })
}

/// Coerce `token` into a `bool`, accepting the usual spellings of true and false.
pub(crate) fn coerce_bool(token: &str) -> Result<bool, CoerceError> {
    match token {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Ok(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Ok(false),
        _ => Err(CoerceError::InvalidConversion {
            token: token.to_string(),
            type_name: "bool",
        }),
    }
}
