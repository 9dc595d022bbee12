mod capture;
mod field;
mod record;
mod shape;

pub use capture::CoerceError;
pub use field::*;
pub use record::*;
pub use shape::*;
