use crate::api::{TypeInfo, TypeKind};
use crate::model::{FieldPath, Multiplicity, OptionKind};

/// A command line option: a flag or a positional argument, bound to a destination field.
///
/// Created once by the [`SchemaBuilder`](crate::SchemaBuilder), and never mutated afterwards.
#[derive(Debug, Clone)]
pub struct OptionSpec {
    pub(crate) path: FieldPath,
    pub(crate) long: String,
    pub(crate) short: Option<char>,
    pub(crate) kind: OptionKind,
    pub(crate) multiplicity: Multiplicity,
    pub(crate) required: bool,
    pub(crate) separate: bool,
    pub(crate) env: Option<String>,
    pub(crate) help: Option<String>,
    pub(crate) boolean: bool,
    pub(crate) value_type: TypeInfo,
}

impl OptionSpec {
    pub(crate) fn new(path: FieldPath, long: impl Into<String>, value_type: TypeInfo) -> Self {
        Self {
            path,
            long: long.into(),
            short: None,
            kind: OptionKind::Flag,
            multiplicity: Multiplicity::Single,
            required: false,
            separate: false,
            env: None,
            help: None,
            boolean: false,
            value_type,
        }
    }

    /// The destination field.
    pub fn path(&self) -> &FieldPath {
        &self.path
    }

    /// The long name (`--NAME`), which is also the display name of a positional.
    pub fn long(&self) -> &str {
        &self.long
    }

    /// The short name (`-N`), if any.
    pub fn short(&self) -> Option<char> {
        self.short
    }

    /// Whether the option is a flag or a positional.
    pub fn kind(&self) -> OptionKind {
        self.kind
    }

    /// Whether the option takes one or many values.
    pub fn multiplicity(&self) -> Multiplicity {
        self.multiplicity
    }

    /// Whether the option must be supplied.
    pub fn is_required(&self) -> bool {
        self.required
    }

    /// Whether each occurrence of a multi-value flag takes precisely one value.
    pub fn is_separate(&self) -> bool {
        self.separate
    }

    /// The environment variable that backs this option, if any.
    pub fn env(&self) -> Option<&str> {
        self.env.as_deref()
    }

    /// The help message, if any.
    pub fn help(&self) -> Option<&str> {
        self.help.as_deref()
    }

    /// Whether a valueless flag means `true`.
    pub fn is_boolean(&self) -> bool {
        self.boolean
    }

    /// The destination type.
    pub fn value_type(&self) -> &TypeInfo {
        &self.value_type
    }

    pub(crate) fn is_positional(&self) -> bool {
        self.kind == OptionKind::Positional
    }

    pub(crate) fn is_multiple(&self) -> bool {
        self.multiplicity == Multiplicity::Multiple
    }

    /// The name used in diagnostics: `--NAME` for flags, and `NAME` for positionals.
    pub fn display_name(&self) -> String {
        match self.kind {
            OptionKind::Flag => format!("--{}", self.long),
            OptionKind::Positional => self.long.clone(),
        }
    }

    /// Whether `name` (stripped of its dashes) refers to this flag.
    pub(crate) fn answers_to(&self, name: &str) -> bool {
        if self.is_positional() {
            return false;
        }

        if self.long == name {
            return true;
        }

        match self.short {
            Some(short) => {
                let mut chars = name.chars();
                chars.next() == Some(short) && chars.next().is_none()
            }
            None => false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Admission {
    pub(crate) boolean: bool,
    pub(crate) multiplicity: Multiplicity,
}

/// Decide whether a field of `type_info` can be written from the Cli.
///
/// Admissible types are: directly coercible types, optional wrappers of them, and sequences of either.
/// At most one optional wrapper is unwrapped inside a sequence.
pub(crate) fn admit(type_info: &TypeInfo) -> Option<Admission> {
    if type_info.is_direct() {
        return Some(Admission {
            boolean: type_info.is_boolean(),
            multiplicity: Multiplicity::Single,
        });
    }

    let mut current = type_info.pointee().unwrap_or(type_info);
    let mut multiplicity = Multiplicity::Single;

    if let TypeKind::Sequence(inner) = current.kind() {
        multiplicity = Multiplicity::Multiple;
        current = inner;
    }

    if current.is_direct() {
        return Some(Admission {
            boolean: current.is_boolean(),
            multiplicity,
        });
    }

    let current = current.pointee().unwrap_or(current);

    if current.is_direct() {
        return Some(Admission {
            boolean: current.is_boolean(),
            multiplicity,
        });
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{Reflect, ScalarKind};
    use std::collections::{HashMap, HashSet};
    use std::path::PathBuf;

    #[test]
    fn admit_scalars() {
        assert_eq!(
            admit(&u32::type_info()),
            Some(Admission {
                boolean: false,
                multiplicity: Multiplicity::Single,
            })
        );
        assert_eq!(
            admit(&bool::type_info()),
            Some(Admission {
                boolean: true,
                multiplicity: Multiplicity::Single,
            })
        );
        assert_eq!(
            admit(&PathBuf::type_info()),
            Some(Admission {
                boolean: false,
                multiplicity: Multiplicity::Single,
            })
        );
    }

    #[test]
    fn admit_pointers() {
        assert_eq!(
            admit(&<Option<bool>>::type_info()),
            Some(Admission {
                boolean: true,
                multiplicity: Multiplicity::Single,
            })
        );
        assert_eq!(
            admit(&<Option<Option<i8>>>::type_info()),
            Some(Admission {
                boolean: false,
                multiplicity: Multiplicity::Single,
            })
        );
    }

    #[test]
    fn admit_sequences() {
        for type_info in [
            <Vec<String>>::type_info(),
            <HashSet<u8>>::type_info(),
            <Vec<Option<f32>>>::type_info(),
            <Option<Vec<i64>>>::type_info(),
        ] {
            assert_matches!(
                admit(&type_info),
                Some(Admission {
                    multiplicity: Multiplicity::Multiple,
                    ..
                }),
                "{}",
                type_info.name()
            );
        }
    }

    #[test]
    fn admit_rejects() {
        for type_info in [
            <Vec<Vec<String>>>::type_info(),
            <HashMap<String, u8>>::type_info(),
            <Vec<Option<Option<u8>>>>::type_info(),
            <Option<Option<Vec<u8>>>>::type_info(),
            TypeInfo::record("Nested", || crate::api::Shape::new("Nested", vec![])),
        ] {
            assert_eq!(admit(&type_info), None, "{}", type_info.name());
        }
    }

    #[test]
    fn admit_custom_is_not_boolean() {
        let custom = TypeInfo::new("Toggle", TypeKind::Custom);
        let boolean = TypeInfo::scalar("bool", ScalarKind::Bool);
        assert_eq!(
            admit(&custom),
            Some(Admission {
                boolean: false,
                multiplicity: Multiplicity::Single,
            })
        );
        assert!(admit(&boolean).unwrap().boolean);
    }

    #[test]
    fn answers_to() {
        // Setup
        let mut spec = OptionSpec::new(
            FieldPath::root(0).child("port"),
            "port",
            u16::type_info(),
        );
        spec.short = Some('p');

        // Verify
        assert!(spec.answers_to("port"));
        assert!(spec.answers_to("p"));
        assert!(!spec.answers_to("po"));
        assert!(!spec.answers_to("P"));
        assert_eq!(spec.display_name(), "--port");

        spec.kind = OptionKind::Positional;
        assert!(!spec.answers_to("port"));
        assert_eq!(spec.display_name(), "port");
    }
}
