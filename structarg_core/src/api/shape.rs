/// The built-in scalar families understood by the default coercion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScalarKind {
    /// `bool`.
    Bool,
    /// Signed integers.
    Signed,
    /// Unsigned integers.
    Unsigned,
    /// Floating point numbers.
    Float,
    /// `char`.
    Char,
    /// Strings.
    Text,
    /// File system paths.
    Path,
    /// Network addresses.
    Address,
}

impl ScalarKind {
    /// Whether `token` reads as a numeric literal of this kind.
    ///
    /// Used to tell a negative number apart from a flag (ex: `--count -5`).
    /// Integers are checked against the widest type of their signedness, not the destination's own width.
    /// An out of range literal is therefore taken as the value, and reported by its coercion (ex: `-500` for an `i8`).
    pub fn is_numeric_literal(&self, token: &str) -> bool {
        match self {
            ScalarKind::Signed => token.parse::<i128>().is_ok(),
            ScalarKind::Unsigned => token.parse::<u128>().is_ok(),
            ScalarKind::Float => token.parse::<f64>().is_ok(),
            _ => false,
        }
    }
}

/// The runtime description of a destination type.
#[derive(Debug, Clone)]
pub enum TypeKind {
    /// Coerced by the built-in scalar coercion.
    Scalar(ScalarKind),
    /// Coerced by the type itself (see [`UnmarshalArg`](crate::prelude::UnmarshalArg)).
    Custom,
    /// An optional wrapper, allocated on first write.
    Pointer(Box<TypeInfo>),
    /// A collection of values.
    Sequence(Box<TypeInfo>),
    /// A nested record, described lazily.
    Record(fn() -> Shape),
    /// A type that cannot be written from the Cli.
    Opaque,
}

/// A type name paired with its [`TypeKind`].
#[derive(Debug, Clone)]
pub struct TypeInfo {
    name: &'static str,
    kind: TypeKind,
}

impl TypeInfo {
    /// Describe a type.
    pub fn new(name: &'static str, kind: TypeKind) -> Self {
        Self { name, kind }
    }

    /// Describe a type using the built-in scalar coercion.
    pub fn scalar(name: &'static str, kind: ScalarKind) -> Self {
        Self::new(name, TypeKind::Scalar(kind))
    }

    /// Describe a record type.
    pub fn record(name: &'static str, describe: fn() -> Shape) -> Self {
        Self::new(name, TypeKind::Record(describe))
    }

    /// Describe a type that cannot be written from the Cli.
    pub fn opaque(name: &'static str) -> Self {
        Self::new(name, TypeKind::Opaque)
    }

    /// The type name, as displayed in diagnostics.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The kind of this type.
    pub fn kind(&self) -> &TypeKind {
        &self.kind
    }

    /// Whether the type parses directly from a single token, without any unwrapping.
    pub(crate) fn is_direct(&self) -> bool {
        matches!(self.kind, TypeKind::Scalar(_) | TypeKind::Custom)
    }

    /// Whether a valueless flag of this type means `true`.
    pub(crate) fn is_boolean(&self) -> bool {
        match &self.kind {
            TypeKind::Scalar(ScalarKind::Bool) => true,
            TypeKind::Pointer(inner) => {
                matches!(inner.kind, TypeKind::Scalar(ScalarKind::Bool))
            }
            _ => false,
        }
    }

    /// Whether `token` reads as a numeric value for this type.
    pub(crate) fn is_numeric_literal(&self, token: &str) -> bool {
        match &self.kind {
            TypeKind::Pointer(inner) => inner.is_numeric_literal(token),
            TypeKind::Scalar(kind) => kind.is_numeric_literal(token),
            _ => false,
        }
    }

    pub(crate) fn pointee(&self) -> Option<&TypeInfo> {
        match &self.kind {
            TypeKind::Pointer(inner) => Some(inner),
            _ => None,
        }
    }
}

/// The shape of one field of a record.
#[derive(Debug, Clone)]
pub struct FieldShape {
    name: &'static str,
    tag: Option<&'static str>,
    help: Option<&'static str>,
    embedded: bool,
    type_info: TypeInfo,
}

impl FieldShape {
    /// Describe the field `name` of type `type_info`.
    pub fn new(name: &'static str, type_info: TypeInfo) -> Self {
        Self {
            name,
            tag: None,
            help: None,
            embedded: false,
            type_info,
        }
    }

    /// Set the comma separated annotation tag (ex: `"--port,-p,required"`).
    /// If repeated, only the final tag will apply.
    pub fn tag(mut self, tag: &'static str) -> Self {
        self.tag.replace(tag);
        self
    }

    /// Set the help message.
    /// If repeated, only the final help message will apply.
    pub fn help(mut self, help: &'static str) -> Self {
        self.help.replace(help);
        self
    }

    /// Mark the field as embedded: a record field whose own fields are expanded in place.
    pub fn embedded(mut self) -> Self {
        self.embedded = true;
        self
    }

    /// The field name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The annotation tag, if any.
    pub fn tag_str(&self) -> Option<&'static str> {
        self.tag
    }

    /// The help message, if any.
    pub fn help_str(&self) -> Option<&'static str> {
        self.help
    }

    /// Whether the field is embedded.
    pub fn is_embedded(&self) -> bool {
        self.embedded
    }

    /// The field type.
    pub fn type_info(&self) -> &TypeInfo {
        &self.type_info
    }
}

/// The shape of a record: its name and its fields, in declaration order.
#[derive(Debug, Clone)]
pub struct Shape {
    name: &'static str,
    fields: Vec<FieldShape>,
}

impl Shape {
    /// Describe the record `name` with `fields`.
    pub fn new(name: &'static str, fields: Vec<FieldShape>) -> Self {
        Self { name, fields }
    }

    /// The record name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The record fields, in declaration order.
    pub fn fields(&self) -> &[FieldShape] {
        &self.fields
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn boolean() -> TypeInfo {
        TypeInfo::scalar("bool", ScalarKind::Bool)
    }

    #[test]
    fn boolean_detection() {
        assert!(boolean().is_boolean());
        assert!(TypeInfo::new("Option<bool>", TypeKind::Pointer(Box::new(boolean()))).is_boolean());
        assert!(!TypeInfo::new("Flag", TypeKind::Custom).is_boolean());
        assert!(!TypeInfo::scalar("u8", ScalarKind::Unsigned).is_boolean());
        assert!(!TypeInfo::new("Vec<bool>", TypeKind::Sequence(Box::new(boolean()))).is_boolean());
    }

    #[rstest]
    #[case(ScalarKind::Signed, "-5", true)]
    #[case(ScalarKind::Signed, "5", true)]
    #[case(ScalarKind::Signed, "-500", true)]
    #[case(ScalarKind::Signed, "-x", false)]
    #[case(ScalarKind::Unsigned, "-5", false)]
    #[case(ScalarKind::Unsigned, "5", true)]
    #[case(ScalarKind::Float, "-0.5", true)]
    #[case(ScalarKind::Float, "-inf", true)]
    #[case(ScalarKind::Text, "-5", false)]
    #[case(ScalarKind::Bool, "-1", false)]
    fn numeric_literal(#[case] kind: ScalarKind, #[case] token: &str, #[case] expected: bool) {
        assert_eq!(kind.is_numeric_literal(token), expected);
    }

    #[test]
    fn numeric_literal_through_pointer() {
        let info = TypeInfo::new(
            "Option<i32>",
            TypeKind::Pointer(Box::new(TypeInfo::scalar("i32", ScalarKind::Signed))),
        );
        assert!(info.is_numeric_literal("-5"));
        assert!(!info.is_numeric_literal("--five"));
    }

    #[test]
    fn field_shape_builder() {
        let field = FieldShape::new("port", TypeInfo::scalar("u16", ScalarKind::Unsigned))
            .tag("--listen")
            .tag("--port,-p")
            .help("The port.");

        assert_eq!(field.name(), "port");
        assert_eq!(field.tag_str(), Some("--port,-p"));
        assert_eq!(field.help_str(), Some("The port."));
        assert!(!field.is_embedded());
        assert_eq!(field.type_info().name(), "u16");
    }
}
