/// A sequence of steps locating a destination field.
///
/// The path starts at one of the destination records supplied to the parser (by index), and then walks a chain of field names.
/// Paths are immutable: [`FieldPath::child`] returns a new path and leaves its receiver untouched.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FieldPath {
    root: usize,
    fields: Vec<&'static str>,
}

impl FieldPath {
    /// The path of the destination record at `index`.
    pub fn root(index: usize) -> Self {
        Self {
            root: index,
            fields: Vec::default(),
        }
    }

    /// A new path naming the field `child` under this path.
    pub fn child(&self, child: &'static str) -> Self {
        let mut fields = Vec::with_capacity(self.fields.len() + 1);
        fields.extend_from_slice(&self.fields);
        fields.push(child);
        Self {
            root: self.root,
            fields,
        }
    }

    /// The index of the destination record this path starts from.
    pub fn root_index(&self) -> usize {
        self.root
    }

    /// The chain of field names walked from the destination record.
    pub fn fields(&self) -> &[&'static str] {
        &self.fields
    }
}

impl std::fmt::Display for FieldPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.fields.is_empty() {
            write!(f, "args")
        } else {
            write!(f, "args.{}", self.fields.join("."))
        }
    }
}

/// How an option is located on the Cli.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionKind {
    /// `--NAME` or `-N`.
    Flag,
    /// Matched by position.
    Positional,
}

/// The cardinality of values an option accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Multiplicity {
    /// Precisely one value; later occurrences overwrite earlier ones.
    Single,
    /// Any number of values, accumulated into a sequence.
    Multiple,
}

impl std::fmt::Display for Multiplicity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Stable identity of a [`CommandNode`](crate::CommandNode) inside its [`Schema`](crate::Schema).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CommandId(pub(crate) usize);

/// Stable identity of an [`OptionSpec`](crate::OptionSpec) inside its [`Schema`](crate::Schema).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SpecId(pub(crate) usize);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_display() {
        assert_eq!(FieldPath::root(0).to_string(), "args");
        assert_eq!(FieldPath::root(3).root_index(), 3);
    }

    #[test]
    fn child_display() {
        let path = FieldPath::root(1).child("serve").child("port");
        assert_eq!(path.to_string(), "args.serve.port");
        assert_eq!(path.root_index(), 1);
        assert_eq!(path.fields(), &["serve", "port"]);
    }

    #[test]
    fn child_does_not_alias() {
        // Setup
        let parent = FieldPath::root(0).child("a").child("b");

        // Execute
        let left = parent.child("left");
        let right = parent.child("right");

        // Verify
        assert_eq!(parent.fields(), &["a", "b"]);
        assert_eq!(left.fields(), &["a", "b", "left"]);
        assert_eq!(right.fields(), &["a", "b", "right"]);
    }
}
