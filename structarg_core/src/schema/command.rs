use crate::model::{CommandId, FieldPath, SpecId};
use crate::schema::spec::OptionSpec;

/// A node in the tree of the program and its subcommands.
#[derive(Debug, Clone)]
pub struct CommandNode {
    pub(crate) name: String,
    pub(crate) help: Option<String>,
    pub(crate) path: Option<FieldPath>,
    pub(crate) specs: Vec<SpecId>,
    pub(crate) children: Vec<CommandId>,
    pub(crate) parent: Option<CommandId>,
}

impl CommandNode {
    pub(crate) fn new(
        name: impl Into<String>,
        path: Option<FieldPath>,
        parent: Option<CommandId>,
    ) -> Self {
        Self {
            name: name.into(),
            help: None,
            path,
            specs: Vec::default(),
            children: Vec::default(),
            parent,
        }
    }

    /// The command name: the program name at the root, otherwise the subcommand name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The help message, if any.
    pub fn help(&self) -> Option<&str> {
        self.help.as_deref()
    }

    /// The destination field of this subcommand.
    /// The root command has no destination field.
    pub fn path(&self) -> Option<&FieldPath> {
        self.path.as_ref()
    }

    /// The options declared directly on this command, in declaration order.
    pub fn specs(&self) -> &[SpecId] {
        &self.specs
    }

    /// The subcommands of this command, in declaration order.
    pub fn children(&self) -> &[CommandId] {
        &self.children
    }

    /// The enclosing command, if any.
    pub fn parent(&self) -> Option<CommandId> {
        self.parent
    }
}

/// The complete command tree, produced by the [`SchemaBuilder`](crate::SchemaBuilder).
///
/// Commands and options live in flat arenas and refer to each other by [`CommandId`]/[`SpecId`].
/// A schema holds no parse state, so it may be shared across any number of [`ParseSession`](crate::ParseSession)s.
#[derive(Debug, Clone)]
pub struct Schema {
    pub(crate) commands: Vec<CommandNode>,
    pub(crate) specs: Vec<OptionSpec>,
    pub(crate) roots: usize,
}

pub(crate) const ROOT: CommandId = CommandId(0);

impl Schema {
    /// The identity of the root command.
    pub fn root_id(&self) -> CommandId {
        ROOT
    }

    /// The root command, representing the whole program.
    pub fn root(&self) -> &CommandNode {
        self.command(ROOT)
    }

    /// The program name.
    pub fn program(&self) -> &str {
        self.root().name()
    }

    /// The number of destination records this schema was built from.
    pub fn destinations(&self) -> usize {
        self.roots
    }

    /// Look up a command by its identity.
    pub fn command(&self, id: CommandId) -> &CommandNode {
        &self.commands[id.0]
    }

    /// Look up an option by its identity.
    pub fn spec(&self, id: SpecId) -> &OptionSpec {
        &self.specs[id.0]
    }

    /// Every option of the schema, in declaration order.
    pub fn specs(&self) -> impl Iterator<Item = (SpecId, &OptionSpec)> {
        self.specs
            .iter()
            .enumerate()
            .map(|(index, spec)| (SpecId(index), spec))
    }

    /// The options declared directly on the command `id`.
    pub fn specs_of(&self, id: CommandId) -> impl Iterator<Item = (SpecId, &OptionSpec)> {
        self.command(id)
            .specs
            .iter()
            .map(move |spec_id| (*spec_id, self.spec(*spec_id)))
    }

    /// The subcommands of the command `id`.
    pub fn children_of(&self, id: CommandId) -> impl Iterator<Item = (CommandId, &CommandNode)> {
        self.command(id)
            .children
            .iter()
            .map(move |child_id| (*child_id, self.command(*child_id)))
    }

    /// The enclosing command of `id`, if any.
    pub fn parent_of(&self, id: CommandId) -> Option<&CommandNode> {
        self.command(id).parent.map(|parent| self.command(parent))
    }

    /// The space separated chain of command names leading to `id` (ex: `program serve`).
    pub fn full_name(&self, id: CommandId) -> String {
        let mut names = vec![self.command(id).name()];
        let mut current = self.command(id).parent;

        while let Some(parent) = current {
            names.push(self.command(parent).name());
            current = self.command(parent).parent;
        }

        names.reverse();
        names.join(" ")
    }

    pub(crate) fn find_subcommand(&self, id: CommandId, name: &str) -> Option<CommandId> {
        self.children_of(id)
            .find(|(_, child)| child.name == name)
            .map(|(child_id, _)| child_id)
    }

    pub(crate) fn has_subcommands(&self, id: CommandId) -> bool {
        !self.command(id).children.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::Reflect;

    fn schema() -> Schema {
        let mut root = CommandNode::new("program", None, None);
        let mut serve = CommandNode::new(
            "serve",
            Some(FieldPath::root(0).child("serve")),
            Some(ROOT),
        );
        let mut stop = CommandNode::new(
            "stop",
            Some(FieldPath::root(0).child("serve").child("stop")),
            Some(CommandId(1)),
        );
        root.children.push(CommandId(1));
        root.specs.push(SpecId(0));
        serve.children.push(CommandId(2));
        serve.specs.push(SpecId(1));
        stop.help = Some("Stop serving.".to_string());

        Schema {
            commands: vec![root, serve, stop],
            specs: vec![
                OptionSpec::new(
                    FieldPath::root(0).child("verbose"),
                    "verbose",
                    bool::type_info(),
                ),
                OptionSpec::new(
                    FieldPath::root(0).child("serve").child("port"),
                    "port",
                    u16::type_info(),
                ),
            ],
            roots: 1,
        }
    }

    #[test]
    fn navigation() {
        // Setup
        let schema = schema();

        // Verify
        assert_eq!(schema.program(), "program");
        assert_eq!(schema.destinations(), 1);
        assert!(schema.parent_of(schema.root_id()).is_none());
        assert_eq!(schema.parent_of(CommandId(2)).unwrap().name(), "serve");
        assert_eq!(schema.full_name(CommandId(2)), "program serve stop");
        assert_eq!(schema.command(CommandId(2)).help(), Some("Stop serving."));
        assert!(schema.root().path().is_none());
    }

    #[test]
    fn find_subcommand() {
        // Setup
        let schema = schema();

        // Verify
        assert_eq!(schema.find_subcommand(ROOT, "serve"), Some(CommandId(1)));
        assert_eq!(schema.find_subcommand(ROOT, "stop"), None);
        assert_eq!(schema.find_subcommand(CommandId(1), "stop"), Some(CommandId(2)));
        assert!(schema.has_subcommands(CommandId(1)));
        assert!(!schema.has_subcommands(CommandId(2)));
    }

    #[test]
    fn specs_of() {
        // Setup
        let schema = schema();

        // Execute
        let longs: Vec<&str> = schema
            .specs_of(CommandId(1))
            .map(|(_, spec)| spec.long())
            .collect();

        // Verify
        assert_eq!(longs, vec!["port"]);
        assert_eq!(schema.specs().count(), 2);
        assert!(schema.specs_of(CommandId(2)).next().is_none());
    }
}
