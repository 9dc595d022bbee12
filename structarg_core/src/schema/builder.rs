use thiserror::Error;

use crate::api::{FieldShape, Shape, TypeKind};
use crate::constant::*;
use crate::model::{CommandId, FieldPath, OptionKind, SpecId};
use crate::schema::command::{CommandNode, Schema, ROOT};
use crate::schema::spec::{admit, OptionSpec};
use crate::schema::tag::{parse_tag, TagKey};

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// A defect in the annotations or types of a destination record.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum Defect {
    /// A name with three or more leading hyphens (ex: `---port`).
    #[error("{record}.{field}: too many hyphens")]
    TooManyHyphens {
        /// The record declaring the field.
        record: &'static str,
        /// The offending field.
        field: &'static str,
    },
    /// A short name that isn't exactly one character (ex: `-pt`).
    #[error("{record}.{field}: short arguments must be one character only")]
    ShortNameLength {
        /// The record declaring the field.
        record: &'static str,
        /// The offending field.
        field: &'static str,
    },
    /// A tag key that isn't understood.
    #[error("unrecognized tag '{key}' on field {record}.{field}")]
    UnrecognizedTag {
        /// The record declaring the field.
        record: &'static str,
        /// The offending field.
        field: &'static str,
        /// The offending key.
        key: String,
    },
    /// A field whose type cannot be written from the Cli.
    #[error("{record}.{field}: {type_name} fields are not supported")]
    UnsupportedType {
        /// The record declaring the field.
        record: &'static str,
        /// The offending field.
        field: &'static str,
        /// The field type.
        type_name: &'static str,
    },
    /// An embedded field that isn't a record.
    #[error("{record}.{field}: only records may be embedded, not {type_name}")]
    NotEmbeddable {
        /// The record declaring the field.
        record: &'static str,
        /// The offending field.
        field: &'static str,
        /// The field type.
        type_name: &'static str,
    },
    /// A subcommand field that isn't optional.
    #[error("subcommands must be Option<..> of a record but {path} is a {type_name}")]
    NotPointer {
        /// The subcommand field.
        path: FieldPath,
        /// The field type.
        type_name: &'static str,
    },
    /// A subcommand field that is optional, but not of a record.
    #[error("subcommands must be Option<..> of a record but {path} is an Option of {type_name}")]
    NotRecord {
        /// The subcommand field.
        path: FieldPath,
        /// The optional type.
        type_name: &'static str,
    },
    /// A command with both positional arguments and subcommands.
    #[error("{command} cannot have both subcommands and positional arguments")]
    PositionalAndSubcommand {
        /// The offending command.
        command: String,
    },
}

/// Every defect found while building a [`Schema`], one per line.
#[derive(Debug, Error)]
#[error("{}", join_defects(.defects))]
pub struct BuildError {
    defects: Vec<Defect>,
}

impl BuildError {
    /// The defects, in the order they were found.
    pub fn defects(&self) -> &[Defect] {
        &self.defects
    }
}

fn join_defects(defects: &[Defect]) -> String {
    defects
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<String>>()
        .join("\n")
}

/// Derives a [`Schema`] from the shapes of the destination records.
///
/// Every field is visited, so a single build reports all the defects at once.
///
/// ### Example
/// ```
/// # use structarg_core as structarg;
/// use structarg::{FieldShape, Reflect, SchemaBuilder, Shape};
///
/// let shape = Shape::new(
///     "Arguments",
///     vec![
///         FieldShape::new("max_depth", u32::type_info()).tag("-d,required"),
///         FieldShape::new("paths", <Vec<String>>::type_info()).tag("positional"),
///     ],
/// );
/// let schema = SchemaBuilder::new("program").root(&shape).build().unwrap();
/// let longs: Vec<&str> = schema.specs().map(|(_, spec)| spec.long()).collect();
/// assert_eq!(longs, vec!["max-depth", "paths"]);
/// ```
pub struct SchemaBuilder {
    commands: Vec<CommandNode>,
    specs: Vec<OptionSpec>,
    roots: usize,
    defects: Vec<Defect>,
}

impl SchemaBuilder {
    /// Start a schema for the program `program`.
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            commands: vec![CommandNode::new(program, None, None)],
            specs: Vec::default(),
            roots: 0,
            defects: Vec::default(),
        }
    }

    /// Add a destination record.
    /// Its options and subcommands are merged into the program's root command.
    ///
    /// Destination records are numbered in the order they are added.
    pub fn root(mut self, shape: &Shape) -> Self {
        let path = FieldPath::root(self.roots);
        self.roots += 1;
        #[cfg(feature = "tracing_debug")]
        {
            debug!("Visiting destination {path} ({}).", shape.name());
        }
        self.visit(ROOT, &path, shape);
        self
    }

    /// Finish the schema.
    pub fn build(mut self) -> Result<Schema, BuildError> {
        self.check_exclusive(ROOT);

        if self.defects.is_empty() {
            Ok(Schema {
                commands: self.commands,
                specs: self.specs,
                roots: self.roots,
            })
        } else {
            #[cfg(feature = "tracing_debug")]
            {
                debug!("Schema has {} defect(s).", self.defects.len());
            }
            Err(BuildError {
                defects: self.defects,
            })
        }
    }

    fn visit(&mut self, command: CommandId, path: &FieldPath, shape: &Shape) {
        for field in shape.fields() {
            if field.tag_str() == Some(IGNORE_TAG) {
                continue;
            }

            // Embedded records are expanded in place, under the same path prefix.
            if field.is_embedded() {
                match field.type_info().kind() {
                    TypeKind::Record(describe) => self.visit(command, path, &describe()),
                    _ => self.defects.push(Defect::NotEmbeddable {
                        record: shape.name(),
                        field: field.name(),
                        type_name: field.type_info().name(),
                    }),
                }
                continue;
            }

            self.field(command, path, shape.name(), field);
        }
    }

    fn field(
        &mut self,
        command: CommandId,
        path: &FieldPath,
        record: &'static str,
        field: &FieldShape,
    ) {
        let field_path = path.child(field.name());
        let mut spec = OptionSpec::new(
            field_path.clone(),
            default_name(field.name()),
            field.type_info().clone(),
        );
        spec.help = field.help_str().map(str::to_string);
        let mut subcommand: Option<String> = None;

        if let Some(tag) = field.tag_str().filter(|tag| !tag.is_empty()) {
            for key in parse_tag(tag) {
                match key {
                    TagKey::TooManyHyphens => {
                        self.defects.push(Defect::TooManyHyphens {
                            record,
                            field: field.name(),
                        });
                    }
                    TagKey::Long(long) => spec.long = long.to_string(),
                    TagKey::Short(short) => {
                        let mut chars = short.chars();

                        match (chars.next(), chars.next()) {
                            (Some(single), None) => spec.short = Some(single),
                            _ => {
                                self.defects.push(Defect::ShortNameLength {
                                    record,
                                    field: field.name(),
                                });
                                return;
                            }
                        }
                    }
                    TagKey::Required => spec.required = true,
                    TagKey::Positional => spec.kind = OptionKind::Positional,
                    TagKey::Separate => spec.separate = true,
                    TagKey::Help(help) => spec.help = Some(help.to_string()),
                    TagKey::Env(name) => {
                        spec.env = Some(match name {
                            Some(name) => name.to_string(),
                            None => field.name().to_uppercase(),
                        });
                    }
                    TagKey::Subcommand(name) => {
                        subcommand = Some(match name {
                            Some(name) => name.to_string(),
                            None => default_name(field.name()),
                        });
                    }
                    TagKey::Unrecognized(key) => {
                        self.defects.push(Defect::UnrecognizedTag {
                            record,
                            field: field.name(),
                            key: key.to_string(),
                        });
                        return;
                    }
                }
            }
        }

        if let Some(name) = subcommand {
            self.subcommand(command, field_path, name, field);
            return;
        }

        // Checked here, rather than when the field is written, so that a program with an invalid destination always fails.
        match admit(field.type_info()) {
            Some(admission) => {
                spec.boolean = admission.boolean;
                spec.multiplicity = admission.multiplicity;
                #[cfg(feature = "tracing_debug")]
                {
                    debug!(
                        "Option {} at {}: {:?} {}.",
                        spec.display_name(),
                        spec.path,
                        spec.kind,
                        spec.multiplicity
                    );
                }
                let id = SpecId(self.specs.len());
                self.specs.push(spec);
                self.commands[command.0].specs.push(id);
            }
            None => {
                self.defects.push(Defect::UnsupportedType {
                    record,
                    field: field.name(),
                    type_name: field.type_info().name(),
                });
            }
        }
    }

    fn subcommand(
        &mut self,
        parent: CommandId,
        path: FieldPath,
        name: String,
        field: &FieldShape,
    ) {
        let type_info = field.type_info();
        let pointee = match type_info.pointee() {
            Some(pointee) => pointee,
            None => {
                self.defects.push(Defect::NotPointer {
                    path,
                    type_name: type_info.name(),
                });
                return;
            }
        };
        let describe = match pointee.kind() {
            TypeKind::Record(describe) => *describe,
            _ => {
                self.defects.push(Defect::NotRecord {
                    path,
                    type_name: pointee.name(),
                });
                return;
            }
        };

        #[cfg(feature = "tracing_debug")]
        {
            debug!("Subcommand {name} at {path}.");
        }
        let id = CommandId(self.commands.len());
        let mut node = CommandNode::new(name, Some(path.clone()), Some(parent));
        node.help = field.help_str().map(str::to_string);
        self.commands.push(node);
        self.commands[parent.0].children.push(id);
        self.visit(id, &path, &describe());
        self.check_exclusive(id);
    }

    fn check_exclusive(&mut self, command: CommandId) {
        let node = &self.commands[command.0];
        let positional = node
            .specs
            .iter()
            .any(|spec_id| self.specs[spec_id.0].is_positional());

        if positional && !node.children.is_empty() {
            self.defects.push(Defect::PositionalAndSubcommand {
                command: node.name.clone(),
            });
        }
    }
}

fn default_name(field: &str) -> String {
    field.to_lowercase().replace('_', "-")
}
