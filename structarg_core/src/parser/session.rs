use std::collections::HashSet;

use crate::api::Record;
use crate::constant::*;
use crate::matcher::*;
use crate::model::{CommandId, SpecId};
use crate::parser::base::{resolve, ParseError};
use crate::parser::environment::{split_csv, Environment};
use crate::schema::{CommandNode, Schema, ROOT};

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// One interpretation of a token stream against a [`Schema`].
///
/// The session holds all the per-parse state (the active command, the options in scope, and which options were supplied), so the schema itself is never mutated.
/// Values are written into the destination records as they are interpreted.
///
/// ### Example
/// ```
/// # use structarg_core as structarg;
/// use std::collections::HashMap;
/// use structarg::{FieldShape, ParseSession, Record, Reflect, SchemaBuilder, Shape, Value};
///
/// #[derive(Default)]
/// struct Arguments {
///     count: i32,
/// }
///
/// impl Record for Arguments {
///     fn describe() -> Shape {
///         Shape::new("Arguments", vec![FieldShape::new("count", i32::type_info())])
///     }
///
///     fn shape(&self) -> Shape {
///         Self::describe()
///     }
///
///     fn field_mut(&mut self, name: &str) -> Option<&mut dyn Value> {
///         match name {
///             "count" => Some(&mut self.count),
///             _ => None,
///         }
///     }
/// }
///
/// let schema = SchemaBuilder::new("program")
///     .root(&Arguments::describe())
///     .build()
///     .unwrap();
/// let mut arguments = Arguments::default();
/// let mut roots: Vec<&mut dyn Record> = vec![&mut arguments];
/// let mut session = ParseSession::new(&schema, &mut roots);
/// session
///     .run(&["--count", "-5"], &HashMap::<String, String>::default())
///     .unwrap();
/// assert_eq!(arguments.count, -5);
/// ```
pub struct ParseSession<'s, 'r, 'ap> {
    schema: &'s Schema,
    roots: &'r mut [&'ap mut dyn Record],
    command: CommandId,
    active: Vec<SpecId>,
    present: HashSet<SpecId>,
    // Options supplied on the Cli; a multi value destination is truncated on its first occurrence only.
    occurred: HashSet<SpecId>,
}

impl<'s, 'r, 'ap> ParseSession<'s, 'r, 'ap> {
    /// Start a session writing into `roots`, which must line up with the records the schema was built from.
    pub fn new(schema: &'s Schema, roots: &'r mut [&'ap mut dyn Record]) -> Self {
        Self {
            schema,
            roots,
            command: ROOT,
            active: schema.root().specs().to_vec(),
            present: HashSet::default(),
            occurred: HashSet::default(),
        }
    }

    /// The last command entered (the root command, until a subcommand is interpreted).
    pub fn command(&self) -> &'s CommandNode {
        self.schema.command(self.command)
    }

    /// The identity of the last command entered.
    pub fn command_id(&self) -> CommandId {
        self.command
    }

    /// The options in scope: those of the root and of every subcommand entered.
    pub fn active(&self) -> &[SpecId] {
        &self.active
    }

    /// Whether the option `spec_id` was supplied, from either the Cli or the environment.
    pub fn was_present(&self, spec_id: SpecId) -> bool {
        self.present.contains(&spec_id)
    }

    /// Interpret `tokens` (and then `environment`), writing the values into the destination records.
    ///
    /// Environment variables are captured before the tokens, so that the Cli takes precedence.
    /// Interpretation stops at the first error.
    pub fn run(
        &mut self,
        tokens: &[&str],
        environment: &impl Environment,
    ) -> Result<(), ParseError> {
        if self.roots.len() != self.schema.destinations() {
            return Err(ParseError::Destinations {
                expected: self.schema.destinations(),
                received: self.roots.len(),
            });
        }

        let schema = self.schema;
        self.command = ROOT;
        self.active = schema.root().specs().to_vec();
        self.present.clear();
        self.occurred.clear();
        self.capture_environment(schema.root().specs(), environment)?;

        let mut all_positional = false;
        let mut positionals: Vec<&str> = Vec::default();
        // An explicit index, since an option may consume the tokens that follow it.
        let mut index = 0;

        while index < tokens.len() {
            let token = tokens[index];
            index += 1;

            if token == END_OF_OPTIONS {
                all_positional = true;
                continue;
            }

            if all_positional || !is_flag(token) {
                // A command has either subcommands or positionals, never both.
                if !schema.has_subcommands(self.command) {
                    positionals.push(token);
                    continue;
                }

                match schema.find_subcommand(self.command, token) {
                    Some(subcommand) => self.enter(subcommand, environment)?,
                    None => return Err(ParseError::InvalidSubcommand(token.to_string())),
                }

                continue;
            }

            match token {
                HELP_SHORT | HELP_LONG => return Err(ParseError::Help),
                VERSION_LONG => return Err(ParseError::Version),
                _ => {}
            };

            let (name, inline) = split_flag(token);
            let spec_id = find_option(schema, &self.active, name)
                .ok_or_else(|| ParseError::UnknownArgument(token.to_string()))?;
            let spec = schema.spec(spec_id);
            self.present.insert(spec_id);

            if spec.is_multiple() {
                let mut values: Vec<&str> = Vec::default();

                match inline {
                    Some(value) => values.push(value),
                    None => {
                        while let Some(next) = tokens.get(index).filter(|next| is_value(next)) {
                            values.push(*next);
                            index += 1;

                            if spec.is_separate() {
                                break;
                            }
                        }
                    }
                }

                let truncate = self.occurred.insert(spec_id);
                #[cfg(feature = "tracing_debug")]
                {
                    debug!("Option {token} takes {values:?} (truncate={truncate}).");
                }
                resolve(self.roots, spec.path())
                    .set_many(&values, truncate)
                    .map_err(|source| ParseError::InvalidValue {
                        argument: token.to_string(),
                        source,
                    })?;
                continue;
            }

            let value = match inline {
                Some(value) => value,
                None if spec.is_boolean() => "true",
                None => match tokens.get(index) {
                    Some(next) if accepts_value(spec, next) => {
                        index += 1;
                        *next
                    }
                    _ => return Err(ParseError::MissingValue(token.to_string())),
                },
            };

            #[cfg(feature = "tracing_debug")]
            {
                debug!("Option {token} takes '{value}'.");
            }
            resolve(self.roots, spec.path())
                .set(value)
                .map_err(|source| ParseError::InvalidValue {
                    argument: token.to_string(),
                    source,
                })?;
        }

        self.drain_positionals(&positionals)?;

        for spec_id in &self.active {
            let spec = schema.spec(*spec_id);

            if spec.is_required() && !self.present.contains(spec_id) {
                return Err(ParseError::MissingRequired(spec.display_name()));
            }
        }

        Ok(())
    }

    fn enter(
        &mut self,
        command: CommandId,
        environment: &impl Environment,
    ) -> Result<(), ParseError> {
        let schema = self.schema;
        let node = schema.command(command);
        let path = match node.path() {
            Some(path) => path,
            None => unreachable!("internal error - subcommand '{}' has no destination", node.name()),
        };
        #[cfg(feature = "tracing_debug")]
        {
            debug!("Entering subcommand {} at {path}.", schema.full_name(command));
        }

        if !resolve(self.roots, path).instantiate() {
            unreachable!("internal error - subcommand destination {path} must be optional");
        }

        self.active.extend_from_slice(node.specs());
        self.command = command;
        // Only the subcommand's own options are captured from the environment.
        self.capture_environment(node.specs(), environment)
    }

    fn capture_environment(
        &mut self,
        specs: &[SpecId],
        environment: &impl Environment,
    ) -> Result<(), ParseError> {
        let schema = self.schema;

        for spec_id in specs {
            let spec = schema.spec(*spec_id);
            let variable = match spec.env() {
                Some(variable) => variable,
                None => continue,
            };
            let value = match environment.lookup(variable).map_err(|source| {
                ParseError::UnreadableEnvironment {
                    variable: variable.to_string(),
                    source,
                }
            })? {
                Some(value) => value,
                None => continue,
            };
            #[cfg(feature = "tracing_debug")]
            {
                debug!("Environment {variable} supplies {}.", spec.display_name());
            }

            if spec.is_multiple() {
                let values = split_csv(&value).map_err(|source| ParseError::EnvironmentCsv {
                    variable: variable.to_string(),
                    source,
                })?;
                let values: Vec<&str> = values.iter().map(String::as_str).collect();
                resolve(self.roots, spec.path())
                    .set_many(&values, true)
                    .map_err(|source| ParseError::InvalidEnvironment {
                        variable: variable.to_string(),
                        source,
                    })?;
            } else {
                resolve(self.roots, spec.path())
                    .set(&value)
                    .map_err(|source| ParseError::InvalidEnvironment {
                        variable: variable.to_string(),
                        source,
                    })?;
            }

            self.present.insert(*spec_id);
        }

        Ok(())
    }

    fn drain_positionals(&mut self, positionals: &[&str]) -> Result<(), ParseError> {
        let schema = self.schema;
        let mut remaining = positionals;

        for spec_id in &self.active {
            let spec = schema.spec(*spec_id);

            if !spec.is_positional() {
                continue;
            }

            if remaining.is_empty() {
                break;
            }

            self.present.insert(*spec_id);
            let destination = resolve(self.roots, spec.path());
            let result = if spec.is_multiple() {
                let result = destination.set_many(remaining, true);
                remaining = &[];
                result
            } else {
                let result = destination.set(remaining[0]);
                remaining = &remaining[1..];
                result
            };

            result.map_err(|source| ParseError::InvalidValue {
                argument: spec.long().to_string(),
                source,
            })?;
        }

        match remaining.first() {
            Some(excess) => Err(ParseError::TooManyPositionals(excess.to_string())),
            None => Ok(()),
        }
    }
}
