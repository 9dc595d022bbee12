use std::env;
use std::path::Path;

use crate::api::Record;
use crate::constant::*;
use crate::model::CommandId;
use crate::parser::base::ParseError;
use crate::parser::environment::{Environment, ProcessEnvironment};
use crate::parser::session::ParseSession;
use crate::schema::{BuildError, CommandNode, Schema, SchemaBuilder, ROOT};

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// Configuration of the [`Parser`].
#[derive(Debug, Default, Clone)]
pub struct Config {
    /// The program name.
    /// Defaults to the file name of the executable, or `program` when that is unavailable.
    pub program: Option<String>,
}

impl Config {
    /// Configure the program name.
    pub fn program(mut self, program: impl Into<String>) -> Self {
        self.program.replace(program.into());
        self
    }
}

/// The configured command line parser.
///
/// Borrows the destination records for its lifetime `'ap`, and writes the parsed values into them.
/// The parser neither prints nor exits: help, version, and errors are all returned as a [`ParseError`] for the caller to render.
pub struct Parser<'ap> {
    schema: Schema,
    roots: Vec<&'ap mut dyn Record>,
    version: Option<String>,
    description: Option<String>,
    last_command: CommandId,
}

impl<'ap> std::fmt::Debug for Parser<'ap> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Parser{..}").finish()
    }
}

impl<'ap> Parser<'ap> {
    /// Build a parser over the destination records `roots`.
    ///
    /// Fails with every defect of the destination records' shapes.
    pub fn new(config: Config, roots: Vec<&'ap mut dyn Record>) -> Result<Self, BuildError> {
        let program = config
            .program
            .or_else(executable_name)
            .unwrap_or_else(|| DEFAULT_PROGRAM.to_string());
        let mut builder = SchemaBuilder::new(program);
        let mut version = None;
        let mut description = None;

        for root in &roots {
            builder = builder.root(&root.shape());

            if let Some(root_version) = root.version() {
                version.replace(root_version);
            }

            if let Some(root_description) = root.description() {
                description.replace(root_description);
            }
        }

        let schema = builder.build()?;
        #[cfg(feature = "tracing_debug")]
        {
            debug!(
                "Parser for {} with {} option(s).",
                schema.program(),
                schema.specs().count()
            );
        }

        Ok(Self {
            schema,
            roots,
            version,
            description,
            last_command: ROOT,
        })
    }

    /// Run the parser against the input tokens, with `environment` backing the `env` options.
    ///
    /// A help request (`-h` or `--help`) takes precedence over any other error, unless it follows the end of options marker (`--`).
    pub fn parse_tokens(
        &mut self,
        tokens: &[&str],
        environment: &impl Environment,
    ) -> Result<(), ParseError> {
        let mut session = ParseSession::new(&self.schema, &mut self.roots);
        let result = session.run(tokens, environment);
        self.last_command = session.command_id();

        match result {
            Err(_) if help_requested(tokens) => Err(ParseError::Help),
            result => result,
        }
    }

    /// Run the parser against the Cli [`env::args`] and the process environment.
    pub fn parse(&mut self) -> Result<(), ParseError> {
        let command_input: Vec<String> = env::args().skip(1).collect();
        self.parse_tokens(
            command_input
                .iter()
                .map(AsRef::as_ref)
                .collect::<Vec<&str>>()
                .as_slice(),
            &ProcessEnvironment,
        )
    }

    /// The last command entered during the most recent parse (the root command before any parse).
    /// Help should be rendered for this command.
    pub fn last_command(&self) -> &CommandNode {
        self.schema.command(self.last_command)
    }

    /// The identity of [`Parser::last_command`].
    pub fn last_command_id(&self) -> CommandId {
        self.last_command
    }

    /// The program version, from the last destination record that reports one.
    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    /// The program description, from the last destination record that reports one.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// The schema derived from the destination records.
    pub fn schema(&self) -> &Schema {
        &self.schema
    }
}

fn executable_name() -> Option<String> {
    let executable = env::args().next()?;
    Path::new(&executable)
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
}

fn help_requested(tokens: &[&str]) -> bool {
    tokens
        .iter()
        .take_while(|token| **token != END_OF_OPTIONS)
        .any(|token| *token == HELP_SHORT || *token == HELP_LONG)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::Defect;
    use crate::test::*;
    use crate::{FieldShape, Reflect, Shape, Value};
    use rstest::rstest;
    use std::collections::HashMap;

    fn no_environment() -> HashMap<&'static str, &'static str> {
        HashMap::default()
    }

    #[test]
    fn parse_tokens_empty() {
        // Setup
        let mut program = Program::default();
        let mut parser = Parser::new(Config::default().program("program"), vec![&mut program]).unwrap();

        // Execute
        parser.parse_tokens(empty::slice(), &no_environment()).unwrap();

        // Verify
        assert_eq!(parser.last_command().name(), "program");
        assert_eq!(parser.schema().program(), "program");
        assert_eq!(parser.version(), Some("program 1.0.0"));
        assert_eq!(parser.description(), Some("A test program."));
    }

    #[test]
    fn parse_tokens() {
        // Setup
        let mut program = Program::default();
        let mut parser = Parser::new(Config::default(), vec![&mut program]).unwrap();

        // Execute
        parser
            .parse_tokens(&["-c", "2", "serve", "--port", "80", "--host", "a"], &no_environment())
            .unwrap();

        // Verify
        assert_eq!(parser.last_command().name(), "serve");
        assert_eq!(
            parser.schema().full_name(parser.last_command_id()),
            format!("{} serve", parser.schema().program())
        );
        drop(parser);
        assert_eq!(program.count, 2);
        let serve = program.serve.unwrap();
        assert_eq!(serve.port, 80);
        assert_eq!(serve.hosts, vec!["a"]);
    }

    #[test]
    fn program_name_default() {
        // Setup
        let mut counter = Counter::default();

        // Execute
        let parser = Parser::new(Config::default(), vec![&mut counter]).unwrap();

        // Verify
        assert!(!parser.schema().program().is_empty());
        assert!(!parser.schema().program().contains('/'));
        assert_eq!(parser.version(), None);
        assert_eq!(parser.description(), None);
    }

    #[test]
    fn build_error() {
        // Setup
        #[derive(Default)]
        struct Broken {
            labels: HashMap<String, String>,
        }

        impl Record for Broken {
            fn describe() -> Shape {
                Shape::new(
                    "Broken",
                    vec![FieldShape::new("labels", <HashMap<String, String>>::type_info())],
                )
            }

            fn shape(&self) -> Shape {
                Self::describe()
            }

            fn field_mut(&mut self, name: &str) -> Option<&mut dyn Value> {
                match name {
                    "labels" => Some(&mut self.labels),
                    _ => None,
                }
            }
        }

        let mut broken = Broken::default();

        // Execute
        let error = Parser::new(Config::default(), vec![&mut broken]).unwrap_err();

        // Verify
        assert_matches!(error.defects(), [Defect::UnsupportedType { field: "labels", .. }]);
    }

    #[rstest]
    #[case(vec!["--unknown", "-h"])]
    #[case(vec!["--unknown", "--help"])]
    #[case(vec!["launch", "--help"])]
    #[case(vec!["--version", "-h"])]
    #[case(vec!["--count", "x", "-h", "--"])]
    fn help_retroactive(#[case] tokens: Vec<&str>) {
        // Setup
        let mut program = Program::default();
        let mut parser = Parser::new(Config::default(), vec![&mut program]).unwrap();

        // Execute
        let error = parser.parse_tokens(&tokens, &no_environment()).unwrap_err();

        // Verify
        assert_matches!(error, ParseError::Help);
    }

    #[rstest]
    #[case(vec!["--unknown", "--", "-h"])]
    #[case(vec!["--", "--unknown", "-h"])]
    fn help_after_end_of_options(#[case] tokens: Vec<&str>) {
        // Setup
        let mut program = Program::default();
        let mut parser = Parser::new(Config::default(), vec![&mut program]).unwrap();

        // Execute
        let error = parser.parse_tokens(&tokens, &no_environment()).unwrap_err();

        // Verify
        assert_matches!(error, ParseError::UnknownArgument(_) | ParseError::InvalidSubcommand(_));
    }

    #[test]
    fn parse_error_keeps_last_command() {
        // Setup
        let mut program = Program::default();
        let mut parser = Parser::new(Config::default(), vec![&mut program]).unwrap();

        // Execute
        let error = parser.parse_tokens(&["serve"], &no_environment()).unwrap_err();

        // Verify
        assert_matches!(error, ParseError::MissingRequired(_));
        assert_eq!(parser.last_command().name(), "serve");
    }

    #[test]
    fn multiple_roots() {
        // Setup
        let mut counter = Counter::default();
        let mut transfer = Transfer::default();
        let mut parser = Parser::new(
            Config::default(),
            vec![&mut counter, &mut transfer],
        )
        .unwrap();

        // Execute
        parser
            .parse_tokens(&["--count", "5", "a", "b"], &no_environment())
            .unwrap();

        // Verify
        drop(parser);
        assert_eq!(counter.count, 5);
        assert_eq!(transfer.source, "a");
    }

    #[rstest]
    #[case(vec!["-h"], true)]
    #[case(vec!["a", "--help"], true)]
    #[case(vec!["--", "-h"], false)]
    #[case(vec!["-x", "--", "--", "-h"], false)]
    #[case(vec!["--hel"], false)]
    #[case(vec![], false)]
    fn help_scan(#[case] tokens: Vec<&str>, #[case] expected: bool) {
        assert_eq!(help_requested(&tokens), expected);
    }
}
