//! `structarg` is a struct driven command line parser for Rust.
//!
//! Describe the Cli with plain structs (the *destination records*), annotate their fields, and `structarg` fills them in from the command line and the environment.
//! Specifically, `structarg` attempts to prioritize the following design concerns:
//! * *The struct is the Cli*:
//! Options, positionals, and subcommands are all derived from the fields of the destination records and their annotation tags.
//! There is no separate Cli definition to keep in sync.
//! * *Type driven coercion*:
//! The user should not call any `&str -> T` conversion functions directly.
//! The field type decides how a token is coerced, and whether the option takes one value or many.
//! * *Environment aware*:
//! Any option may be backed by an environment variable, with the command line taking precedence.
//! * *Sub-command paradigm*:
//! An optional record field may be declared a subcommand, which is allocated only when the user selects it.
//! * *Configuration errors up front*:
//! Every defect in the destination records is reported at once, when the parser is built, rather than when a user happens to reach it.
//! * *No output*:
//! The parser never prints and never exits.
//! Help requests, version requests, and errors are returned to the caller, who decides how to render them.
//!
//! # Usage
//! This page includes a few demos on using `structarg`.
//! More demos are outlined in [the source](https://github.com/structarg/structarg/tree/main/demos).
//!
//! via [derive Api](./derive/index.html):
//! ```no_run
#![doc = include_str!("../demos/demo_server.rs")]
//! ```
//!
//! ```console
//! $ demo_server serve -p 8080 --host a --host b
//! Arguments {
//!     verbose: false,
//!     serve: Some(
//!         Serve {
//!             port: 8080,
//!             hosts: [
//!                 "a",
//!                 "b",
//!             ],
//!         },
//!     ),
//!     stop: None,
//! }
//!
//! $ DEMO_PORT=x demo_server serve
//! error: error processing environment variable DEMO_PORT: cannot convert 'x' to u16
//! usage: demo_server serve
//!   --port      The port to listen on.
//!   --host      A host to serve (repeatable).
//! ```
//!
//! or equivalently, by writing the record by hand (this page):
//! ```no_run
#![doc = include_str!("../demos/demo_summer.rs")]
//! ```
//!
//! # Destination Records
//! A destination record implements [`Record`]: it describes its own [`Shape`] (the fields, their types, and their tags) and grants mutable access to each field by name.
//! Typically this is derived via `#[derive(Record)]`.
//! A [`Parser`] may be given more than one destination record; their options are merged into the same program.
//!
//! Each field type is described by its [`TypeInfo`], which decides how the field appears on the Cli:
//! ```console
//! Type                           | Option
//! ------------------------------------------------------------------------
//! bool, Option<bool>             | --NAME (a flag, no value required)
//! T, Option<T>, Option<Box<T>>   | --NAME VALUE
//! Vec<T>, HashSet<T>, ..         | --NAME VALUE [...]
//! Option<R>, Option<Box<R>>      | a subcommand (when tagged `subcommand`)
//! R (with `embed`)               | the fields of R, as though declared in place
//! HashMap<K, V>, ..              | unsupported (unless tagged `-`)
//! ```
//! Where `T` is any of the built-in scalars (integers, floats, `char`, `String`, `OsString`, `PathBuf`, and the network addresses), or a type wired with [`unmarshal_value!`] or [`from_str_value!`].
//! `R` is another destination record.
//!
//! ### Tags
//! A field tag is a comma separated list of keys (ex: `"--port,-p,required,env:PORT"`).
//! * `--NAME`: the long name (defaults to the field name, lower cased with `_` as `-`).
//! * `-N`: the short name, exactly one character.
//! * `required`: the option must be supplied, on either the Cli or the environment.
//! * `positional`: the option is matched by position instead of by name.
//! * `separate`: a multi value option takes exactly one value per occurrence (ex: `--host a --host b`).
//! * `env` or `env:NAME`: back the option with an environment variable (defaults to the upper cased field name).
//! * `subcommand` or `subcommand:NAME`: the field is a subcommand (the name defaults as the long name does).
//! * `help:TEXT`: the help message.
//! * `-`: the field is ignored.
//!
//! ### Initials
//! `structarg` has nothing to do with default values; the initial value of each field is simply kept until the Cli or the environment overwrites it.
//! A multi value field is cleared the first time its option is supplied, so that the supplied values replace (rather than extend) the initial ones.
//!
//! # Cli Semantics
//! `structarg` interprets the Cli tokens according to the following set of rules.
//!
//! * Environment variables are read first (for the root when parsing begins, and for each subcommand when it is entered), so that the Cli takes precedence.
//! The value of a multi value variable is read as a single CSV record (ex: `a,"b,c"`).
//! * Options are matched by the `--NAME` (or short name `-N`) specifier, from amongst the options of the root and every subcommand entered so far.
//! A value may be attached with `=` (ex: `--count=3`); only the first `=` is a separator.
//! * A single value option takes the following token as its value, unless that token is shaped like a flag.
//! The exception is a negative number for a numeric option (ex: `--count -5`).
//! * A multi value option takes the following tokens greedily, up to the next flag.
//! * A token that isn't a flag is either a positional value or a subcommand; a command has one or the other, never both.
//! * `--` marks the end of options: every subsequent token is positional.
//! * `-h`/`--help` and `--version` are reported as [`ParseError::Help`] and [`ParseError::Version`].
//! A help request anywhere before the first `--` takes precedence over any other error.
//!
//! # Features
//! * `tracing_debug`: Emit `tracing` debug events while building the schema and interpreting tokens.
pub mod derive;
pub use structarg_core::*;
pub use structarg_derive::Record;
