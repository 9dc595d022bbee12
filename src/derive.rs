//! Derive Api for `structarg` destination records.
//!
//! ### Getting Started
//! Instrument a struct `S` with `#[derive(Default, Record)]`.
//! This generates the [`Record`](../trait.Record.html), [`Value`](../trait.Value.html), and [`Reflect`](../trait.Reflect.html) implementations for `S`, so that `S` may be handed to a [`Parser`](../struct.Parser.html) (or used as a subcommand or embedded record of another destination record).
//!
//! ```no_run
#![doc = include_str!("../demos/demo_server.rs")]
//! ```
//!
//! ### Field Configuration
//! Each field is configured by the `#[arg(..)]` attribute, which takes any combination of:
//! * String literals, which are joined (with `,`) into the field's tag.
//! See [tags](../index.html#tags) for the available keys.
//! * `help = ".."` for the help message.
//! * `embed` to expand the fields of a nested record in place.
//!
//! A field without an attribute becomes an option named after the field.
//!
//! ```ignore
//! #[derive(Default, Record)]
//! struct Arguments {
//!     #[arg("--port,-p", "required", help = "The port.")]
//!     port: u16,
//!     // the above generates:
//!     //  FieldShape::new("port", <u16 as Reflect>::type_info())
//!     //      .tag("--port,-p,required")
//!     //      .help("The port.")
//!
//!     #[arg("env:SERVER_HOSTS")]
//!     hosts: Vec<String>,
//!     // the above generates:
//!     //  FieldShape::new("hosts", <Vec<String> as Reflect>::type_info())
//!     //      .tag("env:SERVER_HOSTS")
//!
//!     #[arg(embed)]
//!     logging: Logging,
//!     // the above generates:
//!     //  FieldShape::new("logging", <Logging as Reflect>::type_info())
//!     //      .embedded()
//!     // assumes: `Logging` is instrumented with `Record`
//!
//!     #[arg("subcommand:halt")]
//!     stop: Option<Stop>,
//!     // the above generates:
//!     //  FieldShape::new("stop", <Option<Stop> as Reflect>::type_info())
//!     //      .tag("subcommand:halt")
//!     // assumes: `Stop` is instrumented with `Default` and `Record`
//!
//!     #[arg("-")]
//!     cache: HashMap<String, String>,
//!     // the above generates:
//!     //  FieldShape::new("cache", TypeInfo::opaque(..))
//!     //      .tag("-")
//!     // the field is neither described nor writable, so its type needn't implement `Reflect`
//! }
//! ```
//!
//! Fields of embedded records are reachable by name from the outer record, unless the outer record declares a field of the same name.
//!
//! ### Record Configuration
//! The struct itself may be configured by `#[arg(..)]`, which takes:
//! * `version = ..`, any `Display` expression reported for `--version`.
//! * `description = ..`, any `Display` expression describing the program.
//!
//! ```ignore
//! #[derive(Default, Record)]
//! #[arg(version = env!("CARGO_PKG_VERSION"), description = "Serve a few hosts.")]
//! struct Arguments {
//!     ..
//! }
//! ```
//!
//! Invalid configurations (ex: an enum, a tuple struct, or an unknown attribute) are reported as compile errors.

pub use structarg_derive::Record;
