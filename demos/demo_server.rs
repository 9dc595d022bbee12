use structarg::{CommandId, Config, ParseError, Parser, Record, Schema};

#[derive(Debug, Default, Record)]
#[arg(
    version = concat!("demo_server ", env!("CARGO_PKG_VERSION")),
    description = "Serve, or stop serving, a few hosts."
)]
struct Arguments {
    #[arg("-v", help = "Log every request.")]
    verbose: bool,
    #[arg("subcommand", help = "Start serving.")]
    serve: Option<Serve>,
    #[arg("subcommand:halt", help = "Stop serving.")]
    stop: Option<Stop>,
}

#[derive(Debug, Default, Record)]
struct Serve {
    #[arg("-p", "required", "env:DEMO_PORT", help = "The port to listen on.")]
    port: u16,
    #[arg("--host,separate", help = "A host to serve (repeatable).")]
    hosts: Vec<String>,
}

#[derive(Debug, Default, Record)]
struct Stop {
    #[arg("-f", help = "Stop without draining.")]
    force: bool,
}

fn main() {
    let mut arguments = Arguments::default();
    let mut parser = match Parser::new(Config::default(), vec![&mut arguments]) {
        Ok(parser) => parser,
        Err(error) => {
            eprintln!("{error}");
            std::process::exit(2);
        }
    };

    match parser.parse() {
        Ok(()) => {}
        Err(ParseError::Help) => {
            if let Some(description) = parser.description() {
                println!("{description}");
            }
            usage(parser.schema(), parser.last_command_id());
            std::process::exit(0);
        }
        Err(ParseError::Version) => {
            println!("{}", parser.version().unwrap_or("unknown"));
            std::process::exit(0);
        }
        Err(error) => {
            eprintln!("error: {error}");
            usage(parser.schema(), parser.last_command_id());
            std::process::exit(2);
        }
    }

    drop(parser);
    println!("{arguments:#?}");
}

fn usage(schema: &Schema, command: CommandId) {
    println!("usage: {}", schema.full_name(command));

    for (_, child) in schema.children_of(command) {
        println!("  {:<12}{}", child.name(), child.help().unwrap_or_default());
    }

    for (_, spec) in schema.specs_of(command) {
        println!(
            "  {:<12}{}",
            spec.display_name(),
            spec.help().unwrap_or_default()
        );
    }
}
