use structarg::{Config, FieldShape, ParseError, Parser, Record, Reflect, Shape, Value};

// A record written by hand, as the derive macro would write it.
#[derive(Default)]
struct Summer {
    items: Vec<u32>,
}

impl Record for Summer {
    fn describe() -> Shape {
        Shape::new(
            "Summer",
            vec![FieldShape::new("items", <Vec<u32>>::type_info())
                .tag("positional,required")
                .help("The items to sum.")],
        )
    }

    fn shape(&self) -> Shape {
        Self::describe()
    }

    fn field_mut(&mut self, name: &str) -> Option<&mut dyn Value> {
        match name {
            "items" => Some(&mut self.items),
            _ => None,
        }
    }
}

fn main() {
    let mut summer = Summer::default();
    let mut parser = match Parser::new(Config::default().program("summer"), vec![&mut summer]) {
        Ok(parser) => parser,
        Err(error) => {
            eprintln!("{error}");
            std::process::exit(2);
        }
    };

    match parser.parse() {
        Ok(()) => {}
        Err(ParseError::Help) => {
            println!("usage: summer ITEM [...]");
            std::process::exit(0);
        }
        Err(error) => {
            eprintln!("Parse error: {error}");
            std::process::exit(2);
        }
    }

    drop(parser);
    println!("Sum: {}", summer.items.iter().sum::<u32>());
}
