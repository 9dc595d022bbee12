/// One key of a field annotation tag (ex: the `env:PORT` in `"--port,env:PORT"`).
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum TagKey<'t> {
    TooManyHyphens,
    Long(&'t str),
    Short(&'t str),
    Required,
    Positional,
    Separate,
    Help(&'t str),
    Env(Option<&'t str>),
    Subcommand(Option<&'t str>),
    Unrecognized(&'t str),
}

/// Split a comma separated annotation tag into its keys.
pub(crate) fn parse_tag(tag: &str) -> impl Iterator<Item = TagKey<'_>> {
    tag.split(',').map(|item| {
        let item = item.trim_start_matches(' ');
        let (key, value) = match item.split_once(':') {
            Some((key, value)) => (key, Some(value)),
            None => (item, None),
        };
        // An empty value (ex: `env:`) means the same as no value.
        let named = value.filter(|value| !value.is_empty());

        if key.starts_with("---") {
            TagKey::TooManyHyphens
        } else if let Some(long) = key.strip_prefix("--") {
            TagKey::Long(long)
        } else if let Some(short) = key.strip_prefix('-') {
            TagKey::Short(short)
        } else {
            match key {
                "required" => TagKey::Required,
                "positional" => TagKey::Positional,
                "separate" => TagKey::Separate,
                "help" => TagKey::Help(value.unwrap_or_default()),
                "env" => TagKey::Env(named),
                "subcommand" => TagKey::Subcommand(named),
                _ => TagKey::Unrecognized(key),
            }
        }
    })
}
