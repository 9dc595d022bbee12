use crate::constant::END_OF_OPTIONS;
use crate::model::SpecId;
use crate::schema::{OptionSpec, Schema};

/// Whether `token` is shaped like a flag (ex: `-v` or `--user`), but not `-` or `--`.
pub(crate) fn is_flag(token: &str) -> bool {
    token.starts_with('-') && !token.trim_start_matches('-').is_empty()
}

/// Whether `token` may be taken as the value of a flag.
/// The end of options marker is never a value.
pub(crate) fn is_value(token: &str) -> bool {
    !is_flag(token) && token != END_OF_OPTIONS
}

/// Split a flag into its name and (if present) its `=` delimited value.
///
///  --initial      => ("initial", None)
///  --initial=..   => ("initial", Some(..))
///  -i=            => ("i", Some(""))
pub(crate) fn split_flag(token: &str) -> (&str, Option<&str>) {
    let name = token.trim_start_matches('-');

    match name.split_once('=') {
        Some((name, value)) => (name, Some(value)),
        None => (name, None),
    }
}

/// Find the flag called `name` amongst the `active` options.
/// Positional options are never matched by name.
pub(crate) fn find_option(schema: &Schema, active: &[SpecId], name: &str) -> Option<SpecId> {
    active
        .iter()
        .copied()
        .find(|spec_id| schema.spec(*spec_id).answers_to(name))
}

/// Whether the single value option `spec` may take `next` as its value.
///
/// A flag shaped token is only taken when it reads as a number of the option's type (ex: `--count -5`).
pub(crate) fn accepts_value(spec: &OptionSpec, next: &str) -> bool {
    is_value(next) || spec.value_type().is_numeric_literal(next)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{Record, Reflect, TypeInfo};
    use crate::model::FieldPath;
    use crate::schema::SchemaBuilder;
    use crate::test::*;
    use rstest::rstest;

    #[rstest]
    #[case("-v", true)]
    #[case("--user", true)]
    #[case("---user", true)]
    #[case("-5", true)]
    #[case("--user=", true)]
    #[case("-", false)]
    #[case("--", false)]
    #[case("---", false)]
    #[case("user", false)]
    #[case("", false)]
    #[case("a-b", false)]
    fn flag_shape(#[case] token: &str, #[case] expected: bool) {
        assert_eq!(is_flag(token), expected);
    }

    #[rstest]
    #[case("--initial", ("initial", None))]
    #[case("--initial=x", ("initial", Some("x")))]
    #[case("--initial=", ("initial", Some("")))]
    #[case("--initial=a=b", ("initial", Some("a=b")))]
    #[case("-i", ("i", None))]
    #[case("-i=5", ("i", Some("5")))]
    #[case("---initial", ("initial", None))]
    fn split(#[case] token: &str, #[case] expected: (&str, Option<&str>)) {
        assert_eq!(split_flag(token), expected);
    }

    #[test]
    fn find() {
        // Setup
        let schema = SchemaBuilder::new("program")
            .root(&Transfer::describe())
            .build()
            .unwrap();
        let active: Vec<SpecId> = schema.specs().map(|(spec_id, _)| spec_id).collect();

        // Execute & Verify
        let recursive = find_option(&schema, &active, "r").unwrap();
        assert_eq!(schema.spec(recursive).long(), "recursive");
        assert_eq!(find_option(&schema, &active, "recursive"), Some(recursive));
        assert_eq!(find_option(&schema, &active, "source"), None);
        assert_eq!(find_option(&schema, &active, "targets"), None);
        assert_eq!(find_option(&schema, &[], "r"), None);
    }

    #[rstest]
    #[case(i32::type_info(), "-5", true)]
    #[case(i32::type_info(), "-x", false)]
    #[case(<Option<i32>>::type_info(), "-5", true)]
    #[case(u8::type_info(), "-5", false)]
    #[case(f64::type_info(), "-1.5e3", true)]
    #[case(String::type_info(), "-5", false)]
    #[case(String::type_info(), "value", true)]
    #[case(String::type_info(), "-", true)]
    #[case(String::type_info(), "--", false)]
    #[case(i32::type_info(), "--", false)]
    fn numeric_lookahead(
        #[case] type_info: TypeInfo,
        #[case] next: &str,
        #[case] expected: bool,
    ) {
        // Setup
        let spec = OptionSpec::new(FieldPath::root(0).child("count"), "count", type_info);

        // Verify
        assert_eq!(accepts_value(&spec, next), expected);
    }
}
