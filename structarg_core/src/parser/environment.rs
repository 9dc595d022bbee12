use std::borrow::Borrow;
use std::collections::{BTreeMap, HashMap};
use std::ffi::OsString;
use std::hash::{BuildHasher, Hash};
use thiserror::Error;

/// A variable that is set, but cannot be read.
#[derive(Debug, Error)]
pub enum EnvironmentError {
    /// The value isn't valid unicode.
    #[error("value {0:?} is not valid unicode")]
    NotUnicode(OsString),
}

/// A snapshot of environment variables, queried by exact name.
pub trait Environment {
    /// The value of the variable `name`, or `None` when it isn't set.
    fn lookup(&self, name: &str) -> Result<Option<String>, EnvironmentError>;
}

/// The environment of the running process.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessEnvironment;

impl Environment for ProcessEnvironment {
    fn lookup(&self, name: &str) -> Result<Option<String>, EnvironmentError> {
        match std::env::var_os(name) {
            Some(value) => value
                .into_string()
                .map(Some)
                .map_err(EnvironmentError::NotUnicode),
            None => Ok(None),
        }
    }
}

impl<K, V, S> Environment for HashMap<K, V, S>
where
    K: Borrow<str> + Eq + Hash,
    V: AsRef<str>,
    S: BuildHasher,
{
    fn lookup(&self, name: &str) -> Result<Option<String>, EnvironmentError> {
        Ok(self.get(name).map(|value| value.as_ref().to_string()))
    }
}

impl<K, V> Environment for BTreeMap<K, V>
where
    K: Borrow<str> + Ord,
    V: AsRef<str>,
{
    fn lookup(&self, name: &str) -> Result<Option<String>, EnvironmentError> {
        Ok(self.get(name).map(|value| value.as_ref().to_string()))
    }
}

/// Split the value of a multi value variable as a single Csv record (ex: `a,"b,c"` is `a` and `b,c`).
/// An empty value holds no items.
pub(crate) fn split_csv(value: &str) -> Result<Vec<String>, csv::Error> {
    if value.is_empty() {
        return Ok(Vec::default());
    }

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .from_reader(value.as_bytes());

    match reader.records().next() {
        Some(record) => Ok(record?.iter().map(str::to_string).collect()),
        None => Ok(Vec::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("", vec![])]
    #[case("a", vec!["a"])]
    #[case("a,b", vec!["a", "b"])]
    #[case("a, b", vec!["a", " b"])]
    #[case("a,\"b,c\"", vec!["a", "b,c"])]
    #[case("\"say \"\"hi\"\"\"", vec!["say \"hi\""])]
    #[case("a,,b", vec!["a", "", "b"])]
    #[case("a,b\nc,d", vec!["a", "b"])]
    fn csv(#[case] value: &str, #[case] expected: Vec<&str>) {
        assert_eq!(split_csv(value).unwrap(), expected);
    }

    #[test]
    fn maps() {
        // Setup
        let hash_map = HashMap::from([("FOO", "5")]);
        let btree_map = BTreeMap::from([("FOO".to_string(), "5".to_string())]);

        // Verify
        assert_eq!(hash_map.lookup("FOO").unwrap(), Some("5".to_string()));
        assert_eq!(hash_map.lookup("foo").unwrap(), None);
        assert_eq!(btree_map.lookup("FOO").unwrap(), Some("5".to_string()));
        assert_eq!(btree_map.lookup("BAR").unwrap(), None);
    }

    #[test]
    fn process() {
        assert_eq!(
            ProcessEnvironment
                .lookup("STRUCTARG_TEST_SURELY_UNSET_VARIABLE")
                .unwrap(),
            None
        );
    }

    #[cfg(unix)]
    #[test]
    fn process_not_unicode() {
        use std::os::unix::ffi::OsStringExt;

        // Setup
        let value = OsString::from_vec(vec![0x66, 0xff]);
        std::env::set_var("STRUCTARG_TEST_NOT_UNICODE", &value);

        // Execute
        let result = ProcessEnvironment.lookup("STRUCTARG_TEST_NOT_UNICODE");

        // Verify
        assert_matches!(result, Err(EnvironmentError::NotUnicode(actual)) if actual == value);
    }
}
