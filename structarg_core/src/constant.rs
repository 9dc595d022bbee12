pub(crate) const IGNORE_TAG: &str = "-";
pub(crate) const END_OF_OPTIONS: &str = "--";
pub(crate) const HELP_SHORT: &str = "-h";
pub(crate) const HELP_LONG: &str = "--help";
pub(crate) const VERSION_LONG: &str = "--version";
pub(crate) const DEFAULT_PROGRAM: &str = "program";
