use proc_macro2::TokenStream as TokenStream2;
use std::collections::{HashMap, HashSet};

#[derive(Debug, Clone)]
pub(crate) struct DeriveValue {
    pub tokens: TokenStream2,
}

impl PartialEq for DeriveValue {
    fn eq(&self, other: &Self) -> bool {
        self.tokens.to_string() == other.tokens.to_string()
    }
}

impl Eq for DeriveValue {}

/// The contents of every `#[arg(..)]` attribute on an item, merged in declaration order.
#[derive(Debug, Default, PartialEq, Eq)]
pub(crate) struct IntermediateAttributes {
    // String literals, in order (ex: `"--port,-p"`).
    pub literals: Vec<String>,
    // Markers (ex: `embed`).
    pub singletons: HashSet<String>,
    // Assignments (ex: `help = ".."`).
    pub pairs: HashMap<String, Vec<DeriveValue>>,
}

#[derive(Debug, PartialEq, Eq)]
pub(crate) struct DeriveField {
    pub field_name: syn::Ident,
    pub field_type: DeriveValue,
    pub tag: Option<String>,
    pub help: Option<DeriveValue>,
    pub embedded: bool,
}

impl DeriveField {
    /// Whether the field is skipped by the parser (tag `"-"`).
    pub fn is_ignored(&self) -> bool {
        self.tag.as_deref() == Some(IGNORE_TAG)
    }
}

pub(crate) const IGNORE_TAG: &str = "-";

#[derive(Debug, PartialEq, Eq)]
pub(crate) struct DeriveRecord {
    pub struct_name: syn::Ident,
    pub generics: syn::Generics,
    pub version: Option<DeriveValue>,
    pub description: Option<DeriveValue>,
    pub fields: Vec<DeriveField>,
}
