use crate::model::{DeriveValue, IntermediateAttributes};

mod attribute;
mod record;

pub(crate) const ATTRIBUTE: &str = "arg";

pub(self) fn single_value<'a>(
    span: proc_macro2::Span,
    attributes: &'a IntermediateAttributes,
    key: &str,
) -> Result<Option<&'a DeriveValue>, syn::Error> {
    match attributes.pairs.get(key).map(Vec::as_slice) {
        None | Some([]) => Ok(None),
        Some([value]) => Ok(Some(value)),
        Some(_) => Err(syn::Error::new(
            span,
            format!("Invalid - `{key} = ..` may only be specified once."),
        )),
    }
}

pub(self) fn unrecognized_error(span: proc_macro2::Span, context: &str, key: &str) -> syn::Error {
    syn::Error::new(
        span,
        format!("Invalid - {context} does not support `#[arg({key})]`."),
    )
}
