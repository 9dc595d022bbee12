//! Derive macro for `structarg`.
//! See [derive documentation](https://docs.rs/structarg/latest/structarg/derive/index.html) for full details.
extern crate proc_macro;

mod generate;
mod load;
mod model;

use crate::model::DeriveRecord;
use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;

/// Derive the `structarg` reflection layer (`Record`, `Value`, and `Reflect`) for a struct with named fields.
///
/// Fields are annotated with `#[arg(..)]`, and the struct itself with `#[arg(version = .., description = ..)]`.
#[proc_macro_derive(Record, attributes(arg))]
pub fn record(input: TokenStream) -> TokenStream {
    let input = syn::parse_macro_input!(input as syn::DeriveInput);

    match DeriveRecord::try_from(input) {
        Ok(record) => TokenStream2::from(record).into(),
        Err(error) => error.to_compile_error().into(),
    }
}
