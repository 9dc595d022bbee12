use crate::load::ATTRIBUTE;
use crate::model::{DeriveValue, IntermediateAttributes};
use quote::ToTokens;

impl IntermediateAttributes {
    /// Merge every `#[arg(..)]` attribute of `attributes`.
    pub(crate) fn load(attributes: &[syn::Attribute]) -> Result<Self, syn::Error> {
        let mut merged = Self::default();

        for attribute in attributes {
            if attribute.path().is_ident(ATTRIBUTE) {
                merged.extend(attribute)?;
            }
        }

        Ok(merged)
    }

    fn extend(&mut self, attribute: &syn::Attribute) -> Result<(), syn::Error> {
        let attributes_parser =
            syn::punctuated::Punctuated::<syn::Expr, syn::Token![,]>::parse_terminated;

        for expression in attribute.parse_args_with(attributes_parser)? {
            match expression {
                syn::Expr::Lit(syn::ExprLit {
                    lit: syn::Lit::Str(literal),
                    ..
                }) => {
                    self.literals.push(literal.value());
                }
                syn::Expr::Assign(assignment) => {
                    let left = assignment.left.to_token_stream();
                    self.pairs
                        .entry(left.to_string())
                        .or_default()
                        .push(DeriveValue {
                            tokens: assignment.right.to_token_stream(),
                        });
                }
                syn::Expr::Path(path) if path.path.get_ident().is_some() => {
                    let tts = path.to_token_stream();
                    self.singletons.insert(tts.to_string());
                }
                _ => {
                    return Err(syn::Error::new_spanned(
                        &expression,
                        format!(
                            "Unparseable attribute: `{}`.",
                            expression.to_token_stream()
                        ),
                    ));
                }
            };
        }

        Ok(())
    }
}
