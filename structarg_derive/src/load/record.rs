use crate::load::{single_value, unrecognized_error};
use crate::model::{DeriveField, DeriveRecord, DeriveValue, IntermediateAttributes};
use quote::ToTokens;

const EMBED: &str = "embed";
const HELP: &str = "help";
const VERSION: &str = "version";
const DESCRIPTION: &str = "description";

impl TryFrom<&syn::Field> for DeriveField {
    type Error = syn::Error;

    fn try_from(value: &syn::Field) -> Result<Self, Self::Error> {
        let field_name = match &value.ident {
            Some(ident) => ident.clone(),
            None => {
                return Err(syn::Error::new_spanned(
                    value,
                    "Invalid - Record fields must be named.",
                ))
            }
        };
        let attributes = IntermediateAttributes::load(&value.attrs)?;

        for singleton in &attributes.singletons {
            if singleton != EMBED {
                return Err(unrecognized_error(field_name.span(), "field", singleton));
            }
        }

        for key in attributes.pairs.keys() {
            if key != HELP {
                return Err(unrecognized_error(
                    field_name.span(),
                    "field",
                    &format!("{key} = .."),
                ));
            }
        }

        let tag = if attributes.literals.is_empty() {
            None
        } else {
            Some(attributes.literals.join(","))
        };

        Ok(DeriveField {
            field_type: DeriveValue {
                tokens: value.ty.to_token_stream(),
            },
            tag,
            help: single_value(field_name.span(), &attributes, HELP)?.cloned(),
            embedded: attributes.singletons.contains(EMBED),
            field_name,
        })
    }
}

impl TryFrom<syn::DeriveInput> for DeriveRecord {
    type Error = syn::Error;

    fn try_from(value: syn::DeriveInput) -> Result<Self, Self::Error> {
        let attributes = IntermediateAttributes::load(&value.attrs)?;
        let span = value.ident.span();

        if let Some(literal) = attributes.literals.first() {
            return Err(unrecognized_error(span, "struct", &format!("{literal:?}")));
        }

        if let Some(singleton) = attributes.singletons.iter().next() {
            return Err(unrecognized_error(span, "struct", singleton));
        }

        for key in attributes.pairs.keys() {
            if key != VERSION && key != DESCRIPTION {
                return Err(unrecognized_error(span, "struct", &format!("{key} = ..")));
            }
        }

        let fields = match &value.data {
            syn::Data::Struct(syn::DataStruct {
                fields: syn::Fields::Named(fields),
                ..
            }) => fields
                .named
                .iter()
                .map(DeriveField::try_from)
                .collect::<Result<Vec<_>, _>>()?,
            syn::Data::Struct(syn::DataStruct {
                fields: syn::Fields::Unit,
                ..
            }) => Vec::default(),
            _ => {
                return Err(syn::Error::new(
                    span,
                    "Invalid - Record may only be derived for structs with named fields.",
                ));
            }
        };

        Ok(DeriveRecord {
            version: single_value(span, &attributes, VERSION)?.cloned(),
            description: single_value(span, &attributes, DESCRIPTION)?.cloned(),
            struct_name: value.ident,
            generics: value.generics,
            fields,
        })
    }
}
