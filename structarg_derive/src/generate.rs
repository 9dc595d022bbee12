use crate::model::{DeriveField, DeriveRecord};
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::ext::IdentExt;

impl From<DeriveRecord> for TokenStream2 {
    fn from(value: DeriveRecord) -> Self {
        let DeriveRecord {
            struct_name,
            generics,
            version,
            description,
            fields,
        } = value;
        let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();
        let record_name = literal(&struct_name);
        let shapes: Vec<TokenStream2> = fields.iter().map(field_shape).collect();
        let arms: Vec<TokenStream2> = fields
            .iter()
            .filter(|field| !field.embedded && !field.is_ignored())
            .map(|field| {
                let field_name = &field.field_name;
                let name = literal(field_name);
                quote! {
                    #name => return ::std::option::Option::Some(&mut self.#field_name),
                }
            })
            .collect();
        // Embedded fields are searched after the record's own fields, in declaration order.
        let fallbacks: Vec<TokenStream2> = fields
            .iter()
            .filter(|field| field.embedded)
            .map(|field| {
                let field_name = &field.field_name;
                quote! {
                    if let ::std::option::Option::Some(value) = ::structarg::Value::record(&mut self.#field_name)
                        .and_then(|record| ::structarg::Record::field_mut(record, name))
                    {
                        return ::std::option::Option::Some(value);
                    }
                }
            })
            .collect();
        let version = version.map(|version| {
            let tokens = &version.tokens;
            quote! {
                fn version(&self) -> ::std::option::Option<::std::string::String> {
                    ::std::option::Option::Some(::std::string::ToString::to_string(&#tokens))
                }
            }
        });
        let description = description.map(|description| {
            let tokens = &description.tokens;
            quote! {
                fn description(&self) -> ::std::option::Option<::std::string::String> {
                    ::std::option::Option::Some(::std::string::ToString::to_string(&#tokens))
                }
            }
        });

        quote! {
            impl #impl_generics ::structarg::Record for #struct_name #ty_generics #where_clause {
                fn describe() -> ::structarg::Shape {
                    ::structarg::Shape::new(#record_name, ::std::vec![#( #shapes ),*])
                }

                fn shape(&self) -> ::structarg::Shape {
                    <Self as ::structarg::Record>::describe()
                }

                fn field_mut(&mut self, name: &str) -> ::std::option::Option<&mut dyn ::structarg::Value> {
                    match name {
                        #( #arms )*
                        _ => {}
                    }

                    #( #fallbacks )*
                    ::std::option::Option::None
                }

                #version
                #description
            }

            impl #impl_generics ::structarg::Value for #struct_name #ty_generics #where_clause {
                fn record(&mut self) -> ::std::option::Option<&mut dyn ::structarg::Record> {
                    ::std::option::Option::Some(self)
                }
            }

            impl #impl_generics ::structarg::Reflect for #struct_name #ty_generics #where_clause {
                fn type_info() -> ::structarg::TypeInfo {
                    ::structarg::TypeInfo::record(#record_name, <Self as ::structarg::Record>::describe)
                }
            }
        }
    }
}

fn field_shape(field: &DeriveField) -> TokenStream2 {
    let name = literal(&field.field_name);
    let field_type = &field.field_type.tokens;
    let type_info = if field.is_ignored() {
        quote! { ::structarg::TypeInfo::opaque(::std::any::type_name::<#field_type>()) }
    } else {
        quote! { <#field_type as ::structarg::Reflect>::type_info() }
    };
    let tag = field.tag.as_ref().map(|tag| quote! { .tag(#tag) });
    let help = field.help.as_ref().map(|help| {
        let tokens = &help.tokens;
        quote! { .help(#tokens) }
    });
    let embedded = field.embedded.then(|| quote! { .embedded() });

    quote! {
        ::structarg::FieldShape::new(#name, #type_info) #tag #help #embedded
    }
}

fn literal(ident: &syn::Ident) -> syn::LitStr {
    syn::LitStr::new(&ident.unraw().to_string(), ident.span())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::DeriveValue;
    use proc_macro2::{Literal, Span};
    use quote::ToTokens;

    #[test]
    fn render_record_empty() {
        // Setup
        let record = DeriveRecord {
            struct_name: ident("Arguments"),
            generics: Default::default(),
            version: None,
            description: None,
            fields: vec![],
        };

        // Execute
        let token_stream = TokenStream2::from(record);

        // Verify
        let rendered = token_stream.to_string();
        syn::parse2::<syn::File>(token_stream).unwrap();
        assert!(rendered.contains(":: structarg :: Shape :: new (\"Arguments\" , :: std :: vec ! [])"));
        assert!(!rendered.contains("fn version"));
        assert!(!rendered.contains("fn description"));
    }

    #[test]
    fn render_record() {
        // Setup
        let record = DeriveRecord {
            struct_name: ident("Arguments"),
            generics: Default::default(),
            version: Some(DeriveValue {
                tokens: Literal::string("1.0.0").into_token_stream(),
            }),
            description: None,
            fields: vec![
                DeriveField {
                    field_name: ident("port"),
                    field_type: DeriveValue {
                        tokens: quote! { u16 },
                    },
                    tag: Some("--port,-p".to_string()),
                    help: Some(DeriveValue {
                        tokens: Literal::string("The port.").into_token_stream(),
                    }),
                    embedded: false,
                },
                DeriveField {
                    field_name: ident("common"),
                    field_type: DeriveValue {
                        tokens: quote! { Common },
                    },
                    tag: None,
                    help: None,
                    embedded: true,
                },
                DeriveField {
                    field_name: ident("cache"),
                    field_type: DeriveValue {
                        tokens: quote! { HashMap<String, String> },
                    },
                    tag: Some("-".to_string()),
                    help: None,
                    embedded: false,
                },
            ],
        };

        // Execute
        let token_stream = TokenStream2::from(record);

        // Verify
        let rendered = token_stream.to_string();
        syn::parse2::<syn::File>(token_stream).unwrap();
        assert!(rendered.contains(
            ":: structarg :: FieldShape :: new (\"port\" , < u16 as :: structarg :: Reflect > :: type_info ()) . tag (\"--port,-p\") . help (\"The port.\")"
        ));
        assert!(rendered.contains(
            ":: structarg :: FieldShape :: new (\"common\" , < Common as :: structarg :: Reflect > :: type_info ()) . embedded ()"
        ));
        assert!(rendered.contains(
            ":: structarg :: TypeInfo :: opaque (:: std :: any :: type_name :: < HashMap < String , String > > ())"
        ));
        assert!(rendered.contains("\"port\" => return :: std :: option :: Option :: Some (& mut self . port)"));
        assert!(!rendered.contains("\"common\" =>"));
        assert!(!rendered.contains("\"cache\" =>"));
        assert!(rendered.contains(":: structarg :: Value :: record (& mut self . common)"));
        assert!(rendered.contains("fn version"));
        assert!(!rendered.contains("fn description"));
    }

    #[test]
    fn render_record_generic() {
        // Setup
        let input: syn::DeriveInput =
            syn::parse_str("struct Arguments<T: Default> where T: Clone { inner: T }").unwrap();
        let record = DeriveRecord::try_from(input).unwrap();

        // Execute
        let token_stream = TokenStream2::from(record);

        // Verify
        let rendered = token_stream.to_string();
        syn::parse2::<syn::File>(token_stream).unwrap();
        assert!(rendered.contains(
            "impl < T : Default > :: structarg :: Record for Arguments < T > where T : Clone"
        ));
    }

    #[test]
    fn render_raw_identifier() {
        // Setup
        let input: syn::DeriveInput = syn::parse_str("struct Arguments { r#type: String }").unwrap();
        let record = DeriveRecord::try_from(input).unwrap();

        // Execute
        let rendered = TokenStream2::from(record).to_string();

        // Verify
        assert!(rendered.contains(":: structarg :: FieldShape :: new (\"type\""));
        assert!(rendered.contains("\"type\" => return :: std :: option :: Option :: Some (& mut self . r#type)"));
    }

    fn ident(name: &str) -> syn::Ident {
        syn::Ident::new(name, Span::call_site())
    }
}
