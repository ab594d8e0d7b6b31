use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{Attribute, Data, DeriveInput, Fields, LitStr, Meta, Type, parse_macro_input};

/// Generates `resolve`, `key`, `from_key` and `ALL` for a token enum whose
/// variants each point at a field of `mosaic_theme::Theme`.
///
/// ```ignore
/// #[derive(ThemeField)]
/// #[field(f32)]
/// enum RadiusKind {
///     #[theme(layout.radii.sm)]
///     Sm,
///     #[theme(layout.radii.full)]
///     #[key("pill")]
///     Full,
/// }
/// ```
#[proc_macro_derive(ThemeField, attributes(theme, field, key))]
pub fn theme_field_derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let name = input.ident;

    let variants = if let Data::Enum(data_enum) = input.data {
        data_enum.variants
    } else {
        panic!("#[derive(ThemeField)] can only be used on enums");
    };

    let field_type = get_enum_field_type(&input.attrs);

    let mut resolve_arms = Vec::new();
    let mut key_arms = Vec::new();
    let mut from_key_arms = Vec::new();
    let mut all = Vec::new();

    for variant in &variants {
        if !matches!(variant.fields, Fields::Unit) {
            panic!("#[derive(ThemeField)] only supports unit variants");
        }

        let ident = &variant.ident;
        let field_path = get_theme_path(&variant.attrs);
        let key = get_key(&variant.attrs).unwrap_or_else(|| to_snake_case(&ident.to_string()));

        resolve_arms.push(quote! { #name::#ident => &theme.#field_path, });
        key_arms.push(quote! { #name::#ident => #key, });
        from_key_arms.push(quote! { #key => ::core::option::Option::Some(#name::#ident), });
        all.push(quote! { #name::#ident });
    }

    let expanded = quote! {
        impl #name {
            /// Every variant, in declaration order.
            pub const ALL: &'static [#name] = &[#(#all),*];

            pub fn resolve<'a>(&self, theme: &'a mosaic_theme::Theme) -> &'a #field_type {
                match self {
                    #(#resolve_arms)*
                }
            }

            pub fn key(&self) -> &'static str {
                match self {
                    #(#key_arms)*
                }
            }

            pub fn from_key(key: &str) -> ::core::option::Option<Self> {
                match key {
                    #(#from_key_arms)*
                    _ => ::core::option::Option::None,
                }
            }
        }
    };

    TokenStream::from(expanded)
}

fn get_theme_path(attrs: &[Attribute]) -> TokenStream2 {
    let theme_attr = attrs
        .iter()
        .find(|attr| attr.path().is_ident("theme"))
        .expect("Variant is missing #[theme(...)] attribute");

    match &theme_attr.meta {
        Meta::List(list) => {
            syn::parse2::<syn::Expr>(list.tokens.clone())
                .expect("Expected a field path inside #[theme(...)]");
            list.tokens.clone()
        }
        _ => panic!("#[theme(...)] must be a list"),
    }
}

fn get_key(attrs: &[Attribute]) -> Option<String> {
    let key_attr = attrs.iter().find(|attr| attr.path().is_ident("key"))?;

    let literal: LitStr = key_attr
        .parse_args()
        .expect("#[key(...)] must contain a string literal");

    Some(literal.value())
}

fn get_enum_field_type(attrs: &[Attribute]) -> Type {
    let field_attr = attrs
        .iter()
        .find(|attr| attr.path().is_ident("field"))
        .expect("Enum is missing #[field(...)] attribute");

    match &field_attr.meta {
        Meta::List(meta_list) => syn::parse2::<Type>(meta_list.tokens.clone())
            .expect("#[field(...)] must contain a valid type"),
        _ => panic!("#[field(...)] must be a list, like #[field(f32)]"),
    }
}

fn to_snake_case(ident: &str) -> String {
    let mut out = String::with_capacity(ident.len() + 4);

    for (i, c) in ident.chars().enumerate() {
        if c.is_uppercase() {
            if i != 0 {
                out.push('_');
            }
            out.extend(c.to_lowercase());
        } else {
            out.push(c);
        }
    }

    out
}
