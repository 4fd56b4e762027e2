use proc_macro::TokenStream;
use proc_macro2::Span;
use quote::quote;
use syn::{
    parse::{Parse, ParseStream}, parse_macro_input, Data, DataStruct, DeriveInput, Fields, Ident, LitStr, Token, Type
};

struct ChainedAttribute {
    crate_path: Option<syn::Path>,
    field: Option<Ident>,
}

/// Parses the attribute in the format: `key = "value", ...` with the keys
/// `crate_path` and `field`.
impl Parse for ChainedAttribute {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let mut attr = ChainedAttribute {
            crate_path: None,
            field: None,
        };

        loop {
            let key: Ident = input.parse()?;
            let _: Token![=] = input.parse()?;
            let value: LitStr = input.parse()?;

            match key.to_string().as_str() {
                "crate_path" => attr.crate_path = Some(value.parse()?),
                "field" => attr.field = Some(value.parse()?),
                _ => {
                    return Err(syn::Error::new(
                        key.span(),
                        "expected attribute `crate_path` or `field`",
                    ));
                }
            }

            if input.is_empty() {
                break;
            }
            let _: Token![,] = input.parse()?;
        }

        Ok(attr)
    }
}

/// Derive macro implementing successor extraction for chain records.
///
/// Reads the field named `next` unless `#[chained(field = "...")]` names a
/// different one. The field must be a raw pointer.
#[proc_macro_derive(Chained, attributes(chained))]
pub fn chained_derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let struct_name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    // Find absolute crate path and the successor field name
    let mut crate_path = quote! { ::ext_chain };
    let mut field_name = None;

    for attr in &input.attrs {
        if attr.path().is_ident("chained") {
            match attr.parse_args::<ChainedAttribute>() {
                Ok(chained_attr) => {
                    if let Some(path) = chained_attr.crate_path {
                        crate_path = quote! { #path };
                    }
                    if let Some(field) = chained_attr.field {
                        field_name = Some(field);
                    }
                }
                Err(e) => return e.to_compile_error().into(),
            }
        }
    }

    let field_name =
        field_name.unwrap_or_else(|| Ident::new("next", Span::call_site()));

    let fields = if let Data::Struct(DataStruct {
        fields: Fields::Named(ref fields),
        ..
    }) = input.data
    {
        fields
    } else {
        return syn::Error::new_spanned(
            input,
            "Chained derive macro only supports structs with named fields",
        )
        .to_compile_error()
        .into();
    };

    let successor = fields.named.iter().find(|field| {
        field
            .ident
            .as_ref()
            .is_some_and(|ident| *ident == field_name)
    });

    let successor = match successor {
        Some(field) => field,
        None => {
            return syn::Error::new_spanned(
                struct_name,
                format!("Struct must have a successor field named `{field_name}`"),
            )
            .to_compile_error()
            .into();
        }
    };

    // The cast in the generated impl is pointer-to-pointer only.
    if !matches!(successor.ty, Type::Ptr(_)) {
        return syn::Error::new_spanned(
            &successor.ty,
            format!("Successor field `{field_name}` must be a raw pointer"),
        )
        .to_compile_error()
        .into();
    }

    let traits_path = quote! { #crate_path::chain::traits };

    let expanded = quote! {
        unsafe impl #impl_generics #traits_path::Chained for #struct_name #ty_generics #where_clause {
            #[inline]
            fn next_ptr(&self) -> *const ::core::ffi::c_void {
                self.#field_name as *const ::core::ffi::c_void
            }
        }
    };

    TokenStream::from(expanded)
}
