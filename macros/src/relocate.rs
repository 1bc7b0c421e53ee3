use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{Data, DeriveInput, Fields, Type, parse_quote};

/// `#[derive(TriviallyRelocatable)]` expansion.
///
/// Collects every field type of the item and emits
///
/// ```ignore
/// unsafe impl<..> ::relocore::TriviallyRelocatable for Item<..>
/// where
///     Field0: ::relocore::TriviallyRelocatable,
///     Field1: ::relocore::TriviallyRelocatable,
/// {}
/// ```
///
/// For enums, every variant's fields contribute a bound; the discriminant is
/// plain integer data and never blocks relocation.
pub fn expand_derive_trivially_relocatable(input: DeriveInput) -> TokenStream2 {
    let ident = &input.ident;

    let field_types = match collect_field_types(&input.data) {
        Ok(types) => types,
        Err(err) => return err,
    };

    let mut generics = input.generics.clone();
    {
        let where_clause = generics.make_where_clause();
        for ty in &field_types {
            where_clause
                .predicates
                .push(parse_quote!(#ty: ::relocore::TriviallyRelocatable));
        }
    }
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    quote! {
        unsafe impl #impl_generics ::relocore::TriviallyRelocatable
            for #ident #ty_generics #where_clause {}
    }
}

fn collect_field_types(data: &Data) -> Result<Vec<Type>, TokenStream2> {
    let mut types = Vec::new();
    match data {
        Data::Struct(data) => push_fields(&mut types, &data.fields),
        Data::Enum(data) => {
            for variant in &data.variants {
                push_fields(&mut types, &variant.fields);
            }
        }
        Data::Union(_) => {
            return Err(quote! {
                compile_error!(
                    "`#[derive(TriviallyRelocatable)]` cannot classify a union; \
                     write an `unsafe impl` asserting the guarantee manually"
                );
            });
        }
    }
    Ok(types)
}

fn push_fields(types: &mut Vec<Type>, fields: &Fields) {
    match fields {
        Fields::Named(fields) => {
            types.extend(fields.named.iter().map(|f| f.ty.clone()));
        }
        Fields::Unnamed(fields) => {
            types.extend(fields.unnamed.iter().map(|f| f.ty.clone()));
        }
        Fields::Unit => {}
    }
}
