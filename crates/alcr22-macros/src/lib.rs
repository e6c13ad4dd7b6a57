use proc_macro::TokenStream;
use proc_macro2::{Ident, TokenStream as TokenStream2};
use quote::{format_ident, quote};
use syn::{parse_macro_input, Data, DeriveInput, Fields, LitStr};

/// Derive a column-oriented `*Series` companion for a record of `f64` fields.
///
/// For `struct Evaluation { a: f64, b: f64 }` this generates
/// `struct EvaluationSeries { pub a: Vec<f64>, pub b: Vec<f64> }` with
/// `with_capacity`, `push`, `len`, `is_empty`, `get` and `iter`, plus an
/// `Evaluation::field_names()` associated function.
///
/// `#[series(name = "WaterCurve")]` picks another name for the companion.
#[proc_macro_derive(Series, attributes(series))]
pub fn derive_series(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

fn expand(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let record = &input.ident;
    let series = series_name(input)?.unwrap_or_else(|| format_ident!("{}Series", record));
    let columns = f64_columns(input)?;

    let first = &columns[0];
    let labels: Vec<String> = columns.iter().map(Ident::to_string).collect();

    Ok(quote! {
        /// Auto-generated column-oriented collection of records.
        #[derive(Debug, Clone, Default, PartialEq)]
        pub struct #series {
            #(pub #columns: Vec<f64>,)*
        }

        impl #series {
            /// Pre-allocate all columns for `n` records.
            pub fn with_capacity(n: usize) -> Self {
                Self {
                    #(#columns: Vec::with_capacity(n),)*
                }
            }

            /// Append one record.
            pub fn push(&mut self, record: &#record) {
                #(self.#columns.push(record.#columns);)*
            }

            /// Number of records stored.
            pub fn len(&self) -> usize {
                self.#first.len()
            }

            /// Returns `true` if no records have been stored.
            pub fn is_empty(&self) -> bool {
                self.#first.is_empty()
            }

            /// Reassemble the record at position `i`.
            pub fn get(&self, i: usize) -> Option<#record> {
                if i >= self.len() {
                    return None;
                }
                Some(#record {
                    #(#columns: self.#columns[i],)*
                })
            }

            /// Iterate over the stored records in insertion order.
            pub fn iter(&self) -> impl Iterator<Item = #record> + '_ {
                (0..self.len()).filter_map(move |i| self.get(i))
            }
        }

        impl #record {
            /// Returns the field names of this record, in declaration order.
            pub fn field_names() -> &'static [&'static str] {
                &[#(#labels),*]
            }
        }
    })
}

/// Named fields of the record; every one must be a plain `f64`.
fn f64_columns(input: &DeriveInput) -> syn::Result<Vec<Ident>> {
    let Data::Struct(data) = &input.data else {
        return Err(syn::Error::new_spanned(
            &input.ident,
            "Series can only be derived for structs",
        ));
    };
    let Fields::Named(named) = &data.fields else {
        return Err(syn::Error::new_spanned(
            &input.ident,
            "Series can only be derived for structs with named fields",
        ));
    };
    if named.named.is_empty() {
        return Err(syn::Error::new_spanned(
            &input.ident,
            "Series struct must have at least one field",
        ));
    }

    named
        .named
        .iter()
        .filter_map(|field| field.ident.clone().map(|ident| (ident, &field.ty)))
        .map(|(ident, ty)| {
            if is_f64(ty) {
                Ok(ident)
            } else {
                Err(syn::Error::new_spanned(ty, "Series derive: all fields must be f64"))
            }
        })
        .collect()
}

/// Value of `#[series(name = "...")]`, if present.
fn series_name(input: &DeriveInput) -> syn::Result<Option<Ident>> {
    let mut found = None;
    for attr in input.attrs.iter().filter(|a| a.path().is_ident("series")) {
        attr.parse_nested_meta(|meta| {
            if !meta.path.is_ident("name") {
                return Err(meta.error("unsupported series attribute, expected `name`"));
            }
            let name: LitStr = meta.value()?.parse()?;
            found = Some(format_ident!("{}", name.value()));
            Ok(())
        })?;
    }
    Ok(found)
}

fn is_f64(ty: &syn::Type) -> bool {
    matches!(ty, syn::Type::Path(p) if p.qself.is_none() && p.path.is_ident("f64"))
}
