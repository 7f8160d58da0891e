use super::derived_trait_names;
use fxhash::FxHashSet;
use proc_macro2::{Span, TokenStream, TokenTree};
use quote::quote;
use syn::parse::Parser;
use syn::{Attribute, Ident, Item, ItemFn, LitBool, LitStr, Token};

const DEFAULT_RENAME_ALL: &str = "camelCase";

/// Expands the `#[api_model]` attribute macro for a struct or an enum.
pub fn expand_api_model(args: TokenStream, input: Item) -> TokenStream {
    try_expand_api_model(args, input).unwrap_or_else(syn::Error::into_compile_error)
}

/// Expands the `#[api_handler]` attribute macro.
///
/// The handler body is untouched; only the documentation attribute and a lint allowance
/// for extractor-only async handlers are added.
pub fn expand_api_handler(args: TokenStream, input: ItemFn) -> TokenStream {
    let ItemFn { attrs, vis, sig, block } = input;

    quote! {
        #(#attrs)*
        #[allow(clippy::unused_async)]
        #[cfg_attr(feature = "server", ::utoipa::path(#args))]
        #vis #sig #block
    }
}

fn try_expand_api_model(args: TokenStream, input: Item) -> syn::Result<TokenStream> {
    let args = ModelArgs::parse(args)?;

    let (attrs, ident, is_struct) = match &input {
        Item::Struct(item) => (&item.attrs, &item.ident, true),
        Item::Enum(item) => (&item.attrs, &item.ident, false),
        other => {
            return Err(syn::Error::new_spanned(other, "api_model supports structs and enums only"));
        },
    };

    let derives = derived_trait_names(attrs);
    let serde = SerdeAttrs::collect(attrs)?;

    let derive_attr = derive_attr(&derives);
    let schema_attr = schema_attr(&derives);
    let rename_attr = rename_attr(args.rename_all, serde.rename_all.as_ref())?;
    let deny_attr = if is_struct {
        deny_attr(args.deny_unknown_fields, serde.deny_unknown_fields, ident)?
    } else if args.deny_unknown_fields == Some(true) {
        return Err(syn::Error::new_spanned(ident, "deny_unknown_fields applies to structs only"));
    } else {
        quote! {}
    };

    Ok(quote! {
        #derive_attr
        #schema_attr
        #rename_attr
        #deny_attr
        #input
    })
}

#[derive(Default)]
struct ModelArgs {
    rename_all: Option<LitStr>,
    deny_unknown_fields: Option<bool>,
}

impl ModelArgs {
    fn parse(args: TokenStream) -> syn::Result<Self> {
        let mut parsed = Self::default();

        let parser = syn::meta::parser(|meta| {
            if meta.path.is_ident("rename_all") {
                if parsed.rename_all.is_some() {
                    return Err(meta.error("duplicate `rename_all` argument"));
                }
                parsed.rename_all = Some(meta.value()?.parse()?);
                return Ok(());
            }
            if meta.path.is_ident("deny_unknown_fields") {
                if parsed.deny_unknown_fields.is_some() {
                    return Err(meta.error("duplicate `deny_unknown_fields` argument"));
                }
                let value: LitBool = meta.value()?.parse()?;
                parsed.deny_unknown_fields = Some(value.value);
                return Ok(());
            }
            Err(meta.error("unsupported argument; expected `rename_all` or `deny_unknown_fields`"))
        });
        parser.parse2(args)?;

        Ok(parsed)
    }
}

/// Container-level serde settings already present on the item.
struct SerdeAttrs {
    rename_all: Option<LitStr>,
    deny_unknown_fields: bool,
}

impl SerdeAttrs {
    fn collect(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut rename_all = None;
        let mut deny_unknown_fields = false;

        for attr in attrs.iter().filter(|attr| attr.path().is_ident("serde")) {
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("rename_all") && meta.input.peek(Token![=]) {
                    rename_all = Some(meta.value()?.parse()?);
                } else if meta.path.is_ident("deny_unknown_fields") {
                    deny_unknown_fields = true;
                } else if meta.input.peek(Token![=]) {
                    let _: syn::Expr = meta.value()?.parse()?;
                } else if meta.input.peek(syn::token::Paren) {
                    let _: TokenTree = meta.input.parse()?;
                }
                Ok(())
            })?;
        }

        Ok(Self { rename_all, deny_unknown_fields })
    }
}

fn derive_attr(derives: &FxHashSet<String>) -> TokenStream {
    let missing: Vec<TokenStream> = [
        ("Debug", quote! { Debug }),
        ("Serialize", quote! { ::serde::Serialize }),
        ("Deserialize", quote! { ::serde::Deserialize }),
    ]
    .into_iter()
    .filter(|(name, _)| !derives.contains(*name))
    .map(|(_, tokens)| tokens)
    .collect();

    if missing.is_empty() { quote! {} } else { quote! { #[derive(#(#missing),*)] } }
}

fn schema_attr(derives: &FxHashSet<String>) -> TokenStream {
    if derives.contains("ToSchema") {
        quote! {}
    } else {
        quote! { #[cfg_attr(feature = "server", derive(::utoipa::ToSchema))] }
    }
}

fn rename_attr(requested: Option<LitStr>, existing: Option<&LitStr>) -> syn::Result<TokenStream> {
    let requested = requested.unwrap_or_else(|| LitStr::new(DEFAULT_RENAME_ALL, Span::call_site()));

    match existing {
        Some(existing) if existing.value() != requested.value() => Err(syn::Error::new_spanned(
            existing,
            "conflicting serde rename_all; remove it or pass the same value to api_model",
        )),
        Some(_) => Ok(quote! {}),
        None => Ok(quote! { #[serde(rename_all = #requested)] }),
    }
}

fn deny_attr(requested: Option<bool>, existing: bool, ident: &Ident) -> syn::Result<TokenStream> {
    let deny = requested.unwrap_or(true);

    match (existing, deny) {
        (true, false) => Err(syn::Error::new_spanned(
            ident,
            "deny_unknown_fields is already set via serde; remove it before disabling",
        )),
        (true, true) | (false, false) => Ok(quote! {}),
        (false, true) => Ok(quote! { #[serde(deny_unknown_fields)] }),
    }
}
