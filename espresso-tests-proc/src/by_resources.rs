use std::path::Path;

use glob::glob;
use proc_macro::TokenStream;
use syn::parse::{Parse, ParseStream};
use syn::spanned::Spanned;
use syn::{
    parse_macro_input, Attribute, Block, Error, FnArg, Ident, ItemFn, LitStr, Pat, Result, Type,
};

struct TestResFn {
    name: Ident,
    body: Block,
    attrs: Vec<Attribute>,
    arg_name: Ident,
    arg_ty: Type,
}

impl Parse for TestResFn {
    fn parse(input: ParseStream) -> Result<Self> {
        let f: ItemFn = input.parse()?;
        if f.sig.inputs.len() != 1 {
            return Err(Error::new(
                f.sig.inputs.span(),
                format!(
                    "expected exactly one argument, found {} in {}",
                    f.sig.inputs.len(),
                    f.sig.ident
                ),
            ));
        }
        let arg = f.sig.inputs.first().cloned();
        match arg {
            Some(FnArg::Typed(pat)) => match *pat.pat {
                Pat::Ident(arg_name) => Ok(Self {
                    name: f.sig.ident,
                    attrs: f.attrs,
                    body: *f.block,
                    arg_name: arg_name.ident,
                    arg_ty: *pat.ty,
                }),
                other => Err(Error::new(
                    other.span(),
                    "first argument must be an identifier",
                )),
            },
            _ => Err(Error::new(
                f.sig.inputs.span(),
                "first argument may not be a receiver",
            )),
        }
    }
}

pub fn by_resources(attr: TokenStream, item: TokenStream) -> TokenStream {
    // Get the specified path pattern from the attribute
    let path_pat = parse_macro_input!(attr as LitStr);

    // Patterns are relative to the crate being tested
    let root = std::env::var("CARGO_MANIFEST_DIR").unwrap_or_default();
    let full_pat = Path::new(&root).join(path_pat.value());

    // Get the corresponding entries thanks to the glob package
    let entries = match glob(&full_pat.to_string_lossy()) {
        Ok(entries) => entries,
        Err(err) => {
            return Error::new(path_pat.span(), format!("invalid pattern: {err}"))
                .to_compile_error()
                .into()
        }
    };

    // Parse the function item
    let TestResFn {
        name,
        attrs,
        body,
        arg_name,
        arg_ty,
    } = parse_macro_input!(item as TestResFn);

    let mut generated_functions = Vec::new();

    // Iterate over the files in the directory
    for entry in entries.filter_map(|x| x.ok()) {
        let Some(filename) = entry.file_stem().and_then(|stem| stem.to_str()) else {
            continue;
        };

        let path = entry.display().to_string();

        // Generate a new function name by appending the file name to the original
        // function's name
        let new_name = format_ident!("{name}__{filename}");

        generated_functions.push(quote! {
            #[allow(non_snake_case)]
            #(#attrs)*
            fn #new_name() -> ::anyhow::Result<()> {
                let #arg_name: #arg_ty = #path.into();
                // Function body
                #body
                Ok(())
            }
        });
    }

    if generated_functions.is_empty() {
        return Error::new(path_pat.span(), "no file matches this pattern")
            .to_compile_error()
            .into();
    }

    quote! {
        #(#generated_functions)*
    }
    .into()
}
