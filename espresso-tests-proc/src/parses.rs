use proc_macro::TokenStream;
use syn::parse::{Parse, ParseStream};
use syn::spanned::Spanned;
use syn::{
    parse_macro_input, Attribute, Block, Error, FnArg, Ident, ItemFn, LitStr, Pat, Result, Token,
    Type,
};

struct ParseAttr {
    input_str: LitStr,
    rule: Ident,
}

impl Parse for ParseAttr {
    fn parse(input: ParseStream) -> Result<Self> {
        let input_str = input.parse()?;
        input.parse::<Token![as]>()?;
        let rule = input.parse()?;
        Ok(Self { input_str, rule })
    }
}

struct ParseFn {
    name: Ident,
    body: Block,
    attrs: Vec<Attribute>,
    arg_name: Ident,
    arg_ty: Type,
}

impl Parse for ParseFn {
    fn parse(input: ParseStream) -> Result<Self> {
        let f: ItemFn = input.parse()?;
        if f.sig.inputs.len() != 1 {
            return Err(Error::new(
                f.sig.inputs.span(),
                "expected exactly one argument",
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

pub fn parses(attr: TokenStream, item: TokenStream) -> TokenStream {
    let attr = parse_macro_input!(attr as ParseAttr);
    let item = parse_macro_input!(item as ParseFn);

    let ParseAttr { input_str, rule } = attr;
    let ParseFn {
        name,
        attrs,
        body,
        arg_name,
        arg_ty,
    } = item;

    quote! {
        #(#attrs)*
        fn #name() -> ::anyhow::Result<()> {
            use ::anyhow::Context as AnyhowContext;
            use ::pest::Parser;
            let input = #input_str;

            let mut parsed = crate::grammar::Grammar::parse(crate::grammar::Rule::#rule, input)
                .context("Parsing errors found.")?;
            let pair = parsed.next().context("Parser grammar error")?;

            let #arg_name: #arg_ty = crate::ast::Parsable::parse(pair);
            eprintln!("Parsed element: {:?}", #arg_name);
            #body
            Ok(())
        }
    }
    .into()
}
