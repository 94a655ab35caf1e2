use proc_macro::TokenStream;
use quote::quote;
use syn::{
    parse::{Parse, ParseStream},
    parse_macro_input, parse_quote, Ident, ItemFn, Result,
};

struct InstrumentArgs {
    pinned: bool,
}

impl Parse for InstrumentArgs {
    fn parse(input: ParseStream) -> Result<Self> {
        if input.is_empty() {
            return Ok(InstrumentArgs { pinned: false });
        }

        // `pinned` is the only recognized flag
        let flag: Ident = input.parse()?;
        if flag != "pinned" {
            return Err(input.error("Expected `pinned`"));
        }
        Ok(InstrumentArgs { pinned: true })
    }
}

/// Wraps the annotated function body in a `profiler::scope!` named
/// `module::function`, so the consuming crate has to depend on the
/// profiler crate under the name `profiler`.
#[proc_macro_attribute]
pub fn function(attr: TokenStream, item: TokenStream) -> TokenStream {
    let args = parse_macro_input!(attr as InstrumentArgs);
    let mut function = parse_macro_input!(item as ItemFn);

    let name = function.sig.ident.to_string();
    let scope_name = quote! { concat!(module_path!(), "::", #name) };
    let scope = if args.pinned {
        quote! { profiler::scope!(#scope_name, pinned); }
    } else {
        quote! { profiler::scope!(#scope_name); }
    };

    let body = &function.block;
    function.block = Box::new(parse_quote! {
        {
            #scope
            #body
        }
    });

    (quote! { #function }).into()
}
