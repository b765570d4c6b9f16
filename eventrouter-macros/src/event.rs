use proc_macro::TokenStream;
use quote::quote;
use syn::punctuated::Punctuated;
use syn::spanned::Spanned;
use syn::{
    Attribute, DeriveInput, Expr, Ident, LitStr, Result, Token, parse::Parse, parse::ParseStream,
    parse_macro_input, parse_quote,
};

/// #[derive(Event)] 宏实现
/// - 仅支持 struct / enum
/// - 生成 `::eventrouter_core::Event` 实现（NAME）
pub(crate) fn expand(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match expand_derive(&input) {
        Ok(out) => TokenStream::from(out),
        Err(err) => err.to_compile_error().into(),
    }
}

fn expand_derive(input: &DeriveInput) -> Result<proc_macro2::TokenStream> {
    if let syn::Data::Union(u) = &input.data {
        return Err(syn::Error::new(
            u.union_token.span(),
            "#[derive(Event)] supports only struct and enum types",
        ));
    }

    if let Some(lt) = input.generics.lifetimes().next() {
        return Err(syn::Error::new(
            lt.lifetime.ident.span(),
            "#[derive(Event)] events must be 'static; lifetime parameters are not supported",
        ));
    }

    let ident = &input.ident;
    let name = match parse_event_attrs(&input.attrs)? {
        Some(lit) => lit,
        None => LitStr::new(&ident.to_string(), ident.span()),
    };

    // 事件需跨线程共享：为每个类型参数追加 Send + Sync + 'static
    let mut generics = input.generics.clone();
    let params: Vec<Ident> = generics.type_params().map(|p| p.ident.clone()).collect();
    if !params.is_empty() {
        let where_clause = generics.make_where_clause();
        for param in params {
            where_clause.predicates.push(parse_quote! {
                #param: ::core::marker::Send + ::core::marker::Sync + 'static
            });
        }
    }
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    // 泛型事件每个实例化都是不同的事件类型，运行时名称取完整类型名
    let runtime_name = if input.generics.params.is_empty() {
        quote! {}
    } else {
        quote! {
            fn name() -> &'static str {
                ::core::any::type_name::<Self>()
            }
        }
    };

    Ok(quote! {
        impl #impl_generics ::eventrouter_core::Event for #ident #ty_generics #where_clause {
            const NAME: &'static str = #name;

            #runtime_name
        }
    })
}

// 合并所有 #[event(...)] 属性，键重复即报错
fn parse_event_attrs(attrs: &[Attribute]) -> Result<Option<LitStr>> {
    let mut name: Option<LitStr> = None;

    for attr in attrs.iter().filter(|a| a.path().is_ident("event")) {
        let pairs: Punctuated<EventAttrKv, Token![,]> =
            attr.parse_args_with(Punctuated::<EventAttrKv, Token![,]>::parse_terminated)?;

        for kv in pairs {
            match kv.key.to_string().as_str() {
                "name" => {
                    if name.is_some() {
                        return Err(syn::Error::new(
                            kv.key.span(),
                            "duplicate key 'name' in attribute",
                        ));
                    }
                    let lit = match kv.value {
                        Expr::Lit(syn::ExprLit {
                            lit: syn::Lit::Str(lit),
                            ..
                        }) => lit,
                        other => {
                            return Err(syn::Error::new(
                                other.span(),
                                "expected string literal for 'name'",
                            ));
                        }
                    };
                    if lit.value().trim().is_empty() {
                        return Err(syn::Error::new(lit.span(), "event name may not be empty"));
                    }
                    name = Some(lit);
                }
                _ => {
                    return Err(syn::Error::new(
                        kv.key.span(),
                        "unknown key; expected 'name'",
                    ));
                }
            }
        }
    }

    Ok(name)
}

struct EventAttrKv {
    key: Ident,
    #[allow(dead_code)]
    eq: Token![=],
    value: Expr,
}

impl Parse for EventAttrKv {
    fn parse(input: ParseStream) -> Result<Self> {
        Ok(Self {
            key: input.parse()?,
            eq: input.parse()?,
            value: input.parse()?,
        })
    }
}
