use super::*;
use convert_case::{Case, Casing};
use proc_macro2::Span;
use quote::quote;
use syn::{
    parse_macro_input,
    braced,
    parenthesized,
    Token,
    Type,
    Result,
    Ident,
    Expr,
    LitStr,
    LitInt,
    token,
    punctuated::Punctuated,
};
use syn::parse::{Parse, ParseStream};

struct MessageArgDefn
{
    name: Ident,
    _colon: Token![:],
    typename: Type,
    _dot: Option<Token![.]>,
    expr: Option<Expr>
}

enum MessageKind
{
    Text(String),
    Numeric(u16),
}

struct MessageDefn
{
    kind: MessageKind,
    typename: Ident,
    _arrow1: Token![=>],
    _brace: token::Brace,
      _paren: token::Paren,
        args: Punctuated<MessageArgDefn, Token![,]>,
      _arrow2: Token![=>],
      value: LitStr,
}

struct MessageDefnList
{
    messages: Punctuated<MessageDefn, Token![,]>
}

impl Parse for MessageArgDefn
{
    fn parse(input: ParseStream) -> Result<Self>
    {
        let name = input.parse::<Ident>()?;
        let _colon = input.parse::<Token![:]>()?;
        let typename = input.parse::<Type>()?;
        let _dot = input.parse::<Option<Token![.]>>()?;
        let expr = if _dot.is_some() { Some(input.parse::<Expr>()?) } else { None };

        Ok(Self { name, _colon, typename, _dot, expr })
    }
}

impl Parse for MessageDefn
{
    fn parse(input: ParseStream) -> Result<Self>
    {
        let content1;
        let content2;

        let (kind, typename) = if input.peek(LitInt)
        {
            // 433(NicknameInUse)
            let code = input.parse::<LitInt>()?;
            let value = code.base10_parse::<u16>()?;
            if value > 999
            {
                return Err(syn::Error::new(code.span(), "numeric codes have at most three digits"));
            }
            let name;
            parenthesized!(name in input);
            (MessageKind::Numeric(value), name.parse::<Ident>()?)
        }
        else
        {
            // Privmsg, or ChannelMode("MODE")
            let name = input.parse::<Ident>()?;
            let command = if input.peek(token::Paren)
            {
                let command;
                parenthesized!(command in input);
                command.parse::<LitStr>()?.value()
            }
            else
            {
                name.to_string().to_uppercase()
            };
            (MessageKind::Text(command), name)
        };

        Ok(Self {
            kind,
            typename,
            _arrow1: input.parse()?,
            _brace: braced!(content1 in input),
            _paren: parenthesized!(content2 in content1),
            args: content2.parse_terminated(MessageArgDefn::parse)?,
            _arrow2: content1.parse()?,
            value: content1.parse()?
        })
    }
}

impl Parse for MessageDefnList
{
    fn parse(input: ParseStream) -> Result<Self>
    {
        Ok(Self {
            messages: input.parse_terminated(MessageDefn::parse)?
        })
    }
}

pub fn define_messages(input: TokenStream) -> TokenStream
{
    let input = parse_macro_input!(input as MessageDefnList);

    generate_message_list(input)
}

fn generate_message_list(input: MessageDefnList) -> TokenStream
{
    let mut out = proc_macro2::TokenStream::new();

    for message in input.messages
    {
        let fn_name = Ident::new(&message.typename.to_string().to_case(Case::Snake), Span::call_site());
        let format_str = message.value;

        let mut message_args = Vec::new();
        let mut message_argtypes = Vec::new();

        let mut format_args = Vec::new();
        let mut format_values = Vec::new();

        for arg in message.args
        {
            message_args.push(arg.name.clone());
            message_argtypes.push(arg.typename.clone());
            format_args.push(arg.name.clone());
            let fval_name = arg.name;
            let fval_val = if let Some(e) = arg.expr {
                quote!(#fval_name.#e)
            } else {
                quote!(#fval_name)
            };
            format_values.push(fval_val);
        }

        let body = quote!(format!(#format_str, #( #format_args = #format_values ),*));

        let (doc, return_type, construct) = match message.kind
        {
            MessageKind::Numeric(code) => {
                let doc = format!("Numeric `{:03}` ({}): `{}`", code, message.typename, format_str.value());
                let construct = quote!(crate::NumericReply::new(source, crate::Numeric::from_checked(#code), #body));
                (doc, quote!(crate::NumericReply), construct)
            }
            MessageKind::Text(command) => {
                let doc = format!("`{}` message: `{}`", command, format_str.value());
                let construct = quote!(crate::TextReply::new(source, #command, #body));
                (doc, quote!(crate::TextReply), construct)
            }
        };

        out.extend(quote!(
            #[doc = #doc]
            pub fn #fn_name(source: &(impl crate::Identifier + ?Sized), #( #message_args: #message_argtypes ),* ) -> #return_type
            {
                #construct
            }
        ));
    }

    out.into()
}
