use proc_macro2::*;
use quote::quote;
use syn::*;

const INT_TYPES: [&str; 12] = ["u8", "u16", "u32", "u64", "u128", "usize", "i8", "i16", "i32", "i64", "i128", "isize"];

/// Parse the derive input and make sure it's a fieldless, non-generic enum with at least 1 variant
fn parse_enum(item: TokenStream, derive_name: &str) -> core::result::Result<(DeriveInput, DataEnum), TokenStream> {
	let input_parsed = match syn::parse2::<DeriveInput>(item) {
	    Ok(derived_input) => derived_input,
	    Err(err) => return Err(err.to_compile_error()),
	};

	let body_data = match &input_parsed.data {
		Data::Enum(body) => body.clone(),
		_ => return Err(quote!( compile_error!("Not an enum"); )),
	};

	if !input_parsed.generics.params.is_empty() {
		let msg = format!("Generic enums are not supported by {derive_name}");
		return Err(Error::new_spanned(&input_parsed.generics, msg).to_compile_error());
	}

	if body_data.variants.is_empty() {
		let msg = format!("{derive_name} requires an enum with at least 1 variant");
		return Err(Error::new_spanned(&input_parsed.ident, msg).to_compile_error());
	}

	for variant in &body_data.variants {
		if !matches!(variant.fields, Fields::Unit) {
			let msg = format!("Only variants without fields are supported by {derive_name}, found fields on '{}'", variant.ident);
			return Err(Error::new_spanned(&variant.fields, msg).to_compile_error());
		}
	}

	Ok((input_parsed, body_data))
}

/// Get the integer type from `#[repr(..)]`, other repr items are skipped
fn get_repr(attrs: &[Attribute]) -> Result<Option<Ident>> {
    let mut repr = None;
    for attr in attrs.iter().filter(|attr| attr.path().is_ident("repr")) {
        attr.parse_nested_meta(|meta| {
            if let Some(ident) = meta.path.get_ident() {
                if INT_TYPES.iter().any(|ty| ident == ty) {
                    repr = Some(ident.clone());
                }
            }
            // e.g. `align(8)`
            if meta.input.peek(token::Paren) {
                let _content;
                syn::parenthesized!(_content in meta.input);
            }
            Ok(())
        })?;
    }
    Ok(repr)
}

pub fn enum_traits(item: TokenStream) -> TokenStream {
    let (input_parsed, body_data) = match parse_enum(item, "EnumTraits") {
        Ok(parsed) => parsed,
        Err(err) => return err,
    };

    let repr = match get_repr(&input_parsed.attrs) {
        Ok(repr) => repr.unwrap_or_else(|| Ident::new("isize", Span::call_site())),
        Err(err) => return err.to_compile_error(),
    };

    let ident = input_parsed.ident;
    let name = ident.to_string();

    let variants = body_data.variants.iter().map(|variant| &variant.ident).collect::<Vec<_>>();
    let names = variants.iter().map(|variant| variant.to_string()).collect::<Vec<_>>();

    quote!{
        impl xenum_base::EnumTraitsT for #ident {
            type Underlying = #repr;

            const DESCRIPTOR: xenum_base::EnumDescriptor<Self, #repr> = xenum_base::EnumDescriptor::new(
                #name,
                &[#(Self::#variants,)*],
                &[#(#names,)*],
                &[#(Self::#variants as #repr,)*],
            );

            #[inline]
            fn to_underlying(self) -> #repr {
                self as #repr
            }
        }
    }
}

pub fn enum_display(item: TokenStream) -> TokenStream {
    let (input_parsed, body_data) = match parse_enum(item, "EnumDisplay") {
        Ok(parsed) => parsed,
        Err(err) => return err,
    };

    let ident = input_parsed.ident;

    let mut members = Vec::with_capacity(body_data.variants.len());
    let mut names = Vec::with_capacity(body_data.variants.len());

    for variant in &body_data.variants {
        let mut display = None;
        for attr in variant.attrs.iter().filter(|attr| attr.path().is_ident("display")) {
            if display.is_some() {
                let error_msg = format!("Duplicate `display` for member '{}'", variant.ident);
                return quote!(compile_error!(#error_msg););
            }
            match attr.parse_args::<LitStr>() {
                Ok(lit) => display = Some(lit.value()),
                Err(err) => return err.to_compile_error(),
            }
        }

        members.push(variant.ident.clone());
        names.push(display.unwrap_or_else(|| variant.ident.to_string()));
    }

    quote!{
        impl core::fmt::Display for #ident {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                match self {
                    #(#ident::#members => f.pad(#names),)*
                }
            }
        }
    }
}

pub fn enum_from_str(item: TokenStream) -> TokenStream {
    let (input_parsed, _) = match parse_enum(item, "EnumFromStr") {
        Ok(parsed) => parsed,
        Err(err) => return err,
    };

    let ident = input_parsed.ident;

    quote!{
        impl core::str::FromStr for #ident {
            type Err = xenum_base::Error;

            fn from_str(s: &str) -> core::result::Result<Self, Self::Err> {
                xenum_base::from_string::<Self>(s)
            }
        }
    }
}
