use proc_macro2::{Span, TokenStream};
use syn::{Data, DataEnum, DeriveInput, Fields, Generics, Variant, Visibility};

use crate::diagnostic::Diagnostic;
use crate::idents::{ContainerIdent, VariantIdent};

/// A "dumb" reading of the annotated declaration.
/// There is no check of consistency between cases here: duplicate or
/// reserved-word case names are passed through as-is.
pub struct ParsedCaseLabeled {
    pub enum_ident: ContainerIdent,
    pub vis: Visibility,
    pub generics: Generics,
    pub cases: Vec<Case>,
}

/// One case of the annotated enum: its name and the shape of its payload.
/// The payload shape is only needed to form the matching pattern; payload
/// contents are never inspected.
pub struct Case {
    pub ident: VariantIdent,
    pub payload: Payload,
}

#[derive(Clone, Copy)]
pub enum Payload {
    None,
    Tuple,
    Struct,
}

impl ParsedCaseLabeled {
    pub fn parse(input: TokenStream) -> syn::Result<ParsedCaseLabeled> {
        let derive_input: DeriveInput = syn::parse2(input)?;

        let data_enum = match derive_input.data {
            Data::Enum(data) => data,
            Data::Struct(_) | Data::Union(_) => {
                Err(Diagnostic::RequiresEnum.error(Span::call_site()))?
            }
        };

        Ok(ParsedCaseLabeled {
            enum_ident: ContainerIdent(derive_input.ident),
            vis: derive_input.vis,
            generics: derive_input.generics,
            cases: extract_cases(data_enum),
        })
    }
}

fn extract_cases(data_enum: DataEnum) -> Vec<Case> {
    data_enum.variants.into_iter().map(Case::from).collect()
}

impl From<Variant> for Case {
    fn from(variant: Variant) -> Case {
        let payload = match variant.fields {
            Fields::Unit => Payload::None,
            Fields::Unnamed(_) => Payload::Tuple,
            Fields::Named(_) => Payload::Struct,
        };
        Case {
            ident: VariantIdent(variant.ident),
            payload,
        }
    }
}
