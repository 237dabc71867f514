use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::{Generics, Visibility};

use crate::case_label::parser::{Case, ParsedCaseLabeled, Payload};
use crate::idents::ContainerIdent;

/// A struct holding all the data necessary to generate a TokenStream.
/// Once constructed, the code generation cannot fail.
pub struct CaseLabeledGenerator {
    enum_ident: ContainerIdent,
    label_ident: ContainerIdent,
    vis: Visibility,
    generics: Generics,
    cases: Vec<Case>,
}

impl From<ParsedCaseLabeled> for CaseLabeledGenerator {
    fn from(parsed: ParsedCaseLabeled) -> Self {
        let label_ident = ContainerIdent(format_ident!("{}Label", parsed.enum_ident.0));
        CaseLabeledGenerator {
            enum_ident: parsed.enum_ident,
            label_ident,
            vis: parsed.vis,
            generics: parsed.generics,
            cases: parsed.cases,
        }
    }
}

impl CaseLabeledGenerator {
    pub fn generate(self) -> TokenStream {
        // An enum without cases gets no label type and no accessor.
        if self.cases.is_empty() {
            return TokenStream::new();
        }

        let label_enum = self.generate_label_enum();
        let accessor = self.generate_accessor();
        let conformance = self.generate_conformance();

        quote! {
            #label_enum
            #accessor
            #conformance
        }
    }

    /// The label enum: one unit variant per case, in declaration order.
    fn generate_label_enum(&self) -> TokenStream {
        let vis = &self.vis;
        let label_ident = &self.label_ident;
        let variants = self.cases.iter().map(|case| &case.ident);
        let all = self.cases.iter().map(|case| {
            let variant = &case.ident;
            quote! { #label_ident::#variant }
        });
        let doc = format!("Payload-free labels for the cases of `{}`.", self.enum_ident);

        quote! {
            #[doc = #doc]
            #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
            #vis enum #label_ident {
                #(#variants,)*
            }

            impl ::case_labeled::CaseList for #label_ident {
                const ALL: &'static [Self] = &[#(#all),*];
            }
        }
    }

    /// The accessor: an exhaustive dispatch with one arm per case.
    /// Payloads are matched with rest patterns and never bound.
    fn generate_accessor(&self) -> TokenStream {
        let vis = &self.vis;
        let enum_ident = &self.enum_ident;
        let label_ident = &self.label_ident;
        let (impl_generics, ty_generics, where_clause) = self.generics.split_for_impl();
        let arms = self
            .cases
            .iter()
            .map(|case| generate_match_arm(case, label_ident));

        quote! {
            impl #impl_generics #enum_ident #ty_generics #where_clause {
                /// Returns the label identifying this value's case,
                /// ignoring any payload.
                #vis fn case_label(&self) -> #label_ident {
                    match self {
                        #(#arms)*
                    }
                }
            }
        }
    }

    /// The `CaseLabeled` conformance, delegating to the inherent accessor,
    /// plus `PartialEq` in both directions between the enum and its label
    /// type so values and labels compare with operator syntax.
    fn generate_conformance(&self) -> TokenStream {
        let enum_ident = &self.enum_ident;
        let label_ident = &self.label_ident;
        let (impl_generics, ty_generics, where_clause) = self.generics.split_for_impl();

        quote! {
            impl #impl_generics ::case_labeled::CaseLabeled for #enum_ident #ty_generics #where_clause {
                type CaseLabel = #label_ident;

                fn case_label(&self) -> Self::CaseLabel {
                    #enum_ident::case_label(self)
                }
            }

            impl #impl_generics ::core::cmp::PartialEq<#label_ident> for #enum_ident #ty_generics #where_clause {
                fn eq(&self, other: &#label_ident) -> bool {
                    self.case_label() == *other
                }
            }

            impl #impl_generics ::core::cmp::PartialEq<#enum_ident #ty_generics> for #label_ident #where_clause {
                fn eq(&self, other: &#enum_ident #ty_generics) -> bool {
                    *self == other.case_label()
                }
            }
        }
    }
}

fn generate_match_arm(case: &Case, label_ident: &ContainerIdent) -> TokenStream {
    let variant = &case.ident;
    match case.payload {
        Payload::None => quote! { Self::#variant => #label_ident::#variant, },
        Payload::Tuple => quote! { Self::#variant(..) => #label_ident::#variant, },
        Payload::Struct => quote! { Self::#variant { .. } => #label_ident::#variant, },
    }
}
