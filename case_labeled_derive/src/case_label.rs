use proc_macro2::TokenStream;

use crate::case_label::{generator::CaseLabeledGenerator, parser::ParsedCaseLabeled};
use crate::diagnostic::DiagnosticPolicy;

mod generator;
mod parser;

pub fn derive_case_labeled_impl(input: TokenStream, diagnostics: DiagnosticPolicy) -> TokenStream {
    ParsedCaseLabeled::parse(input)
        .map(CaseLabeledGenerator::from)
        .map(CaseLabeledGenerator::generate)
        .unwrap_or_else(|err| match diagnostics {
            DiagnosticPolicy::Emit => err.into_compile_error(),
            DiagnosticPolicy::Suppress => TokenStream::new(),
        })
}
