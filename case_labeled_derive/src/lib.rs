use proc_macro::TokenStream;

use crate::diagnostic::DiagnosticPolicy;

mod case_label;
mod diagnostic;
mod idents;

/// Derives case labels for the annotated enum.
///
/// Generates a label enum named `{Enum}Label` with one unit variant per
/// case of the annotated enum, a `case_label` accessor returning the label
/// of a value while ignoring any payload, and implementations of the
/// `CaseLabeled` and `CaseList` traits from the `case_labeled` crate,
/// together with `PartialEq` in both directions between the enum and its
/// label type.
///
/// Refer to the `case_labeled` crate documentation for usage examples.
#[proc_macro_derive(CaseLabeled)]
pub fn derive_case_labeled(input: TokenStream) -> TokenStream {
    case_label::derive_case_labeled_impl(input.into(), DiagnosticPolicy::Emit).into()
}
