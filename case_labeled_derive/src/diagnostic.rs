use proc_macro2::Span;

/// Whether rejection diagnostics are surfaced as compile errors or
/// swallowed, yielding a silent empty expansion.
///
/// Threaded through the expansion entry point as an explicit parameter;
/// the shipped derive always passes [`DiagnosticPolicy::Emit`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticPolicy {
    Emit,
    Suppress,
}

/// Rejection kinds, each with a fixed user-facing message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Diagnostic {
    /// The annotated item is not an enum.
    RequiresEnum,
}

impl Diagnostic {
    pub fn message(self) -> &'static str {
        match self {
            Diagnostic::RequiresEnum => "CaseLabeled can only be derived for enums",
        }
    }

    pub fn error(self, span: Span) -> syn::Error {
        syn::Error::new(span, self.message())
    }
}
