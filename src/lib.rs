//! Payload-free case labels for enums.
//!
//! Deriving [`CaseLabeled`](macro@CaseLabeled) on an enum generates a
//! companion label enum mirroring the cases of the annotated enum without
//! their payloads, a `case_label` accessor projecting every value onto its
//! label, and an implementation of the [`CaseLabeled`] trait enabling
//! label-based comparison.
//!
//! Case labels offer a way of grouping different values of a type and
//! making them comparable. They are primarily intended for enums whose
//! cases carry associated data, where the derived `PartialEq` (if any)
//! compares payloads too.
//!
//! ```
//! use case_labeled::CaseLabeled;
//!
//! #[derive(CaseLabeled)]
//! enum Payment {
//!     Cash,
//!     Card(u32),
//!     Transfer { iban: Option<String> },
//! }
//!
//! let card = Payment::Card(5);
//!
//! assert_eq!(card.case_label(), PaymentLabel::Card);
//! assert!(card.label_eq(&Payment::Card(9)));
//! assert!(card == PaymentLabel::Card);
//! assert!(PaymentLabel::Cash == Payment::Cash);
//! ```

pub use case_labeled_derive::CaseLabeled;

/// A type whose values can be projected onto a payload-free case label.
///
/// The required [`case_label`](CaseLabeled::case_label) accessor is total:
/// every value maps to exactly one label, independent of any payload it
/// carries. The provided methods reduce to label equality.
///
/// For label to value comparisons with operator syntax, the derive macro
/// additionally generates `PartialEq` implementations in both directions
/// between the enum and its label type.
pub trait CaseLabeled {
    /// The payload-free label type.
    type CaseLabel: PartialEq;

    /// Returns the label identifying this value's case.
    fn case_label(&self) -> Self::CaseLabel;

    /// Whether `self` and `other` are the same case, ignoring payloads.
    fn label_eq(&self, other: &Self) -> bool {
        self.case_label() == other.case_label()
    }

    /// Whether `self` is the case identified by `label`.
    fn has_label(&self, label: &Self::CaseLabel) -> bool {
        self.case_label() == *label
    }
}

/// A closed set of case labels that can be enumerated.
pub trait CaseList: Sized + 'static {
    /// Every label of the set, in declaration order.
    const ALL: &'static [Self];
}
