//! Non-fatal notices produced while evaluating formulas.

use std::fmt;

/// Something odd found during evaluation. Evaluation always continues with a
/// substitute value; diagnostics only report what was substituted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Diagnostic {
    /// A `{N}` reference pointed past the end of the collection; 0 was used.
    ReferenceOutOfRange { index: usize, len: usize },
    /// An operator token that is not one of `+ - * /`; the step was skipped.
    UnknownOperator(String),
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::ReferenceOutOfRange { index, len } => write!(
                f,
                "cell reference {{{}}} is out of range ({} cells), using 0",
                index, len
            ),
            Diagnostic::UnknownOperator(op) => write!(f, "unknown operator '{}' skipped", op),
        }
    }
}
