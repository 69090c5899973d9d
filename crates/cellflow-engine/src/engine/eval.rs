//! Flat arithmetic expression evaluation.
//!
//! Expressions are numeric literals joined by the binary operators `+ - * /`.
//! Operators are applied strictly left to right with no precedence, so
//! `10+7*5` is `(10+7)*5 = 85`.
//!
//! There is no unary minus: a leading `-` splits into an empty first operand,
//! which parses as NaN. Malformed operands likewise become NaN and flow
//! through the IEEE-754 arithmetic instead of raising an error.

use regex::Regex;
use std::sync::OnceLock;
use tracing::trace;

use super::diagnostic::Diagnostic;

/// Evaluate an expression, discarding diagnostics.
pub fn evaluate_expression(expr: &str) -> f64 {
    evaluate_expression_with_diagnostics(expr, &mut Vec::new())
}

/// Evaluate an expression, pushing any non-fatal notices into `diagnostics`.
pub fn evaluate_expression_with_diagnostics(expr: &str, diagnostics: &mut Vec<Diagnostic>) -> f64 {
    let compact: String = expr.chars().filter(|c| !c.is_whitespace()).collect();
    fold_tokens(&tokenize(&compact), diagnostics)
}

/// Apply `operand (operator operand)*` tokens left to right.
/// `tokens` must hold at least one operand.
fn fold_tokens(tokens: &[&str], diagnostics: &mut Vec<Diagnostic>) -> f64 {
    let mut result = parse_operand(tokens[0]);
    for pair in tokens[1..].chunks(2) {
        let op = pair[0];
        // An expression ending in an operator has no right-hand token.
        let operand = parse_operand(pair.get(1).copied().unwrap_or(""));
        match apply_operator(result, op, operand) {
            Some(next) => result = next,
            None => {
                trace!(op, "unknown operator");
                diagnostics.push(Diagnostic::UnknownOperator(op.to_string()));
            }
        }
    }

    result
}

/// Split on operator characters, keeping the operators as their own tokens.
/// Always yields at least one (possibly empty) operand token.
fn tokenize(expr: &str) -> Vec<&str> {
    let mut tokens = Vec::new();
    let mut last = 0;
    for m in operator_re().find_iter(expr) {
        tokens.push(&expr[last..m.start()]);
        tokens.push(m.as_str());
        last = m.end();
    }
    tokens.push(&expr[last..]);
    tokens
}

fn parse_operand(token: &str) -> f64 {
    token.parse::<f64>().unwrap_or(f64::NAN)
}

fn apply_operator(lhs: f64, op: &str, rhs: f64) -> Option<f64> {
    match op {
        "+" => Some(lhs + rhs),
        "-" => Some(lhs - rhs),
        "*" => Some(lhs * rhs),
        "/" => Some(lhs / rhs),
        _ => None,
    }
}

fn operator_re() -> &'static Regex {
    static OPERATOR_RE: OnceLock<Regex> = OnceLock::new();
    OPERATOR_RE.get_or_init(|| Regex::new(r"[+\-*/]").expect("operator regex must compile"))
}
