//! Integer arithmetic for the secondary scene
//!
//! Both operands are kept as raw text and reparsed on every recompute;
//! any failure — unparseable operand, division by zero, overflow — shows
//! up as the literal sentinel `"NaN"`.  The user cannot tell the failure
//! modes apart and that is intentional.

/// Displayed whenever a result cannot be computed.
pub const NAN_SENTINEL: &str = "NaN";

/// The four operations the dropdown offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Operator {
    #[default]
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    /// Dropdown order.
    pub const ALL: [Operator; 4] = [
        Operator::Add,
        Operator::Subtract,
        Operator::Multiply,
        Operator::Divide,
    ];

    pub fn symbol(&self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Subtract => "-",
            Operator::Multiply => "*",
            Operator::Divide => "/",
        }
    }
}

/// Checked 32-bit evaluation.
///
/// `None` covers division by zero and every overflow case, including
/// `i32::MIN / -1`.  Division truncates toward zero.
pub fn evaluate(op: Operator, a: i32, b: i32) -> Option<i32> {
    match op {
        Operator::Add => a.checked_add(b),
        Operator::Subtract => a.checked_sub(b),
        Operator::Multiply => a.checked_mul(b),
        Operator::Divide => a.checked_div(b),
    }
}

/// Parse both operands and evaluate, producing the display string.
///
/// Empty, non-numeric, and out-of-range operand text all fail the parse
/// and yield the sentinel directly, without evaluating.
pub fn compute_display(a_text: &str, b_text: &str, op: Operator) -> String {
    let (Ok(a), Ok(b)) = (a_text.parse::<i32>(), b_text.parse::<i32>()) else {
        return NAN_SENTINEL.to_string();
    };
    match evaluate(op, a, b) {
        Some(result) => result.to_string(),
        None => NAN_SENTINEL.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_operator_is_add() {
        assert_eq!(Operator::default(), Operator::Add);
        assert_eq!(Operator::ALL[0], Operator::Add);
    }

    #[test]
    fn symbols_in_dropdown_order() {
        let symbols: Vec<&str> = Operator::ALL.iter().map(|op| op.symbol()).collect();
        assert_eq!(symbols, ["+", "-", "*", "/"]);
    }

    #[test]
    fn basic_operations() {
        assert_eq!(compute_display("6", "3", Operator::Divide), "2");
        assert_eq!(compute_display("-4", "5", Operator::Multiply), "-20");
        assert_eq!(compute_display("2", "3", Operator::Add), "5");
        assert_eq!(compute_display("2", "3", Operator::Subtract), "-1");
    }

    #[test]
    fn division_by_zero_is_nan() {
        assert_eq!(compute_display("7", "0", Operator::Divide), "NaN");
    }

    #[test]
    fn division_truncates_toward_zero() {
        assert_eq!(compute_display("-7", "2", Operator::Divide), "-3");
        assert_eq!(compute_display("7", "-2", Operator::Divide), "-3");
    }

    #[test]
    fn unparseable_operands_are_nan() {
        assert_eq!(compute_display("abc", "3", Operator::Add), "NaN");
        assert_eq!(compute_display("3", "abc", Operator::Add), "NaN");
        assert_eq!(compute_display("", "", Operator::Add), "NaN");
        assert_eq!(compute_display("1.5", "2", Operator::Add), "NaN");
        // Out of i32 range fails the parse, not the evaluation.
        assert_eq!(compute_display("99999999999", "1", Operator::Add), "NaN");
    }

    #[test]
    fn overflow_is_nan() {
        let max = i32::MAX.to_string();
        let min = i32::MIN.to_string();
        assert_eq!(compute_display(&max, "1", Operator::Add), "NaN");
        assert_eq!(compute_display(&min, "1", Operator::Subtract), "NaN");
        assert_eq!(compute_display(&max, "2", Operator::Multiply), "NaN");
        assert_eq!(compute_display(&min, "-1", Operator::Divide), "NaN");
    }

    #[test]
    fn recompute_is_idempotent() {
        let first = compute_display("12", "34", Operator::Multiply);
        let second = compute_display("12", "34", Operator::Multiply);
        assert_eq!(first, second);
        assert_eq!(first, "408");
    }
}
