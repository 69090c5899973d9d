//! cellflow_engine - Reactive cell model, flat expression evaluator and
//! fixed-point propagation.

pub mod engine;

#[cfg(test)]
mod tests {
    use crate::engine::*;

    #[test]
    fn test_literal_inputs_keep_parsed_value() {
        let mut cells = parse_cells("1.5, 0, 1e3, x");
        update_cells(&mut cells).unwrap();
        assert_eq!(cells[0].value(), 1.5);
        assert_eq!(cells[1].value(), 0.0);
        assert_eq!(cells[2].value(), 1000.0);
        assert!(cells[3].value().is_nan());
    }

    #[test]
    fn test_expression_properties() {
        assert_eq!(evaluate_expression("10+7*5"), 85.0);
        assert_eq!(evaluate_expression("8/0"), f64::INFINITY);
        assert!(evaluate_expression("0/0").is_nan());
    }

    #[test]
    fn test_formula_reads_current_values() {
        let mut cells = parse_cells("5, 2");
        assert_eq!(evaluate_formula("{0}+1", &cells), 6.0);

        cells[0].set_input(9.0);
        assert_eq!(evaluate_formula("{0}+1", &cells), 10.0);
    }

    #[test]
    fn test_chain_updates_after_edit() {
        let mut cells = parse_cells("2, 18, =2*{0}, 9, ={2}+1*5");
        update_cells(&mut cells).unwrap();

        cells[0].set_input(3.0);
        update_cells(&mut cells).unwrap();

        let values: Vec<f64> = cells.iter().map(Cell::value).collect();
        assert_eq!(values, vec![3.0, 18.0, 6.0, 9.0, 35.0]);
    }

    #[test]
    fn test_diagnostic_display() {
        let diag = Diagnostic::ReferenceOutOfRange { index: 9, len: 3 };
        assert_eq!(
            diag.to_string(),
            "cell reference {9} is out of range (3 cells), using 0"
        );
        assert_eq!(
            Diagnostic::UnknownOperator("%".to_string()).to_string(),
            "unknown operator '%' skipped"
        );
    }
}
