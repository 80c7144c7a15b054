#[cfg(test)]
mod tests {
    use crate::calculator::{CalculatorService, OperandsRequest};
    use crate::capabilities::CAPABILITIES;
    use crate::outcome::DivisionOutcome;
    use rmcp::handler::server::wrapper::Parameters;
    use rmcp::ServerHandler;

    fn operands(a: f64, b: f64) -> Parameters<OperandsRequest> {
        Parameters(OperandsRequest { a, b })
    }

    #[test]
    fn test_basic_arithmetic() {
        let calculator = CalculatorService::new();

        assert_eq!(calculator.add(operands(5.0, 3.0)), "8.0");
        assert_eq!(calculator.add(operands(-2.0, 7.0)), "5.0");
        assert_eq!(calculator.subtract(operands(10.0, 3.0)), "7.0");
        assert_eq!(calculator.subtract(operands(5.0, 8.0)), "-3.0");
        assert_eq!(calculator.multiply(operands(4.0, 5.0)), "20.0");
        assert_eq!(calculator.multiply(operands(-3.0, 6.0)), "-18.0");
    }

    #[test]
    fn test_fractional_results() {
        let calculator = CalculatorService::new();

        assert_eq!(calculator.multiply(operands(1.5, 3.0)), "4.5");
        assert_eq!(calculator.add(operands(0.5, 0.25)), "0.75");
    }

    #[test]
    fn test_non_finite_results_render_as_null() {
        let calculator = CalculatorService::new();

        assert_eq!(calculator.multiply(operands(f64::MAX, 2.0)), "null");
        assert_eq!(calculator.add(operands(f64::NAN, 1.0)), "null");
    }

    #[test]
    fn test_divide() {
        let calculator = CalculatorService::new();

        let outcome = calculator.divide(operands(10.0, 2.0)).0;
        assert_eq!(outcome, DivisionOutcome::success(5.0));

        let outcome = calculator.divide(operands(1.0, 4.0)).0;
        assert_eq!(outcome.result, Some(0.25));
    }

    #[test]
    fn test_divide_by_zero_is_reported() {
        let calculator = CalculatorService::new();

        for dividend in [7.0, -7.0, 0.0, 1e300] {
            let outcome = calculator.divide(operands(dividend, 0.0)).0;
            assert!(!outcome.success);
            assert_eq!(outcome.result, None);
            assert_eq!(outcome.error.as_deref(), Some("Cannot divide by zero"));
        }
    }

    #[test]
    fn test_capabilities_are_static() {
        let calculator = CalculatorService::new();

        let first = calculator.get_capabilities().0;
        calculator.add(operands(1.0, 2.0));
        calculator.divide(operands(1.0, 0.0));
        let second = calculator.get_capabilities().0;

        assert_eq!(first, second);
        assert_eq!(first, CAPABILITIES);
        assert_eq!(first.server, "Calculator MCP Server");
        assert_eq!(first.version, "1.0.0");

        let names: Vec<_> = first.operations.iter().map(|op| op.name).collect();
        assert_eq!(names, ["add", "subtract", "multiply", "divide"]);
    }

    #[test]
    fn test_capabilities_serialization() {
        let value = serde_json::to_value(CAPABILITIES).unwrap();

        assert_eq!(value["operations"][3]["description"], "Division with zero-check");
        assert_eq!(
            value["usage"],
            "Ask natural language questions like 'What is 5 + 3?'"
        );
    }

    #[test]
    fn test_server_info() {
        let calculator = CalculatorService::new();
        let info = calculator.get_info();

        assert_eq!(info.server_info.name, "calculator");
        assert_eq!(info.server_info.version, "1.0.0");
        assert!(info.capabilities.tools.is_some());
        assert!(info.instructions.unwrap().contains("divide"));
    }
}
