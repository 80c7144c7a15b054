use rmcp::{
    handler::server::{
        router::tool::ToolRouter,
        wrapper::{Json, Parameters},
    },
    model::{Implementation, ProtocolVersion, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router, ServerHandler,
};
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::Value;

use crate::arithmetic;
use crate::capabilities::{Capabilities, CAPABILITIES};
use crate::outcome::DivisionOutcome;

#[derive(Debug, Clone)]
pub struct CalculatorService {
    tool_router: ToolRouter<Self>,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct OperandsRequest {
    #[schemars(description = "The first number")]
    pub a: f64,
    #[schemars(description = "The second number")]
    pub b: f64,
}

// JSON has no literal for NaN or the infinities, they come out as `null`.
fn render(value: f64) -> String {
    Value::from(value).to_string()
}

#[tool_router]
impl CalculatorService {
    pub fn new() -> Self {
        Self {
            tool_router: Self::tool_router(),
        }
    }

    #[tool(
        description = "Add two numbers together and return the sum. Examples: add(5, 3) -> 8.0, add(-2, 7) -> 5.0"
    )]
    pub fn add(&self, Parameters(OperandsRequest { a, b }): Parameters<OperandsRequest>) -> String {
        let result = arithmetic::add(a, b);
        tracing::info!(a, b, result, "add");
        render(result)
    }

    #[tool(
        description = "Subtract the second number from the first (a - b). Examples: subtract(10, 3) -> 7.0, subtract(5, 8) -> -3.0"
    )]
    pub fn subtract(
        &self,
        Parameters(OperandsRequest { a, b }): Parameters<OperandsRequest>,
    ) -> String {
        let result = arithmetic::subtract(a, b);
        tracing::info!(a, b, result, "subtract");
        render(result)
    }

    #[tool(
        description = "Multiply two numbers together and return the product. Examples: multiply(4, 5) -> 20.0, multiply(-3, 6) -> -18.0"
    )]
    pub fn multiply(
        &self,
        Parameters(OperandsRequest { a, b }): Parameters<OperandsRequest>,
    ) -> String {
        let result = arithmetic::multiply(a, b);
        tracing::info!(a, b, result, "multiply");
        render(result)
    }

    #[tool(
        description = "Divide the first number by the second (a / b). Returns {success, result} or {success: false, error} when the divisor is zero. Examples: divide(10, 2) -> {\"success\": true, \"result\": 5.0}, divide(7, 0) -> {\"success\": false, \"error\": \"Cannot divide by zero\"}"
    )]
    pub fn divide(
        &self,
        Parameters(OperandsRequest { a, b }): Parameters<OperandsRequest>,
    ) -> Json<DivisionOutcome> {
        let outcome = DivisionOutcome::from(arithmetic::divide(a, b));
        match (&outcome.result, &outcome.error) {
            (Some(result), _) => tracing::info!(a, b, result, "divide"),
            (None, error) => tracing::info!(a, b, ?error, "divide refused"),
        }
        Json(outcome)
    }

    #[tool(description = "Get information about calculator capabilities: available operations and descriptions")]
    pub fn get_capabilities(&self) -> Json<Capabilities> {
        tracing::debug!("get_capabilities");
        Json(CAPABILITIES)
    }
}

impl Default for CalculatorService {
    fn default() -> Self {
        Self::new()
    }
}

#[tool_handler]
impl ServerHandler for CalculatorService {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "calculator".into(),
                version: env!("CARGO_PKG_VERSION").into(),
                ..Default::default()
            },
            instructions: Some(
                "Calculator server with four operations: add, subtract, multiply and divide. Each takes two numbers `a` and `b`. Division by zero is reported in the result instead of failing.".into(),
            ),
        }
    }
}
