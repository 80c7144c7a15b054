use schemars::JsonSchema;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, JsonSchema)]
pub struct OperationDescriptor {
    pub name: &'static str,
    pub description: &'static str,
}

/// Static description of the server, returned as-is by `get_capabilities`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, JsonSchema)]
pub struct Capabilities {
    pub server: &'static str,
    pub version: &'static str,
    pub operations: &'static [OperationDescriptor],
    pub usage: &'static str,
}

pub static CAPABILITIES: Capabilities = Capabilities {
    server: "Calculator MCP Server",
    version: env!("CARGO_PKG_VERSION"),
    operations: &[
        OperationDescriptor {
            name: "add",
            description: "Addition of two numbers",
        },
        OperationDescriptor {
            name: "subtract",
            description: "Subtraction of two numbers",
        },
        OperationDescriptor {
            name: "multiply",
            description: "Multiplication of two numbers",
        },
        OperationDescriptor {
            name: "divide",
            description: "Division with zero-check",
        },
    ],
    usage: "Ask natural language questions like 'What is 5 + 3?'",
};
