use anyhow::Result;
use rmcp::{transport::stdio, ServiceExt};

mod arithmetic;
mod calculator;
mod calculator_tests;
mod capabilities;
mod logging;
mod outcome;

use calculator::CalculatorService;

#[tokio::main]
async fn main() -> Result<()> {
    logging::init();
    tracing::info!("starting calculator MCP server on stdio");

    let service = CalculatorService::new()
        .serve(stdio())
        .await
        .inspect_err(|e| tracing::error!("serving error: {:?}", e))?;
    let reason = service.waiting().await?;

    tracing::info!(?reason, "input stream closed, shutting down");
    Ok(())
}
