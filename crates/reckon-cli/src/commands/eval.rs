//! `reckon eval <operation> <num1> <num2>`: one calculation, then exit.

use tracing::instrument;

use reckon_core::{
    application::Calculator,
    domain::{Operation, format_number, parse_operand},
};

use crate::{
    cli::{EvalArgs, OutputFormat},
    error::{CliError, CliResult},
    output::OutputManager,
};

#[instrument(skip_all, fields(operation = %args.operation))]
pub fn execute(args: EvalArgs, calculator: &Calculator, output: &OutputManager) -> CliResult<()> {
    let operation: Operation = args.operation.parse()?;
    let a = parse_operand(&args.operand1)?;
    let b = parse_operand(&args.operand2)?;

    let result = calculator.perform_operation(operation, a, b)?;

    if output.format() == OutputFormat::Json {
        let calculation = calculator.last()?.ok_or_else(|| CliError::InvalidInput {
            message: "no calculation was recorded".into(),
            source: None,
        })?;
        output.json(&calculation)?;
    } else {
        output.result(&format_number(result))?;
    }

    Ok(())
}
