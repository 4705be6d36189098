use crate::config::CliArgs;
use crate::core::engine::CalculatorEngine;
use crate::domain::ports::InterestFormula;
use crate::utils::error::CalcError;
use crate::utils::logger;
use std::io;

/// Runs one calculator against the process's stdin and stdout and
/// returns the exit status.
pub fn run<F: InterestFormula>(formula: F, args: &CliArgs) -> i32 {
    if args.log_json {
        logger::init_json_logger(args.verbose);
    } else {
        logger::init_cli_logger(args.verbose);
    }

    let kind = formula.kind();
    tracing::info!("Starting {} interest calculator", kind);

    let settings = match args.load_settings(kind) {
        Ok(settings) => settings,
        Err(e) => return report_failure(&e),
    };
    tracing::debug!("Resolved settings: {:?}", settings);

    let engine = CalculatorEngine::with_settings(formula, settings);
    let stdin = io::stdin();
    let stdout = io::stdout();

    match engine.run(stdin.lock(), stdout.lock()) {
        Ok(calculation) => {
            tracing::info!(result = calculation.result, "{} interest calculated", kind);
            0
        }
        Err(e) => report_failure(&e),
    }
}

fn report_failure(e: &CalcError) -> i32 {
    tracing::error!(
        "❌ Calculation failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );

    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 Suggestion: {}", e.recovery_suggestion());

    e.exit_code()
}
