use anyhow::Context;
use clap::Parser;
use line_reverser::domain::ports::ConfigProvider;
use line_reverser::utils::{logger, validation::Validate};
use line_reverser::{CliConfig, FileIoHandler, ReversalEngine, ReverserError, RunSummary, Settings};

fn main() {
    let cli = CliConfig::parse();

    let settings = match cli.resolve() {
        Ok(settings) => settings,
        Err(e) => fail(&e.into()),
    };

    // 初始化日誌
    logger::init_console_logger(settings.log_format());
    tracing::debug!("Resolved settings: {:?}", settings);

    if let Err(e) = settings.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        fail(&e.into());
    }

    match run(&settings) {
        Ok(summary) => {
            println!(
                "✅ Appended {} reversed lines to {}",
                summary.lines_written,
                settings.output_path()
            );
        }
        Err(e) => {
            tracing::error!("❌ Line reversal failed: {:#}", e);
            fail(&e);
        }
    }
}

fn run(settings: &Settings) -> anyhow::Result<RunSummary> {
    let handler = FileIoHandler::from_config(settings).context("Failed to open data files")?;
    let mut engine = ReversalEngine::new_with_monitoring(handler, settings.monitor_enabled())
        .with_worker_threads(settings.worker_threads());

    let summary = engine.run().context("Pipeline aborted")?;
    engine
        .into_handler()
        .close()
        .context("Failed to flush the output file")?;

    Ok(summary)
}

fn fail(e: &anyhow::Error) -> ! {
    eprintln!("❌ {:#}", e);

    let code = match e.downcast_ref::<ReverserError>() {
        Some(err) => {
            eprintln!("💡 Suggestion: {}", err.recovery_suggestion());
            err.exit_code()
        }
        None => 1,
    };
    std::process::exit(code);
}
