//! CLI entrypoint for takedown
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Result, anyhow};
use clap::Parser;
use std::io::IsTerminal;
use std::path::Path;
use std::process::ExitCode;
use std::sync::Arc;
use takedown_application::{
    DraftComposer, DraftTakedownInput, DraftTakedownUseCase, ExecutionParams, LlmDraftComposer,
    ModelPlanner, NoProgress, ScriptedPlanner, TakedownError, TakedownPlanner,
    TakedownProgressNotifier, TemplateDraftComposer,
};
use takedown_domain::Model;
use takedown_infrastructure::{
    CapabilityRegistry, ComposerKind, ConfigLoader, DuckDuckGoSearch, FileConfig,
    JsonSchemaToolConverter, LookupStrategy, OpenAiGateway, PlannerKind,
};
use takedown_presentation::{
    Cli, ConsoleFormatter, OutputConfig, PlannerArg, ProgressReporter, SimpleProgress,
    write_export,
};
use tracing::{error, info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let _guard = match init_logging(cli.verbose, cli.log_file.as_deref()) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("{}", ConsoleFormatter::error_banner(&ConsoleFormatter::generic_error(&e)));
            return ExitCode::FAILURE;
        }
    };

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            let message = match e.downcast_ref::<TakedownError>() {
                Some(err) => ConsoleFormatter::error_message(err),
                None => ConsoleFormatter::generic_error(&e),
            };
            eprintln!("{}", ConsoleFormatter::error_banner(&message));
            ExitCode::FAILURE
        }
    }
}

/// Initialize logging based on verbosity level.
///
/// With `--log-file` the subscriber writes through a non-blocking file
/// writer; the returned guard flushes it on drop.
fn init_logging(verbose: u8, log_file: Option<&Path>) -> Result<Option<WorkerGuard>> {
    let filter = match verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    let Some(path) = log_file else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .init();
        return Ok(None);
    };

    let file_name = path
        .file_name()
        .ok_or_else(|| anyhow!("--log-file must name a file: {}", path.display()))?;
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(Path::new("."));
    std::fs::create_dir_all(dir)?;

    let (writer, guard) =
        tracing_appender::non_blocking(tracing_appender::rolling::never(dir, file_name));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(false)
        .with_writer(writer)
        .init();
    Ok(Some(guard))
}

fn load_config(cli: &Cli) -> Result<FileConfig> {
    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow!("Failed to load configuration: {}", e))?
    };

    for issue in config.validate() {
        if issue.is_error() {
            error!("{}", issue.message);
        } else {
            warn!("{}", issue.message);
        }
    }
    Ok(config)
}

async fn run(cli: Cli) -> Result<()> {
    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_ref());
        return Ok(());
    }

    info!("Starting takedown");
    let config = load_config(&cli)?;

    let save = config.output.save && !cli.no_save;
    let output = OutputConfig {
        color: config.output.color,
        show_progress: !cli.quiet,
        directory: cli
            .output_dir
            .clone()
            .or_else(|| config.output.directory.as_ref().map(Into::into)),
        save,
        save_incomplete: cli.save_incomplete,
    };
    if !output.color {
        colored::control::set_override(false);
    }

    let protocol = config.lookup.parse_protocol().0;
    let request = cli.request_input(protocol);
    let model = cli
        .model
        .as_deref()
        .map(Model::from)
        .unwrap_or_else(|| config.model.parse_model().0);
    let api_key = cli
        .api_key()
        .map(str::to_string)
        .or_else(|| config.providers.openai.resolve_api_key());
    let has_api_key = api_key.is_some();

    // === Dependency Injection ===
    let lookup = Arc::new(LookupStrategy::from_config(
        request.lookup_protocol,
        &config.lookup,
    )?);
    let finder = Arc::new(DuckDuckGoSearch::from_config(&config.search)?);
    let tools = Arc::new(CapabilityRegistry::new(lookup, finder));
    let gateway = Arc::new(OpenAiGateway::from_config(
        &config.providers.openai,
        &config.model,
        api_key.as_deref().unwrap_or_default(),
    )?);

    let planner_kind = match cli.planner {
        Some(PlannerArg::Model) => PlannerKind::Model,
        Some(PlannerArg::Scripted) => PlannerKind::Scripted,
        None => config.agent.parse_planner().0,
    };
    let planner: Arc<dyn TakedownPlanner> = match planner_kind {
        PlannerKind::Model => {
            let params = ExecutionParams::default()
                .with_max_tool_turns(config.agent.max_tool_turns)
                .with_max_format_retries(config.agent.max_format_retries);
            Arc::new(
                ModelPlanner::new(gateway, tools, Arc::new(JsonSchemaToolConverter), model)
                    .with_params(params),
            )
        }
        PlannerKind::Scripted => {
            let composer: Arc<dyn DraftComposer> = match config.agent.parse_composer().0 {
                ComposerKind::Model if has_api_key => {
                    Arc::new(LlmDraftComposer::new(gateway, model))
                }
                ComposerKind::Model => {
                    warn!("No API key for the model composer, using the template composer");
                    Arc::new(TemplateDraftComposer)
                }
                ComposerKind::Template => Arc::new(TemplateDraftComposer),
            };
            Arc::new(ScriptedPlanner::new(tools, composer))
        }
    };

    let use_case = DraftTakedownUseCase::new(planner);
    let input = DraftTakedownInput::new(request, has_api_key).with_export(output.save);

    let reporter = (output.show_progress && std::io::stderr().is_terminal())
        .then(ProgressReporter::new);
    let progress: &dyn TakedownProgressNotifier = match &reporter {
        Some(reporter) => reporter,
        None if output.show_progress => &SimpleProgress,
        None => &NoProgress,
    };

    let result = use_case.execute(input, progress).await;
    if let Some(reporter) = &reporter {
        reporter.finish();
    }

    match result {
        Ok(draft) => {
            println!("{}", ConsoleFormatter::format_draft(&draft));
            if output.save {
                let path = write_export(&output.export_dir(), &draft.export_filename, &draft.text)?;
                eprintln!("{}", ConsoleFormatter::saved_notice(&path));
            }
            Ok(())
        }
        Err(TakedownError::EmailNotFound {
            text,
            export_filename,
        }) if output.exports_incomplete() => {
            let path = write_export(&output.export_dir(), &export_filename, &text)?;
            eprintln!("{}", ConsoleFormatter::incomplete_notice(&path));
            Err(TakedownError::EmailNotFound {
                text,
                export_filename,
            }
            .into())
        }
        Err(e) => Err(e.into()),
    }
}
