//! Command-line runtime for resolving and replaying map requests.
//!
//! `resolve` builds an inbound request from flags, runs it through the
//! standard recognizer chain and prints the persisted command. `replay`
//! decodes a persisted command and executes it against a transcript host
//! that prints one line per collaborator call. Configuration loading and the
//! output streams can be substituted so the runtime is testable in-process.

use std::ffi::OsString;
use std::io::Write;
use std::process::ExitCode;
use std::sync::{Arc, Weak};

use clap::error::ErrorKind;
use clap::{Args, Parser, Subcommand};
use omaps_intent::{
    Command, Coordinates, DataLocator, Dispatcher, ImportCompletion, ImportHost, ImportQueue,
    ImportSettings, InMemoryApiSession, InboundRequest, IntentError, RecognizerServices,
    ResourceLocator, SearchEngine, route_point,
};
use omaps_intent_config::Config;
use tracing::debug;

mod config;
mod errors;
mod request_args;
mod telemetry;
mod transcript;

pub(crate) use config::{ConfigLoader, OrthoConfigLoader, split_config_arguments};
pub(crate) use errors::CliError;
use request_args::{ExtraArg, parse_extra, parse_position};
use transcript::{FileResourceAccessor, ScratchCopyImporter, TranscriptHost};

const CLI_TARGET: &str = concat!(env!("CARGO_PKG_NAME"), "::run");

/// Command-line interface for map request resolution.
#[derive(Parser, Debug)]
#[command(name = "omaps-intent", disable_help_subcommand = true)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) command: CliCommand,
}

#[derive(Subcommand, Debug)]
pub(crate) enum CliCommand {
    /// Resolves a request into a persisted command.
    Resolve(ResolveArgs),
    /// Executes a persisted command against a transcript host.
    Replay(ReplayArgs),
}

#[derive(Args, Debug)]
pub(crate) struct ResolveArgs {
    /// Action tag of the request.
    #[arg(long)]
    pub(crate) action: Option<String>,
    /// Data locator of the request.
    #[arg(long, value_name = "URI")]
    pub(crate) data: Option<String>,
    /// Attached document locator.
    #[arg(long, value_name = "URI")]
    pub(crate) stream: Option<String>,
    /// Typed extra; `TYPE` is one of string, double, float, long or bool.
    #[arg(long = "extra", value_name = "KEY=TYPE:VALUE", value_parser = parse_extra)]
    pub(crate) extras: Vec<ExtraArg>,
}

impl ResolveArgs {
    fn to_request(&self) -> Result<InboundRequest, IntentError> {
        let mut builder = InboundRequest::builder();
        if let Some(action) = &self.action {
            builder = builder.action(action.as_str());
        }
        if let Some(data) = &self.data {
            builder = builder.data(DataLocator::parse(data)?);
        }
        if let Some(stream) = &self.stream {
            builder = builder.stream(ResourceLocator::new(stream.as_str()));
        }
        Ok(self
            .extras
            .iter()
            .fold(builder, |request, extra| {
                request.extra(extra.key.as_str(), extra.value.clone())
            })
            .build())
    }
}

#[derive(Args, Debug)]
pub(crate) struct ReplayArgs {
    /// Device position used when a route needs the current location.
    #[arg(long, value_name = "LAT,LON", value_parser = parse_position)]
    pub(crate) position: Option<Coordinates>,
    /// Persisted command as produced by `resolve`.
    #[arg(value_name = "JSON")]
    pub(crate) command: String,
}

/// Runs the CLI using the provided arguments and output streams.
#[must_use]
pub fn run<I, W, E>(args: I, stdout: &mut W, stderr: &mut E) -> ExitCode
where
    I: IntoIterator<Item = OsString>,
    W: Write,
    E: Write,
{
    run_with_loader(args, stdout, stderr, &OrthoConfigLoader)
}

pub(crate) fn run_with_loader<I, W, E, L>(
    args: I,
    stdout: &mut W,
    stderr: &mut E,
    loader: &L,
) -> ExitCode
where
    I: IntoIterator<Item = OsString>,
    W: Write,
    E: Write,
    L: ConfigLoader,
{
    let args: Vec<OsString> = args.into_iter().collect();
    match execute(&args, stdout, loader) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            let _ = writeln!(stderr, "{error}");
            ExitCode::FAILURE
        }
    }
}

fn execute<W, L>(args: &[OsString], stdout: &mut W, loader: &L) -> Result<(), CliError>
where
    W: Write,
    L: ConfigLoader,
{
    let split = split_config_arguments(args);
    let cli = match Cli::try_parse_from(&split.command_arguments) {
        Ok(cli) => cli,
        Err(error) if matches!(error.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            write!(stdout, "{error}")?;
            return Ok(());
        }
        Err(error) => return Err(CliError::Usage(error)),
    };
    let config = loader.load(&split.config_arguments)?;
    telemetry::initialise(&config)?;

    match cli.command {
        CliCommand::Resolve(arguments) => resolve(&arguments, &config, stdout),
        CliCommand::Replay(arguments) => replay(&arguments, stdout),
    }
}

fn resolve<W: Write>(
    arguments: &ResolveArgs,
    config: &Config,
    stdout: &mut W,
) -> Result<(), CliError> {
    let request = arguments.to_request()?;
    let scratch_dir = config.prepare_import_dir()?.as_std_path().to_path_buf();
    let host = Arc::new(TranscriptHost::default());
    let search: Arc<dyn SearchEngine> = host.clone();
    let (queue, completions) = ImportQueue::spawn(Arc::new(ScratchCopyImporter))?;
    let services = RecognizerServices {
        search,
        session: Arc::new(InMemoryApiSession::new()),
        import: ImportSettings {
            queue: Arc::new(queue),
            scratch_dir,
            accessor: Arc::new(FileResourceAccessor),
        },
    };

    let dispatcher = Dispatcher::standard(services);
    let outcome = dispatcher.dispatch(&request);
    // Dropping the chain releases the import queue and waits for its worker.
    drop(dispatcher);

    match outcome? {
        Some(command) => {
            debug!(target: CLI_TARGET, kind = command.kind(), "request resolved");
            writeln!(stdout, "{}", command.encode()?)?;
        }
        None => writeln!(stdout, "no command")?,
    }

    let import_host = Arc::downgrade(&host) as Weak<dyn ImportHost>;
    for completion in completions.deliver(&import_host) {
        writeln!(stdout, "{}", describe_completion(&completion))?;
    }
    host.write_transcript(stdout)?;
    Ok(())
}

fn describe_completion(completion: &ImportCompletion) -> String {
    match &completion.outcome {
        Ok(()) => format!("import: {} imported", completion.document),
        Err(failure) => format!("import: {} failed: {}", completion.document, failure.message),
    }
}

fn replay<W: Write>(arguments: &ReplayArgs, stdout: &mut W) -> Result<(), CliError> {
    let command = Command::decode(&arguments.command)?;
    let position = arguments
        .position
        .map(|coordinates| route_point(coordinates, None));
    let host = TranscriptHost::with_position(position);

    let executed = command.execute(&host.context());
    debug!(target: CLI_TARGET, kind = command.kind(), executed, "command replayed");

    host.write_transcript(stdout)?;
    writeln!(stdout, "result: {executed}")?;
    Ok(())
}
