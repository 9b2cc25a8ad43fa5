use casepath::error::AppError;
use clap::{Args, Parser, Subcommand};

use crate::demo::{run_decide, run_demo, DecideArgs, DemoArgs};
use crate::server;

#[derive(Parser, Debug)]
#[command(
    name = "Casepath Triage Engine",
    about = "Route legal intakes to the right venue and score their merit from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Run the triage pipeline against a single intake
    Triage {
        #[command(subcommand)]
        command: TriageCommand,
    },
    /// Run an end-to-end demo on a canned maintenance scenario
    Demo(DemoArgs),
}

#[derive(Subcommand, Debug)]
enum TriageCommand {
    /// Compute a routing recommendation and merit score for one intake
    Decide(DecideArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Triage {
            command: TriageCommand::Decide(args),
        } => run_decide(args),
        Command::Demo(args) => run_demo(args),
    }
}
