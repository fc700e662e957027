mod commands;
mod terminal;

use commands::{CommandLine, Commands, points, submit, validate};
use terminal::{logging, print};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    logging::init_logging(commands.verbose);

    match commands.command {
        Commands::Submit(args) => {
            print::header("submitting scenes");
            submit::submit(&commands.config, args).await
        }
        Commands::Validate => {
            print::header("validating domains");
            validate::validate(&commands.config)
        }
        Commands::Points { domain, count } => points::points(&commands.config, &domain, count),
    }
}
