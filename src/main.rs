use clap::Parser;
use tailwind_styled::cli;
use tailwind_styled::{Cli, Commands};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let parsed = Cli::parse();
    cli::init_logging(parsed.verbose);

    match parsed.command {
        Commands::Compose(args) => {
            let output = cli::compose(&args)?;
            println!("{}", output);
        }
        Commands::Pipe(args) => {
            cli::handle_pipe_command(&args, tokio::io::stdin(), tokio::io::stdout()).await?;
        }
        Commands::Manifest(args) => {
            if let Some(json) = cli::manifest(&args)? {
                println!("{}", json);
            }
        }
        Commands::Tags => {
            print!("{}", cli::list_tags());
        }
    }

    Ok(())
}
