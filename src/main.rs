use clap::Parser;
use mapler::cli::Cli;
use mapler::command::{self, Command};
use mapler::config::Settings;
use mapler::navigation::Shell;
use mapler::terminal;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tracing::{info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let settings = Settings::new_with_cli(&cli)?;

    // Logs go to stderr so they do not interleave with the rendered screen
    tracing_subscriber::fmt()
        .with_max_level(settings.logging.max_level())
        .with_writer(std::io::stderr)
        .init();

    info!(initial_route = %settings.shell.initial_route, "Starting Mapler");

    let mut shell = Shell::with_defaults(settings.shell.initial_route);
    println!("{}", terminal::render(&shell.render()));

    match &cli.script {
        Some(path) => {
            info!("Running script {}", path.display());
            let file = tokio::fs::File::open(path).await?;
            run(BufReader::new(file), &mut shell, true).await?;
        }
        None => {
            println!("Type `help` for commands.");
            run(BufReader::new(tokio::io::stdin()), &mut shell, false).await?;
        }
    }

    info!("Bye");
    Ok(())
}

/// Apply commands line by line until `quit` or end of input
async fn run<R>(reader: R, shell: &mut Shell, echo: bool) -> anyhow::Result<()>
where
    R: AsyncBufRead + Unpin,
{
    let mut lines = reader.lines();

    while let Some(line) = lines.next_line().await? {
        if echo && !line.trim().is_empty() {
            println!("> {}", line);
        }

        let command = match command::parse(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) => {
                println!("! {}", e);
                continue;
            }
        };

        match command {
            Command::Quit => break,
            Command::Help => println!("{}", command::HELP),
            Command::Show => println!("{}", terminal::render(&shell.render())),
            Command::Events(events) => {
                for event in events {
                    match shell.dispatch(event) {
                        Ok(reply) => {
                            if let Some(message) = terminal::describe(&reply) {
                                println!("{}", message);
                            }
                        }
                        Err(e) => {
                            warn!(error = %e, "Event rejected");
                            println!("! {}", e);
                            break;
                        }
                    }
                }
                println!("{}", terminal::render(&shell.render()));
            }
        }
    }

    Ok(())
}
