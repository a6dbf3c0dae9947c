use clap::{Parser, Subcommand};
use std::io::{BufRead, BufReader, Write};
use std::net::Shutdown;
use std::os::unix::net::UnixStream;
use std::path::{Path, PathBuf};
use turntable::ipc::{Command, SOCKET_PATH};

#[derive(Parser, Debug)]
#[command(name = "turntable", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Control socket of the running turntabled
    #[arg(short = 's', long, default_value = SOCKET_PATH)]
    socket: PathBuf,
}

#[derive(Subcommand, Debug, Clone, Copy)]
enum Commands {
    /// Rotate to the next item
    Next,
    /// Rotate to the previous item
    Previous,
    /// Jump straight to an item (zero-based)
    Select { index: usize },
    /// Print "k of N" and the accumulated rotation
    Status,
    /// Re-read the configuration file
    Reload,
}

impl From<Commands> for Command {
    fn from(cmd: Commands) -> Self {
        match cmd {
            Commands::Next => Command::Next,
            Commands::Previous => Command::Previous,
            Commands::Select { index } => Command::Select(index),
            Commands::Status => Command::Status,
            Commands::Reload => Command::Reload,
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    if let Some(reply) = send_command(&cli.socket, cli.command.into())? {
        println!("{}", reply);
    }
    Ok(())
}

fn send_command(socket: &Path, command: Command) -> anyhow::Result<Option<String>> {
    let mut stream = UnixStream::connect(socket).map_err(|e| {
        anyhow::anyhow!(
            "Failed to connect to turntabled at {}: {}. Is turntabled running?",
            socket.display(),
            e
        )
    })?;

    log::debug!("Sending '{}'", command);
    writeln!(stream, "{}", command)?;

    if command != Command::Status {
        return Ok(None);
    }

    stream.shutdown(Shutdown::Write)?;
    let mut reply = String::new();
    BufReader::new(stream).read_line(&mut reply)?;
    Ok(Some(reply.trim_end().to_string()))
}
