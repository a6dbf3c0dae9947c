use crate::events::CarouselEvent;
use crate::status::{SharedStatus, status_line};
use async_channel::Sender;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::net::{UnixListener, UnixStream};
use turntable::ipc::{Command, SOCKET_PATH};

pub async fn run_server(tx: Sender<CarouselEvent>, status: SharedStatus) {
    // Cleanup old socket if it exists
    if fs_err::metadata(SOCKET_PATH).is_ok() {
        let _ = fs_err::remove_file(SOCKET_PATH);
    }

    let listener = match UnixListener::bind(SOCKET_PATH) {
        Ok(l) => l,
        Err(e) => {
            log::error!("Failed to bind unix socket: {}", e);
            return;
        }
    };

    loop {
        match listener.accept().await {
            Ok((stream, _)) => {
                tokio::spawn(handle_client(stream, tx.clone(), status.clone()));
            }
            Err(e) => {
                log::error!("Failed to accept connection: {}", e);
            }
        }
    }
}

async fn handle_client(stream: UnixStream, tx: Sender<CarouselEvent>, status: SharedStatus) {
    let (reader, mut writer) = stream.into_split();
    let mut lines = BufReader::new(reader).lines();

    while let Ok(Some(line)) = lines.next_line().await {
        if line.trim().is_empty() {
            continue;
        }
        if let Some(reply) = respond(&line, &tx, &status).await
            && writer.write_all(format!("{reply}\n").as_bytes()).await.is_err()
        {
            break;
        }
    }
}

/// Forwards navigation to the event loop; only `status` and malformed lines
/// get a reply.
pub async fn respond(
    line: &str,
    tx: &Sender<CarouselEvent>,
    status: &SharedStatus,
) -> Option<String> {
    match line.parse::<Command>() {
        Ok(Command::Status) => Some(status_line(status)),
        Ok(command) => {
            if let Some(event) = CarouselEvent::from_command(command)
                && tx.send(event).await.is_err()
            {
                log::error!("Event loop is gone, dropping '{}'", command);
            }
            None
        }
        Err(e) => {
            log::warn!("Rejected '{}': {}", line.trim(), e);
            Some(format!("error: {e}"))
        }
    }
}
