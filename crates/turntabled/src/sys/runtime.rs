use crate::config;
use crate::events::CarouselEvent;
use crate::status::SharedStatus;
use crate::sys::server;
use async_channel::Sender;
use std::io;
use std::thread::{self, JoinHandle};
use tokio::runtime::Builder;

/// Socket server and config watcher share one tokio runtime on a dedicated
/// thread. The thread exits once both have stopped, which drops the last
/// senders and closes the event loop.
pub fn start_background_services(
    tx: Sender<CarouselEvent>,
    status: SharedStatus,
) -> io::Result<JoinHandle<()>> {
    let rt = Builder::new_multi_thread()
        .thread_name("turntable-io")
        .enable_all()
        .build()?;

    thread::Builder::new()
        .name("turntable-services".into())
        .spawn(move || {
            rt.block_on(async {
                tokio::join!(
                    server::run_server(tx.clone(), status),
                    config::run_async_watcher(tx),
                );
            });
            log::warn!("Background services stopped");
        })
}
