use turntabled::app::App;
use turntabled::config;
use turntabled::status::SharedStatus;
use turntabled::surface::JsonLinesSurface;
use turntabled::sys::runtime;

fn main() {
    env_logger::init();

    let config = config::load_or_setup();
    let status = SharedStatus::default();

    let (tx, rx) = async_channel::bounded(32);

    if let Err(e) = runtime::start_background_services(tx, status.clone()) {
        log::error!("Failed to start background services: {}", e);
    }

    let app = App::new(config, JsonLinesSurface::new(std::io::stdout()), status);
    app.run(&rx);
}
