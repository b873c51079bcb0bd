use std::io;
use tracing::Level;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{filter, fmt};

pub fn setup_tracing() {
    let tracing_filter = filter::Targets::new()
        .with_target("connpass_collector", Level::TRACE)
        .with_default(Level::WARN);

    tracing_subscriber::registry()
        .with(tracing_filter)
        .with(fmt::layer().with_writer(io::stdout))
        .init();
}
