//! Transform server.
//!
//! Connects to the broker, consumes the work queue, and answers every
//! request on its reply queue. Runs until ctrl-c or loss of the broker link.

use replyq::config::load_config;
use replyq::server::Handler;
use replyq::transport::BrokerConnection;
use replyq::utils::logging;
use tracing::{error, info};

#[tokio::main]
async fn main() -> replyq::Result<()> {
    logging::init("info");

    let config = load_config()?;
    let url = config.broker.url();
    let link = BrokerConnection::connect(&url).await?;
    info!("connected to broker at {}", url);

    let handler = Handler::new(link, &config.queue.requests);
    tokio::select! {
        result = handler.run() => {
            error!("request loop exited unexpectedly");
            result?;
        }
        _ = tokio::signal::ctrl_c() => {
            info!("shutdown signal received, exiting");
        }
    }

    Ok(())
}
