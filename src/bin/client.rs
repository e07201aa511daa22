//! Interactive request client.
//!
//! Reads `<code> <message>` lines from stdin, publishes each as a command to
//! the work queue, and prints the server's reply.

use replyq::client::Requester;
use replyq::config::load_config;
use replyq::protocol::{Command, Subject};
use replyq::transport::BrokerConnection;
use replyq::utils::logging;
use tokio::io::{AsyncBufReadExt, BufReader};

#[tokio::main]
async fn main() -> replyq::Result<()> {
    logging::init("warn");

    let config = load_config()?;
    let url = config.broker.url();
    let link = BrokerConnection::connect(&url).await?;
    let requester = Requester::new(link, &config.queue.requests);

    println!("connected to broker at {url}");
    println!("subjects:");
    for subject in Subject::ALL {
        println!("  {}  {}", subject.code(), subject.label());
    }
    println!("send with `<code> <message>`, e.g. `CL hello`; ctrl-d quits");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let (code, content) = match line.split_once(char::is_whitespace) {
            Some((code, content)) => (code, content),
            None => (line, ""),
        };

        let reply = requester.request(Command::new(code, content)).await?;
        println!("server: {reply}");
    }

    Ok(())
}
