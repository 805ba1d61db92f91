//! A simple program demonstrates how to use `askbox` as a library.

#[macro_use]
extern crate tracing;

use std::env;
use std::io::Write as _;
use std::num::NonZeroUsize;
use std::process;

use askbox::SessionBuilder;
use askbox::core::ControllerConfigBuilder;
use askbox::http::{HttpAskService, HttpServiceConfigBuilder};
use askbox::terminal::TerminalSurface;
use tokio::io::{self, AsyncBufReadExt};

const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";

#[tokio::main(flavor = "current_thread")]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let base_url = env::var("ASKBOX_BASE_URL")
        .unwrap_or_else(|_| DEFAULT_BASE_URL.to_owned());
    let mut service_config = HttpServiceConfigBuilder::with_base_url(base_url);
    if let Ok(endpoint) = env::var("ASKBOX_ENDPOINT") {
        service_config = service_config.with_endpoint(endpoint);
    }
    let service_config = service_config.build();

    let mut controller_config = ControllerConfigBuilder::new();
    if let Ok(max_messages) = env::var("ASKBOX_MAX_MESSAGES") {
        let Some(max_messages) = parse_max_messages(&max_messages) else {
            eprintln!(
                "ASKBOX_MAX_MESSAGES must be a positive integer, got {max_messages:?}"
            );
            process::exit(1);
        };
        controller_config = controller_config.with_max_messages(max_messages);
    }

    info!(url = %service_config.url(), "starting session");
    let session = SessionBuilder::with_ask_service(HttpAskService::new(
        service_config,
    ))
    .with_config(controller_config.build())
    .build(TerminalSurface::new());

    let mut stdin = io::BufReader::new(io::stdin());
    loop {
        print!("> ");
        std::io::stdout().flush().ok();

        let Some(line) = read_line(&mut stdin).await else {
            break;
        };
        let outcome = session.submit(&line).await;
        debug!("submission finished: {outcome:?}");
    }
}

fn parse_max_messages(value: &str) -> Option<usize> {
    value.trim().parse::<NonZeroUsize>().ok().map(NonZeroUsize::get)
}

async fn read_line(
    stdin: &mut io::BufReader<io::Stdin>,
) -> Option<String> {
    let mut line = String::new();

    match stdin.read_line(&mut line).await {
        Ok(count) => {
            if count == 0 {
                return None;
            }
            Some(line)
        }
        Err(err) => {
            error!("error reading input: {}", err);
            None
        }
    }
}
