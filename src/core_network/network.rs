use crate::config::Config;
use crate::constants::SERVER_PROTOCOL;
use crate::core_network::channel::{ControlChannel, LineChannel};
use crate::core_sftpcommand::handlers::evaluate;
use crate::response::Response;
use crate::server::ServerContext;
use crate::session::Session;
use anyhow::{Context, Result};
use log::{error, info, warn};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::io::BufReader;
use tokio::net::TcpListener;
use tokio::time::sleep;

const ACCEPT_BACKOFF_START: Duration = Duration::from_millis(50);
const ACCEPT_BACKOFF_MAX: Duration = Duration::from_secs(5);

pub async fn start_server(config: Arc<Config>, ctx: ServerContext) -> Result<()> {
    let address = format!(
        "{}:{}",
        config.server.listen_address, config.server.listen_port
    );
    let listener = TcpListener::bind(&address)
        .await
        .with_context(|| format!("Could not start server on {}", address))?;
    info!(
        "Server started on {} [Protocol: {}]",
        address, SERVER_PROTOCOL
    );

    let active_clients = Arc::new(AtomicUsize::new(0));
    let mut next_client_id: u64 = 0;
    let mut accept_failures: u32 = 0;

    loop {
        let (socket, addr) = match listener.accept().await {
            Ok(accepted) => {
                accept_failures = 0;
                accepted
            }
            Err(e) => {
                accept_failures = accept_failures.saturating_add(1);
                let delay = accept_backoff(accept_failures);
                error!(
                    "Could not connect to incoming client socket: {} (retrying in {:?})",
                    e, delay
                );
                sleep(delay).await;
                continue;
            }
        };
        next_client_id += 1;
        let client_id = next_client_id;

        let available = config
            .server
            .accepts_client(active_clients.load(Ordering::SeqCst));
        let total = active_clients.fetch_add(1, Ordering::SeqCst) + 1;
        info!(
            "New client connected with id: {} from {:?} (total: {})",
            client_id, addr, total
        );

        let ctx = ctx.clone();
        let active_clients = Arc::clone(&active_clients);

        tokio::spawn(async move {
            let (reader, writer) = socket.into_split();
            let mut channel = LineChannel::new(BufReader::new(reader), writer);

            if let Err(e) = handle_connection(&ctx, client_id, available, &mut channel).await {
                warn!("Connection error for client {}: {:?}", client_id, e);
            }

            let total = active_clients.fetch_sub(1, Ordering::SeqCst) - 1;
            info!("Client {} disconnected (total: {})", client_id, total);
        });
    }
}

/// Pause before the next `accept` after `failures` consecutive errors.
/// Doubles from 50ms up to 5s so a persistent error such as EMFILE does
/// not spin.
pub fn accept_backoff(failures: u32) -> Duration {
    let exponent = failures.saturating_sub(1).min(7);
    let delay = ACCEPT_BACKOFF_START.saturating_mul(1 << exponent);
    delay.min(ACCEPT_BACKOFF_MAX)
}

/// Serves one client until it sends DONE or goes away.
///
/// The greeting is sent first; an unavailable server says so with an error
/// greeting and hangs up straight away. Commands are then handled strictly
/// one at a time, each response fully written before the next line is read.
pub async fn handle_connection<C>(
    ctx: &ServerContext,
    client_id: u64,
    available: bool,
    channel: &mut C,
) -> Result<()>
where
    C: ControlChannel + ?Sized,
{
    if !available {
        warn!("Turning client {} away, server is full", client_id);
        channel
            .send(&Response::error(format!("{} Server Unavailable", SERVER_PROTOCOL)))
            .await?;
        channel.shutdown().await?;
        return Ok(());
    }

    channel
        .send(&Response::success(format!("{} Server", SERVER_PROTOCOL)))
        .await
        .context("Failed to send greeting")?;

    let mut session = Session::new(client_id);

    while let Some(line) = channel.read_line().await? {
        let response = evaluate(ctx, &mut session, &line, &mut *channel).await;
        channel.send(&response).await?;

        if session.is_closing() {
            channel.shutdown().await?;
            break;
        }
    }

    Ok(())
}
