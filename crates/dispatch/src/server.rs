//! Telnet mode: TCP server with one session task per connection.

use std::future::Future;
use std::io;
use std::net::SocketAddr;
use std::time::Duration;

use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tokio::task::{JoinError, JoinSet};
use tracing::{debug, error, info, warn, Instrument};
use vt52_engine::run_program;
use vt52_transport::NetworkTransport;
use vt52_types::Program;

use crate::config::{ServerConfig, SessionSettings};
use crate::error::DispatchError;
use crate::log_report;

/// Wait before accepting again after a failed accept.
const ACCEPT_RETRY_DELAY: Duration = Duration::from_millis(100);

/// Accept connections until `shutdown` resolves.
///
/// The bound address goes to `ready_tx` once the listener is up. After
/// shutdown the listener is closed, running sessions get
/// `config.drain_timeout` to finish and any still running are aborted.
pub async fn run_server<F>(
    config: ServerConfig,
    program: Program,
    session: SessionSettings,
    shutdown: F,
    ready_tx: Option<oneshot::Sender<SocketAddr>>,
) -> Result<(), DispatchError>
where
    F: Future<Output = ()>,
{
    let bind_error = |source| DispatchError::Bind {
        addr: config.address(),
        source,
    };
    let listener = TcpListener::bind((config.host.as_str(), config.port))
        .await
        .map_err(bind_error)?;
    let bound = listener.local_addr().map_err(bind_error)?;

    info!(addr = %bound, %program, "listening");
    let host = connect_host(&bound);
    info!("connect with: telnet {host} {}", bound.port());
    if let Some(tx) = ready_tx {
        let _ = tx.send(bound);
    }

    tokio::pin!(shutdown);
    let mut workers = JoinSet::new();
    let mut client_id = 0u64;

    loop {
        tokio::select! {
            () = &mut shutdown => {
                info!("shutdown requested");
                break;
            }
            accepted = listener.accept() => match accepted {
                Ok((stream, peer)) => {
                    client_id += 1;
                    info!(client = client_id, %peer, "client connected");
                    let transport =
                        NetworkTransport::accepted(stream, peer, session.pacing.send_delay);
                    let options = session.options(rand::random());
                    let span = tracing::info_span!("client", id = client_id);
                    workers.spawn(
                        async move {
                            let report = run_program(program, transport, options).await;
                            log_report(&report);
                            info!("client disconnected");
                        }
                        .instrument(span),
                    );
                }
                Err(err) => accept_failed(&err).await,
            },
            Some(joined) = workers.join_next(), if !workers.is_empty() => reap(joined),
        }
    }

    drop(listener);
    drain(&mut workers, config.drain_timeout).await;
    info!("server stopped");
    Ok(())
}

/// Log a failed accept and wait before the next attempt.
async fn accept_failed(err: &io::Error) {
    warn!(error = %err, retry_in = ?ACCEPT_RETRY_DELAY, "accept failed");
    tokio::time::sleep(ACCEPT_RETRY_DELAY).await;
}

/// Let sessions finish for up to `timeout`, then abort the rest. Aborting
/// drops their transports, which closes the sockets.
async fn drain(workers: &mut JoinSet<()>, timeout: Duration) {
    if workers.is_empty() {
        return;
    }

    if !timeout.is_zero() {
        info!(active = workers.len(), ?timeout, "waiting for sessions to finish");
        let finished = tokio::time::timeout(timeout, async {
            while let Some(joined) = workers.join_next().await {
                reap(joined);
            }
        })
        .await;
        if finished.is_ok() {
            return;
        }
    }

    warn!(remaining = workers.len(), "aborting sessions");
    workers.abort_all();
    while workers.join_next().await.is_some() {}
}

fn reap(joined: Result<(), JoinError>) {
    match joined {
        Ok(()) => {}
        Err(err) if err.is_panic() => error!(error = %err, "session task panicked"),
        Err(err) => debug!(error = %err, "session task cancelled"),
    }
}

/// Host to suggest to users; wildcard addresses are shown as localhost.
fn connect_host(addr: &SocketAddr) -> String {
    if addr.ip().is_unspecified() {
        "localhost".to_string()
    } else {
        addr.ip().to_string()
    }
}
