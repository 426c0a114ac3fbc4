use crate::response::Response;
use crate::server::ServerContext;
use crate::session::Session;
use log::{error, info};

/// Handles the SEND command. The payload goes out unprefixed so the client
/// receives the file contents exactly.
pub async fn handle_send_command(ctx: &ServerContext, session: &mut Session) -> Response {
    let selected_file = match session.pending_retrieve.take() {
        Some(path) => path,
        None => return Response::error("Please select a file to retrieve first"),
    };

    match ctx.fs.read_for_transfer(&selected_file).await {
        Ok(data) => {
            info!("[client {}] Sending {}", session.client_id, selected_file);
            Response::none(data)
        }
        Err(e) => {
            error!("[client {}] Failed to send {}: {}", session.client_id, selected_file, e);
            Response::error(format!("Couldn't send {}", e))
        }
    }
}
