use crate::response::Response;
use crate::session::Session;
use log::info;

/// Handles the DONE command. The connection worker closes the connection
/// once this response has been written.
pub async fn handle_done_command(session: &mut Session) -> Response {
    info!("[client {}] Received DONE. Closing connection.", session.client_id);
    session.mark_closing();
    Response::success("Closing connection")
}
