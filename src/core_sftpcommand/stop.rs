use crate::response::Response;
use crate::session::Session;

/// Handles the STOP command.
pub async fn handle_stop_command(session: &mut Session) -> Response {
    session.pending_retrieve = None;
    Response::success("File will not be sent")
}
