use crate::core_sftpcommand::utils::resolve_in_current_dir;
use crate::response::Response;
use crate::server::ServerContext;
use crate::session::Session;
use log::{error, info};

/// Handles the RETR command.
///
/// Announces how many bytes SEND will produce. Binary files travel as
/// Base64, so their announced size is the encoded length. A failed RETR
/// drops any earlier selection.
pub async fn handle_retr_command(ctx: &ServerContext, session: &mut Session, file: &str) -> Response {
    let selected_file = resolve_in_current_dir(session, file);

    if !ctx.fs.exists(&selected_file).await {
        session.pending_retrieve = None;
        return Response::error("File doesn't exist");
    }
    if ctx.fs.is_directory(&selected_file).await {
        session.pending_retrieve = None;
        return Response::error("Specifier is not a file");
    }

    match ctx.fs.transfer_size(&selected_file).await {
        Ok(size) => {
            info!(
                "[client {}] {} selected for retrieval ({} bytes)",
                session.client_id, selected_file, size
            );
            session.pending_retrieve = Some(selected_file);
            Response::success(format!("{} bytes will be sent", size))
        }
        Err(e) => {
            error!("[client {}] Cannot size {}: {}", session.client_id, selected_file, e);
            session.pending_retrieve = None;
            Response::error(format!("Couldn't read {}", e))
        }
    }
}
