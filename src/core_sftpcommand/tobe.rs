use crate::core_sftpcommand::utils::resolve_in_current_dir;
use crate::response::Response;
use crate::server::ServerContext;
use crate::session::Session;
use log::{error, info};

/// Handles the TOBE command. The pending NAME is consumed whatever happens.
pub async fn handle_tobe_command(ctx: &ServerContext, session: &mut Session, new_name: &str) -> Response {
    let old_path = match session.pending_rename.take() {
        Some(path) => path,
        None => return Response::error("Please select a file to rename first"),
    };
    let new_path = resolve_in_current_dir(session, new_name);

    if ctx.fs.exists(&new_path).await {
        return Response::error(format!(
            "File wasn't renamed because {} already exists",
            new_path
        ));
    }

    match ctx.fs.rename(&old_path, &new_path).await {
        Ok(()) => {
            info!("[client {}] Renamed {} to {}", session.client_id, old_path, new_path);
            Response::success(format!("{} renamed to {}", old_path, new_path))
        }
        Err(e) => {
            error!("[client {}] Rename of {} failed: {}", session.client_id, old_path, e);
            Response::error(format!("File wasn't renamed because {}", e))
        }
    }
}
