use crate::core_sftpcommand::utils::resolve_in_current_dir;
use crate::response::Response;
use crate::server::ServerContext;
use crate::session::Session;
use log::{error, info};

/// Handles the KILL command. Directories are never deleted.
pub async fn handle_kill_command(ctx: &ServerContext, session: &Session, file: &str) -> Response {
    let selected_path = resolve_in_current_dir(session, file);

    if !ctx.fs.exists(&selected_path).await {
        return Response::error(format!(
            "Not deleted because {} does not exist",
            selected_path
        ));
    }
    if ctx.fs.is_directory(&selected_path).await {
        return Response::error(format!(
            "Not deleted because {} is a directory",
            selected_path
        ));
    }

    match ctx.fs.delete(&selected_path).await {
        Ok(true) => {
            info!("[client {}] Deleted {}", session.client_id, selected_path);
            Response::success(format!("{} deleted", selected_path))
        }
        Ok(false) => Response::error(format!(
            "Not deleted because {} does not exist",
            selected_path
        )),
        Err(e) => {
            error!("[client {}] Failed to delete {}: {}", session.client_id, selected_path, e);
            Response::error(format!("Not deleted because {}", e))
        }
    }
}
