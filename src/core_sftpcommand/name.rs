use crate::core_sftpcommand::utils::resolve_in_current_dir;
use crate::response::Response;
use crate::server::ServerContext;
use crate::session::Session;

/// Handles the NAME command: remembers the file TOBE will rename.
pub async fn handle_name_command(ctx: &ServerContext, session: &mut Session, file: &str) -> Response {
    let selected_file = resolve_in_current_dir(session, file);

    if !ctx.fs.exists(&selected_file).await {
        return Response::error(format!("Can't find {}", selected_file));
    }

    session.pending_rename = Some(selected_file);
    Response::success("File exists")
}
