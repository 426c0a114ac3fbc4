use crate::core_fs::WriteMode;
use crate::core_sftpcommand::utils::resolve_in_current_dir;
use crate::response::Response;
use crate::server::ServerContext;
use crate::session::{PendingStore, Session};
use log::{error, info};

/// Handles the STOR command: picks the destination and write mode that the
/// following SIZE will use. Nothing is written yet.
///
/// # Arguments
///
/// * `ctx` - Registry and filesystem shared by all sessions.
/// * `session` - The logged-in session; its pending store is replaced.
/// * `mode` - One of:
///   * `new` creates the file, or a numbered generation of it when the name is taken.
///   * `old` overwrites, creating the file if needed.
///   * `app` appends, or creates when there is nothing to append to.
/// * `file` - File name relative to the working directory. Must carry an extension.
///
/// # Returns
///
/// A success response describing what SIZE will do, or an error when the
/// name or mode is rejected.
pub async fn handle_stor_command(
    ctx: &ServerContext,
    session: &mut Session,
    mode: &str,
    file: &str,
) -> Response {
    if !file.contains('.') {
        session.pending_store = None;
        return Response::error("Specifier is not a file");
    }

    let selected_file = resolve_in_current_dir(session, file);
    let exists = ctx.fs.exists(&selected_file).await;

    let (pending, message) = match mode.to_ascii_lowercase().as_str() {
        "new" if !exists => (
            PendingStore::new(selected_file, WriteMode::New),
            "File does not exist, will create new file",
        ),
        "new" => {
            let (dir, base) = selected_file
                .rsplit_once('/')
                .unwrap_or((session.current_dir.as_str(), file));
            let unique_file = match ctx.fs.unique_name(base, dir).await {
                Ok(path) => path,
                Err(e) => {
                    error!(
                        "[client {}] Cannot pick a new generation of {}: {}",
                        session.client_id, selected_file, e
                    );
                    session.pending_store = None;
                    return Response::error(format!("Couldn't save {}", e));
                }
            };
            (
                PendingStore::new(unique_file, WriteMode::New),
                "File exists, will create new generation of file",
            )
        }
        "old" if !exists => (
            PendingStore::new(selected_file, WriteMode::Old),
            "Will create new file",
        ),
        "old" => (
            PendingStore::new(selected_file, WriteMode::Old),
            "Will write over old file",
        ),
        "app" if !exists => (
            PendingStore::new(selected_file, WriteMode::New),
            "Will create new file",
        ),
        "app" => (
            PendingStore::new(selected_file, WriteMode::Append),
            "Will append to file",
        ),
        _ => return Response::error("Write mode not valid"),
    };

    info!(
        "[client {}] Ready to store {} ({:?})",
        session.client_id, pending.path, pending.write_mode
    );
    session.pending_store = Some(pending);
    Response::success(message)
}
