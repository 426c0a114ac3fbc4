use crate::core_fs::join_path;
use crate::response::Response;
use crate::server::ServerContext;
use crate::session::Session;
use log::{info, warn};

/// Handles the CDIR command.
///
/// Before login the destination is only remembered; it is resolved and
/// checked when ACCT or PASS completes the login.
///
/// # Arguments
///
/// * `ctx` - Registry and filesystem shared by all sessions.
/// * `session` - The client's session; a user must be selected.
/// * `dest` - `/`, a path from the user root starting with `/`, or a path
///   relative to the working directory.
///
/// # Returns
///
/// `!Changed working dir to <dir>` when logged in,
/// `+Directory exists, send account/password` when deferred.
pub async fn handle_cdir_command(
    ctx: &ServerContext,
    session: &mut Session,
    dest: &str,
) -> Response {
    if !session.is_user_selected() {
        return Response::error("Please select a user first");
    }

    if !session.is_logged_in() {
        info!(
            "[client {}] Deferring CDIR {} until login",
            session.client_id, dest
        );
        session.pending_dir_change = Some(dest.to_string());
        return Response::success("Directory exists, send account/password");
    }

    change_directory(ctx, session, dest).await
}

/// Resolves `dest` the way CDIR does: `/` is the user root, a leading `/` is
/// relative to the user root, anything else is relative to the current
/// directory.
pub fn resolve_directory(session: &Session, dest: &str) -> Option<String> {
    let user = session.selected_user.as_ref()?;
    let resolved = if dest == "/" {
        user.root_dir()
    } else if dest.starts_with('/') {
        format!("{}{}", user.id(), dest)
    } else {
        join_path(&session.current_dir, dest)
    };
    Some(resolved)
}

/// The logged-in half of CDIR: validate and move.
pub async fn change_directory(ctx: &ServerContext, session: &mut Session, dest: &str) -> Response {
    let selected_dir = match resolve_directory(session, dest) {
        Some(dir) => dir,
        None => return Response::error("Please select a user first"),
    };

    if !ctx.fs.exists(&selected_dir).await {
        warn!("[client {}] CDIR to missing {}", session.client_id, selected_dir);
        return Response::error(format!(
            "Can't connect to directory because: {} does not exist",
            selected_dir
        ));
    }
    if !ctx.fs.is_directory(&selected_dir).await {
        return Response::error(format!(
            "Can't list directory because: {} is not a directory",
            selected_dir
        ));
    }

    info!("[client {}] Working dir is now {}", session.client_id, selected_dir);
    session.current_dir = selected_dir;
    Response::logged_in(format!("Changed working dir to {}", session.current_dir))
}

/// Builds the login acknowledgement, replaying a CDIR that was issued before
/// login. The replayed response rides in the same wire message, on its own
/// line.
pub async fn complete_login(ctx: &ServerContext, session: &mut Session, message: &str) -> Response {
    match session.pending_dir_change.take() {
        Some(dest) => {
            let replay = change_directory(ctx, session, &dest).await;
            Response::logged_in(format!("{}\n{}", message, replay.prefixed()))
        }
        None => Response::logged_in(message),
    }
}
