use crate::core_sftpcommand::cdir::complete_login;
use crate::response::Response;
use crate::server::ServerContext;
use crate::session::Session;
use log::{info, warn};

/// Handles the PASS command. Passwords are compared in plaintext.
pub async fn handle_pass_command(
    ctx: &ServerContext,
    session: &mut Session,
    password: &str,
) -> Response {
    let user = match &session.selected_user {
        Some(user) => user.clone(),
        None => return Response::error("Please select a user first"),
    };
    if !user.requires_password() {
        return Response::error("No password required");
    }

    if !user.password_matches(password) {
        warn!("[client {}] Wrong password for {}", session.client_id, user.id());
        return Response::error("Wrong password, try again");
    }

    session.password_verified = true;
    if !session.is_account_selected() {
        return Response::success("Send account");
    }

    info!("[client {}] {} logged in", session.client_id, user.id());
    if session.pending_dir_change.is_none() {
        session.current_dir = user.root_dir();
    }
    complete_login(ctx, session, "Logged in").await
}
