use crate::response::Response;
use crate::server::ServerContext;
use crate::session::Session;
use log::{info, warn};

/// Handles the USER command.
///
/// Selecting a user always starts from a clean slate: account, password,
/// working directory and every pending operation are forgotten first, so a
/// new user can never inherit the previous one's state.
pub async fn handle_user_command(
    ctx: &ServerContext,
    session: &mut Session,
    user_id: &str,
) -> Response {
    session.clear_user_state();

    let user = match ctx.registry.lookup(user_id) {
        Some(user) => user,
        None => {
            warn!("[client {}] Unknown user-id: {}", session.client_id, user_id);
            return Response::error("Invalid user-id, try again");
        }
    };

    session.current_dir = user.root_dir();
    let needs_more = user.requires_account() || user.requires_password();
    session.selected_user = Some(user);

    if needs_more {
        info!("[client {}] User {} selected", session.client_id, user_id);
        Response::success("User-id valid, send account and password")
    } else {
        info!("[client {}] User {} logged in", session.client_id, user_id);
        Response::logged_in(format!("{} logged in", user_id))
    }
}
