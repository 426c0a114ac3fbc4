use crate::core_sftpcommand::cdir::complete_login;
use crate::response::Response;
use crate::server::ServerContext;
use crate::session::Session;
use log::{info, warn};

/// Handles the ACCT command.
///
/// Any of the user's accounts is accepted, and ACCT may be repeated once
/// logged in. A rejected account clears the previously accepted one.
///
/// # Arguments
///
/// * `ctx` - Registry and filesystem shared by all sessions.
/// * `session` - The client's session.
/// * `account` - The account name to check against the selected user.
///
/// # Returns
///
/// `!Account valid, logged-in` (with any deferred CDIR on a second line),
/// `+Account valid, send password` or an error response.
pub async fn handle_acct_command(
    ctx: &ServerContext,
    session: &mut Session,
    account: &str,
) -> Response {
    let user = match &session.selected_user {
        Some(user) => user.clone(),
        None => return Response::error("Please select a user first"),
    };
    if !user.requires_account() {
        return Response::error("User is not associated with any accounts");
    }

    if !user.has_account(account) {
        warn!(
            "[client {}] Invalid account {} for {}",
            session.client_id,
            account,
            user.id()
        );
        session.selected_account = None;
        return Response::error("Invalid account, try again");
    }

    session.selected_account = Some(account.to_string());
    if user.requires_password() && !session.is_password_provided() {
        return Response::success("Account valid, send password");
    }

    info!(
        "[client {}] {} logged in with account {}",
        session.client_id,
        user.id(),
        account
    );
    complete_login(ctx, session, "Account valid, logged-in").await
}
