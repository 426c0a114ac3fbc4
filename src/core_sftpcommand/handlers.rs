use crate::core_network::channel::ControlChannel;
use crate::core_sftpcommand::command::SftpCommand;
use crate::core_sftpcommand::utils::mask_secrets;
use crate::core_sftpcommand::{
    acct, cdir, done, kill, list, name, pass, retr, send, size, stop, stor, tobe, type_, user,
};
use crate::response::Response;
use crate::server::ServerContext;
use crate::session::Session;
use log::{info, warn};

/// Evaluates one command line against the session and returns the response
/// to send back.
///
/// Checks run in a fixed order: the command must exist, a restricted command
/// needs a logged-in session, and only then is the argument count checked.
/// Arity errors are answered with an unprefixed usage text rather than an
/// error response; clients rely on that distinction.
pub async fn evaluate<C>(
    ctx: &ServerContext,
    session: &mut Session,
    line: &str,
    channel: &mut C,
) -> Response
where
    C: ControlChannel + ?Sized,
{
    info!(
        "[client {}] Received command: {}",
        session.client_id,
        mask_secrets(line)
    );

    let parts: Vec<&str> = line.split_whitespace().collect();
    let (name, args) = match parts.split_first() {
        Some((name, args)) => (*name, args),
        None => ("", &[][..]),
    };

    let command = match SftpCommand::from_str(name) {
        Some(command) => command,
        None => {
            warn!("[client {}] Unknown command: {}", session.client_id, name);
            return Response::error(SftpCommand::unknown_command_error());
        }
    };

    if command.requires_login() && !session.is_logged_in() {
        return Response::error("Please log in first");
    }
    if !command.arity().accepts(args.len()) {
        return Response::none(command.argument_error());
    }

    match command {
        SftpCommand::USER => user::handle_user_command(ctx, session, args[0]).await,
        SftpCommand::ACCT => acct::handle_acct_command(ctx, session, args[0]).await,
        SftpCommand::PASS => pass::handle_pass_command(ctx, session, args[0]).await,
        SftpCommand::TYPE => type_::handle_type_command(session, args[0]).await,
        SftpCommand::LIST => list::handle_list_command(ctx, session, args).await,
        SftpCommand::CDIR => cdir::handle_cdir_command(ctx, session, args[0]).await,
        SftpCommand::KILL => kill::handle_kill_command(ctx, session, args[0]).await,
        SftpCommand::NAME => name::handle_name_command(ctx, session, args[0]).await,
        SftpCommand::TOBE => tobe::handle_tobe_command(ctx, session, args[0]).await,
        SftpCommand::DONE => done::handle_done_command(session).await,
        SftpCommand::RETR => retr::handle_retr_command(ctx, session, args[0]).await,
        SftpCommand::SEND => send::handle_send_command(ctx, session).await,
        SftpCommand::STOP => stop::handle_stop_command(session).await,
        SftpCommand::STOR => stor::handle_stor_command(ctx, session, args[0], args[1]).await,
        SftpCommand::SIZE => {
            size::handle_size_command(ctx, session, args[0], &mut *channel).await
        }
    }
}
