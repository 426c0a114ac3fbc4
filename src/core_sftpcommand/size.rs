use crate::core_network::channel::ControlChannel;
use crate::core_sftpcommand::command::SftpCommand;
use crate::response::Response;
use crate::server::ServerContext;
use crate::session::Session;
use log::{error, info};

/// Handles the SIZE command.
///
/// This is the only command that talks to the client mid-way: it
/// acknowledges with `+Ok, waiting for file`, reads exactly one more line
/// as the file payload, keeps at most `max_bytes` characters of it and
/// writes them with the mode chosen by STOR. The pending store is consumed
/// whether or not the write succeeds.
///
/// # Arguments
///
/// * `ctx` - Registry and filesystem shared by all sessions.
/// * `session` - The client's session; must hold a pending STOR.
/// * `arg` - The announced number of bytes.
/// * `channel` - The control connection, used for the interim reply and the payload line.
///
/// # Returns
///
/// `+Saved <path>` on success. An unparseable count gives the unprefixed
/// usage text and leaves the pending store in place.
pub async fn handle_size_command<C>(
    ctx: &ServerContext,
    session: &mut Session,
    arg: &str,
    channel: &mut C,
) -> Response
where
    C: ControlChannel + ?Sized,
{
    if session.pending_store.is_none() {
        return Response::error("Please select a file name to store at first");
    }
    let max_bytes: usize = match arg.parse() {
        Ok(n) => n,
        Err(_) => return Response::none(SftpCommand::SIZE.argument_error()),
    };
    let mut pending = match session.pending_store.take() {
        Some(pending) => pending,
        None => return Response::error("Please select a file name to store at first"),
    };

    if let Err(e) = channel.send(&Response::success("Ok, waiting for file")).await {
        error!("[client {}] Failed to acknowledge SIZE: {}", session.client_id, e);
        return Response::error(format!("Couldn't save {}", e));
    }

    let payload = match channel.read_line().await {
        Ok(Some(line)) => line,
        Ok(None) => {
            return Response::error("Couldn't save connection closed before the file arrived")
        }
        Err(e) => {
            error!("[client {}] Failed to read file payload: {}", session.client_id, e);
            return Response::error(format!("Couldn't save {}", e));
        }
    };

    pending.announce(max_bytes, session.transfer_mode);
    let clamped = pending.clamp(&payload);

    match ctx
        .fs
        .write(&pending.path, clamped.as_bytes(), pending.write_mode)
        .await
    {
        Ok(()) => {
            info!(
                "[client {}] Saved {} ({} of {} chars, limit {:?}, {:?} mode)",
                session.client_id,
                pending.path,
                clamped.chars().count(),
                payload.chars().count(),
                pending.max_bytes,
                pending.transfer_mode
            );
            Response::success(format!("Saved {}", pending.path))
        }
        Err(e) => {
            error!("[client {}] Failed to save {}: {}", session.client_id, pending.path, e);
            Response::error(format!("Couldn't save {}", e))
        }
    }
}
