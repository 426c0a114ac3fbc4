use crate::response::Response;
use crate::session::{Session, TransferMode};
use log::info;

/// Handles the TYPE command.
pub async fn handle_type_command(session: &mut Session, arg: &str) -> Response {
    match TransferMode::from_arg(arg) {
        Some(mode) => {
            session.transfer_mode = mode;
            info!("[client {}] Transfer type set to {}", session.client_id, mode.name());
            Response::success(format!("Using {} mode", mode.name()))
        }
        None => Response::error("Type not valid"),
    }
}
