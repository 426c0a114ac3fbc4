use crate::core_fs::join_path;
use crate::response::Response;
use crate::server::ServerContext;
use crate::session::Session;
use log::error;

/// Handles the LIST command: `LIST F [dir]` for names only, `LIST V [dir]`
/// for name, path and size. The first line of a listing is the directory
/// that was listed.
pub async fn handle_list_command(ctx: &ServerContext, session: &Session, args: &[&str]) -> Response {
    let selected_dir = match args.get(1) {
        Some(subdir) => join_path(&session.current_dir, subdir),
        None => session.current_dir.clone(),
    };

    if !ctx.fs.exists(&selected_dir).await {
        return Response::error(format!(
            "Can't list directory because: {} does not exist",
            selected_dir
        ));
    }
    if !ctx.fs.is_directory(&selected_dir).await {
        return Response::error(format!(
            "Can't list directory because: {} is not a directory",
            selected_dir
        ));
    }

    let mut lines = vec![selected_dir.clone()];
    let listed = match args[0].to_ascii_lowercase().as_str() {
        "f" => ctx
            .fs
            .list_names(&selected_dir)
            .await
            .map(|names| lines.extend(names)),
        "v" => ctx.fs.list_verbose(&selected_dir).await.map(|entries| {
            lines.extend(entries.into_iter().map(|entry| {
                format!(
                    "Name: {}    Path: {}    Size: {} Bytes",
                    entry.name, entry.path, entry.size
                )
            }))
        }),
        _ => return Response::error("Argument error"),
    };

    match listed {
        Ok(()) => Response::success(lines.join("\n")),
        Err(e) => {
            error!("[client {}] Listing {} failed: {}", session.client_id, selected_dir, e);
            Response::error(format!("Can't list directory because: {}", e))
        }
    }
}
