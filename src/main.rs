use mazequest::{app::App, progress::Progress};

use tracing_appender::non_blocking::WorkerGuard;

/// Log to a file in the data directory; stdout belongs to the game screen.
/// The returned guard must stay alive so buffered log lines get flushed.
fn init_logging() -> Option<WorkerGuard> {
    let dirs = directories::ProjectDirs::from("", "", "mazequest")?;
    std::fs::create_dir_all(dirs.data_dir()).ok()?;
    let file_appender = tracing_appender::rolling::never(dirs.data_dir(), "mazequest.log");
    let (writer, guard) = tracing_appender::non_blocking(file_appender);

    let max_level = match std::env::var("DEBUG") {
        Ok(val) if val == "1" => tracing::Level::DEBUG,
        _ => tracing::Level::INFO,
    };
    tracing_subscriber::fmt()
        .with_writer(writer)
        .with_ansi(false)
        .with_max_level(max_level)
        .init();
    Some(guard)
}

fn main() -> std::io::Result<()> {
    let _guard = init_logging();
    let progress = Progress::load();
    App::new(progress).run()
}
