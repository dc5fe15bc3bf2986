use release_herald::{cli, logger, ui};

#[tokio::main]
async fn main() {
    let _ = logger::init();

    // Any failure past argument parsing exits 1: a notification job that
    // posted nothing should fail visibly in CI.
    if let Err(e) = cli::main().await {
        log::error!("{e:#}");
        ui::print_error(&format!("Error: {e:#}"));
        std::process::exit(1);
    }
}
