#![forbid(unsafe_code)]

fn main() {
    if let Err(error) = heapmap::cli::run_from_env() {
        tracing::error!(%error, "heapmap failed");
        eprintln!("{error}");
        std::process::exit(error.exit_code());
    }
}
