#[cfg(not(target_arch = "wasm32"))]
mod cli;
#[cfg(not(target_arch = "wasm32"))]
mod repl;

#[cfg(not(target_arch = "wasm32"))]
#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = match cli::run() {
        cli::RunOutcome::Start(config) => config,
        cli::RunOutcome::Exit(code) => std::process::exit(code),
    };

    let local = tokio::task::LocalSet::new();
    let code = local.run_until(repl::run(config)).await;
    if code != 0 {
        std::process::exit(code);
    }
}

// The browser build starts from `web::start`; the terminal binary is native only.
#[cfg(target_arch = "wasm32")]
fn main() {}
