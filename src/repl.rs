use activity_board::adapters::{ConsolePage, HttpActivityApi, TokioTimeProvider};
use activity_board::config::BoardConfig;
use activity_board::Board;
use activity_board::session;

use std::rc::Rc;
use tokio::io::BufReader;

/// Runs the board on stdin/stdout until stdin closes or the user quits. Must
/// be polled inside a `LocalSet`.
pub(crate) async fn run(config: BoardConfig) -> i32 {
    let api = match HttpActivityApi::new(&config) {
        Ok(api) => api,
        Err(err) => {
            eprintln!("error: {err}");
            return 2;
        }
    };
    let page = ConsolePage::new(std::io::stdout());
    let board = Rc::new(Board::new(api, page, TokioTimeProvider, &config));
    log::info!("activity board using {}", config.base_url);

    match session::run_session(board, BufReader::new(tokio::io::stdin())).await {
        Ok(()) => 0,
        Err(err) => {
            log::error!("failed to read command: {err}");
            1
        }
    }
}
