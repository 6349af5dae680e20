#![allow(non_snake_case)]

mod common;

use std::rc::Rc;

use activity_board::adapters::{ConsolePage, HIDDEN_NOTICE, HttpActivityApi};
use activity_board::session::run_session;
use activity_board::{Board, BoardConfig};

use common::InstantTime;
use tokio::task::LocalSet;

type SessionBoard = Board<HttpActivityApi, ConsolePage<Vec<u8>>, InstantTime>;

fn board(base_url: &str) -> Rc<SessionBoard> {
    let config = BoardConfig {
        base_url: base_url.to_string(),
        ..BoardConfig::default()
    };
    let api = HttpActivityApi::new(&config).expect("build api");
    Rc::new(Board::new(
        api,
        ConsolePage::new(Vec::new()),
        InstantTime,
        &config,
    ))
}

async fn run(board: Rc<SessionBoard>, input: &str) -> String {
    LocalSet::new()
        .run_until(run_session(Rc::clone(&board), input.as_bytes()))
        .await
        .expect("read commands");
    let board = Rc::try_unwrap(board)
        .ok()
        .expect("session tasks released the board");
    String::from_utf8(board.into_page().into_inner()).expect("utf8 output")
}

#[tokio::test]
async fn run_session__should_render_list_when_input_is_already_closed() {
    // Given
    let (base_url, _catalog) = common::spawn_stub_server().await;

    // When
    let output = run(board(&base_url), "").await;

    // Then
    assert!(output.contains("Activities: Chess Club, Programming Class, Gym Class"));
    assert!(output.contains("Availability: 10 spots left"));
}

#[tokio::test]
async fn run_session__should_finish_signup_issued_right_before_quit() {
    // Given
    let (base_url, catalog) = common::spawn_stub_server().await;
    let input = "signup newstudent@mergington.edu Gym Class\nquit\nrefresh\n";

    // When
    let output = run(board(&base_url), input).await;

    // Then
    assert!(output.contains("[success] Signed up newstudent@mergington.edu for Gym Class"));
    assert!(output.contains("Availability: 29 spots left"));
    assert!(output.contains(HIDDEN_NOTICE));
    let catalog = catalog.lock().expect("catalog lock");
    assert!(
        catalog
            .get("Gym Class")
            .expect("gym class")
            .participants
            .contains(&"newstudent@mergington.edu".to_string())
    );
}

#[tokio::test]
async fn run_session__should_finish_removal_when_input_ends() {
    // Given
    let (base_url, _catalog) = common::spawn_stub_server().await;

    // When
    let output = run(board(&base_url), "remove michael@mergington.edu Chess Club").await;

    // Then
    assert!(output.contains("[success] Removed michael@mergington.edu from Chess Club"));
    assert!(output.contains("Availability: 11 spots left"));
}

#[tokio::test]
async fn run_session__should_report_unlisted_activity_without_dispatching() {
    // Given
    let (base_url, catalog) = common::spawn_stub_server().await;

    // When
    let output = run(board(&base_url), "signup a@b.com Dance Club\nhelp\n").await;

    // Then
    assert!(output.contains("error: 'Dance Club' is not a listed activity"));
    assert!(output.contains("commands:"));
    assert!(!output.contains("[success]"));
    assert_eq!(catalog.lock().expect("catalog lock").len(), 3);
}
