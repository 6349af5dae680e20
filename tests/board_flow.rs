#![allow(non_snake_case)]

mod common;

use activity_board::adapters::{ConsolePage, HttpActivityApi};
use activity_board::ports::Page;
use activity_board::render::LOAD_FAILURE_MESSAGE;
use activity_board::types::Severity;
use activity_board::{Action, Board, BoardConfig};

use common::InstantTime;

type TestBoard = Board<HttpActivityApi, ConsolePage<Vec<u8>>, InstantTime>;

fn board(base_url: &str) -> TestBoard {
    let config = BoardConfig {
        base_url: base_url.to_string(),
        ..BoardConfig::default()
    };
    let api = HttpActivityApi::new(&config).expect("build api");
    Board::new(api, ConsolePage::new(Vec::new()), InstantTime, &config)
}

fn output(board: TestBoard) -> String {
    String::from_utf8(board.into_page().into_inner()).expect("utf8 output")
}

#[tokio::test]
async fn handle__should_render_every_activity_and_option() {
    // Given
    let (base_url, _catalog) = common::spawn_stub_server().await;
    let board = board(&base_url);

    // When
    board.handle(Action::Load).await;

    // Then
    let options = board.page().options();
    assert_eq!(options.len(), 4);
    assert!(options[0].is_placeholder());
    assert!(
        board
            .page()
            .removal_control("Chess Club", "michael@mergington.edu")
            .is_some()
    );
    let text = output(board);
    assert!(text.contains("Availability: 10 spots left"));
    assert!(text.contains("No participants yet"));
}

#[tokio::test]
async fn handle__should_refresh_list_after_signup() {
    // Given
    let (base_url, _catalog) = common::spawn_stub_server().await;
    let board = board(&base_url);
    board.handle(Action::Load).await;
    assert!(board.page().fill_signup_form("newstudent@mergington.edu", "Gym Class"));

    // When
    board.handle(Action::SubmitSignup).await;

    // Then
    assert!(board.page().signup_form().email.is_empty());
    assert!(
        board
            .page()
            .removal_control("Gym Class", "newstudent@mergington.edu")
            .is_some()
    );
    let text = output(board);
    assert!(text.contains("[success] Signed up newstudent@mergington.edu for Gym Class"));
    assert!(text.contains("Availability: 29 spots left"));
}

#[tokio::test]
async fn handle__should_keep_form_when_signup_is_rejected() {
    // Given
    let (base_url, _catalog) = common::spawn_stub_server().await;
    let board = board(&base_url);
    board.handle(Action::Load).await;
    assert!(board.page().fill_signup_form("michael@mergington.edu", "Chess Club"));

    // When
    board.handle(Action::SubmitSignup).await;

    // Then
    assert_eq!(board.page().signup_form().email, "michael@mergington.edu");
    let text = output(board);
    assert!(text.contains("[error] Student is already signed up for this activity"));
}

#[tokio::test]
async fn handle__should_drop_removed_participant_from_rendering() {
    // Given
    let (base_url, _catalog) = common::spawn_stub_server().await;
    let board = board(&base_url);
    board.handle(Action::Load).await;
    let target = board
        .page()
        .removal_control("Chess Club", "michael@mergington.edu")
        .expect("rendered control");

    // When
    board.handle(Action::RemoveParticipant(target)).await;

    // Then
    assert!(
        board
            .page()
            .removal_control("Chess Club", "michael@mergington.edu")
            .is_none()
    );
    assert!(
        board
            .page()
            .removal_control("Chess Club", "daniel@mergington.edu")
            .is_some()
    );
    let text = output(board);
    assert!(text.contains("[success] Removed michael@mergington.edu from Chess Club"));
}

#[tokio::test]
async fn handle__should_show_failure_message_when_server_unreachable() {
    // Given
    let base_url = common::unreachable_base_url().await;
    let board = board(&base_url);

    // When
    board.handle(Action::Load).await;

    // Then
    assert_eq!(board.page().options().len(), 1);
    let text = output(board);
    assert!(text.contains(LOAD_FAILURE_MESSAGE));
}

#[tokio::test]
async fn handle__should_show_error_when_removal_cannot_reach_server() {
    // Given
    let base_url = common::unreachable_base_url().await;
    let board = board(&base_url);
    let target = activity_board::types::RemovalTarget::new("Chess Club", "x@y.com");

    // When
    board.handle(Action::RemoveParticipant(target)).await;

    // Then
    assert!(board.page().notification().is_none());
    let text = output(board);
    assert!(text.contains(&format!("[{}] Failed to remove participant", Severity::Error.label())));
}
