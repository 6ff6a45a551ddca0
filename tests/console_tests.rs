mod common;

use common::MockGenerator;
use farmcare_ai::console::run_turn;
use farmcare_ai::services::responder::{PROCESSING_ERROR_MESSAGE, Responder, UNAVAILABLE_MESSAGE};
use std::io::Cursor;

async fn turn(responder: &Responder, input: &str) -> String {
    let mut out = Vec::new();
    run_turn(responder, Cursor::new(input.as_bytes()), &mut out)
        .await
        .unwrap();
    String::from_utf8(out).unwrap()
}

#[tokio::test]
async fn prompts_once_and_prints_reply() {
    let mock = MockGenerator::replying("Keep the shed dry.");
    let responder = Responder::new(mock.clone());

    let output = turn(&responder, "My piglets are shivering\r\nignored second line\n").await;
    assert_eq!(output, "User: Keep the shed dry.\n");
    assert_eq!(mock.calls(), 1);
    assert_eq!(mock.last_call().unwrap().0, "My piglets are shivering");
}

#[tokio::test]
async fn end_of_input_still_produces_a_reply() {
    let mock = MockGenerator::replying("How can I help?");
    let output = turn(&Responder::new(mock.clone()), "").await;
    assert_eq!(output, "User: How can I help?\n");
    assert_eq!(mock.last_call().unwrap().0, "");
}

#[tokio::test]
async fn fallbacks_are_printed_like_any_reply() {
    let output = turn(&Responder::unavailable(), "hello\n").await;
    assert_eq!(output, format!("User: {UNAVAILABLE_MESSAGE}\n"));

    let output = turn(&Responder::new(MockGenerator::failing()), "hello\n").await;
    assert_eq!(output, format!("User: {PROCESSING_ERROR_MESSAGE}\n"));
}

#[tokio::test]
async fn invalid_utf8_input_still_reaches_the_responder() {
    let mock = MockGenerator::replying("Check the feed.");
    let responder = Responder::new(mock.clone());

    let mut out = Vec::new();
    run_turn(&responder, Cursor::new(&b"caf\xe9 pigs\n"[..]), &mut out)
        .await
        .unwrap();

    assert_eq!(String::from_utf8(out).unwrap(), "User: Check the feed.\n");
    assert_eq!(mock.calls(), 1);
    assert_eq!(mock.last_call().unwrap().0, "caf\u{FFFD} pigs");
}
