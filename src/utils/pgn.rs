//! PGN-style export of the move table.
//!
//! Movetext uses the engine's coordinate notation (`e2-e4`, `e4xd5`) rather
//! than SAN, so the output is meant for people and for this crate's own
//! front end, not for strict PGN readers.

use std::collections::BTreeMap;

use chrono::{Local, NaiveDate};

use crate::game_state::game_state::GameState;

/// Export stamped with today's local date.
pub fn write_pgn(game_state: &GameState) -> String {
    write_pgn_on(game_state, Local::now().date_naive())
}

pub fn write_pgn_on(game_state: &GameState, date: NaiveDate) -> String {
    let mut headers = BTreeMap::<String, String>::new();
    headers.insert("Event".to_owned(), "Plum Chess Rules Game".to_owned());
    headers.insert("Site".to_owned(), "Local".to_owned());
    headers.insert("Date".to_owned(), date.format("%Y.%m.%d").to_string());
    headers.insert("Round".to_owned(), "-".to_owned());
    headers.insert("White".to_owned(), "White".to_owned());
    headers.insert("Black".to_owned(), "Black".to_owned());
    headers.insert(
        "Result".to_owned(),
        game_state.status().result_token().to_owned(),
    );

    write_pgn_with_headers(game_state, &headers)
}

pub fn write_pgn_with_headers(
    game_state: &GameState,
    headers: &BTreeMap<String, String>,
) -> String {
    let mut out = String::new();

    for (key, value) in headers {
        out.push_str(&format!("[{} \"{}\"]\n", key, escape_pgn_value(value)));
    }
    out.push('\n');

    let mut movetext_parts = Vec::<String>::new();
    for record in game_state.history().records() {
        match (&record.white, &record.black) {
            (Some(white), Some(black)) => {
                movetext_parts.push(format!("{}. {} {}", record.move_number, white, black))
            }
            (Some(white), None) => {
                movetext_parts.push(format!("{}. {}", record.move_number, white))
            }
            (None, Some(black)) => {
                movetext_parts.push(format!("{}... {}", record.move_number, black))
            }
            (None, None) => {}
        }
    }

    movetext_parts.push(game_state.status().result_token().to_owned());
    out.push_str(&movetext_parts.join(" "));
    out.push('\n');

    out
}

fn escape_pgn_value(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}
