#![allow(dead_code)]

use std::collections::VecDeque;

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use playox_server::tictactoe::{Game, GameOver, Move, MoveSelector, Player};
use tower::ServiceExt;

/// Plays `(x, y, player)` moves in order, panicking on any rejection
pub fn play_all(game: &mut Game, moves: &[(usize, usize, Player)]) {
    for &(x, y, player) in moves {
        let movement = Move::new(x, y, player).expect("Move inside the board");
        game.play(movement)
            .unwrap_or_else(|e| panic!("Move ({x}, {y}) by {player} rejected: {e}"));
    }
}

/// Opponent answering with a fixed list of cells
pub struct ScriptedSelector {
    script: VecDeque<(usize, usize)>,
}

impl ScriptedSelector {
    pub fn new(script: impl IntoIterator<Item = (usize, usize)>) -> Self {
        Self {
            script: script.into_iter().collect(),
        }
    }
}

impl MoveSelector for ScriptedSelector {
    fn select(&mut self, game: &Game, player: Player) -> Result<Move, GameOver> {
        if game.finished() {
            return Err(GameOver::new("Cannot play a finished game"));
        }
        let (x, y) = self.script.pop_front().expect("Opponent script exhausted");
        Ok(Move::new(x, y, player).expect("Scripted move inside the board"))
    }
}

/// GET request, returns status and body
pub async fn get(app: Router, uri: &str) -> (StatusCode, String) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    read(response).await
}

/// POST request without body
pub async fn post(app: Router, uri: &str) -> (StatusCode, String) {
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    read(response).await
}

/// POST request with a JSON body
pub async fn post_json(app: Router, uri: &str, json: &str) -> (StatusCode, String) {
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("content-type", "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    read(response).await
}

async fn read(response: axum::response::Response) -> (StatusCode, String) {
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, String::from_utf8(body.to_vec()).unwrap())
}
