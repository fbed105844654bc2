//! PlayOX tic-tac-toe server
//!

/// Game rules and the automated opponent
pub mod tictactoe;

/// Process-lifetime storage of games
pub mod registry;

/// HTTP API
pub mod server;
