//! Board geometry endpoint

use axum::Json;
use serde::Serialize;
use tictac_core::{BOARD_SIZE, LINES, LINE_NAMES};

#[derive(Serialize)]
pub struct BoardInfo {
    pub size: usize,
    /// Winning lines as [row, col] triples, in the order they are checked
    pub lines: Vec<[[usize; 2]; 3]>,
    pub line_names: Vec<&'static str>,
}

/// Get board geometry
pub async fn get_board() -> Json<BoardInfo> {
    Json(BoardInfo {
        size: BOARD_SIZE,
        lines: LINES
            .iter()
            .map(|line| line.map(|mv| [mv.row, mv.col]))
            .collect(),
        line_names: LINE_NAMES.to_vec(),
    })
}
