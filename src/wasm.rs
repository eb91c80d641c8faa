//! Browser bindings for the board solver.

use js_sys::{BigInt, Object, Reflect};
use wasm_bindgen::prelude::*;

use crate::challenge::{BoardGameChallenge, BoardGameInput, Challenge, ChallengeError};
use crate::observer::Silent;
use crate::solver::BoardGameOutput;

/// Runs the board game challenge, validation included, without logging the solution.
fn solve_input(board_size: usize, board: Vec<u32>) -> Result<BoardGameOutput, ChallengeError> {
    BoardGameChallenge::with_observer(Silent).run(&BoardGameInput { board_size, board })
}

/// Solve a board of `size` cells, returning `{ turns, probability, combinations }`.
///
/// Boards are validated first, so sizes outside `3..=64` are rejected with an error message.
/// `combinations` is a `BigInt` since it can exceed the safe integer range of a JS number.
#[wasm_bindgen(js_name = solveBoard)]
pub fn solve_board(size: usize, cells: Vec<u32>) -> Result<Object, JsValue> {
    let output = solve_input(size, cells).map_err(|err| JsValue::from_str(&err.to_string()))?;

    let result = Object::new();
    Reflect::set(&result, &"turns".into(), &JsValue::from_f64(output.turns as f64))?;
    Reflect::set(&result, &"probability".into(), &JsValue::from_f64(output.probability))?;
    let combinations = BigInt::new(&JsValue::from_str(&output.combinations.to_string()))?;
    Reflect::set(&result, &"combinations".into(), &combinations)?;

    Ok(result)
}
