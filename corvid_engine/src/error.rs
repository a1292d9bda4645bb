//! The typed error surface raised at the UCI/process boundary.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("invalid fen: {reason}")]
    InvalidFen { reason: String },

    #[error("illegal move: {uci}")]
    IllegalMove { uci: String },

    #[error("unknown or malformed command: {command}")]
    BadCommand { command: String },

    #[error("value '{value}' for option '{name}' is out of range")]
    OutOfRange { name: String, value: String },
}

/// Prints an `EngineError` using the UCI `info string` error framing.
pub fn report(err: &EngineError) {
    println!("info string ERROR: {}", err);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_range_message() {
        let e = EngineError::OutOfRange {
            name: "Hash".to_string(),
            value: "9999".to_string(),
        };
        assert!(e.to_string().contains("Hash"));
        assert!(e.to_string().contains("9999"));
    }
}
