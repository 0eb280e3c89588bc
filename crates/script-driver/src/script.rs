//! Command scripts sent to the engine

use std::path::Path;

use crate::error::DriverError;

/// Recorded two-player game: both player names, then alternating moves.
/// `0-0` castles, `Q`/`N` answer the promotion prompt.
pub const BUILTIN_GAME: &[&str] = &[
    "WhitePlayer",
    "BlackPlayer",
    "g2 g3",
    "e7 e5",
    "f1 g2",
    "d7 d5",
    "g1 f3",
    "b8 c6",
    "b1 c3",
    "f8 b4",
    "d2 d4",
    "f7 f6",
    "c1 e3",
    "e5 e4",
    "f3 h4",
    "g7 g5",
    "h4 f3",
    "d8 e7",
    "0-0",
    "g8 h6",
    "c3 d5",
    "e7 d6",
    "d5 b4",
    "c6 b4",
    "f3 d2",
    "c8 e6",
    "d2 e4",
    "d6 e7",
    "a2 a3",
    "b4 d5",
    "c2 c4",
    "d5 e3",
    "f2 e3",
    "e6 c4",
    "b2 b3",
    "c4 d5",
    "f1 f6",
    "h6 g4",
    "g2 f3",
    "d5 e4",
    "f3 e4",
    "e7 f6",
    "d1 f1",
    "f6 e6",
    "e4 b7",
    "h8 f8",
    "f1 c1",
    "f8 f2",
    "b7 a8",
    "f2 e2",
    "c1 c7",
    "e6 e3",
    "g1 h1",
    "e2 e1",
    "a1 e1",
    "e3 e1",
    "h1 g2",
    "g4 e3",
    "g2 f3",
    "g5 g4",
    "f3 e4",
    "e3 c2",
    "e4 f5",
    "c2 e3",
    "f5 f6",
    "e1 f1",
    "c7 f4",
    "e3 d5",
    "a8 d5",
    "f1 f4",
    "g3 f4",
    "h7 h5",
    "b3 b4",
    "h5 h4",
    "f6 g5",
    "g4 g3",
    "h2 g3",
    "h4 g3",
    "b4 b5",
    "g3 g2",
    "d5 g2",
    "a7 a5",
    "b5 a6",
    "e8 d7",
    "a6 a7",
    "d7 c7",
    "a7 a8",
    "Q",
    "c7 b6",
    "d4 d5",
    "b6 c7",
    "f4 f5",
    "c7 d6",
    "f5 f6",
    "d6 d7",
    "f6 f7",
    "d7 e7",
    "f7 f8",
    "N",
    "e7 d6",
    "a3 a4",
    "d6 c5",
    "a4 a5",
    "c5 b5",
    "a5 a6",
    "b5 b6",
    "a6 a7",
    "b6 c7",
    "a8 b8",
];

/// Marks a comment line in script files
const COMMENT_PREFIX: char = '#';

/// Immutable, ordered list of lines to send
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Script {
    lines: Vec<String>,
}

impl Script {
    /// Build a script, rejecting lines that would split into several writes
    pub fn new<I, S>(lines: I) -> Result<Self, DriverError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let lines: Vec<String> = lines.into_iter().map(Into::into).collect();
        if let Some(idx) = lines.iter().position(|l| l.contains(['\n', '\r'])) {
            return Err(DriverError::InvalidLine { line_no: idx + 1 });
        }
        Ok(Self { lines })
    }

    pub fn builtin() -> Self {
        Self {
            lines: BUILTIN_GAME.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Parse script text: one command per line, `#` lines are comments.
    /// Blank lines are kept and sent as empty input. A stray `\r` inside a
    /// line is rejected with the file line number.
    pub fn parse(text: &str) -> Result<Self, DriverError> {
        let mut lines = Vec::new();
        for (idx, line) in text.lines().enumerate() {
            let line = line.strip_suffix('\r').unwrap_or(line);
            if line.starts_with(COMMENT_PREFIX) {
                continue;
            }
            if line.contains('\r') {
                return Err(DriverError::InvalidLine { line_no: idx + 1 });
            }
            lines.push(line.to_string());
        }
        Self::new(lines)
    }

    pub async fn load(path: impl AsRef<Path>) -> Result<Self, DriverError> {
        let path = path.as_ref();
        let text = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| DriverError::Script {
                path: path.to_path_buf(),
                source,
            })?;
        Self::parse(&text)
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_game_shape() {
        let script = Script::builtin();
        assert_eq!(script.len(), 109);
        assert_eq!(&script.lines()[..2], ["WhitePlayer", "BlackPlayer"]);
        assert_eq!(script.lines()[2], "g2 g3");
        assert_eq!(script.lines().last().map(String::as_str), Some("a8 b8"));
        assert_eq!(script.lines()[18], "0-0");
        // promotion answers follow the pawn reaching the last rank
        let q = script.lines().iter().position(|l| l == "Q").unwrap();
        assert_eq!(script.lines()[q - 1], "a7 a8");
        let n = script.lines().iter().position(|l| l == "N").unwrap();
        assert_eq!(script.lines()[n - 1], "f7 f8");
    }

    #[test]
    fn test_parse_skips_comments_keeps_order() {
        let script = Script::parse("# opening\r\nAlice\r\nBob\n\ne2 e4\n# end\n").unwrap();
        assert_eq!(script.lines(), ["Alice", "Bob", "", "e2 e4"]);
    }

    #[test]
    fn test_parse_rejects_stray_carriage_return() {
        // reported against the file line, comments included
        let err = Script::parse("# game\nAlice\ne2\re4\n").unwrap_err();
        assert!(matches!(err, DriverError::InvalidLine { line_no: 3 }));
    }

    #[tokio::test]
    async fn test_load_rejects_stray_carriage_return() {
        let path = std::env::temp_dir().join(format!("script-cr-{}.txt", std::process::id()));
        tokio::fs::write(&path, "Alice\ne2\re4\n").await.unwrap();
        let err = Script::load(&path).await.unwrap_err();
        let _ = tokio::fs::remove_file(&path).await;
        assert!(matches!(err, DriverError::InvalidLine { line_no: 2 }));
    }

    #[test]
    fn test_new_rejects_embedded_newline() {
        let err = Script::new(["Alice", "e2 e4\ne7 e5"]).unwrap_err();
        assert!(matches!(err, DriverError::InvalidLine { line_no: 2 }));
    }

    #[tokio::test]
    async fn test_load_missing_file() {
        let err = Script::load("/nonexistent/script.txt").await.unwrap_err();
        assert!(matches!(err, DriverError::Script { .. }));
    }
}
