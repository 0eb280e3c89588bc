use std::io;
use std::path::{Path, PathBuf};
use std::pin::Pin;
use std::task::{Context, Poll};
use std::time::{SystemTime, UNIX_EPOCH};

use script_driver::LaunchCommand;
use tokio::io::AsyncWrite;

/// Generate a unique suffix based on pid + timestamp to avoid collisions.
pub fn unique_suffix() -> String {
    let ts = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    format!("{}-{}", std::process::id(), ts % 1_000_000_000)
}

/// Fresh path in the temp dir for a child to write into.
pub fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("chess-harness-{name}-{}", unique_suffix()))
}

/// `sh -c <body>` with `path` passed as `$0`.
pub fn sh_with_path(body: &str, path: &Path) -> LaunchCommand {
    LaunchCommand::new(
        "sh",
        ["-c".to_string(), body.to_string(), path.display().to_string()],
    )
}

/// Engine stand-in that records everything it reads on stdin.
pub fn recorder(path: &Path) -> LaunchCommand {
    sh_with_path(r#"cat > "$0""#, path)
}

pub fn echoed_lines(echo: &[u8]) -> Vec<String> {
    String::from_utf8_lossy(echo)
        .lines()
        .map(String::from)
        .collect()
}

/// Terminal stand-in whose every write fails, like a closed stdout.
pub struct BrokenTerminal;

impl AsyncWrite for BrokenTerminal {
    fn poll_write(
        self: Pin<&mut Self>,
        _cx: &mut Context<'_>,
        _buf: &[u8],
    ) -> Poll<io::Result<usize>> {
        Poll::Ready(Err(io::Error::from(io::ErrorKind::BrokenPipe)))
    }

    fn poll_flush(self: Pin<&mut Self>, _cx: &mut Context<'_>) -> Poll<io::Result<()>> {
        Poll::Ready(Ok(()))
    }

    fn poll_shutdown(self: Pin<&mut Self>, _cx: &mut Context<'_>) -> Poll<io::Result<()>> {
        Poll::Ready(Ok(()))
    }
}
