//! Log viewer

use std::io;
use std::path::Path;
use std::time::Duration;

use tokio::fs;

use super::presenter::Presenter;

const FOLLOW_POLL_INTERVAL: Duration = Duration::from_millis(500);

/// Last `count` lines of `content`
fn tail(content: &str, count: usize) -> Vec<&str> {
    let lines: Vec<&str> = content.lines().collect();
    let start = lines.len().saturating_sub(count);
    lines[start..].to_vec()
}

/// Handle `logs`
pub async fn handle_logs(
    path: &Path,
    lines: usize,
    follow: bool,
    clear: bool,
    presenter: &Presenter,
) -> io::Result<()> {
    if clear {
        match fs::remove_file(path).await {
            Ok(()) => presenter.success("Log file cleared"),
            Err(e) if e.kind() == io::ErrorKind::NotFound => presenter.info("No log file"),
            Err(e) => return Err(e),
        }
        return Ok(());
    }

    let content = match fs::read_to_string(path).await {
        Ok(content) => content,
        Err(e) if e.kind() == io::ErrorKind::NotFound && !follow => {
            presenter.info(&format!("No log file at {}", path.display()));
            return Ok(());
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => String::new(),
        Err(e) => return Err(e),
    };

    for line in tail(&content, lines) {
        presenter.log_line(line);
    }

    if follow {
        presenter.info(&format!("Following {} (Ctrl+C to stop)", path.display()));
        follow_file(path, content.len() as u64, presenter).await?;
    }

    Ok(())
}

/// Poll the file and print lines appended after `offset`
async fn follow_file(path: &Path, mut offset: u64, presenter: &Presenter) -> io::Result<()> {
    let mut pending = String::new();

    loop {
        tokio::time::sleep(FOLLOW_POLL_INTERVAL).await;

        let bytes = match fs::read(path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => continue,
            Err(e) => return Err(e),
        };
        let len = bytes.len() as u64;

        if len < offset {
            // Rotated or cleared
            offset = 0;
            pending.clear();
        }
        if len == offset {
            continue;
        }

        pending.push_str(&String::from_utf8_lossy(&bytes[offset as usize..]));
        offset = len;

        while let Some(pos) = pending.find('\n') {
            let line: String = pending.drain(..=pos).collect();
            presenter.log_line(line.trim_end_matches(['\r', '\n']));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tail_returns_last_lines() {
        let content = "a\nb\nc\nd\n";
        assert_eq!(tail(content, 2), vec!["c", "d"]);
        assert_eq!(tail(content, 10), vec!["a", "b", "c", "d"]);
        assert!(tail(content, 0).is_empty());
        assert!(tail("", 5).is_empty());
    }

    #[tokio::test]
    async fn clear_removes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("debug.log");
        std::fs::write(&path, "[2024-01-01 10:00:00] [INFO] x\n").unwrap();

        handle_logs(&path, 50, false, true, &Presenter::new()).await.unwrap();
        assert!(!path.exists());

        // Clearing a missing file is fine
        handle_logs(&path, 50, false, true, &Presenter::new()).await.unwrap();
    }

    #[tokio::test]
    async fn missing_log_is_not_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("debug.log");

        handle_logs(&path, 50, false, false, &Presenter::new()).await.unwrap();
    }
}
