//! Render newline-delimited native events as presentation JSON

use anyhow::{Context, Result, bail};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, warn};

/// Counts reported after a conversion run
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ConvertStats {
    pub rendered: usize,
    pub skipped: usize,
}

/// Read one `NativeEvent` per line and write one `ReflectedEvent` per line.
///
/// Blank lines are ignored. Malformed lines are skipped with a warning, or
/// abort the run when `strict` is set.
pub async fn convert_lines<R, W>(
    mut reader: R,
    writer: &mut W,
    strict: bool,
) -> Result<ConvertStats>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut stats = ConvertStats::default();
    let mut buf = Vec::new();
    let mut line_no = 0usize;

    loop {
        buf.clear();
        let read = reader
            .read_until(b'\n', &mut buf)
            .await
            .with_context(|| format!("Failed to read input at line {}", line_no + 1))?;
        if read == 0 {
            break;
        }
        line_no += 1;

        // Bytes, not text: invalid UTF-8 is a malformed line like any other
        let line = buf.strip_suffix(b"\n").unwrap_or(&buf[..]);
        let line = line.strip_suffix(b"\r").unwrap_or(line);
        if line.iter().all(u8::is_ascii_whitespace) {
            continue;
        }

        let native = match nakama_native::deserialize(line) {
            Ok(native) => native,
            Err(e) if strict => bail!("line {line_no}: {e}"),
            Err(e) => {
                warn!("Skipping line {}: {}", line_no, e);
                stats.skipped += 1;
                continue;
            }
        };

        let rendered = nakama_reflect::render(&native);
        let mut json = serde_json::to_vec(&rendered)?;
        json.push(b'\n');
        writer.write_all(&json).await?;
        stats.rendered += 1;
        debug!("line {} rendered as {}", line_no, native.kind());
    }

    writer.flush().await?;
    Ok(stats)
}
