//! Text-vs-binary probe
//!
//! Looks at the first KiB of a file in raw byte mode: any byte outside the
//! allowed text set marks the file as binary.

use std::path::Path;
use tokio::fs::File;
use tokio::io::AsyncReadExt;

/// How many leading bytes are probed.
pub const PROBE_LEN: usize = 1024;

/// Bell, backspace, tab, newline, form feed, carriage return, and escape are
/// the only control characters allowed; DEL is not text.
fn is_text_byte(byte: u8) -> bool {
    matches!(byte, 0x07 | 0x08 | 0x09 | 0x0A | 0x0C | 0x0D | 0x1B)
        || (byte >= 0x20 && byte != 0x7F)
}

/// Whether the file should be treated as binary. Probe errors count as
/// binary so unreadable files are skipped rather than rewritten.
pub async fn is_binary(path: &Path) -> bool {
    probe(path).await.unwrap_or(true)
}

async fn probe(path: &Path) -> std::io::Result<bool> {
    let mut file = File::open(path).await?;
    let mut buf = vec![0u8; PROBE_LEN];
    let mut filled = 0;

    while filled < PROBE_LEN {
        let n = file.read(&mut buf[filled..]).await?;
        if n == 0 {
            break;
        }
        filled += n;
    }

    Ok(buf[..filled].iter().any(|&b| !is_text_byte(b)))
}
