use tokio::io::{AsyncWrite, AsyncWriteExt};

use super::error::WriteError;
use crate::stats::Report;

/// Write the report as pretty-printed JSON followed by a newline, then flush
pub async fn write_report<W>(report: &Report, mut writer: W) -> Result<(), WriteError>
where
    W: AsyncWrite + Unpin + Send,
{
    let mut json = serde_json::to_vec_pretty(report)?;
    json.push(b'\n');

    writer.write_all(&json).await?;
    writer.flush().await?;
    Ok(())
}
