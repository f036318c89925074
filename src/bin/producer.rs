//! 生产者程序
//!
//! 向 `test` topic 写入固定的三条消息后关闭写入器。
//! 写入失败或关闭失败都以非零退出码终止。

use anyhow::{Context, Result};
use tracing::info;

use kafka_smoke::config::{self, SmokeProducerConfig};
use kafka_smoke::writer::TopicWriter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let writer =
        TopicWriter::open(&SmokeProducerConfig).context("failed to open topic writer")?;

    let batch = config::demo_batch();
    writer
        .write_batch(&batch)
        .await
        .context("failed to write messages")?;

    writer.close().context("failed to close writer")?;

    info!(count = batch.len(), topic = config::TOPIC, "All messages written");
    Ok(())
}
