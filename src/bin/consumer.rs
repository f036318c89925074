//! 消费者程序
//!
//! 以 `consumer-group-id` 加入 consumer group，逐条读取消息并
//! 打印一行。读取错误按原因分类后结束循环（不升级为致命错误），
//! Ctrl-C 触发干净退出。循环结束后关闭读取器恰好一次，关闭失败
//! 以非零退出码终止。

use anyhow::{Context, Result};
use tracing::{info, warn};

use kafka_smoke::config::SmokeConsumerConfig;
use kafka_smoke::error::StopCause;
use kafka_smoke::reader::GroupReader;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let reader = GroupReader::open(&SmokeConsumerConfig).context("failed to open group reader")?;

    let shutdown = tokio::signal::ctrl_c();
    tokio::pin!(shutdown);

    loop {
        tokio::select! {
            _ = &mut shutdown => {
                info!("Shutdown signal received, stopping consume loop");
                break;
            }
            outcome = reader.read() => match outcome {
                Ok(record) => println!("{record}"),
                Err(err) => {
                    match err.read_stop_cause() {
                        StopCause::BrokerUnavailable => {
                            warn!(error = %err, "Broker unavailable, stopping consume loop");
                        }
                        StopCause::Shutdown => {
                            info!("Consume loop canceled");
                        }
                        StopCause::Client => {
                            warn!(error = %err, "Read failed, stopping consume loop");
                        }
                    }
                    break;
                }
            },
        }
    }

    reader.close().context("failed to close reader")?;
    Ok(())
}
