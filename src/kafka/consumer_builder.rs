//! Kafka 消费者构建器
//!
//! 提供统一的消费者构建和 partition assignment 等待逻辑

use rdkafka::config::ClientConfig;
use rdkafka::consumer::{Consumer, StreamConsumer};
use tracing::{debug, info};

use crate::error::{Result, SmokeError};
use crate::kafka::consumer_config::ConsumerConfig;

/// 构建 Kafka 消费者
///
/// # 参数
/// * `config` - 实现了 `ConsumerConfig` trait 的配置对象
///
/// # 返回
/// * `Result<StreamConsumer>` - 构建好的消费者
pub fn build_stream_consumer(config: &dyn ConsumerConfig) -> Result<StreamConsumer> {
    let consumer: StreamConsumer = ClientConfig::new()
        .set("bootstrap.servers", config.bootstrap_servers())
        .set("group.id", config.group_id())
        .set("enable.partition.eof", "false")
        .set("session.timeout.ms", config.session_timeout_ms().to_string())
        .set("enable.auto.commit", config.enable_auto_commit().to_string())
        .set("auto.offset.reset", config.auto_offset_reset())
        .set("security.protocol", "plaintext")
        .set(
            "fetch.message.max.bytes",
            config.fetch_message_max_bytes().to_string(),
        )
        .set(
            "max.partition.fetch.bytes",
            config.max_partition_fetch_bytes().to_string(),
        )
        .set("fetch.min.bytes", config.fetch_min_bytes().to_string())
        .create()?;

    info!(
        bootstrap = %config.bootstrap_servers(),
        group = %config.group_id(),
        topic = %config.topic(),
        "Kafka consumer created successfully"
    );

    Ok(consumer)
}

/// 等待消费者获得 partition assignment
///
/// group rebalance 完成前读取不到任何消息，测试场景下先等待
/// assignment 可以避免在 rebalance 期间误判"没有消息"
///
/// # 参数
/// * `consumer` - Kafka 消费者（已订阅 topic）
/// * `topic` - Topic 名称（仅用于错误信息）
/// * `max_wait_seconds` - 最大等待时间（秒）
pub async fn wait_for_assignment(
    consumer: &StreamConsumer,
    topic: &str,
    max_wait_seconds: u64,
) -> Result<()> {
    let mut waited = 0u64;

    loop {
        let assignment = consumer.assignment()?;
        if assignment.count() > 0 {
            info!(
                partition_count = assignment.count(),
                waited_seconds = waited,
                "Consumer assigned to {} partitions",
                assignment.count()
            );
            return Ok(());
        }

        if waited >= max_wait_seconds {
            return Err(SmokeError::topic_metadata(
                topic,
                format!("no partition assignment after {waited} seconds"),
            ));
        }

        debug!(
            waited_seconds = waited,
            "Waiting for partition assignment ({}/{})", waited, max_wait_seconds
        );
        tokio::time::sleep(tokio::time::Duration::from_secs(1)).await;
        waited += 1;
    }
}
