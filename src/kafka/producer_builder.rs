//! Kafka 生产者构建器

use rdkafka::config::ClientConfig;
use rdkafka::producer::FutureProducer;
use tracing::info;

use crate::error::Result;
use crate::kafka::producer_config::ProducerConfig;

/// 构建 Kafka 生产者
///
/// # 参数
/// * `config` - 实现了 `ProducerConfig` trait 的配置对象
///
/// # 返回
/// * `Result<FutureProducer>` - 构建好的生产者
pub fn build_future_producer(config: &dyn ProducerConfig) -> Result<FutureProducer> {
    let producer: FutureProducer = ClientConfig::new()
        .set("bootstrap.servers", config.bootstrap_servers())
        .set("message.timeout.ms", config.message_timeout_ms().to_string())
        .set("linger.ms", config.linger_ms().to_string())
        .set("batch.size", config.batch_size().to_string())
        .set("acks", config.acks())
        .set("security.protocol", "plaintext")
        .create()?;

    info!(
        bootstrap = %config.bootstrap_servers(),
        topic = %config.topic(),
        timeout_ms = config.message_timeout_ms(),
        "Kafka producer created successfully"
    );

    Ok(producer)
}
