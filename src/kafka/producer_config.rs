//! Kafka 生产者配置 Trait
//!
//! 定义通用的生产者配置接口，允许不同调用方提供自己的配置实现

/// Kafka 生产者配置 Trait
///
/// 任何需要构建 Kafka 生产者的调用方都应该实现此 trait
pub trait ProducerConfig: Send + Sync {
    /// Kafka Bootstrap Servers 地址
    fn bootstrap_servers(&self) -> &str;

    /// 写入目标 Topic（由 writer 配置固定，消息本身不携带 topic）
    fn topic(&self) -> &str;

    /// 消息投递超时（毫秒），默认 5000
    fn message_timeout_ms(&self) -> u64 {
        5000
    }

    /// 批量发送延迟（毫秒），默认 1ms
    fn linger_ms(&self) -> u64 {
        1
    }

    /// 批量发送大小（字节），默认 64KB
    fn batch_size(&self) -> usize {
        64 * 1024
    }

    /// ack 策略，默认 "all"
    fn acks(&self) -> &str {
        "all"
    }

    /// 打开 writer 时获取主题元数据的超时（毫秒），默认 5000
    fn metadata_timeout_ms(&self) -> u64 {
        5000
    }
}
