//! Kafka 消费者配置 Trait
//!
//! 定义通用的消费者配置接口，允许不同调用方提供自己的配置实现

/// Kafka 消费者配置 Trait
///
/// 任何需要构建 Kafka 消费者的调用方都应该实现此 trait
pub trait ConsumerConfig: Send + Sync {
    /// Kafka Bootstrap Servers 地址
    fn bootstrap_servers(&self) -> &str;

    /// Consumer Group ID
    fn group_id(&self) -> &str;

    /// Kafka Topic 名称
    fn topic(&self) -> &str;

    /// 最小 fetch 字节数（提示值，不是硬限制），默认 10KB
    fn fetch_min_bytes(&self) -> usize {
        10_000
    }

    /// 单条消息最大字节数（提示值），默认 10MB
    fn fetch_message_max_bytes(&self) -> usize {
        10_000_000
    }

    /// 单分区最大 fetch 字节数，默认与 `fetch_message_max_bytes` 一致
    fn max_partition_fetch_bytes(&self) -> usize {
        self.fetch_message_max_bytes()
    }

    /// 会话超时（毫秒），默认 30000
    fn session_timeout_ms(&self) -> u64 {
        30_000
    }

    /// 是否自动提交 offset，默认 true（沿用客户端库的默认 offset 管理）
    fn enable_auto_commit(&self) -> bool {
        true
    }

    /// Offset 重置策略，默认 "earliest"
    fn auto_offset_reset(&self) -> &str {
        "earliest"
    }
}
