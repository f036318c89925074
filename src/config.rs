//! 冒烟程序的编译期配置
//!
//! 两个程序都不读配置文件、不解析命令行参数，所有参数都是
//! 编译期常量。

use crate::kafka::{ConsumerConfig, ProducerConfig};
use crate::message::Record;

/// Broker 地址（明文 TCP，无认证）
pub const BROKER_ADDR: &str = "localhost:9093";

/// 目标 topic
pub const TOPIC: &str = "test";

/// Consumer group ID
pub const GROUP_ID: &str = "consumer-group-id";

/// 最小 fetch 字节数（10KB）
pub const FETCH_MIN_BYTES: usize = 10_000;

/// 最大 fetch 字节数（10MB）
pub const FETCH_MAX_BYTES: usize = 10_000_000;

/// 生产者要写入的固定批次：三条 key/value 消息
pub fn demo_batch() -> Vec<Record> {
    vec![
        Record::new("Key-A", "Hello World!"),
        Record::new("Key-B", "One!"),
        Record::new("Key-C", "Two!"),
    ]
}

/// 生产者程序的编译期配置
pub struct SmokeProducerConfig;

impl ProducerConfig for SmokeProducerConfig {
    fn bootstrap_servers(&self) -> &str {
        BROKER_ADDR
    }

    fn topic(&self) -> &str {
        TOPIC
    }
}

/// 消费者程序的编译期配置
pub struct SmokeConsumerConfig;

impl ConsumerConfig for SmokeConsumerConfig {
    fn bootstrap_servers(&self) -> &str {
        BROKER_ADDR
    }

    fn group_id(&self) -> &str {
        GROUP_ID
    }

    fn topic(&self) -> &str {
        TOPIC
    }

    fn fetch_min_bytes(&self) -> usize {
        FETCH_MIN_BYTES
    }

    fn fetch_message_max_bytes(&self) -> usize {
        FETCH_MAX_BYTES
    }
}
