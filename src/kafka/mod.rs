//! Kafka 工具模块
//!
//! 提供通用的 Kafka 生产者和消费者构建工具

pub mod consumer_builder;
pub mod consumer_config;
pub mod producer_builder;
pub mod producer_config;

pub use consumer_builder::{build_stream_consumer, wait_for_assignment};
pub use consumer_config::ConsumerConfig;
pub use producer_builder::build_future_producer;
pub use producer_config::ProducerConfig;
