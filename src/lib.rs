//! Kafka Smoke Library
//!
//! Minimal produce/consume smoke pair against an Apache Kafka broker:
//! a topic-bound writer with least-bytes partition balancing, and a
//! consumer-group reader that takes one message at a time. All broker
//! protocol concerns (batching, offset management, rebalancing) are
//! delegated to the rdkafka client.

pub mod balancer;
pub mod config;
pub mod error;
pub mod message;
pub mod reader;
pub mod writer;

// Kafka 工具模块
pub mod kafka;

// Re-exports
pub use balancer::LeastBytes;
pub use config::{SmokeConsumerConfig, SmokeProducerConfig};
pub use error::{Result, SmokeError, StopCause};
pub use message::{ReceivedRecord, Record};
pub use reader::GroupReader;
pub use writer::TopicWriter;

// Kafka 工具 re-exports
pub use kafka::{ConsumerConfig, ProducerConfig, build_future_producer, build_stream_consumer};
