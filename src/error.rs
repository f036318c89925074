//! 统一错误类型
//!
//! 封装 rdkafka 客户端错误，并为消费循环提供停止原因分类

use rdkafka::error::{KafkaError, RDKafkaErrorCode};
use thiserror::Error;

/// 本 crate 默认使用的结果类型
pub type Result<T> = std::result::Result<T, SmokeError>;

/// 统一错误类型
#[derive(Error, Debug)]
pub enum SmokeError {
    /// Kafka 客户端错误
    #[error("Kafka 客户端错误: {0}")]
    Kafka(#[from] KafkaError),

    /// 主题元数据异常（不存在、无分区等）
    #[error("主题 {topic} 元数据异常: {reason}")]
    TopicMetadata { topic: String, reason: String },

    /// 已取消（收到关闭信号）
    #[error("已取消: {0}")]
    Canceled(String),
}

/// 消费循环的停止原因
///
/// 原始实现把所有读取错误都当作同一种"停止"信号，
/// 这里把关闭信号、broker 不可达和其他客户端错误区分开
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopCause {
    /// 收到关闭信号（Ctrl-C），正常退出
    Shutdown,
    /// broker 连接断开或全部不可达
    BrokerUnavailable,
    /// 其他客户端错误
    Client,
}

impl SmokeError {
    /// 创建主题元数据错误
    pub fn topic_metadata(topic: impl Into<String>, reason: impl Into<String>) -> Self {
        SmokeError::TopicMetadata {
            topic: topic.into(),
            reason: reason.into(),
        }
    }

    /// 创建取消错误
    pub fn canceled(reason: impl Into<String>) -> Self {
        SmokeError::Canceled(reason.into())
    }

    /// 将读取错误归类为消费循环的停止原因
    pub fn read_stop_cause(&self) -> StopCause {
        match self {
            SmokeError::Canceled(_) => StopCause::Shutdown,
            SmokeError::Kafka(err) => match err.rdkafka_error_code() {
                Some(RDKafkaErrorCode::BrokerTransportFailure)
                | Some(RDKafkaErrorCode::AllBrokersDown) => StopCause::BrokerUnavailable,
                _ => StopCause::Client,
            },
            _ => StopCause::Client,
        }
    }
}
