//! Group reader
//!
//! 绑定 broker 地址、topic 和 consumer group 的读取器。offset
//! 提交和 group rebalance 完全交给客户端库，读取端一次只取一条。

use rdkafka::consumer::{CommitMode, Consumer, StreamConsumer};
use rdkafka::error::{KafkaError, RDKafkaErrorCode};
use tracing::info;

use crate::error::Result;
use crate::kafka::{ConsumerConfig, build_stream_consumer, wait_for_assignment};
use crate::message::ReceivedRecord;

/// 绑定 consumer group 的 Kafka 读取器
pub struct GroupReader {
    consumer: StreamConsumer,
    topic: String,
}

impl GroupReader {
    /// 打开读取器并订阅 topic
    pub fn open(config: &dyn ConsumerConfig) -> Result<Self> {
        let consumer = build_stream_consumer(config)?;
        let topic = config.topic().to_string();
        consumer.subscribe(&[topic.as_str()])?;

        info!(topic = %topic, "Group reader subscribed");

        Ok(Self { consumer, topic })
    }

    /// 阻塞读取下一条消息
    ///
    /// 没有超时：要么返回一条消息，要么返回客户端错误。
    /// 错误原因可通过 `SmokeError::read_stop_cause` 分类。
    pub async fn read(&self) -> Result<ReceivedRecord> {
        let msg = self.consumer.recv().await?;
        Ok(ReceivedRecord::from_borrowed(&msg))
    }

    /// 等待 group rebalance 完成、获得 partition assignment
    pub async fn wait_for_assignment(&self, max_wait_seconds: u64) -> Result<()> {
        wait_for_assignment(&self.consumer, &self.topic, max_wait_seconds).await
    }

    /// 关闭读取器
    ///
    /// 同步提交一次消费状态，避免干净重启后重复投递；尚未存储
    /// 任何 offset 时提交返回 `NoOffset`，视为成功。`close` 消费
    /// `self`，同一个读取器不可能被关闭两次。
    pub fn close(self) -> Result<()> {
        match self.consumer.commit_consumer_state(CommitMode::Sync) {
            Ok(()) => {}
            Err(KafkaError::ConsumerCommit(RDKafkaErrorCode::NoOffset)) => {}
            Err(err) => return Err(err.into()),
        }
        info!(topic = %self.topic, "Group reader closed");
        Ok(())
    }
}
