//! Topic writer
//!
//! 绑定单个 broker 地址和单个 topic 的写入器，按 least-bytes
//! 策略把每条消息固定到一个分区。写入失败不重试，由调用方
//! 决定如何终止。

use std::time::Duration;

use futures::future::join_all;
use rdkafka::producer::{FutureProducer, FutureRecord, Producer};
use tracing::{info, warn};

use crate::balancer::LeastBytes;
use crate::error::{Result, SmokeError};
use crate::kafka::{ProducerConfig, build_future_producer};
use crate::message::Record;

/// 绑定 topic 的 Kafka 写入器
pub struct TopicWriter {
    producer: FutureProducer,
    topic: String,
    balancer: LeastBytes,
    message_timeout: Duration,
}

impl TopicWriter {
    /// 打开写入器
    ///
    /// 构建生产者并获取主题元数据以确定分区数量。broker 不可达
    /// 或主题没有可用分区时返回错误，不会发送任何消息。
    pub fn open(config: &dyn ProducerConfig) -> Result<Self> {
        let producer = build_future_producer(config)?;
        let topic = config.topic().to_string();

        let metadata = producer.client().fetch_metadata(
            Some(&topic),
            Duration::from_millis(config.metadata_timeout_ms()),
        )?;
        let partitions = metadata
            .topics()
            .iter()
            .find(|t| t.name() == topic)
            .map_or(0, |t| t.partitions().len());
        if partitions == 0 {
            return Err(SmokeError::topic_metadata(&topic, "no partitions available"));
        }

        info!(
            topic = %topic,
            partitions = partitions,
            "Topic writer opened"
        );

        Ok(Self {
            producer,
            topic,
            balancer: LeastBytes::new(partitions),
            message_timeout: Duration::from_millis(config.message_timeout_ms()),
        })
    }

    /// 写入一批消息
    ///
    /// 每条消息在入队时向均衡器申请在途字节最少的分区，所有投递
    /// 一起等待，任何一条失败即返回第一个错误。没有重试，也没有
    /// 部分成功上报。
    pub async fn write_batch(&self, records: &[Record]) -> Result<()> {
        let sends = records.iter().map(|record| {
            let bytes = record.byte_len();
            let partition = self.balancer.pick(bytes);
            async move {
                let outcome = self
                    .producer
                    .send(
                        FutureRecord::to(&self.topic)
                            .partition(partition)
                            .key(&record.key)
                            .payload(&record.value),
                        self.message_timeout,
                    )
                    .await;
                self.balancer.settle(partition, bytes);
                outcome
            }
        });

        let mut first_err = None;
        let mut delivered = 0usize;
        for outcome in join_all(sends).await {
            match outcome {
                Ok(_) => delivered += 1,
                Err((err, _msg)) => {
                    warn!(error = %err, topic = %self.topic, "Message delivery failed");
                    first_err.get_or_insert(err);
                }
            }
        }

        match first_err {
            Some(err) => Err(err.into()),
            None => {
                info!(
                    topic = %self.topic,
                    delivered = delivered,
                    "Batch delivered"
                );
                Ok(())
            }
        }
    }

    /// 关闭写入器，刷出所有缓冲消息；刷出超时视为错误
    pub fn close(self) -> Result<()> {
        self.producer.flush(self.message_timeout)?;
        info!(topic = %self.topic, "Topic writer closed");
        Ok(())
    }

    /// 写入器绑定主题的分区数量
    pub fn partitions(&self) -> usize {
        self.balancer.partitions()
    }
}
