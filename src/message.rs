//! 消息值对象
//!
//! `Record` 是写入侧的 key/value 字节对，`ReceivedRecord` 是读取侧
//! 携带 broker 元数据（topic/partition/offset）的消息。
//! 两者都是构造后不可变的值对象，没有生命周期管理。

use std::fmt;

use rdkafka::message::{BorrowedMessage, Message};

/// 写入侧消息：不透明的 key/value 字节对
///
/// key 只参与分区均衡的字节计费，不做哈希分区
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub key: Vec<u8>,
    pub value: Vec<u8>,
}

impl Record {
    pub fn new(key: impl Into<Vec<u8>>, value: impl Into<Vec<u8>>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    /// 消息占用的字节数（key + value），用于 least-bytes 计费
    pub fn byte_len(&self) -> usize {
        self.key.len() + self.value.len()
    }
}

/// 读取侧消息：broker 填充 topic/partition/offset 元数据
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReceivedRecord {
    pub topic: String,
    pub partition: i32,
    pub offset: i64,
    pub key: Option<Vec<u8>>,
    pub value: Option<Vec<u8>>,
}

impl ReceivedRecord {
    /// 从 rdkafka 的借用消息拷贝为自有消息
    pub fn from_borrowed(msg: &BorrowedMessage<'_>) -> Self {
        Self {
            topic: msg.topic().to_string(),
            partition: msg.partition(),
            offset: msg.offset(),
            key: msg.key().map(|k| k.to_vec()),
            value: msg.payload().map(|v| v.to_vec()),
        }
    }

    fn text(bytes: Option<&[u8]>) -> String {
        bytes.map_or_else(String::new, |b| String::from_utf8_lossy(b).into_owned())
    }
}

impl fmt::Display for ReceivedRecord {
    /// 控制台输出格式，key/value 按文本解码
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "message at topic/partition/offset {}/{}/{}: {} = {}",
            self.topic,
            self.partition,
            self.offset,
            Self::text(self.key.as_deref()),
            Self::text(self.value.as_deref()),
        )
    }
}
