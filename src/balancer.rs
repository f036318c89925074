//! Least-bytes 分区均衡器
//!
//! librdkafka 没有内置的 least-bytes 分区策略，这里自行维护
//! 每个分区的在途字节数，写入时选择在途字节最少的分区。

use std::sync::atomic::{AtomicU64, Ordering};

/// Least-bytes 分区均衡器
///
/// `pick` 选择在途字节最少的分区并计入本次消息的字节数，
/// 投递结果返回后通过 `settle` 释放。计数器为原子变量，
/// 选择过程是一次无锁扫描（单个写入方使用足够）。
pub struct LeastBytes {
    inflight: Vec<AtomicU64>,
}

impl LeastBytes {
    /// 创建均衡器，`partitions` 必须大于 0（由调用方在打开 writer 时保证）
    pub fn new(partitions: usize) -> Self {
        Self {
            inflight: (0..partitions).map(|_| AtomicU64::new(0)).collect(),
        }
    }

    /// 分区数量
    pub fn partitions(&self) -> usize {
        self.inflight.len()
    }

    /// 选择在途字节最少的分区并计费；字节数相同时取下标最小的分区
    pub fn pick(&self, bytes: usize) -> i32 {
        let mut chosen = 0usize;
        let mut least = u64::MAX;
        for (idx, counter) in self.inflight.iter().enumerate() {
            let outstanding = counter.load(Ordering::Acquire);
            if outstanding < least {
                least = outstanding;
                chosen = idx;
            }
        }
        self.inflight[chosen].fetch_add(bytes as u64, Ordering::AcqRel);
        chosen as i32
    }

    /// 投递完成（无论成败）后释放计费；越界分区忽略，减法在 0 处饱和
    pub fn settle(&self, partition: i32, bytes: usize) {
        let Some(counter) = usize::try_from(partition)
            .ok()
            .and_then(|idx| self.inflight.get(idx))
        else {
            return;
        };
        let _ = counter.fetch_update(Ordering::AcqRel, Ordering::Acquire, |current| {
            Some(current.saturating_sub(bytes as u64))
        });
    }

    /// 当前某分区的在途字节数
    pub fn outstanding(&self, partition: i32) -> u64 {
        usize::try_from(partition)
            .ok()
            .and_then(|idx| self.inflight.get(idx))
            .map_or(0, |counter| counter.load(Ordering::Acquire))
    }
}
