//! 编译期配置与 trait 默认值测试

use kafka_smoke::config::{self, SmokeConsumerConfig, SmokeProducerConfig};
use kafka_smoke::{ConsumerConfig, ProducerConfig};

#[test]
fn producer_config_targets_fixed_broker_and_topic() {
    let cfg = SmokeProducerConfig;
    assert_eq!(cfg.bootstrap_servers(), "localhost:9093");
    assert_eq!(cfg.topic(), "test");
}

#[test]
fn consumer_config_matches_fixed_constants() {
    let cfg = SmokeConsumerConfig;
    assert_eq!(cfg.bootstrap_servers(), "localhost:9093");
    assert_eq!(cfg.group_id(), "consumer-group-id");
    assert_eq!(cfg.topic(), "test");
    assert_eq!(cfg.fetch_min_bytes(), 10_000);
    assert_eq!(cfg.fetch_message_max_bytes(), 10_000_000);
    // 分区级上限默认跟随单条消息上限
    assert_eq!(cfg.max_partition_fetch_bytes(), 10_000_000);
}

#[test]
fn consumer_defaults_rely_on_library_offset_management() {
    let cfg = SmokeConsumerConfig;
    assert!(cfg.enable_auto_commit());
    assert_eq!(cfg.auto_offset_reset(), "earliest");
    assert_eq!(cfg.session_timeout_ms(), 30_000);
}

#[test]
fn constants_are_exposed() {
    assert_eq!(config::BROKER_ADDR, "localhost:9093");
    assert_eq!(config::TOPIC, "test");
    assert_eq!(config::GROUP_ID, "consumer-group-id");
    assert_eq!(config::FETCH_MIN_BYTES, 10_000);
    assert_eq!(config::FETCH_MAX_BYTES, 10_000_000);
}
