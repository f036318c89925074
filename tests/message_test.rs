//! 消息值对象与控制台输出格式测试

use kafka_smoke::{ReceivedRecord, Record, config};

#[test]
fn display_matches_console_format() {
    let record = ReceivedRecord {
        topic: "test".to_string(),
        partition: 1,
        offset: 42,
        key: Some(b"Key-A".to_vec()),
        value: Some(b"Hello World!".to_vec()),
    };

    assert_eq!(
        record.to_string(),
        "message at topic/partition/offset test/1/42: Key-A = Hello World!"
    );
}

#[test]
fn display_renders_missing_key_and_value_as_empty_text() {
    let record = ReceivedRecord {
        topic: "test".to_string(),
        partition: 0,
        offset: 0,
        key: None,
        value: None,
    };

    assert_eq!(
        record.to_string(),
        "message at topic/partition/offset test/0/0:  = "
    );
}

#[test]
fn display_decodes_invalid_utf8_lossily() {
    let record = ReceivedRecord {
        topic: "t".to_string(),
        partition: 0,
        offset: 7,
        key: Some(vec![0xff]),
        value: Some(b"ok".to_vec()),
    };

    assert_eq!(
        record.to_string(),
        "message at topic/partition/offset t/0/7: \u{fffd} = ok"
    );
}

#[test]
fn record_byte_len_counts_key_and_value() {
    let record = Record::new("Key-A", "Hello World!");
    assert_eq!(record.byte_len(), 5 + 12);
}

#[test]
fn demo_batch_is_the_fixed_three_messages() {
    let batch = config::demo_batch();
    assert_eq!(
        batch,
        vec![
            Record::new("Key-A", "Hello World!"),
            Record::new("Key-B", "One!"),
            Record::new("Key-C", "Two!"),
        ]
    );
}
