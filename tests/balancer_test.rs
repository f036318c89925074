//! Least-bytes 均衡器的纯逻辑测试

use kafka_smoke::LeastBytes;

#[test]
fn pick_prefers_least_loaded_partition() {
    let balancer = LeastBytes::new(3);

    // 第一条落在 0 号分区并计费 100 字节
    assert_eq!(balancer.pick(100), 0);
    // 之后持续选择在途字节最少的分区
    assert_eq!(balancer.pick(10), 1);
    assert_eq!(balancer.pick(10), 2);
    assert_eq!(balancer.pick(10), 1);
    assert_eq!(balancer.pick(10), 2);

    assert_eq!(balancer.outstanding(0), 100);
    assert_eq!(balancer.outstanding(1), 20);
    assert_eq!(balancer.outstanding(2), 20);
}

#[test]
fn tie_goes_to_lowest_index() {
    let balancer = LeastBytes::new(4);
    assert_eq!(balancer.pick(5), 0);
    // 1/2/3 号分区都是 0 字节，取下标最小的
    assert_eq!(balancer.pick(5), 1);
}

#[test]
fn settle_releases_charge() {
    let balancer = LeastBytes::new(2);
    assert_eq!(balancer.pick(50), 0);
    assert_eq!(balancer.pick(10), 1);

    balancer.settle(0, 50);
    assert_eq!(balancer.outstanding(0), 0);

    // 释放后 0 号分区重新成为最空闲分区
    assert_eq!(balancer.pick(1), 0);
}

#[test]
fn settle_saturates_at_zero() {
    let balancer = LeastBytes::new(1);
    balancer.settle(0, 1000);
    assert_eq!(balancer.outstanding(0), 0);
}

#[test]
fn settle_ignores_unknown_partition() {
    let balancer = LeastBytes::new(1);
    balancer.settle(5, 10);
    balancer.settle(-1, 10);
    assert_eq!(balancer.outstanding(0), 0);
}

#[test]
fn partitions_reports_size() {
    assert_eq!(LeastBytes::new(7).partitions(), 7);
}
