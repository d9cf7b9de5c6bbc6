use std::sync::Arc;

use memvitals::core::health::{
    ComponentIdentity, Direction, HealthCheck, HealthRegistry, MemoryHealthCheck, MetricSource,
    Quantity, RawMeasurement, Snapshot, Status, Tolerance, Unit, UnitRequest, UnitTolerance,
};
use memvitals::platform::SystemMemorySource;
use parking_lot::Mutex;

/// Source whose next snapshot can be swapped between evaluations
struct ScriptedSource {
    next: Mutex<Snapshot>,
}

impl ScriptedSource {
    fn new(snapshot: Snapshot) -> Self {
        Self {
            next: Mutex::new(snapshot),
        }
    }

    fn set(&self, snapshot: Snapshot) {
        *self.next.lock() = snapshot;
    }
}

impl MetricSource for ScriptedSource {
    fn snapshot(&self) -> Snapshot {
        self.next.lock().clone()
    }
}

fn identity(name: &str) -> ComponentIdentity {
    ComponentIdentity::new("6fd416e0-8920-410f-9c7b-c479000f7227", name, "system").unwrap()
}

#[test]
fn test_utilized_bytes_greater_than_fails() {
    let tolerance = Tolerance::new(1000.0, 500.0, 0.0, Direction::GreaterThan).unwrap();
    let check = MemoryHealthCheck::new(
        identity("svc"),
        vec![Quantity::Utilized],
        vec![UnitTolerance::new(Unit::Bytes, tolerance).unwrap()],
        ScriptedSource::new(Snapshot::ok(RawMeasurement::new(1000, 800))),
    )
    .unwrap();

    let report = check.evaluate();
    assert_eq!(report.component_value.len(), 1);
    assert_eq!(report.component_value[0].metric_value, Some(200.0));
    assert_eq!(report.component_value[0].status, Status::Fail);
    assert_eq!(report.status, Status::Fail);
    assert!(!report.healthy());
}

#[test]
fn test_reports_are_fresh_per_evaluation() {
    let source = Arc::new(ScriptedSource::new(Snapshot::ok(RawMeasurement::new(1000, 900))));
    let tolerance = Tolerance::new(50.0, 80.0, 100.0, Direction::LessThan).unwrap();
    let check = MemoryHealthCheck::new(
        identity("svc"),
        vec![Quantity::Utilized],
        UnitTolerance::expand(UnitRequest::Percentage, tolerance).unwrap(),
        source.clone(),
    )
    .unwrap();

    let first = check.evaluate();
    assert_eq!(first.status, Status::Pass);

    source.set(Snapshot::unavailable("sampling failed"));
    let second = check.evaluate();
    assert_eq!(second.status, Status::Fail);
    assert_eq!(
        second.component_value[0].output.as_deref(),
        Some("sampling failed")
    );

    source.set(Snapshot::ok(RawMeasurement::new(1000, 150)));
    let third = check.evaluate();
    assert_eq!(third.status, Status::Fail);
    // a recovered source carries no stale error
    assert_eq!(third.component_value[0].output, None);
    // the earlier report is untouched
    assert_eq!(first.status, Status::Pass);
}

#[test]
fn test_failed_read_is_unhealthy_even_for_raw_bytes() {
    let tolerance = Tolerance::new(8e9, 16e9, 32e9, Direction::LessThan).unwrap();
    let check = MemoryHealthCheck::new(
        identity("host"),
        vec![Quantity::Total],
        vec![UnitTolerance::new(Unit::Bytes, tolerance).unwrap()],
        ScriptedSource::new(Snapshot::unavailable("os read failed")),
    )
    .unwrap();

    let result = check.check().unwrap();
    assert!(!result.healthy);
    assert_eq!(result.details["status"], "fail");

    let reading = &result.details["componentValue"][0];
    assert_eq!(reading["metricValue"], -1.0);
    assert_eq!(reading["status"], "fail");
    assert_eq!(reading["output"], "os read failed");
}

#[test]
fn test_multiple_quantities_have_no_metric_name() {
    let tolerance = Tolerance::new(90.0, 95.0, 100.0, Direction::LessThan).unwrap();
    let check = MemoryHealthCheck::new(
        identity("memory"),
        vec![Quantity::Free, Quantity::Utilized, Quantity::Total],
        UnitTolerance::expand(UnitRequest::PercentageAndBytes, tolerance).unwrap(),
        ScriptedSource::new(Snapshot::ok(RawMeasurement::new(2000, 1000))),
    )
    .unwrap();

    assert_eq!(check.title(), "memory");
    let result = check.check().unwrap();
    assert_eq!(result.details["metricName"], "");
    assert_eq!(result.details["componentValue"].as_array().unwrap().len(), 6);
    assert_eq!(
        result.details["componentValue"][4]["metricValue"],
        100.0,
        "total percentage is 100 by definition"
    );
}

#[test]
fn test_registry_with_shared_system_source() {
    let source = Arc::new(SystemMemorySource::new());
    let tolerance = Tolerance::new(100.0, 100.0, 100.0, Direction::LessThan).unwrap();

    let mut registry = HealthRegistry::new();
    for quantity in [Quantity::Free, Quantity::Utilized] {
        let check = MemoryHealthCheck::new(
            identity("host"),
            vec![quantity],
            vec![UnitTolerance::new(Unit::Percentage, tolerance).unwrap()],
            source.clone(),
        )
        .unwrap();
        registry.register(Box::new(check)).unwrap();
    }

    let results = registry.run_all().unwrap();
    assert_eq!(results.len(), 2);
    for result in results.values() {
        let value = &result.details["componentValue"][0];
        assert_eq!(value["metricUnit"], "percentage");
        assert!(value["status"].is_string());
    }
}

#[test]
fn test_concurrent_evaluations_share_a_check() {
    let check = Arc::new(
        MemoryHealthCheck::new(
            identity("svc"),
            vec![Quantity::Utilized],
            vec![UnitTolerance::new(
                Unit::Percentage,
                Tolerance::new(50.0, 75.0, 100.0, Direction::LessThan).unwrap(),
            )
            .unwrap()],
            ScriptedSource::new(Snapshot::ok(RawMeasurement::new(100, 40))),
        )
        .unwrap(),
    );

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let check = Arc::clone(&check);
            std::thread::spawn(move || check.evaluate())
        })
        .collect();

    for handle in handles {
        let report = handle.join().unwrap();
        assert_eq!(report.status, Status::Warn);
        assert_eq!(report.component_value[0].metric_value, Some(60.0));
    }
}
