use parking_lot::Mutex;
use sysinfo::{MemoryRefreshKind, RefreshKind, System};

use crate::core::health::{MetricSource, RawMeasurement, Snapshot};

/// Operating system memory, read through `sysinfo`.
///
/// "Free" is the memory available for new allocations without swapping.
pub struct SystemMemorySource {
    system: Mutex<System>,
}

impl SystemMemorySource {
    pub fn new() -> Self {
        let refresh = RefreshKind::nothing().with_memory(MemoryRefreshKind::everything());
        Self {
            system: Mutex::new(System::new_with_specifics(refresh)),
        }
    }
}

impl Default for SystemMemorySource {
    fn default() -> Self {
        Self::new()
    }
}

impl MetricSource for SystemMemorySource {
    fn snapshot(&self) -> Snapshot {
        let (total, available) = {
            let mut system = self.system.lock();
            system.refresh_memory();
            (system.total_memory(), system.available_memory())
        };

        measurement_from_os(total, available)
    }
}

/// Convert unsigned OS figures, reporting anything unusable as unavailable
fn measurement_from_os(total: u64, available: u64) -> Snapshot {
    if total == 0 {
        return Snapshot::unavailable("operating system reported 0 bytes of total memory");
    }

    match (i64::try_from(total), i64::try_from(available)) {
        (Ok(total), Ok(free)) => Snapshot::ok(RawMeasurement::new(total, free)),
        _ => Snapshot::unavailable(format!(
            "memory figures out of range (total={}, available={})",
            total, available
        )),
    }
}
