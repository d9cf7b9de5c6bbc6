use super::tolerance::Status;

/// Reduce reading statuses to one overall status.
///
/// `Fail` dominates `Warn`, which dominates `Pass`. No readings is `Pass`.
pub fn aggregate<I>(statuses: I) -> Status
where
    I: IntoIterator<Item = Status>,
{
    let mut overall = Status::Pass;
    for status in statuses {
        match status {
            Status::Fail => return Status::Fail,
            Status::Warn => overall = Status::Warn,
            Status::Pass => {}
        }
    }
    overall
}
