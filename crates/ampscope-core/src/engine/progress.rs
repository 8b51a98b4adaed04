/// Events emitted while a batch of candidates is being screened.
#[derive(Debug, Clone, PartialEq)]
pub enum Progress {
    PhaseStart { name: &'static str },
    PhaseFinish,

    BatchStart { total: u64 },
    CandidateDone,
    BatchFinish,

    /// A one-off note about the batch, such as how many candidates lacked scores.
    Message(String),
}

pub type ProgressCallback<'a> = Box<dyn Fn(Progress) + Send + Sync + 'a>;

/// Forwards [`Progress`] events to an optional callback.
///
/// The callback is shared by every worker thread during a parallel batch, hence the
/// `Send + Sync` bound.
#[derive(Default)]
pub struct ProgressReporter<'a> {
    callback: Option<ProgressCallback<'a>>,
}

impl<'a> ProgressReporter<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_callback(callback: ProgressCallback<'a>) -> Self {
        Self {
            callback: Some(callback),
        }
    }

    #[inline]
    pub fn report(&self, event: Progress) {
        if let Some(cb) = &self.callback {
            cb(event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[test]
    fn silent_reporter_accepts_events() {
        let reporter = ProgressReporter::new();
        reporter.report(Progress::BatchStart { total: 3 });
        reporter.report(Progress::BatchFinish);
    }

    #[test]
    fn callback_receives_events_in_order() {
        let seen = Mutex::new(Vec::new());
        let reporter = ProgressReporter::with_callback(Box::new(|event: Progress| {
            seen.lock().unwrap().push(event);
        }));

        reporter.report(Progress::PhaseStart { name: "Screening" });
        reporter.report(Progress::CandidateDone);
        reporter.report(Progress::PhaseFinish);
        drop(reporter);

        assert_eq!(
            seen.into_inner().unwrap(),
            vec![
                Progress::PhaseStart { name: "Screening" },
                Progress::CandidateDone,
                Progress::PhaseFinish,
            ]
        );
    }
}
