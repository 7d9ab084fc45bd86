use anyhow::{Result, anyhow};
use std::sync::mpsc::Receiver;
use std::thread::{self, JoinHandle};

use crate::evaluation::SweepPoint;

/// Logs each sweep point as it arrives; yields the number of points seen.
pub fn spawn_progress_logger(rx: Receiver<SweepPoint>) -> JoinHandle<usize> {
    thread::spawn(move || {
        let mut seen = 0;
        for point in rx {
            tracing::info!(
                n = point.sample_size,
                score_var = point.score.variance,
                reparam_var = point.reparameterized.variance,
                "measured"
            );
            seen += 1;
        }
        seen
    })
}

/// Waits for a reporter thread, turning a panic into an error.
pub fn join_reporter<T>(handle: JoinHandle<T>) -> Result<T> {
    handle
        .join()
        .map_err(|_| anyhow!("progress reporter panicked"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluation::SummaryStatistic;
    use std::sync::mpsc;

    fn point(n: usize) -> SweepPoint {
        let s = SummaryStatistic {
            mean: 4.0,
            variance: 1.0,
        };
        SweepPoint {
            sample_size: n,
            score: s,
            reparameterized: s,
        }
    }

    #[test]
    fn logger_counts_points_until_sender_drops() {
        let (tx, rx) = mpsc::channel();
        let handle = spawn_progress_logger(rx);
        tx.send(point(10)).unwrap();
        tx.send(point(100)).unwrap();
        drop(tx);
        assert_eq!(join_reporter(handle).unwrap(), 2);
    }

    #[test]
    fn panicking_reporter_is_an_error() {
        let handle = thread::spawn(|| -> usize { panic!("reporter failed") });
        let err = join_reporter(handle).unwrap_err();
        assert!(err.to_string().contains("panicked"));
    }
}
