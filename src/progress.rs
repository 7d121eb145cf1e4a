/// Observer for the progress of a clustering run.
///
/// The driver reports two counters: the number of objects classified so far
/// and the number of clusters committed so far. Both are emitted after each
/// top-level object decision. Implement this trait to feed a progress bar or
/// a log; clustering behaves identically with or without an observer.
pub trait ClusterProgress {
    /// Called after an object (or, on the small-dataset fast path, the whole
    /// dataset) has been classified. `total` is the number of data points.
    fn objects_processed(&mut self, processed: usize, total: usize);

    /// Called whenever the number of committed clusters may have changed.
    fn clusters_found(&mut self, n_clusters: usize);
}

/// Sink used when the caller did not supply an observer.
pub(crate) struct NoProgress;

impl ClusterProgress for NoProgress {
    fn objects_processed(&mut self, _processed: usize, _total: usize) {}

    fn clusters_found(&mut self, _n_clusters: usize) {}
}
