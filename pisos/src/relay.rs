//! The result relay: an identity map from the fetched record sequence onto
//! the output channel.

use async_trait::async_trait;

use pisos_core::{ListingRecord, PisosError, RunReport, SearchSpec};

/// Output publication seam.
///
/// The persistence/publication mechanism belongs to the host; the pipeline
/// only pushes records through this trait, one at a time and in fetch order.
#[async_trait]
pub trait OutputSink: Send {
    /// Publish one record verbatim.
    ///
    /// # Errors
    /// A failing sink aborts the run; the relay does not skip records.
    async fn publish(&mut self, record: &ListingRecord) -> Result<(), PisosError>;
}

/// In-memory sink for tests and examples.
#[derive(Debug, Default)]
pub struct MemorySink {
    /// Records published so far, in publication order.
    pub records: Vec<ListingRecord>,
}

impl MemorySink {
    /// An empty sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl OutputSink for MemorySink {
    async fn publish(&mut self, record: &ListingRecord) -> Result<(), PisosError> {
        self.records.push(record.clone());
        Ok(())
    }
}

/// Newline-delimited JSON sink over any writer.
#[derive(Debug)]
pub struct JsonLinesSink<W> {
    writer: W,
}

impl<W: std::io::Write + Send> JsonLinesSink<W> {
    /// Wrap a writer.
    pub const fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Unwrap the writer, e.g. to inspect what was written.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

#[async_trait]
impl<W: std::io::Write + Send> OutputSink for JsonLinesSink<W> {
    async fn publish(&mut self, record: &ListingRecord) -> Result<(), PisosError> {
        serde_json::to_writer(&mut self.writer, record)
            .map_err(|e| PisosError::Data(format!("publish failed: {e}")))?;
        self.writer
            .write_all(b"\n")
            .map_err(|e| PisosError::Data(format!("publish failed: {e}")))?;
        Ok(())
    }
}

/// Republish every fetched record, unchanged and in order.
///
/// An empty sequence publishes nothing and emits exactly one warning; the run
/// still completes successfully with an empty report.
pub(crate) async fn relay(
    spec: &SearchSpec,
    records: Vec<ListingRecord>,
    sink: &mut dyn OutputSink,
) -> Result<RunReport, PisosError> {
    if records.is_empty() {
        tracing::warn!(city = %spec.city, for_rent = spec.for_rent, "no listings found for search");
    } else {
        for record in &records {
            sink.publish(record).await?;
        }
        tracing::info!(count = records.len(), "listings relayed");
    }
    Ok(RunReport {
        spec: spec.clone(),
        records,
    })
}
