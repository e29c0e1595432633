use parking_lot::Mutex;

use super::{descriptor::AuditDescriptorBuilder, event::MutationEvent};
use crate::{
    auth::{ActingContext, TokenClaimsDecoder},
    models::AuditRecord,
};

#[derive(Debug, thiserror::Error)]
pub enum AuditError {
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Audit sink error: {0}")]
    Sink(String),
}

/// Destination for finished audit records.
pub trait AuditRecordSink: Send + Sync {
    fn record(&self, record: AuditRecord) -> Result<(), AuditError>;
}

impl<T: AuditRecordSink + ?Sized> AuditRecordSink for &T {
    fn record(&self, record: AuditRecord) -> Result<(), AuditError> {
        (**self).record(record)
    }
}

/// Sink that keeps records in memory, in arrival order.
#[derive(Debug, Default)]
pub struct InMemoryAuditSink {
    records: Mutex<Vec<AuditRecord>>,
}

impl InMemoryAuditSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> Vec<AuditRecord> {
        self.records.lock().clone()
    }
}

impl AuditRecordSink for InMemoryAuditSink {
    fn record(&self, record: AuditRecord) -> Result<(), AuditError> {
        self.records.lock().push(record);
        Ok(())
    }
}

/// Turns identity mutations into audit records and publishes them.
pub struct UserEventAuditor<D, S> {
    descriptors: AuditDescriptorBuilder<D>,
    sink: S,
}

impl<D: TokenClaimsDecoder, S: AuditRecordSink> UserEventAuditor<D, S> {
    pub fn new(decoder: D, sink: S) -> Self {
        Self {
            descriptors: AuditDescriptorBuilder::new(decoder),
            sink,
        }
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Build the audit record for `event` as performed by `acting`.
    pub fn audit_record(
        &self,
        event: &MutationEvent,
        acting: &ActingContext,
    ) -> Result<AuditRecord, AuditError> {
        let details = self.descriptors.build_details(event, acting);
        Ok(AuditRecord {
            subject_id: event.user_id().to_string(),
            event_kind: event.kind(),
            origin: acting.origin_tag(),
            data: serde_json::to_string(&details)?,
            zone_id: event.zone_id().to_string(),
        })
    }

    /// Build the audit record for `event` and hand it to the sink.
    pub fn publish(&self, event: &MutationEvent, acting: &ActingContext) -> Result<(), AuditError> {
        let record = self.audit_record(event, acting)?;
        tracing::debug!(
            subject_id = %record.subject_id,
            event_kind = %record.event_kind,
            zone_id = %record.zone_id,
            "Publishing user audit record"
        );
        self.sink.record(record).inspect_err(|e| {
            tracing::error!(
                error = %e,
                subject_id = %event.user_id(),
                event_kind = %event.kind(),
                "Failed to record user audit event"
            );
        })
    }
}
