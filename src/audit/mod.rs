//! Audit details for identity-mutation events.

mod auditor;
mod descriptor;
mod event;

pub use auditor::{AuditError, AuditRecordSink, InMemoryAuditSink, UserEventAuditor};
pub use descriptor::AuditDescriptorBuilder;
pub use event::{MutatedUser, MutationEvent};
