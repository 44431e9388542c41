pub mod catalog;
pub mod generator;
pub mod intake;
pub mod model;
pub mod random;
pub mod service;

pub use generator::generate_audit;
pub use intake::{AuditSubmission, parse_lines, validate};
pub use model::{AuditEnvelope, AuditReport, AuditRequest};
pub use random::{RandomSource, SequenceSource};
pub use service::{CreatedAudit, create_audit};
