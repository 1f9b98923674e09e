// src/audit/mod.rs
// =============================================================================
// This module ties the pipeline together: extract -> analyze -> aggregate.
//
// Submodules:
// - aggregate: the Auditor that fans out to the analyzers and merges results
// - result: AuditResult and Stats
// =============================================================================

mod aggregate;
mod result;

pub use aggregate::Auditor;
pub use result::{AuditResult, Stats};
