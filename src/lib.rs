//! Workspace-level golden tests for strassen-rs.
