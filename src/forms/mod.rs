//! 通用表单提交

pub mod catalog;
pub mod field;
pub mod submitter;

pub use field::{FieldKind, FieldSpec, FormSpec};
pub use submitter::FormSubmitter;
