//! 核心层：界面处理器共用的错误和传输类型

pub mod error;
pub mod response;
