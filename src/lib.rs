//! # Loja 面板
//!
//! 商店管理面板的控制器：
//! - 通用表单提交：字段以 JSON 提交，响应显示为通知
//! - 推荐查询，结果渲染为产品卡片
//! - 通过 [`ui::View`] 显示的定时通知和加载指示器
//! - 用于开发和测试的内存模拟商店 API

pub mod backend;
pub mod config;
pub mod core;
pub mod forms;
pub mod infrastructure;
pub mod recommendations;
pub mod ui;

pub use crate::config::ClientConfig;
pub use crate::core::error::{ClientError, Result};
pub use crate::ui::{Controller, Event, Outcome, View};
