//! 界面层：视图能力、通知、加载指示器和事件控制器

pub mod command;
pub mod console_view;
pub mod controller;
pub mod html_view;
pub mod loader;
pub mod notifier;
pub mod render;
pub mod view;

pub use controller::{Controller, Event};
pub use notifier::{Notification, Notifier, Severity};
pub use view::View;

/// 处理一个界面事件的结果
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// 显示了状态消息
    Notified(Notification),
    /// 结果区域重绘为这么多张卡片
    Rendered { items: usize },
    /// 事件的目标不在控制器中
    Ignored,
}

impl Outcome {
    pub fn notification(&self) -> Option<&Notification> {
        match self {
            Outcome::Notified(notification) => Some(notification),
            _ => None,
        }
    }
}
