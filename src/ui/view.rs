//! 处理器使用的视图能力

use crate::recommendations::Recommendation;
use crate::ui::notifier::Notification;

/// 处理器可以修改的全部屏幕内容
///
/// 实现自行管理内部可变性，处理器只持有 `Arc<dyn View>`。
pub trait View: Send + Sync {
    /// 显示或隐藏加载指示器
    fn set_loading(&self, visible: bool);

    /// 按级别样式显示状态消息
    fn show_status(&self, notification: &Notification);

    fn hide_status(&self);

    /// 移除已渲染的推荐卡片
    fn clear_results(&self);

    /// 每个条目渲染一张卡片，`items` 为空时渲染占位提示
    fn render_results(&self, items: &[Recommendation]);

    /// 提交成功后清空表单输入
    fn reset_form(&self, form_id: &str);
}
