//! 面板动态元素的标记

use v_htmlescape::escape;

use crate::recommendations::Recommendation;
use crate::ui::notifier::Severity;

pub const EMPTY_RESULTS_MESSAGE: &str =
    "Nenhuma recomendação encontrada para os amigos deste cliente.";

/// 通知元素在该级别下的 CSS 类
pub fn notification_class(severity: Severity) -> String {
    let color = match severity {
        Severity::Success => "bg-green-500",
        Severity::Error => "bg-red-500",
    };
    format!("p-4 mb-6 rounded-lg text-white {}", color)
}

/// 加载指示器的 `display` 值
pub fn loader_display(visible: bool) -> &'static str {
    if visible {
        "flex"
    } else {
        "none"
    }
}

pub fn empty_results_html() -> String {
    format!(
        r#"<p class="text-gray-500 col-span-full text-center">{}</p>"#,
        EMPTY_RESULTS_MESSAGE
    )
}

pub fn card_html(item: &Recommendation) -> String {
    format!(
        concat!(
            r#"<div class="bg-gray-700 border border-gray-600 p-4 rounded-lg shadow-sm">"#,
            r#"<h4 class="font-bold text-lg text-white">{}</h4>"#,
            r#"<p class="text-gray-300">Preço: {}</p>"#,
            r#"<p class="text-gray-300">Em Estoque: {}</p>"#,
            "</div>"
        ),
        escape(&item.name),
        item.price_label(),
        item.stock_label()
    )
}

/// 结果容器的内容：空列表为占位提示，否则按顺序排列卡片
pub fn results_html(items: &[Recommendation]) -> String {
    if items.is_empty() {
        empty_results_html()
    } else {
        items.iter().map(card_html).collect()
    }
}
