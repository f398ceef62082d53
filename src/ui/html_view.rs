//! 面板页面的内存模型

use std::sync::Mutex;

use crate::recommendations::Recommendation;
use crate::ui::controller::Event;
use crate::ui::notifier::Notification;
use crate::ui::render;
use crate::ui::view::View;

/// 面板页面的元素 id
pub mod ids {
    pub const LOADER: &str = "loader";
    pub const NOTIFICATION: &str = "notification";
    pub const BTN_GET_RECOMENDACOES: &str = "btn-get-recomendacoes";
    pub const CPF_RECOMENDACAO_INPUT: &str = "cpf-recomendacao-input";
    pub const RECOMENDACOES_RESULTS: &str = "recomendacoes-results";
    pub const FORM_CRIAR_CLIENTE: &str = "form-criar-cliente";
    pub const FORM_CRIAR_AMIZADE: &str = "form-criar-amizade";
    pub const FORM_CRIAR_PRODUTO: &str = "form-criar-produto";
    pub const FORM_REGISTAR_COMPRA: &str = "form-registar-compra";
}

/// 页面动态元素的状态
#[derive(Debug, Clone, PartialEq)]
pub struct PageSnapshot {
    /// [`ids::LOADER`] 的 `style.display`
    pub loader_display: &'static str,
    /// [`ids::NOTIFICATION`] 的 `textContent`
    pub notification_text: String,
    /// [`ids::NOTIFICATION`] 的 `className`，不含 `hidden`
    pub notification_class: String,
    pub notification_hidden: bool,
    /// [`ids::RECOMENDACOES_RESULTS`] 的 `innerHTML`
    pub results_html: String,
    /// [`ids::CPF_RECOMENDACAO_INPUT`] 的 `value`
    pub cpf_input: String,
    /// 已重置的表单，按顺序
    pub reset_forms: Vec<String>,
}

impl Default for PageSnapshot {
    fn default() -> Self {
        Self {
            loader_display: render::loader_display(false),
            notification_text: String::new(),
            notification_class: String::new(),
            notification_hidden: true,
            results_html: String::new(),
            cpf_input: String::new(),
            reset_forms: Vec::new(),
        }
    }
}

/// 在内存中保存页面状态的 [`View`]，渲染与浏览器页面相同的标记
#[derive(Debug, Default)]
pub struct HtmlView {
    page: Mutex<PageSnapshot>,
}

impl HtmlView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshot(&self) -> PageSnapshot {
        self.page.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    /// 按 id 读取元素的当前内容；隐藏的通知读作空
    pub fn element(&self, id: &str) -> Option<String> {
        let page = self.snapshot();
        match id {
            ids::LOADER => Some(page.loader_display.to_string()),
            ids::NOTIFICATION if page.notification_hidden => Some(String::new()),
            ids::NOTIFICATION => Some(page.notification_text),
            ids::RECOMENDACOES_RESULTS => Some(page.results_html),
            ids::CPF_RECOMENDACAO_INPUT => Some(page.cpf_input),
            _ => None,
        }
    }

    /// 在输入框中输入；只有 CPF 输入框，其它 id 返回 `false`
    pub fn type_into(&self, id: &str, value: &str) -> bool {
        if id != ids::CPF_RECOMENDACAO_INPUT {
            return false;
        }
        self.update(|page| page.cpf_input = value.to_string());
        true
    }

    /// 点击元素，返回产生的事件
    pub fn click(&self, id: &str) -> Option<Event> {
        if id != ids::BTN_GET_RECOMENDACOES {
            return None;
        }
        Some(Event::RequestRecommendations {
            cpf: self.snapshot().cpf_input,
        })
    }

    fn update(&self, f: impl FnOnce(&mut PageSnapshot)) {
        let mut page = self.page.lock().unwrap_or_else(|e| e.into_inner());
        f(&mut page);
    }
}

impl View for HtmlView {
    fn set_loading(&self, visible: bool) {
        self.update(|page| page.loader_display = render::loader_display(visible));
    }

    fn show_status(&self, notification: &Notification) {
        self.update(|page| {
            page.notification_text = notification.message.clone();
            page.notification_class = render::notification_class(notification.severity);
            page.notification_hidden = false;
        });
    }

    fn hide_status(&self) {
        self.update(|page| page.notification_hidden = true);
    }

    fn clear_results(&self) {
        self.update(|page| page.results_html.clear());
    }

    fn render_results(&self, items: &[Recommendation]) {
        let html = render::results_html(items);
        self.update(|page| page.results_html = html);
    }

    fn reset_form(&self, form_id: &str) {
        self.update(|page| page.reset_forms.push(form_id.to_string()));
    }
}
