//! `painel` 程序的终端渲染

use crate::recommendations::Recommendation;
use crate::ui::notifier::Notification;
use crate::ui::render::EMPTY_RESULTS_MESSAGE;
use crate::ui::view::View;
use tracing::debug;

#[derive(Debug, Default)]
pub struct ConsoleView;

impl ConsoleView {
    pub fn new() -> Self {
        Self
    }
}

impl View for ConsoleView {
    fn set_loading(&self, visible: bool) {
        debug!(visible, "loader");
    }

    fn show_status(&self, notification: &Notification) {
        if notification.is_error() {
            eprintln!("[erro] {}", notification.message);
        } else {
            println!("[ok] {}", notification.message);
        }
    }

    fn hide_status(&self) {}

    fn clear_results(&self) {}

    fn render_results(&self, items: &[Recommendation]) {
        if items.is_empty() {
            println!("{}", EMPTY_RESULTS_MESSAGE);
            return;
        }
        for item in items {
            println!(
                "- {} | Preço: {} | Em Estoque: {}",
                item.name,
                item.price_label(),
                item.stock_label()
            );
        }
    }

    fn reset_form(&self, form_id: &str) {
        debug!(form_id, "form reset");
    }
}
