//! 表单提交处理器

use std::collections::HashMap;
use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::core::response::SuccessBody;
use crate::forms::field::FormSpec;
use crate::infrastructure::http::ApiClient;
use crate::ui::loader::Loader;
use crate::ui::notifier::Notifier;
use crate::ui::view::View;
use crate::ui::Outcome;

pub const GENERIC_ERROR_MESSAGE: &str = "Ocorreu um erro.";

/// 以 JSON 提交已绑定的表单并通知结果
pub struct FormSubmitter {
    client: ApiClient,
    notifier: Notifier,
    loader: Loader,
    view: Arc<dyn View>,
    forms: HashMap<String, FormSpec>,
}

impl FormSubmitter {
    pub fn new(client: ApiClient, notifier: Notifier, loader: Loader, view: Arc<dyn View>) -> Self {
        Self {
            client,
            notifier,
            loader,
            view,
            forms: HashMap::new(),
        }
    }

    /// 绑定表单，同一 id 再次绑定会替换之前的绑定
    pub fn bind(&mut self, spec: FormSpec) {
        debug!(form_id = %spec.id, endpoint = %spec.endpoint, "form bound");
        self.forms.insert(spec.id.clone(), spec);
    }

    pub fn is_bound(&self, form_id: &str) -> bool {
        self.forms.contains_key(form_id)
    }

    /// 处理 `form_id` 的一次提交，携带 (name, value) 条目
    pub async fn submit(&self, form_id: &str, entries: &[(String, String)]) -> Outcome {
        let Some(spec) = self.forms.get(form_id) else {
            warn!(form_id, "submit for unbound form ignored");
            return Outcome::Ignored;
        };

        let payload = match spec.build_payload(entries) {
            Ok(payload) => payload,
            Err(err) => {
                return Outcome::Notified(
                    self.notifier.notify(err.user_message(GENERIC_ERROR_MESSAGE), true),
                );
            }
        };

        let _loading = self.loader.start();

        match self
            .client
            .post_json::<_, SuccessBody>(&spec.endpoint, &payload)
            .await
        {
            Ok(body) => {
                if !body.extra.is_empty() {
                    debug!(form_id, extra = ?body.extra, "additional reply fields");
                }
                let message = body.message_or(&spec.success_message);
                info!(form_id, "submission accepted: {}", message);
                let notification = self.notifier.notify(message, false);
                self.view.reset_form(&spec.id);
                Outcome::Notified(notification)
            }
            Err(err) => {
                warn!(form_id, error = %err, "submission failed");
                Outcome::Notified(
                    self.notifier.notify(err.user_message(GENERIC_ERROR_MESSAGE), true),
                )
            }
        }
    }
}
