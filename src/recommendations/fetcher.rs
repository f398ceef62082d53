//! 推荐查询处理器

use std::sync::Arc;

use tracing::{info, warn};

use crate::infrastructure::http::ApiClient;
use crate::recommendations::model::Recommendation;
use crate::ui::loader::Loader;
use crate::ui::notifier::Notifier;
use crate::ui::view::View;
use crate::ui::Outcome;

pub const MISSING_CPF_MESSAGE: &str = "Por favor, digite um CPF.";
pub const FETCH_ERROR_MESSAGE: &str = "Erro ao buscar recomendações.";

pub struct RecommendationFetcher {
    client: ApiClient,
    notifier: Notifier,
    loader: Loader,
    view: Arc<dyn View>,
}

impl RecommendationFetcher {
    pub fn new(client: ApiClient, notifier: Notifier, loader: Loader, view: Arc<dyn View>) -> Self {
        Self {
            client,
            notifier,
            loader,
            view,
        }
    }

    /// 查询客户的推荐并重绘结果区域
    pub async fn fetch(&self, cpf: &str) -> Outcome {
        let cpf = cpf.trim();
        if cpf.is_empty() {
            return Outcome::Notified(self.notifier.notify(MISSING_CPF_MESSAGE, true));
        }

        let _loading = self.loader.start();
        self.view.clear_results();

        match self
            .client
            .get_json::<Vec<Recommendation>>(&["recomendacoes", cpf])
            .await
        {
            Ok(items) => {
                info!(cpf, count = items.len(), "recommendations loaded");
                self.view.render_results(&items);
                Outcome::Rendered { items: items.len() }
            }
            Err(err) => {
                warn!(cpf, error = %err, "recommendation lookup failed");
                Outcome::Notified(self.notifier.notify(err.user_message(FETCH_ERROR_MESSAGE), true))
            }
        }
    }
}
