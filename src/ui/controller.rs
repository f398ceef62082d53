//! 事件控制器，把各处理器接到同一个视图上

use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::{debug, info};

use crate::config::ClientConfig;
use crate::core::error::Result;
use crate::forms::{catalog, FormSpec, FormSubmitter};
use crate::infrastructure::http::ApiClient;
use crate::recommendations::RecommendationFetcher;
use crate::ui::loader::Loader;
use crate::ui::notifier::Notifier;
use crate::ui::view::View;
use crate::ui::Outcome;

/// 用户交互
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// 表单提交，携带 (name, value) 条目
    Submit {
        form_id: String,
        entries: Vec<(String, String)>,
    },
    /// 点击推荐按钮，输入框中是这个 CPF
    RequestRecommendations { cpf: String },
}

pub struct Controller {
    forms: FormSubmitter,
    recommendations: RecommendationFetcher,
    notifier: Notifier,
    loader: Loader,
}

impl Controller {
    /// 围绕 `view` 创建处理器并绑定默认表单
    pub fn new(config: &ClientConfig, view: Arc<dyn View>) -> Result<Self> {
        let client = ApiClient::new(&config.api)?;
        let notifier = Notifier::new(Arc::clone(&view), config.notification.hide_after());
        let loader = Loader::new(Arc::clone(&view));

        let mut forms = FormSubmitter::new(
            client.clone(),
            notifier.clone(),
            loader.clone(),
            Arc::clone(&view),
        );
        for spec in catalog::default_forms() {
            forms.bind(spec);
        }

        let recommendations =
            RecommendationFetcher::new(client.clone(), notifier.clone(), loader.clone(), view);

        info!(base_url = %client.base_url(), "controller ready");
        Ok(Self {
            forms,
            recommendations,
            notifier,
            loader,
        })
    }

    /// 绑定额外表单，或替换默认表单
    pub fn bind(&mut self, spec: FormSpec) {
        self.forms.bind(spec);
    }

    pub fn notifier(&self) -> &Notifier {
        &self.notifier
    }

    pub fn loader(&self) -> &Loader {
        &self.loader
    }

    pub async fn dispatch(&self, event: Event) -> Outcome {
        debug!(?event, "dispatch");
        match event {
            Event::Submit { form_id, entries } => self.forms.submit(&form_id, &entries).await,
            Event::RequestRecommendations { cpf } => self.recommendations.fetch(&cpf).await,
        }
    }

    /// 逐个处理事件直到发送端关闭，返回处理的事件数
    ///
    /// 结果已经显示在视图上，这里不保留。
    pub async fn run(&self, events: mpsc::Receiver<Event>) -> usize {
        self.run_with(events, |_| {}).await
    }

    /// 同 [`Controller::run`]，每个结果交给 `on_outcome`
    pub async fn run_with<F>(&self, mut events: mpsc::Receiver<Event>, mut on_outcome: F) -> usize
    where
        F: FnMut(Outcome),
    {
        let mut handled = 0;
        while let Some(event) = events.recv().await {
            on_outcome(self.dispatch(event).await);
            handled += 1;
        }
        handled
    }
}
