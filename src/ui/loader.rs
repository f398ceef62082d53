//! 加载指示器

use std::sync::{Arc, Mutex};

use crate::ui::view::View;

/// 统计进行中的请求，只要还有请求在进行指示器就保持显示
#[derive(Clone)]
pub struct Loader {
    view: Arc<dyn View>,
    in_flight: Arc<Mutex<usize>>,
}

impl Loader {
    pub fn new(view: Arc<dyn View>) -> Self {
        Self {
            view,
            in_flight: Arc::new(Mutex::new(0)),
        }
    }

    /// 标记一个请求开始，指示器保持显示直到返回的守卫被释放
    #[must_use = "the indicator is hidden as soon as the guard is dropped"]
    pub fn start(&self) -> LoadingGuard {
        let mut in_flight = self.in_flight.lock().unwrap_or_else(|e| e.into_inner());
        *in_flight += 1;
        if *in_flight == 1 {
            self.view.set_loading(true);
        }
        LoadingGuard {
            loader: self.clone(),
        }
    }

    pub fn in_flight(&self) -> usize {
        *self.in_flight.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn finish(&self) {
        let mut in_flight = self.in_flight.lock().unwrap_or_else(|e| e.into_inner());
        *in_flight = in_flight.saturating_sub(1);
        if *in_flight == 0 {
            self.view.set_loading(false);
        }
    }
}

/// 释放时归还对指示器的占用，无论处理器走哪条路径
pub struct LoadingGuard {
    loader: Loader,
}

impl Drop for LoadingGuard {
    fn drop(&mut self) {
        self.loader.finish();
    }
}
