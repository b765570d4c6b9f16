//! 进程级路由器
//!
//! 对单个 [`EventRouter`] 实例的薄包装：首次使用时创建，随进程结束销毁。
//! 更推荐显式持有并注入 `EventRouter`；这里只为无法传递上下文的场景提供便利。
//!
//! 注意：全局路由器在整个进程内共享，测试之间注册的回调会互相可见。
//!
use crate::{
    config::RouterConfig,
    error::RouterResult,
    event::Event,
    registration::Registration,
    router::EventRouter,
};
use once_cell::sync::Lazy;

static GLOBAL: Lazy<EventRouter> =
    Lazy::new(|| EventRouter::with_config(RouterConfig::builder().name("global".to_string()).build()));

/// 进程级路由器实例
pub fn router() -> &'static EventRouter {
    &GLOBAL
}

/// 在进程级路由器上注册回调
pub fn subscribe<E, F>(callback: F) -> Registration
where
    E: Event,
    F: Fn(&E) -> anyhow::Result<()> + Send + Sync + 'static,
{
    GLOBAL.subscribe(callback)
}

/// 在进程级路由器上发布事件
pub fn publish<E: Event>(event: &E) -> RouterResult<usize> {
    GLOBAL.publish(event)
}
