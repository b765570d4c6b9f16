use crate::error::{RouterError, RouterResult};
use crate::event::Event;
use std::any::{Any, type_name};
use std::sync::Arc;

/// 回调（Callback）：接收某一事件类型的实例并执行副作用
///
/// - 闭包 `Fn(&E) -> anyhow::Result<()>` 自动实现该 trait；
/// - 有状态的处理器可自行实现，再通过 [`EventRouter::subscribe_callback`] 以 `Arc` 注册；
/// - 返回的错误会原样传播给发布方，并中止本次发布中尚未执行的回调。
///
/// [`EventRouter::subscribe_callback`]: crate::EventRouter::subscribe_callback
pub trait Callback<E>: Send + Sync + 'static
where
    E: Event,
{
    fn trigger(&self, event: &E) -> anyhow::Result<()>;
}

impl<E, F> Callback<E> for F
where
    E: Event,
    F: Fn(&E) -> anyhow::Result<()> + Send + Sync + 'static,
{
    fn trigger(&self, event: &E) -> anyhow::Result<()> {
        self(event)
    }
}

pub(crate) type AnyEvent = dyn Any + Send + Sync;

/// 类型擦除后的回调，运行时通过 downcast 还原事件类型
pub(crate) type ErasedCallback = Arc<dyn Fn(&AnyEvent) -> RouterResult<()> + Send + Sync>;

pub(crate) fn erase<E, C>(callback: Arc<C>) -> ErasedCallback
where
    E: Event,
    C: Callback<E>,
{
    Arc::new(move |event: &AnyEvent| {
        // 正常情况下这里的 downcast 永远不会失败（键与闭包同一泛型 E）
        match event.downcast_ref::<E>() {
            Some(event) => callback.trigger(event).map_err(RouterError::from),
            None => Err(RouterError::TypeMismatch {
                expected: type_name::<E>(),
            }),
        }
    })
}
