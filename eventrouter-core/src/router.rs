use crate::{
    callback::{AnyEvent, Callback, ErasedCallback, erase},
    config::RouterConfig,
    error::{RouterError, RouterResult},
    event::Event,
    registration::{Registration, RegistrationId, SubscriptionInfo},
};
use chrono::{DateTime, Utc};
use dashmap::DashMap;
use std::any::{Any, TypeId};
use std::fmt;
use std::sync::Arc;
use tracing::{debug, trace};

struct RegistrationEntry {
    id: RegistrationId,
    registered_at: DateTime<Utc>,
    callback: ErasedCallback,
}

type Entries = Arc<Vec<Arc<RegistrationEntry>>>;

/// 某一事件类型下的全部回调
///
/// 集合本身写时复制：发布方只克隆 `Arc` 作为快照，
/// 注册/注销在快照仍被持有时才会真正复制底层 Vec。
struct Slot {
    event: &'static str,
    entries: Entries,
}

impl Slot {
    fn new(event: &'static str) -> Self {
        Self {
            event,
            entries: Arc::new(Vec::new()),
        }
    }

    fn push(&mut self, entry: RegistrationEntry) {
        Arc::make_mut(&mut self.entries).push(Arc::new(entry));
    }

    // 移出的条目交还调用方，由调用方在释放分片锁之后再析构
    fn remove(&mut self, id: &RegistrationId) -> Option<Arc<RegistrationEntry>> {
        let pos = self.entries.iter().position(|e| e.id == *id)?;
        Some(Arc::make_mut(&mut self.entries).swap_remove(pos))
    }

    fn contains(&self, id: &RegistrationId) -> bool {
        self.entries.iter().any(|e| e.id == *id)
    }

    fn snapshot(&self) -> Entries {
        self.entries.clone()
    }

    fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

pub(crate) struct RouterInner {
    config: RouterConfig,
    // 事件类型 -> 回调集合；只按 TypeId 精确匹配
    stack: DashMap<TypeId, Slot>,
}

impl RouterInner {
    pub(crate) fn remove(&self, type_id: TypeId, id: &RegistrationId) -> bool {
        // 先释放 get_mut 的分片锁，再做 remove_if，避免同一分片上自锁
        let removed = match self.stack.get_mut(&type_id) {
            Some(mut slot) => slot.remove(id),
            None => None,
        };
        let Some(entry) = removed else {
            return false;
        };

        debug!(router = %self.config.name(), id = %id, "unregistered callback");

        if self.config.prune_empty() {
            self.stack.remove_if(&type_id, |_, slot| slot.is_empty());
        }

        // 回调可能持有守卫等会回调路由器的对象，只能在不持锁时析构
        drop(entry);
        true
    }

    pub(crate) fn contains(&self, type_id: TypeId, id: &RegistrationId) -> bool {
        self.stack
            .get(&type_id)
            .is_some_and(|slot| slot.contains(id))
    }
}

/// 进程内事件路由器
///
/// - 通过 `TypeId` 注册不同事件类型对应的回调集合；
/// - 运行时以类型擦除（Any）方式调度，仅精确类型匹配；
/// - 克隆得到的是同一个路由器的共享引用。
///
/// 同一事件的多个回调之间**不保证**调用顺序，请不要依赖注册顺序。
#[derive(Clone)]
pub struct EventRouter {
    inner: Arc<RouterInner>,
}

impl Default for EventRouter {
    fn default() -> Self {
        Self::with_config(RouterConfig::default())
    }
}

impl EventRouter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: RouterConfig) -> Self {
        let stack = DashMap::with_capacity(config.initial_capacity());
        Self {
            inner: Arc::new(RouterInner { config, stack }),
        }
    }

    pub fn name(&self) -> &str {
        self.inner.config.name()
    }

    pub fn config(&self) -> &RouterConfig {
        &self.inner.config
    }

    /// 注册闭包回调
    ///
    /// 同一闭包重复注册会得到两个互相独立的条目与句柄。
    pub fn subscribe<E, F>(&self, callback: F) -> Registration
    where
        E: Event,
        F: Fn(&E) -> anyhow::Result<()> + Send + Sync + 'static,
    {
        self.subscribe_callback::<E, F>(Arc::new(callback))
    }

    /// 注册实现了 [`Callback`] 的处理器
    pub fn subscribe_callback<E, C>(&self, callback: Arc<C>) -> Registration
    where
        E: Event,
        C: Callback<E>,
    {
        let type_id = TypeId::of::<E>();
        let name = E::name();
        let id = RegistrationId::new(name);

        debug!(router = %self.name(), id = %id, event = name, "registering callback");

        let entry = RegistrationEntry {
            id,
            registered_at: Utc::now(),
            callback: erase::<E, C>(callback),
        };

        self.inner
            .stack
            .entry(type_id)
            .or_insert_with(|| Slot::new(name))
            .push(entry);

        Registration::new(id, type_id, Arc::downgrade(&self.inner))
    }

    /// 发布事件，同步调用所有精确匹配该类型的回调，返回被调用的回调数量
    ///
    /// 任一回调失败即中止，错误原样返回给调用方。
    pub fn publish<E: Event>(&self, event: &E) -> RouterResult<usize> {
        self.dispatch(TypeId::of::<E>(), event)
    }

    /// 发布类型擦除的事件，按其运行时类型匹配
    ///
    /// 传入 `None` 时返回 [`RouterError::InvalidArgument`]，不会调用任何回调。
    /// 注意传入的应当是事件本身，而不是装着事件的 `Box`。
    pub fn publish_any(&self, event: Option<&(dyn Any + Send + Sync)>) -> RouterResult<usize> {
        let Some(event) = event else {
            return Err(RouterError::invalid_argument("event may not be null"));
        };

        self.dispatch(Any::type_id(event), event)
    }

    fn dispatch(&self, type_id: TypeId, event: &AnyEvent) -> RouterResult<usize> {
        // 只在取快照时持有分片读锁，回调执行期间不持有任何锁
        let Some((name, entries)) = self
            .inner
            .stack
            .get(&type_id)
            .map(|slot| (slot.event, slot.snapshot()))
        else {
            return Ok(0);
        };

        trace!(router = %self.name(), event = name, receivers = entries.len(), "publishing event");

        for entry in entries.iter() {
            if let Err(err) = (entry.callback)(event) {
                debug!(router = %self.name(), id = %entry.id, error = %err, "callback failed");
                return Err(err);
            }
        }

        Ok(entries.len())
    }

    /// 当前注册在事件类型 `E` 上的回调数量
    pub fn subscriber_count<E: Event>(&self) -> usize {
        self.inner
            .stack
            .get(&TypeId::of::<E>())
            .map_or(0, |slot| slot.entries.len())
    }

    /// 获取已注册的事件类型名列表（只读视图）
    pub fn registered_events(&self) -> Vec<&'static str> {
        self.inner.stack.iter().map(|e| e.value().event).collect()
    }

    /// 全部订阅的快照
    pub fn subscriptions(&self) -> Vec<SubscriptionInfo> {
        let mut out = Vec::new();
        for slot in self.inner.stack.iter() {
            out.extend(slot.entries.iter().map(|entry| SubscriptionInfo {
                id: entry.id,
                event: slot.event,
                registered_at: entry.registered_at,
            }));
        }
        out
    }

    /// 移除全部回调，已发出的句柄随之变为空操作
    pub fn clear(&self) {
        // 先把集合逐个移出映射，再在不持锁的情况下统一析构
        let keys: Vec<TypeId> = self.inner.stack.iter().map(|e| *e.key()).collect();
        let drained: Vec<(TypeId, Slot)> = keys
            .iter()
            .filter_map(|key| self.inner.stack.remove(key))
            .collect();

        debug!(router = %self.name(), event_types = drained.len(), "cleared all callbacks");
        drop(drained);
    }
}

impl fmt::Debug for EventRouter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventRouter")
            .field("name", &self.name())
            .field("event_types", &self.inner.stack.len())
            .finish()
    }
}
