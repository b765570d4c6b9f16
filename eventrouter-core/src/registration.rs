//! 注册句柄（Registration）
//!
//! `subscribe` 返回的能力对象：只持有注册标识与路由器的弱引用，
//! 不拥有回调本身。调用 `unregister` 即从路由器中移除对应回调，重复调用为空操作。
//!
use crate::router::RouterInner;
use chrono::{DateTime, Utc};
use serde::{Serialize, Serializer};
use std::any::TypeId;
use std::fmt;
use std::sync::Weak;
use std::sync::atomic::{AtomicBool, Ordering};
use uuid::Uuid;

/// 注册标识：`<事件名>-<uuid>`，仅用于诊断与日志
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RegistrationId {
    event: &'static str,
    uuid: Uuid,
}

impl RegistrationId {
    pub(crate) fn new(event: &'static str) -> Self {
        Self {
            event,
            uuid: Uuid::new_v4(),
        }
    }

    pub fn event(&self) -> &'static str {
        self.event
    }

    pub fn uuid(&self) -> Uuid {
        self.uuid
    }
}

impl fmt::Display for RegistrationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.event, self.uuid)
    }
}

impl Serialize for RegistrationId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// 某一订阅的只读快照
#[derive(Clone, Debug, Serialize)]
pub struct SubscriptionInfo {
    pub id: RegistrationId,
    pub event: &'static str,
    pub registered_at: DateTime<Utc>,
}

/// 注册句柄
///
/// - 丢弃句柄**不会**注销回调，回调会一直保留到显式 `unregister` 或路由器被销毁；
/// - 需要随作用域自动注销时使用 [`Registration::into_guard`]。
pub struct Registration {
    id: RegistrationId,
    type_id: TypeId,
    router: Weak<RouterInner>,
    active: AtomicBool,
}

impl Registration {
    pub(crate) fn new(id: RegistrationId, type_id: TypeId, router: Weak<RouterInner>) -> Self {
        Self {
            id,
            type_id,
            router,
            active: AtomicBool::new(true),
        }
    }

    pub fn id(&self) -> RegistrationId {
        self.id
    }

    /// 从路由器中移除该回调
    ///
    /// 已在进行中的发布若已取得快照，仍可能在本方法返回后调用一次该回调。
    pub fn unregister(&self) {
        if !self.active.swap(false, Ordering::AcqRel) {
            return;
        }

        if let Some(router) = self.router.upgrade() {
            router.remove(self.type_id, &self.id);
        }
    }

    /// 回调是否仍登记在路由器中
    pub fn is_active(&self) -> bool {
        self.active.load(Ordering::Acquire)
            && self
                .router
                .upgrade()
                .is_some_and(|router| router.contains(self.type_id, &self.id))
    }

    /// 转换为作用域守卫：守卫被丢弃时自动注销
    pub fn into_guard(self) -> RegistrationGuard {
        RegistrationGuard { registration: self }
    }

    // 转移注销能力：原句柄失效，新句柄继承其状态
    fn take_over(&self) -> Registration {
        let active = self.active.swap(false, Ordering::AcqRel);
        Registration {
            id: self.id,
            type_id: self.type_id,
            router: self.router.clone(),
            active: AtomicBool::new(active),
        }
    }
}

impl fmt::Debug for Registration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registration")
            .field("id", &self.id)
            .field("active", &self.active.load(Ordering::Acquire))
            .finish()
    }
}

/// 作用域守卫，`Drop` 时注销对应回调
#[derive(Debug)]
#[must_use = "dropping the guard unregisters the callback immediately"]
pub struct RegistrationGuard {
    registration: Registration,
}

impl RegistrationGuard {
    pub fn id(&self) -> RegistrationId {
        self.registration.id()
    }

    /// 解除守卫，取回普通句柄（不再随作用域注销）
    pub fn disarm(self) -> Registration {
        self.registration.take_over()
    }
}

impl Drop for RegistrationGuard {
    fn drop(&mut self) {
        self.registration.unregister();
    }
}
