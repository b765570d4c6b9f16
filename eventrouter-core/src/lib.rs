//! 进程内类型化事件路由（eventrouter-core）
//!
//! 按事件的**精确运行时类型**将事件同步分发给已注册的回调：
//! - `router`：`EventRouter`，持有 类型 → 回调集合 的映射，提供 `subscribe` / `publish`；
//! - `registration`：订阅返回的 `Registration` 句柄，调用 `unregister` 即移除对应回调；
//! - `event` / `callback`：事件与回调的最小协议；
//! - `config`：路由器配置（名称、空集合回收、预分配容量）；
//! - `global`：进程级单例包装，首次使用时创建，随进程结束。
//!
//! 分发语义：
//! 1. 匹配只看 `TypeId` 是否相等，不存在“父类型”订阅接收“子类型”事件的情况；
//! 2. 同一事件的多个回调之间不保证调用顺序；
//! 3. 回调失败（返回错误或 panic）会直接传播给发布方，剩余回调不再执行；
//! 4. 发布期间不持有锁，回调内部可以再次订阅、发布或注销。
//!
//! 典型用法：
//! ```rust
//! use eventrouter_core::{Event, EventRouter};
//!
//! struct LoginEvent {
//!     user_id: String,
//! }
//!
//! impl Event for LoginEvent {
//!     const NAME: &'static str = "LoginEvent";
//! }
//!
//! let router = EventRouter::new();
//! let registration = router.subscribe(|event: &LoginEvent| {
//!     assert_eq!(event.user_id, "sarah");
//!     Ok(())
//! });
//!
//! let delivered = router.publish(&LoginEvent { user_id: "sarah".into() }).unwrap();
//! assert_eq!(delivered, 1);
//!
//! registration.unregister();
//! assert_eq!(router.publish(&LoginEvent { user_id: "sarah".into() }).unwrap(), 0);
//! ```
//!
pub mod callback;
pub mod config;
pub mod error;
pub mod event;
pub mod global;
pub mod registration;
pub mod router;

pub use callback::Callback;
pub use config::RouterConfig;
pub use error::{RouterError, RouterResult};
pub use event::Event;
pub use registration::{Registration, RegistrationGuard, RegistrationId, SubscriptionInfo};
pub use router::EventRouter;

#[cfg(feature = "derive")]
pub use eventrouter_macros::Event;

// 允许在本 crate 内部通过 ::eventrouter_core 进行自引用，
// 以便派生宏在本 crate 的测试中也能解析到 ::eventrouter_core 路径。
extern crate self as eventrouter_core;
