use bon::Builder;
use serde::Deserialize;

/// 路由器配置
///
/// ```rust
/// use eventrouter_core::{EventRouter, RouterConfig};
///
/// let config = RouterConfig::builder()
///     .name("ui".to_string())
///     .prune_empty(false)
///     .build();
/// let router = EventRouter::with_config(config);
/// assert_eq!(router.name(), "ui");
/// ```
#[derive(Builder, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RouterConfig {
    /// 路由器名称，出现在每一条日志中
    #[builder(default = "default".to_string())]
    name: String,
    /// 某事件类型最后一个回调注销后，是否从映射中移除该类型的空集合
    #[builder(default = true)]
    prune_empty: bool,
    /// 事件类型映射的预分配容量
    #[builder(default)]
    initial_capacity: usize,
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl RouterConfig {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn prune_empty(&self) -> bool {
        self.prune_empty
    }

    pub fn initial_capacity(&self) -> usize {
        self.initial_capacity
    }
}
