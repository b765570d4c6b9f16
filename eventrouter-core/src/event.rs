/// 事件（Event）
///
/// 任意由调用方定义的数据类型，路由器只关心它的精确运行时类型。
/// - 事件在发布前构造，分发完成后路由器不会保留；
/// - 事件之间不存在继承关系：包装或 `Deref` 到另一事件类型的新类型是**不同**的事件；
/// - 建议通过 `#[derive(Event)]` 实现，或手动给出稳定名称。
///
/// 关联常量：
/// - `NAME`：事件的稳定名称。避免依赖 `type_name::<T>()`。
///
/// 日志、注册标识与 `registered_events` 使用 [`Event::name`]：默认即 `NAME`；
/// 泛型事件的派生实现会改为返回完整类型名，使 `Changed<u32>` 与 `Changed<String>` 可区分。
pub trait Event: Send + Sync + 'static {
    /// 事件的稳定名称（建议常量字符串，不随重构变化）
    const NAME: &'static str;

    /// 运行时名称
    fn name() -> &'static str {
        Self::NAME
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Plain;

    impl Event for Plain {
        const NAME: &'static str = "plain";
    }

    struct Wrapped<T>(T);

    impl<T: Send + Sync + 'static> Event for Wrapped<T> {
        const NAME: &'static str = "Wrapped";

        fn name() -> &'static str {
            std::any::type_name::<Self>()
        }
    }

    #[test]
    fn name_defaults_to_const() {
        assert_eq!(Plain::name(), "plain");
    }

    #[test]
    fn overridden_name_separates_instantiations() {
        let _ = (Wrapped(1u8).0, Wrapped(true).0);
        assert_eq!(<Wrapped<u8>>::NAME, <Wrapped<bool>>::NAME);
        assert_ne!(<Wrapped<u8>>::name(), <Wrapped<bool>>::name());
    }
}
