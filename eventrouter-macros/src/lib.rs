use proc_macro::TokenStream;

mod event;

/// 事件派生宏
/// - 为结构体或枚举实现 `::eventrouter_core::Event`
/// - 默认以类型名作为 `Event::NAME`
/// - 支持参数：`#[event(name = "...")]` 覆写事件名
/// - 泛型参数自动追加 `Send + Sync + 'static` 约束；不支持生命周期参数
/// - 泛型事件的 `Event::name` 返回完整类型名，各实例化互不相同
#[proc_macro_derive(Event, attributes(event))]
pub fn derive_event(input: TokenStream) -> TokenStream {
    event::expand(input)
}
