/// 事件路由示例
/// 展示 订阅 -> 发布 -> 注销 的完整流程，以及回调失败时的传播行为。
/// 运行：`RUST_LOG=eventrouter_core=trace cargo run --example login_flow`
use eventrouter_core::{Event, EventRouter, RouterConfig};
use tracing_subscriber::EnvFilter;

#[derive(Event, Debug)]
#[event(name = "auth.login")]
struct LoginEvent {
    user_id: String,
}

#[derive(Event, Debug)]
struct LogoutEvent {
    user_id: String,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
        )
        .init();

    let router = EventRouter::with_config(RouterConfig::builder().name("auth".to_string()).build());

    let greeter = router.subscribe(|event: &LoginEvent| {
        println!("welcome back, {}", event.user_id);
        Ok(())
    });
    let _audit = router.subscribe(|event: &LoginEvent| {
        println!("audit: login user={}", event.user_id);
        Ok(())
    });
    let _farewell = router.subscribe(|event: &LogoutEvent| {
        println!("bye, {}", event.user_id);
        Ok(())
    });

    let delivered = router.publish(&LoginEvent {
        user_id: "sarah".into(),
    })?;
    println!("login delivered to {delivered} callbacks");

    greeter.unregister();
    router.publish(&LoginEvent {
        user_id: "tom".into(),
    })?;
    router.publish(&LogoutEvent {
        user_id: "sarah".into(),
    })?;

    for sub in router.subscriptions() {
        println!("{} registered at {}", sub.id, sub.registered_at);
    }

    // 回调失败 -> 错误直接返回给发布方
    let _guard = router
        .subscribe(|event: &LogoutEvent| {
            anyhow::ensure!(!event.user_id.is_empty(), "anonymous logout");
            Ok(())
        })
        .into_guard();
    if let Err(err) = router.publish(&LogoutEvent {
        user_id: String::new(),
    }) {
        eprintln!("logout rejected: {err}");
    }

    Ok(())
}
