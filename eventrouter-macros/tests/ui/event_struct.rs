use eventrouter_core::{Event, EventRouter};

#[derive(Event)]
struct ButtonClickEvent;

#[derive(Event, Debug)]
#[event(name = "auth.login")]
struct LoginEvent {
    user_id: String,
}

fn main() {
    assert_eq!(<ButtonClickEvent as Event>::NAME, "ButtonClickEvent");
    assert_eq!(<LoginEvent as Event>::NAME, "auth.login");

    let router = EventRouter::new();
    let handle = router.subscribe(|event: &LoginEvent| {
        assert_eq!(event.user_id, "sarah");
        Ok(())
    });
    assert!(handle.id().to_string().starts_with("auth.login-"));

    let delivered = router
        .publish(&LoginEvent {
            user_id: "sarah".into(),
        })
        .unwrap();
    assert_eq!(delivered, 1);
    assert_eq!(router.publish(&ButtonClickEvent).unwrap(), 0);
}
