use eventrouter_core::{Event, EventRouter};

#[derive(Event)]
struct Changed<T> {
    value: T,
}

fn main() {
    assert_eq!(<Changed<u32> as Event>::NAME, "Changed");
    assert_eq!(<Changed<String> as Event>::NAME, "Changed");
    assert_ne!(<Changed<u32> as Event>::name(), <Changed<String> as Event>::name());
    assert!(<Changed<u32> as Event>::name().ends_with("Changed<u32>"));

    let router = EventRouter::new();
    router.subscribe(|event: &Changed<u32>| {
        assert_eq!(event.value, 7);
        Ok(())
    });

    // Changed<u32> 与 Changed<String> 是两个不同的事件类型
    assert_eq!(router.publish(&Changed { value: 7u32 }).unwrap(), 1);
    assert_eq!(
        router
            .publish(&Changed {
                value: String::from("7")
            })
            .unwrap(),
        0
    );

    router.subscribe(|_: &Changed<String>| Ok(()));
    assert_eq!(router.registered_events().len(), 2);
}
