use eventrouter_core::Event;

#[derive(Event)]
#[event(name = "menu")]
enum MenuEvent {
    Opened,
    Selected { index: usize },
}

fn main() {
    assert_eq!(<MenuEvent as Event>::NAME, "menu");

    let _ = MenuEvent::Opened;
    let _ = MenuEvent::Selected { index: 2 };
}
