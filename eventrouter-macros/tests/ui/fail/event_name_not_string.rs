use eventrouter_core::Event;

#[derive(Event)]
#[event(name = 1)]
struct Numbered;

fn main() {}
