use eventrouter_core::Event;

#[derive(Event)]
#[event(name = "a", name = "b")]
struct Twice;

fn main() {}
