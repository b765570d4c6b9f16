use eventrouter_core::Event;

#[derive(Event)]
#[event(foo = "x")]
struct Unknown;

fn main() {}
