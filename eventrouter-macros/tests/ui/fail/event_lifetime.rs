use eventrouter_core::Event;

#[derive(Event)]
struct Borrowed<'a> {
    name: &'a str,
}

fn main() {}
