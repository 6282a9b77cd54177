use matcha::AutoMatcher;

#[derive(AutoMatcher)]
enum Either {
    Left,
    Right,
}

fn main() {}
