use matcha::AutoMatcher;

#[derive(AutoMatcher)]
struct Pair(i32, i32);

fn main() {}
