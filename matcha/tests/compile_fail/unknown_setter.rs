use matcha::AutoMatcher;

#[derive(AutoMatcher)]
struct Status {
    id: u64,
    code: String,
}

fn main() {
    let _ = StatusMatcher::new().with_banana(42);
}
