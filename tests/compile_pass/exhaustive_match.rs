use maybe_result::control::{Maybe, Outcome};

fn describe(maybe: Maybe<u8>, outcome: Outcome<u8, String>) -> String {
    let first = match maybe {
        Maybe::Present(value) => format!("present {value}"),
        Maybe::Absent => "absent".to_string(),
    };
    let second = match outcome {
        Outcome::Success(value) => format!("success {value}"),
        Outcome::Failure(error) => format!("failure {error}"),
    };
    format!("{first}, {second}")
}

fn main() {
    assert_eq!(
        describe(Maybe::present(1), Outcome::failure("e".to_string())),
        "present 1, failure e"
    );
    assert_eq!(
        describe(Maybe::absent(), Outcome::success(2)),
        "absent, success 2"
    );
}
