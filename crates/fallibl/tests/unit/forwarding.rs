//! Forwarding errors between functions with unrelated success types.

use std::cell::Cell;

use fallibl::{
    Empty, MessageError, Outcome, forward_error, forward_error_cloned, make_error, propagate,
};

#[derive(Debug, PartialEq)]
struct Profile {
    name: String,
}

fn lookup(id: u32) -> Outcome<Profile> {
    if id == 0 {
        return make_error!("first error {}", 69);
    }
    Outcome::Success(Profile {
        name: format!("user-{id}"),
    })
}

#[test]
fn test_no_error() {
    let result = (|| -> Outcome<&'static str> { "69420".into() })();
    assert_eq!(*result.value(), "69420");
}

#[test]
fn test_single_error() {
    let result = (|| -> Outcome<String> { make_error("error") })();
    assert_eq!(result.error().message(), "error");
}

#[test]
fn test_forward_by_clone_after_inspection() {
    let result = (|| -> Outcome<String> {
        let error = lookup(0);
        if error.is_failure() {
            return forward_error_cloned(error.error());
        }
        make_error("second error")
    })();
    assert_eq!(result.error().message(), "first error 69");
}

#[test]
fn test_forward_by_move_from_temporary() {
    let result = (|| -> Outcome<Vec<u64>> { forward_error(lookup(0).into_error()) })();
    assert_eq!(result.error().message(), "first error 69");
}

#[test]
fn test_forward_method_on_failure() {
    let result = (|| -> Outcome<bool> {
        let profile = lookup(0);
        if !profile.as_bool() {
            return profile.forward();
        }
        Outcome::Success(true)
    })();
    assert_eq!(result.error().message(), "first error 69");
}

#[test]
fn test_propagate_skips_rest_of_function() {
    let statements_after = Cell::new(0);
    let result = (|| -> Outcome<usize> {
        let profile = propagate!(lookup(0));
        statements_after.set(statements_after.get() + 1);
        Outcome::Success(profile.name.len())
    })();
    assert_eq!(statements_after.get(), 0);
    assert_eq!(result.error().message(), "first error 69");
}

#[test]
fn test_propagate_continues_with_value() {
    let statements_after = Cell::new(0);
    let result = (|| -> Outcome<usize> {
        let profile = propagate!(lookup(7));
        statements_after.set(statements_after.get() + 1);
        Outcome::Success(profile.name.len())
    })();
    assert_eq!(statements_after.get(), 1);
    assert_eq!(result.into_value(), "user-7".len());
}

#[test]
fn test_propagate_through_several_levels() {
    fn level_one(id: u32) -> Outcome<String> {
        let profile = propagate!(lookup(id));
        Outcome::Success(profile.name)
    }

    fn level_two(id: u32) -> Outcome<Empty> {
        propagate!(level_one(id));
        Outcome::Success(Empty)
    }

    assert!(level_two(3).is_success());
    assert_eq!(level_two(0).error().message(), "first error 69");
}

#[test]
fn test_propagate_moves_error_unchanged() {
    let original = MessageError::new("exact");
    let result = (|| -> Outcome<u8> {
        propagate!(Outcome::<String>::Failure(MessageError::new("exact")));
        Outcome::Success(0)
    })();
    assert_eq!(result.into_error(), original);
}

#[test]
fn test_conditional_use() {
    let outcomes: Vec<Outcome<u32>> = vec![Outcome::Success(1), make_error("x")];
    let successes = outcomes.iter().filter(|o| bool::from(*o)).count();
    assert_eq!(successes, 1);
}
