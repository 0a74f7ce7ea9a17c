use crate::{Identity, Validator, validate_identity, validate_password};

use googletest::prelude::*;

fn password_error(password: &str) -> Option<String> {
    let mut v = Validator::new();
    validate_password(&mut v, password);
    v.error("password").map(str::to_string)
}

fn name_error(name: &str) -> Option<String> {
    let mut v = Validator::new();
    validate_identity(&mut v, &Identity::new(name, "ada@x.com"));
    v.error("name").map(str::to_string)
}

#[test]
fn given_empty_password_then_is_blank() {
    assert_that!(password_error(""), some(eq("is blank")));
}

#[test]
fn given_password_length_boundaries_then_only_8_through_72_accepted() {
    assert_that!(
        password_error(&"a".repeat(7)),
        some(eq("must be at least 8 chars long"))
    );
    assert_that!(password_error(&"a".repeat(8)), none());
    assert_that!(password_error(&"a".repeat(72)), none());
    assert_that!(
        password_error(&"a".repeat(73)),
        some(eq("must not exceed 72 chars"))
    );
}

#[test]
fn given_multibyte_password_then_length_is_counted_in_bytes() {
    // 37 two-byte characters = 74 bytes
    assert_that!(
        password_error(&"é".repeat(37)),
        some(eq("must not exceed 72 chars"))
    );
}

#[test]
fn given_name_length_boundaries_then_only_1_through_100_accepted() {
    assert_that!(name_error(""), some(eq("is blank")));
    assert_that!(name_error(&"n".repeat(100)), none());
    assert_that!(
        name_error(&"n".repeat(101)),
        some(eq("must not exceed 100 chars"))
    );
}

#[test]
fn given_blank_email_then_is_blank() {
    let mut v = Validator::new();
    validate_identity(&mut v, &Identity::new("Ada", ""));
    assert_that!(v.error("email"), some(eq("is blank")));
}

#[test]
fn given_identity_with_short_plaintext_then_password_rules_apply() {
    let mut identity = Identity::new("Ada", "ada@x.com");
    identity.credential.create("short").unwrap();

    let mut v = Validator::new();
    validate_identity(&mut v, &identity);

    assert_that!(v.error("password"), some(eq("must be at least 8 chars long")));
}

#[test]
fn given_identity_rebuilt_from_hash_then_password_rules_are_skipped() {
    let mut identity = Identity::new("Ada", "ada@x.com");
    identity.credential.create("longenough1").unwrap();
    identity.credential.forget_plaintext();

    let mut v = Validator::new();
    validate_identity(&mut v, &identity);

    assert!(v.valid());
}

#[test]
fn given_every_field_invalid_then_all_errors_collected() {
    let mut identity = Identity::new("", "");
    identity.credential.create("").unwrap();

    let mut v = Validator::new();
    validate_identity(&mut v, &identity);

    assert_that!(v.errors().len(), eq(3));
    assert_that!(v.error("name"), some(eq("is blank")));
    assert_that!(v.error("email"), some(eq("is blank")));
    assert_that!(v.error("password"), some(eq("is blank")));
}
