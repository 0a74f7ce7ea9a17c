use crate::models::credential::DECOY_HASH;
use crate::{CoreError, Credential};

use googletest::prelude::*;

#[test]
fn given_created_credential_when_matching_same_plaintext_then_true() {
    let mut credential = Credential::default();
    credential.create("longenough1").unwrap();

    assert_that!(credential.matches("longenough1"), ok(eq(&true)));
}

#[test]
fn given_created_credential_when_matching_wrong_plaintext_then_false_not_error() {
    let mut credential = Credential::default();
    credential.create("longenough1").unwrap();

    assert_that!(credential.matches("longenough1x"), ok(eq(&false)));
    assert_that!(credential.matches("wrong"), ok(eq(&false)));
    assert_that!(credential.matches(""), ok(eq(&false)));
}

#[test]
fn given_same_plaintext_hashed_twice_then_hashes_differ_and_both_verify() {
    let mut first = Credential::default();
    let mut second = Credential::default();
    first.create("same-secret").unwrap();
    second.create("same-secret").unwrap();

    assert_that!(first.hash(), not(eq(second.hash())));
    assert_that!(first.matches("same-secret"), ok(eq(&true)));
    assert_that!(second.matches("same-secret"), ok(eq(&true)));
}

#[test]
fn given_created_credential_then_holds_plaintext_and_hash() {
    let mut credential = Credential::default();
    credential.create("longenough1").unwrap();

    assert!(credential.has_hash());
    assert!(credential.has_plaintext());
    assert_that!(credential.plaintext(), some(eq("longenough1")));
    assert_that!(credential.hash().unwrap(), starts_with("$argon2id$"));
}

#[test]
fn given_forgotten_plaintext_then_hash_still_verifies() {
    let mut credential = Credential::default();
    credential.create("longenough1").unwrap();

    credential.forget_plaintext();

    assert!(!credential.has_plaintext());
    assert_that!(credential.matches("longenough1"), ok(eq(&true)));
}

#[test]
fn given_credential_rebuilt_from_stored_hash_then_verifies_original_plaintext() {
    let mut original = Credential::default();
    original.create("longenough1").unwrap();

    let restored = Credential::from_hash(original.hash().unwrap());

    assert!(!restored.has_plaintext());
    assert_that!(restored.matches("longenough1"), ok(eq(&true)));
    assert_that!(restored.matches("wrong"), ok(eq(&false)));
}

#[test]
fn given_malformed_stored_hash_when_matching_then_comparison_error() {
    let credential = Credential::from_hash("not-a-phc-string");

    let result = credential.matches("anything");

    assert!(matches!(result, Err(CoreError::Comparison { .. })));
}

#[test]
fn given_credential_without_hash_when_matching_then_comparison_error() {
    let credential = Credential::default();

    assert!(!credential.has_hash());
    assert!(matches!(
        credential.matches("anything"),
        Err(CoreError::Comparison { .. })
    ));
}

#[test]
fn given_credential_when_debug_formatted_then_secret_material_is_redacted() {
    let mut credential = Credential::default();
    credential.create("super-secret-value").unwrap();

    let rendered = format!("{credential:?}");

    assert_that!(rendered, not(contains_substring("super-secret-value")));
    assert_that!(rendered, not(contains_substring("argon2")));
    assert_that!(rendered, contains_substring("<redacted>"));
}

#[test]
fn given_decoy_hash_when_matched_then_false_with_same_cost_as_created_hashes() {
    let mut credential = Credential::default();
    credential.create("longenough1").unwrap();
    let params = |hash: &str| hash.rsplitn(3, '$').nth(2).map(str::to_owned);

    assert_that!(
        Credential::from_hash(DECOY_HASH).matches("longenough1"),
        ok(eq(&false))
    );
    assert_that!(params(DECOY_HASH), eq(&params(credential.hash().unwrap())));
}
