use crate::auth::pkce::{challenge_s256, generate_state, generate_verifier};

#[test]
fn test_challenge_matches_rfc7636_example() {
    // Appendix B of RFC 7636.
    let verifier = "dBjftJeZ4CVP-mB92K27uhbUJU1p1r_wW1gFWFOEjXk";
    assert_eq!(
        challenge_s256(verifier),
        "E9Melhoa2OwvFrEMTJguCHaoeK1t8URWbuGJSstw-cM"
    );
}

#[test]
fn test_verifier_length_and_charset() {
    let verifier = generate_verifier();
    assert_eq!(verifier.len(), 43);
    assert!(verifier
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_'));
}

#[test]
fn test_verifiers_are_unique() {
    assert_ne!(generate_verifier(), generate_verifier());
    assert_ne!(generate_state(), generate_state());
}
