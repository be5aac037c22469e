//! Output contract of the `token-generator` binary.

use std::process::{Command, Output};
use token_generator::jwt::{HmacSigner, JwtSerializer, SecretKey};
use token_generator::JwtAlgorithm;

const SUBJECT: &str = "jeanclaude.twagiramungu70078@onetrust.com";
const LITERAL_KEY: &str = "Q29va2llIEJhbm5lciB1c2luZyBPbmVUcnVzdA==";

/// Run the binary with only `vars` set, away from any `.env` file.
fn run(vars: &[(&str, &str)]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_token-generator"))
        .env_clear()
        .envs(vars.iter().copied())
        .current_dir(std::env::temp_dir())
        .output()
        .unwrap()
}

#[test]
fn test_prints_single_token_line_on_stdout() {
    let output = run(&[
        ("TOKEN_SECRET", LITERAL_KEY),
        ("TOKEN_SUBJECT", SUBJECT),
        ("LOG_LEVEL", "debug"),
    ]);

    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.ends_with('\n'));
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 1, "stdout must hold exactly the token");

    let token = lines[0];
    assert_eq!(token.split('.').count(), 3);
    assert!(token.starts_with("eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9."));

    let signer = HmacSigner::new(SecretKey::from_bytes(LITERAL_KEY.as_bytes().to_vec()), JwtAlgorithm::HS256).unwrap();
    let claims = JwtSerializer::new(JwtAlgorithm::HS256)
        .deserialize(token, &signer.decoding_key())
        .unwrap();
    assert_eq!(claims.sub, SUBJECT);
    assert_eq!(claims.exp - claims.iat, 86_400);

    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(!stderr.is_empty(), "debug logs go to stderr");
    assert!(!stderr.contains(token));
    assert!(!stderr.contains(LITERAL_KEY));
}

#[test]
fn test_missing_secret_exits_non_zero_without_output() {
    let output = run(&[("TOKEN_SUBJECT", SUBJECT)]);

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());

    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("TOKEN_SECRET"));
    assert_eq!(stderr.matches("TOKEN_SECRET is required").count(), 1);
}

#[test]
fn test_empty_secret_exits_non_zero_without_output() {
    let output = run(&[("TOKEN_SECRET", ""), ("TOKEN_SUBJECT", SUBJECT), ("LOG_LEVEL", "debug")]);

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());

    let stderr = String::from_utf8(output.stderr).unwrap();
    assert_eq!(stderr.matches("HMAC key must not be empty").count(), 1);
}
