use std::fmt;
use rand::Rng;
use rand::seq::SliceRandom;
use crate::models::errors::CredentialError;

pub const DEFAULT_CREDENTIAL_LENGTH: usize = 12;
pub const MIN_CREDENTIAL_LENGTH: usize = 8;
pub const MAX_GENERATION_ATTEMPTS: usize = 10_000;

pub const UPPERCASE_CHARACTERS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const LOWERCASE_CHARACTERS: &str = "abcdefghijklmnopqrstuvwxyz";
pub const DIGIT_CHARACTERS: &str = "0123456789";
/// Cognito password-policy symbols. Space is left out: the pool rejects
/// passwords with a leading or trailing space.
pub const SPECIAL_CHARACTERS: &str = "^$*.[]{}()?-\"!@#%&/\\,><':;|_~`+=";

const CHARACTER_CLASSES: [&str; 4] = [
    UPPERCASE_CHARACTERS,
    LOWERCASE_CHARACTERS,
    DIGIT_CHARACTERS,
    SPECIAL_CHARACTERS,
];

/// A temporary password issued to a freshly provisioned account.
///
/// The value is never printed through `Debug`, so it can travel inside
/// structs that end up in log lines.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Credential(***)")
    }
}

/// Every character a credential may contain, in class order.
pub fn credential_alphabet() -> Vec<char> {
    CHARACTER_CLASSES.iter().flat_map(|class| class.chars()).collect()
}

/// True when `candidate` has at least one character of every class and
/// nothing outside the alphabet.
pub fn satisfies_policy(candidate: &str) -> bool {
    let covers_every_class = CHARACTER_CLASSES
        .iter()
        .all(|class| candidate.chars().any(|c| class.contains(c)));
    let closed = candidate
        .chars()
        .all(|c| CHARACTER_CLASSES.iter().any(|class| class.contains(c)));

    covers_every_class && closed && candidate.chars().count() >= MIN_CREDENTIAL_LENGTH
}

/// Draws whole candidates uniformly from the alphabet until one covers
/// every character class, giving up after `MAX_GENERATION_ATTEMPTS`.
pub fn generate_credential_with<R: Rng + ?Sized>(rng: &mut R, length: usize) -> Result<Credential, CredentialError> {
    if length < MIN_CREDENTIAL_LENGTH {
        return Err(CredentialError::InvalidLength { requested: length, minimum: MIN_CREDENTIAL_LENGTH });
    }

    let alphabet = credential_alphabet();

    for _ in 0..MAX_GENERATION_ATTEMPTS {
        let candidate: String = (0..length)
            .filter_map(|_| alphabet.choose(&mut *rng).copied())
            .collect();

        if satisfies_policy(&candidate) {
            return Ok(Credential(candidate));
        }
    }

    Err(CredentialError::AttemptsExhausted { attempts: MAX_GENERATION_ATTEMPTS, length })
}

/// Generates a credential of `length` characters from the thread-local CSPRNG.
pub fn generate_credential(length: usize) -> Result<Credential, CredentialError> {
    generate_credential_with(&mut rand::thread_rng(), length)
}

/// Generates a Cognito-compliant temporary password of the default length.
pub fn generate_temporary_password() -> Result<Credential, CredentialError> {
    generate_credential(DEFAULT_CREDENTIAL_LENGTH)
}
