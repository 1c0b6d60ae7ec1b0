//! Admin authentication.
//!
//! The admin password is compared against a configured key. A successful
//! login issues a signed, expiring session token which is persisted next to
//! the data so later admin commands do not need the password again.

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use hmac::{Hmac, Mac};
use sha2::Sha256;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};
use thiserror::Error;
use tracing::{debug, warn};

/// Default session lifetime: 24 hours.
pub const SESSION_TTL_SECS: u64 = 60 * 60 * 24;

type HmacSha256 = Hmac<Sha256>;

/// Authentication failures.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Admin key is not configured (set TERMFOLIO_ADMIN_KEY)")]
    NotConfigured,

    #[error("Invalid password")]
    InvalidPassword,

    #[error("Signing key rejected")]
    InvalidKey,

    #[error("Session file error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Capability answering whether admin-only operations may run.
pub trait Authorizer {
    fn is_authorized(&self) -> bool;
}

/// Grants every request.
#[derive(Debug, Clone, Copy, Default)]
pub struct Allowed;

impl Authorizer for Allowed {
    fn is_authorized(&self) -> bool {
        true
    }
}

/// Refuses every request.
#[derive(Debug, Clone, Copy, Default)]
pub struct Denied;

impl Authorizer for Denied {
    fn is_authorized(&self) -> bool {
        false
    }
}

/// Password check against the configured admin key.
#[derive(Debug, Clone)]
pub struct AdminGate {
    admin_key: Option<String>,
}

impl AdminGate {
    /// Creates gate; an empty key counts as not configured.
    pub fn new(admin_key: Option<String>) -> Self {
        Self {
            admin_key: admin_key.filter(|k| !k.is_empty()),
        }
    }

    pub fn is_configured(&self) -> bool {
        self.admin_key.is_some()
    }

    /// Checks a password.
    ///
    /// # Errors
    ///
    /// Returns `NotConfigured` without an admin key and `InvalidPassword`
    /// on mismatch.
    pub fn login(&self, password: &str) -> Result<(), AuthError> {
        let key = self.admin_key.as_deref().ok_or(AuthError::NotConfigured)?;
        // Both sides are keyed with the admin key so the comparison runs
        // over equal-length tags in constant time.
        let expected = keyed_mac(key.as_bytes(), key.as_bytes())?
            .finalize()
            .into_bytes();
        keyed_mac(key.as_bytes(), password.as_bytes())?
            .verify_slice(&expected)
            .map_err(|_| AuthError::InvalidPassword)
    }
}

/// One-shot authorization with a supplied password.
#[derive(Debug, Clone, Copy)]
pub struct Password<'a> {
    gate: &'a AdminGate,
    password: &'a str,
}

impl<'a> Password<'a> {
    pub fn new(gate: &'a AdminGate, password: &'a str) -> Self {
        Self { gate, password }
    }
}

impl Authorizer for Password<'_> {
    fn is_authorized(&self) -> bool {
        self.gate.login(self.password).is_ok()
    }
}

/// Signed session token `base64(expiry).base64(hmac)`.
pub struct SessionToken;

impl SessionToken {
    /// Issues a token valid until `now + ttl` (seconds since epoch).
    pub fn issue(secret: &str, now: u64, ttl: u64) -> Result<String, AuthError> {
        let payload = URL_SAFE_NO_PAD.encode(now.saturating_add(ttl).to_string());
        let tag = keyed_mac(secret.as_bytes(), payload.as_bytes())?
            .finalize()
            .into_bytes();
        Ok(format!("{}.{}", payload, URL_SAFE_NO_PAD.encode(tag)))
    }

    /// Checks signature and expiry.
    pub fn verify(token: &str, secret: &str, now: u64) -> bool {
        let Some((payload, signature)) = token.trim().split_once('.') else {
            return false;
        };
        let Ok(signature) = URL_SAFE_NO_PAD.decode(signature) else {
            return false;
        };

        let signed = keyed_mac(secret.as_bytes(), payload.as_bytes())
            .is_ok_and(|mac| mac.verify_slice(&signature).is_ok());
        if !signed {
            return false;
        }

        URL_SAFE_NO_PAD
            .decode(payload)
            .ok()
            .and_then(|bytes| String::from_utf8(bytes).ok())
            .and_then(|s| s.parse::<u64>().ok())
            .is_some_and(|expiry| now < expiry)
    }
}

/// Session token persisted in a file.
#[derive(Debug, Clone)]
pub struct SessionFile {
    path: PathBuf,
    secret: String,
}

impl SessionFile {
    pub fn new(path: impl Into<PathBuf>, secret: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            secret: secret.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Checks the password and writes a fresh session token.
    ///
    /// # Errors
    ///
    /// Returns gate errors, or an I/O error if the token cannot be written.
    pub fn login(&self, gate: &AdminGate, password: &str) -> Result<(), AuthError> {
        gate.login(password)?;

        let token = SessionToken::issue(&self.secret, unix_now(), SESSION_TTL_SECS)?;
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(|source| AuthError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        fs::write(&self.path, token).map_err(|source| AuthError::Io {
            path: self.path.clone(),
            source,
        })?;

        debug!(path = %self.path.display(), "Session started");
        Ok(())
    }

    /// Removes the session token. Returns whether one existed.
    pub fn logout(&self) -> Result<bool, AuthError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
            Err(source) => Err(AuthError::Io {
                path: self.path.clone(),
                source,
            }),
        }
    }
}

impl Authorizer for SessionFile {
    fn is_authorized(&self) -> bool {
        let Ok(token) = fs::read_to_string(&self.path) else {
            return false;
        };
        let valid = SessionToken::verify(&token, &self.secret, unix_now());
        if !valid {
            warn!("Session token is invalid or expired; log in again");
        }
        valid
    }
}

/// Chooses the session signing secret, falling back to the admin key.
pub fn session_secret(explicit: Option<&str>, admin_key: Option<&str>) -> Option<String> {
    explicit
        .filter(|s| !s.is_empty())
        .or(admin_key.filter(|s| !s.is_empty()))
        .map(str::to_string)
}

/// Seconds since the Unix epoch.
pub fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

/// HMAC-SHA256 over `message`, ready to finalize or verify.
fn keyed_mac(key: &[u8], message: &[u8]) -> Result<HmacSha256, AuthError> {
    let mut mac = HmacSha256::new_from_slice(key).map_err(|_| AuthError::InvalidKey)?;
    mac.update(message);
    Ok(mac)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn to_hex(bytes: &[u8]) -> String {
        bytes.iter().map(|b| format!("{:02x}", b)).collect()
    }

    #[test]
    fn test_hmac_rfc4231_case_2() {
        // Arrange & Act
        let mac = keyed_mac(b"Jefe", b"what do ya want for nothing?")
            .expect("Any key length is accepted")
            .finalize()
            .into_bytes();

        // Assert
        assert_eq!(
            to_hex(&mac),
            "5bdcc146bf60754e6a042426089575c75a003f089d2739839dec58b964ec3843"
        );
    }

    #[test]
    fn test_gate_not_configured() {
        // Arrange
        let gate = AdminGate::new(Some(String::new()));

        // Act
        let result = gate.login("anything");

        // Assert
        assert!(matches!(result, Err(AuthError::NotConfigured)));
        assert!(!gate.is_configured());
    }

    #[test]
    fn test_gate_password_check() {
        // Arrange
        let gate = AdminGate::new(Some("s3cret".to_string()));

        // Act & Assert
        assert!(gate.login("s3cret").is_ok());
        assert!(matches!(gate.login("wrong"), Err(AuthError::InvalidPassword)));
        assert!(Password::new(&gate, "s3cret").is_authorized());
        assert!(!Password::new(&gate, "s3cre").is_authorized());
    }

    #[test]
    fn test_token_roundtrip() {
        // Arrange
        let token = SessionToken::issue("key", 1_000, 60).expect("Should issue token");

        // Act & Assert
        assert!(SessionToken::verify(&token, "key", 1_000));
        assert!(SessionToken::verify(&token, "key", 1_059));
        assert!(!SessionToken::verify(&token, "key", 1_060), "Expired");
        assert!(!SessionToken::verify(&token, "other", 1_000), "Wrong secret");
    }

    #[test]
    fn test_token_tampered_payload() {
        // Arrange
        let token = SessionToken::issue("key", 1_000, 60).expect("Should issue token");
        let (_, signature) = token.split_once('.').expect("Token has two parts");
        let forged_payload = URL_SAFE_NO_PAD.encode("99999999999");

        // Act
        let forged = format!("{}.{}", forged_payload, signature);

        // Assert
        assert!(!SessionToken::verify(&forged, "key", 1_000));
        assert!(!SessionToken::verify("garbage", "key", 1_000));
        assert!(!SessionToken::verify("a.!!!", "key", 1_000));
    }

    #[test]
    fn test_token_truncated_signature() {
        // Arrange
        let token = SessionToken::issue("key", 1_000, 60).expect("Should issue token");
        let (payload, signature) = token.split_once('.').expect("Token has two parts");
        let tag = URL_SAFE_NO_PAD.decode(signature).expect("Valid base64");

        // Act
        let truncated = format!("{}.{}", payload, URL_SAFE_NO_PAD.encode(&tag[..16]));

        // Assert
        assert!(!SessionToken::verify(&truncated, "key", 1_000));
    }

    #[test]
    fn test_gate_password_prefix_rejected() {
        // Arrange
        let gate = AdminGate::new(Some("a-rather-long-admin-key".to_string()));

        // Act & Assert
        assert!(matches!(gate.login("a-rather"), Err(AuthError::InvalidPassword)));
        assert!(matches!(gate.login(""), Err(AuthError::InvalidPassword)));
        assert!(gate.login("a-rather-long-admin-key").is_ok());
    }

    #[test]
    fn test_session_file_login_logout() {
        // Arrange
        let dir = tempfile::tempdir().expect("Should create temp directory");
        let gate = AdminGate::new(Some("pw".to_string()));
        let session = SessionFile::new(dir.path().join(".session"), "secret");

        // Act
        let before = session.is_authorized();
        session.login(&gate, "pw").expect("Should log in");
        let during = session.is_authorized();
        let removed = session.logout().expect("Should log out");
        let after = session.is_authorized();

        // Assert
        assert!(!before);
        assert!(during);
        assert!(removed);
        assert!(!after);
        assert!(!session.logout().expect("Second logout is a no-op"));
    }

    #[test]
    fn test_session_file_wrong_password_writes_nothing() {
        // Arrange
        let dir = tempfile::tempdir().expect("Should create temp directory");
        let gate = AdminGate::new(Some("pw".to_string()));
        let session = SessionFile::new(dir.path().join(".session"), "secret");

        // Act
        let result = session.login(&gate, "nope");

        // Assert
        assert!(matches!(result, Err(AuthError::InvalidPassword)));
        assert!(!session.path().exists());
    }

    #[test]
    fn test_session_secret_fallback() {
        // Arrange & Act & Assert
        assert_eq!(session_secret(Some("s"), Some("k")), Some("s".to_string()));
        assert_eq!(session_secret(Some(""), Some("k")), Some("k".to_string()));
        assert_eq!(session_secret(None, None), None);
    }

    #[test]
    fn test_static_authorizers() {
        // Arrange & Act & Assert
        assert!(Allowed.is_authorized());
        assert!(!Denied.is_authorized());
    }
}
