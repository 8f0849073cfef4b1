use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Supplies the random choice index for template expansion.
///
/// The production implementation draws from a real RNG; tests substitute a
/// deterministic source to pin down which alternative gets selected.
/// `len` is always at least 1.
pub trait VariationSource {
    fn next_index(&mut self, len: usize) -> usize;
}

/// One automation identity imported from a pipe-delimited "via" line.
///
/// Fields are carried verbatim (trimmed) from the line; optional fields that
/// were absent in the input are empty strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountRecord {
    pub uid: String,
    pub username: String,
    pub two_factor_key: String,
    pub cookies: String,
    pub token: String,
    pub email: String,
    pub imported_at: String,
}

/// How an imported account authenticates, in order of preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AuthMethod {
    Cookies,
    Token,
    Email,
    None,
}

/// A single named cookie extracted from an account's raw cookie field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cookie {
    pub name: String,
    pub value: String,
}

impl AccountRecord {
    /// Classifies the record by its strongest populated credential:
    /// cookies, then token, then email.
    pub fn auth_method(&self) -> AuthMethod {
        if !self.cookies.trim().is_empty() {
            AuthMethod::Cookies
        } else if !self.token.trim().is_empty() {
            AuthMethod::Token
        } else if !self.email.trim().is_empty() {
            AuthMethod::Email
        } else {
            AuthMethod::None
        }
    }

    /// Parses the raw cookie field into structured pairs.
    ///
    /// Accepts the `name=value;name=value` header form and, when the field
    /// starts with `[`, a JSON array of `{"name": ..., "value": ...}`
    /// objects. Malformed pairs are skipped, never an error.
    pub fn parsed_cookies(&self) -> Vec<Cookie> {
        let raw = self.cookies.trim();
        if raw.is_empty() {
            return Vec::new();
        }

        if raw.starts_with('[') {
            if let Ok(list) = serde_json::from_str::<Vec<Cookie>>(raw) {
                return list;
            }
            // Malformed JSON falls through to the key=value form.
        }

        raw.split(';')
            .filter_map(|pair| {
                let (name, value) = pair.split_once('=')?;
                let name = name.trim();
                let value = value.trim();
                if name.is_empty() || value.is_empty() {
                    None
                } else {
                    Some(Cookie {
                        name: name.to_string(),
                        value: value.to_string(),
                    })
                }
            })
            .collect()
    }

    /// Parses the carried-through date field (`dd/mm/YYYY HH:MM`, with a
    /// date-only fallback). Returns `None` when absent or unparseable.
    pub fn imported_date(&self) -> Option<NaiveDateTime> {
        let raw = self.imported_at.trim();
        if raw.is_empty() {
            return None;
        }
        NaiveDateTime::parse_from_str(raw, "%d/%m/%Y %H:%M")
            .ok()
            .or_else(|| {
                NaiveDate::parse_from_str(raw, "%d/%m/%Y")
                    .ok()
                    .and_then(|d| d.and_hms_opt(0, 0, 0))
            })
    }
}

/// One proxy endpoint imported from a colon-delimited line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProxyRecord {
    pub scheme: String,
    pub host: String,
    pub port: u16,
    pub username: Option<String>,
    pub password: Option<String>,
}

impl ProxyRecord {
    /// The bare `host:port` pair, the identity used for duplicate counting.
    pub fn endpoint(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// The full `scheme://[user:pass@]host:port` URL form.
    pub fn url(&self) -> String {
        match (&self.username, &self.password) {
            (Some(user), Some(pass)) => format!(
                "{}://{}:{}@{}:{}",
                self.scheme, user, pass, self.host, self.port
            ),
            (Some(user), None) => {
                format!("{}://{}@{}:{}", self.scheme, user, self.host, self.port)
            }
            _ => format!("{}://{}:{}", self.scheme, self.host, self.port),
        }
    }
}

/// Outcome of parsing one account file: the surviving records plus the
/// counts the import UI reports. Invalid lines are counted, never returned.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AccountImport {
    pub records: Vec<AccountRecord>,
    pub total_lines: usize,
    pub valid_count: usize,
    pub invalid_count: usize,
    pub duplicate_count: usize,
}

/// Outcome of parsing one proxy file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProxyImport {
    pub records: Vec<ProxyRecord>,
    pub total_lines: usize,
    pub valid_count: usize,
    pub invalid_count: usize,
    pub duplicate_count: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(cookies: &str, token: &str, email: &str) -> AccountRecord {
        AccountRecord {
            uid: "1".to_string(),
            username: "user".to_string(),
            two_factor_key: String::new(),
            cookies: cookies.to_string(),
            token: token.to_string(),
            email: email.to_string(),
            imported_at: String::new(),
        }
    }

    #[test]
    fn auth_method_prefers_cookies_over_token_over_email() {
        assert_eq!(record("c_user=1", "tok", "a@b.c").auth_method(), AuthMethod::Cookies);
        assert_eq!(record("", "tok", "a@b.c").auth_method(), AuthMethod::Token);
        assert_eq!(record("", "", "a@b.c").auth_method(), AuthMethod::Email);
        assert_eq!(record("", "", "").auth_method(), AuthMethod::None);
    }

    #[test]
    fn cookies_parse_from_header_form() {
        let rec = record("c_user=123; xs=abc ;fr=xyz;bad;=v;k=", "", "");
        let cookies = rec.parsed_cookies();
        assert_eq!(
            cookies,
            vec![
                Cookie { name: "c_user".into(), value: "123".into() },
                Cookie { name: "xs".into(), value: "abc".into() },
                Cookie { name: "fr".into(), value: "xyz".into() },
            ]
        );
    }

    #[test]
    fn cookies_parse_from_json_form() {
        let rec = record(r#"[{"name":"c_user","value":"123","domain":".example.com"}]"#, "", "");
        let cookies = rec.parsed_cookies();
        assert_eq!(cookies.len(), 1);
        assert_eq!(cookies[0].name, "c_user");
        assert_eq!(cookies[0].value, "123");
    }

    #[test]
    fn empty_cookie_field_yields_no_cookies() {
        assert!(record("", "tok", "").parsed_cookies().is_empty());
    }

    #[test]
    fn imported_date_parses_datetime_and_date_forms() {
        let mut rec = record("", "", "");
        rec.imported_at = "23/10/2025 02:02".to_string();
        let parsed = rec.imported_date().unwrap();
        assert_eq!(parsed.format("%Y-%m-%d %H:%M").to_string(), "2025-10-23 02:02");

        rec.imported_at = "01/01/2025".to_string();
        assert!(rec.imported_date().is_some());

        rec.imported_at = "not-a-date".to_string();
        assert!(rec.imported_date().is_none());

        rec.imported_at = String::new();
        assert!(rec.imported_date().is_none());
    }

    #[test]
    fn proxy_url_includes_auth_when_present() {
        let mut proxy = ProxyRecord {
            scheme: "socks5".to_string(),
            host: "1.2.3.4".to_string(),
            port: 1080,
            username: Some("u".to_string()),
            password: Some("p".to_string()),
        };
        assert_eq!(proxy.url(), "socks5://u:p@1.2.3.4:1080");
        assert_eq!(proxy.endpoint(), "1.2.3.4:1080");

        proxy.username = None;
        proxy.password = None;
        assert_eq!(proxy.url(), "socks5://1.2.3.4:1080");
    }
}
