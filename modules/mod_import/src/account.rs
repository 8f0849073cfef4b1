use std::collections::HashSet;

use loom_traits::{AccountImport, AccountRecord};
use tracing::debug;

/// Minimum pipe-delimited fields for a line to qualify as an account record.
const MIN_FIELDS: usize = 6;

/// Parses the pipe-delimited "via" account format:
/// `UID|username|2FA|cookies|token|email||date`.
///
/// Lines with fewer than six fields, or with an empty UID, are counted as
/// invalid and excluded from the result. Both the 7-field layout (date at
/// index 6) and the long 8-field layout (blank column at index 6, date at
/// index 7) are accepted. Records are never deduplicated; repeats of an
/// earlier UID are only counted.
pub fn parse_account_file(content: &str) -> AccountImport {
    let mut import = AccountImport::default();
    let mut seen_uids: HashSet<String> = HashSet::new();

    for line in crate::import_lines(content) {
        import.total_lines += 1;

        let fields: Vec<&str> = line.split('|').collect();
        if fields.len() < MIN_FIELDS {
            debug!(fields = fields.len(), "account line has too few fields");
            import.invalid_count += 1;
            continue;
        }

        let field = |idx: usize| fields.get(idx).map_or("", |f| f.trim());

        let uid = field(0);
        if uid.is_empty() {
            debug!("account line has empty uid");
            import.invalid_count += 1;
            continue;
        }

        // The long layout keeps its conventional blank column at index 6
        // and carries the date at index 7.
        let imported_at = if fields.len() >= 8 { field(7) } else { field(6) };

        let record = AccountRecord {
            uid: uid.to_string(),
            username: field(1).to_string(),
            two_factor_key: field(2).to_string(),
            cookies: field(3).to_string(),
            token: field(4).to_string(),
            email: field(5).to_string(),
            imported_at: imported_at.to_string(),
        };

        if !seen_uids.insert(record.uid.clone()) {
            import.duplicate_count += 1;
        }
        import.records.push(record);
    }

    import.valid_count = import.records.len();
    import
}
