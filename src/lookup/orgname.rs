//! AS-organization display-name shortening.
//!
//! Lookup services report the network owner as a raw AS string such as
//! `"AS906 DMIT Cloud Services, Inc."`. For display purposes the AS
//! number and the corporate boilerplate are noise; this module derives
//! the short name (`"DMIT Cloud Services"`).

/// Corporate suffixes stripped from names that carry no comma.
const CORPORATE_SUFFIXES: &[&str] = &[
    " Inc.",
    " LLC",
    " Ltd.",
    " Corp.",
    " Corporation",
    " Services",
];

/// Derives a short display name from a raw AS-organization string.
///
/// Steps, in order:
///
/// 1. Trim surrounding spaces and tabs.
/// 2. Drop a leading `AS…` token (everything up to and including the
///    first space, when the string starts with `AS`).
/// 3. Truncate at the first comma, keeping the trimmed prefix; an
///    empty prefix cancels the truncation.
/// 4. When no comma truncation happened, strip the first matching
///    corporate suffix. A comma already carried the boilerplate away,
///    and a name like `"DMIT Cloud Services, Inc."` must keep its
///    trailing `"Services"`.
///
/// Never fails: if the pipeline empties the string at the end, the
/// original `raw` input is returned unchanged.
#[must_use]
pub fn short_org_name(raw: &str) -> String {
    let mut name = raw.trim_matches([' ', '\t']);

    if name.starts_with("AS") {
        if let Some(pos) = name.find(' ') {
            name = name[pos + 1..].trim_start_matches([' ', '\t']);
        }
    }

    let mut truncated_at_comma = false;
    if let Some(pos) = name.find(',') {
        let prefix = name[..pos].trim_end();
        if !prefix.is_empty() {
            name = prefix;
            truncated_at_comma = true;
        }
    }

    let mut name = name.to_string();
    if !truncated_at_comma {
        for suffix in CORPORATE_SUFFIXES {
            if let Some(stripped) = name.strip_suffix(suffix) {
                name = stripped.trim_end().to_string();
                break;
            }
        }
    }

    if name.is_empty() {
        raw.to_string()
    } else {
        name
    }
}
