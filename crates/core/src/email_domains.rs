//! Email domain classification for the signup funnel.
//!
//! Students must sign up with an academic address, matched against a static
//! allow-list of academic domain suffixes. Startups must sign up with a work
//! address, checked against a static deny-list of personal/free/disposable
//! providers. The two checks deliberately default in opposite directions:
//! an unknown domain is rejected for students but accepted for startups.
//! Both are purely syntactic; no network lookup is performed.

// ---------------------------------------------------------------------------
// Academic domain allow-list
// ---------------------------------------------------------------------------

/// Academic domain suffixes accepted for student signups.
///
/// An email domain is accepted if it ends with one of these suffixes, or
/// equals the suffix with the leading dot stripped. The list covers the
/// generic `.edu` space plus country-specific academic registries.
pub const ACADEMIC_DOMAIN_SUFFIXES: &[&str] = &[
    // Generic
    ".edu",
    // United Kingdom / Ireland
    ".ac.uk",
    ".ac.ie",
    // Europe
    ".ac.at",
    ".ac.be",
    ".edu.es",
    ".edu.gr",
    ".edu.it",
    ".edu.pl",
    ".edu.pt",
    ".edu.ro",
    ".edu.rs",
    ".edu.tr",
    ".edu.ua",
    ".uni-hannover.de",
    ".uni-muenchen.de",
    ".ethz.ch",
    ".epfl.ch",
    // Asia-Pacific
    ".ac.jp",
    ".ac.kr",
    ".ac.th",
    ".ac.in",
    ".ac.id",
    ".ac.nz",
    ".edu.au",
    ".edu.cn",
    ".edu.hk",
    ".edu.in",
    ".edu.my",
    ".edu.ph",
    ".edu.pk",
    ".edu.sg",
    ".edu.tw",
    ".edu.vn",
    // Middle East / Africa
    ".ac.il",
    ".ac.ke",
    ".ac.za",
    ".edu.eg",
    ".edu.lb",
    ".edu.ng",
    ".edu.sa",
    // Americas
    ".edu.ar",
    ".edu.br",
    ".edu.co",
    ".edu.mx",
    ".edu.pe",
    ".edu.uy",
];

// ---------------------------------------------------------------------------
// Personal provider deny-list
// ---------------------------------------------------------------------------

/// Personal, free, and disposable email providers rejected for startup
/// signups. Exact-match on the full domain.
pub const PERSONAL_EMAIL_DOMAINS: &[&str] = &[
    // Major webmail
    "gmail.com",
    "googlemail.com",
    "yahoo.com",
    "yahoo.co.uk",
    "yahoo.co.in",
    "yahoo.fr",
    "yahoo.de",
    "ymail.com",
    "hotmail.com",
    "hotmail.co.uk",
    "hotmail.fr",
    "outlook.com",
    "outlook.co.uk",
    "live.com",
    "live.co.uk",
    "msn.com",
    "aol.com",
    "icloud.com",
    "me.com",
    "mac.com",
    // Regional webmail
    "mail.ru",
    "bk.ru",
    "inbox.ru",
    "list.ru",
    "yandex.ru",
    "yandex.com",
    "gmx.com",
    "gmx.de",
    "gmx.net",
    "web.de",
    "t-online.de",
    "freenet.de",
    "orange.fr",
    "wanadoo.fr",
    "free.fr",
    "laposte.net",
    "libero.it",
    "virgilio.it",
    "qq.com",
    "163.com",
    "126.com",
    "sina.com",
    "naver.com",
    "daum.net",
    "hanmail.net",
    "rediffmail.com",
    "zoho.com",
    "protonmail.com",
    "proton.me",
    "tutanota.com",
    "fastmail.com",
    "hushmail.com",
    // ISP webmail
    "comcast.net",
    "verizon.net",
    "att.net",
    "sbcglobal.net",
    "bellsouth.net",
    "cox.net",
    "charter.net",
    "btinternet.com",
    "sky.com",
    "talktalk.net",
    "virginmedia.com",
    "shaw.ca",
    "rogers.com",
    "sympatico.ca",
    "bigpond.com",
    "optusnet.com.au",
    // Disposable
    "mailinator.com",
    "guerrillamail.com",
    "10minutemail.com",
    "tempmail.com",
    "temp-mail.org",
    "throwawaymail.com",
    "trashmail.com",
    "yopmail.com",
    "getnada.com",
    "dispostable.com",
    "maildrop.cc",
    "sharklasers.com",
];

// ---------------------------------------------------------------------------
// Validators
// ---------------------------------------------------------------------------

/// Extract the domain part of an email address: the substring after the
/// last `@`, lower-cased. Returns `None` if there is no `@` or the domain
/// is empty.
fn domain_of(email: &str) -> Option<String> {
    let (_, domain) = email.rsplit_once('@')?;
    if domain.is_empty() {
        return None;
    }
    Some(domain.to_ascii_lowercase())
}

/// Whether `email` belongs to a known academic domain.
///
/// Default-reject: a domain not matching any allow-listed suffix is not
/// acceptable, even if it looks institutional.
pub fn is_acceptable_student_email(email: &str) -> bool {
    let Some(domain) = domain_of(email) else {
        return false;
    };
    ACADEMIC_DOMAIN_SUFFIXES
        .iter()
        .any(|suffix| domain.ends_with(suffix) || domain == suffix[1..])
}

/// Whether `email` looks like a work address rather than a personal one.
///
/// Default-accept: any domain not on the personal-provider deny-list passes.
/// Only an unextractable domain is rejected outright.
pub fn is_acceptable_startup_email(email: &str) -> bool {
    let Some(domain) = domain_of(email) else {
        return false;
    };
    !PERSONAL_EMAIL_DOMAINS.contains(&domain.as_str())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
