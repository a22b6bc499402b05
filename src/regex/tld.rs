//! Known top-level domains
//!
//! A label is known when it appears in the country-code or generic TLD
//! tables below.

use once_cell::sync::Lazy;
use std::collections::HashSet;

/// ISO 3166 country-code TLDs
const COUNTRY_CODE_TLDS: &[&str] = &[
    "ac", "ad", "ae", "af", "ag", "ai", "al", "am", "ao", "aq", "ar", "as", "at", "au", "aw", "ax",
    "az", "ba", "bb", "bd", "be", "bf", "bg", "bh", "bi", "bj", "bm", "bn", "bo", "br", "bs", "bt",
    "bw", "by", "bz", "ca", "cc", "cd", "cf", "cg", "ch", "ci", "ck", "cl", "cm", "cn", "co", "cr",
    "cu", "cv", "cw", "cx", "cy", "cz", "de", "dj", "dk", "dm", "do", "dz", "ec", "ee", "eg", "er",
    "es", "et", "eu", "fi", "fj", "fk", "fm", "fo", "fr", "ga", "gb", "gd", "ge", "gf", "gg", "gh",
    "gi", "gl", "gm", "gn", "gp", "gq", "gr", "gs", "gt", "gu", "gw", "gy", "hk", "hm", "hn", "hr",
    "ht", "hu", "id", "ie", "il", "im", "in", "io", "iq", "ir", "is", "it", "je", "jm", "jo", "jp",
    "ke", "kg", "kh", "ki", "km", "kn", "kp", "kr", "kw", "ky", "kz", "la", "lb", "lc", "li", "lk",
    "lr", "ls", "lt", "lu", "lv", "ly", "ma", "mc", "md", "me", "mg", "mh", "mk", "ml", "mm", "mn",
    "mo", "mp", "mq", "mr", "ms", "mt", "mu", "mv", "mw", "mx", "my", "mz", "na", "nc", "ne", "nf",
    "ng", "ni", "nl", "no", "np", "nr", "nu", "nz", "om", "pa", "pe", "pf", "pg", "ph", "pk", "pl",
    "pm", "pn", "pr", "ps", "pt", "pw", "py", "qa", "re", "ro", "rs", "ru", "rw", "sa", "sb", "sc",
    "sd", "se", "sg", "sh", "si", "sk", "sl", "sm", "sn", "so", "sr", "ss", "st", "su", "sv", "sx",
    "sy", "sz", "tc", "td", "tf", "tg", "th", "tj", "tk", "tl", "tm", "tn", "to", "tr", "tt", "tv",
    "tw", "tz", "ua", "ug", "uk", "us", "uy", "uz", "va", "vc", "ve", "vg", "vi", "vn", "vu", "wf",
    "ws", "ye", "yt", "za", "zm", "zw",
];

const GENERIC_TLDS: &[&str] = &[
    "aero", "app", "art", "asia", "biz", "blog", "cat", "cloud", "club", "coop", "com", "design",
    "dev", "edu", "email", "eus", "gal", "gay", "gov", "info", "int", "io", "jobs", "live", "mil",
    "mobi", "museum", "name", "net", "news", "ninja", "online", "org", "page", "post", "pro",
    "shop", "site", "space", "store", "tech", "tel", "travel", "tv", "website", "wiki", "xxx",
    "xyz", "zone", "agency", "academy", "bank", "bar", "berlin", "bio", "blue", "book", "center",
    "city", "codes", "company", "digital", "directory", "earth", "education", "energy", "events",
    "expert", "finance", "fun", "global", "gmbh", "green", "group", "guide", "host", "house",
    "icu", "inc", "ink", "international", "kim", "land", "law", "life", "link", "llc", "london",
    "love", "ltd", "media", "moe", "network", "nyc", "one", "onion", "paris", "photo", "photos",
    "pics", "plus", "press", "red", "rocks", "run", "services", "social", "software", "solutions",
    "studio", "style", "systems", "team", "today", "tokyo", "tools", "top", "town", "video",
    "vip", "work", "works", "world",
];

static TLD_SET: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    COUNTRY_CODE_TLDS
        .iter()
        .chain(GENERIC_TLDS)
        .copied()
        .collect()
});

/// Check whether `label` is a recognized top-level domain (case-insensitive)
pub fn is_known_tld(label: &str) -> bool {
    let lower = label.to_ascii_lowercase();
    TLD_SET.contains(lower.as_str())
}

/// Check whether the last label of `domain` is a recognized top-level domain
pub fn has_known_tld(domain: &str) -> bool {
    domain
        .rsplit('.')
        .next()
        .is_some_and(|last| !last.is_empty() && is_known_tld(last))
}
