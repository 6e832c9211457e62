//! Synthetic data behind example synthesis. Values are fabricated with
//! `rand`; only their shape is stable, never the exact output.

use rand::Rng;
use rand::distributions::Alphanumeric;
use rand::seq::SliceRandom;

const FIRST_NAMES: &[&str] = &[
    "Ava", "Liam", "Maya", "Noah", "Ella", "Omar", "Ines", "Hugo", "Nora", "Felix",
];
const LAST_NAMES: &[&str] = &[
    "Carter", "Nguyen", "Silva", "Haas", "Okafor", "Larsen", "Moreau", "Tanaka", "Weber", "Quinn",
];
const DOMAINS: &[&str] = &["example.com", "example.org", "mail.test", "acme.dev"];
const STREET_NAMES: &[&str] = &[
    "Maple", "Cedar", "Harbor", "Willow", "Juniper", "Birch", "Summit", "Lakeview",
];
const STREET_KINDS: &[&str] = &["Street", "Avenue", "Lane", "Road", "Drive"];
const CITIES: &[&str] = &[
    "Springfield",
    "Riverton",
    "Fairview",
    "Brookhaven",
    "Ashford",
    "Milltown",
    "Clearwater",
];
const COUNTRIES: &[&str] = &[
    "United States",
    "Canada",
    "Germany",
    "Japan",
    "Brazil",
    "Australia",
    "Netherlands",
];
const COMPANY_STEMS: &[&str] = &[
    "Acme", "Globex", "Initech", "Umbra", "Vertex", "Northwind", "Hooli",
];
const COMPANY_SUFFIXES: &[&str] = &["Inc", "Labs", "Group", "Systems", "Co"];
const JOB_TITLES: &[&str] = &[
    "Software Engineer",
    "Product Manager",
    "Data Analyst",
    "Account Executive",
    "Designer",
    "Operations Lead",
];
const LOREM: &[&str] = &[
    "lorem", "ipsum", "dolor", "sit", "amet", "consectetur", "adipiscing", "elit", "sed", "do",
    "eiusmod", "tempor", "incididunt", "labore", "magna", "aliqua",
];

fn pick<'a>(rng: &mut impl Rng, values: &'a [&'a str]) -> &'a str {
    values.choose(rng).copied().unwrap_or("")
}

pub fn first_name() -> String {
    let mut rng = rand::thread_rng();
    pick(&mut rng, FIRST_NAMES).to_string()
}

pub fn last_name() -> String {
    let mut rng = rand::thread_rng();
    pick(&mut rng, LAST_NAMES).to_string()
}

pub fn full_name() -> String {
    let mut rng = rand::thread_rng();
    format!("{} {}", pick(&mut rng, FIRST_NAMES), pick(&mut rng, LAST_NAMES))
}

pub fn username() -> String {
    let mut rng = rand::thread_rng();
    format!(
        "{}{}",
        pick(&mut rng, FIRST_NAMES).to_lowercase(),
        rng.gen_range(1..1000)
    )
}

pub fn email() -> String {
    let mut rng = rand::thread_rng();
    format!(
        "{}.{}@{}",
        pick(&mut rng, FIRST_NAMES).to_lowercase(),
        pick(&mut rng, LAST_NAMES).to_lowercase(),
        pick(&mut rng, DOMAINS)
    )
}

pub fn phone() -> String {
    let mut rng = rand::thread_rng();
    format!(
        "+1-{:03}-{:03}-{:04}",
        rng.gen_range(200..1000),
        rng.gen_range(200..1000),
        rng.gen_range(0..10000)
    )
}

pub fn street_address() -> String {
    let mut rng = rand::thread_rng();
    format!(
        "{} {} {}",
        rng.gen_range(1..2000),
        pick(&mut rng, STREET_NAMES),
        pick(&mut rng, STREET_KINDS)
    )
}

pub fn city() -> String {
    let mut rng = rand::thread_rng();
    pick(&mut rng, CITIES).to_string()
}

pub fn country() -> String {
    let mut rng = rand::thread_rng();
    pick(&mut rng, COUNTRIES).to_string()
}

pub fn zip_code() -> String {
    let mut rng = rand::thread_rng();
    format!("{:05}", rng.gen_range(10000..100000))
}

pub fn company() -> String {
    let mut rng = rand::thread_rng();
    format!(
        "{} {}",
        pick(&mut rng, COMPANY_STEMS),
        pick(&mut rng, COMPANY_SUFFIXES)
    )
}

pub fn job_title() -> String {
    let mut rng = rand::thread_rng();
    pick(&mut rng, JOB_TITLES).to_string()
}

pub fn word() -> String {
    let mut rng = rand::thread_rng();
    pick(&mut rng, LOREM).to_string()
}

pub fn sentence() -> String {
    let mut rng = rand::thread_rng();
    let count = rng.gen_range(8..=13);
    let words: Vec<&str> = (0..count).map(|_| pick(&mut rng, LOREM)).collect();
    let mut text = words.join(" ");
    if let Some(first) = text.get_mut(0..1) {
        first.make_ascii_uppercase();
    }
    text.push('.');
    text
}

pub fn url() -> String {
    let mut rng = rand::thread_rng();
    format!("https://{}/{}", pick(&mut rng, DOMAINS), word())
}

pub fn image_url() -> String {
    let mut rng = rand::thread_rng();
    format!(
        "https://{}/images/{}.png",
        pick(&mut rng, DOMAINS),
        rng.gen_range(1..10000)
    )
}

pub fn password() -> String {
    let rng = rand::thread_rng();
    rng.sample_iter(&Alphanumeric)
        .take(14)
        .map(char::from)
        .collect()
}

pub fn token() -> String {
    let mut rng = rand::thread_rng();
    (0..32)
        .map(|_| char::from_digit(rng.gen_range(0..16), 16).unwrap_or('0'))
        .collect()
}

pub fn uuid() -> String {
    let mut rng = rand::thread_rng();
    let mut bytes = [0u8; 16];
    rng.fill(&mut bytes[..]);
    // RFC 4122 version and variant bits.
    bytes[6] = (bytes[6] & 0x0f) | 0x40;
    bytes[8] = (bytes[8] & 0x3f) | 0x80;
    let hex: String = bytes.iter().map(|b| format!("{b:02x}")).collect();
    format!(
        "{}-{}-{}-{}-{}",
        &hex[0..8],
        &hex[8..12],
        &hex[12..16],
        &hex[16..20],
        &hex[20..32]
    )
}

pub fn ipv4() -> String {
    let mut rng = rand::thread_rng();
    format!(
        "{}.{}.{}.{}",
        rng.gen_range(1..255),
        rng.gen_range(0..256),
        rng.gen_range(0..256),
        rng.gen_range(1..255)
    )
}

pub fn ipv6() -> String {
    let mut rng = rand::thread_rng();
    let groups: Vec<String> = (0..8)
        .map(|_| format!("{:x}", rng.gen_range(0u32..0x10000)))
        .collect();
    groups.join(":")
}

pub fn date() -> String {
    let mut rng = rand::thread_rng();
    format!(
        "{:04}-{:02}-{:02}",
        rng.gen_range(2000..=2024),
        rng.gen_range(1..=12),
        rng.gen_range(1..=28)
    )
}

pub fn date_time() -> String {
    let mut rng = rand::thread_rng();
    format!(
        "{}T{:02}:{:02}:{:02}Z",
        date(),
        rng.gen_range(0..24),
        rng.gen_range(0..60),
        rng.gen_range(0..60)
    )
}

pub fn boolean() -> bool {
    rand::thread_rng().gen_bool(0.5)
}

pub fn integer_in(lo: i64, hi: i64) -> i64 {
    rand::thread_rng().gen_range(lo..=hi)
}

/// An integer in the closed `[min, max]` range given as schema bounds.
/// When the rounded range collapses (including `min == max`), the lower
/// bound wins, so exact bounds synthesize exactly.
pub fn integer_between(min: f64, max: f64) -> i64 {
    let lo = min.ceil() as i64;
    let hi = max.floor() as i64;
    if hi <= lo {
        return lo;
    }
    rand::thread_rng().gen_range(lo..=hi)
}

/// A price-like float between 1 and 1000 with two decimals.
pub fn price() -> f64 {
    let cents = rand::thread_rng().gen_range(100..=100_000);
    f64::from(cents) / 100.0
}

type Generator = fn() -> String;

/// Ordered (substring set, generator) pairs; the first entry with a match
/// wins. `name` is handled ahead of the table because it sub-dispatches on
/// the kind of name.
static HEURISTICS: &[(&[&str], Generator)] = &[
    (&["email"], email),
    (&["phone", "mobile"], phone),
    (&["address", "street"], street_address),
    (&["city"], city),
    (&["country"], country),
    (&["zip", "postal"], zip_code),
    (&["company"], company),
    (&["job", "position"], job_title),
    (&["description", "bio"], sentence),
    (&["comment", "note"], sentence),
    (&["url", "link"], url),
    (&["avatar", "image"], image_url),
    (&["password"], password),
    (&["token", "key"], token),
    (&["id"], uuid),
];

/// Match a property name against the heuristic table, case-insensitively.
/// `None` means no rule applies and the caller falls back to lorem text.
pub fn for_property_name(name: &str) -> Option<String> {
    let lower = name.to_lowercase();
    if lower.contains("name") {
        return Some(name_like(&lower));
    }
    for (needles, generate) in HEURISTICS {
        if needles.iter().any(|needle| lower.contains(needle)) {
            return Some(generate());
        }
    }
    None
}

fn name_like(lower: &str) -> String {
    if lower.contains("first") {
        first_name()
    } else if lower.contains("last") {
        last_name()
    } else if lower.contains("full") {
        full_name()
    } else if lower.contains("user") {
        username()
    } else {
        full_name()
    }
}
