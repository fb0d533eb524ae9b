//! Name ordering for summaries and sync lists.
//!
//! Names are compared the way an Italian reader expects: letters first
//! without regard to accents or case, then accents, then case, with
//! lowercase before uppercase.

use std::cmp::Ordering;

/// Compares two names in Italian collation order.
///
/// # Examples
///
/// ```
/// use riso_hours::calculation::compare_it;
/// use std::cmp::Ordering;
///
/// assert_eq!(compare_it("andrea", "Bruno"), Ordering::Less);
/// assert_eq!(compare_it("Niccolò", "Nicola"), Ordering::Less);
/// assert_eq!(compare_it("e", "è"), Ordering::Less);
/// ```
pub fn compare_it(a: &str, b: &str) -> Ordering {
    primary_key(a)
        .cmp(primary_key(b))
        .then_with(|| secondary_key(a).cmp(secondary_key(b)))
        .then_with(|| tertiary_key(a).cmp(tertiary_key(b)))
}

fn primary_key(s: &str) -> impl Iterator<Item = char> + '_ {
    s.chars().flat_map(char::to_lowercase).map(strip_accent)
}

fn secondary_key(s: &str) -> impl Iterator<Item = char> + '_ {
    s.chars().flat_map(char::to_lowercase)
}

// Lowercase sorts first, so flip the case bit before comparing.
fn tertiary_key(s: &str) -> impl Iterator<Item = (bool, char)> + '_ {
    s.chars().map(|c| (c.is_uppercase(), c))
}

fn strip_accent(c: char) -> char {
    match c {
        'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' | 'ā' | 'ă' | 'ą' => 'a',
        'ç' | 'ć' | 'č' => 'c',
        'ď' => 'd',
        'è' | 'é' | 'ê' | 'ë' | 'ē' | 'ė' | 'ę' | 'ě' => 'e',
        'ì' | 'í' | 'î' | 'ï' | 'ī' | 'į' => 'i',
        'ł' => 'l',
        'ñ' | 'ń' | 'ň' => 'n',
        'ò' | 'ó' | 'ô' | 'õ' | 'ö' | 'ø' | 'ō' | 'ő' => 'o',
        'ř' => 'r',
        'ś' | 'š' | 'ş' => 's',
        'ť' | 'ţ' => 't',
        'ù' | 'ú' | 'û' | 'ü' | 'ū' | 'ů' | 'ű' => 'u',
        'ý' | 'ÿ' => 'y',
        'ź' | 'ż' | 'ž' => 'z',
        other => other,
    }
}
