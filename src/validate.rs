//! Field masking and validation.
//!
//! Pure functions over raw keystroke strings: normalize to digits, apply the
//! field's punctuation mask, and classify the result. No I/O and no state, so
//! the whole module is testable without a terminal or a storage backend.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref PHONE_PATTERN: Regex = Regex::new(r"^\(\d{2}\) \d{4,5}-\d{4}$").unwrap();
    static ref POSTAL_CODE_PATTERN: Regex = Regex::new(r"^\d{5}-\d{3}$").unwrap();
}

/// Kind of form field, selecting which mask and validity rules apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Free text, no mask.
    Text,
    /// 11-digit national document number with two trailing check digits.
    TaxId,
    /// Phone number with a 2-digit area code and an 8- or 9-digit local part.
    Phone,
    /// 8-digit postal code.
    PostalCode,
}

impl FieldKind {
    /// Maximum number of digits the mask keeps. `None` means unmasked.
    fn digit_cap(self) -> Option<usize> {
        match self {
            FieldKind::Text => None,
            FieldKind::TaxId | FieldKind::Phone => Some(11),
            FieldKind::PostalCode => Some(8),
        }
    }
}

/// Validity classification of a formatted value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// No digits entered at all.
    Empty,
    /// Some digits entered, fewer than the field needs.
    Incomplete,
    Invalid,
    Valid,
}

impl Verdict {
    /// Resolve `Empty` against the field's required flag. An empty required
    /// field is invalid; an empty optional field passes. Non-empty verdicts
    /// are unchanged.
    pub fn with_required(self, required: bool) -> Verdict {
        match self {
            Verdict::Empty if required => Verdict::Invalid,
            Verdict::Empty => Verdict::Valid,
            other => other,
        }
    }

    pub fn is_valid(self) -> bool {
        matches!(self, Verdict::Valid)
    }
}

/// Format raw input and classify it in one step. This is the only entry point
/// the event adapters call; the masked string goes back into the widget and
/// the verdict drives the inline error state.
pub fn evaluate(raw: &str, kind: FieldKind, required: bool) -> (String, Verdict) {
    let masked = mask(raw, kind);
    let verdict = classify(&masked, kind).with_required(required);
    (masked, verdict)
}

/// Strip every non-digit character.
fn normalize(raw: &str) -> String {
    raw.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Apply the field's mask: strip non-digits, truncate at the digit cap, then
/// insert fixed punctuation. Idempotent, so re-masking a masked value is a
/// no-op.
pub fn mask(raw: &str, kind: FieldKind) -> String {
    let cap = match kind.digit_cap() {
        Some(cap) => cap,
        None => return raw.to_string(),
    };
    let mut digits = normalize(raw);
    digits.truncate(cap);
    match kind {
        FieldKind::TaxId => mask_tax_id(&digits),
        FieldKind::Phone => mask_phone(&digits),
        FieldKind::PostalCode => mask_postal_code(&digits),
        FieldKind::Text => unreachable!("text fields have no digit cap"),
    }
}

/// `DDD.DDD.DDD-DD`, separators inserted progressively as digits arrive.
fn mask_tax_id(digits: &str) -> String {
    let mut out = String::with_capacity(14);
    for (i, ch) in digits.chars().enumerate() {
        match i {
            3 | 6 => out.push('.'),
            9 => out.push('-'),
            _ => {}
        }
        out.push(ch);
    }
    out
}

/// `(DD) DDDDD-DDDD`. The dash anchors to the end of the local part, so both
/// 8- and 9-digit local numbers land on a 4-digit tail. Fewer than three
/// digits are left bare while the area code is still being typed.
fn mask_phone(digits: &str) -> String {
    if digits.len() < 3 {
        return digits.to_string();
    }
    let (area, local) = digits.split_at(2);
    let mut out = String::with_capacity(16);
    out.push('(');
    out.push_str(area);
    out.push_str(") ");
    if local.len() > 4 {
        let split = local.len() - 4;
        out.push_str(&local[..split]);
        out.push('-');
        out.push_str(&local[split..]);
    } else {
        out.push_str(local);
    }
    out
}

/// `DDDDD-DDD`.
fn mask_postal_code(digits: &str) -> String {
    if digits.len() <= 5 {
        return digits.to_string();
    }
    let (prefix, suffix) = digits.split_at(5);
    format!("{prefix}-{suffix}")
}

/// Classify a masked value against its field kind.
pub fn classify(masked: &str, kind: FieldKind) -> Verdict {
    match kind {
        FieldKind::Text => {
            if masked.trim().is_empty() {
                Verdict::Empty
            } else {
                Verdict::Valid
            }
        }
        FieldKind::TaxId => classify_tax_id(masked),
        FieldKind::Phone => classify_pattern(masked, &PHONE_PATTERN),
        FieldKind::PostalCode => classify_pattern(masked, &POSTAL_CODE_PATTERN),
    }
}

fn classify_pattern(masked: &str, pattern: &Regex) -> Verdict {
    if masked.is_empty() {
        Verdict::Empty
    } else if pattern.is_match(masked) {
        Verdict::Valid
    } else {
        Verdict::Invalid
    }
}

fn classify_tax_id(masked: &str) -> Verdict {
    let digits = normalize(masked);
    if digits.is_empty() {
        return Verdict::Empty;
    }
    if digits.len() < 11 {
        return Verdict::Incomplete;
    }
    let mut chars = digits.chars();
    let first = chars.next().unwrap_or('0');
    // Repeated-digit sequences satisfy the checksum arithmetic but are not
    // issued as real document numbers.
    if chars.all(|c| c == first) {
        return Verdict::Invalid;
    }
    if tax_id_checksum_ok(&digits) {
        Verdict::Valid
    } else {
        Verdict::Invalid
    }
}

/// Verify both weighted check digits of an 11-digit document number.
fn tax_id_checksum_ok(digits: &str) -> bool {
    let values: Vec<u32> = digits.chars().filter_map(|c| c.to_digit(10)).collect();
    if values.len() != 11 {
        return false;
    }
    check_digit(&values, 9) == values[9] && check_digit(&values, 10) == values[10]
}

/// Weighted check digit over the first `len` digits: position p (1-based)
/// weighs `len + 2 - p`, then `(sum * 10) mod 11` with 10 and 11 mapping to 0.
fn check_digit(values: &[u32], len: usize) -> u32 {
    let sum: u32 = values[..len]
        .iter()
        .enumerate()
        .map(|(i, d)| d * (len as u32 + 1 - i as u32))
        .sum();
    match (sum * 10) % 11 {
        10 | 11 => 0,
        r => r,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn tax_id_mask_is_progressive() {
        assert_eq!(mask("5", FieldKind::TaxId), "5");
        assert_eq!(mask("529", FieldKind::TaxId), "529");
        assert_eq!(mask("5299", FieldKind::TaxId), "529.9");
        assert_eq!(mask("5299822", FieldKind::TaxId), "529.982.2");
        assert_eq!(mask("5299822472", FieldKind::TaxId), "529.982.247-2");
        assert_eq!(mask("52998224725", FieldKind::TaxId), "529.982.247-25");
    }

    #[test]
    fn tax_id_mask_strips_and_truncates() {
        assert_eq!(mask("529.982.247-25", FieldKind::TaxId), "529.982.247-25");
        assert_eq!(mask("abc529x982 247/25", FieldKind::TaxId), "529.982.247-25");
        // Oversized paste keeps the leading 11 digits.
        assert_eq!(mask("529982247259999", FieldKind::TaxId), "529.982.247-25");
    }

    #[test]
    fn phone_mask_anchors_dash_to_the_end() {
        assert_eq!(mask("1", FieldKind::Phone), "1");
        assert_eq!(mask("11", FieldKind::Phone), "11");
        assert_eq!(mask("119", FieldKind::Phone), "(11) 9");
        assert_eq!(mask("1198765", FieldKind::Phone), "(11) 9-8765");
        assert_eq!(mask("1187654321", FieldKind::Phone), "(11) 8765-4321");
        assert_eq!(mask("11987654321", FieldKind::Phone), "(11) 98765-4321");
        assert_eq!(mask("119876543219", FieldKind::Phone), "(11) 98765-4321");
    }

    #[test]
    fn postal_code_mask() {
        assert_eq!(mask("01310", FieldKind::PostalCode), "01310");
        assert_eq!(mask("013101", FieldKind::PostalCode), "01310-1");
        assert_eq!(mask("01310100", FieldKind::PostalCode), "01310-100");
        assert_eq!(mask("01310-100", FieldKind::PostalCode), "01310-100");
    }

    #[test]
    fn masks_are_idempotent() {
        let cases = [
            (FieldKind::TaxId, "52998224725"),
            (FieldKind::TaxId, "5299822"),
            (FieldKind::Phone, "11987654321"),
            (FieldKind::Phone, "1198765"),
            (FieldKind::PostalCode, "01310100"),
            (FieldKind::PostalCode, "0131"),
            (FieldKind::Text, "Maria da Silva"),
        ];
        for (kind, raw) in cases {
            let once = mask(raw, kind);
            assert_eq!(mask(&once, kind), once, "re-masking {raw:?} changed it");
        }
    }

    #[test]
    fn tax_id_known_fixtures() {
        assert_eq!(classify("529.982.247-25", FieldKind::TaxId), Verdict::Valid);
        assert_eq!(classify("123.456.789-09", FieldKind::TaxId), Verdict::Valid);
        assert_eq!(
            classify("123.456.789-00", FieldKind::TaxId),
            Verdict::Invalid
        );
    }

    #[test]
    fn tax_id_rejects_repeated_digits() {
        for d in '0'..='9' {
            let raw: String = std::iter::repeat(d).take(11).collect();
            let masked = mask(&raw, FieldKind::TaxId);
            assert_eq!(classify(&masked, FieldKind::TaxId), Verdict::Invalid);
        }
    }

    #[test]
    fn tax_id_partial_is_incomplete() {
        assert_eq!(classify("", FieldKind::TaxId), Verdict::Empty);
        assert_eq!(classify("529.98", FieldKind::TaxId), Verdict::Incomplete);
        assert_eq!(
            classify("529.982.247-2", FieldKind::TaxId),
            Verdict::Incomplete
        );
    }

    #[test]
    fn tax_id_flipping_either_check_digit_invalidates() {
        // Flipping either check digit of a valid number must invalidate it.
        let (masked, verdict) = evaluate("52998224725", FieldKind::TaxId, true);
        assert_eq!(verdict, Verdict::Valid);
        assert_eq!(masked, "529.982.247-25");
        assert_eq!(
            classify("529.982.247-35", FieldKind::TaxId),
            Verdict::Invalid
        );
        assert_eq!(
            classify("529.982.247-24", FieldKind::TaxId),
            Verdict::Invalid
        );
    }

    #[test]
    fn phone_validity_follows_pattern() {
        assert_eq!(classify("(11) 98765-4321", FieldKind::Phone), Verdict::Valid);
        assert_eq!(classify("(11) 8765-4321", FieldKind::Phone), Verdict::Valid);
        // 7-digit local part leaves a 3-digit head, which the pattern rejects.
        let (masked, verdict) = evaluate("119876543", FieldKind::Phone, false);
        assert_eq!(masked, "(11) 987-6543");
        assert_eq!(verdict, Verdict::Invalid);
    }

    #[test]
    fn postal_code_validity_follows_pattern() {
        assert_eq!(
            classify("01310-100", FieldKind::PostalCode),
            Verdict::Valid
        );
        let (masked, verdict) = evaluate("0131010", FieldKind::PostalCode, false);
        assert_eq!(masked, "01310-10");
        assert_eq!(verdict, Verdict::Invalid);
    }

    #[test]
    fn empty_resolves_against_required_flag() {
        assert_eq!(evaluate("", FieldKind::Phone, false).1, Verdict::Valid);
        assert_eq!(evaluate("", FieldKind::Phone, true).1, Verdict::Invalid);
        assert_eq!(evaluate("", FieldKind::TaxId, true).1, Verdict::Invalid);
        assert_eq!(evaluate("   ", FieldKind::Text, true).1, Verdict::Invalid);
        assert_eq!(evaluate("", FieldKind::Text, false).1, Verdict::Valid);
    }

    #[test]
    fn text_fields_pass_through_unmasked() {
        let (masked, verdict) = evaluate("Maria da Silva", FieldKind::Text, true);
        assert_eq!(masked, "Maria da Silva");
        assert_eq!(verdict, Verdict::Valid);
    }
}
